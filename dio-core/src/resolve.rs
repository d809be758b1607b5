//! Pin to register resolution
//!
//! Physical pins are numbered platform-wide. A pin below [`BANK_WIDTH`]
//! lives in bank 0 at the same bit; a pin in `BANK_WIDTH..MAX_PIN_COUNT`
//! lives in bank 1 at `pin - BANK_WIDTH`. Anything else has no register.

use dio_hal::{BankId, BANK_COUNT, BANK_WIDTH};

/// Number of GPIO pins on the target
pub const MAX_PIN_COUNT: u8 = 40;

const _: () = assert!(MAX_PIN_COUNT as usize <= BANK_COUNT * BANK_WIDTH as usize);

/// Register location of a physical pin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PinLocation {
    /// Bank holding the pin
    pub bank: BankId,
    /// Bit offset within the bank's registers
    pub bit: u8,
}

impl PinLocation {
    /// Single-bit mask for this location
    pub const fn mask(&self) -> u32 {
        1 << self.bit
    }
}

/// Resolve a physical pin number to its bank and bit
///
/// Returns `None` for pins at or beyond [`MAX_PIN_COUNT`].
pub const fn resolve(pin: u8) -> Option<PinLocation> {
    if pin < BANK_WIDTH {
        Some(PinLocation {
            bank: BankId::Bank0,
            bit: pin,
        })
    } else if pin < MAX_PIN_COUNT {
        Some(PinLocation {
            bank: BankId::Bank1,
            bit: pin - BANK_WIDTH,
        })
    } else {
        None
    }
}
