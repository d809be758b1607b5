//! GPIO bank abstractions
//!
//! The target splits its GPIOs across several register banks because the
//! output and input registers are only one word wide. A bank covers
//! [`BANK_WIDTH`] consecutive pins, bank `n` starting at pin
//! `n * BANK_WIDTH`.

use crate::Level;

/// Pins covered by one bank (native register width)
pub const BANK_WIDTH: u8 = 32;

/// Number of banks on the target
pub const BANK_COUNT: usize = 2;

/// Register bank identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum BankId {
    /// Pins 0-31
    Bank0 = 0,
    /// Pins 32 and up
    Bank1 = 1,
}

impl BankId {
    /// All banks in pin order
    pub const ALL: [BankId; BANK_COUNT] = [BankId::Bank0, BankId::Bank1];

    /// Position of this bank in a `[_; BANK_COUNT]` array
    pub const fn index(self) -> usize {
        self as usize
    }

    /// First pin number served by this bank
    pub const fn first_pin(self) -> u8 {
        self as u8 * BANK_WIDTH
    }

    /// Create a bank id from an array index
    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(BankId::Bank0),
            1 => Some(BankId::Bank1),
            _ => None,
        }
    }
}

/// Mask with only `bit` set
///
/// `bit` must be below [`BANK_WIDTH`].
#[inline]
pub const fn bit_mask(bit: u8) -> u32 {
    debug_assert!(bit < BANK_WIDTH);
    1 << bit
}

/// One GPIO register bank
///
/// Implementations should handle the actual register access for the
/// specific chip. `set_bits`/`clear_bits` only touch the bits present in
/// `mask`; whether that is a single store or a read-modify-write is up to
/// the hardware.
pub trait GpioBank {
    /// Read the output register (last commanded levels)
    fn output(&self) -> u32;

    /// Read the input register (sampled pad levels)
    fn input(&self) -> u32;

    /// Drive every pin in `mask` high
    fn set_bits(&mut self, mask: u32);

    /// Drive every pin in `mask` low
    fn clear_bits(&mut self, mask: u32);

    /// Drive a single bit high
    #[inline]
    fn set_bit(&mut self, bit: u8) {
        self.set_bits(bit_mask(bit));
    }

    /// Drive a single bit low
    #[inline]
    fn clear_bit(&mut self, bit: u8) {
        self.clear_bits(bit_mask(bit));
    }

    /// Drive a single bit to `level`
    fn write_bit(&mut self, bit: u8, level: Level) {
        match level {
            Level::High => self.set_bit(bit),
            Level::Low => self.clear_bit(bit),
        }
    }

    /// Commanded level of a single output bit
    #[inline]
    fn output_bit(&self, bit: u8) -> Level {
        Level::from_bit(self.output(), bit)
    }

    /// Sampled level of a single input bit
    #[inline]
    fn input_bit(&self, bit: u8) -> Level {
        Level::from_bit(self.input(), bit)
    }
}

impl<B: GpioBank + ?Sized> GpioBank for &mut B {
    fn output(&self) -> u32 {
        (**self).output()
    }

    fn input(&self) -> u32 {
        (**self).input()
    }

    fn set_bits(&mut self, mask: u32) {
        (**self).set_bits(mask);
    }

    fn clear_bits(&mut self, mask: u32) {
        (**self).clear_bits(mask);
    }
}
