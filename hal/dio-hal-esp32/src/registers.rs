//! ESP32 GPIO register map
//!
//! Addresses from the ESP32 technical reference manual, GPIO matrix
//! section. Bank 0 covers GPIO0-31, bank 1 covers GPIO32-39.

use dio_hal::BankId;

/// GPIO peripheral base address (DR_REG_GPIO_BASE)
pub const GPIO_BASE: usize = 0x3FF4_4000;

/// GPIO0-31 output register
pub const GPIO_OUT_OFFSET: usize = 0x0004;
/// GPIO0-31 output write-1-to-set
pub const GPIO_OUT_W1TS_OFFSET: usize = 0x0008;
/// GPIO0-31 output write-1-to-clear
pub const GPIO_OUT_W1TC_OFFSET: usize = 0x000C;
/// GPIO32-39 output register
pub const GPIO_OUT1_OFFSET: usize = 0x0010;
/// GPIO32-39 output write-1-to-set
pub const GPIO_OUT1_W1TS_OFFSET: usize = 0x0014;
/// GPIO32-39 output write-1-to-clear
pub const GPIO_OUT1_W1TC_OFFSET: usize = 0x0018;
/// GPIO0-31 input register
pub const GPIO_IN_OFFSET: usize = 0x003C;
/// GPIO32-39 input register
pub const GPIO_IN1_OFFSET: usize = 0x0040;

/// Absolute register addresses for one bank
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BankRegisters {
    /// Output value register (read/write)
    pub out: usize,
    /// Output write-1-to-set register
    pub out_w1ts: usize,
    /// Output write-1-to-clear register
    pub out_w1tc: usize,
    /// Input value register (read-only)
    pub input: usize,
}

impl BankRegisters {
    /// Register addresses of `bank` for a GPIO block mapped at `base`
    pub const fn at(base: usize, bank: BankId) -> Self {
        match bank {
            BankId::Bank0 => Self {
                out: base + GPIO_OUT_OFFSET,
                out_w1ts: base + GPIO_OUT_W1TS_OFFSET,
                out_w1tc: base + GPIO_OUT_W1TC_OFFSET,
                input: base + GPIO_IN_OFFSET,
            },
            BankId::Bank1 => Self {
                out: base + GPIO_OUT1_OFFSET,
                out_w1ts: base + GPIO_OUT1_W1TS_OFFSET,
                out_w1tc: base + GPIO_OUT1_W1TC_OFFSET,
                input: base + GPIO_IN1_OFFSET,
            },
        }
    }
}

/// Bank 0 registers on the ESP32
pub const BANK0: BankRegisters = BankRegisters::at(GPIO_BASE, BankId::Bank0);

/// Bank 1 registers on the ESP32
pub const BANK1: BankRegisters = BankRegisters::at(GPIO_BASE, BankId::Bank1);
