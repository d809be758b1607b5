//! Memory-mapped GPIO bank
//!
//! Set and clear go through the write-1-to-set/clear registers, so each
//! is a single store that leaves the other bits of the bank alone. No
//! read-modify-write happens on the output register, which keeps writes
//! to different pins of one bank safe from interrupt context.

use core::ptr::{read_volatile, write_volatile};

use dio_hal::{BankId, GpioBank, BANK_COUNT};

use crate::registers::{BankRegisters, BANK0, BANK1};

/// GPIO bank backed by the ESP32 GPIO registers
#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Esp32Bank {
    regs: BankRegisters,
}

impl Esp32Bank {
    /// Create a bank over arbitrary register addresses
    ///
    /// # Safety
    ///
    /// Every address in `regs` must be valid for aligned volatile `u32`
    /// access for as long as the bank is used.
    pub const unsafe fn from_registers(regs: BankRegisters) -> Self {
        Self { regs }
    }

    /// Get a handle to one of the ESP32 GPIO banks
    ///
    /// # Safety
    ///
    /// Only valid on an ESP32. Handles are not tracked, so the caller is
    /// responsible for not racing flips on the same pin from two contexts.
    pub unsafe fn steal(bank: BankId) -> Self {
        match bank {
            BankId::Bank0 => Self::from_registers(BANK0),
            BankId::Bank1 => Self::from_registers(BANK1),
        }
    }

    /// Get handles to every ESP32 GPIO bank, in pin order
    ///
    /// # Safety
    ///
    /// See [`Esp32Bank::steal`].
    pub unsafe fn steal_all() -> [Self; BANK_COUNT] {
        [Self::steal(BankId::Bank0), Self::steal(BankId::Bank1)]
    }

    /// Register addresses used by this bank
    pub fn registers(&self) -> BankRegisters {
        self.regs
    }

    #[inline(always)]
    fn read(addr: usize) -> u32 {
        // SAFETY: addresses were vouched for at construction
        unsafe { read_volatile(addr as *const u32) }
    }

    #[inline(always)]
    fn write(addr: usize, value: u32) {
        // SAFETY: addresses were vouched for at construction
        unsafe { write_volatile(addr as *mut u32, value) }
    }
}

impl GpioBank for Esp32Bank {
    fn output(&self) -> u32 {
        Self::read(self.regs.out)
    }

    fn input(&self) -> u32 {
        Self::read(self.regs.input)
    }

    fn set_bits(&mut self, mask: u32) {
        Self::write(self.regs.out_w1ts, mask);
    }

    fn clear_bits(&mut self, mask: u32) {
        Self::write(self.regs.out_w1tc, mask);
    }
}
