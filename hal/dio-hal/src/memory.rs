//! In-memory GPIO bank
//!
//! Plain words standing in for the output and input registers. Used for
//! host-side testing and for boards where a bank is emulated in RAM.

use crate::bank::{bit_mask, GpioBank};
use crate::Level;

/// GPIO bank backed by two words
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MemoryBank {
    output: u32,
    input: u32,
    /// If true, the input word mirrors the output word
    loopback: bool,
    /// Number of `set_bits`/`clear_bits` calls seen
    mutations: u32,
}

impl MemoryBank {
    /// Create a bank with every output and input bit low
    pub const fn new() -> Self {
        Self {
            output: 0,
            input: 0,
            loopback: false,
            mutations: 0,
        }
    }

    /// Create a bank whose input register reads back the output register
    pub const fn loopback() -> Self {
        Self {
            output: 0,
            input: 0,
            loopback: true,
            mutations: 0,
        }
    }

    /// Create a bank with preset register words
    pub const fn with_words(output: u32, input: u32) -> Self {
        Self {
            output,
            input,
            loopback: false,
            mutations: 0,
        }
    }

    /// Overwrite the input word (simulates external pad levels)
    pub fn set_input(&mut self, word: u32) {
        self.input = word;
    }

    /// Drive a single simulated input pad
    pub fn set_input_bit(&mut self, bit: u8, level: Level) {
        match level {
            Level::High => self.input |= bit_mask(bit),
            Level::Low => self.input &= !bit_mask(bit),
        }
    }

    /// Number of register writes performed so far
    pub fn mutations(&self) -> u32 {
        self.mutations
    }
}

impl GpioBank for MemoryBank {
    fn output(&self) -> u32 {
        self.output
    }

    fn input(&self) -> u32 {
        if self.loopback {
            self.output
        } else {
            self.input
        }
    }

    fn set_bits(&mut self, mask: u32) {
        self.output |= mask;
        self.mutations = self.mutations.saturating_add(1);
    }

    fn clear_bits(&mut self, mask: u32) {
        self.output &= !mask;
        self.mutations = self.mutations.saturating_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_new_bank_is_low() {
        let bank = MemoryBank::new();
        assert_eq!(bank.output(), 0);
        assert_eq!(bank.input(), 0);
        assert_eq!(bank.mutations(), 0);
    }

    #[test]
    fn test_input_independent_of_output() {
        let mut bank = MemoryBank::new();
        bank.set_bits(0xFFFF_FFFF);
        assert_eq!(bank.input(), 0);

        bank.set_input_bit(4, Level::High);
        assert_eq!(bank.input_bit(4), Level::High);
        assert_eq!(bank.input(), 1 << 4);

        bank.set_input_bit(4, Level::Low);
        assert_eq!(bank.input(), 0);
    }

    #[test]
    fn test_loopback_mirrors_output() {
        let mut bank = MemoryBank::loopback();
        bank.set_bit(9);
        assert_eq!(bank.input_bit(9), Level::High);
        bank.clear_bit(9);
        assert_eq!(bank.input_bit(9), Level::Low);
    }

    #[test]
    fn test_mutations_counted() {
        let mut bank = MemoryBank::with_words(0xF0, 0);
        bank.set_bit(0);
        bank.clear_bit(4);
        assert_eq!(bank.output(), 0xE1);
        assert_eq!(bank.mutations(), 2);
    }

    proptest! {
        #[test]
        fn prop_set_clear_touch_only_their_bit(initial in any::<u32>(), bit in 0u8..32) {
            let mut bank = MemoryBank::with_words(initial, 0);
            bank.set_bit(bit);
            prop_assert_eq!(bank.output(), initial | (1 << bit));

            let mut bank = MemoryBank::with_words(initial, 0);
            bank.clear_bit(bit);
            prop_assert_eq!(bank.output(), initial & !(1 << bit));
        }
    }
}
