//! Channel configuration types
//!
//! The channel table maps each logical channel (its index) to a physical
//! pin. It lives in caller-owned static storage; the driver only borrows it.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::resolve::MAX_PIN_COUNT;

/// Logical channel identifier (index into the channel table)
pub type ChannelId = u8;

/// Largest table a [`ChannelId`] can address
pub const MAX_CHANNELS: usize = ChannelId::MAX as usize + 1;

/// One channel configuration entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ChannelConfig {
    /// Physical GPIO number (0-39 on ESP32)
    pub pin_number: u8,
}

impl ChannelConfig {
    /// Create a channel entry for `pin_number`
    pub const fn new(pin_number: u8) -> Self {
        Self { pin_number }
    }
}

/// Errors found while validating a channel table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// More entries than a channel id can address
    TooManyChannels {
        /// Number of entries in the table
        count: usize,
    },
    /// Entry maps to a pin the target does not have
    PinOutOfRange {
        /// Offending channel
        channel: ChannelId,
        /// Configured pin number
        pin: u8,
    },
}

/// Channel configuration table
///
/// `N` is the configured channel count, fixed at compile time.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DioConfig<const N: usize> {
    channels: [ChannelConfig; N],
}

impl<const N: usize> DioConfig<N> {
    /// Configured channel count
    pub const CHANNEL_COUNT: usize = N;

    /// Create a configuration from a channel table
    pub const fn new(channels: [ChannelConfig; N]) -> Self {
        Self { channels }
    }

    /// Number of configured channels
    pub const fn channel_count(&self) -> usize {
        N
    }

    /// Look up a channel entry
    pub fn channel(&self, id: ChannelId) -> Option<&ChannelConfig> {
        self.channels.get(usize::from(id))
    }

    /// All channel entries, indexed by channel id
    pub fn channels(&self) -> &[ChannelConfig] {
        &self.channels
    }

    /// Check the table against the target's pin range
    ///
    /// Reports the first offending entry.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if N > MAX_CHANNELS {
            return Err(ConfigError::TooManyChannels { count: N });
        }

        for (index, entry) in self.channels.iter().enumerate() {
            if entry.pin_number >= MAX_PIN_COUNT {
                return Err(ConfigError::PinOutOfRange {
                    // Fits: N <= MAX_CHANNELS was checked above
                    channel: index as ChannelId,
                    pin: entry.pin_number,
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_lookup() {
        let config = DioConfig::new([ChannelConfig::new(2), ChannelConfig::new(39)]);

        assert_eq!(config.channel_count(), 2);
        assert_eq!(DioConfig::<2>::CHANNEL_COUNT, 2);
        assert_eq!(config.channel(0), Some(&ChannelConfig::new(2)));
        assert_eq!(config.channel(1).map(|c| c.pin_number), Some(39));
        assert_eq!(config.channel(2), None);
    }

    #[test]
    fn test_validate_accepts_full_range() {
        let config = DioConfig::new([ChannelConfig::new(0), ChannelConfig::new(MAX_PIN_COUNT - 1)]);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_validate_rejects_pin_past_range() {
        let config = DioConfig::new([
            ChannelConfig::new(2),
            ChannelConfig::new(5),
            ChannelConfig::new(MAX_PIN_COUNT),
        ]);

        assert_eq!(
            config.validate(),
            Err(ConfigError::PinOutOfRange {
                channel: 2,
                pin: MAX_PIN_COUNT
            })
        );
    }

    #[test]
    fn test_empty_table_is_valid() {
        let config = DioConfig::<0>::new([]);
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.channel(0), None);
    }

    #[test]
    fn test_oversized_table_rejected() {
        let config = DioConfig::new([ChannelConfig::new(0); MAX_CHANNELS + 1]);
        assert_eq!(
            config.validate(),
            Err(ConfigError::TooManyChannels {
                count: MAX_CHANNELS + 1
            })
        );
    }
}
