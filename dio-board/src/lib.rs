//! Reference board setup for the DIO driver
//!
//! The channel table is generated at build time from `dio.toml`:
//!
//! | Channel | Id | GPIO |
//! |---------|----|------|
//! | `LED1`  | 0  | 2    |
//! | `SW1`   | 1  | 39   |
//!
//! # Features
//!
//! - `esp32` - Wire the driver to the ESP32 GPIO registers
//! - `defmt` - Enable debug formatting support

#![no_std]

use dio_core::{ChannelConfig, ChannelId, DiagnosticSink, Dio, DioConfig, DioError, GpioBank, BANK_COUNT};

include!(concat!(env!("OUT_DIR"), "/channels.rs"));

/// Driver type for this board's channel table
pub type BoardDio<B, D> = Dio<'static, B, D, CONFIGURED_CHANNEL_COUNT>;

/// Create a driver over `banks` and install the board channel table
pub fn init<B, D>(banks: [B; BANK_COUNT], diag: D) -> Result<BoardDio<B, D>, DioError>
where
    B: GpioBank,
    D: DiagnosticSink,
{
    let mut dio = Dio::new(banks, diag);
    dio.init(Some(&DIO_CONFIG))?;
    Ok(dio)
}

/// Name of a configured channel
pub fn channel_name(channel: ChannelId) -> Option<&'static str> {
    CHANNEL_NAMES.get(usize::from(channel)).copied()
}

/// Create a driver over the ESP32 GPIO registers
///
/// # Safety
///
/// Only valid on an ESP32, with the board's pins already configured by the
/// port driver. See [`dio_hal_esp32::Esp32Bank::steal`].
#[cfg(feature = "esp32")]
pub unsafe fn init_esp32<D>(diag: D) -> Result<BoardDio<dio_hal_esp32::Esp32Bank, D>, DioError>
where
    D: DiagnosticSink,
{
    init(dio_hal_esp32::Esp32Bank::steal_all(), diag)
}

#[cfg(test)]
mod tests {
    use super::*;
    use dio_core::{BankId, DiagnosticLog, Level, MemoryBank, ServiceId};

    fn board() -> BoardDio<MemoryBank, DiagnosticLog<8>> {
        init([MemoryBank::new(), MemoryBank::new()], DiagnosticLog::new()).unwrap()
    }

    #[test]
    fn test_generated_table() {
        assert_eq!(CONFIGURED_CHANNEL_COUNT, 2);
        assert_eq!(LED1, 0);
        assert_eq!(SW1, 1);
        assert_eq!(DIO_CONFIG.channel(LED1), Some(&ChannelConfig::new(2)));
        assert_eq!(DIO_CONFIG.channel(SW1), Some(&ChannelConfig::new(39)));
        assert_eq!(DIO_CONFIG.validate(), Ok(()));
    }

    #[test]
    fn test_channel_names() {
        assert_eq!(channel_name(LED1), Some("LED1"));
        assert_eq!(channel_name(SW1), Some("SW1"));
        assert_eq!(channel_name(2), None);
    }

    #[test]
    fn test_board_scenario() {
        let mut dio = board();
        dio.bank_mut(BankId::Bank0).set_bits(0x0000_0011);
        dio.bank_mut(BankId::Bank1).set_bits(0x0000_00FF);

        // LED on: bank 0 bit 2 only
        dio.write_channel(LED1, Level::High).unwrap();
        assert_eq!(dio.bank(BankId::Bank0).output(), 0x0000_0015);
        assert_eq!(dio.bank(BankId::Bank1).output(), 0x0000_00FF);

        // SW1 low: bank 1 bit 7 (39 - 32) only
        dio.write_channel(SW1, Level::Low).unwrap();
        assert_eq!(dio.bank(BankId::Bank0).output(), 0x0000_0015);
        assert_eq!(dio.bank(BankId::Bank1).output(), 0x0000_007F);

        // LED flip from high: bank 0 bit 2 cleared
        assert_eq!(dio.flip_channel(LED1), Ok(Level::Low));
        assert_eq!(dio.bank(BankId::Bank0).output(), 0x0000_0011);
        assert_eq!(dio.bank(BankId::Bank1).output(), 0x0000_007F);

        assert!(dio.diagnostics().is_empty());
    }

    #[test]
    fn test_switch_read() {
        let mut dio = board();
        dio.bank_mut(BankId::Bank1).set_input_bit(7, Level::High);

        assert_eq!(dio.read_channel(SW1), Ok(Level::High));
        assert_eq!(dio.read_channel(LED1), Ok(Level::Low));
    }

    #[test]
    fn test_unconfigured_channel() {
        let mut dio = board();

        assert_eq!(dio.read_channel(2), Err(DioError::InvalidChannelId));
        assert!(dio
            .diagnostics()
            .contains(ServiceId::ReadChannel, DioError::InvalidChannelId));
    }
}
