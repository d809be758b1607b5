//! DIO channel driver
//!
//! [`Dio`] owns the GPIO banks and a diagnostic sink and borrows the
//! channel table once initialized. Every channel service runs the same
//! steps:
//!
//! 1. Guard: reject if not initialized, reject if the channel id is past
//!    the configured count. Both conditions are reported when both hold.
//! 2. Look up the channel's pin and resolve it to a bank and bit.
//! 3. Touch only that bit of that bank.
//!
//! A rejected call performs no register access. It returns the error, and
//! the `*_or_low` variants turn that into the safe default level.

use dio_hal::{BankId, GpioBank, Level, BANK_COUNT};

use crate::config::{ChannelId, DioConfig};
use crate::diag::DiagnosticSink;
use crate::error::{DioError, ServiceId};
use crate::pin::ChannelPin;
use crate::resolve::{resolve, PinLocation};
use crate::version::{VersionInfo, DIO_INSTANCE_ID, DIO_MODULE_ID};

/// Driver lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DioStatus {
    /// No channel table yet; channel services are rejected
    NotInitialized,
    /// Channel table installed
    Initialized,
}

/// DIO channel driver
///
/// Generic parameters:
/// - `B`: register bank implementing [`GpioBank`]
/// - `D`: diagnostic sink
/// - `N`: configured channel count
pub struct Dio<'cfg, B, D, const N: usize> {
    banks: [B; BANK_COUNT],
    diag: D,
    config: Option<&'cfg DioConfig<N>>,
}

impl<'cfg, B, D, const N: usize> Dio<'cfg, B, D, N>
where
    B: GpioBank,
    D: DiagnosticSink,
{
    /// Create an uninitialized driver over `banks` (in pin order)
    pub const fn new(banks: [B; BANK_COUNT], diag: D) -> Self {
        Self {
            banks,
            diag,
            config: None,
        }
    }

    /// Install the channel table
    ///
    /// `None` or a table with an out-of-range pin is reported as
    /// [`DioError::ParamConfig`] and leaves the driver as it was. Calling
    /// again with a valid table replaces the previous one.
    pub fn init(&mut self, config: Option<&'cfg DioConfig<N>>) -> Result<(), DioError> {
        let Some(config) = config else {
            return Err(self.report(ServiceId::Init, DioError::ParamConfig));
        };

        if let Err(_e) = config.validate() {
            #[cfg(feature = "defmt")]
            defmt::warn!("dio: channel table rejected: {}", _e);
            return Err(self.report(ServiceId::Init, DioError::ParamConfig));
        }

        self.config = Some(config);

        #[cfg(feature = "defmt")]
        defmt::info!("dio: initialized with {} channels", N);

        Ok(())
    }

    /// Current lifecycle state
    pub fn status(&self) -> DioStatus {
        if self.is_initialized() {
            DioStatus::Initialized
        } else {
            DioStatus::NotInitialized
        }
    }

    /// Check if a channel table is installed
    pub fn is_initialized(&self) -> bool {
        self.config.is_some()
    }

    /// Drive a channel's output to `level`
    pub fn write_channel(&mut self, channel: ChannelId, level: Level) -> Result<(), DioError> {
        if let Some(loc) = self.locate(ServiceId::WriteChannel, channel)? {
            self.banks[loc.bank.index()].write_bit(loc.bit, level);
        }
        Ok(())
    }

    /// Read a channel's input level
    pub fn read_channel(&mut self, channel: ChannelId) -> Result<Level, DioError> {
        let level = match self.locate(ServiceId::ReadChannel, channel)? {
            Some(loc) => self.banks[loc.bank.index()].input_bit(loc.bit),
            None => Level::Low,
        };
        Ok(level)
    }

    /// Toggle a channel's output and return the new level
    ///
    /// The toggle is based on the output register (last commanded level),
    /// not the input pad. Read and write hit the same resolved bank.
    /// Not atomic: callers flipping one channel from two contexts must
    /// serialize themselves.
    pub fn flip_channel(&mut self, channel: ChannelId) -> Result<Level, DioError> {
        let level = match self.locate(ServiceId::FlipChannel, channel)? {
            Some(loc) => {
                let bank = &mut self.banks[loc.bank.index()];
                let next = !bank.output_bit(loc.bit);
                bank.write_bit(loc.bit, next);
                next
            }
            None => Level::Low,
        };
        Ok(level)
    }

    /// Last commanded output level of a channel
    ///
    /// Rejections are reported under the read service.
    pub fn read_output_level(&mut self, channel: ChannelId) -> Result<Level, DioError> {
        let level = match self.locate(ServiceId::ReadChannel, channel)? {
            Some(loc) => self.banks[loc.bank.index()].output_bit(loc.bit),
            None => Level::Low,
        };
        Ok(level)
    }

    /// [`Dio::read_channel`], with rejected calls reading low
    pub fn read_channel_or_low(&mut self, channel: ChannelId) -> Level {
        self.read_channel(channel).unwrap_or_default()
    }

    /// [`Dio::flip_channel`], with rejected calls reading low
    pub fn flip_channel_or_low(&mut self, channel: ChannelId) -> Level {
        self.flip_channel(channel).unwrap_or_default()
    }

    /// Fill `out` with this driver's version
    pub fn get_version_info(&mut self, out: Option<&mut VersionInfo>) -> Result<(), DioError> {
        match out {
            Some(info) => {
                *info = VersionInfo::CURRENT;
                Ok(())
            }
            None => Err(self.report(ServiceId::GetVersionInfo, DioError::ParamPointer)),
        }
    }

    /// Borrow one channel as an `embedded-hal` pin
    ///
    /// The id is not checked here; every pin operation goes through the
    /// normal guards.
    pub fn channel(&mut self, channel: ChannelId) -> ChannelPin<'_, 'cfg, B, D, N> {
        ChannelPin::new(self, channel)
    }

    /// Installed channel table
    pub fn config(&self) -> Option<&'cfg DioConfig<N>> {
        self.config
    }

    /// Borrow a bank
    pub fn bank(&self, bank: BankId) -> &B {
        &self.banks[bank.index()]
    }

    /// Mutably borrow a bank
    pub fn bank_mut(&mut self, bank: BankId) -> &mut B {
        &mut self.banks[bank.index()]
    }

    /// Borrow the diagnostic sink
    pub fn diagnostics(&self) -> &D {
        &self.diag
    }

    /// Tear down the driver, returning the banks and the sink
    pub fn release(self) -> ([B; BANK_COUNT], D) {
        (self.banks, self.diag)
    }

    /// Run the guards and resolve `channel` to a register location
    ///
    /// `Ok(None)` means the channel's pin has no register; the caller
    /// performs no access. [`Dio::init`] rejects tables with such pins, so
    /// this only happens if that check and [`resolve`] ever disagree.
    fn locate(
        &mut self,
        service: ServiceId,
        channel: ChannelId,
    ) -> Result<Option<PinLocation>, DioError> {
        let in_range = usize::from(channel) < N;

        if self.config.is_none() {
            self.report(service, DioError::Uninitialized);
        }
        if !in_range {
            self.report(service, DioError::InvalidChannelId);
        }

        let config = self.config.ok_or(DioError::Uninitialized)?;
        let entry = config
            .channel(channel)
            .ok_or(DioError::InvalidChannelId)?;

        let loc = resolve(entry.pin_number);
        if loc.is_none() {
            #[cfg(feature = "defmt")]
            defmt::debug!(
                "dio: channel {} pin {} has no register",
                channel,
                entry.pin_number
            );
        }
        Ok(loc)
    }

    /// Report `error` to the diagnostic sink and hand it back
    fn report(&mut self, service: ServiceId, error: DioError) -> DioError {
        #[cfg(feature = "defmt")]
        defmt::warn!("dio: {} rejected: {}", service, error);

        self.diag
            .report_error(DIO_MODULE_ID, DIO_INSTANCE_ID, service.as_u8(), error.code());
        error
    }
}
