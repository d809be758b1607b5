//! `embedded-hal` adapter for a single channel
//!
//! Lets drivers written against `embedded_hal::digital` traits (LED,
//! relay, button helpers) run on top of a DIO channel.

use dio_hal::{GpioBank, Level};
use embedded_hal::digital::{ErrorType, InputPin, OutputPin, StatefulOutputPin};

use crate::config::ChannelId;
use crate::diag::DiagnosticSink;
use crate::driver::Dio;
use crate::error::DioError;

/// One channel of a [`Dio`] driver, borrowed as a digital pin
pub struct ChannelPin<'d, 'cfg, B, D, const N: usize> {
    dio: &'d mut Dio<'cfg, B, D, N>,
    channel: ChannelId,
}

impl<'d, 'cfg, B, D, const N: usize> ChannelPin<'d, 'cfg, B, D, N>
where
    B: GpioBank,
    D: DiagnosticSink,
{
    pub(crate) fn new(dio: &'d mut Dio<'cfg, B, D, N>, channel: ChannelId) -> Self {
        Self { dio, channel }
    }

    /// Channel this pin drives
    pub fn channel_id(&self) -> ChannelId {
        self.channel
    }
}

impl<B, D, const N: usize> ErrorType for ChannelPin<'_, '_, B, D, N> {
    type Error = DioError;
}

impl<B, D, const N: usize> OutputPin for ChannelPin<'_, '_, B, D, N>
where
    B: GpioBank,
    D: DiagnosticSink,
{
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.dio.write_channel(self.channel, Level::Low)
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.dio.write_channel(self.channel, Level::High)
    }
}

impl<B, D, const N: usize> StatefulOutputPin for ChannelPin<'_, '_, B, D, N>
where
    B: GpioBank,
    D: DiagnosticSink,
{
    fn is_set_high(&mut self) -> Result<bool, Self::Error> {
        self.dio.read_output_level(self.channel).map(Level::is_high)
    }

    fn is_set_low(&mut self) -> Result<bool, Self::Error> {
        self.dio.read_output_level(self.channel).map(Level::is_low)
    }

    fn toggle(&mut self) -> Result<(), Self::Error> {
        self.dio.flip_channel(self.channel).map(|_| ())
    }
}

impl<B, D, const N: usize> InputPin for ChannelPin<'_, '_, B, D, N>
where
    B: GpioBank,
    D: DiagnosticSink,
{
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        self.dio.read_channel(self.channel).map(Level::is_high)
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        self.dio.read_channel(self.channel).map(Level::is_low)
    }
}
