//! Driver errors and service identifiers
//!
//! Every rejected call is both returned to the caller and reported to the
//! diagnostic sink as `(module, instance, service, code)`.

/// Errors returned by driver services
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DioError {
    /// Channel id is not in the configured table
    InvalidChannelId,
    /// Configuration absent or rejected by validation
    ParamConfig,
    /// Output record absent
    ParamPointer,
    /// Channel service called before a successful initialize
    Uninitialized,
}

impl DioError {
    /// Diagnostic error code
    pub const fn code(self) -> u8 {
        match self {
            DioError::InvalidChannelId => 0x0A,
            DioError::ParamConfig => 0x10,
            DioError::ParamPointer => 0x20,
            DioError::Uninitialized => 0xF0,
        }
    }

    /// Decode a diagnostic error code
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            0x0A => Some(DioError::InvalidChannelId),
            0x10 => Some(DioError::ParamConfig),
            0x20 => Some(DioError::ParamPointer),
            0xF0 => Some(DioError::Uninitialized),
            _ => None,
        }
    }
}

impl embedded_hal::digital::Error for DioError {
    fn kind(&self) -> embedded_hal::digital::ErrorKind {
        embedded_hal::digital::ErrorKind::Other
    }
}

/// Driver services, as reported to the diagnostic sink
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum ServiceId {
    /// Read a channel's input level
    ReadChannel = 0x00,
    /// Drive a channel's output level
    WriteChannel = 0x01,
    /// Initialize the driver
    Init = 0x10,
    /// Toggle a channel's output level
    FlipChannel = 0x11,
    /// Fill a version record
    GetVersionInfo = 0x12,
}

impl ServiceId {
    /// Get the service id as a byte value
    pub fn as_u8(self) -> u8 {
        self as u8
    }

    /// Create a service id from a byte value
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0x00 => Some(ServiceId::ReadChannel),
            0x01 => Some(ServiceId::WriteChannel),
            0x10 => Some(ServiceId::Init),
            0x11 => Some(ServiceId::FlipChannel),
            0x12 => Some(ServiceId::GetVersionInfo),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes_roundtrip() {
        for error in [
            DioError::InvalidChannelId,
            DioError::ParamConfig,
            DioError::ParamPointer,
            DioError::Uninitialized,
        ] {
            assert_eq!(DioError::from_code(error.code()), Some(error));
        }
        assert_eq!(DioError::from_code(0x00), None);
    }

    #[test]
    fn test_service_ids() {
        assert_eq!(ServiceId::ReadChannel.as_u8(), 0x00);
        assert_eq!(ServiceId::FlipChannel.as_u8(), 0x11);
        assert_eq!(ServiceId::from_u8(0x12), Some(ServiceId::GetVersionInfo));
        assert_eq!(ServiceId::from_u8(0x02), None);
    }

    #[test]
    fn test_embedded_hal_error_kind() {
        use embedded_hal::digital::{Error, ErrorKind};
        assert_eq!(DioError::Uninitialized.kind(), ErrorKind::Other);
    }
}
