//! Board-agnostic DIO channel driver
//!
//! This crate contains the channel-level digital I/O logic that does not
//! depend on a specific chip:
//!
//! - Channel configuration table and its validation
//! - Channel to bank/bit resolution
//! - The [`Dio`] driver handle (initialize, write, read, flip)
//! - Diagnostic reporting of rejected calls
//! - Version information
//! - `embedded-hal` pin adapter for a single channel
//!
//! Register access goes through [`dio_hal::GpioBank`], so everything here
//! runs on the host against [`dio_hal::MemoryBank`].

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod config;
pub mod diag;
pub mod driver;
pub mod error;
pub mod pin;
pub mod resolve;
pub mod version;

pub use config::{ChannelConfig, ChannelId, ConfigError, DioConfig};
pub use diag::{DiagnosticLog, DiagnosticReport, DiagnosticSink, NoDiagnostics};
pub use driver::{Dio, DioStatus};
pub use error::{DioError, ServiceId};
pub use pin::ChannelPin;
pub use resolve::{resolve, PinLocation, MAX_PIN_COUNT};
pub use version::VersionInfo;

// Re-export the HAL types the driver API is written in
pub use dio_hal::{BankId, GpioBank, Level, MemoryBank, BANK_COUNT, BANK_WIDTH};
