//! ESP32-specific HAL for the DIO channel driver
//!
//! This crate provides the ESP32 implementation of the shared
//! `dio-hal` traits:
//!
//! - GPIO register map (output, write-1-to-set/clear, input)
//! - `Esp32Bank`, a `GpioBank` over the memory-mapped registers
//!
//! # Usage
//!
//! Pin direction and IO_MUX routing are owned by the port configuration
//! code; this crate only drives and samples pins that are already set up.

#![no_std]

pub mod bank;
pub mod registers;

pub use bank::Esp32Bank;
// Re-export shared types from dio-hal
pub use dio_hal::{BankId, GpioBank, BANK_COUNT};
