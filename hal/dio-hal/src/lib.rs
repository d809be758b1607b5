//! DIO Hardware Abstraction Layer
//!
//! This crate defines the register-level traits the DIO channel driver
//! is written against. Chip-specific crates implement them over their
//! memory-mapped GPIO registers, which keeps the channel logic testable
//! on the host against plain in-memory words.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Board / application (dio-board, etc.)  │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  dio-core (channel driver)              │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  dio-hal (this crate - traits)          │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │ dio-hal-esp32 │       │  MemoryBank   │
//! │  (MMIO)       │       │  (host/tests) │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`bank::GpioBank`] - One output + one input register word

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod bank;
pub mod level;
pub mod memory;

// Re-export key types at crate root for convenience
pub use bank::{bit_mask, BankId, GpioBank, BANK_COUNT, BANK_WIDTH};
pub use level::Level;
pub use memory::MemoryBank;
