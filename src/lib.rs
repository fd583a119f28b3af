//! TPS25730 Rust Driver
//!
//! `no_std` driver for the TPS25730 USB-PD controller: a codec for the sink/source
//! capabilities register block and a sequencer that overrides the maximum voltage of a
//! Variable PDO, then asks the controller to re-advertise with the "GSrC" 4CC command.
//! Blocking API by default; async mirror behind the `async` feature, `defmt` logging optional.

#![no_std]

pub mod data_types;
pub mod driver;
pub mod error;
pub mod pdo;
pub mod registers;
pub mod sequencer;

pub use driver::Tps25730;
pub use error::Error;
pub use registers::DEFAULT_I2C_ADDRESS;
pub use sequencer::VoltageOverride;
