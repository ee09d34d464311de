#![cfg_attr(not(test), no_std)]
#![doc = "Driver for 64 Mbit (8 MiB) SPI PSRAM such as the ESP-PSRAM64H / APS6404L."]
#![doc = ""]
#![doc = "Single-byte random access over an `embedded-hal` 1.0 SPI bus with a"]
#![doc = "dedicated chip-select pin. Construction performs the device reset sequence."]

// This mod MUST go first, so that the others see its macros.
pub(crate) mod fmt;

pub mod address;
pub mod blocking;
mod command;
pub mod config;
pub mod error;

pub use address::{Address, AddressOutOfRange, CAPACITY_BYTES};
pub use blocking::{Psram, PsramError};
pub use command::Command;
pub use config::Config;
pub use error::Error;
