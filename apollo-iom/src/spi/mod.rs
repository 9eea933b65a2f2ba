//! Interfaces for SPI over an IO Master module.

mod bus;
pub use bus::*;

mod chip_select;
pub use chip_select::*;

mod config;
pub use config::*;

mod hal;
pub use hal::*;

mod transfer;
pub use transfer::*;
