//! A blocking SPI driver layer for Apollo-family IO Master (IOM)
//! peripherals.
//!
//! The hardware transfer engine and the board pin routing are consumed
//! through the [spi::Iom] and [spi::Board] traits, so this crate stays
//! independent of any particular vendor HAL binding.

#![no_std]

#[cfg(test)]
extern crate std;

pub mod spi;
pub mod time;
