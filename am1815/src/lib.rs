//! A driver for the Ambiq AM1815 SPI real time clock.
//!
//! The RTC sits on an [apollo_iom] SPI bus, which should be awake and
//! have the RTC's chip select line selected before any of the calls
//! here are made.

#![no_std]

#[cfg(test)]
extern crate std;

pub mod registers;

use apollo_iom::spi::{self, Board, Iom, Spi};

use crate::registers::{decode_bcd, encode_bcd};

/// An error produced by the RTC interface.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// SPI bus error.
    Bus(spi::Error<E>),
}

impl<E> From<spi::Error<E>> for Error<E> {
    fn from(other: spi::Error<E>) -> Self {
        Self::Bus(other)
    }
}

/// A calendar time as the RTC counts it.
///
/// All fields are plain decimal. The year counts 0 through 99; the
/// century is the caller's problem, as it is the hardware's.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Time {
    /// Hundredths of a second, 0-99.
    pub hundredths: u8,
    /// Seconds, 0-59.
    pub seconds: u8,
    /// Minutes, 0-59.
    pub minutes: u8,
    /// Hours, 0-23.
    pub hours: u8,
    /// Day of month, 1-31.
    pub date: u8,
    /// Month, 1-12.
    pub month: u8,
    /// Year, 0-99.
    pub year: u8,
    /// Day of week, 0-6.
    pub weekday: u8,
}

impl Time {
    /// Decode the eight counter registers, starting at
    /// [registers::HUNDREDTHS].
    fn from_counters(raw: &[u8; 8]) -> Self {
        Self {
            hundredths: decode_bcd(raw[0]),
            seconds: decode_bcd(raw[1] & registers::SECONDS_MASK),
            minutes: decode_bcd(raw[2] & registers::MINUTES_MASK),
            hours: decode_bcd(raw[3] & registers::HOURS_MASK),
            date: decode_bcd(raw[4] & registers::DATE_MASK),
            month: decode_bcd(raw[5] & registers::MONTHS_MASK),
            year: decode_bcd(raw[6]),
            weekday: raw[7] & registers::WEEKDAYS_MASK,
        }
    }

    /// Decode the seven alarm registers, starting at
    /// [registers::ALARM_HUNDREDTHS]. The alarm carries no year, so it
    /// reads as 0.
    fn from_alarm(raw: &[u8; 7]) -> Self {
        Self {
            hundredths: decode_bcd(raw[0]),
            seconds: decode_bcd(raw[1] & registers::SECONDS_MASK),
            minutes: decode_bcd(raw[2] & registers::MINUTES_MASK),
            hours: decode_bcd(raw[3] & registers::HOURS_MASK),
            date: decode_bcd(raw[4] & registers::DATE_MASK),
            month: decode_bcd(raw[5] & registers::MONTHS_MASK),
            year: 0,
            weekday: raw[6] & registers::WEEKDAYS_MASK,
        }
    }

    /// Encode into the seven alarm registers. The year is dropped, as
    /// the alarm has none.
    fn to_alarm(self) -> [u8; 7] {
        [
            encode_bcd(self.hundredths),
            encode_bcd(self.seconds),
            encode_bcd(self.minutes),
            encode_bcd(self.hours),
            encode_bcd(self.date),
            encode_bcd(self.month),
            self.weekday & registers::WEEKDAYS_MASK,
        ]
    }
}

/// An interface to the AM1815 over an SPI bus it owns.
#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Am1815<I, B> {
    spi: Spi<I, B>,
}

impl<I, B> Am1815<I, B>
where
    I: Iom,
    B: Board,
{
    /// Create the interface over an already configured bus.
    pub fn new(spi: Spi<I, B>) -> Self {
        Self { spi }
    }

    /// Release the bus used by this interface.
    pub fn free(self) -> Spi<I, B> {
        self.spi
    }

    /// The underlying bus, for power and chip select management.
    #[inline(always)]
    pub fn spi(&mut self) -> &mut Spi<I, B> {
        &mut self.spi
    }

    /// Read a single register.
    pub fn read_register(&mut self, address: u8) -> Result<u8, Error<I::Error>> {
        let mut value = [0];
        self.spi
            .cmd_read(address & registers::ADDRESS_MASK, &mut value)?;
        Ok(value[0])
    }

    /// Write a single register.
    pub fn write_register(&mut self, address: u8, value: u8) -> Result<(), Error<I::Error>> {
        self.spi
            .cmd_write(address | registers::WRITE_BIT, &[value])?;
        Ok(())
    }

    /// Read the current time.
    ///
    /// The counters are read in one burst, so the values are coherent:
    /// the hardware latches them together on the first access.
    pub fn read_time(&mut self) -> Result<Time, Error<I::Error>> {
        let mut raw = [0; 8];
        self.spi.cmd_read(registers::HUNDREDTHS, &mut raw)?;
        Ok(Time::from_counters(&raw))
    }

    /// Read the alarm time. The alarm has no year field, so the
    /// returned year is 0.
    pub fn read_alarm(&mut self) -> Result<Time, Error<I::Error>> {
        let mut raw = [0; 7];
        self.spi.cmd_read(registers::ALARM_HUNDREDTHS, &mut raw)?;
        Ok(Time::from_alarm(&raw))
    }

    /// Set the alarm time. The year field is ignored.
    pub fn write_alarm(&mut self, time: &Time) -> Result<(), Error<I::Error>> {
        let raw = time.to_alarm();
        self.spi
            .cmd_write(registers::ALARM_HUNDREDTHS | registers::WRITE_BIT, &raw)?;
        Ok(())
    }

    /// Enable trickle charging of the backup battery, with a standard
    /// diode and a 3 kOhm series resistor.
    pub fn enable_trickle(&mut self) -> Result<(), Error<I::Error>> {
        self.unlock_trickle()?;
        self.write_register(registers::TRICKLE, registers::TRICKLE_ENABLE)
    }

    /// Disable trickle charging of the backup battery.
    pub fn disable_trickle(&mut self) -> Result<(), Error<I::Error>> {
        self.unlock_trickle()?;
        self.write_register(registers::TRICKLE, registers::TRICKLE_DISABLE)
    }

    /// The trickle register ignores writes until the key is presented.
    fn unlock_trickle(&mut self) -> Result<(), Error<I::Error>> {
        self.write_register(registers::CONFIGURATION_KEY, registers::KEY_REGISTER_ACCESS)
    }
}
