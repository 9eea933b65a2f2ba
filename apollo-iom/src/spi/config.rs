use crate::time::Hertz;

/// Discrete bus clock rates the IOM hardware supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ClockFreq {
    /// 10 kHz.
    Khz10,
    /// 50 kHz.
    Khz50,
    /// 100 kHz.
    Khz100,
    /// 125 kHz.
    Khz125,
    /// 250 kHz.
    Khz250,
    /// 375 kHz.
    Khz375,
    /// 400 kHz.
    Khz400,
    /// 500 kHz.
    Khz500,
    /// 750 kHz.
    Khz750,
    /// 1 MHz.
    Mhz1,
    /// 1.5 MHz.
    Khz1500,
    /// 2 MHz.
    Mhz2,
    /// 3 MHz.
    Mhz3,
    /// 4 MHz.
    Mhz4,
    /// 6 MHz.
    Mhz6,
    /// 8 MHz.
    Mhz8,
    /// 12 MHz.
    Mhz12,
    /// 16 MHz.
    Mhz16,
    /// 24 MHz.
    Mhz24,
    /// 48 MHz.
    Mhz48,
}

impl ClockFreq {
    /// Every supported rate, fastest first.
    pub const ALL: [Self; 20] = [
        Self::Mhz48,
        Self::Mhz24,
        Self::Mhz16,
        Self::Mhz12,
        Self::Mhz8,
        Self::Mhz6,
        Self::Mhz4,
        Self::Mhz3,
        Self::Mhz2,
        Self::Khz1500,
        Self::Mhz1,
        Self::Khz750,
        Self::Khz500,
        Self::Khz400,
        Self::Khz375,
        Self::Khz250,
        Self::Khz125,
        Self::Khz100,
        Self::Khz50,
        Self::Khz10,
    ];

    /// The nominal rate of this clock.
    #[inline(always)]
    pub const fn hertz(self) -> Hertz {
        Hertz::from_raw(match self {
            Self::Khz10 => 10_000,
            Self::Khz50 => 50_000,
            Self::Khz100 => 100_000,
            Self::Khz125 => 125_000,
            Self::Khz250 => 250_000,
            Self::Khz375 => 375_000,
            Self::Khz400 => 400_000,
            Self::Khz500 => 500_000,
            Self::Khz750 => 750_000,
            Self::Mhz1 => 1_000_000,
            Self::Khz1500 => 1_500_000,
            Self::Mhz2 => 2_000_000,
            Self::Mhz3 => 3_000_000,
            Self::Mhz4 => 4_000_000,
            Self::Mhz6 => 6_000_000,
            Self::Mhz8 => 8_000_000,
            Self::Mhz12 => 12_000_000,
            Self::Mhz16 => 16_000_000,
            Self::Mhz24 => 24_000_000,
            Self::Mhz48 => 48_000_000,
        })
    }

    /// Find the fastest supported rate at or below the requested rate.
    ///
    /// Requests below the slowest supported rate return [ClockFreq::Khz10],
    /// so the bus is never clocked faster than asked for, and every
    /// request maps to some rate.
    pub fn quantize(requested: Hertz) -> Self {
        for freq in Self::ALL {
            if requested >= freq.hertz() {
                return freq;
            }
        }

        Self::Khz10
    }
}

/// Choices for clock phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Phase {
    /// Sample on the first clock edge.
    Cpha0,
    /// Sample on the second clock edge.
    Cpha1,
}

/// Choices for clock polarity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Polarity {
    /// Clock idles low.
    Cpol0,
    /// Clock idles high.
    Cpol1,
}

/// An SPI mode describing clock polarity and phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Mode {
    pub polarity: Polarity,
    pub phase: Phase,
}

impl Mode {
    /// SPI mode 0: CPOL = 0, CPHA = 0.
    pub const MODE_0: Self = Self {
        polarity: Polarity::Cpol0,
        phase: Phase::Cpha0,
    };

    /// SPI mode 1: CPOL = 0, CPHA = 1.
    pub const MODE_1: Self = Self {
        polarity: Polarity::Cpol0,
        phase: Phase::Cpha1,
    };

    /// SPI mode 2: CPOL = 1, CPHA = 0.
    pub const MODE_2: Self = Self {
        polarity: Polarity::Cpol1,
        phase: Phase::Cpha0,
    };

    /// SPI mode 3: CPOL = 1, CPHA = 1.
    pub const MODE_3: Self = Self {
        polarity: Polarity::Cpol1,
        phase: Phase::Cpha1,
    };
}

/// The configuration applied to one IOM module.
///
/// Built fresh for each [Spi](super::Spi) handle at creation time, and
/// handed to [Iom::configure](super::Iom::configure) once the module is
/// powered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    /// The bus clock rate.
    pub clock: ClockFreq,
    /// Clock polarity and phase.
    pub mode: Mode,
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::time::RateExtU32;

    use quickcheck_macros::quickcheck;

    #[test]
    fn quantize_boundaries() {
        assert_eq!(ClockFreq::Mhz4, ClockFreq::quantize(4_000_000u32.Hz()));
        assert_eq!(ClockFreq::Mhz3, ClockFreq::quantize(3_999_999u32.Hz()));
        assert_eq!(ClockFreq::Mhz48, ClockFreq::quantize(48_000_000u32.Hz()));
        assert_eq!(ClockFreq::Mhz48, ClockFreq::quantize(u32::MAX.Hz()));
        assert_eq!(ClockFreq::Khz50, ClockFreq::quantize(50_000u32.Hz()));
        assert_eq!(ClockFreq::Khz10, ClockFreq::quantize(49_999u32.Hz()));
    }

    #[test]
    fn quantize_below_slowest() {
        for hz in [0u32, 1, 9_999] {
            assert_eq!(ClockFreq::Khz10, ClockFreq::quantize(hz.Hz()));
        }
    }

    #[test]
    fn quantize_is_identity_on_tiers() {
        for freq in ClockFreq::ALL {
            assert_eq!(freq, ClockFreq::quantize(freq.hertz()));
        }
    }

    #[quickcheck]
    fn quantize_never_exceeds_request(requested: u32) -> bool {
        let freq = ClockFreq::quantize(requested.Hz());
        freq == ClockFreq::Khz10 || freq.hertz().raw() <= requested
    }

    #[quickcheck]
    fn quantize_total(requested: u32) -> bool {
        ClockFreq::ALL.contains(&ClockFreq::quantize(requested.Hz()))
    }
}
