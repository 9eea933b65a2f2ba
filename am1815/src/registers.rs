//! Register addresses and fields of the AM1815.
//!
//! Counter registers hold binary coded decimal; the unused upper bits
//! of each counter read back undefined and need masking.

/// Hundredths of a second counter.
pub const HUNDREDTHS: u8 = 0x00;
/// Seconds counter.
pub const SECONDS: u8 = 0x01;
/// Minutes counter.
pub const MINUTES: u8 = 0x02;
/// Hours counter, in 24 hour mode.
pub const HOURS: u8 = 0x03;
/// Day of month counter.
pub const DATE: u8 = 0x04;
/// Month counter.
pub const MONTHS: u8 = 0x05;
/// Year counter, 0 through 99.
pub const YEARS: u8 = 0x06;
/// Day of week counter.
pub const WEEKDAYS: u8 = 0x07;

/// First alarm register; the alarm block mirrors the counters through
/// [ALARM_WEEKDAYS], with no year.
pub const ALARM_HUNDREDTHS: u8 = 0x08;
/// Last alarm register.
pub const ALARM_WEEKDAYS: u8 = 0x0e;

/// Configuration key register, gating access to the analog control
/// registers.
pub const CONFIGURATION_KEY: u8 = 0x1f;
/// Trickle charger control.
pub const TRICKLE: u8 = 0x20;

/// Writing this key to [CONFIGURATION_KEY] unlocks [TRICKLE].
pub const KEY_REGISTER_ACCESS: u8 = 0x9d;
/// Trickle charging enabled: TCS = 0b1010, standard diode, 3 kOhm
/// series resistor.
pub const TRICKLE_ENABLE: u8 = 0xa5;
/// Trickle charging disabled.
pub const TRICKLE_DISABLE: u8 = 0x00;

/// SPI register addresses are 7 bits.
pub const ADDRESS_MASK: u8 = 0x7f;
/// Set on the address byte of a write transfer.
pub const WRITE_BIT: u8 = 0x80;

/// Valid bits of [SECONDS].
pub const SECONDS_MASK: u8 = 0x7f;
/// Valid bits of [MINUTES].
pub const MINUTES_MASK: u8 = 0x7f;
/// Valid bits of [HOURS] in 24 hour mode.
pub const HOURS_MASK: u8 = 0x3f;
/// Valid bits of [DATE].
pub const DATE_MASK: u8 = 0x3f;
/// Valid bits of [MONTHS].
pub const MONTHS_MASK: u8 = 0x1f;
/// Valid bits of [WEEKDAYS].
pub const WEEKDAYS_MASK: u8 = 0x07;

/// Decode a binary coded decimal byte.
#[inline(always)]
pub const fn decode_bcd(value: u8) -> u8 {
    (value >> 4) * 10 + (value & 0xf)
}

/// Encode a value below 100 as binary coded decimal.
#[inline(always)]
pub const fn encode_bcd(value: u8) -> u8 {
    ((value / 10) << 4) | (value % 10)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn bcd_decode() {
        assert_eq!(0, decode_bcd(0x00));
        assert_eq!(59, decode_bcd(0x59));
        assert_eq!(99, decode_bcd(0x99));
    }

    #[test]
    fn bcd_encode() {
        assert_eq!(0x00, encode_bcd(0));
        assert_eq!(0x59, encode_bcd(59));
        assert_eq!(0x99, encode_bcd(99));
    }

    #[test]
    fn bcd_round_trip() {
        for value in 0..100 {
            assert_eq!(value, decode_bcd(encode_bcd(value)));
        }
    }
}
