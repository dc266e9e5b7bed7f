//! Length units.
//!
//! DrawingML measures every position and extent in EMUs (English Metric
//! Units). Decks are authored in inches and font sizes in points, so this
//! module provides the conversions plus an `Emu` newtype that keeps lengths
//! from being mixed up with other integers.

use std::fmt;
use std::ops::{Add, AddAssign, Div, Mul, Sub};

pub const EMUS_PER_INCH: i64 = 914_400;
pub const EMUS_PER_CM: i64 = 360_000;
pub const EMUS_PER_PT: i64 = 12_700;

#[inline]
pub fn inches_to_emu(inches: f64) -> i64 {
    (inches * EMUS_PER_INCH as f64).round() as i64
}

#[inline]
pub fn pt_to_emu(pt: f64) -> i64 {
    (pt * EMUS_PER_PT as f64).round() as i64
}

#[inline]
pub fn emu_to_inches(emu: i64) -> f64 {
    emu as f64 / EMUS_PER_INCH as f64
}

#[inline]
pub fn emu_to_pt(emu: i64) -> f64 {
    emu as f64 / EMUS_PER_PT as f64
}

/// A length in English Metric Units.
///
/// Fractional inputs are rounded to the nearest whole EMU.
///
/// # Examples
///
/// ```
/// use deckwright::common::Emu;
///
/// assert_eq!(Emu::inches(1.0).get(), 914_400);
/// assert_eq!(Emu::pt(1.0).get(), 12_700);
/// assert_eq!(Emu::inches(16.0) / 2, Emu::inches(8.0));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Emu(pub i64);

impl Emu {
    pub const ZERO: Emu = Emu(0);

    /// Length from inches.
    #[inline]
    pub fn inches(inches: f64) -> Self {
        Emu(inches_to_emu(inches))
    }

    /// Length from points (1/72 inch).
    #[inline]
    pub fn pt(pt: f64) -> Self {
        Emu(pt_to_emu(pt))
    }

    /// Length from centimeters.
    #[inline]
    pub fn cm(cm: f64) -> Self {
        Emu((cm * EMUS_PER_CM as f64).round() as i64)
    }

    /// Raw EMU value.
    #[inline]
    pub const fn get(self) -> i64 {
        self.0
    }

    #[inline]
    pub fn to_inches(self) -> f64 {
        emu_to_inches(self.0)
    }

    #[inline]
    pub fn to_pt(self) -> f64 {
        emu_to_pt(self.0)
    }
}

impl From<i64> for Emu {
    #[inline]
    fn from(value: i64) -> Self {
        Emu(value)
    }
}

impl Add for Emu {
    type Output = Emu;

    #[inline]
    fn add(self, rhs: Emu) -> Emu {
        Emu(self.0 + rhs.0)
    }
}

impl AddAssign for Emu {
    #[inline]
    fn add_assign(&mut self, rhs: Emu) {
        self.0 += rhs.0;
    }
}

impl Sub for Emu {
    type Output = Emu;

    #[inline]
    fn sub(self, rhs: Emu) -> Emu {
        Emu(self.0 - rhs.0)
    }
}

impl Mul<i64> for Emu {
    type Output = Emu;

    #[inline]
    fn mul(self, rhs: i64) -> Emu {
        Emu(self.0 * rhs)
    }
}

impl Div<i64> for Emu {
    type Output = Emu;

    #[inline]
    fn div(self, rhs: i64) -> Emu {
        Emu(self.0 / rhs)
    }
}

impl fmt::Display for Emu {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut buf = itoa::Buffer::new();
        f.write_str(buf.format(self.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inch_and_point_conversions() {
        assert_eq!(Emu::inches(7.5).get(), 6_858_000);
        assert_eq!(Emu::inches(16.0).get(), 14_630_400);
        assert_eq!(Emu::inches(13.33).get(), 12_188_952);
        assert_eq!(Emu::pt(18.0).get(), 228_600);
        assert_eq!(Emu::cm(2.54).get(), 914_400);
    }

    #[test]
    fn test_rounds_to_nearest_emu() {
        // 1.15in is not representable exactly as a double
        assert_eq!(Emu::inches(1.15).get(), 1_051_560);
        assert_eq!(Emu::inches(0.06).get(), 54_864);
    }

    #[test]
    fn test_arithmetic() {
        let a = Emu::inches(6.2);
        let b = Emu::inches(4.2);
        assert_eq!((a - b) / 2, Emu::inches(1.0));
        assert_eq!(Emu::inches(0.5) * 3, Emu::inches(1.5));

        let mut c = Emu::ZERO;
        c += Emu::pt(1.0);
        assert_eq!(c, Emu(12_700));
    }

    #[test]
    fn test_back_conversions() {
        assert!((Emu::inches(2.5).to_inches() - 2.5).abs() < 1e-9);
        assert!((Emu::pt(36.0).to_pt() - 36.0).abs() < 1e-9);
        assert_eq!(Emu(914_400).to_string(), "914400");
    }
}
