/*
    Arbitrary-precision decimals
*/

use std::fmt;
use std::str::FromStr;

use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::Zero;

use crate::{Error, Result, RoundingMode};

/// A signed decimal `(-1)^s * unscaled * 10^exponent`.
///
/// The sign is kept for zero so that `-0` survives a round trip
/// through a binary format.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Decimal {
    negative: bool,
    unscaled: BigUint,
    exponent: i64,
}

/// The decimal value of a binary float.
///
/// Infinities and NaN have no decimal value; they are reported
/// through their own variants instead of failing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecimalValue {
    Finite(Decimal),
    Infinite { negative: bool },
    NaN,
}

impl DecimalValue {
    /// Returns true if this is a finite decimal.
    pub fn is_finite(&self) -> bool {
        matches!(self, DecimalValue::Finite(_))
    }

    /// Returns the decimal, if finite.
    pub fn finite(&self) -> Option<&Decimal> {
        match self {
            DecimalValue::Finite(d) => Some(d),
            _ => None,
        }
    }

    /// Consumes this value returning the decimal, if finite.
    pub fn into_finite(self) -> Option<Decimal> {
        match self {
            DecimalValue::Finite(d) => Some(d),
            _ => None,
        }
    }
}

impl fmt::Display for DecimalValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecimalValue::Finite(d) => d.fmt(f),
            DecimalValue::Infinite { negative: true } => f.write_str("-Infinity"),
            DecimalValue::Infinite { negative: false } => f.write_str("Infinity"),
            DecimalValue::NaN => f.write_str("NaN"),
        }
    }
}

// Number of digits of `n` in `radix`. Zero has one digit.
pub(crate) fn digit_count(n: &BigUint, radix: u32) -> usize {
    if n.is_zero() {
        1
    } else {
        n.to_str_radix(radix).len()
    }
}

// Divides `num` by `den`, rounding the quotient with `rm`.
// Returns the rounded quotient and whether the division was inexact.
pub(crate) fn round_div(num: &BigUint, den: &BigUint, sign: bool, rm: RoundingMode) -> (BigUint, bool) {
    let (q, r) = num.div_rem(den);
    if r.is_zero() {
        return (q, false);
    }

    let twice: BigUint = &r << 1usize;
    let half_bit = twice >= *den;
    let sticky_bit = if half_bit { twice != *den } else { true };
    if rm.requires_increment(sign, q.is_odd(), half_bit, sticky_bit) {
        (q + 1u32, true)
    } else {
        (q, true)
    }
}

// Most zeros a positional string pads with before switching to scientific form
const MAX_PLAIN_PADDING: u64 = 1 << 20;

// Places a radix point in `digits` so that the string reads `digits * radix^exponent`.
// Falls back to `scientific_digits` with `marker` past `MAX_PLAIN_PADDING` zeros.
pub(crate) fn plain_digits(digits: &str, exponent: i64, marker: char) -> String {
    let point = digits.len() as i64 + exponent;
    let padding = if exponent >= 0 { exponent.unsigned_abs() } else { point.min(0).unsigned_abs() };
    if padding > MAX_PLAIN_PADDING {
        return scientific_digits(digits, exponent, marker);
    }

    if exponent >= 0 {
        let mut s = String::from(digits);
        s.extend(std::iter::repeat('0').take(padding as usize));
        s
    } else if point > 0 {
        let (int, frac) = digits.split_at(point as usize);
        format!("{}.{}", int, frac)
    } else {
        format!("0.{}{}", "0".repeat(padding as usize), digits)
    }
}

// Formats `digits * radix^exponent` as `d.ddd<marker>[+-]adjusted`.
pub(crate) fn scientific_digits(digits: &str, exponent: i64, marker: char) -> String {
    let adjusted = exponent + digits.len() as i64 - 1;
    let (lead, rest) = digits.split_at(1);
    let mut s = String::with_capacity(digits.len() + 8);
    s.push_str(lead);
    if !rest.is_empty() {
        s.push('.');
        s.push_str(rest);
    }
    s.push(marker);
    if adjusted >= 0 {
        s.push('+');
    }
    s.push_str(&adjusted.to_string());
    s
}

impl Decimal {
    /// Creates the decimal `(-1)^negative * unscaled * 10^exponent`.
    pub fn new(negative: bool, unscaled: BigUint, exponent: i64) -> Self {
        Self {
            negative,
            unscaled,
            exponent,
        }
    }

    /// Returns a zero with a particular sign.
    pub fn zero(negative: bool) -> Self {
        Self::new(negative, BigUint::zero(), 0)
    }

    /// Returns true if the sign bit is set (including `-0`).
    pub fn is_negative(&self) -> bool {
        self.negative
    }

    /// Returns true if this decimal is zero.
    pub fn is_zero(&self) -> bool {
        self.unscaled.is_zero()
    }

    /// Returns the unscaled integer.
    pub fn unscaled(&self) -> &BigUint {
        &self.unscaled
    }

    /// Returns the power of ten applied to the unscaled integer.
    pub fn exponent(&self) -> i64 {
        self.exponent
    }

    /// Returns the number of significant digits.
    pub fn precision(&self) -> usize {
        digit_count(&self.unscaled, 10)
    }

    /// Returns the negation of this decimal.
    pub fn negate(&self) -> Self {
        Self::new(!self.negative, self.unscaled.clone(), self.exponent)
    }

    /// Rounds this decimal to at most `digits` significant digits.
    pub fn round(&self, digits: usize, rm: RoundingMode) -> Self {
        let digits = digits.max(1);
        let len = self.precision();
        if len <= digits {
            return self.clone();
        }

        let drop = len - digits;
        let den = BigUint::from(10u32).pow(drop as u32);
        let (mut unscaled, _) = round_div(&self.unscaled, &den, self.negative, rm);
        let mut exponent = self.exponent + drop as i64;
        if digit_count(&unscaled, 10) > digits {
            // 99..9 rounded up to 100..0
            unscaled /= 10u32;
            exponent += 1;
        }
        Self::new(self.negative, unscaled, exponent)
    }

    /// Removes trailing zeros of the fraction. Never introduces
    /// a positive exponent.
    pub fn strip_trailing_zeros(&self) -> Self {
        if self.unscaled.is_zero() {
            return Self::zero(self.negative);
        }

        let ten = BigUint::from(10u32);
        let mut unscaled = self.unscaled.clone();
        let mut exponent = self.exponent;
        while exponent < 0 {
            let (q, r) = unscaled.div_rem(&ten);
            if !r.is_zero() {
                break;
            }
            unscaled = q;
            exponent += 1;
        }
        Self::new(self.negative, unscaled, exponent)
    }

    fn sign_str(&self) -> &'static str {
        if self.negative {
            "-"
        } else {
            ""
        }
    }

    /// Returns this decimal without an exponent field, unless writing it
    /// out would take more than a million padding zeros, in which case the
    /// scientific form is returned.
    pub fn to_plain_string(&self) -> String {
        let digits = self.unscaled.to_str_radix(10);
        format!("{}{}", self.sign_str(), plain_digits(&digits, self.exponent, 'E'))
    }

    /// Returns this decimal in scientific notation whenever an exponent
    /// is needed, e.g. `3.4028235E+38`, `1.4E-45` or `0.100000001`.
    pub fn to_scientific_string(&self) -> String {
        let digits = self.unscaled.to_str_radix(10);
        let adjusted = self.exponent + digits.len() as i64 - 1;
        if self.exponent <= 0 && adjusted >= -6 {
            return self.to_plain_string();
        }
        format!("{}{}", self.sign_str(), scientific_digits(&digits, self.exponent, 'E'))
    }

    /// Returns this decimal in engineering notation: the exponent,
    /// when present, is a multiple of three.
    pub fn to_engineering_string(&self) -> String {
        let digits = self.unscaled.to_str_radix(10);
        let adjusted = self.exponent + digits.len() as i64 - 1;
        if (self.exponent <= 0 && adjusted >= -6) || self.unscaled.is_zero() {
            return self.to_plain_string();
        }

        let shift = adjusted.rem_euclid(3);
        let adjusted = adjusted - shift;
        let int_digits = (shift + 1) as usize;
        let mut s = String::from(self.sign_str());
        if digits.len() <= int_digits {
            s.push_str(&digits);
            s.extend(std::iter::repeat('0').take(int_digits - digits.len()));
        } else {
            let (int, frac) = digits.split_at(int_digits);
            s.push_str(int);
            s.push('.');
            s.push_str(frac);
        }
        if adjusted != 0 {
            s.push('E');
            if adjusted > 0 {
                s.push('+');
            }
            s.push_str(&adjusted.to_string());
        }
        s
    }
}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_scientific_string())
    }
}

impl FromStr for Decimal {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self> {
        let err = || Error::Parse {
            input: input.to_string(),
            radix: 10,
        };

        let (negative, body) = match input.as_bytes().first() {
            Some(b'-') => (true, &input[1..]),
            Some(b'+') => (false, &input[1..]),
            _ => (false, input),
        };

        let (mantissa, exp) = match body.find(|c| c == 'e' || c == 'E') {
            Some(i) => {
                let exp: i64 = body[i + 1..].parse().map_err(|_| err())?;
                (&body[..i], exp)
            }
            None => (body, 0),
        };

        let (int, frac) = match mantissa.find('.') {
            Some(i) => (&mantissa[..i], &mantissa[i + 1..]),
            None => (mantissa, ""),
        };
        if int.is_empty() && frac.is_empty() {
            return Err(err());
        }
        if !int.bytes().chain(frac.bytes()).all(|b| b.is_ascii_digit()) {
            return Err(err());
        }

        let digits = format!("{}{}", int, frac);
        let unscaled = BigUint::parse_bytes(digits.as_bytes(), 10).ok_or_else(err)?;
        let exponent = exp.checked_sub(frac.len() as i64).ok_or_else(err)?;
        Ok(Self::new(negative, unscaled, exponent))
    }
}

impl From<i64> for Decimal {
    fn from(n: i64) -> Self {
        Self::new(n < 0, BigUint::from(n.unsigned_abs()), 0)
    }
}

impl From<u64> for Decimal {
    fn from(n: u64) -> Self {
        Self::new(false, BigUint::from(n), 0)
    }
}
