/*
    String conversion
*/

use std::fmt;

use num_bigint::BigUint;
use num_traits::Zero;

use super::convert::{strip_radix_zeros, to_radix_digits};
use super::format::digits_for_bits;
use super::*;
use crate::decimal::{plain_digits, round_div, scientific_digits};
use crate::{DecimalValue, Error, Result};

// Components of a parsed number `(-1)^negative * mantissa * radix^radix_exp * 2^bin_exp`
struct Literal {
    negative: bool,
    mantissa: BigUint,
    radix_exp: i64,
    bin_exp: i64,
}

fn check_radix(radix: u32) -> Result<()> {
    if (2..=36).contains(&radix) {
        Ok(())
    } else {
        Err(Error::InvalidRadix(radix))
    }
}

// Splits `body` into digits and an exponent. `e` marks a power of the
// radix and `p` a power of two; each is a digit in large radixes
// unless a sign follows it.
fn parse_literal(input: &str, radix: u32) -> Result<Literal> {
    let err = || Error::Parse {
        input: input.to_string(),
        radix,
    };

    let (negative, body) = match input.as_bytes().first() {
        Some(b'-') => (true, &input[1..]),
        Some(b'+') => (false, &input[1..]),
        _ => (false, input),
    };

    let bytes = body.as_bytes();
    let mut digits = String::with_capacity(bytes.len());
    let mut frac_len: i64 = 0;
    let mut seen_point = false;
    let mut marker = None;
    let mut i = 0;
    while i < bytes.len() {
        let c = bytes[i].to_ascii_lowercase();
        let signed = matches!(bytes.get(i + 1), Some(b'+') | Some(b'-'));
        if c == b'.' && !seen_point {
            seen_point = true;
        } else if (c == b'e' && (radix < 15 || signed)) || (c == b'p' && (radix < 26 || signed)) {
            marker = Some(c);
            i += 1;
            break;
        } else if (c as char).to_digit(radix).is_some() {
            digits.push(c as char);
            if seen_point {
                frac_len += 1;
            }
        } else {
            return Err(err());
        }
        i += 1;
    }

    if digits.is_empty() {
        return Err(err());
    }
    let exp: i64 = match marker {
        Some(_) => body[i..].parse().map_err(|_| err())?,
        None => 0,
    };

    let mantissa = BigUint::parse_bytes(digits.as_bytes(), radix).ok_or_else(err)?;
    let (radix_exp, bin_exp) = match marker {
        Some(b'p') => (-frac_len, exp),
        _ => (exp.checked_sub(frac_len).ok_or_else(err)?, 0),
    };
    Ok(Literal {
        negative,
        mantissa,
        radix_exp,
        bin_exp,
    })
}

// Parsing
impl Format {
    /// Parses a decimal string into this format.
    pub fn parse(&self, s: &str) -> Result<Float> {
        self.parse_radix(s, 10)
    }

    /// Parses a string of digits in `radix` (2 to 36) into this format.
    ///
    /// The digits may carry a radix point and an exponent suffix:
    /// `e` scales by a power of `radix` and `p` by a power of two.
    /// Exponents are written in decimal. The literals `NaN`, `Infinity`,
    /// `+Infinity` and `-Infinity` are recognized in any case.
    pub fn parse_radix(&self, s: &str, radix: u32) -> Result<Float> {
        check_radix(radix)?;
        let s = s.trim();
        match s.to_ascii_lowercase().as_str() {
            "nan" | "+nan" | "-nan" => return Ok(self.nan()),
            "infinity" | "+infinity" | "inf" | "+inf" => return Ok(self.infinity(false)),
            "-infinity" | "-inf" => return Ok(self.infinity(true)),
            _ => (),
        }

        let lit = parse_literal(s, radix)?;
        Ok(self.round_scaled(lit.negative, &lit.mantissa, radix, lit.radix_exp, lit.bin_exp))
    }
}

// Formatting
impl Float {
    fn special_string(&self) -> Option<&'static str> {
        if self.is_nan() {
            Some("NaN")
        } else if self.is_infinite() {
            Some(if self.sign() { "-Infinity" } else { "Infinity" })
        } else {
            None
        }
    }

    fn sign_str(&self) -> &'static str {
        if self.sign() {
            "-"
        } else {
            ""
        }
    }

    /// Returns the normalised form `1.xxxp+N` with the fraction in `radix`
    /// and the binary exponent in decimal. Subnormals read `0.xxxp-N`.
    pub fn to_normalised_string(&self, radix: u32) -> Result<String> {
        check_radix(radix)?;
        if let Some(s) = self.special_string() {
            return Ok(s.to_string());
        }
        if self.is_zero() {
            return Ok(format!("{}0.0p+0", self.sign_str()));
        }

        let m = self.fmt.mantissa_width();
        let n = digits_for_bits(radix, m);
        let scale = BigUint::from(radix).pow(n as u32);
        let (mut lead, mut exp) = if self.is_subnormal() {
            (0u32, self.fmt.min_exponent())
        } else {
            (1u32, self.exponent())
        };

        // fraction digits: field * radix^n / 2^m, rounded
        let num = self.significand() * &scale;
        let den = BigUint::from(1u32) << m;
        let (mut frac, _) = round_div(&num, &den, self.sign(), self.fmt.rounding_mode());
        if frac >= scale {
            frac = BigUint::zero();
            lead += 1;
        }
        if lead == 2 {
            lead = 1;
            exp += 1;
        }

        let digits = frac.to_str_radix(radix);
        let padded = format!("{}{}", "0".repeat(n.saturating_sub(digits.len())), digits);
        let trimmed = padded.trim_end_matches('0');
        let trimmed = if trimmed.is_empty() { "0" } else { trimmed };
        Ok(format!("{}{}.{}p{:+}", self.sign_str(), lead, trimmed, exp))
    }

    /// Returns the bit layout written in `radix`.
    pub fn to_bit_string(&self, radix: u32) -> Result<String> {
        check_radix(radix)?;
        Ok(self.bits.to_str_radix(radix))
    }

    // Rounds to the default number of digits in `radix`
    fn radix_digits(&self, radix: u32) -> Option<(BigUint, i64)> {
        match self.num() {
            FloatNum::Finite { sign, exp, sig } if !sig.is_zero() => {
                let n = self.default_digits(radix);
                Some(to_radix_digits(sign, &sig, exp, radix, n, self.fmt.rounding_mode()))
            }
            _ => None,
        }
    }

    /// Returns the value in positional notation in `radix`, rounded to
    /// the default number of digits.
    pub fn to_string_radix(&self, radix: u32) -> Result<String> {
        check_radix(radix)?;
        if let Some(s) = self.special_string() {
            return Ok(s.to_string());
        }

        match self.radix_digits(radix) {
            Some((d, e)) => {
                let (d, e) = strip_radix_zeros(d, e, radix, false);
                Ok(format!("{}{}", self.sign_str(), plain_digits(&d.to_str_radix(radix), e, 'e')))
            }
            None => Ok(format!("{}0.0", self.sign_str())),
        }
    }

    /// Returns the value as `d.ddde+N` with digits in `radix` and a
    /// decimal exponent counting powers of `radix`.
    pub fn to_scientific_string(&self, radix: u32) -> Result<String> {
        check_radix(radix)?;
        if let Some(s) = self.special_string() {
            return Ok(s.to_string());
        }

        match self.radix_digits(radix) {
            Some((d, e)) => {
                let (d, e) = strip_radix_zeros(d, e, radix, true);
                let s = scientific_digits(&d.to_str_radix(radix), e, 'e');
                Ok(format!("{}{}", self.sign_str(), s))
            }
            None => Ok(format!("{}0.0e+0", self.sign_str())),
        }
    }

    /// Returns the decimal value without an exponent.
    pub fn to_plain_string(&self) -> String {
        match self.to_decimal() {
            DecimalValue::Finite(d) if d.is_zero() => format!("{}0.0", self.sign_str()),
            DecimalValue::Finite(d) => d.to_plain_string(),
            special => special.to_string(),
        }
    }

    /// Returns the decimal value with an exponent that is a multiple of three.
    pub fn to_engineering_string(&self) -> String {
        match self.to_decimal() {
            DecimalValue::Finite(d) if d.is_zero() => format!("{}0.0", self.sign_str()),
            DecimalValue::Finite(d) => d.to_engineering_string(),
            special => special.to_string(),
        }
    }
}

impl fmt::Display for Float {
    /// Writes the decimal value rounded to the default number of digits,
    /// with an exponent only for very large or very small magnitudes.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_decimal() {
            DecimalValue::Finite(d) if d.is_zero() => write!(f, "{}0.0", self.sign_str()),
            value => write!(f, "{}", value),
        }
    }
}
