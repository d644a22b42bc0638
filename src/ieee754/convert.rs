/*
    Conversions to and from `Float`
*/

use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::{One, ToPrimitive, Zero};

use super::*;
use crate::decimal::round_div;
use crate::{Decimal, DecimalValue};

// Bound on the corrections applied to a digit-count estimate
const MAX_ESTIMATE_STEPS: usize = 4;

// Decimal (and radix-N) to bits
impl Format {
    // Rounds `(-1)^sign * num / den * 2^exp2` into this format
    pub(crate) fn round_ratio(&self, sign: bool, num: &BigUint, den: &BigUint, exp2: i64) -> Float {
        if num.is_zero() {
            return self.zero(sign);
        }

        // scale so that the quotient carries at least `significand_width + 2` bits
        let p = i64::from(self.significand_width);
        let s = (p + 3 + den.bits() as i64 - num.bits() as i64).max(0);
        let (q, r) = (num << (s as u64)).div_rem(den);
        self.round_finite(sign, exp2 - s, q, !r.is_zero())
    }

    // Rounds `(-1)^sign * mantissa * radix^radix_exp * 2^bin_exp` into this format
    pub(crate) fn round_scaled(
        &self,
        sign: bool,
        mantissa: &BigUint,
        radix: u32,
        radix_exp: i64,
        bin_exp: i64,
    ) -> Float {
        if mantissa.is_zero() {
            return self.zero(sign);
        }

        // estimate the binary magnitude before building any power
        let log2_radix = f64::from(radix).log2();
        let scale = radix_exp as f64 * log2_radix + bin_exp as f64;
        let bits = mantissa.bits() as f64;
        let lo = bits - 1.0 + scale;
        let hi = bits + scale;
        if lo > (self.max_exponent() + 2) as f64 {
            // certainly above the largest finite value
            return self.round_finite(sign, self.max_exponent() + 2, BigUint::one(), false);
        }
        if hi < (self.expmin() - 2) as f64 {
            // certainly below a quarter of the smallest subnormal
            return self.round_finite(sign, self.expmin() - 3, BigUint::one(), false);
        }

        let r = BigUint::from(radix);
        let power = r.pow(radix_exp.unsigned_abs() as u32);
        if radix_exp >= 0 {
            self.round_ratio(sign, &(mantissa * power), &BigUint::one(), bin_exp)
        } else {
            self.round_ratio(sign, mantissa, &power, bin_exp)
        }
    }

    /// Rounds a decimal into this format.
    pub fn from_decimal(&self, d: &Decimal) -> Float {
        self.round_scaled(d.is_negative(), d.unscaled(), 10, d.exponent(), 0)
    }
}

// Returns `(num, den)` with `num / den = sig * 2^exp / radix^e`
fn scaled_ratio(sig: &BigUint, exp: i64, radix: &BigUint, e: i64) -> (BigUint, BigUint) {
    let mut num = sig.clone();
    let mut den = BigUint::one();
    if exp >= 0 {
        num <<= exp as u64;
    } else {
        den <<= exp.unsigned_abs();
    }

    let power = radix.pow(e.unsigned_abs() as u32);
    if e >= 0 {
        den *= power;
    } else {
        num *= power;
    }
    (num, den)
}

// Rounds the finite, non-zero `sig * 2^exp` to `digits` significant digits
// in `radix`. Returns `(d, e)` with `d * radix^e` the rounded value and
// `d` exactly `digits` digits long.
pub(crate) fn to_radix_digits(
    sign: bool,
    sig: &BigUint,
    exp: i64,
    radix: u32,
    digits: usize,
    rm: RoundingMode,
) -> (BigUint, i64) {
    if sig.is_zero() {
        return (BigUint::zero(), 0);
    }

    let digits = digits.max(1);
    let r = BigUint::from(radix);
    let lower = r.pow(digits as u32 - 1);
    let upper = &lower * &r;

    // estimate the exponent of the leading digit, then correct it
    let msb = (sig.bits() as i64 - 1 + exp) as f64;
    let lead = (msb / f64::from(radix).log2()).floor() as i64;
    let mut e = lead - (digits as i64 - 1);
    for _ in 0..MAX_ESTIMATE_STEPS {
        let (num, den) = scaled_ratio(sig, exp, &r, e);
        let q = num / den;
        if q >= upper {
            e += 1;
        } else if q < lower {
            e -= 1;
        } else {
            break;
        }
    }

    let (num, den) = scaled_ratio(sig, exp, &r, e);
    let (d, _) = round_div(&num, &den, sign, rm);
    if d >= upper {
        // 99..9 rounded up to 100..0
        (lower, e + 1)
    } else {
        (d, e)
    }
}

// Removes trailing zero digits while the exponent is negative
pub(crate) fn strip_radix_zeros(mut d: BigUint, mut e: i64, radix: u32, to_integer: bool) -> (BigUint, i64) {
    if d.is_zero() {
        return (d, 0);
    }

    let r = BigUint::from(radix);
    while to_integer || e < 0 {
        let (q, rem) = d.div_rem(&r);
        if !rem.is_zero() {
            break;
        }
        d = q;
        e += 1;
    }
    (d, e)
}

// Bits to decimal
impl Float {
    /// Default number of significant digits in `radix` for this value:
    /// subnormals only carry the bits of their significand field.
    pub fn default_digits(&self, radix: u32) -> usize {
        let bits = if self.is_subnormal() {
            self.significand().bits() as u32
        } else {
            self.fmt.significand_width()
        };
        Format::significant_digits(radix, bits)
    }

    /// Converts to a decimal with the default number of digits.
    pub fn to_decimal(&self) -> DecimalValue {
        self.to_decimal_digits(self.default_digits(10))
    }

    /// Converts to a decimal rounded to `digits` significant digits
    /// with the rounding mode of this value's format.
    pub fn to_decimal_digits(&self, digits: usize) -> DecimalValue {
        match self.num() {
            FloatNum::Nan => DecimalValue::NaN,
            FloatNum::Infinity(negative) => DecimalValue::Infinite { negative },
            FloatNum::Finite { sign, exp, sig } => {
                if sig.is_zero() {
                    return DecimalValue::Finite(Decimal::zero(sign));
                }
                let (d, e) = to_radix_digits(sign, &sig, exp, 10, digits, self.fmt.rounding_mode());
                DecimalValue::Finite(Decimal::new(sign, d, e).strip_trailing_zeros())
            }
        }
    }

    /// Converts to the exact decimal value. Every binary fraction
    /// has a terminating decimal expansion.
    pub fn to_exact_decimal(&self) -> DecimalValue {
        match self.num() {
            FloatNum::Nan => DecimalValue::NaN,
            FloatNum::Infinity(negative) => DecimalValue::Infinite { negative },
            FloatNum::Finite { sign, exp, sig } => {
                let d = if exp >= 0 {
                    Decimal::new(sign, sig << (exp as u64), 0)
                } else {
                    // 2^-k = 5^k * 10^-k
                    let five = BigUint::from(5u32).pow(exp.unsigned_abs() as u32);
                    Decimal::new(sign, sig * five, exp)
                };
                DecimalValue::Finite(d.strip_trailing_zeros())
            }
        }
    }
}

// Hardware formats
impl From<f64> for Float {
    fn from(f: f64) -> Self {
        Float::from_parts(Format::double(), BigUint::from(f.to_bits()), Exceptions::default())
    }
}

impl From<f32> for Float {
    fn from(f: f32) -> Self {
        Float::from_parts(Format::single(), BigUint::from(f.to_bits()), Exceptions::default())
    }
}

impl Float {
    /// Rounds to the nearest `f64`.
    pub fn to_f64(&self) -> f64 {
        let f = self.cast(&Format::double());
        f64::from_bits(f.bits.to_u64().unwrap_or_default())
    }

    /// Rounds to the nearest `f32`.
    pub fn to_f32(&self) -> f32 {
        let f = self.cast(&Format::single());
        f32::from_bits(f.bits.to_u32().unwrap_or_default())
    }
}
