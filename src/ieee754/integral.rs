/*
    Neighbours and integral rounding
*/

use std::cmp::Ordering;

use num_bigint::{BigInt, BigUint, Sign};
use num_traits::{One, Zero};

use super::*;
use crate::ieee754::util::split_round_bits;

impl Float {
    /// Returns the unit in the last place of this `Float`: the gap
    /// between its magnitude and the next larger magnitude.
    /// `ulp(NaN)` is NaN and `ulp(+/-Inf)` is `+Inf`.
    pub fn ulp(&self) -> Float {
        match self.num() {
            FloatNum::Nan => self.fmt.nan(),
            FloatNum::Infinity(_) => self.fmt.infinity(false),
            FloatNum::Finite { exp, .. } => self.fmt.round_finite(false, exp, BigUint::one(), false),
        }
    }

    /// Returns the smallest value greater than this `Float`.
    pub fn next_up(&self) -> Float {
        if self.is_nan() {
            self.fmt.nan()
        } else if self.is_zero() {
            self.fmt.min_value()
        } else if !self.sign() {
            if self.is_infinite() {
                self.clone().clear_flags()
            } else {
                // the layout is monotonic in the magnitude:
                // the successor of MAX_FLOAT is +Inf
                Float::from_parts(self.fmt, &self.bits + 1u32, Exceptions::default())
            }
        } else {
            // the predecessor of -MIN_VALUE is -0
            Float::from_parts(self.fmt, &self.bits - 1u32, Exceptions::default())
        }
    }

    /// Returns the largest value less than this `Float`.
    pub fn next_down(&self) -> Float {
        if self.is_nan() {
            self.fmt.nan()
        } else {
            self.negate().next_up().negate()
        }
    }

    /// Returns the neighbour of this `Float` in the direction of
    /// `direction`, or `direction` itself when both compare equal.
    /// The result is in the promoted format.
    pub fn next_after(&self, direction: &Float) -> Float {
        let out = self.fmt.promote(&direction.fmt);
        let x = self.cast(&out);
        let y = direction.cast(&out);
        match x.compare(&y) {
            None => out.nan(),
            Some(Ordering::Equal) => y,
            Some(Ordering::Less) => x.next_up(),
            Some(Ordering::Greater) => x.next_down(),
        }
    }

    /// Rounds this `Float` to an integral value using `rm`.
    /// The sign of a zero result is the sign of this `Float`.
    pub fn round_to_integral(&self, rm: RoundingMode) -> Float {
        match self.num() {
            FloatNum::Nan => self.fmt.nan(),
            FloatNum::Infinity(sign) => self.fmt.infinity(sign),
            FloatNum::Finite { sign, exp, sig } => {
                if exp >= 0 || sig.is_zero() {
                    // already integral
                    return self.clone().clear_flags();
                }

                let (mut q, half_bit, sticky_bit) = split_round_bits(&sig, exp.unsigned_abs());
                let increment = rm.requires_increment(sign, q.bit(0), half_bit, sticky_bit);
                if increment {
                    q += 1u32;
                }

                let flags = Exceptions::default()
                    .with_inexact(half_bit || sticky_bit)
                    .with_carry(increment);
                let r = if q.is_zero() {
                    self.fmt.zero(sign)
                } else {
                    self.fmt.round_finite(sign, 0, q, false)
                };
                r.with_flags(flags)
            }
        }
    }

    /// Rounds to the nearest integral value, ties to even.
    pub fn rint(&self) -> Float {
        self.round_to_integral(RoundingMode::HalfEven)
    }

    /// Rounds towards negative infinity.
    pub fn floor(&self) -> Float {
        self.round_to_integral(RoundingMode::Floor)
    }

    /// Rounds towards positive infinity.
    pub fn ceil(&self) -> Float {
        self.round_to_integral(RoundingMode::Ceiling)
    }

    /// Rounds towards zero.
    pub fn trunc(&self) -> Float {
        self.round_to_integral(RoundingMode::Down)
    }

    /// Rounds to the nearest integral value, ties away from zero.
    pub fn round(&self) -> Float {
        self.round_to_integral(RoundingMode::HalfUp)
    }

    /// Returns the integer part of this `Float`, truncated towards zero,
    /// or `None` for NaN and the infinities.
    pub fn to_integer(&self) -> Option<BigInt> {
        match self.num() {
            FloatNum::Finite { sign, exp, sig } => {
                let magnitude = if exp >= 0 { sig << exp.unsigned_abs() } else { sig >> exp.unsigned_abs() };
                let sign = if sign { Sign::Minus } else { Sign::Plus };
                Some(BigInt::from_biguint(sign, magnitude))
            }
            _ => None,
        }
    }

    /// Returns true if this `Float` is a finite integral value.
    pub fn is_integer(&self) -> bool {
        match self.num() {
            FloatNum::Finite { exp, sig, .. } => {
                exp >= 0 || sig.trailing_zeros().map_or(true, |tz| tz >= exp.unsigned_abs())
            }
            _ => false,
        }
    }
}
