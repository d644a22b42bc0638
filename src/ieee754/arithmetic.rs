/*
    Arithmetic
*/

use std::cmp::Ordering;
use std::ops::{Add, Div, Mul, Neg, Rem, Sub};

use num_bigint::BigUint;
use num_traits::{One, Zero};

use super::*;

// Returns NaN in `out` with the invalid flag raised
fn invalid(out: &Format) -> Float {
    out.nan().with_flags(Exceptions::default().with_invalid(true))
}

// Adds two finite values of signs `s1`, `s2` exactly, then rounds once into `out`
fn add_finite(out: &Format, s1: bool, e1: i64, c1: BigUint, s2: bool, e2: i64, c2: BigUint) -> Float {
    if c1.is_zero() && c2.is_zero() {
        // (+0) + (+0) = +0, (-0) + (-0) = -0, otherwise the mode decides
        let sign = if s1 == s2 { s1 } else { out.rounding_mode().zero_sum_sign() };
        return out.zero(sign);
    } else if c1.is_zero() {
        return out.round_finite(s2, e2, c2, false);
    } else if c2.is_zero() {
        return out.round_finite(s1, e1, c1, false);
    }

    // order the operands so that the first has the larger leading bit
    let msb1 = e1 + c1.bits() as i64 - 1;
    let msb2 = e2 + c2.bits() as i64 - 1;
    let ((s1, e1, c1), (s2, e2, c2), msb2) = if msb1 >= msb2 {
        ((s1, e1, c1), (s2, e2, c2), msb2)
    } else {
        ((s2, e2, c2), (s1, e1, c1), msb1)
    };
    let msb1 = e1 + c1.bits() as i64 - 1;

    // An operand entirely below both the last bit of the other operand and
    // a quarter of the result precision only decides the sticky bit.
    // Replace it with a single bit so that the alignment stays bounded.
    let p = i64::from(out.significand_width());
    let bound = e1.min(msb1 - 1 - p) - 1;
    let (e2, c2) = if msb2 < bound { (bound - 1, BigUint::one()) } else { (e2, c2) };

    let e = e1.min(e2);
    let m1 = c1 << ((e1 - e) as u64);
    let m2 = c2 << ((e2 - e) as u64);
    let (sign, m) = if s1 == s2 {
        (s1, m1 + m2)
    } else {
        match m1.cmp(&m2) {
            Ordering::Greater => (s1, m1 - m2),
            Ordering::Less => (s2, m2 - m1),
            Ordering::Equal => return out.zero(out.rounding_mode().zero_sum_sign()),
        }
    };

    out.round_finite(sign, e, m, false)
}

// Remainder of finite `x = c1 * 2^e1` by finite, non-zero `y = c2 * 2^e2`
// with the quotient truncated (`nearest = false`) or rounded to nearest,
// ties to even (`nearest = true`).
fn rem_finite(out: &Format, s1: bool, e1: i64, c1: BigUint, e2: i64, c2: BigUint, nearest: bool) -> Float {
    let msb1 = e1 + c1.bits() as i64 - 1;
    let msb2 = e2 + c2.bits() as i64 - 1;
    if msb1 < msb2 - 1 {
        // |x| < |y| / 2: both quotients are zero
        return out.round_finite(s1, e1, c1, false);
    }

    // align `y` to a common exponent; the shift is bounded by the width of `x`
    let e = e1.min(e2);
    let y = c2 << ((e2 - e) as u64);

    // x mod m = ((c1 mod m) * (2^(e1 - e) mod m)) mod m
    let modulus = if nearest { &y << 1u32 } else { y.clone() };
    let scale = BigUint::from(2u32).modpow(&BigUint::from((e1 - e) as u64), &modulus);
    let xr = ((&c1 % &modulus) * scale) % &modulus;

    let (sign, m) = if nearest {
        // `xr` is `x mod 2y`: its comparison with `y` gives the quotient parity
        let (r, odd) = if xr >= y { (xr - &y, true) } else { (xr, false) };
        let twice = &r << 1u32;
        if twice > y || (twice == y && odd) {
            (!s1, &y - r)
        } else {
            (s1, r)
        }
    } else {
        (s1, xr)
    };

    if m.is_zero() {
        // the sign of an exact zero remainder is the sign of `x`
        return out.zero(s1);
    }
    out.round_finite(sign, e, m, false)
}

impl Float {
    /// Adds this `Float` and another, rounding the result into the
    /// promoted format of both operands.
    pub fn add(&self, other: &Float) -> Float {
        self.add_in(other, &self.fmt.promote(&other.fmt))
    }

    /// Adds this `Float` and another, rounding the result into `out`.
    pub fn add_in(&self, other: &Float, out: &Format) -> Float {
        match (self.num(), other.num()) {
            (FloatNum::Nan, _) | (_, FloatNum::Nan) => out.nan(),
            (FloatNum::Infinity(s1), FloatNum::Infinity(s2)) => {
                if s1 == s2 {
                    out.infinity(s1)
                } else {
                    // (+Inf) + (-Inf) => invalid
                    invalid(out)
                }
            }
            (FloatNum::Infinity(s), _) | (_, FloatNum::Infinity(s)) => out.infinity(s),
            (
                FloatNum::Finite {
                    sign: s1,
                    exp: e1,
                    sig: c1,
                },
                FloatNum::Finite {
                    sign: s2,
                    exp: e2,
                    sig: c2,
                },
            ) => add_finite(out, s1, e1, c1, s2, e2, c2),
        }
    }

    /// Subtracts another `Float` from this one, rounding the result into
    /// the promoted format of both operands.
    pub fn sub(&self, other: &Float) -> Float {
        self.sub_in(other, &self.fmt.promote(&other.fmt))
    }

    /// Subtracts another `Float` from this one, rounding the result into `out`.
    pub fn sub_in(&self, other: &Float, out: &Format) -> Float {
        self.add_in(&other.negate(), out)
    }

    /// Multiplies this `Float` with another, rounding the result into
    /// the promoted format of both operands.
    pub fn mul(&self, other: &Float) -> Float {
        self.mul_in(other, &self.fmt.promote(&other.fmt))
    }

    /// Multiplies this `Float` with another, rounding the result into `out`.
    pub fn mul_in(&self, other: &Float, out: &Format) -> Float {
        let sign = self.sign() != other.sign();
        if self.is_nan() || other.is_nan() {
            out.nan()
        } else if self.is_infinite() || other.is_infinite() {
            if self.is_zero() || other.is_zero() {
                // Inf * 0 => invalid
                invalid(out)
            } else {
                out.infinity(sign)
            }
        } else {
            // both finite
            match (self.num(), other.num()) {
                (FloatNum::Finite { exp: e1, sig: c1, .. }, FloatNum::Finite { exp: e2, sig: c2, .. }) => {
                    out.round_finite(sign, e1 + e2, c1 * c2, false)
                }
                _ => out.nan(),
            }
        }
    }

    /// Divides this `Float` by another, rounding the result into
    /// the promoted format of both operands.
    pub fn div(&self, other: &Float) -> Float {
        self.div_in(other, &self.fmt.promote(&other.fmt))
    }

    /// Divides this `Float` by another, rounding the result into `out`.
    pub fn div_in(&self, other: &Float, out: &Format) -> Float {
        let sign = self.sign() != other.sign();
        match (self.num(), other.num()) {
            (FloatNum::Nan, _) | (_, FloatNum::Nan) => out.nan(),
            (FloatNum::Infinity(_), FloatNum::Infinity(_)) => invalid(out),
            (FloatNum::Infinity(_), _) => out.infinity(sign),
            (_, FloatNum::Infinity(_)) => out.zero(sign),
            (FloatNum::Finite { exp: e1, sig: c1, .. }, FloatNum::Finite { exp: e2, sig: c2, .. }) => {
                if c2.is_zero() {
                    if c1.is_zero() {
                        // 0 / 0 => invalid
                        invalid(out)
                    } else {
                        out.infinity(sign)
                            .with_flags(Exceptions::default().with_div_by_zero(true))
                    }
                } else {
                    out.round_ratio(sign, &c1, &c2, e1 - e2)
                }
            }
        }
    }

    /// Computes the IEEE-754 remainder `x - n * y` where `n` is the
    /// integer nearest to `x / y`, ties to even. The result is exact
    /// unless it does not fit the promoted format.
    pub fn remainder(&self, other: &Float) -> Float {
        self.rem_in(other, &self.fmt.promote(&other.fmt), true)
    }

    /// Computes `x - n * y` where `n` is `x / y` truncated towards zero.
    /// The result has the sign of `x`.
    pub fn fmod(&self, other: &Float) -> Float {
        self.rem_in(other, &self.fmt.promote(&other.fmt), false)
    }

    fn rem_in(&self, other: &Float, out: &Format, nearest: bool) -> Float {
        match (self.num(), other.num()) {
            (FloatNum::Nan, _) | (_, FloatNum::Nan) => out.nan(),
            (FloatNum::Infinity(_), _) => invalid(out),
            (FloatNum::Finite { sign, exp, sig }, FloatNum::Infinity(_)) => {
                out.round_finite(sign, exp, sig, false)
            }
            (
                FloatNum::Finite {
                    sign: s1,
                    exp: e1,
                    sig: c1,
                },
                FloatNum::Finite { exp: e2, sig: c2, .. },
            ) => {
                if c2.is_zero() {
                    invalid(out)
                } else if c1.is_zero() {
                    out.zero(s1)
                } else {
                    rem_finite(out, s1, e1, c1, e2, c2, nearest)
                }
            }
        }
    }

    /// Computes the square root, correctly rounded.
    /// `sqrt(-0) = -0`; negative operands are invalid.
    pub fn sqrt(&self) -> Float {
        let out = self.fmt;
        match self.num() {
            FloatNum::Nan => out.nan(),
            FloatNum::Infinity(false) => out.infinity(false),
            FloatNum::Infinity(true) => invalid(&out),
            FloatNum::Finite { sign, exp, sig } => {
                if sig.is_zero() {
                    out.zero(sign)
                } else if sign {
                    invalid(&out)
                } else {
                    // scale to an even exponent with at least 2 * (p + 2) bits
                    let p = i64::from(out.significand_width());
                    let mut k = (2 * (p + 2) - sig.bits() as i64).max(0);
                    if (exp - k) % 2 != 0 {
                        k += 1;
                    }
                    let m = sig << (k as u64);
                    let root = m.sqrt();
                    let sticky = &root * &root != m;
                    out.round_finite(false, (exp - k) / 2, root, sticky)
                }
            }
        }
    }

    /// Computes the cube root, correctly rounded.
    pub fn cbrt(&self) -> Float {
        let out = self.fmt;
        match self.num() {
            FloatNum::Nan => out.nan(),
            FloatNum::Infinity(sign) => out.infinity(sign),
            FloatNum::Finite { sign, exp, sig } => {
                if sig.is_zero() {
                    return out.zero(sign);
                }

                // scale to an exponent divisible by three with at least 3 * (p + 2) bits
                let p = i64::from(out.significand_width());
                let mut k = (3 * (p + 2) - sig.bits() as i64).max(0);
                k += (exp - k).rem_euclid(3);
                let m = sig << (k as u64);
                let root = m.cbrt();
                let sticky = &root * &root * &root != m;
                out.round_finite(sign, (exp - k).div_euclid(3), root, sticky)
            }
        }
    }
}

macro_rules! impl_binary_op {
    ($trait:ident, $op:ident, $method:ident) => {
        impl $trait<&Float> for &Float {
            type Output = Float;

            fn $op(self, rhs: &Float) -> Float {
                Float::$method(self, rhs)
            }
        }

        impl $trait<Float> for Float {
            type Output = Float;

            fn $op(self, rhs: Float) -> Float {
                Float::$method(&self, &rhs)
            }
        }
    };
}

impl_binary_op!(Add, add, add);
impl_binary_op!(Sub, sub, sub);
impl_binary_op!(Mul, mul, mul);
impl_binary_op!(Div, div, div);
impl_binary_op!(Rem, rem, fmod);

impl Neg for &Float {
    type Output = Float;

    fn neg(self) -> Float {
        self.negate()
    }
}

impl Neg for Float {
    type Output = Float;

    fn neg(self) -> Float {
        self.negate()
    }
}
