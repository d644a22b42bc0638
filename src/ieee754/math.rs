/*
    Transcendental functions

    Computed with MPFR at a working precision wider than the format,
    truncated toward zero, then rounded once into the format with the
    MPFR ternary value as the sticky bit.
*/

use std::cmp::Ordering;

use num_bigint::BigUint;
use num_traits::Zero;
use rug::float::{Constant, Round, Special};
use rug::integer::Order;
use rug::ops::{DivAssignRound, PowAssignRound};
use rug::{Float as MpFloat, Integer};

use super::*;

// Bits carried beyond the significand width of the target format
const GUARD_BITS: u32 = 32;

impl Format {
    fn working_precision(&self) -> u32 {
        self.significand_width + GUARD_BITS
    }

    // Rounds an MPFR value into this format. `f` must be truncated toward
    // zero and `inexact` must say whether the truncation dropped anything.
    fn from_mpfr(&self, f: &MpFloat, inexact: bool) -> Float {
        if f.is_nan() {
            self.nan()
        } else if f.is_infinite() {
            self.infinity(f.is_sign_negative())
        } else if f.is_zero() {
            self.zero(f.is_sign_negative())
        } else {
            match f.to_integer_exp() {
                Some((int, exp)) => {
                    let sign = int.is_negative();
                    let sig = BigUint::new(int.to_digits::<u32>(Order::Lsf));
                    self.round_finite(sign, i64::from(exp), sig, inexact)
                }
                None => self.nan(),
            }
        }
    }

    /// Returns pi rounded into this format.
    pub fn pi(&self) -> Float {
        let (pi, ord) = MpFloat::with_val_round(self.working_precision(), Constant::Pi, Round::Zero);
        self.from_mpfr(&pi, ord != Ordering::Equal)
    }

    /// Returns Euler's number rounded into this format.
    pub fn e(&self) -> Float {
        let mut e = MpFloat::with_val(self.working_precision(), 1);
        let ord = e.exp_round(Round::Zero);
        self.from_mpfr(&e, ord != Ordering::Equal)
    }

    /// Returns `180 / pi`, the factor taking radians to degrees.
    pub fn degrees(&self) -> Float {
        // pi rounded up keeps the truncated quotient below the true value
        let prec = self.working_precision();
        let (pi, _) = MpFloat::with_val_round(prec, Constant::Pi, Round::Up);
        let mut r = MpFloat::with_val(prec, 180);
        r.div_assign_round(&pi, Round::Zero);
        self.from_mpfr(&r, true)
    }

    /// Returns `pi / 180`, the factor taking degrees to radians.
    pub fn radians(&self) -> Float {
        let prec = self.working_precision();
        let (mut r, _) = MpFloat::with_val_round(prec, Constant::Pi, Round::Zero);
        r.div_assign_round(180, Round::Zero);
        self.from_mpfr(&r, true)
    }
}

impl Float {
    // Converts to MPFR exactly; `prec` must cover the significand width
    fn to_mpfr(&self, prec: u32) -> MpFloat {
        match self.num() {
            FloatNum::Nan => MpFloat::with_val(prec, Special::Nan),
            FloatNum::Infinity(false) => MpFloat::with_val(prec, Special::Infinity),
            FloatNum::Infinity(true) => MpFloat::with_val(prec, Special::NegInfinity),
            FloatNum::Finite { sign, exp, sig } => {
                if sig.is_zero() {
                    let zero = if sign { Special::NegZero } else { Special::Zero };
                    return MpFloat::with_val(prec, zero);
                }

                let int = Integer::from_digits(&sig.to_u32_digits(), Order::Lsf);
                let mut f = MpFloat::with_val(prec, int);
                f <<= exp as i32;
                if sign {
                    -f
                } else {
                    f
                }
            }
        }
    }

    // Raises the flags MPFR does not report: an invalid operation on
    // non-NaN operands and a pole at a finite operand
    fn special_flags(r: Float, operands: &[&Float]) -> Float {
        if r.is_nan() && !operands.iter().any(|x| x.is_nan()) {
            r.with_flags(Exceptions::default().with_invalid(true))
        } else if r.is_infinite() && operands.iter().all(|x| x.is_finite()) && r.flags.is_empty() {
            r.with_flags(Exceptions::default().with_div_by_zero(true))
        } else {
            r
        }
    }

    // `f` evaluates in place toward zero and returns the MPFR ternary value
    fn unary(&self, f: impl FnOnce(&mut MpFloat) -> Ordering) -> Float {
        let mut x = self.to_mpfr(self.fmt.working_precision());
        let ord = f(&mut x);
        Self::special_flags(self.fmt.from_mpfr(&x, ord != Ordering::Equal), &[self])
    }

    fn binary(&self, other: &Float, f: impl FnOnce(&mut MpFloat, &MpFloat) -> Ordering) -> Float {
        let out = self.fmt.promote(&other.fmt);
        let prec = out.working_precision();
        let mut x = self.to_mpfr(prec);
        let ord = f(&mut x, &other.to_mpfr(prec));
        let r = out.from_mpfr(&x, ord != Ordering::Equal);
        Self::special_flags(r, &[self, other])
    }

    /// Computes `e^x`.
    pub fn exp(&self) -> Float {
        self.unary(|x| x.exp_round(Round::Zero))
    }

    /// Computes the natural logarithm.
    pub fn ln(&self) -> Float {
        self.unary(|x| x.ln_round(Round::Zero))
    }

    /// Computes the base-10 logarithm.
    pub fn log10(&self) -> Float {
        self.unary(|x| x.log10_round(Round::Zero))
    }

    /// Computes the base-2 logarithm.
    pub fn log2(&self) -> Float {
        self.unary(|x| x.log2_round(Round::Zero))
    }

    /// Computes the logarithm in `base`.
    ///
    /// The quotient of two logarithms carries two MPFR roundings, so the
    /// result is faithful rather than correctly rounded: an exact result
    /// such as `log(8, 2)` may land one ulp low under directed rounding.
    pub fn log(&self, base: &Float) -> Float {
        self.binary(base, |x, b| {
            let num = x.ln_round(Round::Zero);
            let mut den = b.clone();
            let den_ord = den.ln_round(Round::Zero);
            let quo = x.div_assign_round(&den, Round::Zero);
            if num == Ordering::Equal && den_ord == Ordering::Equal {
                quo
            } else {
                Ordering::Less
            }
        })
    }

    /// Computes `x^y` with the special cases of C99 `pow`.
    pub fn pow(&self, y: &Float) -> Float {
        self.binary(y, |x, y| x.pow_assign_round(y, Round::Zero))
    }

    pub fn sin(&self) -> Float {
        self.unary(|x| x.sin_round(Round::Zero))
    }

    pub fn cos(&self) -> Float {
        self.unary(|x| x.cos_round(Round::Zero))
    }

    pub fn tan(&self) -> Float {
        self.unary(|x| x.tan_round(Round::Zero))
    }

    pub fn asin(&self) -> Float {
        self.unary(|x| x.asin_round(Round::Zero))
    }

    pub fn acos(&self) -> Float {
        self.unary(|x| x.acos_round(Round::Zero))
    }

    pub fn atan(&self) -> Float {
        self.unary(|x| x.atan_round(Round::Zero))
    }

    /// Computes the angle of the point `(x, self)`.
    pub fn atan2(&self, x: &Float) -> Float {
        self.binary(x, |y, x| y.atan2_round(x, Round::Zero))
    }

    pub fn sinh(&self) -> Float {
        self.unary(|x| x.sinh_round(Round::Zero))
    }

    pub fn cosh(&self) -> Float {
        self.unary(|x| x.cosh_round(Round::Zero))
    }

    pub fn tanh(&self) -> Float {
        self.unary(|x| x.tanh_round(Round::Zero))
    }
}
