/*
    Definition of `Float` values
*/

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use num_bigint::BigUint;
use num_traits::{ToPrimitive, Zero};

use super::*;
use crate::{Context, Number};

// Constructors and getters
impl Float {
    pub(crate) fn from_parts(fmt: Format, bits: BigUint, flags: Exceptions) -> Self {
        Self { fmt, bits, flags }
    }

    pub(crate) fn with_flags(mut self, flags: Exceptions) -> Self {
        self.flags = flags;
        self
    }

    /// Returns the format of this `Float`.
    pub fn format(&self) -> Format {
        self.fmt
    }

    /// Returns the bit layout of this `Float`.
    pub fn to_bits(&self) -> &BigUint {
        &self.bits
    }

    /// Consumes this `Float`, returning its bit layout.
    pub fn into_bits(self) -> BigUint {
        self.bits
    }

    /// Returns the sign bit.
    pub fn sign(&self) -> bool {
        self.bits.bit(u64::from(self.fmt.bit_length() - 1))
    }

    /// Returns the biased exponent field.
    pub fn biased_exponent(&self) -> u64 {
        self.fmt.biased_exponent_of(&self.bits)
    }

    /// Returns the stored significand field (without the implicit bit).
    pub fn significand(&self) -> BigUint {
        &self.bits & self.fmt.significand_mask()
    }

    /// Returns the unbiased exponent when this `Float` is viewed as
    /// `(-1)^s 2^e m` with `m` in `[1, 2)` for normal numbers.
    /// Zeros and subnormals report `min_exponent`; infinities and NaN
    /// report `max_exponent + 1`.
    pub fn exponent(&self) -> i64 {
        match self.biased_exponent() {
            0 => self.fmt.min_exponent(),
            biased => biased as i64 - self.fmt.bias(),
        }
    }

    /// Returns the exception flags raised when producing this `Float`.
    pub fn flags(&self) -> Exceptions {
        self.flags
    }

    /// Returns this `Float` with its exception flags cleared.
    pub fn clear_flags(mut self) -> Self {
        self.flags.clear();
        self
    }

    /// Returns the invalid operation exception flag.
    pub fn invalid_flag(&self) -> bool {
        self.flags.invalid()
    }

    /// Returns the division by zero exception flag.
    pub fn div_by_zero_flag(&self) -> bool {
        self.flags.div_by_zero()
    }

    /// Returns the overflow exception flag.
    pub fn overflow_flag(&self) -> bool {
        self.flags.overflow()
    }

    /// Returns the underflow exception flag.
    pub fn underflow_flag(&self) -> bool {
        self.flags.underflow()
    }

    /// Returns the inexact exception flag.
    pub fn inexact_flag(&self) -> bool {
        self.flags.inexact()
    }

    /// Returns the carry flag.
    pub fn carry_flag(&self) -> bool {
        self.flags.carry()
    }

    // Unpacks the layout
    pub(crate) fn num(&self) -> FloatNum {
        let sign = self.sign();
        let biased = self.biased_exponent();
        let field = self.significand();
        if biased == self.fmt.exponent_field_max() {
            if field.is_zero() {
                FloatNum::Infinity(sign)
            } else {
                FloatNum::Nan
            }
        } else if biased == 0 {
            FloatNum::Finite {
                sign,
                exp: self.fmt.expmin(),
                sig: field,
            }
        } else {
            let mut sig = field;
            sig.set_bit(u64::from(self.fmt.mantissa_width()), true);
            FloatNum::Finite {
                sign,
                exp: biased as i64 - self.fmt.bias() - i64::from(self.fmt.mantissa_width()),
                sig,
            }
        }
    }
}

// Classification
impl Float {
    /// Returns true if this `Float` is a signed zero.
    pub fn is_zero(&self) -> bool {
        self.biased_exponent() == 0 && self.significand().is_zero()
    }

    /// Returns true if this `Float` is `-0`.
    pub fn is_negative_zero(&self) -> bool {
        self.is_zero() && self.sign()
    }

    /// Returns true if this `Float` is subnormal.
    pub fn is_subnormal(&self) -> bool {
        self.biased_exponent() == 0 && !self.significand().is_zero()
    }

    /// Returns true if this `Float` is a normal number.
    pub fn is_normal(&self) -> bool {
        let biased = self.biased_exponent();
        biased != 0 && biased != self.fmt.exponent_field_max()
    }

    /// Returns true if this `Float` is an infinity.
    pub fn is_infinite(&self) -> bool {
        self.biased_exponent() == self.fmt.exponent_field_max() && self.significand().is_zero()
    }

    /// Returns true if this `Float` is NaN.
    pub fn is_nan(&self) -> bool {
        self.biased_exponent() == self.fmt.exponent_field_max() && !self.significand().is_zero()
    }

    /// Returns true if this `Float` is zero, subnormal or normal.
    pub fn is_finite(&self) -> bool {
        self.biased_exponent() != self.fmt.exponent_field_max()
    }

    /// Returns -1, 0 or 1 following the sign of this `Float`.
    /// Zeros and NaN return 0.
    pub fn signum(&self) -> i32 {
        if self.is_zero() || self.is_nan() {
            0
        } else if self.sign() {
            -1
        } else {
            1
        }
    }
}

// Sign manipulation
impl Float {
    /// Returns this `Float` with its sign bit flipped.
    pub fn negate(&self) -> Self {
        let mut bits = self.bits.clone();
        let sign_bit = u64::from(self.fmt.bit_length() - 1);
        bits.set_bit(sign_bit, !self.sign());
        Self::from_parts(self.fmt, bits, Exceptions::default())
    }

    /// Returns this `Float` with its sign bit cleared.
    pub fn abs(&self) -> Self {
        self.with_sign(false)
    }

    /// Returns this `Float` with the sign of `other`.
    pub fn copy_sign(&self, other: &Float) -> Self {
        self.with_sign(other.sign())
    }

    pub(crate) fn with_sign(&self, sign: bool) -> Self {
        let mut bits = self.bits.clone();
        bits.set_bit(u64::from(self.fmt.bit_length() - 1), sign);
        Self::from_parts(self.fmt, bits, Exceptions::default())
    }
}

// Ordering
impl Float {
    /// Compares two values numerically.
    /// Returns `None` if either is NaN; `-0` and `+0` compare equal.
    pub fn compare(&self, other: &Float) -> Option<Ordering> {
        match (self.num(), other.num()) {
            (FloatNum::Nan, _) | (_, FloatNum::Nan) => None,
            (FloatNum::Infinity(s1), FloatNum::Infinity(s2)) => Some(match (s1, s2) {
                (true, false) => Ordering::Less,
                (false, true) => Ordering::Greater,
                _ => Ordering::Equal,
            }),
            (FloatNum::Infinity(s), _) => Some(if s { Ordering::Less } else { Ordering::Greater }),
            (_, FloatNum::Infinity(s)) => Some(if s { Ordering::Greater } else { Ordering::Less }),
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
            ) => Some(compare_finite(s1, e1, &c1, s2, e2, &c2)),
        }
    }

    /// Returns the larger value. NaN operands are ignored and `+0`
    /// is larger than `-0`. The result is in the promoted format.
    pub fn max(&self, other: &Float) -> Float {
        self.select(other, Ordering::Greater, false)
    }

    /// Returns the smaller value. NaN operands are ignored and `-0`
    /// is smaller than `+0`. The result is in the promoted format.
    pub fn min(&self, other: &Float) -> Float {
        self.select(other, Ordering::Less, true)
    }

    fn select(&self, other: &Float, wanted: Ordering, zero_sign: bool) -> Float {
        let out = self.fmt.promote(&other.fmt);
        let chosen = match self.compare(other) {
            None if self.is_nan() => other,
            None => self,
            Some(Ordering::Equal) if self.sign() == zero_sign => self,
            Some(Ordering::Equal) => other,
            Some(ord) if ord == wanted => self,
            Some(_) => other,
        };
        chosen.cast(&out)
    }
}

// Compares the magnitudes `c1 * 2^e1` and `c2 * 2^e2`
pub(crate) fn compare_magnitude(e1: i64, c1: &BigUint, e2: i64, c2: &BigUint) -> Ordering {
    match (c1.is_zero(), c2.is_zero()) {
        (true, true) => return Ordering::Equal,
        (true, false) => return Ordering::Less,
        (false, true) => return Ordering::Greater,
        _ => (),
    }

    let msb1 = e1 + c1.bits() as i64;
    let msb2 = e2 + c2.bits() as i64;
    match msb1.cmp(&msb2) {
        Ordering::Equal => {
            // same leading bit: aligning is bounded by the widths
            let e = e1.min(e2);
            let m1 = c1 << ((e1 - e) as u64);
            let m2 = c2 << ((e2 - e) as u64);
            m1.cmp(&m2)
        }
        ord => ord,
    }
}

fn compare_finite(s1: bool, e1: i64, c1: &BigUint, s2: bool, e2: i64, c2: &BigUint) -> Ordering {
    let (z1, z2) = (c1.is_zero(), c2.is_zero());
    if z1 && z2 {
        return Ordering::Equal;
    }

    // signs of zeros do not matter
    let neg1 = s1 && !z1;
    let neg2 = s2 && !z2;
    match (neg1, neg2) {
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => compare_magnitude(e1, c1, e2, c2),
        (true, true) => compare_magnitude(e1, c1, e2, c2).reverse(),
    }
}

impl PartialEq for Float {
    /// Bitwise equality: same layout widths and same bits.
    /// Unlike `compare`, a NaN equals itself and `-0 != +0`.
    fn eq(&self, other: &Self) -> bool {
        self.fmt.same_layout(&other.fmt) && self.bits == other.bits
    }
}

impl Eq for Float {}

impl Hash for Float {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.fmt.exponent_width().hash(state);
        self.fmt.significand_width().hash(state);
        self.bits.hash(state);
    }
}

impl Float {
    /// Returns the layout as a `u64` when it fits.
    pub fn to_u64_bits(&self) -> Option<u64> {
        self.bits.to_u64()
    }
}

impl Context for Format {
    fn rounding_mode(&self) -> RoundingMode {
        self.rm
    }
}

impl Number for Float {
    type Ctx = Format;

    fn is_zero(&self) -> bool {
        Float::is_zero(self)
    }

    fn is_infinity(&self) -> bool {
        Float::is_infinite(self)
    }

    fn is_nan(&self) -> bool {
        Float::is_nan(self)
    }

    fn is_finite(&self) -> bool {
        Float::is_finite(self)
    }

    fn is_rational(&self) -> bool {
        Float::is_finite(self)
    }

    fn round(&self, ctx: &Self::Ctx) -> Self {
        self.cast(ctx)
    }

    fn neg(&self, ctx: &Self::Ctx) -> Self {
        self.negate().cast(ctx)
    }

    fn abs(&self, ctx: &Self::Ctx) -> Self {
        Float::abs(self).cast(ctx)
    }

    fn add(&self, other: &Self, ctx: &Self::Ctx) -> Self {
        self.add_in(other, ctx)
    }

    fn sub(&self, other: &Self, ctx: &Self::Ctx) -> Self {
        self.sub_in(other, ctx)
    }

    fn mul(&self, other: &Self, ctx: &Self::Ctx) -> Self {
        self.mul_in(other, ctx)
    }

    fn div(&self, other: &Self, ctx: &Self::Ctx) -> Self {
        self.div_in(other, ctx)
    }
}
