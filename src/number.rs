/*
    Defines a number
*/

use crate::Context;

/// A rounded number.
///
/// Values may be special (infinities, NaN) as in IEEE-754. The
/// arithmetic methods compute the exact real result first and round it
/// once with the given context, whatever contexts produced the operands.
pub trait Number: Clone {
    /// The context a result is rounded with.
    type Ctx: Context;

    /// True for either zero.
    fn is_zero(&self) -> bool;

    /// True for either infinity.
    fn is_infinity(&self) -> bool;

    /// True for NaN.
    fn is_nan(&self) -> bool;

    /// True for zeros and every other real value.
    fn is_finite(&self) -> bool;

    /// True if this encodes a real (hence rational) value.
    fn is_rational(&self) -> bool;

    /// Rounds this value with `ctx`.
    fn round(&self, ctx: &Self::Ctx) -> Self;

    /// Returns `-self` rounded with `ctx`.
    fn neg(&self, ctx: &Self::Ctx) -> Self;

    /// Returns `|self|` rounded with `ctx`.
    fn abs(&self, ctx: &Self::Ctx) -> Self;

    /// Returns `self + other` rounded with `ctx`.
    fn add(&self, other: &Self, ctx: &Self::Ctx) -> Self;

    /// Returns `self - other` rounded with `ctx`.
    fn sub(&self, other: &Self, ctx: &Self::Ctx) -> Self;

    /// Returns `self * other` rounded with `ctx`.
    fn mul(&self, other: &Self, ctx: &Self::Ctx) -> Self;

    /// Returns `self / other` rounded with `ctx`.
    fn div(&self, other: &Self, ctx: &Self::Ctx) -> Self;
}
