/*
    Format descriptors
*/

use std::fmt;

use num_bigint::BigUint;
use num_traits::{One, ToPrimitive, Zero};

use super::*;
use crate::{Error, Result};

// Rejects a width pair outside of the supported range.
fn check_widths(e: u32, s: u32) -> Result<()> {
    let invalid = |reason| Error::InvalidFormat {
        exponent_width: e,
        significand_width: s,
        reason,
    };
    if !(Format::MIN_EXPONENT_WIDTH..=Format::MAX_EXPONENT_WIDTH).contains(&e) {
        return Err(invalid("exponent width out of range"));
    }
    if !(Format::MIN_SIGNIFICAND_WIDTH..=Format::MAX_SIGNIFICAND_WIDTH).contains(&s) {
        return Err(invalid("significand width out of range"));
    }
    if e + s < Format::MIN_BIT_LENGTH {
        return Err(invalid("bit length too small"));
    }
    Ok(())
}

impl Format {
    pub const MIN_EXPONENT_WIDTH: u32 = 3;
    pub const MAX_EXPONENT_WIDTH: u32 = 30;
    pub const MIN_SIGNIFICAND_WIDTH: u32 = 4;
    pub const MAX_SIGNIFICAND_WIDTH: u32 = 512;
    pub const MIN_BIT_LENGTH: u32 = 7;

    /// Creates a format with `exponent_width` exponent bits and
    /// `significand_width` significand bits (including the implicit bit).
    pub fn new(exponent_width: u32, significand_width: u32, rm: RoundingMode) -> Result<Self> {
        check_widths(exponent_width, significand_width)?;
        Ok(Self {
            exponent_width,
            significand_width,
            rm,
        })
    }

    /// Creates a format from its total bit length and exponent width.
    pub fn with_bit_length(bit_length: u32, exponent_width: u32, rm: RoundingMode) -> Result<Self> {
        let significand_width = bit_length.saturating_sub(exponent_width);
        Self::new(exponent_width, significand_width, rm)
    }

    const fn preset(exponent_width: u32, significand_width: u32) -> Self {
        Self {
            exponent_width,
            significand_width,
            rm: RoundingMode::HalfEven,
        }
    }

    /// 8-bit format: 4 exponent bits, 4 significand bits.
    pub const fn bit8() -> Self {
        Self::preset(4, 4)
    }

    /// IEEE-754 binary16.
    pub const fn half() -> Self {
        Self::preset(5, 11)
    }

    /// IEEE-754 binary32.
    pub const fn single() -> Self {
        Self::preset(8, 24)
    }

    /// IEEE-754 binary64.
    pub const fn double() -> Self {
        Self::preset(11, 53)
    }

    /// The x87 80-bit extended format, without an explicit integer bit.
    pub const fn x86_extended() -> Self {
        Self::preset(15, 65)
    }

    /// IEEE-754 binary128.
    pub const fn quadruple() -> Self {
        Self::preset(15, 113)
    }

    /// IEEE-754 binary256.
    pub const fn octuple() -> Self {
        Self::preset(19, 237)
    }

    /// Returns this format with a different rounding mode.
    pub fn with_rounding_mode(&self, rm: RoundingMode) -> Self {
        Self { rm, ..*self }
    }

    /// Returns the promoted format of two formats: the larger
    /// exponent width, the larger significand width and the rounding
    /// mode of `self`.
    pub fn promote(&self, other: &Format) -> Self {
        Self {
            exponent_width: self.exponent_width.max(other.exponent_width),
            significand_width: self.significand_width.max(other.significand_width),
            rm: self.rm,
        }
    }

    /// Returns true if both formats have the same bit layout.
    pub fn same_layout(&self, other: &Format) -> bool {
        self.exponent_width == other.exponent_width
            && self.significand_width == other.significand_width
    }

    pub fn rounding_mode(&self) -> RoundingMode {
        self.rm
    }

    pub fn exponent_width(&self) -> u32 {
        self.exponent_width
    }

    /// Returns the significand width including the implicit bit.
    pub fn significand_width(&self) -> u32 {
        self.significand_width
    }

    /// Returns the width of the stored significand field.
    pub fn mantissa_width(&self) -> u32 {
        self.significand_width - 1
    }

    pub fn bit_length(&self) -> u32 {
        self.exponent_width + self.significand_width
    }

    pub fn bias(&self) -> i64 {
        (1i64 << (self.exponent_width - 1)) - 1
    }

    /// Largest unbiased exponent of a finite value.
    pub fn max_exponent(&self) -> i64 {
        self.bias()
    }

    /// Smallest unbiased exponent of a normal value.
    pub fn min_exponent(&self) -> i64 {
        1 - self.bias()
    }

    // Exponent of the least significant bit of the smallest subnormal
    pub(crate) fn expmin(&self) -> i64 {
        self.min_exponent() - (self.significand_width as i64 - 1)
    }

    // All-ones value of the exponent field
    pub(crate) fn exponent_field_max(&self) -> u64 {
        (1u64 << self.exponent_width) - 1
    }

    /// Mask selecting the sign bit of a bit layout.
    pub fn sign_mask(&self) -> BigUint {
        BigUint::one() << (self.bit_length() - 1)
    }

    /// Mask selecting the exponent field of a bit layout.
    pub fn exponent_mask(&self) -> BigUint {
        BigUint::from(self.exponent_field_max()) << self.mantissa_width()
    }

    /// Mask selecting the stored significand field of a bit layout.
    pub fn significand_mask(&self) -> BigUint {
        (BigUint::one() << self.mantissa_width()) - 1u32
    }

    /// Number of significant digits needed in `radix` to tell apart
    /// values with `bits` significand bits: one more than the digits
    /// `bits` bits span, and at least two.
    ///
    /// This count always reads back to the same value, though it is not
    /// always the shortest string that does. The largest single value
    /// prints as `3.40282347E+38` here, while eight digits
    /// (`to_decimal_digits(8)`) give `3.4028235E+38`.
    pub fn significant_digits(radix: u32, bits: u32) -> usize {
        (digits_for_bits(radix, bits) + 1).max(2)
    }

    /// Default number of significant decimal digits of this format.
    pub fn decimal_digits(&self) -> usize {
        Self::significant_digits(10, self.significand_width)
    }

    // Packs fields into a value; fields must already fit their widths
    pub(crate) fn pack(&self, sign: bool, biased: u64, field: BigUint) -> Float {
        let mut bits = field;
        bits |= BigUint::from(biased) << self.mantissa_width();
        if sign {
            bits.set_bit(u64::from(self.bit_length() - 1), true);
        }
        Float::from_parts(*self, bits, Exceptions::default())
    }

    /// Builds a value from its fields, truncating each one to its width.
    pub fn from_fields(&self, sign: bool, biased_exponent: u64, significand: &BigUint) -> Float {
        let biased = biased_exponent & self.exponent_field_max();
        let field = significand & self.significand_mask();
        self.pack(sign, biased, field)
    }

    /// Wraps a bit layout of this format.
    pub fn from_bit_layout(&self, layout: BigUint) -> Result<Float> {
        if layout.bits() > u64::from(self.bit_length()) {
            return Err(Error::InvalidLayout {
                bits: layout.bits(),
                bit_length: self.bit_length(),
            });
        }
        Ok(Float::from_parts(*self, layout, Exceptions::default()))
    }

    /// Returns a signed zero.
    pub fn zero(&self, sign: bool) -> Float {
        self.pack(sign, 0, BigUint::zero())
    }

    /// Returns a signed infinity.
    pub fn infinity(&self, sign: bool) -> Float {
        self.pack(sign, self.exponent_field_max(), BigUint::zero())
    }

    /// Returns the canonical quiet NaN.
    pub fn nan(&self) -> Float {
        let field = BigUint::one() << (self.mantissa_width() - 1);
        self.pack(false, self.exponent_field_max(), field)
    }

    /// Returns the largest finite value.
    pub fn max_value(&self) -> Float {
        self.pack(false, self.exponent_field_max() - 1, self.significand_mask())
    }

    /// Returns the smallest positive normal value.
    pub fn min_normal(&self) -> Float {
        self.pack(false, 1, BigUint::zero())
    }

    /// Returns the smallest positive subnormal value.
    pub fn min_value(&self) -> Float {
        self.pack(false, 0, BigUint::one())
    }

    /// Returns the integer `n` rounded into this format.
    pub fn from_i64(&self, n: i64) -> Float {
        self.round_finite(n < 0, 0, BigUint::from(n.unsigned_abs()), false)
    }

    // Returns the biased exponent field of a layout
    pub(crate) fn biased_exponent_of(&self, bits: &BigUint) -> u64 {
        ((bits >> self.mantissa_width()) & BigUint::from(self.exponent_field_max()))
            .to_u64()
            .unwrap_or_default()
    }
}

// ceil(bits * log_radix(2)), at least one
pub(crate) fn digits_for_bits(radix: u32, bits: u32) -> usize {
    let n = if radix.is_power_of_two() {
        let per_digit = radix.trailing_zeros();
        (bits + per_digit - 1) / per_digit
    } else {
        // a tolerance keeps exact products from rounding up
        (f64::from(bits) / f64::from(radix).log2() - 1e-9).ceil() as u32
    };
    n.max(1) as usize
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "binary{}(e={}, p={}, {:?})",
            self.bit_length(),
            self.exponent_width,
            self.significand_width,
            self.rm
        )
    }
}
