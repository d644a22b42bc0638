/*
    Binary floating-point formats of configurable width
*/

use num_bigint::BigUint;

use crate::RoundingMode;

mod arithmetic;
mod cast;
mod convert;
mod exceptions;
mod format;
mod integral;
mod math;
mod number;
mod round;
mod string;
mod util;

// Unpacked floating-point encoding grouped by classification
#[derive(Debug, Clone)]
pub(crate) enum FloatNum {
    // signed zero or finite number: (-1)^sign * sig * 2^exp
    Finite { sign: bool, exp: i64, sig: BigUint },
    // infinity (+/-)
    Infinity(bool),
    // not-a-number
    Nan,
}

/** Exception flags as specified by the IEEE-754 standard.
 *
 * Besides returning a (possibly) numerical result, any computation with
 * floating-point numbers may also raise exceptions depending on certain conditions.
 * These exceptions include:
 *
 *  - invalid: no useful definable result;
 *  - division by zero: an infinite result for finite arguments;
 *  - overflow: result exceeded in magnitude what would have been the rounded result
 *      had the exponent range been unbounded;
 *  - underflow: tiny, non-zero result that is also inexact;
 *  - inexact: result would be different had both the exponent range and precision been unbounded.
 *
 * The `carry` flag records that rounding incremented the significand.
 * Flags are diagnostic only and never change a numeric result.
 */
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct Exceptions {
    invalid: bool,
    div_by_zero: bool,
    overflow: bool,
    underflow: bool,
    inexact: bool,
    carry: bool,
}

/** A binary floating-point format in the style of IEEE-754.
 *
 * A format is described by the width of its exponent field, the width
 * of its significand (including the implicit leading bit) and the
 * rounding mode used by every operation producing a value in it.
 * Formats are immutable; they mint `Float` values.
 *
 */
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Format {
    exponent_width: u32,
    significand_width: u32,
    rm: RoundingMode,
}

/** A floating-point value of some `Format`.
 *
 * The value is stored as its bit layout
 * `[sign:1][exponent:E][significand:P-1]` in an unsigned big integer.
 * Values of different formats are never bit-compatible: mixed arithmetic
 * rounds into the promoted format of both operands.
 *
 */
#[derive(Debug, Clone)]
pub struct Float {
    fmt: Format,
    bits: BigUint,
    flags: Exceptions,
}
