/*
    Errors
*/

use thiserror::Error;

/// Failures reported by fallible operations of this crate.
///
/// Numeric exceptions (overflow, division by zero, ...) are never errors:
/// they produce infinities, NaNs, or zeros and raise flags on the result.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("invalid format ({exponent_width} exponent bits, {significand_width} significand bits): {reason}")]
    InvalidFormat {
        exponent_width: u32,
        significand_width: u32,
        reason: &'static str,
    },

    #[error("layout has {bits} bits, format holds at most {bit_length}")]
    InvalidLayout { bits: u64, bit_length: u32 },

    #[error("unsupported radix: {0}")]
    InvalidRadix(u32),

    #[error("cannot parse {input:?} in radix {radix}")]
    Parse { input: String, radix: u32 },
}

pub type Result<T> = std::result::Result<T, Error>;
