/*
    Traits and types relevant to rounding
*/

/// A description of rounding behavior.
///
/// For any computer number system, most mathematical operators
/// can be decomposed into two operations:
///  - a real number operation: `R^n -> R`, and
///  - a rounding operation: `R -> R`.
/// A `Context` describes the second operation: the set of representable
/// values a real result is fitted to, and the mode used to pick one.
pub trait Context: Sized {
    /// The rounding mode applied by this context.
    fn rounding_mode(&self) -> RoundingMode;
}

/// Rounding modes, named after the decimal rounding modes of
/// arbitrary-precision decimal libraries.
///
/// `Unnecessary` asserts the result is exact: discarded bits are
/// truncated and only reported through the `inexact` flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RoundingMode {
    /// Towards positive infinity.
    Ceiling,
    /// Towards negative infinity.
    Floor,
    /// Away from zero.
    Up,
    /// Towards zero (truncation).
    Down,
    /// To nearest, ties away from zero.
    HalfUp,
    /// To nearest, ties towards zero.
    HalfDown,
    /// To nearest, ties to even.
    #[default]
    HalfEven,
    /// No rounding expected.
    Unnecessary,
}

/// Direction a rounding mode takes for a given sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundingDirection {
    ToZero,
    AwayZero,
    ToEven,
}

impl RoundingMode {
    /// All rounding modes.
    pub const ALL: [RoundingMode; 8] = [
        RoundingMode::Ceiling,
        RoundingMode::Floor,
        RoundingMode::Up,
        RoundingMode::Down,
        RoundingMode::HalfUp,
        RoundingMode::HalfDown,
        RoundingMode::HalfEven,
        RoundingMode::Unnecessary,
    ];

    /// Translates a `RoundingMode` and sign bit to a `RoundingDirection`
    /// and a boolean indicating if the direction only specifies tie-breaking behavior.
    pub fn direction(&self, sign: bool) -> (bool, RoundingDirection) {
        match (self, sign) {
            (RoundingMode::HalfEven, _) => (true, RoundingDirection::ToEven),
            (RoundingMode::HalfUp, _) => (true, RoundingDirection::AwayZero),
            (RoundingMode::HalfDown, _) => (true, RoundingDirection::ToZero),
            (RoundingMode::Ceiling, false) => (false, RoundingDirection::AwayZero),
            (RoundingMode::Ceiling, true) => (false, RoundingDirection::ToZero),
            (RoundingMode::Floor, false) => (false, RoundingDirection::ToZero),
            (RoundingMode::Floor, true) => (false, RoundingDirection::AwayZero),
            (RoundingMode::Up, _) => (false, RoundingDirection::AwayZero),
            (RoundingMode::Down, _) => (false, RoundingDirection::ToZero),
            (RoundingMode::Unnecessary, _) => (false, RoundingDirection::ToZero),
        }
    }

    /// Returns true if the rounding information implies the kept digits,
    /// viewed as an integer, should be incremented by 1.
    ///
    /// `half_bit` is the first discarded bit and `sticky_bit` the OR of
    /// every discarded bit after it. `lsb` is the last kept bit and `sign`
    /// is true for negative values.
    pub fn requires_increment(&self, sign: bool, lsb: bool, half_bit: bool, sticky_bit: bool) -> bool {
        match self.direction(sign) {
            (true, RoundingDirection::ToEven) => {
                // no half bit => truncate
                // half bit and sticky bit => increment
                // tie => increment if lsb since we want it to be 0
                half_bit && (sticky_bit || lsb)
            }
            (true, RoundingDirection::AwayZero) => {
                // tie requires increment
                half_bit
            }
            (true, RoundingDirection::ToZero) => {
                // tie => truncate
                half_bit && sticky_bit
            }
            (false, RoundingDirection::AwayZero) => {
                // increment if not exact
                half_bit || sticky_bit
            }
            (false, RoundingDirection::ToZero) => false,
            (false, RoundingDirection::ToEven) => {
                // (unused)
                lsb
            }
        }
    }

    /// The sign of an exact zero sum of operands with opposite signs.
    pub fn zero_sum_sign(&self) -> bool {
        matches!(self, RoundingMode::Floor)
    }
}
