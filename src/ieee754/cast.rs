/*
    Casting between formats
*/

use super::*;

impl Float {
    /// Rounds this `Float` into the format `target` using the
    /// rounding mode of `target`.
    ///
    /// NaN, infinities and zeros keep their category. Finite values
    /// overflow to infinity (or the largest value under directed
    /// rounding) and underflow to zero through subnormals.
    pub fn cast(&self, target: &Format) -> Float {
        if self.fmt.same_layout(target) {
            // identical layouts: nothing to round
            return Float::from_parts(*target, self.bits.clone(), Exceptions::default());
        }

        match self.num() {
            FloatNum::Nan => target.nan(),
            FloatNum::Infinity(sign) => target.infinity(sign),
            FloatNum::Finite { sign, exp, sig } => target.round_finite(sign, exp, sig, false),
        }
    }

    /// Returns this `Float` in the same layout with a different rounding mode.
    pub fn with_rounding_mode(&self, rm: RoundingMode) -> Float {
        Float::from_parts(self.fmt.with_rounding_mode(rm), self.bits.clone(), self.flags)
    }
}
