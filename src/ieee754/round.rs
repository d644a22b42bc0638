/*
    Rounding
*/

use num_bigint::BigUint;
use num_traits::Zero;

use crate::diagnostics;
use crate::ieee754::util::split_round_bits;
use crate::ieee754::*;

impl Format {
    /// Rounds the real number `(-1)^sign * sig * 2^exp` into this format.
    ///
    /// `sticky` marks a non-zero tail below the last bit of `sig`.
    /// Callers passing a sticky tail must supply at least
    /// `significand_width + 2` bits in `sig` so the tail stays
    /// below the half bit.
    pub(crate) fn round_finite(&self, sign: bool, exp: i64, sig: BigUint, sticky: bool) -> Float {
        if sig.is_zero() {
            // the exceptional case: exact zero
            return self.zero(sign);
        }

        // `msb` - exponent of the leading bit of the unrounded value
        // `lsb_exp` - exponent of the last kept bit: the format precision
        //  below `msb`, but never below the smallest subnormal
        let p = i64::from(self.significand_width);
        let msb = exp + sig.bits() as i64 - 1;
        let lsb_exp = i64::max(msb - (p - 1), self.expmin());

        let shift = lsb_exp - exp;
        let (c, half_bit, sticky_bit) = if shift <= 0 {
            (sig << ((-shift) as u64), false, sticky)
        } else {
            let (c, half_bit, sticky_bit) = split_round_bits(&sig, shift as u64);
            (c, half_bit, sticky_bit || sticky)
        };

        self.round_finalize(sign, msb, lsb_exp, c, half_bit, sticky_bit)
    }

    // Constructs a new `Float` based on rounding information.
    // `c` holds at most `significand_width` bits with its last bit at `lsb_exp`.
    fn round_finalize(
        &self,
        sign: bool,
        msb: i64,
        mut lsb_exp: i64,
        mut c: BigUint,
        half_bit: bool,
        sticky_bit: bool,
    ) -> Float {
        let p = u64::from(self.significand_width);
        let increment = self.rm.requires_increment(sign, c.bit(0), half_bit, sticky_bit);
        if increment {
            c += 1u32;
            if c.bits() > p {
                // carried into a new binade
                c >>= 1u32;
                lsb_exp += 1;
            }
        }

        // tininess is detected before rounding
        let inexact = half_bit || sticky_bit;
        let tiny = msb < self.min_exponent();
        let flags = Exceptions::default()
            .with_underflow(tiny && inexact)
            .with_inexact(inexact)
            .with_carry(increment);

        if c.is_zero() {
            diagnostics::report(format_args!("underflow to zero in {}", self));
            return self.zero(sign).with_flags(flags);
        }

        if c.bits() < p {
            // subnormal
            return self.pack(sign, 0, c).with_flags(flags);
        }

        let e = lsb_exp + (p as i64 - 1);
        if e > self.max_exponent() {
            diagnostics::report(format_args!(
                "overflow in {}: exponent {} above {}",
                self,
                e,
                self.max_exponent()
            ));
            let flags = Exceptions::default()
                .with_overflow(true)
                .with_inexact(true)
                .with_carry(increment);
            // every rounding mode overflows to infinity
            return self.infinity(sign).with_flags(flags);
        }

        // drop the implicit bit
        c.set_bit(p - 1, false);
        self.pack(sign, (e + self.bias()) as u64, c).with_flags(flags)
    }
}
