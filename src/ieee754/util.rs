use bitvec::prelude::Lsb0;
use num_bigint::BigUint;
use num_traits::Zero;

type BitVec = bitvec::prelude::BitVec<u32, Lsb0>;

// Converts a `BigUint` to a `BitVec` of at least `width` bits
pub(crate) fn biguint_to_bitvec(i: &BigUint, width: usize) -> BitVec {
    let mut bv = BitVec::from_vec(i.to_u32_digits());
    if bv.len() < width {
        bv.resize(width, false);
    }
    bv
}

// Drops the low `shift` bits of `c`, returning the kept bits,
// the half bit (the most significant dropped bit) and the sticky bit
// (1 when at least one of the other dropped bits was 1)
pub(crate) fn split_round_bits(c: &BigUint, shift: u64) -> (BigUint, bool, bool) {
    if shift == 0 {
        return (c.clone(), false, false);
    }

    let len = c.bits();
    if shift > len + 1 {
        // every bit is below the half bit
        return (BigUint::zero(), false, !c.is_zero());
    }

    let shift = shift as usize;
    let bv = biguint_to_bitvec(c, shift);
    let (low, _) = bv.split_at(shift);
    let half_bit = low[shift - 1];
    let sticky_bit = low[..shift - 1].any();
    (c >> shift, half_bit, sticky_bit)
}
