//! Per-ciphersuite constants. Everything here is derived from the curve
//! type; only the suite byte is carried at runtime.

use elliptic_curve::{
    generic_array::typenum::Unsigned, sec1::ModulusSize, Curve, CurveArithmetic, Field, Scalar,
};

use crate::Vrf;

impl<C, D> Vrf<C, D>
where
    C: Curve + CurveArithmetic,
    C::FieldBytesSize: ModulusSize,
{
    /// Number of points on the curve divided by the prime order of the
    /// group. Both supported curves have cofactor 1; a curve with a larger
    /// cofactor needs this value threaded through `proof_to_hash`.
    pub(crate) const fn cofactor(&self) -> Scalar<C> {
        <C as CurveArithmetic>::Scalar::ONE
    }

    /// Length, in octets, of a point encoded in SEC1 compressed form:
    /// one prefix byte plus the x-coordinate.
    pub(crate) const fn pt_len(&self) -> usize {
        <C as Curve>::FieldBytesSize::USIZE + 1
    }

    /// Length, in octets, of the truncated challenge value.
    pub(crate) const fn c_len(&self) -> usize {
        self.q_len() / 2
    }

    /// Length, in octets, of the group order `q`, i.e. the smallest integer
    /// such that `2^(8*qLen) > q`.
    pub(crate) const fn q_len(&self) -> usize {
        <C as Curve>::FieldBytesSize::USIZE
    }
}
