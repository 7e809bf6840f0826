//! Wire codec for the proof `pi = PT(Gamma) || c || s`, 81 octets for both
//! supported suites (33 + 16 + 32).

use elliptic_curve::{
    ops::Reduce,
    sec1::{FromEncodedPoint, ModulusSize},
    CurveArithmetic,
    FieldBytes,
    PrimeField,
    Scalar,
};

use crate::{
    error::{Result, VrfError},
    Vrf,
};

impl<C, D> Vrf<C, D>
where
    C: CurveArithmetic,
    C::FieldBytesSize: ModulusSize,
    C::AffinePoint: FromEncodedPoint<C>,
{
    /// Splits and validates a proof. Spec: `ECVRF_decode_proof`
    /// (section 5.4.4).
    ///
    /// Every defect — wrong total length, a gamma that is not a canonical
    /// compressed on-curve point, an `s` at or above the group order — comes
    /// back as [`VrfError::InvalidProof`]; callers cannot tell which check
    /// tripped. `c` needs no range check, being `cLen` octets against a
    /// `qLen`-octet order.
    ///
    /// # Arguments
    ///
    /// * `pi` - Proof octets.
    ///
    /// # Returns
    ///
    /// * The gamma point, the truncated challenge octets, and the scalar `s`.
    pub(crate) fn decode_proof(&self, pi: &[u8]) -> Result<(C::AffinePoint, Vec<u8>, Scalar<C>)> {
        let (pt_len, c_len) = (self.pt_len(), self.c_len());
        if pi.len() != pt_len + c_len + self.q_len() {
            return Err(VrfError::InvalidProof);
        }

        let gamma = self
            .point_from_bytes(&pi[..pt_len])
            .map_err(|_| VrfError::InvalidProof)?;
        let c_bytes = pi[pt_len..pt_len + c_len].to_vec();
        let s = self.scalar_from_bytes(&pi[pt_len + c_len..])?;

        Ok((gamma, c_bytes, s))
    }

    /// Fixed-offset concatenation of the three proof components.
    pub(crate) fn encode_proof(&self, gamma_bytes: &[u8], c_bytes: &[u8], s: &Scalar<C>) -> Vec<u8> {
        [gamma_bytes, c_bytes, s.to_repr().as_slice()].concat()
    }

    /// Lifts the truncated challenge octets to a scalar by left-padding to
    /// `qLen`. Infallible: a `cLen`-octet integer is always below `q`.
    pub(crate) fn challenge_scalar(&self, c_bytes: &[u8]) -> Scalar<C> {
        let mut padded = FieldBytes::<C>::default();
        padded[self.q_len() - self.c_len()..].copy_from_slice(c_bytes);

        <Scalar<C> as Reduce<C::Uint>>::reduce_bytes(&padded)
    }
}
