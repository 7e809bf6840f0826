use elliptic_curve::{
    sec1::{FromEncodedPoint, ModulusSize},
    CurveArithmetic,
};
use sha2::Digest;

use crate::{
    error::{Result, VrfError},
    Vrf,
};

impl<C, D> Vrf<C, D>
where
    C: CurveArithmetic,
    C::FieldBytesSize: ModulusSize,
    C::AffinePoint: FromEncodedPoint<C>,
    D: Digest,
{
    /// Maps the public key encoding and a message to a curve point by
    /// try-and-increment. Spec: `ECVRF_hash_to_curve_try_and_increment`
    /// (section 5.4.1.1).
    ///
    /// A single-byte counter is appended to the hash input and bumped until
    /// the digest, read as a compressed x-coordinate with an even-y prefix,
    /// decompresses to a point on the curve:
    ///
    /// ```text
    /// hash_string = Hash(suite_string || 0x01 || PK_string || alpha_string || ctr_string)
    /// ```
    ///
    /// Roughly half of all x candidates land on the curve, so the loop is
    /// expected to exit after about two attempts. Running time depends on
    /// `alpha`, which rules this construction out where the VRF input must
    /// stay secret.
    ///
    /// # Arguments
    ///
    /// * `salt`  - The encoded public key the point derivation is bound to.
    /// * `alpha` - The VRF input, arbitrary octets.
    ///
    /// # Returns
    ///
    /// * A non-identity curve point, or [`VrfError::HashToCurveFailure`]
    ///   if all 256 counter values miss (probability about 2^-256).
    pub(crate) fn hash_to_curve_tai(&self, salt: &[u8], alpha: &[u8]) -> Result<C::AffinePoint> {
        const DOMAIN_SEPARATOR_FRONT: u8 = 0x01;

        let mut hash_input = [
            &[self.suite_id, DOMAIN_SEPARATOR_FRONT],
            salt,
            alpha,
            &[0x00], // ctr = 0 on the first attempt
        ]
        .concat();

        let ctr_position = hash_input.len() - 1;
        (0..=255u8)
            .find_map(|ctr| {
                hash_input[ctr_position] = ctr;
                let hash_string = D::digest(&hash_input);
                self.try_hash_to_point(&hash_string).ok()
            })
            .ok_or(VrfError::HashToCurveFailure)
    }
}
