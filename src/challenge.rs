use elliptic_curve::{sec1::ModulusSize, Curve, CurveArithmetic};
use sha2::Digest;

use crate::Vrf;

impl<C, D> Vrf<C, D>
where
    C: Curve + CurveArithmetic,
    C::FieldBytesSize: ModulusSize,
    D: Digest,
{
    /// Hashes a sequence of encoded points into the truncated challenge.
    /// Spec: `ECVRF_hash_points` (section 5.4.3).
    ///
    /// ```text
    /// c_string = Hash(suite_string || 0x02 || PT(P1) || ... || PT(Pn))
    /// c = string_to_int(c_string[0..cLen])
    /// ```
    ///
    /// The caller supplies points already in compressed SEC1 form; the
    /// result is the leading `cLen` octets of the digest.
    pub(crate) fn hash_points(&self, points: &[&[u8]]) -> Vec<u8> {
        const DOMAIN_SEPARATOR_FRONT: u8 = 0x02;

        let mut input = Vec::with_capacity(2 + points.len() * self.pt_len());
        input.push(self.suite_id);
        input.push(DOMAIN_SEPARATOR_FRONT);
        for point in points {
            input.extend_from_slice(point);
        }

        let mut c_bytes = D::digest(&input).to_vec();
        c_bytes.truncate(self.c_len());
        c_bytes
    }
}
