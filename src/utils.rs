use elliptic_curve::{
    sec1::{EncodedPoint, FromEncodedPoint, ModulusSize},
    CurveArithmetic,
    Scalar,
    ScalarPrimitive,
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
    /// Decodes SEC1 compressed octets into an affine point.
    ///
    /// Only the `0x02`/`0x03` prefixes with the exact compressed length are
    /// accepted; in particular the identity and uncompressed encodings are
    /// rejected. Decompression fails when the x-coordinate has no square
    /// root on the curve.
    pub(crate) fn point_from_bytes(&self, data: &[u8]) -> Result<C::AffinePoint> {
        if data.len() != self.pt_len() || !matches!(data[0], 0x02 | 0x03) {
            return Err(VrfError::InvalidPointEncoding);
        }

        let encoded_point =
            EncodedPoint::<C>::from_bytes(data).map_err(|_| VrfError::InvalidPointEncoding)?;

        Option::from(C::AffinePoint::from_encoded_point(&encoded_point))
            .ok_or(VrfError::InvalidPointEncoding)
    }

    /// Interprets a hash output as a candidate compressed x-coordinate:
    /// `string_to_point(0x02 || s)`.
    pub(crate) fn try_hash_to_point(&self, data: &[u8]) -> Result<C::AffinePoint> {
        self.point_from_bytes(&[&[0x02], data].concat())
    }

    /// Parses a big-endian scalar that must already be canonical (below the
    /// group order).
    pub(crate) fn scalar_from_bytes(&self, data: &[u8]) -> Result<Scalar<C>> {
        let primitive =
            ScalarPrimitive::<C>::from_slice(data).map_err(|_| VrfError::InvalidProof)?;

        Ok(primitive.into())
    }

    /// Parses a secret scalar: exactly `qLen` big-endian octets encoding an
    /// integer in `[1, q-1]`.
    pub(crate) fn secret_scalar_from_bytes(&self, data: &[u8]) -> Result<Scalar<C>> {
        if data.len() != self.q_len() {
            return Err(VrfError::InvalidPrivateKey);
        }

        let primitive =
            ScalarPrimitive::<C>::from_slice(data).map_err(|_| VrfError::InvalidPrivateKey)?;
        if primitive.is_zero().into() {
            return Err(VrfError::InvalidPrivateKey);
        }

        Ok(primitive.into())
    }
}
