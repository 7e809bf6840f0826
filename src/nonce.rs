use elliptic_curve::{
    ops::Reduce,
    sec1::ModulusSize,
    CurveArithmetic,
    FieldBytes,
    FieldBytesEncoding,
    PrimeField,
    Scalar,
};
use sha2::{
    digest::{crypto_common::BlockSizeUser, FixedOutput, FixedOutputReset},
    Digest,
};

use crate::Vrf;

impl<C, D> Vrf<C, D>
where
    C: CurveArithmetic,
    C::FieldBytesSize: ModulusSize,
    D: Digest + BlockSizeUser + FixedOutput<OutputSize = C::FieldBytesSize> + FixedOutputReset,
{
    /// Deterministic nonce generation following [RFC 6979] section 3.2,
    /// specialized to the curve order and this suite's hash.
    /// Spec: `ECVRF_nonce_generation_RFC6979` (section 5.4.2.2).
    ///
    /// For the VRF, `message` is the encoded hash-to-curve point `h_string`,
    /// not the caller's alpha. `bits2octets` reduces `Hash(message)` modulo
    /// the group order before it seeds the HMAC-DRBG; with a 256-bit hash
    /// and a 256-bit order the reduction almost always leaves the digest
    /// untouched, but the edge case is part of 6979.
    ///
    /// # Arguments
    ///
    /// * `secret_key` - The secret scalar as `qLen` big-endian octets.
    /// * `message`    - The octets RFC 6979 treats as the message input.
    ///
    /// # Returns
    ///
    /// * A scalar nonce in `[1, q-1]`.
    pub(crate) fn generate_nonce(&self, secret_key: &FieldBytes<C>, message: &[u8]) -> Scalar<C> {
        let h1: FieldBytes<C> = D::digest(message);
        let h2 = <Scalar<C> as Reduce<C::Uint>>::reduce_bytes(&h1);

        let k = rfc6979::generate_k::<D, C::FieldBytesSize>(
            secret_key,
            &FieldBytesEncoding::encode_field_bytes(&C::ORDER),
            &h2.to_repr(),
            &[],
        );

        // generate_k only emits candidates already in [1, q-1]
        <Scalar<C> as Reduce<C::Uint>>::reduce_bytes(&k)
    }
}
