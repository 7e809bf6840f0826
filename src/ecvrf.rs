//! The prove / verify algorithms. Spec: sections 5.1-5.3 of
//! draft-irtf-cfrg-vrf-05; the curve-specific pieces live in
//! `hash_to_curve`, `nonce`, `challenge` and `proof`.

use std::ops::Mul;

use elliptic_curve::{
    generic_array::GenericArray,
    group::Group,
    ops::MulByGenerator,
    sec1::{FromEncodedPoint, ModulusSize, ToEncodedPoint},
    CurveArithmetic,
    PrimeField,
    ProjectivePoint,
};
use sha2::{
    digest::{crypto_common::BlockSizeUser, FixedOutput, FixedOutputReset},
    Digest,
};
use zeroize::Zeroize;

use crate::{
    error::{Result, VrfError},
    Vrf,
};

impl<C, D> Vrf<C, D>
where
    C: CurveArithmetic,
    C::FieldBytesSize: ModulusSize,
    C::AffinePoint: FromEncodedPoint<C>,
    C::ProjectivePoint: ToEncodedPoint<C>,
    D: Digest + BlockSizeUser + FixedOutput<OutputSize = C::FieldBytesSize> + FixedOutputReset,
{
    /// Generates the VRF proof and output for a message.
    /// Spec: `ECVRF_prove` (section 5.1) plus `ECVRF_proof_to_hash`
    /// (section 5.2) applied to the fresh proof.
    ///
    /// # Arguments
    ///
    /// * `secret_key` - The secret scalar as `qLen` big-endian octets.
    /// * `alpha`      - The VRF input, arbitrary octets.
    ///
    /// # Returns
    ///
    /// * The VRF output `beta` (one hash length) and the proof `pi`
    ///   (`ptLen + cLen + qLen` octets).
    pub fn prove(
        &self,
        secret_key: &[u8],
        alpha: &[u8],
    ) -> Result<(GenericArray<u8, C::FieldBytesSize>, Vec<u8>)> {
        // Step 1: derive public key as Y = x * B
        let mut x = self.secret_scalar_from_bytes(secret_key)?;
        let public_key_point = C::ProjectivePoint::mul_by_generator(&x);
        let public_key_bytes = public_key_point.to_encoded_point(true).as_bytes().to_vec();

        // Step 2: H = ECVRF_hash_to_curve(Y, alpha)
        let h_point = ProjectivePoint::<C>::from(self.hash_to_curve_tai(&public_key_bytes, alpha)?);

        // Step 3: h_string = point_to_string(H)
        let h_string = h_point.to_encoded_point(true).as_bytes().to_vec();

        // Step 4: Gamma = x * H
        let gamma_point = h_point.mul(x);
        let gamma_bytes = gamma_point.to_encoded_point(true).as_bytes().to_vec();

        // Step 5: k = ECVRF_nonce_generation(x, h_string). RFC 6979 takes the
        // encoded point, not alpha; feeding alpha here derails every vector.
        let mut k = self.generate_nonce(&x.to_repr(), &h_string);

        // Step 6: c = ECVRF_hash_points(H, Gamma, k*B, k*H)
        let u_point = C::ProjectivePoint::mul_by_generator(&k);
        let v_point = h_point * k;
        let c_bytes = self.hash_points(&[
            &h_string,
            &gamma_bytes,
            u_point.to_encoded_point(true).as_bytes(),
            v_point.to_encoded_point(true).as_bytes(),
        ]);
        let c_scalar = self.challenge_scalar(&c_bytes);

        // Step 7: s = (k + c*x) mod q
        let s_scalar = k + c_scalar * x;

        // Step 8: pi = point_to_string(Gamma) || c_string || int_to_string(s)
        let pi = self.encode_proof(&gamma_bytes, &c_bytes, &s_scalar);
        let beta = self.gamma_to_hash(&gamma_point);

        x.zeroize();
        k.zeroize();

        Ok((beta, pi))
    }

    /// Checks a proof against a public key and message, returning the VRF
    /// output on success. Spec: `ECVRF_verify` (section 5.3).
    ///
    /// Any post-decoding defect surfaces as [`VrfError::InvalidProof`]; the
    /// distinct failure causes are deliberately not observable.
    ///
    /// # Arguments
    ///
    /// * `public_key` - SEC1 compressed encoding of `Y`.
    /// * `alpha`      - The VRF input the proof is claimed for.
    /// * `pi`         - Proof octets.
    ///
    /// # Returns
    ///
    /// * The VRF output `beta` iff the proof is valid.
    pub fn verify(
        &self,
        public_key: &[u8],
        alpha: &[u8],
        pi: &[u8],
    ) -> Result<GenericArray<u8, C::FieldBytesSize>> {
        // Steps 1-3: Y = string_to_point(PK_string), on curve and not the
        // identity. The salt below is the canonical re-encoding, so prover
        // and verifier hash identical octets.
        let public_key_point = ProjectivePoint::<C>::from(
            self.point_from_bytes(public_key)
                .map_err(|_| VrfError::InvalidPublicKey)?,
        );
        if public_key_point.is_identity().into() {
            return Err(VrfError::InvalidPublicKey);
        }
        let public_key_bytes = public_key_point.to_encoded_point(true).as_bytes().to_vec();

        // Steps 4-6: D = ECVRF_decode_proof(pi_string)
        let (gamma, c_bytes, s_scalar) = self.decode_proof(pi)?;
        let gamma_point = ProjectivePoint::<C>::from(gamma);
        let gamma_bytes = gamma_point.to_encoded_point(true).as_bytes().to_vec();
        let c_scalar = self.challenge_scalar(&c_bytes);

        // Step 7: H = ECVRF_hash_to_curve(Y, alpha)
        let h_point = ProjectivePoint::<C>::from(self.hash_to_curve_tai(&public_key_bytes, alpha)?);
        let h_string = h_point.to_encoded_point(true).as_bytes().to_vec();

        // Step 8: U = s*B - c*Y
        let u_point = C::ProjectivePoint::mul_by_generator(&s_scalar) - public_key_point * c_scalar;

        // Step 9: V = s*H - c*Gamma
        let v_point = h_point * s_scalar - gamma_point * c_scalar;

        // Step 10: c' = ECVRF_hash_points(H, Gamma, U, V)
        let derived_c_bytes = self.hash_points(&[
            &h_string,
            &gamma_bytes,
            u_point.to_encoded_point(true).as_bytes(),
            v_point.to_encoded_point(true).as_bytes(),
        ]);

        // Step 11: the proof stands iff c' matches the transported c
        if derived_c_bytes != c_bytes {
            return Err(VrfError::InvalidProof);
        }

        Ok(self.gamma_to_hash(&gamma_point))
    }

    /// Recomputes the VRF output from a proof without verifying it.
    /// Spec: `ECVRF_proof_to_hash` (section 5.2).
    ///
    /// Callers that hold an already-verified `pi` can use this to rederive
    /// `beta`; it never authenticates anything.
    pub fn proof_to_hash(&self, pi: &[u8]) -> Result<GenericArray<u8, C::FieldBytesSize>> {
        let (gamma, _c_bytes, _s_scalar) = self.decode_proof(pi)?;

        Ok(self.gamma_to_hash(&ProjectivePoint::<C>::from(gamma)))
    }

    /// Derives the SEC1 compressed public key for a secret scalar.
    pub fn public_key_bytes(&self, secret_key: &[u8]) -> Result<Vec<u8>> {
        let mut x = self.secret_scalar_from_bytes(secret_key)?;
        let public_key_point = C::ProjectivePoint::mul_by_generator(&x);
        x.zeroize();

        Ok(public_key_point.to_encoded_point(true).as_bytes().to_vec())
    }

    /// `beta = Hash(suite_string || 0x03 || point_to_string(cofactor * Gamma))`.
    ///
    /// The cofactor multiplication is a no-op for the shipped curves but is
    /// kept where the draft puts it.
    pub(crate) fn gamma_to_hash(
        &self,
        gamma: &C::ProjectivePoint,
    ) -> GenericArray<u8, C::FieldBytesSize> {
        const DOMAIN_SEPARATOR_FRONT: u8 = 0x03;

        let point: ProjectivePoint<C> = gamma.mul(self.cofactor());
        let point_bytes = point.to_encoded_point(true);

        D::digest(
            [
                &[self.suite_id, DOMAIN_SEPARATOR_FRONT],
                point_bytes.as_bytes(),
            ]
            .concat(),
        )
    }
}
