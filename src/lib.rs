//! Verifiable Random Function over short-Weierstrass curves, following
//! [draft-irtf-cfrg-vrf-05] with the try-and-increment hash-to-curve.
//!
//! A holder of a secret scalar `x` can compute, for any message `alpha`, a
//! proof `pi` and a pseudorandom output `beta` such that anyone holding the
//! public point `Y = x*B` can check that `pi` (and therefore `beta`) belongs
//! to `(Y, alpha)`. `beta` is a pure function of the proof's gamma point, so
//! the prover cannot equivocate.
//!
//! Two ciphersuites are wired up:
//!
//! * [`Secp256k1Sha256Tai`] — suite byte `0xFE`, the identifier the draft-05
//!   secp256k1 implementations converged on.
//! * [`P256Sha256Tai`] — suite byte `0x01`, whose outputs match the draft's
//!   Appendix A.1 examples byte for byte.
//!
//! ```
//! use ecvrf::new_secp256k1_sha256_tai;
//!
//! let vrf = new_secp256k1_sha256_tai();
//! let secret_key =
//!     hex::decode("c9afa9d845ba75166b5c215767b1d6934e50c3db36e89b127b8a622b120f6721").unwrap();
//! let (beta, pi) = vrf.prove(&secret_key, b"sample").unwrap();
//!
//! let public_key = vrf.public_key_bytes(&secret_key).unwrap();
//! let beta2 = vrf.verify(&public_key, b"sample", &pi).unwrap();
//! assert_eq!(beta, beta2);
//! ```
//!
//! [draft-irtf-cfrg-vrf-05]: https://tools.ietf.org/html/draft-irtf-cfrg-vrf-05

mod challenge;
pub mod ecvrf;
pub mod error;
mod hash_to_curve;
mod nonce;
mod proof;
mod suite;
mod utils;

/// Generic ECVRF engine, monomorphized per curve and hash function.
///
/// Stateless after construction; a single instance may serve concurrent
/// callers. The interesting bounds live on the impl blocks: `C` is a
/// [`elliptic_curve::CurveArithmetic`] curve with SEC1 point encodings and
/// `D` a fixed-output hash whose digest length equals the curve's field size.
pub struct Vrf<Curve, Hasher> {
    pub curve: Curve,
    pub hasher: Hasher,
    /// Single-byte ciphersuite identifier, mixed into every hash input.
    pub suite_id: u8,
}

impl<C: Default, D: Default> Vrf<C, D> {
    pub fn new(suite_id: u8) -> Self {
        Self {
            curve: C::default(),
            hasher: D::default(),
            suite_id,
        }
    }
}

/// `ECVRF-P256-SHA256-TAI`: NIST P-256 with SHA-256, suite byte `0x01`.
pub type P256Sha256Tai = Vrf<p256::NistP256, sha2::Sha256>;
impl Default for P256Sha256Tai {
    fn default() -> Self {
        Self::new(0x01)
    }
}

/// `ECVRF-SECP256K1-SHA256-TAI`: secp256k1 with SHA-256, suite byte `0xFE`.
pub type Secp256k1Sha256Tai = Vrf<k256::Secp256k1, sha2::Sha256>;
impl Default for Secp256k1Sha256Tai {
    fn default() -> Self {
        Self::new(0xFE)
    }
}

/// Pre-wired `ECVRF-SECP256K1-SHA256-TAI` engine.
pub fn new_secp256k1_sha256_tai() -> Secp256k1Sha256Tai {
    Secp256k1Sha256Tai::default()
}

/// Pre-wired `ECVRF-P256-SHA256-TAI` engine.
pub fn new_p256_sha256_tai() -> P256Sha256Tai {
    P256Sha256Tai::default()
}

#[cfg(test)]
mod tests;
