use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum VrfError {
    /// The secret scalar is zero, not reduced modulo the group order, or has
    /// the wrong length.
    #[error("private key: scalar must be in [1, q-1] encoded as qLen octets")]
    InvalidPrivateKey,
    /// The public key bytes do not decode to a non-identity point on the curve.
    #[error("public key: not a valid non-identity curve point")]
    InvalidPublicKey,
    /// Point octets with a bad length, a prefix other than 0x02/0x03, or an
    /// x-coordinate with no square root on the curve.
    #[error("point: cannot decode SEC1 compressed octets")]
    InvalidPointEncoding,
    /// The proof has the wrong length, an undecodable gamma, an s value not
    /// below the group order, or its challenge does not match.
    #[error("proof: invalid")]
    InvalidProof,
    /// The try-and-increment loop ran out of counter values without finding
    /// a curve point. Probability about 2^-256.
    #[error("hash_to_curve: no valid point found by try-and-increment")]
    HashToCurveFailure,
}

pub type Result<T, E = VrfError> = core::result::Result<T, E>;
