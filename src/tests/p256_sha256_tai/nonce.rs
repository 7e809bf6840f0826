use hex_literal::hex;

use crate::P256Sha256Tai;

/// RFC 6979 A.2.5, message "sample": the deriver hashes the message itself,
/// so passing the raw ASCII here must reproduce the published k.
#[test]
fn generate_nonce_rfc6979_sample() {
    let vrf = P256Sha256Tai::default();
    let secret_key = hex!("c9afa9d845ba75166b5c215767b1d6934e50c3db36e89b127b8a622b120f6721");

    let nonce = vrf.generate_nonce(&secret_key.into(), b"sample");

    let expected_nonce = hex!("a6e3c57dd01abe90086538398355dd4c3b17aa873382b0f24d6129493d8aad60");
    assert_eq!(nonce.to_bytes().as_slice(), expected_nonce);
}

/// RFC 6979 A.2.5, message "test".
#[test]
fn generate_nonce_rfc6979_test() {
    let vrf = P256Sha256Tai::default();
    let secret_key = hex!("c9afa9d845ba75166b5c215767b1d6934e50c3db36e89b127b8a622b120f6721");

    let nonce = vrf.generate_nonce(&secret_key.into(), b"test");

    let expected_nonce = hex!("d16b6ae827f17175e040871a1c7ec3500192c4c92677336ec2537acaee0008e0");
    assert_eq!(nonce.to_bytes().as_slice(), expected_nonce);
}

/// The nonce used inside prove for Example 1 of the draft's Appendix A.1:
/// the RFC 6979 message is the encoded hash-to-curve point, not alpha.
#[test]
fn generate_nonce_from_h_string() {
    let vrf = P256Sha256Tai::default();
    let secret_key = hex!("c9afa9d845ba75166b5c215767b1d6934e50c3db36e89b127b8a622b120f6721");
    let h_string = hex!("02e2e1ab1b9f5a8a68fa4aad597e7493095648d3473b213bba120fe42d1a595f3e");

    let nonce = vrf.generate_nonce(&secret_key.into(), &h_string);

    let expected_nonce = hex!("c1aba586552242e6b324ab4b7b26f86239226f3cfa85b1c3b675cc061cf147dc");
    assert_eq!(nonce.to_bytes().as_slice(), expected_nonce);
}
