use elliptic_curve::sec1::ToEncodedPoint;
use hex_literal::hex;

use crate::P256Sha256Tai;

/// Try-and-increment point for Example 1 of the draft's Appendix A.1.
/// ASCII: "sample"
#[test]
fn hash_to_curve_tai_example_1() {
    let vrf = P256Sha256Tai::default();
    let public_key = hex!("0360fed4ba255a9d31c961eb74c6356d68c049b8923b61fa6ce669622e60f29fb6");

    let point = vrf.hash_to_curve_tai(&public_key, b"sample").unwrap();

    let expected_point = hex!("02e2e1ab1b9f5a8a68fa4aad597e7493095648d3473b213bba120fe42d1a595f3e");
    assert_eq!(point.to_encoded_point(true).as_bytes(), expected_point);
}

/// Try-and-increment point for Example 3 of the draft's Appendix A.1.
/// ASCII: "Example of ECDSA with ansip256r1 and SHA-256"
#[test]
fn hash_to_curve_tai_example_3() {
    let vrf = P256Sha256Tai::default();
    let public_key = hex!("03596375e6ce57e0f20294fc46bdfcfd19a39f8161b58695b3ec5b3d16427c274d");
    let alpha = hex!(
        "4578616d706c65206f66204543445341207769746820616e736970323536723120616e64205348412d323536"
    );

    let point = vrf.hash_to_curve_tai(&public_key, &alpha).unwrap();

    let expected_point = hex!("02141e41d4d55802b0e3adaba114c81137d95fd3869b6b385d4487b1130126648d");
    assert_eq!(point.to_encoded_point(true).as_bytes(), expected_point);
}

/// The point must be bound to the salt: a different public key with the
/// same alpha lands elsewhere.
#[test]
fn hash_to_curve_tai_salt_separation() {
    let vrf = P256Sha256Tai::default();
    let pk_1 = hex!("0360fed4ba255a9d31c961eb74c6356d68c049b8923b61fa6ce669622e60f29fb6");
    let pk_2 = hex!("03596375e6ce57e0f20294fc46bdfcfd19a39f8161b58695b3ec5b3d16427c274d");

    let point_1 = vrf.hash_to_curve_tai(&pk_1, b"sample").unwrap();
    let point_2 = vrf.hash_to_curve_tai(&pk_2, b"sample").unwrap();

    assert_ne!(
        point_1.to_encoded_point(true),
        point_2.to_encoded_point(true)
    );
}
