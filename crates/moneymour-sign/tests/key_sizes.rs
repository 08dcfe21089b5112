//! Sign/verify across key sizes and PEM encodings.
//!
//! Fixture keys were generated with OpenSSL. Each size has one private key,
//! either PKCS#1 or PKCS#8, plus the matching SPKI and PKCS#1 public keys.

use std::path::PathBuf;

use moneymour_core::environment::Environment;
use moneymour_core::types::ExpiresAt;
use moneymour_sign::keys::{parse_private_key, parse_public_key, public_key_pem};
use moneymour_sign::{sign, verify};
use rsa::traits::PublicKeyParts;
use rsa::RsaPublicKey;
use serde_json::{json, Value};

const SIZES: [(usize, &str); 5] = [
    (512, "BEGIN RSA PRIVATE KEY"),
    (1024, "BEGIN PRIVATE KEY"),
    (2048, "BEGIN RSA PRIVATE KEY"),
    (4096, "BEGIN PRIVATE KEY"),
    (8192, "BEGIN RSA PRIVATE KEY"),
];

fn fixture(name: &str) -> String {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name);
    std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("missing fixture {}: {e}", path.display()))
}

fn ts() -> ExpiresAt {
    "1572281748".parse().unwrap()
}

fn order() -> Value {
    json!({"phoneNumber": "+391234567890", "orderId": "12345678", "amount": 500})
}

#[test]
fn fixtures_cover_both_private_encodings() {
    for (bits, marker) in SIZES {
        let private = fixture(&format!("rsa_{bits}_private.pem"));
        assert!(private.contains(marker), "{bits}: expected {marker}");
        let key = parse_private_key(&private).unwrap();
        assert_eq!(key.n().bits(), bits, "{bits}: modulus size");
    }
}

#[test]
fn every_size_verifies_with_both_public_encodings() {
    for (bits, _) in SIZES {
        let private = fixture(&format!("rsa_{bits}_private.pem"));
        let signature = sign(&private, &ts(), &order()).unwrap();

        for public_name in [
            format!("rsa_{bits}_spki.pem"),
            format!("rsa_{bits}_pkcs1_public.pem"),
        ] {
            let public = fixture(&public_name);
            let valid = verify(&signature, &ts(), &order(), Some(&public), Environment::Sandbox)
                .unwrap_or_else(|e| panic!("{public_name}: {e}"));
            assert!(valid, "{public_name} rejected its own signature");

            let mut tampered = order();
            tampered["amount"] = json!(501);
            let valid =
                verify(&signature, &ts(), &tampered, Some(&public), Environment::Sandbox).unwrap();
            assert!(!valid, "{public_name} accepted a tampered body");
        }
    }
}

#[test]
fn public_encodings_decode_to_the_same_key() {
    for (bits, _) in SIZES {
        let spki = parse_public_key(&fixture(&format!("rsa_{bits}_spki.pem"))).unwrap();
        let pkcs1 = parse_public_key(&fixture(&format!("rsa_{bits}_pkcs1_public.pem"))).unwrap();
        let private = parse_private_key(&fixture(&format!("rsa_{bits}_private.pem"))).unwrap();
        assert_eq!(spki, pkcs1, "{bits}");
        assert_eq!(spki, RsaPublicKey::from(&private), "{bits}");
    }
}

#[test]
fn derived_8192_bit_public_key_verifies() {
    let private = fixture("rsa_8192_private.pem");
    let public = public_key_pem(&private).unwrap();
    let signature = sign(&private, &ts(), &json!("body")).unwrap();
    assert_eq!(signature.len(), 1368);
    assert!(verify(&signature, &ts(), &json!("body"), Some(&public), Environment::Sandbox).unwrap());
}

#[test]
fn signature_from_one_size_fails_under_another() {
    let signature = sign(&fixture("rsa_4096_private.pem"), &ts(), &order()).unwrap();
    let valid = verify(
        &signature,
        &ts(),
        &order(),
        Some(&fixture("rsa_8192_spki.pem")),
        Environment::Sandbox,
    )
    .unwrap();
    assert!(!valid);
}
