//! PEM key handling for merchant keys and Moneymour public keys.
//!
//! Private keys may be PKCS#1 (`BEGIN RSA PRIVATE KEY`) or PKCS#8
//! (`BEGIN PRIVATE KEY`). Public keys may be SPKI (`BEGIN PUBLIC KEY`) or
//! PKCS#1 (`BEGIN RSA PUBLIC KEY`).

use rsa::pkcs1::{DecodeRsaPrivateKey, EncodeRsaPrivateKey};
use rsa::pkcs8::der::asn1::Null;
use rsa::pkcs8::der::pem::{decode_label, decode_vec};
use rsa::pkcs8::{DecodePrivateKey, EncodePublicKey, LineEnding, SubjectPublicKeyInfoRef};
use rsa::traits::PublicKeyParts;
use rsa::{BigUint, RsaPrivateKey, RsaPublicKey};

use crate::error::{SigningError, VerificationError};

pub const DEFAULT_KEY_BITS: usize = 2048;

/// Largest modulus either parser accepts. `rsa`'s own public key decoders
/// stop at 4096 bits, so public keys are rebuilt with this limit instead.
pub const MAX_KEY_BITS: usize = 16384;

const PKCS1_PRIVATE_LABEL: &str = "RSA PRIVATE KEY";
const PKCS8_PRIVATE_LABEL: &str = "PRIVATE KEY";
const SPKI_PUBLIC_LABEL: &str = "PUBLIC KEY";
const PKCS1_PUBLIC_LABEL: &str = "RSA PUBLIC KEY";

/// A freshly generated merchant key pair, PEM encoded.
#[derive(Clone)]
pub struct KeyPair {
    /// PKCS#1 private key.
    pub private_pem: String,
    /// SPKI public key, the form Moneymour publishes its own keys in.
    pub public_pem: String,
}

impl std::fmt::Debug for KeyPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyPair")
            .field("private_pem", &"[REDACTED]")
            .field("public_pem", &self.public_pem)
            .finish()
    }
}

/// Parse a PKCS#1 or PKCS#8 private key, chosen by the PEM label.
pub fn parse_private_key(pem: &str) -> Result<RsaPrivateKey, SigningError> {
    let pem = pem.trim();
    let label = decode_label(pem.as_bytes()).map_err(invalid_private)?;
    let key = match label {
        PKCS1_PRIVATE_LABEL => RsaPrivateKey::from_pkcs1_pem(pem).map_err(invalid_private)?,
        PKCS8_PRIVATE_LABEL => RsaPrivateKey::from_pkcs8_pem(pem).map_err(invalid_private)?,
        other => {
            return Err(SigningError::InvalidKey(format!(
                "unexpected PEM label {other:?}"
            )))
        }
    };

    let bits = key.n().bits();
    if bits > MAX_KEY_BITS {
        return Err(SigningError::InvalidKey(format!(
            "{bits}-bit modulus exceeds {MAX_KEY_BITS} bits"
        )));
    }
    Ok(key)
}

/// Parse an SPKI or PKCS#1 public key, chosen by the PEM label.
pub fn parse_public_key(pem: &str) -> Result<RsaPublicKey, VerificationError> {
    let (label, der) = decode_vec(pem.trim().as_bytes()).map_err(invalid_public)?;
    match label {
        SPKI_PUBLIC_LABEL => {
            let spki = SubjectPublicKeyInfoRef::try_from(der.as_slice()).map_err(invalid_public)?;
            spki.algorithm
                .assert_algorithm_oid(rsa::pkcs1::ALGORITHM_OID)
                .map_err(invalid_public)?;
            if spki.algorithm.parameters_any().map_err(invalid_public)? != Null.into() {
                return Err(VerificationError::InvalidKey(
                    "RSA algorithm parameters must be NULL".to_string(),
                ));
            }
            let pkcs1 = spki.subject_public_key.as_bytes().ok_or_else(|| {
                VerificationError::InvalidKey("public key bit string is not byte aligned".to_string())
            })?;
            rsa_public_key_from_pkcs1(pkcs1)
        }
        PKCS1_PUBLIC_LABEL => rsa_public_key_from_pkcs1(&der),
        other => Err(VerificationError::InvalidKey(format!(
            "unexpected PEM label {other:?}"
        ))),
    }
}

fn rsa_public_key_from_pkcs1(der: &[u8]) -> Result<RsaPublicKey, VerificationError> {
    let key = rsa::pkcs1::RsaPublicKey::try_from(der).map_err(invalid_public)?;
    RsaPublicKey::new_with_max_size(
        BigUint::from_bytes_be(key.modulus.as_bytes()),
        BigUint::from_bytes_be(key.public_exponent.as_bytes()),
        MAX_KEY_BITS,
    )
    .map_err(invalid_public)
}

fn invalid_private(e: impl std::fmt::Display) -> SigningError {
    SigningError::InvalidKey(e.to_string())
}

fn invalid_public(e: impl std::fmt::Display) -> VerificationError {
    VerificationError::InvalidKey(e.to_string())
}

/// Derive the SPKI public key PEM matching a private key PEM.
pub fn public_key_pem(private_pem: &str) -> Result<String, SigningError> {
    let private_key = parse_private_key(private_pem)?;
    encode_public_key(&RsaPublicKey::from(&private_key))
}

pub fn generate_key_pair(bits: usize) -> Result<KeyPair, SigningError> {
    let mut rng = rand::thread_rng();
    let private_key = RsaPrivateKey::new(&mut rng, bits)
        .map_err(|e| SigningError::CryptoFailure(e.to_string()))?;
    let private_pem = private_key
        .to_pkcs1_pem(LineEnding::LF)
        .map_err(|e| SigningError::CryptoFailure(e.to_string()))?
        .to_string();
    let public_pem = encode_public_key(&RsaPublicKey::from(&private_key))?;

    tracing::debug!(bits, "generated RSA key pair");
    Ok(KeyPair {
        private_pem,
        public_pem,
    })
}

fn encode_public_key(key: &RsaPublicKey) -> Result<String, SigningError> {
    key.to_public_key_pem(LineEnding::LF)
        .map_err(|e| SigningError::CryptoFailure(e.to_string()))
}
