use base64::Engine;
use moneymour_core::environment::Environment;
use moneymour_core::keys::resolve_public_key;
use moneymour_core::types::ExpiresAt;
use rsa::pkcs1v15::{Signature, VerifyingKey};
use rsa::signature::Verifier;
use rsa::RsaPublicKey;
use serde_json::Value;
use sha2::Sha256;

use crate::canonical::{canonicalize, CanonicalPayload};
use crate::error::VerificationError;
use crate::keys::parse_public_key;

/// Verify a base64 signature over `(expires_at, body)`.
///
/// With `public_key` absent, the Moneymour key for `environment` is used.
/// Returns `Ok(false)` for any signature that does not match, including one
/// that is not valid base64. Freshness of `expires_at` is not checked.
pub fn verify(
    signature: &str,
    expires_at: &ExpiresAt,
    body: &Value,
    public_key: Option<&str>,
    environment: Environment,
) -> Result<bool, VerificationError> {
    let explicit_key = public_key.is_some();
    let pem = match public_key {
        Some(pem) => pem,
        None => resolve_public_key(environment)?,
    };
    let public_key = parse_public_key(pem)?;

    let valid = verify_payload(&public_key, &canonicalize(expires_at, body), signature);
    tracing::debug!(
        valid,
        environment = %environment,
        explicit_key,
        "verified signature"
    );
    Ok(valid)
}

/// Check a signature against an already canonicalized payload.
pub fn verify_payload(
    public_key: &RsaPublicKey,
    payload: &CanonicalPayload,
    signature: &str,
) -> bool {
    let Ok(raw) = base64::engine::general_purpose::STANDARD.decode(signature) else {
        return false;
    };
    let Ok(signature) = Signature::try_from(raw.as_slice()) else {
        return false;
    };

    VerifyingKey::<Sha256>::new(public_key.clone())
        .verify(payload.as_bytes(), &signature)
        .is_ok()
}
