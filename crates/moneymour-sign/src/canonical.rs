use std::fmt;

use moneymour_core::types::ExpiresAt;
use serde_json::Value;

/// Separator between the expiry and the serialized body.
pub const PAYLOAD_SEPARATOR: char = '|';

/// The exact bytes that get signed: `<expiresAt>|<body as compact JSON>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalPayload(String);

impl CanonicalPayload {
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for CanonicalPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Build the signed payload for `(expires_at, body)`.
///
/// Object keys keep their insertion order (serde_json `preserve_order`); no
/// sorting, no whitespace, no escaping beyond JSON's own.
pub fn canonicalize(expires_at: &ExpiresAt, body: &Value) -> CanonicalPayload {
    let body = body.to_string();
    let mut out = String::with_capacity(expires_at.as_str().len() + 1 + body.len());
    out.push_str(expires_at.as_str());
    out.push(PAYLOAD_SEPARATOR);
    out.push_str(&body);
    CanonicalPayload(out)
}
