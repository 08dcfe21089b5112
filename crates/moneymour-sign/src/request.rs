//! Merchant request assembly: credentials go into the body, expiry and
//! signature go into headers. Sending the request is up to the caller.

use moneymour_core::credentials::MerchantCredentials;
use moneymour_core::environment::Environment;
use moneymour_core::expiry::now_plus_window;
use moneymour_core::types::ExpiresAt;
use serde_json::Value;

use crate::error::{RequestError, VerificationError};
use crate::sign::sign;
use crate::verify::verify;

pub const CONTENT_TYPE_HEADER: &str = "Content-Type";
pub const EXPIRES_AT_HEADER: &str = "Expires-at";
pub const SIGNATURE_HEADER: &str = "Signature";
pub const JSON_CONTENT_TYPE: &str = "application/json";

pub const MERCHANT_ID_FIELD: &str = "merchantId";
pub const SECRET_FIELD: &str = "secret";

/// A request body with merchant fields injected, plus its signature.
#[derive(Clone)]
pub struct SignedRequest {
    body: Value,
    expires_at: ExpiresAt,
    signature: String,
}

impl SignedRequest {
    /// Sign `body` with a fresh 60-second expiry.
    pub fn new(
        credentials: &MerchantCredentials,
        private_key_pem: &str,
        body: Value,
    ) -> Result<Self, RequestError> {
        Self::build(credentials, private_key_pem, body, now_plus_window())
    }

    /// Inject `merchantId` and `secret` into `body`, then sign it.
    ///
    /// Existing fields with those names are overwritten in place; otherwise
    /// they are appended after the caller's fields.
    pub fn build(
        credentials: &MerchantCredentials,
        private_key_pem: &str,
        mut body: Value,
        expires_at: ExpiresAt,
    ) -> Result<Self, RequestError> {
        let fields = body.as_object_mut().ok_or(RequestError::BodyNotObject)?;
        fields.insert(
            MERCHANT_ID_FIELD.to_string(),
            Value::String(credentials.merchant_id().to_string()),
        );
        fields.insert(
            SECRET_FIELD.to_string(),
            Value::String(credentials.expose_secret().to_string()),
        );

        let signature = sign(private_key_pem, &expires_at, &body)?;
        tracing::debug!(
            merchant_id = credentials.merchant_id(),
            expires_at = %expires_at,
            "built signed request"
        );

        Ok(Self {
            body,
            expires_at,
            signature,
        })
    }

    pub fn body(&self) -> &Value {
        &self.body
    }

    /// The body exactly as it was serialized for signing.
    pub fn body_json(&self) -> String {
        self.body.to_string()
    }

    pub fn expires_at(&self) -> &ExpiresAt {
        &self.expires_at
    }

    pub fn signature(&self) -> &str {
        &self.signature
    }

    /// Headers to attach, in send order.
    pub fn headers(&self) -> [(&'static str, String); 3] {
        [
            (CONTENT_TYPE_HEADER, JSON_CONTENT_TYPE.to_string()),
            (EXPIRES_AT_HEADER, self.expires_at.to_string()),
            (SIGNATURE_HEADER, self.signature.clone()),
        ]
    }

    /// Check this request's signature the way the receiving side would.
    pub fn verify(
        &self,
        public_key: Option<&str>,
        environment: Environment,
    ) -> Result<bool, VerificationError> {
        verify(
            &self.signature,
            &self.expires_at,
            &self.body,
            public_key,
            environment,
        )
    }
}

// The body carries the merchant secret.
impl std::fmt::Debug for SignedRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignedRequest")
            .field("body", &"[REDACTED]")
            .field("expires_at", &self.expires_at)
            .field("signature", &self.signature)
            .finish()
    }
}
