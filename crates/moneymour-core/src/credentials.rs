//! Merchant id and shared secret, sent inside every signed request body.

use secrecy::{ExposeSecret, SecretString};

use crate::errors::CredentialsError;

pub const MERCHANT_ID_VAR: &str = "MONEYMOUR_MERCHANT_ID";
pub const MERCHANT_SECRET_VAR: &str = "MONEYMOUR_MERCHANT_SECRET";

// `SecretString` prints as `[REDACTED]` under Debug.
#[derive(Clone, Debug)]
pub struct MerchantCredentials {
    id: String,
    secret: SecretString,
}

impl MerchantCredentials {
    pub fn new(merchant_id: impl Into<String>, secret: impl Into<String>) -> Self {
        let secret: String = secret.into();
        Self {
            id: merchant_id.into(),
            secret: secret.into(),
        }
    }

    /// Reads [`MERCHANT_ID_VAR`] and [`MERCHANT_SECRET_VAR`], after loading
    /// `.env` from the working directory when one exists.
    pub fn from_env() -> Result<Self, CredentialsError> {
        dotenvy::dotenv().ok();

        let creds = Self::new(required(MERCHANT_ID_VAR)?, required(MERCHANT_SECRET_VAR)?);
        tracing::debug!(merchant_id = %creds.id, "loaded merchant credentials");
        Ok(creds)
    }

    pub fn merchant_id(&self) -> &str {
        &self.id
    }

    pub fn expose_secret(&self) -> &str {
        self.secret.expose_secret()
    }
}

fn required(var: &str) -> Result<String, CredentialsError> {
    std::env::var(var).map_err(|_| CredentialsError::MissingEnvVar(var.to_string()))
}
