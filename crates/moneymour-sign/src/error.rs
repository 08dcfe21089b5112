use moneymour_core::errors::EnvironmentError;

#[derive(Debug, thiserror::Error)]
pub enum SigningError {
    #[error("invalid RSA private key: {0}")]
    InvalidKey(String),
    #[error("signing failed: {0}")]
    CryptoFailure(String),
}

/// Failures that stop verification from running at all.
///
/// A signature that does not match is `Ok(false)`, not an error.
#[derive(Debug, thiserror::Error)]
pub enum VerificationError {
    #[error("invalid RSA public key: {0}")]
    InvalidKey(String),
    #[error(transparent)]
    InvalidEnvironment(#[from] EnvironmentError),
}

#[derive(Debug, thiserror::Error)]
pub enum RequestError {
    #[error("request body must be a JSON object")]
    BodyNotObject,
    #[error(transparent)]
    Signing(#[from] SigningError),
}
