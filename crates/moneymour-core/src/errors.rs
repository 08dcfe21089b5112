use crate::environment::Environment;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EnvironmentError {
    #[error("invalid environment: {0:?} (expected production, sandbox, stage or development)")]
    Invalid(String),
    #[error("no public key embedded for environment {0}")]
    MissingPublicKey(Environment),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExpiresAtError {
    #[error("malformed expires-at value {0:?}: expected decimal epoch seconds")]
    Malformed(String),
}

#[derive(Debug, thiserror::Error)]
pub enum CredentialsError {
    /// A required environment variable is missing.
    #[error("missing environment variable: {0}")]
    MissingEnvVar(String),
}
