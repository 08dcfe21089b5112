#![forbid(unsafe_code)]

pub mod canonical;
pub mod error;
pub mod keys;
pub mod request;
pub mod sign;
pub mod verify;

pub use canonical::{canonicalize, CanonicalPayload};
pub use error::{RequestError, SigningError, VerificationError};
pub use request::SignedRequest;
pub use sign::sign;
pub use verify::verify;
