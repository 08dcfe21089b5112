#![forbid(unsafe_code)]

pub mod credentials;
pub mod environment;
pub mod errors;
pub mod expiry;
pub mod keys;
pub mod types;
