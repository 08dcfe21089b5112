//! Moneymour public keys, one per environment.
//!
//! The table is a set of `'static` constants behind a total `match`; it is
//! never mutated.

use crate::environment::Environment;
use crate::errors::EnvironmentError;

pub const SANDBOX_PUBLIC_KEY: &str = "-----BEGIN PUBLIC KEY-----
MIIBIjANBgkqhkiG9w0BAQEFAAOCAQ8AMIIBCgKCAQEA0A0WavOzsKJn0SHdQrF1
ThSdWly629clB6y4crZ0D778rQGmBFSkvdceIt3fERGYuCyWHFtiOS6pIlfIcJgR
hDoA0N6UKlT777KH8s/B3+cMnEHhPBiD0Lq8w8yjWdal1BvFkuUOionNm9q9OA2g
uD4BWv9WZBm1/mB7kNczvEGxvN1E601lJztU8WahWH1w0fEmRsW9BpcVrqlqfkuw
hPUnjeVXWDTX05gVyAr/Do6yNcJi6M5/4hU6EcQiQ+d1pHgd/mCLN/hoiPvGG5y9
UrR2av3bgfefF5QU7ZRzjMV3X7bGXPG2pH+L8kbHCPB78j5rzxHViSKIpPKkMg+P
FwIDAQAB
-----END PUBLIC KEY-----";

pub const STAGE_PUBLIC_KEY: &str = "-----BEGIN PUBLIC KEY-----
MIIBIjANBgkqhkiG9w0BAQEFAAOCAQ8AMIIBCgKCAQEAty+wRd3ArC2RfUA1Ypua
KkXp/bEs6KgRX68NrenZ3yk3jx7M72EeQS0tgNvWVfVC3NdhX9rJCM2JgkmlDIOk
keRj+S2BWJ1sIo5a/Haxkgm745Vd1McOz+VciWPY5p9OJB7xQX+sKhrfKzjfWLAs
+e3Kre/l5OzhvzHf7yvzJueRHHvqX9epygVBhaYwiS+VtUhNPmBB0CwTkAUMTIQ1
u2iv0c/beutBHshexO51AzGsH/LHy5LyJcgZYQ3YYRc/KABJb6A02I/V7H1Aa8Uz
qKrx4ZKW1h7t8q3gCBvPRe6CVft/yHISE9UL7sflQnelBVdLO5Miy9MEZDRJUVCY
TwIDAQAB
-----END PUBLIC KEY-----";

pub const DEVELOPMENT_PUBLIC_KEY: &str = "-----BEGIN PUBLIC KEY-----
MIIBIjANBgkqhkiG9w0BAQEFAAOCAQ8AMIIBCgKCAQEA0xjRECYz5oKWyjmCOQc3
x9D9eC8v79iRsMScCu9fHesM0Znkto73tvfUhGDmTms6NIgVDDWzLwf40rRPFkxK
zuw0ZGRJDSRw7dGNQ/yjM+R3WOE9HAaUjtX6rX6t/urvQW0XN057/clfMeebEQR0
knJhOuukrgaZC54XbMitlGNk4UxXkbaTD+h0UoSAqxVSM1riUTbNef6mWWHOZGB+
Dpi6lNI6Y6WX9w4nTwXiOWkthM+jsGTV1Vz49UB8gDmcZSgBp1dRLVzTm7NH8H3v
rgrjADr43io1gUC1N0zrXxzyX+xNLABkLW+Oi3lbSXSFFxCjdl2vlUs2SSW78EMD
KwIDAQAB
-----END PUBLIC KEY-----";

/// Embedded key for `env`, if one is shipped.
pub fn embedded_public_key(env: Environment) -> Option<&'static str> {
    match env {
        // No production key has been published yet.
        Environment::Production => None,
        Environment::Sandbox => Some(SANDBOX_PUBLIC_KEY),
        Environment::Stage => Some(STAGE_PUBLIC_KEY),
        Environment::Development => Some(DEVELOPMENT_PUBLIC_KEY),
    }
}

/// Resolve the authoritative Moneymour public key (PEM) for `env`.
pub fn resolve_public_key(env: Environment) -> Result<&'static str, EnvironmentError> {
    embedded_public_key(env).ok_or(EnvironmentError::MissingPublicKey(env))
}

/// Validate `name`, then resolve its public key.
pub fn resolve_public_key_by_name(name: &str) -> Result<&'static str, EnvironmentError> {
    resolve_public_key(name.parse()?)
}
