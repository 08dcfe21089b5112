use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::errors::ExpiresAtError;

/// Value of the `Expires-at` header: decimal epoch seconds, UTC.
///
/// Parsed headers keep their exact text so a verifier rebuilds the same
/// payload the sender signed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ExpiresAt(String);

impl ExpiresAt {
    pub fn from_epoch_seconds(secs: u64) -> Self {
        Self(secs.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Numeric value, or `None` if the digits overflow `u64`.
    pub fn epoch_seconds(&self) -> Option<u64> {
        self.0.parse().ok()
    }
}

impl fmt::Display for ExpiresAt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ExpiresAt {
    type Err = ExpiresAtError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ExpiresAtError::Malformed(s.to_string()));
        }
        Ok(Self(s.to_string()))
    }
}

impl Serialize for ExpiresAt {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_keeps_text_verbatim() {
        let e: ExpiresAt = "1572281748".parse().unwrap();
        assert_eq!(e.as_str(), "1572281748");
        assert_eq!(e.epoch_seconds(), Some(1_572_281_748));
        assert_eq!(e, ExpiresAt::from_epoch_seconds(1_572_281_748));
    }

    #[test]
    fn parse_rejects_non_decimal() {
        for bad in ["", "-5", "1.5", "12a", " 12", "+12", "1e9"] {
            assert_eq!(
                bad.parse::<ExpiresAt>(),
                Err(ExpiresAtError::Malformed(bad.to_string())),
                "{bad:?} should be rejected"
            );
        }
    }
}
