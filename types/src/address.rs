//! Opaque voter address type.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An opaque identity supplied by the session administrator.
///
/// Addresses are compared byte-for-byte; the session attaches no meaning to
/// their contents (no key derivation, no checksum). The administrator's own
/// identity uses the same type.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VoterAddress(String);

impl VoterAddress {
    /// Create a new voter address from a raw string.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Return the raw address string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VoterAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for VoterAddress {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for VoterAddress {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}
