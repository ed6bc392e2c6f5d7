use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Random unique identifier for structural entities.
///
/// Placement products (doors, windows, corners) deliberately do not
/// carry UIDs so that generation results compare bit-identical between
/// runs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UID(String);

impl UID {
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// First block of the identifier, for log lines.
    pub fn short(&self) -> &str {
        &self.0[..8]
    }
}

impl Default for UID {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for UID {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
