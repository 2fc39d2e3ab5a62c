// Chunk: docs/chunks/token_records - Buffer identity

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifies one open document.
///
/// Ids are assigned by the editor core and are opaque to the cache: they are
/// only compared and hashed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BufferId(pub u64);

impl BufferId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }
}

impl From<u64> for BufferId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl fmt::Display for BufferId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
