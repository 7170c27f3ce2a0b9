//! Acknowledgement payloads for successful mutations.

use serde::{Deserialize, Serialize};

/// Body returned after a successful deletion: `{ "status": 200, "message": ... }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeletionOutcome {
    pub status: u16,
    pub message: String,
}

impl DeletionOutcome {
    /// Successful deletion with the given message.
    pub fn deleted(message: impl Into<String>) -> Self {
        Self {
            status: 200,
            message: message.into(),
        }
    }
}
