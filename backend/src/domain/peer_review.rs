//! Peer reviews written by students about exam tasks. Read-only.

use serde::{Deserialize, Serialize};

use super::{AnswerRef, ExamId, Task};

/// A student's review of one task answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeerReview {
    pub id: u64,
    pub examid: ExamId,
    pub task: Task,
    pub studentanswer: AnswerRef,
    pub mark: f64,
    pub description: String,
    /// Seconds left to submit the review.
    pub deadline: u64,
}
