//! Port abstraction for the exam sequence and its errors.
//!
//! Positional and id-based access are separate operations: the position of
//! an exam in the sequence has nothing to do with its id.

use async_trait::async_trait;

use crate::domain::{Exam, ExamId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by exam repository adapters.
    pub enum ExamPersistenceError {
        /// The collection lock was poisoned by a panicking writer.
        Lock { message: String } => "exam repository lock poisoned: {message}",
        /// Positional access past the end of the sequence.
        OutOfRange { index: usize, len: usize } =>
            "exam index {index} is out of range for {len} exams",
        /// The id sequence cannot produce another value.
        IdsExhausted => "exam id sequence exhausted",
    }
}

/// Ordered exam collection.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ExamRepository: Send + Sync {
    /// Snapshot of the whole sequence.
    async fn list(&self) -> Result<Vec<Exam>, ExamPersistenceError>;

    /// Exam at `index`, if the sequence is that long.
    async fn find_by_index(&self, index: usize) -> Result<Option<Exam>, ExamPersistenceError>;

    /// Exam carrying `id`, wherever it sits in the sequence.
    async fn find_by_id(&self, id: ExamId) -> Result<Option<Exam>, ExamPersistenceError>;

    /// Remove the exam at `index`; fails with `OutOfRange` past the end.
    async fn delete_at(&self, index: usize) -> Result<Exam, ExamPersistenceError>;

    /// Remove the exam carrying `id`.
    async fn delete_by_id(&self, id: ExamId) -> Result<Option<Exam>, ExamPersistenceError>;

    /// Append to the end of the sequence.
    async fn push(&self, exam: Exam) -> Result<(), ExamPersistenceError>;

    /// Swap in `exam` for the stored exam with the same id, keeping its
    /// position. Returns the previous value.
    async fn replace(&self, exam: Exam) -> Result<Option<Exam>, ExamPersistenceError>;

    /// Replace the whole sequence.
    async fn replace_all(&self, exams: Vec<Exam>) -> Result<(), ExamPersistenceError>;

    /// Reserve the next exam id. Ids are never handed out twice.
    async fn next_id(&self) -> Result<ExamId, ExamPersistenceError>;
}
