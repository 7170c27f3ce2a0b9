//! Driving port for exam reads.

use async_trait::async_trait;

use crate::domain::{Error, Exam, ExamId};

/// Read-side exam use-cases.
#[async_trait]
pub trait ExamsQuery: Send + Sync {
    /// Every exam in stored order.
    async fn list_exams(&self) -> Result<Vec<Exam>, Error>;

    /// Fetch an exam by id or fail with `NotFound`.
    async fn get_exam(&self, id: ExamId) -> Result<Exam, Error>;
}
