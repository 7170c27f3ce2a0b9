//! Driving port for exam mutations. Every operation requires a verified
//! teacher.

use async_trait::async_trait;

use crate::domain::{CallerClaim, DeletionOutcome, Error, Exam, ExamDraft, ExamId, ExamPatch};

/// Write-side exam use-cases.
#[async_trait]
pub trait ExamsCommand: Send + Sync {
    /// Fail with `Forbidden` unless the caller may manage exams.
    ///
    /// Adapters call this before decoding a body so unauthorised callers
    /// never see payload errors.
    async fn authorise_manager(&self, caller: &CallerClaim) -> Result<(), Error>;

    /// Create an exam owned by the caller.
    async fn create_exam(&self, caller: &CallerClaim, draft: ExamDraft) -> Result<Exam, Error>;

    /// Change the description and/or task count of an exam.
    async fn update_exam(
        &self,
        caller: &CallerClaim,
        id: ExamId,
        patch: ExamPatch,
    ) -> Result<Exam, Error>;

    /// Remove an exam.
    async fn delete_exam(&self, caller: &CallerClaim, id: ExamId)
    -> Result<DeletionOutcome, Error>;
}
