//! Exam service implementing the exam driving ports.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{error, info, warn};

use crate::domain::access::decide_manage_exams;
use crate::domain::ports::{
    ExamPersistenceError, ExamRepository, ExamsCommand, ExamsQuery, UserPersistenceError,
    UserRepository,
};
use crate::domain::{
    CallerClaim, DeletionOutcome, Error, Exam, ExamDraft, ExamId, ExamPatch, User, UserId,
    UserType,
};

/// Message returned when a caller may not change exams.
pub const MANAGE_FORBIDDEN_MESSAGE: &str = "Access denied: only teachers may manage exams";
/// Message returned after an exam is removed.
pub const EXAM_DELETED_MESSAGE: &str = "Exam deleted successfully.";

/// Exam service backed by exam and user repositories.
///
/// The user repository verifies callers and resolves student ids.
#[derive(Clone)]
pub struct ExamService<E, U> {
    exams: Arc<E>,
    users: Arc<U>,
}

impl<E, U> ExamService<E, U> {
    /// Create a new service with the given repositories.
    pub fn new(exams: Arc<E>, users: Arc<U>) -> Self {
        Self { exams, users }
    }
}

impl<E, U> ExamService<E, U>
where
    E: ExamRepository,
    U: UserRepository,
{
    fn map_exam_error(err: ExamPersistenceError) -> Error {
        error!(error = %err, "exam repository failure");
        Error::internal(format!("exam repository error: {err}"))
    }

    fn map_user_error(err: UserPersistenceError) -> Error {
        error!(error = %err, "user repository failure");
        Error::internal(format!("user repository error: {err}"))
    }

    async fn authorise(&self, caller: &CallerClaim) -> Result<User, Error> {
        let stored = match caller.user_id() {
            Some(id) => self
                .users
                .find_by_id(id)
                .await
                .map_err(Self::map_user_error)?,
            None => None,
        };
        if let Err(reason) = decide_manage_exams(caller, stored.as_ref()).into_result() {
            warn!(%reason, "exam management denied");
            return Err(Error::forbidden(MANAGE_FORBIDDEN_MESSAGE));
        }
        stored.ok_or_else(|| Error::internal("permitted caller without a stored record"))
    }

    async fn resolve_students(&self, ids: &[u64]) -> Result<Vec<User>, Error> {
        let mut students = Vec::with_capacity(ids.len());
        for raw in ids {
            let id = UserId::new(*raw);
            let user = self
                .users
                .find_by_id(id)
                .await
                .map_err(Self::map_user_error)?
                .ok_or_else(|| Error::bad_request(format!("unknown student id {id}")))?;
            if user.user_type() != UserType::Student {
                return Err(Error::bad_request(format!("user {id} is not a student")));
            }
            students.push(user);
        }
        Ok(students)
    }

    async fn find(&self, id: ExamId) -> Result<Exam, Error> {
        self.exams
            .find_by_id(id)
            .await
            .map_err(Self::map_exam_error)?
            .ok_or_else(|| Error::not_found(format!("exam {id} not found")))
    }
}

#[async_trait]
impl<E, U> ExamsQuery for ExamService<E, U>
where
    E: ExamRepository,
    U: UserRepository,
{
    async fn list_exams(&self) -> Result<Vec<Exam>, Error> {
        self.exams.list().await.map_err(Self::map_exam_error)
    }

    async fn get_exam(&self, id: ExamId) -> Result<Exam, Error> {
        self.find(id).await
    }
}

#[async_trait]
impl<E, U> ExamsCommand for ExamService<E, U>
where
    E: ExamRepository,
    U: UserRepository,
{
    async fn authorise_manager(&self, caller: &CallerClaim) -> Result<(), Error> {
        self.authorise(caller).await.map(|_| ())
    }

    async fn create_exam(&self, caller: &CallerClaim, draft: ExamDraft) -> Result<Exam, Error> {
        let teacher = self.authorise(caller).await?;
        draft
            .validate()
            .map_err(|err| Error::bad_request(err.to_string()))?;
        let students = self.resolve_students(&draft.student_ids).await?;
        let id = self.exams.next_id().await.map_err(Self::map_exam_error)?;

        let ExamDraft {
            description,
            deadline,
            numerotasks,
            tasks,
            ..
        } = draft;
        let exam = Exam {
            id,
            description,
            deadline,
            numerotasks,
            teacher,
            tasks,
            students,
        };
        if !exam.tasks_consistent() {
            warn!(
                exam_id = %exam.id,
                numerotasks = exam.numerotasks,
                tasks = exam.tasks.len(),
                "exam task count does not match numerotasks"
            );
        }
        self.exams
            .push(exam.clone())
            .await
            .map_err(Self::map_exam_error)?;
        info!(exam_id = %exam.id, teacher_id = %exam.teacher.id(), "exam created");
        Ok(exam)
    }

    async fn update_exam(
        &self,
        caller: &CallerClaim,
        id: ExamId,
        patch: ExamPatch,
    ) -> Result<Exam, Error> {
        self.authorise(caller).await?;
        let current = self.find(id).await?;
        let updated = patch
            .apply(current)
            .map_err(|err| Error::bad_request(err.to_string()))?;
        self.exams
            .replace(updated.clone())
            .await
            .map_err(Self::map_exam_error)?
            .ok_or_else(|| Error::not_found(format!("exam {id} not found")))?;
        info!(exam_id = %id, "exam updated");
        Ok(updated)
    }

    async fn delete_exam(
        &self,
        caller: &CallerClaim,
        id: ExamId,
    ) -> Result<DeletionOutcome, Error> {
        self.authorise(caller).await?;
        self.exams
            .delete_by_id(id)
            .await
            .map_err(Self::map_exam_error)?
            .ok_or_else(|| Error::not_found(format!("exam {id} not found")))?;
        info!(exam_id = %id, "exam deleted");
        Ok(DeletionOutcome::deleted(EXAM_DELETED_MESSAGE))
    }
}

#[cfg(test)]
#[path = "exam_service_tests.rs"]
mod tests;
