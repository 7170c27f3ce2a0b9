//! Ordered exam collection.

use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use crate::domain::ports::{ExamPersistenceError, ExamRepository};
use crate::domain::{Exam, ExamId};

#[derive(Debug)]
struct ExamStore {
    exams: Vec<Exam>,
    next_id: u64,
}

/// Exams held in a [`Vec`], in insertion order.
#[derive(Debug)]
pub struct InMemoryExamRepository {
    store: Mutex<ExamStore>,
}

impl InMemoryExamRepository {
    /// Repository holding `exams`; new ids start at `id_start`.
    ///
    /// The counter is bumped past any seeded id so ids stay unique.
    pub fn new(exams: Vec<Exam>, id_start: u64) -> Self {
        let next_id = exams
            .iter()
            .map(|e| e.id.get().saturating_add(1))
            .fold(id_start, u64::max);
        Self {
            store: Mutex::new(ExamStore { exams, next_id }),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, ExamStore>, ExamPersistenceError> {
        self.store
            .lock()
            .map_err(|err| ExamPersistenceError::lock(err.to_string()))
    }
}

#[async_trait]
impl ExamRepository for InMemoryExamRepository {
    async fn list(&self) -> Result<Vec<Exam>, ExamPersistenceError> {
        Ok(self.lock()?.exams.clone())
    }

    async fn find_by_index(&self, index: usize) -> Result<Option<Exam>, ExamPersistenceError> {
        Ok(self.lock()?.exams.get(index).cloned())
    }

    async fn find_by_id(&self, id: ExamId) -> Result<Option<Exam>, ExamPersistenceError> {
        Ok(self.lock()?.exams.iter().find(|e| e.id == id).cloned())
    }

    async fn delete_at(&self, index: usize) -> Result<Exam, ExamPersistenceError> {
        let mut store = self.lock()?;
        let len = store.exams.len();
        if index >= len {
            return Err(ExamPersistenceError::out_of_range(index, len));
        }
        Ok(store.exams.remove(index))
    }

    async fn delete_by_id(&self, id: ExamId) -> Result<Option<Exam>, ExamPersistenceError> {
        let mut store = self.lock()?;
        Ok(store
            .exams
            .iter()
            .position(|e| e.id == id)
            .map(|index| store.exams.remove(index)))
    }

    async fn push(&self, exam: Exam) -> Result<(), ExamPersistenceError> {
        self.lock()?.exams.push(exam);
        Ok(())
    }

    async fn replace(&self, exam: Exam) -> Result<Option<Exam>, ExamPersistenceError> {
        let id = exam.id;
        let mut store = self.lock()?;
        Ok(store
            .exams
            .iter_mut()
            .find(|e| e.id == id)
            .map(|slot| std::mem::replace(slot, exam)))
    }

    async fn replace_all(&self, exams: Vec<Exam>) -> Result<(), ExamPersistenceError> {
        self.lock()?.exams = exams;
        Ok(())
    }

    async fn next_id(&self) -> Result<ExamId, ExamPersistenceError> {
        let mut store = self.lock()?;
        let id = ExamId::new(store.next_id);
        store.next_id = store
            .next_id
            .checked_add(1)
            .ok_or_else(ExamPersistenceError::ids_exhausted)?;
        Ok(id)
    }
}
