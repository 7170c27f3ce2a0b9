//! Exams and the tasks they are made of.
//!
//! Exams embed full copies of their teacher, tasks and students. Nothing keeps
//! those copies in sync with the user collection: deleting a user leaves it in
//! every exam that references it.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::User;

/// Validation errors for exam payloads and identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExamValidationError {
    /// Identifier is not a non-negative integer.
    #[error("exam id must be a non-negative integer, got {raw:?}")]
    InvalidId { raw: String },
    /// Description is empty once trimmed.
    #[error("exam description must not be blank")]
    BlankDescription,
    /// A patch carried no updatable property.
    #[error("exam update must change description or numerotasks")]
    EmptyPatch,
    /// Unknown task type number.
    #[error("unknown task type {0}")]
    UnknownTaskType(u8),
}

/// Numeric exam identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExamId(u64);

impl ExamId {
    /// Wrap a raw identifier.
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Parse an identifier taken from a URL segment.
    pub fn parse(raw: &str) -> Result<Self, ExamValidationError> {
        if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ExamValidationError::InvalidId {
                raw: raw.to_owned(),
            });
        }
        raw.parse::<u64>()
            .map(Self)
            .map_err(|_| ExamValidationError::InvalidId {
                raw: raw.to_owned(),
            })
    }

    /// Underlying integer value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ExamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Kind of question. Serialised as an integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum TaskType {
    /// Free-text answer.
    Open,
    /// Pick one of the listed answers.
    MultipleChoice,
}

impl From<TaskType> for u8 {
    fn from(value: TaskType) -> Self {
        match value {
            TaskType::Open => 0,
            TaskType::MultipleChoice => 1,
        }
    }
}

impl TryFrom<u8> for TaskType {
    type Error = ExamValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Open),
            1 => Ok(Self::MultipleChoice),
            other => Err(ExamValidationError::UnknownTaskType(other)),
        }
    }
}

/// Answer reference: either a 1-based position into the answer list or a
/// literal value.
///
/// On multiple-choice tasks a literal that spells a number (`"3"`) is read as
/// a position. On open tasks literals are always taken verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerRef {
    Position(u32),
    Literal(String),
}

impl AnswerRef {
    /// Resolve the reference against the `answers` of a task of `task_type`.
    #[must_use]
    pub fn resolve<'a>(&'a self, task_type: TaskType, answers: &'a [String]) -> Option<&'a str> {
        let at = move |position: u32| {
            usize::try_from(position)
                .ok()
                .and_then(|p| p.checked_sub(1))
                .and_then(|index| answers.get(index))
                .map(String::as_str)
        };
        match (self, task_type) {
            (Self::Position(position), _) => at(*position),
            (Self::Literal(text), TaskType::MultipleChoice) => match text.parse::<u32>() {
                Ok(position) => at(position),
                Err(_) => Some(text.as_str()),
            },
            (Self::Literal(text), TaskType::Open) => Some(text.as_str()),
        }
    }
}

/// Exam question. Read-only reference data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: u64,
    pub question: String,
    #[serde(rename = "type")]
    pub task_type: TaskType,
    pub answers: Vec<String>,
    #[serde(rename = "correctAnswer")]
    pub correct_answer: AnswerRef,
}

impl Task {
    /// Text of the correct answer, if the reference points anywhere.
    #[must_use]
    pub fn correct_answer_text(&self) -> Option<&str> {
        self.correct_answer.resolve(self.task_type, &self.answers)
    }
}

/// Exam with its embedded teacher, tasks and students.
///
/// `deadline` is a duration in seconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exam {
    pub id: ExamId,
    pub description: String,
    pub deadline: u64,
    pub numerotasks: u32,
    pub teacher: User,
    pub tasks: Vec<Task>,
    pub students: Vec<User>,
}

impl Exam {
    /// Whether `tasks` holds exactly `numerotasks` entries.
    ///
    /// Nothing enforces this; callers use it to report drift.
    #[must_use]
    pub fn tasks_consistent(&self) -> bool {
        u32::try_from(self.tasks.len()).is_ok_and(|len| len == self.numerotasks)
    }
}

/// Client payload for creating an exam.
///
/// The teacher is the caller; students are referenced by id.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ExamDraft {
    pub description: String,
    pub deadline: u64,
    pub numerotasks: u32,
    #[serde(default)]
    pub tasks: Vec<Task>,
    #[serde(default)]
    pub student_ids: Vec<u64>,
}

impl ExamDraft {
    /// Reject drafts without a meaningful description.
    pub fn validate(&self) -> Result<(), ExamValidationError> {
        if self.description.trim().is_empty() {
            return Err(ExamValidationError::BlankDescription);
        }
        Ok(())
    }
}

/// Partial update. Only `description` and `numerotasks` may change.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExamPatch {
    pub description: Option<String>,
    pub numerotasks: Option<u32>,
}

impl ExamPatch {
    /// Apply the patch to `exam`, returning the updated copy.
    pub fn apply(self, mut exam: Exam) -> Result<Exam, ExamValidationError> {
        if self.description.is_none() && self.numerotasks.is_none() {
            return Err(ExamValidationError::EmptyPatch);
        }
        if let Some(description) = self.description {
            if description.trim().is_empty() {
                return Err(ExamValidationError::BlankDescription);
            }
            exam.description = description;
        }
        if let Some(numerotasks) = self.numerotasks {
            exam.numerotasks = numerotasks;
        }
        Ok(exam)
    }
}
