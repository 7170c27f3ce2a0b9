//! OpenAPI schema definitions for domain types.
//!
//! Domain types do not derive `ToSchema`. The wrappers below mirror their
//! wire shape so the document stays accurate without coupling the domain to
//! utoipa.

use utoipa::ToSchema;

/// Error payload: `{ code, message }`.
#[derive(ToSchema)]
#[schema(as = Error)]
#[expect(dead_code, reason = "Used only for OpenAPI schema generation via utoipa")]
pub struct ErrorSchema {
    /// HTTP-status-like code: 400, 403, 404 or 500.
    #[schema(example = 403)]
    code: u16,
    /// Human-readable message.
    #[schema(example = "Access denied: missing permissions to access the resource")]
    message: String,
}

/// Registered user.
#[derive(ToSchema)]
#[schema(as = User)]
#[expect(dead_code, reason = "Used only for OpenAPI schema generation via utoipa")]
pub struct UserSchema {
    /// Assigned by the server; ignored on registration.
    #[schema(example = 1)]
    id: Option<u64>,
    #[schema(example = "Mario")]
    firstname: String,
    #[schema(example = "Rossi")]
    lastname: String,
    #[schema(example = "mario.rossi@example.com")]
    email: String,
    /// `0` for students, `1` for teachers.
    #[schema(example = 0)]
    user_type: u8,
    #[schema(example = 123_456)]
    identification_number: u64,
}

/// Exam question.
#[derive(ToSchema)]
#[schema(as = Task)]
#[expect(dead_code, reason = "Used only for OpenAPI schema generation via utoipa")]
pub struct TaskSchema {
    id: u64,
    #[schema(example = "diametro della Terra?")]
    question: String,
    /// `0` open question, `1` multiple choice.
    #[schema(rename = "type", example = 1)]
    task_type: u8,
    answers: Vec<String>,
    /// 1-based position into `answers`, or a literal answer.
    #[schema(rename = "correctAnswer", value_type = Object, example = "3")]
    correct_answer: serde_json::Value,
}

/// Exam with embedded teacher, tasks and students.
#[derive(ToSchema)]
#[schema(as = Exam)]
#[expect(dead_code, reason = "Used only for OpenAPI schema generation via utoipa")]
pub struct ExamSchema {
    #[schema(example = 2)]
    id: u64,
    #[schema(example = "prova2")]
    description: String,
    /// Seconds.
    #[schema(example = 3600)]
    deadline: u64,
    #[schema(example = 2)]
    numerotasks: u32,
    teacher: UserSchema,
    tasks: Vec<TaskSchema>,
    students: Vec<UserSchema>,
}

/// Exam creation payload. The teacher is the caller.
#[derive(ToSchema)]
#[schema(as = ExamDraft)]
#[expect(dead_code, reason = "Used only for OpenAPI schema generation via utoipa")]
pub struct ExamDraftSchema {
    description: String,
    deadline: u64,
    numerotasks: u32,
    tasks: Option<Vec<TaskSchema>>,
    /// Ids of enrolled students.
    student_ids: Option<Vec<u64>>,
}

/// Partial exam update.
#[derive(ToSchema)]
#[schema(as = ExamPatch)]
#[expect(dead_code, reason = "Used only for OpenAPI schema generation via utoipa")]
pub struct ExamPatchSchema {
    description: Option<String>,
    numerotasks: Option<u32>,
}

/// Peer review of a task answer.
#[derive(ToSchema)]
#[schema(as = PeerReview)]
#[expect(dead_code, reason = "Used only for OpenAPI schema generation via utoipa")]
pub struct PeerReviewSchema {
    id: u64,
    examid: u64,
    task: TaskSchema,
    #[schema(value_type = Object, example = 3)]
    studentanswer: serde_json::Value,
    #[schema(example = 30.0)]
    mark: f64,
    description: String,
    /// Seconds.
    deadline: u64,
}

/// Acknowledgement returned by deletions.
#[derive(ToSchema)]
#[schema(as = DeletionOutcome)]
#[expect(dead_code, reason = "Used only for OpenAPI schema generation via utoipa")]
pub struct DeletionOutcomeSchema {
    #[schema(example = 200)]
    status: u16,
    #[schema(example = "Deletion completed successfully.")]
    message: String,
}
