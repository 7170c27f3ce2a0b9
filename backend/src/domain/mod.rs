//! Domain primitives, access rules and services.
//!
//! Purpose: define the entities of the exam system, the decisions about who
//! may do what, and the services that compose repository calls behind the
//! driving ports. Nothing here knows about HTTP.
//!
//! Public surface:
//! - Entities: [`User`], [`Exam`], [`Task`], [`PeerReview`].
//! - [`Error`] / [`ErrorCode`]: the failure taxonomy shared with adapters.
//! - Access decisions in [`access`].
//! - Services: [`UserService`], [`ExamService`], [`PeerReviewService`].

pub mod access;
pub mod error;
pub mod exam;
pub mod exam_service;
pub mod outcome;
pub mod peer_review;
pub mod peer_review_service;
pub mod ports;
pub mod trace_id;
pub mod user;
pub mod user_service;

pub use self::access::{AccessDecision, CallerClaim, DenialReason};
pub use self::error::{Error, ErrorCode, UnknownErrorCode};
pub use self::exam::{
    AnswerRef, Exam, ExamDraft, ExamId, ExamPatch, ExamValidationError, Task, TaskType,
};
pub use self::exam_service::ExamService;
pub use self::outcome::DeletionOutcome;
pub use self::peer_review::PeerReview;
pub use self::peer_review_service::PeerReviewService;
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{NewUser, User, UserDraft, UserId, UserType, UserValidationError};
pub use self::user_service::UserService;

/// Convenient result alias for domain operations.
pub type ApiResult<T> = Result<T, Error>;
