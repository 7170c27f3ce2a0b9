//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driven ports (`*Repository`) describe the collections the services read
//! and write. Driving ports (`*Query`, `*Command`) are what inbound adapters
//! call; the domain services implement them.

mod macros;
pub(crate) use macros::define_port_error;

mod exam_repository;
mod exams_command;
mod exams_query;
mod peer_review_repository;
mod peer_reviews_query;
mod user_repository;
mod users_command;
mod users_query;

#[cfg(test)]
pub use exam_repository::MockExamRepository;
pub use exam_repository::{ExamPersistenceError, ExamRepository};
pub use exams_command::ExamsCommand;
pub use exams_query::ExamsQuery;
#[cfg(test)]
pub use peer_review_repository::MockPeerReviewRepository;
pub use peer_review_repository::{PeerReviewPersistenceError, PeerReviewRepository};
pub use peer_reviews_query::PeerReviewsQuery;
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{UserPersistenceError, UserRepository};
pub use users_command::UsersCommand;
pub use users_query::UsersQuery;
