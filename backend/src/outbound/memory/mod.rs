//! In-memory repositories seeded from fixtures.
//!
//! Each repository owns its collection behind one `std::sync::Mutex`. A
//! poisoned lock is reported as a persistence error rather than a panic.

pub mod fixtures;
mod exam_repository;
mod peer_review_repository;
mod user_repository;

pub use exam_repository::InMemoryExamRepository;
pub use peer_review_repository::InMemoryPeerReviewRepository;
pub use user_repository::InMemoryUserRepository;
