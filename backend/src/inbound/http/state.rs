//! Shared HTTP adapter state.
//!
//! Handlers receive this through `web::Data` and only see the driving ports,
//! so tests can swap in any implementation.

use std::sync::Arc;

use crate::domain::ports::{ExamsCommand, ExamsQuery, PeerReviewsQuery, UsersCommand, UsersQuery};
use crate::domain::{ExamService, PeerReviewService, UserService};
use crate::outbound::memory::{
    InMemoryExamRepository, InMemoryPeerReviewRepository, InMemoryUserRepository,
};

/// Driving ports used by the HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub users: Arc<dyn UsersQuery>,
    pub users_command: Arc<dyn UsersCommand>,
    pub exams: Arc<dyn ExamsQuery>,
    pub exams_command: Arc<dyn ExamsCommand>,
    pub peer_reviews: Arc<dyn PeerReviewsQuery>,
}

impl HttpState {
    /// Wire the services over the given in-memory repositories.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use exam_backend::inbound::http::state::HttpState;
    /// use exam_backend::outbound::memory::{
    ///     InMemoryExamRepository, InMemoryPeerReviewRepository, InMemoryUserRepository,
    /// };
    ///
    /// let state = HttpState::in_memory(
    ///     Arc::new(InMemoryUserRepository::new()),
    ///     Arc::new(InMemoryExamRepository::new(Vec::new(), 1000)),
    ///     Arc::new(InMemoryPeerReviewRepository::default()),
    /// );
    /// let _users = state.users.clone();
    /// ```
    pub fn in_memory(
        users: Arc<InMemoryUserRepository>,
        exams: Arc<InMemoryExamRepository>,
        reviews: Arc<InMemoryPeerReviewRepository>,
    ) -> Self {
        let user_service = Arc::new(UserService::new(users.clone()));
        let exam_service = Arc::new(ExamService::new(exams, users));
        Self {
            users: user_service.clone(),
            users_command: user_service,
            exams: exam_service.clone(),
            exams_command: exam_service,
            peer_reviews: Arc::new(PeerReviewService::new(reviews)),
        }
    }
}
