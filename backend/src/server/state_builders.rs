//! Builders wiring the in-memory repositories into HTTP state.

use std::sync::Arc;

use exam_backend::inbound::http::state::HttpState;
use exam_backend::outbound::memory::{
    InMemoryExamRepository, InMemoryPeerReviewRepository, InMemoryUserRepository, fixtures,
};
use tracing::info;

use super::ServerConfig;

/// Build the HTTP state, seeding fixtures unless disabled.
///
/// # Errors
/// Returns [`std::io::Error`] if the fixture data fails validation.
pub(crate) fn build_http_state(config: &ServerConfig) -> std::io::Result<HttpState> {
    let (users, exams, reviews) = if config.seed_fixtures {
        let users = fixtures::users()
            .map_err(|err| std::io::Error::other(format!("invalid fixture user: {err}")))?;
        let exams = fixtures::exams(&users);
        (users, exams, fixtures::peer_reviews())
    } else {
        (Vec::new(), Vec::new(), Vec::new())
    };
    info!(
        users = users.len(),
        exams = exams.len(),
        peer_reviews = reviews.len(),
        exam_id_start = config.exam_id_start,
        "repositories initialised"
    );

    Ok(HttpState::in_memory(
        Arc::new(InMemoryUserRepository::with_users(users)),
        Arc::new(InMemoryExamRepository::new(exams, config.exam_id_start)),
        Arc::new(InMemoryPeerReviewRepository::new(reviews)),
    ))
}
