//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, web};

use crate::Trace;
use crate::inbound::http::configure_api;
use crate::inbound::http::state::HttpState;
use crate::outbound::memory::{
    InMemoryExamRepository, InMemoryPeerReviewRepository, InMemoryUserRepository, fixtures,
};

/// State over freshly seeded repositories.
pub fn seeded_state() -> HttpState {
    let users = fixtures::users().expect("fixture users are valid");
    let exams = fixtures::exams(&users);
    HttpState::in_memory(
        Arc::new(InMemoryUserRepository::with_users(users)),
        Arc::new(InMemoryExamRepository::new(exams, 1000)),
        Arc::new(InMemoryPeerReviewRepository::new(fixtures::peer_reviews())),
    )
}

/// Application with the trace middleware and every `/v1` route.
pub fn test_app(
    state: HttpState,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(state))
        .wrap(Trace)
        .configure(configure_api)
}
