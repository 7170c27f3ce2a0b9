//! HTTP inbound adapter exposing the REST endpoints under `/v1`.

pub mod body;
pub mod caller;
pub mod error;
pub mod exams;
pub mod health;
pub mod peer_reviews;
pub mod schemas;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod users;

use actix_web::web;

pub use error::ApiResult;

/// Base path of the versioned API.
pub const API_BASE_PATH: &str = "/v1";

/// Register every `/v1` endpoint.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use exam_backend::inbound::http::configure_api;
///
/// let app = App::new().configure(configure_api);
/// ```
pub fn configure_api(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope(API_BASE_PATH)
            .service(users::create_user)
            .service(users::list_users)
            .service(users::get_user)
            .service(users::delete_user)
            .service(exams::list_exams)
            .service(exams::create_exam)
            .service(exams::get_exam)
            .service(exams::update_exam)
            .service(exams::delete_exam)
            .service(peer_reviews::list_peer_reviews)
            .service(peer_reviews::get_peer_review),
    );
}
