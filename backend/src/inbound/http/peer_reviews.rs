//! Peer review API handlers. Read-only.

use actix_web::{get, web};

use crate::domain::{Error, PeerReview};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{ErrorSchema, PeerReviewSchema};
use crate::inbound::http::state::HttpState;

/// List every peer review.
#[utoipa::path(
    get,
    path = "/v1/peer-reviews",
    responses((status = 200, description = "Peer reviews", body = [PeerReviewSchema])),
    tags = ["peer-reviews"],
    operation_id = "listPeerReviews"
)]
#[get("/peer-reviews")]
pub async fn list_peer_reviews(
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<Vec<PeerReview>>> {
    Ok(web::Json(state.peer_reviews.list_peer_reviews().await?))
}

/// Fetch one peer review.
#[utoipa::path(
    get,
    path = "/v1/peer-reviews/{id}",
    params(("id" = u64, Path, description = "Peer review id")),
    responses(
        (status = 200, description = "Peer review", body = PeerReviewSchema),
        (status = 400, description = "Malformed id", body = ErrorSchema),
        (status = 404, description = "No such review", body = ErrorSchema)
    ),
    tags = ["peer-reviews"],
    operation_id = "getPeerReview"
)]
#[get("/peer-reviews/{id}")]
pub async fn get_peer_review(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<PeerReview>> {
    let id = path
        .parse::<u64>()
        .map_err(|_| Error::bad_request("Invalid peer review id"))?;
    Ok(web::Json(state.peer_reviews.get_peer_review(id).await?))
}
