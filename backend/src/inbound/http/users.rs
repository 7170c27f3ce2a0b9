//! Users API handlers.
//!
//! ```text
//! POST   /v1/users              register a user
//! GET    /v1/users?type=0       list users (verified teachers only)
//! GET    /v1/users/{id}         fetch one user
//! DELETE /v1/users/{id}         self-deletion
//! ```

use actix_web::http::header;
use actix_web::{HttpRequest, HttpResponse, delete, get, post, web};
use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

use crate::domain::{DeletionOutcome, Error, NewUser, User, UserDraft, UserId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::body::{MAX_BODY_BYTES, read_body};
use crate::inbound::http::caller::Caller;
use crate::inbound::http::schemas::{DeletionOutcomeSchema, ErrorSchema, UserSchema};
use crate::inbound::http::state::HttpState;

/// Message returned when a registration payload is unusable.
pub const CREATE_FAILED_MESSAGE: &str = "Error while registering the user";
/// Message returned when the user id in the path is malformed.
pub const DELETE_BAD_PARAMS_MESSAGE: &str = "Deletion failed: invalid parameters.";
/// Message returned when the user id in the path of a lookup is malformed.
pub const LOOKUP_BAD_PARAMS_MESSAGE: &str = "Invalid user id";

/// Query string accepted by `GET /v1/users`.
#[derive(Debug, Default, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListUsersQuery {
    /// User type filter: `0`/`student` or `1`/`teacher`.
    #[serde(rename = "type")]
    pub user_type: Option<String>,
}

/// Turn a raw request body into a validated payload.
///
/// An empty body or one that is not a user yields `BadRequest`; a literal
/// JSON `null` yields `InternalError`.
fn parse_new_user(body: &[u8]) -> Result<NewUser, Error> {
    let bad_request = || Error::bad_request(CREATE_FAILED_MESSAGE);
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(bad_request());
    }
    let value: Value = serde_json::from_slice(body).map_err(|err| {
        warn!(error = %err, "registration body is not JSON");
        bad_request()
    })?;
    if value.is_null() {
        return Err(Error::internal("registration body is JSON null"));
    }
    let draft: UserDraft = serde_json::from_value(value).map_err(|err| {
        warn!(error = %err, "registration body is not a user");
        bad_request()
    })?;
    NewUser::try_from(draft).map_err(|err| {
        warn!(error = %err, "registration payload rejected");
        bad_request()
    })
}

/// Register a new user.
#[utoipa::path(
    post,
    path = "/v1/users",
    request_body(content = UserSchema, description = "User without id", content_type = "application/json"),
    responses(
        (status = 201, description = "User created", body = UserSchema,
            headers(("location" = String, description = "URL of the new user"))),
        (status = 400, description = "Invalid payload", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "createUser"
)]
#[post("/users")]
pub async fn create_user(
    state: web::Data<HttpState>,
    payload: web::Payload,
) -> ApiResult<HttpResponse> {
    let body = read_body(payload, MAX_BODY_BYTES).await?;
    let payload = parse_new_user(&body)?;
    let user = state.users_command.create_user(payload).await?;
    Ok(HttpResponse::Created()
        .insert_header((header::LOCATION, format!("/v1/users/{}", user.id())))
        .json(user))
}

/// Extract the `type` filter from a raw query string.
///
/// A query that does not deserialise (a repeated `type`, say) is passed on
/// whole, so it is refused as an unknown filter after the access check.
fn type_filter(query_string: &str) -> Option<String> {
    match web::Query::<ListUsersQuery>::from_query(query_string) {
        Ok(query) => query.into_inner().user_type,
        Err(err) => {
            warn!(error = %err, "user list query rejected");
            Some(query_string.to_owned())
        }
    }
}

/// List users, optionally filtered by type.
#[utoipa::path(
    get,
    path = "/v1/users",
    params(
        ListUsersQuery,
        ("user_id" = Option<String>, Header, description = "Caller id"),
        ("user_role" = Option<String>, Header, description = "Caller role")
    ),
    responses(
        (status = 200, description = "Users", body = [UserSchema]),
        (status = 403, description = "Caller is not a verified teacher", body = ErrorSchema),
        (status = 404, description = "Unknown user type filter", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "listUsers"
)]
#[get("/users")]
pub async fn list_users(
    state: web::Data<HttpState>,
    caller: Caller,
    req: HttpRequest,
) -> ApiResult<web::Json<Vec<User>>> {
    let filter = type_filter(req.query_string());
    let users = state
        .users
        .list_users(caller.claim(), filter.as_deref())
        .await?;
    Ok(web::Json(users))
}

/// Fetch one user.
#[utoipa::path(
    get,
    path = "/v1/users/{id}",
    params(("id" = u64, Path, description = "User id")),
    responses(
        (status = 200, description = "User", body = UserSchema),
        (status = 400, description = "Malformed id", body = ErrorSchema),
        (status = 404, description = "No such user", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "getUser"
)]
#[get("/users/{id}")]
pub async fn get_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<User>> {
    let id = UserId::parse(&path).map_err(|_| Error::bad_request(LOOKUP_BAD_PARAMS_MESSAGE))?;
    Ok(web::Json(state.users.get_user(id).await?))
}

/// Delete the caller's own account.
///
/// The path id is validated before any permission check.
#[utoipa::path(
    delete,
    path = "/v1/users/{id}",
    params(
        ("id" = u64, Path, description = "User id"),
        ("user_id" = Option<String>, Header, description = "Caller id")
    ),
    responses(
        (status = 200, description = "User deleted", body = DeletionOutcomeSchema),
        (status = 400, description = "Malformed id", body = ErrorSchema),
        (status = 403, description = "Caller may not delete this user", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "deleteUser"
)]
#[delete("/users/{id}")]
pub async fn delete_user(
    state: web::Data<HttpState>,
    caller: Caller,
    path: web::Path<String>,
) -> ApiResult<web::Json<DeletionOutcome>> {
    let target =
        UserId::parse(&path).map_err(|_| Error::bad_request(DELETE_BAD_PARAMS_MESSAGE))?;
    let outcome = state
        .users_command
        .delete_user(caller.claim(), target)
        .await?;
    Ok(web::Json(outcome))
}

#[cfg(test)]
mod tests;
