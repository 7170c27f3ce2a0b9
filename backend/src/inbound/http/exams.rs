//! Exams API handlers.
//!
//! ```text
//! GET    /v1/exams
//! POST   /v1/exams           verified teachers only
//! GET    /v1/exams/{id}
//! PATCH  /v1/exams/{id}      description and numerotasks only
//! DELETE /v1/exams/{id}
//! ```

use actix_web::http::header;
use actix_web::{HttpResponse, delete, get, patch, post, web};
use serde::de::DeserializeOwned;
use tracing::warn;

use crate::domain::{DeletionOutcome, Error, Exam, ExamDraft, ExamId, ExamPatch};
use crate::inbound::http::ApiResult;
use crate::inbound::http::body::{MAX_BODY_BYTES, read_body};
use crate::inbound::http::caller::Caller;
use crate::inbound::http::schemas::{
    DeletionOutcomeSchema, ErrorSchema, ExamDraftSchema, ExamPatchSchema, ExamSchema,
};
use crate::inbound::http::state::HttpState;

/// Message returned for an exam id that is not a number.
pub const INVALID_EXAM_ID_MESSAGE: &str = "Invalid exam id";
/// Message returned for an exam body that does not match the expected shape.
pub const INVALID_EXAM_PAYLOAD_MESSAGE: &str = "Invalid exam payload";

fn parse_id(raw: &str) -> Result<ExamId, Error> {
    ExamId::parse(raw).map_err(|_| Error::bad_request(INVALID_EXAM_ID_MESSAGE))
}

async fn parse_body<T: DeserializeOwned>(payload: web::Payload) -> Result<T, Error> {
    let body = read_body(payload, MAX_BODY_BYTES).await?;
    serde_json::from_slice(&body).map_err(|err| {
        warn!(error = %err, "exam payload rejected");
        Error::bad_request(INVALID_EXAM_PAYLOAD_MESSAGE)
    })
}

/// List every exam.
#[utoipa::path(
    get,
    path = "/v1/exams",
    responses((status = 200, description = "Exams", body = [ExamSchema])),
    tags = ["exams"],
    operation_id = "listExams"
)]
#[get("/exams")]
pub async fn list_exams(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<Exam>>> {
    Ok(web::Json(state.exams.list_exams().await?))
}

/// Fetch one exam by id.
#[utoipa::path(
    get,
    path = "/v1/exams/{id}",
    params(("id" = u64, Path, description = "Exam id")),
    responses(
        (status = 200, description = "Exam", body = ExamSchema),
        (status = 400, description = "Malformed id", body = ErrorSchema),
        (status = 404, description = "No such exam", body = ErrorSchema)
    ),
    tags = ["exams"],
    operation_id = "getExam"
)]
#[get("/exams/{id}")]
pub async fn get_exam(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<Exam>> {
    let id = parse_id(&path)?;
    Ok(web::Json(state.exams.get_exam(id).await?))
}

/// Create an exam owned by the calling teacher.
#[utoipa::path(
    post,
    path = "/v1/exams",
    request_body(content = ExamDraftSchema, content_type = "application/json"),
    params(
        ("user_id" = Option<String>, Header, description = "Caller id"),
        ("user_role" = Option<String>, Header, description = "Caller role")
    ),
    responses(
        (status = 201, description = "Exam created", body = ExamSchema,
            headers(("location" = String, description = "URL of the new exam"))),
        (status = 400, description = "Invalid payload", body = ErrorSchema),
        (status = 403, description = "Caller is not a verified teacher", body = ErrorSchema)
    ),
    tags = ["exams"],
    operation_id = "createExam"
)]
#[post("/exams")]
pub async fn create_exam(
    state: web::Data<HttpState>,
    caller: Caller,
    payload: web::Payload,
) -> ApiResult<HttpResponse> {
    state.exams_command.authorise_manager(caller.claim()).await?;
    let draft: ExamDraft = parse_body(payload).await?;
    let exam = state.exams_command.create_exam(caller.claim(), draft).await?;
    Ok(HttpResponse::Created()
        .insert_header((header::LOCATION, format!("/v1/exams/{}", exam.id)))
        .json(exam))
}

/// Update the description and/or task count of an exam.
#[utoipa::path(
    patch,
    path = "/v1/exams/{id}",
    request_body(content = ExamPatchSchema, content_type = "application/json"),
    params(
        ("id" = u64, Path, description = "Exam id"),
        ("user_id" = Option<String>, Header, description = "Caller id"),
        ("user_role" = Option<String>, Header, description = "Caller role")
    ),
    responses(
        (status = 200, description = "Updated exam", body = ExamSchema),
        (status = 400, description = "Malformed id or payload", body = ErrorSchema),
        (status = 403, description = "Caller is not a verified teacher", body = ErrorSchema),
        (status = 404, description = "No such exam", body = ErrorSchema)
    ),
    tags = ["exams"],
    operation_id = "updateExam"
)]
#[patch("/exams/{id}")]
pub async fn update_exam(
    state: web::Data<HttpState>,
    caller: Caller,
    path: web::Path<String>,
    payload: web::Payload,
) -> ApiResult<web::Json<Exam>> {
    let id = parse_id(&path)?;
    state.exams_command.authorise_manager(caller.claim()).await?;
    let patch: ExamPatch = parse_body(payload).await?;
    let exam = state
        .exams_command
        .update_exam(caller.claim(), id, patch)
        .await?;
    Ok(web::Json(exam))
}

/// Delete an exam.
#[utoipa::path(
    delete,
    path = "/v1/exams/{id}",
    params(
        ("id" = u64, Path, description = "Exam id"),
        ("user_id" = Option<String>, Header, description = "Caller id"),
        ("user_role" = Option<String>, Header, description = "Caller role")
    ),
    responses(
        (status = 200, description = "Exam deleted", body = DeletionOutcomeSchema),
        (status = 400, description = "Malformed id", body = ErrorSchema),
        (status = 403, description = "Caller is not a verified teacher", body = ErrorSchema),
        (status = 404, description = "No such exam", body = ErrorSchema)
    ),
    tags = ["exams"],
    operation_id = "deleteExam"
)]
#[delete("/exams/{id}")]
pub async fn delete_exam(
    state: web::Data<HttpState>,
    caller: Caller,
    path: web::Path<String>,
) -> ApiResult<web::Json<DeletionOutcome>> {
    let id = parse_id(&path)?;
    let outcome = state.exams_command.delete_exam(caller.claim(), id).await?;
    Ok(web::Json(outcome))
}

#[cfg(test)]
#[path = "exams_tests.rs"]
mod tests;
