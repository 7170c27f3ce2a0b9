//! OpenAPI documentation for the REST API.
//!
//! [`ApiDoc`] registers every `/v1` handler, the health probes and the schema
//! wrappers from [`crate::inbound::http::schemas`]. Swagger UI serves it in
//! debug builds and `openapi-dump` prints it.

use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::inbound::http::schemas::{
    DeletionOutcomeSchema, ErrorSchema, ExamDraftSchema, ExamPatchSchema, ExamSchema,
    PeerReviewSchema, TaskSchema, UserSchema,
};

/// Document the caller identity headers as API keys.
struct CallerHeadersAddon;

impl Modify for CallerHeadersAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "CallerId",
            SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::with_description(
                "user_id",
                "Numeric id of the calling user.",
            ))),
        );
        components.add_security_scheme(
            "CallerRole",
            SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::with_description(
                "user_role",
                "Claimed role: 0/student or 1/teacher.",
            ))),
        );
    }
}

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    modifiers(&CallerHeadersAddon),
    info(
        title = "Exam management API",
        description = "Users, exams and peer reviews backed by in-memory repositories."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::users::create_user,
        crate::inbound::http::users::list_users,
        crate::inbound::http::users::get_user,
        crate::inbound::http::users::delete_user,
        crate::inbound::http::exams::list_exams,
        crate::inbound::http::exams::create_exam,
        crate::inbound::http::exams::get_exam,
        crate::inbound::http::exams::update_exam,
        crate::inbound::http::exams::delete_exam,
        crate::inbound::http::peer_reviews::list_peer_reviews,
        crate::inbound::http::peer_reviews::get_peer_review,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        UserSchema,
        TaskSchema,
        ExamSchema,
        ExamDraftSchema,
        ExamPatchSchema,
        PeerReviewSchema,
        DeletionOutcomeSchema,
        ErrorSchema
    )),
    tags(
        (name = "users", description = "Registration, listing and self-deletion of users"),
        (name = "exams", description = "Exam management for teachers"),
        (name = "peer-reviews", description = "Read-only peer reviews"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
