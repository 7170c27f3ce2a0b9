//! Exam management backend.
//!
//! Users, exams and peer reviews live in in-memory repositories behind domain
//! ports; an actix-web adapter exposes them under `/v1`.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod settings;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;
