//! Tests for users API handlers.

use super::*;
use crate::domain::TRACE_ID_HEADER;
use crate::inbound::http::caller::{USER_ID_HEADER, USER_ROLE_HEADER};
use crate::inbound::http::test_utils::{seeded_state, test_app};
use crate::domain::user_service::{
    DELETE_FORBIDDEN_MESSAGE, LIST_FORBIDDEN_MESSAGE, LIST_NOT_FOUND_MESSAGE,
};
use crate::inbound::http::body::{BODY_TOO_LARGE_MESSAGE, MAX_BODY_BYTES};
use actix_web::http::StatusCode;
use actix_web::test as actix_test;
use rstest::rstest;
use serde_json::{Value, json};

const USER_KEYS: [&str; 6] = [
    "email",
    "firstname",
    "id",
    "identification_number",
    "lastname",
    "user_type",
];

fn sorted_keys(value: &Value) -> Vec<String> {
    let mut keys: Vec<String> = value
        .as_object()
        .expect("JSON object")
        .keys()
        .cloned()
        .collect();
    keys.sort();
    keys
}

fn error_body(code: u16, message: &str) -> Value {
    json!({ "code": code, "message": message })
}

#[rstest]
#[case::blank(b"   ".to_vec())]
#[case::not_json(b"{firstname".to_vec())]
#[case::array(b"[1, 2]".to_vec())]
#[case::incomplete(br#"{"firstname":"Mario","lastname":"Rossi","email":"mario.rossi@gmail.com"}"#.to_vec())]
#[case::bad_email(br#"{"firstname":"Mario","lastname":"Rossi","email":"nope","user_type":0,"identification_number":1}"#.to_vec())]
fn unusable_bodies_are_bad_requests(#[case] body: Vec<u8>) {
    let err = parse_new_user(&body).expect_err("body rejected");
    assert_eq!(err, Error::bad_request(CREATE_FAILED_MESSAGE));
}

#[rstest]
fn null_body_is_an_internal_error() {
    let err = parse_new_user(b"null").expect_err("null rejected");
    assert_eq!(err.code(), crate::domain::ErrorCode::InternalError);
}

#[actix_web::test]
async fn create_returns_201_with_location() {
    let app = actix_test::init_service(test_app(seeded_state())).await;
    let request = actix_test::TestRequest::post()
        .uri("/v1/users")
        .set_json(json!({
            "firstname": "Mario",
            "lastname": "Rossi",
            "email": "mario.rossi@gmail.com",
            "user_type": 0,
            "identification_number": 123_456
        }))
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(
        response
            .headers()
            .get(header::LOCATION)
            .and_then(|v| v.to_str().ok()),
        Some("/v1/users/3")
    );
    assert!(response.headers().contains_key(TRACE_ID_HEADER));
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(sorted_keys(&body), USER_KEYS);
    assert_eq!(body["id"], json!(3));
    assert_eq!(body["user_type"], json!(0));
}

#[rstest]
#[case::empty("", 400, CREATE_FAILED_MESSAGE)]
#[case::null("null", 500, "Internal server error")]
#[actix_web::test]
async fn create_failures_use_the_error_shape(
    #[case] body: &'static str,
    #[case] status: u16,
    #[case] message: &str,
) {
    let app = actix_test::init_service(test_app(seeded_state())).await;
    let request = actix_test::TestRequest::post()
        .uri("/v1/users")
        .insert_header((header::CONTENT_TYPE, "application/json"))
        .set_payload(body)
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status().as_u16(), status);
    let payload: Value = actix_test::read_body_json(response).await;
    assert_eq!(payload, error_body(status, message));
}

#[actix_web::test]
async fn verified_teacher_lists_seeded_users() {
    let app = actix_test::init_service(test_app(seeded_state())).await;
    let request = actix_test::TestRequest::get()
        .uri("/v1/users")
        .insert_header((USER_ID_HEADER, "2"))
        .insert_header((USER_ROLE_HEADER, "1"))
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = actix_test::read_body_json(response).await;
    let users = body.as_array().expect("array");
    assert_eq!(users.len(), 2);
    assert_eq!(
        users[0],
        json!({
            "id": 1,
            "firstname": "Mario",
            "lastname": "Rossi",
            "email": "mario.rossi@example.com",
            "user_type": 0,
            "identification_number": 123_456
        })
    );
}

#[rstest]
#[case::students_only("0", StatusCode::OK)]
#[case::by_name("teacher", StatusCode::OK)]
#[case::unknown_type("5", StatusCode::NOT_FOUND)]
#[actix_web::test]
async fn type_filter_is_applied(#[case] filter: &str, #[case] expected: StatusCode) {
    let app = actix_test::init_service(test_app(seeded_state())).await;
    let request = actix_test::TestRequest::get()
        .uri(&format!("/v1/users?type={filter}"))
        .insert_header((USER_ID_HEADER, "2"))
        .insert_header((USER_ROLE_HEADER, "1"))
        .to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), expected);
}

#[rstest]
#[case::spoofed_role("2", "0")]
#[case::student("1", "0")]
#[case::student_claiming_teacher("1", "1")]
#[actix_web::test]
async fn non_teachers_cannot_list(#[case] user_id: &str, #[case] role: &str) {
    let app = actix_test::init_service(test_app(seeded_state())).await;
    let request = actix_test::TestRequest::get()
        .uri("/v1/users")
        .insert_header((USER_ID_HEADER, user_id))
        .insert_header((USER_ROLE_HEADER, role))
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body, error_body(403, LIST_FORBIDDEN_MESSAGE));
}

#[rstest]
#[case::teacher("2", "1", 404, LIST_NOT_FOUND_MESSAGE)]
#[case::student("1", "0", 403, LIST_FORBIDDEN_MESSAGE)]
#[actix_web::test]
async fn repeated_type_filter_is_refused_after_the_access_check(
    #[case] user_id: &str,
    #[case] role: &str,
    #[case] code: u16,
    #[case] message: &str,
) {
    let app = actix_test::init_service(test_app(seeded_state())).await;
    let request = actix_test::TestRequest::get()
        .uri("/v1/users?type=0&type=1")
        .insert_header((USER_ID_HEADER, user_id))
        .insert_header((USER_ROLE_HEADER, role))
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status().as_u16(), code);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body, error_body(code, message));
}

#[actix_web::test]
async fn oversized_registration_body_uses_the_error_shape() {
    let app = actix_test::init_service(test_app(seeded_state())).await;
    let request = actix_test::TestRequest::post()
        .uri("/v1/users")
        .insert_header((header::CONTENT_TYPE, "application/json"))
        .set_payload(vec![b' '; MAX_BODY_BYTES + 1])
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body, error_body(400, BODY_TOO_LARGE_MESSAGE));
}

#[rstest]
#[case::own_record("/v1/users/1", StatusCode::OK)]
#[case::unknown("/v1/users/35", StatusCode::NOT_FOUND)]
#[case::malformed("/v1/users/id_test", StatusCode::BAD_REQUEST)]
#[actix_web::test]
async fn get_user_by_id(#[case] uri: &str, #[case] expected: StatusCode) {
    let app = actix_test::init_service(test_app(seeded_state())).await;
    let request = actix_test::TestRequest::get().uri(uri).to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), expected);
}

#[actix_web::test]
async fn self_deletion_succeeds_and_removes_the_user() {
    let app = actix_test::init_service(test_app(seeded_state())).await;
    let request = actix_test::TestRequest::delete()
        .uri("/v1/users/1")
        .insert_header((USER_ID_HEADER, "1"))
        .to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(
        body,
        json!({ "status": 200, "message": "Deletion completed successfully." })
    );

    let request = actix_test::TestRequest::get()
        .uri("/v1/users")
        .insert_header((USER_ID_HEADER, "2"))
        .insert_header((USER_ROLE_HEADER, "1"))
        .to_request();
    let body: Value = actix_test::call_and_read_body_json(&app, request).await;
    let ids: Vec<u64> = body
        .as_array()
        .expect("array")
        .iter()
        .filter_map(|u| u["id"].as_u64())
        .collect();
    assert_eq!(ids, vec![2]);
}

#[rstest]
#[case::other_user(Some("1"))]
#[case::unknown_caller(Some("35"))]
#[case::missing_caller(None)]
#[case::null_caller(Some("null"))]
#[case::alpha_caller(Some("id_test"))]
#[actix_web::test]
async fn deleting_others_is_forbidden(#[case] caller: Option<&str>) {
    let app = actix_test::init_service(test_app(seeded_state())).await;
    let mut request = actix_test::TestRequest::delete().uri("/v1/users/2");
    if let Some(value) = caller {
        request = request.insert_header((USER_ID_HEADER, value));
    }
    let response = actix_test::call_service(&app, request.to_request()).await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body, error_body(403, DELETE_FORBIDDEN_MESSAGE));
}

#[rstest]
#[case::undefined("undefined")]
#[case::null("null")]
#[case::alpha("id_test")]
#[actix_web::test]
async fn malformed_target_is_a_bad_request(#[case] target: &str) {
    let app = actix_test::init_service(test_app(seeded_state())).await;
    let request = actix_test::TestRequest::delete()
        .uri(&format!("/v1/users/{target}"))
        .insert_header((USER_ID_HEADER, "2"))
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body, error_body(400, DELETE_BAD_PARAMS_MESSAGE));
}
