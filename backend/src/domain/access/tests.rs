//! Tests for the access-control decision functions.

use super::*;
use crate::domain::NewUser;
use rstest::{fixture, rstest};
use rstest_bdd_macros::{given, then, when};

fn user(id: u64, user_type: UserType) -> User {
    let payload = NewUser::try_new("Test", "User", "test.user@example.com", user_type, id)
        .expect("valid fixture user");
    User::new(UserId::new(id), payload)
}

#[fixture]
fn student() -> User {
    user(1, UserType::Student)
}

#[fixture]
fn teacher() -> User {
    user(2, UserType::Teacher)
}

#[rstest]
#[case(Some("2"), Some("1"))]
#[case(Some("2"), Some("TEACHER"))]
#[case(Some("2"), Some("teacher"))]
fn parsing_keeps_well_formed_hints(#[case] id: Option<&str>, #[case] role: Option<&str>) {
    let claim = CallerClaim::from_raw(id, role);
    assert_eq!(claim.user_id(), Some(UserId::new(2)));
    assert_eq!(claim.role(), Some(UserType::Teacher));
}

#[rstest]
#[case(Some("null"), Some("5"))]
#[case(Some("id_test"), Some("admin"))]
#[case(None, None)]
fn parsing_drops_malformed_hints(#[case] id: Option<&str>, #[case] role: Option<&str>) {
    assert_eq!(CallerClaim::from_raw(id, role), CallerClaim::default());
}

#[rstest]
fn verified_teacher_may_list_users(teacher: User) {
    let claim = CallerClaim::new(Some(teacher.id()), Some(UserType::Teacher));
    assert_eq!(decide_list_users(&claim, Some(&teacher)), AccessDecision::Permit);
}

#[rstest]
fn teacher_claiming_student_role_is_denied(teacher: User) {
    let claim = CallerClaim::new(Some(teacher.id()), Some(UserType::Student));
    assert_eq!(
        decide_list_users(&claim, Some(&teacher)),
        AccessDecision::Deny(DenialReason::RoleNotPermitted {
            claimed: UserType::Student
        })
    );
}

#[rstest]
fn student_spoofing_teacher_role_is_denied(student: User) {
    let claim = CallerClaim::new(Some(student.id()), Some(UserType::Teacher));
    assert_eq!(
        decide_list_users(&claim, Some(&student)),
        AccessDecision::Deny(DenialReason::RoleMismatch {
            claimed: UserType::Teacher,
            stored: UserType::Student,
        })
    );
}

#[rstest]
#[case(CallerClaim::new(None, Some(UserType::Teacher)), DenialReason::MissingCallerId)]
#[case(CallerClaim::new(Some(UserId::new(2)), None), DenialReason::MissingRole)]
fn incomplete_claims_are_denied(#[case] claim: CallerClaim, #[case] expected: DenialReason) {
    assert_eq!(
        decide_manage_exams(&claim, Some(&user(2, UserType::Teacher))),
        AccessDecision::Deny(expected)
    );
}

#[rstest]
fn unknown_teacher_is_denied() {
    let claim = CallerClaim::new(Some(UserId::new(35)), Some(UserType::Teacher));
    assert_eq!(
        decide_list_users(&claim, None),
        AccessDecision::Deny(DenialReason::UnknownCaller)
    );
}

#[rstest]
fn users_may_delete_themselves(student: User) {
    let claim = CallerClaim::new(Some(student.id()), None);
    assert_eq!(
        decide_delete_user(&claim, Some(&student), student.id()),
        AccessDecision::Permit
    );
}

#[rstest]
fn users_may_not_delete_others(teacher: User, student: User) {
    let claim = CallerClaim::new(Some(teacher.id()), Some(UserType::Teacher));
    assert_eq!(
        decide_delete_user(&claim, Some(&teacher), student.id()),
        AccessDecision::Deny(DenialReason::NotOwner {
            caller: teacher.id(),
            target: student.id(),
        })
    );
}

#[rstest]
fn unknown_or_missing_callers_may_not_delete() {
    let target = UserId::new(2);
    let unknown = CallerClaim::new(Some(UserId::new(35)), None);
    assert_eq!(
        decide_delete_user(&unknown, None, target),
        AccessDecision::Deny(DenialReason::UnknownCaller)
    );
    assert_eq!(
        decide_delete_user(&CallerClaim::default(), None, target),
        AccessDecision::Deny(DenialReason::MissingCallerId)
    );
}

#[rstest]
fn decisions_convert_into_results() {
    assert_eq!(AccessDecision::Permit.into_result(), Ok(()));
    assert_eq!(
        AccessDecision::Deny(DenialReason::UnknownCaller).into_result(),
        Err(DenialReason::UnknownCaller)
    );
}

#[rstest]
#[case(DenialReason::MissingRole, "caller role is missing or unrecognised")]
#[case(
    DenialReason::RoleMismatch { claimed: UserType::Teacher, stored: UserType::Student },
    "claimed role TEACHER does not match stored role STUDENT"
)]
#[case(
    DenialReason::NotOwner { caller: UserId::new(1), target: UserId::new(2) },
    "user 1 may only act on their own account, not 2"
)]
fn denial_reasons_render_their_fields(#[case] reason: DenialReason, #[case] expected: &str) {
    assert_eq!(reason.to_string(), expected);
}

#[given("a student claiming the teacher role")]
fn a_student_claiming_the_teacher_role() -> (CallerClaim, User) {
    let stored = user(1, UserType::Student);
    (CallerClaim::from_raw(Some("1"), Some("TEACHER")), stored)
}

#[when("the caller asks to list users")]
fn the_caller_asks_to_list_users(caller: (CallerClaim, User)) -> AccessDecision {
    let (claim, stored) = caller;
    decide_list_users(&claim, Some(&stored))
}

#[then("the request is refused as a role mismatch")]
fn the_request_is_refused_as_a_role_mismatch(decision: AccessDecision) {
    assert!(matches!(
        decision,
        AccessDecision::Deny(DenialReason::RoleMismatch { .. })
    ));
}

#[rstest]
fn spoofed_role_header_is_refused() {
    let caller = a_student_claiming_the_teacher_role();
    let decision = the_caller_asks_to_list_users(caller);
    the_request_is_refused_as_a_role_mismatch(decision);
}
