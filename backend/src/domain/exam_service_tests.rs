//! Tests for the exam service.

use std::sync::Arc;

use mockall::predicate::eq;
use rstest::rstest;

use super::*;
use crate::domain::ports::{MockExamRepository, MockUserRepository};
use crate::domain::{ErrorCode, NewUser};

fn user(id: u64, user_type: UserType) -> User {
    let payload = NewUser::try_new("Mario", "Rossi", "mario.rossi@example.com", user_type, id)
        .expect("valid fixture user");
    User::new(UserId::new(id), payload)
}

fn exam(id: u64) -> Exam {
    Exam {
        id: ExamId::new(id),
        description: format!("prova{id}"),
        deadline: 3600,
        numerotasks: 0,
        teacher: user(2, UserType::Teacher),
        tasks: Vec::new(),
        students: vec![user(1, UserType::Student)],
    }
}

fn draft(student_ids: Vec<u64>) -> ExamDraft {
    ExamDraft {
        description: "midterm".to_owned(),
        deadline: 1800,
        numerotasks: 0,
        tasks: Vec::new(),
        student_ids,
    }
}

fn teacher_claim() -> CallerClaim {
    CallerClaim::new(Some(UserId::new(2)), Some(UserType::Teacher))
}

fn make_service(
    exams: MockExamRepository,
    users: MockUserRepository,
) -> ExamService<MockExamRepository, MockUserRepository> {
    ExamService::new(Arc::new(exams), Arc::new(users))
}

fn users_with_teacher() -> MockUserRepository {
    let mut users = MockUserRepository::new();
    users.expect_find_by_id().returning(|id| {
        Ok(match id.get() {
            1 => Some(user(1, UserType::Student)),
            2 => Some(user(2, UserType::Teacher)),
            _ => None,
        })
    });
    users
}

#[tokio::test]
async fn lists_exams_from_the_repository() {
    let mut exams = MockExamRepository::new();
    exams
        .expect_list()
        .times(1)
        .return_once(|| Ok(vec![exam(2), exam(3)]));

    let listed = make_service(exams, MockUserRepository::new())
        .list_exams()
        .await
        .expect("list succeeds");
    let ids: Vec<u64> = listed.iter().map(|e| e.id.get()).collect();
    assert_eq!(ids, vec![2, 3]);
}

#[tokio::test]
async fn missing_exam_is_not_found() {
    let mut exams = MockExamRepository::new();
    exams
        .expect_find_by_id()
        .with(eq(ExamId::new(42)))
        .times(1)
        .return_once(|_| Ok(None));

    let err = make_service(exams, MockUserRepository::new())
        .get_exam(ExamId::new(42))
        .await
        .expect_err("unknown exam");
    assert_eq!(err.code(), ErrorCode::NotFound);
}

#[tokio::test]
async fn teacher_creates_exam_with_resolved_students() {
    let mut exams = MockExamRepository::new();
    exams
        .expect_next_id()
        .times(1)
        .return_once(|| Ok(ExamId::new(1000)));
    exams.expect_push().times(1).return_once(|_| Ok(()));

    let created = make_service(exams, users_with_teacher())
        .create_exam(&teacher_claim(), draft(vec![1]))
        .await
        .expect("create succeeds");
    assert_eq!(created.id, ExamId::new(1000));
    assert_eq!(created.teacher.id(), UserId::new(2));
    assert_eq!(created.students.len(), 1);
    assert_eq!(created.students[0].id(), UserId::new(1));
}

#[rstest]
#[case::unknown_student(vec![77])]
#[case::teacher_as_student(vec![2])]
#[tokio::test]
async fn invalid_student_references_are_bad_requests(#[case] student_ids: Vec<u64>) {
    let mut exams = MockExamRepository::new();
    exams.expect_next_id().never();
    exams.expect_push().never();

    let err = make_service(exams, users_with_teacher())
        .create_exam(&teacher_claim(), draft(student_ids))
        .await
        .expect_err("invalid students");
    assert_eq!(err.code(), ErrorCode::BadRequest);
}

#[rstest]
#[case::student_role(CallerClaim::new(Some(UserId::new(1)), Some(UserType::Student)))]
#[case::spoofed_role(CallerClaim::new(Some(UserId::new(1)), Some(UserType::Teacher)))]
#[case::unknown_caller(CallerClaim::new(Some(UserId::new(9)), Some(UserType::Teacher)))]
#[case::anonymous(CallerClaim::new(None, None))]
#[tokio::test]
async fn non_teachers_cannot_create_exams(#[case] claim: CallerClaim) {
    let mut exams = MockExamRepository::new();
    exams.expect_push().never();

    let err = make_service(exams, users_with_teacher())
        .create_exam(&claim, draft(Vec::new()))
        .await
        .expect_err("denied");
    assert_eq!(err.code(), ErrorCode::Forbidden);
}

#[rstest]
#[case::teacher(teacher_claim(), None)]
#[case::student(CallerClaim::new(Some(UserId::new(1)), Some(UserType::Student)), Some(ErrorCode::Forbidden))]
#[case::anonymous(CallerClaim::new(None, None), Some(ErrorCode::Forbidden))]
#[tokio::test]
async fn manager_check_touches_no_exam(
    #[case] claim: CallerClaim,
    #[case] expected: Option<ErrorCode>,
) {
    let service = make_service(MockExamRepository::new(), users_with_teacher());
    let outcome = service.authorise_manager(&claim).await;
    assert_eq!(outcome.err().map(|err| err.code()), expected);
}

#[tokio::test]
async fn blank_description_is_rejected() {
    let mut exams = MockExamRepository::new();
    exams.expect_push().never();
    let mut payload = draft(Vec::new());
    payload.description = "   ".to_owned();

    let err = make_service(exams, users_with_teacher())
        .create_exam(&teacher_claim(), payload)
        .await
        .expect_err("blank description");
    assert_eq!(err.code(), ErrorCode::BadRequest);
}

#[tokio::test]
async fn update_replaces_the_patched_exam() {
    let mut exams = MockExamRepository::new();
    exams
        .expect_find_by_id()
        .with(eq(ExamId::new(3)))
        .times(1)
        .return_once(|_| Ok(Some(exam(3))));
    exams
        .expect_replace()
        .withf(|updated| updated.description == "renamed" && updated.numerotasks == 0)
        .times(1)
        .return_once(|_| Ok(Some(exam(3))));

    let patch = ExamPatch {
        description: Some("renamed".to_owned()),
        numerotasks: None,
    };
    let updated = make_service(exams, users_with_teacher())
        .update_exam(&teacher_claim(), ExamId::new(3), patch)
        .await
        .expect("update succeeds");
    assert_eq!(updated.description, "renamed");
}

#[tokio::test]
async fn empty_patch_is_a_bad_request() {
    let mut exams = MockExamRepository::new();
    exams
        .expect_find_by_id()
        .times(1)
        .return_once(|_| Ok(Some(exam(3))));
    exams.expect_replace().never();

    let err = make_service(exams, users_with_teacher())
        .update_exam(&teacher_claim(), ExamId::new(3), ExamPatch::default())
        .await
        .expect_err("empty patch");
    assert_eq!(err.code(), ErrorCode::BadRequest);
}

#[tokio::test]
async fn deleting_unknown_exam_is_not_found() {
    let mut exams = MockExamRepository::new();
    exams
        .expect_delete_by_id()
        .times(1)
        .return_once(|_| Ok(None));

    let err = make_service(exams, users_with_teacher())
        .delete_exam(&teacher_claim(), ExamId::new(404))
        .await
        .expect_err("unknown exam");
    assert_eq!(err.code(), ErrorCode::NotFound);
}

#[tokio::test]
async fn deleting_exam_reports_success() {
    let mut exams = MockExamRepository::new();
    exams
        .expect_delete_by_id()
        .with(eq(ExamId::new(4)))
        .times(1)
        .return_once(|_| Ok(Some(exam(4))));

    let outcome = make_service(exams, users_with_teacher())
        .delete_exam(&teacher_claim(), ExamId::new(4))
        .await
        .expect("delete succeeds");
    assert_eq!(outcome.status, 200);
    assert_eq!(outcome.message, EXAM_DELETED_MESSAGE);
}

#[tokio::test]
async fn poisoned_exam_store_is_internal() {
    let mut exams = MockExamRepository::new();
    exams
        .expect_list()
        .times(1)
        .return_once(|| Err(ExamPersistenceError::lock("poisoned")));

    let err = make_service(exams, MockUserRepository::new())
        .list_exams()
        .await
        .expect_err("store failure");
    assert_eq!(err.code(), ErrorCode::InternalError);
}
