//! Seed data loaded into the repositories at start-up.

use crate::domain::{
    AnswerRef, Exam, ExamId, NewUser, PeerReview, Task, TaskType, User, UserId, UserType,
    UserValidationError,
};

/// The two seeded users: a student (id 1) and a teacher (id 2).
pub fn users() -> Result<Vec<User>, UserValidationError> {
    Ok(vec![
        User::new(
            UserId::new(1),
            NewUser::try_new(
                "Mario",
                "Rossi",
                "mario.rossi@example.com",
                UserType::Student,
                123_456,
            )?,
        ),
        User::new(
            UserId::new(2),
            NewUser::try_new(
                "Marco",
                "Bonni",
                "marco.bonni@example.com",
                UserType::Teacher,
                789_065,
            )?,
        ),
    ])
}

fn km(values: [&str; 3]) -> Vec<String> {
    values.iter().map(|v| format!("{v} km")).collect()
}

/// Reference tasks shared by every seeded exam.
pub fn tasks() -> Vec<Task> {
    vec![
        Task {
            id: 1,
            question: "diametro della Terra?".to_owned(),
            task_type: TaskType::MultipleChoice,
            answers: km(["9.742", "19.742", "12.742"]),
            correct_answer: AnswerRef::Literal("3".to_owned()),
        },
        Task {
            id: 2,
            question: "diametro della Luna?".to_owned(),
            task_type: TaskType::MultipleChoice,
            answers: km(["4.742", "14.742", "8.742"]),
            correct_answer: AnswerRef::Position(3),
        },
    ]
}

/// Exams `prova2` to `prova8`, all set by the seeded teacher for the seeded
/// student.
pub fn exams(users: &[User]) -> Vec<Exam> {
    let find = |id: u64| users.iter().find(|u| u.id() == UserId::new(id)).cloned();
    let Some(teacher) = find(2) else {
        return Vec::new();
    };
    let students: Vec<User> = find(1).into_iter().collect();
    let tasks = tasks();

    (2..=8)
        .map(|id| Exam {
            id: ExamId::new(id),
            description: format!("prova{id}"),
            deadline: 3600,
            numerotasks: 2,
            teacher: teacher.clone(),
            tasks: tasks.clone(),
            students: students.clone(),
        })
        .collect()
}

/// The single seeded peer review, of exam 1.
pub fn peer_reviews() -> Vec<PeerReview> {
    let task = tasks().into_iter().next();
    task.map(|task| PeerReview {
        id: 0,
        examid: ExamId::new(1),
        task,
        studentanswer: AnswerRef::Position(3),
        mark: 30.0,
        description: "The task is perfect as it is".to_owned(),
        deadline: 900,
    })
    .into_iter()
    .collect()
}
