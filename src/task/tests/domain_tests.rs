//! Unit tests for task status normalization and the task record.

use crate::normalize::{CanonicalValue, normalize_field};
use crate::project::domain::ProjectId;
use crate::task::domain::{
    ParseTaskStatusError, PersistedTaskData, Task, TaskDraft, TaskId, TaskStatus,
};
use chrono::{TimeZone, Utc};
use rstest::rstest;

#[rstest]
#[case("domain.Pending", TaskStatus::Pending)]
#[case("pending", TaskStatus::Pending)]
#[case("PENDING", TaskStatus::Pending)]
#[case("domain.InProgress", TaskStatus::InProgress)]
#[case("inprogress", TaskStatus::InProgress)]
#[case("INPROGRESS", TaskStatus::InProgress)]
#[case("in progress", TaskStatus::InProgress)]
#[case("In Progress", TaskStatus::InProgress)]
#[case("IN PROGRESS", TaskStatus::InProgress)]
#[case("in_progress", TaskStatus::InProgress)]
#[case("In-Progress", TaskStatus::InProgress)]
#[case("domain.Done", TaskStatus::Done)]
#[case("done", TaskStatus::Done)]
#[case("DONE", TaskStatus::Done)]
#[case("\tDone\n", TaskStatus::Done)]
fn recognized_aliases_normalize_to_canonical_status(
    #[case] raw: &str,
    #[case] expected: TaskStatus,
) {
    assert_eq!(TaskStatus::normalize(raw), expected);
}

#[rstest]
#[case("")]
#[case("finished")]
#[case("in  progress")]
#[case("domain.Finished")]
#[case("Domain.Done.Extra")]
fn unrecognized_input_falls_back_to_pending(#[case] raw: &str) {
    assert_eq!(TaskStatus::normalize(raw), TaskStatus::Pending);
}

#[rstest]
#[case(TaskStatus::Pending)]
#[case(TaskStatus::InProgress)]
#[case(TaskStatus::Done)]
fn normalization_is_idempotent(#[case] status: TaskStatus) {
    let mut field = status.as_str().to_owned();
    let normalized: TaskStatus = normalize_field(&mut field);
    assert_eq!(normalized, status);
    assert_eq!(field, status.as_str());
}

#[test]
fn strict_parse_only_accepts_storage_labels() {
    assert_eq!(TaskStatus::try_from("InProgress"), Ok(TaskStatus::InProgress));
    assert_eq!(
        TaskStatus::try_from("in progress"),
        Err(ParseTaskStatusError("in progress".to_owned()))
    );
}

#[test]
fn status_serializes_with_canonical_spelling() {
    let json = serde_json::to_string(&TaskStatus::InProgress).expect("serialize status");
    assert_eq!(json, "\"InProgress\"");
}

#[test]
fn apply_replaces_fields_but_keeps_identity_and_timestamp() {
    let created_at = Utc
        .with_ymd_and_hms(2026, 1, 2, 3, 4, 5)
        .single()
        .expect("valid timestamp");
    let mut task = Task::from_persisted(PersistedTaskData {
        id: TaskId::new("t1"),
        project_id: ProjectId::new(1),
        title: "Write docs".to_owned(),
        description: String::new(),
        status: TaskStatus::Pending,
        created_at,
    });

    task.apply(&TaskDraft {
        project_id: ProjectId::new(2),
        title: "Publish docs".to_owned(),
        description: "site".to_owned(),
        status: TaskStatus::Done,
    });

    assert_eq!(task.id().as_str(), "t1");
    assert_eq!(task.project_id(), ProjectId::new(2));
    assert_eq!(task.title(), "Publish docs");
    assert_eq!(task.description(), "site");
    assert_eq!(task.status(), TaskStatus::Done);
    assert_eq!(task.created_at(), created_at);
}
