use taskboard_core::{Task, TaskValidationError};
use uuid::Uuid;

#[test]
fn task_new_assigns_fresh_ids() {
    let first = Task::new("📖 Casual Reading");
    let second = Task::new("📖 Casual Reading");

    assert!(!first.id.is_nil());
    assert_ne!(first.id, second.id);
    assert_eq!(first.label, second.label);
}

#[test]
fn with_id_rejects_nil_uuid() {
    let err = Task::with_id(Uuid::nil(), "invalid").unwrap_err();
    assert_eq!(err, TaskValidationError::NilId);
}

#[test]
fn plain_label_strips_prefix_but_keeps_raw_label() {
    let task = Task::new("🌱 Water Jesse’s Plants (daily quick)");
    assert_eq!(task.plain_label(), "Water Jesse’s Plants (daily quick)");
    assert_eq!(task.label, "🌱 Water Jesse’s Plants (daily quick)");
}

#[test]
fn task_serialization_uses_id_and_label_fields() {
    let id = Uuid::parse_str("11111111-2222-4333-8444-555555555555").unwrap();
    let task = Task::with_id(id, "🐝 Optional Social (if energy)").unwrap();

    let json = serde_json::to_value(&task).unwrap();
    assert_eq!(json["id"], id.to_string());
    assert_eq!(json["label"], "🐝 Optional Social (if energy)");
}

#[test]
fn nil_ids_cannot_enter_through_board_documents() {
    let text = r#"{"categories":[
        {"quadrant":"do_now","title":"Now","tasks":[
            {"id":"00000000-0000-0000-0000-000000000000","label":"📊 Report"}
        ]},
        {"quadrant":"schedule","title":"Later"},
        {"quadrant":"delegate","title":"Hand off"},
        {"quadrant":"drop","title":"Skip"}
    ]}"#;

    let err = taskboard_core::board_from_json(text).unwrap_err();
    assert!(matches!(
        err,
        taskboard_core::BoardDataError::InvalidTask(TaskValidationError::NilId)
    ));
}
