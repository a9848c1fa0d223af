use serde_json::json;
use takelys::format::display_date;
use takelys::pages::create::load;
use takelys::task::NewTask;

#[test]
fn test_load_returns_blank_task() {
    let page = load();
    assert_eq!(page.task, NewTask::default());
    assert_eq!(page.task.name, "");
    assert_eq!(page.task.completed, 0);
    assert_eq!(page.task.repeat_interval_number, 1);
    assert!(page.task.repeat_specific_days.is_empty());
    assert!(page.task.category_id.is_none());
}

#[test]
fn test_load_serializes_like_the_form_expects() {
    let value = serde_json::to_value(load()).unwrap();
    assert_eq!(
        value,
        json!({
            "task": {
                "name": "",
                "description": "",
                "due_date": null,
                "start_date": null,
                "completed": 0,
                "repeat_specific_days": [],
                "completed_at": null,
                "important": false,
                "urgent": false,
                "repeat_interval": "",
                "repeat_interval_number": 1,
                "archived": false
            }
        })
    );
}

#[test]
fn test_blank_task_has_no_date_label() {
    assert_eq!(display_date(&load().task.date_span()), "");
}

#[test]
fn test_task_date_span_labels_range() {
    let task = NewTask {
        start_date: Some("2024-03-01".to_string()),
        due_date: Some("2024-03-15".to_string()),
        ..NewTask::default()
    };
    assert_eq!(display_date(&task.date_span()), "1-15 Mrt 2024");
}

#[test]
fn test_task_deserializes_without_category() {
    let task: NewTask = serde_json::from_value(json!({
        "name": "Koop brood",
        "description": "",
        "due_date": "2024-03-15",
        "start_date": null,
        "completed": 0,
        "repeat_specific_days": [1, 3],
        "completed_at": null,
        "important": true,
        "urgent": false,
        "repeat_interval": "weekly",
        "repeat_interval_number": 1,
        "archived": false
    }))
    .unwrap();
    assert_eq!(task.category_id, None);
    assert_eq!(task.repeat_specific_days, vec![1, 3]);
}
