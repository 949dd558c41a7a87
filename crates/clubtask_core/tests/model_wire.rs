use chrono::{NaiveDate, TimeZone, Utc};
use clubtask_core::{Member, Priority, Task, TaskStatus};

#[test]
fn task_serializes_with_browser_field_names() {
    let task = Task {
        id: 1_735_689_600_000,
        task_name: "Fix bug".to_string(),
        description: "Login crash".to_string(),
        assigned_to: vec!["Tech".to_string()],
        priority: Priority::High,
        deadline: NaiveDate::from_ymd_opt(2099, 1, 1),
        status: None,
        created_at: Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap(),
    };

    let json = serde_json::to_value(&task).unwrap();
    assert_eq!(json["taskName"], "Fix bug");
    assert_eq!(json["assignedTo"][0], "Tech");
    assert_eq!(json["priority"], "High");
    assert_eq!(json["deadline"], "2099-01-01");
    assert!(json.get("status").is_none());
}

#[test]
fn legacy_task_without_priority_or_status_defaults() {
    let value = serde_json::json!({
        "id": 42,
        "taskName": "Old task",
        "assignedTo": ["Priya Singh"],
        "createdAt": "2024-12-01T10:00:00Z",
        "status": "Completed"
    });

    let task: Task = serde_json::from_value(value).unwrap();
    assert_eq!(task.priority, Priority::Medium);
    assert_eq!(task.deadline, None);
    assert_eq!(task.description, "");
    assert_eq!(task.status, Some(TaskStatus::Completed));
    assert!(task.is_completed());
}

#[test]
fn member_reads_stored_camel_case_record() {
    let value = serde_json::json!({
        "id": "1736000000000",
        "name": "Meera Iyer",
        "rollNumber": "22CS045",
        "section": "CSE2",
        "semester": 4,
        "team": "Media",
        "bio": "",
        "profileImage": "data:image/png;base64,AAAA",
        "joinedDate": "2025-01-04",
        "email": "22cs045@example.com"
    });

    let member: Member = serde_json::from_value(value).unwrap();
    assert_eq!(member.roll_number, "22CS045");
    assert_eq!(member.joined_date, NaiveDate::from_ymd_opt(2025, 1, 4).unwrap());
    assert!(member.profile_image.starts_with("data:"));
}
