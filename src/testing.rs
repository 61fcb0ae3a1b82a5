//! 单元测试共用的夹具

use crate::client::ApiClient;
use crate::request::MockHttpClient;
use crate::storage::MemoryTokenStore;
use portal_shared::{AttendanceStatus, ClassInfo, Notification, NotificationKind, Student};
use serde_json::{Value, json};

pub const ROOT: &str = "http://portal.test/api";

pub type TestClient = ApiClient<MockHttpClient, MemoryTokenStore>;

pub fn url(path: &str) -> String {
    format!("{}{}", ROOT, path)
}

pub fn client_with(tokens: MemoryTokenStore) -> TestClient {
    ApiClient::with_root(ROOT, MockHttpClient::new(), tokens)
}

pub fn student_json() -> Value {
    json!({
        "id": "s-1",
        "studentId": "2024-0001",
        "name": "Ana Cruz",
        "email": "a@b.com",
        "course": "BSIT",
        "year": 2,
        "section": "B"
    })
}

pub fn student() -> Student {
    serde_json::from_value(student_json()).unwrap()
}

pub fn class_json(id: &str, code: &str) -> Value {
    json!({
        "id": id,
        "name": format!("Class {}", id),
        "code": code,
        "subject": null,
        "schedule": "MWF 9:00",
        "description": null
    })
}

pub fn class(id: &str, code: &str) -> ClassInfo {
    serde_json::from_value(class_json(id, code)).unwrap()
}

pub fn record_json(id: &str, status: AttendanceStatus) -> Value {
    json!({
        "id": id,
        "date": "2024-03-01T08:00:00Z",
        "status": status.as_str(),
        "class_name": "Networks",
        "class_code": "NET101"
    })
}

pub fn notification(id: &str, kind: NotificationKind, read: bool) -> Notification {
    Notification {
        id: id.to_string(),
        kind,
        title: format!("Title {}", id),
        message: format!("Message {}", id),
        read,
        created_at: "2024-03-01T08:00:00Z".to_string(),
    }
}
