use crate::{
    AttendanceRecord, AttendanceStats, ClassInfo, Notification, Pagination, Student,
};
use serde::{Deserialize, Serialize, de::DeserializeOwned};

/// HTTP Methods for API Requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }

    /// GET/DELETE 不携带请求体
    pub fn has_body(&self) -> bool {
        matches!(self, HttpMethod::Post | HttpMethod::Put)
    }
}

/// A trait that defines the request-response relationship and metadata for an API endpoint.
pub trait ApiRequest: Serialize {
    /// The response type returned by this request.
    type Response: DeserializeOwned;
    /// The HTTP method.
    const METHOD: HttpMethod;

    /// The URL path relative to the API root, including any query string.
    fn path(&self) -> String;

    /// JSON body sent for POST/PUT. Defaults to the serialized request itself.
    fn body(&self) -> Option<serde_json::Value> {
        if Self::METHOD.has_body() {
            serde_json::to_value(self).ok()
        } else {
            None
        }
    }
}

// =========================================================
// Auth
// =========================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub success: bool,
    pub token: String,
    pub student: Student,
}

impl ApiRequest for LoginRequest {
    type Response = LoginResponse;
    const METHOD: HttpMethod = HttpMethod::Post;

    fn path(&self) -> String {
        "/student/auth/login".to_string()
    }
}

/// Fetch the profile of the student owning the bearer token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileRequest;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileResponse {
    #[serde(default)]
    pub success: bool,
    pub student: Student,
}

impl ApiRequest for ProfileRequest {
    type Response = ProfileResponse;
    const METHOD: HttpMethod = HttpMethod::Get;

    fn path(&self) -> String {
        "/student/auth/me".to_string()
    }
}

// =========================================================
// Classes
// =========================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListClassesRequest;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClassesResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub classes: Vec<ClassInfo>,
}

impl ApiRequest for ListClassesRequest {
    type Response = ClassesResponse;
    const METHOD: HttpMethod = HttpMethod::Get;

    fn path(&self) -> String {
        "/student/classes".to_string()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JoinClassRequest {
    pub code: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JoinClassResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub class: Option<ClassInfo>,
    #[serde(default)]
    pub error: Option<String>,
}

impl ApiRequest for JoinClassRequest {
    type Response = JoinClassResponse;
    const METHOD: HttpMethod = HttpMethod::Post;

    fn path(&self) -> String {
        "/student/classes/join".to_string()
    }
}

// =========================================================
// Attendance
// =========================================================

pub const DEFAULT_HISTORY_PAGE: u32 = 1;
pub const DEFAULT_HISTORY_LIMIT: u32 = 20;

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AttendanceHistoryRequest {
    pub page: u32,
    pub limit: u32,
}

impl Default for AttendanceHistoryRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_HISTORY_PAGE,
            limit: DEFAULT_HISTORY_LIMIT,
        }
    }
}

/// 一页考勤记录及其分页与统计信息
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AttendanceHistory {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub records: Vec<AttendanceRecord>,
    #[serde(default)]
    pub pagination: Pagination,
    #[serde(default)]
    pub stats: AttendanceStats,
}

impl ApiRequest for AttendanceHistoryRequest {
    type Response = AttendanceHistory;
    const METHOD: HttpMethod = HttpMethod::Get;

    fn path(&self) -> String {
        format!("/student/attendance?page={}&limit={}", self.page, self.limit)
    }
}

// =========================================================
// Notifications
// =========================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListNotificationsRequest;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NotificationsResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub notifications: Vec<Notification>,
}

impl ApiRequest for ListNotificationsRequest {
    type Response = NotificationsResponse;
    const METHOD: HttpMethod = HttpMethod::Get;

    fn path(&self) -> String {
        "/student/notifications".to_string()
    }
}

/// Mark a single notification as read. There is no bulk variant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarkReadRequest {
    pub id: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MarkReadResponse {
    #[serde(default)]
    pub success: bool,
}

impl ApiRequest for MarkReadRequest {
    type Response = MarkReadResponse;
    const METHOD: HttpMethod = HttpMethod::Put;

    fn path(&self) -> String {
        format!("/student/notifications/{}/read", self.id)
    }

    // id 已经在路径里，请求体固定为空对象
    fn body(&self) -> Option<serde_json::Value> {
        Some(serde_json::json!({}))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn history_path_carries_page_and_limit() {
        let req = AttendanceHistoryRequest { page: 3, limit: 100 };
        assert_eq!(req.path(), "/student/attendance?page=3&limit=100");
        assert!(req.body().is_none());
    }

    #[test]
    fn mark_read_sends_empty_object() {
        let req = MarkReadRequest { id: "n42".into() };
        assert_eq!(req.path(), "/student/notifications/n42/read");
        assert_eq!(req.body(), Some(serde_json::json!({})));
    }

    #[test]
    fn join_request_body_is_the_code() {
        let req = JoinClassRequest {
            code: "ABC123".into(),
        };
        assert_eq!(req.body(), Some(serde_json::json!({ "code": "ABC123" })));
    }

    #[test]
    fn history_response_defaults_missing_sections() {
        let history: AttendanceHistory =
            serde_json::from_value(serde_json::json!({ "success": true })).unwrap();
        assert!(history.records.is_empty());
        assert_eq!(history.stats, AttendanceStats::default());
        assert_eq!(history.pagination.page, 1);
    }
}
