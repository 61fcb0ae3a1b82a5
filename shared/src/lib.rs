use serde::{Deserialize, Serialize};

pub mod date;
pub mod protocol;

pub use chrono;

// =========================================================
// 常量定义 (Constants)
// =========================================================

/// 浏览器 LocalStorage 中保存 Bearer Token 的键名
pub const TOKEN_STORAGE_KEY: &str = "student_token";
/// 所有接口的统一前缀
pub const API_PREFIX: &str = "/api";
pub const HEADER_AUTHORIZATION: &str = "Authorization";
pub const HEADER_CONTENT_TYPE: &str = "Content-Type";
pub const CONTENT_TYPE_JSON: &str = "application/json";

// =========================================================
// 领域模型 (Domain Models)
// =========================================================

/// 学生档案
///
/// 客户端只读，刷新时整体替换。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    #[serde(alias = "_id")]
    pub id: String,
    pub student_id: String,
    pub name: String,
    pub email: String,
    pub course: String,
    pub year: u32,
    pub section: String,
}

/// 考勤状态
///
/// 封闭枚举：服务端返回未知取值时整条响应解析失败，而不是落入默认样式。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttendanceStatus {
    Present,
    Absent,
    Late,
}

impl AttendanceStatus {
    pub const ALL: [AttendanceStatus; 3] = [Self::Present, Self::Absent, Self::Late];

    pub fn as_str(&self) -> &'static str {
        match self {
            AttendanceStatus::Present => "present",
            AttendanceStatus::Absent => "absent",
            AttendanceStatus::Late => "late",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AttendanceStatus::Present => "Present",
            AttendanceStatus::Absent => "Absent",
            AttendanceStatus::Late => "Late",
        }
    }
}

/// 单条考勤记录，服务端为唯一真相来源
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    #[serde(alias = "_id")]
    pub id: String,
    pub date: String,
    pub status: AttendanceStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remarks: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_code: Option<String>,
}

impl AttendanceRecord {
    /// 记录所属课程的展示名
    pub fn class_label(&self) -> &str {
        self.class_name.as_deref().unwrap_or("Class Session")
    }
}

/// 服务端聚合的考勤统计，客户端原样信任
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceStats {
    #[serde(default)]
    pub present: u32,
    #[serde(default)]
    pub absent: u32,
    #[serde(default)]
    pub late: u32,
    #[serde(default)]
    pub total: u32,
}

impl AttendanceStats {
    pub fn count(&self, status: AttendanceStatus) -> u32 {
        match status {
            AttendanceStatus::Present => self.present,
            AttendanceStatus::Absent => self.absent,
            AttendanceStatus::Late => self.late,
        }
    }
}

/// 分页元数据
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub page: u32,
    pub limit: u32,
    #[serde(default)]
    pub total: u32,
    #[serde(default)]
    pub pages: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: 1,
            limit: 20,
            total: 0,
            pages: 0,
        }
    }
}

impl Pagination {
    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.pages
    }
}

/// 已加入的课程
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassInfo {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    /// 加入码，服务端唯一，客户端提交前统一转大写
    pub code: String,
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(default)]
    pub schedule: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, alias = "teacher_name")]
    pub teacher: Option<String>,
    #[serde(default, alias = "enrolledAt")]
    pub enrolled_at: Option<String>,
}

impl ClassInfo {
    /// 卡片副标题：优先学科，其次课表，最后回退到加入码
    pub fn subtitle(&self) -> String {
        self.subject
            .clone()
            .or_else(|| self.schedule.clone())
            .unwrap_or_else(|| format!("Code: {}", self.code))
    }
}

/// 通知类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    Absence,
    Late,
    General,
}

/// 通知
///
/// 客户端只能修改 `read` 字段（通过显式的标记已读操作）。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    #[serde(default)]
    pub read: bool,
    pub created_at: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn student_decodes_camel_case_and_mongo_id() {
        let student: Student = serde_json::from_value(json!({
            "_id": "s1",
            "studentId": "2024-0001",
            "name": "Ana Cruz",
            "email": "ana@school.edu",
            "course": "BSIT",
            "year": 2,
            "section": "B"
        }))
        .unwrap();
        assert_eq!(student.id, "s1");
        assert_eq!(student.student_id, "2024-0001");
        assert_eq!(student.year, 2);
    }

    #[test]
    fn unknown_attendance_status_is_rejected() {
        let result: Result<AttendanceRecord, _> = serde_json::from_value(json!({
            "id": "r1",
            "date": "2024-03-01",
            "status": "excused"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn notification_type_field_maps_to_kind() {
        let n: Notification = serde_json::from_value(json!({
            "_id": "n1",
            "type": "absence",
            "title": "Absent",
            "message": "You were marked absent",
            "createdAt": "2024-03-01T08:00:00Z"
        }))
        .unwrap();
        assert_eq!(n.kind, NotificationKind::Absence);
        assert!(!n.read);
    }

    #[test]
    fn class_subtitle_falls_back_to_code() {
        let class = ClassInfo {
            id: "c1".into(),
            name: "Networks".into(),
            code: "NET101".into(),
            subject: None,
            schedule: Some("MWF 9:00".into()),
            description: None,
            teacher: None,
            enrolled_at: None,
        };
        assert_eq!(class.subtitle(), "MWF 9:00");

        let bare = ClassInfo {
            schedule: None,
            ..class
        };
        assert_eq!(bare.subtitle(), "Code: NET101");
    }

    #[test]
    fn pagination_bounds() {
        let p = Pagination {
            page: 1,
            limit: 20,
            total: 45,
            pages: 3,
        };
        assert!(!p.has_previous());
        assert!(p.has_next());

        let last = Pagination { page: 3, ..p };
        assert!(last.has_previous());
        assert!(!last.has_next());
    }
}
