//! 首页概览：出勤率、最近考勤、课程预览

use super::or_default;
use super::attendance::{RateBand, attendance_rate};
use crate::client::ApiClient;
use crate::request::HttpClient;
use crate::storage::TokenStore;
use portal_shared::{AttendanceRecord, AttendanceStats, ClassInfo};

/// 最近考勤条数
pub const RECENT_LIMIT: u32 = 5;
/// 课程预览条数
pub const PREVIEW_CLASSES: usize = 3;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardData {
    pub classes: Vec<ClassInfo>,
    pub recent: Vec<AttendanceRecord>,
    pub stats: AttendanceStats,
}

impl DashboardData {
    /// 并发获取课程与最近考勤
    ///
    /// 两个请求相互独立，一个失败不影响另一个的数据显示。
    pub async fn load<C, S>(api: &ApiClient<C, S>) -> Self
    where
        C: HttpClient,
        S: TokenStore,
    {
        let classes_api = api.classes();
        let attendance_api = api.attendance();
        let (classes, history) = futures::join!(
            classes_api.list(),
            attendance_api.get_history(1, RECENT_LIMIT)
        );

        let history = or_default("recent attendance", history);
        Self {
            classes: or_default("classes", classes),
            recent: history.records,
            stats: history.stats,
        }
    }

    pub fn attendance_rate(&self) -> u32 {
        attendance_rate(&self.stats)
    }

    pub fn rate_band(&self) -> RateBand {
        RateBand::of(self.attendance_rate())
    }

    pub fn preview_classes(&self) -> &[ClassInfo] {
        &self.classes[..self.classes.len().min(PREVIEW_CLASSES)]
    }

    pub fn recent(&self) -> &[AttendanceRecord] {
        &self.recent
    }
}

/// 按小时给出问候语
pub fn greeting(hour: u32) -> &'static str {
    match hour {
        0..=11 => "Good morning",
        12..=16 => "Good afternoon",
        _ => "Good evening",
    }
}

/// 名字的第一个单词
pub fn first_name(name: &str) -> &str {
    name.split_whitespace().next().unwrap_or(name)
}
