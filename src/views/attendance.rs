//! 考勤历史页
//!
//! 状态筛选只作用于已取回的数据，不会重新请求；翻页则每页请求一次。

use crate::client::ApiClient;
use crate::request::HttpClient;
use crate::storage::TokenStore;
use portal_shared::protocol::AttendanceHistory;
use portal_shared::{AttendanceRecord, AttendanceStats, AttendanceStatus};

/// 完整列表页每页条数
pub const FULL_HISTORY_LIMIT: u32 = 100;

// =========================================================
// 出勤率
// =========================================================

/// 出勤率（百分比，四舍五入）
///
/// 迟到不计入出勤。统计口径由服务端决定，这里原样使用。
pub fn attendance_rate(stats: &AttendanceStats) -> u32 {
    if stats.total == 0 {
        return 0;
    }
    (f64::from(stats.present) / f64::from(stats.total) * 100.0).round() as u32
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateBand {
    Good,
    Fair,
    Poor,
}

impl RateBand {
    pub fn of(rate: u32) -> Self {
        if rate >= 80 {
            Self::Good
        } else if rate >= 60 {
            Self::Fair
        } else {
            Self::Poor
        }
    }
}

// =========================================================
// 筛选
// =========================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AttendanceFilter {
    #[default]
    All,
    Present,
    Absent,
    Late,
}

impl AttendanceFilter {
    pub const TABS: [AttendanceFilter; 4] = [Self::All, Self::Present, Self::Absent, Self::Late];

    pub fn status(&self) -> Option<AttendanceStatus> {
        match self {
            Self::All => None,
            Self::Present => Some(AttendanceStatus::Present),
            Self::Absent => Some(AttendanceStatus::Absent),
            Self::Late => Some(AttendanceStatus::Late),
        }
    }

    pub fn label(&self) -> &'static str {
        self.status().map_or("All", |s| s.label())
    }

    pub fn matches(&self, record: &AttendanceRecord) -> bool {
        self.status().is_none_or(|s| s == record.status)
    }
}

// =========================================================
// 视图模型
// =========================================================

#[derive(Debug, Clone, PartialEq)]
pub struct AttendanceView {
    pub history: AttendanceHistory,
    pub filter: AttendanceFilter,
    pub page: u32,
    pub limit: u32,
}

impl Default for AttendanceView {
    fn default() -> Self {
        Self::new(FULL_HISTORY_LIMIT)
    }
}

impl AttendanceView {
    pub fn new(limit: u32) -> Self {
        Self {
            history: AttendanceHistory::default(),
            filter: AttendanceFilter::All,
            page: 1,
            limit,
        }
    }

    /// 请求一页数据；失败时记录日志并返回 `None`
    pub async fn fetch<C, S>(api: &ApiClient<C, S>, page: u32, limit: u32) -> Option<AttendanceHistory>
    where
        C: HttpClient,
        S: TokenStore,
    {
        api.attendance()
            .get_history(page, limit)
            .await
            .map_err(|e| log::error!("[views] failed to fetch attendance page {}: {}", page, e))
            .ok()
    }

    /// 应用一页结果，保留当前筛选
    ///
    /// 请求失败时保持已显示的页码和数据，分页按钮仍可用。
    pub fn apply(&mut self, page: u32, history: Option<AttendanceHistory>) {
        if let Some(history) = history {
            self.page = page.max(1);
            self.history = history;
        }
    }

    pub async fn load_page<C, S>(&mut self, api: &ApiClient<C, S>, page: u32)
    where
        C: HttpClient,
        S: TokenStore,
    {
        let history = Self::fetch(api, page, self.limit).await;
        self.apply(page, history);
    }

    pub fn set_filter(&mut self, filter: AttendanceFilter) {
        self.filter = filter;
    }

    /// 当前筛选下可见的记录
    pub fn visible(&self) -> Vec<&AttendanceRecord> {
        self.history
            .records
            .iter()
            .filter(|r| self.filter.matches(r))
            .collect()
    }

    /// 标签上的计数取自服务端统计，`All` 不显示计数
    pub fn tab_count(&self, filter: AttendanceFilter) -> Option<u32> {
        filter.status().map(|s| self.history.stats.count(s))
    }

    pub fn stats(&self) -> &AttendanceStats {
        &self.history.stats
    }

    pub fn rate(&self) -> u32 {
        attendance_rate(&self.history.stats)
    }

    pub fn has_previous(&self) -> bool {
        self.history.pagination.has_previous()
    }

    pub fn has_next(&self) -> bool {
        self.history.pagination.has_next()
    }

    pub fn empty_message(&self) -> String {
        match self.filter.status() {
            None => "No records found".to_string(),
            Some(s) => format!("No {} records found", s.as_str()),
        }
    }
}
