//! 课程列表与加入课程
//!
//! 加课码只在客户端做非空校验，提交前统一转为大写。

use super::LoadState;
use crate::api::MSG_JOIN_FAILED;
use crate::client::ApiClient;
use crate::error::ApiError;
use crate::request::HttpClient;
use crate::storage::TokenStore;
use portal_shared::ClassInfo;
use std::time::Duration;

/// 加课码最大长度
pub const MAX_JOIN_CODE_LEN: usize = 10;
pub const MSG_JOIN_SUCCESS: &str = "Successfully joined the class!";
/// 成功提示停留时间，之后关闭输入面板
pub const JOIN_SUCCESS_DISMISS: Duration = Duration::from_millis(1500);

/// 去掉首尾空白、转为大写并截断到最大长度
pub fn normalize_join_code(input: &str) -> String {
    input
        .trim()
        .to_uppercase()
        .chars()
        .take(MAX_JOIN_CODE_LEN)
        .collect()
}

// =========================================================
// 加课表单
// =========================================================

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JoinClassForm {
    pub open: bool,
    pub code: String,
    pub submitting: bool,
    pub error: Option<String>,
    pub success: Option<String>,
}

impl JoinClassForm {
    pub fn show(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        *self = Self::default();
    }

    /// 输入框内容随输入即时规范化
    pub fn set_code(&mut self, input: &str) {
        self.code = normalize_join_code(input);
    }

    pub fn can_submit(&self) -> bool {
        !self.submitting && !self.code.is_empty()
    }

    /// 开始提交，返回要发送的加课码；不满足提交条件时返回 None
    pub fn begin(&mut self) -> Option<String> {
        if !self.can_submit() {
            return None;
        }
        self.submitting = true;
        self.error = None;
        self.success = None;
        Some(self.code.clone())
    }

    pub fn finish(&mut self, outcome: &JoinOutcome) {
        self.submitting = false;
        match outcome {
            JoinOutcome::Joined { message, .. } => {
                self.success = Some(message.clone());
                self.code.clear();
            }
            JoinOutcome::Rejected { error } => self.error = Some(error.clone()),
        }
    }

    /// 成功提示到期后调用
    pub fn dismiss_success(&mut self) {
        if self.success.is_some() {
            self.close();
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum JoinOutcome {
    /// `classes` 是加入后重新获取的课程列表
    Joined {
        message: String,
        classes: LoadState<Vec<ClassInfo>>,
    },
    Rejected {
        error: String,
    },
}

// =========================================================
// 视图模型
// =========================================================

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClassesView {
    pub classes: LoadState<Vec<ClassInfo>>,
    pub join_form: JoinClassForm,
}

impl ClassesView {
    pub async fn fetch<C, S>(api: &ApiClient<C, S>) -> LoadState<Vec<ClassInfo>>
    where
        C: HttpClient,
        S: TokenStore,
    {
        LoadState::from_result("classes", api.classes().list().await)
    }

    pub async fn load<C, S>(&mut self, api: &ApiClient<C, S>)
    where
        C: HttpClient,
        S: TokenStore,
    {
        self.classes = Self::fetch(api).await;
    }

    /// 提交加课码
    ///
    /// 输入为空时不发请求，返回 None。成功后重新获取一次课程列表。
    pub async fn join<C, S>(api: &ApiClient<C, S>, input: &str) -> Option<JoinOutcome>
    where
        C: HttpClient,
        S: TokenStore,
    {
        let code = normalize_join_code(input);
        if code.is_empty() {
            return None;
        }

        let outcome = match api.classes().join(&code).await {
            Ok(_) => JoinOutcome::Joined {
                message: MSG_JOIN_SUCCESS.to_string(),
                classes: Self::fetch(api).await,
            },
            Err(e) => {
                log::warn!("[views] join {} rejected: {}", code, e);
                let error = match &e {
                    ApiError::Parse(_) => MSG_JOIN_FAILED.to_string(),
                    other => other.user_message().to_string(),
                };
                JoinOutcome::Rejected { error }
            }
        };
        Some(outcome)
    }

    pub fn apply_join(&mut self, outcome: JoinOutcome) {
        self.join_form.finish(&outcome);
        if let JoinOutcome::Joined { classes, .. } = outcome {
            self.classes = classes;
        }
    }

    pub fn classes(&self) -> Vec<ClassInfo> {
        self.classes.or_empty()
    }
}
