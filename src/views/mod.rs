//! 页面视图模型
//!
//! 每个页面只持有本地的临时状态，通过领域 API 获取数据。
//! 请求失败时退化为空状态并记录 `log::error!`，不向上传播。
//! 两套皮肤共用这里的取数逻辑，只负责渲染。

pub mod attendance;
pub mod classes;
pub mod dashboard;
pub mod notifications;
pub mod profile;

use crate::error::ApiResult;

/// 页面数据的加载状态
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LoadState<T> {
    #[default]
    Loading,
    Ready(T),
    /// 携带面向用户的错误消息
    Failed(String),
}

impl<T> LoadState<T> {
    /// 把请求结果转换为加载状态，失败时记录日志
    pub fn from_result(context: &str, result: ApiResult<T>) -> Self {
        match result {
            Ok(value) => Self::Ready(value),
            Err(e) => {
                log::error!("[views] failed to fetch {}: {}", context, e);
                Self::Failed(e.user_message().to_string())
            }
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            Self::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }
}

impl<T: Default + Clone> LoadState<T> {
    /// 渲染用的数据：未就绪或失败时为空
    pub fn or_empty(&self) -> T {
        self.ready().cloned().unwrap_or_default()
    }
}

/// 请求失败时记录日志并退化为默认值
pub(crate) fn or_default<T: Default>(context: &str, result: ApiResult<T>) -> T {
    result.unwrap_or_else(|e| {
        log::error!("[views] failed to fetch {}: {}", context, e);
        T::default()
    })
}
