use thiserror::Error;

// =========================================================
// 面向用户的通用错误消息
// =========================================================

pub const MSG_NETWORK_ERROR: &str = "Network error";
pub const MSG_REQUEST_FAILED: &str = "Request failed";
pub const MSG_INVALID_RESPONSE: &str = "Invalid response from server";

// =========================================================
// 传输层错误
// =========================================================

/// 传输层错误：没有拿到任何 HTTP 响应
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// 请求构建失败（非法 URL、Header 等）
    #[error("request build failed: {0}")]
    RequestBuild(String),
    /// 网络不可达、连接被拒绝、CORS 等
    #[error("network error: {0}")]
    Network(String),
    /// 响应体读取失败
    #[error("body read failed: {0}")]
    Body(String),
}

// =========================================================
// API 错误
// =========================================================

/// API Client 边界上的统一失败结果
///
/// 三类错误（传输失败、非 2xx、响应体无法解析）在这里汇合，
/// UI 只需要 `user_message()` 这一个字符串。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("server responded {status}: {message}")]
    Server { status: u16, message: String },
    #[error("malformed response: {0}")]
    Parse(String),
}

impl ApiError {
    pub fn server(status: u16, message: impl Into<String>) -> Self {
        Self::Server {
            status,
            message: message.into(),
        }
    }

    /// 展示给用户的消息
    ///
    /// 服务端错误透传其 `error` 字段；传输和解析错误只给出通用文案，
    /// 细节留在 `Display` 中供日志使用。
    pub fn user_message(&self) -> &str {
        match self {
            ApiError::Network(_) => MSG_NETWORK_ERROR,
            ApiError::Server { message, .. } => message,
            ApiError::Parse(_) => MSG_INVALID_RESPONSE,
        }
    }
}

impl From<TransportError> for ApiError {
    fn from(e: TransportError) -> Self {
        ApiError::Network(e.to_string())
    }
}

pub type ApiResult<T> = std::result::Result<T, ApiError>;
