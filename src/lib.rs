//! 学生考勤门户客户端核心
//!
//! 与平台无关：HTTP 传输与 Token 存储都以 trait 注入，
//! 浏览器端（`frontend`）和原生测试共用同一套 API 客户端、会话与页面视图模型。

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod lifetime;
pub mod request;
pub mod route;
pub mod session;
pub mod storage;
pub mod views;

#[cfg(test)]
mod testing;

pub use client::ApiClient;
pub use config::PortalConfig;
pub use error::{ApiError, ApiResult, TransportError};
pub use lifetime::{Ticket, ViewLifetime};
pub use request::{HttpClient, HttpMethod, HttpRequest, HttpResponse};
pub use route::{AppRoute, GuardDecision, RouteGroup, guard};
pub use session::{LoginOutcome, Session, SessionState};
pub use storage::{MemoryTokenStore, TokenStore};

pub use portal_shared as shared;

use std::rc::Rc;

/// 按配置组装 API 客户端与会话
///
/// 会话尚未初始化，调用方在应用根部执行一次 `initialize()`。
pub fn build_session<C, S>(config: &PortalConfig, http: C, tokens: S) -> Rc<Session<C, S>>
where
    C: HttpClient,
    S: TokenStore,
{
    log::info!("[portal] api root: {}", config.api_root());
    let api = Rc::new(ApiClient::new(config, http, tokens));
    Rc::new(Session::new(api))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::MockHttpClient;

    #[tokio::test]
    async fn build_session_uses_configured_root() {
        let config = PortalConfig::new("http://portal.test");
        let session = build_session(&config, MockHttpClient::new(), MemoryTokenStore::new());

        assert_eq!(session.api().root(), "http://portal.test/api");
        assert!(session.is_loading());

        session.initialize().await;
        assert_eq!(session.state(), SessionState::Unauthenticated);
    }
}
