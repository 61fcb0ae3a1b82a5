//! 认证模块
//!
//! 把核心库的 `Session` 接入 Leptos：会话状态通过 `subscribe` 镜像到信号，
//! 路由服务和页面只读信号，写操作统一经由会话方法。

use crate::web::{BrowserTokenStore, FetchHttpClient};
use attendance_portal::{ApiClient, LoginOutcome, PortalConfig, Session, SessionState};
use leptos::prelude::*;
use leptos::task::spawn_local;
use portal_shared::Student;
use std::rc::Rc;

pub type PortalSession = Session<FetchHttpClient, BrowserTokenStore>;
pub type PortalApi = ApiClient<FetchHttpClient, BrowserTokenStore>;

/// 认证上下文
///
/// 会话本身不是 Send，用 `StoredValue::new_local` 存放，上下文仍可 Copy。
#[derive(Clone, Copy)]
pub struct AuthContext {
    /// 会话状态（只读）
    pub state: ReadSignal<SessionState>,
    session: StoredValue<Rc<PortalSession>, LocalStorage>,
}

impl AuthContext {
    /// 创建认证上下文并订阅会话状态
    pub fn new(config: &PortalConfig) -> Self {
        let session =
            attendance_portal::build_session(config, FetchHttpClient, BrowserTokenStore);

        let (state, set_state) = signal(session.state());
        session.subscribe(move |next| set_state.set(next.clone()));

        Self {
            state,
            session: StoredValue::new_local(session),
        }
    }

    pub fn session(&self) -> Rc<PortalSession> {
        self.session.get_value()
    }

    /// 页面视图共用的 API 客户端
    pub fn api(&self) -> Rc<PortalApi> {
        self.session.with_value(|s| s.api().clone())
    }

    /// 用于路由服务注入的状态信号
    pub fn state_signal(&self) -> Signal<SessionState> {
        self.state.into()
    }

    pub fn is_loading(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.with(SessionState::is_loading))
    }

    pub fn student(&self) -> Signal<Option<Student>> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.student().cloned()))
    }

    /// 在应用根部执行一次：校验已保存的 Token
    pub fn initialize(&self) {
        let session = self.session();
        spawn_local(async move {
            session.initialize().await;
        });
    }

    pub async fn login(&self, email: String, password: String) -> LoginOutcome {
        let session = self.session();
        session.login(&email, &password).await
    }

    /// 注销后由路由服务监听状态变化并重定向
    pub fn logout(&self) {
        self.session.with_value(|s| s.logout());
    }

    pub fn refresh_profile(&self) {
        let session = self.session();
        spawn_local(async move {
            session.refresh_profile().await;
        });
    }

    /// 卸载时丢弃观察者
    pub fn teardown(&self) {
        self.session.try_with_value(|s| s.teardown());
    }
}

/// 从 Context 获取认证上下文
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthContext should be provided")
}
