//! 认证会话模块
//!
//! 显式构造、由外部注入的会话管理器。
//! 持有当前学生档案，对外暴露 登录 / 注销 / 刷新 三个操作，
//! 状态变化通过 `subscribe` 通知给表现层（例如 Leptos 信号）。

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::request::HttpClient;
use crate::storage::TokenStore;
use portal_shared::Student;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// 服务端没有给出原因时的登录失败文案
pub const MSG_LOGIN_FAILED: &str = "Login failed";

// =========================================================
// 状态定义
// =========================================================

/// 会话状态机
///
/// `Initializing` 是独立的第三态：守卫在它结束前既不渲染公开页也不渲染受保护页。
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    Initializing,
    Authenticated(Student),
    Unauthenticated,
}

impl SessionState {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Initializing)
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }

    pub fn student(&self) -> Option<&Student> {
        match self {
            Self::Authenticated(student) => Some(student),
            _ => None,
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Self::Initializing => "initializing",
            Self::Authenticated(_) => "authenticated",
            Self::Unauthenticated => "unauthenticated",
        }
    }
}

/// 登录结果，永远不会以错误形式抛给调用方
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    Success,
    Failure { error: String },
}

impl LoginOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Success => None,
            Self::Failure { error } => Some(error),
        }
    }
}

type Observer = Rc<dyn Fn(&SessionState)>;

// =========================================================
// 会话管理器
// =========================================================

pub struct Session<C, S> {
    api: Rc<ApiClient<C, S>>,
    state: RefCell<SessionState>,
    observers: RefCell<Vec<Observer>>,
    initialized: Cell<bool>,
}

impl<C, S> Session<C, S>
where
    C: HttpClient,
    S: TokenStore,
{
    pub fn new(api: Rc<ApiClient<C, S>>) -> Self {
        Self {
            api,
            state: RefCell::new(SessionState::Initializing),
            observers: RefCell::new(Vec::new()),
            initialized: Cell::new(false),
        }
    }

    /// 页面视图共用的 API 客户端
    pub fn api(&self) -> &Rc<ApiClient<C, S>> {
        &self.api
    }

    /// 当前状态的快照
    pub fn state(&self) -> SessionState {
        self.state.borrow().clone()
    }

    pub fn is_loading(&self) -> bool {
        self.state.borrow().is_loading()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.borrow().is_authenticated()
    }

    pub fn student(&self) -> Option<Student> {
        self.state.borrow().student().cloned()
    }

    /// 注册状态观察者；每次状态迁移之后调用
    pub fn subscribe(&self, observer: impl Fn(&SessionState) + 'static) {
        self.observers.borrow_mut().push(Rc::new(observer));
    }

    /// 卸载：丢弃全部观察者
    pub fn teardown(&self) {
        self.observers.borrow_mut().clear();
    }

    fn transition(&self, next: SessionState) {
        let previous = self.state.replace(next.clone());
        log::info!("[session] {} -> {}", previous.name(), next.name());

        // 先取快照，观察者内部可以再次读取会话
        let observers: Vec<Observer> = self.observers.borrow().clone();
        for observer in observers {
            observer(&next);
        }
    }

    /// 校验已保存的 Token
    ///
    /// 只在第一次调用时生效。没有 Token 直接进入未认证；
    /// Token 校验失败时清除 Token，不向上报告错误。
    pub async fn initialize(&self) {
        if self.initialized.replace(true) {
            return;
        }

        if self.api.token().is_none() {
            self.transition(SessionState::Unauthenticated);
            return;
        }

        match self.api.auth().get_profile().await {
            Ok(student) => self.transition(SessionState::Authenticated(student)),
            Err(e) => {
                log::warn!("[session] stored token rejected: {}", e);
                self.api.remove_token();
                self.transition(SessionState::Unauthenticated);
            }
        }
    }

    pub async fn login(&self, email: &str, password: &str) -> LoginOutcome {
        match self.api.auth().login(email, password).await {
            Ok(resp) => {
                self.transition(SessionState::Authenticated(resp.student));
                LoginOutcome::Success
            }
            Err(e) => {
                log::warn!("[session] login failed: {}", e);
                let error = match &e {
                    ApiError::Parse(_) => MSG_LOGIN_FAILED.to_string(),
                    other => other.user_message().to_string(),
                };
                LoginOutcome::Failure { error }
            }
        }
    }

    /// 同步注销，不等待任何网络请求
    pub fn logout(&self) {
        self.api.auth().logout();
        self.transition(SessionState::Unauthenticated);
    }

    /// 重新获取档案
    ///
    /// 仅在已认证时生效；失败时保持现状，不会强制注销。
    pub async fn refresh_profile(&self) {
        if !self.is_authenticated() {
            return;
        }

        match self.api.auth().get_profile().await {
            // 等待期间可能已经注销
            Ok(student) if self.is_authenticated() => {
                self.transition(SessionState::Authenticated(student))
            }
            Ok(_) => {}
            Err(e) => log::warn!("[session] profile refresh failed: {}", e),
        }
    }
}
