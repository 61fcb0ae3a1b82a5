//! 学生考勤门户前端
//!
//! 采用 Context-Driven 的架构：
//! - `auth`: 会话接入（核心库 `Session` 镜像为信号）
//! - `skin`: 两套界面皮肤
//! - `web::router`: 路由服务（执行核心库的守卫判定）
//! - `components`: 页面与外壳
//!
//! 取数逻辑全部在核心库的视图模型中，这里只负责渲染。

mod auth;
mod components {
    pub mod attendance;
    pub mod classes;
    pub mod dashboard;
    pub mod layout;
    pub mod login;
    pub mod notifications;
    pub mod profile;
}
mod skin;

use crate::auth::AuthContext;
use crate::components::attendance::AttendancePage;
use crate::components::classes::ClassesPage;
use crate::components::dashboard::DashboardPage;
use crate::components::layout::{loading_screen, not_found};
use crate::components::login::LoginPage;
use crate::components::notifications::NotificationsPage;
use crate::components::profile::ProfilePage;
use crate::skin::SkinContext;

use attendance_portal::{AppRoute, PortalConfig};
use leptos::prelude::*;

// 原生 Web API 封装模块
// 直接使用 web_sys，不引入 gloo-* 系列 crate。
pub(crate) mod web {
    mod http;
    pub mod router;
    mod storage;

    pub use http::FetchHttpClient;
    pub use storage::{BrowserTokenStore, LocalStorage};
}

use web::router::{Router, RouterOutlet};

/// 路由匹配函数
///
/// 只在守卫判定为渲染时调用。
fn route_matcher(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Login => view! { <LoginPage /> }.into_any(),
        AppRoute::Dashboard => view! { <DashboardPage /> }.into_any(),
        AppRoute::Classes => view! { <ClassesPage /> }.into_any(),
        AppRoute::Attendance => view! { <AttendancePage /> }.into_any(),
        AppRoute::Notifications => view! { <NotificationsPage /> }.into_any(),
        AppRoute::Profile => view! { <ProfilePage /> }.into_any(),
        // 入口页总是被守卫重定向
        AppRoute::Home => loading_screen(),
        AppRoute::NotFound => not_found(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    // 1. 创建认证上下文
    let config = PortalConfig::from_env();
    let auth_ctx = AuthContext::new(&config);
    provide_context(auth_ctx);
    provide_context(SkinContext::new());

    // 2. 校验已保存的 Token（只执行一次）
    auth_ctx.initialize();
    on_cleanup(move || auth_ctx.teardown());

    // 3. 会话状态信号注入路由服务
    let session = auth_ctx.state_signal();

    view! {
        <Router session=session>
            <RouterOutlet matcher=route_matcher loading=loading_screen />
        </Router>
    }
}
