//! 路由定义模块 - 领域模型
//!
//! 纯业务逻辑层，不依赖 DOM 或 web_sys。
//! 定义应用的全部路由、所属分组以及守卫判定。

use crate::session::SessionState;
use std::fmt::Display;

/// 应用路由枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AppRoute {
    /// 入口：按认证状态分流
    #[default]
    Home,
    Login,
    Dashboard,
    Classes,
    Attendance,
    Notifications,
    Profile,
    /// 页面未找到
    NotFound,
}

/// 路由分组，决定使用哪种守卫
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteGroup {
    Entry,
    Public,
    Protected,
    Open,
}

/// 守卫判定结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    /// 会话仍在初始化，只渲染占位
    Loading,
    /// 以 replace 方式跳转，当前页面不进入历史记录
    Redirect(AppRoute),
    Render,
}

impl AppRoute {
    /// 将 URL path 解析为路由枚举，忽略末尾斜杠
    pub fn from_path(path: &str) -> Self {
        let trimmed = path.trim_end_matches('/');
        match trimmed {
            "" => Self::Home,
            "/login" => Self::Login,
            "/dashboard" => Self::Dashboard,
            "/classes" => Self::Classes,
            "/attendance" => Self::Attendance,
            "/notifications" => Self::Notifications,
            "/profile" => Self::Profile,
            _ => Self::NotFound,
        }
    }

    /// 获取路由对应的 URL path
    pub fn to_path(&self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Login => "/login",
            Self::Dashboard => "/dashboard",
            Self::Classes => "/classes",
            Self::Attendance => "/attendance",
            Self::Notifications => "/notifications",
            Self::Profile => "/profile",
            Self::NotFound => "/404",
        }
    }

    pub fn group(&self) -> RouteGroup {
        match self {
            Self::Home => RouteGroup::Entry,
            Self::Login => RouteGroup::Public,
            Self::Dashboard
            | Self::Classes
            | Self::Attendance
            | Self::Notifications
            | Self::Profile => RouteGroup::Protected,
            Self::NotFound => RouteGroup::Open,
        }
    }

    /// 页面标题
    pub fn title(&self) -> &'static str {
        match self {
            Self::Home => "Student Portal",
            Self::Login => "Sign In",
            Self::Dashboard => "Dashboard",
            Self::Classes => "My Classes",
            Self::Attendance => "Attendance",
            Self::Notifications => "Notifications",
            Self::Profile => "Profile",
            Self::NotFound => "Page Not Found",
        }
    }

    /// 认证失败时的重定向目标
    pub fn auth_failure_redirect() -> Self {
        Self::Login
    }

    /// 已认证用户离开公开页时的目标
    pub fn auth_success_redirect() -> Self {
        Self::Dashboard
    }
}

impl Display for AppRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_path())
    }
}

// =========================================================
// 守卫 (Guards)
// =========================================================

/// **核心守卫逻辑**
///
/// 公开区与受保护区结构对称：初始化期间一律 `Loading`，
/// 状态不匹配时重定向，否则渲染。
pub fn guard(route: AppRoute, state: &SessionState) -> GuardDecision {
    if route.group() == RouteGroup::Open {
        return GuardDecision::Render;
    }
    if state.is_loading() {
        return GuardDecision::Loading;
    }

    let authenticated = state.is_authenticated();
    match route.group() {
        RouteGroup::Entry if authenticated => {
            GuardDecision::Redirect(AppRoute::auth_success_redirect())
        }
        RouteGroup::Entry => GuardDecision::Redirect(AppRoute::auth_failure_redirect()),
        RouteGroup::Public if authenticated => {
            GuardDecision::Redirect(AppRoute::auth_success_redirect())
        }
        RouteGroup::Protected if !authenticated => {
            GuardDecision::Redirect(AppRoute::auth_failure_redirect())
        }
        _ => GuardDecision::Render,
    }
}

// =========================================================
// 导航菜单
// =========================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub route: AppRoute,
    pub label: &'static str,
}

impl NavItem {
    /// 精确匹配
    pub fn is_active(&self, current: AppRoute) -> bool {
        self.route == current
    }
}

/// 受保护区的导航项，按显示顺序排列
pub const NAVIGATION: [NavItem; 5] = [
    NavItem {
        route: AppRoute::Dashboard,
        label: "Dashboard",
    },
    NavItem {
        route: AppRoute::Classes,
        label: "Classes",
    },
    NavItem {
        route: AppRoute::Attendance,
        label: "Attendance",
    },
    NavItem {
        route: AppRoute::Notifications,
        label: "Notifications",
    },
    NavItem {
        route: AppRoute::Profile,
        label: "Profile",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::student;

    #[test]
    fn paths_round_trip_and_ignore_trailing_slash() {
        for item in NAVIGATION {
            assert_eq!(AppRoute::from_path(item.route.to_path()), item.route);
        }
        assert_eq!(AppRoute::from_path("/"), AppRoute::Home);
        assert_eq!(AppRoute::from_path(""), AppRoute::Home);
        assert_eq!(AppRoute::from_path("/classes/"), AppRoute::Classes);
        assert_eq!(AppRoute::from_path("/login"), AppRoute::Login);
        assert_eq!(AppRoute::from_path("/admin"), AppRoute::NotFound);
    }

    #[test]
    fn everything_but_not_found_waits_for_initialization() {
        let loading = SessionState::Initializing;
        for route in [AppRoute::Home, AppRoute::Login, AppRoute::Dashboard, AppRoute::Profile] {
            assert_eq!(guard(route, &loading), GuardDecision::Loading);
        }
        assert_eq!(guard(AppRoute::NotFound, &loading), GuardDecision::Render);
    }

    #[test]
    fn protected_area_redirects_to_login() {
        let anonymous = SessionState::Unauthenticated;
        assert_eq!(
            guard(AppRoute::Attendance, &anonymous),
            GuardDecision::Redirect(AppRoute::Login)
        );
        assert_eq!(guard(AppRoute::Login, &anonymous), GuardDecision::Render);
        assert_eq!(
            guard(AppRoute::Home, &anonymous),
            GuardDecision::Redirect(AppRoute::Login)
        );
    }

    #[test]
    fn public_area_redirects_to_dashboard() {
        let signed_in = SessionState::Authenticated(student());
        assert_eq!(
            guard(AppRoute::Login, &signed_in),
            GuardDecision::Redirect(AppRoute::Dashboard)
        );
        assert_eq!(guard(AppRoute::Notifications, &signed_in), GuardDecision::Render);
        assert_eq!(
            guard(AppRoute::Home, &signed_in),
            GuardDecision::Redirect(AppRoute::Dashboard)
        );
    }

    #[test]
    fn nav_active_is_exact() {
        let classes = NAVIGATION[1];
        assert!(classes.is_active(AppRoute::Classes));
        assert!(!classes.is_active(AppRoute::Dashboard));
    }

    #[test]
    fn shell_titles_for_protected_pages() {
        let titles: Vec<_> = NAVIGATION.iter().map(|item| item.route.title()).collect();
        assert_eq!(
            titles,
            vec!["Dashboard", "My Classes", "Attendance", "Notifications", "Profile"]
        );
    }
}
