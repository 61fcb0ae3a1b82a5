//! 路由服务模块 - 核心引擎
//!
//! 封装 web_sys 的 History API，所有对 window.history 的操作都集中在此。
//! 守卫判定来自核心库的 `guard`，这里只负责执行：
//! 路由或会话状态任一变化都会重新判定，重定向一律使用 replaceState。

use attendance_portal::{AppRoute, GuardDecision, SessionState, guard};
use leptos::prelude::*;
use wasm_bindgen::prelude::*;

/// 获取当前浏览器路径
fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

fn push_history_state(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.push_state_with_url(&JsValue::NULL, "", Some(path));
        }
    }
}

/// 重定向用：被守卫拦下的页面不留在历史记录里
fn replace_history_state(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(path));
        }
    }
}

/// 路由器服务
///
/// 通过注入的会话状态信号与认证系统解耦。
#[derive(Clone, Copy)]
pub struct RouterService {
    current_route: ReadSignal<AppRoute>,
    set_route: WriteSignal<AppRoute>,
    session: Signal<SessionState>,
}

impl RouterService {
    fn new(session: Signal<SessionState>) -> Self {
        let initial_route = AppRoute::from_path(&current_path());
        let (current_route, set_route) = signal(initial_route);

        Self {
            current_route,
            set_route,
            session,
        }
    }

    pub fn current_route(&self) -> ReadSignal<AppRoute> {
        self.current_route
    }

    /// 当前路由的守卫判定
    ///
    /// 用 Memo 包一层：档案刷新之类不改变判定的状态变化不会触发重新渲染。
    pub fn decision(&self) -> Memo<GuardDecision> {
        let current_route = self.current_route;
        let session = self.session;
        Memo::new(move |_| session.with(|state| guard(current_route.get(), state)))
    }

    /// 用户发起的导航，使用 pushState
    pub fn navigate(&self, route: AppRoute) {
        if route == self.current_route.get_untracked() {
            return;
        }
        push_history_state(route.to_path());
        self.set_route.set(route);
    }

    /// 浏览器后退/前进
    fn init_popstate_listener(&self) {
        let set_route = self.set_route;

        let closure = Closure::<dyn Fn()>::new(move || {
            set_route.set(AppRoute::from_path(&current_path()));
        });

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
        }

        // 泄漏闭包以保持监听器存活
        closure.forget();
    }

    /// 路由或会话变化时执行守卫重定向
    fn setup_guard_redirect(&self) {
        let decision = self.decision();
        let set_route = self.set_route;
        let current_route = self.current_route;

        Effect::new(move |_| {
            if let GuardDecision::Redirect(target) = decision.get() {
                log::info!(
                    "[router] {} -> {} (guard redirect)",
                    current_route.get_untracked(),
                    target
                );
                replace_history_state(target.to_path());
                set_route.set(target);
            }
        });
    }
}

fn provide_router(session: Signal<SessionState>) -> RouterService {
    let router = RouterService::new(session);

    router.init_popstate_listener();
    router.setup_guard_redirect();

    provide_context(router);
    router
}

/// 从 Context 获取路由服务
pub fn use_router() -> RouterService {
    use_context::<RouterService>()
        .expect("RouterService not found in context. Ensure Router is provided.")
}

/// 导航函数（返回一个可调用的闭包）
pub fn use_navigate() -> impl Fn(AppRoute) + Clone + Copy {
    let router = use_router();
    move |to: AppRoute| router.navigate(to)
}

// ============================================================================
// UI 组件
// ============================================================================

/// 路由器根组件，应在 App 根部使用
#[component]
pub fn Router(
    /// 会话状态信号
    session: Signal<SessionState>,
    children: Children,
) -> impl IntoView {
    provide_router(session);

    children()
}

/// 路由出口组件
///
/// 初始化期间渲染占位；重定向判定下什么都不渲染，等待 Effect 切换路由。
#[component]
pub fn RouterOutlet(
    /// 路由匹配函数：接收当前路由，返回对应视图
    matcher: fn(AppRoute) -> AnyView,
    /// 会话初始化期间的占位
    loading: fn() -> AnyView,
) -> impl IntoView {
    let router = use_router();
    let decision = router.decision();

    move || match decision.get() {
        GuardDecision::Loading => loading(),
        GuardDecision::Redirect(_) => ().into_any(),
        GuardDecision::Render => matcher(router.current_route().get()),
    }
}
