//! 页面外壳与通用小组件
//!
//! 受保护区的页面都包在 `Shell` 中：`Light` 皮肤是顶部标题加底部标签栏，
//! `Dark` 皮肤是固定左侧边栏。

use crate::auth::use_auth;
use crate::skin::use_skin;
use crate::web::router::{use_navigate, use_router};
use attendance_portal::ViewLifetime;
use attendance_portal::AppRoute;
use attendance_portal::route::NAVIGATION;
use leptos::prelude::*;
use portal_shared::chrono::{DateTime, Local, NaiveDate, Utc};

/// 页面级生命周期：组件卸载时作废所有在途请求的凭据
pub fn use_view_lifetime() -> StoredValue<ViewLifetime, LocalStorage> {
    let lifetime = StoredValue::new_local(ViewLifetime::new());
    on_cleanup(move || {
        lifetime.try_with_value(ViewLifetime::dismiss);
    });
    lifetime
}

pub fn now() -> DateTime<Utc> {
    Utc::now()
}

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// 受保护区外壳，标题取自当前页面的路由
#[component]
pub fn Shell(route: AppRoute, children: Children) -> impl IntoView {
    let skin = use_skin();
    let palette = move || skin.palette();

    view! {
        <div class=move || palette().page>
            {move || match skin.skin.get() {
                crate::skin::Skin::Light => view! { <BottomTabs /> }.into_any(),
                crate::skin::Skin::Dark => view! { <Sidebar /> }.into_any(),
            }}
            <main class=move || palette().main>
                <h1 class=move || palette().heading>{route.title()}</h1>
                {children()}
            </main>
        </div>
    }
}

/// 移动端底部标签栏
#[component]
fn BottomTabs() -> impl IntoView {
    let router = use_router();
    let navigate = use_navigate();

    view! {
        <nav class="btm-nav fixed bottom-0 inset-x-0 bg-white border-t border-gray-200 z-40">
            {NAVIGATION
                .into_iter()
                .map(|item| {
                    let is_active = move || item.is_active(router.current_route().get());
                    view! {
                        <button
                            class=move || if is_active() { "active text-primary" } else { "text-gray-400" }
                            on:click=move |_| navigate(item.route)
                        >
                            <span class="btm-nav-label text-xs">{item.label}</span>
                        </button>
                    }
                })
                .collect_view()}
        </nav>
    }
}

/// 桌面端侧边栏
#[component]
fn Sidebar() -> impl IntoView {
    let auth = use_auth();
    let skin = use_skin();
    let router = use_router();
    let navigate = use_navigate();
    let student = auth.student();

    view! {
        <aside class="fixed inset-y-0 left-0 w-64 bg-slate-900 border-r border-slate-800 flex flex-col p-4 z-40">
            <div class="px-2 py-4">
                <p class="text-lg font-semibold text-white">"Student Portal"</p>
                <p class="text-xs text-slate-400">
                    {move || student.get().map(|s| s.name).unwrap_or_default()}
                </p>
            </div>
            <ul class="menu flex-1 gap-1">
                {NAVIGATION
                    .into_iter()
                    .map(|item| {
                        let is_active = move || item.is_active(router.current_route().get());
                        view! {
                            <li>
                                <a
                                    class=move || if is_active() { "active" } else { "text-slate-300" }
                                    on:click=move |_| navigate(item.route)
                                >
                                    {item.label}
                                </a>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
            <button class="btn btn-ghost btn-sm text-slate-400" on:click=move |_| skin.toggle()>
                "Switch to light"
            </button>
            <button class="btn btn-outline btn-error btn-sm mt-2" on:click=move |_| auth.logout()>
                "Sign out"
            </button>
        </aside>
    }
}

/// 初始化期间的全屏占位
pub fn loading_screen() -> AnyView {
    view! {
        <div class="flex items-center justify-center min-h-screen">
            <span class="loading loading-spinner loading-lg text-primary"></span>
        </div>
    }
    .into_any()
}

/// 页面内的骨架占位
#[component]
pub fn Skeleton(#[prop(default = 3)] rows: usize) -> impl IntoView {
    let skin = use_skin();
    (0..rows)
        .map(|_| view! { <div class=move || skin.palette().skeleton></div> })
        .collect_view()
}

/// 空状态文案
#[component]
pub fn EmptyState(#[prop(into)] message: Signal<String>) -> impl IntoView {
    let skin = use_skin();
    view! {
        <div class="text-center py-12">
            <p class=move || skin.palette().muted>{move || message.get()}</p>
        </div>
    }
}

pub fn not_found() -> AnyView {
    let navigate = use_navigate();
    view! {
        <div class="flex items-center justify-center min-h-screen bg-base-200">
            <div class="text-center space-y-4">
                <h1 class="text-6xl font-bold text-error">"404"</h1>
                <p class="text-xl">"Page not found"</p>
                <button class="btn btn-primary" on:click=move |_| navigate(attendance_portal::AppRoute::Home)>
                    "Back to portal"
                </button>
            </div>
        </div>
    }
    .into_any()
}
