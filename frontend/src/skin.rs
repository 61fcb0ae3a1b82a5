//! 界面皮肤
//!
//! 两套皮肤共享同一批页面与视图模型，只替换调色板和导航布局：
//! - `Light`：移动优先，底部标签栏
//! - `Dark`：桌面端，左侧边栏
//!
//! 视口宽度达到桌面断点时默认使用 `Dark`，用户手动切换后以本地存储为准。

use crate::web::LocalStorage;
use leptos::prelude::*;
use portal_shared::{AttendanceStatus, NotificationKind};

const SKIN_OVERRIDE_KEY: &str = "portal_skin";
const DESKTOP_QUERY: &str = "(min-width: 1024px)";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Skin {
    Light,
    Dark,
}

/// 一套皮肤的样式类
pub struct Palette {
    pub page: &'static str,
    pub main: &'static str,
    pub card: &'static str,
    pub hero: &'static str,
    pub heading: &'static str,
    pub muted: &'static str,
    pub tab_active: &'static str,
    pub tab_idle: &'static str,
    pub input: &'static str,
    pub skeleton: &'static str,
}

const LIGHT: Palette = Palette {
    page: "min-h-screen bg-gray-50 text-gray-900",
    main: "px-5 pt-6 pb-24 space-y-6",
    card: "bg-white rounded-2xl shadow-sm p-4",
    hero: "relative overflow-hidden rounded-3xl bg-gradient-to-br from-violet-600 to-indigo-700 p-6 text-white",
    heading: "text-2xl font-bold text-gray-900",
    muted: "text-sm text-gray-500",
    tab_active: "btn btn-sm btn-primary rounded-full",
    tab_idle: "btn btn-sm btn-ghost rounded-full",
    input: "input input-bordered w-full bg-white",
    skeleton: "skeleton h-24 w-full rounded-2xl",
};

const DARK: Palette = Palette {
    page: "min-h-screen bg-slate-950 text-slate-100",
    main: "lg:pl-64 p-8 space-y-8 max-w-6xl",
    card: "bg-slate-900 border border-slate-800 rounded-xl p-6",
    hero: "relative overflow-hidden rounded-2xl bg-gradient-to-br from-indigo-600 to-violet-700 p-8 text-white",
    heading: "text-3xl font-semibold text-white",
    muted: "text-sm text-slate-400",
    tab_active: "btn btn-sm btn-primary",
    tab_idle: "btn btn-sm btn-ghost text-slate-300",
    input: "input input-bordered w-full bg-slate-800 border-slate-700",
    skeleton: "skeleton h-28 w-full rounded-xl bg-slate-800",
};

impl Skin {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    /// 读取用户选择，没有时按视口宽度判断
    pub fn detect() -> Self {
        if let Some(skin) = LocalStorage::get(SKIN_OVERRIDE_KEY).as_deref().and_then(Self::parse) {
            return skin;
        }

        let desktop = web_sys::window()
            .and_then(|w| w.match_media(DESKTOP_QUERY).ok().flatten())
            .is_some_and(|mq| mq.matches());
        if desktop { Self::Dark } else { Self::Light }
    }

    pub fn palette(&self) -> &'static Palette {
        match self {
            Self::Light => &LIGHT,
            Self::Dark => &DARK,
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// 同步到 `<html data-theme>`，daisyUI 据此切换主题
    fn apply(&self) {
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        {
            let _ = el.set_attribute("data-theme", self.as_str());
        }
    }
}

// =========================================================
// 枚举到样式：穷尽匹配，不存在默认分支
// =========================================================

pub fn status_badge(status: AttendanceStatus) -> &'static str {
    match status {
        AttendanceStatus::Present => "badge badge-success",
        AttendanceStatus::Absent => "badge badge-error",
        AttendanceStatus::Late => "badge badge-warning",
    }
}

pub fn notification_accent(kind: NotificationKind) -> &'static str {
    match kind {
        NotificationKind::Absence => "border-l-4 border-error",
        NotificationKind::Late => "border-l-4 border-warning",
        NotificationKind::General => "border-l-4 border-info",
    }
}

// =========================================================
// Context
// =========================================================

#[derive(Clone, Copy)]
pub struct SkinContext {
    pub skin: ReadSignal<Skin>,
    set_skin: WriteSignal<Skin>,
}

impl SkinContext {
    pub fn new() -> Self {
        let initial = Skin::detect();
        initial.apply();
        let (skin, set_skin) = signal(initial);
        Self { skin, set_skin }
    }

    pub fn palette(&self) -> &'static Palette {
        self.skin.get().palette()
    }

    /// 切换并记住用户选择
    pub fn toggle(&self) {
        let next = self.skin.get_untracked().toggled();
        next.apply();
        LocalStorage::set(SKIN_OVERRIDE_KEY, next.as_str());
        self.set_skin.set(next);
    }
}

pub fn use_skin() -> SkinContext {
    use_context::<SkinContext>().expect("SkinContext should be provided")
}
