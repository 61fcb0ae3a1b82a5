use crate::auth::use_auth;
use crate::components::layout::{EmptyState, Shell, Skeleton, use_view_lifetime};
use crate::skin::{status_badge, use_skin};
use attendance_portal::views::attendance::{AttendanceFilter, AttendanceView, RateBand};
use attendance_portal::ViewLifetime;
use attendance_portal::AppRoute;
use leptos::prelude::*;
use leptos::task::spawn_local;
use portal_shared::date::DateParts;

#[component]
pub fn AttendancePage() -> impl IntoView {
    let auth = use_auth();
    let skin = use_skin();
    let lifetime = use_view_lifetime();

    let state = RwSignal::new(AttendanceView::default());
    let (loading, set_loading) = signal(true);

    // 每次翻页都作废上一页的在途请求
    let load_page = move |page: u32| {
        let ticket = lifetime.with_value(ViewLifetime::renew);
        let limit = state.with_untracked(|v| v.limit);
        let api = auth.api();
        set_loading.set(true);
        spawn_local(async move {
            let history = AttendanceView::fetch(&api, page, limit).await;
            ticket.apply(history, |h| {
                state.update(|v| v.apply(page, h));
                set_loading.set(false);
            });
        });
    };
    load_page(1);

    let summary = move || {
        state.with(|v| {
            let rate = v.rate();
            let tone = match RateBand::of(rate) {
                RateBand::Good => "text-success",
                RateBand::Fair => "text-warning",
                RateBand::Poor => "text-error",
            };
            (rate, tone, v.stats().total)
        })
    };

    view! {
        <Shell route=AppRoute::Attendance>
            <div class=move || skin.palette().card>
                {move || {
                    let (rate, tone, total) = summary();
                    view! {
                        <p class=move || skin.palette().muted>"Attendance rate"</p>
                        <p class=format!("text-4xl font-bold {}", tone)>{rate} "%"</p>
                        <p class=move || skin.palette().muted>{format!("{} sessions recorded", total)}</p>
                    }
                }}
            </div>

            <div class="flex gap-2 overflow-x-auto">
                {AttendanceFilter::TABS
                    .into_iter()
                    .map(|filter| {
                        let active = move || state.with(|v| v.filter == filter);
                        let label = move || match state.with(|v| v.tab_count(filter)) {
                            Some(n) => format!("{} ({})", filter.label(), n),
                            None => filter.label().to_string(),
                        };
                        view! {
                            <button
                                class=move || if active() { skin.palette().tab_active } else { skin.palette().tab_idle }
                                on:click=move |_| state.update(|v| v.set_filter(filter))
                            >
                                {label}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            {move || {
                if loading.get() {
                    return view! { <Skeleton rows=5 /> }.into_any();
                }
                let records: Vec<_> = state.with(|v| v.visible().into_iter().cloned().collect());
                if records.is_empty() {
                    let message = state.with(|v| v.empty_message());
                    return view! { <EmptyState message=message /> }.into_any();
                }
                view! {
                    <div class="space-y-3">
                        {records
                            .into_iter()
                            .map(|r| {
                                let parts = DateParts::parse(&r.date);
                                view! {
                                    <div class=move || format!("{} flex items-center gap-4", skin.palette().card)>
                                        <div class="text-center w-12">
                                            <p class="text-xs uppercase opacity-60">
                                                {parts.as_ref().map(|p| p.month.clone()).unwrap_or_default()}
                                            </p>
                                            <p class="text-xl font-bold">
                                                {parts.as_ref().map(|p| p.day.to_string()).unwrap_or_default()}
                                            </p>
                                        </div>
                                        <div class="flex-1">
                                            <p class="font-medium">{r.class_label().to_string()}</p>
                                            <p class=move || skin.palette().muted>
                                                {parts.as_ref().map(|p| p.weekday.clone()).unwrap_or_default()}
                                            </p>
                                            {r.remarks.clone().map(|m| view! { <p class="text-xs italic opacity-70">{m}</p> })}
                                        </div>
                                        <span class=status_badge(r.status)>{r.status.label()}</span>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                }
                .into_any()
            }}

            <div class="join flex justify-center">
                <button
                    class="join-item btn btn-sm"
                    disabled=move || !state.with(|v| v.has_previous())
                    on:click=move |_| load_page(state.with_untracked(|v| v.page).saturating_sub(1).max(1))
                >
                    "«"
                </button>
                <span class="join-item btn btn-sm btn-disabled">{move || format!("Page {}", state.with(|v| v.page))}</span>
                <button
                    class="join-item btn btn-sm"
                    disabled=move || !state.with(|v| v.has_next())
                    on:click=move |_| load_page(state.with_untracked(|v| v.page) + 1)
                >
                    "»"
                </button>
            </div>
        </Shell>
    }
}
