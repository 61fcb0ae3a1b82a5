use crate::auth::use_auth;
use crate::components::layout::{EmptyState, Shell, Skeleton, today, use_view_lifetime};
use crate::skin::{status_badge, use_skin};
use crate::web::router::use_navigate;
use attendance_portal::AppRoute;
use attendance_portal::ViewLifetime;
use attendance_portal::views::LoadState;
use attendance_portal::views::attendance::RateBand;
use attendance_portal::views::dashboard::{DashboardData, first_name, greeting};
use leptos::prelude::*;
use leptos::task::spawn_local;
use portal_shared::chrono::{Local, Timelike};
use portal_shared::date::day_label_str;
use portal_shared::AttendanceStatus;

fn rate_color(band: RateBand) -> &'static str {
    match band {
        RateBand::Good => "text-success",
        RateBand::Fair => "text-warning",
        RateBand::Poor => "text-error",
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = use_auth();
    let skin = use_skin();
    let navigate = use_navigate();
    let lifetime = use_view_lifetime();

    let (data, set_data) = signal(LoadState::<DashboardData>::Loading);

    // 初始加载
    let ticket = lifetime.with_value(ViewLifetime::ticket);
    let api = auth.api();
    spawn_local(async move {
        let loaded = DashboardData::load(&api).await;
        ticket.apply(loaded, |d| set_data.set(LoadState::Ready(d)));
    });

    let student = auth.student();
    let salutation = move || {
        let name = student
            .get()
            .map(|s| first_name(&s.name).to_string())
            .unwrap_or_default();
        format!("{}, {}", greeting(Local::now().hour()), name)
    };

    let loaded = move || data.with(|d| d.ready().cloned());

    view! {
        <Shell route=AppRoute::Dashboard>
            <p class=move || skin.palette().muted>{salutation}</p>
            {move || match loaded() {
                None => view! { <Skeleton rows=4 /> }.into_any(),
                Some(d) => {
                    let rate = d.attendance_rate();
                    let band = d.rate_band();
                    let stats = d.stats;
                    let recent = d.recent().to_vec();
                    let preview = d.preview_classes().to_vec();
                    view! {
                        <div class=move || skin.palette().hero>
                            <p class="text-sm opacity-80">"Overall Attendance"</p>
                            <p class="text-5xl font-bold">{rate} <span class="text-2xl opacity-80">"%"</span></p>
                            <progress class="progress progress-accent w-full mt-4" value=rate.to_string() max="100"></progress>
                        </div>

                        <div class="grid grid-cols-3 gap-3">
                            {AttendanceStatus::ALL
                                .into_iter()
                                .map(|status| view! {
                                    <div class=move || skin.palette().card>
                                        <p class="text-2xl font-bold">{stats.count(status)}</p>
                                        <p class=move || skin.palette().muted>{status.label()}</p>
                                    </div>
                                })
                                .collect_view()}
                        </div>
                        <p class=rate_color(band)>{format!("{} of {} sessions attended", stats.present, stats.total)}</p>

                        <section class="space-y-3">
                            <div class="flex items-center justify-between">
                                <h2 class="font-semibold">"Recent Attendance"</h2>
                                <button class="btn btn-link btn-sm" on:click=move |_| navigate(AppRoute::Attendance)>"View all"</button>
                            </div>
                            {if recent.is_empty() {
                                view! { <EmptyState message="No attendance records yet".to_string() /> }.into_any()
                            } else {
                                recent
                                    .into_iter()
                                    .map(|r| view! {
                                        <div class=move || format!("{} flex items-center justify-between", skin.palette().card)>
                                            <div>
                                                <p class="font-medium">{r.class_label().to_string()}</p>
                                                <p class=move || skin.palette().muted>{day_label_str(&r.date, today())}</p>
                                            </div>
                                            <span class=status_badge(r.status)>{r.status.label()}</span>
                                        </div>
                                    })
                                    .collect_view()
                                    .into_any()
                            }}
                        </section>

                        <section class="space-y-3">
                            <div class="flex items-center justify-between">
                                <h2 class="font-semibold">"My Classes"</h2>
                                <button class="btn btn-link btn-sm" on:click=move |_| navigate(AppRoute::Classes)>"View all"</button>
                            </div>
                            {if preview.is_empty() {
                                view! { <EmptyState message="You have not joined any classes".to_string() /> }.into_any()
                            } else {
                                preview
                                    .into_iter()
                                    .map(|c| view! {
                                        <div class=move || skin.palette().card>
                                            <p class="font-medium">{c.name.clone()}</p>
                                            <p class=move || skin.palette().muted>{c.subtitle()}</p>
                                        </div>
                                    })
                                    .collect_view()
                                    .into_any()
                            }}
                        </section>
                    }
                    .into_any()
                }
            }}
        </Shell>
    }
}
