use crate::auth::use_auth;
use crate::components::layout::{EmptyState, Shell, Skeleton, now, use_view_lifetime};
use crate::skin::{notification_accent, use_skin};
use attendance_portal::ViewLifetime;
use attendance_portal::views::notifications::NotificationsView;
use attendance_portal::AppRoute;
use leptos::prelude::*;
use leptos::task::spawn_local;
use portal_shared::date::relative_time_str;

#[component]
pub fn NotificationsPage() -> impl IntoView {
    let auth = use_auth();
    let skin = use_skin();
    let lifetime = use_view_lifetime();

    let state = RwSignal::new(NotificationsView::default());

    let ticket = lifetime.with_value(ViewLifetime::ticket);
    let api = auth.api();
    spawn_local(async move {
        let items = NotificationsView::fetch(&api).await;
        ticket.apply(items, |i| state.update(|v| v.items = i));
    });

    // 点击未读通知即标记已读
    let mark_read = move |id: String| {
        if state.with_untracked(|v| v.is_read(&id)) != Some(false) {
            return;
        }
        let ticket = lifetime.with_value(ViewLifetime::ticket);
        let api = auth.api();
        spawn_local(async move {
            if NotificationsView::submit_read(&api, &id).await {
                ticket.apply(id, |id| state.update(|v| v.mark_read_local(&id)));
            }
        });
    };

    let unread = move || state.with(|v| v.unread_count());

    view! {
        <Shell route=AppRoute::Notifications>
            <p class=move || skin.palette().muted>
                {move || match unread() {
                    0 => "You're all caught up".to_string(),
                    1 => "1 unread notification".to_string(),
                    n => format!("{} unread notifications", n),
                }}
            </p>

            {move || {
                if state.with(|v| v.items.is_loading()) {
                    return view! { <Skeleton rows=4 /> }.into_any();
                }
                let items = state.with(|v| v.items().to_vec());
                if items.is_empty() {
                    return view! { <EmptyState message="No notifications".to_string() /> }.into_any();
                }
                items
                    .into_iter()
                    .map(|n| {
                        let id = n.id.clone();
                        let read = n.read;
                        view! {
                            <button
                                class=move || format!(
                                    "{} {} w-full text-left block {}",
                                    skin.palette().card,
                                    notification_accent(n.kind),
                                    if read { "opacity-60" } else { "" }
                                )
                                on:click=move |_| mark_read(id.clone())
                            >
                                <div class="flex items-center justify-between">
                                    <p class="font-semibold">{n.title.clone()}</p>
                                    {(!read).then(|| view! { <span class="badge badge-primary badge-xs"></span> })}
                                </div>
                                <p class="text-sm mt-1">{n.message.clone()}</p>
                                <p class=move || skin.palette().muted>{relative_time_str(&n.created_at, now())}</p>
                            </button>
                        }
                    })
                    .collect_view()
                    .into_any()
            }}
        </Shell>
    }
}
