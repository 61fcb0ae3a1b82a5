use crate::auth::use_auth;
use crate::components::layout::Shell;
use crate::skin::{Skin, use_skin};
use attendance_portal::views::profile::{initial, profile_items};
use attendance_portal::AppRoute;
use leptos::prelude::*;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let auth = use_auth();
    let skin = use_skin();
    let student = auth.student();

    // 进入页面时刷新一次档案，失败不影响显示
    auth.refresh_profile();

    view! {
        <Shell route=AppRoute::Profile>
            {move || student.get().map(|s| {
                let items = profile_items(&s);
                view! {
                    <div class=move || format!("{} flex items-center gap-4", skin.palette().card)>
                        <div class="avatar placeholder">
                            <div class="bg-primary text-primary-content rounded-full w-16">
                                <span class="text-2xl">{initial(&s.name)}</span>
                            </div>
                        </div>
                        <div>
                            <p class="text-xl font-semibold">{s.name.clone()}</p>
                            <p class=move || skin.palette().muted>{s.email.clone()}</p>
                        </div>
                    </div>

                    <div class=move || format!("{} divide-y divide-base-300", skin.palette().card)>
                        {items
                            .into_iter()
                            .map(|item| view! {
                                <div class="py-3">
                                    <p class="text-xs uppercase tracking-wide opacity-60">{item.label}</p>
                                    <p class="font-medium">{item.value}</p>
                                </div>
                            })
                            .collect_view()}
                    </div>
                }
            })}

            <button class="btn btn-ghost w-full" on:click=move |_| skin.toggle()>
                {move || match skin.skin.get() {
                    Skin::Light => "Use desktop theme",
                    Skin::Dark => "Use mobile theme",
                }}
            </button>
            <button class="btn btn-outline btn-error w-full" on:click=move |_| auth.logout()>
                "Sign out"
            </button>
        </Shell>
    }
}
