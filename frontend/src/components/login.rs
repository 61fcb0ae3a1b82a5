use crate::auth::use_auth;
use crate::skin::{Skin, use_skin};
use attendance_portal::LoginOutcome;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// 登录页
///
/// 登录成功后无需手动跳转，路由守卫监听到会话变化会重定向到首页。
#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();
    let skin = use_skin();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (is_submitting, set_is_submitting) = signal(false);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        if email.get().trim().is_empty() || password.get().is_empty() {
            set_error_msg.set(Some("Please fill in all fields".to_string()));
            return;
        }

        set_is_submitting.set(true);
        set_error_msg.set(None);

        spawn_local(async move {
            let outcome = auth
                .login(email.get_untracked().trim().to_string(), password.get_untracked())
                .await;
            if let LoginOutcome::Failure { error } = outcome {
                set_error_msg.set(Some(error));
            }
            set_is_submitting.set(false);
        });
    };

    let shell_class = move || match skin.skin.get() {
        Skin::Light => "min-h-screen bg-gradient-to-b from-violet-50 to-white flex flex-col justify-center px-6",
        Skin::Dark => "min-h-screen bg-slate-950 flex items-center justify-center",
    };
    let card_class = move || match skin.skin.get() {
        Skin::Light => "w-full space-y-6",
        Skin::Dark => "card w-full max-w-md bg-slate-900 border border-slate-800 shadow-2xl p-8 space-y-6",
    };

    view! {
        <div class=shell_class>
            <div class=card_class>
                <div class="text-center space-y-1">
                    <h1 class=move || skin.palette().heading>"Welcome back"</h1>
                    <p class=move || skin.palette().muted>"Sign in to view your attendance"</p>
                </div>

                <form class="space-y-4" on:submit=on_submit>
                    <Show when=move || error_msg.get().is_some()>
                        <div role="alert" class="alert alert-error text-sm py-2">
                            <span>{move || error_msg.get().unwrap_or_default()}</span>
                        </div>
                    </Show>

                    <label class="form-control w-full">
                        <span class="label-text mb-1">"Email"</span>
                        <input
                            type="email"
                            placeholder="student@school.edu"
                            autocomplete="email"
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                            prop:value=email
                            class=move || skin.palette().input
                            required
                        />
                    </label>
                    <label class="form-control w-full">
                        <span class="label-text mb-1">"Password"</span>
                        <input
                            type="password"
                            placeholder="••••••••"
                            autocomplete="current-password"
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            prop:value=password
                            class=move || skin.palette().input
                            required
                        />
                    </label>

                    <button class="btn btn-primary w-full" disabled=move || is_submitting.get()>
                        {move || if is_submitting.get() {
                            view! { <span class="loading loading-spinner"></span> "Signing in..." }.into_any()
                        } else {
                            "Sign In".into_any()
                        }}
                    </button>
                </form>
            </div>
        </div>
    }
}
