use crate::auth::use_auth;
use crate::components::layout::{EmptyState, Shell, Skeleton, use_view_lifetime};
use crate::skin::use_skin;
use attendance_portal::ViewLifetime;
use attendance_portal::views::classes::{
    ClassesView, JOIN_SUCCESS_DISMISS, JoinClassForm, JoinOutcome, MAX_JOIN_CODE_LEN,
};
use attendance_portal::AppRoute;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn ClassesPage() -> impl IntoView {
    let auth = use_auth();
    let skin = use_skin();
    let lifetime = use_view_lifetime();

    let state = RwSignal::new(ClassesView::default());

    let ticket = lifetime.with_value(ViewLifetime::ticket);
    let api = auth.api();
    spawn_local(async move {
        let classes = ClassesView::fetch(&api).await;
        ticket.apply(classes, |c| state.update(|v| v.classes = c));
    });

    let on_join = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(code) = state.try_update(|v| v.join_form.begin()).flatten() else {
            return;
        };

        let ticket = lifetime.with_value(ViewLifetime::ticket);
        let api = auth.api();
        spawn_local(async move {
            let Some(outcome) = ClassesView::join(&api, &code).await else {
                return;
            };
            let joined = matches!(outcome, JoinOutcome::Joined { .. });
            ticket.apply(outcome, |o| state.update(|v| v.apply_join(o)));

            // 成功提示停留片刻后关闭面板
            if joined {
                set_timeout(
                    move || {
                        state.try_update(|v| v.join_form.dismiss_success());
                    },
                    JOIN_SUCCESS_DISMISS,
                );
            }
        });
    };

    let form = move || state.with(|v| v.join_form.clone());
    let classes = move || state.with(|v| v.classes.ready().cloned());

    view! {
        <Shell route=AppRoute::Classes>
            <button class="btn btn-primary w-full lg:w-auto" on:click=move |_| state.update(|v| v.join_form.show())>
                "+ Join a Class"
            </button>

            {move || match classes() {
                None => view! { <Skeleton rows=3 /> }.into_any(),
                Some(list) if list.is_empty() => view! {
                    <EmptyState message="No classes yet. Join one with a code from your teacher.".to_string() />
                }
                .into_any(),
                Some(list) => view! {
                    <div class="grid gap-4 lg:grid-cols-2">
                        {list
                            .into_iter()
                            .map(|c| view! {
                                <div class=move || skin.palette().card>
                                    <div class="flex items-start justify-between gap-2">
                                        <div>
                                            <p class="font-semibold">{c.name.clone()}</p>
                                            <p class=move || skin.palette().muted>{c.subtitle()}</p>
                                        </div>
                                        <span class="badge badge-outline font-mono">{c.code.clone()}</span>
                                    </div>
                                    {c.teacher.clone().map(|t| view! { <p class="text-sm mt-2">{t}</p> })}
                                    {c.description.clone().map(|d| view! { <p class="text-sm mt-1 opacity-70">{d}</p> })}
                                </div>
                            })
                            .collect_view()}
                    </div>
                }
                .into_any(),
            }}

            <JoinSheet form=Signal::derive(form) state=state on_submit=on_join />
        </Shell>
    }
}

/// 加课输入面板
#[component]
fn JoinSheet<F>(
    form: Signal<JoinClassForm>,
    state: RwSignal<ClassesView>,
    on_submit: F,
) -> impl IntoView
where
    F: Fn(leptos::web_sys::SubmitEvent) + 'static,
{
    let skin = use_skin();

    view! {
        <dialog class="modal modal-bottom lg:modal-middle" class:modal-open=move || form.get().open>
            <div class=move || format!("modal-box {}", skin.palette().card)>
                <h3 class="font-bold text-lg">"Join a Class"</h3>
                <p class=move || skin.palette().muted>"Enter the code your teacher gave you."</p>

                <form class="space-y-4 mt-4" on:submit=on_submit>
                    <input
                        type="text"
                        placeholder="ABC123"
                        maxlength=MAX_JOIN_CODE_LEN.to_string()
                        class=move || format!("{} font-mono tracking-widest uppercase", skin.palette().input)
                        prop:value=move || form.get().code
                        on:input=move |ev| state.update(|v| v.join_form.set_code(&event_target_value(&ev)))
                    />

                    {move || form.get().error.map(|e| view! {
                        <div role="alert" class="alert alert-error text-sm py-2"><span>{e}</span></div>
                    })}
                    {move || form.get().success.map(|m| view! {
                        <div role="alert" class="alert alert-success text-sm py-2"><span>{m}</span></div>
                    })}

                    <div class="modal-action">
                        <button type="button" class="btn btn-ghost" on:click=move |_| state.update(|v| v.join_form.close())>
                            "Cancel"
                        </button>
                        <button type="submit" class="btn btn-primary" disabled=move || !form.get().can_submit()>
                            {move || if form.get().submitting { "Joining..." } else { "Join" }}
                        </button>
                    </div>
                </form>
            </div>
        </dialog>
    }
}
