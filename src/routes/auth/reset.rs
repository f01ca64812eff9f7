//! Password-reset step shown after OTP verification. Field errors are
//! validated locally; only a valid pair is ever submitted.

use crate::app_lib::theme::Theme;
use crate::components::{Alert, AlertKind, Button, Spinner};
use crate::features::auth::flow::AuthFlow;
use leptos::{ev::SubmitEvent, prelude::*};

#[component]
pub fn ResetPasswordForm(
    flow: AuthFlow,
    email: String,
    password_error: Option<String>,
    confirm_error: Option<String>,
) -> impl IntoView {
    let (password, set_password) = signal(String::new());
    let (confirm, set_confirm) = signal(String::new());
    let (show_password, set_show_password) = signal(false);

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        flow.submit_reset(&password.get_untracked(), &confirm.get_untracked());
    };

    let password_class = if password_error.is_some() {
        Theme::INPUT_ERROR
    } else {
        Theme::INPUT
    };
    let confirm_class = if confirm_error.is_some() {
        Theme::INPUT_ERROR
    } else {
        Theme::INPUT
    };

    view! {
        <form class=Theme::AUTH_CARD on:submit=on_submit>
            <h2 class="text-2xl font-bold text-center text-slate-900 dark:text-emerald-100">
                "Reset Password"
            </h2>
            <p class="text-center text-sm text-slate-600 dark:text-emerald-300">
                "Enter your new password for " <b>{email}</b>
            </p>

            <div class="relative">
                <input
                    type=move || if show_password.get() { "text" } else { "password" }
                    placeholder="New Password"
                    autocomplete="new-password"
                    autofocus
                    class=password_class
                    prop:value=password
                    on:input=move |event| set_password.set(event_target_value(&event))
                />
                <button
                    type="button"
                    class="absolute right-3 top-1/2 -translate-y-1/2 text-sm text-slate-500 dark:text-emerald-400 hover:text-slate-700 dark:hover:text-emerald-200"
                    on:click=move |_| set_show_password.update(|show| *show = !*show)
                >
                    {move || if show_password.get() { "Hide" } else { "Show" }}
                </button>
                {password_error.map(|message| view! { <p class=Theme::FIELD_ERROR>{message}</p> })}
            </div>

            <div class="relative">
                <input
                    type=move || if show_password.get() { "text" } else { "password" }
                    placeholder="Confirm Password"
                    autocomplete="new-password"
                    class=confirm_class
                    prop:value=confirm
                    on:input=move |event| set_confirm.set(event_target_value(&event))
                />
                {confirm_error.map(|message| view! { <p class=Theme::FIELD_ERROR>{message}</p> })}
            </div>

            <Button button_type="submit" disabled=flow.pending>
                {move || if flow.pending.get() { "Resetting..." } else { "Reset Password" }}
            </Button>

            {move || {
                flow.pending
                    .get()
                    .then_some(view! { <div class="flex justify-center"><Spinner /></div> })
            }}
            {move || {
                flow.flow_error
                    .get()
                    .map(|message| view! { <Alert kind=AlertKind::Error message=message /> })
            }}
        </form>
    }
}
