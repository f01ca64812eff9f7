//! Forgot-password step: collects the account email and dispatches a
//! one-time code.

use crate::app_lib::theme::Theme;
use crate::components::{Button, Spinner};
use crate::features::auth::flow::AuthFlow;
use leptos::{ev::SubmitEvent, prelude::*};

#[component]
pub fn ForgotForm(flow: AuthFlow, error: Option<String>) -> impl IntoView {
    let (email, set_email) = signal(String::new());

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        flow.submit_forgot(&email.get_untracked());
    };

    let input_class = if error.is_some() {
        Theme::INPUT_ERROR
    } else {
        Theme::INPUT
    };

    view! {
        <form class=Theme::AUTH_CARD on:submit=on_submit>
            <h2 class="text-2xl font-bold text-center text-slate-900 dark:text-emerald-100">
                "Forgot Password"
            </h2>
            <p class="text-center text-sm text-slate-600 dark:text-emerald-300">
                "Enter your email to receive a one-time code for resetting your password."
            </p>

            <input
                type="email"
                placeholder="Email"
                autocomplete="email"
                autofocus
                class=input_class
                prop:value=email
                on:input=move |event| set_email.set(event_target_value(&event))
            />
            {error.map(|message| view! { <p class=Theme::FIELD_ERROR>{message}</p> })}

            <Button button_type="submit" disabled=flow.pending>
                {move || if flow.pending.get() { "Sending..." } else { "Send code" }}
            </Button>

            {move || {
                flow.pending
                    .get()
                    .then_some(view! { <div class="flex justify-center"><Spinner /></div> })
            }}

            <div class="text-center">
                <button
                    type="button"
                    class=Theme::LINK_BUTTON
                    on:click=move |_| flow.back_to_login()
                >
                    "Back to Login"
                </button>
            </div>
        </form>
    }
}
