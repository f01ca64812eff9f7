//! Shared OTP verification form, used by the password-reset flow and by
//! signup email verification. The six-slot buffer guarantees only a complete
//! code is ever submitted; a partial code never issues a network call.

use crate::app_lib::theme::Theme;
use crate::components::{Alert, AlertKind, Button, OtpInput, Spinner};
use crate::features::auth::{
    client, flow::step_error_message, otp::OtpBuffer, types::VerifyOtpRequest, validate,
};
use leptos::{ev::SubmitEvent, prelude::*};

#[component]
pub fn OtpForm(
    email: String,
    on_verified: Callback<()>,
    #[prop(optional)] on_resend: Option<Callback<()>>,
) -> impl IntoView {
    let buffer = RwSignal::new(OtpBuffer::new());
    let (error, set_error) = signal::<Option<String>>(None);

    let verify_action = Action::new_local(move |input: &(String, String)| {
        let (email, code) = input.clone();
        async move {
            let request = VerifyOtpRequest { email, otp: code };
            client::verify_otp(&request).await
        }
    });

    Effect::new(move |_| {
        if let Some(result) = verify_action.value().get() {
            match result {
                Ok(()) => on_verified.run(()),
                Err(err) => {
                    set_error.set(Some(step_error_message(&err, "OTP verification failed")));
                }
            }
        }
    });

    let email_for_submit = email.clone();
    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        let code = buffer
            .with_untracked(|buffer| buffer.code())
            .unwrap_or_default();
        if let Err(message) = validate::validate_otp(&code) {
            set_error.set(Some(message));
            return;
        }
        set_error.set(None);
        verify_action.dispatch((email_for_submit.clone(), code));
    };

    view! {
        <form class=Theme::AUTH_CARD on:submit=on_submit>
            <h2 class="text-2xl font-bold text-center text-slate-900 dark:text-emerald-100">
                "Verify Your Email"
            </h2>
            <p class="text-center text-sm text-slate-600 dark:text-emerald-300">
                "Code sent to " <b>{email}</b>
            </p>

            <OtpInput buffer=buffer />

            <Button button_type="submit" disabled=verify_action.pending()>
                {move || if verify_action.pending().get() { "Verifying..." } else { "Verify" }}
            </Button>

            {move || {
                verify_action
                    .pending()
                    .get()
                    .then_some(view! { <div class="flex justify-center"><Spinner /></div> })
            }}
            {move || {
                error
                    .get()
                    .map(|message| view! { <Alert kind=AlertKind::Error message=message /> })
            }}

            {on_resend
                .map(|on_resend| {
                    view! {
                        <p class="text-sm text-center text-slate-600 dark:text-emerald-300">
                            "Didn't receive a code? "
                            <button
                                type="button"
                                class=Theme::LINK_BUTTON
                                on:click=move |_| on_resend.run(())
                            >
                                "Resend code"
                            </button>
                        </p>
                    }
                })}
        </form>
    }
}
