//! Sign-in flow host. One tagged state value decides which step renders:
//! the credentials form, the lockout panel, forgot-password, OTP
//! verification, password reset, or the success panel. Abandoning the page
//! drops the flow and its state entirely.

use crate::app_lib::{storage, theme::Theme};
use crate::components::{Alert, AlertKind, Button, Spinner};
use crate::features::auth::flow::{AuthFlow, AuthFlowState};
use leptos::{ev::SubmitEvent, prelude::*};

use super::blocked::LoginBlocked;
use super::forgot::ForgotForm;
use super::otp::OtpForm;
use super::reset::ResetPasswordForm;
use super::success::SuccessPanel;

#[component]
pub fn LoginFlow() -> impl IntoView {
    let flow = AuthFlow::new();

    view! {
        {move || match flow.state.get() {
            AuthFlowState::Credentials { email, error } => {
                view! { <CredentialsForm flow=flow email=email error=error /> }.into_any()
            }
            AuthFlowState::Blocked { email, blocked_until } => {
                view! { <LoginBlocked flow=flow email=email blocked_until=blocked_until /> }
                    .into_any()
            }
            AuthFlowState::Forgot { error } => {
                view! { <ForgotForm flow=flow error=error /> }.into_any()
            }
            AuthFlowState::OtpVerify { email } => {
                view! { <OtpVerifyStep flow=flow email=email /> }.into_any()
            }
            AuthFlowState::ResetPassword { email, password_error, confirm_error } => {
                view! {
                    <ResetPasswordForm
                        flow=flow
                        email=email
                        password_error=password_error
                        confirm_error=confirm_error
                    />
                }
                    .into_any()
            }
            AuthFlowState::Success => view! { <SuccessPanel /> }.into_any(),
        }}
    }
}

/// OTP step wired into the password-reset flow: a verified code moves on to
/// choosing a new password, resend walks back to the forgot step.
#[component]
fn OtpVerifyStep(flow: AuthFlow, email: String) -> impl IntoView {
    view! {
        <div class="space-y-4">
            {move || {
                flow.notice
                    .get()
                    .map(|message| view! { <Alert kind=AlertKind::Success message=message /> })
            }}
            <OtpForm
                email=email
                on_verified=Callback::new(move |_| flow.otp_verified())
                on_resend=Callback::new(move |_| flow.resend_otp())
            />
        </div>
    }
}

#[component]
fn CredentialsForm(flow: AuthFlow, email: String, error: Option<String>) -> impl IntoView {
    let initial_email = if email.is_empty() {
        storage::remembered_email().unwrap_or_default()
    } else {
        email
    };
    let (email, set_email) = signal(initial_email);
    let (password, set_password) = signal(String::new());
    let (show_password, set_show_password) = signal(false);
    let (remember, set_remember) = signal(storage::remembered_email().is_some());

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        flow.submit_login(
            &email.get_untracked(),
            &password.get_untracked(),
            remember.get_untracked(),
        );
    };

    view! {
        <form class=Theme::AUTH_CARD on:submit=on_submit>
            {move || {
                flow.notice
                    .get()
                    .map(|message| view! { <Alert kind=AlertKind::Success message=message /> })
            }}
            {error
                .map(|message| view! { <Alert kind=AlertKind::Error message=message /> })}

            <div>
                <label class=Theme::LABEL for="login_email">"Email"</label>
                <input
                    id="login_email"
                    type="email"
                    autocomplete="email"
                    placeholder="you@example.com"
                    autofocus
                    class=Theme::INPUT
                    prop:value=email
                    on:input=move |event| {
                        let value = event_target_value(&event);
                        set_email.set(value.clone());
                        flow.email_changed(&value);
                    }
                />
            </div>

            <div>
                <label class=Theme::LABEL for="login_password">"Password"</label>
                <div class="relative">
                    <input
                        id="login_password"
                        type=move || if show_password.get() { "text" } else { "password" }
                        autocomplete="current-password"
                        class=Theme::INPUT
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
                </div>
            </div>

            <div class="flex items-center justify-between">
                <label class="flex items-center gap-2 text-sm text-slate-700 dark:text-emerald-200 select-none cursor-pointer">
                    <input
                        type="checkbox"
                        class="h-4 w-4 rounded border-slate-300 text-emerald-600 focus:ring-emerald-500"
                        prop:checked=remember
                        on:change=move |event| set_remember.set(event_target_checked(&event))
                    />
                    "Remember Me"
                </label>
                <button
                    type="button"
                    class=Theme::LINK_BUTTON
                    on:click=move |_| flow.click_forgot()
                >
                    "Forgot Password?"
                </button>
            </div>

            <Button button_type="submit" disabled=flow.pending>
                {move || if flow.pending.get() { "Signing in..." } else { "Sign in" }}
            </Button>

            {move || {
                flow.pending
                    .get()
                    .then_some(view! { <div class="flex justify-center"><Spinner /></div> })
            }}
        </form>
    }
}
