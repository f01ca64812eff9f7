//! Signup form: registers an account, then verifies the email address with
//! the shared OTP step. Registration triggers the code dispatch server-side.
//! Inputs are validated locally before any network call.

use crate::app_lib::theme::Theme;
use crate::components::{Alert, AlertKind, Button, Spinner};
use crate::features::auth::{
    client,
    flow::step_error_message,
    types::RegisterRequest,
    validate,
};
use leptos::{ev::SubmitEvent, prelude::*};

use super::otp::OtpForm;

#[derive(Clone)]
/// Captures signup form input for the async action without borrowing signals.
struct SignupInput {
    name: String,
    email: String,
    password: String,
}

#[component]
pub fn SignupForm(on_complete: Callback<()>) -> impl IntoView {
    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (confirm, set_confirm) = signal(String::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (verify_email, set_verify_email) = signal::<Option<String>>(None);

    let register_action = Action::new_local(move |input: &SignupInput| {
        let input = input.clone();
        async move {
            let request = RegisterRequest {
                name: input.name,
                email: input.email.clone(),
                password: input.password,
            };
            client::register(&request).await.map(|()| input.email)
        }
    });

    Effect::new(move |_| {
        if let Some(result) = register_action.value().get() {
            match result {
                Ok(email) => set_verify_email.set(Some(email)),
                Err(err) => set_error.set(Some(step_error_message(&err, "Signup failed"))),
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_error.set(None);

        let name_value = name.get_untracked().trim().to_string();
        let email_value = validate::normalize_email(&email.get_untracked());
        let password_value = password.get_untracked();
        let confirm_value = confirm.get_untracked();

        if let Err(message) = validate::validate_name(&name_value) {
            set_error.set(Some(message));
            return;
        }
        if let Err(message) = validate::validate_email(&email_value) {
            set_error.set(Some(message));
            return;
        }
        if let Err(message) = validate::validate_password(&password_value) {
            set_error.set(Some(message));
            return;
        }
        if password_value != confirm_value {
            set_error.set(Some("Passwords do not match".to_string()));
            return;
        }

        register_action.dispatch(SignupInput {
            name: name_value,
            email: email_value,
            password: password_value,
        });
    };

    view! {
        {move || match verify_email.get() {
            Some(email) => view! {
                <OtpForm
                    email=email
                    on_verified=Callback::new(move |_| {
                        set_verify_email.set(None);
                        on_complete.run(());
                    })
                />
            }
                .into_any(),
            None => view! {
                <form class=Theme::AUTH_CARD on:submit=on_submit>
                    {move || {
                        error
                            .get()
                            .map(|message| view! { <Alert kind=AlertKind::Error message=message /> })
                    }}

                    <div>
                        <label class=Theme::LABEL for="signup_name">"Name"</label>
                        <input
                            id="signup_name"
                            type="text"
                            autocomplete="name"
                            class=Theme::INPUT
                            prop:value=name
                            on:input=move |event| set_name.set(event_target_value(&event))
                        />
                    </div>

                    <div>
                        <label class=Theme::LABEL for="signup_email">"Email"</label>
                        <input
                            id="signup_email"
                            type="email"
                            autocomplete="email"
                            placeholder="you@example.com"
                            class=Theme::INPUT
                            prop:value=email
                            on:input=move |event| set_email.set(event_target_value(&event))
                        />
                    </div>

                    <div>
                        <label class=Theme::LABEL for="signup_password">"Password"</label>
                        <input
                            id="signup_password"
                            type="password"
                            autocomplete="new-password"
                            class=Theme::INPUT
                            prop:value=password
                            on:input=move |event| set_password.set(event_target_value(&event))
                        />
                    </div>

                    <div>
                        <label class=Theme::LABEL for="signup_confirm">"Confirm password"</label>
                        <input
                            id="signup_confirm"
                            type="password"
                            autocomplete="new-password"
                            class=Theme::INPUT
                            prop:value=confirm
                            on:input=move |event| set_confirm.set(event_target_value(&event))
                        />
                    </div>

                    <Button button_type="submit" disabled=register_action.pending()>
                        {move || {
                            if register_action.pending().get() {
                                "Creating account..."
                            } else {
                                "Create account"
                            }
                        }}
                    </Button>

                    {move || {
                        register_action
                            .pending()
                            .get()
                            .then_some(view! { <div class="flex justify-center"><Spinner /></div> })
                    }}
                </form>
            }
                .into_any(),
        }}
    }
}
