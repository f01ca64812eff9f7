//! Authentication page: sign-in and sign-up tabs around the multi-step flow.
//!
//! Flow Overview: Sign-in gates on the client-side rate limiter, then
//! delegates to the identity provider; five consecutive failures show the
//! lockout countdown. Forgot-password walks email → OTP → new password.
//! Sign-up registers, verifies the address with the same OTP step, and drops
//! the user back on the sign-in tab.

mod blocked;
mod forgot;
mod login;
mod otp;
mod reset;
mod signup;
mod success;

use crate::features::auth::client;
use leptos::prelude::*;
use leptos_router::{components::A, hooks::use_query_map};
use login::LoginFlow;
use signup::SignupForm;

#[derive(Clone, Copy, PartialEq)]
enum AuthTab {
    SignIn,
    SignUp,
}

#[component]
pub fn AuthPage() -> impl IntoView {
    let query = use_query_map();
    let initial_tab = if query.get_untracked().get("tab").as_deref() == Some("signup") {
        AuthTab::SignUp
    } else {
        AuthTab::SignIn
    };
    let (active_tab, set_active_tab) = signal(initial_tab);

    let tab_class = move |tab: AuthTab| {
        if active_tab.get() == tab {
            "py-2.5 text-sm font-semibold bg-emerald-600 text-white transition-colors"
        } else {
            "py-2.5 text-sm font-semibold text-slate-600 dark:text-emerald-300 hover:text-slate-900 dark:hover:text-emerald-100 transition-colors cursor-pointer"
        }
    };

    view! {
        <div class="min-h-screen bg-slate-50 dark:bg-slate-950 px-6 py-10">
            <div class="w-full max-w-xl mx-auto space-y-8">
                <A
                    href="/"
                    {..}
                    class="inline-flex items-center gap-2 text-emerald-600 dark:text-emerald-400 hover:text-emerald-500 transition-colors text-sm"
                >
                    <span aria-hidden="true">"←"</span>
                    <span>"Back to Home"</span>
                </A>

                <div class="bg-white/90 dark:bg-slate-900/90 backdrop-blur-xl border border-slate-200 dark:border-emerald-900/50 p-8 rounded-3xl">
                    <div class="mb-4 space-y-1">
                        <h1 class="text-3xl font-bold text-center text-slate-900 dark:text-white">
                            "Welcome"
                        </h1>
                        <p class="text-center text-slate-600 dark:text-emerald-300">
                            "Sign in to your account or create a new one"
                        </p>
                    </div>

                    <div class="py-6">
                        <GoogleLoginButton />
                    </div>

                    <div class="grid w-full grid-cols-2 mb-6 bg-slate-100 dark:bg-slate-800/80 rounded-xl overflow-hidden border border-slate-200 dark:border-emerald-900/40">
                        <button
                            type="button"
                            class=move || tab_class(AuthTab::SignIn)
                            on:click=move |_| set_active_tab.set(AuthTab::SignIn)
                        >
                            "Sign In"
                        </button>
                        <button
                            type="button"
                            class=move || tab_class(AuthTab::SignUp)
                            on:click=move |_| set_active_tab.set(AuthTab::SignUp)
                        >
                            "Sign Up"
                        </button>
                    </div>

                    {move || match active_tab.get() {
                        AuthTab::SignIn => view! { <LoginFlow /> }.into_any(),
                        AuthTab::SignUp => view! {
                            <SignupForm on_complete=Callback::new(move |_| {
                                set_active_tab.set(AuthTab::SignIn);
                            }) />
                        }
                            .into_any(),
                    }}
                </div>
            </div>
        </div>
    }
}

/// Hands the browser to the Google OAuth redirect; the provider returns with
/// a session cookie and no credential ever touches this client.
#[component]
fn GoogleLoginButton() -> impl IntoView {
    view! {
        <button
            type="button"
            class="w-full py-3 rounded-xl flex justify-center items-center gap-3 font-semibold text-slate-700 dark:text-emerald-100 bg-white dark:bg-slate-800 border border-slate-300 dark:border-emerald-800/50 hover:bg-slate-50 dark:hover:bg-slate-700 transition-all cursor-pointer"
            on:click=move |_| client::sign_in_redirect("google")
        >
            <span class="text-lg" aria-hidden="true">"G"</span>
            "Continue with Google"
        </button>
    }
}
