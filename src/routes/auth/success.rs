//! Post-login success panel. Redirects to the requested page (or the
//! dashboard) after a short fixed delay; the timer dies with the panel if
//! the user navigates away first.

use crate::app_lib::config::AppConfig;
use crate::features::auth::flow::SUCCESS_REDIRECT_DELAY_MS;
use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_query_map};

#[component]
pub fn SuccessPanel() -> impl IntoView {
    let navigate = use_navigate();
    let query = use_query_map();

    let target = query
        .get_untracked()
        .get("redirect")
        .filter(|path| path.starts_with('/'))
        .unwrap_or_else(|| AppConfig::load().default_redirect);

    let timeout = Timeout::new(SUCCESS_REDIRECT_DELAY_MS, move || {
        navigate(&target, Default::default());
    });
    let timeout = StoredValue::new_local(Some(timeout));
    on_cleanup(move || {
        if let Some(mut stored) = timeout.try_write_value() {
            stored.take();
        }
    });

    view! {
        <div class="w-full max-w-md mx-auto space-y-4 bg-emerald-50 dark:bg-emerald-900/20 border border-emerald-200 dark:border-emerald-700 p-8 rounded-2xl text-center">
            <p class="text-2xl" aria-hidden="true">"🎉"</p>
            <p class="text-sm font-medium text-emerald-700 dark:text-emerald-300">
                "Login successful! Taking you to your dashboard..."
            </p>
        </div>
    }
}
