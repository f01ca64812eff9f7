//! Dashboard shell behind the auth guard. Analytics content is placeholder;
//! the real numbers come from the API once those endpoints land.

use crate::components::AppShell;
use crate::features::auth::{RequireAuth, state::use_auth};
use leptos::prelude::*;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = use_auth();
    let greeting = move || {
        auth.session
            .get()
            .map(|session| format!("Welcome back, {}!", session.display_name()))
            .unwrap_or_else(|| "Welcome back!".to_string())
    };

    view! {
        <RequireAuth>
            <AppShell>
                <div class="max-w-5xl mx-auto space-y-8">
                    <h1 class="text-2xl font-semibold text-slate-900 dark:text-white">
                        {greeting}
                    </h1>

                    <div class="grid gap-6 md:grid-cols-3">
                        <StatCard label="Focus time this week" value="6h 40m" />
                        <StatCard label="Current streak" value="4 days" />
                        <StatCard label="Cards due today" value="23" />
                    </div>

                    <div class="rounded-2xl border border-slate-200 dark:border-slate-800 bg-white dark:bg-slate-900 p-6">
                        <h2 class="text-lg font-semibold text-slate-900 dark:text-white">
                            "Today's plan"
                        </h2>
                        <p class="mt-2 text-sm text-slate-600 dark:text-slate-400">
                            "Your study sessions will show up here once you connect a course."
                        </p>
                    </div>
                </div>
            </AppShell>
        </RequireAuth>
    }
}

#[component]
fn StatCard(label: &'static str, value: &'static str) -> impl IntoView {
    view! {
        <div class="rounded-2xl border border-slate-200 dark:border-slate-800 bg-white dark:bg-slate-900 p-6">
            <p class="text-sm text-slate-500 dark:text-slate-400">{label}</p>
            <p class="mt-2 text-3xl font-bold text-slate-900 dark:text-white">{value}</p>
        </div>
    }
}
