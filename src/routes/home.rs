//! Marketing landing page. Purely presentational; all stateful logic lives
//! in the auth feature and the dashboard.

use crate::components::AppShell;
use leptos::prelude::*;
use leptos_router::components::A;

struct Feature {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
}

static FEATURES: [Feature; 3] = [
    Feature {
        icon: "🧠",
        title: "AI study plans",
        description: "Personalized schedules that adapt to how you actually learn, not how you planned to.",
    },
    Feature {
        icon: "📈",
        title: "Progress you can see",
        description: "Streaks, focus time, and retention curves in one dashboard instead of five apps.",
    },
    Feature {
        icon: "⏰",
        title: "Smart reminders",
        description: "Spaced-repetition nudges land right before you forget, not after.",
    },
];

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <AppShell>
            <section class="max-w-3xl mx-auto text-center py-16 space-y-6">
                <h1 class="text-4xl md:text-5xl font-extrabold text-slate-900 dark:text-white">
                    "Study smarter, " <span class="text-emerald-600">"not longer"</span>
                </h1>
                <p class="text-lg text-slate-600 dark:text-slate-300">
                    "StudyFlow turns scattered notes and looming deadlines into a focused daily plan, then keeps you honest about it."
                </p>
                <div class="flex flex-col sm:flex-row items-center justify-center gap-4">
                    <A
                        href="/auth?tab=signup"
                        {..}
                        class="px-6 py-3 rounded-xl bg-emerald-600 hover:bg-emerald-700 text-white font-semibold transition-all"
                    >
                        "Get started free"
                    </A>
                    <A
                        href="/auth"
                        {..}
                        class="px-6 py-3 rounded-xl border border-slate-300 dark:border-slate-700 text-slate-700 dark:text-slate-200 font-semibold hover:bg-slate-50 dark:hover:bg-slate-800 transition-all"
                    >
                        "Sign in"
                    </A>
                </div>
            </section>

            <section class="max-w-5xl mx-auto py-12 grid gap-6 md:grid-cols-3">
                {FEATURES
                    .iter()
                    .map(|feature| {
                        view! {
                            <div class="rounded-2xl border border-slate-200 dark:border-slate-800 bg-white dark:bg-slate-900 p-6 space-y-3">
                                <span class="text-3xl" aria-hidden="true">{feature.icon}</span>
                                <h2 class="text-lg font-semibold text-slate-900 dark:text-white">
                                    {feature.title}
                                </h2>
                                <p class="text-sm text-slate-600 dark:text-slate-400">
                                    {feature.description}
                                </p>
                            </div>
                        }
                    })
                    .collect_view()}
            </section>

            <section class="max-w-3xl mx-auto py-12 text-center space-y-4">
                <h2 class="text-2xl font-bold text-slate-900 dark:text-white">
                    "Free while you build the habit"
                </h2>
                <p class="text-slate-600 dark:text-slate-400">
                    "Every plan starts free. Upgrade when your study group does: " <b>"$4/mo"</b>
                    " per seat, cancel anytime."
                </p>
                <A
                    href="/auth?tab=signup"
                    {..}
                    class="inline-block px-6 py-3 rounded-xl bg-emerald-600 hover:bg-emerald-700 text-white font-semibold transition-all"
                >
                    "Create your account"
                </A>
            </section>
        </AppShell>
    }
}
