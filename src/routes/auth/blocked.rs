//! Lockout panel shown while an identity is blocked. A single one-second
//! timer drives the countdown and fires the unlock transition; it is torn
//! down on cleanup so no orphaned timer can call back into a disposed flow.

use crate::features::auth::{
    flow::AuthFlow,
    lockout::{Countdown, LockoutTimer, format_remaining},
    rate_limit::{Clock, LOCKOUT_WINDOW_MS, SystemClock},
};
use leptos::prelude::*;

#[component]
pub fn LoginBlocked(flow: AuthFlow, email: String, blocked_until: u64) -> impl IntoView {
    let countdown = Countdown::new(blocked_until, LOCKOUT_WINDOW_MS);
    let (remaining, set_remaining) = signal(countdown.remaining_ms(SystemClock.now_ms()));

    let timer = LockoutTimer::start(
        countdown,
        move |remaining_ms| set_remaining.set(remaining_ms),
        move || flow.unlocked(),
    );
    let timer = StoredValue::new_local(Some(timer));
    on_cleanup(move || {
        if let Some(mut stored) = timer.try_write_value() {
            stored.take();
        }
    });

    let percent = move || countdown.progress_percent(remaining.get());

    view! {
        <div class="w-full max-w-md mx-auto bg-gradient-to-r from-red-600 to-red-500 text-white p-5 rounded-2xl text-center shadow-lg border border-red-700">
            <h2 class="font-semibold text-lg mb-1">
                "Login Temporarily Locked"
            </h2>

            <p class="text-sm">
                "Too many failed login attempts for " <strong class="underline">{email}</strong> "."
            </p>

            <p class="mt-2 text-base font-medium text-amber-200">
                "You can try again in "
                <strong>{move || format_remaining(remaining.get())}</strong> "."
            </p>

            <div class="relative w-full bg-red-800 h-2 mt-4 rounded-full overflow-hidden">
                <div
                    class="absolute top-0 left-0 h-full bg-amber-400 transition-all duration-1000 ease-linear"
                    style:width=move || format!("{:.0}%", percent())
                ></div>
            </div>
        </div>
    }
}
