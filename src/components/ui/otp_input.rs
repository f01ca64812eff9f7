//! Six-slot one-time-code input. The slots render from an `OtpBuffer` signal;
//! all digit/backspace/paste semantics live in the buffer so the component
//! stays a thin binding between DOM events and state.

use crate::features::auth::otp::{OTP_LEN, OtpBuffer};
use leptos::html::Input;
use leptos::prelude::*;

#[component]
pub fn OtpInput(buffer: RwSignal<OtpBuffer>) -> impl IntoView {
    let refs: [NodeRef<Input>; OTP_LEN] = std::array::from_fn(|_| NodeRef::new());

    // Keep focus on the active slot as the buffer moves its cursor.
    Effect::new(move |_| {
        let cursor = buffer.with(|buffer| buffer.cursor());
        if let Some(input) = refs[cursor].get() {
            let _ = input.focus();
        }
    });

    let on_paste = move |event: web_sys::ClipboardEvent| {
        let Some(data) = event.clipboard_data() else {
            return;
        };
        let Ok(text) = data.get_data("text") else {
            return;
        };
        event.prevent_default();
        buffer.update(|buffer| buffer.paste(&text));
    };

    view! {
        <div class="flex justify-between gap-2" on:paste=on_paste>
            {(0..OTP_LEN)
                .map(|index| {
                    let node_ref = refs[index];
                    view! {
                        <input
                            node_ref=node_ref
                            type="text"
                            inputmode="numeric"
                            maxlength="1"
                            autocomplete="one-time-code"
                            aria-label=format!("Digit {}", index + 1)
                            class="w-12 h-12 text-center border border-slate-300 dark:border-emerald-800/50 rounded-lg text-lg bg-slate-50 dark:bg-slate-800/90 text-slate-900 dark:text-emerald-100 focus:outline-none focus:ring-2 focus:ring-emerald-500"
                            prop:value=move || {
                                buffer
                                    .with(|buffer| {
                                        buffer.digit(index).map(String::from).unwrap_or_default()
                                    })
                            }
                            on:input=move |event| {
                                let value = event_target_value(&event);
                                match value.chars().find(|input| input.is_ascii_digit()) {
                                    Some(digit) => {
                                        buffer.update(|buffer| buffer.set_digit(index, digit));
                                    }
                                    None => {
                                        // Rejected input: restore the slot's rendered value.
                                        if let Some(input) = node_ref.get_untracked() {
                                            let current = buffer
                                                .with_untracked(|buffer| {
                                                    buffer
                                                        .digit(index)
                                                        .map(String::from)
                                                        .unwrap_or_default()
                                                });
                                            input.set_value(&current);
                                        }
                                    }
                                }
                            }
                            on:keydown=move |event| {
                                if event.key() == "Backspace" {
                                    event.prevent_default();
                                    buffer.update(|buffer| buffer.backspace(index));
                                }
                            }
                        />
                    }
                })
                .collect_view()}
        </div>
    }
}
