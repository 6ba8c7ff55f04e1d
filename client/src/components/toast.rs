//! Transient-notification (toast) area rendered by the layout shell.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use leptos::prelude::*;

/// Queue of transient messages. Provided as a context by `App`; any component
/// can push into it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastState {
    pub messages: Vec<String>,
}

impl ToastState {
    pub fn push(&mut self, message: impl Into<String>) {
        self.messages.push(message.into());
    }

    pub fn dismiss(&mut self, index: usize) {
        if index < self.messages.len() {
            self.messages.remove(index);
        }
    }
}

#[component]
pub fn ToastArea() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toast-area" aria-live="polite">
            {move || {
                toasts
                    .get()
                    .messages
                    .into_iter()
                    .enumerate()
                    .map(|(index, message)| {
                        view! {
                            <div class="toast">
                                <span class="toast__message">{message}</span>
                                <button
                                    class="toast__dismiss"
                                    on:click=move |_| toasts.update(|state| state.dismiss(index))
                                >
                                    "×"
                                </button>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
