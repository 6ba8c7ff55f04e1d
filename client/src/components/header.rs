//! Navigation header, shown once a signed-in user is known.

use leptos::prelude::*;

use crate::state::auth::AuthState;

#[component]
pub fn Header() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    let user_name = move || auth.get().user.map(|user| user.name).unwrap_or_default();

    let on_sign_out = move |_| {
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                crate::net::api::logout().await;
                auth.update(AuthState::sign_out);
                if let Some(window) = web_sys::window() {
                    let _ = window.location().set_href("/");
                }
            });
        }
    };

    view! {
        <header class="app-header">
            <a class="app-header__brand" href="/">
                "ScoreSnap"
            </a>
            <span class="app-header__spacer"></span>
            <span class="app-header__user">{user_name}</span>
            <button class="btn app-header__sign-out" on:click=on_sign_out>
                "Sign out"
            </button>
        </header>
    }
}
