//! Home page — venue map lookup backed by the static-map proxy route.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;

use crate::components::toast::ToastState;
use crate::net::urls::static_map_url;

fn map_lookup_failed_message(address: &str) -> String {
    format!("Could not load a map for \"{address}\"")
}

#[component]
pub fn HomePage() -> impl IntoView {
    let address = RwSignal::new(String::new());
    let toasts = expect_context::<RwSignal<ToastState>>();

    let map_src = move || {
        let value = address.get();
        let trimmed = value.trim();
        static_map_url((!trimmed.is_empty()).then_some(trimmed), None, None)
    };

    view! {
        <div class="home-page">
            <h1>"ScoreSnap"</h1>
            <p class="home-page__tagline">"Track your rounds. See where you played."</p>
            <label class="home-page__lookup">
                "Venue address"
                <input
                    type="text"
                    placeholder="1600 Amphitheatre Pkwy"
                    prop:value=move || address.get()
                    on:input=move |ev| address.set(event_target_value(&ev))
                />
            </label>
            <Show when=move || map_src().is_some()>
                <img
                    class="home-page__map"
                    src=move || map_src().unwrap_or_default()
                    alt="Venue map"
                    on:error=move |_| {
                        let failed = address.get();
                        toasts.update(|state| state.push(map_lookup_failed_message(failed.trim())));
                    }
                />
            </Show>
        </div>
    }
}
