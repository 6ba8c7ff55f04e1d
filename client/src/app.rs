//! Root application component with routing, context providers, and the
//! layout shell.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` provides the cross-cutting contexts (auth state, toast queue) and
//! wraps every routed page in `AppShell`, which decides whether the
//! navigation header renders. Header rendering is driven by the explicit
//! three-state `AuthStatus` so it never depends on provider ordering.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::header::Header;
use crate::components::toast::{ToastArea, ToastState};
use crate::pages::{home::HomePage, not_found::NotFoundPage};
use crate::state::auth::{AuthState, shows_header};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the auth and toast contexts and sets up client-side routing.
/// Pages render immediately while the header waits for a known auth status.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    let toasts = RwSignal::new(ToastState::default());
    provide_context(auth);
    provide_context(toasts);

    // Resolve the current user once on the client. Server-rendered output
    // stays in the unresolved state, which keeps the header suppressed.
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let user = crate::net::api::fetch_current_user().await;
        auth.update(|state| state.resolve(user));
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/scoresnap.css"/>
        <Title text="ScoreSnap"/>

        <Router>
            <AppShell>
                <Routes fallback=NotFoundPage>
                    <Route path=StaticSegment("") view=HomePage/>
                </Routes>
            </AppShell>
        </Router>
    }
}

/// Layout shell: navigation header gated on resolved auth, the routed page
/// content, and the transient-notification area.
#[component]
pub fn AppShell(children: Children) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    view! {
        <Show when=move || shows_header(auth.get().status())>
            <Header/>
        </Show>
        <main class="app-shell__content">{children()}</main>
        <ToastArea/>
    }
}
