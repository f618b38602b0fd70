//! Session context and hooks for the UI.

use api::{ApiClient, User};
use dioxus::prelude::*;

use crate::components::Alert;

/// Who is signed in, as far as this tab knows.
///
/// Filled in by a successful verification and cleared by logout. The server
/// session cookie stays authoritative; this is only what the views display.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    pub user: Option<User>,
}

/// Get the current session state.
/// Returns a signal that updates when the user verifies or logs out.
pub fn use_session() -> Signal<SessionState> {
    use_context::<Signal<SessionState>>()
}

/// Get the shared API client.
pub fn use_api() -> ApiClient {
    use_context::<ApiClient>()
}

/// Provider component that owns the API client and the session state.
/// Wrap your app with this component.
#[component]
pub fn SessionProvider(children: Element) -> Element {
    let session = use_signal(SessionState::default);
    use_context_provider(|| session);

    // Built on first render and kept for the lifetime of the app, so the
    // branch below takes the same side on every render.
    let client = use_hook(ApiClient::from_env);

    match client {
        Ok(client) => {
            use_context_provider(|| client);
            rsx! {
                {children}
            }
        }
        Err(e) => {
            tracing::error!("failed to build API client: {}", e);
            rsx! {
                div {
                    class: "page-center",
                    Alert { message: format!("Could not start the application: {e}") }
                }
            }
        }
    }
}
