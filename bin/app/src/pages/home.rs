//! Home page component.

use leptos::prelude::*;

use crate::session::{self, SessionState};

/// The post-login home page.
///
/// A persisted identity marker counts as an authenticated session; no
/// expiry check is applied client-side.
#[component]
pub fn HomePage() -> impl IntoView {
    let session_state: SessionState = expect_context();
    let has_marker = session::stored_identity_marker().is_some();

    view! {
        <div class="home-page">
            {move || {
                if session_state.is_logged_in() || has_marker {
                    view! {
                        <div>
                            <h1>"Welcome to Mini-CRM"</h1>
                            <p>"Seamlessly foster deeper connections with your customers."</p>
                        </div>
                    }
                        .into_any()
                } else {
                    view! {
                        <div>
                            <h1>"Mini-CRM"</h1>
                            <p>"Please log in to access your workspace."</p>
                            <a href="/" class="cta-button">"Log in"</a>
                        </div>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}
