//! Main application component and routing.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};
use minicrm_auth_client::{AuthClient, ReqwestTransport};

use crate::pages::{HomePage, LoginScreen};
use crate::session::SessionState;

/// Post-login destination path.
pub const HOME_PATH: &str = "/home";

/// The main application component.
#[component]
pub fn App(client: AuthClient<ReqwestTransport>) -> impl IntoView {
    provide_meta_context();
    provide_context(client);
    provide_context(SessionState::new());

    view! {
        <Title text="Mini-CRM"/>
        <Router>
            <main class="container">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=path!("/") view=LoginScreen/>
                    <Route path=path!("/home") view=HomePage/>
                </Routes>
            </main>
        </Router>
    }
}
