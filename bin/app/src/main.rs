//! Browser client for Mini-CRM.
//!
//! A client-side-rendered Leptos application. Authentication lives entirely
//! on the remote AuthService; this binary renders the login screen, tracks
//! the client-side session markers, and routes to the home view.

#![allow(non_snake_case)]

mod app;
mod pages;
mod session;

use app::App;
use leptos::prelude::*;
use minicrm_auth_client::{AuthClient, AuthConfig, ReqwestTransport};

fn main() {
    console_error_panic_hook::set_once();

    let transport = ReqwestTransport::new().expect("failed to construct HTTP client");
    let client = AuthClient::new(AuthConfig::from_build_env(), transport);

    leptos::mount::mount_to_body(move || view! { <App client=client/> });
}
