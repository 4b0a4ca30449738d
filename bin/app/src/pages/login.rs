//! Login screen component.
//!
//! Collects credentials, calls the AuthService, and navigates to the home
//! view on success. On mount it probes the service for an already
//! authenticated session and adopts an identity marker carried in the page
//! URL after an OAuth redirect.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use leptos::ev::SubmitEvent;
use leptos::logging;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use minicrm_auth_client::flow::{self, MISSING_FIELDS_MESSAGE, TRANSPORT_FAILURE_MESSAGE};
use minicrm_auth_client::{AuthClient, Credentials, LoginOutcome, ReqwestTransport, StatusOutcome};

use crate::app::HOME_PATH;
use crate::session::{self, SessionState};

/// UI phase of the login screen.
///
/// One enumerated state instead of boolean flags, so overlapping async
/// completions cannot leave the form half-updated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LoginPhase {
    /// Waiting for input.
    Idle,
    /// A credential submission is in flight.
    Submitting,
    /// Authentication succeeded; navigation to home is underway.
    Redirecting,
}

/// The login screen.
#[component]
pub fn LoginScreen() -> impl IntoView {
    let client: AuthClient<ReqwestTransport> = expect_context();
    let session_state: SessionState = expect_context();
    let navigate = use_navigate();

    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (phase, set_phase) = signal(LoginPhase::Idle);

    // In-flight responses are not aborted on unmount; this flag turns any
    // late completion into a no-op instead of a write to a disposed signal.
    let alive = Arc::new(AtomicBool::new(true));
    on_cleanup({
        let alive = Arc::clone(&alive);
        move || alive.store(false, Ordering::Relaxed)
    });

    // Mount-time work: adopt a URL-carried marker, then probe the session.
    {
        let client = client.clone();
        let navigate = navigate.clone();
        let alive = Arc::clone(&alive);
        spawn_local(async move {
            // A marker delivered via the OAuth redirect wins; the status
            // path below only persists when nothing was adopted here.
            let adopted = session::take_marker_from_url();
            if let Some(marker) = &adopted {
                session::persist_identity_marker(marker);
            }

            match client.status().await.map(flow::status_outcome) {
                Ok(StatusOutcome::Authenticated { marker }) => {
                    if !alive.load(Ordering::Relaxed) {
                        return;
                    }
                    if adopted.is_none() {
                        if let Some(marker) = &marker {
                            session::persist_identity_marker(marker);
                        }
                    }
                    session_state.mark_logged_in();
                    set_phase.set(LoginPhase::Redirecting);
                    navigate(HOME_PATH, NavigateOptions::default());
                }
                Ok(StatusOutcome::Unauthenticated) => {}
                Err(err) => {
                    // The user simply stays on the form.
                    logging::error!("auth status check failed: {err}");
                }
            }
        });
    }

    let on_submit = {
        let client = client.clone();
        let navigate = navigate.clone();
        let alive = Arc::clone(&alive);
        move |ev: SubmitEvent| {
            ev.prevent_default();
            if phase.get_untracked() != LoginPhase::Idle {
                return;
            }
            set_error_message.set(None);

            let credentials =
                match Credentials::new(username.get_untracked(), password.get_untracked()) {
                    Ok(credentials) => credentials,
                    Err(_) => {
                        set_error_message.set(Some(MISSING_FIELDS_MESSAGE.to_string()));
                        return;
                    }
                };

            set_phase.set(LoginPhase::Submitting);
            let client = client.clone();
            let navigate = navigate.clone();
            let alive = Arc::clone(&alive);
            spawn_local(async move {
                let result = client.login(&credentials).await.map(flow::login_outcome);
                if !alive.load(Ordering::Relaxed) {
                    return;
                }
                match result {
                    Ok(LoginOutcome::Authenticated { marker }) => {
                        session::persist_identity_marker(&marker);
                        session_state.mark_logged_in();
                        set_phase.set(LoginPhase::Redirecting);
                        navigate(HOME_PATH, NavigateOptions::default());
                    }
                    Ok(LoginOutcome::Rejected { message }) => {
                        set_error_message.set(Some(message));
                        set_phase.set(LoginPhase::Idle);
                    }
                    Err(err) => {
                        logging::error!("login request failed: {err}");
                        set_error_message.set(Some(TRANSPORT_FAILURE_MESSAGE.to_string()));
                        set_phase.set(LoginPhase::Idle);
                    }
                }
            });
        }
    };

    // Full-page navigation; control leaves the application until the
    // provider redirects back.
    let on_google_login = move |_| {
        let Some(window) = web_sys::window() else {
            return;
        };
        if let Err(err) = window.location().set_href(&client.oauth_url()) {
            logging::error!("failed to start OAuth login: {err:?}");
        }
    };

    view! {
        <div class="login-page">
            <div class="login-container">
                <h1 class="title">"Welcome to Mini-CRM"</h1>
                <p class="subtitle">"Seamlessly foster deeper connections with your customers."</p>
                <div class="login-box">
                    <form class="login-form" on:submit=on_submit>
                        <div class="form-group">
                            <input
                                type="text"
                                placeholder="Username"
                                class="login-input"
                                prop:value=username
                                on:input=move |ev| set_username.set(event_target_value(&ev))
                            />
                        </div>
                        <div class="form-group">
                            <input
                                type="password"
                                placeholder="Password"
                                class="login-input"
                                prop:value=password
                                on:input=move |ev| set_password.set(event_target_value(&ev))
                            />
                        </div>
                        <button
                            type="submit"
                            class="login-btn"
                            disabled=move || phase.get() != LoginPhase::Idle
                        >
                            {move || {
                                if phase.get() == LoginPhase::Submitting {
                                    "Signing in..."
                                } else {
                                    "Login"
                                }
                            }}
                        </button>
                        {move || {
                            error_message
                                .get()
                                .map(|message| view! { <div class="error-message">{message}</div> })
                        }}
                    </form>

                    <button class="login-with-google-btn" on:click=on_google_login>
                        <span>"Login with Google"</span>
                    </button>
                </div>
            </div>
        </div>
    }
}
