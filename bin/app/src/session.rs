//! Client-side session markers.
//!
//! The rest of the application treats a persisted identity marker as proof
//! of an authenticated session; no expiry or revocation check happens here.
//! The marker arrives either from the AuthService (status check or login
//! response) or as a query parameter on the page URL after an OAuth
//! redirect.

use leptos::logging;
use leptos::prelude::*;
use minicrm_auth_client::IdentityMarker;
use wasm_bindgen::JsValue;

use crate::app::HOME_PATH;

/// localStorage key under which the identity marker is persisted.
const MARKER_STORAGE_KEY: &str = "googleId";

/// Query parameter that may carry an identity marker on initial load.
const MARKER_QUERY_PARAM: &str = "googleId";

/// Signals "logged in" to the rest of the application.
///
/// Provided as context by [`App`](crate::app::App). This component never
/// clears it; there is no logout surface here.
#[derive(Debug, Clone, Copy)]
pub struct SessionState {
    logged_in: RwSignal<bool>,
}

impl SessionState {
    /// Creates the session state, initially logged out.
    #[must_use]
    pub fn new() -> Self {
        Self {
            logged_in: RwSignal::new(false),
        }
    }

    /// Marks the session as logged in.
    pub fn mark_logged_in(&self) {
        self.logged_in.set(true);
    }

    /// Returns whether a login happened in this page's lifetime.
    ///
    /// Reactive when called inside a tracking context.
    #[must_use]
    pub fn is_logged_in(&self) -> bool {
        self.logged_in.get()
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

/// Persists the identity marker so it survives page reloads.
pub fn persist_identity_marker(marker: &IdentityMarker) {
    let Some(storage) = local_storage() else {
        logging::error!("localStorage unavailable; identity marker not persisted");
        return;
    };
    if let Err(err) = storage.set_item(MARKER_STORAGE_KEY, marker.as_str()) {
        logging::error!("failed to persist identity marker: {err:?}");
    }
}

/// Returns the persisted identity marker, if any.
#[must_use]
pub fn stored_identity_marker() -> Option<IdentityMarker> {
    local_storage()?
        .get_item(MARKER_STORAGE_KEY)
        .ok()
        .flatten()
        .map(IdentityMarker::new)
}

/// Takes an identity marker carried in the page URL.
///
/// When the `googleId` query parameter is present, returns its value and
/// rewrites the visible URL to the home path without a reload. Returns
/// `None` when the parameter is absent or empty.
pub fn take_marker_from_url() -> Option<IdentityMarker> {
    let window = web_sys::window()?;
    let search = window.location().search().ok()?;
    if search.is_empty() {
        return None;
    }
    let params = web_sys::UrlSearchParams::new_with_str(&search).ok()?;
    let marker = params.get(MARKER_QUERY_PARAM).filter(|m| !m.is_empty())?;

    match window.history() {
        Ok(history) => {
            if let Err(err) = history.replace_state_with_url(&JsValue::NULL, "", Some(HOME_PATH)) {
                logging::warn!("failed to strip marker from URL: {err:?}");
            }
        }
        Err(err) => {
            logging::warn!("history API unavailable: {err:?}");
        }
    }

    Some(IdentityMarker::new(marker))
}

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}
