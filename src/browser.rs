//! Browser Adapters
//!
//! localStorage-backed token storage, signal-backed screen state,
//! the native confirm dialog and History API helpers.

use leptos::prelude::*;
use wasm_bindgen::JsValue;

use crm_core::screens::{Confirm, StateCell};
use crm_core::TokenStorage;

/// Token persistence in `window.localStorage`
///
/// Storage may be unavailable (private mode, sandboxed iframe); reads then
/// behave as "no token" and writes are dropped with a warning.
pub struct LocalStorage;

impl LocalStorage {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl TokenStorage for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        let stored = Self::storage().map(|s| s.set_item(key, value).is_ok());
        if stored != Some(true) {
            log::warn!("storage: could not persist {}", key);
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(key);
        }
    }
}

/// Screen state held in a reactive signal
///
/// Screens write through `StateCell` untracked; views subscribe with `with`.
pub struct SignalCell<S: 'static>(ArcRwSignal<S>);

impl<S: Send + Sync + 'static> SignalCell<S> {
    pub fn new(value: S) -> Self {
        Self(ArcRwSignal::new(value))
    }

    pub fn signal(&self) -> ArcRwSignal<S> {
        self.0.clone()
    }

    /// Tracked read for use inside views
    pub fn with<R>(&self, f: impl FnOnce(&S) -> R) -> R {
        self.0.with(f)
    }
}

impl<S: Send + Sync + Default + 'static> Default for SignalCell<S> {
    fn default() -> Self {
        Self::new(S::default())
    }
}

impl<S: 'static> Clone for SignalCell<S> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<S: Send + Sync + 'static> StateCell<S> for SignalCell<S> {
    fn read<R>(&self, f: impl FnOnce(&S) -> R) -> R {
        self.0.with_untracked(f)
    }

    fn write(&self, f: impl FnOnce(&mut S)) {
        self.0.update(f);
    }
}

/// `window.confirm`; a missing window counts as "no"
pub struct BrowserConfirm;

impl Confirm for BrowserConfirm {
    fn confirm(&self, prompt: &str) -> bool {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(prompt).ok())
            .unwrap_or(false)
    }
}

pub fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

/// Push `path` onto the history stack unless it is already current
pub fn push_path(path: &str) {
    if current_path() == path {
        return;
    }
    let Some(history) = web_sys::window().and_then(|w| w.history().ok()) else {
        return;
    };
    if let Err(err) = history.push_state_with_url(&JsValue::NULL, "", Some(path)) {
        log::warn!("history: pushState to {} failed: {:?}", path, err);
    }
}

/// Swap the current history entry for `path`
pub fn replace_path(path: &str) {
    if current_path() == path {
        return;
    }
    let Some(history) = web_sys::window().and_then(|w| w.history().ok()) else {
        return;
    };
    if let Err(err) = history.replace_state_with_url(&JsValue::NULL, "", Some(path)) {
        log::warn!("history: replaceState to {} failed: {:?}", path, err);
    }
}

pub fn go_back() {
    if let Some(history) = web_sys::window().and_then(|w| w.history().ok()) {
        let _ = history.back();
    }
}
