//! DOM-backed implementations of the modal's seams.

use crate::config::FavoritesConfig;
use crate::controller::FavoriteController;
use crate::dismiss::{ContentRegion, ListenerHandle};
use crate::notice::{Notice, Notifier};
use anyhow::{Context, Result};
use leptos::html;
use leptos::prelude::*;
use std::rc::Rc;
use turbo_auth::StoredCredentials;
use turbo_cache::LocalStorage;
use wasm_bindgen::JsCast;

/// Shows notices with `window.alert`.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlertNotifier;

impl Notifier for AlertNotifier {
    fn notify(&self, notice: Notice, message: &str) {
        let Some(window) = web_sys::window() else {
            tracing::warn!(?notice, "no window to alert on");
            return;
        };
        if let Err(e) = window.alert_with_message(message) {
            tracing::warn!(?notice, error = ?e, "alert failed");
        }
    }
}

/// The mounted `.modal-content` element.
#[derive(Clone, Copy)]
pub struct DomRegion {
    content: NodeRef<html::Div>,
}

impl DomRegion {
    pub fn new(content: NodeRef<html::Div>) -> Self {
        Self { content }
    }
}

impl ContentRegion for DomRegion {
    type Target = web_sys::EventTarget;

    fn contains(&self, target: &web_sys::EventTarget) -> Option<bool> {
        let content = self.content.get_untracked()?;
        // Targets that are not nodes (the window itself) count as outside.
        let inside = target
            .dyn_ref::<web_sys::Node>()
            .is_some_and(|node| content.contains(Some(node)));
        Some(inside)
    }
}

impl ListenerHandle for WindowListenerHandle {
    fn remove(self) {
        WindowListenerHandle::remove(self);
    }
}

/// Controller wired to `localStorage` credentials, `alert` notices and the
/// configured backend.
pub fn browser_controller(config: &FavoritesConfig) -> Result<FavoriteController> {
    let store = LocalStorage::open().context("Failed to open localStorage")?;
    let credentials = StoredCredentials::with_key(store, config.token_key.clone());
    let controller =
        FavoriteController::from_config(config, Rc::new(credentials), Rc::new(AlertNotifier))
            .context("Failed to build favorites client")?;
    Ok(controller)
}
