//! Transcript download-format menu.
//!
//! Mirrors the video player's accessible download menu: a list of
//! `.btn-link` items inside `.list-download-transcripts`, each carrying a
//! `data-value` format token and an `href` download URL. The host renders
//! the menu and delegates clicks on its items; the widget persists the
//! chosen format, notifies the state-save endpoint, and then navigates to
//! the download URL itself.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::dom::{ElementFinder, Navigator};
use crate::http::HttpClient;
use crate::store::KeyValueStore;

/// Storage key and wire field for the persisted format token.
pub const DOWNLOAD_FORMAT_KEY: &str = "transcript_download_format";

/// Subtree that must exist in the container for the widget to initialize.
pub const DOWNLOAD_WRAPPER_SELECTOR: &str = ".wrapper-downloads .wrapper-download-transcripts";
/// List the click handling is delegated through.
pub const TRANSCRIPT_LIST_SELECTOR: &str = ".list-download-transcripts";
/// Link-style option elements inside the list that clicks are scoped to.
pub const MENU_ITEM_SELECTOR: &str = ".btn-link";

/// Capabilities and endpoint the menu needs from its host.
pub struct MenuConfig {
    pub storage: Arc<dyn KeyValueStore>,
    pub http: Arc<dyn HttpClient>,
    pub navigator: Arc<dyn Navigator>,
    /// Endpoint notified of format changes.
    pub save_state_url: String,
}

/// A click on one menu item, as reported by the host.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClickEvent {
    /// `data-value` attribute of the clicked item: the format token.
    pub data_value: Option<String>,
    /// `href` attribute of the clicked item: the download URL.
    pub href: Option<String>,
    #[serde(skip)]
    default_prevented: bool,
}

impl ClickEvent {
    pub fn new(data_value: Option<String>, href: Option<String>) -> Self {
        Self {
            data_value,
            href,
            default_prevented: false,
        }
    }

    /// Suppress the host's native link navigation for this click.
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

pub struct TranscriptFormatMenu {
    config: MenuConfig,
    bound: bool,
    value: Option<String>,
}

impl TranscriptFormatMenu {
    /// Builds the menu against `container`.
    ///
    /// Always succeeds: a container without the transcript-download subtree
    /// yields an inert widget that ignores every event.
    pub fn new(container: &dyn ElementFinder, config: MenuConfig) -> Self {
        let mut menu = Self {
            config,
            bound: false,
            value: None,
        };
        if container.contains(DOWNLOAD_WRAPPER_SELECTOR) {
            menu.initialize(container);
        }
        menu
    }

    fn initialize(&mut self, container: &dyn ElementFinder) {
        // May be absent; no default is substituted until the user picks.
        self.value = self.config.storage.get(DOWNLOAD_FORMAT_KEY);
        // Clicks are delegated through the list; without it there is
        // nothing to bind to.
        self.bound = container.contains(TRANSCRIPT_LIST_SELECTOR);
        if self.bound {
            info!(
                "Transcript download menu bound, last format: {:?}",
                self.value
            );
        }
    }

    /// Whether a click handler is attached.
    pub fn is_bound(&self) -> bool {
        self.bound
    }

    /// Format token read from storage at initialization, if any.
    pub fn last_format(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Entry point for clicks the host delegates from the menu list.
    pub async fn handle_click(&self, event: &mut ClickEvent) {
        if !self.bound {
            return;
        }
        // The widget navigates itself once persistence has completed.
        event.prevent_default();
        self.change_file_type(event).await;
    }

    async fn change_file_type(&self, event: &ClickEvent) {
        let (Some(file_type), Some(url)) = (event.data_value.as_deref(), event.href.as_deref())
        else {
            debug!("Menu item missing data-value or href, ignoring click");
            return;
        };

        // Persist before the network call so the preference survives a
        // failed or slow request.
        self.config.storage.set(DOWNLOAD_FORMAT_KEY, file_type);

        let mut body = serde_json::Map::new();
        body.insert(DOWNLOAD_FORMAT_KEY.to_owned(), Value::from(file_type));

        if let Err(e) = self
            .config
            .http
            .post_json(&self.config.save_state_url, Value::Object(body))
            .await
        {
            // Best-effort sync; the download proceeds regardless.
            warn!("Failed to save transcript format: {}", e);
        }

        self.config.navigator.assign(url);
    }
}
