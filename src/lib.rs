//! Transcript download-format menu for video players.
//!
//! The host application renders the download menu and owns the real
//! browser facilities; this crate holds the behavior: remember the format
//! the user picked, tell the state-save endpoint about it, then send the
//! document to the download URL. Storage, HTTP, element lookup, and
//! navigation are injected as narrow capabilities so the component runs
//! the same way inside a webview bridge or a headless test.

pub mod dom;
pub mod http;
pub mod menu;
pub mod store;

pub use dom::{ElementFinder, Location, Navigator, SelectorSet};
pub use http::{HttpClient, HttpError, ReqwestClient};
pub use menu::{
    ClickEvent, MenuConfig, TranscriptFormatMenu, DOWNLOAD_FORMAT_KEY,
    DOWNLOAD_WRAPPER_SELECTOR, MENU_ITEM_SELECTOR, TRANSCRIPT_LIST_SELECTOR,
};
pub use store::{KeyValueStore, MemoryStore};
