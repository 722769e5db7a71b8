use parking_lot::Mutex;
use std::collections::HashSet;
use tracing::info;

/// Read-only view of the host container's element tree.
pub trait ElementFinder {
    /// True when the container holds a subtree matching `selector`.
    fn contains(&self, selector: &str) -> bool;
}

/// Headless `ElementFinder` backed by the set of selectors the host reports
/// as present.
#[derive(Debug, Clone, Default)]
pub struct SelectorSet {
    selectors: HashSet<String>,
}

impl SelectorSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, selector: &str) {
        self.selectors.insert(selector.to_owned());
    }
}

impl<S: Into<String>> FromIterator<S> for SelectorSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            selectors: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl ElementFinder for SelectorSet {
    fn contains(&self, selector: &str) -> bool {
        self.selectors.contains(selector)
    }
}

/// Browser navigation primitive: move the current document to a URL.
pub trait Navigator: Send + Sync {
    fn assign(&self, url: &str);
}

/// In-process stand-in for `document.location`.
#[derive(Debug, Default)]
pub struct Location {
    href: Mutex<Option<String>>,
}

impl Location {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current href, if any navigation has happened.
    pub fn href(&self) -> Option<String> {
        self.href.lock().clone()
    }
}

impl Navigator for Location {
    fn assign(&self, url: &str) {
        info!("Navigating to {}", url);
        *self.href.lock() = Some(url.to_owned());
    }
}
