use dashmap::DashMap;

/// Client-side key-value persistence, `localStorage`-shaped.
///
/// Externally synchronized; concurrent writers get last-write-wins.
pub trait KeyValueStore: Send + Sync {
    /// Value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str);
}

/// In-memory store for hosts without a real persistence backend.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: DashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).map(|v| v.clone())
    }

    fn set(&self, key: &str, value: &str) {
        self.entries.insert(key.to_owned(), value.to_owned());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_key_is_none() {
        let store = MemoryStore::new();
        assert_eq!(store.get("transcript_download_format"), None);
    }

    #[test]
    fn test_set_overwrites() {
        let store = MemoryStore::new();
        store.set("transcript_download_format", "srt");
        store.set("transcript_download_format", "txt");
        assert_eq!(
            store.get("transcript_download_format").as_deref(),
            Some("txt")
        );
    }
}
