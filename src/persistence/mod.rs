//! High score persistence
//!
//! A single integer behind a narrow trait. An unavailable or corrupt store
//! reads as "no high score recorded" and writes are silently skipped - the
//! player never sees a persistence failure.

/// Key-value storage for the best score
pub trait ScoreStore {
    /// Persisted high score; 0 when absent or unreadable
    fn get(&self) -> u32;
    /// Persist a new high score; failures are swallowed by the impl
    fn set(&mut self, score: u32);
}

/// In-memory store for tests and headless runs
#[derive(Debug, Default)]
pub struct MemoryStore {
    score: u32,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_score(score: u32) -> Self {
        Self { score }
    }
}

impl ScoreStore for MemoryStore {
    fn get(&self) -> u32 {
        self.score
    }

    fn set(&mut self, score: u32) {
        self.score = score;
    }
}

#[cfg(target_arch = "wasm32")]
pub use local_storage::LocalStorageStore;

#[cfg(target_arch = "wasm32")]
mod local_storage {
    use super::ScoreStore;

    /// LocalStorage key
    const STORAGE_KEY: &str = "sky_hopper_highscore";

    /// Browser LocalStorage-backed store
    #[derive(Debug, Default)]
    pub struct LocalStorageStore;

    impl LocalStorageStore {
        pub fn new() -> Self {
            Self
        }

        fn storage() -> Option<web_sys::Storage> {
            web_sys::window().and_then(|w| w.local_storage().ok()).flatten()
        }
    }

    impl ScoreStore for LocalStorageStore {
        fn get(&self) -> u32 {
            let Some(storage) = Self::storage() else {
                log::warn!("LocalStorage unavailable, high score starts at 0");
                return 0;
            };
            match storage.get_item(STORAGE_KEY) {
                Ok(Some(raw)) => raw.parse().unwrap_or_else(|_| {
                    log::warn!("unreadable high score entry {raw:?}, treating as 0");
                    0
                }),
                _ => 0,
            }
        }

        fn set(&mut self, score: u32) {
            let Some(storage) = Self::storage() else {
                log::warn!("LocalStorage unavailable, high score write skipped");
                return;
            };
            if storage.set_item(STORAGE_KEY, &score.to_string()).is_err() {
                log::warn!("high score write failed");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_roundtrip() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get(), 0);
        store.set(12);
        assert_eq!(store.get(), 12);
    }

    #[test]
    fn test_memory_store_seeded() {
        assert_eq!(MemoryStore::with_score(7).get(), 7);
    }
}
