use std::collections::HashSet;
use std::sync::{Mutex, MutexGuard};

use crate::storage::KeyValueStorage;

pub const BOOKMARKS_KEY: &str = "bookmarkedJobs";

/// Bookmarked job ids. Insertion order is kept so the persisted array is
/// stable across toggles of other ids.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookmarkSet {
    order: Vec<String>,
    index: HashSet<String>,
}

impl BookmarkSet {
    /// Duplicates keep their first position.
    pub fn from_ids<I>(ids: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut set = Self::default();
        for id in ids {
            if set.index.insert(id.clone()) {
                set.order.push(id);
            }
        }
        set
    }

    pub fn contains(&self, job_id: &str) -> bool {
        self.index.contains(job_id)
    }

    /// Returns whether `job_id` is bookmarked afterwards.
    pub fn toggle(&mut self, job_id: &str) -> bool {
        if self.index.remove(job_id) {
            self.order.retain(|id| id != job_id);
            false
        } else {
            self.index.insert(job_id.to_string());
            self.order.push(job_id.to_string());
            true
        }
    }

    pub fn ids(&self) -> &[String] {
        &self.order
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

/// Owns the bookmark set and writes it through to `storage` on every toggle.
#[derive(Debug)]
pub struct BookmarkStore<S: KeyValueStorage> {
    storage: S,
    state: Mutex<BookmarkSet>,
}

impl<S: KeyValueStorage> BookmarkStore<S> {
    /// Never fails: unreadable or corrupt storage gives an empty set.
    pub fn initialize(storage: S) -> Self {
        let set = load(&storage);
        tracing::info!("Bookmark store initialized with {} bookmarks", set.len());
        Self {
            storage,
            state: Mutex::new(set),
        }
    }

    pub fn is_bookmarked(&self, job_id: &str) -> bool {
        self.lock().contains(job_id)
    }

    /// Flip membership of `job_id` and persist the full set. The lock is held
    /// across the write so concurrent toggles cannot drop each other.
    pub fn toggle_bookmark(&self, job_id: &str) -> bool {
        let mut state = self.lock();
        let bookmarked = state.toggle(job_id);
        self.persist(&state);
        tracing::debug!("Toggled bookmark {job_id}: now {bookmarked}");
        bookmarked
    }

    /// Replace in-memory state with whatever storage holds now.
    pub fn resync(&self) {
        let mut state = self.lock();
        *state = load(&self.storage);
        tracing::debug!("Resynced bookmarks: {} ids", state.len());
    }

    pub fn bookmarked_ids(&self) -> Vec<String> {
        self.lock().ids().to_vec()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    fn lock(&self) -> MutexGuard<'_, BookmarkSet> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn persist(&self, set: &BookmarkSet) {
        let serialized = match serde_json::to_string(set.ids()) {
            Ok(s) => s,
            Err(e) => {
                tracing::warn!("Failed to serialize bookmarks: {e}");
                return;
            }
        };
        if let Err(e) = self.storage.set(BOOKMARKS_KEY, &serialized) {
            tracing::warn!("Failed to persist bookmarks: {e}");
        }
    }
}

fn load<S: KeyValueStorage>(storage: &S) -> BookmarkSet {
    let raw = match storage.get(BOOKMARKS_KEY) {
        Ok(Some(raw)) if !raw.trim().is_empty() => raw,
        Ok(_) => return BookmarkSet::default(),
        Err(e) => {
            tracing::error!("Failed to read bookmarks: {e}");
            return BookmarkSet::default();
        }
    };
    match serde_json::from_str::<Vec<String>>(&raw) {
        Ok(ids) => BookmarkSet::from_ids(ids),
        Err(e) => {
            tracing::error!("Failed to parse bookmarks: {e}");
            BookmarkSet::default()
        }
    }
}
