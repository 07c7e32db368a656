// ABOUTME: Sleep-history store seam with an in-memory reference implementation
// ABOUTME: Newest-first append-only log capped at 100 entries with FIFO eviction
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Somnia Sleep Intelligence

use tracing::debug;
use uuid::Uuid;

use crate::errors::AppResult;
use crate::models::{NewSleepEntry, SleepEntry};

/// Maximum number of history entries retained; older entries are evicted first
pub const MAX_HISTORY_ENTRIES: usize = 100;

/// Storage seam for sleep history.
///
/// The ordering contract is newest-first: `load` returns the most recent
/// entry at index 0, `append` prepends and evicts from the tail once the cap
/// is reached. The persistence medium (device storage, cloud document store)
/// is the implementer's concern.
pub trait HistoryStore {
    /// Load the full history, newest first, at most [`MAX_HISTORY_ENTRIES`].
    ///
    /// # Errors
    /// Propagates storage-medium failures from the implementation.
    fn load(&self) -> AppResult<Vec<SleepEntry>>;

    /// Validate, assign an identifier, and prepend a new entry, evicting the
    /// oldest entry beyond the retention cap.
    ///
    /// # Errors
    /// Returns `ValueOutOfRange` when the entry violates its creation-time
    /// invariants, or a storage-medium failure from the implementation.
    fn append(&mut self, entry: NewSleepEntry) -> AppResult<SleepEntry>;

    /// Remove all entries.
    ///
    /// # Errors
    /// Propagates storage-medium failures from the implementation.
    fn clear(&mut self) -> AppResult<()>;
}

/// In-memory history store, the reference implementation used by tests and
/// by callers that persist elsewhere.
#[derive(Debug, Clone, Default)]
pub struct InMemoryHistory {
    entries: Vec<SleepEntry>,
}

impl InMemoryHistory {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of retained entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the store holds no entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl HistoryStore for InMemoryHistory {
    fn load(&self) -> AppResult<Vec<SleepEntry>> {
        Ok(self.entries.clone())
    }

    fn append(&mut self, entry: NewSleepEntry) -> AppResult<SleepEntry> {
        entry.validate()?;
        let entry = entry.into_entry(Uuid::new_v4());
        self.entries.insert(0, entry.clone());
        self.entries.truncate(MAX_HISTORY_ENTRIES);
        debug!(
            entry_id = %entry.id,
            retained = self.entries.len(),
            "appended sleep entry"
        );
        Ok(entry)
    }

    fn clear(&mut self) -> AppResult<()> {
        self.entries.clear();
        Ok(())
    }
}
