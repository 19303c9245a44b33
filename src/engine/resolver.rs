// ============================================================================
// External Registry
// Name-keyed shared storage, resolved once per name for the life of a run
// ============================================================================

use crate::domain::ExternalBuffer;
use crate::errors::{DataError, DataResult};
use crate::interfaces::{EventHandler, NoOpEventHandler, ResolverEvent};
use chrono::Utc;
use crossbeam_skiplist::SkipMap;
use std::fmt;
use std::sync::Arc;

/// Registry of external data items.
///
/// Every declaration that names the same external item at the same size
/// receives the same [`ExternalBuffer`], like a linker-resolved common block.
/// Entries are never evicted.
///
/// The map is a lock-free skip list and insertion is insert-if-absent, so
/// concurrent first resolutions of one name agree on a single buffer.
pub struct ExternalRegistry {
    /// SkipMap keyed by external name
    entries: SkipMap<String, ExternalBuffer>,

    /// Event handler for allocation, sharing and conflict events
    event_handler: Arc<dyn EventHandler>,
}

impl ExternalRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::with_event_handler(Arc::new(NoOpEventHandler))
    }

    /// Create an empty registry that reports to `event_handler`
    pub fn with_event_handler(event_handler: Arc<dyn EventHandler>) -> Self {
        Self {
            entries: SkipMap::new(),
            event_handler,
        }
    }

    /// Resolve `name` to its shared buffer of exactly `size` bytes.
    ///
    /// The first call for a name allocates a zeroed buffer. Later calls with
    /// the same size return that same buffer.
    ///
    /// # Errors
    /// - `InvalidExternalSize` if `size` is zero
    /// - `ExternalFormatConflict` if the name exists with another size; the
    ///   existing entry is left untouched
    pub fn resolve(&self, name: &str, size: usize) -> DataResult<ExternalBuffer> {
        self.resolve_entry(name, size, |_| {}).map(|(buffer, _)| buffer)
    }

    /// Like [`resolve`](Self::resolve), also reporting whether this call
    /// allocated the buffer.
    ///
    /// `seed` initializes a freshly allocated buffer before it is published,
    /// so no other resolution of `name` can observe it unseeded. It is not
    /// called when the name already exists.
    pub(crate) fn resolve_entry(
        &self,
        name: &str,
        size: usize,
        seed: impl FnOnce(&ExternalBuffer),
    ) -> DataResult<(ExternalBuffer, bool)> {
        if size == 0 {
            return Err(DataError::InvalidExternalSize {
                name: name.to_string(),
            });
        }

        if let Some(entry) = self.entries.get(name) {
            let existing = entry.value().clone();
            return self.share(existing, size).map(|buffer| (buffer, false));
        }

        let fresh = ExternalBuffer::allocate(name, size);
        seed(&fresh);
        let entry = self.entries.get_or_insert(name.to_string(), fresh.clone());
        let existing = entry.value().clone();

        if existing.ptr_eq(&fresh) {
            tracing::debug!(external = name, size, "allocated external storage");
            self.event_handler.on_event(ResolverEvent::ExternalAllocated {
                name: name.to_string(),
                size,
                timestamp: Utc::now(),
            });
            Ok((existing, true))
        } else {
            // Lost an insertion race; the winner's buffer is authoritative
            self.share(existing, size).map(|buffer| (buffer, false))
        }
    }

    /// Check whether `name` has been resolved
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Size of the storage recorded for `name`
    pub fn size_of(&self, name: &str) -> Option<usize> {
        self.entries.get(name).map(|entry| entry.value().size())
    }

    /// Number of distinct external names resolved so far
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Resolved names in sorted order
    pub fn names(&self) -> Vec<String> {
        self.entries.iter().map(|entry| entry.key().clone()).collect()
    }

    // ========================================================================
    // Private methods
    // ========================================================================

    fn share(&self, existing: ExternalBuffer, size: usize) -> DataResult<ExternalBuffer> {
        if existing.size() == size {
            tracing::trace!(external = existing.name(), size, "shared external storage");
            self.event_handler.on_event(ResolverEvent::ExternalShared {
                name: existing.name().to_string(),
                size,
                timestamp: Utc::now(),
            });
            return Ok(existing);
        }

        tracing::warn!(
            external = existing.name(),
            existing = existing.size(),
            requested = size,
            "external format conflict"
        );
        self.event_handler.on_event(ResolverEvent::ExternalConflict {
            name: existing.name().to_string(),
            existing: existing.size(),
            requested: size,
            timestamp: Utc::now(),
        });
        Err(DataError::ExternalFormatConflict {
            name: existing.name().to_string(),
            existing: existing.size(),
            requested: size,
        })
    }
}

impl Default for ExternalRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ExternalRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExternalRegistry")
            .field("names", &self.names())
            .finish()
    }
}
