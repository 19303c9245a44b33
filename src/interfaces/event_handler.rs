// ============================================================================
// Event Handler Interface
// Defines the contract for observing external storage resolution
// ============================================================================

use chrono::{DateTime, Utc};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Events emitted by the external registry
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ResolverEvent {
    /// First resolution of a name allocated new storage
    ExternalAllocated {
        name: String,
        size: usize,
        timestamp: DateTime<Utc>,
    },

    /// Resolution returned existing storage
    ExternalShared {
        name: String,
        size: usize,
        timestamp: DateTime<Utc>,
    },

    /// Resolution rejected because the size disagrees with the existing entry
    ExternalConflict {
        name: String,
        existing: usize,
        requested: usize,
        timestamp: DateTime<Utc>,
    },
}

impl ResolverEvent {
    /// External name the event concerns
    pub fn name(&self) -> &str {
        match self {
            ResolverEvent::ExternalAllocated { name, .. }
            | ResolverEvent::ExternalShared { name, .. }
            | ResolverEvent::ExternalConflict { name, .. } => name,
        }
    }
}

/// Event handler trait for processing registry events
/// Implementations can handle logging, auditing, diagnostics, etc.
pub trait EventHandler: Send + Sync {
    /// Handle a resolver event
    fn on_event(&self, event: ResolverEvent);
}

/// No-op event handler, the registry default
pub struct NoOpEventHandler;

impl EventHandler for NoOpEventHandler {
    fn on_event(&self, _event: ResolverEvent) {}
}

/// Logging event handler
pub struct LoggingEventHandler;

impl EventHandler for LoggingEventHandler {
    fn on_event(&self, event: ResolverEvent) {
        tracing::debug!(external = event.name(), "External registry event: {:?}", event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;
    use std::sync::Arc;

    #[derive(Default)]
    struct RecordingHandler {
        names: Mutex<Vec<String>>,
    }

    impl EventHandler for RecordingHandler {
        fn on_event(&self, event: ResolverEvent) {
            self.names.lock().push(event.name().to_string());
        }
    }

    fn sample_events() -> Vec<ResolverEvent> {
        let timestamp = Utc::now();
        vec![
            ResolverEvent::ExternalAllocated {
                name: "FIRST".to_string(),
                size: 10,
                timestamp,
            },
            ResolverEvent::ExternalShared {
                name: "SECOND".to_string(),
                size: 10,
                timestamp,
            },
            ResolverEvent::ExternalConflict {
                name: "THIRD".to_string(),
                existing: 10,
                requested: 20,
                timestamp,
            },
        ]
    }

    #[test]
    fn test_event_name_for_every_variant() {
        let events = sample_events();
        let names: Vec<&str> = events.iter().map(ResolverEvent::name).collect();
        assert_eq!(names, vec!["FIRST", "SECOND", "THIRD"]);
    }

    #[test]
    fn test_handler_receives_events_through_trait_object() {
        let recorder = Arc::new(RecordingHandler::default());
        let handler: Arc<dyn EventHandler> = recorder.clone();

        for event in sample_events() {
            handler.on_event(event);
        }

        assert_eq!(
            *recorder.names.lock(),
            vec!["FIRST".to_string(), "SECOND".to_string(), "THIRD".to_string()]
        );
    }
}
