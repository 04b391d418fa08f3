//! Diagnostics sink for storage failures.
//!
//! The persistence layer never raises to its caller; every decode or store
//! failure becomes a [`DiagnosticEvent`] delivered here instead. The default
//! sink logs through `tracing`; tests use [`BufferSink`] to assert on the
//! exact events emitted.

use std::sync::Mutex;

/// What went wrong.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// The backing store could not be read.
    ReadFailed,
    /// Stored text was present but not decodable as the expected shape.
    DecodeFailed,
    /// The backing store rejected a write; the prior persisted value is
    /// unchanged and memory and disk now diverge.
    WriteFailed,
    /// The backing store rejected a delete.
    RemoveFailed,
    /// A persisted cart entry failed validation and was dropped.
    LineDropped,
}

/// A single storage failure report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticEvent {
    /// Storage key the failure relates to.
    pub key: String,
    pub kind: DiagnosticKind,
    /// Human-readable failure detail.
    pub detail: String,
}

impl DiagnosticEvent {
    #[must_use]
    pub fn new(key: impl Into<String>, kind: DiagnosticKind, detail: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            kind,
            detail: detail.into(),
        }
    }
}

/// Receiver for storage failure reports.
pub trait DiagnosticsSink: Send + Sync {
    fn report(&self, event: DiagnosticEvent);
}

/// Sink that logs every event as a `tracing` warning.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticsSink for TracingSink {
    fn report(&self, event: DiagnosticEvent) {
        tracing::warn!(
            key = %event.key,
            kind = ?event.kind,
            detail = %event.detail,
            "storage diagnostic"
        );
    }
}

/// Sink that records events in memory for assertions.
#[derive(Debug, Default)]
pub struct BufferSink {
    events: Mutex<Vec<DiagnosticEvent>>,
}

impl BufferSink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all events reported so far.
    ///
    /// # Panics
    ///
    /// Panics if a previous holder of the buffer lock panicked.
    #[must_use]
    pub fn events(&self) -> Vec<DiagnosticEvent> {
        self.events.lock().expect("diagnostics buffer poisoned").clone()
    }

    /// Number of events of the given kind reported so far.
    ///
    /// # Panics
    ///
    /// Panics if a previous holder of the buffer lock panicked.
    #[must_use]
    pub fn count_of(&self, kind: DiagnosticKind) -> usize {
        self.events
            .lock()
            .expect("diagnostics buffer poisoned")
            .iter()
            .filter(|e| e.kind == kind)
            .count()
    }
}

impl DiagnosticsSink for BufferSink {
    fn report(&self, event: DiagnosticEvent) {
        self.events.lock().expect("diagnostics buffer poisoned").push(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_sink_records_in_order() {
        let sink = BufferSink::new();
        sink.report(DiagnosticEvent::new("cart", DiagnosticKind::DecodeFailed, "bad json"));
        sink.report(DiagnosticEvent::new("cart", DiagnosticKind::WriteFailed, "store full"));

        let events = sink.events();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].kind, DiagnosticKind::DecodeFailed);
        assert_eq!(events[1].kind, DiagnosticKind::WriteFailed);
        assert_eq!(sink.count_of(DiagnosticKind::WriteFailed), 1);
    }
}
