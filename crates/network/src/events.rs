//! Progress notifications published by façade workflows.

use std::fmt;
use tokio::sync::mpsc;
use tracing::trace;

/// Where an event sits in a long-running workflow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProgressIndication {
    #[default]
    None,
    Start,
    Update,
    Finish,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub message: String,
    pub progress: ProgressIndication,
}

impl Event {
    pub fn new(message: impl Into<String>, progress: ProgressIndication) -> Self {
        Self {
            message: message.into(),
            progress,
        }
    }

    /// True while the workflow that sent it is still running
    pub fn in_progress(&self) -> bool {
        matches!(
            self.progress,
            ProgressIndication::Start | ProgressIndication::Update
        )
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Output channel for progress events.
///
/// `send` must return promptly; correctness never depends on delivery.
pub trait EventSink: Send + Sync {
    fn send(&self, event: Event);
}

/// Discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

impl EventSink for NoopSink {
    fn send(&self, _event: Event) {}
}

/// Unbounded channel sink; events sent after the receiver is dropped are discarded.
#[derive(Debug, Clone)]
pub struct EventBus {
    tx: mpsc::UnboundedSender<Event>,
}

impl EventBus {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<Event>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

impl EventSink for EventBus {
    fn send(&self, event: Event) {
        if let Err(err) = self.tx.send(event) {
            trace!(event = %err.0, "event dropped, receiver closed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn bus_delivers_in_order() {
        let (bus, mut rx) = EventBus::new();
        bus.send(Event::new("start", ProgressIndication::Start));
        bus.send(Event::new("done", ProgressIndication::Finish));

        let first = rx.recv().await.unwrap();
        assert_eq!(first.message, "start");
        assert!(first.in_progress());
        let second = rx.recv().await.unwrap();
        assert_eq!(second.progress, ProgressIndication::Finish);
        assert!(!second.in_progress());
    }

    #[test]
    fn send_after_receiver_dropped_does_not_block() {
        let (bus, rx) = EventBus::new();
        drop(rx);
        bus.send(Event::new("lost", ProgressIndication::None));
        NoopSink.send(Event::new("ignored", ProgressIndication::None));
    }
}
