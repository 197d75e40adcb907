//! In-process plumbing between the host shell and the runtime.
//!
//! All inputs, whether pushed by the host or produced by user interaction,
//! land on one unbounded queue and are consumed in arrival order by a single
//! [`crate::Runtime`]. Outbound commands go the other way on their own
//! unbounded channel; sending never waits for the host.

use ballot_proto::{
    PublishVote,
    channels::{ON_PUBLISH_VOTE, PING},
};
use tokio::sync::mpsc;

use crate::AppEvent;

/// Create a connected host handle and event queue.
pub fn event_queue() -> (HostHandle, EventQueue) {
    let (tx, rx) = mpsc::unbounded_channel();
    (HostHandle { tx }, EventQueue { rx })
}

/// Create the outbound command channel.
pub fn command_channel() -> (mpsc::UnboundedSender<HostCommand>, mpsc::UnboundedReceiver<HostCommand>)
{
    mpsc::unbounded_channel()
}

/// Commands the widget sends to the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostCommand {
    /// Ask for both snapshots.
    Ping,
    /// Cast a vote.
    PublishVote(PublishVote),
}

impl HostCommand {
    /// Wire name of the command.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Ping => PING,
            Self::PublishVote(_) => ON_PUBLISH_VOTE,
        }
    }
}

/// Producer side of the event queue.
///
/// Cheap to clone; the host listeners and the input source each hold one.
/// Sends fail only after the runtime has gone away, and return `false` then.
#[derive(Debug, Clone)]
pub struct HostHandle {
    tx: mpsc::UnboundedSender<AppEvent>,
}

impl HostHandle {
    /// Push an arbitrary event.
    pub fn send(&self, event: AppEvent) -> bool {
        self.tx.send(event).is_ok()
    }

    /// Push a payload as if the host emitted it on `channel`.
    pub fn emit(&self, channel: &str, payload: impl Into<Vec<u8>>) -> bool {
        self.send(AppEvent::host(channel, payload))
    }

    /// Toggle a candidate by name.
    pub fn toggle(&self, name: impl Into<String>) -> bool {
        self.send(AppEvent::toggle(name))
    }

    /// Press the vote button.
    pub fn submit(&self) -> bool {
        self.send(AppEvent::Submit)
    }

    /// Ask the runtime to stop.
    pub fn quit(&self) -> bool {
        self.send(AppEvent::Quit)
    }

    /// Whether the runtime side has been dropped.
    pub fn is_closed(&self) -> bool {
        self.tx.is_closed()
    }
}

/// Consumer side of the event queue.
#[derive(Debug)]
pub struct EventQueue {
    rx: mpsc::UnboundedReceiver<AppEvent>,
}

impl EventQueue {
    /// Wait for at least one event, then take everything already queued.
    ///
    /// Returns `None` once every [`HostHandle`] is dropped and the queue is
    /// drained.
    pub async fn next_batch(&mut self) -> Option<Vec<AppEvent>> {
        let first = self.rx.recv().await?;
        let mut batch = vec![first];
        while let Ok(event) = self.rx.try_recv() {
            batch.push(event);
        }
        Some(batch)
    }

    /// Take everything already queued without waiting.
    pub fn drain(&mut self) -> Vec<AppEvent> {
        let mut batch = Vec::new();
        while let Ok(event) = self.rx.try_recv() {
            batch.push(event);
        }
        batch
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn batches_preserve_arrival_order() {
        let (host, mut queue) = event_queue();
        host.emit("get_votes", r#"{"votes":[]}"#);
        host.toggle("Go");
        host.submit();
        host.toggle("Go");

        let batch = queue.next_batch().await.unwrap();
        assert_eq!(
            batch,
            vec![
                AppEvent::host("get_votes", r#"{"votes":[]}"#),
                AppEvent::toggle("Go"),
                AppEvent::Submit,
                AppEvent::toggle("Go"),
            ]
        );
    }

    #[tokio::test]
    async fn queue_ends_when_handles_drop() {
        let (host, mut queue) = event_queue();
        let second = host.clone();
        host.quit();
        drop(host);
        drop(second);

        assert_eq!(queue.next_batch().await, Some(vec![AppEvent::Quit]));
        assert_eq!(queue.next_batch().await, None);
    }

    #[test]
    fn send_after_queue_dropped_reports_failure() {
        let (host, queue) = event_queue();
        drop(queue);
        assert!(host.is_closed());
        assert!(!host.submit());
    }

    #[test]
    fn command_names_match_host_commands() {
        assert_eq!(HostCommand::Ping.name(), "ping");
        assert_eq!(HostCommand::PublishVote(PublishVote { name: "Go".into() }).name(), "on_publish_vote");
    }
}
