// Timer driven producer behind the messageStream subscription.
//
// Every subscription gets its own task, channel and tick counter. The task
// emits `ticks` timestamped values, `interval` apart, then drops its sender
// so the consumer sees the end of the stream.

use crate::modules::messages::core::stream_state::{StreamState, advance};
use chrono::{DateTime, Local, TimeZone};
use std::fmt::Display;
use std::pin::Pin;
use std::task::{Context, Poll};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio_stream::Stream;
use tokio_stream::wrappers::ReceiverStream;
use tokio_util::sync::{CancellationToken, DropGuard};

pub const DEFAULT_TICKS: u32 = 5;
pub const DEFAULT_INTERVAL_MS: u64 = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreamSettings {
    pub ticks: u32,
    pub interval: Duration,
}

impl Default for StreamSettings {
    fn default() -> Self {
        Self {
            ticks: DEFAULT_TICKS,
            interval: Duration::from_millis(DEFAULT_INTERVAL_MS),
        }
    }
}

pub fn stream_message<Tz: TimeZone>(at: &DateTime<Tz>) -> String
where
    Tz::Offset: Display,
{
    format!("Message {}", at.format("%Y-%m-%d %H:%M:%S%.9f %:z"))
}

/// Values of a single subscription. Dropping it stops the producer.
pub struct MessageStream {
    inner: ReceiverStream<String>,
    _cancel_on_drop: DropGuard,
}

impl Stream for MessageStream {
    type Item = String;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<String>> {
        Pin::new(&mut self.inner).poll_next(cx)
    }
}

#[derive(Clone)]
pub struct MessageStreamProducer {
    settings: StreamSettings,
    shutdown: CancellationToken,
}

impl MessageStreamProducer {
    pub fn new(settings: StreamSettings, shutdown: CancellationToken) -> Self {
        Self { settings, shutdown }
    }

    pub fn start(&self) -> MessageStream {
        let cancel = self.shutdown.child_token();
        let (tx, rx) = mpsc::channel(1);
        tokio::spawn(run(self.settings, tx, cancel.clone()));
        MessageStream {
            inner: ReceiverStream::new(rx),
            _cancel_on_drop: cancel.drop_guard(),
        }
    }
}

async fn run(settings: StreamSettings, tx: mpsc::Sender<String>, cancel: CancellationToken) {
    let mut state = advance(StreamState::Idle, settings.ticks);
    while let StreamState::Emitting { tick } = state {
        let message = stream_message(&Local::now());
        tokio::select! {
            _ = cancel.cancelled() => break,
            sent = tx.send(message) => {
                if sent.is_err() {
                    break;
                }
            }
        }
        tracing::debug!(tick, "stream value delivered");

        state = advance(state, settings.ticks);
        if state == StreamState::Closed {
            break;
        }
        tokio::select! {
            _ = cancel.cancelled() => break,
            _ = tokio::time::sleep(settings.interval) => {}
        }
    }
    tracing::debug!(cancelled = cancel.is_cancelled(), "message stream closed");
}
