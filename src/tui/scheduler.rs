//! Delayed delivery of computer turns.

use noughts_engine::ComputerTurn;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, instrument};

/// Delivers [`ComputerTurn`] tickets after a fixed pause.
///
/// Only one turn is pending at a time; scheduling replaces the previous one.
pub struct ComputerScheduler {
    delay: Duration,
    tx: mpsc::UnboundedSender<ComputerTurn>,
    pending: Option<JoinHandle<()>>,
}

impl ComputerScheduler {
    /// Creates a scheduler and the receiver its tickets arrive on.
    pub fn new(delay: Duration) -> (Self, mpsc::UnboundedReceiver<ComputerTurn>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (
            Self {
                delay,
                tx,
                pending: None,
            },
            rx,
        )
    }

    /// Sends `turn` after the delay.
    #[instrument(skip(self), fields(delay_ms = self.delay.as_millis() as u64))]
    pub fn schedule(&mut self, turn: ComputerTurn) {
        self.cancel();
        let tx = self.tx.clone();
        let delay = self.delay;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            // Receiver gone means the UI is shutting down.
            let _ = tx.send(turn);
        }));
    }

    /// Drops the pending turn, if any.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            debug!("Cancelling pending computer turn");
            handle.abort();
        }
    }
}

impl Drop for ComputerScheduler {
    fn drop(&mut self) {
        self.cancel();
    }
}
