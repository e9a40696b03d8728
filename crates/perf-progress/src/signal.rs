//! One-shot completion handshake between a driving loop and its reporter.

use tokio::sync::oneshot;

/// Marks the end of a driving loop.
///
/// Consumed by [`CompletionSignal::complete`], so it can be delivered at most
/// once. Dropping it without completing (for example when the loop bails out
/// with an error) also releases the reporter.
#[derive(Debug)]
pub struct CompletionSignal {
    tx: oneshot::Sender<()>,
}

impl CompletionSignal {
    pub(crate) fn channel() -> (Self, oneshot::Receiver<()>) {
        let (tx, rx) = oneshot::channel();
        (Self { tx }, rx)
    }

    /// Tell the reporter the loop is finished. Never blocks.
    pub fn complete(self) {
        // The reporter may already be gone; nothing to do in that case.
        let _ = self.tx.send(());
    }
}
