//! Cancellable compass-heading subscription handle.
//!
//! A subscription is an explicit owned handle: a watch receiver for the
//! latest reading plus a `cancel` operation that tells the producing task to
//! stop. Dropping the handle cancels too.

use tokio::sync::{oneshot, watch};

/// The latest compass heading in degrees [0, 360), or `None` while the
/// sensor has not produced a reading. Absence is distinct from 0.
pub type HeadingReading = Option<f64>;

/// An active heading subscription owned by the caller that created it.
pub struct HeadingSubscription {
    receiver: watch::Receiver<HeadingReading>,
    cancel: Option<oneshot::Sender<()>>,
}

impl HeadingSubscription {
    /// Wrap a watch receiver and a cancel signal into a handle.
    ///
    /// The sensor adapter keeps the `watch::Sender` and listens on the
    /// `oneshot::Receiver` to know when to stop producing.
    #[must_use]
    pub fn new(receiver: watch::Receiver<HeadingReading>, cancel: oneshot::Sender<()>) -> Self {
        Self {
            receiver,
            cancel: Some(cancel),
        }
    }

    /// The most recent reading, without waiting.
    #[must_use]
    pub fn latest(&self) -> HeadingReading {
        *self.receiver.borrow()
    }

    /// Wait for the next reading. Returns `None` once the sensor side has
    /// gone away (cancelled or dropped).
    pub async fn next_reading(&mut self) -> Option<HeadingReading> {
        self.receiver.changed().await.ok()?;
        Some(*self.receiver.borrow_and_update())
    }

    /// Stop the producing task. Idempotent.
    pub fn cancel(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            // The sensor may already have stopped; nothing to do then.
            let _ = cancel.send(());
        }
    }
}

impl Drop for HeadingSubscription {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn should_expose_latest_reading() {
        let (tx, rx) = watch::channel(None);
        let (cancel_tx, _cancel_rx) = oneshot::channel();
        let sub = HeadingSubscription::new(rx, cancel_tx);

        assert_eq!(sub.latest(), None);
        tx.send(Some(42.0)).unwrap();
        assert_eq!(sub.latest(), Some(42.0));
    }

    #[tokio::test]
    async fn should_deliver_next_reading() {
        let (tx, rx) = watch::channel(None);
        let (cancel_tx, _cancel_rx) = oneshot::channel();
        let mut sub = HeadingSubscription::new(rx, cancel_tx);

        tx.send(Some(180.0)).unwrap();
        assert_eq!(sub.next_reading().await, Some(Some(180.0)));
    }

    #[tokio::test]
    async fn should_end_stream_when_sensor_drops() {
        let (tx, rx) = watch::channel(Some(10.0));
        let (cancel_tx, _cancel_rx) = oneshot::channel();
        let mut sub = HeadingSubscription::new(rx, cancel_tx);

        drop(tx);
        assert_eq!(sub.next_reading().await, None);
    }

    #[tokio::test]
    async fn should_signal_cancel_to_sensor_side() {
        let (_tx, rx) = watch::channel(None);
        let (cancel_tx, mut cancel_rx) = oneshot::channel();
        let mut sub = HeadingSubscription::new(rx, cancel_tx);

        sub.cancel();
        assert!(cancel_rx.try_recv().is_ok());
        // A second cancel is a no-op.
        sub.cancel();
    }

    #[tokio::test]
    async fn should_cancel_on_drop() {
        let (_tx, rx) = watch::channel(None);
        let (cancel_tx, mut cancel_rx) = oneshot::channel();
        drop(HeadingSubscription::new(rx, cancel_tx));
        assert!(cancel_rx.try_recv().is_ok());
    }
}
