//! Simulated compass implementing [`HeadingSensor`].
//!
//! Each subscription spawns a task that sweeps the heading around the dial
//! at a fixed rate until the handle is cancelled or dropped.

use std::time::Duration;

use tokio::sync::{oneshot, watch};

use mihrab_app::heading::HeadingSubscription;
use mihrab_app::ports::HeadingSensor;
use mihrab_domain::error::MihrabError;
use mihrab_domain::geo::normalize_degrees;

/// A virtual compass that sweeps through [0, 360) in fixed steps.
pub struct VirtualHeadingSensor {
    step_degrees: f64,
    interval: Duration,
}

impl Default for VirtualHeadingSensor {
    fn default() -> Self {
        Self {
            step_degrees: 5.0,
            interval: Duration::from_millis(100),
        }
    }
}

impl VirtualHeadingSensor {
    /// Create a sensor sweeping `step_degrees` per tick at the given interval.
    #[must_use]
    pub fn new(step_degrees: f64, interval: Duration) -> Self {
        Self {
            step_degrees,
            interval,
        }
    }
}

impl HeadingSensor for VirtualHeadingSensor {
    fn subscribe(&self) -> Result<HeadingSubscription, MihrabError> {
        let (reading_tx, reading_rx) = watch::channel(None);
        let (cancel_tx, mut cancel_rx) = oneshot::channel();
        let step = self.step_degrees;
        let interval = self.interval;

        tokio::spawn(async move {
            let mut heading = 0.0;
            let mut ticker = tokio::time::interval(interval);
            loop {
                tokio::select! {
                    _ = &mut cancel_rx => break,
                    _ = ticker.tick() => {
                        if reading_tx.send(Some(heading)).is_err() {
                            // Subscriber went away without cancelling.
                            break;
                        }
                        heading = normalize_degrees(heading + step);
                    }
                }
            }
        });

        Ok(HeadingSubscription::new(reading_rx, cancel_tx))
    }
}
