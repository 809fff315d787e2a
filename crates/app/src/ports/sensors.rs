//! Heading sensor port — cancellable compass subscriptions.

use mihrab_domain::error::MihrabError;

use crate::heading::HeadingSubscription;

/// A compass-heading source.
///
/// Each call to [`subscribe`](Self::subscribe) starts an independent stream
/// of readings; the returned handle owns the subscription and stops the
/// producer when cancelled or dropped.
pub trait HeadingSensor {
    /// Start a heading subscription.
    ///
    /// # Errors
    ///
    /// Returns an error when the sensor is unavailable.
    fn subscribe(&self) -> Result<HeadingSubscription, MihrabError>;
}
