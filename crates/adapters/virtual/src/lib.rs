//! # mihrab-adapter-virtual
//!
//! Virtual/demo adapter that provides simulated collaborators for testing
//! and demonstration purposes.
//!
//! ## Provided collaborators
//!
//! | Collaborator | Port | Behaviour |
//! |--------------|------|-----------|
//! | [`FixedLocationProvider`] | `LocationProvider` | Returns one configured position and place |
//! | [`VirtualHeadingSensor`] | `HeadingSensor` | Sweeps the compass at a fixed rate |
//!
//! ## Dependency rule
//!
//! Depends on `mihrab-app` (port traits) and `mihrab-domain` only.

mod heading;
mod location;

pub use heading::VirtualHeadingSensor;
pub use location::FixedLocationProvider;
