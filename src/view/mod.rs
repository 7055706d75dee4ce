//! View layer: per-view request state and the controller that drives it.

pub mod controller;
pub mod state;

#[cfg(feature = "http")]
pub mod views;

pub use controller::{FetchFuture, RefreshOutcome, RequestController, SubscriptionId};
pub use state::{Failure, Phase, RequestState};
