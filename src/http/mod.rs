//! HTTP client layer: `DashboardHttp` with classified failures and opt-in retry.

pub mod client;
pub mod retry;

pub use client::DashboardHttp;
pub use retry::{RetryConfig, RetryPolicy};
