//! Network URL constants for the order dashboard backend.

/// Default REST API base URL (orders + posts).
pub const DEFAULT_API_URL: &str = "http://localhost:5000";

/// Default auth service base URL.
pub const DEFAULT_AUTH_URL: &str = "http://localhost:5000";

/// Environment variable overriding [`DEFAULT_API_URL`].
pub const API_URL_ENV: &str = "ORDER_DASHBOARD_API_URL";

/// Environment variable overriding [`DEFAULT_AUTH_URL`].
pub const AUTH_URL_ENV: &str = "ORDER_DASHBOARD_AUTH_URL";

/// Environment variable for the request timeout, in whole seconds.
pub const TIMEOUT_SECS_ENV: &str = "ORDER_DASHBOARD_TIMEOUT_SECS";
