//! # Order Dashboard
//!
//! The data pipeline behind the order-management dashboard, for native and
//! WASM front ends.
//!
//! ## Architecture
//!
//! The crate is organized in layers:
//!
//! 1. **Core**: Domain types, wire types, validated conversions (always available)
//! 2. **Auth**: Bearer token, persistent token storage, injected credential provider
//! 3. **HTTP API**: `DashboardHttp` + `DashboardClient` sub-clients (resource client)
//! 4. **View**: `RequestController`, the per-view request state machine
//! 5. **Present**: Pure view-model projections of entities and request state
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use order_dashboard::prelude::*;
//!
//! let client = DashboardClient::builder()
//!     .base_url("http://localhost:5000")
//!     .build()?;
//!
//! let view = orders_view(&client, Some(OrderFilter::new().with_status(OrderStatus::Ready)));
//! view.refresh().await;
//! let panel = orders_panel(&view.snapshot());
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared newtypes, serde helpers and display formatting.
pub mod shared;

/// Domain modules (vertical slices): types, wire types, conversions, sub-clients.
pub mod domain;

/// Unified error types.
pub mod error;

/// Network URL constants.
pub mod network;

// ── Layer 2: Auth ────────────────────────────────────────────────────────────

/// Authentication: bearer token, credential storage, logout.
pub mod auth;

// ── Layer 3: HTTP API ────────────────────────────────────────────────────────

/// HTTP client with classified failures and opt-in retry.
#[cfg(feature = "http")]
pub mod http;

/// `DashboardClient`: the primary entry point.
#[cfg(feature = "http")]
pub mod client;

// ── Layer 4: View ────────────────────────────────────────────────────────────

/// Request state machine and ready-made view controllers.
pub mod view;

// ── Layer 5: Present ─────────────────────────────────────────────────────────

/// View models and state rendering.
pub mod present;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared newtypes
    pub use crate::shared::UserId;

    // Domain types
    pub use crate::domain::order::{Order, OrderFilter, OrderItem, OrderStatus};
    pub use crate::domain::post::Post;

    // Errors
    pub use crate::error::{ConfigError, FetchError, FetchErrorKind, StorageError};

    // Network
    pub use crate::network::{DEFAULT_API_URL, DEFAULT_AUTH_URL};

    // Auth
    pub use crate::auth::{AuthToken, Credentials, FileTokenStorage, MemoryTokenStorage, TokenStorage};
    #[cfg(all(target_arch = "wasm32", feature = "wasm"))]
    pub use crate::auth::LocalStorageTokenStorage;

    // HTTP client + sub-clients
    #[cfg(feature = "http")]
    pub use crate::client::{
        AuthClient, DashboardClient, DashboardClientBuilder, OrdersClient, PostsClient,
    };
    #[cfg(feature = "http")]
    pub use crate::http::retry::{RetryConfig, RetryPolicy};

    // View layer
    pub use crate::view::{Failure, Phase, RefreshOutcome, RequestController, RequestState};
    #[cfg(feature = "http")]
    pub use crate::view::views::{order_detail_view, orders_view, post_search_view, user_posts_view};

    // Presentation
    pub use crate::present::{
        order_detail_panel, orders_panel, posts_panel, renderable_of, renderable_of_post,
        DetailPanel, ListPanel, OrderViewModel, PostViewModel,
    };
}
