//! Presentation adapter: pure mappings from domain entities and request
//! state to render-ready view data. No network or mutable state access.

pub mod order;
pub mod panel;
pub mod post;

pub use order::{renderable_of, OrderItemRow, OrderViewModel};
pub use panel::{order_detail_panel, orders_panel, posts_panel, DetailPanel, ListPanel};
pub use post::{renderable_of_post, PostViewModel};
