//! Ready-made controllers for the dashboard's views.
//!
//! Each controller captures a clone of the client; the client is stateless
//! apart from the shared credential provider, so any number of views can
//! fetch concurrently.

use super::controller::{FetchFuture, RequestController};
use crate::client::DashboardClient;
use crate::domain::order::{Order, OrderFilter};
use crate::domain::post::Post;
use crate::shared::UserId;

/// Orders list, optionally filtered (the dashboard uses `status=ready`).
pub fn orders_view(
    client: &DashboardClient,
    filter: Option<OrderFilter>,
) -> RequestController<Vec<Order>> {
    let client = client.clone();
    RequestController::new(move || {
        let client = client.clone();
        let filter = filter.clone();
        Box::pin(async move { client.orders().list(filter.as_ref()).await }) as FetchFuture<_>
    })
}

/// Single order detail.
pub fn order_detail_view(client: &DashboardClient, id: u64) -> RequestController<Order> {
    let client = client.clone();
    RequestController::new(move || {
        let client = client.clone();
        Box::pin(async move { client.orders().get(id).await }) as FetchFuture<_>
    })
}

/// A user's posts. Requires a stored credential.
pub fn user_posts_view(client: &DashboardClient, user_id: UserId) -> RequestController<Vec<Post>> {
    let client = client.clone();
    RequestController::new(move || {
        let client = client.clone();
        let user_id = user_id.clone();
        Box::pin(async move { client.posts().list_for_user(&user_id).await }) as FetchFuture<_>
    })
}

/// Post search results. Requires a stored credential.
pub fn post_search_view(client: &DashboardClient, query: String) -> RequestController<Vec<Post>> {
    let client = client.clone();
    RequestController::new(move || {
        let client = client.clone();
        let query = query.clone();
        Box::pin(async move { client.posts().search(&query).await }) as FetchFuture<_>
    })
}
