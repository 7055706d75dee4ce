//! Orders sub-client: list and fetch orders.

use crate::client::DashboardClient;
use crate::domain::order::wire::OrderResponse;
use crate::domain::order::{Order, OrderFilter};
use crate::error::FetchError;

pub struct Orders<'a> {
    pub(crate) client: &'a DashboardClient,
}

impl<'a> Orders<'a> {
    /// `GET /api/orders[?status=..&user_id=..]`, in backend order.
    pub async fn list(&self, filter: Option<&OrderFilter>) -> Result<Vec<Order>, FetchError> {
        let query = filter.map(OrderFilter::query_string).unwrap_or_default();
        let url = format!("{}/api/orders{}", self.client.http.base_url(), query);

        let resp: Vec<OrderResponse> = self.client.http.get(&url, None).await?;

        resp.into_iter()
            .map(|o| Order::try_from(o).map_err(FetchError::from))
            .collect()
    }

    /// `GET /api/orders/{id}`. A backend 404 surfaces as `FetchError::NotFound`.
    pub async fn get(&self, id: u64) -> Result<Order, FetchError> {
        let url = format!("{}/api/orders/{}", self.client.http.base_url(), id);
        let resp: OrderResponse = self.client.http.get(&url, None).await?;
        Ok(Order::try_from(resp)?)
    }
}
