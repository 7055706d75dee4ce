//! Request state → what a card/list view shows.

use super::order::{renderable_of, OrderViewModel};
use super::post::{renderable_of_post, PostViewModel};
use crate::domain::order::Order;
use crate::domain::post::Post;
use crate::view::state::RequestState;

pub const LOADING_TEXT: &str = "Loading ...";
pub const NO_ORDERS_TEXT: &str = "No Orders";
pub const NO_POSTS_TEXT: &str = "No Posts";

/// Rendering of a list view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListPanel<V> {
    /// Nothing requested yet; render nothing.
    Idle,
    Loading,
    /// Fetch succeeded with no entries.
    Empty(&'static str),
    Cards(Vec<V>),
    Error(String),
}

impl<V> ListPanel<V> {
    fn from_state<T>(
        state: &RequestState<Vec<T>>,
        empty_text: &'static str,
        render: impl Fn(&T) -> V,
    ) -> Self {
        match state {
            RequestState::Idle => ListPanel::Idle,
            RequestState::Loading => ListPanel::Loading,
            RequestState::Success(items) if items.is_empty() => ListPanel::Empty(empty_text),
            RequestState::Success(items) => ListPanel::Cards(items.iter().map(render).collect()),
            RequestState::Failure(f) => ListPanel::Error(f.message.clone()),
        }
    }

    /// Card title text, when the panel shows one instead of cards.
    pub fn headline(&self) -> Option<&str> {
        match self {
            ListPanel::Loading => Some(LOADING_TEXT),
            ListPanel::Empty(text) => Some(*text),
            ListPanel::Error(message) => Some(message.as_str()),
            ListPanel::Idle | ListPanel::Cards(_) => None,
        }
    }
}

/// Rendering of a single-entity view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailPanel<V> {
    Idle,
    Loading,
    Ready(V),
    Error(String),
}

pub fn orders_panel(state: &RequestState<Vec<Order>>) -> ListPanel<OrderViewModel> {
    ListPanel::from_state(state, NO_ORDERS_TEXT, renderable_of)
}

pub fn posts_panel(state: &RequestState<Vec<Post>>) -> ListPanel<PostViewModel> {
    ListPanel::from_state(state, NO_POSTS_TEXT, renderable_of_post)
}

pub fn order_detail_panel(state: &RequestState<Order>) -> DetailPanel<OrderViewModel> {
    match state {
        RequestState::Idle => DetailPanel::Idle,
        RequestState::Loading => DetailPanel::Loading,
        RequestState::Success(order) => DetailPanel::Ready(renderable_of(order)),
        RequestState::Failure(f) => DetailPanel::Error(f.message.clone()),
    }
}
