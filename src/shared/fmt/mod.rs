//! Display formatting for view models.

pub mod money;
pub mod time;

pub use money::{format_usd, group_thousands};
pub use time::format_timestamp;
