//! HTTP request handlers.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod decorate;
pub mod health;
pub mod items;
pub mod single;

pub use decorate::decorate_handler;
pub use health::health_handler;
pub use items::{item_content_handler, item_handler, list_items_handler};
pub use single::single_view_handler;
