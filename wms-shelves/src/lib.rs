//! Core model and refresh logic for the warehouse -> shelf dependent dropdown.
//!
//! This crate provides:
//! - `shelf`: the remote shelf records and the warehouse selection value
//! - `select`: what gets rendered into the shelf control
//! - `endpoint`: the shelves-by-warehouse URL
//! - `config`: page-level configuration (element ids, URL, failure display)
//! - `refresher`: the refresh operation and the traits it drives
//!
//! Nothing here touches the DOM; `wms-stock-ui` supplies the browser
//! implementations of the control and source traits.

pub mod config;
pub mod endpoint;
pub mod error;
pub mod refresher;
pub mod select;
pub mod shelf;

#[cfg(feature = "api")]
pub mod api;

pub use error::{ConfigError, ShelfError};
pub use refresher::{RefreshOutcome, ShelfControl, ShelfRefresher, ShelfSource, WarehouseControl};
pub use select::{FailureDisplay, SelectEntry, ShelfSelectState};
pub use shelf::{ShelfOption, WarehouseSelection};
