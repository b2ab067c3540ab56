// client/src/lib.rs

//! Typed wrappers over the ReStyle REST API.
//!
//! Every service method issues exactly one HTTP call and resolves to the
//! decoded response body.

pub mod client;
pub mod error;
pub mod models;
pub mod services;

pub use client::ApiClient;
pub use error::{ClientError, Result as ClientResult};
pub use models::{ProfilePhoto, TradeItem, User, UserDetails};
pub use services::{TradeService, UserAccountService};
