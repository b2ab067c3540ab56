// backend/src/models/mod.rs

//! Records exchanged with the storage backend and over HTTP.

pub mod trade_item;
pub mod user;
pub mod user_details;

pub use trade_item::TradeItem;
pub use user::{NewUser, User};
pub use user_details::UserDetails;
