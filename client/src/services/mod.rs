// client/src/services/mod.rs

pub mod trade;
pub mod user_account;

pub use trade::TradeService;
pub use user_account::UserAccountService;
