// backend/src/services/mod.rs

pub mod upload_store;
