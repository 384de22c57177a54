pub mod data_stores;
pub mod error;
pub mod jti;
