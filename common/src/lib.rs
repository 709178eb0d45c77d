pub mod account;
pub mod api;
pub mod asset;
pub mod compliance;
pub mod config;
pub mod economics;
pub mod error;
pub mod time;
pub mod utils;
