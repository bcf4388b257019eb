// brewfind-api: Async Rust client for the Open Brewery DB directory

pub mod client;
pub mod error;
pub mod models;
pub mod transport;

pub use client::{BreweryClient, DEFAULT_ENDPOINT};
pub use error::Error;
pub use models::BreweryRecord;
pub use transport::TransportConfig;
