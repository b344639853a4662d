//! Core library for the `forecast` CLI.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - The OpenWeather forecast fetcher and its response transformation
//! - The frontend-ready forecast model
//!
//! It is used by `forecast-cli`, but can also be reused by other binaries or services.

pub mod config;
pub mod fetcher;
pub mod model;

pub use config::Config;
pub use fetcher::{ConfigError, DEFAULT_BASE_URL, FetchError, ForecastFetcher};
pub use model::ForecastEntry;
