//! SpaceX data facade.
//!
//! Fetches rocket and launch data from the SpaceX API, reshapes it into
//! small view models and serves them over a read-only JSON API.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod query;
pub mod upstream;

pub use config::AppConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
