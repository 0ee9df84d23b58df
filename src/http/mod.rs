//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware)
//!     → request.rs (request ID, trace span)
//!     → rockets.rs / launches.rs / health.rs (handlers)
//!     → query services → upstream
//!     → error.rs (failures mapped to 5xx JSON bodies)
//!     → Send to client
//! ```

pub mod error;
pub mod health;
pub mod launches;
pub mod request;
pub mod rockets;
pub mod server;

pub use error::{ApiError, ErrorBody};
pub use request::X_REQUEST_ID;
pub use server::{AppState, HttpServer};
