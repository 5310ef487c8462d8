//! Shared types for the front-desk service
//!
//! Domain models, the unified error system, and response structures used by
//! the HTTP server and any other consumer of the API types.

pub mod error;
pub mod models;
pub mod util;

// Re-exports
pub use http;
pub use serde::{Deserialize, Serialize};
