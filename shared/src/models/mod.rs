//! Data models
//!
//! Shared between the front-desk server and frontend (via API).
//! DB row types use `#[cfg_attr(feature = "db", derive(sqlx::FromRow))]`.
//! All IDs are `i64` (Postgres BIGSERIAL); rooms are keyed by their number.

pub mod address;
pub mod guest;
pub mod invoice;
pub mod reservation;
pub mod room;

// Re-exports
pub use address::*;
pub use guest::*;
pub use invoice::*;
pub use reservation::*;
pub use room::*;
