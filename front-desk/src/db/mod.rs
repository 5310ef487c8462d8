//! Database access layer
//!
//! Read queries and plain CRUD live here; the state-transition writes of the
//! reservation lifecycle live in `crate::booking`, which owns its
//! transactions.

pub mod guests;
pub mod invoices;
pub mod reservations;
pub mod rooms;
pub mod seed;

pub(crate) type BoxError = Box<dyn std::error::Error + Send + Sync>;
