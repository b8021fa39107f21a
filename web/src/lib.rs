//! Web layer: routes every registered endpoint under two protocols.
//!
//! For a registry entry named `N`, the router exposes `GET /N` (single-shot,
//! event limit forced to 1, one JSON envelope) and `GET /N/stream` (SSE,
//! event limit from the `max_count` query parameter). Both paths dispatch to
//! the same `endpoint::Endpoint`; the routing layer performs no business
//! logic of its own.

pub mod controller;
pub mod error;
pub mod router;

pub use error::{Error, Result};
pub use router::init_router;
pub use service::AppState;
