//! Search queries and their per-editor state
//!
//! A [`SearchSpec`] is the user-facing parameter record, compiled once into a
//! [`SearchQuery`]. Each editor keeps its own [`SearchState`]; the global
//! parameters reach every editor through [`broadcast_query`].

mod broadcast;
mod query;
mod state;

pub use broadcast::{broadcast_clear, broadcast_query, BroadcastReport};
pub use query::{SearchQuery, SearchSpec};
pub use state::{SearchEffect, SearchState};
