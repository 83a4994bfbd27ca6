//! Per-room state and the filters applied to everything the bot posts.

mod filter;
mod groot;
mod store;

pub use filter::{ChatResponseFilter, FilterChain};
pub use groot::GrootFilter;
pub use store::RoomToggles;
