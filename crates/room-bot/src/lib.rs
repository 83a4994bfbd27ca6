//! Chat-room bot: command dispatch, per-room filters and the Advent of Code
//! leaderboard command.

pub mod clock;
pub mod commands;
pub mod config;
pub mod dispatch;
pub mod error;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::Config;
pub use dispatch::{Dispatcher, Outgoing};
pub use error::{AppError, AppResult};
