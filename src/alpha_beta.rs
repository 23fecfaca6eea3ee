//! An alpha-beta (g-h) filter tracking a position and its velocity.

mod filter;
mod types;

pub use filter::AlphaBetaFilter;
pub use types::DEFAULT_TIME_INTERVAL;
