/// The sampling period between two measurements used by [`AlphaBetaFilter::new`](super::AlphaBetaFilter::new).
///
/// Stored as `u8` so that it converts losslessly into any scalar implementing
/// `From<u8>`, which includes both `f32` and `f64`.
pub const DEFAULT_TIME_INTERVAL: u8 = 5;
