//! Moving-average smoothing for speed samples.
//!
//! Each sample is replaced with the mean of a symmetric neighborhood
//! window, clamped at the sequence boundaries, to reduce jerky motion.

use thiserror::Error;

/// Default moving-average window width.
pub const DEFAULT_WINDOW: usize = 3;

#[derive(Debug, Error, PartialEq)]
pub enum FilterError {
    #[error("window size must be a positive integer")]
    InvalidWindow,
}

/// Smooth `values` with a moving average of width `window_size`.
///
/// The window around index `i` has half-width `window_size / 2` and is
/// clamped to the valid index range, so boundary samples average over a
/// shorter run. Output length and order match the input.
pub fn smooth_speeds(values: &[f64], window_size: usize) -> Result<Vec<f64>, FilterError> {
    if window_size == 0 {
        return Err(FilterError::InvalidWindow);
    }

    let half = window_size / 2;
    let mut smoothed = Vec::with_capacity(values.len());
    for i in 0..values.len() {
        let lo = i.saturating_sub(half);
        let hi = (i + half).min(values.len() - 1);
        let window = &values[lo..=hi];
        let sum: f64 = window.iter().sum();
        smoothed.push(sum / window.len() as f64);
    }
    Ok(smoothed)
}
