//! Percentage change between consecutive closes.

/// Percentage change from `previous` to `current`.
///
/// A previous close of exactly zero has no meaningful relative change, so
/// the result is `None` rather than an infinity or NaN.
#[must_use]
pub fn pct_change(previous: f64, current: f64) -> Option<f64> {
    if previous == 0.0 {
        return None;
    }
    Some((current - previous) / previous * 100.0)
}
