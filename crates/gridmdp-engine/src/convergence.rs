//! Convergence threshold for value iteration.

/// Largest per-sweep change at which iteration stops.
///
/// `epsilon * min((1 - gamma) / gamma, 1)`, with the scale factor replaced
/// by `1` whenever it comes out zero or non-finite. That covers
/// `gamma = 1` (factor 0) and `gamma = 0` (factor +inf, already clamped).
///
/// A `gamma` above 1 or below 0 yields a negative threshold that no sweep
/// can satisfy; callers that allow such values should set a sweep limit.
pub fn convergence_threshold(epsilon: f64, gamma: f64) -> f64 {
    let scale = ((1.0 - gamma) / gamma).min(1.0);
    let scale = if scale == 0.0 || !scale.is_finite() {
        1.0
    } else {
        scale
    };
    epsilon * scale
}

/// Returns `true` when a sweep whose largest change was `delta` has
/// converged under `threshold`.
#[inline]
pub fn has_converged(delta: f64, threshold: f64) -> bool {
    delta < threshold
}
