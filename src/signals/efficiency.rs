//! Kaufman-style efficiency ratio: trend cleanliness over a fixed
//! look-back window.

pub const EFFICIENCY_WINDOW: usize = 20;

/// Net displacement over the last [`EFFICIENCY_WINDOW`] closes divided by
/// the total path length walked in that window.
///
/// 1.0 is a perfectly directional move, near 0 is pure noise. A flat
/// window (zero path length) scores 0.0; the division is guarded and can
/// never produce a non-finite value. Series shorter than the window also
/// score 0.0.
pub fn efficiency_ratio(closes: &[f64]) -> f64 {
    if closes.len() < EFFICIENCY_WINDOW {
        return 0.0;
    }
    let window = &closes[closes.len() - EFFICIENCY_WINDOW..];
    let net_change = (window[EFFICIENCY_WINDOW - 1] - window[0]).abs();
    let path_length: f64 = window.windows(2).map(|pair| (pair[1] - pair[0]).abs()).sum();
    if path_length == 0.0 {
        0.0
    } else {
        net_change / path_length
    }
}
