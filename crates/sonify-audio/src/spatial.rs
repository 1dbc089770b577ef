//! Stereo spatialization from 3D positions.
//!
//! Loudness falls off with distance as `1 / (1 + 0.5 d)` and azimuth is mapped
//! to a constant-power pan. Coordinates: `x` is listener-right, `y` is
//! listener-forward, `z` is up. Elevation only contributes to distance.

use std::f64::consts::FRAC_PI_2;

use sonify_spec::Position;

/// Left/right gain pair for one source.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpatialGains {
    pub left: f64,
    pub right: f64,
}

impl SpatialGains {
    /// Combined power, `left^2 + right^2`.
    pub fn power(&self) -> f64 {
        self.left * self.left + self.right * self.right
    }
}

/// Distance attenuation: 1.0 at the listener, tending to 0 far away.
#[inline]
pub fn distance_gain(distance: f64) -> f64 {
    1.0 / (1.0 + 0.5 * distance)
}

/// Constant-power pan for a normalized position `p` in [0, 1] (0 = left).
#[inline]
pub fn constant_power_pan(p: f64) -> (f64, f64) {
    let angle = p * FRAC_PI_2;
    (angle.cos(), angle.sin())
}

/// Computes left/right gains for a source heard from `listener`.
///
/// A source at the listener's position pans to the center: `atan2(0, 0)` is
/// 0, so both gains are `cos(pi/4)`.
pub fn spatial_gains(source: &Position, listener: &Position) -> SpatialGains {
    let rel = source.relative_to(listener);
    let gain_dist = distance_gain(rel.length());

    // 0 = straight ahead, pi/2 = hard right
    let azimuth = rel.x.atan2(rel.y);
    let pan = azimuth.sin();
    let (l, r) = constant_power_pan((pan + 1.0) / 2.0);

    SpatialGains {
        left: l * gain_dist,
        right: r * gain_dist,
    }
}
