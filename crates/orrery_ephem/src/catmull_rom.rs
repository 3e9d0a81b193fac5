//! Catmull-Rom cubic interpolation with angle unwrapping.
//!
//! The four control points `p0..p3` sit at consecutive samples; the curve
//! runs from `p1` (t = 0) to `p2` (t = 1) and passes through both.

use orrery_frames::{normalize_360, normalize_pm180};

/// Evaluate the uniform Catmull-Rom segment between `p[1]` and `p[2]`.
///
/// `f(t) = ½(2p₁ + (−p₀+p₂)t + (2p₀−5p₁+4p₂−p₃)t² + (−p₀+3p₁−3p₂+p₃)t³)`
pub fn catmull_rom(p: [f64; 4], t: f64) -> f64 {
    let [p0, p1, p2, p3] = p;
    let t2 = t * t;
    let t3 = t2 * t;
    0.5 * (2.0 * p1
        + (-p0 + p2) * t
        + (2.0 * p0 - 5.0 * p1 + 4.0 * p2 - p3) * t2
        + (-p0 + 3.0 * p1 - 3.0 * p2 + p3) * t3)
}

/// Shift `angle_deg` by whole turns so it lies within ±180° of `reference_deg`.
pub fn unwrap_near(reference_deg: f64, angle_deg: f64) -> f64 {
    reference_deg + normalize_pm180(angle_deg - reference_deg)
}

/// Catmull-Rom for an angle channel in degrees.
///
/// `p0`, `p2`, `p3` are unwrapped relative to `p1` before interpolating and
/// the result is reduced to [0, 360).
pub fn catmull_rom_angle(p: [f64; 4], t: f64) -> f64 {
    let reference = p[1];
    let unwrapped = [
        unwrap_near(reference, p[0]),
        reference,
        unwrap_near(reference, p[2]),
        unwrap_near(reference, p[3]),
    ];
    normalize_360(catmull_rom(unwrapped, t))
}
