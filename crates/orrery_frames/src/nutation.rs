//! IAU 1980 nutation (63-term series).
//!
//! Computes nutation in longitude (Δψ) and obliquity (Δε) for the
//! true-equinox correction of the solar and lunar series.
//!
//! Source: Meeus, Astronomical Algorithms, 2nd ed., Chapter 22,
//! Table 22.A (from the IAU 1980 theory of nutation).

/// Nutation in longitude and obliquity, in arcseconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Nutation {
    pub dpsi_arcsec: f64,
    pub deps_arcsec: f64,
}

/// Fundamental arguments in degrees: `[D, M, M′, F, Ω]`.
///
/// `t` = Julian centuries since J2000.0.
/// - `D`  = mean elongation of the Moon from the Sun
/// - `M`  = mean anomaly of the Sun
/// - `M′` = mean anomaly of the Moon
/// - `F`  = Moon's argument of latitude
/// - `Ω`  = longitude of the ascending node of the Moon's mean orbit
pub fn fundamental_arguments_deg(t: f64) -> [f64; 5] {
    let t2 = t * t;
    let t3 = t2 * t;
    let d = 297.85036 + 445_267.111_480 * t - 0.001_914_2 * t2 + t3 / 189_474.0;
    let m = 357.52772 + 35_999.050_340 * t - 0.000_160_3 * t2 - t3 / 300_000.0;
    let mp = 134.96298 + 477_198.867_398 * t + 0.008_697_2 * t2 + t3 / 56_250.0;
    let f = 93.27191 + 483_202.017_538 * t - 0.003_682_5 * t2 + t3 / 327_270.0;
    let om = 125.04452 - 1934.136_261 * t + 0.002_070_8 * t2 + t3 / 450_000.0;
    [d, m, mp, f, om]
}

/// Argument multipliers `[D, M, M′, F, Ω]`.
#[rustfmt::skip]
static NUTATION_ARGS: [[i8; 5]; 63] = [
    [ 0,  0,  0,  0,  1], [-2,  0,  0,  2,  2], [ 0,  0,  0,  2,  2], [ 0,  0,  0,  0,  2],
    [ 0,  1,  0,  0,  0], [ 0,  0,  1,  0,  0], [-2,  1,  0,  2,  2], [ 0,  0,  0,  2,  1],
    [ 0,  0,  1,  2,  2], [-2, -1,  0,  2,  2], [-2,  0,  1,  0,  0], [-2,  0,  0,  2,  1],
    [ 0,  0, -1,  2,  2], [ 2,  0,  0,  0,  0], [ 0,  0,  1,  0,  1], [ 2,  0, -1,  2,  2],
    [ 0,  0, -1,  0,  1], [ 0,  0,  1,  2,  1], [-2,  0,  2,  0,  0], [ 0,  0, -2,  2,  1],
    [ 2,  0,  0,  2,  2], [ 0,  0,  2,  2,  2], [ 0,  0,  2,  0,  0], [-2,  0,  1,  2,  2],
    [ 0,  0,  0,  2,  0], [-2,  0,  0,  2,  0], [ 0,  0, -1,  2,  1], [ 0,  2,  0,  0,  0],
    [ 2,  0, -1,  0,  1], [-2,  2,  0,  2,  2], [ 0,  1,  0,  0,  1], [-2,  0,  1,  0,  1],
    [ 0, -1,  0,  0,  1], [ 0,  0,  2, -2,  0], [ 2,  0, -1,  2,  1], [ 2,  0,  1,  2,  2],
    [ 0,  1,  0,  2,  2], [-2,  1,  1,  0,  0], [ 0, -1,  0,  2,  2], [ 2,  0,  0,  2,  1],
    [ 2,  0,  1,  0,  0], [-2,  0,  2,  2,  2], [-2,  0,  1,  2,  1], [ 2,  0, -2,  0,  1],
    [ 2,  0,  0,  0,  1], [ 0, -1,  1,  0,  0], [-2, -1,  0,  2,  1], [-2,  0,  0,  0,  1],
    [ 0,  0,  2,  2,  1], [-2,  0,  2,  0,  1], [-2,  1,  0,  2,  1], [ 0,  0,  1, -2,  0],
    [-1,  0,  1,  0,  0], [-2,  1,  0,  0,  0], [ 1,  0,  0,  0,  0], [ 0,  0,  1,  2,  0],
    [ 0,  0, -2,  2,  2], [-1, -1,  1,  0,  0], [ 0,  1,  1,  0,  0], [ 0, -1,  1,  2,  2],
    [ 2, -1, -1,  2,  2], [ 0,  0,  3,  2,  2], [ 2, -1,  0,  2,  2],
];

/// Amplitudes `[ψ, ψ·T, ε, ε·T]` in units of 0.0001″.
#[rustfmt::skip]
static NUTATION_AMPS: [[f64; 4]; 63] = [
    [-171996.0, -174.2, 92025.0,  8.9], [-13187.0, -1.6, 5736.0, -3.1],
    [  -2274.0,   -0.2,   977.0, -0.5], [  2062.0,  0.2, -895.0,  0.5],
    [   1426.0,   -3.4,    54.0, -0.1], [   712.0,  0.1,   -7.0,  0.0],
    [   -517.0,    1.2,   224.0, -0.6], [  -386.0, -0.4,  200.0,  0.0],
    [   -301.0,    0.0,   129.0, -0.1], [   217.0, -0.5,  -95.0,  0.3],
    [   -158.0,    0.0,     0.0,  0.0], [   129.0,  0.1,  -70.0,  0.0],
    [    123.0,    0.0,   -53.0,  0.0], [    63.0,  0.0,    0.0,  0.0],
    [     63.0,    0.1,   -33.0,  0.0], [   -59.0,  0.0,   26.0,  0.0],
    [    -58.0,   -0.1,    32.0,  0.0], [   -51.0,  0.0,   27.0,  0.0],
    [     48.0,    0.0,     0.0,  0.0], [    46.0,  0.0,  -24.0,  0.0],
    [    -38.0,    0.0,    16.0,  0.0], [   -31.0,  0.0,   13.0,  0.0],
    [     29.0,    0.0,     0.0,  0.0], [    29.0,  0.0,  -12.0,  0.0],
    [     26.0,    0.0,     0.0,  0.0], [   -22.0,  0.0,    0.0,  0.0],
    [     21.0,    0.0,   -10.0,  0.0], [    17.0, -0.1,    0.0,  0.0],
    [     16.0,    0.0,    -8.0,  0.0], [   -16.0,  0.1,    7.0,  0.0],
    [    -15.0,    0.0,     9.0,  0.0], [   -13.0,  0.0,    7.0,  0.0],
    [    -12.0,    0.0,     6.0,  0.0], [    11.0,  0.0,    0.0,  0.0],
    [    -10.0,    0.0,     5.0,  0.0], [    -8.0,  0.0,    3.0,  0.0],
    [      7.0,    0.0,    -3.0,  0.0], [    -7.0,  0.0,    0.0,  0.0],
    [     -7.0,    0.0,     3.0,  0.0], [    -7.0,  0.0,    3.0,  0.0],
    [      6.0,    0.0,     0.0,  0.0], [     6.0,  0.0,   -3.0,  0.0],
    [      6.0,    0.0,    -3.0,  0.0], [    -6.0,  0.0,    3.0,  0.0],
    [     -6.0,    0.0,     3.0,  0.0], [     5.0,  0.0,    0.0,  0.0],
    [     -5.0,    0.0,     3.0,  0.0], [    -5.0,  0.0,    3.0,  0.0],
    [     -5.0,    0.0,     3.0,  0.0], [     4.0,  0.0,    0.0,  0.0],
    [      4.0,    0.0,     0.0,  0.0], [     4.0,  0.0,    0.0,  0.0],
    [     -4.0,    0.0,     0.0,  0.0], [    -4.0,  0.0,    0.0,  0.0],
    [     -4.0,    0.0,     0.0,  0.0], [     3.0,  0.0,    0.0,  0.0],
    [     -3.0,    0.0,     0.0,  0.0], [    -3.0,  0.0,    0.0,  0.0],
    [     -3.0,    0.0,     0.0,  0.0], [    -3.0,  0.0,    0.0,  0.0],
    [     -3.0,    0.0,     0.0,  0.0], [    -3.0,  0.0,    0.0,  0.0],
    [     -3.0,    0.0,     0.0,  0.0],
];

/// IAU 1980 nutation at `t` Julian centuries from J2000.0.
pub fn nutation_iau1980(t: f64) -> Nutation {
    let args = fundamental_arguments_deg(t);

    let mut dpsi = 0.0;
    let mut deps = 0.0;

    for (mult, amp) in NUTATION_ARGS.iter().zip(NUTATION_AMPS.iter()) {
        let arg_deg: f64 = mult
            .iter()
            .zip(args.iter())
            .map(|(&k, &a)| f64::from(k) * a)
            .sum();
        let arg = arg_deg.to_radians();
        dpsi += (amp[0] + amp[1] * t) * arg.sin();
        deps += (amp[2] + amp[3] * t) * arg.cos();
    }

    // 1 unit = 0.0001″
    Nutation {
        dpsi_arcsec: dpsi * 1e-4,
        deps_arcsec: deps * 1e-4,
    }
}
