//! Generic root finding over functions of time.
//!
//! Two refiners, both with fixed iteration counts:
//! - bracket-and-bisect for zero crossings and boolean flips,
//! - golden-section search for extrema, after a coarse three-sample bracket.
//!
//! The functions are generic over the caller's error type so a failed
//! evaluation propagates with `?` unchanged.

use tracing::trace;

/// Bisection steps for a one-minute bracket (60 s / 2^12 ≈ 15 ms).
pub const BISECT_ITER_MINUTE: u32 = 12;

/// Bisection steps for a one-day bracket (86400 s / 2^20 ≈ 0.08 s).
pub const BISECT_ITER_DAY: u32 = 20;

/// Golden ratio conjugate, (√5 − 1) / 2.
pub const GOLDEN_RATIO_CONJUGATE: f64 = 0.618_033_988_749_894_8;

/// Default golden-section tolerance in days (≈ 8.6 s).
pub const GOLDEN_EPSILON_DAYS: f64 = 1e-4;

/// Upper bound on golden-section iterations, whatever the bracket width.
pub const GOLDEN_MAX_ITER: u32 = 80;

/// Direction of a fixed-step scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchDirection {
    Forward,
    Backward,
}

impl SearchDirection {
    /// Step with the direction's sign applied.
    pub fn signed(self, step: f64) -> f64 {
        match self {
            Self::Forward => step,
            Self::Backward => -step,
        }
    }
}

/// How a sign change between two samples is accepted as a crossing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrossingRule {
    /// Any change of sign.
    SignChange,
    /// Sign change of an angle difference in [-180, 180), excluding the
    /// ±180° wrap.
    WrappedAngle,
}

impl CrossingRule {
    pub(crate) fn accepts(self, f_a: f64, f_b: f64) -> bool {
        match self {
            Self::SignChange => (f_a < 0.0) != (f_b < 0.0),
            Self::WrappedAngle => is_genuine_crossing(f_a, f_b),
        }
    }
}

/// Whether `f_a`, `f_b` straddle a real zero rather than a ±180° wrap.
pub fn is_genuine_crossing(f_a: f64, f_b: f64) -> bool {
    f_a * f_b < 0.0 && (f_a - f_b).abs() < 270.0
}

/// Extremum sought by golden-section search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extremum {
    Maximum,
    Minimum,
}

impl Extremum {
    fn better(self, a: f64, b: f64) -> bool {
        match self {
            Self::Maximum => a > b,
            Self::Minimum => a < b,
        }
    }
}

/// Refine a zero of `f` inside `[t_a, t_b]`, where `f_a = f(t_a)` and
/// `f(t_b)` have opposite signs.
///
/// Runs exactly `iterations` halvings and returns the midpoint of the final
/// bracket, so the error is at most `(t_b - t_a) / 2^(iterations + 1)`.
pub fn bisect_zero<F, E>(
    mut f: F,
    mut t_a: f64,
    mut f_a: f64,
    mut t_b: f64,
    iterations: u32,
) -> Result<f64, E>
where
    F: FnMut(f64) -> Result<f64, E>,
{
    for _ in 0..iterations {
        let t_mid = 0.5 * (t_a + t_b);
        let f_mid = f(t_mid)?;
        if f_a * f_mid <= 0.0 {
            t_b = t_mid;
        } else {
            t_a = t_mid;
            f_a = f_mid;
        }
    }
    Ok(0.5 * (t_a + t_b))
}

/// Refine the instant at which a boolean predicate flips inside `[t_a, t_b]`.
///
/// `state_a` is the predicate's value at `t_a`; the value at `t_b` is
/// assumed to differ.
pub fn bisect_flip<F, E>(
    mut predicate: F,
    mut t_a: f64,
    state_a: bool,
    mut t_b: f64,
    iterations: u32,
) -> Result<f64, E>
where
    F: FnMut(f64) -> Result<bool, E>,
{
    for _ in 0..iterations {
        let t_mid = 0.5 * (t_a + t_b);
        if predicate(t_mid)? == state_a {
            t_a = t_mid;
        } else {
            t_b = t_mid;
        }
    }
    Ok(0.5 * (t_a + t_b))
}

/// Scan `f` from `t_start` in fixed steps and refine the first crossing
/// that `accept` approves.
///
/// `step` carries the direction's sign. Rejected crossings are skipped and
/// the scan continues past them. Returns `Ok(None)` after `max_steps`.
pub fn find_crossing<F, A, E>(
    mut f: F,
    t_start: f64,
    step: f64,
    max_steps: usize,
    rule: CrossingRule,
    iterations: u32,
    mut accept: A,
) -> Result<Option<f64>, E>
where
    F: FnMut(f64) -> Result<f64, E>,
    A: FnMut(f64) -> Result<bool, E>,
{
    let mut t_prev = t_start;
    let mut f_prev = f(t_prev)?;

    for _ in 0..max_steps {
        let t_next = t_prev + step;
        let f_next = f(t_next)?;

        if rule.accepts(f_prev, f_next) {
            let (t_a, f_a, t_b) = if step > 0.0 {
                (t_prev, f_prev, t_next)
            } else {
                (t_next, f_next, t_prev)
            };
            trace!(t_a, t_b, "crossing bracketed");
            let root = bisect_zero(&mut f, t_a, f_a, t_b, iterations)?;
            if accept(root)? {
                return Ok(Some(root));
            }
        }

        t_prev = t_next;
        f_prev = f_next;
    }
    Ok(None)
}

/// Coarse scan for a local extremum: three consecutive samples where the
/// middle is strictly better than both neighbours.
///
/// Returns the bracket `(a, b)` with `a < b`, or `None` after `max_steps`.
pub fn bracket_extremum<F, E>(
    mut f: F,
    t_start: f64,
    step: f64,
    max_steps: usize,
    kind: Extremum,
) -> Result<Option<(f64, f64)>, E>
where
    F: FnMut(f64) -> Result<f64, E>,
{
    let mut t0 = t_start;
    let mut f0 = f(t0)?;
    let mut t1 = t0 + step;
    let mut f1 = f(t1)?;

    for _ in 0..max_steps {
        let t2 = t1 + step;
        let f2 = f(t2)?;
        if kind.better(f1, f0) && kind.better(f1, f2) {
            trace!(t0, t2, "extremum bracketed");
            return Ok(Some((t0.min(t2), t0.max(t2))));
        }
        (t0, f0) = (t1, f1);
        (t1, f1) = (t2, f2);
    }
    Ok(None)
}

/// Number of golden-section iterations that shrink `width` below `epsilon`.
pub fn golden_iterations(width: f64, epsilon: f64) -> u32 {
    if width.is_nan() || epsilon.is_nan() || width <= epsilon || epsilon <= 0.0 {
        return 0;
    }
    let n = ((epsilon / width).ln() / GOLDEN_RATIO_CONJUGATE.ln()).ceil();
    (n as u32).min(GOLDEN_MAX_ITER)
}

/// Golden-section search for an extremum of `f` on `[a, b]`.
///
/// Runs [`golden_iterations`] steps and returns `(t, f(t))` at the midpoint
/// of the final interval.
pub fn golden_section<F, E>(
    mut f: F,
    mut a: f64,
    mut b: f64,
    kind: Extremum,
    epsilon: f64,
) -> Result<(f64, f64), E>
where
    F: FnMut(f64) -> Result<f64, E>,
{
    let phi = GOLDEN_RATIO_CONJUGATE;
    let mut c = b - phi * (b - a);
    let mut d = a + phi * (b - a);
    let mut fc = f(c)?;
    let mut fd = f(d)?;

    for _ in 0..golden_iterations(b - a, epsilon) {
        if kind.better(fc, fd) {
            b = d;
            (d, fd) = (c, fc);
            c = b - phi * (b - a);
            fc = f(c)?;
        } else {
            a = c;
            (c, fc) = (d, fd);
            d = a + phi * (b - a);
            fd = f(d)?;
        }
    }

    let t = 0.5 * (a + b);
    Ok((t, f(t)?))
}
