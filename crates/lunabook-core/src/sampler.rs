//! Spatial sampling: volume-uniform points in a sphere with
//! minimum-spacing rejection.
//!
//! # Uniformity
//!
//! Picking spherical coordinates naively (uniform polar angle, uniform
//! radius) clusters points at the poles and toward the center. The
//! correct inverse-CDF transforms are:
//!
//! - azimuth `theta = TAU * u` for uniform `u`,
//! - polar angle `phi = acos(2v - 1)` for uniform `v`, which spreads
//!   directions uniformly over the sphere's surface,
//! - radius `r = R * cbrt(w)` for uniform `w`, so that *volume* rather
//!   than radius is sampled uniformly.
//!
//! # Spacing
//!
//! [`sample_with_spacing`] rejection-samples against the existing
//! points and gives up after a fixed attempt budget, returning the last
//! candidate even if it violates the minimum distance. Placement never
//! blocks or fails when the volume gets crowded; spacing is a
//! best-effort rule, not a guarantee.

use std::f64::consts::TAU;

use lunabook_types::Position;
use rand::Rng;

/// Default retry budget for the spacing rejection loop.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 50;

/// Sample a point uniformly by volume inside the solid sphere of
/// `radius` centered on the origin.
///
/// `radius` must be positive; a non-positive radius collapses every
/// sample to the origin.
pub fn sample_in_sphere(rng: &mut impl Rng, radius: f64) -> Position {
    let u: f64 = rng.random();
    let v: f64 = rng.random();
    let w: f64 = rng.random();

    let theta = TAU * u;
    let phi = (2.0 * v - 1.0).acos();
    let r = radius * w.cbrt();

    let sin_phi = phi.sin();
    Position::new(
        r * sin_phi * theta.cos(),
        r * phi.cos(),
        r * sin_phi * theta.sin(),
    )
}

/// Sample a point in the sphere of `radius`, attempting to keep it at
/// least `min_dist` away from every position in `existing`.
///
/// Candidates are drawn with [`sample_in_sphere`] and the first one
/// satisfying the spacing rule is returned. After `max_attempts`
/// consecutive rejections the last candidate is returned regardless of
/// spacing; the caller is not told the rule was violated. With an empty
/// `existing` set the first candidate always wins.
pub fn sample_with_spacing(
    rng: &mut impl Rng,
    existing: &[Position],
    radius: f64,
    min_dist: f64,
    max_attempts: u32,
) -> Position {
    let mut attempts: u32 = 1;
    let mut candidate = sample_in_sphere(rng, radius);

    loop {
        let clear = existing
            .iter()
            .all(|p| p.distance_to(candidate) >= min_dist);
        if clear {
            return candidate;
        }
        if attempts >= max_attempts {
            tracing::warn!(
                max_attempts,
                min_dist,
                existing = existing.len(),
                "Placement budget exhausted, accepting a too-close position"
            );
            return candidate;
        }
        candidate = sample_in_sphere(rng, radius);
        attempts = attempts.saturating_add(1);
    }
}
