//! Runtime precision calibration and the startup self-check.
//!
//! Machine epsilon and Dekker's splitter are measured rather than assumed,
//! by halving a candidate epsilon until `1.0 + epsilon` is no longer
//! distinguishable from `1.0` under the ambient rounding mode. The tiered
//! error-bound coefficients for every predicate derive from the measured
//! epsilon, so a platform whose arithmetic differs from round-to-nearest
//! IEEE double (extended-precision registers, unusual rounding modes) gets
//! bounds that match what its hardware actually does.

use std::sync::{Once, OnceLock};

use crate::geometry::orient2d::{orient2d_adaptive, orient2d_exact, orient2d_fast};
use crate::{Coord, Float};

/// Calibrated constants shared by every predicate.
///
/// The `a` coefficient of each family bounds the error of the fast
/// floating-point evaluation, `b` bounds the error after the dominant terms
/// are computed exactly, and `c` enters the bound for the first-order
/// corrected approximation together with [`resulterrbound`].
///
/// [`resulterrbound`]: PredicateBounds::resulterrbound
#[derive(Clone, Copy, Debug)]
pub struct PredicateBounds {
    /// Half the distance between 1.0 and the next larger representable value.
    pub epsilon: Float,
    /// Dekker's mantissa-splitting constant, `2^ceil(p/2) + 1` for a
    /// `p`-bit mantissa.
    pub splitter: Float,
    /// Relative error bound for the estimate of an expansion's value.
    pub resulterrbound: Float,
    pub ccwerrbound_a: Float,
    pub ccwerrbound_b: Float,
    pub ccwerrbound_c: Float,
    pub o3derrbound_a: Float,
    pub o3derrbound_b: Float,
    pub o3derrbound_c: Float,
    pub iccerrbound_a: Float,
    pub iccerrbound_b: Float,
    pub iccerrbound_c: Float,
    pub isperrbound_a: Float,
    pub isperrbound_b: Float,
    pub isperrbound_c: Float,
}

/// Returns the calibrated constant table, computing it on first use.
pub fn bounds() -> &'static PredicateBounds {
    static BOUNDS: OnceLock<PredicateBounds> = OnceLock::new();
    BOUNDS.get_or_init(exact_init)
}

/// Measures epsilon and the splitter, then derives every coefficient.
///
/// The loop halves epsilon while doubling the splitter on every other
/// iteration, stopping when `1.0 + epsilon` rounds to `1.0`. The
/// `check != lastcheck` clause also stops it on hardware that rounds the
/// comparison operand through extended precision.
fn exact_init() -> PredicateBounds {
    let half = 0.5;
    let mut epsilon: Float = 1.0;
    let mut splitter: Float = 1.0;
    let mut every_other = true;
    let mut check: Float = 1.0;
    loop {
        let lastcheck = check;
        epsilon *= half;
        if every_other {
            splitter *= 2.0;
        }
        every_other = !every_other;
        check = 1.0 + epsilon;
        if check == 1.0 || check == lastcheck {
            break;
        }
    }
    splitter += 1.0;

    PredicateBounds {
        epsilon,
        splitter,
        resulterrbound: (3.0 + 8.0 * epsilon) * epsilon,
        ccwerrbound_a: (3.0 + 16.0 * epsilon) * epsilon,
        ccwerrbound_b: (2.0 + 12.0 * epsilon) * epsilon,
        ccwerrbound_c: (9.0 + 64.0 * epsilon) * epsilon * epsilon,
        o3derrbound_a: (7.0 + 56.0 * epsilon) * epsilon,
        o3derrbound_b: (3.0 + 28.0 * epsilon) * epsilon,
        o3derrbound_c: (26.0 + 288.0 * epsilon) * epsilon * epsilon,
        iccerrbound_a: (10.0 + 96.0 * epsilon) * epsilon,
        iccerrbound_b: (4.0 + 48.0 * epsilon) * epsilon,
        iccerrbound_c: (44.0 + 576.0 * epsilon) * epsilon * epsilon,
        isperrbound_a: (16.0 + 224.0 * epsilon) * epsilon,
        isperrbound_b: (5.0 + 72.0 * epsilon) * epsilon,
        isperrbound_c: (71.0 + 1408.0 * epsilon) * epsilon * epsilon,
    }
}

/// Cross-validates the orient2d tiers once per process, before the first
/// adaptive predicate call returns a result to the caller.
///
/// A failure means the calibrated bounds do not describe the hardware's
/// rounding behaviour, so every adaptive answer would be suspect; that is
/// not recoverable at runtime and panics.
pub(crate) fn ensure_self_check() {
    static SELF_CHECK: Once = Once::new();
    SELF_CHECK.call_once(run_self_check);
}

fn run_self_check() {
    let a = Coord::new(0.0, 0.0);
    let b = Coord::new(1.0, 0.0);
    let c = Coord::new(0.0, 1.0);
    assert!(
        orient2d_fast(&a, &b, &c) > 0.0
            && orient2d_exact(&a, &b, &c) > 0.0
            && orient2d_adaptive(&a, &b, &c) > 0.0,
        "startup self-check failed: counterclockwise triangle not reported positive",
    );

    let p = Coord::new(0.0, 0.0);
    let q = Coord::new(1.0, 1.0);
    let r = Coord::new(2.0, 2.0);
    assert!(
        orient2d_exact(&p, &q, &r) == 0.0 && orient2d_adaptive(&p, &q, &r) == 0.0,
        "startup self-check failed: collinear points not reported as exactly zero",
    );

    // A short sweep through near-collinear configurations with a far-away
    // third point, so the fast determinant loses its low-order bits. The
    // fast tier is expected to misjudge some of them; the exact and
    // adaptive tiers must never disagree.
    let pa = Coord::new(0.0, 0.0);
    let pb = Coord::new(2.0, 3.0);
    let mut fast_disagreements = 0;
    let mut y = 3.0e8 - 0.001;
    while y < 3.0e8 + 0.001 {
        let pc = Coord::new(2.0e8, y);
        let exact = orient2d_exact(&pa, &pb, &pc);
        let adaptive = orient2d_adaptive(&pa, &pb, &pc);
        assert!(
            same_sign(exact, adaptive),
            "startup self-check failed: adaptive orient2d diverged from exact",
        );
        if !same_sign(orient2d_fast(&pa, &pb, &pc), exact) {
            fast_disagreements += 1;
        }
        y += 0.000_001;
    }
    assert!(
        fast_disagreements > 0,
        "startup self-check failed: fast tier never strained, bounds are suspect",
    );
}

fn same_sign(a: Float, b: Float) -> bool {
    (a > 0.0) == (b > 0.0) && (a < 0.0) == (b < 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn calibration_matches_ieee_double() {
        let bounds = bounds();
        assert_eq!(bounds.epsilon, 0.5 * f64::EPSILON);
        assert_eq!(bounds.splitter, 134_217_729.0);
    }

    #[test]
    fn coefficients_are_ordered() {
        let bounds = bounds();
        // Tier A bounds a coarser approximation than tier B; tier C is a
        // second-order term.
        assert!(bounds.ccwerrbound_a > bounds.ccwerrbound_b);
        assert!(bounds.ccwerrbound_c < bounds.ccwerrbound_b);
        assert!(bounds.o3derrbound_a > bounds.o3derrbound_b);
        assert!(bounds.iccerrbound_a > bounds.iccerrbound_b);
        assert!(bounds.isperrbound_a > bounds.isperrbound_b);
        assert!(bounds.resulterrbound > 0.0);
    }

    #[test]
    fn self_check_passes() {
        ensure_self_check();
    }
}
