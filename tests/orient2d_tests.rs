mod common;

use common::{full_rand, narrow_rand, same_sign, sign_of, within_limits};
use geometry_predicates::orient2d as gp_orient2d;
use ntest::timeout;
use quickcheck::{QuickCheck, TestResult};
use rand::rngs::StdRng;
use rand::SeedableRng;
use robust_predicates::{orient2d, orient2d_exact, orient2d_fast, orient2d_slow, Coord};

const QC_TESTS: u64 = 300;
const QC_MAX_TESTS: u64 = 20_000;

fn robust_coord(c: &Coord) -> robust::Coord<f64> {
    robust::Coord { x: c.x, y: c.y }
}

fn orient2d_reference_sign(a: &Coord, b: &Coord, c: &Coord) -> Option<i32> {
    let gp_sign = sign_of(gp_orient2d([a.x, a.y], [b.x, b.y], [c.x, c.y]));
    let robust_sign = sign_of(robust::orient2d(
        robust_coord(a),
        robust_coord(b),
        robust_coord(c),
    ));
    if gp_sign == robust_sign {
        Some(gp_sign)
    } else {
        None
    }
}

#[test]
fn orient2d_detects_ccw() {
    let a = Coord::new(0.0, 0.0);
    let b = Coord::new(1.0, 0.0);
    let c = Coord::new(0.0, 1.0);
    assert!(orient2d(&a, &b, &c) > 0.0);
}

#[test]
fn orient2d_detects_cw() {
    let a = Coord::new(0.0, 0.0);
    let b = Coord::new(0.0, 1.0);
    let c = Coord::new(1.0, 0.0);
    assert!(orient2d(&a, &b, &c) < 0.0);
}

#[test]
fn orient2d_detects_collinear() {
    let a = Coord::new(0.0, 0.0);
    let b = Coord::new(1.0, 1.0);
    let c = Coord::new(2.0, 2.0);
    assert_eq!(orient2d(&a, &b, &c), 0.0);
}

/// Sweep a far-away third point across the line through `a` and `b`. Every
/// variant except the fast one must agree on the sign for every sample, and
/// the fast one must actually be wrong for a good fraction of them, otherwise
/// the sweep is not exercising the escalation tiers.
#[test]
#[timeout(120000)]
fn orient2d_sweep_near_collinear() {
    let m = 10000.0;
    let a = Coord::new(0.0, 0.0);
    let b = Coord::new(2.0, 3.0);
    let dy = 0.0009999;

    let mut samples = 0u32;
    let mut fast_failures = 0u32;
    let mut y = 30000.0 * m - 1.0;
    while y < 30000.0 * m + 1.0 {
        let c = Coord::new(20000.0 * m, y);
        let exact = orient2d_exact(&a, &b, &c);
        let slow = orient2d_slow(&a, &b, &c);
        let adaptive = orient2d(&a, &b, &c);
        let fast = orient2d_fast(&a, &b, &c);

        assert!(
            same_sign(exact, slow) && same_sign(exact, adaptive),
            "disagreement at y = {y}: exact {exact}, slow {slow}, adaptive {adaptive}"
        );
        if !same_sign(exact, fast) {
            fast_failures += 1;
        }
        samples += 1;
        y += dy;
    }

    assert!(samples > 1000);
    let failure_ratio = f64::from(fast_failures) / f64::from(samples);
    assert!(
        failure_ratio >= 0.1,
        "fast tier failed on only {failure_ratio} of near-degenerate samples"
    );
}

#[test]
#[timeout(120000)]
fn orient2d_random_variants_agree() {
    let mut rng = StdRng::seed_from_u64(0x5eed_2d01);
    for _ in 0..100_000 {
        let a = Coord::new(narrow_rand(&mut rng), narrow_rand(&mut rng));
        let b = Coord::new(narrow_rand(&mut rng), narrow_rand(&mut rng));
        let c = Coord::new(narrow_rand(&mut rng), narrow_rand(&mut rng));
        let exact = orient2d_exact(&a, &b, &c);
        let slow = orient2d_slow(&a, &b, &c);
        let adaptive = orient2d(&a, &b, &c);
        assert!(
            same_sign(exact, slow) && same_sign(exact, adaptive),
            "disagreement for {a:?} {b:?} {c:?}"
        );
    }
}

#[test]
#[timeout(120000)]
fn orient2d_matches_reference_implementations() {
    let mut rng = StdRng::seed_from_u64(0x5eed_2d02);
    for _ in 0..10_000 {
        let a = Coord::new(narrow_rand(&mut rng), narrow_rand(&mut rng));
        let b = Coord::new(narrow_rand(&mut rng), narrow_rand(&mut rng));
        let c = Coord::new(narrow_rand(&mut rng), narrow_rand(&mut rng));
        if let Some(reference) = orient2d_reference_sign(&a, &b, &c) {
            assert_eq!(sign_of(orient2d(&a, &b, &c)), reference);
            assert_eq!(sign_of(orient2d_exact(&a, &b, &c)), reference);
        }
    }
}

#[test]
#[timeout(120000)]
fn orient2d_wide_range_variants_agree() {
    // Coordinates spanning 120 binades leave the exact formulations with
    // components of wildly different magnitudes; the sign contract must
    // survive that.
    let mut rng = StdRng::seed_from_u64(0x5eed_2d04);
    for _ in 0..20_000 {
        let a = Coord::new(full_rand(&mut rng), full_rand(&mut rng));
        let b = Coord::new(full_rand(&mut rng), full_rand(&mut rng));
        let c = Coord::new(full_rand(&mut rng), full_rand(&mut rng));
        let exact = orient2d_exact(&a, &b, &c);
        let slow = orient2d_slow(&a, &b, &c);
        let adaptive = orient2d(&a, &b, &c);
        assert!(
            same_sign(exact, slow) && same_sign(exact, adaptive),
            "disagreement for {a:?} {b:?} {c:?}"
        );
    }
}

#[test]
fn orient2d_is_deterministic() {
    let a = Coord::new(0.1, 0.2);
    let b = Coord::new(1.0e8, 1.5e8);
    let c = Coord::new(2.0e8, 3.0e8 + 0.5);
    let first = orient2d(&a, &b, &c);
    for _ in 0..10 {
        assert_eq!(orient2d(&a, &b, &c).to_bits(), first.to_bits());
    }
}

fn property_orient2d_consistency(
    ax: f64,
    ay: f64,
    bx: f64,
    by: f64,
    cx: f64,
    cy: f64,
) -> TestResult {
    if !within_limits(&[ax, ay, bx, by, cx, cy]) {
        return TestResult::discard();
    }
    let a = Coord::new(ax, ay);
    let b = Coord::new(bx, by);
    let c = Coord::new(cx, cy);
    let Some(reference) = orient2d_reference_sign(&a, &b, &c) else {
        return TestResult::discard();
    };
    TestResult::from_bool(sign_of(orient2d(&a, &b, &c)) == reference)
}

#[test]
#[timeout(60000)]
fn orient2d_property_consistency() {
    QuickCheck::new()
        .tests(QC_TESTS)
        .max_tests(QC_MAX_TESTS)
        .quickcheck(property_orient2d_consistency as fn(f64, f64, f64, f64, f64, f64) -> TestResult);
}
