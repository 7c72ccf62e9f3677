mod common;

use common::{narrow_rand, same_sign, sign_of, within_limits};
use geometry_predicates::incircle as gp_incircle;
use ntest::timeout;
use quickcheck::{QuickCheck, TestResult};
use rand::rngs::StdRng;
use rand::SeedableRng;
use robust_predicates::{
    incircle, incircle2p, incircle2p_fast, incircle_exact, incircle_slow, Coord,
};

const QC_TESTS: u64 = 200;
const QC_MAX_TESTS: u64 = 20_000;

fn robust_coord(c: &Coord) -> robust::Coord<f64> {
    robust::Coord { x: c.x, y: c.y }
}

fn incircle_reference_sign(a: &Coord, b: &Coord, c: &Coord, d: &Coord) -> Option<i32> {
    let gp_sign = sign_of(gp_incircle(
        [a.x, a.y],
        [b.x, b.y],
        [c.x, c.y],
        [d.x, d.y],
    ));
    let robust_sign = sign_of(robust::incircle(
        robust_coord(a),
        robust_coord(b),
        robust_coord(c),
        robust_coord(d),
    ));
    if gp_sign == robust_sign {
        Some(gp_sign)
    } else {
        None
    }
}

#[test]
fn incircle_boundary_table() {
    // Circumcircle of the unit right triangle: center (0.5, 0.5), r^2 = 0.5.
    let a = Coord::new(0.0, 0.0);
    let b = Coord::new(1.0, 0.0);
    let c = Coord::new(0.0, 1.0);
    let cases = [
        (Coord::new(0.0, 0.0), 0),
        (Coord::new(1.0, 1.0), 0),
        (Coord::new(1.1, 1.1), -1),
        (Coord::new(0.5, 0.5), 1),
    ];
    for (d, expected) in cases {
        assert_eq!(sign_of(incircle(&a, &b, &c, &d)), expected, "d = {d:?}");
        assert_eq!(sign_of(incircle_exact(&a, &b, &c, &d)), expected, "d = {d:?}");
        assert_eq!(sign_of(incircle_slow(&a, &b, &c, &d)), expected, "d = {d:?}");
    }
}

#[test]
fn incircle2p_boundary_table() {
    // Circle with diameter ab: center (0.5, 0), r = 0.5.
    let a = Coord::new(0.0, 0.0);
    let b = Coord::new(1.0, 0.0);
    let cases = [
        (Coord::new(0.0, 0.0), 0),
        (Coord::new(1.0, 0.0), 0),
        (Coord::new(0.5, 1.0), -1),
        (Coord::new(0.5, 0.1), 1),
    ];
    for (c, expected) in cases {
        assert_eq!(sign_of(incircle2p(&a, &b, &c)), expected, "c = {c:?}");
    }
}

#[test]
#[timeout(120000)]
fn incircle2p_variants_usually_agree() {
    // The fast two-point variant is uncompensated, so only require that the
    // two stay in lockstep away from the circle boundary.
    let mut rng = StdRng::seed_from_u64(0x5eed_2c01);
    let mut agreements = 0u32;
    let samples = 10_000u32;
    for _ in 0..samples {
        let a = Coord::new(narrow_rand(&mut rng), narrow_rand(&mut rng));
        let b = Coord::new(narrow_rand(&mut rng), narrow_rand(&mut rng));
        let c = Coord::new(narrow_rand(&mut rng), narrow_rand(&mut rng));
        if same_sign(incircle2p(&a, &b, &c), incircle2p_fast(&a, &b, &c)) {
            agreements += 1;
        }
    }
    assert!(
        f64::from(agreements) / f64::from(samples) > 0.99,
        "compensated and fast two-point tests diverged on random inputs"
    );
}

#[test]
#[timeout(120000)]
fn incircle_random_variants_agree() {
    let mut rng = StdRng::seed_from_u64(0x5eed_2c02);
    for _ in 0..20_000 {
        let a = Coord::new(narrow_rand(&mut rng), narrow_rand(&mut rng));
        let b = Coord::new(narrow_rand(&mut rng), narrow_rand(&mut rng));
        let c = Coord::new(narrow_rand(&mut rng), narrow_rand(&mut rng));
        let d = Coord::new(narrow_rand(&mut rng), narrow_rand(&mut rng));
        let exact = incircle_exact(&a, &b, &c, &d);
        let slow = incircle_slow(&a, &b, &c, &d);
        let adaptive = incircle(&a, &b, &c, &d);
        assert!(
            same_sign(exact, slow) && same_sign(exact, adaptive),
            "disagreement for {a:?} {b:?} {c:?} {d:?}"
        );
    }
}

#[test]
#[timeout(120000)]
fn incircle_matches_reference_implementations() {
    let mut rng = StdRng::seed_from_u64(0x5eed_2c03);
    for _ in 0..5_000 {
        let a = Coord::new(narrow_rand(&mut rng), narrow_rand(&mut rng));
        let b = Coord::new(narrow_rand(&mut rng), narrow_rand(&mut rng));
        let c = Coord::new(narrow_rand(&mut rng), narrow_rand(&mut rng));
        let d = Coord::new(narrow_rand(&mut rng), narrow_rand(&mut rng));
        if let Some(reference) = incircle_reference_sign(&a, &b, &c, &d) {
            assert_eq!(sign_of(incircle(&a, &b, &c, &d)), reference);
            assert_eq!(sign_of(incircle_exact(&a, &b, &c, &d)), reference);
        }
    }
}

#[test]
fn incircle_near_cocircular_variants_agree() {
    // Points on the unit circle, with the query point perturbed around it.
    let a = Coord::new(1.0, 0.0);
    let b = Coord::new(0.0, 1.0);
    let c = Coord::new(-1.0, 0.0);
    for step in -500..=500 {
        let dy = f64::from(step) * 1.0e-15;
        let d = Coord::new(0.0, -1.0 + dy);
        let exact = incircle_exact(&a, &b, &c, &d);
        let slow = incircle_slow(&a, &b, &c, &d);
        let adaptive = incircle(&a, &b, &c, &d);
        assert!(
            same_sign(exact, slow) && same_sign(exact, adaptive),
            "disagreement at dy = {dy}"
        );
        // The query point is inside exactly when it rounded above -1.
        assert_eq!(sign_of(exact), sign_of(d.y + 1.0));
    }
}

fn property_incircle_consistency(
    ax: f64,
    ay: f64,
    bx: f64,
    by: f64,
    dx: f64,
    dy: f64,
) -> TestResult {
    if !within_limits(&[ax, ay, bx, by, dx, dy]) {
        return TestResult::discard();
    }
    let a = Coord::new(ax, ay);
    let b = Coord::new(bx, by);
    let c = Coord::new(ay, bx);
    let d = Coord::new(dx, dy);
    let Some(reference) = incircle_reference_sign(&a, &b, &c, &d) else {
        return TestResult::discard();
    };
    TestResult::from_bool(sign_of(incircle(&a, &b, &c, &d)) == reference)
}

#[test]
#[timeout(60000)]
fn incircle_property_consistency() {
    QuickCheck::new()
        .tests(QC_TESTS)
        .max_tests(QC_MAX_TESTS)
        .quickcheck(property_incircle_consistency as fn(f64, f64, f64, f64, f64, f64) -> TestResult);
}
