mod common;

use common::{narrow_rand, same_sign, sign_of};
use geometry_predicates::insphere as gp_insphere;
use ntest::timeout;
use rand::rngs::StdRng;
use rand::SeedableRng;
use robust_predicates::{insphere, insphere_exact, insphere_slow, orient3d, Coord3};

fn robust_coord(c: &Coord3) -> robust::Coord3D<f64> {
    robust::Coord3D {
        x: c.x,
        y: c.y,
        z: c.z,
    }
}

fn gp_coord(c: &Coord3) -> [f64; 3] {
    [c.x, c.y, c.z]
}

fn insphere_reference_sign(
    a: &Coord3,
    b: &Coord3,
    c: &Coord3,
    d: &Coord3,
    e: &Coord3,
) -> Option<i32> {
    let gp_sign = sign_of(gp_insphere(
        gp_coord(a),
        gp_coord(b),
        gp_coord(c),
        gp_coord(d),
        gp_coord(e),
    ));
    let robust_sign = sign_of(robust::insphere(
        robust_coord(a),
        robust_coord(b),
        robust_coord(c),
        robust_coord(d),
        robust_coord(e),
    ));
    if gp_sign == robust_sign {
        Some(gp_sign)
    } else {
        None
    }
}

/// Positively oriented tetrahedron whose circumsphere has center
/// (0.5, 0.5, -0.5) and squared radius 0.75.
fn base_tetrahedron() -> [Coord3; 4] {
    let a = Coord3::new(0.0, 0.0, 0.0);
    let b = Coord3::new(1.0, 0.0, 0.0);
    let c = Coord3::new(0.0, 1.0, 0.0);
    let d = Coord3::new(0.0, 0.0, -1.0);
    debug_assert!(orient3d(&a, &b, &c, &d) > 0.0);
    [a, b, c, d]
}

#[test]
fn insphere_detects_inside_and_outside() {
    let [a, b, c, d] = base_tetrahedron();
    let center = Coord3::new(0.5, 0.5, -0.5);
    let far = Coord3::new(10.0, 10.0, 10.0);
    assert!(insphere(&a, &b, &c, &d, &center) > 0.0);
    assert!(insphere(&a, &b, &c, &d, &far) < 0.0);
    assert!(insphere_exact(&a, &b, &c, &d, &center) > 0.0);
    assert!(insphere_exact(&a, &b, &c, &d, &far) < 0.0);
}

#[test]
fn insphere_detects_cospherical() {
    let [a, b, c, d] = base_tetrahedron();
    // (1, 1, -1) is at squared distance 0.75 from the circumcenter.
    let e = Coord3::new(1.0, 1.0, -1.0);
    assert_eq!(insphere(&a, &b, &c, &d, &e), 0.0);
    assert_eq!(insphere_exact(&a, &b, &c, &d, &e), 0.0);
    assert_eq!(insphere_slow(&a, &b, &c, &d, &e), 0.0);
}

/// Slide the query point through the sphere along one axis. All certified
/// variants must agree at every step.
#[test]
#[timeout(120000)]
fn insphere_near_cospherical_variants_agree() {
    let [a, b, c, d] = base_tetrahedron();
    for step in -400..=400 {
        let dz = f64::from(step) * 1.0e-15;
        let e = Coord3::new(1.0, 1.0, -1.0 + dz);
        let exact = insphere_exact(&a, &b, &c, &d, &e);
        let slow = insphere_slow(&a, &b, &c, &d, &e);
        let adaptive = insphere(&a, &b, &c, &d, &e);
        assert!(
            same_sign(exact, slow) && same_sign(exact, adaptive),
            "disagreement at dz = {dz}: exact {exact}, slow {slow}, adaptive {adaptive}"
        );
        // Moving up from -1 moves the point toward the center.
        assert_eq!(sign_of(exact), sign_of(e.z + 1.0));
    }
}

#[test]
#[timeout(300000)]
fn insphere_random_variants_agree() {
    let mut rng = StdRng::seed_from_u64(0x5eed_5501);
    for _ in 0..5_000 {
        let pts: Vec<Coord3> = (0..5)
            .map(|_| Coord3::new(narrow_rand(&mut rng), narrow_rand(&mut rng), narrow_rand(&mut rng)))
            .collect();
        let exact = insphere_exact(&pts[0], &pts[1], &pts[2], &pts[3], &pts[4]);
        let slow = insphere_slow(&pts[0], &pts[1], &pts[2], &pts[3], &pts[4]);
        let adaptive = insphere(&pts[0], &pts[1], &pts[2], &pts[3], &pts[4]);
        assert!(
            same_sign(exact, slow) && same_sign(exact, adaptive),
            "disagreement for {pts:?}"
        );
    }
}

#[test]
#[timeout(300000)]
fn insphere_matches_reference_implementations() {
    let mut rng = StdRng::seed_from_u64(0x5eed_5502);
    for _ in 0..2_000 {
        let pts: Vec<Coord3> = (0..5)
            .map(|_| Coord3::new(narrow_rand(&mut rng), narrow_rand(&mut rng), narrow_rand(&mut rng)))
            .collect();
        if let Some(reference) =
            insphere_reference_sign(&pts[0], &pts[1], &pts[2], &pts[3], &pts[4])
        {
            assert_eq!(
                sign_of(insphere(&pts[0], &pts[1], &pts[2], &pts[3], &pts[4])),
                reference
            );
            assert_eq!(
                sign_of(insphere_exact(&pts[0], &pts[1], &pts[2], &pts[3], &pts[4])),
                reference
            );
        }
    }
}
