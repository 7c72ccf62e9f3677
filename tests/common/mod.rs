#![allow(dead_code)]

use rand::rngs::StdRng;
use rand::Rng;

pub const MAG_LIMIT: f64 = 1.0e6;

pub fn sign_of(value: f64) -> i32 {
    if value > 0.0 {
        1
    } else if value < 0.0 {
        -1
    } else {
        0
    }
}

pub fn same_sign(a: f64, b: f64) -> bool {
    sign_of(a) == sign_of(b)
}

/// Random coordinate with a modest exponent spread. Differences between two
/// such values usually carry a nonzero rounding tail, which is what pushes
/// the adaptive predicates past their fast tier.
pub fn narrow_rand(rng: &mut StdRng) -> f64 {
    let mantissa: f64 = rng.gen_range(-1.0..1.0);
    let exponent: i32 = rng.gen_range(-15..=15);
    mantissa * 2.0_f64.powi(exponent)
}

/// Random coordinate with a wide exponent spread, for stressing the
/// cancellation behaviour of the exact formulations.
pub fn full_rand(rng: &mut StdRng) -> f64 {
    let mantissa: f64 = rng.gen_range(-1.0..1.0);
    let exponent: i32 = rng.gen_range(-60..=60);
    mantissa * 2.0_f64.powi(exponent)
}

pub fn within_limits(values: &[f64]) -> bool {
    values.iter().all(|v| v.is_finite() && v.abs() <= MAG_LIMIT)
}
