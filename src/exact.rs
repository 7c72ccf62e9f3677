//! Owned exact values backed by `Vec` expansions.
//!
//! [`Expansion`] wraps the slice-based arithmetic of [`crate::expansion`] in
//! a value type with operator overloads, at the cost of allocation. The
//! adaptive predicates never touch this module; it exists for the `*_slow`
//! predicate variants and for tests, where clarity beats speed.

use std::cmp::Ordering;
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::bounds::bounds;
use crate::eft::two_diff;
use crate::expansion::{fast_expansion_sum_zeroelim, scale_expansion_zeroelim};
use crate::Float;

/// An exact real value represented as a nonoverlapping expansion of [`Float`]
/// components stored in increasing magnitude order. Zero is the empty
/// expansion.
#[derive(Clone, Debug, PartialEq)]
pub struct Expansion {
    components: Vec<Float>,
}

impl Expansion {
    /// Returns the zero value.
    pub fn zero() -> Self {
        Self {
            components: Vec::new(),
        }
    }

    /// Creates an exact value from a single [`Float`].
    pub fn from_float(value: Float) -> Self {
        debug_assert!(!value.is_nan(), "NaN components are not supported");
        if value == 0.0 {
            Self::zero()
        } else {
            Self {
                components: vec![value],
            }
        }
    }

    /// Creates the exact difference `a - b` as a two-component expansion.
    ///
    /// This is the entry point the slow predicates use to lift native
    /// coordinates into exact arithmetic without losing the rounding error
    /// of the initial subtraction.
    pub fn from_diff(a: Float, b: Float) -> Self {
        let (hi, lo) = two_diff(a, b);
        Self::from_components(vec![lo, hi])
    }

    /// Returns a floating-point approximation (sum of all components).
    pub fn approx(&self) -> Float {
        self.components.iter().copied().sum()
    }

    /// Returns the most significant component, which carries the sign and
    /// approximate magnitude of the exact value. Zero yields `0.0`.
    pub fn most_significant(&self) -> Float {
        self.components.last().copied().unwrap_or(0.0)
    }

    /// Exposes the underlying expansion.
    pub fn components(&self) -> &[Float] {
        &self.components
    }

    /// Reports whether the value is exactly zero.
    pub fn is_zero(&self) -> bool {
        self.components.is_empty()
    }

    /// Ensures the internal expansion satisfies required invariants.
    pub fn check_invariants(&self) -> Result<(), &'static str> {
        for &component in &self.components {
            if !component.is_finite() {
                return Err("Expansion component must be finite");
            }
            if component == 0.0 {
                return Err("Expansion components must be nonzero");
            }
        }
        if !is_sorted_by_magnitude(&self.components) {
            return Err("Expansion components must be sorted by increasing magnitude");
        }
        if !is_nonoverlapping_sorted(&self.components) {
            return Err("Expansion components must be nonoverlapping");
        }
        Ok(())
    }

    pub(crate) fn from_components(mut components: Vec<Float>) -> Self {
        components.retain(|c| *c != 0.0);
        let result = Self { components };
        debug_assert!(result.check_invariants().is_ok());
        result
    }

    #[cfg(test)]
    pub(crate) fn from_raw_components(components: Vec<Float>) -> Self {
        Self { components }
    }

    /// Adds another exact value, returning the sum.
    pub fn add_expansion(&self, rhs: &Self) -> Self {
        if self.is_zero() {
            return rhs.clone();
        }
        if rhs.is_zero() {
            return self.clone();
        }
        let mut sum = vec![0.0; self.components.len() + rhs.components.len()];
        let len = fast_expansion_sum_zeroelim(&self.components, &rhs.components, &mut sum);
        sum.truncate(len);
        let result = Self::from_components(sum);
        debug_assert!(result.check_invariants().is_ok());
        result
    }

    /// Multiplies another exact value, returning the product.
    ///
    /// Distributes over the components of `rhs`: each scales `self` through
    /// [`scale_expansion_zeroelim`], and the partial products accumulate with
    /// [`fast_expansion_sum_zeroelim`].
    pub fn mul_expansion(&self, rhs: &Self) -> Self {
        if self.is_zero() || rhs.is_zero() {
            return Self::zero();
        }
        let splitter = bounds().splitter;
        let mut acc: Vec<Float> = Vec::new();
        let mut partial = vec![0.0; 2 * self.components.len()];
        for &b in &rhs.components {
            let plen = scale_expansion_zeroelim(&self.components, b, splitter, &mut partial);
            let mut sum = vec![0.0; acc.len() + plen];
            let slen = fast_expansion_sum_zeroelim(&acc, &partial[..plen], &mut sum);
            sum.truncate(slen);
            acc = sum;
        }
        let result = Self::from_components(acc);
        debug_assert!(result.check_invariants().is_ok());
        result
    }
}

impl Default for Expansion {
    fn default() -> Self {
        Self::zero()
    }
}

impl From<Float> for Expansion {
    fn from(value: Float) -> Self {
        Expansion::from_float(value)
    }
}

impl<'b> Add<&'b Expansion> for &Expansion {
    type Output = Expansion;

    fn add(self, rhs: &'b Expansion) -> Expansion {
        self.add_expansion(rhs)
    }
}

impl Add for Expansion {
    type Output = Expansion;

    fn add(self, rhs: Expansion) -> Expansion {
        (&self).add(&rhs)
    }
}

impl Add<&Expansion> for Expansion {
    type Output = Expansion;

    fn add(self, rhs: &Expansion) -> Expansion {
        (&self).add(rhs)
    }
}

impl AddAssign for Expansion {
    fn add_assign(&mut self, rhs: Self) {
        *self = (&*self).add(&rhs);
    }
}

impl AddAssign<&Expansion> for Expansion {
    fn add_assign(&mut self, rhs: &Expansion) {
        *self = (&*self).add(rhs);
    }
}

impl<'b> Mul<&'b Expansion> for &Expansion {
    type Output = Expansion;

    fn mul(self, rhs: &'b Expansion) -> Expansion {
        self.mul_expansion(rhs)
    }
}

impl Mul for Expansion {
    type Output = Expansion;

    fn mul(self, rhs: Expansion) -> Expansion {
        (&self).mul(&rhs)
    }
}

impl Mul<&Expansion> for Expansion {
    type Output = Expansion;

    fn mul(self, rhs: &Expansion) -> Expansion {
        (&self).mul(rhs)
    }
}

impl MulAssign for Expansion {
    fn mul_assign(&mut self, rhs: Self) {
        *self = (&*self).mul(&rhs);
    }
}

impl MulAssign<&Expansion> for Expansion {
    fn mul_assign(&mut self, rhs: &Expansion) {
        *self = (&*self).mul(rhs);
    }
}

impl Neg for Expansion {
    type Output = Expansion;

    fn neg(self) -> Expansion {
        let components: Vec<Float> = self.components().iter().map(|c| -c).collect();
        Expansion::from_components(components)
    }
}

impl Neg for &Expansion {
    type Output = Expansion;

    fn neg(self) -> Expansion {
        self.clone().neg()
    }
}

impl<'b> Sub<&'b Expansion> for &Expansion {
    type Output = Expansion;

    fn sub(self, rhs: &'b Expansion) -> Expansion {
        self.add(&(-rhs))
    }
}

impl Sub for Expansion {
    type Output = Expansion;

    fn sub(self, rhs: Expansion) -> Expansion {
        (&self).sub(&rhs)
    }
}

impl Sub<&Expansion> for Expansion {
    type Output = Expansion;

    fn sub(self, rhs: &Expansion) -> Expansion {
        (&self).sub(rhs)
    }
}

impl SubAssign for Expansion {
    fn sub_assign(&mut self, rhs: Self) {
        *self = (&*self).sub(&rhs);
    }
}

impl SubAssign<&Expansion> for Expansion {
    fn sub_assign(&mut self, rhs: &Expansion) {
        *self = (&*self).sub(rhs);
    }
}

fn compare_magnitude(lhs: Float, rhs: Float) -> Ordering {
    lhs.abs()
        .partial_cmp(&rhs.abs())
        .unwrap_or(Ordering::Equal)
}

fn is_sorted_by_magnitude(components: &[Float]) -> bool {
    components
        .windows(2)
        .all(|pair| compare_magnitude(pair[0], pair[1]) != Ordering::Greater)
}

/// Returns true if the slice is sorted and nonoverlapping according to
/// Shewchuk's definition: each component's magnitude lies strictly below the
/// lowest nonzero bit of its successor, so their bit ranges never intersect.
fn is_nonoverlapping_sorted(components: &[Float]) -> bool {
    components.windows(2).all(|pair| {
        let low = pair[0];
        let high = pair[1];
        compare_magnitude(low, high) != Ordering::Greater
            && low.abs() < lowest_set_bit(high)
    })
}

/// Value of the lowest nonzero bit of `value`'s significand. Requires a
/// finite, nonzero argument.
fn lowest_set_bit(value: Float) -> Float {
    let bits = value.abs().to_bits();
    let mantissa_bits = bits & ((1_u64 << 52) - 1);
    let biased_exponent = (bits >> 52) as i32;
    let (significand, exponent) = if biased_exponent == 0 {
        (mantissa_bits, -1074)
    } else {
        (mantissa_bits | (1_u64 << 52), biased_exponent - 1075)
    };
    pow2(exponent + significand.trailing_zeros() as i32)
}

/// `2^exponent` for exponents down to the subnormal range, built directly
/// from the bit pattern.
fn pow2(exponent: i32) -> Float {
    if exponent >= -1022 {
        Float::from_bits(((exponent + 1023) as u64) << 52)
    } else {
        Float::from_bits(1_u64 << (exponent + 1074))
    }
}

#[cfg(test)]
mod tests {
    use super::Expansion;

    #[test]
    fn zero_is_empty() {
        assert!(Expansion::zero().is_zero());
        assert_eq!(Expansion::zero().most_significant(), 0.0);
        assert!(Expansion::from_float(0.0).is_zero());
    }

    #[test]
    fn from_diff_is_exact() {
        let d = Expansion::from_diff(1.0e16 + 2.0, 1.0);
        assert_eq!(d.approx(), 1.0e16 + 1.0);
        assert!(d.check_invariants().is_ok());
    }

    #[test]
    fn add_cancels_exactly() {
        let a = Expansion::from_float(1.0) + Expansion::from_float(1.0e-30);
        let b = -Expansion::from_float(1.0);
        let sum = a + b;
        assert_eq!(sum.components(), &[1.0e-30]);
    }

    #[test]
    fn mul_distributes_over_components() {
        let a = Expansion::from_diff(1.0e16 + 2.0, 1.0);
        let b = Expansion::from_float(3.0);
        let product = &a * &b;
        assert!(product.check_invariants().is_ok());
        assert_eq!(product.approx(), 3.0 * (1.0e16 + 1.0));
    }

    #[test]
    fn mul_by_zero_is_zero() {
        let a = Expansion::from_float(42.0);
        assert!((&a * &Expansion::zero()).is_zero());
    }

    #[test]
    fn sub_of_equal_values_is_zero() {
        let a = Expansion::from_diff(1.0 / 3.0, 1.0e-20);
        let diff = &a - &a.clone();
        assert!(diff.is_zero());
    }

    #[test]
    fn add_keeps_components_with_wide_magnitude_gaps() {
        // A component far below its successor's lowest bit is still a valid
        // expansion; only bit ranges that intersect are overlapping.
        let big = 2f64.powi(60);
        let sum = Expansion::from_float(big) + Expansion::from_float(1.0);
        assert_eq!(sum.components(), &[1.0, big]);
        let shift = Expansion::from_float(-big) + Expansion::from_float(1024.0);
        let gapped = sum + shift;
        assert_eq!(gapped.components(), &[1.0, 1024.0]);
        assert!(gapped.check_invariants().is_ok());
    }

    #[test]
    fn gapped_powers_of_two_satisfy_invariants() {
        let valid = Expansion::from_raw_components(vec![0.75, 1.0, 1024.0]);
        assert!(valid.check_invariants().is_ok());
    }

    #[test]
    #[should_panic(expected = "Expansion components must be nonoverlapping")]
    fn overlapping_components_fail_invariants() {
        // 0.75 and 1.5 share the 2^-1 bit.
        let invalid = Expansion::from_raw_components(vec![0.75, 1.5]);
        invalid.check_invariants().unwrap();
    }

    #[test]
    #[should_panic(expected = "Expansion components must be sorted by increasing magnitude")]
    fn unsorted_components_fail_invariants() {
        let invalid = Expansion::from_raw_components(vec![1.0, 0.5]);
        invalid.check_invariants().unwrap();
    }

    #[test]
    #[should_panic(expected = "Expansion component must be finite")]
    fn non_finite_component_fails_invariants() {
        let invalid = Expansion::from_raw_components(vec![f64::NAN]);
        invalid.check_invariants().unwrap();
    }
}
