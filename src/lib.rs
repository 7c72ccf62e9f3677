//! Adaptive precision floating-point arithmetic and robust geometric predicates.
//!
//! This crate computes the sign of small geometric determinants exactly,
//! despite native floating-point rounding. Each predicate first evaluates a
//! cheap floating-point estimate together with a conservative error bound;
//! only when the bound cannot certify the sign does the computation escalate,
//! tier by tier, to exact expansion arithmetic. Most calls finish in the fast
//! tier; near-degenerate inputs automatically pay for the precision they need.
//!
//! # Quick Start
//!
//! ```rust
//! use robust_predicates::{orient2d, Coord};
//!
//! let a = Coord::new(0.0, 0.0);
//! let b = Coord::new(1.0, 0.0);
//! let c = Coord::new(0.0, 1.0);
//!
//! // Positive: c lies to the left of the directed line a -> b.
//! assert!(orient2d(&a, &b, &c) > 0.0);
//! ```
//!
//! # Predicate families
//!
//! Four families are provided, each in four variants:
//!
//! - [`orient2d`]: which side of a directed line a point lies on.
//! - [`orient3d`]: which side of an oriented plane a point lies on.
//! - [`incircle`]: whether a point lies inside the circle through three points.
//! - [`insphere`]: whether a point lies inside the sphere through four points.
//!
//! The unsuffixed function is the adaptive entry point and the recommended
//! one. `*_fast` is plain floating-point arithmetic whose sign can be wrong
//! near degeneracy; `*_exact` and `*_slow` are two independent always-exact
//! formulations, kept for cross-validation.
//!
//! Exactly degenerate inputs (collinear, coplanar, cocircular, cospherical)
//! return exactly `0.0` from the exact and adaptive variants; no epsilon
//! tolerance is involved.
//!
//! # Precision model
//!
//! All arithmetic is performed in [`Float`]. Machine epsilon, Dekker's
//! splitter and the per-predicate error-bound coefficients are calibrated at
//! runtime by [`bounds`] the first time they are needed, so the crate adapts
//! to the actual rounding behaviour of the execution environment. The first
//! adaptive predicate call additionally runs a one-time self-check that
//! cross-validates the fast, exact and adaptive orient2d paths and panics on
//! mismatch.
//!
//! NaN and infinite inputs are not guarded; they propagate unspecified
//! results.

/// The floating-point type used throughout the crate.
///
/// All error bounds are calibrated at runtime from this type's observed
/// rounding behaviour, so retargeting the alias retargets the whole crate.
pub type Float = f64;

pub mod eft;
pub mod exact;
pub mod expansion;

mod bounds;
mod geometry;

pub use bounds::{bounds, PredicateBounds};
pub use exact::Expansion;
pub use geometry::{
    incircle, incircle2p, incircle2p_fast, incircle_exact, incircle_fast, incircle_slow, insphere,
    insphere_exact, insphere_fast, insphere_slow, orient2d, orient2d_exact, orient2d_fast,
    orient2d_slow, orient3d, orient3d_exact, orient3d_fast, orient3d_slow, Coord, Coord3,
};
