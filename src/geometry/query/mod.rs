//! Geometric queries between primitives
//!
//! - [`cp`]: closest points
//! - [`ti`]: test for intersection (yes/no, or a containment code)
//! - [`fi`]: find the intersection (parameters and points)
//! - [`fpc`]: first point of contact between moving objects

pub mod cp;
pub mod fi;
pub mod fpc;
pub mod ti;

/// Outcome reported by queries that can end in more than one way
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryCode {
    Success,
    /// Inputs are parallel, so no unique answer exists
    Parallel,
    Intersecting,
    NotIntersecting,
    /// Inputs lie on top of each other (e.g. a line inside a plane)
    Overlapping,
    CompletelyInside,
    CompletelyOutside,
}
