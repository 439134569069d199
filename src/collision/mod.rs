//! 2D sliding collision for a disk moving through static boundaries
//!
//! [`step::move_puck`] is the entry point; [`world::tick`] wraps it with
//! keyboard-style input.

pub mod boundary;
pub mod dir_mask;
pub mod pcs;
pub mod step;
pub mod world;

pub use boundary::{BoundaryLine, BoundaryPoint, Scene};
pub use dir_mask::{DirMask, MaskState};
pub use pcs::CollidableSet;
pub use step::{MovingPuck, Puck, StepConfig, find_intersections, move_puck, step_to_next_intersection};
pub use world::{Thrust, TickInput, Turn, World, tick};
