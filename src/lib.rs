//! Dg - generic geometry and 2D sliding collision
//!
//! Core modules:
//! - `math`: Vectors, matrices, quaternions and VQS transforms
//! - `geometry`: Primitives and closest-point / intersection / contact queries
//! - `collision`: Direction mask and the disk-vs-scene sliding step
//! - `settings`: Data-driven physics and demo configuration

pub mod collision;
pub mod geometry;
pub mod math;
pub mod settings;

pub use collision::{DirMask, Puck, Scene, StepConfig, TickInput, World, move_puck, tick};
pub use math::{Matrix, Quaternion, Real, Vector, Vqs};
pub use settings::Settings;

/// Simulation and collision constants
pub mod consts {
    /// Fixed demo timestep (60 Hz)
    pub const SIM_DT: f64 = 1.0 / 60.0;

    /// Slack on squared distance when deciding a contact is touching
    pub const EPSILON_INTERSECTS: f64 = 1.0e-4;
    /// Speeds below this after sliding along a wall become zero
    pub const EPSILON_SPEED: f64 = 1.0e-4;
    /// Radius padding for broad phase and contact tests
    pub const EPSILON_RADIUS: f64 = 1.0e-4;
    /// Leftover tick time below this is dropped
    pub const EPSILON_TIME: f64 = 1.0e-5;
    /// Contact/advance rounds per tick (2 is the minimum for sliding)
    pub const MAX_STEP_ITERATIONS: u32 = 2;

    /// Player defaults
    pub const DEFAULT_MOVE_RATE: f64 = 2.0;
    pub const DEFAULT_TURN_RATE: f64 = 2.0;
    pub const MOVE_RATE_STEP: f64 = 0.5;

    /// Demo arena layout
    pub mod arena {
        /// Side of the square arena
        pub const SIZE: f64 = 10.0;
        /// Gap between the arena edge and its walls
        pub const MARGIN: f64 = 0.5;
        pub const CROSS_CENTER: [f64; 2] = [5.0, 5.0];
        /// Half the width of each cross arm; arms reach four times this
        pub const CROSS_HALF_WIDTH: f64 = 0.6;
        pub const DISK_CENTER: [f64; 2] = [1.0, 8.0];
        pub const DISK_RADIUS: f64 = 0.3;
        pub const PUCK_RADIUS: f64 = 0.3;
        /// Player start, just clear of the bottom-left corner
        pub const SPAWN: [f64; 2] = [0.9, 0.9];
        /// Scattered disks keep out of this square at the spawn corner
        pub const SPAWN_CLEARANCE: f64 = 1.5;
    }
}
