//! Per-frame driver for the player puck
//!
//! Reads held-key style input, updates heading and speed, then moves the
//! puck through the scene.

use serde::{Deserialize, Serialize};

use super::boundary::Scene;
use super::step::{Puck, StepConfig, move_puck};
use crate::consts::{self, arena};
use crate::math::{Real, vec2};

/// Which way the turn keys are held
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Turn {
    #[default]
    None,
    /// Counter-clockwise
    Left,
    /// Clockwise
    Right,
}

/// Which way the move keys are held
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Thrust {
    #[default]
    None,
    Forward,
    Reverse,
}

/// Input commands for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickInput {
    pub turn: Turn,
    pub thrust: Thrust,
    /// Raise the move rate (pressed this tick)
    pub faster: bool,
    /// Lower the move rate (pressed this tick)
    pub slower: bool,
    /// Return the puck to its spawn (pressed this tick)
    pub reset: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound = "T: Real")]
pub struct World<T> {
    pub scene: Scene<T>,
    pub player: Puck<T>,
    /// Where the player starts and returns to on reset
    pub spawn: Puck<T>,
    /// Radians per second while a turn key is held
    pub turn_rate: T,
    /// Speed while a move key is held
    pub move_rate: T,
    pub config: StepConfig<T>,
    /// Ticks simulated so far
    pub ticks: u64,
}

impl<T: Real> World<T> {
    /// A world with the player at the default spawn in the arena's corner
    pub fn new(scene: Scene<T>) -> Self {
        let spawn = Puck::new(
            vec2(T::lit(arena::SPAWN[0]), T::lit(arena::SPAWN[1])),
            T::lit(arena::PUCK_RADIUS),
            T::zero(),
        );
        Self {
            scene,
            player: spawn,
            spawn,
            turn_rate: T::lit(consts::DEFAULT_TURN_RATE),
            move_rate: T::lit(consts::DEFAULT_MOVE_RATE),
            config: StepConfig::default(),
            ticks: 0,
        }
    }

    pub fn reset(&mut self) {
        self.player = self.spawn;
    }
}

/// Advance the world by one timestep
pub fn tick<T: Real>(world: &mut World<T>, input: &TickInput, dt: T) {
    if input.reset {
        log::debug!("Resetting player to spawn");
        world.reset();
    }

    // Move rate adjustments apply before thrust so a held key picks them up
    let step = T::lit(consts::MOVE_RATE_STEP);
    if input.faster {
        world.move_rate = world.move_rate + step;
    }
    if input.slower {
        world.move_rate = (world.move_rate - step).max(T::zero());
    }

    world.player.speed = match input.thrust {
        Thrust::None => T::zero(),
        Thrust::Forward => world.move_rate,
        Thrust::Reverse => -world.move_rate,
    };

    let turn = match input.turn {
        Turn::None => T::zero(),
        Turn::Left => world.turn_rate,
        Turn::Right => -world.turn_rate,
    };
    world.player.angle = world.player.angle + turn * dt;

    let center = move_puck(&world.scene, &world.player, dt, &world.config);
    world.player.disk.set_center(center);
    world.ticks += 1;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn forward() -> TickInput {
        TickInput {
            thrust: Thrust::Forward,
            ..TickInput::default()
        }
    }

    #[test]
    fn test_idle_input_keeps_puck_still() {
        let mut world = World::<f32>::new(Scene::cross_arena());
        let start = world.player;
        for _ in 0..10 {
            tick(&mut world, &TickInput::default(), 1.0 / 60.0);
        }
        assert_eq!(world.player, start);
        assert_eq!(world.ticks, 10);
    }

    #[test]
    fn test_thrust_and_turn() {
        let mut world = World::<f64>::new(Scene::default());
        world.turn_rate = 1.0;
        world.move_rate = 2.0;

        tick(&mut world, &forward(), 0.5);
        assert!(world.player.disk.center().approx_eq(vec2(1.9, 0.9)));
        assert_eq!(world.player.speed, 2.0);

        let left = TickInput {
            turn: Turn::Left,
            ..TickInput::default()
        };
        tick(&mut world, &left, 0.5);
        assert_eq!(world.player.angle, 0.5);
        assert_eq!(world.player.speed, 0.0);

        let back_right = TickInput {
            turn: Turn::Right,
            thrust: Thrust::Reverse,
            ..TickInput::default()
        };
        tick(&mut world, &back_right, 0.5);
        assert_eq!(world.player.angle, 0.0);
        assert!(world.player.disk.center().approx_eq(vec2(0.9, 0.9)));
    }

    #[test]
    fn test_move_rate_steps() {
        let mut world = World::<f32>::new(Scene::default());
        let faster = TickInput {
            faster: true,
            ..forward()
        };
        tick(&mut world, &faster, 0.0);
        assert_eq!(world.move_rate, 2.5);
        assert_eq!(world.player.speed, 2.5);

        let slower = TickInput {
            slower: true,
            ..TickInput::default()
        };
        for _ in 0..10 {
            tick(&mut world, &slower, 0.0);
        }
        assert_eq!(world.move_rate, 0.0);
    }

    #[test]
    fn test_reset_returns_to_spawn() {
        let mut world = World::<f32>::new(Scene::cross_arena());
        for _ in 0..30 {
            tick(&mut world, &forward(), 1.0 / 60.0);
        }
        assert_ne!(world.player.disk.center(), world.spawn.disk.center());

        let reset = TickInput {
            reset: true,
            ..TickInput::default()
        };
        tick(&mut world, &reset, 1.0 / 60.0);
        assert_eq!(world.player, world.spawn);
    }

    #[test]
    fn test_driving_into_outer_wall_stops_short() {
        let mut world = World::<f32>::new(Scene::cross_arena());
        // face the bottom wall
        world.player.angle = -std::f32::consts::FRAC_PI_2;
        for _ in 0..120 {
            tick(&mut world, &forward(), 1.0 / 60.0);
        }
        let c = world.player.disk.center();
        let floor = arena::MARGIN as f32 + arena::PUCK_RADIUS as f32;
        assert!((c.y() - floor).abs() < 1.0e-3, "{c:?}");
        assert!((c.x() - 0.9).abs() < 1.0e-3, "{c:?}");
    }
}
