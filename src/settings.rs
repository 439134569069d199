//! Physics and demo settings
//!
//! Loaded from a JSON file; every field is optional and falls back to the
//! defaults below.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::collision::{Scene, StepConfig, World};
use crate::consts;

/// Demo run configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Physics ===
    /// Collision tolerances and iteration cap
    pub step: StepConfig<f32>,
    /// Radians per second while turning
    pub turn_rate: f32,
    /// Player speed while a move key is held
    pub move_rate: f32,

    // === Timing ===
    /// Ticks per simulated second
    pub frame_rate: f32,
    /// Length of the headless run
    pub simulated_seconds: f32,

    // === Scene ===
    /// Custom scene; the cross arena is used when absent
    pub scene: Option<Scene<f32>>,
    /// Seed for scattered disks
    pub scene_seed: u64,
    /// Extra disks scattered into the arena
    pub extra_disks: usize,

    // === Input ===
    /// Seed for the random-walk driver
    pub input_seed: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            // Physics
            step: StepConfig::default(),
            turn_rate: consts::DEFAULT_TURN_RATE as f32,
            move_rate: consts::DEFAULT_MOVE_RATE as f32,

            // Timing
            frame_rate: (1.0 / consts::SIM_DT) as f32,
            simulated_seconds: 20.0,

            // Scene
            scene: None,
            scene_seed: 1,
            extra_disks: 0,

            // Input
            input_seed: 42,
        }
    }
}

impl Settings {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Load settings from a JSON file, falling back to defaults
    pub fn load(path: &Path) -> Self {
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) => {
                log::warn!("Could not read {}: {e}; using default settings", path.display());
                return Self::default();
            }
        };
        match Self::from_json(&json) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("Invalid settings in {}: {e}; using default settings", path.display());
                Self::default()
            }
        }
    }

    /// Fixed timestep implied by `frame_rate`
    pub fn dt(&self) -> f32 {
        if self.frame_rate > 0.0 {
            1.0 / self.frame_rate
        } else {
            consts::SIM_DT as f32
        }
    }

    /// Number of ticks in the headless run
    pub fn total_ticks(&self) -> u64 {
        (self.simulated_seconds.max(0.0) * self.frame_rate.max(0.0)).round() as u64
    }

    /// Build the scene and player these settings describe
    pub fn build_world(&self) -> World<f32> {
        let mut scene = match &self.scene {
            Some(scene) => scene.clone(),
            None => Scene::cross_arena(),
        };
        if self.extra_disks > 0 {
            let added = scene.scatter_disks(self.scene_seed, self.extra_disks);
            log::info!("Scattered {added} extra disks (seed {})", self.scene_seed);
        }

        let mut world = World::new(scene);
        world.turn_rate = self.turn_rate;
        world.move_rate = self.move_rate;
        world.config = self.step;
        world
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let s = Settings::default();
        assert_eq!(s.step.max_iterations, 2);
        assert_eq!(s.move_rate, 2.0);
        assert!((s.dt() - 1.0 / 60.0).abs() < 1.0e-6);
        assert_eq!(s.total_ticks(), 1200);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let s = Settings::from_json(r#"{ "turn_rate": 3.5, "step": { "max_iterations": 5 } }"#)
            .unwrap();
        assert_eq!(s.turn_rate, 3.5);
        assert_eq!(s.step.max_iterations, 5);
        assert_eq!(s.step.epsilon_speed, StepConfig::<f32>::default().epsilon_speed);
        assert_eq!(s.move_rate, Settings::default().move_rate);
    }

    #[test]
    fn test_json_round_trip() {
        let s = Settings {
            extra_disks: 3,
            scene_seed: 9,
            ..Settings::default()
        };
        let back = Settings::from_json(&s.to_json().unwrap()).unwrap();
        assert_eq!(back, s);
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(Settings::from_json("{ \"turn_rate\": \"fast\" }").is_err());
    }

    #[test]
    fn test_load_missing_file_falls_back() {
        let s = Settings::load(Path::new("/nonexistent/dg-settings.json"));
        assert_eq!(s, Settings::default());
    }

    #[test]
    fn test_build_world() {
        let s = Settings {
            turn_rate: 1.0,
            extra_disks: 2,
            ..Settings::default()
        };
        let world = s.build_world();
        assert_eq!(world.turn_rate, 1.0);
        assert_eq!(world.scene.lines.len(), 16);
        assert!(world.scene.disks.len() > 1);

        let custom = Settings {
            scene: Some(Scene::default()),
            ..Settings::default()
        };
        assert!(custom.build_world().scene.is_empty());
    }
}
