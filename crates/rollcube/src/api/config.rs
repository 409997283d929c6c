use serde::{Deserialize, Serialize};
use std::f32::consts::FRAC_PI_4;
use crate::core::time::FixedTimestep;

/// How a delayed animation task counts its frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DelayMode {
    /// The delay counts down inside the task's frame budget: a task with
    /// `frames = n` and `delay = d` mutates `n - d` times.
    #[default]
    Overlapping,
    /// The delay is lead time in front of the frame budget: the task waits
    /// `d` frames and then mutates exactly `n` times.
    LeadIn,
}

/// Tuning for the cube actor. Every field has a default, so a partial JSON
/// object (or `{}`) is a valid config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActorConfig {
    /// Frames per one-unit roll.
    pub frames_per_roll: u32,
    /// Gravity for a fall that ends in a respawn.
    pub respawn_gravity: f32,
    /// Frames of a fall that ends in a respawn.
    pub respawn_fall_frames: u32,
    /// Gravity for the slow fall into the goal.
    pub goal_gravity: f32,
    /// Frames of the fall into the goal.
    pub goal_fall_frames: u32,
    /// Frames of the completion spin; the scale-up waits this long and runs
    /// for three times as long.
    pub completion_frames: u32,
    /// Total angle (radians) of the completion spin.
    pub spin_angle: f32,
    /// Per-frame scale multiplier of the completion scale-up.
    pub growth_factor: f32,
    /// Height the actor spawns at.
    pub spawn_height: f32,
    /// Off-stage coordinate a completed actor is parked at.
    pub sentinel: f32,
    pub delay_mode: DelayMode,
}

impl Default for ActorConfig {
    fn default() -> Self {
        Self {
            frames_per_roll: 10,
            respawn_gravity: 0.02,
            respawn_fall_frames: 50,
            goal_gravity: 0.005,
            goal_fall_frames: 100,
            completion_frames: 25,
            spin_angle: FRAC_PI_4,
            growth_factor: 1.1,
            spawn_height: 1.0,
            sentinel: 9_999_999.0,
            delay_mode: DelayMode::Overlapping,
        }
    }
}

impl ActorConfig {
    /// Parse a config from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Frames per roll, never zero.
    pub(crate) fn roll_frames(&self) -> u32 {
        self.frames_per_roll.max(1)
    }
}

/// Host-side configuration: actor tuning plus the tick rate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LevelConfig {
    /// Fixed timestep in seconds (default: 1/60).
    pub fixed_dt: f32,
    pub actor: ActorConfig,
}

impl Default for LevelConfig {
    fn default() -> Self {
        Self {
            fixed_dt: FixedTimestep::DEFAULT_DT,
            actor: ActorConfig::default(),
        }
    }
}

impl LevelConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_is_default() {
        let config = ActorConfig::from_json("{}").unwrap();
        assert_eq!(config, ActorConfig::default());
    }

    #[test]
    fn partial_override() {
        let config = ActorConfig::from_json(r#"{ "frames_per_roll": 4, "delay_mode": "lead_in" }"#)
            .unwrap();
        assert_eq!(config.frames_per_roll, 4);
        assert_eq!(config.delay_mode, DelayMode::LeadIn);
        assert_eq!(config.respawn_fall_frames, 50);
    }

    #[test]
    fn level_config_nests_actor() {
        let config = LevelConfig::from_json(r#"{ "actor": { "goal_gravity": 0.01 } }"#).unwrap();
        assert!((config.fixed_dt - 1.0 / 60.0).abs() < 1e-6);
        assert_eq!(config.actor.goal_gravity, 0.01);
    }

    #[test]
    fn zero_roll_frames_is_clamped() {
        let config = ActorConfig { frames_per_roll: 0, ..ActorConfig::default() };
        assert_eq!(config.roll_frames(), 1);
    }
}
