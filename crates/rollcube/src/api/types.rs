use glam::Vec3;
use serde::{Deserialize, Serialize};

/// A discrete move request for the cube.
///
/// Up/Down roll along the X axis, Left/Right along the Z axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Map a DOM `keyCode` (arrow keys and WASD) to a direction.
    pub fn from_key_code(key_code: u32) -> Option<Self> {
        match key_code {
            38 | 87 => Some(Direction::Up),
            40 | 83 => Some(Direction::Down),
            37 | 65 => Some(Direction::Left),
            39 | 68 => Some(Direction::Right),
            _ => None,
        }
    }

    /// Decode the numeric direction used by the web bridge (0..=3).
    pub fn from_index(index: u32) -> Option<Self> {
        Self::ALL.get(index as usize).copied()
    }

    /// Unit translation for one full roll.
    pub fn offset(self) -> Vec3 {
        match self {
            Direction::Up => Vec3::X,
            Direction::Down => Vec3::NEG_X,
            Direction::Left => Vec3::NEG_Z,
            Direction::Right => Vec3::Z,
        }
    }

    /// Signed rotation axis for one full roll. The sign picks which edge the
    /// cube tips over.
    pub fn roll_axis(self) -> Vec3 {
        match self {
            Direction::Up => Vec3::NEG_Z,
            Direction::Down => Vec3::Z,
            Direction::Left => Vec3::NEG_X,
            Direction::Right => Vec3::X,
        }
    }
}

/// A sound cue emitted by the actor.
/// The numeric value maps to a host-defined sound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(transparent)]
pub struct SoundEvent(pub u32);

impl SoundEvent {
    /// The cube started rolling.
    pub const ROLL: SoundEvent = SoundEvent(1);
}

/// Level-level notifications for the page layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[repr(u32)]
pub enum LevelEvent {
    /// The actor landed on the goal and the completion sequence started.
    GoalReached = 1,
    /// The completion sequence drained; the actor is off-stage.
    Completed = 2,
    /// The actor fell off the grid and was put back on its spawn.
    Respawned = 3,
    /// The level was restarted on request.
    Replayed = 4,
}

impl LevelEvent {
    /// Wire code read by the host.
    pub fn code(self) -> u32 {
        self as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrow_keys_and_wasd_map_to_directions() {
        assert_eq!(Direction::from_key_code(38), Some(Direction::Up));
        assert_eq!(Direction::from_key_code(83), Some(Direction::Down));
        assert_eq!(Direction::from_key_code(65), Some(Direction::Left));
        assert_eq!(Direction::from_key_code(39), Some(Direction::Right));
        assert_eq!(Direction::from_key_code(32), None);
    }

    #[test]
    fn roll_axis_is_perpendicular_to_offset() {
        for dir in Direction::ALL {
            assert_eq!(dir.offset().dot(dir.roll_axis()), 0.0);
        }
    }

    #[test]
    fn direction_deserializes_lowercase() {
        let dir: Direction = serde_json::from_str("\"left\"").unwrap();
        assert_eq!(dir, Direction::Left);
        assert_eq!(Direction::from_index(3), Some(Direction::Right));
        assert_eq!(Direction::from_index(4), None);
    }
}
