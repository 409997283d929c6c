use glam::Vec3;

/// Lifecycle state of the cube actor.
///
/// Replaces a loose set of booleans (ready-to-move, falling, respawn-pending,
/// completion-pending, completed) so that only meaningful combinations exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActorState {
    /// At rest on the grid, accepting moves.
    #[default]
    Settled,
    /// Playing a roll animation.
    Rolling,
    /// Falling off the grid; respawns once the fall drains.
    Falling,
    /// Back on spawn, waiting for the next tick to settle.
    Respawning,
    /// Falling into the goal while the completion sequence plays.
    Completing,
    /// Parked off-stage. Terminal.
    Completed,
}

impl ActorState {
    /// Whether `self -> next` is a legal transition.
    pub fn can_transition_to(self, next: ActorState) -> bool {
        use ActorState::*;
        matches!(
            (self, next),
            (Settled, Settled | Rolling | Falling | Completing)
                | (Rolling, Settled)
                | (Falling, Respawning)
                | (Respawning, Settled | Falling | Completing)
                | (Completing, Completed)
        )
    }

    /// Numeric code for the wire snapshot.
    pub fn code(self) -> u32 {
        match self {
            ActorState::Settled => 0,
            ActorState::Rolling => 1,
            ActorState::Falling => 2,
            ActorState::Respawning => 3,
            ActorState::Completing => 4,
            ActorState::Completed => 5,
        }
    }
}

/// Spatial state of the cube: what the renderer reads after every tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActorBody {
    /// Position; x/z are grid coordinates, y is height.
    pub pos: Vec3,
    /// Euler rotation in radians.
    pub rotation: Vec3,
    /// Per-axis scale.
    pub scale: Vec3,
    /// Downward speed, persisted across falls until a respawn.
    pub fall_velocity: f32,
}

impl ActorBody {
    pub fn new(pos: Vec3) -> Self {
        Self {
            pos,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
            fall_velocity: 0.0,
        }
    }

    pub fn with_rotation(mut self, rotation: Vec3) -> Self {
        self.rotation = rotation;
        self
    }

    /// Zero the rotation and round the position onto the grid.
    pub fn snap(&mut self) {
        self.rotation = Vec3::ZERO;
        self.pos = self.pos.round();
    }

    /// Grid cell under the actor.
    pub fn cell(&self) -> (i32, i32) {
        (self.pos.x.round() as i32, self.pos.z.round() as i32)
    }
}
