//! Actor state as read by the renderer.
//! Must stay in sync with the TypeScript reader.
//!
//! Layout (all values f32, 12 floats = 48 bytes):
//! ```text
//! [x, y, z, rot_x, rot_y, rot_z, scale_x, scale_y, scale_z, state, fall_velocity, queued]
//! ```

use bytemuck::{Pod, Zeroable};
use crate::core::controller::ActorController;

/// Per-frame actor state, written once per tick for the renderer.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct ActorSnapshot {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub rot_x: f32,
    pub rot_y: f32,
    pub rot_z: f32,
    pub scale_x: f32,
    pub scale_y: f32,
    pub scale_z: f32,
    /// `ActorState::code()`.
    pub state: f32,
    pub fall_velocity: f32,
    /// Number of animation tasks still queued.
    pub queued: f32,
}

impl ActorSnapshot {
    pub const FLOATS: usize = 12;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;

    pub fn capture(actor: &ActorController) -> Self {
        let body = actor.body();
        Self {
            x: body.pos.x,
            y: body.pos.y,
            z: body.pos.z,
            rot_x: body.rotation.x,
            rot_y: body.rotation.y,
            rot_z: body.rotation.z,
            scale_x: body.scale.x,
            scale_y: body.scale.y,
            scale_z: body.scale.z,
            state: actor.state().code() as f32,
            fall_velocity: body.fall_velocity,
            queued: actor.queue().len() as f32,
        }
    }

    /// View as a flat float slice for zero-copy transfer.
    pub fn as_floats(&self) -> &[f32] {
        bytemuck::cast_slice(std::slice::from_ref(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::config::ActorConfig;
    use crate::api::types::Direction;

    #[test]
    fn stride_matches_struct_size() {
        assert_eq!(std::mem::size_of::<ActorSnapshot>(), ActorSnapshot::STRIDE_BYTES);
    }

    #[test]
    fn capture_reads_controller() {
        let mut actor = ActorController::new(2, 3, ActorConfig::default());
        actor.move_actor(Direction::Left);
        let snap = ActorSnapshot::capture(&actor);
        let floats = snap.as_floats();
        assert_eq!(floats.len(), ActorSnapshot::FLOATS);
        assert_eq!(&floats[..3], &[2.0, 1.0, 3.0]);
        assert_eq!(&floats[6..9], &[1.0, 1.0, 1.0]);
        assert_eq!(snap.state, 1.0);
        assert_eq!(snap.queued, 1.0);
    }
}
