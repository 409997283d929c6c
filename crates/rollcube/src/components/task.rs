//! Animation tasks — one queued, frame-counted mutation of the actor body.

use glam::Vec3;
use crate::api::types::Direction;
use crate::components::actor::ActorBody;

/// What a task does to the body on each active frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TaskKind {
    /// Translate by `step` and rotate by `spin` (one roll slice).
    Roll { step: Vec3, spin: Vec3 },
    /// Semi-implicit Euler gravity: drop by the current velocity, then
    /// speed up by `gravity`.
    Fall { gravity: f32 },
    /// Turn about the vertical axis, lowering `rotation.y` by `rate`.
    Spin { rate: f32 },
    /// Multiply every scale axis by `factor` (compounding).
    ScaleUp { factor: f32 },
}

impl TaskKind {
    /// Apply one frame of this mutation.
    pub fn apply(&self, body: &mut ActorBody) {
        match *self {
            TaskKind::Roll { step, spin } => {
                body.pos += step;
                body.rotation += spin;
            }
            TaskKind::Fall { gravity } => {
                body.pos.y -= body.fall_velocity;
                body.fall_velocity += gravity;
            }
            TaskKind::Spin { rate } => {
                body.rotation.y -= rate;
            }
            TaskKind::ScaleUp { factor } => {
                body.scale *= factor;
            }
        }
    }
}

/// A queued animation.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationTask {
    pub kind: TaskKind,
    /// Frames still to count down. The task is dropped once this hits zero.
    pub frames_left: u32,
    /// Frames to wait before the mutation starts running.
    pub delay: Option<i32>,
}

impl AnimationTask {
    pub fn new(kind: TaskKind, frames: u32) -> Self {
        Self {
            kind,
            frames_left: frames,
            delay: None,
        }
    }

    /// One roll of a unit cube, sliced into `frames` equal steps.
    pub fn roll(direction: Direction, frames: u32) -> Self {
        let frames = frames.max(1);
        let n = frames as f32;
        let step = direction.offset() / n;
        let spin = direction.roll_axis() * (std::f32::consts::FRAC_PI_2 / n);
        Self::new(TaskKind::Roll { step, spin }, frames)
    }

    pub fn fall(gravity: f32, frames: u32) -> Self {
        Self::new(TaskKind::Fall { gravity }, frames)
    }

    /// Spin by `angle` radians in total over `frames`.
    pub fn spin(angle: f32, frames: u32) -> Self {
        let rate = angle / frames.max(1) as f32;
        Self::new(TaskKind::Spin { rate }, frames)
    }

    pub fn scale_up(factor: f32, frames: u32) -> Self {
        Self::new(TaskKind::ScaleUp { factor }, frames)
    }

    pub fn with_delay(mut self, delay: i32) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Whether the delay (if any) has run out.
    pub fn delay_elapsed(&self) -> bool {
        self.delay.map_or(true, |d| d <= 0)
    }

    /// Whether the mutation runs this frame.
    pub fn is_active(&self) -> bool {
        self.frames_left > 0 && self.delay_elapsed()
    }

    pub fn is_finished(&self) -> bool {
        self.frames_left == 0
    }
}
