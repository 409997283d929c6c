use glam::Vec3;
use crate::api::config::ActorConfig;
use crate::api::floor::Floor;
use crate::api::types::{Direction, SoundEvent};
use crate::components::actor::{ActorBody, ActorState};
use crate::components::task::AnimationTask;
use crate::systems::animation::AnimationQueue;

/// Frame-stepped controller for the puzzle cube.
///
/// Moves are queued as animations and played back one frame per [`tick`].
/// Whenever the queue drains, the actor settles on the grid and asks the
/// floor what is under it: solid ground, the goal, or nothing.
///
/// [`tick`]: ActorController::tick
#[derive(Debug, Clone)]
pub struct ActorController {
    body: ActorBody,
    spawn: Vec3,
    state: ActorState,
    queue: AnimationQueue,
    config: ActorConfig,
    sounds: Vec<SoundEvent>,
    /// States entered during the current tick, in order.
    entered: Vec<ActorState>,
}

impl ActorController {
    /// Spawn an actor on grid cell `(x, z)` at the configured spawn height.
    pub fn new(x: i32, z: i32, config: ActorConfig) -> Self {
        let spawn = Vec3::new(x as f32, config.spawn_height, z as f32);
        Self {
            body: ActorBody::new(spawn),
            spawn,
            state: ActorState::Settled,
            queue: AnimationQueue::new(),
            config,
            sounds: Vec::new(),
            entered: Vec::new(),
        }
    }

    // -- Commands --

    /// Queue a one-cell roll. Dropped unless the actor is settled.
    /// Returns whether the move was accepted.
    pub fn move_actor(&mut self, direction: Direction) -> bool {
        if self.state != ActorState::Settled {
            log::trace!("move {:?} dropped while {:?}", direction, self.state);
            return false;
        }
        self.queue
            .push(AnimationTask::roll(direction, self.config.roll_frames()));
        self.sounds.push(SoundEvent::ROLL);
        self.enter(ActorState::Rolling);
        true
    }

    /// Advance one frame. Call once per update step.
    pub fn tick<F: Floor + ?Sized>(&mut self, floor: &mut F) {
        self.entered.clear();
        if self.state == ActorState::Completed {
            return;
        }

        self.queue.step(&mut self.body, self.config.delay_mode);

        if self.queue.is_empty() {
            if self.state == ActorState::Completing {
                self.complete();
            } else {
                self.next_action();
                self.check_floor(floor);
            }
        }
    }

    // -- Transitions --

    /// Settle on the grid, or respawn if a fall just ended.
    fn next_action(&mut self) {
        if self.state == ActorState::Falling {
            self.respawn();
        } else {
            self.body.snap();
            self.enter(ActorState::Settled);
        }
    }

    fn check_floor<F: Floor + ?Sized>(&mut self, floor: &mut F) {
        let (x, z) = self.body.cell();
        if floor.has_block(x, z) {
            return;
        }

        if floor.has_goal(x, z) {
            self.fall(self.config.goal_gravity, self.config.goal_fall_frames);
            self.begin_completion();
            floor.complete_level();
            self.enter(ActorState::Completing);
        } else {
            self.fall(self.config.respawn_gravity, self.config.respawn_fall_frames);
            self.enter(ActorState::Falling);
        }
    }

    fn fall(&mut self, gravity: f32, frames: u32) {
        self.queue.push(AnimationTask::fall(gravity, frames));
    }

    /// Queue the goal celebration behind the fall: a spin, then a
    /// compounding scale-up that waits for the spin to finish.
    fn begin_completion(&mut self) {
        let frames = self.config.completion_frames;
        self.queue
            .push(AnimationTask::spin(self.config.spin_angle, frames));
        self.queue.push(
            AnimationTask::scale_up(self.config.growth_factor, frames.saturating_mul(3))
                .with_delay(i32::try_from(frames).unwrap_or(i32::MAX)),
        );
    }

    fn respawn(&mut self) {
        self.body.fall_velocity = 0.0;
        self.body.pos = self.spawn;
        self.enter(ActorState::Respawning);
        log::debug!("actor respawned at {}", self.spawn);
    }

    fn complete(&mut self) {
        self.body.pos = Vec3::splat(self.config.sentinel);
        self.enter(ActorState::Completed);
        log::info!("actor completed the level");
    }

    fn enter(&mut self, next: ActorState) {
        if !self.state.can_transition_to(next) {
            log::warn!("refused actor transition {:?} -> {:?}", self.state, next);
            return;
        }
        if self.state != next {
            log::debug!("actor {:?} -> {:?}", self.state, next);
            self.entered.push(next);
        }
        self.state = next;
    }

    // -- Accessors --

    pub fn body(&self) -> &ActorBody {
        &self.body
    }

    pub fn state(&self) -> ActorState {
        self.state
    }

    pub fn spawn(&self) -> Vec3 {
        self.spawn
    }

    pub fn queue(&self) -> &AnimationQueue {
        &self.queue
    }

    pub fn config(&self) -> &ActorConfig {
        &self.config
    }

    pub fn is_ready_to_move(&self) -> bool {
        self.state == ActorState::Settled
    }

    pub fn is_falling(&self) -> bool {
        matches!(self.state, ActorState::Falling | ActorState::Completing)
    }

    pub fn is_respawn_pending(&self) -> bool {
        self.state == ActorState::Falling
    }

    pub fn is_completion_pending(&self) -> bool {
        self.state == ActorState::Completing
    }

    pub fn is_completed(&self) -> bool {
        self.state == ActorState::Completed
    }

    /// States the actor moved into during the last tick.
    pub fn entered(&self) -> &[ActorState] {
        &self.entered
    }

    /// Drain sound cues emitted since the last call.
    pub fn drain_sounds(&mut self) -> impl Iterator<Item = SoundEvent> + '_ {
        self.sounds.drain(..)
    }
}
