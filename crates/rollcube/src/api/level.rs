use crate::api::config::ActorConfig;
use crate::api::floor::Floor;
use crate::api::types::{Direction, LevelEvent, SoundEvent};
use crate::assets::level::{LevelDef, LevelError};
use crate::bridge::snapshot::ActorSnapshot;
use crate::components::actor::ActorState;
use crate::components::grid::GridFloor;
use crate::core::controller::ActorController;
use crate::input::queue::{InputEvent, InputQueue};

/// One playable level: a floor, the cube on it, and the notifications the
/// page layer polls for ("stage complete", "replay").
pub struct Level<F: Floor> {
    pub name: String,
    floor: F,
    actor: ActorController,
    spawn: (i32, i32),
    config: ActorConfig,
    events: Vec<LevelEvent>,
    sounds: Vec<SoundEvent>,
    frame: u64,
}

impl<F: Floor> Level<F> {
    pub fn new(floor: F, spawn: (i32, i32), config: ActorConfig) -> Self {
        let actor = ActorController::new(spawn.0, spawn.1, config.clone());
        Self {
            name: String::new(),
            floor,
            actor,
            spawn,
            config,
            events: Vec::with_capacity(4),
            sounds: Vec::with_capacity(4),
            frame: 0,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Consume pending input: moves go to the actor, replay restarts the level.
    pub fn handle_input(&mut self, input: &mut InputQueue) {
        for event in input.drain() {
            match event {
                InputEvent::Replay => self.replay(),
                other => {
                    if let Some(dir) = other.direction() {
                        self.move_actor(dir);
                    }
                }
            }
        }
    }

    /// Forward a move to the actor. Returns whether it was accepted.
    pub fn move_actor(&mut self, direction: Direction) -> bool {
        self.actor.move_actor(direction)
    }

    /// Advance one frame and record what happened.
    pub fn update(&mut self) {
        self.actor.tick(&mut self.floor);
        self.frame += 1;

        for state in self.actor.entered() {
            let event = match state {
                ActorState::Completing => LevelEvent::GoalReached,
                ActorState::Completed => LevelEvent::Completed,
                ActorState::Respawning => LevelEvent::Respawned,
                _ => continue,
            };
            log::debug!("{}: {:?} at frame {}", self.name, event, self.frame);
            self.events.push(event);
        }
        self.sounds.extend(self.actor.drain_sounds());
    }

    /// Restart with a fresh actor on the spawn cell.
    pub fn replay(&mut self) {
        self.actor = ActorController::new(self.spawn.0, self.spawn.1, self.config.clone());
        self.floor.reset();
        self.frame = 0;
        self.events.push(LevelEvent::Replayed);
        log::info!("{}: replay", self.name);
    }

    /// Drain level notifications since the last call.
    pub fn drain_events(&mut self) -> impl Iterator<Item = LevelEvent> + '_ {
        self.events.drain(..)
    }

    /// Drain sound cues since the last call.
    pub fn drain_sounds(&mut self) -> impl Iterator<Item = SoundEvent> + '_ {
        self.sounds.drain(..)
    }

    pub fn snapshot(&self) -> ActorSnapshot {
        ActorSnapshot::capture(&self.actor)
    }

    /// The actor finished its completion sequence.
    pub fn is_completed(&self) -> bool {
        self.actor.is_completed()
    }

    /// The actor is at rest and accepting moves.
    pub fn is_settled(&self) -> bool {
        self.actor.is_ready_to_move()
    }

    pub fn actor(&self) -> &ActorController {
        &self.actor
    }

    pub fn floor(&self) -> &F {
        &self.floor
    }

    pub fn spawn(&self) -> (i32, i32) {
        self.spawn
    }

    /// Frames run since load or the last replay.
    pub fn frame(&self) -> u64 {
        self.frame
    }
}

impl Level<GridFloor> {
    /// Build a grid level from its definition.
    pub fn from_def(def: &LevelDef, config: ActorConfig) -> Result<Self, LevelError> {
        let (floor, spawn) = def.build()?;
        log::info!(
            "level {:?}: {}x{} grid, spawn {:?}",
            def.name,
            floor.width,
            floor.depth,
            spawn
        );
        Ok(Self::new(floor, spawn, config).with_name(def.name.clone()))
    }

    /// Parse and build a grid level from JSON.
    pub fn from_json(json: &str, config: ActorConfig) -> Result<Self, LevelError> {
        Self::from_def(&LevelDef::from_json(json)?, config)
    }
}
