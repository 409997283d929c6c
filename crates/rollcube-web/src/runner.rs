use rollcube::{
    ActorSnapshot, FixedTimestep, GridFloor, InputEvent, InputQueue, Level, LevelConfig,
    LevelError,
};

/// Drives one grid level from the browser's animation frame.
///
/// The page pushes input between frames and calls [`tick`] with the elapsed
/// seconds; the runner turns that into whole actor ticks and refreshes the
/// flat buffers the page reads back.
///
/// [`tick`]: LevelRunner::tick
pub struct LevelRunner {
    level: Level<GridFloor>,
    input: InputQueue,
    timestep: FixedTimestep,
    snapshot: ActorSnapshot,
    /// Level event codes produced since the last tick.
    event_buffer: Vec<u32>,
    /// Sound event IDs produced since the last tick.
    sound_buffer: Vec<u8>,
}

impl LevelRunner {
    pub fn new(level_json: &str, config: LevelConfig) -> Result<Self, LevelError> {
        let level = Level::from_json(level_json, config.actor)?;
        let snapshot = level.snapshot();
        Ok(Self {
            level,
            input: InputQueue::new(),
            timestep: FixedTimestep::new(config.fixed_dt),
            snapshot,
            event_buffer: Vec::with_capacity(8),
            sound_buffer: Vec::with_capacity(8),
        })
    }

    /// Push an input event; applied on the next fixed step.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Run as many fixed steps as `dt` seconds cover.
    pub fn tick(&mut self, dt: f32) {
        self.event_buffer.clear();
        self.sound_buffer.clear();

        let steps = self.timestep.accumulate(dt);
        for step in 0..steps {
            // Input applies once, ahead of the first step of the frame.
            if step == 0 {
                self.level.handle_input(&mut self.input);
            }
            self.level.update();
        }

        self.event_buffer
            .extend(self.level.drain_events().map(|e| e.code()));
        self.sound_buffer
            .extend(self.level.drain_sounds().map(|s| s.0 as u8));
        self.snapshot = self.level.snapshot();
    }

    /// Restart the level and drop any partial step.
    pub fn replay(&mut self) {
        self.level.replay();
        self.timestep.reset();
        self.input.drain().for_each(drop);
        self.snapshot = self.level.snapshot();
    }

    pub fn level(&self) -> &Level<GridFloor> {
        &self.level
    }

    // ---- Accessors for the page ----

    pub fn snapshot(&self) -> &ActorSnapshot {
        &self.snapshot
    }

    pub fn snapshot_ptr(&self) -> *const f32 {
        self.snapshot.as_floats().as_ptr()
    }

    pub fn events(&self) -> &[u32] {
        &self.event_buffer
    }

    pub fn sound_events_ptr(&self) -> *const u8 {
        self.sound_buffer.as_ptr()
    }

    pub fn sound_events_len(&self) -> u32 {
        self.sound_buffer.len() as u32
    }

    pub fn is_completed(&self) -> bool {
        self.level.is_completed()
    }

    pub fn is_settled(&self) -> bool {
        self.level.is_settled()
    }
}
