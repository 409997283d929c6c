use crate::api::types::Direction;

/// Input events the level understands.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// A directional move (on-screen buttons, swipes).
    Move(Direction),
    /// A key was pressed; mapped through [`Direction::from_key_code`].
    KeyDown { key_code: u32 },
    /// The page asked to play the level again.
    Replay,
}

impl InputEvent {
    /// The move this event requests, if any.
    pub fn direction(&self) -> Option<Direction> {
        match *self {
            InputEvent::Move(dir) => Some(dir),
            InputEvent::KeyDown { key_code } => Direction::from_key_code(key_code),
            InputEvent::Replay => None,
        }
    }
}

/// Events pushed by the page between frames, consumed by the next step.
#[derive(Debug, Default)]
pub struct InputQueue {
    pending: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: InputEvent) {
        self.pending.push(event);
    }

    /// Take every pending event in arrival order.
    pub fn drain(&mut self) -> std::vec::Drain<'_, InputEvent> {
        self.pending.drain(..)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drain_keeps_arrival_order() {
        let mut queue = InputQueue::new();
        queue.push(InputEvent::Replay);
        queue.push(InputEvent::Move(Direction::Left));
        let order: Vec<_> = queue.drain().collect();
        assert_eq!(order, vec![InputEvent::Replay, InputEvent::Move(Direction::Left)]);
        assert_eq!(queue.drain().count(), 0);
    }

    #[test]
    fn key_events_resolve_to_directions() {
        assert_eq!(InputEvent::KeyDown { key_code: 68 }.direction(), Some(Direction::Right));
        assert_eq!(InputEvent::KeyDown { key_code: 13 }.direction(), None);
        assert_eq!(InputEvent::Move(Direction::Down).direction(), Some(Direction::Down));
        assert_eq!(InputEvent::Replay.direction(), None);
    }
}
