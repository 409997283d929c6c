pub mod api;
pub mod core;
pub mod components;
pub mod systems;
pub mod bridge;
pub mod input;
pub mod assets;

// Re-export key types at crate root for convenience
pub use api::config::{ActorConfig, DelayMode, LevelConfig};
pub use api::floor::Floor;
pub use api::level::Level;
pub use api::types::{Direction, LevelEvent, SoundEvent};
pub use assets::level::{LevelDef, LevelError};
pub use bridge::snapshot::ActorSnapshot;
pub use components::actor::{ActorBody, ActorState};
pub use components::grid::{Cell, GridFloor};
pub use components::task::{AnimationTask, TaskKind};
pub use crate::core::controller::ActorController;
pub use crate::core::time::FixedTimestep;
pub use input::queue::{InputEvent, InputQueue};
pub use systems::animation::AnimationQueue;
