//! Simulation module
//!
//! All gameplay logic lives here:
//! - Seeded RNG only, owned by the `World`
//! - Stable iteration order (enemy list order)
//! - No rendering or DOM access; display goes through `platform::UiSink`

pub mod collision;
pub mod rect;
pub mod state;
pub mod tick;

pub use collision::{check_collisions, first_overlap};
pub use rect::Rect;
pub use state::{
    Direction, ENEMY_SPRITE, Enemy, Entity, GamePhase, MoveOutcome, PLAYER_SPRITE, Player, World,
    sample_speed,
};
pub use tick::{FrameLoop, LoopControl, tick};
