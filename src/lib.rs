//! Bug Crossing - a lane-crossing arcade game
//!
//! Core modules:
//! - `sim`: Simulation (entities, collisions, game phase, frame loop)
//! - `renderer`: Board layout and sprite drawing
//! - `platform`: Collaborator traits for the browser/native frontends
//! - `settings`: Runtime configuration

pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Canvas dimensions
    pub const CANVAS_WIDTH: u32 = 505;
    pub const CANVAS_HEIGHT: u32 = 606;
    /// Area wiped by the clear-screen call
    pub const CLEAR_WIDTH: f64 = 650.0;
    pub const CLEAR_HEIGHT: f64 = 700.0;

    /// Board tiles
    pub const TILE_WIDTH: f32 = 101.0;
    pub const TILE_HEIGHT: f32 = 83.0;
    pub const BOARD_ROWS: usize = 6;
    pub const BOARD_COLS: usize = 5;

    /// Both sprites share the same hit box
    pub const ENTITY_WIDTH: f32 = 50.0;
    pub const ENTITY_HEIGHT: f32 = 27.0;

    /// Player spawn point (bottom grass row, middle column)
    pub const PLAYER_SPAWN_X: f32 = 200.0;
    pub const PLAYER_SPAWN_Y: f32 = 390.0;
    pub const PLAYER_LIVES: u8 = 3;
    /// Discrete move sizes
    pub const PLAYER_STEP_X: f32 = 100.0;
    pub const PLAYER_STEP_Y: f32 = 80.0;
    /// Movement bounds (inclusive)
    pub const PLAYER_MIN_X: f32 = 0.0;
    pub const PLAYER_MAX_X: f32 = 420.0;
    pub const PLAYER_MAX_Y: f32 = 420.0;
    /// Reaching this row (or above) counts as a crossing
    pub const GOAL_Y: f32 = -10.0;

    /// Enemy lanes: lane `i` (1-based) sits at `y = i * LANE_SPACING`
    pub const LANE_SPACING: f32 = 70.0;
    pub const MAX_ENEMIES: usize = 3;
    pub const DEFAULT_ENEMIES: usize = 3;
    /// Spawn x is an integer drawn from this range
    pub const ENEMY_SPAWN_MIN_X: i32 = -80;
    pub const ENEMY_SPAWN_MAX_X: i32 = -10;
    /// Enemies past this x wrap back to `ENEMY_RESPAWN_X`
    pub const ENEMY_WRAP_X: f32 = 500.0;
    pub const ENEMY_RESPAWN_X: f32 = -70.0;
    /// Fixed multiplier applied to `speed * dt`
    pub const ENEMY_SPEED_SCALE: f32 = 2.0;
    /// Speeds an enemy can be given (pixels/second before scaling)
    pub const ENEMY_SPEEDS: [f32; 4] = [86.0, 171.0, 256.0, 341.0];

    /// Legacy DOM key codes for the arrow keys
    pub const KEY_LEFT: u32 = 37;
    pub const KEY_UP: u32 = 38;
    pub const KEY_RIGHT: u32 = 39;
    pub const KEY_DOWN: u32 = 40;
}
