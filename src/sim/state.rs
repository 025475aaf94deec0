//! Game state and core simulation types
//!
//! The `World` owns every entity plus the RNG; nothing here is global.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::consts::*;
use crate::platform::UiSink;

/// Current phase of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for the start action
    #[default]
    StartPage,
    /// Active gameplay
    Playing,
    /// Lives exhausted, waiting for restart
    GameOver,
}

/// A discrete player move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

/// Sprite identifiers
pub const ENEMY_SPRITE: &str = "images/enemy-bug.png";
pub const PLAYER_SPRITE: &str = "images/char-boy.png";

/// Shared capability of everything drawn on the board: a positioned box
pub trait Entity {
    /// Top-left corner in canvas pixels
    fn pos(&self) -> Vec2;

    fn size(&self) -> Vec2 {
        Vec2::new(ENTITY_WIDTH, ENTITY_HEIGHT)
    }

    /// Asset identifier used when rendering
    fn sprite(&self) -> &'static str;

    /// Hit box, always derived from the current position
    fn bounds(&self) -> Rect {
        Rect::from_pos_size(self.pos(), self.size())
    }
}

/// Pick an enemy speed, uniformly over `ENEMY_SPEEDS`
pub fn sample_speed<R: Rng>(rng: &mut R) -> f32 {
    ENEMY_SPEEDS[rng.random_range(0..ENEMY_SPEEDS.len())]
}

/// A bug running along its lane
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub pos: Vec2,
    /// Pixels per second, before `ENEMY_SPEED_SCALE`
    pub speed: f32,
}

impl Enemy {
    pub fn new(x: f32, y: f32, speed: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            speed,
        }
    }

    /// Spawn an enemy in `lane` (1-based) just left of the board
    pub fn spawn<R: Rng>(lane: usize, rng: &mut R) -> Self {
        let x = rng.random_range(ENEMY_SPAWN_MIN_X..=ENEMY_SPAWN_MAX_X) as f32;
        let y = lane as f32 * LANE_SPACING;
        Self::new(x, y, sample_speed(rng))
    }

    /// Advance along the lane. Returns true if the enemy wrapped around.
    pub fn update<R: Rng>(&mut self, dt: f32, rng: &mut R) -> bool {
        self.pos.x += self.speed * dt * ENEMY_SPEED_SCALE;
        if self.pos.x >= ENEMY_WRAP_X {
            self.pos.x = ENEMY_RESPAWN_X;
            self.speed = sample_speed(rng);
            return true;
        }
        false
    }
}

impl Entity for Enemy {
    fn pos(&self) -> Vec2 {
        self.pos
    }

    fn sprite(&self) -> &'static str {
        ENEMY_SPRITE
    }
}

/// Result of applying one move to the player
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    Moved,
    /// The move would have left the board and was reverted
    Blocked,
    /// Reached the goal row: one life spent, back at the spawn row
    Crossed,
    /// `Up` with no lives left
    Exhausted,
}

/// The player character
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    pub lives: u8,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            pos: Self::spawn_point(),
            lives: PLAYER_LIVES,
        }
    }
}

impl Player {
    pub fn spawn_point() -> Vec2 {
        Vec2::new(PLAYER_SPAWN_X, PLAYER_SPAWN_Y)
    }

    pub fn respawn(&mut self) {
        self.pos = Self::spawn_point();
    }

    /// Per-tick update. The player never moves on its own; only the HUD is refreshed.
    pub fn update(&self, ui: &mut impl UiSink) {
        ui.set_lives_display(self.lives);
    }

    /// Apply one discrete move, reverting anything that would leave the board
    pub fn apply_move(&mut self, direction: Direction) -> MoveOutcome {
        match direction {
            Direction::Left => {
                let x = self.pos.x - PLAYER_STEP_X;
                if x < PLAYER_MIN_X {
                    return MoveOutcome::Blocked;
                }
                self.pos.x = x;
            }
            Direction::Right => {
                let x = self.pos.x + PLAYER_STEP_X;
                if x > PLAYER_MAX_X {
                    return MoveOutcome::Blocked;
                }
                self.pos.x = x;
            }
            Direction::Down => {
                let y = self.pos.y + PLAYER_STEP_Y;
                if y > PLAYER_MAX_Y {
                    return MoveOutcome::Blocked;
                }
                self.pos.y = y;
            }
            Direction::Up => {
                if self.lives == 0 {
                    return MoveOutcome::Exhausted;
                }
                self.pos.y -= PLAYER_STEP_Y;
                if self.pos.y <= GOAL_Y {
                    self.lives -= 1;
                    self.pos.y = PLAYER_SPAWN_Y;
                    return MoveOutcome::Crossed;
                }
            }
        }
        MoveOutcome::Moved
    }
}

impl Entity for Player {
    fn pos(&self) -> Vec2 {
        self.pos
    }

    fn sprite(&self) -> &'static str {
        PLAYER_SPRITE
    }
}

/// Complete simulation context
#[derive(Debug, Clone)]
pub struct World {
    pub phase: GamePhase,
    /// Enemies in lane order; collision checks follow this order
    pub enemies: Vec<Enemy>,
    pub player: Player,
    /// Seed the RNG was created from
    pub seed: u64,
    /// Playing ticks simulated since creation
    pub time_ticks: u64,
    pub(crate) rng: Pcg32,
}

impl World {
    /// Create a world on the start page with `enemy_count` lanes of enemies
    pub fn new(seed: u64, enemy_count: usize) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let enemies = (1..=enemy_count)
            .map(|lane| Enemy::spawn(lane, &mut rng))
            .collect();

        Self {
            phase: GamePhase::StartPage,
            enemies,
            player: Player::default(),
            seed,
            time_ticks: 0,
            rng,
        }
    }

    pub fn is_playing(&self) -> bool {
        self.phase == GamePhase::Playing
    }

    /// Start action from the start panel.
    ///
    /// From the game-over screen this behaves like `restart`. Returns true if
    /// the frame loop should be (re)started.
    pub fn start(&mut self, ui: &mut impl UiSink) -> bool {
        match self.phase {
            GamePhase::StartPage => {
                self.phase = GamePhase::Playing;
                ui.show_playing_panel();
                ui.set_lives_display(self.player.lives);
                log::info!("Game started");
                true
            }
            GamePhase::GameOver => {
                self.restart(ui);
                true
            }
            GamePhase::Playing => {
                log::debug!("Start ignored, already playing");
                false
            }
        }
    }

    /// Reset lives and position and resume play, whatever the current phase
    pub fn restart(&mut self, ui: &mut impl UiSink) {
        self.player.lives = PLAYER_LIVES;
        self.player.respawn();
        self.phase = GamePhase::Playing;
        ui.show_playing_panel();
        ui.set_lives_display(self.player.lives);
        log::info!("Game restarted");
    }

    /// Terminal transition into `GameOver`
    pub fn game_over(&mut self, ui: &mut impl UiSink) {
        self.phase = GamePhase::GameOver;
        Self::show_game_over(ui);
        log::info!("Game over after {} ticks", self.time_ticks);
    }

    /// Display sequence for the game-over screen
    pub fn show_game_over(ui: &mut impl UiSink) {
        ui.clear_screen();
        ui.show_game_over_panel();
    }

    /// Apply a key press. `None` is an unmapped key.
    pub fn handle_input(&mut self, direction: Option<Direction>, ui: &mut impl UiSink) {
        let Some(direction) = direction else {
            log::warn!("invalid key press, use arrow keys");
            return;
        };

        if !self.is_playing() {
            log::debug!("Ignoring {:?} while in {:?}", direction, self.phase);
            return;
        }

        match self.player.apply_move(direction) {
            MoveOutcome::Exhausted => self.game_over(ui),
            MoveOutcome::Crossed => {
                log::info!("Crossed the road, {} lives left", self.player.lives);
                ui.set_lives_display(self.player.lives);
            }
            MoveOutcome::Moved if direction == Direction::Up => {
                ui.set_lives_display(self.player.lives);
            }
            MoveOutcome::Moved | MoveOutcome::Blocked => {}
        }
    }
}
