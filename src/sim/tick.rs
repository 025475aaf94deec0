//! Simulation tick and frame loop
//!
//! `tick` advances the world by one variable timestep. `FrameLoop` turns
//! frame timestamps into ticks and decides whether another frame is needed;
//! the actual frame source (`requestAnimationFrame`, a native timer) lives
//! with the caller.

use super::collision::check_collisions;
use super::state::{GamePhase, World};
use crate::platform::UiSink;

/// Whether the scheduler should request another frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Stop,
}

/// Advance the world by `dt` seconds. Does nothing unless playing.
pub fn tick(world: &mut World, dt: f32, ui: &mut impl UiSink) {
    if !world.is_playing() {
        return;
    }

    update_entities(world, dt, ui);
    check_collisions(world, ui);
    world.time_ticks += 1;
}

/// Move every enemy, then refresh the player
fn update_entities(world: &mut World, dt: f32, ui: &mut impl UiSink) {
    for (lane, enemy) in world.enemies.iter_mut().enumerate() {
        if enemy.update(dt, &mut world.rng) {
            log::debug!("Enemy {} wrapped, new speed {}", lane, enemy.speed);
        }
    }
    world.player.update(ui);
}

/// Frame-driven loop state
#[derive(Debug, Clone, Default)]
pub struct FrameLoop {
    /// Timestamp (ms) of the last simulated frame
    last_time: Option<f64>,
    /// Frames simulated since creation
    pub frames: u64,
}

impl FrameLoop {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark `now` as the reference time, so the next frame after a start or
    /// restart does not integrate the time spent on a menu
    pub fn resume(&mut self, now: f64) {
        self.last_time = Some(now);
    }

    /// Run one frame at timestamp `now` (ms).
    ///
    /// `render` is only called for frames that end in the playing phase.
    pub fn step(
        &mut self,
        world: &mut World,
        now: f64,
        ui: &mut impl UiSink,
        render: impl FnOnce(&World),
    ) -> LoopControl {
        let dt = ((now - self.last_time.unwrap_or(now)) / 1000.0) as f32;

        match world.phase {
            GamePhase::StartPage => LoopControl::Stop,
            GamePhase::GameOver => {
                World::show_game_over(ui);
                LoopControl::Stop
            }
            GamePhase::Playing => {
                tick(world, dt, ui);
                self.last_time = Some(now);
                self.frames += 1;

                if world.is_playing() {
                    render(world);
                    LoopControl::Continue
                } else {
                    LoopControl::Stop
                }
            }
        }
    }
}
