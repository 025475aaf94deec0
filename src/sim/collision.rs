//! Collision detection and response
//!
//! Player vs enemy hit boxes, tested once per playing tick after movement.

use super::rect::Rect;
use super::state::{Enemy, Entity, World};
use crate::platform::UiSink;

/// Index of the first enemy whose hit box overlaps `player`, in list order
pub fn first_overlap(player: &Rect, enemies: &[Enemy]) -> Option<usize> {
    enemies
        .iter()
        .position(|enemy| player.overlaps(&enemy.bounds()))
}

/// Check the player against every enemy and apply the response for the
/// first hit: back to spawn, one life lost, game over when none remain.
///
/// At most one collision is handled per call. Returns the index of the
/// enemy that was hit.
pub fn check_collisions(world: &mut World, ui: &mut impl UiSink) -> Option<usize> {
    let hit = first_overlap(&world.player.bounds(), &world.enemies)?;

    world.player.respawn();
    if world.player.lives == 0 {
        world.game_over(ui);
    } else {
        world.player.lives -= 1;
        log::info!(
            "Hit by enemy {}, {} lives left",
            hit,
            world.player.lives
        );
        if world.player.lives == 0 {
            world.game_over(ui);
        }
    }
    ui.set_lives_display(world.player.lives);

    Some(hit)
}

#[cfg(test)]
mod tests {
    use glam::Vec2;

    use super::*;
    use crate::platform::headless::{Panel, RecordingUi, UiEvent};
    use crate::sim::GamePhase;

    fn world_with_enemies(enemies: Vec<Enemy>) -> World {
        let mut world = World::new(3, 0);
        world.enemies = enemies;
        world.phase = GamePhase::Playing;
        world
    }

    #[test]
    fn test_first_overlap_scenarios() {
        let player = Rect::new(200.0, 390.0, 50.0, 27.0);
        let near = [Enemy::new(210.0, 395.0, 86.0)];
        let far = [Enemy::new(400.0, 395.0, 86.0)];
        assert_eq!(first_overlap(&player, &near), Some(0));
        assert_eq!(first_overlap(&player, &far), None);
    }

    #[test]
    fn test_first_overlap_uses_list_order() {
        let player = Rect::new(200.0, 390.0, 50.0, 27.0);
        let enemies = [
            Enemy::new(0.0, 70.0, 86.0),
            Enemy::new(190.0, 380.0, 86.0),
            Enemy::new(210.0, 395.0, 86.0),
        ];
        assert_eq!(first_overlap(&player, &enemies), Some(1));
    }

    #[test]
    fn test_no_collision_leaves_state_alone() {
        let mut world = world_with_enemies(vec![Enemy::new(-70.0, 70.0, 86.0)]);
        let mut ui = RecordingUi::new();
        assert_eq!(check_collisions(&mut world, &mut ui), None);
        assert_eq!(world.player.lives, 3);
        assert!(ui.events.is_empty());
    }

    #[test]
    fn test_collision_costs_life_and_respawns() {
        let mut world = world_with_enemies(vec![Enemy::new(100.0, 140.0, 86.0)]);
        world.player.pos = Vec2::new(100.0, 150.0);
        let mut ui = RecordingUi::new();

        assert_eq!(check_collisions(&mut world, &mut ui), Some(0));
        assert_eq!(world.player.lives, 2);
        assert_eq!(world.player.pos, Vec2::new(200.0, 390.0));
        assert_eq!(world.phase, GamePhase::Playing);
        assert_eq!(ui.events, vec![UiEvent::Lives(2)]);
    }

    #[test]
    fn test_only_one_collision_per_check() {
        let mut world = world_with_enemies(vec![
            Enemy::new(100.0, 140.0, 86.0),
            Enemy::new(110.0, 145.0, 171.0),
        ]);
        world.player.pos = Vec2::new(100.0, 150.0);
        let mut ui = RecordingUi::new();

        assert_eq!(check_collisions(&mut world, &mut ui), Some(0));
        assert_eq!(world.player.lives, 2);
    }

    #[test]
    fn test_last_life_collision_ends_game() {
        let mut world = world_with_enemies(vec![Enemy::new(200.0, 390.0, 86.0)]);
        world.player.lives = 1;
        let mut ui = RecordingUi::new();

        check_collisions(&mut world, &mut ui);
        assert_eq!(world.player.lives, 0);
        assert_eq!(world.phase, GamePhase::GameOver);
        assert_eq!(ui.panel, Panel::GameOver);
        assert_eq!(
            ui.events,
            vec![UiEvent::ClearScreen, UiEvent::GameOverPanel, UiEvent::Lives(0)]
        );
    }

    #[test]
    fn test_collision_with_no_lives_ends_game() {
        let mut world = world_with_enemies(vec![Enemy::new(200.0, 390.0, 86.0)]);
        world.player.lives = 0;
        world.player.pos = Vec2::new(200.0, 390.0);
        let mut ui = RecordingUi::new();

        check_collisions(&mut world, &mut ui);
        assert_eq!(world.player.lives, 0);
        assert_eq!(world.phase, GamePhase::GameOver);
        assert_eq!(world.player.pos, Vec2::new(200.0, 390.0));
    }
}
