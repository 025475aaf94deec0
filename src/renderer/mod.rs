//! Rendering module
//!
//! Draws the tiled board, then every enemy, then the player. Images are
//! looked up through an `AssetProvider` only here, never during simulation.

pub mod board;

pub use board::{ASSETS, ROW_IMAGES, tiles};

use crate::platform::{AssetProvider, Canvas};
use crate::sim::{Entity, World};

/// Draw one full frame
pub fn render<A, C>(world: &World, assets: &A, canvas: &mut C)
where
    A: AssetProvider,
    C: Canvas<Image = A::Image>,
{
    for (image, x, y) in tiles() {
        draw(assets, canvas, image, x, y);
    }

    for enemy in &world.enemies {
        draw_entity(assets, canvas, enemy);
    }
    draw_entity(assets, canvas, &world.player);
}

fn draw_entity<A, C>(assets: &A, canvas: &mut C, entity: &impl Entity)
where
    A: AssetProvider,
    C: Canvas<Image = A::Image>,
{
    let pos = entity.pos();
    draw(assets, canvas, entity.sprite(), pos.x, pos.y);
}

fn draw<A, C>(assets: &A, canvas: &mut C, id: &str, x: f32, y: f32)
where
    A: AssetProvider,
    C: Canvas<Image = A::Image>,
{
    match assets.get(id) {
        Some(image) => canvas.draw_image(image, x, y),
        None => log::warn!("Missing sprite {}", id),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{BOARD_COLS, BOARD_ROWS};
    use crate::platform::headless::{HeadlessAssets, RecordingCanvas};
    use crate::sim::{ENEMY_SPRITE, PLAYER_SPRITE};

    #[test]
    fn test_render_order() {
        let world = World::new(8, 3);
        let mut assets = HeadlessAssets::new();
        assets.load(&ASSETS);
        let mut canvas = RecordingCanvas::new();

        render(&world, &assets, &mut canvas);

        let tiles = BOARD_ROWS * BOARD_COLS;
        assert_eq!(canvas.draws.len(), tiles + 4);
        for (i, enemy) in world.enemies.iter().enumerate() {
            let (image, x, y) = &canvas.draws[tiles + i];
            assert_eq!(image, ENEMY_SPRITE);
            assert_eq!((*x, *y), (enemy.pos.x, enemy.pos.y));
        }
        let (image, x, y) = canvas.draws.last().cloned().unwrap();
        assert_eq!(image, PLAYER_SPRITE);
        assert_eq!((x, y), (200.0, 390.0));
    }

    #[test]
    fn test_missing_sprites_are_skipped() {
        let world = World::new(8, 3);
        let mut assets = HeadlessAssets::new();
        assets.load(&[PLAYER_SPRITE]);
        let mut canvas = RecordingCanvas::new();

        render(&world, &assets, &mut canvas);
        assert_eq!(canvas.draws.len(), 1);
    }
}
