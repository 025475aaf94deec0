//! Board layout and asset manifest

use crate::consts::{BOARD_COLS, BOARD_ROWS, TILE_HEIGHT, TILE_WIDTH};
use crate::sim::{ENEMY_SPRITE, PLAYER_SPRITE};

pub const WATER_BLOCK: &str = "images/water-block.png";
pub const STONE_BLOCK: &str = "images/stone-block.png";
pub const GRASS_BLOCK: &str = "images/grass-block.png";

/// Tile image for each board row, top to bottom
pub const ROW_IMAGES: [&str; BOARD_ROWS] = [
    WATER_BLOCK, // Goal row
    STONE_BLOCK, // Enemy lanes
    STONE_BLOCK,
    STONE_BLOCK,
    GRASS_BLOCK, // Safe rows
    GRASS_BLOCK,
];

/// Everything that must be loaded before the first frame
pub const ASSETS: [&str; 5] = [
    STONE_BLOCK,
    WATER_BLOCK,
    GRASS_BLOCK,
    ENEMY_SPRITE,
    PLAYER_SPRITE,
];

/// Background tiles as `(image, x, y)`, row-major
pub fn tiles() -> impl Iterator<Item = (&'static str, f32, f32)> {
    ROW_IMAGES.iter().enumerate().flat_map(|(row, image)| {
        (0..BOARD_COLS).map(move |col| {
            (
                *image,
                col as f32 * TILE_WIDTH,
                row as f32 * TILE_HEIGHT,
            )
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tile_grid() {
        let tiles: Vec<_> = tiles().collect();
        assert_eq!(tiles.len(), BOARD_ROWS * BOARD_COLS);
        assert_eq!(tiles[0], (WATER_BLOCK, 0.0, 0.0));
        assert_eq!(tiles[4], (WATER_BLOCK, 404.0, 0.0));
        assert_eq!(tiles[5], (STONE_BLOCK, 0.0, 83.0));
        assert_eq!(tiles.last().copied(), Some((GRASS_BLOCK, 404.0, 415.0)));
    }

    #[test]
    fn test_manifest_covers_rows() {
        for image in ROW_IMAGES {
            assert!(ASSETS.contains(&image));
        }
    }
}
