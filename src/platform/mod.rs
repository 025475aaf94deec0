//! Platform abstraction layer
//!
//! The simulation never touches the DOM directly. Everything it needs from
//! the outside world goes through these traits:
//! - `UiSink`: HUD text and panel visibility
//! - `Canvas`: image blitting
//! - `AssetProvider`: sprite loading and lookup
//!
//! Keyboard events are mapped to `Direction` here as well.

pub mod headless;

use crate::consts::{KEY_DOWN, KEY_LEFT, KEY_RIGHT, KEY_UP};
use crate::sim::Direction;

/// Fire-and-forget display operations driven by the simulation
pub trait UiSink {
    /// Show the remaining lives in the HUD
    fn set_lives_display(&mut self, lives: u8);
    /// Show the start panel (hides the lives panel)
    fn show_start_panel(&mut self);
    /// Show the lives panel (hides the start panel)
    fn show_playing_panel(&mut self);
    /// Show the game-over panel (hides the lives panel)
    fn show_game_over_panel(&mut self);
    /// Wipe the drawing surface
    fn clear_screen(&mut self);
}

/// Drawing sink for sprites
pub trait Canvas {
    type Image;

    fn draw_image(&mut self, image: &Self::Image, x: f32, y: f32);
}

/// Loads and caches drawable images by identifier
pub trait AssetProvider {
    type Image;

    /// Begin loading the given identifiers
    fn load(&mut self, ids: &[&str]);
    /// Run `callback` once every requested asset is available.
    /// Runs immediately if loading already finished.
    fn on_ready(&mut self, callback: Box<dyn FnOnce()>);
    /// Look up a loaded image
    fn get(&self, id: &str) -> Option<&Self::Image>;
}

impl Direction {
    /// Map a legacy DOM `keyCode` to a direction
    pub fn from_key_code(code: u32) -> Option<Self> {
        match code {
            KEY_LEFT => Some(Direction::Left),
            KEY_UP => Some(Direction::Up),
            KEY_RIGHT => Some(Direction::Right),
            KEY_DOWN => Some(Direction::Down),
            _ => None,
        }
    }

    /// Map a DOM `KeyboardEvent.key` name to a direction
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" | "Left" => Some(Direction::Left),
            "ArrowUp" | "Up" => Some(Direction::Up),
            "ArrowRight" | "Right" => Some(Direction::Right),
            "ArrowDown" | "Down" => Some(Direction::Down),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_codes() {
        assert_eq!(Direction::from_key_code(37), Some(Direction::Left));
        assert_eq!(Direction::from_key_code(38), Some(Direction::Up));
        assert_eq!(Direction::from_key_code(39), Some(Direction::Right));
        assert_eq!(Direction::from_key_code(40), Some(Direction::Down));
        assert_eq!(Direction::from_key_code(32), None);
    }

    #[test]
    fn test_key_names() {
        assert_eq!(Direction::from_key("ArrowUp"), Some(Direction::Up));
        assert_eq!(Direction::from_key("Left"), Some(Direction::Left));
        assert_eq!(Direction::from_key("w"), None);
    }
}
