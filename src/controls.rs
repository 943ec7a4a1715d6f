//! Directional control pad and arrow-key routing.
//!
//! Buttons and arrow keys share one activation path: both call
//! [`ControlPad::press`], so a key press is observationally identical to a
//! click on the matching button.

use crate::types::Direction;
use egui::Key;

/// Button row order, left to right.
pub const BUTTON_ROW: [Direction; 4] = [
    Direction::Left,
    Direction::Up,
    Direction::Down,
    Direction::Right,
];

/// Arrow keys are the only bound input; everything else maps to None.
pub fn direction_for_key(key: Key) -> Option<Direction> {
    match key {
        Key::ArrowUp => Some(Direction::Up),
        Key::ArrowDown => Some(Direction::Down),
        Key::ArrowLeft => Some(Direction::Left),
        Key::ArrowRight => Some(Direction::Right),
        _ => None,
    }
}

/// Four-way control pad. Motion control would attach here; for now the only
/// side effect of a press is the direction notice.
#[derive(Debug, Default)]
pub struct ControlPad {
    last: Option<Direction>,
    presses: u64,
}

impl ControlPad {
    pub fn press(&mut self, direction: Direction) {
        log::info!("{} button clicked", direction.label());
        self.last = Some(direction);
        self.presses += 1;
    }

    /// Route a key press through the button activation path. Returns whether
    /// the key was bound.
    pub fn key_pressed(&mut self, key: Key) -> bool {
        match direction_for_key(key) {
            Some(direction) => {
                self.press(direction);
                true
            }
            None => false,
        }
    }

    pub fn last(&self) -> Option<Direction> {
        self.last
    }

    pub fn presses(&self) -> u64 {
        self.presses
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrow_keys_map_to_directions() {
        assert_eq!(direction_for_key(Key::ArrowUp), Some(Direction::Up));
        assert_eq!(direction_for_key(Key::ArrowDown), Some(Direction::Down));
        assert_eq!(direction_for_key(Key::ArrowLeft), Some(Direction::Left));
        assert_eq!(direction_for_key(Key::ArrowRight), Some(Direction::Right));
    }

    #[test]
    fn key_press_matches_button_click() {
        let mut via_key = ControlPad::default();
        let mut via_button = ControlPad::default();

        assert!(via_key.key_pressed(Key::ArrowLeft));
        via_button.press(Direction::Left);

        assert_eq!(via_key.last(), via_button.last());
        assert_eq!(via_key.presses(), via_button.presses());
    }

    #[test]
    fn unbound_key_produces_no_notice() {
        let mut pad = ControlPad::default();
        assert!(!pad.key_pressed(Key::A));
        assert!(!pad.key_pressed(Key::Space));
        assert_eq!(pad.last(), None);
        assert_eq!(pad.presses(), 0);
    }

    #[test]
    fn button_row_covers_all_directions() {
        for direction in Direction::ALL {
            assert!(BUTTON_ROW.contains(&direction));
        }
    }
}
