//! Screen placement of the fixed overlays.

use crate::constants::{
    GAME_OVER_HEIGHT, GAME_OVER_LIFT, GAME_OVER_WIDTH, MENU_HEIGHT, MENU_WIDTH, RESTART_HEIGHT,
    RESTART_WIDTH, SCORE_TEXT_Y, SCREEN_HEIGHT, SCREEN_WIDTH,
};
use crate::geometry::{Point, Rect};

/// Main menu panel, centered on screen.
pub const fn menu_rect() -> Rect {
    Rect::new(
        (SCREEN_WIDTH - MENU_WIDTH) / 2,
        (SCREEN_HEIGHT - MENU_HEIGHT) / 2,
        MENU_WIDTH,
        MENU_HEIGHT,
    )
}

/// Restart button, centered on screen.
pub const fn restart_button_rect() -> Rect {
    Rect::new(
        (SCREEN_WIDTH - RESTART_WIDTH) / 2,
        (SCREEN_HEIGHT - RESTART_HEIGHT) / 2,
        RESTART_WIDTH,
        RESTART_HEIGHT,
    )
}

/// "Game over" banner, horizontally centered above the restart button.
pub const fn game_over_rect() -> Rect {
    Rect::new(
        (SCREEN_WIDTH - GAME_OVER_WIDTH) / 2,
        (SCREEN_HEIGHT - GAME_OVER_HEIGHT) / 2 - GAME_OVER_LIFT,
        GAME_OVER_WIDTH,
        GAME_OVER_HEIGHT,
    )
}

/// Center of the score readout.
pub const fn score_position() -> Point {
    Point::new(SCREEN_WIDTH / 2, SCORE_TEXT_Y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlay_positions() {
        assert_eq!(menu_rect().top_left(), Point::new(50, 100));
        assert_eq!(restart_button_rect().top_left(), Point::new(125, 275));
        assert_eq!(game_over_rect().top_left(), Point::new(104, 179));
    }

    #[test]
    fn test_banner_above_button() {
        assert!(game_over_rect().bottom() < restart_button_rect().top());
    }
}
