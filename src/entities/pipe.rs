//! Scrolling pipe obstacles.

use crate::constants::{PIPE_GAP, PIPE_HEIGHT, PIPE_WIDTH, SCROLL_SPEED};
use crate::geometry::Rect;

/// Which side of the gap a pipe sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Polarity {
    /// Hangs from above; flipped sprite, bottom edge at `center - gap/2`.
    Top,
    /// Rises from below; top edge at `center + gap/2`.
    Bottom,
}

impl Polarity {
    /// +1 for the upper pipe, -1 for the lower one.
    pub fn sign(self) -> i32 {
        match self {
            Polarity::Top => 1,
            Polarity::Bottom => -1,
        }
    }
}

/// One half of a pipe pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pipe {
    pub rect: Rect,
    pub polarity: Polarity,
}

impl Pipe {
    pub fn new(x: i32, center_y: i32, polarity: Polarity) -> Self {
        let half_gap = PIPE_GAP / 2;
        let top = match polarity {
            Polarity::Top => center_y - half_gap - PIPE_HEIGHT,
            Polarity::Bottom => center_y + half_gap,
        };
        Self {
            rect: Rect::new(x, top, PIPE_WIDTH, PIPE_HEIGHT),
            polarity,
        }
    }

    /// Scroll one tick to the left. Returns true once fully off-screen.
    pub fn advance(&mut self) -> bool {
        self.rect.x -= SCROLL_SPEED;
        self.is_expired()
    }

    pub fn is_expired(&self) -> bool {
        self.rect.right() < 0
    }
}

/// Upper and lower pipe sharing an x position and a gap center.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipePair {
    pub top: Pipe,
    pub bottom: Pipe,
}

impl PipePair {
    pub fn new(x: i32, center_y: i32) -> Self {
        Self {
            top: Pipe::new(x, center_y, Polarity::Top),
            bottom: Pipe::new(x, center_y, Polarity::Bottom),
        }
    }

    /// Scroll both halves. Returns true once the pair should be removed.
    pub fn advance(&mut self) -> bool {
        let top_gone = self.top.advance();
        let bottom_gone = self.bottom.advance();
        top_gone && bottom_gone
    }

    /// Horizontal span shared by both halves.
    pub fn left(&self) -> i32 {
        self.bottom.rect.left()
    }

    pub fn right(&self) -> i32 {
        self.bottom.rect.right()
    }

    pub fn pipes(&self) -> [&Pipe; 2] {
        [&self.top, &self.bottom]
    }

    pub fn intersects(&self, rect: &Rect) -> bool {
        self.pipes().iter().any(|pipe| pipe.rect.intersects(rect))
    }
}
