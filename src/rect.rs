use crate::units::*;

/// A rectangle, specified by two opposite corners. Coordinates have their
/// origin at the top left, growing right and down, as on a canvas.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Rect {
    /// The x-coordinate of the top-left corner.
    pub x1: Px,
    /// The y-coordinate of the top-left corner.
    pub y1: Px,
    /// The x-coordinate of the bottom-right corner.
    pub x2: Px,
    /// The y-coordinate of the bottom-right corner.
    pub y2: Px,
}

impl Rect {
    pub fn width(&self) -> Px {
        self.x2 - self.x1
    }

    pub fn height(&self) -> Px {
        self.y2 - self.y1
    }

    pub fn center_x(&self) -> Px {
        self.x1 + self.width() / 2.0
    }
}
