use crate::rect::Rect;
use crate::units::Px;
use serde::{Deserialize, Serialize};

/// Margins are the padding kept clear between the edge of a preview box or
/// export canvas and the text inside it. Nothing stops text from overflowing
/// them; they are guidelines for where layout starts and how wide it may run.
#[derive(Debug, Default, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Margins {
    pub top: Px,
    pub right: Px,
    pub bottom: Px,
    pub left: Px,
}

impl Margins {
    /// Create margins by specifying individual components in a clockwise fashion
    /// starting at the top (in the same order as CSS margins)
    pub fn trbl(top: Px, right: Px, bottom: Px, left: Px) -> Margins {
        Margins {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Create margins where all values are equal
    pub fn all<D: Into<Px>>(value: D) -> Margins {
        let value: Px = value.into();
        Margins {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    /// Combined left and right margin
    pub fn horizontal(&self) -> Px {
        self.left + self.right
    }

    /// Combined top and bottom margin
    pub fn vertical(&self) -> Px {
        self.top + self.bottom
    }

    /// The area left over inside a `width` by `height` box once the margins
    /// are taken away, in top-left-origin coordinates
    pub fn content_box(&self, width: Px, height: Px) -> Rect {
        Rect {
            x1: self.left,
            y1: self.top,
            x2: width - self.right,
            y2: height - self.bottom,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_box_shrinks_by_margins() {
        let margins = Margins::trbl(Px(10.0), Px(20.0), Px(30.0), Px(40.0));
        let inner = margins.content_box(Px(300.0), Px(200.0));
        assert_eq!(inner.width(), Px(240.0));
        assert_eq!(inner.height(), Px(160.0));
        assert_eq!(margins.horizontal(), Px(60.0));
        assert_eq!(margins.vertical(), Px(40.0));
    }
}
