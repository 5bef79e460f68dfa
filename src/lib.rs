//! Fit short text into a box, wrap it, and export it as a slightly blurry
//! PNG. The widget's state lives in [RenderState]; every user action is a
//! [Command] that produces a new state and an [Effect].

mod canvas;
pub use canvas::*;

mod colour;
pub use colour::*;

mod config;
pub use config::*;

mod error;
pub use error::*;

mod export;
pub use export::*;

mod font;
pub use font::*;

/// Utility functions and structures to size and wrap text
pub mod layout;

mod preview;
pub use preview::*;

mod rect;
pub use rect::*;

mod style;
pub use style::*;

mod units;
pub use units::*;

mod widget;
pub use widget::*;
