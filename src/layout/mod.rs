//! Text layout utilities for sizing and breaking text into lines.
//!
//! Layout here is purely geometric. Everything is driven by a
//! [`TextMeasurer`], so the same code sizes text for a real [`Font`](crate::Font)
//! or for the fixed-advance [`BlockFace`] used in tests.
//!
//! # Layout Functions
//!
//! - [`fit_font_size`] - the largest font size (100 down to 24, in steps of 2)
//!   at which text fits on a single line
//! - [`wrap_lines`] - greedy word wrapping into a [`LineSet`], never splitting
//!   a word
//! - [`normalize_text`] - trims input and collapses whitespace runs, which
//!   both of the above expect
//!
//! # Example
//!
//! ```
//! use brat_text::layout::{fit_font_size, normalize_text, wrap_lines, BlockFace};
//! use brat_text::Px;
//!
//! let text = normalize_text("  Hello\nworld ");
//! let fit = fit_font_size(&BlockFace, &text, Px(400.0), 1.0);
//! assert!(fit.font_size <= Px(100.0));
//!
//! let lines = wrap_lines(&BlockFace, &text, fit.font_size, Px(340.0));
//! assert_eq!(lines.join(" "), "Hello world");
//! ```

mod fit;
mod margins;
mod measure;
mod wrap;

pub use fit::*;
pub use margins::*;
pub use measure::*;
pub use wrap::*;
