use super::TextMeasurer;
use crate::units::Px;
use log::trace;

/// The largest font size text will ever be fitted at
pub const MAX_FONT_SIZE: Px = Px(100.0);
/// The floor; text that does not fit at any larger size is set at this size
pub const MIN_FONT_SIZE: Px = Px(24.0);
/// Candidate sizes are tried from [MAX_FONT_SIZE] downwards in these steps
pub const FONT_SIZE_STEP: Px = Px(2.0);

/// The outcome of fitting text into a container
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FitResult {
    pub font_size: Px,
    pub container_width: Px,
}

/// Find the largest font size in `100, 98, ..., 26` at which `text`, set on a
/// single line, is narrower than `container_width * fit_ratio`. If none of
/// them fit, the floor of [MIN_FONT_SIZE] is used without measuring.
///
/// This never fails; the worst case is text set at the floor that will then
/// have to wrap (or overflow) at that size.
pub fn fit_font_size<M: TextMeasurer + ?Sized>(
    measurer: &M,
    text: &str,
    container_width: Px,
    fit_ratio: f32,
) -> FitResult {
    let threshold = container_width * fit_ratio;

    let mut font_size = MAX_FONT_SIZE;
    while font_size > MIN_FONT_SIZE {
        let width = measurer.width(text, font_size);
        if width < threshold {
            break;
        }
        font_size -= FONT_SIZE_STEP;
    }

    trace!("fitted {:?} at {font_size} (threshold {threshold})", text);

    FitResult {
        font_size,
        container_width,
    }
}
