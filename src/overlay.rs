//! Caption text overlay.
//!
//! Adds a centered message on top of a finished flag. Purely additive: runs
//! after stripe layout and never moves the stripes.

use crate::color::{ColorFormatError, ColorSpec};
use crate::host::{Host, Justification, ShapeId, TextFrame, VerticalJustification};
use crate::registry::get_or_create_color;
use crate::resolver::FlagLocation;

const CAPTION_POINT_SIZE: f64 = 32.0;
const CAPTION_FONT: &str = "Arial";
const CAPTION_FILL_NAME: &str = "White";

/// A user-entered caption and its padding choice.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Caption {
    pub message: String,
    /// Inset the frame by the page's column gutter on every side.
    pub padding: bool,
}

impl Caption {
    pub fn new(message: impl Into<String>, padding: bool) -> Self {
        Self { message: message.into(), padding }
    }
}

/// Place a caption over a flag.
///
/// The frame spans the middle fifth of the flag's height (rows from 2/5 to
/// 3/5 of the vertical span) and is inset horizontally by the page margins;
/// with `padding` the page's column gutter is added on every side. Empty
/// messages create nothing and return `Ok(None)`.
///
/// The text is set in 32 pt Arial, centered both ways, filled with the
/// registry's paper-white swatch (CMYK 0/0/0/0).
pub fn add_caption(
    host: &mut impl Host,
    location: &FlagLocation,
    message: &str,
    padding: bool,
) -> Result<Option<ShapeId>, ColorFormatError> {
    if message.is_empty() {
        return Ok(None);
    }

    let fill = get_or_create_color(
        host,
        CAPTION_FILL_NAME,
        &ColorSpec::components([0.0, 0.0, 0.0, 0.0]),
    )?;

    let margins = host.page_margins(location.container);
    let gutter = if padding { margins.column_gutter } else { 0.0 };

    let bounds = location.bounds;
    let span = bounds.height();
    let mut frame_bounds = bounds;
    frame_bounds.top = bounds.top + span * 2.0 / 5.0 + gutter;
    frame_bounds.bottom = bounds.top + span * 3.0 / 5.0 - gutter;
    frame_bounds.left = bounds.left + margins.left + gutter;
    frame_bounds.right = bounds.right - margins.right - gutter;

    let frame = host.add_text_frame(
        location.container,
        TextFrame {
            bounds: frame_bounds,
            contents: message.to_string(),
            justification: Justification::Center,
            vertical_justification: VerticalJustification::Center,
            point_size: CAPTION_POINT_SIZE,
            font_family: CAPTION_FONT.to_string(),
            fill: Some(fill),
        },
    );
    Ok(Some(frame))
}
