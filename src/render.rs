//! Raster preview of a palette.
//!
//! Paints the same band partition the layout engine produces, but into an
//! RGBA buffer for the CLI's PNG preview. CMYK specs are converted for
//! display.

use image::{Rgba, RgbaImage};

use crate::color::{parse_color, ColorFormatError};
use crate::palette::Palette;

/// Render a palette's stripes to an image.
///
/// Holes are dropped exactly as in layout, so the retained stripes fill
/// the full height. A palette with no retained stripes renders fully
/// transparent.
pub fn render_flag(
    palette: &Palette,
    width: u32,
    height: u32,
) -> Result<RgbaImage, ColorFormatError> {
    let fills: Vec<[u8; 3]> = palette
        .retained()
        .map(|stripe| parse_color(&stripe.color).map(|v| v.to_rgb8()))
        .collect::<Result<_, _>>()?;

    let mut image = RgbaImage::new(width, height);
    let total = fills.len() as u64;
    if total == 0 {
        return Ok(image);
    }

    for (index, fill) in fills.iter().enumerate() {
        let top = (height as u64 * index as u64 / total) as u32;
        let bottom = (height as u64 * (index as u64 + 1) / total) as u32;
        let pixel = Rgba([fill[0], fill[1], fill[2], 255]);
        for y in top..bottom {
            for x in 0..width {
                image.put_pixel(x, y, pixel);
            }
        }
    }
    Ok(image)
}
