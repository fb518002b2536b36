//! End-to-end flag creation.
//!
//! Strings the resolver, color registry, layout engine, and caption overlay
//! together inside a single undoable host transaction, so a flag either
//! lands completely or not at all.

use thiserror::Error;

use crate::config::FlagConfig;
use crate::host::{ColorId, Host, ShapeId};
use crate::layout::layout_stripes;
use crate::overlay::{add_caption, Caption};
use crate::palette::Palette;
use crate::registry::get_or_create_color;
use crate::resolver::{resolve_flag_location, SelectionError};
use crate::color::ColorFormatError;

/// Anything that can stop a flag from being created.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FlagError {
    #[error("invalid selection: {0}")]
    Selection(#[from] SelectionError),
    #[error("invalid palette color: {0}")]
    Color(#[from] ColorFormatError),
}

/// Create one flag from a palette at the location the current selection
/// implies.
///
/// Runs as a single undoable operation labeled `"Add <title> flag"`. On any
/// error the host rolls the document back, including the consumed selection
/// shape and any swatches registered along the way. Returns the stripe
/// group, or `None` when the palette has no retained stripes (the resolver
/// side effects still commit in that case).
pub fn create_flag(
    host: &mut impl Host,
    palette: &Palette,
    config: &FlagConfig,
    caption: Option<&Caption>,
) -> Result<Option<ShapeId>, FlagError> {
    let label = format!("Add {} flag", palette.title);
    host.undoable(&label, |host| {
        let location = resolve_flag_location(host, config)?;
        let fills = resolve_fills(host, palette)?;
        let group = layout_stripes(host, &location, &fills);
        if let Some(caption) = caption {
            add_caption(host, &location, &caption.message, caption.padding)?;
        }
        Ok(group)
    })
}

/// Register every stripe's swatch, keeping holes in place so layout can
/// drop them itself.
fn resolve_fills(
    host: &mut impl Host,
    palette: &Palette,
) -> Result<Vec<Option<ColorId>>, ColorFormatError> {
    palette
        .stripes
        .iter()
        .map(|stripe| {
            stripe
                .as_ref()
                .map(|s| get_or_create_color(host, &s.name, &s.color))
                .transpose()
        })
        .collect()
}

/// Convenience wrapper used by UI dispatch: one flag per button.
pub fn create_builtin_flag(
    host: &mut impl Host,
    name: &str,
    config: &FlagConfig,
    caption: Option<&Caption>,
) -> Result<Option<ShapeId>, FlagError> {
    match crate::palettes::get_builtin(name) {
        Some(palette) => create_flag(host, &palette, config, caption),
        None => Ok(None),
    }
}
