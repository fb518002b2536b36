//! Name-keyed color registry.
//!
//! Swatches are memoized by name against the document color table: the
//! first caller to use a name wins and later calls reuse that swatch even
//! when they carry a different color value. All swatches created here land
//! in one shared color group and are normalized to CMYK for print output.

use crate::color::{parse_color, ColorFormatError, ColorSpace, ColorSpec};
use crate::host::{ColorGroupId, ColorId, Host};

/// The color group that collects every swatch this crate creates.
pub const COLOR_GROUP_NAME: &str = "Pride Colors";

/// Look up the shared color group, creating it on first use.
pub fn get_or_create_color_group(host: &mut impl Host) -> ColorGroupId {
    match host.color_group_by_name(COLOR_GROUP_NAME) {
        Some(group) => group,
        None => host.add_color_group(COLOR_GROUP_NAME),
    }
}

/// Resolve a named swatch, creating it on first use.
///
/// The spec is parsed before anything else, so a malformed color never
/// leaves a partially created swatch or group behind. An existing swatch
/// with the same name is returned as-is; its stored value is not compared
/// against `spec`.
///
/// Newly created swatches are forced into CMYK after creation, converting
/// the value the host stored. This matches print-oriented documents where
/// an RGB-defined swatch would otherwise drift at output time.
pub fn get_or_create_color(
    host: &mut impl Host,
    name: &str,
    spec: &ColorSpec,
) -> Result<ColorId, ColorFormatError> {
    let value = parse_color(spec)?;

    if let Some(existing) = host.color_by_name(name) {
        return Ok(existing);
    }

    let group = get_or_create_color_group(host);
    let color = host.add_color(name, value, group);
    host.set_color_space(color, ColorSpace::Cmyk);
    Ok(color)
}
