//! Data model for flag palettes.

use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::color::ColorSpec;

/// Failure to load a palette definition from disk.
#[derive(Debug, Error)]
pub enum PaletteFileError {
    #[error("cannot read palette file: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid palette JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// One stripe of a flag: a named swatch and its color specification.
///
/// The name keys the document color registry, so two stripes with the same
/// name share one swatch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stripe {
    pub name: String,
    pub color: ColorSpec,
}

impl Stripe {
    pub fn new(name: impl Into<String>, color: ColorSpec) -> Self {
        Self { name: name.into(), color }
    }
}

/// An ordered, immutable list of stripes defining one flag variant.
///
/// `stripes` may contain `None` holes; holes are dropped before layout, so
/// the retained stripes tile the full bounds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Palette {
    /// Lookup key, e.g. `"transgender"`
    pub name: String,
    /// Human-readable label, e.g. `"Trans"` - used for undo history labels
    pub title: String,
    pub stripes: Vec<Option<Stripe>>,
}

impl Palette {
    /// The stripes that actually get painted, holes removed.
    pub fn retained(&self) -> impl Iterator<Item = &Stripe> {
        self.stripes.iter().flatten()
    }

    /// Number of stripes after dropping holes.
    pub fn stripe_count(&self) -> usize {
        self.retained().count()
    }

    /// Load a palette from a JSON definition.
    pub fn from_reader(reader: impl Read) -> Result<Self, PaletteFileError> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Load a palette from a JSON file on disk.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, PaletteFileError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(std::io::BufReader::new(file))
    }
}
