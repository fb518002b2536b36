//! flagpress - pride flag stripe layout for page-layout documents
//!
//! The core takes a host document model (selection, pages, shapes, named
//! color tables) through the [`host::Host`] trait and turns a flag palette
//! into a grouped stack of equal stripes, replacing the current selection
//! or filling a fresh page. A raster preview and a small CLI sit on top.
//!
//! ```
//! use flagpress::config::FlagConfig;
//! use flagpress::flags::create_flag;
//! use flagpress::host::{Host, MemoryHost};
//! use flagpress::palettes::get_builtin;
//!
//! let mut host = MemoryHost::new();
//! host.create_document();
//!
//! let rainbow = get_builtin("rainbow").unwrap();
//! let group = create_flag(&mut host, &rainbow, &FlagConfig::default(), None)
//!     .unwrap()
//!     .unwrap();
//! assert_eq!(host.selection(), vec![group]);
//! ```

pub mod cli;
pub mod color;
pub mod config;
pub mod flags;
pub mod geometry;
pub mod host;
pub mod layout;
pub mod listener;
pub mod overlay;
pub mod palette;
pub mod palettes;
pub mod registry;
pub mod render;
pub mod resolver;
