//! # kmlgen
//!
//! Build Keyhole Markup Language (KML) documents in memory and render them
//! to text for Google Earth and other mapping tools.
//!
//! ## Features
//!
//! - **Document tree**: documents made of folders, which hold placemarks,
//!   styles and nested folders in insertion order
//! - **Validated geometry**: points reject out-of-range or non-finite
//!   latitude and longitude at construction
//! - **Shared styles**: one color applied to icons, lines and polygons,
//!   referenced from placemarks by id
//! - **Deterministic output**: rendering is a pure function of the tree
//! - **Optional escaping**: text is written verbatim by default; XML
//!   escaping is available per render call
//!
//! ## Quick Start
//!
//! ```rust
//! use kmlgen::{Document, Folder, Placemark, Point, Render, Result, Style};
//!
//! # fn main() -> Result<()> {
//! let mut folder = Folder::new("Lighthouses", "Pacific coast");
//!
//! let mut style = Style::new("beacon", 255, 255, 200, 0);
//! style.set_icon_scale(1.5);
//! folder.add_feature(style);
//!
//! let mut placemark = Placemark::new(
//!     "Cape Disappointment",
//!     "Oldest functioning lighthouse on the West Coast",
//!     Point::new(46.2759, -124.0526, 0.0)?,
//! );
//! placemark.set_style("beacon");
//! folder.add_feature(placemark);
//!
//! let mut doc = Document::new();
//! doc.add_folder(folder);
//!
//! kmlgen::validate_styles(&doc)?;
//! let kml = doc.render();
//! assert!(kml.contains("<coordinates>-124.052600,46.275900,0.000000</coordinates>"));
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`document`] - The root of a KML document
//! - [`folder`] - Folders and the features they contain
//! - [`placemark`] - Named features wrapping a geometry
//! - [`style`] - Icon, line and polygon styles
//! - [`geometry`] - Points
//! - [`color`] - `aabbggrr` colors
//! - [`render`] - The shared rendering capability and its options
//! - [`validate`] - Optional style reference checks

pub mod color;
pub mod document;
pub mod error;
pub mod folder;
pub mod geometry;
pub mod placemark;
pub mod render;
pub mod style;
pub mod validate;

pub use color::Color;
pub use document::Document;
pub use error::{KmlError, Result};
pub use folder::{Feature, Folder};
pub use geometry::{Geometry, Point};
pub use placemark::Placemark;
pub use render::{Render, RenderOptions, TextEscaping};
pub use style::Style;
pub use validate::validate_styles;

/// Current version of kmlgen
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
