use crate::placemark::Placemark;
use crate::render::{Render, RenderOptions};
use crate::style::Style;
use std::fmt::Write;

/// A child of a [`Folder`].
#[derive(Debug, Clone, PartialEq)]
pub enum Feature {
    Placemark(Placemark),
    Folder(Folder),
    Style(Style),
}

impl From<Placemark> for Feature {
    fn from(placemark: Placemark) -> Self {
        Feature::Placemark(placemark)
    }
}

impl From<Folder> for Feature {
    fn from(folder: Folder) -> Self {
        Feature::Folder(folder)
    }
}

impl From<Style> for Feature {
    fn from(style: Style) -> Self {
        Feature::Style(style)
    }
}

impl Render for Feature {
    fn render_into(&self, out: &mut String, options: &RenderOptions) {
        match self {
            Feature::Placemark(placemark) => placemark.render_into(out, options),
            Feature::Folder(folder) => folder.render_into(out, options),
            Feature::Style(style) => style.render_into(out, options),
        }
    }
}

/// A named container of placemarks, styles and nested folders.
///
/// # Example
///
/// ```rust
/// use kmlgen::{Folder, Placemark, Point, Render, Style};
///
/// # fn main() -> kmlgen::Result<()> {
/// let mut stations = Folder::new("Stations", "Weather stations");
/// stations.add_feature(Style::new("station", 255, 0, 128, 255));
///
/// let mut placemark = Placemark::new("KSEA", "Seattle-Tacoma", Point::new(47.449, -122.309, 0.0)?);
/// placemark.set_style("station");
/// stations.add_feature(placemark);
///
/// assert_eq!(stations.feature_count(), 2);
/// assert!(stations.render().starts_with("<Folder>\n<name>Stations</name>\n"));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Folder {
    name: String,
    description: String,
    features: Vec<Feature>,
}

impl Folder {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            features: Vec::new(),
        }
    }

    /// Appends a placemark, style or folder.
    pub fn add_feature(&mut self, feature: impl Into<Feature>) {
        self.features.push(feature.into());
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn features(&self) -> &[Feature] {
        &self.features
    }

    pub fn feature_count(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// Visits every placemark in this folder and its sub-folders,
    /// depth-first in insertion order.
    pub(crate) fn walk_placemarks<'a>(&'a self, visit: &mut impl FnMut(&'a Placemark)) {
        for feature in &self.features {
            match feature {
                Feature::Placemark(placemark) => visit(placemark),
                Feature::Folder(folder) => folder.walk_placemarks(&mut *visit),
                Feature::Style(_) => {}
            }
        }
    }

    /// Same as [`walk_placemarks`](Self::walk_placemarks) for styles.
    pub(crate) fn walk_styles<'a>(&'a self, visit: &mut impl FnMut(&'a Style)) {
        for feature in &self.features {
            match feature {
                Feature::Style(style) => visit(style),
                Feature::Folder(folder) => folder.walk_styles(&mut *visit),
                Feature::Placemark(_) => {}
            }
        }
    }
}

impl<F: Into<Feature>> Extend<F> for Folder {
    fn extend<I: IntoIterator<Item = F>>(&mut self, iter: I) {
        for feature in iter {
            self.add_feature(feature);
        }
    }
}

impl Render for Folder {
    fn render_into(&self, out: &mut String, options: &RenderOptions) {
        out.push_str("<Folder>\n");
        let _ = writeln!(out, "<name>{}</name>", options.text(&self.name));
        let _ = writeln!(
            out,
            "<description>{}</description>",
            options.text(&self.description)
        );

        for feature in &self.features {
            feature.render_into(out, options);
        }

        out.push_str("</Folder>\n");
    }
}
