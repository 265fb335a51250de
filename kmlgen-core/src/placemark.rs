use crate::geometry::Geometry;
use crate::render::{Render, RenderOptions};
use std::fmt::Write;

/// A named, described feature wrapping a single geometry.
#[derive(Debug, Clone, PartialEq)]
pub struct Placemark {
    name: String,
    description: String,
    geometry: Geometry,
    style: Option<String>,
}

impl Placemark {
    /// Create a new placemark around `geometry` (a [`Point`](crate::Point)
    /// or any other [`Geometry`]).
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        geometry: impl Into<Geometry>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            geometry: geometry.into(),
            style: None,
        }
    }

    /// Refers this placemark to the [`Style`](crate::Style) with the given
    /// id. The document must declare a style with a matching id; this is
    /// not checked here.
    ///
    /// Surrounding whitespace is trimmed and a blank name is ignored.
    pub fn set_style(&mut self, style_id: &str) {
        let style_id = style_id.trim();
        if style_id.is_empty() {
            tracing::debug!(placemark = %self.name, "ignoring blank style reference");
            return;
        }
        self.style = Some(style_id.to_string());
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    pub fn style(&self) -> Option<&str> {
        self.style.as_deref()
    }
}

impl Render for Placemark {
    fn render_into(&self, out: &mut String, options: &RenderOptions) {
        out.push_str("<Placemark>\n");
        let _ = writeln!(out, "<name>{}</name>", options.text(&self.name));
        let _ = writeln!(
            out,
            "<description>{}</description>",
            options.text(&self.description)
        );
        out.push_str("<visibility>1</visibility>\n");

        if let Some(style) = &self.style {
            let _ = writeln!(out, "<styleUrl>#{}</styleUrl>", options.text(style));
        }

        self.geometry.render_into(out, options);
        out.push_str("</Placemark>\n");
    }
}
