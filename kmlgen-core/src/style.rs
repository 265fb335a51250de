//! Shared styles referenced by placemarks.

use crate::color::Color;
use crate::render::{Render, RenderOptions};
use std::fmt::Write;

/// Icon used for point placemarks when none is set.
pub const DEFAULT_ICON_URL: &str = "http://maps.google.com/mapfiles/kml/pushpin/ylw-pushpin.png";

/// Icon scale used when none is set.
pub const DEFAULT_ICON_SCALE: f64 = 1.1;

const MAX_ICON_SCALE: f64 = 100.0;
const LINE_WIDTH: u32 = 3;

/// A named style applied to point icons, lines and polygons.
///
/// The same color is used for all three. Placemarks refer to a style by its
/// id (see [`Placemark::set_style`](crate::Placemark::set_style)); nothing
/// checks that the id is actually declared in the document unless
/// [`validate_styles`](crate::validate_styles) is called.
#[derive(Debug, Clone, PartialEq)]
pub struct Style {
    id: String,
    color: Color,
    icon_url: String,
    icon_scale: f64,
    fill: bool,
}

impl Style {
    /// Create a new style. `id` should be a single word usable as an XML
    /// attribute value.
    pub fn new(id: impl Into<String>, alpha: u8, red: u8, green: u8, blue: u8) -> Self {
        Self::with_color(id, Color::argb(alpha, red, green, blue))
    }

    pub fn with_color(id: impl Into<String>, color: Color) -> Self {
        Self {
            id: id.into(),
            color,
            icon_url: DEFAULT_ICON_URL.to_string(),
            icon_scale: DEFAULT_ICON_SCALE,
            fill: false,
        }
    }

    /// Changes the icon used for point placemarks.
    ///
    /// Surrounding whitespace is trimmed. A blank URL is ignored and the
    /// previous icon is kept.
    pub fn set_icon_url(&mut self, url: &str) {
        let url = url.trim();
        if url.is_empty() {
            tracing::debug!(style = %self.id, "ignoring blank icon URL");
            return;
        }
        self.icon_url = url.to_string();
    }

    /// Changes the icon scale. Values outside [0, 100] (and NaN) are
    /// ignored and the previous scale is kept.
    pub fn set_icon_scale(&mut self, scale: f64) {
        if (0.0..=MAX_ICON_SCALE).contains(&scale) {
            self.icon_scale = scale;
        } else {
            tracing::debug!(style = %self.id, scale, "ignoring out-of-range icon scale");
        }
    }

    /// Whether polygons are filled. Polygons are not filled by default.
    pub fn set_polygon_fill(&mut self, fill: bool) {
        self.fill = fill;
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn icon_url(&self) -> &str {
        &self.icon_url
    }

    pub fn icon_scale(&self) -> f64 {
        self.icon_scale
    }

    pub fn polygon_fill(&self) -> bool {
        self.fill
    }
}

impl Render for Style {
    fn render_into(&self, out: &mut String, options: &RenderOptions) {
        let color = self.color.to_kml_hex();

        let _ = writeln!(out, "<Style id=\"{}\">", options.text(&self.id));

        out.push_str("<IconStyle>\n");
        let _ = writeln!(out, "<color>{color}</color>");
        let _ = writeln!(out, "<scale>{:.6}</scale>", self.icon_scale);
        let _ = writeln!(
            out,
            "<Icon><href>{}</href></Icon>",
            options.text(&self.icon_url)
        );
        out.push_str("</IconStyle>\n");

        out.push_str("<LineStyle>\n");
        let _ = writeln!(out, "<color>{color}</color>");
        let _ = writeln!(out, "<width>{LINE_WIDTH}</width>");
        out.push_str("</LineStyle>\n");

        out.push_str("<PolyStyle>\n");
        let _ = writeln!(out, "<color>{color}</color>");
        out.push_str("<colorMode>normal</colorMode>\n");
        let _ = writeln!(out, "<fill>{}</fill>", u8::from(self.fill));
        out.push_str("<outline>1</outline>\n");
        out.push_str("</PolyStyle>\n");

        out.push_str("</Style>\n");
    }
}
