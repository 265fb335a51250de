//! JSON layer manifests and their conversion into a KML document.

use kmlgen::{Color, Document, Folder, Placemark, Point, Style};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    #[serde(default)]
    pub folders: Vec<FolderSpec>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FolderSpec {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub styles: Vec<StyleSpec>,
    #[serde(default)]
    pub placemarks: Vec<PlacemarkSpec>,
    #[serde(default)]
    pub folders: Vec<FolderSpec>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StyleSpec {
    pub id: String,
    pub color: ColorSpec,
    pub icon_url: Option<String>,
    pub icon_scale: Option<f64>,
    #[serde(default)]
    pub fill: bool,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ColorSpec {
    #[serde(default = "opaque")]
    pub alpha: u8,
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

fn opaque() -> u8 {
    0xff
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlacemarkSpec {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub style: Option<String>,
    pub point: PointSpec,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PointSpec {
    pub lat: f64,
    pub lon: f64,
    #[serde(default)]
    pub alt: f64,
}

impl Manifest {
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Builds the document. Values pass through the same validating
    /// constructors and setters as hand-written code.
    pub fn into_document(self) -> kmlgen::Result<Document> {
        let mut doc = Document::new();
        for folder in self.folders {
            doc.add_folder(folder.into_folder()?);
        }
        Ok(doc)
    }
}

impl FolderSpec {
    fn into_folder(self) -> kmlgen::Result<Folder> {
        let mut folder = Folder::new(self.name, self.description);

        for style in self.styles {
            folder.add_feature(style.into_style());
        }
        for placemark in self.placemarks {
            folder.add_feature(placemark.into_placemark()?);
        }
        for child in self.folders {
            folder.add_feature(child.into_folder()?);
        }

        Ok(folder)
    }
}

impl StyleSpec {
    fn into_style(self) -> Style {
        let color = Color::argb(
            self.color.alpha,
            self.color.red,
            self.color.green,
            self.color.blue,
        );
        let mut style = Style::with_color(self.id, color);
        if let Some(url) = &self.icon_url {
            style.set_icon_url(url);
        }
        if let Some(scale) = self.icon_scale {
            style.set_icon_scale(scale);
        }
        style.set_polygon_fill(self.fill);
        style
    }
}

impl PlacemarkSpec {
    fn into_placemark(self) -> kmlgen::Result<Placemark> {
        let point = Point::new(self.point.lat, self.point.lon, self.point.alt)?;
        let mut placemark = Placemark::new(self.name, self.description, point);
        if let Some(style) = &self.style {
            placemark.set_style(style);
        }
        Ok(placemark)
    }
}

fn summit_placemark(name: &str, lat: f64, lon: f64, alt: f64) -> kmlgen::Result<Placemark> {
    let mut placemark = Placemark::new(name, "Stratovolcano", Point::new(lat, lon, alt)?);
    placemark.set_style("summit");
    Ok(placemark)
}

/// The document rendered by `kmlgen demo`.
pub fn demo_document() -> kmlgen::Result<Document> {
    let mut styles = Folder::new("Styles", "Shared styles");
    let mut summit = Style::new("summit", 255, 220, 60, 20);
    summit.set_icon_url("http://maps.google.com/mapfiles/kml/shapes/volcano.png");
    summit.set_icon_scale(1.4);
    styles.add_feature(summit);

    let mut peaks = Folder::new("Cascade Volcanoes", "Major peaks of the Cascade Range");

    let mut washington = Folder::new("Washington", "");
    washington.add_feature(summit_placemark("Mount Rainier", 46.8523, -121.7603, 4392.0)?);
    washington.add_feature(summit_placemark("Mount St. Helens", 46.1914, -122.1956, 2549.0)?);

    let mut oregon = Folder::new("Oregon", "");
    oregon.add_feature(summit_placemark("Mount Hood", 45.3736, -121.6960, 3429.0)?);

    peaks.add_feature(washington);
    peaks.add_feature(oregon);

    let mut doc = Document::new();
    doc.add_folder(styles);
    doc.add_folder(peaks);
    Ok(doc)
}
