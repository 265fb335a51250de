use crate::folder::Folder;
use crate::render::{Render, RenderOptions};

const XML_DECLARATION: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n";
const KML_OPEN: &str = "<kml xmlns=\"http://www.opengis.net/kml/2.2\">\n";
const KML_CLOSE: &str = "</kml>\n";

/// A KML document made of top-level folders.
///
/// Styles and placemarks live inside folders. Rendering produces the
/// complete document text; writing it anywhere is up to the caller.
///
/// # Example
///
/// ```rust
/// use kmlgen::{Document, Folder, Placemark, Point, Render};
///
/// # fn main() -> kmlgen::Result<()> {
/// let mut folder = Folder::new("Peaks", "Cascade volcanoes");
/// folder.add_feature(Placemark::new("Rainier", "", Point::new(46.852, -121.760, 4392.0)?));
///
/// let mut doc = Document::new();
/// doc.add_folder(folder);
///
/// let kml = doc.render();
/// assert!(kml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n"));
/// assert!(kml.ends_with("</kml>\n"));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Document {
    folders: Vec<Folder>,
}

impl Document {
    /// Creates a new empty document.
    pub fn new() -> Self {
        Self {
            folders: Vec::with_capacity(2),
        }
    }

    /// Adds a folder to the document. `None` is ignored.
    pub fn add_folder(&mut self, folder: impl Into<Option<Folder>>) {
        if let Some(folder) = folder.into() {
            self.folders.push(folder);
        }
    }

    pub fn folders(&self) -> &[Folder] {
        &self.folders
    }

    /// Gets the number of top-level folders.
    pub fn folder_count(&self) -> usize {
        self.folders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.folders.is_empty()
    }

    /// Ids of every style declared anywhere in the document, depth-first.
    pub fn style_ids(&self) -> Vec<&str> {
        let mut ids = Vec::new();
        for folder in &self.folders {
            folder.walk_styles(&mut |style| ids.push(style.id()));
        }
        ids
    }

    /// `(placemark name, style id)` for every placemark that references a
    /// style, depth-first.
    pub fn style_references(&self) -> Vec<(&str, &str)> {
        let mut refs = Vec::new();
        for folder in &self.folders {
            folder.walk_placemarks(&mut |placemark| {
                if let Some(style) = placemark.style() {
                    refs.push((placemark.name(), style));
                }
            });
        }
        refs
    }
}

impl Extend<Folder> for Document {
    fn extend<I: IntoIterator<Item = Folder>>(&mut self, iter: I) {
        self.folders.extend(iter);
    }
}

impl Render for Document {
    fn render_into(&self, out: &mut String, options: &RenderOptions) {
        let start = out.len();

        out.push_str(XML_DECLARATION);
        out.push_str(KML_OPEN);
        for folder in &self.folders {
            folder.render_into(out, options);
        }
        out.push_str(KML_CLOSE);

        tracing::trace!(
            folders = self.folders.len(),
            bytes = out.len() - start,
            escaping = ?options.escaping,
            "rendered KML document"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point;
    use crate::placemark::Placemark;
    use crate::style::Style;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_create_empty_document() {
        let doc = Document::new();
        assert!(doc.is_empty());
        assert_eq!(doc.folder_count(), 0);
        assert_eq!(
            doc.render(),
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
             <kml xmlns=\"http://www.opengis.net/kml/2.2\">\n\
             </kml>\n"
        );
    }

    #[test]
    fn test_add_folder_ignores_none() {
        let mut doc = Document::new();
        doc.add_folder(None);
        assert_eq!(doc.folder_count(), 0);

        doc.add_folder(Folder::new("One", ""));
        doc.add_folder(Some(Folder::new("Two", "")));
        assert_eq!(doc.folder_count(), 2);

        doc.extend(None);
        assert_eq!(doc.folder_count(), 2);
    }

    #[test]
    fn test_folders_render_in_insertion_order() {
        let mut doc = Document::new();
        doc.extend(["A", "B", "C"].map(|name| Folder::new(name, "")));

        let rendered = doc.render();
        let a = rendered.find("<name>A</name>").unwrap();
        let b = rendered.find("<name>B</name>").unwrap();
        let c = rendered.find("<name>C</name>").unwrap();
        assert!(a < b && b < c);
        assert_eq!(doc.folders()[1].name(), "B");
    }

    #[test]
    fn test_style_lookups() {
        let mut nested = Folder::new("Nested", "");
        let mut placemark = Placemark::new("P2", "", Point::new(0.0, 0.0, 0.0).unwrap());
        placemark.set_style("blue");
        nested.add_feature(placemark);
        nested.add_feature(Style::new("blue", 255, 0, 0, 255));

        let mut top = Folder::new("Top", "");
        top.add_feature(Style::new("red", 255, 255, 0, 0));
        let mut placemark = Placemark::new("P1", "", Point::new(0.0, 0.0, 0.0).unwrap());
        placemark.set_style("red");
        top.add_feature(placemark);
        top.add_feature(Placemark::new("Unstyled", "", Point::new(0.0, 0.0, 0.0).unwrap()));
        top.add_feature(nested);

        let mut doc = Document::new();
        doc.add_folder(top);

        assert_eq!(doc.style_ids(), vec!["red", "blue"]);
        assert_eq!(doc.style_references(), vec![("P1", "red"), ("P2", "blue")]);
    }

    #[test]
    fn test_render_appends_to_existing_buffer() {
        let doc = Document::new();
        let mut out = String::from("prefix\n");
        doc.render_into(&mut out, &RenderOptions::default());
        assert!(out.starts_with("prefix\n<?xml"));
    }
}
