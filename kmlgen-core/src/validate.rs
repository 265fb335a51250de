//! Style reference checks
//!
//! Rendering never validates anything: a placemark may point at a style id
//! that no [`Style`](crate::Style) in the document declares, and the output
//! will simply carry a dangling `styleUrl`. Callers that want to catch this
//! before writing a file can run [`validate_styles`] on the finished
//! document.

use crate::document::Document;
use crate::error::{KmlError, Result};
use std::collections::HashSet;

const RESERVED_ID_CHARS: [char; 6] = ['&', '<', '>', '"', '\'', '#'];

/// Returns true if `id` can be used as a style id and in a `#id` reference.
pub fn is_valid_style_id(id: &str) -> bool {
    !id.is_empty()
        && !id
            .chars()
            .any(|c| c.is_whitespace() || RESERVED_ID_CHARS.contains(&c))
}

/// Checks that every style id is well formed and unique, and that every
/// placemark style reference resolves to a declared style.
///
/// # Errors
///
/// Returns the first problem found, in document order:
/// [`KmlError::InvalidStyleId`], [`KmlError::DuplicateStyle`] or
/// [`KmlError::UndeclaredStyle`].
pub fn validate_styles(document: &Document) -> Result<()> {
    let mut declared = HashSet::new();

    for id in document.style_ids() {
        if !is_valid_style_id(id) {
            return Err(KmlError::InvalidStyleId(id.to_string()));
        }
        if !declared.insert(id) {
            return Err(KmlError::DuplicateStyle(id.to_string()));
        }
    }

    for (placemark, style) in document.style_references() {
        if !declared.contains(style) {
            return Err(KmlError::UndeclaredStyle {
                style: style.to_string(),
                placemark: placemark.to_string(),
            });
        }
    }

    tracing::debug!(styles = declared.len(), "style references resolved");
    Ok(())
}
