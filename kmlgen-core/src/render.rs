//! The rendering capability shared by every node of a KML document.
//!
//! Each node writes its own fragment into a caller-provided buffer.
//! Composites ([`Document`](crate::Document), [`Folder`](crate::Folder))
//! delegate to their children in insertion order, so a single call on the
//! root walks the whole tree depth-first.

use std::borrow::Cow;
use std::fmt::Debug;

/// How user-supplied text is written into the markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextEscaping {
    /// Text is interpolated as-is. A name or description containing `<` or
    /// `&` produces malformed markup; this matches the historical output.
    #[default]
    Verbatim,
    /// The five XML special characters are replaced by entity references.
    Xml,
}

/// Options applied to a single render call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderOptions {
    pub escaping: TextEscaping,
}

impl RenderOptions {
    /// Options that escape reserved markup characters in text fields.
    pub fn escaped() -> Self {
        Self {
            escaping: TextEscaping::Xml,
        }
    }

    /// Applies the configured escaping policy to a user-supplied value.
    pub fn text<'a>(&self, value: &'a str) -> Cow<'a, str> {
        match self.escaping {
            TextEscaping::Verbatim => Cow::Borrowed(value),
            TextEscaping::Xml => escape_xml(value),
        }
    }
}

/// A node that can produce its own markup fragment.
pub trait Render: Debug {
    /// Appends this node's fragment to `out`.
    fn render_into(&self, out: &mut String, options: &RenderOptions);

    /// Renders with the default (verbatim) options.
    fn render(&self) -> String {
        self.render_with(&RenderOptions::default())
    }

    fn render_with(&self, options: &RenderOptions) -> String {
        let mut out = String::new();
        self.render_into(&mut out, options);
        out
    }
}

/// Replaces `& < > " '` with their entity references.
pub fn escape_xml(value: &str) -> Cow<'_, str> {
    if !value.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(value);
    }

    let mut escaped = String::with_capacity(value.len() + 16);
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}
