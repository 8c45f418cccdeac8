//! DOM snapshot built once per audit.

use scraper::{ElementRef, Html};

use crate::utils::{collapse_whitespace, parse_selector_with_fallback};

/// Elements whose text is not page copy.
const NON_CONTENT_ELEMENTS: &[&str] = &["script", "style", "template", "noscript"];

/// A parsed HTML document plus the raw-input facts extractors need.
///
/// Every query takes a CSS selector string. An invalid selector is logged and
/// treated as matching nothing, so no query can fail.
pub struct Snapshot {
    document: Html,
    raw_len: usize,
}

impl Snapshot {
    /// Parses `html` permissively. Never fails.
    pub fn parse(html: &str) -> Self {
        let document = Html::parse_document(html);
        if !document.errors.is_empty() {
            log::trace!("HTML parser recovered from {} errors", document.errors.len());
        }
        Self {
            document,
            raw_len: html.len(),
        }
    }

    /// The underlying `scraper` document.
    pub fn document(&self) -> &Html {
        &self.document
    }

    /// Byte length of the HTML the snapshot was parsed from.
    pub fn raw_len(&self) -> usize {
        self.raw_len
    }

    /// All elements matching `css`, in document order.
    pub fn select(&self, css: &str) -> Vec<ElementRef<'_>> {
        match parse_selector_with_fallback(css, "snapshot select") {
            Some(selector) => self.document.select(&selector).collect(),
            None => Vec::new(),
        }
    }

    /// First element matching `css`.
    pub fn first(&self, css: &str) -> Option<ElementRef<'_>> {
        let selector = parse_selector_with_fallback(css, "snapshot first")?;
        self.document.select(&selector).next()
    }

    /// Number of elements matching `css`.
    pub fn count(&self, css: &str) -> usize {
        match parse_selector_with_fallback(css, "snapshot count") {
            Some(selector) => self.document.select(&selector).count(),
            None => 0,
        }
    }

    /// Whether any element matches `css`.
    pub fn exists(&self, css: &str) -> bool {
        self.first(css).is_some()
    }

    /// Value of `attr` on the first element matching `css`.
    ///
    /// Returns `None` when no element matches or the first match lacks the attribute.
    pub fn first_attr(&self, css: &str, attr: &str) -> Option<&str> {
        self.first(css).and_then(|element| element.value().attr(attr))
    }

    /// Concatenated text content of the first element matching `css`.
    pub fn first_text(&self, css: &str) -> Option<String> {
        self.first(css).map(|element| element_text(&element))
    }

    /// Total number of elements in the tree, including the `html`, `head` and
    /// `body` elements the parser synthesizes when they are missing.
    pub fn element_count(&self) -> usize {
        self.count("*")
    }

    /// Whether the document starts with a `<!DOCTYPE>` declaration.
    pub fn has_doctype(&self) -> bool {
        self.document
            .tree
            .root()
            .children()
            .any(|node| node.value().is_doctype())
    }

    /// Visible body text with whitespace collapsed to single spaces.
    ///
    /// Text nodes are concatenated as written, so a word split by inline markup
    /// (`un<em>believable</em>`) stays one word. Text inside `script`, `style`,
    /// `template` and `noscript` is skipped.
    pub fn body_text(&self) -> String {
        let Some(body) = self.first("body") else {
            return String::new();
        };

        let mut buf = String::new();
        for node in body.descendants() {
            let Some(text) = node.value().as_text() else {
                continue;
            };
            let hidden = node.ancestors().any(|ancestor| {
                ancestor
                    .value()
                    .as_element()
                    .is_some_and(|el| NON_CONTENT_ELEMENTS.contains(&el.name()))
            });
            if !hidden {
                buf.push_str(text);
            }
        }
        collapse_whitespace(&buf)
    }
}

/// Concatenated text of an element and all of its descendants.
pub fn element_text(element: &ElementRef<'_>) -> String {
    element.text().collect::<String>()
}
