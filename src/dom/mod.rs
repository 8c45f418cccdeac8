//! Parsed, queryable view of the audited HTML document.
//!
//! Parsing is delegated to `scraper` (html5ever), which follows the browser
//! recovery rules: missing closing tags, unknown elements, and duplicate
//! attributes all produce a best-effort tree instead of an error.

mod snapshot;

pub use snapshot::{element_text, Snapshot};
