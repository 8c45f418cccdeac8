//! Render-blocking resource counting.

use crate::dom::Snapshot;

/// Render-blocking resources found in `<head>`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderBlocking {
    /// `<script src>` in `<head>` without `async` or `defer`
    pub scripts: usize,
    /// `<link rel=stylesheet>` in `<head>`
    pub stylesheets: usize,
}

impl RenderBlocking {
    /// Total number of render-blocking resources.
    pub fn total(&self) -> usize {
        self.scripts + self.stylesheets
    }
}

/// Counts scripts and stylesheets in `<head>` that block first paint.
pub fn count_render_blocking(snapshot: &Snapshot) -> RenderBlocking {
    let scripts = snapshot
        .select("head script[src]")
        .iter()
        .filter(|script| {
            let element = script.value();
            element.attr("async").is_none() && element.attr("defer").is_none()
        })
        .count();
    let stylesheets = snapshot.count("head link[rel='stylesheet']");

    RenderBlocking {
        scripts,
        stylesheets,
    }
}
