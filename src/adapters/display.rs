use crate::core::DisplayRegion;
use crate::utils::error::Result;
use askama::Template;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tempfile::NamedTempFile;

/// In-memory display region. Clones share the same content.
#[derive(Debug, Clone, Default)]
pub struct MemoryRegion {
    content: Arc<Mutex<Option<String>>>,
}

impl MemoryRegion {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current markup, `None` until the first successful render.
    pub fn content(&self) -> Option<String> {
        self.content
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

impl DisplayRegion for MemoryRegion {
    fn replace_content(&self, markup: String) -> Result<()> {
        *self
            .content
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = Some(markup);
        Ok(())
    }
}

#[derive(Template)]
#[template(path = "page.html")]
struct RegionPage<'a> {
    markup: &'a str,
}

/// Renders the region as the single `<div>` of a standalone HTML page.
#[derive(Debug, Clone)]
pub struct HtmlFileRegion {
    path: PathBuf,
}

impl HtmlFileRegion {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DisplayRegion for HtmlFileRegion {
    fn replace_content(&self, markup: String) -> Result<()> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(dir)?;

        let page = RegionPage { markup: &markup }.render()?;

        // Renaming over the target keeps concurrent renders from interleaving:
        // readers see one whole page, the last rename wins.
        let mut staged = NamedTempFile::new_in(dir)?;
        staged.write_all(page.as_bytes())?;
        staged.persist(&self.path).map_err(|e| e.error)?;

        tracing::debug!("Display region written to {}", self.path.display());
        Ok(())
    }
}
