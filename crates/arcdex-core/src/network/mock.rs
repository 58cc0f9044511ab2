use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use super::PageSource;
use crate::error::{Error, Result};

/// In-memory page source
///
/// Serves pages from a map keyed by title and records every request, so
/// scraper logic can be tested without network access. Unknown titles fail
/// like a 404 would.
#[derive(Debug, Default)]
pub struct StaticPages {
    pages: HashMap<String, String>,
    requests: RefCell<Vec<String>>,
}

impl StaticPages {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a page, builder style
    pub fn with_page(mut self, title: &str, html: &str) -> Self {
        self.insert(title, html);
        self
    }

    pub fn insert(&mut self, title: &str, html: &str) {
        self.pages.insert(title.to_string(), html.to_string());
    }

    /// Load every `*.html` file of a directory; the file stem is the page title
    pub fn from_dir<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let mut pages = Self::new();
        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            if path.extension().is_some_and(|ext| ext == "html")
                && let Some(stem) = path.file_stem().and_then(|s| s.to_str())
            {
                pages.insert(stem, &fs::read_to_string(&path)?);
            }
        }
        Ok(pages)
    }

    /// Titles requested so far, in order
    pub fn requests(&self) -> Vec<String> {
        self.requests.borrow().clone()
    }
}

impl PageSource for StaticPages {
    fn fetch(&self, page: &str) -> Result<String> {
        self.requests.borrow_mut().push(page.to_string());
        self.pages.get(page).cloned().ok_or_else(|| Error::HttpStatus {
            url: page.to_string(),
            status: 404,
        })
    }
}
