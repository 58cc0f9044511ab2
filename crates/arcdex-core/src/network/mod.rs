//! Page retrieval.
//!
//! The scraper reads wiki pages through the `PageSource` trait:
//! - `HttpPageSource` - blocking HTTP client against a Fandom wiki
//! - `StaticPages` - in-memory pages for tests and offline runs

mod client;
mod mock;

pub use client::*;
pub use mock::*;

use crate::error::Result;

/// Source of wiki page HTML, addressed by page title.
pub trait PageSource {
    /// Fetch the HTML of the page with the given title.
    fn fetch(&self, page: &str) -> Result<String>;
}

impl<T: PageSource + ?Sized> PageSource for &T {
    fn fetch(&self, page: &str) -> Result<String> {
        (**self).fetch(page)
    }
}
