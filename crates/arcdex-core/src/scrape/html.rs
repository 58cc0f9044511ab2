//! Small helpers over `scraper` element trees.

use scraper::{ElementRef, Selector};

use crate::normalize::clean_text;

pub fn has_class(element: ElementRef<'_>, class: &str) -> bool {
    element.value().classes().any(|c| c == class)
}

/// Text content of an element, skipping footnote markers (`sup.reference`).
pub fn text_without_refs(element: ElementRef<'_>) -> String {
    let mut out = String::new();
    collect_text(element, &mut out);
    out
}

fn collect_text(element: ElementRef<'_>, out: &mut String) {
    for child in element.children() {
        if let Some(text) = child.value().as_text() {
            out.push_str(text);
        } else if let Some(child) = ElementRef::wrap(child) {
            if child.value().name() == "sup" && has_class(child, "reference") {
                continue;
            }
            collect_text(child, out);
        }
    }
}

/// Cleaned text (no footnotes, no non-breaking spaces, trimmed).
pub fn clean_element_text(element: ElementRef<'_>) -> String {
    clean_text(&text_without_refs(element))
}

/// `href` of the first element matching `selector` under `root`.
pub fn first_href(root: ElementRef<'_>, selector: &Selector) -> Option<String> {
    root.select(selector)
        .find_map(|a| a.value().attr("href"))
        .map(str::to_string)
}
