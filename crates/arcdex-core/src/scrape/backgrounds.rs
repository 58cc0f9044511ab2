use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};
use tracing::debug;

use super::html::{clean_element_text, first_href};
use crate::chart::BackgroundRecord;
use crate::config::wiki::{BACKGROUND_PAGE, BACKGROUND_TABLES};
use crate::error::{Error, Result};

const TABLE_CSS: &str = "table.article-table";
static TABLE: LazyLock<Selector> = LazyLock::new(|| Selector::parse(TABLE_CSS).unwrap());
static FIRST_CELL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("tr td:nth-child(1)").unwrap());
static STYLED_SPAN: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("span[style]").unwrap());
static LINK: LazyLock<Selector> = LazyLock::new(|| Selector::parse("a").unwrap());

/// Parse the "Song Backgrounds" page.
///
/// Only the leading tables list song backgrounds; later ones cover other
/// scenes. Each first-column cell names a background in a colored span and
/// links its image.
pub fn parse_backgrounds(html: &str) -> Result<Vec<BackgroundRecord>> {
    let document = Html::parse_document(html);
    let tables: Vec<ElementRef<'_>> = document.select(&TABLE).take(BACKGROUND_TABLES).collect();
    if tables.is_empty() {
        return Err(Error::missing(BACKGROUND_PAGE, TABLE_CSS));
    }

    let mut backgrounds = Vec::new();
    for table in tables {
        for cell in table.select(&FIRST_CELL) {
            match parse_cell(cell) {
                Some(record) => backgrounds.push(record),
                None => debug!("Skipping background cell {:?}", clean_element_text(cell)),
            }
        }
    }
    Ok(backgrounds)
}

fn parse_cell(cell: ElementRef<'_>) -> Option<BackgroundRecord> {
    let name = cell
        .select(&STYLED_SPAN)
        .find(|span| {
            span.value()
                .attr("style")
                .is_some_and(|style| style.starts_with("color:"))
        })
        .map(clean_element_text)?;
    let image = first_href(cell, &LINK)?;
    Some(BackgroundRecord {
        background: name,
        image,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(name: &str, image: &str) -> String {
        format!(
            r#"<tr><td><a href="{image}"><img></a><br><span style="color:#fff;">{name}</span></td><td>note</td></tr>"#
        )
    }

    #[test]
    fn test_parse_backgrounds_first_three_tables() {
        let html = format!(
            r#"<html><body>
<table class="article-table">{}{}</table>
<table class="article-table">{}</table>
<table class="article-table">{}</table>
<table class="article-table">{}</table>
</body></html>"#,
            cell("base_light", "https://static.example/base_light.jpg"),
            cell("base_conflict", "https://static.example/base_conflict.jpg"),
            cell("lethaeus", "https://static.example/lethaeus.jpg"),
            cell("tonesphere", "https://static.example/tonesphere.jpg"),
            cell("world_map", "https://static.example/world_map.jpg"),
        );

        let backgrounds = parse_backgrounds(&html).unwrap();
        let names: Vec<&str> = backgrounds.iter().map(|b| b.background.as_str()).collect();
        assert_eq!(names, vec!["base_light", "base_conflict", "lethaeus", "tonesphere"]);
        assert_eq!(backgrounds[2].image, "https://static.example/lethaeus.jpg");
    }

    #[test]
    fn test_cells_without_name_or_link_are_skipped() {
        let html = r#"<html><body><table class="article-table">
<tr><td><span style="font-weight:bold">header</span></td></tr>
<tr><td><span style="color:red">no_link</span></td></tr>
<tr><td><a href="/img.png"></a><span style="color: red">ok</span></td></tr>
</table></body></html>"#;
        let backgrounds = parse_backgrounds(html).unwrap();
        assert_eq!(backgrounds.len(), 1);
        assert_eq!(backgrounds[0].background, "ok");
    }

    #[test]
    fn test_missing_tables() {
        assert!(matches!(
            parse_backgrounds("<html><body></body></html>"),
            Err(Error::MissingElement { .. })
        ));
    }
}
