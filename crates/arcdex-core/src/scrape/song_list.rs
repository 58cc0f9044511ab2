use std::collections::BTreeSet;
use std::sync::LazyLock;

use scraper::{Html, Selector};

use crate::config::wiki::SONG_INDEX_PAGE;
use crate::error::{Error, Result};

const TABLE_CSS: &str = "table.songbydate-table";
static TABLE: LazyLock<Selector> = LazyLock::new(|| Selector::parse(TABLE_CSS).unwrap());
static TITLE_LINK: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("tr td:nth-child(2) a").unwrap());

/// Extract every song page title from the "Songs by Date" index.
///
/// Titles come from the `title` attribute of the links in the second column.
/// Duplicates (songs listed once per platform release) collapse; the result is
/// sorted so repeated scrapes visit pages in the same order.
pub fn parse_song_list(html: &str) -> Result<Vec<String>> {
    let document = Html::parse_document(html);
    let table = document
        .select(&TABLE)
        .next()
        .ok_or_else(|| Error::missing(SONG_INDEX_PAGE, TABLE_CSS))?;

    let titles: BTreeSet<String> = table
        .select(&TITLE_LINK)
        .filter_map(|a| a.value().attr("title"))
        .map(|title| title.trim().to_string())
        .filter(|title| !title.is_empty())
        .collect();

    Ok(titles.into_iter().collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    const INDEX: &str = r#"
<html><body>
<table class="songbydate-table">
  <tr><th>Date</th><th>Song</th></tr>
  <tr><td>2017-03-30</td><td><a href="/wiki/Sayonara_Hatsukoi" title="Sayonara Hatsukoi">Sayonara Hatsukoi</a></td></tr>
  <tr><td>2017-03-30</td><td><a href="/wiki/Fairytale" title="Fairytale">Fairytale</a></td></tr>
  <tr><td>2019-09-12</td><td><a href="/wiki/Fairytale" title="Fairytale">Fairytale</a></td></tr>
  <tr><td><a href="/wiki/Date" title="Not a song">x</a></td><td>no link</td></tr>
</table>
</body></html>"#;

    #[test]
    fn test_parse_song_list_dedupes_and_sorts() {
        let titles = parse_song_list(INDEX).unwrap();
        assert_eq!(titles, vec!["Fairytale", "Sayonara Hatsukoi"]);
    }

    #[test]
    fn test_parse_song_list_missing_table() {
        let result = parse_song_list("<html><body><table></table></body></html>");
        assert!(matches!(result, Err(Error::MissingElement { .. })));
    }
}
