use std::sync::LazyLock;

use scraper::{Html, Selector};

use super::html::first_href;
use crate::chart::{PackRecord, SongRecord};
use crate::config::wiki::{MEMORY_ARCHIVE_PAGE, MEMORY_ARCHIVE_PREFIX};
use crate::error::{Error, Result};
use crate::normalize::slugify;

const IMAGE_CSS: &str = "a.image";
static IMAGE_LINK: LazyLock<Selector> = LazyLock::new(|| Selector::parse(IMAGE_CSS).unwrap());

/// Wiki page describing a pack. Every `Memory Archive:` sub-pack shares the
/// Memory Archive page.
pub fn pack_page_title(pack: &str) -> &str {
    if pack.starts_with(MEMORY_ARCHIVE_PREFIX) {
        MEMORY_ARCHIVE_PAGE
    } else {
        pack
    }
}

/// Pack cover URL: the `href` of the first `a.image` on the page.
pub fn parse_pack_image(html: &str, page: &str) -> Result<String> {
    let document = Html::parse_document(html);
    first_href(document.root_element(), &IMAGE_LINK).ok_or_else(|| Error::missing(page, IMAGE_CSS))
}

/// Distinct pack names of the song table, in first-seen order.
pub fn distinct_packs(songs: &[SongRecord]) -> Vec<&str> {
    let mut packs: Vec<&str> = Vec::new();
    for song in songs {
        if !packs.contains(&song.pack.as_str()) {
            packs.push(&song.pack);
        }
    }
    packs
}

pub fn pack_record(pack: &str, image: String) -> PackRecord {
    PackRecord {
        id: slugify(pack),
        pack: pack.to_string(),
        image,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::Difficulty;

    #[test]
    fn test_pack_page_title() {
        assert_eq!(pack_page_title("Memory Archive: Ether Strike"), "Memory Archive");
        assert_eq!(pack_page_title("Black Fate"), "Black Fate");
        assert_eq!(pack_page_title("Memory Archive"), "Memory Archive");
    }

    #[test]
    fn test_parse_pack_image() {
        let html = r#"<html><body>
<a href="/wiki/Main_Page">home</a>
<a class="image" href="https://static.example/pack.png"><img></a>
<a class="image" href="https://static.example/other.png"><img></a>
</body></html>"#;
        assert_eq!(
            parse_pack_image(html, "Black Fate").unwrap(),
            "https://static.example/pack.png"
        );
        assert!(matches!(
            parse_pack_image("<html></html>", "Black Fate"),
            Err(Error::MissingElement { .. })
        ));
    }

    #[test]
    fn test_distinct_packs_keep_order() {
        let songs = vec![
            SongRecord::new("a", "A", "Light of Salvation", "x", Difficulty::Past),
            SongRecord::new("a", "A", "Light of Salvation", "x", Difficulty::Present),
            SongRecord::new("b", "B", "Arcaea", "x", Difficulty::Past),
            SongRecord::new("c", "C", "Light of Salvation", "x", Difficulty::Past),
        ];
        assert_eq!(distinct_packs(&songs), vec!["Light of Salvation", "Arcaea"]);
    }

    #[test]
    fn test_pack_record_id() {
        let record = pack_record("Memory Archive: Lanota", "img".to_string());
        assert_eq!(record.id, "memoryarchivelanota");
        assert_eq!(record.pack, "Memory Archive: Lanota");
    }
}
