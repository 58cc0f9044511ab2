//! Song page parsing.
//!
//! A song page carries a title header (title, pack, artist, artwork) and one
//! or more `pi-horizontal-group` infobox tables. A cell either holds one value
//! for every chart or one `<span>` per difficulty. Pages with several chart
//! sets (e.g. a separate Beyond chart) split them into tabs, each with its own
//! header and tables.

use std::collections::HashMap;
use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};
use strum::{EnumString, IntoStaticStr};
use tracing::debug;

use super::html::{clean_element_text, first_href};
use crate::chart::Difficulty;
use crate::error::{Error, Result};
use crate::normalize::slugify;

const TITLE_CSS: &str = "span.song-template-title";
const PACK_CSS: &str = "span.song-template-pack";
const ARTIST_CSS: &str = "span.song-template-artist";
const FIGURE_CSS: &str = "figure";

static TAB: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("div.wds-tab__content[data-item-name]").unwrap());
static TITLE: LazyLock<Selector> = LazyLock::new(|| Selector::parse(TITLE_CSS).unwrap());
static PACK: LazyLock<Selector> = LazyLock::new(|| Selector::parse(PACK_CSS).unwrap());
static ARTIST: LazyLock<Selector> = LazyLock::new(|| Selector::parse(ARTIST_CSS).unwrap());
static FIGURE: LazyLock<Selector> = LazyLock::new(|| Selector::parse(FIGURE_CSS).unwrap());
static LINK: LazyLock<Selector> = LazyLock::new(|| Selector::parse("a").unwrap());
static INFO_TABLE: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("table.pi-horizontal-group").unwrap());
static TH: LazyLock<Selector> = LazyLock::new(|| Selector::parse("th").unwrap());
static TD: LazyLock<Selector> = LazyLock::new(|| Selector::parse("td").unwrap());
static SPAN: LazyLock<Selector> = LazyLock::new(|| Selector::parse("span").unwrap());
static BOLD: LazyLock<Selector> = LazyLock::new(|| Selector::parse("b").unwrap());

/// Infobox labels the song table keeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, IntoStaticStr)]
#[strum(ascii_case_insensitive)]
pub enum InfoField {
    Level,
    Notes,
    #[strum(serialize = "Chart Constant")]
    ChartConstant,
    #[strum(serialize = "BPM")]
    Bpm,
    Length,
    Added,
    #[strum(serialize = "Chart Design")]
    ChartDesign,
    Artwork,
    Vocals,
    Genre,
    Side,
    Background,
}

/// One chart as it appears on the page, before value normalization.
#[derive(Debug, Clone, PartialEq)]
pub struct RawChart {
    pub id: String,
    pub title: String,
    pub pack: String,
    pub artist: String,
    pub image: String,
    pub difficulty: Difficulty,
    pub fields: HashMap<InfoField, String>,
}

impl RawChart {
    pub fn field(&self, field: InfoField) -> Option<&str> {
        self.fields.get(&field).map(String::as_str)
    }
}

/// Parse every chart on a song page.
///
/// `page` is the page title; its slug becomes the row ID of every chart.
pub fn parse_song_page(html: &str, page: &str) -> Result<Vec<RawChart>> {
    let document = Html::parse_document(html);
    let id = slugify(page);

    let tabs: Vec<ElementRef<'_>> = document.select(&TAB).collect();
    if tabs.is_empty() {
        return parse_fragment(document.root_element(), page, &id);
    }

    let mut charts = Vec::new();
    for tab in tabs {
        charts.extend(parse_fragment(tab, page, &id)?);
    }
    Ok(charts)
}

fn parse_fragment(root: ElementRef<'_>, page: &str, id: &str) -> Result<Vec<RawChart>> {
    let title = required_text(root, &TITLE, page, TITLE_CSS)?;
    let pack = required_text(root, &PACK, page, PACK_CSS)?;
    let artist = required_text(root, &ARTIST, page, ARTIST_CSS)?;
    let image = root
        .select(&FIGURE)
        .next()
        .and_then(|figure| first_href(figure, &LINK))
        .ok_or_else(|| Error::missing(page, "figure a[href]"))?;

    let columns = parse_info_tables(root);
    let width = columns.iter().map(|(_, values)| values.len()).max().unwrap_or(1);

    // A fragment whose cells all hold a single value is a lone Beyond chart
    let difficulties: &[Difficulty] = if width <= 1 {
        &[Difficulty::Beyond]
    } else {
        &Difficulty::POSITIONAL[..width.min(Difficulty::POSITIONAL.len())]
    };

    let mut charts = Vec::with_capacity(difficulties.len());
    for (index, &difficulty) in difficulties.iter().enumerate() {
        let mut fields = HashMap::new();
        for (label, values) in &columns {
            let Ok(field) = label.parse::<InfoField>() else {
                continue;
            };
            let value = if values.len() == 1 {
                values.first()
            } else {
                values.get(index)
            };
            if let Some(value) = value.filter(|v| !v.is_empty()) {
                fields.insert(field, value.clone());
            }
        }

        charts.push(RawChart {
            id: id.to_string(),
            title: title.clone(),
            pack: pack.clone(),
            artist: artist.clone(),
            image: image.clone(),
            difficulty,
            fields,
        });
    }

    Ok(charts)
}

/// Header label and per-chart values of every infobox cell, in page order.
fn parse_info_tables(root: ElementRef<'_>) -> Vec<(String, Vec<String>)> {
    let mut columns = Vec::new();

    for table in root.select(&INFO_TABLE) {
        let headers = table.select(&TH).map(clean_element_text);
        let cells = table.select(&TD).map(cell_values);

        for (label, values) in headers.zip(cells) {
            if label.parse::<InfoField>().is_err() {
                debug!("Skipping infobox field {:?}", label);
            }
            columns.push((label, values));
        }
    }

    columns
}

/// Values of one infobox cell: the texts of its non-bold spans, or the whole
/// cell text when it has none.
fn cell_values(td: ElementRef<'_>) -> Vec<String> {
    let spans: Vec<String> = td
        .select(&SPAN)
        .filter(|span| span.select(&BOLD).next().is_none())
        .map(clean_element_text)
        .collect();

    if spans.is_empty() {
        vec![clean_element_text(td)]
    } else {
        spans
    }
}

fn required_text(
    root: ElementRef<'_>,
    selector: &Selector,
    page: &str,
    css: &str,
) -> Result<String> {
    root.select(selector)
        .next()
        .map(clean_element_text)
        .ok_or_else(|| Error::missing(page, css))
}
