use fuzzy_matcher::FuzzyMatcher;
use fuzzy_matcher::skim::SkimMatcherV2;
use serde::Serialize;
use tracing::debug;

use crate::error::{Error, Result};
use crate::normalize::slugify;
use crate::storage::Dataset;

/// One song found by a title search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchHit {
    pub title: String,
    pub id: String,
}

/// Songs whose ID contains the slug of `term`, in dataset order.
///
/// When nothing matches by ID, titles are fuzzy-matched instead and the best
/// scores come first.
pub fn search_titles(dataset: &Dataset, term: &str) -> Vec<SearchHit> {
    let needle = slugify(term);
    if needle.is_empty() {
        return Vec::new();
    }

    let mut hits: Vec<SearchHit> = Vec::new();
    for song in dataset.songs.iter().filter(|s| s.id.contains(&needle)) {
        if !hits.iter().any(|hit| hit.id == song.id) {
            hits.push(SearchHit {
                title: song.title.clone(),
                id: song.id.clone(),
            });
        }
    }

    if hits.is_empty() {
        debug!("No ID contains {:?}, trying fuzzy match", needle);
        hits = fuzzy_titles(dataset, term);
    }
    hits
}

fn fuzzy_titles(dataset: &Dataset, term: &str) -> Vec<SearchHit> {
    let matcher = SkimMatcherV2::default();

    let mut scored: Vec<(i64, SearchHit)> = Vec::new();
    for song in &dataset.songs {
        if scored.iter().any(|(_, hit)| hit.id == song.id) {
            continue;
        }
        if let Some(score) = matcher.fuzzy_match(&song.title, term.trim())
            && score > 0
        {
            scored.push((
                score,
                SearchHit {
                    title: song.title.clone(),
                    id: song.id.clone(),
                },
            ));
        }
    }

    // Stable, so equal scores keep dataset order
    scored.sort_by(|a, b| b.0.cmp(&a.0));
    scored.into_iter().map(|(_, hit)| hit).collect()
}

/// Resolve a user query to a song ID: an exact ID first, else the first
/// search hit.
pub fn resolve_song(dataset: &Dataset, query: &str) -> Result<String> {
    if dataset.contains_song(query) {
        return Ok(query.to_string());
    }
    search_titles(dataset, query)
        .into_iter()
        .next()
        .map(|hit| hit.id)
        .ok_or_else(|| Error::UnknownSong(query.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::{Difficulty, SongRecord};

    fn dataset() -> Dataset {
        let songs = [
            ("grievouslady", "Grievous Lady"),
            ("fractureray", "Fracture Ray"),
            ("lady", "Lady"),
            ("ladyspride", "Lady's Pride"),
        ]
        .iter()
        .flat_map(|(id, title)| {
            [Difficulty::Past, Difficulty::Future]
                .map(|d| SongRecord::new(id, title, "Pack", "Artist", d))
        })
        .collect();
        Dataset::new(songs, Vec::new(), Vec::new())
    }

    #[test]
    fn test_search_by_id_substring() {
        let hits = search_titles(&dataset(), "Lady");
        let ids: Vec<&str> = hits.iter().map(|h| h.id.as_str()).collect();
        // Dataset order is by title length
        assert_eq!(ids, vec!["lady", "ladyspride", "grievouslady"]);
    }

    #[test]
    fn test_search_normalizes_term() {
        let hits = search_titles(&dataset(), "  FRACTURE ray! ");
        assert_eq!(
            hits,
            vec![SearchHit {
                title: "Fracture Ray".to_string(),
                id: "fractureray".to_string()
            }]
        );
    }

    #[test]
    fn test_search_fuzzy_fallback() {
        let hits = search_titles(&dataset(), "frc ry");
        assert_eq!(hits.first().map(|h| h.id.as_str()), Some("fractureray"));
    }

    #[test]
    fn test_empty_term() {
        assert!(search_titles(&dataset(), "").is_empty());
        assert!(search_titles(&dataset(), "?!").is_empty());
    }

    #[test]
    fn test_resolve_song() {
        let dataset = dataset();
        assert_eq!(resolve_song(&dataset, "lady").unwrap(), "lady");
        assert_eq!(resolve_song(&dataset, "Grievous").unwrap(), "grievouslady");
        assert!(matches!(
            resolve_song(&dataset, "zzzz"),
            Err(Error::UnknownSong(_))
        ));
    }
}
