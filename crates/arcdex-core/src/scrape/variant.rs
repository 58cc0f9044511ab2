//! Songs whose Beyond slot holds more than one chart.
//!
//! The wiki lists such variants as plain Beyond charts (often in separate
//! tabs). A `VariantSplit` retags them with their own difficulty codes.

use tracing::{debug, warn};

use crate::chart::{Difficulty, SongRecord};

/// Retagging rule for one song's Beyond rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VariantSplit {
    pub id: &'static str,
    /// Tags given to the song's Beyond rows, in page order
    pub variants: &'static [Difficulty],
}

/// Songs known to carry Beyond variants.
pub const VARIANT_SPLITS: &[VariantSplit] = &[VariantSplit {
    id: "last",
    variants: &[Difficulty::BeyondMoment, Difficulty::BeyondEternity],
}];

impl VariantSplit {
    /// Retag this song's Beyond rows in place.
    ///
    /// A single Beyond row is duplicated once per variant. More rows than
    /// variants cannot be matched up and are left untouched.
    pub fn apply(&self, records: &mut Vec<SongRecord>) {
        let positions: Vec<usize> = records
            .iter()
            .enumerate()
            .filter(|(_, r)| r.id == self.id && r.difficulty == Difficulty::Beyond)
            .map(|(i, _)| i)
            .collect();

        match positions.len() {
            0 => debug!("No Beyond rows for {}", self.id),
            1 => {
                let index = positions[0];
                let template = records.remove(index);
                for (offset, &difficulty) in self.variants.iter().enumerate() {
                    let mut row = template.clone();
                    row.difficulty = difficulty;
                    records.insert(index + offset, row);
                }
            }
            n if n == self.variants.len() => {
                for (&index, &difficulty) in positions.iter().zip(self.variants) {
                    records[index].difficulty = difficulty;
                }
            }
            n => warn!(
                "{} has {} Beyond rows, expected {}; leaving them as Beyond",
                self.id,
                n,
                self.variants.len()
            ),
        }
    }
}

/// Apply every known split.
pub fn split_variants(records: &mut Vec<SongRecord>) {
    for split in VARIANT_SPLITS {
        split.apply(records);
    }
}
