//! Two-phase spelling correction over a ranked dictionary.

use std::path::Path;

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::analysis::normalize::normalize;
use crate::error::Result;
use crate::ngram::context::Context;
use crate::ngram::model::ContextModel;
use crate::spelling::dictionary::{Dictionary, RankedWordList};
use crate::spelling::edits::expand_candidates;
use crate::spelling::levenshtein::{edit_distance, edit_distance_within};

/// Configuration for the spelling corrector.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorrectorConfig {
    /// Maximum number of edits between a misspelling and its correction.
    pub max_edits: usize,
}

impl Default for CorrectorConfig {
    fn default() -> Self {
        CorrectorConfig { max_edits: 2 }
    }
}

/// A candidate correction for a misspelled segment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorrectionChoice {
    /// The corrected word.
    pub word: String,
    /// True edit distance from the misspelled segment.
    pub edit_distance: usize,
    /// Reference-ordering rank in the dictionary; `None` when unranked.
    pub rank: Option<u32>,
}

/// Spelling corrector over a pluggable dictionary backing.
///
/// Stateless per query: each operation reads the dictionary (and optionally a
/// context model) and returns fresh values.
pub struct SpellingCorrector<D = RankedWordList> {
    dictionary: D,
    config: CorrectorConfig,
}

impl SpellingCorrector<RankedWordList> {
    /// Build a corrector from a whitespace-tokenized word file.
    pub fn from_word_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(SpellingCorrector::new(RankedWordList::load_from_file(path)?))
    }

    /// Build a corrector from whitespace-delimited dictionary text.
    pub fn from_text(text: &str) -> Self {
        SpellingCorrector::new(RankedWordList::from_text(text))
    }
}

impl<D: Dictionary> SpellingCorrector<D> {
    /// Create a corrector over the given dictionary.
    pub fn new(dictionary: D) -> Self {
        SpellingCorrector {
            dictionary,
            config: CorrectorConfig::default(),
        }
    }

    /// Create a corrector with custom configuration.
    pub fn with_config(dictionary: D, config: CorrectorConfig) -> Self {
        SpellingCorrector { dictionary, config }
    }

    /// Borrow the backing dictionary.
    pub fn dictionary(&self) -> &D {
        &self.dictionary
    }

    /// True when the word is absent from the dictionary.
    pub fn is_misspelled(&self, word: &str) -> bool {
        !self.dictionary.contains(word)
    }

    /// The unique dictionary completion of `prefix`, if exactly one exists.
    ///
    /// Zero or several matches yield `None` — a routine outcome, not an error.
    pub fn autocomplete(&self, prefix: &str) -> Option<String> {
        let mut matches = self.dictionary.matches_with_prefix(prefix);
        if matches.len() == 1 { matches.pop() } else { None }
    }

    /// All dictionary words reachable within the edit bound, scored by true
    /// edit distance to `segment`.
    ///
    /// Candidates are pooled across every expansion depth, restricted to
    /// dictionary members, and collapsed per word keeping the minimum distance
    /// and best rank seen. Result order is unspecified.
    pub fn possible_corrections(&self, segment: &str) -> Vec<CorrectionChoice> {
        let segment = normalize(segment);
        let mut collapsed: AHashMap<String, CorrectionChoice> = AHashMap::new();

        for (candidate, _depth) in expand_candidates(&segment, self.config.max_edits) {
            let Some(rank) = self.dictionary.rank(&candidate) else {
                continue;
            };
            // the tagged depth is an exploration label; score by true distance
            let distance = edit_distance(&candidate, &segment);

            collapsed
                .entry(candidate.clone())
                .and_modify(|existing| {
                    if distance < existing.edit_distance {
                        existing.edit_distance = distance;
                    }
                    if rank_key(Some(rank)) < rank_key(existing.rank) {
                        existing.rank = Some(rank);
                    }
                })
                .or_insert_with(|| CorrectionChoice {
                    word: candidate,
                    edit_distance: distance,
                    rank: Some(rank),
                });
        }

        collapsed.into_values().collect()
    }

    /// Best correction for `segment`, context-ranked candidates first.
    ///
    /// The primary phase takes `num_considered` ranked continuations of the
    /// context parsed from `preceding_text` and keeps the closest one within the
    /// edit bound, earlier (more frequent) entries winning ties. Only when that
    /// phase yields nothing — including when no model is supplied — does the
    /// fallback search [`SpellingCorrector::possible_corrections`], preferring
    /// smaller distance, then smaller dictionary rank. `Ok(None)` means both
    /// phases came up empty.
    pub fn best_correction(
        &self,
        model: Option<&ContextModel>,
        preceding_text: &str,
        segment: &str,
        num_considered: usize,
    ) -> Result<Option<String>> {
        let segment = normalize(segment);
        let mut best: Option<CorrectionChoice> = None;

        if let Some(model) = model {
            let context = Context::parse(preceding_text);
            for suggestion in model.ranked_continuations(&context, num_considered)? {
                let Some(distance) =
                    edit_distance_within(&suggestion, &segment, self.config.max_edits)
                else {
                    continue;
                };
                if best
                    .as_ref()
                    .is_none_or(|current| distance < current.edit_distance)
                {
                    let rank = self.dictionary.rank(&suggestion);
                    best = Some(CorrectionChoice {
                        word: suggestion,
                        edit_distance: distance,
                        rank,
                    });
                }
            }
        }

        if best.is_none() {
            for choice in self.possible_corrections(&segment) {
                let replace = match &best {
                    None => true,
                    Some(current) => {
                        choice.edit_distance < current.edit_distance
                            || (choice.edit_distance == current.edit_distance
                                && rank_key(choice.rank) < rank_key(current.rank))
                    }
                };
                if replace {
                    best = Some(choice);
                }
            }
        }

        Ok(best.map(|choice| choice.word))
    }
}

// Unranked entries lose rank tie-breaks.
fn rank_key(rank: Option<u32>) -> (u8, u32) {
    match rank {
        Some(rank) => (0, rank),
        None => (1, 0),
    }
}
