//! Dictionary collaborators for the spelling corrector.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use ahash::AHashMap;

use crate::analysis::normalize::normalize;
use crate::error::Result;

/// Capability trait for the prefix/autocomplete dictionary behind the corrector.
///
/// The corrector only needs membership, a tie-break rank, and prefix retrieval,
/// so any structure providing those (a trie, a sorted array, a hash map) can
/// back it.
pub trait Dictionary {
    /// Check whether the word is present.
    fn contains(&self, word: &str) -> bool;

    /// Reference-ordering rank of the word; `None` when absent or unranked.
    fn rank(&self, word: &str) -> Option<u32>;

    /// All entries sharing the given prefix.
    fn matches_with_prefix(&self, prefix: &str) -> Vec<String>;
}

/// A dictionary backed by a ranked word list.
///
/// Rank is load order: the first occurrence of a word fixes its rank, so a list
/// sorted by descending frequency gives common words the smallest ranks.
#[derive(Debug, Clone, Default)]
pub struct RankedWordList {
    ranks: AHashMap<String, u32>,
    words: Vec<String>,
}

impl RankedWordList {
    /// Create an empty word list.
    pub fn new() -> Self {
        RankedWordList {
            ranks: AHashMap::new(),
            words: Vec::new(),
        }
    }

    /// Add a word; repeated additions keep the original rank.
    pub fn add_word(&mut self, raw: &str) {
        let word = normalize(raw);
        if word.is_empty() || self.ranks.contains_key(&word) {
            return;
        }

        self.ranks.insert(word.clone(), self.words.len() as u32);
        self.words.push(word);
    }

    /// Build a list from raw words.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut list = RankedWordList::new();
        for word in words {
            list.add_word(word.as_ref());
        }
        list
    }

    /// Build a list from whitespace-delimited text.
    pub fn from_text(text: &str) -> Self {
        Self::from_words(text.split_whitespace())
    }

    /// Load a list from a whitespace-tokenized word file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);

        let mut list = RankedWordList::new();
        for line in reader.lines() {
            let line = line?;
            for word in line.split_whitespace() {
                list.add_word(word);
            }
        }

        Ok(list)
    }

    /// Words in rank order.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check whether the list is empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Dictionary for RankedWordList {
    fn contains(&self, word: &str) -> bool {
        self.ranks.contains_key(&word.to_lowercase())
    }

    fn rank(&self, word: &str) -> Option<u32> {
        self.ranks.get(&word.to_lowercase()).copied()
    }

    fn matches_with_prefix(&self, prefix: &str) -> Vec<String> {
        let prefix = prefix.to_lowercase();
        self.words
            .iter()
            .filter(|word| word.starts_with(&prefix))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    #[test]
    fn test_rank_is_first_occurrence_order() {
        let list = RankedWordList::from_words(["the", "of", "and", "the", "of"]);

        assert_eq!(list.len(), 3);
        assert_eq!(list.rank("the"), Some(0));
        assert_eq!(list.rank("of"), Some(1));
        assert_eq!(list.rank("and"), Some(2));
        assert_eq!(list.rank("missing"), None);
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let list = RankedWordList::from_words(["Hello"]);

        assert!(list.contains("hello"));
        assert!(list.contains("HELLO"));
        assert_eq!(list.rank("Hello"), Some(0));
    }

    #[test]
    fn test_normalization_drops_empty_words() {
        let list = RankedWordList::from_words(["ok", "1234", "!!"]);
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_matches_with_prefix() {
        let list = RankedWordList::from_words(["search", "searching", "server", "query"]);

        let matches = list.matches_with_prefix("sear");
        assert_eq!(matches.len(), 2);
        assert!(matches.contains(&"search".to_string()));
        assert!(matches.contains(&"searching".to_string()));

        assert!(list.matches_with_prefix("zz").is_empty());
    }

    #[test]
    fn test_load_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "alpha beta").unwrap();
        writeln!(temp_file, "gamma").unwrap();
        writeln!(temp_file, "beta").unwrap();
        temp_file.flush().unwrap();

        let list = RankedWordList::load_from_file(temp_file.path()).unwrap();
        assert_eq!(list.len(), 3);
        assert_eq!(list.rank("alpha"), Some(0));
        assert_eq!(list.rank("beta"), Some(1));
        assert_eq!(list.rank("gamma"), Some(2));
    }
}
