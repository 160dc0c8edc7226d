//! End-to-end tests for the correction pipeline: dictionary loading, context
//! model construction, and two-phase best-correction selection.

use std::io::{Cursor, Write};

use orthos::prelude::*;
use tempfile::NamedTempFile;

const DICTIONARY: &str = "the of and their there quick brown fox jumps lazy dog tea";

const CORPUS: &str = "the quick brown fox jumps over the lazy dog \
                      the quick brown fox jumps over the lazy dog \
                      the quick brown cat naps";

#[test]
fn test_correct_from_word_file() -> Result<()> {
    let mut word_file = NamedTempFile::new().unwrap();
    writeln!(word_file, "{DICTIONARY}").unwrap();
    word_file.flush().unwrap();

    let corrector = SpellingCorrector::from_word_file(word_file.path())?;

    assert!(!corrector.is_misspelled("their"));
    assert!(corrector.is_misspelled("thier"));
    assert_eq!(corrector.dictionary().rank("the"), Some(0));
    assert_eq!(corrector.dictionary().rank("tea"), Some(11));

    Ok(())
}

#[test]
fn test_model_from_reader_ranks_continuations() -> Result<()> {
    let model = ContextModel::from_reader(2, Cursor::new(CORPUS))?;

    let ranked = model.ranked_continuations(&Context::parse("the quick"), 5)?;
    assert_eq!(ranked[0], "brown");

    let after_brown = model.ranked_continuations(&Context::parse("quick brown"), 1)?;
    assert_eq!(after_brown, vec!["fox"]);

    Ok(())
}

#[test]
fn test_two_phase_best_correction() -> Result<()> {
    let model = ContextModel::from_corpus(2, CORPUS)?;
    let corrector = SpellingCorrector::from_text(DICTIONARY);

    // primary phase: "quick brown" is a seen context and "fox" is two edits
    // from the typo
    let corrected = corrector.best_correction(Some(&model), "quick brown", "fxo", 5)?;
    assert_eq!(corrected.as_deref(), Some("fox"));

    // unseen context: the fallback rescues the typo through edit expansion
    let corrected = corrector.best_correction(Some(&model), "seldom seen", "lzay", 5)?;
    assert_eq!(corrected.as_deref(), Some("lazy"));

    // no model at all behaves like the fallback
    let corrected = corrector.best_correction(None, "", "teg", 5)?;
    assert_eq!(corrected.as_deref(), Some("tea"));

    Ok(())
}

#[test]
fn test_possible_corrections_against_loaded_dictionary() {
    let corrector = SpellingCorrector::from_text(DICTIONARY);
    let corrections = corrector.possible_corrections("teh");

    assert!(corrections.iter().any(|choice| choice.word == "the"));
    for choice in &corrections {
        assert!(!corrector.is_misspelled(&choice.word));
    }
}

#[test]
fn test_autocomplete_unique_and_ambiguous() {
    let corrector = SpellingCorrector::from_text(DICTIONARY);

    assert_eq!(corrector.autocomplete("qu"), Some("quick".to_string()));
    assert_eq!(corrector.autocomplete("j"), Some("jumps".to_string()));
    // "the", "their", "there" all match
    assert_eq!(corrector.autocomplete("the"), None);
    assert_eq!(corrector.autocomplete("xyz"), None);
}

#[test]
fn test_selector_descending_with_markers() -> Result<()> {
    let mut elements: Vec<Option<PqElement<char>>> = [3u64, 1, 4, 1, 5, 9, 2, 6]
        .iter()
        .zip('a'..)
        .map(|(&priority, label)| Some(PqElement::new(label, priority)))
        .collect();

    top_k_sort(&mut elements, 3)?;

    let live: Vec<u64> = elements.iter().flatten().map(|e| e.priority).collect();
    assert_eq!(live, vec![9, 6, 5]);
    assert!(elements[3..].iter().all(|slot| slot.is_none()));

    Ok(())
}
