//! Bounded edit-candidate generation.
//!
//! [`single_edits`] enumerates every string one edit away from a segment;
//! [`expand_candidates`] applies it recursively up to a depth bound, tracking
//! which strings were already expanded so the search space stays finite.

use ahash::AHashMap;

/// All strings one edit away from `segment`.
///
/// For each position, in order: adjacent-pair transposition, deletion,
/// substitution over the lowercase alphabet (identity excluded), insertion over
/// the same alphabet; a final insertion pass covers the end position. For a
/// segment of length L this yields at most L-1 transpositions, L deletions,
/// 25L substitutions, and 26(L+1) insertions.
pub fn single_edits(segment: &str) -> Vec<String> {
    let chars: Vec<char> = segment.chars().collect();
    let len = chars.len();
    let mut edits = Vec::new();

    for i in 0..len {
        // transposition of the adjacent pair starting at i
        if i + 1 < len {
            let mut swapped = chars.clone();
            swapped.swap(i, i + 1);
            edits.push(swapped.into_iter().collect());
        }

        // deletion at i
        let mut deleted = chars.clone();
        deleted.remove(i);
        edits.push(deleted.into_iter().collect());

        // substitutions at i
        for letter in 'a'..='z' {
            if letter != chars[i] {
                let mut replaced = chars.clone();
                replaced[i] = letter;
                edits.push(replaced.into_iter().collect());
            }
        }

        // insertions before i
        for letter in 'a'..='z' {
            let mut inserted = chars.clone();
            inserted.insert(i, letter);
            edits.push(inserted.into_iter().collect());
        }
    }

    // insertions at the end position
    for letter in 'a'..='z' {
        let mut inserted = chars.clone();
        inserted.push(letter);
        edits.push(inserted.into_iter().collect());
    }

    edits
}

/// Every candidate within `max_edits` rounds of [`single_edits`], tagged with
/// the depth at which it was generated.
///
/// Each distinct string is expanded only once, at whichever depth first reaches
/// it; a shorter path explored later does not revisit it. The depth tag is
/// therefore an exploration label, not a distance — scoring recomputes true
/// distances from the original segment.
///
/// The search is bounded only by depth, so it grows combinatorially with
/// segment length; callers needing bounded latency must cap input size
/// themselves.
pub fn expand_candidates(segment: &str, max_edits: usize) -> Vec<(String, usize)> {
    let mut visited: AHashMap<String, AHashMap<String, usize>> = AHashMap::new();
    expand(segment, 1, max_edits, &mut visited);

    let mut pooled = Vec::new();
    for generated in visited.values() {
        for (candidate, &depth) in generated {
            pooled.push((candidate.clone(), depth));
        }
    }
    pooled
}

fn expand(
    segment: &str,
    depth: usize,
    max_edits: usize,
    visited: &mut AHashMap<String, AHashMap<String, usize>>,
) {
    if depth > max_edits || visited.contains_key(segment) {
        return;
    }
    visited.insert(segment.to_string(), AHashMap::new());

    for edit in single_edits(segment) {
        if let Some(generated) = visited.get_mut(segment) {
            generated.entry(edit.clone()).or_insert(depth);
        }
        expand(&edit, depth + 1, max_edits, visited);
    }
}
