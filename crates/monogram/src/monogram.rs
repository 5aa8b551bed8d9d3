//! Monogram derivation and permutation enumeration.
//!
//! A monogram is the 1-3 letter short form a player stamps on the board,
//! one character per turn: the initials of a multi-word name, or the first
//! three letters of a single-word name.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::instrument;

/// A player's monogram, fixed for the duration of a match.
///
/// Carries its distinct-permutation set, computed once at construction since
/// the letters never change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Monogram {
    letters: String,
    permutations: BTreeSet<String>,
}

impl Monogram {
    /// Derives a monogram from a display name.
    ///
    /// The name is trimmed and split on whitespace. A single-word name
    /// contributes its first three characters (fewer if shorter); a
    /// multi-word name contributes the first letter of each of the first
    /// three words. All output characters are uppercased.
    ///
    /// Returns `None` when the name is empty or whitespace-only — a match
    /// cannot start without a monogram.
    #[instrument]
    pub fn from_name(name: &str) -> Option<Self> {
        let words: Vec<&str> = name.split_whitespace().collect();
        let letters: String = match words.as_slice() {
            [] => return None,
            [word] => word.chars().take(3).map(uppercase).collect(),
            many => many
                .iter()
                .take(3)
                .filter_map(|word| word.chars().next())
                .map(uppercase)
                .collect(),
        };
        let permutations = arrangements(&letters);
        Some(Self {
            letters,
            permutations,
        })
    }

    /// Returns the monogram letters.
    pub fn as_str(&self) -> &str {
        &self.letters
    }

    /// Number of letters (1-3).
    pub fn len(&self) -> usize {
        self.letters.chars().count()
    }

    /// Always false — a monogram has at least one letter by construction.
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Glyph placed on the owner's `cursor`-th move.
    ///
    /// The cursor wraps, so long matches keep cycling through the letters.
    pub fn glyph_at(&self, cursor: usize) -> char {
        let index = cursor % self.len();
        self.letters
            .chars()
            .nth(index)
            .expect("monogram has at least one letter")
    }

    /// The set of distinct arrangements of the letters.
    pub fn permutations(&self) -> &BTreeSet<String> {
        &self.permutations
    }

    /// Checks whether `candidate` is an arrangement of the letters.
    pub fn matches(&self, candidate: &str) -> bool {
        self.permutations.contains(candidate)
    }
}

impl std::fmt::Display for Monogram {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.letters)
    }
}

/// Maps a character to a single uppercase character.
///
/// Multi-character uppercase expansions keep only their first character, so
/// one input character always yields exactly one board glyph.
fn uppercase(ch: char) -> char {
    ch.to_uppercase().next().unwrap_or(ch)
}

/// Enumerates the distinct arrangements of `letters`.
///
/// Recursive selection of each remaining character; the set container
/// collapses duplicates when letters repeat ("AAB" yields 3, not 6).
fn arrangements(letters: &str) -> BTreeSet<String> {
    let chars: Vec<char> = letters.chars().collect();
    let mut out = BTreeSet::new();
    permute(&chars, String::new(), &mut out);
    out
}

fn permute(rest: &[char], prefix: String, out: &mut BTreeSet<String>) {
    if rest.is_empty() {
        out.insert(prefix);
        return;
    }
    for i in 0..rest.len() {
        let mut next = prefix.clone();
        next.push(rest[i]);
        let mut remaining = rest.to_vec();
        remaining.remove(i);
        permute(&remaining, next, out);
    }
}
