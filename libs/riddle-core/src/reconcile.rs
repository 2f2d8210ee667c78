//! Letter reconciliation between a source and a target string.
//!
//! Given the prompt text and the answer text of a riddle (ideally
//! anagrams of one another), `reconcile` assigns each target character
//! either a specific source occurrence it reuses or a fresh identity.
//! A renderer keys letter sprites by [`LetterIdentity`] so that a reused
//! letter glides from its old position to its new one instead of
//! cross-fading.

use serde::{Deserialize, Serialize};

/// Opaque identity token for a letter.
///
/// Two letters with equal identities are "the same" letter across the
/// before and after renderings of a transition. Consumers should treat
/// this purely as an equality/hash key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LetterIdentity {
    /// Carried over from the source occurrence at `index`.
    Source { index: usize },
    /// Introduced at target `position` with no matching source occurrence.
    Fresh { position: usize },
}

/// One positioned character of a reconciled text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Letter {
    /// Display character, always in the target's casing.
    pub ch: char,
    pub identity: LetterIdentity,
    /// Index of the consumed source occurrence, if this letter reuses one.
    pub origin: Option<usize>,
}

impl Letter {
    /// Whether this letter reuses a source occurrence.
    pub fn is_reused(&self) -> bool {
        self.origin.is_some()
    }
}

/// Output of [`reconcile`]: one [`Letter`] per target character, in
/// target order, plus the source occurrences nothing consumed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reconciliation {
    pub letters: Vec<Letter>,
    /// Origin indices of source occurrences with no destination. Empty
    /// when source and target are case-insensitive anagrams. A renderer
    /// fades these out; they are never an error.
    pub leftover: Vec<usize>,
}

impl Reconciliation {
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// True when every target letter reuses a source occurrence and no
    /// source occurrence is left over, i.e. the inputs were anagrams.
    pub fn is_exact(&self) -> bool {
        self.leftover.is_empty() && self.letters.iter().all(Letter::is_reused)
    }

    /// Group the letters into words, treating the space separator as
    /// non-rendered. See [`words`].
    pub fn words(&self) -> Vec<&[Letter]> {
        words(&self.letters)
    }
}

/// Map each character of `target` to a source occurrence, first-fit in
/// ascending origin order, matching case-insensitively.
///
/// Total over any two strings: empty inputs yield empty output, and a
/// target character with no unused match degrades to a fresh identity
/// rather than an error. Each source occurrence is consumed at most
/// once, and matching is deterministic (earliest available wins).
pub fn reconcile(source: &str, target: &str) -> Reconciliation {
    let source_chars: Vec<char> = source.chars().collect();
    let mut available: Vec<usize> = (0..source_chars.len()).collect();
    let mut letters = Vec::with_capacity(target.len());

    for (position, ch) in target.chars().enumerate() {
        let slot = available
            .iter()
            .position(|&i| chars_match(source_chars[i], ch));
        let letter = match slot {
            Some(slot) => {
                let index = available.remove(slot);
                Letter {
                    ch,
                    identity: LetterIdentity::Source { index },
                    origin: Some(index),
                }
            }
            None => Letter {
                ch,
                identity: LetterIdentity::Fresh { position },
                origin: None,
            },
        };
        letters.push(letter);
    }

    Reconciliation {
        letters,
        leftover: available,
    }
}

/// The "before" rendering of a source string: one letter per character,
/// each carrying the identity of its own occurrence. A reused letter in
/// the reconciled output compares identity-equal to exactly one of these.
pub fn source_letters(source: &str) -> Vec<Letter> {
    source
        .chars()
        .enumerate()
        .map(|(index, ch)| Letter {
            ch,
            identity: LetterIdentity::Source { index },
            origin: Some(index),
        })
        .collect()
}

/// Split a letter sequence into words on the literal space character.
/// Separators are not rendered, so runs of spaces and edge spaces yield
/// no empty groups.
pub fn words(letters: &[Letter]) -> Vec<&[Letter]> {
    letters
        .split(|letter| letter.ch == ' ')
        .filter(|word| !word.is_empty())
        .collect()
}

fn chars_match(a: char, b: char) -> bool {
    a == b || a.to_lowercase().eq(b.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn origins(reconciliation: &Reconciliation) -> Vec<Option<usize>> {
        reconciliation.letters.iter().map(|l| l.origin).collect()
    }

    #[test]
    fn output_follows_target_order_and_casing() {
        let result = reconcile("Tom", "MOT");
        let shown: String = result.letters.iter().map(|l| l.ch).collect();
        assert_eq!(shown, "MOT");
        assert!(result.letters.iter().all(Letter::is_reused));
        assert!(result.is_exact());
    }

    #[test]
    fn tie_break_is_earliest_available_first() {
        let result = reconcile("AAB", "BAA");
        assert_eq!(origins(&result), vec![Some(2), Some(0), Some(1)]);
    }

    #[test]
    fn anagrams_form_a_bijection() {
        let result = reconcile("DORMITORY", "DIRTY ROOM");
        let mut used: Vec<usize> = result.letters.iter().filter_map(|l| l.origin).collect();
        used.sort_unstable();
        used.dedup();
        // Target has one extra space, so exactly the nine source
        // occurrences are consumed once each.
        assert_eq!(used, (0..9).collect::<Vec<_>>());
    }

    #[test]
    fn disjoint_inputs_fall_back_to_fresh_identities() {
        let result = reconcile("AB", "XYZ");
        assert_eq!(result.len(), 3);
        assert!(result.letters.iter().all(|l| !l.is_reused()));
        assert_eq!(result.leftover, vec![0, 1]);
    }

    #[test]
    fn empty_inputs_yield_empty_output() {
        assert!(reconcile("", "").is_empty());
        assert_eq!(reconcile("ABC", "").leftover, vec![0, 1, 2]);
        assert_eq!(reconcile("", "AB").len(), 2);
    }

    #[test]
    fn deterministic_across_calls() {
        let first = reconcile("ELEVEN PLUS TWO", "TWELVE PLUS ONE");
        let second = reconcile("ELEVEN PLUS TWO", "TWELVE PLUS ONE");
        assert_eq!(first, second);
    }

    #[test]
    fn identities_are_pairwise_distinct() {
        let result = reconcile("THE EYES", "THEY SEE");
        for (i, a) in result.letters.iter().enumerate() {
            for b in &result.letters[i + 1..] {
                assert_ne!(a.identity, b.identity);
            }
        }
    }

    #[test]
    fn reused_identity_matches_its_source_letter() {
        let start = source_letters("ASTRONOMER");
        let result = reconcile("ASTRONOMER", "MOON STARER");
        for letter in result.letters.iter().filter(|l| l.is_reused()) {
            let matches = start
                .iter()
                .filter(|s| s.identity == letter.identity)
                .count();
            assert_eq!(matches, 1);
        }
    }

    #[test]
    fn spaces_reconcile_like_any_character() {
        // One space in source, two words in target: the second space is fresh.
        let result = reconcile("SLOT MACHINES", "CASH LOST IN ME");
        let fresh_spaces = result
            .letters
            .iter()
            .filter(|l| l.ch == ' ' && !l.is_reused())
            .count();
        assert_eq!(fresh_spaces, 2);
    }

    #[test]
    fn word_grouping_splits_on_spaces() {
        let result = reconcile("THE EYES", "THEY SEE");
        let words = result.words();
        let sizes: Vec<usize> = words.iter().map(|w| w.len()).collect();
        assert_eq!(sizes, vec![4, 4]);
    }

    #[test]
    fn word_grouping_skips_empty_groups() {
        let letters = source_letters("  A  B ");
        let words = words(&letters);
        assert_eq!(words.len(), 2);
        assert_eq!(words[0][0].ch, 'A');
        assert_eq!(words[1][0].ch, 'B');
    }
}
