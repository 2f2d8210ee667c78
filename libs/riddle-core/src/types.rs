//! Core types for the riddle quiz.

use serde::{Deserialize, Serialize};

/// A single anagram riddle: a prompt, its expected answer, and the
/// multiple-choice options shown to the player.
///
/// Riddles are immutable once loaded; a deck lives for the lifetime of
/// the process. The answer is always present in `options`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Riddle {
    pub id: String,
    pub question: String,
    pub answer: String,
    pub options: Vec<String>,
}

impl Riddle {
    /// Whether `guess` exactly matches the expected answer.
    pub fn is_answer(&self, guess: &str) -> bool {
        self.answer == guess
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn funeral() -> Riddle {
        Riddle {
            id: "1".to_string(),
            question: "FUNERAL".to_string(),
            answer: "REAL FUN".to_string(),
            options: vec![
                "REAL FUN".to_string(),
                "FEAR RUN".to_string(),
                "FAR RUNE".to_string(),
                "EARL FUN".to_string(),
            ],
        }
    }

    #[test]
    fn answer_check_is_exact() {
        let riddle = funeral();
        assert!(riddle.is_answer("REAL FUN"));
        assert!(!riddle.is_answer("real fun"));
        assert!(!riddle.is_answer("FEAR RUN"));
    }

    #[test]
    fn riddle_round_trips_through_json() {
        let riddle = funeral();
        let json = serde_json::to_string(&riddle).unwrap();
        let back: Riddle = serde_json::from_str(&json).unwrap();
        assert_eq!(riddle, back);
    }
}
