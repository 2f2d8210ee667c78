//! Quiz session state.
//!
//! A [`QuizSession`] walks a loaded deck one riddle at a time, checks
//! chosen options against the expected answer and keeps per-riddle
//! progress. It never reads the clock itself; callers pass `now` so the
//! session stays deterministic under test.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::Riddle;

/// Outcome of choosing an option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Answer {
    Correct,
    Incorrect,
    AlreadySolved,
}

/// How a riddle got solved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum Solve {
    Guessed { at: DateTime<Utc> },
    Revealed { at: DateTime<Utc> },
}

/// Per-riddle progress within one session.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RiddleRecord {
    /// Wrong guesses so far.
    pub attempts: u32,
    pub solve: Option<Solve>,
}

impl RiddleRecord {
    pub fn is_solved(&self) -> bool {
        self.solve.is_some()
    }
}

/// Session totals derived from the per-riddle records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionStats {
    pub total: usize,
    pub guessed: usize,
    pub revealed: usize,
    pub wrong_attempts: u32,
}

/// One pass through a riddle deck.
#[derive(Debug, Clone)]
pub struct QuizSession {
    riddles: Vec<Riddle>,
    records: Vec<RiddleRecord>,
    index: usize,
}

impl QuizSession {
    /// Start a session at the first riddle. Returns `None` for an empty
    /// deck.
    pub fn new(riddles: Vec<Riddle>) -> Option<Self> {
        if riddles.is_empty() {
            return None;
        }
        let records = vec![RiddleRecord::default(); riddles.len()];
        Some(Self {
            riddles,
            records,
            index: 0,
        })
    }

    pub fn len(&self) -> usize {
        self.riddles.len()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// 1-based position and total, for a `Riddle i / n` display.
    pub fn progress(&self) -> (usize, usize) {
        (self.index + 1, self.riddles.len())
    }

    pub fn current(&self) -> &Riddle {
        &self.riddles[self.index]
    }

    pub fn current_record(&self) -> &RiddleRecord {
        &self.records[self.index]
    }

    /// Check `option` against the current riddle's answer.
    pub fn choose(&mut self, option: &str, now: DateTime<Utc>) -> Answer {
        if self.records[self.index].is_solved() {
            return Answer::AlreadySolved;
        }
        if self.current().is_answer(option) {
            self.records[self.index].solve = Some(Solve::Guessed { at: now });
            Answer::Correct
        } else {
            self.records[self.index].attempts += 1;
            Answer::Incorrect
        }
    }

    /// Force-solve the current riddle without a guess.
    pub fn reveal(&mut self, now: DateTime<Utc>) {
        let record = &mut self.records[self.index];
        if !record.is_solved() {
            record.solve = Some(Solve::Revealed { at: now });
        }
    }

    /// Move to the next riddle, wrapping past the end.
    pub fn next(&mut self) {
        self.index = (self.index + 1) % self.riddles.len();
    }

    /// Move to the previous riddle, wrapping before the start.
    pub fn prev(&mut self) {
        self.index = (self.index + self.riddles.len() - 1) % self.riddles.len();
    }

    pub fn stats(&self) -> SessionStats {
        let mut stats = SessionStats {
            total: self.riddles.len(),
            guessed: 0,
            revealed: 0,
            wrong_attempts: 0,
        };
        for record in &self.records {
            stats.wrong_attempts += record.attempts;
            match record.solve {
                Some(Solve::Guessed { .. }) => stats.guessed += 1,
                Some(Solve::Revealed { .. }) => stats.revealed += 1,
                None => {}
            }
        }
        stats
    }
}
