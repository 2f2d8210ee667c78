//! Core library for the anagram riddle quiz.
//!
//! Provides:
//! - Letter reconciliation between a prompt and its anagram answer,
//!   with stable identities for animation continuity
//! - A staged transition state machine driven by explicit caller signals
//! - Plain-text riddle deck parsing
//! - Quiz session state (answer checking, navigation, stats)
//! - Seedable option shuffling

pub mod error;
pub mod parser;
pub mod reconcile;
pub mod session;
pub mod shuffle;
pub mod transition;
pub mod types;

pub use error::{ParseError, Result};
pub use parser::parse;
pub use reconcile::{reconcile, source_letters, words, Letter, LetterIdentity, Reconciliation};
pub use session::{Answer, QuizSession, RiddleRecord, SessionStats, Solve};
pub use shuffle::{shuffle_in_place, shuffled_options};
pub use transition::{Stage, Transition};
pub use types::Riddle;
