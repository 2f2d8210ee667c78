//! Staged question-to-answer transition.
//!
//! A [`Transition`] holds the before and after renderings of one
//! reconciliation and steps through its stages only when the caller
//! says so. Wall-clock timing, easing and layout belong entirely to the
//! presentation layer; this state machine is synchronous and pure.

use crate::reconcile::{reconcile, source_letters, Letter, Reconciliation};

/// Display stage of a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// The source text, one identity per occurrence.
    Start,
    /// Source letters still shown; the renderer may begin motion.
    Scramble,
    /// The reconciled target letters.
    Settled,
}

/// One question-to-answer reveal in progress.
#[derive(Debug, Clone)]
pub struct Transition {
    start: Vec<Letter>,
    reconciliation: Reconciliation,
    stage: Stage,
}

impl Transition {
    /// Precompute the reconciliation for `source` into `target` and
    /// begin at [`Stage::Start`].
    pub fn new(source: &str, target: &str) -> Self {
        Self {
            start: source_letters(source),
            reconciliation: reconcile(source, target),
            stage: Stage::Start,
        }
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// Step to the next stage, saturating at [`Stage::Settled`].
    pub fn advance(&mut self) -> Stage {
        self.stage = match self.stage {
            Stage::Start => Stage::Scramble,
            Stage::Scramble | Stage::Settled => Stage::Settled,
        };
        self.stage
    }

    pub fn is_settled(&self) -> bool {
        self.stage == Stage::Settled
    }

    /// Letters to display for the current stage.
    pub fn letters(&self) -> &[Letter] {
        match self.stage {
            Stage::Start | Stage::Scramble => &self.start,
            Stage::Settled => &self.reconciliation.letters,
        }
    }

    /// The before rendering, regardless of stage.
    pub fn start_letters(&self) -> &[Letter] {
        &self.start
    }

    /// The full reconciliation, regardless of stage.
    pub fn reconciliation(&self) -> &Reconciliation {
        &self.reconciliation
    }
}
