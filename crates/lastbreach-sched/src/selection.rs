//! Carries the best candidate found so far across one or more statement
//! lists within a single scheduler source ("selection-mode
//! execution").
//!
//! The reference behaviour models "no task yet" as a priority sentinel
//! (`best.priority < 0`) that a `yield` statement checks before promoting
//! itself. Task priorities are arbitrary evaluated expressions and can
//! themselves be negative, so a raw sentinel comparison can misfire on a
//! legitimately negative-priority task. This uses `Option<TaskCandidate>`
//! instead — "no candidate yet" and "a candidate with a negative priority"
//! are distinguishable — which is observably identical for every priority
//! a non-adversarial script produces and removes that edge case.

use crate::candidate::{Candidate, TaskCandidate};
use lastbreach_util::Symbol;

#[derive(Debug, Default)]
pub(crate) struct Selection {
    best: Option<TaskCandidate>,
    want_yield: bool,
    pub(crate) pending_posture: Option<Symbol>,
}

impl Selection {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// A proposed task wins if no candidate exists yet, or if it strictly
    /// beats the current best (`pr > best.priority`, strict — first-found
    /// wins ties).
    pub(crate) fn propose_task(&mut self, candidate: TaskCandidate) {
        let wins = match &self.best {
            None => true,
            Some(best) => candidate.priority > best.priority,
        };
        if wins {
            self.best = Some(candidate);
        }
    }

    /// Only takes effect if no task has been found yet.
    pub(crate) fn propose_yield(&mut self) {
        if self.best.is_none() {
            self.want_yield = true;
        }
    }

    pub(crate) fn has_task(&self) -> bool {
        self.best.is_some()
    }

    #[cfg(test)]
    pub(crate) fn wants_yield(&self) -> bool {
        self.want_yield
    }

    pub(crate) fn into_candidate(self) -> Candidate {
        match self.best {
            Some(t) => Candidate::Task(t),
            None => Candidate::Yield,
        }
    }
}
