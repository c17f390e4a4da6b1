//! The scheduler's output shape: a task proposal, or `Yield`. There
//! is no "none" variant — idleness is always an explicit `Yield`.

use lastbreach_util::Symbol;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TaskCandidate {
    pub name: Symbol,
    pub ticks: i64,
    pub priority: f64,
    pub station: Option<Symbol>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Candidate {
    Task(TaskCandidate),
    Yield,
}
