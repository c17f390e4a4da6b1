//! Runtime `Character`: the parsed rule containers plus the mutable
//! per-agent state the tick driver owns.

use crate::vitals::Vitals;
use lastbreach_par::{CharacterDecl, DefaultValue, OnHandler, PlanEntry, ThresholdRule};
use lastbreach_util::{Interner, Symbol};

/// The task an agent is currently running. A character runs at most one
/// task at a time; `ticks_remaining > 0 ⇒ current-task is set` is upheld by
/// representing "no task" as `None` rather than a sentinel duration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunningTask {
    pub name: Symbol,
    pub station: Option<Symbol>,
    pub ticks_remaining: i64,
    pub priority: f64,
}

/// A fully lowered character: immutable rule containers from the parsed
/// declaration, plus the mutable vitals/posture/running-task state the tick
/// driver mutates tick by tick.
#[derive(Debug, Clone)]
pub struct Character {
    pub name: Symbol,
    pub vitals: Vitals,
    pub defense_posture: Symbol,
    pub skills: Vec<(Symbol, f64)>,
    pub traits: Vec<Symbol>,
    pub thresholds: Vec<ThresholdRule>,
    pub plan: Vec<PlanEntry>,
    pub on_handlers: Vec<OnHandler>,
    pub running: Option<RunningTask>,
}

impl Character {
    /// Lowers a parsed `character { ... }` block into runtime state. Only
    /// `defaults.defense_posture` is interpreted out of the `defaults`
    /// section; every other default scalar was already discarded
    /// by the parser.
    pub fn from_decl(decl: CharacterDecl, interner: &mut Interner) -> Self {
        let mut posture = None;
        for (key, value) in &decl.defaults {
            if interner.resolve(*key) == "defense_posture" {
                if let DefaultValue::Ident(sym) = value {
                    posture = Some(*sym);
                }
            }
        }

        Self {
            name: decl.name,
            vitals: Vitals::DEFAULT,
            defense_posture: posture.unwrap_or_else(|| interner.intern("quiet")),
            skills: decl.skills,
            traits: decl.traits,
            thresholds: decl.thresholds,
            plan: decl.plan,
            on_handlers: decl.on_handlers,
            running: None,
        }
    }

    pub fn is_idle(&self) -> bool {
        self.running.is_none()
    }

    /// Clears the running task, the transition the tick driver performs
    /// once a task's remaining ticks reach 0 and its effects are applied.
    pub fn finish_running_task(&mut self) {
        self.running = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lastbreach_par::CharacterDecl;

    #[test]
    fn lowering_seeds_default_vitals() {
        let mut interner = Interner::new();
        let name = interner.intern("Alice");
        let decl = CharacterDecl {
            name,
            ..Default::default()
        };
        let ch = Character::from_decl(decl, &mut interner);
        assert_eq!(ch.vitals, Vitals::DEFAULT);
        assert!(ch.is_idle());
        assert_eq!(interner.resolve(ch.defense_posture), "quiet");
    }

    #[test]
    fn defaults_defense_posture_overrides_seed() {
        let mut interner = Interner::new();
        let name = interner.intern("Bob");
        let key = interner.intern("defense_posture");
        let loud = interner.intern("loud");
        let decl = CharacterDecl {
            name,
            defaults: vec![(key, DefaultValue::Ident(loud))],
            ..Default::default()
        };
        let ch = Character::from_decl(decl, &mut interner);
        assert_eq!(ch.defense_posture, loud);
    }
}
