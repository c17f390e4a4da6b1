//! The four-source priority auction: event handlers, thresholds,
//! plan blocks, and generic rules, in that order.

use crate::candidate::Candidate;
use crate::exec::exec_stmts;
use crate::selection::Selection;
use lastbreach_eval::{eval, EvalContext, SpecialNames};
use lastbreach_par::PlanEntry;
use lastbreach_util::Symbol;
use lastbreach_world::{Catalog, Character, World};

/// Selects a single action for one agent at one tick. Holds only shared
/// references to character/world/catalog state — the scheduler never
/// mutates the simulation directly; a `set defaults.defense_posture`
/// statement is reported back to the caller instead, which is
/// responsible for writing it onto the character after this call returns.
#[allow(clippy::too_many_arguments)]
pub fn choose_action(
    character: &Character,
    world: &World,
    catalog: &Catalog,
    names: &SpecialNames,
    day: i64,
    tick: i64,
    breach_level: i64,
    ev_breach: bool,
    ev_overnight: bool,
) -> (Candidate, Option<Symbol>) {
    let mut ctx = EvalContext::new(
        character,
        world,
        day,
        tick,
        breach_level,
        ev_breach,
        ev_overnight,
        names,
    );
    let mut pending_posture = None;

    // Source 1: event handlers, only consulted on the breach flag.
    if ev_breach {
        let mut selection = Selection::new();
        for handler in &character.on_handlers {
            if handler.event != names.event_breach {
                continue;
            }
            if let Some(when) = &handler.when {
                if eval(&ctx, when) == 0.0 {
                    continue;
                }
            }
            let base_priority = eval(&ctx, &handler.priority);
            exec_stmts(&mut ctx, catalog, base_priority, &mut selection, &handler.body);
        }
        if selection.pending_posture.is_some() {
            pending_posture = selection.pending_posture;
        }
        if selection.has_task() {
            return (selection.into_candidate(), pending_posture);
        }
    }

    // Source 2: thresholds.
    {
        let mut selection = Selection::new();
        for rule in &character.thresholds {
            if eval(&ctx, &rule.when) == 0.0 {
                continue;
            }
            let body = std::slice::from_ref(&rule.action);
            exec_stmts(&mut ctx, catalog, 0.0, &mut selection, body);
        }
        if selection.pending_posture.is_some() {
            pending_posture = selection.pending_posture;
        }
        if selection.has_task() {
            return (selection.into_candidate(), pending_posture);
        }
    }

    // Sources 3 and 4 share one carried-forward selection: the best
    // candidate across plan blocks and generic rules is the final answer.
    let mut selection = Selection::new();

    for entry in &character.plan {
        if let PlanEntry::Block {
            station: _,
            start_tick,
            end_tick,
            body,
        } = entry
        {
            if tick < *start_tick || tick >= *end_tick {
                continue;
            }
            if exec_stmts(&mut ctx, catalog, 0.0, &mut selection, body) {
                break;
            }
        }
    }

    for entry in &character.plan {
        if let PlanEntry::Rule {
            label: _,
            priority,
            body,
        } = entry
        {
            let base_priority = eval(&ctx, priority);
            exec_stmts(&mut ctx, catalog, base_priority, &mut selection, body);
        }
    }

    if selection.pending_posture.is_some() {
        pending_posture = selection.pending_posture;
    }

    (selection.into_candidate(), pending_posture)
}
