//! Selection-mode execution of a statement list: the interpreter
//! that walks `thresholds`/`plan`/`on` bodies and feeds `task`/`set`/`yield`/
//! `stop` into a shared [`Selection`].

use crate::selection::Selection;
use lastbreach_eval::{eval, EvalContext};
use lastbreach_par::Stmt;
use lastbreach_world::{Catalog, TaskDef};

use crate::candidate::TaskCandidate;

/// Runs `stmts` against `ctx`/`selection`. Returns `true` if a `stop`
/// statement fired anywhere in this list (including inside a taken `if`
/// branch), signalling the caller to stop scanning further statement lists
/// in the enclosing source without discarding what's already been found.
pub(crate) fn exec_stmts(
    ctx: &mut EvalContext,
    catalog: &Catalog,
    base_priority: f64,
    selection: &mut Selection,
    stmts: &[Stmt],
) -> bool {
    for stmt in stmts {
        match stmt {
            Stmt::Let(name, expr) => {
                let v = eval(ctx, expr);
                ctx.set_local(*name, v);
            }
            Stmt::If(cond, then_branch, else_branch) => {
                let branch = if eval(ctx, cond) != 0.0 {
                    Some(then_branch)
                } else {
                    else_branch.as_ref()
                };
                if let Some(body) = branch {
                    if exec_stmts(ctx, catalog, base_priority, selection, body) {
                        return true;
                    }
                }
            }
            Stmt::Task(task) => {
                let def: Option<&TaskDef> = catalog.get(task.name);
                let ticks = match &task.duration {
                    Some(expr) => (eval(ctx, expr).round() as i64).max(1),
                    None => def.map(|d| d.time_ticks).unwrap_or(1).max(1),
                };
                let priority = match &task.priority {
                    Some(expr) => eval(ctx, expr),
                    None => base_priority,
                };
                let station = def.and_then(|d| d.station);
                selection.propose_task(TaskCandidate {
                    name: task.name,
                    ticks,
                    priority,
                    station,
                });
            }
            Stmt::Set(name, expr) => {
                apply_set(ctx, selection, *name, expr);
            }
            Stmt::YieldTick => {
                selection.propose_yield();
            }
            Stmt::StopBlock => {
                return true;
            }
        }
    }
    false
}

/// `set` is only honoured for `defaults.defense_posture`; every
/// other lvalue is a silent no-op. A string right-hand side becomes the
/// posture directly; a numeric right-hand side maps `>= 0.5` to `"loud"`
/// and anything below that to `"quiet"`.
fn apply_set(
    ctx: &mut EvalContext,
    selection: &mut Selection,
    name: lastbreach_util::Symbol,
    expr: &lastbreach_par::Expr,
) {
    if name != ctx.names.defaults_defense_posture {
        return;
    }
    let posture = match expr {
        lastbreach_par::Expr::Str(s) => *s,
        other => {
            let v = eval(ctx, other);
            if v >= 0.5 {
                ctx.names.posture_loud
            } else {
                ctx.names.posture_quiet
            }
        }
    };
    selection.pending_posture = Some(posture);
}
