//! Pure `(context, expression) → f64` evaluator. Every leniency
//! here — unknown variable, unknown call, string outside a call, division
//! by zero — is an intentional part of the DSL's forward-compatibility
//! contract ("evaluator leniency is a feature, not a bug"), not a gap
//! to be tightened later.

use crate::context::EvalContext;
use lastbreach_par::{BinOp, Expr, UnOp};
use lastbreach_util::Symbol;

/// Non-zero is true ("truthiness").
fn truthy(v: f64) -> bool {
    v != 0.0
}

fn from_bool(v: bool) -> f64 {
    if v {
        1.0
    } else {
        0.0
    }
}

pub fn eval(ctx: &EvalContext, expr: &Expr) -> f64 {
    match expr {
        Expr::Number(v) => *v,
        // A string literal evaluated outside a call context returns 0.
        Expr::Str(_) => 0.0,
        Expr::Var(sym) => eval_var(ctx, *sym),
        Expr::Call(name, args) => eval_call(ctx, *name, args),
        Expr::Unary(op, inner) => eval_unary(ctx, *op, inner),
        Expr::Binary(op, lhs, rhs) => eval_binary(ctx, *op, lhs, rhs),
    }
}

/// Resolution order: local `let` table → special names → character vital
/// → shelter field. Anything else resolves to `0.0`.
fn eval_var(ctx: &EvalContext, sym: Symbol) -> f64 {
    if let Some(v) = ctx.get_local(sym) {
        return v;
    }
    let n = ctx.names;
    if sym == n.tick {
        return ctx.tick as f64;
    }
    if sym == n.day {
        return ctx.day as f64;
    }
    if sym == n.breach_level {
        return ctx.breach_level as f64;
    }
    let vitals = &ctx.character.vitals;
    if sym == n.char_hunger {
        return vitals.hunger;
    }
    if sym == n.char_hydration {
        return vitals.hydration;
    }
    if sym == n.char_fatigue {
        return vitals.fatigue;
    }
    if sym == n.char_morale {
        return vitals.morale;
    }
    if sym == n.char_injury {
        return vitals.injury;
    }
    if sym == n.char_illness {
        return vitals.illness;
    }
    let shelter = &ctx.world.shelter;
    if sym == n.shelter_temp_c {
        return shelter.temp_c;
    }
    if sym == n.shelter_signature {
        return shelter.signature;
    }
    if sym == n.shelter_power {
        return shelter.power;
    }
    if sym == n.shelter_water_safe {
        return shelter.water_safe;
    }
    if sym == n.shelter_water_raw {
        return shelter.water_raw;
    }
    if sym == n.shelter_structure {
        return shelter.structure;
    }
    if sym == n.shelter_contamination {
        return shelter.contamination;
    }
    0.0
}

/// Four built-ins, each taking exactly one string-literal argument; any
/// other call shape, or any non-string argument, returns `0.0`.
fn eval_call(ctx: &EvalContext, name: Symbol, args: &[Expr]) -> f64 {
    if args.len() != 1 {
        return 0.0;
    }
    let arg = match &args[0] {
        Expr::Str(s) => *s,
        _ => return 0.0,
    };
    let n = ctx.names;
    if name == n.fn_stock {
        return ctx.world.inventory.stock(arg);
    }
    if name == n.fn_has {
        return from_bool(ctx.world.inventory.has(arg));
    }
    if name == n.fn_cond {
        return ctx.world.inventory.cond(arg);
    }
    if name == n.fn_event {
        if arg == n.event_breach {
            return from_bool(ctx.ev_breach);
        }
        if arg == n.event_overnight {
            return from_bool(ctx.ev_overnight);
        }
        return 0.0;
    }
    0.0
}

fn eval_unary(ctx: &EvalContext, op: UnOp, inner: &Expr) -> f64 {
    let v = eval(ctx, inner);
    match op {
        UnOp::Neg => -v,
        UnOp::Not => from_bool(!truthy(v)),
    }
}

/// `and`/`or` do not short-circuit: both sides are always evaluated
/// so both `eval` calls below run unconditionally before the
/// result is picked.
fn eval_binary(ctx: &EvalContext, op: BinOp, lhs: &Expr, rhs: &Expr) -> f64 {
    let l = eval(ctx, lhs);
    let r = eval(ctx, rhs);
    match op {
        BinOp::Add => l + r,
        BinOp::Sub => l - r,
        BinOp::Mul => l * r,
        BinOp::Div => {
            if r == 0.0 {
                0.0
            } else {
                l / r
            }
        }
        BinOp::Eq => from_bool(l == r),
        BinOp::Neq => from_bool(l != r),
        BinOp::Lt => from_bool(l < r),
        BinOp::Lte => from_bool(l <= r),
        BinOp::Gt => from_bool(l > r),
        BinOp::Gte => from_bool(l >= r),
        BinOp::And => from_bool(truthy(l) && truthy(r)),
        BinOp::Or => from_bool(truthy(l) || truthy(r)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::names::SpecialNames;
    use lastbreach_util::Interner;
    use lastbreach_world::{Character, World};

    fn fixture() -> (Interner, SpecialNames, Character, World) {
        let mut interner = Interner::new();
        let names = SpecialNames::new(&mut interner);
        let name = interner.intern("Alice");
        let decl = lastbreach_par::CharacterDecl {
            name,
            ..Default::default()
        };
        let character = Character::from_decl(decl, &mut interner);
        let world = World::default_world();
        (interner, names, character, world)
    }

    #[test]
    fn unknown_identifier_resolves_to_zero() {
        let (mut interner, names, character, world) = fixture();
        let ctx = EvalContext::new(&character, &world, 0, 0, 0, false, false, &names);
        let unknown = interner.intern("defense_posture");
        assert_eq!(eval(&ctx, &Expr::Var(unknown)), 0.0);
    }

    #[test]
    fn char_hunger_resolves_from_vitals() {
        let (_interner, names, character, world) = fixture();
        let ctx = EvalContext::new(&character, &world, 0, 0, 0, false, false, &names);
        assert_eq!(eval(&ctx, &Expr::Var(names.char_hunger)), character.vitals.hunger);
    }

    #[test]
    fn division_by_zero_yields_zero_not_trap() {
        let (_interner, names, character, world) = fixture();
        let ctx = EvalContext::new(&character, &world, 0, 0, 0, false, false, &names);
        let expr = Expr::Binary(BinOp::Div, Box::new(Expr::Number(5.0)), Box::new(Expr::Number(0.0)));
        assert_eq!(eval(&ctx, &expr), 0.0);
    }

    #[test]
    fn and_or_both_evaluate_operands_without_short_circuit() {
        let (mut interner, names, character, world) = fixture();
        let mut ctx = EvalContext::new(&character, &world, 0, 0, 0, false, false, &names);
        let side_effect = interner.intern("side_effect_marker");
        // `let` bindings are only set by the scheduler's selection-mode
        // execution; here we poke the context directly to prove `and`'s
        // right side is evaluated even though the left side is false.
        ctx.set_local(side_effect, 1.0);
        let expr = Expr::Binary(
            BinOp::And,
            Box::new(Expr::Number(0.0)),
            Box::new(Expr::Var(side_effect)),
        );
        assert_eq!(eval(&ctx, &expr), 0.0);
    }

    #[test]
    fn stock_has_cond_read_from_world_inventory() {
        let (mut interner, names, character, mut world) = fixture();
        let rope = interner.intern("rope");
        world.inventory.add(rope, 3.0, 0.7);
        let ctx = EvalContext::new(&character, &world, 0, 0, 0, false, false, &names);
        let rope_arg = Expr::Str(rope);
        assert_eq!(eval(&ctx, &Expr::Call(names.fn_stock, vec![rope_arg.clone()])), 3.0);
        assert_eq!(eval(&ctx, &Expr::Call(names.fn_has, vec![rope_arg.clone()])), 1.0);
        assert_eq!(eval(&ctx, &Expr::Call(names.fn_cond, vec![rope_arg])), 0.7);
    }

    #[test]
    fn call_with_non_string_argument_resolves_to_zero() {
        let (_interner, names, character, world) = fixture();
        let ctx = EvalContext::new(&character, &world, 0, 0, 0, false, false, &names);
        let expr = Expr::Call(names.fn_stock, vec![Expr::Number(1.0)]);
        assert_eq!(eval(&ctx, &expr), 0.0);
    }

    #[test]
    fn event_call_reports_only_recognised_event_flags() {
        let (_interner, names, character, world) = fixture();
        let ctx = EvalContext::new(&character, &world, 0, 0, 2, true, false, &names);
        let breach = Expr::Call(names.fn_event, vec![Expr::Str(names.event_breach)]);
        let overnight = Expr::Call(names.fn_event, vec![Expr::Str(names.event_overnight)]);
        assert_eq!(eval(&ctx, &breach), 1.0);
        assert_eq!(eval(&ctx, &overnight), 0.0);
    }
}
