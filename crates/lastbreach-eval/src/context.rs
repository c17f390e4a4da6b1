//! Evaluation context: everything `eval` needs to resolve a variable
//! reference or a built-in call, scoped to one scheduling pass.

use crate::names::SpecialNames;
use ahash::AHashMap;
use lastbreach_util::Symbol;
use lastbreach_world::{Character, World};

pub struct EvalContext<'a> {
    pub character: &'a Character,
    pub world: &'a World,
    pub day: i64,
    pub tick: i64,
    pub breach_level: i64,
    pub ev_breach: bool,
    pub ev_overnight: bool,
    pub names: &'a SpecialNames,
    /// `let`-bound locals. Scoped to a single `choose_action` call — never
    /// carried across ticks or shared between agents.
    locals: AHashMap<Symbol, f64>,
}

impl<'a> EvalContext<'a> {
    pub fn new(
        character: &'a Character,
        world: &'a World,
        day: i64,
        tick: i64,
        breach_level: i64,
        ev_breach: bool,
        ev_overnight: bool,
        names: &'a SpecialNames,
    ) -> Self {
        Self {
            character,
            world,
            day,
            tick,
            breach_level,
            ev_breach,
            ev_overnight,
            names,
            locals: AHashMap::default(),
        }
    }

    pub fn set_local(&mut self, name: Symbol, value: f64) {
        self.locals.insert(name, value);
    }

    pub fn get_local(&self, name: Symbol) -> Option<f64> {
        self.locals.get(&name).copied()
    }
}
