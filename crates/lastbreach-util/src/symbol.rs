//! A small per-session string interner.
//!
//! Nothing in this runner compiles more than one file concurrently, and
//! the "keyword" set here is not a fixed token kind at all — `let`,
//! `task`, `and`, `or`, and friends are plain identifiers the parser
//! recognises by comparing resolved strings (see `lastbreach-par`). A
//! lighter, session-owned table over `ahash` fits that shape better than
//! a process-global, multi-threaded interner built for a whole-program
//! compilation unit with hundreds of pre-reserved keyword symbols.

use ahash::AHashMap;
use std::rc::Rc;

/// An interned string. Cheap to copy and compare; resolve back to text via
/// the `Interner` that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Symbol(u32);

static_assertions::assert_impl_all!(Symbol: Send, Sync);

/// Owns the backing strings for a batch of `Symbol`s. One `Interner` is
/// created per lex/parse session and dropped with it.
#[derive(Debug, Default)]
pub struct Interner {
    strings: Vec<Rc<str>>,
    lookup: AHashMap<Rc<str>, u32>,
}

impl Interner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Interns `s`, returning a stable `Symbol` for it. Interning the same
    /// text twice (even via different `String`/`&str` allocations) always
    /// yields the same `Symbol`.
    pub fn intern(&mut self, s: &str) -> Symbol {
        if let Some(&id) = self.lookup.get(s) {
            return Symbol(id);
        }
        let id = self.strings.len() as u32;
        let rc: Rc<str> = Rc::from(s);
        self.strings.push(rc.clone());
        self.lookup.insert(rc, id);
        Symbol(id)
    }

    /// Resolves a `Symbol` back to its text. Panics if `sym` was not
    /// produced by this `Interner` — symbols never outlive their session.
    pub fn resolve(&self, sym: Symbol) -> &str {
        &self.strings[sym.0 as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_text_interns_to_same_symbol() {
        let mut i = Interner::new();
        let a = i.intern("char.hunger");
        let b = i.intern("char.hunger");
        assert_eq!(a, b);
    }

    #[test]
    fn distinct_text_interns_to_distinct_symbols() {
        let mut i = Interner::new();
        let a = i.intern("char.hunger");
        let b = i.intern("char.hydration");
        assert_ne!(a, b);
    }

    #[test]
    fn resolve_round_trips() {
        let mut i = Interner::new();
        let sym = i.intern("stop_block");
        assert_eq!(i.resolve(sym), "stop_block");
    }

    #[quickcheck_macros::quickcheck]
    fn interning_is_idempotent(s: String) -> bool {
        let mut i = Interner::new();
        let a = i.intern(&s);
        let b = i.intern(&s);
        a == b && i.resolve(a) == s
    }

    #[quickcheck_macros::quickcheck]
    fn distinct_strings_never_collide(a: String, b: String) -> bool {
        if a == b {
            return true;
        }
        let mut i = Interner::new();
        let sa = i.intern(&a);
        let sb = i.intern(&b);
        sa != sb
    }
}
