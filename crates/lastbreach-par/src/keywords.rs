//! Pre-interned keyword symbols.
//!
//! Keywords are not a distinct token kind (see `lastbreach_lex::Token`), so
//! recognising one means comparing a resolved `Ident(Symbol)` against the
//! symbol for that keyword's text. Interning each keyword once up front and
//! comparing `Symbol`s (a `u32` compare) avoids re-hashing the same literal
//! strings on every `is_ident` check during a parse.
use lastbreach_util::{Interner, Symbol};

macro_rules! keyword_set {
    ($name:ident { $($field:ident => $text:literal),* $(,)? }) => {
        pub struct $name {
            $(pub $field: Symbol,)*
        }

        impl $name {
            pub fn new(interner: &mut Interner) -> Self {
                Self {
                    $($field: interner.intern($text),)*
                }
            }
        }
    };
}

keyword_set!(Keywords {
    let_ => "let",
    if_ => "if",
    else_ => "else",
    task => "task",
    set => "set",
    yield_tick => "yield_tick",
    stop_block => "stop_block",
    and => "and",
    or => "or",
    not => "not",
    true_ => "true",
    false_ => "false",
    character => "character",
    world => "world",
    version => "version",
    skills => "skills",
    traits => "traits",
    defaults => "defaults",
    thresholds => "thresholds",
    plan => "plan",
    block => "block",
    rule => "rule",
    priority => "priority",
    on => "on",
    when => "when",
    do_ => "do",
    using => "using",
    requires => "requires",
    consumes => "consumes",
    produces => "produces",
    shelter => "shelter",
    inventory => "inventory",
    events => "events",
    daily => "daily",
    chance => "chance",
    overnight_threat_check => "overnight_threat_check",
    taskdef => "taskdef",
    itemdef => "itemdef",
    time => "time",
    station => "station",
    for_ => "for",
    qty => "qty",
    cond => "cond",
});
