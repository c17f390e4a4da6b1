use lastbreach_util::Symbol;

/// A single lexical token. Deliberately `Copy`: every payload is either a
/// `Symbol` (already interned) or a primitive number, so tokens can be
/// buffered, peeked, and passed around without touching the heap.
///
/// There is no separate keyword variant set. `let`, `task`, `and`, `or`,
/// `not`, `true`, `false`, and every section/clause keyword in the DSL lex
/// as plain `Ident` tokens; the parser recognises them contextually by
/// comparing the resolved symbol, the same way the reference runner's
/// `ps_is_ident` compares raw bytes. Carrying a parallel keyword-token enum
/// here would just be two sources of truth for the same set of strings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token {
    Eof,
    Ident(Symbol),
    /// String literal content, interned verbatim (backslash escapes are
    /// preserved as raw bytes, never interpreted).
    Str(Symbol),
    Number(f64),
    Percent(f64),
    Duration(i64),

    LBrace,
    RBrace,
    LParen,
    RParen,
    LBracket,
    RBracket,

    Colon,
    Semi,
    Comma,
    Dot,
    DotDot,
    Assign,

    Plus,
    Minus,
    Star,
    Slash,

    Eq,
    Neq,
    Lt,
    Lte,
    Gt,
    Gte,
}

/// A token paired with the 1-based source line it started on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocatedToken {
    pub tok: Token,
    pub line: u32,
}
