mod comment;
mod number;
mod string;
#[cfg(test)]
mod tests;

use crate::cursor::Cursor;
use crate::error::LexError;
use crate::token::{LocatedToken, Token};
use lastbreach_util::{Interner, SourceLoc};
use std::rc::Rc;

fn is_ident_start(c: u8) -> bool {
    c.is_ascii_alphabetic() || c == b'_'
}
fn is_ident_part(c: u8) -> bool {
    c.is_ascii_alphanumeric() || c == b'_'
}

/// Single-pass, one-token-lookahead tokenizer for all three DSL dialects
/// (character/world/catalog share one grammar of tokens). Idents and string
/// literals are interned through the caller-supplied `Interner` so that a
/// symbol minted while lexing one file compares equal to the same text
/// interned while lexing another — the whole run shares one `Interner`,
/// threaded in from `lastbreach-drv`, so task names, station names, and
/// variable names stay comparable across the character/world/catalog
/// triple.
pub struct Lexer<'a, 'i> {
    cur: Cursor<'a>,
    file: Rc<str>,
    interner: &'i mut Interner,
}

impl<'a, 'i> Lexer<'a, 'i> {
    pub fn new(src: &'a str, file: Rc<str>, interner: &'i mut Interner) -> Self {
        Self {
            cur: Cursor::new(src),
            file,
            interner,
        }
    }

    fn err(&self, message: impl Into<String>) -> LexError {
        LexError::new(SourceLoc::new(self.file.clone(), self.cur.line()), message.into())
    }

    /// Current 1-based line, used by the parser to tag AST-adjacent errors
    /// that occur between tokens (e.g. "unexpected end of file").
    pub fn line(&self) -> u32 {
        self.cur.line()
    }

    pub fn file(&self) -> Rc<str> {
        self.file.clone()
    }

    /// Interns through the same table the lexer itself uses, so a name
    /// built by the parser (e.g. a joined dotted variable) compares equal
    /// to the same text interned anywhere else in the run.
    pub fn intern(&mut self, s: &str) -> lastbreach_util::Symbol {
        self.interner.intern(s)
    }

    pub fn resolve(&self, sym: lastbreach_util::Symbol) -> &str {
        self.interner.resolve(sym)
    }

    /// Produces the next token, advancing past it. Returns `Token::Eof`
    /// forever once the input is exhausted (callers stop polling at that
    /// point; there is no "past EOF" error).
    pub fn next_token(&mut self) -> Result<LocatedToken, LexError> {
        comment::skip_trivia(&mut self.cur, &self.file)?;
        let line = self.cur.line();
        let c = self.cur.bump();
        if c == 0 {
            return Ok(LocatedToken { tok: Token::Eof, line });
        }

        let simple = |t: Token| Ok(LocatedToken { tok: t, line });

        // A leading '.' starts a number only when immediately followed by a
        // digit; checked ahead of the punctuation match below so that `..`
        // (never followed by a digit) still falls through to the range
        // token and a bare '.' still falls through to `Token::Dot`.
        if c.is_ascii_digit() || (c == b'.' && self.cur.peek().is_ascii_digit()) {
            let kind = number::read_number(&mut self.cur, c);
            return simple(Token::from(kind));
        }

        match c {
            b'{' => simple(Token::LBrace),
            b'}' => simple(Token::RBrace),
            b'(' => simple(Token::LParen),
            b')' => simple(Token::RParen),
            b'[' => simple(Token::LBracket),
            b']' => simple(Token::RBracket),
            b':' => simple(Token::Colon),
            b';' => simple(Token::Semi),
            b',' => simple(Token::Comma),
            b'.' => {
                if self.cur.eat(b'.') {
                    simple(Token::DotDot)
                } else {
                    simple(Token::Dot)
                }
            }
            b'+' => simple(Token::Plus),
            b'-' => simple(Token::Minus),
            b'*' => simple(Token::Star),
            b'/' => simple(Token::Slash),
            b'=' => {
                if self.cur.eat(b'=') {
                    simple(Token::Eq)
                } else {
                    simple(Token::Assign)
                }
            }
            b'!' => {
                if self.cur.eat(b'=') {
                    simple(Token::Neq)
                } else {
                    Err(self.err(format!("unexpected '!' at line {line}")))
                }
            }
            b'<' => {
                if self.cur.eat(b'=') {
                    simple(Token::Lte)
                } else {
                    simple(Token::Lt)
                }
            }
            b'>' => {
                if self.cur.eat(b'=') {
                    simple(Token::Gte)
                } else {
                    simple(Token::Gt)
                }
            }
            b'"' => {
                let bytes = string::read_string(&mut self.cur, &self.file)?;
                let text = String::from_utf8_lossy(&bytes).into_owned();
                let sym = self.interner.intern(&text);
                Ok(LocatedToken { tok: Token::Str(sym), line })
            }
            _ if is_ident_start(c) => {
                let start = self.cur.pos() - 1;
                while is_ident_part(self.cur.peek()) {
                    self.cur.bump();
                }
                let end = self.cur.pos();
                let text = String::from_utf8_lossy(self.cur.slice(start, end)).into_owned();
                let sym = self.interner.intern(&text);
                Ok(LocatedToken { tok: Token::Ident(sym), line })
            }
            other => Err(self.err(format!(
                "unexpected character '{}' at line {line}",
                other as char
            ))),
        }
    }
}
