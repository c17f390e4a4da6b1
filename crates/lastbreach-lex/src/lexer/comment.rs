use crate::cursor::Cursor;
use crate::error::LexError;
use lastbreach_util::SourceLoc;
use std::rc::Rc;

/// Skips whitespace and all three comment forms (`#`, `//`, `/* */`).
/// Block comments do not nest: the first `*/` encountered closes the
/// comment regardless of how many `/*` appeared since it opened, matching
/// the reference lexer exactly.
pub fn skip_trivia(cur: &mut Cursor, file: &Rc<str>) -> Result<(), LexError> {
    loop {
        let c = cur.peek();
        if c == 0 {
            return Ok(());
        }
        if c.is_ascii_whitespace() {
            cur.bump();
            continue;
        }
        if c == b'#' {
            while !cur.is_eof() && cur.peek() != b'\n' {
                cur.bump();
            }
            continue;
        }
        if c == b'/' && cur.peek_at(1) == b'/' {
            cur.bump();
            cur.bump();
            while !cur.is_eof() && cur.peek() != b'\n' {
                cur.bump();
            }
            continue;
        }
        if c == b'/' && cur.peek_at(1) == b'*' {
            cur.bump();
            cur.bump();
            loop {
                if cur.is_eof() {
                    return Err(LexError::new(
                        SourceLoc::new(file.clone(), cur.line()),
                        "unterminated block comment",
                    ));
                }
                let d = cur.bump();
                if d == b'*' && cur.peek() == b'/' {
                    cur.bump();
                    break;
                }
            }
            continue;
        }
        return Ok(());
    }
}
