use crate::cursor::Cursor;
use crate::error::LexError;
use lastbreach_util::SourceLoc;
use std::rc::Rc;

/// Reads the body of a string literal, the opening `"` already consumed.
/// A backslash escapes exactly the following byte without interpreting it
/// — the runner preserves whatever byte follows the backslash verbatim, so
/// `"\n"` lexes to the two bytes `\` and `n`, not a newline.
pub fn read_string(cur: &mut Cursor, file: &Rc<str>) -> Result<Vec<u8>, LexError> {
    let start_line = cur.line();
    let mut out = Vec::new();
    loop {
        if cur.is_eof() {
            return Err(LexError::new(
                SourceLoc::new(file.clone(), start_line),
                format!("unterminated string at line {start_line}"),
            ));
        }
        let c = cur.bump();
        if c == b'"' {
            break;
        }
        if c == b'\\' {
            if cur.is_eof() {
                return Err(LexError::new(
                    SourceLoc::new(file.clone(), start_line),
                    format!("unterminated escape at line {start_line}"),
                ));
            }
            out.push(c);
            out.push(cur.bump());
            continue;
        }
        out.push(c);
    }
    Ok(out)
}
