use crate::cursor::Cursor;
use crate::token::Token;

/// The three ways a digit run can resolve, mirroring `lx_read_number`'s
/// trailing-suffix sniff.
pub enum NumKind {
    Number(f64),
    Percent(f64),
    Duration(i64),
}

/// Reads a numeric literal, the first digit (or leading `.`) already
/// consumed as `first`. A `.` is only folded into the digit run if it is
/// itself followed by a digit — otherwise it is left for the caller to
/// lex as `.`/`..`, since `1..5` must not swallow the first dot as a
/// decimal point.
pub fn read_number(cur: &mut Cursor, first: u8) -> NumKind {
    let mut buf = String::new();
    buf.push(first as char);
    let mut seen_dot = first == b'.';

    loop {
        let c = cur.peek();
        if c.is_ascii_digit() {
            buf.push(cur.bump() as char);
            continue;
        }
        if c == b'.' && !seen_dot {
            let next = cur.peek_at(1);
            if !next.is_ascii_digit() {
                break;
            }
            seen_dot = true;
            buf.push(cur.bump() as char);
            continue;
        }
        break;
    }

    let value: f64 = buf.parse().unwrap_or(0.0);

    if cur.peek() == b'%' {
        cur.bump();
        return NumKind::Percent(value);
    }
    if cur.peek() == b't' {
        cur.bump();
        return NumKind::Duration((value + 0.5) as i64);
    }
    NumKind::Number(value)
}

impl From<NumKind> for Token {
    fn from(k: NumKind) -> Self {
        match k {
            NumKind::Number(v) => Token::Number(v),
            NumKind::Percent(v) => Token::Percent(v),
            NumKind::Duration(t) => Token::Duration(t),
        }
    }
}
