/// A byte-oriented cursor over the source text.
///
/// The DSL's encoding contract is "8-bit clean": comments, strings, and
/// identifiers are all byte spans compared against ASCII punctuation and
/// whitespace only. Walking `&[u8]` instead of `&str`/`char` sidesteps UTF-8
/// boundary panics on arbitrary input, matching the reference lexer's plain
/// `unsigned char` walk over `const char *src`.
pub struct Cursor<'a> {
    src: &'a [u8],
    pos: usize,
    line: u32,
}

impl<'a> Cursor<'a> {
    pub fn new(src: &'a str) -> Self {
        Self {
            src: src.as_bytes(),
            pos: 0,
            line: 1,
        }
    }

    pub fn line(&self) -> u32 {
        self.line
    }

    pub fn pos(&self) -> usize {
        self.pos
    }

    pub fn is_eof(&self) -> bool {
        self.pos >= self.src.len()
    }

    pub fn peek(&self) -> u8 {
        self.peek_at(0)
    }

    pub fn peek_at(&self, offset: usize) -> u8 {
        *self.src.get(self.pos + offset).unwrap_or(&0)
    }

    /// Consumes and returns the next byte, tracking line breaks. Returns 0
    /// at end of input (mirrors the reference `lx_next`'s sentinel return).
    pub fn bump(&mut self) -> u8 {
        if self.is_eof() {
            return 0;
        }
        let c = self.src[self.pos];
        self.pos += 1;
        if c == b'\n' {
            self.line += 1;
        }
        c
    }

    /// Consumes the next byte only if it equals `c`.
    pub fn eat(&mut self, c: u8) -> bool {
        if self.peek() == c {
            self.bump();
            true
        } else {
            false
        }
    }

    pub fn slice(&self, start: usize, end: usize) -> &'a [u8] {
        &self.src[start..end]
    }
}
