//! Parses zero or more `taskdef`/`itemdef` entries. `itemdef` bodies are
//! skipped wholesale — the catalog only tracks task metadata.

use crate::ast::{CatalogDecl, TaskDefDecl};
use crate::error::ParseError;
use crate::parser::Parser;
use lastbreach_lex::Token;

impl<'a, 'i, 'k> Parser<'a, 'i, 'k> {
    pub fn parse_catalog(&mut self) -> Result<CatalogDecl, ParseError> {
        let mut decl = CatalogDecl::default();
        while !self.at_eof() {
            if self.eat_kw(self.kw.taskdef)? {
                let name = self.expect_string()?;
                let mut task = TaskDefDecl {
                    name,
                    ..Default::default()
                };
                self.expect(Token::LBrace)?;
                while self.peek() != Token::RBrace {
                    if self.eat_kw(self.kw.time)? {
                        self.expect(Token::Colon)?;
                        let ticks = self.parse_number()?;
                        self.expect(Token::Semi)?;
                        let ticks = (ticks + 0.5) as i64;
                        task.time_ticks = Some(if ticks <= 0 { 1 } else { ticks });
                        continue;
                    }
                    if self.eat_kw(self.kw.station)? {
                        self.expect(Token::Colon)?;
                        let st = self.expect_ident()?;
                        self.expect(Token::Semi)?;
                        task.station = Some(st);
                        continue;
                    }
                    self.skip_field()?;
                }
                self.expect(Token::RBrace)?;
                decl.tasks.push(task);
                continue;
            }
            if self.eat_kw(self.kw.itemdef)? {
                self.expect_string()?;
                if self.peek() == Token::LBrace {
                    self.skip_block()?;
                }
                continue;
            }
            self.bump()?;
        }
        Ok(decl)
    }

    /// An unrecognised `taskdef` field: `key: ...;` (value tokens or a
    /// nested block, all discarded), `key {...}`, `key;`, or bare tokens
    /// up to the next `;`.
    fn skip_field(&mut self) -> Result<(), ParseError> {
        if !matches!(self.peek(), Token::Ident(_)) {
            self.bump()?;
            return Ok(());
        }
        self.expect_ident()?;
        if self.eat(Token::Colon)? {
            while self.peek() != Token::Semi && !self.at_eof() {
                if self.peek() == Token::LBrace {
                    self.skip_block()?;
                    break;
                }
                self.bump()?;
            }
            if self.peek() == Token::Semi {
                self.bump()?;
            }
        } else if self.peek() == Token::LBrace {
            self.skip_block()?;
        } else if self.peek() == Token::Semi {
            self.bump()?;
        } else {
            while self.peek() != Token::Semi && !self.at_eof() {
                self.bump()?;
            }
            if self.peek() == Token::Semi {
                self.bump()?;
            }
        }
        Ok(())
    }
}
