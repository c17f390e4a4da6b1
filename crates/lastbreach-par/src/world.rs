//! Parses the single top-level `world STRING? { ... }` block. Unknown
//! top-level entries (a `{...}` block, a `;`-terminated line, or free
//! tokens up to `;`) are skipped rather than rejected, matching the
//! reference data parser's tolerance for forward-compatible fields.

use crate::ast::{DailyEvent, OvernightEvent, WorldDecl};
use crate::error::ParseError;
use crate::parser::Parser;
use lastbreach_lex::Token;

impl<'a, 'i, 'k> Parser<'a, 'i, 'k> {
    pub fn parse_world(&mut self) -> Result<WorldDecl, ParseError> {
        loop {
            if self.at_eof() {
                return Ok(WorldDecl::default());
            }
            if self.is_kw(self.kw.world) {
                break;
            }
            self.bump()?;
        }
        self.bump()?;

        let mut decl = WorldDecl::default();
        if let Token::Str(_) = self.peek() {
            decl.name = Some(self.expect_string()?);
        }

        self.expect(Token::LBrace)?;
        while self.peek() != Token::RBrace && !self.at_eof() {
            if self.eat_kw(self.kw.version)? {
                let v = self.parse_expr()?;
                self.expect(Token::Semi)?;
                decl.version = as_const_int(&v);
                continue;
            }
            if self.eat_kw(self.kw.shelter)? {
                self.parse_shelter(&mut decl)?;
                continue;
            }
            if self.eat_kw(self.kw.inventory)? {
                self.parse_inventory(&mut decl)?;
                continue;
            }
            if self.eat_kw(self.kw.events)? {
                self.parse_events(&mut decl)?;
                continue;
            }
            self.skip_unknown_entry()?;
        }
        if self.peek() == Token::RBrace {
            self.bump()?;
        }
        Ok(decl)
    }

    fn parse_shelter(&mut self, decl: &mut WorldDecl) -> Result<(), ParseError> {
        self.expect(Token::LBrace)?;
        while self.peek() != Token::RBrace {
            let key = self.expect_ident()?;
            self.expect(Token::Colon)?;
            let value = self.parse_number()?;
            self.expect(Token::Semi)?;
            match self.resolve(key) {
                "temp_c" => decl.shelter.temp_c = Some(value),
                "signature" => decl.shelter.signature = Some(value),
                "power" => decl.shelter.power = Some(value),
                "water_safe" => decl.shelter.water_safe = Some(value),
                "water_raw" => decl.shelter.water_raw = Some(value),
                "structure" => decl.shelter.structure = Some(value),
                "contamination" => decl.shelter.contamination = Some(value),
                _ => {}
            }
        }
        self.expect(Token::RBrace)?;
        Ok(())
    }

    fn parse_inventory(&mut self, decl: &mut WorldDecl) -> Result<(), ParseError> {
        self.expect(Token::LBrace)?;
        while self.peek() != Token::RBrace {
            let item = self.expect_string()?;
            self.expect(Token::Colon)?;
            self.expect_kw(self.kw.qty, "qty")?;
            let qty = self.parse_number()?;
            let mut cond = None;
            if self.eat(Token::Comma)? {
                self.expect_kw(self.kw.cond, "cond")?;
                cond = Some(self.parse_number()?);
            }
            self.expect(Token::Semi)?;
            decl.inventory.push(crate::ast::InventoryEntry {
                name: item,
                qty,
                cond,
            });
        }
        self.expect(Token::RBrace)?;
        Ok(())
    }

    fn parse_events(&mut self, decl: &mut WorldDecl) -> Result<(), ParseError> {
        self.expect(Token::LBrace)?;
        while self.peek() != Token::RBrace {
            if self.eat_kw(self.kw.daily)? {
                let name = self.expect_string()?;
                self.expect_kw(self.kw.chance, "chance")?;
                let chance = self.parse_number()?;
                let when = if self.eat_kw(self.kw.when)? {
                    Some(self.parse_expr()?)
                } else {
                    None
                };
                self.expect(Token::Semi)?;
                decl.daily_events.push(DailyEvent {
                    name,
                    chance,
                    when,
                });
                continue;
            }
            if self.eat_kw(self.kw.overnight_threat_check)? {
                self.expect_kw(self.kw.chance, "chance")?;
                let chance = self.parse_number()?;
                let when = if self.eat_kw(self.kw.when)? {
                    Some(self.parse_expr()?)
                } else {
                    None
                };
                self.expect(Token::Semi)?;
                decl.overnight = Some(OvernightEvent { chance, when });
                continue;
            }
            return Err(self.err("unknown events entry"));
        }
        self.expect(Token::RBrace)?;
        Ok(())
    }

    /// A lone `NUMBER`/`PERCENT`/`DURATION` literal — the grammar positions
    /// for shelter/inventory/event fields never hold a general expression.
    pub(crate) fn parse_number(&mut self) -> Result<f64, ParseError> {
        match self.peek() {
            Token::Number(v) | Token::Percent(v) => {
                self.bump()?;
                Ok(v)
            }
            Token::Duration(t) => {
                self.bump()?;
                Ok(t as f64)
            }
            other => Err(self.err(format!("expected a number, found {other:?}"))),
        }
    }

    /// Skips a top-level entry the dialect doesn't recognise: a brace
    /// block, a bare `;`-terminated line, or free tokens up to the next
    /// `;`.
    pub(crate) fn skip_unknown_entry(&mut self) -> Result<(), ParseError> {
        if !matches!(self.peek(), Token::Ident(_)) {
            self.bump()?;
            return Ok(());
        }
        self.expect_ident()?;
        if self.peek() == Token::LBrace {
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

    pub(crate) fn skip_block(&mut self) -> Result<(), ParseError> {
        if self.peek() != Token::LBrace {
            return Ok(());
        }
        self.bump()?;
        let mut depth = 1usize;
        while depth > 0 && !self.at_eof() {
            match self.peek() {
                Token::LBrace => {
                    depth += 1;
                    self.bump()?;
                }
                Token::RBrace => {
                    depth -= 1;
                    self.bump()?;
                }
                _ => {
                    self.bump()?;
                }
            }
        }
        Ok(())
    }
}

fn as_const_int(e: &crate::ast::Expr) -> Option<i64> {
    match e {
        crate::ast::Expr::Number(v) => Some((*v + 0.5) as i64),
        _ => None,
    }
}
