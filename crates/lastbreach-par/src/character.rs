//! Parses a `character "Name" { ... }` block.
//!
//! The driver may call this twice against the same character source (the
//! run always has exactly two characters), so — like the world/catalog
//! parsers — this scans forward over any preamble until it finds the next
//! `character` keyword rather than requiring it as the very first token.

use crate::ast::{CharacterDecl, DefaultValue, OnHandler, PlanEntry, ThresholdRule};
use crate::error::ParseError;
use crate::parser::Parser;
use lastbreach_lex::Token;

impl<'a, 'i, 'k> Parser<'a, 'i, 'k> {
    /// Returns `Ok(None)` at end of file with no further `character` block.
    pub fn parse_character(&mut self) -> Result<Option<CharacterDecl>, ParseError> {
        loop {
            if self.at_eof() {
                return Ok(None);
            }
            if self.is_kw(self.kw.character) {
                break;
            }
            self.bump()?;
        }
        self.bump()?;

        let name = self.expect_string()?;
        let mut decl = CharacterDecl {
            name,
            ..Default::default()
        };

        self.expect(Token::LBrace)?;
        while self.peek() != Token::RBrace {
            if self.at_eof() {
                return Err(self.err("unexpected end of file in character block"));
            }
            if self.eat_kw(self.kw.version)? {
                let v = self.parse_expr()?;
                self.expect(Token::Semi)?;
                decl.version = const_int(&v);
                continue;
            }
            if self.eat_kw(self.kw.skills)? {
                self.parse_skills(&mut decl)?;
                continue;
            }
            if self.is_kw(self.kw.traits) {
                self.bump()?;
                self.parse_traits(&mut decl)?;
                continue;
            }
            if self.eat_kw(self.kw.defaults)? {
                self.parse_defaults(&mut decl)?;
                continue;
            }
            if self.eat_kw(self.kw.thresholds)? {
                self.parse_thresholds(&mut decl)?;
                continue;
            }
            if self.eat_kw(self.kw.plan)? {
                self.parse_plan(&mut decl)?;
                continue;
            }
            if self.is_kw(self.kw.on) {
                self.parse_on(&mut decl)?;
                continue;
            }
            return Err(self.err("unexpected token in character block"));
        }
        self.expect(Token::RBrace)?;
        Ok(Some(decl))
    }

    fn parse_skills(&mut self, decl: &mut CharacterDecl) -> Result<(), ParseError> {
        self.expect(Token::LBrace)?;
        while self.peek() != Token::RBrace {
            let key = self.expect_ident()?;
            self.expect(Token::Colon)?;
            let value = self.parse_expr()?;
            self.expect(Token::Semi)?;
            let v = const_number(&value).unwrap_or(0.0);
            decl.skills.push((key, v));
        }
        self.expect(Token::RBrace)?;
        Ok(())
    }

    fn parse_traits(&mut self, decl: &mut CharacterDecl) -> Result<(), ParseError> {
        self.expect(Token::Colon)?;
        self.expect(Token::LBracket)?;
        if self.peek() != Token::RBracket {
            loop {
                let s = self.expect_string()?;
                decl.traits.push(s);
                if !self.eat(Token::Comma)? {
                    break;
                }
            }
        }
        self.expect(Token::RBracket)?;
        self.expect(Token::Semi)?;
        Ok(())
    }

    fn parse_defaults(&mut self, decl: &mut CharacterDecl) -> Result<(), ParseError> {
        self.expect(Token::LBrace)?;
        while self.peek() != Token::RBrace {
            let key = self.expect_ident()?;
            self.expect(Token::Colon)?;
            if self.resolve(key) == "defense_posture" {
                let v = self.expect_string()?;
                self.expect(Token::Semi)?;
                decl.defaults.push((key, DefaultValue::Ident(v)));
                continue;
            }
            if let Token::Str(_) = self.peek() {
                self.expect_string()?;
            } else {
                self.parse_expr()?;
            }
            self.expect(Token::Semi)?;
        }
        self.expect(Token::RBrace)?;
        Ok(())
    }

    fn parse_thresholds(&mut self, decl: &mut CharacterDecl) -> Result<(), ParseError> {
        self.expect(Token::LBrace)?;
        while self.peek() != Token::RBrace {
            self.expect_kw(self.kw.when, "when")?;
            let cond = self.parse_expr()?;
            self.expect_kw(self.kw.do_, "do")?;
            let action = self.parse_action_stmt()?;
            self.expect(Token::Semi)?;
            decl.thresholds.push(ThresholdRule {
                when: cond,
                action,
            });
        }
        self.expect(Token::RBrace)?;
        Ok(())
    }

    fn parse_int_lit(&mut self) -> Result<i64, ParseError> {
        match self.peek() {
            Token::Number(v) => {
                self.bump()?;
                Ok((v + 0.5) as i64)
            }
            Token::Duration(t) => {
                self.bump()?;
                Ok(t)
            }
            other => Err(self.err(format!("expected int literal, found {other:?}"))),
        }
    }

    fn parse_plan(&mut self, decl: &mut CharacterDecl) -> Result<(), ParseError> {
        self.expect(Token::LBrace)?;
        while self.peek() != Token::RBrace {
            if self.eat_kw(self.kw.block)? {
                let station = self.expect_ident()?;
                let start = self.parse_int_lit()?;
                if !self.eat_range_sep()? {
                    return Err(self.err("expected '..' in plan block range"));
                }
                let end = self.parse_int_lit()?;
                let body = self.parse_block()?;
                decl.plan.push(PlanEntry::Block {
                    station,
                    start_tick: start,
                    end_tick: end,
                    body,
                });
                continue;
            }
            if self.eat_kw(self.kw.rule)? {
                let label = if let Token::Str(_) = self.peek() {
                    Some(self.expect_string()?)
                } else {
                    None
                };
                self.expect_kw(self.kw.priority, "priority")?;
                let priority = self.parse_expr()?;
                let body = self.parse_block()?;
                decl.plan.push(PlanEntry::Rule {
                    label,
                    priority,
                    body,
                });
                continue;
            }
            return Err(self.err("expected 'block' or 'rule' in plan"));
        }
        self.expect(Token::RBrace)?;
        Ok(())
    }

    fn parse_on(&mut self, decl: &mut CharacterDecl) -> Result<(), ParseError> {
        self.expect_kw(self.kw.on, "on")?;
        let event = self.expect_string()?;
        let when = if self.eat_kw(self.kw.when)? {
            Some(self.parse_expr()?)
        } else {
            None
        };
        self.expect_kw(self.kw.priority, "priority")?;
        let priority = self.parse_expr()?;
        let body = self.parse_block()?;
        decl.on_handlers.push(OnHandler {
            event,
            when,
            priority,
            body,
        });
        Ok(())
    }

}

fn const_number(e: &crate::ast::Expr) -> Option<f64> {
    match e {
        crate::ast::Expr::Number(v) => Some(*v),
        _ => None,
    }
}

fn const_int(e: &crate::ast::Expr) -> Option<i64> {
    const_number(e).map(|v| (v + 0.5) as i64)
}
