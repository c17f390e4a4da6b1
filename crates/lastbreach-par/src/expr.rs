//! Precedence-climbing expression parser: `or > and > cmp > add > mul >
//! unary > primary`, per the grammar in the reference runner's own
//! `parse_or`/`parse_and`/.../`parse_primary` chain.

use crate::ast::{BinOp, Expr, UnOp};
use crate::error::ParseError;
use crate::parser::Parser;
use lastbreach_lex::Token;

impl<'a, 'i, 'k> Parser<'a, 'i, 'k> {
    pub fn parse_expr(&mut self) -> Result<Expr, ParseError> {
        self.parse_or()
    }

    fn parse_or(&mut self) -> Result<Expr, ParseError> {
        let mut lhs = self.parse_and()?;
        loop {
            if self.is_kw(self.kw.or) {
                self.bump()?;
                let rhs = self.parse_and()?;
                lhs = Expr::Binary(BinOp::Or, Box::new(lhs), Box::new(rhs));
            } else {
                break;
            }
        }
        Ok(lhs)
    }

    fn parse_and(&mut self) -> Result<Expr, ParseError> {
        let mut lhs = self.parse_cmp()?;
        loop {
            if self.is_kw(self.kw.and) {
                self.bump()?;
                let rhs = self.parse_cmp()?;
                lhs = Expr::Binary(BinOp::And, Box::new(lhs), Box::new(rhs));
            } else {
                break;
            }
        }
        Ok(lhs)
    }

    fn parse_cmp(&mut self) -> Result<Expr, ParseError> {
        let mut lhs = self.parse_add()?;
        loop {
            let op = match self.peek() {
                Token::Eq => BinOp::Eq,
                Token::Neq => BinOp::Neq,
                Token::Lt => BinOp::Lt,
                Token::Lte => BinOp::Lte,
                Token::Gt => BinOp::Gt,
                Token::Gte => BinOp::Gte,
                _ => break,
            };
            self.bump()?;
            let rhs = self.parse_add()?;
            lhs = Expr::Binary(op, Box::new(lhs), Box::new(rhs));
        }
        Ok(lhs)
    }

    fn parse_add(&mut self) -> Result<Expr, ParseError> {
        let mut lhs = self.parse_mul()?;
        loop {
            let op = match self.peek() {
                Token::Plus => BinOp::Add,
                Token::Minus => BinOp::Sub,
                _ => break,
            };
            self.bump()?;
            let rhs = self.parse_mul()?;
            lhs = Expr::Binary(op, Box::new(lhs), Box::new(rhs));
        }
        Ok(lhs)
    }

    fn parse_mul(&mut self) -> Result<Expr, ParseError> {
        let mut lhs = self.parse_unary()?;
        loop {
            let op = match self.peek() {
                Token::Star => BinOp::Mul,
                Token::Slash => BinOp::Div,
                _ => break,
            };
            self.bump()?;
            let rhs = self.parse_unary()?;
            lhs = Expr::Binary(op, Box::new(lhs), Box::new(rhs));
        }
        Ok(lhs)
    }

    fn parse_unary(&mut self) -> Result<Expr, ParseError> {
        if self.is_kw(self.kw.not) {
            self.bump()?;
            let inner = self.parse_unary()?;
            return Ok(Expr::Unary(UnOp::Not, Box::new(inner)));
        }
        if self.peek() == Token::Minus {
            self.bump()?;
            let inner = self.parse_unary()?;
            return Ok(Expr::Unary(UnOp::Neg, Box::new(inner)));
        }
        if self.is_kw(self.kw.true_) {
            self.bump()?;
            return Ok(Expr::Number(1.0));
        }
        if self.is_kw(self.kw.false_) {
            self.bump()?;
            return Ok(Expr::Number(0.0));
        }
        self.parse_primary()
    }

    fn parse_primary(&mut self) -> Result<Expr, ParseError> {
        match self.peek() {
            Token::Number(v) | Token::Percent(v) => {
                self.bump()?;
                Ok(Expr::Number(v))
            }
            Token::Duration(t) => {
                self.bump()?;
                Ok(Expr::Number(t as f64))
            }
            Token::Str(sym) => {
                self.bump()?;
                Ok(Expr::Str(sym))
            }
            Token::LParen => {
                self.bump()?;
                let inner = self.parse_or()?;
                self.expect(Token::RParen)?;
                Ok(inner)
            }
            Token::Ident(first) => {
                self.bump()?;
                if self.peek() == Token::LParen {
                    self.bump()?;
                    let mut args = Vec::new();
                    if self.peek() != Token::RParen {
                        loop {
                            args.push(self.parse_or()?);
                            if !self.eat(Token::Comma)? {
                                break;
                            }
                        }
                    }
                    self.expect(Token::RParen)?;
                    return Ok(Expr::Call(first, args));
                }
                if self.peek() == Token::Dot {
                    let name = self.parse_dotted_tail(first)?;
                    return Ok(Expr::Var(name));
                }
                Ok(Expr::Var(first))
            }
            other => Err(self.err(format!("expected expression, found {other:?}"))),
        }
    }

    /// Joins `first` with a run of `.IDENT` suffixes into a single
    /// dot-delimited name, re-interned as one symbol — the flat namespace
    /// the evaluator keys `let`/`char.`/`shelter.` lookups against.
    pub(crate) fn parse_dotted_tail(&mut self, first: lastbreach_util::Symbol) -> Result<lastbreach_util::Symbol, ParseError> {
        let mut joined = self.resolve(first).to_owned();
        while self.peek() == Token::Dot {
            self.bump()?;
            let part = self.expect_ident()?;
            joined.push('.');
            joined.push_str(self.resolve(part));
        }
        Ok(self.intern(&joined))
    }
}
