//! Statement parser: `let`, `if`/`else`(-if), and the three `action_stmt`
//! forms (`task`, `set`, `yield_tick`, `stop_block`).

use crate::ast::{Stmt, TaskStmt};
use crate::error::ParseError;
use crate::parser::Parser;
use lastbreach_lex::Token;

impl<'a, 'i, 'k> Parser<'a, 'i, 'k> {
    pub fn parse_block(&mut self) -> Result<Vec<Stmt>, ParseError> {
        self.expect(Token::LBrace)?;
        let mut stmts = Vec::new();
        while self.peek() != Token::RBrace {
            if self.at_eof() {
                return Err(self.err("unexpected end of file inside block"));
            }
            stmts.push(self.parse_stmt()?);
        }
        self.expect(Token::RBrace)?;
        Ok(stmts)
    }

    pub fn parse_stmt(&mut self) -> Result<Stmt, ParseError> {
        if self.eat_kw(self.kw.let_)? {
            let name_first = self.expect_ident()?;
            let name = self.parse_dotted_tail(name_first)?;
            self.expect(Token::Assign)?;
            let value = self.parse_expr()?;
            self.expect(Token::Semi)?;
            return Ok(Stmt::Let(name, value));
        }

        if self.eat_kw(self.kw.if_)? {
            return self.parse_if_stmt();
        }

        let stmt = self.parse_action_stmt()?;
        self.expect(Token::Semi)?;
        Ok(stmt)
    }

    /// `if` already consumed. `else if` is parsed as a nested single-item
    /// else-branch — `else { if ... }` — rather than a flattened
    /// else-if-chain AST node, matching the reference parser's recursive
    /// handling exactly.
    fn parse_if_stmt(&mut self) -> Result<Stmt, ParseError> {
        let cond = self.parse_expr()?;
        let then_branch = self.parse_block()?;
        let else_branch = if self.eat_kw(self.kw.else_)? {
            if self.eat_kw(self.kw.if_)? {
                Some(vec![self.parse_if_stmt()?])
            } else {
                Some(self.parse_block()?)
            }
        } else {
            None
        };
        Ok(Stmt::If(cond, then_branch, else_branch))
    }

    pub(crate) fn parse_action_stmt(&mut self) -> Result<Stmt, ParseError> {
        if self.eat_kw(self.kw.task)? {
            return self.parse_task_stmt();
        }
        if self.eat_kw(self.kw.set)? {
            let first = self.expect_ident()?;
            let name = self.parse_dotted_tail(first)?;
            self.expect(Token::Assign)?;
            let value = self.parse_expr()?;
            return Ok(Stmt::Set(name, value));
        }
        if self.eat_kw(self.kw.yield_tick)? {
            return Ok(Stmt::YieldTick);
        }
        if self.eat_kw(self.kw.stop_block)? {
            return Ok(Stmt::StopBlock);
        }
        Err(self.err(format!("expected a statement, found {:?}", self.peek())))
    }

    pub(crate) fn parse_task_stmt(&mut self) -> Result<Stmt, ParseError> {
        let name = self.expect_string()?;
        let mut duration = None;
        let mut priority = None;

        loop {
            if self.eat_kw(self.kw.for_)? {
                duration = Some(self.parse_expr()?);
                continue;
            }
            if self.eat_kw(self.kw.priority)? {
                priority = Some(self.parse_expr()?);
                continue;
            }
            if self.is_kw(self.kw.using)
                || self.is_kw(self.kw.requires)
                || self.is_kw(self.kw.consumes)
                || self.is_kw(self.kw.produces)
            {
                self.bump()?;
                self.skip_tolerated_clause()?;
                continue;
            }
            if self.is_kw(self.kw.when) {
                self.bump()?;
                self.parse_expr()?;
                continue;
            }
            break;
        }

        Ok(Stmt::Task(TaskStmt {
            name,
            duration,
            priority,
        }))
    }

    /// A `using`/`requires`/`consumes`/`produces` clause may be followed by
    /// a `{ ... }` block, a `[ ... ]` list, or a single expression. All
    /// three forms parse-through and are discarded — none of them affect
    /// scheduling or evaluation.
    fn skip_tolerated_clause(&mut self) -> Result<(), ParseError> {
        match self.peek() {
            Token::LBrace => self.skip_balanced(Token::LBrace, Token::RBrace),
            Token::LBracket => self.skip_balanced(Token::LBracket, Token::RBracket),
            _ => {
                self.parse_expr()?;
                Ok(())
            }
        }
    }

    fn skip_balanced(&mut self, open: Token, close: Token) -> Result<(), ParseError> {
        self.expect(open)?;
        let mut depth = 1usize;
        loop {
            if self.at_eof() {
                return Err(self.err("unexpected end of file inside tolerated clause"));
            }
            let tok = self.peek();
            if tok == open {
                depth += 1;
            } else if tok == close {
                depth -= 1;
                if depth == 0 {
                    self.bump()?;
                    return Ok(());
                }
            }
            self.bump()?;
        }
    }
}
