// This file is part of minlang, an embeddable scripting language.
// Copyright (c) 2024 The minlang Authors
//
// Licensed under the GNU General Public License, version 3 or later.
// SPDX-License-Identifier: GPL-3.0-or-later

//! The parser (spec §4.2): a recursive-descent parser over the token
//! buffer, with expression precedence handled by one function per level
//! rather than the teacher's generic `parse_expr_prec(token, min_prec)`
//! climbing loop with a table of `(prec, assoc)` pairs — this grammar's
//! levels are fixed and few enough that naming each one directly (as
//! `parse_or`, `parse_and`, …) reads more plainly than threading a minimum
//! precedence through one shared function, while keeping the same overall
//! shape: each level parses its operand via the next-higher level, then
//! loops consuming same-level operators.

pub mod ast;

use std::rc::Rc;

use crate::error::{Error, Result};
use crate::lexer::{tokenize, Token, TokenKind};
use crate::location::Location;
use crate::value::Kind;

use ast::*;

/// Parses a complete script (spec §4.2's `Script ::= Block`).
pub fn parse(source: &str) -> Result<Script> {
    let tokens = tokenize(source)?;
    let mut parser = Parser { tokens, pos: 0 };
    let body = parser.parse_block_until(TokenKind::End)?;
    Ok(Script { body })
}

struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    fn peek(&self) -> &Token {
        &self.tokens[self.pos]
    }

    fn location(&self) -> Location {
        self.peek().location
    }

    fn check(&self, kind: TokenKind) -> bool {
        self.peek().kind == kind
    }

    fn advance(&mut self) -> Token {
        let tok = self.tokens[self.pos].clone();
        if self.pos + 1 < self.tokens.len() {
            self.pos += 1;
        }
        tok
    }

    fn eat(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn expect(&mut self, kind: TokenKind, what: &str) -> Result<Token> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            Err(Error::parsing(self.location(), format!("expected {}", what)))
        }
    }

    fn expect_identifier(&mut self) -> Result<(Location, String)> {
        let loc = self.location();
        let tok = self.expect(TokenKind::Identifier, "an identifier")?;
        Ok((loc, tok.string.unwrap_or_default()))
    }

    // ---- Statements ----

    fn parse_block_until(&mut self, end: TokenKind) -> Result<Block> {
        let mut stmts = Vec::new();
        while !self.check(end) {
            stmts.push(self.parse_stmt()?);
        }
        Ok(stmts)
    }

    fn parse_braced_block(&mut self) -> Result<Block> {
        self.expect(TokenKind::LCurly, "'{'")?;
        let block = self.parse_block_until(TokenKind::RCurly)?;
        self.expect(TokenKind::RCurly, "'}'")?;
        Ok(block)
    }

    fn parse_stmt(&mut self) -> Result<Stmt> {
        let loc = self.location();
        let kind = match self.peek().kind {
            TokenKind::Semicolon => {
                self.advance();
                StmtKind::Empty
            }
            TokenKind::LCurly => StmtKind::Block(self.parse_braced_block()?),
            TokenKind::If => self.parse_if()?,
            TokenKind::While => self.parse_while()?,
            TokenKind::Do => self.parse_do_while()?,
            TokenKind::For => self.parse_for()?,
            TokenKind::Break => {
                self.advance();
                self.expect(TokenKind::Semicolon, "';'")?;
                StmtKind::Break
            }
            TokenKind::Continue => {
                self.advance();
                self.expect(TokenKind::Semicolon, "';'")?;
                StmtKind::Continue
            }
            TokenKind::Return => {
                self.advance();
                let value = if self.check(TokenKind::Semicolon) {
                    None
                } else {
                    Some(self.parse_expr17()?)
                };
                self.expect(TokenKind::Semicolon, "';'")?;
                StmtKind::Return(value)
            }
            TokenKind::Switch => self.parse_switch()?,
            TokenKind::Throw => {
                self.advance();
                let value = self.parse_expr17()?;
                self.expect(TokenKind::Semicolon, "';'")?;
                StmtKind::Throw(value)
            }
            TokenKind::Try => self.parse_try()?,
            TokenKind::Function => self.parse_function_decl(loc)?,
            TokenKind::Class => self.parse_class_decl(loc)?,
            _ => {
                let expr = self.parse_expr17()?;
                self.expect(TokenKind::Semicolon, "';'")?;
                StmtKind::Expr(expr)
            }
        };
        Ok(Stmt { location: loc, kind })
    }

    fn parse_if(&mut self) -> Result<StmtKind> {
        self.advance();
        self.expect(TokenKind::LParen, "'('")?;
        let cond = self.parse_expr17()?;
        self.expect(TokenKind::RParen, "')'")?;
        let then_branch = Box::new(self.parse_stmt()?);
        let else_branch = if self.eat(TokenKind::Else) {
            Some(Box::new(self.parse_stmt()?))
        } else {
            None
        };
        Ok(StmtKind::If { cond, then_branch, else_branch })
    }

    fn parse_while(&mut self) -> Result<StmtKind> {
        self.advance();
        self.expect(TokenKind::LParen, "'('")?;
        let cond = self.parse_expr17()?;
        self.expect(TokenKind::RParen, "')'")?;
        let body = Box::new(self.parse_stmt()?);
        Ok(StmtKind::While { cond, body })
    }

    fn parse_do_while(&mut self) -> Result<StmtKind> {
        self.advance();
        let body = Box::new(self.parse_stmt()?);
        self.expect(TokenKind::While, "'while'")?;
        self.expect(TokenKind::LParen, "'('")?;
        let cond = self.parse_expr17()?;
        self.expect(TokenKind::RParen, "')'")?;
        self.expect(TokenKind::Semicolon, "';'")?;
        Ok(StmtKind::DoWhile { body, cond })
    }

    fn parse_for(&mut self) -> Result<StmtKind> {
        self.advance();
        self.expect(TokenKind::LParen, "'('")?;

        // Disambiguate `Ident (',' Ident)? ':' Expr` (range-for) from the
        // C-style form by speculatively scanning ahead.
        if self.check(TokenKind::Identifier) && self.is_range_for_head() {
            let (_, key) = self.expect_identifier()?;
            let value = if self.eat(TokenKind::Comma) {
                Some(self.expect_identifier()?.1)
            } else {
                None
            };
            self.expect(TokenKind::Colon, "':'")?;
            let iterable = self.parse_expr17()?;
            self.expect(TokenKind::RParen, "')'")?;
            let body = Box::new(self.parse_stmt()?);
            return Ok(StmtKind::ForRange { key, value, iterable, body });
        }

        let init = if self.check(TokenKind::Semicolon) { None } else { Some(self.parse_expr17()?) };
        self.expect(TokenKind::Semicolon, "';'")?;
        let cond = if self.check(TokenKind::Semicolon) { None } else { Some(self.parse_expr17()?) };
        self.expect(TokenKind::Semicolon, "';'")?;
        let step = if self.check(TokenKind::RParen) { None } else { Some(self.parse_expr17()?) };
        self.expect(TokenKind::RParen, "')'")?;
        let body = Box::new(self.parse_stmt()?);
        Ok(StmtKind::ForC { init, cond, step, body })
    }

    /// Looks ahead from the current identifier to see whether it is
    /// followed by `:` or `, Ident :`, the two range-for heads.
    fn is_range_for_head(&self) -> bool {
        let mut i = self.pos + 1;
        if self.tokens[i].kind == TokenKind::Colon {
            return true;
        }
        if self.tokens[i].kind == TokenKind::Comma && self.tokens[i + 1].kind == TokenKind::Identifier {
            i += 2;
            return self.tokens[i].kind == TokenKind::Colon;
        }
        false
    }

    fn parse_switch(&mut self) -> Result<StmtKind> {
        self.advance();
        self.expect(TokenKind::LParen, "'('")?;
        let subject = self.parse_expr17()?;
        self.expect(TokenKind::RParen, "')'")?;
        self.expect(TokenKind::LCurly, "'{'")?;

        let mut cases = Vec::new();
        let mut seen_default = false;
        while !self.check(TokenKind::RCurly) {
            let label = if self.eat(TokenKind::Case) {
                let label = self.parse_expr17()?;
                Some(label)
            } else {
                self.expect(TokenKind::Default, "'case' or 'default'")?;
                if seen_default {
                    return Err(Error::parsing(self.location(), "switch has more than one 'default' label"));
                }
                seen_default = true;
                None
            };
            self.expect(TokenKind::Colon, "':'")?;
            let mut body = Vec::new();
            while !matches!(self.peek().kind, TokenKind::Case | TokenKind::Default | TokenKind::RCurly) {
                body.push(self.parse_stmt()?);
            }
            cases.push(SwitchCase { label, body });
        }
        self.expect(TokenKind::RCurly, "'}'")?;

        check_unique_case_labels(&cases)?;
        Ok(StmtKind::Switch { subject, cases })
    }

    fn parse_try(&mut self) -> Result<StmtKind> {
        let start = self.location();
        self.advance();
        let body = Box::new(self.parse_stmt()?);
        let mut catch = None;
        if self.eat(TokenKind::Catch) {
            self.expect(TokenKind::LParen, "'('")?;
            let (_, name) = self.expect_identifier()?;
            self.expect(TokenKind::RParen, "')'")?;
            catch = Some((name, Box::new(self.parse_stmt()?)));
        }
        let finally = if self.eat(TokenKind::Finally) {
            Some(Box::new(self.parse_stmt()?))
        } else {
            None
        };
        if catch.is_none() && finally.is_none() {
            return Err(Error::parsing(start, "'try' requires a 'catch' and/or 'finally' clause"));
        }
        Ok(StmtKind::Try { body, catch, finally })
    }

    /// `function f(…) { … }` lowers to `f = function(…) { … };` (spec §4.2's
    /// syntactic sugar).
    fn parse_function_decl(&mut self, loc: Location) -> Result<StmtKind> {
        self.advance();
        let (name_loc, name) = self.expect_identifier()?;
        let def = self.parse_function_tail(name_loc, Some(name.clone()))?;
        let target = Expr { location: name_loc, kind: ExprKind::Identifier { name, scope: ScopeTag::None } };
        let value = Expr { location: loc, kind: ExprKind::Function(Rc::new(def)) };
        Ok(StmtKind::Expr(Expr {
            location: loc,
            kind: ExprKind::Assign { op: AssignOp::Assign, target: Box::new(target), value: Box::new(value) },
        }))
    }

    /// `class C : Base { … }` lowers to an assignment of an object literal
    /// carrying a synthetic `base` key used at evaluation time to seed `C`'s
    /// members from `Base` (spec §4.2's syntactic sugar).
    fn parse_class_decl(&mut self, loc: Location) -> Result<StmtKind> {
        self.advance();
        let (name_loc, name) = self.expect_identifier()?;
        let base = if self.eat(TokenKind::Colon) {
            Some(self.parse_expr16()?)
        } else {
            None
        };
        let mut fields = self.parse_object_fields()?;
        if let Some(base_expr) = base {
            fields.insert(0, ("base".to_string(), base_expr));
        }
        let target = Expr { location: name_loc, kind: ExprKind::Identifier { name, scope: ScopeTag::None } };
        let value = Expr { location: loc, kind: ExprKind::Object(fields) };
        Ok(StmtKind::Expr(Expr {
            location: loc,
            kind: ExprKind::Assign { op: AssignOp::Assign, target: Box::new(target), value: Box::new(value) },
        }))
    }

    fn parse_function_tail(&mut self, loc: Location, name: Option<String>) -> Result<FunctionDef> {
        self.expect(TokenKind::LParen, "'('")?;
        let mut params = Vec::new();
        if !self.check(TokenKind::RParen) {
            loop {
                params.push(self.expect_identifier()?.1);
                if !self.eat(TokenKind::Comma) {
                    break;
                }
            }
        }
        self.expect(TokenKind::RParen, "')'")?;
        check_unique_params(&params, loc)?;
        let body = self.parse_braced_block()?;
        Ok(FunctionDef { location: loc, name, params, body })
    }

    // ---- Expressions ----
    //
    // One function per precedence level (spec §4.2's "Expression
    // precedence" list), lowest to highest. `parse_expression` (the comma
    // operator) is reachable only through a parenthesized primary; every
    // other grammar position (`Expr17` in the grammar) enters at
    // `parse_expr17`, the assignment level.

    fn parse_expression(&mut self) -> Result<Expr> {
        let mut expr = self.parse_expr17()?;
        while self.check(TokenKind::Comma) {
            let loc = self.location();
            self.advance();
            let right = self.parse_expr17()?;
            expr = Expr {
                location: loc,
                kind: ExprKind::Binary { op: BinaryOp::Comma, left: Box::new(expr), right: Box::new(right) },
            };
        }
        Ok(expr)
    }

    fn parse_expr17(&mut self) -> Result<Expr> {
        self.parse_assignment()
    }

    fn parse_assignment(&mut self) -> Result<Expr> {
        let target = self.parse_ternary()?;
        let assign_op = match self.peek().kind {
            TokenKind::Eq => Some(AssignOp::Assign),
            TokenKind::PlusEq => Some(AssignOp::Add),
            TokenKind::MinusEq => Some(AssignOp::Sub),
            TokenKind::StarEq => Some(AssignOp::Mul),
            TokenKind::SlashEq => Some(AssignOp::Div),
            TokenKind::PercentEq => Some(AssignOp::Rem),
            TokenKind::ShlEq => Some(AssignOp::Shl),
            TokenKind::ShrEq => Some(AssignOp::Shr),
            TokenKind::AmpEq => Some(AssignOp::BitAnd),
            TokenKind::CaretEq => Some(AssignOp::BitXor),
            TokenKind::PipeEq => Some(AssignOp::BitOr),
            _ => None,
        };
        let Some(op) = assign_op else { return Ok(target) };
        let loc = self.location();
        self.advance();
        // Right-associative: the right side is itself a full assignment.
        let value = self.parse_assignment()?;
        Ok(Expr {
            location: loc,
            kind: ExprKind::Assign { op, target: Box::new(target), value: Box::new(value) },
        })
    }

    fn parse_ternary(&mut self) -> Result<Expr> {
        let cond = self.parse_expr16()?;
        if !self.eat(TokenKind::Question) {
            return Ok(cond);
        }
        let loc = cond.location;
        let then_expr = self.parse_assignment()?;
        self.expect(TokenKind::Colon, "':'")?;
        let else_expr = self.parse_assignment()?;
        Ok(Expr {
            location: loc,
            kind: ExprKind::Ternary { cond: Box::new(cond), then_expr: Box::new(then_expr), else_expr: Box::new(else_expr) },
        })
    }

    /// The precedence level just below ternary: logical-or and everything
    /// tighter. Named `expr16` because `class C : Expr16` is the one other
    /// grammar position that enters here (it excludes ternary and below, so
    /// `class C : a ? b : c` is unambiguous without parentheses).
    fn parse_expr16(&mut self) -> Result<Expr> {
        self.parse_logical_or()
    }

    fn parse_logical_or(&mut self) -> Result<Expr> {
        self.parse_left_assoc(Self::parse_logical_and, &[(TokenKind::PipePipe, BinaryOp::Or)])
    }

    fn parse_logical_and(&mut self) -> Result<Expr> {
        self.parse_left_assoc(Self::parse_bit_or, &[(TokenKind::AmpAmp, BinaryOp::And)])
    }

    fn parse_bit_or(&mut self) -> Result<Expr> {
        self.parse_left_assoc(Self::parse_bit_xor, &[(TokenKind::Pipe, BinaryOp::BitOr)])
    }

    fn parse_bit_xor(&mut self) -> Result<Expr> {
        self.parse_left_assoc(Self::parse_bit_and, &[(TokenKind::Caret, BinaryOp::BitXor)])
    }

    fn parse_bit_and(&mut self) -> Result<Expr> {
        self.parse_left_assoc(Self::parse_equality, &[(TokenKind::Amp, BinaryOp::BitAnd)])
    }

    fn parse_equality(&mut self) -> Result<Expr> {
        self.parse_left_assoc(
            Self::parse_relational,
            &[(TokenKind::EqEq, BinaryOp::Eq), (TokenKind::NotEq, BinaryOp::NotEq)],
        )
    }

    fn parse_relational(&mut self) -> Result<Expr> {
        self.parse_left_assoc(
            Self::parse_shift,
            &[
                (TokenKind::Lt, BinaryOp::Lt),
                (TokenKind::LtEq, BinaryOp::LtEq),
                (TokenKind::Gt, BinaryOp::Gt),
                (TokenKind::GtEq, BinaryOp::GtEq),
            ],
        )
    }

    fn parse_shift(&mut self) -> Result<Expr> {
        self.parse_left_assoc(Self::parse_additive, &[(TokenKind::Shl, BinaryOp::Shl), (TokenKind::Shr, BinaryOp::Shr)])
    }

    fn parse_additive(&mut self) -> Result<Expr> {
        self.parse_left_assoc(Self::parse_multiplicative, &[(TokenKind::Plus, BinaryOp::Add), (TokenKind::Minus, BinaryOp::Sub)])
    }

    fn parse_multiplicative(&mut self) -> Result<Expr> {
        self.parse_left_assoc(
            Self::parse_unary,
            &[(TokenKind::Star, BinaryOp::Mul), (TokenKind::Slash, BinaryOp::Div), (TokenKind::Percent, BinaryOp::Rem)],
        )
    }

    /// Shared left-associative binary-operator loop, parameterized by the
    /// next-tighter level and the tokens this level recognizes.
    fn parse_left_assoc(
        &mut self,
        next: fn(&mut Self) -> Result<Expr>,
        ops: &[(TokenKind, BinaryOp)],
    ) -> Result<Expr> {
        let mut expr = next(self)?;
        'outer: loop {
            for (tok, op) in ops {
                if self.check(*tok) {
                    let loc = self.location();
                    self.advance();
                    let right = next(self)?;
                    expr = Expr {
                        location: loc,
                        kind: ExprKind::Binary { op: *op, left: Box::new(expr), right: Box::new(right) },
                    };
                    continue 'outer;
                }
            }
            return Ok(expr);
        }
    }

    fn parse_unary(&mut self) -> Result<Expr> {
        let loc = self.location();
        let op = match self.peek().kind {
            TokenKind::Plus => Some(UnaryOp::Plus),
            TokenKind::Minus => Some(UnaryOp::Minus),
            TokenKind::Bang => Some(UnaryOp::Not),
            TokenKind::Tilde => Some(UnaryOp::BitNot),
            TokenKind::PlusPlus => Some(UnaryOp::PreIncrement),
            TokenKind::MinusMinus => Some(UnaryOp::PreDecrement),
            _ => None,
        };
        if let Some(op) = op {
            self.advance();
            let operand = self.parse_unary()?;
            return Ok(Expr { location: loc, kind: ExprKind::Unary { op, operand: Box::new(operand) } });
        }
        self.parse_postfix()
    }

    fn parse_postfix(&mut self) -> Result<Expr> {
        let mut expr = self.parse_primary()?;
        loop {
            let loc = self.location();
            match self.peek().kind {
                TokenKind::PlusPlus => {
                    self.advance();
                    expr = Expr { location: loc, kind: ExprKind::Unary { op: UnaryOp::PostIncrement, operand: Box::new(expr) } };
                }
                TokenKind::MinusMinus => {
                    self.advance();
                    expr = Expr { location: loc, kind: ExprKind::Unary { op: UnaryOp::PostDecrement, operand: Box::new(expr) } };
                }
                TokenKind::LParen => {
                    self.advance();
                    let mut args = Vec::new();
                    if !self.check(TokenKind::RParen) {
                        loop {
                            args.push(self.parse_expr17()?);
                            if !self.eat(TokenKind::Comma) {
                                break;
                            }
                        }
                    }
                    self.expect(TokenKind::RParen, "')'")?;
                    expr = Expr { location: loc, kind: ExprKind::Call { callee: Box::new(expr), args } };
                }
                TokenKind::LSquare => {
                    self.advance();
                    let index = self.parse_expression()?;
                    self.expect(TokenKind::RSquare, "']'")?;
                    expr = Expr { location: loc, kind: ExprKind::Index { object: Box::new(expr), index: Box::new(index) } };
                }
                TokenKind::Dot => {
                    self.advance();
                    let (_, name) = self.expect_identifier()?;
                    expr = Expr { location: loc, kind: ExprKind::Member { object: Box::new(expr), name } };
                }
                _ => return Ok(expr),
            }
        }
    }

    fn parse_primary(&mut self) -> Result<Expr> {
        let loc = self.location();
        let tok = self.peek().kind;
        let kind = match tok {
            TokenKind::Null => {
                self.advance();
                ExprKind::Null
            }
            TokenKind::True => {
                self.advance();
                ExprKind::Bool(true)
            }
            TokenKind::False => {
                self.advance();
                ExprKind::Bool(false)
            }
            TokenKind::Number => {
                let n = self.advance().number.expect("Number token carries a number");
                ExprKind::Number(n)
            }
            TokenKind::String => {
                let s = self.advance().string.expect("String token carries a string");
                ExprKind::String(s)
            }
            TokenKind::This => {
                self.advance();
                ExprKind::This
            }
            TokenKind::Local | TokenKind::Global => {
                let scope = if tok == TokenKind::Local { ScopeTag::Local } else { ScopeTag::Global };
                self.advance();
                self.expect(TokenKind::Dot, "'.'")?;
                let (_, name) = self.expect_identifier()?;
                ExprKind::Identifier { name, scope }
            }
            TokenKind::Identifier => {
                let name = self.advance().string.expect("Identifier token carries text");
                if let Some(kind) = Kind::from_type_keyword(&name) {
                    ExprKind::Identifier { name: kind.name().to_string(), scope: ScopeTag::None }
                } else {
                    ExprKind::Identifier { name, scope: ScopeTag::None }
                }
            }
            TokenKind::Function => {
                self.advance();
                let def = self.parse_function_tail(loc, None)?;
                ExprKind::Function(Rc::new(def))
            }
            TokenKind::LCurly => ExprKind::Object(self.parse_object_fields()?),
            TokenKind::LSquare => {
                self.advance();
                let mut items = Vec::new();
                if !self.check(TokenKind::RSquare) {
                    loop {
                        items.push(self.parse_expr17()?);
                        if !self.eat(TokenKind::Comma) {
                            break;
                        }
                    }
                }
                self.expect(TokenKind::RSquare, "']'")?;
                ExprKind::Array(items)
            }
            TokenKind::LParen => {
                self.advance();
                let inner = self.parse_expression()?;
                self.expect(TokenKind::RParen, "')'")?;
                return Ok(inner);
            }
            _ => return Err(Error::parsing(loc, "expected an expression")),
        };
        Ok(Expr { location: loc, kind })
    }

    fn parse_object_fields(&mut self) -> Result<Vec<(String, Expr)>> {
        self.expect(TokenKind::LCurly, "'{'")?;
        let mut fields: Vec<(String, Expr)> = Vec::new();
        if !self.check(TokenKind::RCurly) {
            loop {
                let (key_loc, key) = if self.check(TokenKind::String) {
                    let loc = self.location();
                    (loc, self.advance().string.unwrap())
                } else {
                    self.expect_identifier()?
                };
                if fields.iter().any(|(k, _)| k == &key) {
                    return Err(Error::parsing(key_loc, format!("duplicate object key '{}'", key)));
                }
                self.expect(TokenKind::Colon, "':'")?;
                let value = self.parse_expr17()?;
                fields.push((key, value));
                if !self.eat(TokenKind::Comma) {
                    break;
                }
            }
        }
        self.expect(TokenKind::RCurly, "'}'")?;
        Ok(fields)
    }
}

fn check_unique_params(params: &[String], loc: Location) -> Result<()> {
    for i in 0..params.len() {
        for j in (i + 1)..params.len() {
            if params[i] == params[j] {
                return Err(Error::parsing(loc, format!("duplicate parameter name '{}'", params[i])));
            }
        }
    }
    Ok(())
}

fn check_unique_case_labels(cases: &[SwitchCase]) -> Result<()> {
    for (i, a) in cases.iter().enumerate() {
        let Some(a_label) = &a.label else { continue };
        for b in &cases[i + 1..] {
            let Some(b_label) = &b.label else { continue };
            if literal_eq(a_label, b_label) {
                return Err(Error::parsing(a_label.location, "duplicate switch case label"));
            }
        }
    }
    Ok(())
}

/// Structural equality of two `case` label expressions, for the parse-time
/// uniqueness check (full evaluation happens later, at runtime, against
/// values produced by these same literal forms).
fn literal_eq(a: &Expr, b: &Expr) -> bool {
    match (&a.kind, &b.kind) {
        (ExprKind::Null, ExprKind::Null) => true,
        (ExprKind::Bool(a), ExprKind::Bool(b)) => a == b,
        (ExprKind::Number(a), ExprKind::Number(b)) => a.value == b.value,
        (ExprKind::String(a), ExprKind::String(b)) => a == b,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_arithmetic_precedence() {
        let script = parse("1 + 2 * 3;").unwrap();
        assert_eq!(script.body.len(), 1);
        let StmtKind::Expr(expr) = &script.body[0].kind else { panic!() };
        let ExprKind::Binary { op: BinaryOp::Add, right, .. } = &expr.kind else { panic!() };
        assert!(matches!(right.kind, ExprKind::Binary { op: BinaryOp::Mul, .. }));
    }

    #[test]
    fn function_decl_sugar_lowers_to_assignment() {
        let script = parse("function f(x) { return x; }").unwrap();
        let StmtKind::Expr(expr) = &script.body[0].kind else { panic!() };
        assert!(matches!(expr.kind, ExprKind::Assign { op: AssignOp::Assign, .. }));
    }

    #[test]
    fn class_decl_sugar_lowers_to_object_assignment() {
        let script = parse("class C : Base { x: 1 }").unwrap();
        let StmtKind::Expr(expr) = &script.body[0].kind else { panic!() };
        let ExprKind::Assign { value, .. } = &expr.kind else { panic!() };
        let ExprKind::Object(fields) = &value.kind else { panic!() };
        assert_eq!(fields[0].0, "base");
    }

    #[test]
    fn duplicate_params_is_error() {
        assert!(parse("function f(x, x) {}").is_err());
    }

    #[test]
    fn duplicate_object_keys_is_error() {
        assert!(parse("x = { a: 1, a: 2 };").is_err());
    }

    #[test]
    fn duplicate_default_case_is_error() {
        assert!(parse("switch(1) { default: ; default: ; }").is_err());
    }

    #[test]
    fn range_for_vs_c_style_for() {
        assert!(parse("for (k, v : a) {}").is_ok());
        assert!(parse("for (i = 0; i < 10; i++) {}").is_ok());
    }

    #[test]
    fn scoped_identifiers() {
        let script = parse("local.x; global.y;").unwrap();
        let StmtKind::Expr(e0) = &script.body[0].kind else { panic!() };
        assert!(matches!(e0.kind, ExprKind::Identifier { scope: ScopeTag::Local, .. }));
        let StmtKind::Expr(e1) = &script.body[1].kind else { panic!() };
        assert!(matches!(e1.kind, ExprKind::Identifier { scope: ScopeTag::Global, .. }));
    }

    #[test]
    fn ternary_and_assignment_are_right_associative() {
        let script = parse("a = b ? c : d = e;").unwrap();
        let StmtKind::Expr(expr) = &script.body[0].kind else { panic!() };
        assert!(matches!(expr.kind, ExprKind::Assign { .. }));
    }
}
