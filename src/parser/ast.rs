// This file is part of minlang, an embeddable scripting language.
// Copyright (c) 2024 The minlang Authors
//
// Licensed under the GNU General Public License, version 3 or later.
// SPDX-License-Identifier: GPL-3.0-or-later

//! The abstract syntax tree (spec §2, §4.2).
//!
//! Every node carries a [`Location`] so the evaluator can report errors at
//! the point of failure, the way the teacher's own assembler AST threads a
//! `T` location tag through `Module<T>`/`Stmt<T>` — here the location lives
//! directly on each node rather than behind a generic parameter, since every
//! node needs exactly one and nothing else varies by phase.

use crate::location::Location;
use crate::value::Number;

/// A parsed script: one top-level [`Block`].
#[derive(Debug)]
pub struct Script {
    pub body: Block,
}

pub type Block = Vec<Stmt>;

#[derive(Debug)]
pub struct Stmt {
    pub location: Location,
    pub kind: StmtKind,
}

#[derive(Debug)]
pub enum StmtKind {
    Empty,
    Block(Block),
    Expr(Expr),
    If { cond: Expr, then_branch: Box<Stmt>, else_branch: Option<Box<Stmt>> },
    While { cond: Expr, body: Box<Stmt> },
    DoWhile { body: Box<Stmt>, cond: Expr },
    ForRange { key: String, value: Option<String>, iterable: Expr, body: Box<Stmt> },
    ForC { init: Option<Expr>, cond: Option<Expr>, step: Option<Expr>, body: Box<Stmt> },
    Break,
    Continue,
    Return(Option<Expr>),
    Switch { subject: Expr, cases: Vec<SwitchCase> },
    Throw(Expr),
    Try { body: Box<Stmt>, catch: Option<(String, Box<Stmt>)>, finally: Option<Box<Stmt>> },
}

#[derive(Debug)]
pub struct SwitchCase {
    /// `None` marks the `default` case.
    pub label: Option<Expr>,
    pub body: Block,
}

#[derive(Debug)]
pub struct Expr {
    pub location: Location,
    pub kind: ExprKind,
}

/// The scope restriction carried by an identifier, from the `local.x` /
/// `global.x` surface syntax (spec §4.2, "Identifier forms").
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ScopeTag {
    None,
    Local,
    Global,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum UnaryOp {
    Plus,
    Minus,
    Not,
    BitNot,
    PreIncrement,
    PreDecrement,
    PostIncrement,
    PostDecrement,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum BinaryOp {
    Add, Sub, Mul, Div, Rem,
    Shl, Shr, BitAnd, BitXor, BitOr,
    Eq, NotEq, Lt, LtEq, Gt, GtEq,
    And, Or,
    Comma,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum AssignOp {
    Assign,
    Add, Sub, Mul, Div, Rem,
    Shl, Shr, BitAnd, BitXor, BitOr,
}

#[derive(Debug)]
pub enum ExprKind {
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    This,
    Identifier { name: String, scope: ScopeTag },
    Object(Vec<(String, Expr)>),
    Array(Vec<Expr>),
    /// An anonymous (or, post-sugar, named-then-assigned) function literal.
    Function(std::rc::Rc<FunctionDef>),
    Unary { op: UnaryOp, operand: Box<Expr> },
    Binary { op: BinaryOp, left: Box<Expr>, right: Box<Expr> },
    Assign { op: AssignOp, target: Box<Expr>, value: Box<Expr> },
    Ternary { cond: Box<Expr>, then_expr: Box<Expr>, else_expr: Box<Expr> },
    Call { callee: Box<Expr>, args: Vec<Expr> },
    Index { object: Box<Expr>, index: Box<Expr> },
    Member { object: Box<Expr>, name: String },
}

/// A function definition: parameters and a body block, shared by reference
/// from every `Value::Function` closed over it (spec §3's "Invariants":
/// valid only while the owning Script is alive).
#[derive(Debug)]
pub struct FunctionDef {
    pub location: Location,
    pub name: Option<String>,
    pub params: Vec<String>,
    pub body: Block,
}
