// This file is part of minlang, an embeddable scripting language.
// Copyright (c) 2024 The minlang Authors
//
// Licensed under the GNU General Public License, version 3 or later.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Lexical tokens (spec §3, §4.1).

use crate::location::Location;
use crate::value::Number;

/// The kind of a [`Token`]: an identifier, a literal, a keyword, or one of
/// the symbol forms recognized by the tokenizer (spec §4.1).
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum TokenKind {
    Identifier,
    Number,
    String,

    // --- Keywords ---
    Null, False, True,
    If, Else, While, Do, For,
    Break, Continue,
    Switch, Case, Default,
    Function, Return,
    Local, This, Global,
    Class,
    Throw, Try, Catch, Finally,

    // --- Multi-character symbols ---
    PlusPlus, MinusMinus,
    PlusEq, MinusEq, StarEq, SlashEq, PercentEq,
    ShlEq, ShrEq, AmpEq, CaretEq, PipeEq,
    Shl, Shr,
    LtEq, GtEq, EqEq, NotEq,
    AmpAmp, PipePipe,

    // --- Single-character symbols ---
    Comma, Question, Colon, Semicolon,
    LParen, RParen, LSquare, RSquare, LCurly, RCurly,
    Star, Slash, Percent, Plus, Minus, Eq,
    Bang, Tilde, Lt, Gt, Amp, Caret, Pipe, Dot,

    /// End-of-input sentinel; the tokenizer always yields exactly one,
    /// as the last token in the buffer (spec §3's "Invariants").
    End,
}

/// A single lexical token, with its source location and (for `Number`,
/// `String`, `Identifier`) a payload (spec §3).
#[derive(Clone, Debug)]
pub struct Token {
    pub location: Location,
    pub kind: TokenKind,
    pub number: Option<Number>,
    pub string: Option<String>,
}

impl Token {
    pub fn new(location: Location, kind: TokenKind) -> Self {
        Self { location, kind, number: None, string: None }
    }

    pub fn with_number(location: Location, number: Number) -> Self {
        Self { location, kind: TokenKind::Number, number: Some(number), string: None }
    }

    pub fn with_string(location: Location, kind: TokenKind, string: String) -> Self {
        Self { location, kind, number: None, string: Some(string) }
    }
}

/// Maps a scanned identifier to its keyword kind, or `None` if it is a plain
/// identifier (spec §4.1 step 5).
pub fn keyword_kind(text: &str) -> Option<TokenKind> {
    use TokenKind::*;
    Some(match text {
        "null"     => Null,
        "false"    => False,
        "true"     => True,
        "if"       => If,
        "else"     => Else,
        "while"    => While,
        "do"       => Do,
        "for"      => For,
        "break"    => Break,
        "continue" => Continue,
        "switch"   => Switch,
        "case"     => Case,
        "default"  => Default,
        "function" => Function,
        "return"   => Return,
        "local"    => Local,
        "this"     => This,
        "global"   => Global,
        "class"    => Class,
        "throw"    => Throw,
        "try"      => Try,
        "catch"    => Catch,
        "finally"  => Finally,
        _          => return None,
    })
}
