// This file is part of minlang, an embeddable scripting language.
// Copyright (c) 2024 The minlang Authors
//
// Licensed under the GNU General Public License, version 3 or later.
// SPDX-License-Identifier: GPL-3.0-or-later

//! The source cursor: a safe, UTF-8-aware character reader that tracks
//! `(index, line, column)` as it advances.

use crate::location::Location;

/// A cursor over source text. Tracks byte index, 1-based line, and 1-based
/// column; `\n` advances the line and resets the column, matching the
/// teacher's own `Location` bookkeeping.
pub struct Reader<'a> {
    source: &'a str,
    chars: std::iter::Peekable<std::str::CharIndices<'a>>,
    index: usize,
    line: u32,
    column: u32,
}

impl<'a> Reader<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            chars: source.char_indices().peekable(),
            index: 0,
            line: 1,
            column: 1,
        }
    }

    pub fn location(&self) -> Location {
        Location::new(self.index, self.line, self.column)
    }

    pub fn peek(&mut self) -> Option<char> {
        self.chars.peek().map(|&(_, c)| c)
    }

    pub fn peek2(&self) -> Option<char> {
        let mut it = self.chars.clone();
        it.next();
        it.next().map(|(_, c)| c)
    }

    /// The remainder of the source starting at the current position.
    pub fn rest(&self) -> &'a str {
        &self.source[self.index..]
    }

    /// The source text between two byte offsets previously obtained from
    /// `self.location().index`.
    pub fn source_slice(&self, start: usize, end: usize) -> &'a str {
        &self.source[start..end]
    }

    pub fn is_eof(&mut self) -> bool {
        self.peek().is_none()
    }

    pub fn advance(&mut self) -> Option<char> {
        let (i, c) = self.chars.next()?;
        self.index = i + c.len_utf8();
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(c)
    }

    /// Advances past `c` if it is next, returning whether it matched.
    pub fn eat(&mut self, c: char) -> bool {
        if self.peek() == Some(c) {
            self.advance();
            true
        } else {
            false
        }
    }
}
