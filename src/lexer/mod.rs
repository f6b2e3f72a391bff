// This file is part of minlang, an embeddable scripting language.
// Copyright (c) 2024 The minlang Authors
//
// Licensed under the GNU General Public License, version 3 or later.
// SPDX-License-Identifier: GPL-3.0-or-later

//! The tokenizer (spec §4.1): a hand-written scanner over a [`Reader`],
//! pre-materializing the whole token buffer up front rather than the
//! teacher's own DFA-table-driven, streaming design — the token set here is
//! small and fixed, so a direct recursive scan reads more plainly than a
//! generated transition table, and pre-materializing lets the tokenizer fold
//! adjacent string literals together as it buffers them.

mod reader;
pub mod token;

use crate::error::{Error, Result};
use crate::location::Location;
use crate::value::Number;

use reader::Reader;
pub use token::{keyword_kind, Token, TokenKind};

/// Scans `source` into a token buffer ending in a single [`TokenKind::End`].
/// Adjacent string tokens are concatenated as they are appended, per the
/// language rule that two string literals separated only by whitespace or
/// comments read as one.
pub fn tokenize(source: &str) -> Result<Vec<Token>> {
    let mut lexer = Lexer::new(source);
    lexer.run()?;
    Ok(lexer.tokens)
}

struct Lexer<'a> {
    reader: Reader<'a>,
    tokens: Vec<Token>,
}

impl<'a> Lexer<'a> {
    fn new(source: &'a str) -> Self {
        Self { reader: Reader::new(source), tokens: Vec::new() }
    }

    fn run(&mut self) -> Result<()> {
        loop {
            self.skip_trivia()?;
            let loc = self.reader.location();
            let Some(c) = self.reader.peek() else {
                self.tokens.push(Token::new(loc, TokenKind::End));
                return Ok(());
            };

            if c == '"' || c == '\'' {
                self.scan_string(loc)?;
                continue;
            }
            if c.is_ascii_digit() || (c == '.' && self.reader.peek2().is_some_and(|d| d.is_ascii_digit())) {
                self.scan_number(loc)?;
                continue;
            }
            if let Some(tok) = self.scan_symbol(loc) {
                self.tokens.push(tok);
                continue;
            }
            if is_ident_start(c) {
                self.scan_identifier(loc);
                continue;
            }
            return Err(Error::parsing(loc, format!("unexpected character '{}'", c)));
        }
    }

    fn push(&mut self, token: Token) {
        if token.kind == TokenKind::String {
            if let Some(last) = self.tokens.last_mut() {
                if last.kind == TokenKind::String {
                    let mut merged = last.string.take().unwrap_or_default();
                    merged.push_str(token.string.as_deref().unwrap_or(""));
                    last.string = Some(merged);
                    return;
                }
            }
        }
        self.tokens.push(token);
    }

    fn skip_trivia(&mut self) -> Result<()> {
        loop {
            match self.reader.peek() {
                Some(c) if c.is_whitespace() => {
                    self.reader.advance();
                }
                Some('/') if self.reader.peek2() == Some('/') => {
                    while !matches!(self.reader.peek(), None | Some('\n')) {
                        self.reader.advance();
                    }
                }
                Some('/') if self.reader.peek2() == Some('*') => {
                    let start = self.reader.location();
                    self.reader.advance();
                    self.reader.advance();
                    loop {
                        match self.reader.peek() {
                            None => return Err(Error::parsing(start, "unterminated block comment")),
                            Some('*') if self.reader.peek2() == Some('/') => {
                                self.reader.advance();
                                self.reader.advance();
                                break;
                            }
                            _ => {
                                self.reader.advance();
                            }
                        }
                    }
                }
                _ => return Ok(()),
            }
        }
    }

    fn scan_string(&mut self, loc: Location) -> Result<()> {
        let quote = self.reader.advance().unwrap();
        let mut value = String::new();
        loop {
            match self.reader.advance() {
                None => return Err(Error::parsing(loc, "unterminated string literal")),
                Some(c) if c == quote => break,
                Some('\\') => value.push(self.scan_escape(loc)?),
                Some(c) => value.push(c),
            }
        }
        if self.reader.peek().is_some_and(is_ident_continue) {
            return Err(Error::parsing(
                self.reader.location(),
                "identifier character immediately follows string literal",
            ));
        }
        self.push(Token::with_string(loc, TokenKind::String, value));
        Ok(())
    }

    fn scan_escape(&mut self, start: Location) -> Result<char> {
        let esc_loc = self.reader.location();
        let c = self
            .reader
            .advance()
            .ok_or_else(|| Error::parsing(start, "unterminated string literal"))?;
        Ok(match c {
            '\\' => '\\',
            '/' => '/',
            '"' => '"',
            '\'' => '\'',
            '?' => '?',
            'a' => '\u{07}',
            'b' => '\u{08}',
            'f' => '\u{0C}',
            'n' => '\n',
            'r' => '\r',
            't' => '\t',
            'v' => '\u{0B}',
            '0' => '\0',
            'x' => self.scan_hex_escape(esc_loc, 2)?,
            'u' => self.scan_hex_escape(esc_loc, 4)?,
            'U' => self.scan_hex_escape(esc_loc, 8)?,
            other => return Err(Error::parsing(esc_loc, format!("bad escape sequence '\\{}'", other))),
        })
    }

    fn scan_hex_escape(&mut self, loc: Location, digits: usize) -> Result<char> {
        let mut code: u32 = 0;
        for _ in 0..digits {
            let c = self
                .reader
                .advance()
                .filter(|c| c.is_ascii_hexdigit())
                .ok_or_else(|| Error::parsing(loc, "bad escape sequence: expected hex digit"))?;
            code = code * 16 + c.to_digit(16).unwrap();
        }
        char::from_u32(code).ok_or_else(|| Error::parsing(loc, "bad escape sequence: invalid code point"))
    }

    fn scan_number(&mut self, loc: Location) -> Result<()> {
        let start = self.reader.location().index;
        if self.reader.peek() == Some('0')
            && matches!(self.reader.peek2(), Some('x') | Some('X'))
        {
            self.reader.advance();
            self.reader.advance();
            let digits_start = self.reader.location().index;
            while self.reader.peek().is_some_and(|c| c.is_ascii_hexdigit()) {
                self.reader.advance();
            }
            let digits = self.reader.source_slice(digits_start, self.reader.location().index);
            if digits.is_empty() {
                return Err(Error::parsing(loc, "hex literal with no digits"));
            }
            self.reject_trailing_ident_char()?;
            let value = i64::from_str_radix(digits, 16)
                .map_err(|_| Error::parsing(loc, "hex literal out of range"))?;
            self.push(Token::with_number(loc, Number::int(value)));
            return Ok(());
        }

        let mut is_float = false;
        while self.reader.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.reader.advance();
        }
        if self.reader.peek() == Some('.') && self.reader.peek2().is_some_and(|c| c.is_ascii_digit()) {
            is_float = true;
            self.reader.advance();
            while self.reader.peek().is_some_and(|c| c.is_ascii_digit()) {
                self.reader.advance();
            }
        }
        if matches!(self.reader.peek(), Some('e') | Some('E')) {
            let mut lookahead = self.reader.rest().chars();
            lookahead.next();
            let mut ok = false;
            match lookahead.next() {
                Some(c) if c.is_ascii_digit() => ok = true,
                Some('+') | Some('-') => {
                    if lookahead.next().is_some_and(|c| c.is_ascii_digit()) {
                        ok = true;
                    }
                }
                _ => {}
            }
            if ok {
                is_float = true;
                self.reader.advance();
                if matches!(self.reader.peek(), Some('+') | Some('-')) {
                    self.reader.advance();
                }
                while self.reader.peek().is_some_and(|c| c.is_ascii_digit()) {
                    self.reader.advance();
                }
            }
        }

        let end = self.reader.location().index;
        let text = self.reader.source_slice(start, end);
        self.reject_trailing_ident_char()?;
        let value: f64 = text
            .parse()
            .map_err(|_| Error::parsing(loc, format!("invalid number literal '{}'", text)))?;
        self.push(Token::with_number(loc, Number::tagged(value, !is_float)));
        Ok(())
    }

    fn reject_trailing_ident_char(&mut self) -> Result<()> {
        if self.reader.peek().is_some_and(is_ident_start) {
            return Err(Error::parsing(
                self.reader.location(),
                "identifier character immediately follows number literal",
            ));
        }
        Ok(())
    }

    fn scan_identifier(&mut self, loc: Location) {
        let start = loc.index;
        while self.reader.peek().is_some_and(is_ident_continue) {
            self.reader.advance();
        }
        let text = self.reader.source_slice(start, self.reader.location().index).to_string();
        let kind = keyword_kind(&text).unwrap_or(TokenKind::Identifier);
        if kind == TokenKind::Identifier {
            self.push(Token::with_string(loc, kind, text));
        } else {
            self.push(Token::new(loc, kind));
        }
    }

    fn scan_symbol(&mut self, loc: Location) -> Option<Token> {
        use TokenKind::*;
        let rest = self.reader.rest();
        const MULTI: &[(&str, TokenKind)] = &[
            ("<<=", ShlEq), (">>=", ShrEq),
            ("++", PlusPlus), ("--", MinusMinus),
            ("+=", PlusEq), ("-=", MinusEq), ("*=", StarEq), ("/=", SlashEq), ("%=", PercentEq),
            ("&=", AmpEq), ("^=", CaretEq), ("|=", PipeEq),
            ("<<", Shl), (">>", Shr),
            ("<=", LtEq), (">=", GtEq), ("==", EqEq), ("!=", NotEq),
            ("&&", AmpAmp), ("||", PipePipe),
        ];
        for (text, kind) in MULTI {
            if rest.starts_with(text) {
                for _ in 0..text.chars().count() {
                    self.reader.advance();
                }
                return Some(Token::new(loc, *kind));
            }
        }
        const SINGLE: &[(char, TokenKind)] = &[
            (',', Comma), ('?', Question), (':', Colon), (';', Semicolon),
            ('(', LParen), (')', RParen), ('[', LSquare), (']', RSquare),
            ('{', LCurly), ('}', RCurly),
            ('*', Star), ('/', Slash), ('%', Percent), ('+', Plus), ('-', Minus), ('=', Eq),
            ('!', Bang), ('~', Tilde), ('<', Lt), ('>', Gt),
            ('&', Amp), ('^', Caret), ('|', Pipe), ('.', Dot),
        ];
        let c = self.reader.peek()?;
        for (ch, kind) in SINGLE {
            if c == *ch {
                self.reader.advance();
                return Some(Token::new(loc, *kind));
            }
        }
        None
    }
}

fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_' || c == '$'
}

fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '$'
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(src: &str) -> Vec<TokenKind> {
        tokenize(src).unwrap().into_iter().map(|t| t.kind).collect()
    }

    #[test]
    fn skips_comments_and_whitespace() {
        assert_eq!(kinds("  // hi\n /* block */ 1"), vec![TokenKind::Number, TokenKind::End]);
    }

    #[test]
    fn adjacent_strings_concatenate() {
        let tokens = tokenize("\"a\" /* x */ \"b\"").unwrap();
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].string.as_deref(), Some("ab"));
    }

    #[test]
    fn string_escapes() {
        let tokens = tokenize(r#""\n\t\x41B""#).unwrap();
        assert_eq!(tokens[0].string.as_deref(), Some("\n\tAB"));
    }

    #[test]
    fn number_literals() {
        let tokens = tokenize("42 3.5 0xFF 1e3").unwrap();
        let nums: Vec<_> = tokens
            .iter()
            .filter(|t| t.kind == TokenKind::Number)
            .map(|t| t.number.unwrap())
            .collect();
        assert_eq!(nums[0].as_i64(), 42);
        assert!(!nums[1].is_int);
        assert_eq!(nums[2].as_i64(), 255);
        assert!(!nums[3].is_int);
    }

    #[test]
    fn bare_dot_is_not_a_number() {
        assert_eq!(kinds("."), vec![TokenKind::Dot, TokenKind::End]);
    }

    #[test]
    fn multi_char_symbols_match_longest_first() {
        assert_eq!(kinds("<<="), vec![TokenKind::ShlEq, TokenKind::End]);
        assert_eq!(kinds("<<"), vec![TokenKind::Shl, TokenKind::End]);
        assert_eq!(kinds("<"), vec![TokenKind::Lt, TokenKind::End]);
    }

    #[test]
    fn keyword_vs_identifier() {
        assert_eq!(kinds("if x"), vec![TokenKind::If, TokenKind::Identifier, TokenKind::End]);
    }

    #[test]
    fn unterminated_string_is_error() {
        assert!(tokenize("\"abc").is_err());
    }

    #[test]
    fn trailing_ident_char_after_number_is_error() {
        assert!(tokenize("1x").is_err());
    }
}
