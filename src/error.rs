// This file is part of minlang, an embeddable scripting language.
// Copyright (c) 2024 The minlang Authors
//
// Licensed under the GNU General Public License, version 3 or later.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error taxonomy.
//!
//! Every error a script can raise or an embedder can observe carries a
//! [`Location`] and a human-readable message, tagged with an [`ErrorKind`] so
//! that a user `catch` block can distinguish them (see
//! [`Error::to_catch_object`]).

use std::fmt::{self, Display, Formatter};

use crate::location::Location;
use crate::value::Value;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// The kind of a runtime or parse error.
///
/// `Parsing` is never catchable from within a script (§4.3.7 "Parsing error
/// is never produced during execution"); the rest are `RuntimeError`
/// subkinds and materialize into a catchable object when raised inside a
/// `try`.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ErrorKind {
    Parsing,
    Runtime,
    Type,
    Argument,
    Index,
    Io,
    Os,
    Eof,
}

impl ErrorKind {
    /// The name used as the `type` field of a catch-materialized object, and
    /// as the `(Kind)` segment of a formatted error.
    pub fn name(self) -> &'static str {
        use ErrorKind::*;
        match self {
            Parsing  => "ParsingError",
            Runtime  => "RuntimeError",
            Type     => "TypeError",
            Argument => "ArgumentError",
            Index    => "IndexError",
            Io       => "IOError",
            Os       => "OSError",
            Eof      => "EOFError",
        }
    }
}

/// A typed, located error.
///
/// `thrown` is set only for a script-level `throw expr;` (§4.3.6): it
/// carries the exact value the script threw, so a `catch` binds that value
/// verbatim rather than the synthesized `{ type, index, line, column,
/// message }` object built for every other (host-raised) error kind.
#[derive(Clone, Debug)]
pub struct Error {
    pub kind: ErrorKind,
    pub location: Location,
    pub message: String,
    pub thrown: Option<Value>,
}

impl Error {
    pub fn new(kind: ErrorKind, location: Location, message: impl Into<String>) -> Self {
        Self { kind, location, message: message.into(), thrown: None }
    }

    /// A script-level `throw value;` (spec §4.3.6).
    pub fn thrown(location: Location, value: Value) -> Self {
        Self {
            kind: ErrorKind::Runtime,
            location,
            message: value.display_repr(),
            thrown: Some(value),
        }
    }

    pub fn parsing(location: Location, message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Parsing, location, message)
    }

    pub fn runtime(location: Location, message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Runtime, location, message)
    }

    pub fn type_error(location: Location, message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Type, location, message)
    }

    pub fn argument(location: Location, message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Argument, location, message)
    }

    pub fn index(location: Location, message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Index, location, message)
    }

    pub fn io(location: Location, message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Io, location, message)
    }

    pub fn os(location: Location, message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Os, location, message)
    }

    pub fn eof(location: Location, message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Eof, location, message)
    }

    /// Whether a `try` block may catch this error. Only `Parsing` errors are
    /// excluded (spec §4.3.7, §7.3).
    pub fn is_catchable(&self) -> bool {
        self.kind != ErrorKind::Parsing
    }

    /// The value a user `catch(e)` binds `e` to: the thrown value verbatim
    /// for a script `throw`, or the materialized error object otherwise
    /// (spec §4.3.7).
    pub fn caught_value(&self) -> Value {
        match &self.thrown {
            Some(v) => v.clone(),
            None => self.to_catch_object(),
        }
    }

    /// Materializes this error into the object shape a user `catch` binds:
    /// `{ type, index, line, column, message }` (spec §4.3.7).
    pub fn to_catch_object(&self) -> Value {
        let object = crate::value::Object::new();
        {
            let mut map = object.borrow_mut();
            map.insert("type".to_string(), Value::String(self.kind.name().to_string()));
            map.insert("index".to_string(), Value::int(self.location.index as i64));
            map.insert("line".to_string(), Value::int(self.location.line as i64));
            map.insert("column".to_string(), Value::int(self.location.column as i64));
            map.insert("message".to_string(), Value::String(self.message.clone()));
        }
        Value::Object(object)
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(
            f, "({}:{}) ({}) {}",
            self.location.line, self.location.column, self.kind.name(), self.message
        )
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_fmt() {
        let err = Error::type_error(Location::new(0, 3, 7), "bad operand");
        assert_eq!(format!("{}", err), "(3:7) (TypeError) bad operand");
    }

    #[test]
    fn parsing_not_catchable() {
        assert!(!Error::parsing(Location::START, "oops").is_catchable());
        assert!(Error::runtime(Location::START, "oops").is_catchable());
    }
}
