// This file is part of minlang, an embeddable scripting language.
// Copyright (c) 2024 The minlang Authors
//
// Licensed under the GNU General Public License, version 3 or later.
// SPDX-License-Identifier: GPL-3.0-or-later

//! The dynamic value taxonomy (spec §3).
//!
//! `Value` is a closed tagged union over ten kinds, not the open,
//! trait-object-based `Value` the teacher repo uses for its own (extensible,
//! architecture-specific) literal kinds — this language's value set is fixed
//! by the grammar, so a plain `enum` is the right shape here.

mod array;
mod number;
mod object;

pub use array::Array;
pub use number::Number;
pub use object::Object;

use std::fmt::{self, Display, Formatter};
use std::rc::Rc;

use crate::parser::ast::FunctionDef;

/// A native function registered on the global scope (spec §3, §4.3.5).
pub type HostFn = Rc<dyn Fn(&mut crate::eval::Evaluator, crate::location::Location, &[Value]) -> crate::error::Result<Value>>;

/// A native method bound to a receiver kind (String/Array/Object), invoked
/// with an explicit receiver (spec §4.3.9).
pub type MethodFn = Rc<dyn Fn(&mut crate::eval::Evaluator, crate::location::Location, &Value, &[Value]) -> crate::error::Result<Value>>;

/// A native nullary property accessor (spec §4.3.9).
pub type PropertyFn = Rc<dyn Fn(&mut crate::eval::Evaluator, crate::location::Location, &Value) -> crate::error::Result<Value>>;

/// The kind tag of a [`Value`]. Also the payload of a `Type` value
/// (spec §3's Value table, last row).
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Kind {
    Null,
    Number,
    String,
    Function,
    HostFunction,
    MemberMethod,
    MemberProperty,
    Object,
    Array,
    Type,
}

impl Kind {
    /// The name the language uses for this kind, e.g. in `typeOf()` results
    /// and diagnostic messages.
    pub fn name(self) -> &'static str {
        use Kind::*;
        match self {
            Null           => "Null",
            Number         => "Number",
            String         => "String",
            Function       => "Function",
            HostFunction   => "HostFunction",
            MemberMethod   => "MemberMethod",
            MemberProperty => "MemberProperty",
            Object         => "Object",
            Array          => "Array",
            Type           => "Type",
        }
    }

    /// The subset of kinds nameable as bare type-constructor identifiers in
    /// script source (spec §4.3.2 step 4, §4.4). `HostFunction`,
    /// `MemberMethod`, and `MemberProperty` have no source-level identifier;
    /// they can only be observed via `typeOf`.
    pub fn from_type_keyword(name: &str) -> Option<Kind> {
        use Kind::*;
        Some(match name {
            "Null"     => Null,
            "Number"   => Number,
            "String"   => String,
            "Function" => Function,
            "Object"   => Object,
            "Array"    => Array,
            "Type"     => Type,
            _          => return None,
        })
    }
}

/// A bound native method value, produced by member access on a String/Array
/// built-in (spec §4.3.9). Carries the receiver it was bound to so that
/// calling it later needs no separate receiver lookup.
#[derive(Clone)]
pub struct BoundMethod {
    pub name: &'static str,
    pub receiver: Box<Value>,
    pub func: MethodFn,
}

/// A native, unbound property accessor, invoked immediately when accessed
/// (spec §4.3.9) rather than producing a callable value.
#[derive(Clone)]
pub struct HostFunction {
    pub name: &'static str,
    pub func: HostFn,
}

/// The dynamic value taxonomy (spec §3).
#[derive(Clone)]
pub enum Value {
    Null,
    Number(Number),
    String(String),
    Function(Rc<FunctionDef>),
    HostFunction(Rc<HostFunction>),
    MemberMethod(Rc<BoundMethod>),
    MemberProperty(PropertyFn, Box<Value>),
    Object(Object),
    Array(Array),
    Type(Kind),
}

impl Value {
    pub fn int(n: i64) -> Value {
        Value::Number(Number::int(n))
    }

    pub fn float(n: f64) -> Value {
        Value::Number(Number::float(n))
    }

    pub fn kind(&self) -> Kind {
        match self {
            Value::Null              => Kind::Null,
            Value::Number(_)         => Kind::Number,
            Value::String(_)         => Kind::String,
            Value::Function(_)       => Kind::Function,
            Value::HostFunction(_)   => Kind::HostFunction,
            Value::MemberMethod(_)   => Kind::MemberMethod,
            Value::MemberProperty(..)=> Kind::MemberProperty,
            Value::Object(_)         => Kind::Object,
            Value::Array(_)          => Kind::Array,
            Value::Type(_)           => Kind::Type,
        }
    }

    /// Truthiness (spec §3's Value table, "Truthy" column).
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Null                => false,
            Value::Number(n)           => n.value != 0.0,
            Value::String(s)           => !s.is_empty(),
            Value::Function(_)         => true,
            Value::HostFunction(_)     => true,
            Value::MemberMethod(_)     => true,
            Value::MemberProperty(..)  => true,
            Value::Object(_)           => true,
            Value::Array(_)            => true,
            Value::Type(k)             => *k != Kind::Null,
        }
    }

    /// Value equality, per spec §3's Value table "Equality" column: same-kind
    /// comparison; `==` never holds across kinds.
    pub fn eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Number(a), Value::Number(b)) => a.value == b.value,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Function(a), Value::Function(b)) => Rc::ptr_eq(a, b),
            (Value::HostFunction(a), Value::HostFunction(b)) => Rc::ptr_eq(a, b),
            (Value::MemberMethod(a), Value::MemberMethod(b)) => Rc::ptr_eq(a, b),
            (Value::MemberProperty(a, _), Value::MemberProperty(b, _)) => Rc::ptr_eq(a, b),
            (Value::Object(a), Value::Object(b)) => Object::ptr_eq(a, b),
            (Value::Array(a), Value::Array(b)) => Array::ptr_eq(a, b),
            (Value::Type(a), Value::Type(b)) => a == b,
            _ => false,
        }
    }

    /// The `%v` repr used by `print`/`println`/default `%v` formatting: no
    /// quoting of strings, human-oriented.
    pub fn display_repr(&self) -> String {
        match self {
            Value::Null => "null".to_string(),
            Value::Number(n) => n.to_string(),
            Value::String(s) => s.clone(),
            Value::Function(_) => "function".to_string(),
            Value::HostFunction(f) => format!("function {}", f.name),
            Value::MemberMethod(m) => format!("function {}", m.name),
            Value::MemberProperty(..) => "property".to_string(),
            Value::Object(o) => o.display_repr(),
            Value::Array(a) => a.display_repr(),
            Value::Type(k) => k.name().to_string(),
        }
    }

    /// The `%p` repr used by `printf`/`sprintf`'s `%p` directive: a
    /// source-like, quoted representation.
    pub fn debug_repr(&self) -> String {
        match self {
            Value::String(s) => format!("{:?}", s),
            other => other.display_repr(),
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.write_str(&self.display_repr())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truthiness() {
        assert!(!Value::Null.is_truthy());
        assert!(!Value::int(0).is_truthy());
        assert!(Value::int(1).is_truthy());
        assert!(!Value::String(String::new()).is_truthy());
        assert!(Value::String("x".into()).is_truthy());
    }

    #[test]
    fn cross_kind_equality_is_false() {
        assert!(!Value::int(0).eq(&Value::Null));
        assert!(!Value::String("0".into()).eq(&Value::int(0)));
    }
}
