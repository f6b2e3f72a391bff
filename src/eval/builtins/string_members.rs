// This file is part of minlang, an embeddable scripting language.
// Copyright (c) 2024 The minlang Authors
//
// Licensed under the GNU General Public License, version 3 or later.
// SPDX-License-Identifier: GPL-3.0-or-later

//! String property/method dispatch (spec §4.3.9).

use std::rc::Rc;

use crate::error::{Error, Result};
use crate::location::Location;
use crate::value::{Array, BoundMethod, Number, Value};

/// Looks up `name` on a String value: nullary properties resolve
/// immediately; methods come back as a bound callable.
pub fn get(receiver: &Value, name: &str, loc: Location) -> Result<Value> {
    let Value::String(s) = receiver else { unreachable!("string_members::get called on a non-String") };
    match name {
        "count" | "length" | "size" => Ok(Value::int(s.len() as i64)),
        "chars" => Ok(Value::Array(Array::from_vec(s.bytes().map(|b| Value::int(b as i64)).collect()))),
        "strip" => Ok(Value::String(s.trim().to_string())),
        "lstrip" => Ok(Value::String(s.trim_start().to_string())),
        "rstrip" => Ok(Value::String(s.trim_end().to_string())),
        "startsWith" => bind(receiver, "startsWith", Rc::new(starts_with)),
        "endsWith" => bind(receiver, "endsWith", Rc::new(ends_with)),
        "resize" => bind(receiver, "resize", Rc::new(resize)),
        _ => Err(Error::type_error(loc, format!("String has no member '{}'", name))),
    }
}

fn bind(receiver: &Value, name: &'static str, func: crate::value::MethodFn) -> Result<Value> {
    Ok(Value::MemberMethod(Rc::new(BoundMethod { name, receiver: Box::new(receiver.clone()), func })))
}

fn starts_with(_: &mut crate::eval::Evaluator, loc: Location, receiver: &Value, args: &[Value]) -> Result<Value> {
    let Value::String(s) = receiver else { unreachable!() };
    let [Value::String(prefix)] = args else { return Err(Error::argument(loc, "startsWith(s) requires one String argument")) };
    Ok(Value::int(s.starts_with(prefix.as_str()) as i64))
}

fn ends_with(_: &mut crate::eval::Evaluator, loc: Location, receiver: &Value, args: &[Value]) -> Result<Value> {
    let Value::String(s) = receiver else { unreachable!() };
    let [Value::String(suffix)] = args else { return Err(Error::argument(loc, "endsWith(s) requires one String argument")) };
    Ok(Value::int(s.ends_with(suffix.as_str()) as i64))
}

/// Truncates or pads (with NUL bytes) to exactly `n` bytes. Returns the
/// resized copy rather than mutating in place — a plain `Value::String`
/// has no shared identity for the mutation to be visible through.
fn resize(_: &mut crate::eval::Evaluator, loc: Location, receiver: &Value, args: &[Value]) -> Result<Value> {
    let Value::String(s) = receiver else { unreachable!() };
    let [Value::Number(n)] = args else { return Err(Error::argument(loc, "resize(n) requires one Number argument")) };
    let n: Number = *n;
    if !n.is_int || n.value < 0.0 {
        return Err(Error::argument(loc, "resize(n) requires a non-negative integer"));
    }
    let target = n.as_i64() as usize;
    let mut bytes = s.clone().into_bytes();
    if target <= bytes.len() {
        bytes.truncate(target);
    } else {
        bytes.resize(target, 0);
    }
    let resized = String::from_utf8(bytes).map_err(|_| Error::type_error(loc, "resize(n) split a multi-byte character"))?;
    Ok(Value::String(resized))
}
