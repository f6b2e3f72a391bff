// This file is part of minlang, an embeddable scripting language.
// Copyright (c) 2024 The minlang Authors
//
// Licensed under the GNU General Public License, version 3 or later.
// SPDX-License-Identifier: GPL-3.0-or-later

//! The built-in globals (spec §6.3) and the String/Array/Object member
//! tables (spec §4.3.9). `File`, `math`, and the `$stdin`/`$stdout`/`$stderr`
//! handles are out of scope (spec §1); everything else named in §6.3 is
//! implemented here as a core global, matching the teacher-adjacent
//! `std.cpp`/`corefn.cpp` split this crate follows (see `DESIGN.md`).

mod format;
pub mod array_members;
pub mod object_members;
pub mod string_members;

use std::rc::Rc;

use crate::error::{Error, Result};
use crate::location::Location;
use crate::value::{HostFunction, Number, Object, Value};

use super::Evaluator;

/// Populates a fresh global scope with every built-in (spec §6's "Create
/// interpreter → initialized with a fresh global scope pre-populated with
/// built-ins").
pub fn install(global: &Object) {
    register(global, "print", print);
    register(global, "println", println_fn);
    register(global, "printf", printf);
    register(global, "sprintf", sprintf);
    register(global, "min", min);
    register(global, "max", max);
    register(global, "typeOf", type_of);
    register(global, "eval", eval_fn);
    register(global, "load", load);
}

fn register(global: &Object, name: &'static str, func: fn(&mut Evaluator, Location, &[Value]) -> Result<Value>) {
    global.set(name, Value::HostFunction(Rc::new(HostFunction { name, func: Rc::new(func) })));
}

fn print(evaluator: &mut Evaluator, _loc: Location, args: &[Value]) -> Result<Value> {
    for arg in args {
        evaluator.print(&arg.display_repr());
    }
    Ok(Value::Null)
}

fn println_fn(evaluator: &mut Evaluator, loc: Location, args: &[Value]) -> Result<Value> {
    print(evaluator, loc, args)?;
    evaluator.print("\n");
    Ok(Value::Null)
}

fn printf(evaluator: &mut Evaluator, loc: Location, args: &[Value]) -> Result<Value> {
    let text = sprintf_text(args, loc)?;
    evaluator.print(&text);
    Ok(Value::Null)
}

fn sprintf(_evaluator: &mut Evaluator, loc: Location, args: &[Value]) -> Result<Value> {
    Ok(Value::String(sprintf_text(args, loc)?))
}

fn sprintf_text(args: &[Value], loc: Location) -> Result<String> {
    let [fmt, rest @ ..] = args else {
        return Err(Error::argument(loc, "sprintf/printf requires a format string argument"));
    };
    let Value::String(fmt) = fmt else {
        return Err(Error::type_error(loc, "sprintf/printf's first argument must be a String"));
    };
    format::format(fmt, rest, loc)
}

/// Seeds its accumulator from `args[0]`, not a constant `0.0`, so an
/// all-negative argument list still compares correctly (spec §9).
fn min(_evaluator: &mut Evaluator, loc: Location, args: &[Value]) -> Result<Value> {
    reduce(args, loc, "min", |acc, n| n.value < acc.value)
}

fn max(_evaluator: &mut Evaluator, loc: Location, args: &[Value]) -> Result<Value> {
    reduce(args, loc, "max", |acc, n| n.value > acc.value)
}

fn reduce(args: &[Value], loc: Location, name: &str, better: impl Fn(Number, Number) -> bool) -> Result<Value> {
    let [first, rest @ ..] = args else {
        return Err(Error::argument(loc, format!("{}() requires at least one Number argument", name)));
    };
    let Value::Number(mut acc) = first else {
        return Err(Error::type_error(loc, format!("{}() requires Number arguments", name)));
    };
    for arg in rest {
        let Value::Number(n) = arg else {
            return Err(Error::type_error(loc, format!("{}() requires Number arguments", name)));
        };
        if better(acc, *n) {
            acc = *n;
        }
    }
    Ok(Value::Number(acc))
}

fn type_of(_evaluator: &mut Evaluator, _loc: Location, args: &[Value]) -> Result<Value> {
    let value = args.first().unwrap_or(&Value::Null);
    Ok(Value::Type(value.kind()))
}

/// Runs `src` in a fresh local scope nested in the current global/`this`
/// context, so an `eval`'d script sees the caller's globals but not its
/// local variables (spec §6.3; scope choice documented in `DESIGN.md`).
fn eval_fn(evaluator: &mut Evaluator, loc: Location, args: &[Value]) -> Result<Value> {
    let [Value::String(src)] = args else { return Err(Error::argument(loc, "eval(s) requires one String argument")) };
    run_nested(evaluator, src)
}

fn load(evaluator: &mut Evaluator, loc: Location, args: &[Value]) -> Result<Value> {
    let [Value::String(path)] = args else { return Err(Error::argument(loc, "load(path) requires one String argument")) };
    let src = std::fs::read_to_string(path).map_err(|e| Error::io(loc, format!("load(\"{}\"): {}", path, e)))?;
    run_nested(evaluator, &src)
}

fn run_nested(evaluator: &mut Evaluator, src: &str) -> Result<Value> {
    let script = crate::parser::parse(src)?;
    evaluator.push_scope(Object::new(), super::ThisValue::None)?;
    let result = evaluator.exec_block(&script.body);
    evaluator.pop_scope();
    match result? {
        super::ControlFlow::Return(v) => Ok(v),
        super::ControlFlow::Normal => Ok(Value::Null),
        super::ControlFlow::Break | super::ControlFlow::Continue => {
            Err(Error::runtime(Location::START, "'break'/'continue' used outside a loop"))
        }
    }
}
