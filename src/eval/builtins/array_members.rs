// This file is part of minlang, an embeddable scripting language.
// Copyright (c) 2024 The minlang Authors
//
// Licensed under the GNU General Public License, version 3 or later.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Array property/method dispatch (spec §4.3.9).

use std::rc::Rc;

use crate::error::{Error, Result};
use crate::eval::Evaluator;
use crate::location::Location;
use crate::value::{Array, BoundMethod, Value};

pub fn get(receiver: &Value, name: &str, loc: Location) -> Result<Value> {
    let Value::Array(arr) = receiver else { unreachable!("array_members::get called on a non-Array") };
    match name {
        "count" | "length" => Ok(Value::int(arr.len() as i64)),
        "push" | "add" => bind(receiver, "push", Rc::new(push)),
        "pop" => bind(receiver, "pop", Rc::new(pop)),
        "insert" => bind(receiver, "insert", Rc::new(insert)),
        "remove" => bind(receiver, "remove", Rc::new(remove)),
        "each" => bind(receiver, "each", Rc::new(each)),
        "map" => bind(receiver, "map", Rc::new(map)),
        _ => Err(Error::type_error(loc, format!("Array has no member '{}'", name))),
    }
}

fn bind(receiver: &Value, name: &'static str, func: crate::value::MethodFn) -> Result<Value> {
    Ok(Value::MemberMethod(Rc::new(BoundMethod { name, receiver: Box::new(receiver.clone()), func })))
}

fn this_array(receiver: &Value) -> &Array {
    let Value::Array(arr) = receiver else { unreachable!() };
    arr
}

fn push(_: &mut Evaluator, _loc: Location, receiver: &Value, args: &[Value]) -> Result<Value> {
    let arr = this_array(receiver);
    for arg in args {
        arr.push(arg.clone());
    }
    Ok(receiver.clone())
}

fn pop(_: &mut Evaluator, loc: Location, receiver: &Value, args: &[Value]) -> Result<Value> {
    if !args.is_empty() {
        return Err(Error::argument(loc, "pop() takes no arguments"));
    }
    this_array(receiver).pop().ok_or_else(|| Error::index(loc, "pop() on an empty array"))
}

fn insert(_: &mut Evaluator, loc: Location, receiver: &Value, args: &[Value]) -> Result<Value> {
    let arr = this_array(receiver);
    let [Value::Number(i), value] = args else { return Err(Error::argument(loc, "insert(i, x) requires an index and a value")) };
    let index = i.as_i64();
    let mut items = arr.borrow_mut();
    if index < 0 || index as usize > items.len() {
        return Err(Error::index(loc, "insert(i, x): index out of bounds"));
    }
    items.insert(index as usize, value.clone());
    Ok(Value::Null)
}

fn remove(_: &mut Evaluator, loc: Location, receiver: &Value, args: &[Value]) -> Result<Value> {
    let arr = this_array(receiver);
    let [Value::Number(i)] = args else { return Err(Error::argument(loc, "remove(i) requires one Number argument")) };
    let index = i.as_i64();
    let mut items = arr.borrow_mut();
    if index < 0 || index as usize >= items.len() {
        return Err(Error::index(loc, "remove(i): index out of bounds"));
    }
    Ok(items.remove(index as usize))
}

fn each(evaluator: &mut Evaluator, loc: Location, receiver: &Value, args: &[Value]) -> Result<Value> {
    let [callback] = args else { return Err(Error::argument(loc, "each(f) requires one Function argument")) };
    let callback = callback.clone();
    let items: Vec<Value> = this_array(receiver).borrow().clone();
    for item in items {
        evaluator.call(loc, callback.clone(), None, vec![item])?;
    }
    Ok(receiver.clone())
}

fn map(evaluator: &mut Evaluator, loc: Location, receiver: &Value, args: &[Value]) -> Result<Value> {
    let [callback] = args else { return Err(Error::argument(loc, "map(f) requires one Function argument")) };
    let callback = callback.clone();
    let items: Vec<Value> = this_array(receiver).borrow().clone();
    let mut mapped = Vec::with_capacity(items.len());
    for item in items {
        mapped.push(evaluator.call(loc, callback.clone(), None, vec![item])?);
    }
    Ok(Value::Array(Array::from_vec(mapped)))
}
