// This file is part of minlang, an embeddable scripting language.
// Copyright (c) 2024 The minlang Authors
//
// Licensed under the GNU General Public License, version 3 or later.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Object built-in properties (spec §4.3.9). An object's own members
//! always shadow these; see [`crate::eval::Evaluator::member_get`].

use crate::value::{Object, Value};

/// Returns `None` when `name` names no built-in property; member access on
/// an Object is null-on-miss, never an error (spec §4.3.4), so the caller
/// falls back to `Value::Null` rather than propagating an error here.
pub fn get(obj: &Object, name: &str) -> Option<Value> {
    match name {
        "count" => Some(Value::int(obj.len() as i64)),
        _ => None,
    }
}
