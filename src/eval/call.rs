// This file is part of minlang, an embeddable scripting language.
// Copyright (c) 2024 The minlang Authors
//
// Licensed under the GNU General Public License, version 3 or later.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Call dispatch over the callable value kinds (spec §4.3.5).

use crate::error::{Error, Result};
use crate::location::Location;
use crate::value::Value;

use super::control::ControlFlow;
use super::{Evaluator, ThisValue};

impl Evaluator {
    /// Dispatches a call by the callee's kind. `receiver` is the value the
    /// callee was obtained from (`this.x`, `obj.x`, `arr[i]`), used to bind
    /// a Function's `this` and to supply a MemberMethod/MemberProperty's
    /// receiver argument.
    pub(super) fn call(&mut self, loc: Location, callee: Value, receiver: Option<Value>, args: Vec<Value>) -> Result<Value> {
        match callee {
            Value::Function(def) => self.call_function(&def, receiver, args, loc),
            Value::HostFunction(host) => (host.func)(self, loc, &args),
            Value::MemberMethod(bound) => (bound.func)(self, loc, &bound.receiver, &args),
            Value::MemberProperty(accessor, on) => (accessor)(self, loc, &on),
            Value::Type(kind) => self.construct(kind, args, loc),
            Value::Object(obj) => {
                let init = obj.get("__init__");
                if matches!(init, Value::Function(_)) {
                    self.call(loc, init, Some(Value::Object(obj)), args)
                } else {
                    Err(Error::runtime(loc, "object is not callable (no '__init__' function member)"))
                }
            }
            other => Err(Error::runtime(loc, format!("value of type {} is not callable", other.kind().name()))),
        }
    }

    fn call_function(
        &mut self,
        def: &crate::parser::ast::FunctionDef,
        receiver: Option<Value>,
        args: Vec<Value>,
        loc: Location,
    ) -> Result<Value> {
        if args.len() != def.params.len() {
            return Err(Error::argument(
                loc,
                format!("function expected {} argument(s), got {}", def.params.len(), args.len()),
            ));
        }

        let scope = crate::value::Object::new();
        for (param, arg) in def.params.iter().zip(args) {
            scope.set(param, arg);
        }
        let this = match receiver {
            Some(Value::Object(o)) => ThisValue::Object(o),
            Some(Value::Array(a)) => ThisValue::Array(a),
            Some(Value::String(s)) => ThisValue::String(s),
            _ => ThisValue::None,
        };

        self.push_scope(scope, this)?;
        let result = self.exec_block(&def.body);
        self.pop_scope();

        match result? {
            ControlFlow::Return(value) => Ok(value),
            ControlFlow::Normal => Ok(Value::Null),
            ControlFlow::Break | ControlFlow::Continue => {
                Err(Error::runtime(def.location, "'break'/'continue' escaped a function body"))
            }
        }
    }

    /// Type-value constructors (spec §4.4).
    fn construct(&mut self, kind: crate::value::Kind, args: Vec<Value>, loc: Location) -> Result<Value> {
        use crate::value::{Array, Kind, Object};
        match kind {
            Kind::Null => match args.as_slice() {
                [] | [Value::Null] => Ok(Value::Null),
                _ => Err(Error::argument(loc, "Null() accepts no argument but Null")),
            },
            Kind::Number => match args.as_slice() {
                [Value::Number(n)] => Ok(Value::Number(*n)),
                _ => Err(Error::argument(loc, "Number(n) requires one Number argument")),
            },
            Kind::String => match args.as_slice() {
                [] => Ok(Value::String(String::new())),
                [Value::String(s)] => Ok(Value::String(s.clone())),
                _ => Err(Error::argument(loc, "String(s) requires zero or one String argument")),
            },
            Kind::Object => match args.as_slice() {
                [] => Ok(Value::Object(Object::new())),
                [Value::Object(o)] => Ok(Value::Object(o.shallow_copy())),
                _ => Err(Error::argument(loc, "Object(o) requires zero or one Object argument")),
            },
            Kind::Array => match args.as_slice() {
                [] => Ok(Value::Array(Array::new())),
                [Value::Array(a)] => Ok(Value::Array(a.shallow_copy())),
                _ => Err(Error::argument(loc, "Array(a) requires zero or one Array argument")),
            },
            Kind::Function => match args.as_slice() {
                [f @ Value::Function(_)] | [f @ Value::MemberMethod(_)] => Ok(f.clone()),
                _ => Err(Error::argument(loc, "Function(f) requires a Function or MemberMethod argument")),
            },
            Kind::Type => match args.as_slice() {
                [t @ Value::Type(_)] => Ok(t.clone()),
                _ => Err(Error::argument(loc, "Type(t) requires a Type argument")),
            },
            Kind::HostFunction | Kind::MemberMethod | Kind::MemberProperty => {
                Err(Error::runtime(loc, format!("{} has no constructor", kind.name())))
            }
        }
    }
}
