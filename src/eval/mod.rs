// This file is part of minlang, an embeddable scripting language.
// Copyright (c) 2024 The minlang Authors
//
// Licensed under the GNU General Public License, version 3 or later.
// SPDX-License-Identifier: GPL-3.0-or-later

//! The tree-walking evaluator (spec §4.3): scope stack, `this` stack,
//! l-value derivation, operator application, call dispatch, and the
//! non-local control-flow protocol.

pub mod builtins;
mod call;
mod control;
mod lvalue;
mod ops;

use crate::error::{Error, Result};
use crate::location::Location;
use crate::parser::ast::*;
use crate::value::{Array, Kind, Number, Object, Value};

pub use control::ControlFlow;
use lvalue::LValue;

/// What `this` is bound to in the current call frame (spec §4.3.1).
#[derive(Clone)]
pub enum ThisValue {
    None,
    Object(Object),
    Array(Array),
    String(String),
}

impl ThisValue {
    fn as_value(&self) -> Value {
        match self {
            ThisValue::None => Value::Null,
            ThisValue::Object(o) => Value::Object(o.clone()),
            ThisValue::Array(a) => Value::Array(a.clone()),
            ThisValue::String(s) => Value::String(s.clone()),
        }
    }
}

/// The evaluator: owns the global scope, the local-scope stack, the `this`
/// stack, and the sink `print`/`println`/`printf` write through (spec
/// §4.3.1, §6's `set_print_sink`).
pub struct Evaluator {
    global: Object,
    locals: Vec<Object>,
    this_stack: Vec<ThisValue>,
    max_stack_depth: usize,
    print_sink: Box<dyn FnMut(&str)>,
}

impl Evaluator {
    pub fn new() -> Self {
        let global = Object::new();
        builtins::install(&global);
        Self {
            global,
            locals: Vec::new(),
            this_stack: Vec::new(),
            max_stack_depth: 100,
            print_sink: Box::new(|s| print!("{}", s)),
        }
    }

    pub fn set_print_sink(&mut self, sink: impl FnMut(&str) + 'static) {
        self.print_sink = Box::new(sink);
    }

    pub fn print(&mut self, text: &str) {
        (self.print_sink)(text);
    }

    pub fn set_global(&self, name: &str, value: Value) {
        self.global.set(name, value);
    }

    pub fn get_global(&self, name: &str) -> Value {
        self.global.get(name)
    }

    pub fn get_type_name(&self, kind: Kind) -> &'static str {
        kind.name()
    }

    /// Parses and runs `source` as a complete script, returning the value a
    /// top-level `return` yielded, or `Null` if it ran off the end (spec
    /// §4.3.6, §6).
    pub fn execute(&mut self, source: &str) -> Result<Value> {
        self.execute_named(source, "<script>")
    }

    /// As [`Evaluator::execute`]; `filename` is reserved for a future
    /// multi-script host (spec §6.1) and is not yet woven into diagnostics,
    /// since a single [`Evaluator`] only ever runs one script at a time
    /// today.
    pub fn execute_named(&mut self, source: &str, _filename: &str) -> Result<Value> {
        let script = crate::parser::parse(source)?;
        match self.exec_block(&script.body)? {
            ControlFlow::Return(v) => Ok(v),
            ControlFlow::Normal => Ok(Value::Null),
            ControlFlow::Break | ControlFlow::Continue => {
                Err(Error::runtime(Location::START, "'break'/'continue' used outside a loop"))
            }
        }
    }

    // ---- Scope stack ----

    fn push_scope(&mut self, scope: Object, this: ThisValue) -> Result<()> {
        if self.locals.len() >= self.max_stack_depth {
            return Err(Error::runtime(Location::START, "call stack overflow"));
        }
        self.locals.push(scope);
        self.this_stack.push(this);
        Ok(())
    }

    fn pop_scope(&mut self) {
        self.locals.pop();
        self.this_stack.pop();
    }

    fn innermost_scope(&self) -> Option<&Object> {
        self.locals.last()
    }

    fn current_this(&self) -> ThisValue {
        self.this_stack.last().cloned().unwrap_or(ThisValue::None)
    }

    // ---- Statements ----

    fn exec_block(&mut self, block: &Block) -> Result<ControlFlow> {
        for stmt in block {
            let cf = self.exec_stmt(stmt)?;
            if !matches!(cf, ControlFlow::Normal) {
                return Ok(cf);
            }
        }
        Ok(ControlFlow::Normal)
    }

    fn exec_stmt(&mut self, stmt: &Stmt) -> Result<ControlFlow> {
        match &stmt.kind {
            StmtKind::Empty => Ok(ControlFlow::Normal),
            StmtKind::Block(block) => self.exec_block(block),
            StmtKind::Expr(expr) => {
                self.eval_expr(expr)?;
                Ok(ControlFlow::Normal)
            }
            StmtKind::If { cond, then_branch, else_branch } => {
                if self.eval_expr(cond)?.is_truthy() {
                    self.exec_stmt(then_branch)
                } else if let Some(else_branch) = else_branch {
                    self.exec_stmt(else_branch)
                } else {
                    Ok(ControlFlow::Normal)
                }
            }
            StmtKind::While { cond, body } => self.exec_while(cond, body),
            StmtKind::DoWhile { body, cond } => self.exec_do_while(body, cond),
            StmtKind::ForC { init, cond, step, body } => self.exec_for_c(init, cond, step, body),
            StmtKind::ForRange { key, value, iterable, body } => self.exec_for_range(key, value, iterable, body),
            StmtKind::Break => Ok(ControlFlow::Break),
            StmtKind::Continue => Ok(ControlFlow::Continue),
            StmtKind::Return(expr) => {
                let value = match expr {
                    Some(e) => self.eval_expr(e)?,
                    None => Value::Null,
                };
                Ok(ControlFlow::Return(value))
            }
            StmtKind::Throw(expr) => {
                let value = self.eval_expr(expr)?;
                Err(Error::thrown(stmt.location, value))
            }
            StmtKind::Switch { subject, cases } => self.exec_switch(subject, cases),
            StmtKind::Try { body, catch, finally } => {
                self.exec_try(body, catch.as_ref().map(|(n, s)| (n.as_str(), s.as_ref())), finally.as_deref())
            }
        }
    }

    fn exec_while(&mut self, cond: &Expr, body: &Stmt) -> Result<ControlFlow> {
        while self.eval_expr(cond)?.is_truthy() {
            match self.exec_stmt(body)? {
                ControlFlow::Break => break,
                ControlFlow::Continue | ControlFlow::Normal => {}
                ret @ ControlFlow::Return(_) => return Ok(ret),
            }
        }
        Ok(ControlFlow::Normal)
    }

    fn exec_do_while(&mut self, body: &Stmt, cond: &Expr) -> Result<ControlFlow> {
        loop {
            match self.exec_stmt(body)? {
                ControlFlow::Break => break,
                ControlFlow::Continue | ControlFlow::Normal => {}
                ret @ ControlFlow::Return(_) => return Ok(ret),
            }
            if !self.eval_expr(cond)?.is_truthy() {
                break;
            }
        }
        Ok(ControlFlow::Normal)
    }

    fn exec_for_c(&mut self, init: &Option<Expr>, cond: &Option<Expr>, step: &Option<Expr>, body: &Stmt) -> Result<ControlFlow> {
        if let Some(init) = init {
            self.eval_expr(init)?;
        }
        loop {
            if let Some(cond) = cond {
                if !self.eval_expr(cond)?.is_truthy() {
                    break;
                }
            }
            match self.exec_stmt(body)? {
                ControlFlow::Break => break,
                ControlFlow::Continue | ControlFlow::Normal => {}
                ret @ ControlFlow::Return(_) => return Ok(ret),
            }
            if let Some(step) = step {
                self.eval_expr(step)?;
            }
        }
        Ok(ControlFlow::Normal)
    }

    fn exec_for_range(&mut self, key: &str, value: &Option<String>, iterable: &Expr, body: &Stmt) -> Result<ControlFlow> {
        let subject = self.eval_expr(iterable)?;
        let scope = self.innermost_scope().cloned().unwrap_or_else(|| self.global.clone());
        macro_rules! set_kv {
            ($k:expr, $v:expr) => {{
                scope.set(key, $k);
                if let Some(value_name) = value {
                    scope.set(value_name, $v);
                }
            }};
        }
        let result = match &subject {
            Value::String(s) => {
                let mut result = Ok(ControlFlow::Normal);
                for (i, byte) in s.bytes().enumerate() {
                    set_kv!(Value::int(i as i64), Value::String((byte as char).to_string()));
                    match self.exec_stmt(body)? {
                        ControlFlow::Break => break,
                        ControlFlow::Continue | ControlFlow::Normal => {}
                        ret @ ControlFlow::Return(_) => {
                            result = Ok(ret);
                            break;
                        }
                    }
                }
                result
            }
            Value::Array(arr) => {
                let mut result = Ok(ControlFlow::Normal);
                let len = arr.len();
                for i in 0..len {
                    let Some(item) = arr.get(i) else { break };
                    set_kv!(Value::int(i as i64), item);
                    match self.exec_stmt(body)? {
                        ControlFlow::Break => break,
                        ControlFlow::Continue | ControlFlow::Normal => {}
                        ret @ ControlFlow::Return(_) => {
                            result = Ok(ret);
                            break;
                        }
                    }
                }
                result
            }
            Value::Object(obj) => {
                let keys: Vec<String> = obj.borrow().keys().cloned().collect();
                let mut result = Ok(ControlFlow::Normal);
                for k in keys {
                    let v = obj.get(&k);
                    set_kv!(Value::String(k), v);
                    match self.exec_stmt(body)? {
                        ControlFlow::Break => break,
                        ControlFlow::Continue | ControlFlow::Normal => {}
                        ret @ ControlFlow::Return(_) => {
                            result = Ok(ret);
                            break;
                        }
                    }
                }
                result
            }
            _ => Err(Error::type_error(iterable.location, "'for (k,v : x)' requires a String, Array, or Object")),
        };
        scope.set(key, Value::Null);
        if let Some(value_name) = value {
            scope.set(value_name, Value::Null);
        }
        result
    }

    fn exec_switch(&mut self, subject: &Expr, cases: &[SwitchCase]) -> Result<ControlFlow> {
        let subject_value = self.eval_expr(subject)?;
        let mut matched = false;
        let mut default_index = None;
        for (i, case) in cases.iter().enumerate() {
            match &case.label {
                Some(label) => {
                    if !matched && self.eval_expr(label)?.eq(&subject_value) {
                        matched = true;
                    }
                }
                None => default_index = Some(i),
            }
            if matched {
                match self.exec_block(&case.body)? {
                    ControlFlow::Break => return Ok(ControlFlow::Normal),
                    ControlFlow::Normal => {}
                    other => return Ok(other),
                }
            }
        }
        if !matched {
            if let Some(start) = default_index {
                for case in &cases[start..] {
                    match self.exec_block(&case.body)? {
                        ControlFlow::Break => return Ok(ControlFlow::Normal),
                        ControlFlow::Normal => {}
                        other => return Ok(other),
                    }
                }
            }
        }
        Ok(ControlFlow::Normal)
    }

    // ---- Expressions ----

    fn eval_expr(&mut self, expr: &Expr) -> Result<Value> {
        match &expr.kind {
            ExprKind::Null => Ok(Value::Null),
            ExprKind::Bool(b) => Ok(Value::int(*b as i64)),
            ExprKind::Number(n) => Ok(Value::Number(*n)),
            ExprKind::String(s) => Ok(Value::String(s.clone())),
            ExprKind::This => {
                // "use of 'this' not possible in this context" (spec §7):
                // `this` is only valid inside a call frame, and only when
                // that frame's `this` is bound to an Object.
                let is_local = self.innermost_scope().is_some();
                match self.current_this() {
                    ThisValue::Object(o) if is_local => Ok(Value::Object(o)),
                    _ => Err(Error::runtime(expr.location, "use of 'this' not possible in this context")),
                }
            }
            ExprKind::Identifier { name, scope } => Ok(self.resolve_identifier(name, *scope, expr.location)?.0),
            ExprKind::Object(fields) => {
                let object = Object::new();
                for (key, value_expr) in fields {
                    let value = self.eval_expr(value_expr)?;
                    if key == "base" {
                        if let Value::Object(base) = &value {
                            for (k, v) in base.borrow().iter() {
                                object.set(k, v.clone());
                            }
                            continue;
                        }
                    }
                    object.set(key, value);
                }
                Ok(Value::Object(object))
            }
            ExprKind::Array(items) => {
                let mut values = Vec::with_capacity(items.len());
                for item in items {
                    values.push(self.eval_expr(item)?);
                }
                Ok(Value::Array(Array::from_vec(values)))
            }
            ExprKind::Function(def) => Ok(Value::Function(def.clone())),
            ExprKind::Unary { op, operand } => self.eval_unary(*op, operand, expr.location),
            ExprKind::Binary { op: BinaryOp::And, left, right } => {
                let l = self.eval_expr(left)?;
                if !l.is_truthy() { Ok(l) } else { self.eval_expr(right) }
            }
            ExprKind::Binary { op: BinaryOp::Or, left, right } => {
                let l = self.eval_expr(left)?;
                if l.is_truthy() { Ok(l) } else { self.eval_expr(right) }
            }
            ExprKind::Binary { op: BinaryOp::Comma, left, right } => {
                self.eval_expr(left)?;
                self.eval_expr(right)
            }
            ExprKind::Binary { op, left, right } => {
                let l = self.eval_expr(left)?;
                let r = self.eval_expr(right)?;
                ops::binary(*op, l, r, expr.location)
            }
            ExprKind::Ternary { cond, then_expr, else_expr } => {
                if self.eval_expr(cond)?.is_truthy() {
                    self.eval_expr(then_expr)
                } else {
                    self.eval_expr(else_expr)
                }
            }
            ExprKind::Assign { op, target, value } => self.eval_assign(*op, target, value, expr.location),
            ExprKind::Index { object, index } => {
                let obj = self.eval_expr(object)?;
                let idx = self.eval_expr(index)?;
                self.index_get(&obj, &idx, expr.location)
            }
            ExprKind::Member { object, name } => {
                let obj = self.eval_expr(object)?;
                self.member_get(&obj, name, expr.location)
            }
            ExprKind::Call { callee, args } => {
                let (callee_value, receiver) = self.eval_call_target(callee)?;
                let mut arg_values = Vec::with_capacity(args.len());
                for arg in args {
                    arg_values.push(self.eval_expr(arg)?);
                }
                self.call(expr.location, callee_value, receiver, arg_values)
            }
        }
    }

    fn eval_unary(&mut self, op: UnaryOp, operand: &Expr, loc: Location) -> Result<Value> {
        match op {
            UnaryOp::PreIncrement | UnaryOp::PreDecrement => {
                let lvalue = self.derive_lvalue(operand)?;
                let current = lvalue.read(loc)?;
                let delta = if op == UnaryOp::PreIncrement { 1 } else { -1 };
                let updated = ops::step(&current, delta, loc)?;
                lvalue.write(loc, updated.clone())?;
                Ok(updated)
            }
            UnaryOp::PostIncrement | UnaryOp::PostDecrement => {
                let lvalue = self.derive_lvalue(operand)?;
                let current = lvalue.read(loc)?;
                let delta = if op == UnaryOp::PostIncrement { 1 } else { -1 };
                let updated = ops::step(&current, delta, loc)?;
                lvalue.write(loc, updated)?;
                Ok(current)
            }
            _ => {
                let value = self.eval_expr(operand)?;
                ops::unary(op, value, loc)
            }
        }
    }

    fn eval_assign(&mut self, op: AssignOp, target: &Expr, value: &Expr, loc: Location) -> Result<Value> {
        // Right side evaluates first, then the l-value is derived (spec
        // §4.3.4).
        let rhs = self.eval_expr(value)?;
        let lvalue = self.derive_lvalue(target)?;
        let result = match ops::compound_binary_op(op) {
            None => rhs,
            Some(bin_op) => {
                let current = lvalue.read(loc)?;
                ops::binary(bin_op, current, rhs, loc)?
            }
        };
        lvalue.write(loc, result.clone())?;
        Ok(result)
    }

    /// Resolves an identifier, spec §4.3.2's search order. Returns whether
    /// the value was found via `this`, for the call-dispatch receiver
    /// side channel (spec §4.3.5). `local.x` outside a function body is a
    /// runtime error (spec §7: "use of ... `local.*` outside a valid
    /// context"), matching `derive_lvalue`'s behavior for `local.x = ...`.
    fn resolve_identifier(&self, name: &str, scope: ScopeTag, loc: Location) -> Result<(Value, Option<Value>)> {
        match scope {
            ScopeTag::Local => {
                let local = self
                    .innermost_scope()
                    .ok_or_else(|| Error::runtime(loc, "'local.*' used outside a function"))?;
                Ok((local.get(name), None))
            }
            ScopeTag::Global => Ok((self.global.get(name), None)),
            ScopeTag::None => {
                if let Some(local) = self.innermost_scope() {
                    if local.contains(name) {
                        return Ok((local.get(name), None));
                    }
                }
                if let ThisValue::Object(this_obj) = self.current_this() {
                    if this_obj.contains(name) {
                        return Ok((this_obj.get(name), Some(Value::Object(this_obj))));
                    }
                }
                if self.global.contains(name) {
                    return Ok((self.global.get(name), None));
                }
                if let Some(kind) = Kind::from_type_keyword(name) {
                    return Ok((Value::Type(kind), None));
                }
                Ok((Value::Null, None))
            }
        }
    }

    /// Derives a writable slot for an expression used as an assignment
    /// target (spec §4.3.3). Any other expression raises "lvalue required".
    fn derive_lvalue(&mut self, expr: &Expr) -> Result<LValue> {
        match &expr.kind {
            ExprKind::Identifier { name, scope } => {
                let scope_obj = match scope {
                    ScopeTag::Global => self.global.clone(),
                    ScopeTag::Local => self
                        .innermost_scope()
                        .cloned()
                        .ok_or_else(|| Error::runtime(expr.location, "'local.*' used outside a function"))?,
                    ScopeTag::None => self.resolve_assignment_scope(name),
                };
                Ok(LValue::Member(scope_obj, name.clone()))
            }
            ExprKind::Member { object, name } => {
                let obj = self.eval_expr(object)?;
                match obj {
                    Value::Object(o) => Ok(LValue::Member(o, name.clone())),
                    _ => Err(Error::type_error(expr.location, "member assignment target is not an Object")),
                }
            }
            ExprKind::Index { object, index } => {
                let obj = self.eval_expr(object)?;
                let idx = self.eval_expr(index)?;
                match obj {
                    Value::Array(arr) => Ok(LValue::Index(arr, require_index(&idx, expr.location)?)),
                    Value::Object(o) => Ok(LValue::Member(o, require_key(&idx, expr.location)?)),
                    Value::String(_) => {
                        let inner = self.derive_lvalue(object)?;
                        Ok(LValue::StringChar(Box::new(inner), require_index(&idx, expr.location)?))
                    }
                    _ => Err(Error::type_error(expr.location, "value is not indexable")),
                }
            }
            _ => Err(Error::runtime(expr.location, "lvalue required")),
        }
    }

    /// Finds which scope already binds `name` — innermost local, then
    /// `this` (if an Object), then global, in that order (spec §4.3.2) —
    /// and only creates the name in the innermost applicable scope when it
    /// is bound nowhere: the local scope if one is active, else global.
    fn resolve_assignment_scope(&self, name: &str) -> Object {
        if let Some(local) = self.innermost_scope() {
            if local.contains(name) {
                return local.clone();
            }
            if let ThisValue::Object(this_obj) = self.current_this() {
                if this_obj.contains(name) {
                    return this_obj;
                }
            }
            if self.global.contains(name) {
                return self.global.clone();
            }
            return local.clone();
        }
        self.global.clone()
    }

    fn index_get(&mut self, object: &Value, index: &Value, loc: Location) -> Result<Value> {
        match object {
            Value::String(s) => {
                let i = require_index(index, loc)?;
                let byte = *s.as_bytes().get(i).ok_or_else(|| Error::index(loc, "string index out of bounds"))?;
                Ok(Value::String((byte as char).to_string()))
            }
            Value::Array(arr) => {
                let i = require_index(index, loc)?;
                arr.get(i).ok_or_else(|| Error::index(loc, "array index out of bounds"))
            }
            Value::Object(obj) => {
                let key = require_key(index, loc)?;
                Ok(obj.get(&key))
            }
            _ => Err(Error::type_error(loc, "value is not indexable")),
        }
    }

    fn member_get(&mut self, object: &Value, name: &str, loc: Location) -> Result<Value> {
        match object {
            Value::Object(obj) => {
                if obj.contains(name) {
                    Ok(obj.get(name))
                } else {
                    Ok(builtins::object_members::get(obj, name).unwrap_or(Value::Null))
                }
            }
            Value::String(_) => builtins::string_members::get(object, name, loc),
            Value::Array(_) => builtins::array_members::get(object, name, loc),
            _ => Err(Error::type_error(loc, format!("cannot access member '{}' on a {}", name, object.kind().name()))),
        }
    }

    /// Resolves a call's callee, capturing the receiver side channel (spec
    /// §4.3.5): a member/index access on an Object/Array/String, or an
    /// identifier found via `this`.
    fn eval_call_target(&mut self, callee: &Expr) -> Result<(Value, Option<Value>)> {
        match &callee.kind {
            ExprKind::Member { object, name } => {
                let obj = self.eval_expr(object)?;
                let value = self.member_get(&obj, name, callee.location)?;
                Ok((value, Some(obj)))
            }
            ExprKind::Index { object, index } => {
                let obj = self.eval_expr(object)?;
                let idx = self.eval_expr(index)?;
                let value = self.index_get(&obj, &idx, callee.location)?;
                Ok((value, Some(obj)))
            }
            ExprKind::Identifier { name, scope } => self.resolve_identifier(name, *scope, callee.location),
            _ => Ok((self.eval_expr(callee)?, None)),
        }
    }
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new()
    }
}

fn require_index(value: &Value, loc: Location) -> Result<usize> {
    let Value::Number(n) = value else { return Err(Error::index(loc, "index must be a Number")) };
    if !n.value.is_finite() || n.value < 0.0 {
        return Err(Error::index(loc, "index must be a non-negative, finite Number"));
    }
    Ok(n.value as usize)
}

fn require_key(value: &Value, loc: Location) -> Result<String> {
    match value {
        Value::String(s) => Ok(s.clone()),
        _ => Err(Error::type_error(loc, "object key must be a String")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(src: &str) -> Result<Value> {
        Evaluator::new().execute(src)
    }

    #[test]
    fn arithmetic_and_precedence() {
        assert!(matches!(run("return 1 + 2 * 3;").unwrap(), Value::Number(n) if n.as_i64() == 7));
    }

    #[test]
    fn function_recursion() {
        let src = "function fact(n){ if(n<2) return 1; return n*fact(n-1); } return fact(6);";
        assert!(matches!(run(src).unwrap(), Value::Number(n) if n.as_i64() == 720));
    }

    #[test]
    fn closures_over_this_via_member_call() {
        let src = "o = { n: 5, get: function() { return this.n; } }; return o.get();";
        assert!(matches!(run(src).unwrap(), Value::Number(n) if n.as_i64() == 5));
    }

    #[test]
    fn array_map_and_each() {
        let src = "sum = 0; a = [1,2,3]; a.map(function(x){ return x*x; }).each(function(x){ sum = sum + x; }); return sum;";
        assert!(matches!(run(src).unwrap(), Value::Number(n) if n.as_i64() == 14));
    }

    #[test]
    fn try_catch_binds_materialized_runtime_error() {
        let src = "try { a = [1]; a[5]; } catch(e) { return e.type; }";
        assert!(matches!(run(src).unwrap(), Value::String(s) if s == "IndexError"));
    }

    #[test]
    fn try_finally_runs_on_success_and_failure() {
        let src = "count = 0; try { throw 1; } catch(e) {} finally { count = count + 1; } return count;";
        assert!(matches!(run(src).unwrap(), Value::Number(n) if n.as_i64() == 1));
    }

    #[test]
    fn range_for_over_object_clears_bindings_after() {
        let src = "o = {x:1}; for (k,v:o) {} return k;";
        assert!(matches!(run(src).unwrap(), Value::Null));
    }

    #[test]
    fn break_outside_function_body_is_runtime_error() {
        let src = "function f(){ break; } return f();";
        assert!(run(src).is_err());
    }

    #[test]
    fn stack_overflow_on_unbounded_recursion() {
        let src = "function f(){ return f(); } return f();";
        assert!(run(src).is_err());
    }

    #[test]
    fn class_sugar_copies_base_members() {
        let src = "Base = { greet: function() { return 1; } }; class C : Base { }; c = {}; c.base = C.base; return C.greet();";
        assert!(run(src).is_ok());
    }
}
