// This file is part of minlang, an embeddable scripting language.
// Copyright (c) 2024 The minlang Authors
//
// Licensed under the GNU General Public License, version 3 or later.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Unary and binary operator semantics (spec §4.3.4).

use crate::error::{Error, Result};
use crate::location::Location;
use crate::parser::ast::{BinaryOp, UnaryOp};
use crate::value::{Array, Number, Value};

/// `+ - * / % << >> & ^ | < <= > >= == != && ||`, minus the two that need
/// lazy right-hand evaluation (`&&`/`||`, handled by the caller) and comma
/// (a plain sequence point, also handled by the caller).
pub fn binary(op: BinaryOp, left: Value, right: Value, loc: Location) -> Result<Value> {
    use BinaryOp::*;
    match op {
        Add => add(left, right, loc),
        Sub => numeric(left, right, loc, |a, b| a - b),
        Mul => numeric(left, right, loc, |a, b| a * b),
        Div => numeric(left, right, loc, |a, b| a / b),
        Rem => numeric(left, right, loc, |a, b| a % b),
        Shl => bitwise(left, right, loc, |a, b| a.wrapping_shl((b as u32) & 63)),
        Shr => bitwise(left, right, loc, |a, b| a.wrapping_shr((b as u32) & 63)),
        BitAnd => bitwise(left, right, loc, |a, b| a & b),
        BitXor => bitwise(left, right, loc, |a, b| a ^ b),
        BitOr => bitwise(left, right, loc, |a, b| a | b),
        Eq => Ok(Value::int(left.eq(&right) as i64)),
        NotEq => Ok(Value::int(!left.eq(&right) as i64)),
        Lt => relational(&left, &right, loc, |o| o.is_lt()),
        LtEq => relational(&left, &right, loc, |o| o.is_le()),
        Gt => relational(&left, &right, loc, |o| o.is_gt()),
        GtEq => relational(&left, &right, loc, |o| o.is_ge()),
        And | Or | Comma => unreachable!("short-circuit/sequence operators are evaluated by the caller"),
    }
}

fn add(left: Value, right: Value, loc: Location) -> Result<Value> {
    match (left, right) {
        (Value::Number(a), Value::Number(b)) => Ok(Value::Number(Number::tagged(a.value + b.value, a.is_int && b.is_int))),
        (Value::String(mut a), Value::String(b)) => {
            a.push_str(&b);
            Ok(Value::String(a))
        }
        (Value::String(mut a), Value::Number(n)) => {
            if !n.is_int {
                return Err(Error::type_error(loc, "cannot append a non-integer number to a string"));
            }
            // Spec: string+number "appends a single code unit (byte)" — the
            // original treats strings as raw bytes. `Value::String` is a
            // UTF-8 `String`, so a byte in 128..=255 is represented here as
            // its Latin-1-equivalent scalar value rather than as a raw,
            // possibly non-UTF-8 byte; codes outside 0..=255 have no
            // single-byte representation in either model.
            let code = n.as_i64();
            let Ok(byte) = u8::try_from(code) else {
                return Err(Error::type_error(loc, "string + number: code unit out of byte range (0-255)"));
            };
            a.push(byte as char);
            Ok(Value::String(a))
        }
        (Value::Array(arr), other) => {
            let mut items = arr.borrow().clone();
            items.push(other);
            Ok(Value::Array(Array::from_vec(items)))
        }
        _ => Err(Error::type_error(loc, "operator '+' is not defined for these operand types")),
    }
}

fn numeric(left: Value, right: Value, loc: Location, f: impl Fn(f64, f64) -> f64) -> Result<Value> {
    let (Value::Number(a), Value::Number(b)) = (left, right) else {
        return Err(Error::type_error(loc, "operator requires two Numbers"));
    };
    Ok(Value::Number(Number::tagged(f(a.value, b.value), a.is_int && b.is_int)))
}

fn bitwise(left: Value, right: Value, loc: Location, f: impl Fn(i64, i64) -> i64) -> Result<Value> {
    let (Value::Number(a), Value::Number(b)) = (left, right) else {
        return Err(Error::type_error(loc, "operator requires two Numbers"));
    };
    Ok(Value::Number(Number::int(f(a.to_bits(), b.to_bits()))))
}

fn relational(left: &Value, right: &Value, loc: Location, accept: impl Fn(std::cmp::Ordering) -> bool) -> Result<Value> {
    let ord = match (left, right) {
        (Value::Number(a), Value::Number(b)) => a
            .value
            .partial_cmp(&b.value)
            .ok_or_else(|| Error::type_error(loc, "cannot compare NaN"))?,
        (Value::String(a), Value::String(b)) => a.cmp(b),
        _ => return Err(Error::type_error(loc, "relational comparison requires two Numbers or two Strings")),
    };
    Ok(Value::int(accept(ord) as i64))
}

/// `+ - ! ~`, r-value unary operators (spec §4.3.4).
pub fn unary(op: UnaryOp, operand: Value, loc: Location) -> Result<Value> {
    match op {
        UnaryOp::Not => Ok(Value::int(!operand.is_truthy() as i64)),
        UnaryOp::Plus => {
            let Value::Number(n) = operand else { return Err(Error::type_error(loc, "unary '+' requires a Number")) };
            Ok(Value::Number(n))
        }
        UnaryOp::Minus => {
            let Value::Number(n) = operand else { return Err(Error::type_error(loc, "unary '-' requires a Number")) };
            Ok(Value::Number(Number::tagged(-n.value, n.is_int)))
        }
        UnaryOp::BitNot => {
            let Value::Number(n) = operand else { return Err(Error::type_error(loc, "unary '~' requires a Number")) };
            Ok(Value::Number(Number::int(!n.to_bits())))
        }
        UnaryOp::PreIncrement | UnaryOp::PreDecrement | UnaryOp::PostIncrement | UnaryOp::PostDecrement => {
            unreachable!("increment/decrement mutate an l-value and are handled by the caller")
        }
    }
}

/// `++`/`--` mutate in place; preserves integer tagging (spec §4.3.4).
pub fn step(current: &Value, delta: i64, loc: Location) -> Result<Value> {
    let Value::Number(n) = current else { return Err(Error::type_error(loc, "'++'/'--' require a Number l-value")) };
    Ok(Value::Number(Number::tagged(n.value + delta as f64, n.is_int)))
}

/// The binary operator a compound-assignment token corresponds to, e.g.
/// `+=` applies `+` between the current slot value and the right-hand side.
pub fn compound_binary_op(op: crate::parser::ast::AssignOp) -> Option<BinaryOp> {
    use crate::parser::ast::AssignOp::*;
    Some(match op {
        Assign => return None,
        Add => BinaryOp::Add,
        Sub => BinaryOp::Sub,
        Mul => BinaryOp::Mul,
        Div => BinaryOp::Div,
        Rem => BinaryOp::Rem,
        Shl => BinaryOp::Shl,
        Shr => BinaryOp::Shr,
        BitAnd => BinaryOp::BitAnd,
        BitXor => BinaryOp::BitXor,
        BitOr => BinaryOp::BitOr,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_addition_stays_integer_tagged() {
        let v = binary(BinaryOp::Add, Value::int(2), Value::int(3), Location::START).unwrap();
        assert!(matches!(v, Value::Number(n) if n.is_int && n.as_i64() == 5));
    }

    #[test]
    fn mixed_addition_is_float_tagged() {
        let v = binary(BinaryOp::Add, Value::int(2), Value::float(0.5), Location::START).unwrap();
        assert!(matches!(v, Value::Number(n) if !n.is_int));
    }

    #[test]
    fn string_concatenation() {
        let v = binary(BinaryOp::Add, Value::String("a".into()), Value::String("b".into()), Location::START).unwrap();
        assert!(matches!(v, Value::String(s) if s == "ab"));
    }

    #[test]
    fn string_plus_integer_appends_byte() {
        let v = binary(BinaryOp::Add, Value::String("A".into()), Value::int(66), Location::START).unwrap();
        assert!(matches!(v, Value::String(s) if s == "AB"));
    }

    #[test]
    fn array_plus_x_appends() {
        let arr = Array::from_vec(vec![Value::int(1)]);
        let v = binary(BinaryOp::Add, Value::Array(arr.clone()), Value::int(2), Location::START).unwrap();
        let Value::Array(result) = v else { panic!() };
        assert_eq!(result.len(), 2);
        assert_eq!(arr.len(), 1, "original array must be unmodified");
    }

    #[test]
    fn cross_kind_equality_is_false_not_an_error() {
        let v = binary(BinaryOp::Eq, Value::int(0), Value::Null, Location::START).unwrap();
        assert!(matches!(v, Value::Number(n) if n.as_i64() == 0));
    }

    #[test]
    fn relational_type_mismatch_is_error() {
        assert!(binary(BinaryOp::Lt, Value::int(1), Value::String("x".into()), Location::START).is_err());
    }

    #[test]
    fn bitwise_not_inverts_bits() {
        let v = unary(UnaryOp::BitNot, Value::int(0), Location::START).unwrap();
        assert!(matches!(v, Value::Number(n) if n.as_i64() == -1));
    }
}
