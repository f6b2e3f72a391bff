// This file is part of minlang, an embeddable scripting language.
// Copyright (c) 2024 The minlang Authors
//
// Licensed under the GNU General Public License, version 3 or later.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Writable slot locators (spec §4.3.3).
//!
//! Only two slot shapes actually own storage: an `Object` entry and an
//! `Array` element — every local/`this`/global variable binding is itself
//! an entry in some scope `Object`, so a bare identifier's l-value is just
//! `Member` on whichever scope resolution found it. `StringCharacter` is not
//! a storage kind of its own: a string has no shared identity in this value
//! taxonomy, so "assign into character `i` of this string" can only mean
//! "read the containing slot, splice the string it holds, write it back" —
//! hence it wraps the inner slot rather than standing beside it.

use crate::error::{Error, Result};
use crate::location::Location;
use crate::value::{Array, Object, Value};

pub enum LValue {
    Member(Object, String),
    Index(Array, usize),
    StringChar(Box<LValue>, usize),
}

impl LValue {
    pub fn read(&self, loc: Location) -> Result<Value> {
        match self {
            LValue::Member(obj, key) => Ok(obj.get(key)),
            LValue::Index(arr, index) => arr
                .get(*index)
                .ok_or_else(|| Error::index(loc, format!("array index {} out of bounds", index))),
            LValue::StringChar(inner, index) => {
                let Value::String(s) = inner.read(loc)? else {
                    return Err(Error::type_error(loc, "indexed value is no longer a string"));
                };
                let byte = *s
                    .as_bytes()
                    .get(*index)
                    .ok_or_else(|| Error::index(loc, format!("string index {} out of bounds", index)))?;
                Ok(Value::String((byte as char).to_string()))
            }
        }
    }

    pub fn write(&self, loc: Location, value: Value) -> Result<()> {
        match self {
            LValue::Member(obj, key) => {
                obj.set(key, value);
                Ok(())
            }
            LValue::Index(arr, index) => {
                let mut items = arr.borrow_mut();
                let slot = items
                    .get_mut(*index)
                    .ok_or_else(|| Error::index(loc, format!("array index {} out of bounds", index)))?;
                *slot = value;
                Ok(())
            }
            LValue::StringChar(inner, index) => {
                let Value::String(replacement) = &value else {
                    return Err(Error::type_error(loc, "assigned value must be a single-character string"));
                };
                let mut bytes = replacement.bytes();
                let (Some(byte), None) = (bytes.next(), bytes.next()) else {
                    return Err(Error::type_error(loc, "assigned value must be a single-character string"));
                };
                if !byte.is_ascii() {
                    return Err(Error::type_error(loc, "character assignment is limited to single-byte characters"));
                }
                let Value::String(s) = inner.read(loc)? else {
                    return Err(Error::type_error(loc, "indexed value is no longer a string"));
                };
                let mut raw = s.into_bytes();
                if *index >= raw.len() {
                    return Err(Error::index(loc, format!("string index {} out of bounds", index)));
                }
                raw[*index] = byte;
                let rebuilt = String::from_utf8(raw)
                    .map_err(|_| Error::type_error(loc, "character assignment produced invalid UTF-8"))?;
                inner.write(loc, Value::String(rebuilt))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn member_write_then_read() {
        let obj = Object::new();
        let lv = LValue::Member(obj.clone(), "x".to_string());
        lv.write(Location::START, Value::int(5)).unwrap();
        assert_eq!(obj.get("x").kind(), crate::value::Kind::Number);
    }

    #[test]
    fn string_char_roundtrip() {
        let obj = Object::new();
        obj.set("s", Value::String("cat".to_string()));
        let inner = LValue::Member(obj.clone(), "s".to_string());
        let lv = LValue::StringChar(Box::new(inner), 1);
        lv.write(Location::START, Value::String("u".to_string())).unwrap();
        assert!(matches!(obj.get("s"), Value::String(s) if s == "cut"));
    }

    #[test]
    fn array_index_out_of_bounds_is_error() {
        let arr = Array::new();
        let lv = LValue::Index(arr, 0);
        assert!(lv.read(Location::START).is_err());
    }
}
