// This file is part of minlang, an embeddable scripting language.
// Copyright (c) 2024 The minlang Authors
//
// Licensed under the GNU General Public License, version 3 or later.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Objects: shared, insertion-ordered string-to-`Value` maps (spec §3).
//!
//! Scopes (the local-scope stack, `this` bindings, and the global scope,
//! spec §4.3.1) are themselves `Object`s, so this type also backs identifier
//! resolution.

use std::cell::{Ref, RefCell, RefMut};
use std::rc::Rc;

use indexmap::IndexMap;

use super::Value;

/// A shared, insertion-ordered mapping from string keys to [`Value`]s.
///
/// A missing key reads as `Null` and is created on write; writing `Null` to
/// an existing key removes it (spec §3, §4.3.3). Equality and identity are
/// by referent, not contents (spec §3's Value table).
#[derive(Clone)]
pub struct Object(Rc<RefCell<IndexMap<String, Value>>>);

impl Object {
    pub fn new() -> Self {
        Self(Rc::new(RefCell::new(IndexMap::new())))
    }

    pub fn from_map(map: IndexMap<String, Value>) -> Self {
        Self(Rc::new(RefCell::new(map)))
    }

    pub fn borrow(&self) -> Ref<'_, IndexMap<String, Value>> {
        self.0.borrow()
    }

    pub fn borrow_mut(&self) -> RefMut<'_, IndexMap<String, Value>> {
        self.0.borrow_mut()
    }

    /// Reads a key; a missing key yields `Null` (spec §3).
    pub fn get(&self, key: &str) -> Value {
        self.0.borrow().get(key).cloned().unwrap_or(Value::Null)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.borrow().contains_key(key)
    }

    /// Writes a key; assigning `Null` removes it (spec §4.3.3).
    pub fn set(&self, key: &str, value: Value) {
        let mut map = self.0.borrow_mut();
        if matches!(value, Value::Null) {
            map.shift_remove(key);
        } else {
            map.insert(key.to_string(), value);
        }
    }

    pub fn len(&self) -> usize {
        self.0.borrow().len()
    }

    /// A shallow copy: a new `Object` with the same keys and values
    /// (spec §4.4's `Object(o)` constructor).
    pub fn shallow_copy(&self) -> Object {
        Object::from_map(self.0.borrow().clone())
    }

    pub fn ptr_eq(a: &Object, b: &Object) -> bool {
        Rc::ptr_eq(&a.0, &b.0)
    }

    pub fn display_repr(&self) -> String {
        let map = self.0.borrow();
        let mut s = String::from("{");
        for (i, (k, v)) in map.iter().enumerate() {
            if i > 0 { s.push_str(", "); }
            s.push_str(k);
            s.push_str(": ");
            s.push_str(&v.display_repr());
        }
        s.push('}');
        s
    }
}

impl Default for Object {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_key_is_null() {
        let o = Object::new();
        assert!(matches!(o.get("x"), Value::Null));
    }

    #[test]
    fn assigning_null_removes_key() {
        let o = Object::new();
        o.set("x", Value::int(1));
        assert!(o.contains("x"));
        o.set("x", Value::Null);
        assert!(!o.contains("x"));
    }

    #[test]
    fn shared_reference_semantics() {
        let o = Object::new();
        let alias = o.clone();
        o.set("x", Value::int(1));
        assert!(alias.contains("x"));
    }

    #[test]
    fn insertion_order_preserved() {
        let o = Object::new();
        o.set("b", Value::int(1));
        o.set("a", Value::int(2));
        let keys: Vec<_> = o.borrow().keys().cloned().collect();
        assert_eq!(keys, vec!["b".to_string(), "a".to_string()]);
    }
}
