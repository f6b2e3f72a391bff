// This file is part of minlang, an embeddable scripting language.
// Copyright (c) 2024 The minlang Authors
//
// Licensed under the GNU General Public License, version 3 or later.
// SPDX-License-Identifier: GPL-3.0-or-later

//! The `printf`/`sprintf` format-directive engine (spec §6.4).
//!
//! Grounded on the teacher's own `%`-walking style in spirit (a single pass
//! over the format string, dispatching on the byte after `%`) rather than a
//! regex or a `format!`-style compile-time macro — the directive set here
//! (`%s %c %d %f %g %v %p %(N)`) is fixed at run time from a script-supplied
//! string, so it has to be interpreted, not compiled.

use crate::error::{Error, Result};
use crate::location::Location;
use crate::value::Value;

pub fn format(fmt: &str, args: &[Value], loc: Location) -> Result<String> {
    let mut out = String::new();
    let mut cursor = 0usize;
    let mut chars = fmt.chars().peekable();

    let next_arg = |cursor: &mut usize| -> Result<&Value> {
        let arg = args
            .get(*cursor)
            .ok_or_else(|| Error::argument(loc, format!("format string expects an argument at index {}", cursor)))?;
        *cursor += 1;
        Ok(arg)
    };

    while let Some(c) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }
        match chars.next() {
            None => return Err(Error::argument(loc, "format string ends with a bare '%'")),
            Some('%') => out.push('%'),
            Some('s') | Some('v') => out.push_str(&next_arg(&mut cursor)?.display_repr()),
            Some('p') => out.push_str(&next_arg(&mut cursor)?.debug_repr()),
            Some('c') => {
                let arg = next_arg(&mut cursor)?;
                let Value::Number(n) = arg else {
                    return Err(Error::type_error(loc, "'%c' requires a Number argument"));
                };
                let code = n.as_i64() as u32;
                let ch = char::from_u32(code).ok_or_else(|| Error::argument(loc, "'%c' code point is not valid"))?;
                out.push(ch);
            }
            Some('d') => {
                let arg = next_arg(&mut cursor)?;
                let Value::Number(n) = arg else {
                    return Err(Error::type_error(loc, "'%d' requires a Number argument"));
                };
                out.push_str(&n.as_i64().to_string());
            }
            Some('f') => {
                let arg = next_arg(&mut cursor)?;
                let Value::Number(n) = arg else {
                    return Err(Error::type_error(loc, "'%f' requires a Number argument"));
                };
                out.push_str(&format!("{:.6}", n.value));
            }
            Some('g') => {
                let arg = next_arg(&mut cursor)?;
                let Value::Number(n) = arg else {
                    return Err(Error::type_error(loc, "'%g' requires a Number argument"));
                };
                out.push_str(&n.value.to_string());
            }
            Some('(') => {
                let mut digits = String::new();
                for d in chars.by_ref() {
                    if d == ')' {
                        break;
                    }
                    digits.push(d);
                }
                let index: usize = digits
                    .parse()
                    .map_err(|_| Error::argument(loc, format!("bad explicit argument index '%({})'", digits)))?;
                let arg = args
                    .get(index)
                    .ok_or_else(|| Error::argument(loc, format!("explicit argument index {} out of range", index)))?;
                out.push_str(&arg.display_repr());
            }
            Some(other) => return Err(Error::argument(loc, format!("unknown format directive '%{}'", other))),
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literal_percent() {
        assert_eq!(format("100%%", &[], Location::START).unwrap(), "100%");
    }

    #[test]
    fn sequential_directives() {
        let args = [Value::String("x".into()), Value::int(5)];
        assert_eq!(format("%s=%d", &args, Location::START).unwrap(), "x=5");
    }

    #[test]
    fn explicit_index_does_not_advance_cursor() {
        let args = [Value::int(1), Value::int(2)];
        assert_eq!(format("%(1) %s", &args, Location::START).unwrap(), "2 1");
    }

    #[test]
    fn repr_directives() {
        let args = [Value::String("hi".into())];
        assert_eq!(format("%v", &args, Location::START).unwrap(), "hi");
        assert_eq!(format("%p", &args, Location::START).unwrap(), "\"hi\"");
    }
}
