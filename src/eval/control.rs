// This file is part of minlang, an embeddable scripting language.
// Copyright (c) 2024 The minlang Authors
//
// Licensed under the GNU General Public License, version 3 or later.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Non-local control flow (spec §4.3.6, §4.3.7).
//!
//! `break`/`continue`/`return` propagate as the `Ok` side of every
//! statement-execution call (a [`ControlFlow`] value); a script `throw` or a
//! host-raised runtime fault propagates as the `Err` side (an
//! [`crate::error::Error`]) and is converted to a bound value only at the
//! nearest enclosing `try`/`catch` — there is no single `Signal` enum
//! carrying all four, because only two of them interact with Rust's `?`
//! operator the way errors do.

use crate::error::Result;
use crate::parser::ast::Stmt;

use super::Evaluator;

/// What a statement did on the way out: ran to completion, or is
/// unwinding toward a loop or function boundary.
#[derive(Debug)]
pub enum ControlFlow {
    Normal,
    Break,
    Continue,
    Return(crate::value::Value),
}

impl Evaluator {
    /// `try B catch(e) C [finally F]` / `try B finally F` (spec §4.3.7).
    pub(super) fn exec_try(
        &mut self,
        body: &Stmt,
        catch: Option<(&str, &Stmt)>,
        finally: Option<&Stmt>,
    ) -> Result<ControlFlow> {
        let body_result = self.exec_stmt(body);

        let outcome = match body_result {
            Ok(cf) => Ok(cf),
            Err(err) if err.is_catchable() => {
                if let Some((name, catch_body)) = catch {
                    let value = err.caught_value();
                    let scope = self.innermost_scope().cloned().unwrap_or_else(|| self.global.clone());
                    scope.set(name, value);
                    let result = self.exec_stmt(catch_body);
                    // "then e is set to Null" (spec §4.3.7).
                    scope.set(name, crate::value::Value::Null);
                    result
                } else {
                    Err(err)
                }
            }
            Err(err) => Err(err),
        };

        match finally {
            None => outcome,
            Some(finally_stmt) => {
                // The finally block always runs. A break/continue/return it
                // produces supersedes whatever `body`/`catch` was doing; but
                // if F itself raises, the original exception still wins
                // (spec §4.3.7) over F's error — only over a bare Ok(Normal)
                // does F's own error get to propagate.
                match self.exec_stmt(finally_stmt) {
                    Ok(ControlFlow::Normal) => outcome,
                    Ok(overriding) => Ok(overriding),
                    Err(finally_err) => match outcome {
                        Err(_) => outcome,
                        Ok(_) => Err(finally_err),
                    },
                }
            }
        }
    }
}
