// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_advice --heading-base-level=0

//! Understory Advice: before, after, and around advice for component methods.
//!
//! ## Overview
//!
//! Advice attaches behavior to an existing method without touching its definition.
//! This crate provides the three wrapping primitives and a mixin that lets a component advise
//! its own methods by name.
//!
//! - [`before`], [`after`], [`around`]: pure functions from an original [`Method`] and a piece
//!   of advice to a new [`Method`].
//! - [`MethodTable`]: a name → method map. Installing advice looks up each named method, wraps
//!   it, and stores the wrapper back under the same name.
//! - [`Advisable`]: implemented by types that own a [`MethodTable`] for themselves, giving them
//!   `before`, `after`, and `around` installers and `invoke`.
//!
//! ## Methods and receivers
//!
//! A [`Method<R, A, T, E>`](Method) is called as `method.call(&mut receiver, &args)` and yields
//! `Result<T, E>`. The receiver stands in for `self`; every layer of an advised method (each
//! piece of advice and the original) sees the same receiver and the same arguments.
//!
//! ## Composition order
//!
//! Each installation wraps whatever method is current, so the last advice installed is the
//! outermost layer at call time. Installing `before`, then `after`, then `around` on one method
//! runs: around (pre) → before → original → after → around (post). An `around` installed
//! last decides whether the earlier layers run at all.
//!
//! ## Selectors
//!
//! Installers take a whitespace-separated list of names ([`MethodNames`]). Every name is
//! advised in order with its own wrapper around a shared advice callable. A blank selector
//! advises nothing; a repeated name is wrapped once per appearance; an unknown name stops the
//! installation with [`AdviceError::UnknownMethod`] and leaves earlier names wrapped.
//!
//! ## Errors
//!
//! Methods and advice share an error type `E` chosen by the caller. Errors propagate as they
//! are: a failing `before` prevents the original, a failing original prevents `after`, and an
//! `around` handles (or not) whatever its original returns.
//!
//! ## Example
//!
//! ```
//! use core::convert::Infallible;
//! use understory_advice::{Advisable, MethodTable, TableOf};
//!
//! #[derive(Default)]
//! struct Subject {
//!     log: String,
//!     methods: MethodTable<Self, (), (), Infallible>,
//! }
//!
//! impl Advisable for Subject {
//!     type Args = ();
//!     type Output = ();
//!     type Error = Infallible;
//!
//!     fn method_table(&self) -> &TableOf<Self> {
//!         &self.methods
//!     }
//!
//!     fn method_table_mut(&mut self) -> &mut TableOf<Self> {
//!         &mut self.methods
//!     }
//! }
//!
//! let mut subject = Subject::default();
//! for (name, text) in [("a", "A!"), ("b", "B!"), ("c", "C!")] {
//!     subject.method_table_mut().define(name, move |s: &mut Subject, _: &()| {
//!         s.log.push_str(text);
//!         Ok(())
//!     });
//! }
//!
//! subject.before("a b", |s, _| { s.log.push_str("BEFORE!"); Ok(()) }).unwrap();
//! subject.after("b c", |s, _| { s.log.push_str("AFTER!"); Ok(()) }).unwrap();
//! subject.around("a b c", |orig, s, args| {
//!     s.log = String::from("|");
//!     orig.call(s, args)?;
//!     s.log.push('|');
//!     Ok(())
//! }).unwrap();
//!
//! let mut run = |name: &str| {
//!     let method = subject.method(name).unwrap();
//!     method.call(&mut subject, &()).unwrap();
//!     subject.log.clone()
//! };
//! assert_eq!(run("a"), "|BEFORE!A!|");
//! assert_eq!(run("b"), "|BEFORE!B!AFTER!|");
//! assert_eq!(run("c"), "|C!AFTER!|");
//! ```
//!
//! ## Features
//!
//! - `std` (default): enables `std` support in `thiserror` and `tracing`.
//!
//! Installations are reported at `TRACE` level through `tracing`. Errors are never logged,
//! only returned.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod advice;
mod advisable;
mod error;
mod method;
mod selector;
mod table;
pub mod wrap;

pub use advice::{Advice, AdviceKind};
pub use advisable::{Advisable, MethodOf, TableOf};
pub use error::AdviceError;
pub use method::Method;
pub use selector::MethodNames;
pub use table::MethodTable;
pub use wrap::{after, around, before};

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::String;

    fn base() -> Method<String, &'static str, &'static str, ()> {
        Method::new(|log: &mut String, arg: &&'static str| {
            log.push_str("Base: ");
            log.push_str(arg);
            Ok("base")
        })
    }

    #[test]
    fn before_returns_base_result() {
        let advised = before(base(), |log: &mut String, arg: &&'static str| {
            log.push_str("Before: ");
            log.push_str(arg);
            log.push_str(", ");
            Ok("before")
        });
        let mut log = String::new();
        assert_eq!(advised.call(&mut log, &"Dan"), Ok("base"));
        assert_eq!(log, "Before: Dan, Base: Dan");
    }

    #[test]
    fn after_returns_base_result() {
        let advised = after(base(), |log: &mut String, arg: &&'static str| {
            log.push_str(", After: ");
            log.push_str(arg);
            Ok("after")
        });
        let mut log = String::new();
        assert_eq!(advised.call(&mut log, &"Dan"), Ok("base"));
        assert_eq!(log, "Base: Dan, After: Dan");
    }

    #[test]
    fn around_wraps_base() {
        let advised = around(base(), |orig, log: &mut String, arg: &&'static str| {
            log.push('|');
            orig.call(log, arg)?;
            log.push('|');
            Ok("around")
        });
        let mut log = String::new();
        assert_eq!(advised.call(&mut log, &"Dan"), Ok("around"));
        assert_eq!(log, "|Base: Dan|");
    }
}
