// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Wrapping primitives: `before`, `after`, and `around`.
//!
//! Each primitive takes the method currently in effect (the *original*) and a piece of advice,
//! and returns a new [`Method`] that owns the original. The primitives are pure: they do not
//! touch any table, and the returned wrapper can be stored anywhere a method fits.
//!
//! ## Semantics
//!
//! - [`before`]: advice, then original. The original's result is returned.
//!   If the advice fails, the original does not run.
//! - [`after`]: original, then advice. The original's result is returned.
//!   If the original fails, the advice does not run; if the advice fails, its error replaces
//!   the original's value.
//! - [`around`]: the advice receives the original and decides whether, when, and how often to
//!   call it. The advice's result is the wrapper's result.
//!
//! The receiver and the argument pack reach both the advice and the original unchanged.
//! Every call of a wrapper is independent; nothing is cached between calls.
//!
//! ```
//! use understory_advice::{Method, after, around, before};
//!
//! type Name = &'static str;
//!
//! let base: Method<String, Name, Name, ()> = Method::new(|log: &mut String, arg: &Name| {
//!     log.push_str("Base: ");
//!     log.push_str(arg);
//!     Ok("base")
//! });
//!
//! let advised = before(base.clone(), |log: &mut String, arg: &Name| {
//!     log.push_str("Before: ");
//!     log.push_str(arg);
//!     log.push_str(", ");
//!     Ok("before")
//! });
//! let mut log = String::new();
//! assert_eq!(advised.call(&mut log, &"Dan"), Ok("base"));
//! assert_eq!(log, "Before: Dan, Base: Dan");
//!
//! let advised = after(base.clone(), |log: &mut String, arg: &Name| {
//!     log.push_str(", After: ");
//!     log.push_str(arg);
//!     Ok("after")
//! });
//! let mut log = String::new();
//! assert_eq!(advised.call(&mut log, &"Dan"), Ok("base"));
//! assert_eq!(log, "Base: Dan, After: Dan");
//!
//! let advised = around(base, |orig, log: &mut String, arg: &Name| {
//!     log.push('|');
//!     orig.call(log, arg)?;
//!     log.push('|');
//!     Ok("around")
//! });
//! let mut log = String::new();
//! assert_eq!(advised.call(&mut log, &"Dan"), Ok("around"));
//! assert_eq!(log, "|Base: Dan|");
//! ```

use crate::method::Method;

/// Wrap `original` so that `advice` runs first.
///
/// The advice's `Ok` value is discarded; the wrapper returns whatever `original` returns.
/// An advice error is returned as is and `original` is not called.
pub fn before<R, A, T, E, U, F>(original: Method<R, A, T, E>, advice: F) -> Method<R, A, T, E>
where
    R: 'static,
    A: 'static,
    T: 'static,
    E: 'static,
    F: Fn(&mut R, &A) -> Result<U, E> + 'static,
{
    Method::new(move |receiver: &mut R, args: &A| {
        advice(receiver, args)?;
        original.call(receiver, args)
    })
}

/// Wrap `original` so that `advice` runs after it returns successfully.
///
/// The advice sees the same receiver and arguments as `original`, not its result.
/// The wrapper returns the original's value unless the advice fails, in which case the advice
/// error is returned and the value is dropped.
pub fn after<R, A, T, E, U, F>(original: Method<R, A, T, E>, advice: F) -> Method<R, A, T, E>
where
    R: 'static,
    A: 'static,
    T: 'static,
    E: 'static,
    F: Fn(&mut R, &A) -> Result<U, E> + 'static,
{
    Method::new(move |receiver: &mut R, args: &A| {
        let value = original.call(receiver, args)?;
        advice(receiver, args)?;
        Ok(value)
    })
}

/// Wrap `original` with `advice` that controls its invocation.
///
/// The advice is called with a handle to `original`, the receiver, and the arguments. It may
/// call `original` any number of times (including zero) with any receiver and arguments it
/// chooses. Its result becomes the wrapper's result.
pub fn around<R, A, T, E, F>(original: Method<R, A, T, E>, advice: F) -> Method<R, A, T, E>
where
    R: 'static,
    A: 'static,
    T: 'static,
    E: 'static,
    F: Fn(&Method<R, A, T, E>, &mut R, &A) -> Result<T, E> + 'static,
{
    Method::new(move |receiver: &mut R, args: &A| advice(&original, receiver, args))
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::String;
    use alloc::vec;
    use alloc::vec::Vec;

    type Log = Vec<(&'static str, u32)>;

    fn base() -> Method<Log, u32, u32, &'static str> {
        Method::new(|log: &mut Log, x: &u32| {
            log.push(("base", *x));
            Ok(x + 1)
        })
    }

    fn failing() -> Method<Log, u32, u32, &'static str> {
        Method::new(|log: &mut Log, x: &u32| {
            log.push(("base", *x));
            Err("base failed")
        })
    }

    #[test]
    fn before_runs_advice_first_with_same_args() {
        let m = before(base(), |log: &mut Log, x: &u32| {
            log.push(("before", *x));
            Ok(99)
        });
        let mut log = Log::new();
        assert_eq!(m.call(&mut log, &5), Ok(6));
        assert_eq!(log, vec![("before", 5), ("base", 5)]);
    }

    #[test]
    fn before_error_skips_original() {
        let m = before(base(), |log: &mut Log, x: &u32| {
            log.push(("before", *x));
            Err::<(), _>("advice failed")
        });
        let mut log = Log::new();
        assert_eq!(m.call(&mut log, &1), Err("advice failed"));
        assert_eq!(log, vec![("before", 1)]);
    }

    #[test]
    fn before_propagates_original_error_after_advice() {
        let m = before(failing(), |log: &mut Log, x: &u32| {
            log.push(("before", *x));
            Ok(())
        });
        let mut log = Log::new();
        assert_eq!(m.call(&mut log, &2), Err("base failed"));
        assert_eq!(log, vec![("before", 2), ("base", 2)]);
    }

    #[test]
    fn after_runs_advice_last_and_returns_original_value() {
        let m = after(base(), |log: &mut Log, x: &u32| {
            log.push(("after", *x));
            Ok("ignored")
        });
        let mut log = Log::new();
        assert_eq!(m.call(&mut log, &3), Ok(4));
        assert_eq!(log, vec![("base", 3), ("after", 3)]);
    }

    #[test]
    fn after_skipped_when_original_fails() {
        let m = after(failing(), |log: &mut Log, x: &u32| {
            log.push(("after", *x));
            Ok(())
        });
        let mut log = Log::new();
        assert_eq!(m.call(&mut log, &3), Err("base failed"));
        assert_eq!(log, vec![("base", 3)]);
    }

    #[test]
    fn after_error_replaces_original_value() {
        let m = after(base(), |_: &mut Log, _: &u32| Err::<(), _>("after failed"));
        let mut log = Log::new();
        assert_eq!(m.call(&mut log, &3), Err("after failed"));
        assert_eq!(log, vec![("base", 3)]);
    }

    #[test]
    fn around_returns_advice_value() {
        let m = around(base(), |orig, log: &mut Log, x: &u32| {
            log.push(("pre", *x));
            let inner = orig.call(log, x)?;
            log.push(("post", inner));
            Ok(inner * 10)
        });
        let mut log = Log::new();
        assert_eq!(m.call(&mut log, &1), Ok(20));
        assert_eq!(log, vec![("pre", 1), ("base", 1), ("post", 2)]);
    }

    #[test]
    fn around_may_skip_original() {
        let m = around(base(), |_, _: &mut Log, _: &u32| Ok(0));
        let mut log = Log::new();
        assert_eq!(m.call(&mut log, &1), Ok(0));
        assert!(log.is_empty());
    }

    #[test]
    fn around_may_call_original_repeatedly_with_other_args() {
        let m = around(base(), |orig, log: &mut Log, x: &u32| {
            let a = orig.call(log, x)?;
            let b = orig.call(log, &(x * 100))?;
            Ok(a + b)
        });
        let mut log = Log::new();
        assert_eq!(m.call(&mut log, &2), Ok(3 + 201));
        assert_eq!(log, vec![("base", 2), ("base", 200)]);
    }

    #[test]
    fn around_can_recover_from_original_error() {
        let m = around(failing(), |orig, log: &mut Log, x: &u32| {
            Ok(orig.call(log, x).unwrap_or(0))
        });
        let mut log = Log::new();
        assert_eq!(m.call(&mut log, &4), Ok(0));
        assert_eq!(log, vec![("base", 4)]);
    }

    #[test]
    fn each_call_reinvokes_the_chain() {
        let m = around(base(), |orig, log: &mut Log, x: &u32| orig.call(log, x));
        let mut log = Log::new();
        assert_eq!(m.call(&mut log, &1), Ok(2));
        assert_eq!(m.call(&mut log, &1), Ok(2));
        assert_eq!(log, vec![("base", 1), ("base", 1)]);
    }

    #[test]
    fn stacked_wraps_nest_outward() {
        let log_step = |tag: &'static str| {
            move |log: &mut String, _: &()| {
                log.push_str(tag);
                Ok::<_, ()>(())
            }
        };
        let original: Method<String, (), (), ()> = Method::new(log_step("A!"));
        let m = before(original, log_step("BEFORE!"));
        let m = after(m, log_step("AFTER!"));
        let m = around(m, |orig, log: &mut String, args: &()| {
            log.push('|');
            orig.call(log, args)?;
            log.push('|');
            Ok(())
        });
        let mut log = String::new();
        m.call(&mut log, &()).unwrap();
        assert_eq!(log, "|BEFORE!A!AFTER!|");
    }
}
