// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared handles to advisable callables.

use alloc::rc::Rc;
use core::fmt;

/// A shared handle to a callable that can be advised.
///
/// A method is invoked with an explicit receiver `R` and a borrowed argument pack `A`, and
/// produces `Result<T, E>`. The receiver plays the role of `self`: it is the same value for the
/// advice and the original at every layer of a wrapped method.
///
/// Cloning a `Method` clones the handle, not the callable. Wrapping produces a new method that
/// owns the previous one; nothing records which method a wrapper came from.
///
/// ```
/// use core::convert::Infallible;
/// use understory_advice::Method;
///
/// let double: Method<i32, i32, i32, Infallible> = Method::new(|acc: &mut i32, x: &i32| {
///     *acc += 1;
///     Ok(x * 2)
/// });
///
/// let mut calls = 0;
/// assert_eq!(double.call(&mut calls, &21), Ok(42));
/// assert_eq!(calls, 1);
/// ```
pub struct Method<R, A, T, E> {
    f: Rc<dyn Fn(&mut R, &A) -> Result<T, E>>,
}

impl<R, A, T, E> Method<R, A, T, E> {
    /// Create a method from a closure or function.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&mut R, &A) -> Result<T, E> + 'static,
    {
        Self { f: Rc::new(f) }
    }

    /// Invoke the method on `receiver` with `args`.
    #[inline]
    pub fn call(&self, receiver: &mut R, args: &A) -> Result<T, E> {
        (self.f)(receiver, args)
    }

    /// Whether two handles refer to the same callable.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.f, &other.f)
    }
}

impl<R, A, T, E> Clone for Method<R, A, T, E> {
    fn clone(&self) -> Self {
        Self {
            f: Rc::clone(&self.f),
        }
    }
}

impl<R, A, T, E> fmt::Debug for Method<R, A, T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Method")
            .field("handles", &Rc::strong_count(&self.f))
            .finish_non_exhaustive()
    }
}
