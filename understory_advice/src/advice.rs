// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Installable advice values.
//!
//! [`Advice`] packages a piece of advice together with the rule that applies it, so a single
//! value can be installed on many methods (or many tables). Each application produces a fresh
//! wrapper around whatever method it is applied to; the advice callable itself is shared.

use alloc::rc::Rc;
use core::fmt;

use crate::method::Method;
use crate::wrap;

/// The composition rule of a piece of advice.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum AdviceKind {
    /// Run before the original; see [`wrap::before`].
    Before,
    /// Run after the original succeeds; see [`wrap::after`].
    After,
    /// Control the original's invocation; see [`wrap::around`].
    Around,
}

impl fmt::Display for AdviceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Before => "before",
            Self::After => "after",
            Self::Around => "around",
        })
    }
}

type Hook<R, A, E> = Rc<dyn Fn(&mut R, &A) -> Result<(), E>>;
type Wrapper<R, A, T, E> = Rc<dyn Fn(&Method<R, A, T, E>, &mut R, &A) -> Result<T, E>>;

/// A piece of advice ready to be applied to methods of signature `(R, A) -> Result<T, E>`.
///
/// ```
/// use core::convert::Infallible;
/// use understory_advice::{Advice, AdviceKind, Method};
///
/// let trace: Advice<Vec<u32>, u32, u32, Infallible> =
///     Advice::before(|log: &mut Vec<u32>, x: &u32| {
///         log.push(*x);
///         Ok(())
///     });
/// assert_eq!(trace.kind(), AdviceKind::Before);
///
/// let square = Method::new(|_: &mut Vec<u32>, x: &u32| Ok(x * x));
/// let cube = Method::new(|_: &mut Vec<u32>, x: &u32| Ok(x * x * x));
/// let (square, cube) = (trace.wrap(square), trace.wrap(cube));
///
/// let mut log = Vec::new();
/// assert_eq!(square.call(&mut log, &3), Ok(9));
/// assert_eq!(cube.call(&mut log, &2), Ok(8));
/// assert_eq!(log, [3, 2]);
/// ```
pub enum Advice<R, A, T, E> {
    /// See [`wrap::before`].
    Before(Hook<R, A, E>),
    /// See [`wrap::after`].
    After(Hook<R, A, E>),
    /// See [`wrap::around`].
    Around(Wrapper<R, A, T, E>),
}

impl<R, A, T, E> Advice<R, A, T, E>
where
    R: 'static,
    A: 'static,
    T: 'static,
    E: 'static,
{
    /// Advice that runs before the original. Its `Ok` value is discarded.
    pub fn before<U, F>(advice: F) -> Self
    where
        F: Fn(&mut R, &A) -> Result<U, E> + 'static,
    {
        Self::Before(Rc::new(move |receiver: &mut R, args: &A| {
            advice(receiver, args).map(drop)
        }))
    }

    /// Advice that runs after the original succeeds. Its `Ok` value is discarded.
    pub fn after<U, F>(advice: F) -> Self
    where
        F: Fn(&mut R, &A) -> Result<U, E> + 'static,
    {
        Self::After(Rc::new(move |receiver: &mut R, args: &A| {
            advice(receiver, args).map(drop)
        }))
    }

    /// Advice that receives the original and controls whether and how it runs.
    pub fn around<F>(advice: F) -> Self
    where
        F: Fn(&Method<R, A, T, E>, &mut R, &A) -> Result<T, E> + 'static,
    {
        Self::Around(Rc::new(advice))
    }

    /// The composition rule this advice applies.
    pub fn kind(&self) -> AdviceKind {
        match self {
            Self::Before(_) => AdviceKind::Before,
            Self::After(_) => AdviceKind::After,
            Self::Around(_) => AdviceKind::Around,
        }
    }

    /// Wrap `original` with this advice, producing a new method.
    pub fn wrap(&self, original: Method<R, A, T, E>) -> Method<R, A, T, E> {
        match self {
            Self::Before(hook) => {
                let hook = Rc::clone(hook);
                wrap::before(original, move |receiver: &mut R, args: &A| {
                    hook(receiver, args)
                })
            }
            Self::After(hook) => {
                let hook = Rc::clone(hook);
                wrap::after(original, move |receiver: &mut R, args: &A| {
                    hook(receiver, args)
                })
            }
            Self::Around(wrapper) => {
                let wrapper = Rc::clone(wrapper);
                wrap::around(
                    original,
                    move |orig: &Method<R, A, T, E>, receiver: &mut R, args: &A| {
                        wrapper(orig, receiver, args)
                    },
                )
            }
        }
    }
}

impl<R, A, T, E> Clone for Advice<R, A, T, E> {
    fn clone(&self) -> Self {
        match self {
            Self::Before(hook) => Self::Before(Rc::clone(hook)),
            Self::After(hook) => Self::After(Rc::clone(hook)),
            Self::Around(wrapper) => Self::Around(Rc::clone(wrapper)),
        }
    }
}

impl<R, A, T, E> fmt::Debug for Advice<R, A, T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self {
            Self::Before(_) => "Before",
            Self::After(_) => "After",
            Self::Around(_) => "Around",
        };
        f.debug_tuple(kind).finish_non_exhaustive()
    }
}
