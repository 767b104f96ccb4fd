// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Named method tables.
//!
//! A [`MethodTable`] maps method names to the [`Method`] currently in effect under each name.
//! Installing advice performs a lookup → wrap → store cycle for every name in a selector, in
//! the order the names appear:
//!
//! 1. Parse the selector with [`MethodNames::parse`]. A blank selector installs nothing.
//! 2. For each name, fetch the current method. A missing name stops the installation with
//!    [`AdviceError::UnknownMethod`]; names before it stay wrapped.
//! 3. Wrap the current method with the advice and store the wrapper in the same slot.
//!
//! Because each installation wraps whatever the slot holds at that moment, the most recently
//! installed advice is the outermost layer when the method is called.
//!
//! ## Tables and receivers
//!
//! A table can live apart from its receiver (call [`MethodTable::invoke`] with both), or inside
//! it, in which case the receiver implements [`Advisable`](crate::Advisable) to expose the
//! installers as its own methods.
//!
//! Cloning a table is cheap: slots are copied, methods are shared. After a clone the two tables
//! evolve independently, so a component definition can keep a prototype table and hand each
//! instance its own copy.
//!
//! ```
//! use core::convert::Infallible;
//! use understory_advice::MethodTable;
//!
//! let mut table: MethodTable<String, (), (), Infallible> = MethodTable::new();
//! table.define("a", |log: &mut String, _: &()| {
//!     log.push_str("A!");
//!     Ok(())
//! });
//! table.define("b", |log: &mut String, _: &()| {
//!     log.push_str("B!");
//!     Ok(())
//! });
//!
//! table.before("a b", |log: &mut String, _: &()| {
//!     log.push_str("BEFORE!");
//!     Ok(())
//! }).unwrap();
//! table.around("b", |orig, log: &mut String, args: &()| {
//!     log.push('|');
//!     orig.call(log, args)?;
//!     log.push('|');
//!     Ok(())
//! }).unwrap();
//!
//! let mut log = String::new();
//! table.invoke("a", &mut log, &()).unwrap().unwrap();
//! table.invoke("b", &mut log, &()).unwrap().unwrap();
//! assert_eq!(log, "BEFORE!A!|BEFORE!B!|");
//! ```

use alloc::string::String;
use core::fmt;

use hashbrown::HashMap;

use crate::advice::Advice;
use crate::error::AdviceError;
use crate::method::Method;
use crate::selector::MethodNames;

/// A mapping from method names to the method currently in effect under each name.
pub struct MethodTable<R, A, T, E> {
    slots: HashMap<String, Method<R, A, T, E>>,
}

impl<R, A, T, E> MethodTable<R, A, T, E> {
    /// Create an empty table.
    pub fn new() -> Self {
        Self {
            slots: HashMap::new(),
        }
    }

    /// Store `f` under `name`, returning the method it replaces, if any.
    ///
    /// Defining a name discards any advice installed on the previous method.
    pub fn define<F>(&mut self, name: &str, f: F) -> Option<Method<R, A, T, E>>
    where
        F: Fn(&mut R, &A) -> Result<T, E> + 'static,
    {
        self.insert(name, Method::new(f))
    }

    /// Store an existing method handle under `name`, returning the method it replaces, if any.
    pub fn insert(
        &mut self,
        name: &str,
        method: Method<R, A, T, E>,
    ) -> Option<Method<R, A, T, E>> {
        tracing::trace!(method = name, "define");
        self.slots.insert(name.into(), method)
    }

    /// The method currently stored under `name`.
    pub fn get(&self, name: &str) -> Option<&Method<R, A, T, E>> {
        self.slots.get(name)
    }

    /// Like [`get`](Self::get), but an absent name is an [`AdviceError::UnknownMethod`].
    pub fn resolve(&self, name: &str) -> Result<&Method<R, A, T, E>, AdviceError> {
        self.slots.get(name).ok_or_else(|| AdviceError::unknown(name))
    }

    /// Whether a method is stored under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.slots.contains_key(name)
    }

    /// Names of all stored methods, in no particular order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.slots.keys().map(String::as_str)
    }

    /// Number of stored methods.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether the table holds no methods.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Call the method stored under `name` on `receiver`.
    ///
    /// The outer `Result` reports resolution; the inner one is the method's own result.
    /// Use [`Advisable::invoke`](crate::Advisable::invoke) when the table lives inside the
    /// receiver.
    pub fn invoke(
        &self,
        name: &str,
        receiver: &mut R,
        args: &A,
    ) -> Result<Result<T, E>, AdviceError> {
        Ok(self.resolve(name)?.call(receiver, args))
    }
}

impl<R, A, T, E> MethodTable<R, A, T, E>
where
    R: 'static,
    A: 'static,
    T: 'static,
    E: 'static,
{
    /// Apply `advice` to every method named in `names`, replacing each in place.
    ///
    /// Names are handled in order. On an unknown name the error is returned at once and the
    /// methods already wrapped by this call keep their new wrappers.
    pub fn advise(
        &mut self,
        names: &str,
        advice: &Advice<R, A, T, E>,
    ) -> Result<(), AdviceError> {
        let kind = advice.kind();
        for name in MethodNames::parse(names).iter() {
            let slot = self
                .slots
                .get_mut(name)
                .ok_or_else(|| AdviceError::unknown(name))?;
            *slot = advice.wrap(slot.clone());
            tracing::trace!(method = name, %kind, "advised");
        }
        Ok(())
    }

    /// Install `before` advice on every method named in `names`.
    ///
    /// See [`wrap::before`](crate::wrap::before) for call semantics.
    pub fn before<U, F>(&mut self, names: &str, advice: F) -> Result<(), AdviceError>
    where
        F: Fn(&mut R, &A) -> Result<U, E> + 'static,
    {
        self.advise(names, &Advice::before(advice))
    }

    /// Install `after` advice on every method named in `names`.
    ///
    /// See [`wrap::after`](crate::wrap::after) for call semantics.
    pub fn after<U, F>(&mut self, names: &str, advice: F) -> Result<(), AdviceError>
    where
        F: Fn(&mut R, &A) -> Result<U, E> + 'static,
    {
        self.advise(names, &Advice::after(advice))
    }

    /// Install `around` advice on every method named in `names`.
    ///
    /// See [`wrap::around`](crate::wrap::around) for call semantics.
    pub fn around<F>(&mut self, names: &str, advice: F) -> Result<(), AdviceError>
    where
        F: Fn(&Method<R, A, T, E>, &mut R, &A) -> Result<T, E> + 'static,
    {
        self.advise(names, &Advice::around(advice))
    }
}

impl<R, A, T, E> Default for MethodTable<R, A, T, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R, A, T, E> Clone for MethodTable<R, A, T, E> {
    fn clone(&self) -> Self {
        Self {
            slots: self.slots.clone(),
        }
    }
}

impl<R, A, T, E> fmt::Debug for MethodTable<R, A, T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.names()).finish()
    }
}
