// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The advisable mixin.
//!
//! Implement [`Advisable`] for a type that owns a [`MethodTable`] whose receiver is the type
//! itself. The type then gains `before`, `after`, and `around` installers that advise its own
//! methods by name, and `invoke` to call them with itself as the receiver.
//!
//! ```
//! use understory_advice::{Advisable, AdviceError, MethodTable};
//!
//! #[derive(Debug, PartialEq)]
//! enum Error {
//!     Advice(AdviceError),
//! }
//!
//! impl From<AdviceError> for Error {
//!     fn from(e: AdviceError) -> Self {
//!         Self::Advice(e)
//!     }
//! }
//!
//! struct Counter {
//!     count: u32,
//!     methods: MethodTable<Self, u32, u32, Error>,
//! }
//!
//! impl Advisable for Counter {
//!     type Args = u32;
//!     type Output = u32;
//!     type Error = Error;
//!
//!     fn method_table(&self) -> &MethodTable<Self, u32, u32, Error> {
//!         &self.methods
//!     }
//!
//!     fn method_table_mut(&mut self) -> &mut MethodTable<Self, u32, u32, Error> {
//!         &mut self.methods
//!     }
//! }
//!
//! let mut counter = Counter { count: 0, methods: MethodTable::new() };
//! counter.method_table_mut().define("add", |c: &mut Counter, n: &u32| {
//!     c.count += n;
//!     Ok(c.count)
//! });
//!
//! // Double every increment.
//! counter.around("add", |orig, c, n| orig.call(c, &(n * 2))).unwrap();
//!
//! assert_eq!(counter.invoke("add", &5), Ok(10));
//! assert!(matches!(counter.invoke("sub", &1), Err(Error::Advice(_))));
//! ```

use crate::advice::Advice;
use crate::error::AdviceError;
use crate::method::Method;
use crate::table::MethodTable;

/// The method handle type of an [`Advisable`] type.
pub type MethodOf<S> =
    Method<S, <S as Advisable>::Args, <S as Advisable>::Output, <S as Advisable>::Error>;

/// The method table type of an [`Advisable`] type.
pub type TableOf<S> =
    MethodTable<S, <S as Advisable>::Args, <S as Advisable>::Output, <S as Advisable>::Error>;

/// A type that can advise its own methods by name.
///
/// All installers mutate only the table returned by [`method_table_mut`](Self::method_table_mut).
/// A type that wants advice shared across instances should share it explicitly, for example
/// by cloning a prototype table into each instance or by applying one [`Advice`] value to each.
pub trait Advisable: Sized + 'static {
    /// Argument pack passed to every method.
    type Args: 'static;
    /// Value returned by every method.
    type Output: 'static;
    /// Error type of methods and advice.
    type Error: 'static;

    /// The table holding this value's methods.
    fn method_table(&self) -> &TableOf<Self>;

    /// Mutable access to the table holding this value's methods.
    fn method_table_mut(&mut self) -> &mut TableOf<Self>;

    /// Install `advice` on each method named in the whitespace-separated `names`.
    fn advise(
        &mut self,
        names: &str,
        advice: &Advice<Self, Self::Args, Self::Output, Self::Error>,
    ) -> Result<(), AdviceError> {
        self.method_table_mut().advise(names, advice)
    }

    /// Run `advice` before each named method.
    fn before<U, F>(&mut self, names: &str, advice: F) -> Result<(), AdviceError>
    where
        F: Fn(&mut Self, &Self::Args) -> Result<U, Self::Error> + 'static,
    {
        self.method_table_mut().before(names, advice)
    }

    /// Run `advice` after each named method returns successfully.
    fn after<U, F>(&mut self, names: &str, advice: F) -> Result<(), AdviceError>
    where
        F: Fn(&mut Self, &Self::Args) -> Result<U, Self::Error> + 'static,
    {
        self.method_table_mut().after(names, advice)
    }

    /// Let `advice` control each named method.
    fn around<F>(&mut self, names: &str, advice: F) -> Result<(), AdviceError>
    where
        F: Fn(&MethodOf<Self>, &mut Self, &Self::Args) -> Result<Self::Output, Self::Error>
            + 'static,
    {
        self.method_table_mut().around(names, advice)
    }

    /// A handle to the method currently stored under `name`.
    fn method(&self, name: &str) -> Result<MethodOf<Self>, AdviceError> {
        self.method_table().resolve(name).cloned()
    }

    /// Call the method stored under `name` with `self` as the receiver.
    ///
    /// The handle is taken out of the table before the call, so the method (or its advice) may
    /// install further advice on `self`; such changes apply from the next call on.
    fn invoke(&mut self, name: &str, args: &Self::Args) -> Result<Self::Output, Self::Error>
    where
        Self::Error: From<AdviceError>,
    {
        let method = self.method(name)?;
        method.call(self, args)
    }
}
