// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Method-name selectors.

use smallvec::SmallVec;

/// An ordered list of method names parsed from a whitespace-separated selector.
///
/// Parsing never fails. An empty or whitespace-only selector yields no names, and a name that
/// appears more than once is kept once per appearance, in order.
///
/// ```
/// use understory_advice::MethodNames;
///
/// let names = MethodNames::parse("  render\tclick render ");
/// assert_eq!(names.iter().collect::<Vec<_>>(), ["render", "click", "render"]);
/// assert!(MethodNames::parse(" \n ").is_empty());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MethodNames<'a> {
    names: SmallVec<[&'a str; 4]>,
}

impl<'a> MethodNames<'a> {
    /// Split `selector` on whitespace.
    pub fn parse(selector: &'a str) -> Self {
        Self {
            names: selector.split_whitespace().collect(),
        }
    }

    /// Iterate over the names in the order they appeared.
    pub fn iter(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.names.iter().copied()
    }

    /// Number of names, counting repeats.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether the selector named nothing.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
