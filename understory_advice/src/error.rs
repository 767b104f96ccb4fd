// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors raised while resolving methods by name.

use alloc::string::String;

/// Errors raised while resolving methods by name.
///
/// Failures of advice or of the advised methods themselves are never wrapped in this type;
/// they propagate as the caller's own error type.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum AdviceError {
    /// The table has no method under this name.
    #[error("no method named `{name}`")]
    UnknownMethod {
        /// The name that failed to resolve.
        name: String,
    },
}

impl AdviceError {
    pub(crate) fn unknown(name: &str) -> Self {
        Self::UnknownMethod { name: name.into() }
    }
}
