// Copyright 2025 the Multiroot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Root → component names resolution.
//!
//! ## Precedence
//!
//! 1. [`PerRootCallback`](ToolbarConfig::PerRootCallback): a `Some` result is returned as is.
//!    The fallback's remove set is not applied to it. `None` falls through to step 3.
//! 2. [`PerRootMap`](ToolbarConfig::PerRootMap): a present entry picks the items, then the
//!    fallback's remove set is applied to them. A missing entry falls through to step 3.
//! 3. Flat: the fallback items with every removed name stripped.

use alloc::string::String;
use alloc::vec::Vec;

use crate::config::ToolbarConfig;
use crate::error::ToolbarError;

impl ToolbarConfig {
    /// Resolve the ordered component names to display for `root`.
    ///
    /// Deterministic for a given configuration: calling it twice for the same
    /// root yields the same sequence, unless the callback itself is impure.
    pub fn resolve(&self, root: &str) -> Result<Vec<String>, ToolbarError> {
        match self {
            Self::FlatList(flat) => Ok(flat.resolved()),
            Self::PerRootMap { fallback, roots } => Ok(match roots.get(root) {
                Some(items) => fallback.filter(items),
                None => fallback.resolved(),
            }),
            Self::PerRootCallback { fallback, resolve } => match resolve(root) {
                Ok(Some(items)) => Ok(items),
                Ok(None) => Ok(fallback.resolved()),
                Err(source) => Err(ToolbarError::Resolution {
                    root: root.into(),
                    source,
                }),
            },
        }
    }
}
