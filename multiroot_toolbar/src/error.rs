// Copyright 2025 the Multiroot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors raised while resolving and materializing a toolbar.

use alloc::string::String;

use thiserror::Error;

/// Failure reported by a per-root toolbar callback.
///
/// Returned from the closure installed with
/// [`ToolbarConfig::per_root_callback`](crate::ToolbarConfig::per_root_callback)
/// and wrapped into [`ToolbarError::Resolution`] by the resolver.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("{message}")]
pub struct ResolveFailure {
    message: String,
}

impl ResolveFailure {
    /// Create a failure carrying a human-readable message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The message the callback reported.
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Errors surfaced by [`ToolbarProjection::recompute`](crate::ToolbarProjection::recompute)
/// and [`ComponentInstanceCache::get`](crate::ComponentInstanceCache::get).
///
/// Neither error leaves partial state behind: a failed recompute keeps the
/// previously published items, and a failed component creation is not cached.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ToolbarError {
    /// The per-root callback failed for `root`.
    #[error("toolbar configuration for root `{root}` could not be resolved")]
    Resolution {
        /// Root whose toolbar was being resolved.
        root: String,
        /// What the callback reported.
        #[source]
        source: ResolveFailure,
    },
    /// The component factory has nothing registered under `name`.
    #[error("no toolbar component is registered under `{name}`")]
    UnknownComponent {
        /// Requested component name.
        name: String,
    },
}
