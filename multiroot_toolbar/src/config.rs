// Copyright 2025 the Multiroot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Toolbar configuration: a flat item list, a per-root map, or a per-root callback.

use alloc::boxed::Box;
use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;

use crate::error::ResolveFailure;

/// Closure deciding the toolbar for a root.
///
/// `Ok(None)` means "no rule for this root" and falls back to the flat list.
pub type RootsToolbarFn = Box<dyn Fn(&str) -> Result<Option<Vec<String>>, ResolveFailure>>;

/// An ordered list of component names plus a set of names to strip from it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FlatToolbar {
    /// Component names in display order. Names may repeat.
    pub items: Vec<String>,
    /// Names removed from the resolved sequence, every occurrence.
    pub remove_items: Vec<String>,
}

impl FlatToolbar {
    /// A flat toolbar showing `items` with nothing removed.
    pub fn new<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            items: items.into_iter().map(Into::into).collect(),
            remove_items: Vec::new(),
        }
    }

    /// Replace the remove set.
    pub fn without<I, S>(mut self, remove_items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.remove_items = remove_items.into_iter().map(Into::into).collect();
        self
    }

    /// Returns true if `name` is in the remove set.
    pub fn removes(&self, name: &str) -> bool {
        self.remove_items.iter().any(|r| r == name)
    }

    /// Apply the remove set to `items`, keeping the relative order of the rest.
    pub fn filter(&self, items: &[String]) -> Vec<String> {
        items
            .iter()
            .filter(|name| !self.removes(name))
            .cloned()
            .collect()
    }

    /// The flat item list with the remove set applied.
    pub fn resolved(&self) -> Vec<String> {
        self.filter(&self.items)
    }
}

/// Which toolbar to show for which root.
///
/// Exactly one form is active per editor. See
/// [`ToolbarConfig::resolve`] for the precedence rules.
pub enum ToolbarConfig {
    /// Same items for every root.
    FlatList(FlatToolbar),
    /// Explicit items for listed roots; other roots use `fallback`.
    PerRootMap {
        /// Toolbar for roots without an entry, and source of the remove set.
        fallback: FlatToolbar,
        /// Root name to component names.
        roots: BTreeMap<String, Vec<String>>,
    },
    /// Items computed from the root name; `None` results use `fallback`.
    PerRootCallback {
        /// Toolbar for roots the callback has no rule for.
        fallback: FlatToolbar,
        /// The callback.
        resolve: RootsToolbarFn,
    },
}

impl ToolbarConfig {
    /// Same items for every root.
    pub fn flat(toolbar: FlatToolbar) -> Self {
        Self::FlatList(toolbar)
    }

    /// Per-root entries with a flat fallback.
    pub fn per_root_map<I, R, N, S>(fallback: FlatToolbar, roots: I) -> Self
    where
        I: IntoIterator<Item = (R, N)>,
        R: Into<String>,
        N: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::PerRootMap {
            fallback,
            roots: roots
                .into_iter()
                .map(|(root, names)| (root.into(), names.into_iter().map(Into::into).collect()))
                .collect(),
        }
    }

    /// A callback deciding per root, with a flat fallback.
    pub fn per_root_callback(
        fallback: FlatToolbar,
        resolve: impl Fn(&str) -> Result<Option<Vec<String>>, ResolveFailure> + 'static,
    ) -> Self {
        Self::PerRootCallback {
            fallback,
            resolve: Box::new(resolve),
        }
    }

    /// The flat toolbar used when no per-root rule applies.
    pub fn fallback(&self) -> &FlatToolbar {
        match self {
            Self::FlatList(flat) => flat,
            Self::PerRootMap { fallback, .. } | Self::PerRootCallback { fallback, .. } => fallback,
        }
    }
}

impl Default for ToolbarConfig {
    fn default() -> Self {
        Self::FlatList(FlatToolbar::default())
    }
}

impl core::fmt::Debug for ToolbarConfig {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::FlatList(flat) => f.debug_tuple("FlatList").field(flat).finish(),
            Self::PerRootMap { fallback, roots } => f
                .debug_struct("PerRootMap")
                .field("fallback", fallback)
                .field("roots", roots)
                .finish(),
            Self::PerRootCallback { fallback, .. } => f
                .debug_struct("PerRootCallback")
                .field("fallback", fallback)
                .finish_non_exhaustive(),
        }
    }
}

impl From<FlatToolbar> for ToolbarConfig {
    fn from(flat: FlatToolbar) -> Self {
        Self::FlatList(flat)
    }
}
