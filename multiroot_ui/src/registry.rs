// Copyright 2025 the Multiroot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Editable registry: which root owns which element, and its focus source.

use alloc::string::String;
use alloc::vec::Vec;

use multiroot_focus::{FocusTracker, SourceId};

use crate::error::UiError;

#[derive(Clone, Debug)]
struct Editable<E> {
    root: String,
    element: E,
    source: SourceId,
}

/// Attached editable roots, in attachment order.
///
/// Each entry owns the root's element handle and the id of the editable focus
/// source registered for it. Adding registers the source; removing unregisters it.
#[derive(Clone, Debug)]
pub struct EditableRegistry<E> {
    editables: Vec<Editable<E>>,
}

impl<E> Default for EditableRegistry<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> EditableRegistry<E> {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            editables: Vec::new(),
        }
    }

    /// Element of `root`, or `None` if no such root is attached.
    pub fn element(&self, root: &str) -> Option<&E> {
        self.find(root).map(|e| &e.element)
    }

    /// Focus source registered for `root`.
    pub fn source_of(&self, root: &str) -> Option<SourceId> {
        self.find(root).map(|e| e.source)
    }

    /// Returns true if `root` is attached.
    pub fn contains(&self, root: &str) -> bool {
        self.find(root).is_some()
    }

    /// Attached roots, in attachment order.
    pub fn roots(&self) -> impl Iterator<Item = &str> + '_ {
        self.editables.iter().map(|e| e.root.as_str())
    }

    /// Number of attached roots.
    pub fn len(&self) -> usize {
        self.editables.len()
    }

    /// Returns true if no root is attached.
    pub fn is_empty(&self) -> bool {
        self.editables.is_empty()
    }

    /// Take every entry out, in attachment order, without touching focus sources.
    ///
    /// Used by teardown, which clears the focus tracker wholesale afterwards.
    pub fn drain(&mut self) -> impl Iterator<Item = (String, E)> + '_ {
        self.editables.drain(..).map(|e| (e.root, e.element))
    }

    fn find(&self, root: &str) -> Option<&Editable<E>> {
        self.editables.iter().find(|e| e.root == root)
    }
}

impl<E: Clone + PartialEq> EditableRegistry<E> {
    /// Attach `element` as the editable of `root` and register it with `focus`.
    ///
    /// A second `add` for an attached root is rejected and leaves the existing
    /// registration untouched.
    pub fn add(
        &mut self,
        focus: &mut FocusTracker<E>,
        root: &str,
        element: E,
    ) -> Result<SourceId, UiError> {
        if self.contains(root) {
            return Err(UiError::DuplicateRoot { root: root.into() });
        }
        let source = focus.add_editable(element.clone(), root)?;
        self.editables.push(Editable {
            root: root.into(),
            element,
            source,
        });
        tracing::debug!(root, ?source, "editable attached");
        Ok(source)
    }

    /// Detach `root`, unregister its focus source, and return its element.
    ///
    /// Returns `None` for roots that are not attached, so teardown can call this freely.
    pub fn remove(&mut self, focus: &mut FocusTracker<E>, root: &str) -> Option<E> {
        let Some(pos) = self.editables.iter().position(|e| e.root == root) else {
            tracing::trace!(root, "remove for unknown root ignored");
            return None;
        };
        let editable = self.editables.remove(pos);
        let changes = focus.remove(editable.source);
        tracing::debug!(root, ?changes, "editable detached");
        Some(editable.element)
    }
}
