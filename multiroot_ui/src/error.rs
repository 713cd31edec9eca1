// Copyright 2025 the Multiroot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors surfaced by the editor UI.

use alloc::string::String;

use multiroot_focus::FocusError;
use multiroot_toolbar::ToolbarError;
use thiserror::Error;

/// Errors from [`MultiRootEditorUi`](crate::MultiRootEditorUi) operations.
///
/// Toolbar errors surface from whichever operation triggered the recompute: a
/// selection change, an editable being added, a configuration swap, or the end of
/// a change block. Removing or looking up an unknown root is not an error; those
/// operations return `None`.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum UiError {
    /// An editable for `root` is already registered.
    #[error("an editable is already registered for root `{root}`")]
    DuplicateRoot {
        /// The root name.
        root: String,
    },
    /// Resolving or materializing the toolbar failed.
    #[error(transparent)]
    Toolbar(#[from] ToolbarError),
    /// The element is already tracked as a focus source.
    #[error(transparent)]
    Focus(#[from] FocusError),
}
