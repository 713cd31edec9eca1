// Copyright 2025 the Multiroot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the focus tracker: source handles, kinds, events, and state.

use alloc::string::String;

use thiserror::Error;

/// Identifier for a focus source registered with a [`FocusTracker`](crate::FocusTracker).
///
/// A slot index plus a generation counter. Removing a source frees its slot; a
/// later registration reusing the slot bumps the generation, so stale ids never
/// alias a live source. Use [`FocusTracker::is_alive`](crate::FocusTracker::is_alive)
/// to check liveness.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct SourceId(pub(crate) u32, pub(crate) u32);

impl SourceId {
    pub(crate) const fn new(idx: u32, generation: u32) -> Self {
        Self(idx, generation)
    }

    pub(crate) const fn idx(self) -> usize {
        self.0 as usize
    }
}

/// What a focus source belongs to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SourceKind {
    /// The editable element of the named root.
    Editable(String),
    /// Any other element of the editor (toolbar buttons, dropdown panels, balloons).
    Chrome,
}

impl SourceKind {
    /// Root name for editable sources.
    pub fn root(&self) -> Option<&str> {
        match self {
            Self::Editable(root) => Some(root.as_str()),
            Self::Chrome => None,
        }
    }
}

/// Raw focus event reported by the host for one source.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum FocusEvent {
    /// The element received focus.
    Focus,
    /// The element lost focus.
    Blur,
}

/// A transition of the aggregate [`FocusState`].
///
/// Returned by every mutating [`FocusTracker`](crate::FocusTracker) operation. The
/// aggregate transition, if any, comes first, then the pointer change.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FocusChange {
    /// The editor as a whole became focused.
    Focused,
    /// The editor as a whole lost focus.
    Blurred,
    /// The last focused editable root changed.
    LastEditableChanged {
        /// Previous root, if any.
        previous: Option<String>,
        /// New root, if any.
        current: Option<String>,
    },
}

/// Aggregate focus of the editor.
///
/// `is_focused` is true iff at least one registered source has focus.
/// `last_focused_editable` is never `Some` while `is_focused` is false.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FocusState {
    /// Some registered source has focus.
    pub is_focused: bool,
    /// Root of the editable that most recently gained focus while the editor stayed focused.
    pub last_focused_editable: Option<String>,
}

/// Errors raised when registering focus sources.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum FocusError {
    /// The element is already registered under `existing`.
    #[error("element is already registered as focus source {existing:?}")]
    AlreadyRegistered {
        /// The live registration.
        existing: SourceId,
    },
}
