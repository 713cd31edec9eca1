// Copyright 2025 the Multiroot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Selection root tracking: decides when the toolbar has to be recomputed.
//!
//! ## Change blocks
//!
//! Between [`SelectionRootTracker::begin_change`] and the matching
//! [`SelectionRootTracker::end_change`], notifications are only recorded. The
//! recompute they call for is reported once, when the outermost block ends, so it
//! sees the root set and configuration as they are after the whole change.

use alloc::string::String;

/// Remembers the root holding the selection and reports changes of it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectionRootTracker {
    current: Option<String>,
    pending: Option<String>,
    depth: u32,
    forced: bool,
}

impl SelectionRootTracker {
    /// Create a tracker with no recorded root.
    pub fn new() -> Self {
        Self::default()
    }

    /// Root the toolbar was last computed for.
    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// Returns true inside a change block.
    pub fn in_change(&self) -> bool {
        self.depth > 0
    }

    /// Record the root holding the selection anchor.
    ///
    /// Returns true when the caller should recompute for [`current`](Self::current)
    /// now. Moves within the same root return false. Inside a change block the root
    /// is parked and false is returned; [`end_change`](Self::end_change) reports it.
    pub fn observe(&mut self, root: &str) -> bool {
        if self.in_change() {
            tracing::trace!(root, "selection change deferred");
            self.pending = Some(root.into());
            return false;
        }
        self.settle(root)
    }

    /// Ask for a recompute of the current root even though it did not change.
    ///
    /// Returns the root to recompute now, or `None` if there is no current root or
    /// the request is deferred to the end of the change block.
    pub fn request_refresh(&mut self) -> Option<String> {
        self.current.as_ref()?;
        self.forced = true;
        if self.in_change() {
            return None;
        }
        self.forced = false;
        self.current.clone()
    }

    /// Enter a (possibly nested) change block.
    pub fn begin_change(&mut self) {
        self.depth += 1;
    }

    /// Leave a change block.
    ///
    /// When the outermost block ends, returns the root to recompute for, if any
    /// notification or refresh request arrived inside the block calls for one.
    pub fn end_change(&mut self) -> Option<String> {
        if self.depth == 0 {
            return None;
        }
        self.depth -= 1;
        if self.in_change() {
            return None;
        }
        let target = match self.pending.take() {
            Some(root) => self.settle(&root).then_some(root),
            None if self.forced => {
                self.forced = false;
                self.current.clone()
            }
            None => None,
        };
        if let Some(root) = &target {
            tracing::debug!(root = root.as_str(), "running deferred toolbar recompute");
        }
        target
    }

    /// Drop every record of `root` (it was removed, or its recompute failed).
    ///
    /// Selecting the root again afterwards is reported as a change.
    pub fn forget(&mut self, root: &str) {
        if self.current.as_deref() == Some(root) {
            self.current = None;
            self.forced = false;
        }
        if self.pending.as_deref() == Some(root) {
            self.pending = None;
        }
    }

    fn settle(&mut self, root: &str) -> bool {
        if !self.forced && self.current.as_deref() == Some(root) {
            return false;
        }
        self.forced = false;
        tracing::debug!(
            previous = self.current.as_deref(),
            root,
            "selection root changed"
        );
        self.current = Some(root.into());
        true
    }
}
