// Copyright 2025 the Multiroot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Multiroot Focus: one "is the editor focused" flag from many elements.
//!
//! ## Overview
//!
//! An editor is made of several editable roots plus chrome: toolbar buttons,
//! dropdown panels, balloons. The host reports raw focus and blur events per element;
//! [`FocusTracker`] merges them into a [`FocusState`]:
//!
//! - `is_focused`: some registered element has focus.
//! - `last_focused_editable`: the root whose editable most recently gained focus.
//!   It is sticky: focus moving from an editable to chrome keeps it, and only a real
//!   focus loss (the aggregate flag dropping to false) or removing that root clears it.
//!
//! Sources are addressed by generational [`SourceId`]s, so ids of removed sources
//! never alias newer registrations.
//!
//! ## Layering
//!
//! The tracker does not listen to anything itself. Wire your toolkit's focus and blur
//! notifications to [`FocusTracker::handle`] or [`FocusTracker::handle_element`] and
//! react to the returned [`FocusChange`]s (or read [`FocusTracker::state`]).
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod tracker;
pub mod types;

pub use tracker::FocusTracker;
pub use types::{FocusChange, FocusError, FocusEvent, FocusState, SourceId, SourceKind};
