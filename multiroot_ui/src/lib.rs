// Copyright 2025 the Multiroot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Multiroot UI: ties editable roots, selection, toolbar, and focus together.
//!
//! ## Overview
//!
//! [`MultiRootEditorUi`] is what a multi-root editor's UI layer owns:
//!
//! - an [`EditableRegistry`] of attached roots, each registered as an editable
//!   focus source and attached to the host's [`EditingView`];
//! - a [`SelectionRootTracker`] that turns selection notifications into toolbar
//!   recomputes, deferring them to the end of model change blocks;
//! - a [`ToolbarProjection`](multiroot_toolbar::ToolbarProjection) showing the
//!   toolbar of the selected root;
//! - a [`FocusTracker`](multiroot_focus::FocusTracker) for editables and chrome.
//!
//! [`UiConfig`] is the configuration side: the global toolbar, per-root toolbars,
//! and placeholders. With the `serde` feature it deserializes from an editor
//! configuration object.
//!
//! ## Example
//!
//! ```
//! use multiroot_toolbar::{ComponentRegistry, FlatToolbar, ToolbarConfig};
//! use multiroot_ui::{EditingView, MultiRootEditorUi};
//!
//! #[derive(Default)]
//! struct Dom {
//!     attached: Vec<String>,
//! }
//!
//! impl EditingView<u32> for Dom {
//!     fn attach_dom_root(&mut self, root: &str, _element: &u32) {
//!         self.attached.push(root.into());
//!     }
//!     fn detach_dom_root(&mut self, root: &str) {
//!         self.attached.retain(|r| r != root);
//!     }
//! }
//!
//! let mut components: ComponentRegistry<&'static str> = ComponentRegistry::default();
//! components.add("bold", |_| "B");
//! components.add("italic", |_| "I");
//!
//! let config = ToolbarConfig::per_root_map(
//!     FlatToolbar::new(["bold", "italic"]),
//!     [("title", ["bold"])],
//! );
//! let mut ui = MultiRootEditorUi::new(config, components, Dom::default());
//! ui.add_editable("title", 1, None).unwrap();
//! ui.add_editable("body", 2, None).unwrap();
//!
//! ui.on_selection_change("title").unwrap();
//! assert_eq!(ui.toolbar().item_names().collect::<Vec<_>>(), ["bold"]);
//! ui.on_selection_change("body").unwrap();
//! assert_eq!(ui.toolbar().instances().copied().collect::<Vec<_>>(), ["B", "I"]);
//!
//! let teardown = ui.destroy();
//! assert!(teardown.view.attached.is_empty());
//! assert_eq!(teardown.elements, [("title".to_string(), 1), ("body".to_string(), 2)]);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod config;
pub mod editor_ui;
pub mod error;
pub mod placeholder;
pub mod registry;
pub mod selection;
pub mod view;

pub use config::{ToolbarSetting, UiConfig};
pub use editor_ui::{MultiRootEditorUi, Teardown};
pub use error::UiError;
pub use placeholder::{PlaceholderConfig, resolve_placeholder};
pub use registry::EditableRegistry;
pub use selection::SelectionRootTracker;
pub use view::EditingView;
