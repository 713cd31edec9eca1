// Copyright 2025 the Multiroot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Multiroot Toolbar: one toolbar, different contents per editable root.
//!
//! ## Overview
//!
//! An editor with several independently editable roots shows a single toolbar whose
//! contents depend on which root holds the selection. Switching roots must not reset
//! the state carried by toolbar components (open dropdowns, pressed flags, scroll
//! positions), so components are built once and reused.
//!
//! - [`ToolbarConfig`]: which names to show for which root. A closed set of forms:
//!   a flat list, a per-root map, or a per-root callback, each with a flat fallback.
//! - [`ToolbarConfig::resolve`]: root → ordered component names.
//! - [`ComponentFactory`]: name → live component. [`ComponentRegistry`] is a ready-made
//!   table of creators.
//! - [`ComponentInstanceCache`]: at most one instance per name, never recreated.
//! - [`ToolbarProjection`]: the visible, ordered list of [`ComponentKey`]s.
//!
//! ## Resolution precedence
//!
//! A callback result is authoritative. A per-root map entry chooses the items and the
//! fallback's remove set still applies to it. Anything else uses the flat list with its
//! remove set applied to every occurrence. See [`resolve`](mod@resolve) for details.
//!
//! ## Example
//!
//! ```
//! use multiroot_toolbar::{ComponentRegistry, FlatToolbar, ToolbarConfig, ToolbarProjection};
//!
//! let mut components: ComponentRegistry<String> = ComponentRegistry::default();
//! components.add("bold", |_| String::from("B"));
//! components.add("italic", |_| String::from("I"));
//!
//! let config = ToolbarConfig::per_root_map(
//!     FlatToolbar::new(["bold", "italic"]),
//!     [("title", ["bold"])],
//! );
//! let mut toolbar = ToolbarProjection::new(config, components);
//!
//! let body = toolbar.recompute("body").unwrap().to_vec();
//! assert_eq!(toolbar.item_names().collect::<Vec<_>>(), ["bold", "italic"]);
//!
//! toolbar.recompute("title").unwrap();
//! assert_eq!(toolbar.item_names().collect::<Vec<_>>(), ["bold"]);
//!
//! // Coming back shows the very same instances.
//! assert_eq!(toolbar.recompute("body").unwrap(), &body[..]);
//! assert_eq!(toolbar.cache().len(), 2);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod cache;
pub mod config;
pub mod error;
pub mod factory;
pub mod projection;
pub mod resolve;

pub use cache::{ComponentInstanceCache, ComponentKey};
pub use config::{FlatToolbar, RootsToolbarFn, ToolbarConfig};
pub use error::{ResolveFailure, ToolbarError};
pub use factory::{ComponentFactory, ComponentRegistry};
pub use projection::ToolbarProjection;
