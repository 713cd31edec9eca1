// Copyright 2025 the Multiroot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The rendering layer, as seen by the editor UI.

/// Editing view hosting the editable elements.
///
/// `E` is the host's element handle. Only attachment, placeholders, and teardown
/// are driven from here; everything else about rendering stays with the host.
pub trait EditingView<E> {
    /// Make `element` the DOM root of `root`.
    fn attach_dom_root(&mut self, root: &str, element: &E);

    /// Stop rendering `root` into its element.
    fn detach_dom_root(&mut self, root: &str);

    /// Show `text` as the placeholder of `root`.
    fn set_placeholder(&mut self, _root: &str, _text: &str) {}

    /// Tear the view down. Called last, after every root was detached.
    fn destroy(&mut self) {}
}
