// Copyright 2025 the Multiroot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The editor UI: editable roots, the selection-driven toolbar, and focus.

use alloc::string::String;
use alloc::vec::Vec;

use multiroot_focus::{FocusChange, FocusEvent, FocusState, FocusTracker, SourceId};
use multiroot_toolbar::{ComponentFactory, ComponentKey, ToolbarConfig, ToolbarProjection};

use crate::config::UiConfig;
use crate::error::UiError;
use crate::placeholder::{PlaceholderConfig, resolve_placeholder};
use crate::registry::EditableRegistry;
use crate::selection::SelectionRootTracker;
use crate::view::EditingView;

/// What [`MultiRootEditorUi::destroy`] hands back to the host.
#[derive(Debug)]
pub struct Teardown<E, F, V> {
    /// The destroyed view.
    pub view: V,
    /// The factory, after every component was disposed through it.
    pub factory: F,
    /// Roots that were still attached and their untouched elements, in attachment order.
    pub elements: Vec<(String, E)>,
}

/// UI of a multi-root editor.
///
/// Owns the toolbar projection, the focus tracker, and the editable registry, and
/// drives an [`EditingView`]. The host forwards three kinds of input:
///
/// - root lifecycle: [`add_editable`](Self::add_editable) and
///   [`remove_editable`](Self::remove_editable);
/// - selection: [`on_selection_change`](Self::on_selection_change), bracketed by
///   [`begin_change`](Self::begin_change)/[`end_change`](Self::end_change) while a
///   model change is in progress;
/// - focus: [`handle_focus_event`](Self::handle_focus_event) for editables and for
///   chrome registered with [`add_focusable`](Self::add_focusable).
///
/// Toolbar errors are returned from whichever of these triggered the recompute.
pub struct MultiRootEditorUi<E, F: ComponentFactory, V> {
    view: V,
    toolbar: ToolbarProjection<F>,
    focus: FocusTracker<E>,
    editables: EditableRegistry<E>,
    selection: SelectionRootTracker,
    placeholders: Option<PlaceholderConfig>,
}

impl<E: core::fmt::Debug, F: ComponentFactory, V> core::fmt::Debug
    for MultiRootEditorUi<E, F, V>
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("MultiRootEditorUi")
            .field("toolbar", &self.toolbar)
            .field("focus", &self.focus)
            .field("editables", &self.editables)
            .field("selection", &self.selection)
            .field("placeholders", &self.placeholders)
            .finish_non_exhaustive()
    }
}

impl<E, F: ComponentFactory, V: EditingView<E>> MultiRootEditorUi<E, F, V> {
    /// Create a UI with no roots. The toolbar stays empty until a root is selected.
    pub fn new(config: ToolbarConfig, factory: F, view: V) -> Self {
        Self {
            view,
            toolbar: ToolbarProjection::new(config, factory),
            focus: FocusTracker::new(),
            editables: EditableRegistry::new(),
            selection: SelectionRootTracker::new(),
            placeholders: None,
        }
    }

    /// Create a UI from a parsed editor configuration.
    pub fn from_config(config: &UiConfig, factory: F, view: V) -> Self {
        let ui = Self::new(config.toolbar_config(), factory, view);
        match &config.placeholder {
            Some(placeholders) => ui.with_placeholders(placeholders.clone()),
            None => ui,
        }
    }

    /// Use `placeholders` for editables added from now on.
    pub fn with_placeholders(mut self, placeholders: PlaceholderConfig) -> Self {
        self.placeholders = Some(placeholders);
        self
    }

    /// Element of `root`, or `None` if the root is not attached.
    pub fn editable_element(&self, root: &str) -> Option<&E> {
        self.editables.element(root)
    }

    /// Attached roots, in attachment order.
    pub fn editable_roots(&self) -> impl Iterator<Item = &str> + '_ {
        self.editables.roots()
    }

    /// Report that the selection anchor is now in `root`.
    ///
    /// Recomputes the toolbar when the root differs from the previous one. Inside a
    /// change block the recompute waits for the outermost [`end_change`](Self::end_change).
    pub fn on_selection_change(&mut self, root: &str) -> Result<(), UiError> {
        if self.selection.observe(root) {
            self.recompute(root)?;
        }
        Ok(())
    }

    /// Enter a model change block.
    pub fn begin_change(&mut self) {
        self.selection.begin_change();
    }

    /// Leave a model change block, running the recompute deferred inside it.
    pub fn end_change(&mut self) -> Result<(), UiError> {
        match self.selection.end_change() {
            Some(root) => self.recompute(&root),
            None => Ok(()),
        }
    }

    /// Run `f` inside a change block.
    ///
    /// The value of `f` is returned once the deferred recompute succeeded.
    pub fn change<R>(&mut self, f: impl FnOnce(&mut Self) -> R) -> Result<R, UiError> {
        self.begin_change();
        let out = f(self);
        self.end_change()?;
        Ok(out)
    }

    /// Swap the toolbar configuration and recompute for the current root.
    ///
    /// Components already created stay cached and are reused by name.
    pub fn set_toolbar_config(&mut self, config: ToolbarConfig) -> Result<(), UiError> {
        self.toolbar.set_config(config);
        self.refresh()
    }

    /// The toolbar projection.
    pub fn toolbar(&self) -> &ToolbarProjection<F> {
        &self.toolbar
    }

    /// The toolbar projection, mutably (to reach component instances).
    pub fn toolbar_mut(&mut self) -> &mut ToolbarProjection<F> {
        &mut self.toolbar
    }

    /// Keys of the visible toolbar components, in display order.
    pub fn toolbar_items(&self) -> &[ComponentKey] {
        self.toolbar.items()
    }

    /// Number of toolbar publications so far.
    pub fn toolbar_revision(&self) -> u64 {
        self.toolbar.revision()
    }

    /// Aggregate focus of the editor.
    pub fn focus_state(&self) -> &FocusState {
        self.focus.state()
    }

    /// Returns true if the editor is focused and `root` was the last editable focused.
    pub fn is_editable_focused(&self, root: &str) -> bool {
        self.focus.is_editable_focused(root)
    }

    /// The focus tracker.
    pub fn focus(&self) -> &FocusTracker<E> {
        &self.focus
    }

    /// The editing view.
    pub fn view(&self) -> &V {
        &self.view
    }

    /// The editing view, mutably.
    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    /// Tear the UI down and hand back the view, the factory, and the root elements.
    ///
    /// Every root is detached from the view in attachment order. Then the focus
    /// tracker is cleared and the toolbar disposes its components. The view is
    /// destroyed last.
    pub fn destroy(mut self) -> Teardown<E, F, V> {
        tracing::debug!(roots = self.editables.len(), "destroying editor ui");
        let mut elements = Vec::with_capacity(self.editables.len());
        for (root, element) in self.editables.drain() {
            self.view.detach_dom_root(&root);
            elements.push((root, element));
        }
        self.focus.clear();
        let factory = self.toolbar.destroy();
        self.view.destroy();
        Teardown {
            view: self.view,
            factory,
            elements,
        }
    }

    fn refresh(&mut self) -> Result<(), UiError> {
        match self.selection.request_refresh() {
            Some(root) => self.recompute(&root),
            None => Ok(()),
        }
    }

    fn recompute(&mut self, root: &str) -> Result<(), UiError> {
        if let Err(err) = self.toolbar.recompute(root) {
            // Forget the root so the next notification for it retries.
            self.selection.forget(root);
            tracing::debug!(root, %err, "toolbar recompute failed");
            return Err(err.into());
        }
        Ok(())
    }
}

impl<E: Clone + PartialEq, F: ComponentFactory, V: EditingView<E>> MultiRootEditorUi<E, F, V> {
    /// Attach `element` as the editable of `root`.
    ///
    /// Registers it as an editable focus source, attaches it to the view, and
    /// applies the placeholder (`placeholder` wins over the configured one). If
    /// `root` already holds the selection, the toolbar is recomputed.
    pub fn add_editable(
        &mut self,
        root: &str,
        element: E,
        placeholder: Option<&str>,
    ) -> Result<(), UiError> {
        self.editables.add(&mut self.focus, root, element)?;
        if let Some(element) = self.editables.element(root) {
            self.view.attach_dom_root(root, element);
        }
        if let Some(text) = resolve_placeholder(self.placeholders.as_ref(), root, placeholder) {
            self.view.set_placeholder(root, text);
        }
        if self.selection.current() == Some(root) {
            self.refresh()?;
        }
        Ok(())
    }

    /// Detach `root` and return its element, or `None` if it is not attached.
    ///
    /// Focus events for the element are ignored afterwards. If `root` was the last
    /// focused editable, the pointer is cleared.
    pub fn remove_editable(&mut self, root: &str) -> Option<E> {
        let element = self.editables.remove(&mut self.focus, root)?;
        self.view.detach_dom_root(root);
        self.selection.forget(root);
        Some(element)
    }

    /// Track focus of a non-editable element (toolbar, dropdown, balloon).
    pub fn add_focusable(&mut self, element: E) -> Result<SourceId, UiError> {
        Ok(self.focus.add_chrome(element)?)
    }

    /// Stop tracking a non-editable element.
    pub fn remove_focusable(&mut self, element: &E) -> Vec<FocusChange> {
        self.focus.remove_element(element)
    }

    /// Forward a focus event for `element`. Unknown elements are ignored.
    pub fn handle_focus_event(&mut self, element: &E, event: FocusEvent) -> Vec<FocusChange> {
        self.focus.handle_element(element, event)
    }
}
