// Copyright 2025 the Multiroot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Focus tracker: OR-reduce per-source focus into one state with a sticky editable pointer.

use alloc::string::String;
use alloc::vec::Vec;

use crate::types::{FocusChange, FocusError, FocusEvent, FocusState, SourceId, SourceKind};

#[derive(Clone, Debug)]
struct Source<E> {
    generation: u32,
    element: E,
    kind: SourceKind,
    has_focus: bool,
    // Tick of the last focus event, to find the most recently focused element.
    focused_at: u64,
}

/// Merges focus and blur events from many elements into one [`FocusState`].
///
/// ## Transitions
///
/// - Focus on a source sets its `has_focus`. If the source is editable, its root
///   becomes [`FocusState::last_focused_editable`].
/// - Blur on a source clears its `has_focus`.
/// - After every event `is_focused` is recomputed as the OR of all sources. When it
///   goes from true to false the editable pointer is cleared; nothing else clears it
///   except removing that root's source.
///
/// Moving focus from an editable to chrome (a toolbar dropdown, say) keeps the editor
/// focused and keeps the editable as the last focused one, so consumers combining
/// the two keep showing the caret.
///
/// There are no timers: every operation settles synchronously and returns the
/// [`FocusChange`]s it caused.
///
/// ## Minimal example
///
/// ```
/// use multiroot_focus::{FocusChange, FocusEvent, FocusTracker};
///
/// let mut focus = FocusTracker::new();
/// let main = focus.add_editable("main-el", "main").unwrap();
/// let dropdown = focus.add_chrome("dropdown-el").unwrap();
///
/// focus.handle(main, FocusEvent::Focus);
/// // Opening a dropdown: the dropdown gains focus, then the editable blurs.
/// focus.handle(dropdown, FocusEvent::Focus);
/// focus.handle(main, FocusEvent::Blur);
/// assert!(focus.is_editable_focused("main"));
///
/// let changes = focus.handle(dropdown, FocusEvent::Blur);
/// assert_eq!(
///     changes,
///     [
///         FocusChange::Blurred,
///         FocusChange::LastEditableChanged {
///             previous: Some("main".into()),
///             current: None,
///         },
///     ]
/// );
/// assert_eq!(focus.state().last_focused_editable, None);
/// ```
#[derive(Clone)]
pub struct FocusTracker<E> {
    sources: Vec<Option<Source<E>>>,
    generations: Vec<u32>,
    free_list: Vec<usize>,
    state: FocusState,
    tick: u64,
}

impl<E> core::fmt::Debug for FocusTracker<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let alive = self.sources.iter().filter(|s| s.is_some()).count();
        let focused = self.sources.iter().flatten().filter(|s| s.has_focus).count();
        f.debug_struct("FocusTracker")
            .field("sources_alive", &alive)
            .field("sources_focused", &focused)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl<E> Default for FocusTracker<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> FocusTracker<E> {
    /// Create a tracker with no sources. The editor starts unfocused.
    pub fn new() -> Self {
        Self {
            sources: Vec::new(),
            generations: Vec::new(),
            free_list: Vec::new(),
            state: FocusState::default(),
            tick: 0,
        }
    }

    /// Current aggregate state.
    pub fn state(&self) -> &FocusState {
        &self.state
    }

    /// True iff at least one source has focus.
    pub fn is_focused(&self) -> bool {
        self.state.is_focused
    }

    /// Root of the last focused editable, while the editor is focused.
    pub fn last_focused_editable(&self) -> Option<&str> {
        self.state.last_focused_editable.as_deref()
    }

    /// Whether the editable of `root` should present itself as focused.
    ///
    /// True iff the editor is focused and `root` is the last focused editable,
    /// even if focus currently sits on chrome.
    pub fn is_editable_focused(&self, root: &str) -> bool {
        self.state.is_focused && self.last_focused_editable() == Some(root)
    }

    /// Returns true if `id` refers to a live source.
    pub fn is_alive(&self, id: SourceId) -> bool {
        self.source(id).is_some()
    }

    /// Kind of a live source.
    pub fn kind(&self, id: SourceId) -> Option<&SourceKind> {
        self.source(id).map(|s| &s.kind)
    }

    /// Element of a live source.
    pub fn element(&self, id: SourceId) -> Option<&E> {
        self.source(id).map(|s| &s.element)
    }

    /// Whether a live source currently reports focus.
    pub fn has_focus(&self, id: SourceId) -> bool {
        self.source(id).is_some_and(|s| s.has_focus)
    }

    /// The most recently focused element that still has focus.
    pub fn focused_element(&self) -> Option<&E> {
        self.sources
            .iter()
            .flatten()
            .filter(|s| s.has_focus)
            .max_by_key(|s| s.focused_at)
            .map(|s| &s.element)
    }

    /// Number of live sources.
    pub fn len(&self) -> usize {
        self.sources.len() - self.free_list.len()
    }

    /// Returns true if no source is registered.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Apply a raw event to a live source. Stale ids are ignored.
    pub fn handle(&mut self, id: SourceId, event: FocusEvent) -> Vec<FocusChange> {
        self.tick += 1;
        let tick = self.tick;
        let Some(source) = self.source_mut(id) else {
            tracing::trace!(?id, ?event, "focus event for stale source ignored");
            return Vec::new();
        };
        let pointer = match event {
            FocusEvent::Focus => {
                source.has_focus = true;
                source.focused_at = tick;
                source.kind.root().map(String::from)
            }
            FocusEvent::Blur => {
                source.has_focus = false;
                None
            }
        };
        let pointer = pointer.or_else(|| self.state.last_focused_editable.clone());
        self.settle(pointer)
    }

    /// Unregister a source and settle the aggregate without it.
    ///
    /// If the source was the last focused editable, the pointer is cleared. The
    /// aggregate flag is recomputed from the remaining sources.
    pub fn remove(&mut self, id: SourceId) -> Vec<FocusChange> {
        if !self.is_alive(id) {
            return Vec::new();
        }
        let Some(source) = self.sources[id.idx()].take() else {
            return Vec::new();
        };
        self.free_list.push(id.idx());
        tracing::trace!(?id, kind = ?source.kind, "focus source removed");
        let pointer = match (&self.state.last_focused_editable, source.kind.root()) {
            (Some(last), Some(root)) if last == root => None,
            (last, _) => last.clone(),
        };
        self.settle(pointer)
    }

    /// Unregister every source (editor teardown).
    pub fn clear(&mut self) -> Vec<FocusChange> {
        for (idx, slot) in self.sources.iter_mut().enumerate() {
            if slot.take().is_some() {
                self.free_list.push(idx);
            }
        }
        self.settle(None)
    }

    fn register(&mut self, element: E, kind: SourceKind) -> SourceId {
        let source = |generation| Source {
            generation,
            element,
            kind,
            has_focus: false,
            focused_at: 0,
        };
        let (idx, generation) = if let Some(idx) = self.free_list.pop() {
            let generation = self.generations[idx].saturating_add(1);
            self.generations[idx] = generation;
            self.sources[idx] = Some(source(generation));
            (idx, generation)
        } else {
            let generation = 1_u32;
            self.sources.push(Some(source(generation)));
            self.generations.push(generation);
            (self.sources.len() - 1, generation)
        };
        #[allow(
            clippy::cast_possible_truncation,
            reason = "SourceId uses 32-bit indices by design."
        )]
        SourceId::new(idx as u32, generation)
    }

    fn settle(&mut self, pointer: Option<String>) -> Vec<FocusChange> {
        let is_focused = self.sources.iter().flatten().any(|s| s.has_focus);
        let pointer = if is_focused { pointer } else { None };
        let mut changes = Vec::new();
        if is_focused != self.state.is_focused {
            self.state.is_focused = is_focused;
            changes.push(if is_focused {
                FocusChange::Focused
            } else {
                FocusChange::Blurred
            });
        }
        if pointer != self.state.last_focused_editable {
            let previous = core::mem::replace(&mut self.state.last_focused_editable, pointer);
            changes.push(FocusChange::LastEditableChanged {
                previous,
                current: self.state.last_focused_editable.clone(),
            });
        }
        if !changes.is_empty() {
            tracing::debug!(
                is_focused,
                last_focused_editable = self.state.last_focused_editable.as_deref(),
                "editor focus changed"
            );
        }
        changes
    }

    fn source(&self, id: SourceId) -> Option<&Source<E>> {
        let s = self.sources.get(id.idx())?.as_ref()?;
        (s.generation == id.1).then_some(s)
    }

    fn source_mut(&mut self, id: SourceId) -> Option<&mut Source<E>> {
        let s = self.sources.get_mut(id.idx())?.as_mut()?;
        if s.generation != id.1 {
            return None;
        }
        Some(s)
    }
}

impl<E: PartialEq> FocusTracker<E> {
    /// Register the editable element of `root`.
    pub fn add_editable(
        &mut self,
        element: E,
        root: impl Into<String>,
    ) -> Result<SourceId, FocusError> {
        self.add(element, SourceKind::Editable(root.into()))
    }

    /// Register an editor chrome element.
    pub fn add_chrome(&mut self, element: E) -> Result<SourceId, FocusError> {
        self.add(element, SourceKind::Chrome)
    }

    /// Register `element` as a source of the given kind. New sources start unfocused.
    pub fn add(&mut self, element: E, kind: SourceKind) -> Result<SourceId, FocusError> {
        if let Some(existing) = self.source_of(&element) {
            return Err(FocusError::AlreadyRegistered { existing });
        }
        let id = self.register(element, kind);
        tracing::trace!(?id, "focus source added");
        Ok(id)
    }

    /// Find the live source registered for `element`.
    pub fn source_of(&self, element: &E) -> Option<SourceId> {
        self.sources.iter().enumerate().find_map(|(idx, slot)| {
            let s = slot.as_ref()?;
            #[allow(
                clippy::cast_possible_truncation,
                reason = "SourceId uses 32-bit indices by design."
            )]
            (s.element == *element).then_some(SourceId::new(idx as u32, s.generation))
        })
    }

    /// Apply a raw event to whichever source owns `element`. Unknown elements are ignored.
    pub fn handle_element(&mut self, element: &E, event: FocusEvent) -> Vec<FocusChange> {
        match self.source_of(element) {
            Some(id) => self.handle(id, event),
            None => Vec::new(),
        }
    }

    /// Unregister the source owning `element`, if any.
    pub fn remove_element(&mut self, element: &E) -> Vec<FocusChange> {
        match self.source_of(element) {
            Some(id) => self.remove(id),
            None => Vec::new(),
        }
    }
}
