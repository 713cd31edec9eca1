// Copyright 2025 the Multiroot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Roots added and removed while the editor runs.
//!
//! A root is added inside a model change together with a selection move into it;
//! the toolbar is recomputed once, after the change. Removing a focused root clears
//! the focus pointer and stops its focus events from counting.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p multiroot_demos --example dynamic_roots`

use multiroot_focus::FocusEvent;
use multiroot_toolbar::{ComponentRegistry, FlatToolbar, ResolveFailure, ToolbarConfig};
use multiroot_ui::{EditingView, MultiRootEditorUi, PlaceholderConfig, UiError};
use tracing_subscriber::EnvFilter;

#[derive(Default)]
struct Dom {
    placeholders: Vec<(String, String)>,
    detached: Vec<String>,
}

impl EditingView<u32> for Dom {
    fn attach_dom_root(&mut self, root: &str, element: &u32) {
        println!("  attach {root} -> #{element}");
    }

    fn detach_dom_root(&mut self, root: &str) {
        self.detached.push(root.into());
    }

    fn set_placeholder(&mut self, root: &str, text: &str) {
        self.placeholders.push((root.into(), text.into()));
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}

fn main() {
    init_tracing();

    let mut components: ComponentRegistry<&'static str> = ComponentRegistry::default();
    for name in ["undo", "bold", "table"] {
        components.add(name, move |_| name);
    }
    // Sidebars get a short toolbar; `locked-*` roots have none to offer.
    let fallback = FlatToolbar::new(["undo", "bold", "table"]);
    let config = ToolbarConfig::per_root_callback(fallback, |root| {
        if root.starts_with("locked-") {
            Err(ResolveFailure::new("root is locked"))
        } else if root.starts_with("sidebar") {
            Ok(Some(vec!["undo".into()]))
        } else {
            Ok(None)
        }
    });
    let placeholders = PlaceholderConfig::Text("Type here...".into());
    let mut ui =
        MultiRootEditorUi::new(config, components, Dom::default()).with_placeholders(placeholders);

    ui.add_editable("main", 1, None).unwrap();
    ui.on_selection_change("main").unwrap();
    println!("main: {:?}", ui.toolbar().item_names().collect::<Vec<_>>());

    println!("== Add a sidebar and move the selection into it ==");
    let revision = ui
        .change(|ui| {
            ui.add_editable("sidebar-1", 2, Some("Notes...")).unwrap();
            ui.on_selection_change("sidebar-1").unwrap();
            ui.toolbar_revision()
        })
        .unwrap();
    assert_eq!(revision, 1, "recompute waits for the end of the change");
    assert_eq!(ui.toolbar_revision(), 2);
    assert_eq!(ui.toolbar().item_names().collect::<Vec<_>>(), ["undo"]);
    assert_eq!(
        ui.view().placeholders,
        [
            ("main".to_string(), "Type here...".to_string()),
            ("sidebar-1".to_string(), "Notes...".to_string()),
        ]
    );

    println!("== Focus the sidebar, then remove it ==");
    ui.handle_focus_event(&2, FocusEvent::Focus);
    assert!(ui.is_editable_focused("sidebar-1"));
    assert_eq!(ui.remove_editable("sidebar-1"), Some(2));
    assert!(!ui.focus_state().is_focused);
    assert!(ui.handle_focus_event(&2, FocusEvent::Focus).is_empty());
    assert_eq!(ui.remove_editable("sidebar-1"), None);

    println!("== A root whose toolbar cannot be resolved ==");
    ui.add_editable("locked-1", 3, None).unwrap();
    let err = ui.on_selection_change("locked-1").unwrap_err();
    println!("  error: {err}");
    assert!(matches!(err, UiError::Toolbar(_)));
    assert_eq!(
        ui.toolbar().item_names().collect::<Vec<_>>(),
        ["undo"],
        "previous toolbar stays"
    );

    let teardown = ui.destroy();
    assert_eq!(teardown.view.detached, ["sidebar-1", "main", "locked-1"]);
    assert_eq!(teardown.elements, [("main".to_string(), 1), ("locked-1".to_string(), 3)]);
}
