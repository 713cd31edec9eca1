// Copyright 2025 the Multiroot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Toolbar contents follow the selection from root to root.
//!
//! The configuration is parsed from JSON: a global toolbar with a remove list and
//! per-root toolbars. Components keep their state across switches because the
//! cache hands back the same instance for a name every time.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p multiroot_demos --example toolbar_swapping`

use multiroot_toolbar::{ComponentFactory, ComponentRegistry, ToolbarProjection};
use multiroot_ui::{EditingView, MultiRootEditorUi, UiConfig};
use tracing_subscriber::EnvFilter;

struct Button {
    label: String,
    presses: u32,
}

struct Headless;

impl EditingView<&'static str> for Headless {
    fn attach_dom_root(&mut self, root: &str, element: &&'static str) {
        println!("  attach {root} -> <{element}>");
    }

    fn detach_dom_root(&mut self, root: &str) {
        println!("  detach {root}");
    }
}

type Buttons = ComponentRegistry<Button, &'static str>;

fn show(toolbar: &ToolbarProjection<Buttons>) -> Vec<String> {
    toolbar
        .instances()
        .map(|b| format!("{} ({})", b.label, b.presses))
        .collect()
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

    let config: UiConfig = serde_json::from_str(
        r#"{
            "toolbar": { "items": ["heading", "bold", "italic", "link"], "removeItems": ["link"] },
            "rootsToolbars": { "header": ["heading", "bold"], "footer": ["link", "italic"] }
        }"#,
    )
    .unwrap();

    let mut buttons: Buttons = ComponentRegistry::new("en");
    for name in ["heading", "bold", "italic", "link"] {
        buttons.add(name, move |lang| Button {
            label: format!("{name} [{lang}]"),
            presses: 0,
        });
    }
    assert!(buttons.create("underline").is_none());

    let mut ui = MultiRootEditorUi::from_config(&config, buttons, Headless);
    println!("== Roots ==");
    for (root, element) in [("header", "h"), ("content", "c"), ("footer", "f")] {
        ui.add_editable(root, element, None).unwrap();
    }

    println!("== Selection in header ==");
    ui.on_selection_change("header").unwrap();
    println!("  {:?}", show(ui.toolbar()));
    assert_eq!(
        ui.toolbar().item_names().collect::<Vec<_>>(),
        ["heading", "bold"]
    );

    // Press "bold" while it is visible in the header toolbar.
    let bold = ui.toolbar().cache().key_of("bold").unwrap();
    ui.toolbar_mut().cache_mut().instance_mut(bold).unwrap().presses += 1;

    println!("== Selection in content (fallback) ==");
    ui.on_selection_change("content").unwrap();
    println!("  {:?}", show(ui.toolbar()));
    assert_eq!(
        ui.toolbar().item_names().collect::<Vec<_>>(),
        ["heading", "bold", "italic"]
    );
    assert_eq!(ui.toolbar_items()[1], bold, "same instance as in the header");

    println!("== Selection in footer (removeItems applies) ==");
    ui.on_selection_change("footer").unwrap();
    println!("  {:?}", show(ui.toolbar()));
    assert_eq!(ui.toolbar().item_names().collect::<Vec<_>>(), ["italic"]);

    ui.on_selection_change("header").unwrap();
    let pressed = ui.toolbar().instances().map(|b| b.presses).collect::<Vec<_>>();
    assert_eq!(pressed, [0, 1], "bold kept its state");
    assert_eq!(ui.toolbar().cache().len(), 3, "link was never built");
    assert_eq!(ui.toolbar_revision(), 4);

    println!("== Teardown ==");
    let teardown = ui.destroy();
    assert_eq!(teardown.elements.len(), 3);
}
