// Copyright 2025 the Multiroot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sticky "last focused editable" across editor chrome.
//!
//! Focus moves from an editable into a toolbar dropdown and back out of the editor.
//! The editor stays focused while the dropdown has focus, and the pointer keeps
//! naming the editable the user came from.
//!
//! Run:
//! - `RUST_LOG=multiroot_focus=debug cargo run -p multiroot_demos --example sticky_focus`

use multiroot_focus::{FocusChange, FocusEvent, FocusTracker};
use tracing_subscriber::EnvFilter;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
enum Element {
    Editable(&'static str),
    Dropdown,
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

    let mut focus = FocusTracker::new();
    for root in ["main", "aside"] {
        focus.add_editable(Element::Editable(root), root).unwrap();
    }
    focus.add_chrome(Element::Dropdown).unwrap();

    let steps = [
        (Element::Editable("main"), FocusEvent::Focus),
        (Element::Dropdown, FocusEvent::Focus),
        (Element::Editable("main"), FocusEvent::Blur),
        (Element::Dropdown, FocusEvent::Blur),
        (Element::Dropdown, FocusEvent::Focus),
    ];
    let mut log = Vec::new();
    for (element, event) in steps {
        let changes = focus.handle_element(&element, event);
        println!("{element:?} {event:?}\n  {changes:?}\n  {:?}", focus.state());
        log.push(changes);
    }

    assert_eq!(
        log[0],
        vec![
            FocusChange::Focused,
            FocusChange::LastEditableChanged {
                previous: None,
                current: Some("main".into()),
            },
        ]
    );
    assert!(log[1].is_empty() && log[2].is_empty(), "hand-off to chrome");
    assert_eq!(
        log[3],
        vec![
            FocusChange::Blurred,
            FocusChange::LastEditableChanged {
                previous: Some("main".into()),
                current: None,
            },
        ]
    );
    // Coming back through chrome does not bring the pointer back.
    assert_eq!(log[4], vec![FocusChange::Focused]);
    assert!(focus.is_focused());
    assert!(!focus.is_editable_focused("main"));
    assert_eq!(focus.focused_element(), Some(&Element::Dropdown));
}
