// Copyright 2025 the Multiroot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Editor UI configuration as found in editor configuration files.
//!
//! With the `serde` feature the shape below deserializes directly; unknown keys
//! are ignored so a whole editor configuration object can be fed in.
//!
//! ```text
//! {
//!   "toolbar": ["bold", "italic"] | { "items": [...], "removeItems": [...] },
//!   "rootsToolbars": { "<root>": ["bold"] },
//!   "placeholder": "Type here..." | { "<root>": "Type here..." }
//! }
//! ```

use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;

use multiroot_toolbar::{FlatToolbar, ToolbarConfig};

use crate::placeholder::PlaceholderConfig;

/// The `toolbar` setting: a bare item list or an object with a remove list.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize), serde(untagged))]
pub enum ToolbarSetting {
    /// `["a", "b"]`
    Items(Vec<String>),
    /// `{ "items": [...], "removeItems": [...] }`
    Grouped {
        /// Component names in display order.
        #[cfg_attr(feature = "serde", serde(default))]
        items: Vec<String>,
        /// Names removed from every resolved toolbar except callback results.
        #[cfg_attr(feature = "serde", serde(default, rename = "removeItems"))]
        remove_items: Vec<String>,
    },
}

impl Default for ToolbarSetting {
    fn default() -> Self {
        Self::Items(Vec::new())
    }
}

impl ToolbarSetting {
    /// The flat toolbar this setting describes.
    pub fn to_flat(&self) -> FlatToolbar {
        match self {
            Self::Items(items) => FlatToolbar::new(items.iter().cloned()),
            Self::Grouped {
                items,
                remove_items,
            } => FlatToolbar::new(items.iter().cloned()).without(remove_items.iter().cloned()),
        }
    }
}

/// UI-related part of an editor configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Deserialize),
    serde(default, rename_all = "camelCase")
)]
pub struct UiConfig {
    /// Global toolbar, also the fallback for roots without their own entry.
    pub toolbar: ToolbarSetting,
    /// Per-root toolbars.
    pub roots_toolbars: Option<BTreeMap<String, Vec<String>>>,
    /// Placeholder texts.
    pub placeholder: Option<PlaceholderConfig>,
}

impl UiConfig {
    /// Build the toolbar configuration.
    ///
    /// A per-root callback cannot come from a file; install one with
    /// [`ToolbarConfig::per_root_callback`] using [`ToolbarSetting::to_flat`] as fallback.
    pub fn toolbar_config(&self) -> ToolbarConfig {
        let fallback = self.toolbar.to_flat();
        match &self.roots_toolbars {
            Some(roots) => ToolbarConfig::PerRootMap {
                fallback,
                roots: roots.clone(),
            },
            None => ToolbarConfig::FlatList(fallback),
        }
    }
}

#[cfg(all(test, feature = "serde"))]
mod tests {
    use super::*;
    use alloc::vec;

    fn parse(json: &str) -> UiConfig {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn toolbar_as_array() {
        let config = parse(r#"{ "toolbar": ["foo", "bar"] }"#);
        assert_eq!(config.toolbar.to_flat(), FlatToolbar::new(["foo", "bar"]));
        assert!(matches!(config.toolbar_config(), ToolbarConfig::FlatList(_)));
    }

    #[test]
    fn toolbar_as_object_with_remove_items() {
        let config = parse(
            r#"{
                "toolbar": { "items": ["foo", "bar"], "removeItems": ["bar"] },
                "ui": { "viewportOffset": { "top": 100 } }
            }"#,
        );
        assert_eq!(config.toolbar_config().resolve("any").unwrap(), vec!["foo"]);
    }

    #[test]
    fn roots_toolbars_become_a_per_root_map() {
        let config = parse(
            r#"{
                "toolbar": ["foo", "bar"],
                "rootsToolbars": { "foo": ["foo", "foo", "bar", "bar"], "bar": ["bar"] }
            }"#,
        );
        let toolbar = config.toolbar_config();
        assert_eq!(
            toolbar.resolve("foo").unwrap(),
            vec!["foo", "foo", "bar", "bar"]
        );
        assert_eq!(toolbar.resolve("baz").unwrap(), vec!["foo", "bar"]);
    }

    #[test]
    fn placeholder_forms() {
        let text = parse(r#"{ "placeholder": "Type here..." }"#);
        assert_eq!(
            text.placeholder,
            Some(PlaceholderConfig::Text("Type here...".into()))
        );
        let per_root = parse(r#"{ "placeholder": { "foo": "Type foo..." } }"#);
        assert_eq!(
            per_root.placeholder.unwrap().for_root("foo"),
            Some("Type foo...")
        );
    }

    #[test]
    fn empty_object_is_default() {
        assert_eq!(parse("{}"), UiConfig::default());
    }
}
