// Copyright 2025 the Multiroot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Placeholder text per root.

use alloc::collections::BTreeMap;
use alloc::string::String;

/// Placeholder configuration: one text for every root, or one per root.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize), serde(untagged))]
pub enum PlaceholderConfig {
    /// Same text for every root.
    Text(String),
    /// Text for listed roots only.
    PerRoot(BTreeMap<String, String>),
}

impl PlaceholderConfig {
    /// Configured text for `root`, if any.
    pub fn for_root(&self, root: &str) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text.as_str()),
            Self::PerRoot(texts) => texts.get(root).map(String::as_str),
        }
    }
}

/// Placeholder to apply to a newly added editable.
///
/// An explicit override wins over the configuration.
pub fn resolve_placeholder<'a>(
    config: Option<&'a PlaceholderConfig>,
    root: &str,
    override_text: Option<&'a str>,
) -> Option<&'a str> {
    override_text.or_else(|| config?.for_root(root))
}
