// Copyright 2025 the Multiroot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The visible toolbar: resolved names mapped through the instance cache.
//!
//! ## Publication
//!
//! [`ToolbarProjection::recompute`] either publishes a complete new item list or
//! leaves the previous one untouched. Each successful call bumps
//! [`revision`](ToolbarProjection::revision) by exactly one, which is what a
//! renderer keys its repaint on.

use alloc::string::String;
use alloc::vec::Vec;

use crate::cache::{ComponentInstanceCache, ComponentKey};
use crate::config::ToolbarConfig;
use crate::error::ToolbarError;
use crate::factory::ComponentFactory;

/// Ordered, observable collection of the components currently shown.
///
/// ## Usage
///
/// - Construct with [`ToolbarProjection::new`] from a [`ToolbarConfig`] and a factory.
/// - Call [`ToolbarProjection::recompute`] whenever the active root changes, or the
///   configuration or root set changed in a way that may affect the active root.
/// - Read [`ToolbarProjection::items`] (keys) or [`ToolbarProjection::instances`].
///
/// Recomputing for a root whose resolved names did not change yields the same keys
/// in the same order, whatever other roots were shown in between.
pub struct ToolbarProjection<F: ComponentFactory> {
    config: ToolbarConfig,
    cache: ComponentInstanceCache<F>,
    items: Vec<ComponentKey>,
    root: Option<String>,
    revision: u64,
}

impl<F: ComponentFactory> core::fmt::Debug for ToolbarProjection<F> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ToolbarProjection")
            .field("config", &self.config)
            .field("cache", &self.cache)
            .field("items", &self.items)
            .field("root", &self.root)
            .field("revision", &self.revision)
            .finish()
    }
}

impl<F: ComponentFactory> ToolbarProjection<F> {
    /// Create an empty projection. Nothing is shown until the first recompute.
    pub fn new(config: ToolbarConfig, factory: F) -> Self {
        Self {
            config,
            cache: ComponentInstanceCache::new(factory),
            items: Vec::new(),
            root: None,
            revision: 0,
        }
    }

    /// Resolve `root`, materialize the components, and publish them.
    pub fn recompute(&mut self, root: &str) -> Result<&[ComponentKey], ToolbarError> {
        let names = self.config.resolve(root)?;
        // Build off to the side so a failure leaves the published items intact.
        let items = names
            .iter()
            .map(|name| self.cache.get(name))
            .collect::<Result<Vec<_>, _>>()?;
        self.items = items;
        self.root = Some(root.into());
        self.revision += 1;
        tracing::debug!(
            root,
            items = self.items.len(),
            revision = self.revision,
            "published toolbar items"
        );
        Ok(&self.items)
    }

    /// Keys of the visible components, in display order.
    pub fn items(&self) -> &[ComponentKey] {
        &self.items
    }

    /// Names of the visible components, in display order.
    pub fn item_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.items.iter().filter_map(|&k| self.cache.name(k))
    }

    /// Visible component instances, in display order.
    pub fn instances(&self) -> impl Iterator<Item = &F::Component> + '_ {
        self.items.iter().filter_map(|&k| self.cache.instance(k))
    }

    /// Root the visible items were resolved for.
    pub fn root(&self) -> Option<&str> {
        self.root.as_deref()
    }

    /// Number of publications so far.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Active configuration.
    pub fn config(&self) -> &ToolbarConfig {
        &self.config
    }

    /// Replace the configuration.
    ///
    /// Does not publish; the caller recomputes the active root afterwards.
    pub fn set_config(&mut self, config: ToolbarConfig) {
        self.config = config;
    }

    /// The instance cache backing this projection.
    pub fn cache(&self) -> &ComponentInstanceCache<F> {
        &self.cache
    }

    /// The instance cache, mutably (e.g. to reach component state or the factory).
    pub fn cache_mut(&mut self) -> &mut ComponentInstanceCache<F> {
        &mut self.cache
    }

    /// Tear down: drop the visible items and dispose every cached component.
    pub fn destroy(self) -> F {
        tracing::debug!(
            shown = self.items.len(),
            revision = self.revision,
            "destroying toolbar projection"
        );
        self.cache.destroy()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::tests::ProbeFactory;
    use crate::config::FlatToolbar;
    use crate::error::ResolveFailure;
    use alloc::vec;

    fn scenario_config() -> ToolbarConfig {
        ToolbarConfig::per_root_map(
            FlatToolbar::new(["foo", "bar"]),
            [
                ("foo", vec!["foo", "foo", "bar", "bar"]),
                ("bar", vec!["bar"]),
            ],
        )
    }

    fn projection(config: ToolbarConfig) -> ToolbarProjection<ProbeFactory> {
        ToolbarProjection::new(config, ProbeFactory::knowing(&["foo", "bar"]))
    }

    fn shown(p: &ToolbarProjection<ProbeFactory>) -> Vec<&str> {
        p.item_names().collect()
    }

    #[test]
    fn follows_root_switches() {
        let mut p = projection(scenario_config());
        p.recompute("foo").unwrap();
        assert_eq!(shown(&p), ["foo", "foo", "bar", "bar"]);
        p.recompute("bar").unwrap();
        assert_eq!(shown(&p), ["bar"]);
        p.recompute("foo").unwrap();
        assert_eq!(shown(&p), ["foo", "foo", "bar", "bar"]);
        assert_eq!(p.root(), Some("foo"));
    }

    #[test]
    fn root_round_trip_reuses_instances() {
        let mut p = projection(scenario_config());
        let before = p.recompute("foo").unwrap().to_vec();
        p.recompute("bar").unwrap();
        let after = p.recompute("foo").unwrap().to_vec();
        assert_eq!(before, after, "same keys in the same order");
        assert_eq!(p.cache().factory().created, 2, "one instance per name");
        // Repeated names share one instance.
        assert_eq!(after[0], after[1]);
        assert_eq!(after[2], after[3]);
    }

    #[test]
    fn component_state_survives_root_switch() {
        let mut p = projection(scenario_config());
        let bar = p.recompute("foo").unwrap()[2];
        p.cache_mut().instance_mut(bar).unwrap().open = true;
        p.recompute("bar").unwrap();
        assert!(p.instances().all(|c| c.open));
        assert_eq!(p.instances().next().map(|c| c.serial), Some(2));
    }

    #[test]
    fn missing_entry_falls_back_to_flat() {
        let mut p = projection(scenario_config());
        p.recompute("baz").unwrap();
        assert_eq!(shown(&p), ["foo", "bar"]);
    }

    #[test]
    fn each_recompute_publishes_once() {
        let mut p = projection(scenario_config());
        assert_eq!(p.revision(), 0);
        p.recompute("foo").unwrap();
        p.recompute("foo").unwrap();
        p.recompute("bar").unwrap();
        assert_eq!(p.revision(), 3);
    }

    #[test]
    fn failed_resolution_keeps_previous_items() {
        let mut p = projection(ToolbarConfig::per_root_callback(
            FlatToolbar::new(["foo"]),
            |root| match root {
                "broken" => Err(ResolveFailure::new("boom")),
                _ => Ok(None),
            },
        ));
        let before = p.recompute("foo").unwrap().to_vec();
        let err = p.recompute("broken").unwrap_err();
        assert!(matches!(err, ToolbarError::Resolution { ref root, .. } if root == "broken"));
        assert_eq!(p.items(), &before[..]);
        assert_eq!(p.revision(), 1);
        assert_eq!(p.root(), Some("foo"));
    }

    #[test]
    fn unknown_component_keeps_previous_items_and_caches_nothing_for_it() {
        let mut p = projection(ToolbarConfig::per_root_map(
            FlatToolbar::new(["foo"]),
            [("odd", vec!["bar", "mystery"])],
        ));
        p.recompute("foo").unwrap();
        let err = p.recompute("odd").unwrap_err();
        assert_eq!(
            err,
            ToolbarError::UnknownComponent {
                name: "mystery".into()
            }
        );
        assert_eq!(shown(&p), ["foo"]);
        assert_eq!(p.cache().key_of("mystery"), None);

        p.cache_mut().factory_mut().known.push("mystery".into());
        p.recompute("odd").unwrap();
        assert_eq!(shown(&p), ["bar", "mystery"]);
    }

    #[test]
    fn set_config_does_not_publish() {
        let mut p = projection(scenario_config());
        p.recompute("foo").unwrap();
        p.set_config(ToolbarConfig::flat(FlatToolbar::new(["bar"])));
        assert_eq!(p.revision(), 1);
        assert_eq!(shown(&p), ["foo", "foo", "bar", "bar"]);
        p.recompute("foo").unwrap();
        assert_eq!(shown(&p), ["bar"]);
    }

    #[test]
    fn destroy_disposes_everything_once() {
        let mut p = projection(scenario_config());
        p.recompute("foo").unwrap();
        p.recompute("bar").unwrap();
        let factory = p.destroy();
        assert_eq!(factory.disposed, vec!["foo", "bar"]);
    }
}
