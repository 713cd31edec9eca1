// Copyright 2025 the Multiroot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Component instance cache: one instance per component name, never recreated.

use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;

use crate::error::ToolbarError;
use crate::factory::ComponentFactory;

/// Handle of a cached component instance.
///
/// Keys are slot indices into the owning [`ComponentInstanceCache`]. The cache
/// never evicts, so a key stays valid, and keeps naming the same instance, for
/// as long as the cache lives. Two keys are equal exactly when they name the
/// same instance.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct ComponentKey(u32);

impl ComponentKey {
    #[allow(
        clippy::cast_possible_truncation,
        reason = "Component keys are 32-bit; a toolbar never holds 2^32 components."
    )]
    const fn new(idx: usize) -> Self {
        Self(idx as u32)
    }

    /// Slot index of the instance, in creation order.
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Debug)]
struct Slot<C> {
    name: String,
    component: C,
}

/// Lazily builds and keeps one component per name.
///
/// ## Semantics
///
/// - The first [`get`](Self::get) for a name calls the factory and stores the instance.
/// - Later calls for the same name return the stored key; the factory is not consulted.
/// - A factory miss is reported as [`ToolbarError::UnknownComponent`] and nothing is
///   stored, so the name can succeed later (for example after registering it).
/// - There is no eviction. [`destroy`](Self::destroy) hands every instance back to the
///   factory in creation order.
pub struct ComponentInstanceCache<F: ComponentFactory> {
    factory: F,
    slots: Vec<Slot<F::Component>>,
    by_name: BTreeMap<String, ComponentKey>,
}

impl<F: ComponentFactory> core::fmt::Debug for ComponentInstanceCache<F> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ComponentInstanceCache")
            .field("instances", &self.slots.len())
            .field("names", &self.by_name.keys())
            .finish_non_exhaustive()
    }
}

impl<F: ComponentFactory> ComponentInstanceCache<F> {
    /// Create an empty cache backed by `factory`.
    pub fn new(factory: F) -> Self {
        Self {
            factory,
            slots: Vec::new(),
            by_name: BTreeMap::new(),
        }
    }

    /// Return the key for `name`, creating the instance on first use.
    pub fn get(&mut self, name: &str) -> Result<ComponentKey, ToolbarError> {
        if let Some(&key) = self.by_name.get(name) {
            return Ok(key);
        }
        let Some(component) = self.factory.create(name) else {
            tracing::debug!(name, "component factory has no creator");
            return Err(ToolbarError::UnknownComponent { name: name.into() });
        };
        let key = ComponentKey::new(self.slots.len());
        self.slots.push(Slot {
            name: name.into(),
            component,
        });
        self.by_name.insert(name.into(), key);
        tracing::trace!(name, index = key.index(), "created toolbar component");
        Ok(key)
    }

    /// Key of an already created instance, without creating one.
    pub fn key_of(&self, name: &str) -> Option<ComponentKey> {
        self.by_name.get(name).copied()
    }

    /// The instance behind `key`.
    pub fn instance(&self, key: ComponentKey) -> Option<&F::Component> {
        self.slots.get(key.index()).map(|s| &s.component)
    }

    /// The instance behind `key`, mutably (e.g. to toggle an open dropdown).
    pub fn instance_mut(&mut self, key: ComponentKey) -> Option<&mut F::Component> {
        self.slots.get_mut(key.index()).map(|s| &mut s.component)
    }

    /// Name the instance behind `key` was created for.
    pub fn name(&self, key: ComponentKey) -> Option<&str> {
        self.slots.get(key.index()).map(|s| s.name.as_str())
    }

    /// Names of created instances, in creation order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.slots.iter().map(|s| s.name.as_str())
    }

    /// Number of created instances.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns true if nothing has been created yet.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// The backing factory.
    pub fn factory(&self) -> &F {
        &self.factory
    }

    /// The backing factory, mutably (e.g. to register more creators).
    pub fn factory_mut(&mut self) -> &mut F {
        &mut self.factory
    }

    /// Dispose every instance through the factory, in creation order, and return the factory.
    pub fn destroy(self) -> F {
        let Self {
            mut factory, slots, ..
        } = self;
        let count = slots.len();
        for slot in slots {
            factory.dispose(&slot.name, slot.component);
        }
        tracing::debug!(count, "destroyed toolbar components");
        factory
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use alloc::vec;

    /// A component that remembers which creation it came from.
    #[derive(Clone, Debug, PartialEq, Eq)]
    pub(crate) struct Probe {
        pub(crate) name: String,
        pub(crate) serial: usize,
        pub(crate) open: bool,
    }

    /// Factory knowing a fixed set of names, counting creations and disposals.
    #[derive(Debug, Default)]
    pub(crate) struct ProbeFactory {
        pub(crate) known: Vec<String>,
        pub(crate) created: usize,
        pub(crate) disposed: Vec<String>,
    }

    impl ProbeFactory {
        pub(crate) fn knowing(names: &[&str]) -> Self {
            Self {
                known: names.iter().map(|s| String::from(*s)).collect(),
                ..Self::default()
            }
        }
    }

    impl ComponentFactory for ProbeFactory {
        type Component = Probe;

        fn create(&mut self, name: &str) -> Option<Probe> {
            if !self.known.iter().any(|k| k == name) {
                return None;
            }
            self.created += 1;
            Some(Probe {
                name: name.into(),
                serial: self.created,
                open: false,
            })
        }

        fn dispose(&mut self, name: &str, _component: Probe) {
            self.disposed.push(name.into());
        }
    }

    #[test]
    fn repeated_get_returns_same_instance() {
        let mut cache = ComponentInstanceCache::new(ProbeFactory::knowing(&["bold"]));
        let first = cache.get("bold").unwrap();
        for _ in 0..5 {
            assert_eq!(cache.get("bold").unwrap(), first);
        }
        assert_eq!(cache.factory().created, 1, "factory must run once per name");
        assert_eq!(cache.instance(first).unwrap().serial, 1);
    }

    #[test]
    fn distinct_names_get_distinct_keys() {
        let mut cache = ComponentInstanceCache::new(ProbeFactory::knowing(&["a", "b"]));
        let a = cache.get("a").unwrap();
        let b = cache.get("b").unwrap();
        assert_ne!(a, b);
        assert_eq!(cache.names().collect::<Vec<_>>(), ["a", "b"]);
        assert_eq!(cache.name(b), Some("b"));
        assert_eq!(cache.key_of("a"), Some(a));
        assert_eq!(cache.key_of("c"), None);
    }

    #[test]
    fn unknown_component_is_not_cached_and_can_succeed_later() {
        let mut cache = ComponentInstanceCache::new(ProbeFactory::knowing(&[]));
        assert_eq!(
            cache.get("bold"),
            Err(ToolbarError::UnknownComponent {
                name: "bold".into()
            })
        );
        assert!(cache.is_empty());

        cache.factory_mut().known.push("bold".into());
        let key = cache.get("bold").unwrap();
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.instance(key).unwrap().name, "bold");
    }

    #[test]
    fn instance_state_survives_lookups() {
        let mut cache = ComponentInstanceCache::new(ProbeFactory::knowing(&["heading"]));
        let key = cache.get("heading").unwrap();
        cache.instance_mut(key).unwrap().open = true;
        let again = cache.get("heading").unwrap();
        assert!(cache.instance(again).unwrap().open);
    }

    #[test]
    fn destroy_disposes_in_creation_order() {
        let mut cache = ComponentInstanceCache::new(ProbeFactory::knowing(&["a", "b", "c"]));
        for name in ["c", "a", "c", "b"] {
            cache.get(name).unwrap();
        }
        let factory = cache.destroy();
        assert_eq!(factory.disposed, vec!["c", "a", "b"]);
    }
}
