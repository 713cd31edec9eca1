// Copyright 2025 the Multiroot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Component factories: turn a component name into a live instance.

use alloc::boxed::Box;
use alloc::collections::BTreeMap;
use alloc::string::String;

/// Produces toolbar components by name.
///
/// The [`ComponentInstanceCache`](crate::ComponentInstanceCache) calls
/// [`create`](Self::create) at most once per name and hands every instance back
/// through [`dispose`](Self::dispose) when it is destroyed.
pub trait ComponentFactory {
    /// Live component type.
    type Component;

    /// Create the component registered under `name`, or `None` if there is none.
    fn create(&mut self, name: &str) -> Option<Self::Component>;

    /// Release a component when the owning cache is destroyed.
    fn dispose(&mut self, _name: &str, _component: Self::Component) {}
}

type Creator<C, L> = Box<dyn Fn(&L) -> C>;

/// A name → creator table with a shared locale.
///
/// Creators receive the registry's locale (any context type `L`) so that
/// components can localize labels at construction time.
///
/// ```
/// use multiroot_toolbar::{ComponentFactory, ComponentRegistry};
///
/// let mut registry: ComponentRegistry<String, &str> = ComponentRegistry::new("en");
/// registry.add("bold", |lang| format!("bold ({lang})"));
/// assert_eq!(registry.create("bold").as_deref(), Some("bold (en)"));
/// assert!(registry.create("italic").is_none());
/// ```
pub struct ComponentRegistry<C, L = ()> {
    locale: L,
    creators: BTreeMap<String, Creator<C, L>>,
}

impl<C, L: Default> Default for ComponentRegistry<C, L> {
    fn default() -> Self {
        Self::new(L::default())
    }
}

impl<C, L: core::fmt::Debug> core::fmt::Debug for ComponentRegistry<C, L> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ComponentRegistry")
            .field("locale", &self.locale)
            .field("names", &self.creators.keys())
            .finish()
    }
}

impl<C, L> ComponentRegistry<C, L> {
    /// Create an empty registry.
    pub fn new(locale: L) -> Self {
        Self {
            locale,
            creators: BTreeMap::new(),
        }
    }

    /// Register (or replace) the creator for `name`.
    pub fn add(&mut self, name: impl Into<String>, creator: impl Fn(&L) -> C + 'static) {
        self.creators.insert(name.into(), Box::new(creator));
    }

    /// Returns true if a creator is registered under `name`.
    pub fn has(&self, name: &str) -> bool {
        self.creators.contains_key(name)
    }

    /// Registered names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.creators.keys().map(String::as_str)
    }

    /// Locale passed to creators.
    pub fn locale(&self) -> &L {
        &self.locale
    }
}

impl<C, L> ComponentFactory for ComponentRegistry<C, L> {
    type Component = C;

    fn create(&mut self, name: &str) -> Option<C> {
        let creator = self.creators.get(name)?;
        Some(creator(&self.locale))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn names_are_sorted_and_queryable() {
        let mut registry: ComponentRegistry<u32> = ComponentRegistry::default();
        registry.add("undo", |_| 1);
        registry.add("bold", |_| 2);
        assert!(registry.has("bold"));
        assert!(!registry.has("italic"));
        assert_eq!(registry.names().collect::<Vec<_>>(), ["bold", "undo"]);
    }

    #[test]
    fn later_registration_replaces_creator() {
        let mut registry: ComponentRegistry<u32> = ComponentRegistry::default();
        registry.add("bold", |_| 1);
        registry.add("bold", |_| 2);
        assert_eq!(registry.create("bold"), Some(2));
    }
}
