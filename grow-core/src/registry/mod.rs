//! Content Registry
//!
//! A registry is the read-only lookup structure over one entity collection.
//! It is an explicit object, constructed from an [`EntityStore`] and passed by
//! reference to whatever needs lookups; there is no process-wide state.
//!
//! ## Lifecycle
//!
//! ```text
//!   Registry::new(store)          (nothing loaded yet)
//!          │
//!          ▼  first initialize()/get_all()/get()
//!   store.load_all() ──► index by key, store order kept
//!          │
//!          ▼
//!   read-only for the rest of the process
//! ```
//!
//! Population happens at most once, guarded by a `OnceLock`: an empty
//! collection stays empty without being reloaded, and concurrent first
//! access populates exactly once.
//!
//! ## Duplicate keys
//!
//! By default a later entity with an already-seen key replaces the earlier
//! one in place (the earlier position, the later record). Every shadowed key
//! is logged and kept in [`Registry::shadowed_keys`]. [`Registry::strict`]
//! refuses to build instead.

mod lane;
mod site;

use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::sync::OnceLock;

use crate::entity::Entity;
use crate::error::{ContentError, Result};
use crate::store::EntityStore;

pub use lane::{LaneRegistry, StateLaneStore};
pub use site::{SeoGap, ShadowedKey, SiteRegistry};

/// Lazily initialized, read-only lookup over one collection
pub struct Registry<E: Entity> {
    /// Where entities come from on first access
    store: Box<dyn EntityStore<E>>,

    /// Populated exactly once
    index: OnceLock<RegistryIndex<E>>,
}

struct RegistryIndex<E: Entity> {
    /// Entities in store order, one per key
    entries: Vec<E>,

    /// Key to position in `entries`
    by_key: HashMap<E::Key, usize>,

    /// Keys that appeared more than once in the store
    shadowed: Vec<E::Key>,
}

impl<E: Entity> RegistryIndex<E> {
    fn build(entities: Vec<E>) -> Self {
        let mut entries: Vec<E> = Vec::with_capacity(entities.len());
        let mut by_key = HashMap::with_capacity(entities.len());
        let mut shadowed = Vec::new();

        for entity in entities {
            let key = entity.key();
            match by_key.get(&key) {
                Some(&idx) => {
                    tracing::warn!(
                        collection = %E::COLLECTION,
                        key = %key,
                        "duplicate key; the later entity shadows the earlier one"
                    );
                    entries[idx] = entity;
                    shadowed.push(key);
                }
                None => {
                    by_key.insert(key, entries.len());
                    entries.push(entity);
                }
            }
        }

        tracing::debug!(
            collection = %E::COLLECTION,
            count = entries.len(),
            "registry initialized"
        );

        Self {
            entries,
            by_key,
            shadowed,
        }
    }
}

impl<E: Entity> Registry<E> {
    /// Create a registry over a store. Nothing is loaded until first use.
    pub fn new(store: impl EntityStore<E> + 'static) -> Self {
        Self {
            store: Box::new(store),
            index: OnceLock::new(),
        }
    }

    /// Create a registry over a fixed list of entities
    pub fn from_entities(entities: Vec<E>) -> Self {
        Self::new(entities)
    }

    /// Build eagerly, rejecting the first duplicate key
    pub fn strict(store: impl EntityStore<E> + 'static) -> Result<Self> {
        let registry = Self::new(store);
        if let Some(key) = registry.shadowed_keys().first() {
            return Err(ContentError::DuplicateSlug {
                collection: E::COLLECTION.to_string(),
                key: key.to_string(),
            });
        }
        Ok(registry)
    }

    fn index(&self) -> &RegistryIndex<E> {
        self.index
            .get_or_init(|| RegistryIndex::build(self.store.load_all()))
    }

    /// Populate the registry. Only the first call has any effect.
    pub fn initialize(&self) {
        self.index();
    }

    /// Whether the store has been loaded
    pub fn is_initialized(&self) -> bool {
        self.index.get().is_some()
    }

    /// All entities in store order
    pub fn get_all(&self) -> &[E] {
        &self.index().entries
    }

    /// Iterate entities in store order
    pub fn iter(&self) -> std::slice::Iter<'_, E> {
        self.get_all().iter()
    }

    /// Look up an entity by its key
    pub fn get<Q>(&self, key: &Q) -> Option<&E>
    where
        E::Key: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let index = self.index();
        index.by_key.get(key).map(|idx| &index.entries[*idx])
    }

    /// Whether an entity with this key exists
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        E::Key: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.get(key).is_some()
    }

    /// Look up an entity by its authoring-time id (linear scan)
    pub fn get_by_id(&self, id: &str) -> Option<&E> {
        self.iter().find(|entity| entity.id() == id)
    }

    /// Keys in store order
    pub fn keys(&self) -> Vec<E::Key> {
        self.iter().map(|entity| entity.key()).collect()
    }

    /// Keys that were authored more than once
    pub fn shadowed_keys(&self) -> &[E::Key] {
        &self.index().shadowed
    }

    pub fn len(&self) -> usize {
        self.get_all().len()
    }

    pub fn is_empty(&self) -> bool {
        self.get_all().is_empty()
    }
}

impl<E: Entity<Key = String>> Registry<E> {
    /// Look up an entity by slug
    pub fn get_by_slug(&self, slug: &str) -> Option<&E> {
        self.get(slug)
    }

    /// Whether an entity with this slug exists
    pub fn exists(&self, slug: &str) -> bool {
        self.get_by_slug(slug).is_some()
    }

    /// All slugs in store order
    pub fn slugs(&self) -> Vec<&str> {
        self.iter().map(|entity| entity.slug()).collect()
    }
}

impl<E: Entity> fmt::Debug for Registry<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut debug = f.debug_struct("Registry");
        debug.field("collection", &E::COLLECTION);
        match self.index.get() {
            Some(index) => debug.field("len", &index.entries.len()),
            None => debug.field("initialized", &false),
        };
        debug.finish()
    }
}
