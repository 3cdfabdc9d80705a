//! Entity stores
//!
//! A store is the authoritative, immutable list of entities for one
//! collection. Registries pull from a store exactly once, on first access.
//! `load_all` has no failure mode: anything that can go wrong (unreadable
//! files, malformed JSON) happens earlier, while the [`Catalog`] is built.

mod catalog;
mod loader;

use std::sync::Arc;

pub use catalog::Catalog;
pub use loader::ContentLoader;

/// Source of one collection's entities, in store order
pub trait EntityStore<E>: Send + Sync {
    /// Return every entity in store order. Deterministic, no side effects.
    fn load_all(&self) -> Vec<E>;
}

impl<E: Clone + Send + Sync> EntityStore<E> for Vec<E> {
    fn load_all(&self) -> Vec<E> {
        self.clone()
    }
}

/// Shared, cheaply clonable store over a fixed list
#[derive(Debug)]
pub struct StaticStore<E> {
    entities: Arc<[E]>,
}

impl<E> StaticStore<E> {
    pub fn new(entities: Vec<E>) -> Self {
        Self {
            entities: entities.into(),
        }
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

impl<E> Clone for StaticStore<E> {
    fn clone(&self) -> Self {
        Self {
            entities: Arc::clone(&self.entities),
        }
    }
}

impl<E: Clone + Send + Sync> EntityStore<E> for StaticStore<E> {
    fn load_all(&self) -> Vec<E> {
        self.entities.to_vec()
    }
}

/// Store backed by a generator function
pub struct FnStore<F> {
    generate: F,
}

impl<F> FnStore<F> {
    pub fn new(generate: F) -> Self {
        Self { generate }
    }
}

impl<E, F> EntityStore<E> for FnStore<F>
where
    F: Fn() -> Vec<E> + Send + Sync,
{
    fn load_all(&self) -> Vec<E> {
        (self.generate)()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_store_preserves_order() {
        let store = StaticStore::new(vec!["texas", "california", "georgia"]);
        let clone = store.clone();

        assert_eq!(store.len(), 3);
        assert_eq!(clone.load_all(), vec!["texas", "california", "georgia"]);
    }

    #[test]
    fn test_fn_store_generates_on_every_call() {
        let store = FnStore::new(|| vec![1, 2, 3]);
        assert_eq!(store.load_all(), vec![1, 2, 3]);
        assert_eq!(store.load_all(), vec![1, 2, 3]);
    }
}
