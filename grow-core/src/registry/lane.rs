//! Lane registry
//!
//! Lanes are stored inline on their owning state, so a lane slug is only
//! unique within its state. Lookups take both halves of the compound key.

use std::sync::Arc;

use crate::entity::{LaneEntity, LaneKey, StateEntity};
use crate::error::Result;
use crate::store::EntityStore;

use super::Registry;

/// Derives the lane collection from a state registry: state order, then
/// lane order within each state.
pub struct StateLaneStore {
    states: Arc<Registry<StateEntity>>,
}

impl StateLaneStore {
    pub fn new(states: Arc<Registry<StateEntity>>) -> Self {
        Self { states }
    }
}

impl EntityStore<LaneEntity> for StateLaneStore {
    fn load_all(&self) -> Vec<LaneEntity> {
        self.states
            .iter()
            .flat_map(|state| {
                state.lanes.iter().map(move |lane| {
                    let mut lane = lane.clone();
                    lane.state_slug = state.slug.clone();
                    lane
                })
            })
            .collect()
    }
}

/// Registry keyed by `(state_slug, slug)`
#[derive(Debug)]
pub struct LaneRegistry {
    inner: Registry<LaneEntity>,
}

impl LaneRegistry {
    pub fn new(store: impl EntityStore<LaneEntity> + 'static) -> Self {
        Self {
            inner: Registry::new(store),
        }
    }

    /// Lanes of every state in a state registry
    pub fn from_states(states: Arc<Registry<StateEntity>>) -> Self {
        Self::new(StateLaneStore::new(states))
    }

    pub fn from_entities(lanes: Vec<LaneEntity>) -> Self {
        Self::new(lanes)
    }

    /// Build eagerly, rejecting a lane slug authored twice within one state
    pub fn strict(store: impl EntityStore<LaneEntity> + 'static) -> Result<Self> {
        Ok(Self {
            inner: Registry::strict(store)?,
        })
    }

    pub fn initialize(&self) {
        self.inner.initialize();
    }

    pub fn is_initialized(&self) -> bool {
        self.inner.is_initialized()
    }

    /// All lanes in store order
    pub fn get_all(&self) -> &[LaneEntity] {
        self.inner.get_all()
    }

    /// Look up a lane; both key components are required
    pub fn get_by_slug(&self, slug: &str, state_slug: &str) -> Option<&LaneEntity> {
        self.inner.get(&LaneKey::new(state_slug, slug))
    }

    pub fn exists(&self, slug: &str, state_slug: &str) -> bool {
        self.get_by_slug(slug, state_slug).is_some()
    }

    /// Lanes owned by one state, in authored order
    pub fn lanes_by_state(&self, state_slug: &str) -> Vec<&LaneEntity> {
        self.inner
            .iter()
            .filter(|lane| lane.state_slug == state_slug)
            .collect()
    }

    pub fn get_by_id(&self, id: &str) -> Option<&LaneEntity> {
        self.inner.get_by_id(id)
    }

    pub fn keys(&self) -> Vec<LaneKey> {
        self.inner.keys()
    }

    pub fn shadowed_keys(&self) -> &[LaneKey] {
        self.inner.shadowed_keys()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// The underlying single-collection registry
    pub fn registry(&self) -> &Registry<LaneEntity> {
        &self.inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn state(slug: &str, lanes: &[&str]) -> StateEntity {
        let lanes: Vec<_> = lanes
            .iter()
            .map(|lane| {
                json!({
                    "id": format!("{}-{}", slug, lane.replace('-', "")),
                    "name": lane,
                    "slug": lane,
                    "description": "lane",
                    "metaTitle": lane,
                    "metaDescription": lane,
                })
            })
            .collect();

        serde_json::from_value(json!({
            "id": slug,
            "name": slug,
            "displayName": slug,
            "slug": slug,
            "abbreviation": "XX",
            "tagline": "t",
            "description": "d",
            "longDescription": "ld",
            "metaTitle": slug,
            "metaDescription": slug,
            "lanes": lanes,
        }))
        .unwrap()
    }

    fn registry() -> LaneRegistry {
        let states = Arc::new(Registry::from_entities(vec![
            state("texas", &["dallas-to-atlanta", "houston-to-chicago"]),
            state("georgia", &["atlanta-to-miami", "dallas-to-atlanta"]),
        ]));
        LaneRegistry::from_states(states)
    }

    #[test]
    fn test_compound_key_lookup() {
        let lanes = registry();

        let texas = lanes.get_by_slug("dallas-to-atlanta", "texas").unwrap();
        let georgia = lanes.get_by_slug("dallas-to-atlanta", "georgia").unwrap();
        assert_eq!(texas.id, "texas-dallastoatlanta");
        assert_eq!(georgia.id, "georgia-dallastoatlanta");

        assert!(!lanes.exists("houston-to-chicago", "georgia"));
        assert!(lanes.shadowed_keys().is_empty());
    }

    #[test]
    fn test_state_order_then_lane_order() {
        let lanes = registry();
        let keys: Vec<String> = lanes.keys().iter().map(ToString::to_string).collect();

        assert_eq!(
            keys,
            vec![
                "texas:dallas-to-atlanta",
                "texas:houston-to-chicago",
                "georgia:atlanta-to-miami",
                "georgia:dallas-to-atlanta",
            ]
        );
    }

    #[test]
    fn test_lanes_by_state() {
        let lanes = registry();
        let georgia: Vec<&str> = lanes
            .lanes_by_state("georgia")
            .iter()
            .map(|lane| lane.slug.as_str())
            .collect();

        assert_eq!(georgia, vec!["atlanta-to-miami", "dallas-to-atlanta"]);
        assert!(lanes.lanes_by_state("ohio").is_empty());
    }

    #[test]
    fn test_derived_store_sets_back_references() {
        // Built directly, without going through the catalog's fix-up
        let mut texas = state("texas", &["dallas-to-atlanta"]);
        texas.lanes[0].state_slug = String::new();
        let lanes = LaneRegistry::from_states(Arc::new(Registry::from_entities(vec![texas])));

        assert_eq!(lanes.get_all()[0].state_slug, "texas");
    }

    #[test]
    fn test_strict_rejects_lane_authored_twice_in_one_state() {
        let states = Arc::new(Registry::from_entities(vec![state(
            "texas",
            &["dallas-to-atlanta", "dallas-to-atlanta"],
        )]));

        let err = LaneRegistry::strict(StateLaneStore::new(states)).unwrap_err();
        assert!(err.to_string().contains("texas:dallas-to-atlanta"));
    }
}
