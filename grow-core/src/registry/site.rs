//! Site registry
//!
//! One registry per collection, built from a [`Catalog`]. This is the object
//! an entry point constructs once and hands to the resolver, the sitemap
//! builder and the route layer.

use std::sync::Arc;

use serde::Serialize;

use crate::entity::{Collection, Entity, JobOpening, PartnerEntity, StateEntity, TruckTypeEntity};
use crate::error::Result;
use crate::store::Catalog;

use super::{LaneRegistry, Registry, StateLaneStore};

/// An entity whose SEO metadata is incomplete
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeoGap {
    pub collection: Collection,
    pub key: String,
    pub missing: Vec<&'static str>,
}

/// A key that was authored more than once
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShadowedKey {
    pub collection: Collection,
    pub key: String,
}

/// Registries for every collection on the site
#[derive(Debug)]
pub struct SiteRegistry {
    states: Arc<Registry<StateEntity>>,
    lanes: LaneRegistry,
    partners: Registry<PartnerEntity>,
    jobs: Registry<JobOpening>,
    truck_types: Registry<TruckTypeEntity>,
}

impl SiteRegistry {
    /// Build lazily; each collection loads on first access
    pub fn from_catalog(catalog: Catalog) -> Self {
        let Catalog {
            states,
            partners,
            jobs,
            truck_types,
        } = catalog;

        let states = Arc::new(Registry::from_entities(states));
        Self {
            lanes: LaneRegistry::from_states(Arc::clone(&states)),
            states,
            partners: Registry::from_entities(partners),
            jobs: Registry::from_entities(jobs),
            truck_types: Registry::from_entities(truck_types),
        }
    }

    /// Build eagerly, failing on the first duplicate key in any collection
    pub fn from_catalog_strict(catalog: Catalog) -> Result<Self> {
        let Catalog {
            states,
            partners,
            jobs,
            truck_types,
        } = catalog;

        let states = Arc::new(Registry::strict(states)?);
        Ok(Self {
            lanes: LaneRegistry::strict(StateLaneStore::new(Arc::clone(&states)))?,
            states,
            partners: Registry::strict(partners)?,
            jobs: Registry::strict(jobs)?,
            truck_types: Registry::strict(truck_types)?,
        })
    }

    /// Registries over the content compiled into the binary
    pub fn embedded() -> Result<Self> {
        Ok(Self::from_catalog(Catalog::embedded()?))
    }

    /// Populate every collection
    pub fn initialize(&self) {
        self.states.initialize();
        self.lanes.initialize();
        self.partners.initialize();
        self.jobs.initialize();
        self.truck_types.initialize();

        tracing::debug!(entities = self.entity_count(), "site registry initialized");
    }

    pub fn states(&self) -> &Registry<StateEntity> {
        &self.states
    }

    pub fn lanes(&self) -> &LaneRegistry {
        &self.lanes
    }

    pub fn partners(&self) -> &Registry<PartnerEntity> {
        &self.partners
    }

    pub fn jobs(&self) -> &Registry<JobOpening> {
        &self.jobs
    }

    pub fn truck_types(&self) -> &Registry<TruckTypeEntity> {
        &self.truck_types
    }

    /// Total entities across all collections
    pub fn entity_count(&self) -> usize {
        self.states.len()
            + self.lanes.len()
            + self.partners.len()
            + self.jobs.len()
            + self.truck_types.len()
    }

    /// Entities with an empty metaTitle, metaDescription or keyword list
    pub fn seo_gaps(&self) -> Vec<SeoGap> {
        let mut gaps = Vec::new();
        collect_gaps(self.states.get_all(), &mut gaps);
        collect_gaps(self.lanes.get_all(), &mut gaps);
        collect_gaps(self.truck_types.get_all(), &mut gaps);
        collect_gaps(self.partners.get_all(), &mut gaps);
        collect_gaps(self.jobs.get_all(), &mut gaps);
        gaps
    }

    /// Keys authored more than once, across all collections
    pub fn shadowed_keys(&self) -> Vec<ShadowedKey> {
        let mut shadowed = Vec::new();
        collect_shadowed(self.states.shadowed_keys(), Collection::State, &mut shadowed);
        collect_shadowed(self.lanes.shadowed_keys(), Collection::Lane, &mut shadowed);
        collect_shadowed(self.truck_types.shadowed_keys(), Collection::TruckType, &mut shadowed);
        collect_shadowed(self.partners.shadowed_keys(), Collection::Partner, &mut shadowed);
        collect_shadowed(self.jobs.shadowed_keys(), Collection::Job, &mut shadowed);
        shadowed
    }
}

fn collect_gaps<E: Entity>(entities: &[E], gaps: &mut Vec<SeoGap>) {
    for entity in entities {
        let missing = entity.seo().missing_fields();
        if !missing.is_empty() {
            gaps.push(SeoGap {
                collection: E::COLLECTION,
                key: entity.key().to_string(),
                missing,
            });
        }
    }
}

fn collect_shadowed<K: ToString>(keys: &[K], collection: Collection, out: &mut Vec<ShadowedKey>) {
    out.extend(keys.iter().map(|key| ShadowedKey {
        collection,
        key: key.to_string(),
    }));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_site_is_lazy_until_used() {
        let site = SiteRegistry::embedded().unwrap();
        assert!(!site.states().is_initialized());
        assert!(!site.lanes().is_initialized());

        site.initialize();
        assert!(site.states().is_initialized());
        assert!(site.lanes().is_initialized());
        assert!(site.entity_count() > 0);
    }

    #[test]
    fn test_embedded_content_is_clean() {
        let site = SiteRegistry::embedded().unwrap();
        assert!(site.shadowed_keys().is_empty());
        assert!(site.seo_gaps().is_empty());
    }

    #[test]
    fn test_strict_build_of_embedded_content() {
        let site = SiteRegistry::from_catalog_strict(Catalog::embedded().unwrap()).unwrap();
        assert!(site.partners().is_initialized());
        assert!(site.lanes().exists("dallas-to-atlanta", "texas"));
    }

    #[test]
    fn test_seo_gaps_and_shadowing_reported() {
        let mut catalog = Catalog::embedded().unwrap();
        let mut dup = catalog.truck_types[0].clone();
        dup.meta_description = String::new();
        catalog.truck_types.push(dup);

        let site = SiteRegistry::from_catalog(catalog.clone());
        assert_eq!(
            site.shadowed_keys(),
            vec![ShadowedKey {
                collection: Collection::TruckType,
                key: "dry-van".to_string(),
            }]
        );
        assert_eq!(
            site.seo_gaps(),
            vec![SeoGap {
                collection: Collection::TruckType,
                key: "dry-van".to_string(),
                missing: vec!["metaDescription"],
            }]
        );

        assert!(SiteRegistry::from_catalog_strict(catalog).is_err());
    }
}
