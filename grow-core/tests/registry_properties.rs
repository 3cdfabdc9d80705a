//! Registry properties over the embedded content and a content directory.

use std::fs;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use grow_core::{
    Catalog, ContentLoader, Entity, FnStore, LaneRegistry, Registry, SiteConfig, SiteRegistry,
    StateEntity,
};

fn catalog() -> Catalog {
    Catalog::embedded().expect("embedded content parses")
}

#[test]
fn test_initialization_is_idempotent() {
    let loads = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&loads);
    let states = catalog().states;
    let registry = Registry::new(FnStore::new(move || {
        counter.fetch_add(1, Ordering::SeqCst);
        states.clone()
    }));

    registry.initialize();
    let count = registry.len();
    let texas = registry.get_by_slug("texas").cloned();

    for _ in 0..5 {
        registry.initialize();
    }

    assert_eq!(loads.load(Ordering::SeqCst), 1);
    assert_eq!(registry.len(), count);
    assert_eq!(registry.get_by_slug("texas").cloned(), texas);
}

#[test]
fn test_lookup_is_total_over_get_all() {
    let site = SiteRegistry::embedded().unwrap();

    for state in site.states().get_all() {
        assert_eq!(site.states().get_by_slug(&state.slug), Some(state));
    }
    for lane in site.lanes().get_all() {
        assert_eq!(site.lanes().get_by_slug(&lane.slug, &lane.state_slug), Some(lane));
    }
    for partner in site.partners().get_all() {
        assert_eq!(site.partners().get_by_slug(partner.slug()), Some(partner));
    }
    for job in site.jobs().get_all() {
        assert_eq!(site.jobs().get_by_slug(&job.slug), Some(job));
    }
    for truck_type in site.truck_types().get_all() {
        assert!(site.truck_types().exists(&truck_type.slug));
    }
}

#[test]
fn test_get_all_preserves_store_order() {
    let site = SiteRegistry::embedded().unwrap();
    let slugs = site.states().slugs();
    assert_eq!(slugs, vec!["california", "texas", "illinois", "florida", "georgia"]);

    let texas: Vec<&str> = site
        .lanes()
        .lanes_by_state("texas")
        .iter()
        .map(|lane| lane.slug.as_str())
        .collect();
    assert_eq!(texas, vec!["dallas-to-atlanta", "houston-to-chicago", "laredo-to-memphis"]);
}

#[test]
fn test_lane_key_needs_both_components() {
    let site = SiteRegistry::embedded().unwrap();
    let lanes = site.lanes();

    let texas = lanes.get_by_slug("dallas-to-atlanta", "texas").unwrap();
    let georgia = lanes.get_by_slug("dallas-to-atlanta", "georgia").unwrap();
    assert_ne!(texas.id, georgia.id);
    assert!(!lanes.exists("dallas-to-atlanta", "florida"));
    assert!(!lanes.exists("dallas-to-atlanta", ""));
}

#[test]
fn test_empty_collection_is_initialized_not_absent() {
    let registry: Registry<StateEntity> = Registry::from_entities(vec![]);
    assert!(!registry.is_initialized());
    assert!(registry.get_all().is_empty());
    assert!(registry.is_initialized());
    assert!(!registry.exists("texas"));

    let lanes = LaneRegistry::from_states(Arc::new(registry));
    assert!(lanes.is_empty());
}

#[test]
fn test_duplicate_state_shadows_in_place() {
    let mut catalog = catalog();
    let mut texas = catalog.states[1].clone();
    texas.tagline = "Updated tagline".to_string();
    catalog.states.push(texas);

    let site = SiteRegistry::from_catalog(catalog.clone());
    assert_eq!(site.states().len(), 5);
    assert_eq!(site.states().get_all()[1].tagline, "Updated tagline");
    assert_eq!(site.states().shadowed_keys(), &["texas".to_string()]);

    let err = SiteRegistry::from_catalog_strict(catalog).unwrap_err();
    assert_eq!(err.error_code(), "DUPLICATE_SLUG");
    assert_eq!(err.http_status_code(), 409);
}

#[test]
fn test_registry_from_content_directory() {
    let root = std::env::temp_dir().join("grow-test-registry-dir");
    let _ = fs::remove_dir_all(&root);
    fs::create_dir_all(root.join("states")).unwrap();

    let catalog = catalog();
    for state in &catalog.states {
        let path = root.join("states").join(format!("{}.json", state.slug));
        fs::write(&path, serde_json::to_string_pretty(state).unwrap()).unwrap();
    }
    fs::write(
        root.join("truck-types.json"),
        serde_json::to_string(&catalog.truck_types).unwrap(),
    )
    .unwrap();

    let loaded = ContentLoader::new(&root).load().unwrap();
    let site = SiteRegistry::from_catalog(loaded);

    // Directory order is sorted, not the embedded order
    assert_eq!(
        site.states().slugs(),
        vec!["california", "florida", "georgia", "illinois", "texas"]
    );
    assert_eq!(site.lanes().len(), catalog.lanes().len());
    assert!(site.partners().is_empty());
    assert_eq!(site.truck_types().len(), 6);

    let config = SiteConfig {
        content_dir: Some(root.clone()),
        ..SiteConfig::default()
    };
    assert_eq!(config.build_site().unwrap().entity_count(), site.entity_count());

    let _ = fs::remove_dir_all(&root);
}
