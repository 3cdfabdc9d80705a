//! Slug Resolution
//!
//! Maps a URL path segment onto a canonical entity. Authored slugs and
//! machine-built URL segments drift apart (a cosmetic suffix, doubled
//! dashes, a slug that no longer matches the display name); the resolver
//! absorbs that drift with a fixed, ordered fallback chain:
//!
//! ```text
//!   raw segment
//!       │ strip route suffix (if present)
//!       ▼
//!   candidate ──► direct key lookup ──────────────────────────► hit
//!       │ miss
//!       ▼
//!   normalize dashes ──► key lookup ──────────────────────────► hit
//!       │ miss
//!       ▼
//!   scan in collection order, per entity, first criterion that holds:
//!       a. stored slug == candidate
//!       b. stored slug == normalized candidate
//!       c. normalized stored slug == normalized candidate
//!       d. slug derived from display name == normalized candidate
//!       │ nothing
//!       ▼
//!   not found
//! ```
//!
//! Resolution is pure apart from the display-name counter: the same segment
//! against the same registry always yields the same entity.

mod normalize;
mod routing;

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

use crate::entity::{Entity, LaneEntity};
use crate::registry::{LaneRegistry, Registry};

pub use normalize::{area_segment, display_name_slug, normalize_dashes};
pub use routing::{LanePage, RouteOutcome, SiteRouter};

/// Cosmetic suffix carried by canonical state and lane URLs
pub const DEFAULT_ROUTE_SUFFIX: &str = "-truck-dispatch-service";

/// Which step of the chain produced a match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStep {
    /// Candidate found verbatim by key
    Direct,
    /// Dash-normalized candidate found by key
    Normalized,
    /// Scan: stored slug equals the candidate
    StoredSlug,
    /// Scan: stored slug equals the normalized candidate
    NormalizedCandidate,
    /// Scan: normalized stored slug equals the normalized candidate
    NormalizedStored,
    /// Scan: display-name slug equals the normalized candidate
    DisplayName,
}

impl MatchStep {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchStep::Direct => "direct",
            MatchStep::Normalized => "normalized",
            MatchStep::StoredSlug => "stored_slug",
            MatchStep::NormalizedCandidate => "normalized_candidate",
            MatchStep::NormalizedStored => "normalized_stored",
            MatchStep::DisplayName => "display_name",
        }
    }

    /// Matched by an exact key lookup, no scan needed
    pub fn is_exact(&self) -> bool {
        matches!(self, MatchStep::Direct)
    }
}

/// An entity found by the resolver, and how
#[derive(Debug, Clone, Copy)]
pub struct Resolved<'a, E> {
    pub entity: &'a E,
    pub step: MatchStep,
}

/// A path segment split against the route suffix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentForm<'s> {
    /// Canonical form; holds the segment with the suffix removed
    Suffixed(&'s str),
    /// No suffix; callers redirect to the canonical form when it resolves
    Bare(&'s str),
}

impl<'s> SegmentForm<'s> {
    pub fn candidate(&self) -> &'s str {
        match self {
            SegmentForm::Suffixed(candidate) | SegmentForm::Bare(candidate) => candidate,
        }
    }
}

/// Ordered fallback chain from path segment to entity
#[derive(Debug)]
pub struct SlugResolver {
    suffix: String,
    display_name_fallback: bool,
    display_name_hits: AtomicU64,
}

impl Default for SlugResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl SlugResolver {
    /// Resolver with the default route suffix and display-name fallback on
    pub fn new() -> Self {
        Self {
            suffix: DEFAULT_ROUTE_SUFFIX.to_string(),
            display_name_fallback: true,
            display_name_hits: AtomicU64::new(0),
        }
    }

    /// Set the cosmetic route suffix (empty for none)
    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    /// Enable or disable the display-name criterion of the scan
    pub fn with_display_name_fallback(mut self, enabled: bool) -> Self {
        self.display_name_fallback = enabled;
        self
    }

    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    pub fn display_name_fallback(&self) -> bool {
        self.display_name_fallback
    }

    /// Number of resolutions that needed the display-name criterion
    pub fn display_name_hits(&self) -> u64 {
        self.display_name_hits.load(Ordering::Relaxed)
    }

    /// Split a segment into its candidate slug and whether it was suffixed.
    /// With an empty suffix every segment is canonical.
    pub fn split_segment<'s>(&self, segment: &'s str) -> SegmentForm<'s> {
        if self.suffix.is_empty() {
            return SegmentForm::Suffixed(segment);
        }
        match segment.strip_suffix(self.suffix.as_str()) {
            Some(candidate) => SegmentForm::Suffixed(candidate),
            None => SegmentForm::Bare(segment),
        }
    }

    /// Canonical URL segment for a slug
    pub fn canonical_segment(&self, slug: &str) -> String {
        format!("{}{}", slug, self.suffix)
    }

    /// Canonical path of a state page
    pub fn state_path(&self, state_slug: &str) -> String {
        format!("/states/{}", self.canonical_segment(state_slug))
    }

    /// Canonical path of a lane page
    pub fn lane_path(&self, state_slug: &str, lane_slug: &str) -> String {
        format!(
            "/states/{}/lanes/{}",
            self.canonical_segment(state_slug),
            self.canonical_segment(lane_slug)
        )
    }

    /// Resolve a raw segment: strip the suffix if present, then run the chain
    pub fn resolve<'a, E>(&self, registry: &'a Registry<E>, segment: &str) -> Option<Resolved<'a, E>>
    where
        E: Entity<Key = String>,
    {
        self.resolve_slug(registry, self.split_segment(segment).candidate())
    }

    /// Run the chain on a candidate slug, without suffix handling
    pub fn resolve_slug<'a, E>(&self, registry: &'a Registry<E>, candidate: &str) -> Option<Resolved<'a, E>>
    where
        E: Entity<Key = String>,
    {
        if candidate.is_empty() {
            return None;
        }

        if let Some(entity) = registry.get_by_slug(candidate) {
            return Some(Resolved {
                entity,
                step: MatchStep::Direct,
            });
        }

        let normalized = normalize_dashes(candidate);
        if let Some(entity) = registry.get_by_slug(&normalized) {
            return Some(Resolved {
                entity,
                step: MatchStep::Normalized,
            });
        }

        self.scan(registry.iter(), candidate, &normalized)
    }

    /// Resolve a lane segment within one state. The scan only considers
    /// lanes owned by `state_slug`.
    pub fn resolve_lane<'a>(
        &self,
        lanes: &'a LaneRegistry,
        state_slug: &str,
        segment: &str,
    ) -> Option<Resolved<'a, LaneEntity>> {
        let candidate = self.split_segment(segment).candidate();
        if candidate.is_empty() {
            return None;
        }

        if let Some(entity) = lanes.get_by_slug(candidate, state_slug) {
            return Some(Resolved {
                entity,
                step: MatchStep::Direct,
            });
        }

        let normalized = normalize_dashes(candidate);
        if let Some(entity) = lanes.get_by_slug(&normalized, state_slug) {
            return Some(Resolved {
                entity,
                step: MatchStep::Normalized,
            });
        }

        self.scan(lanes.lanes_by_state(state_slug), candidate, &normalized)
    }

    fn scan<'a, E, I>(&self, entities: I, candidate: &str, normalized: &str) -> Option<Resolved<'a, E>>
    where
        E: Entity,
        I: IntoIterator<Item = &'a E>,
    {
        for entity in entities {
            if let Some(step) = self.scan_criterion(entity, candidate, normalized) {
                if step == MatchStep::DisplayName {
                    self.display_name_hits.fetch_add(1, Ordering::Relaxed);
                    tracing::warn!(
                        collection = %E::COLLECTION,
                        candidate = %candidate,
                        slug = %entity.slug(),
                        "resolved by display name; the URL does not match any authored slug"
                    );
                }
                return Some(Resolved { entity, step });
            }
        }

        tracing::debug!(candidate = %candidate, "slug not resolved");
        None
    }

    fn scan_criterion<E: Entity>(&self, entity: &E, candidate: &str, normalized: &str) -> Option<MatchStep> {
        let stored = entity.slug();
        if stored == candidate {
            return Some(MatchStep::StoredSlug);
        }
        if stored == normalized {
            return Some(MatchStep::NormalizedCandidate);
        }
        if normalize_dashes(stored) == normalized {
            return Some(MatchStep::NormalizedStored);
        }
        if self.display_name_fallback
            && !entity.display_name().is_empty()
            && display_name_slug(entity.display_name()) == normalized
        {
            return Some(MatchStep::DisplayName);
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    use crate::entity::{StateEntity, TruckTypeEntity};
    use std::sync::Arc;

    fn truck_type(slug: &str, display_name: &str) -> TruckTypeEntity {
        serde_json::from_value(json!({
            "id": slug,
            "name": display_name,
            "displayName": display_name,
            "slug": slug,
            "tagline": "t",
            "description": "d",
            "longDescription": "ld",
            "metaTitle": display_name,
            "metaDescription": display_name,
        }))
        .unwrap()
    }

    fn lanes() -> LaneRegistry {
        let state: StateEntity = serde_json::from_value(json!({
            "id": "california",
            "name": "California",
            "displayName": "California",
            "slug": "california",
            "abbreviation": "CA",
            "tagline": "t",
            "description": "d",
            "longDescription": "ld",
            "metaTitle": "California",
            "metaDescription": "California",
            "lanes": [
                {"id": "1", "name": "LA → Dallas", "displayName": "Los Angeles to Dallas", "slug": "la-dallas",
                 "description": "d", "metaTitle": "m", "metaDescription": "m"},
                {"id": "2", "name": "Oakland → Seattle", "displayName": "Oakland to Seattle", "slug": "oakland--to--seattle",
                 "description": "d", "metaTitle": "m", "metaDescription": "m"},
                {"id": "3", "name": "LA → Phoenix", "displayName": "Los Angeles to Phoenix", "slug": "los-angeles-to-phoenix",
                 "description": "d", "metaTitle": "m", "metaDescription": "m"}
            ]
        }))
        .unwrap();
        LaneRegistry::from_states(Arc::new(Registry::from_entities(vec![state])))
    }

    #[test]
    fn test_split_segment() {
        let resolver = SlugResolver::new();
        assert_eq!(
            resolver.split_segment("texas-truck-dispatch-service"),
            SegmentForm::Suffixed("texas")
        );
        assert_eq!(resolver.split_segment("texas"), SegmentForm::Bare("texas"));

        let bare = SlugResolver::new().with_suffix("");
        assert_eq!(bare.split_segment("texas"), SegmentForm::Suffixed("texas"));
    }

    #[test]
    fn test_canonical_paths() {
        let resolver = SlugResolver::new();
        assert_eq!(resolver.state_path("texas"), "/states/texas-truck-dispatch-service");
        assert_eq!(
            resolver.lane_path("texas", "dallas-to-atlanta"),
            "/states/texas-truck-dispatch-service/lanes/dallas-to-atlanta-truck-dispatch-service"
        );
    }

    #[test]
    fn test_each_step_reports_itself() {
        let resolver = SlugResolver::new();
        let lanes = lanes();

        let direct = resolver.resolve_lane(&lanes, "california", "la-dallas").unwrap();
        assert_eq!(direct.step, MatchStep::Direct);

        let normalized = resolver
            .resolve_lane(&lanes, "california", "los-angeles--to--phoenix")
            .unwrap();
        assert_eq!(normalized.step, MatchStep::Normalized);
        assert_eq!(normalized.entity.id, "3");

        let stored = resolver
            .resolve_lane(&lanes, "california", "oakland-to-seattle")
            .unwrap();
        assert_eq!(stored.step, MatchStep::NormalizedStored);
        assert_eq!(stored.entity.id, "2");

        let by_name = resolver
            .resolve_lane(&lanes, "california", "los-angeles-to-dallas")
            .unwrap();
        assert_eq!(by_name.step, MatchStep::DisplayName);
        assert_eq!(by_name.entity.slug, "la-dallas");
        assert_eq!(resolver.display_name_hits(), 1);
    }

    #[test]
    fn test_display_name_fallback_can_be_disabled() {
        let resolver = SlugResolver::new().with_display_name_fallback(false);
        let lanes = lanes();

        assert!(resolver
            .resolve_lane(&lanes, "california", "los-angeles-to-dallas")
            .is_none());
        assert_eq!(resolver.display_name_hits(), 0);
    }

    #[test]
    fn test_lane_resolution_is_state_scoped() {
        let resolver = SlugResolver::new();
        let lanes = lanes();

        assert!(resolver.resolve_lane(&lanes, "texas", "la-dallas").is_none());
        assert!(resolver
            .resolve_lane(&lanes, "texas", "los-angeles-to-dallas")
            .is_none());
    }

    #[test]
    fn test_first_match_in_collection_order_wins() {
        let resolver = SlugResolver::new();
        let registry = Registry::from_entities(vec![
            truck_type("reefer-van", "Reefer"),
            truck_type("reefer-dispatch", "Reefer"),
        ]);

        let resolved = resolver.resolve_slug(&registry, "reefer").unwrap();
        assert_eq!(resolved.step, MatchStep::DisplayName);
        assert_eq!(resolved.entity.slug, "reefer-van");
    }

    #[test]
    fn test_empty_and_unknown_candidates() {
        let resolver = SlugResolver::new();
        let registry = Registry::from_entities(vec![truck_type("dry-van", "Dry Van")]);

        assert!(resolver.resolve_slug(&registry, "").is_none());
        assert!(resolver.resolve(&registry, "-truck-dispatch-service").is_none());
        assert!(resolver.resolve_slug(&registry, "dry").is_none());
        assert!(resolver.resolve_slug(&registry, "dry-van-2").is_none());
    }
}
