//! Route outcomes
//!
//! What a route handler does with a path once the resolver has had its say:
//! serve the entity, redirect to the canonical URL, or report not found.
//! Kept free of any HTTP types so the same decisions back the server, the
//! CLI and the tests.

use crate::entity::{JobOpening, LaneEntity, PartnerEntity, StateEntity, TruckTypeEntity};
use crate::registry::SiteRegistry;

use super::{area_segment, MatchStep, SegmentForm, SlugResolver};

/// Decision for one request path
#[derive(Debug, Clone, PartialEq)]
pub enum RouteOutcome<T> {
    /// Serve this entity
    Found(T),
    /// Permanent redirect to this path
    Redirect(String),
    NotFound,
}

impl<T> RouteOutcome<T> {
    pub fn is_found(&self) -> bool {
        matches!(self, RouteOutcome::Found(_))
    }

    pub fn found(self) -> Option<T> {
        match self {
            RouteOutcome::Found(value) => Some(value),
            _ => None,
        }
    }

    pub fn redirect_target(&self) -> Option<&str> {
        match self {
            RouteOutcome::Redirect(path) => Some(path),
            _ => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> RouteOutcome<U> {
        match self {
            RouteOutcome::Found(value) => RouteOutcome::Found(f(value)),
            RouteOutcome::Redirect(path) => RouteOutcome::Redirect(path),
            RouteOutcome::NotFound => RouteOutcome::NotFound,
        }
    }
}

/// A lane together with the state that owns it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LanePage<'a> {
    pub state: &'a StateEntity,
    pub lane: &'a LaneEntity,
}

/// Route decisions over a site registry
#[derive(Debug, Clone, Copy)]
pub struct SiteRouter<'a> {
    site: &'a SiteRegistry,
    resolver: &'a SlugResolver,
}

impl<'a> SiteRouter<'a> {
    pub fn new(site: &'a SiteRegistry, resolver: &'a SlugResolver) -> Self {
        Self { site, resolver }
    }

    /// `/states`: redirect to the first state in store order
    pub fn states_index(&self) -> RouteOutcome<&'a StateEntity> {
        match self.site.states().get_all().first() {
            Some(state) => RouteOutcome::Redirect(self.resolver.state_path(&state.slug)),
            None => RouteOutcome::NotFound,
        }
    }

    /// `/states/{segment}`
    ///
    /// Only the suffixed form of the authored slug is served. Any other
    /// segment that resolves (bare, doubled dashes, display name) redirects
    /// to the canonical URL of the entity it resolved to, so every state
    /// has exactly one URL.
    pub fn state_page(&self, segment: &str) -> RouteOutcome<&'a StateEntity> {
        let form = self.resolver.split_segment(segment);
        match self.resolver.resolve_slug(self.site.states(), form.candidate()) {
            Some(resolved) if is_canonical(form, resolved.step) => RouteOutcome::Found(resolved.entity),
            Some(resolved) => RouteOutcome::Redirect(self.resolver.state_path(&resolved.entity.slug)),
            None => RouteOutcome::NotFound,
        }
    }

    /// `/states/{state_segment}/lanes/{lane_segment}`
    ///
    /// The state segment is resolved first, then the lane segment within
    /// that state's lanes. The pair is served only when both segments are
    /// canonical; otherwise it redirects to the canonical pair.
    pub fn lane_page(&self, state_segment: &str, lane_segment: &str) -> RouteOutcome<LanePage<'a>> {
        let state_form = self.resolver.split_segment(state_segment);
        let Some(state) = self.resolver.resolve_slug(self.site.states(), state_form.candidate()) else {
            return RouteOutcome::NotFound;
        };

        let lane_form = self.resolver.split_segment(lane_segment);
        let Some(lane) = self.resolver.resolve_lane(
            self.site.lanes(),
            &state.entity.slug,
            lane_form.candidate(),
        ) else {
            return RouteOutcome::NotFound;
        };

        if is_canonical(state_form, state.step) && is_canonical(lane_form, lane.step) {
            RouteOutcome::Found(LanePage {
                state: state.entity,
                lane: lane.entity,
            })
        } else {
            RouteOutcome::Redirect(self.resolver.lane_path(&state.entity.slug, &lane.entity.slug))
        }
    }

    /// `/partners/{slug}`
    pub fn partner_page(&self, slug: &str) -> RouteOutcome<&'a PartnerEntity> {
        found_or_not(
            self.resolver
                .resolve_slug(self.site.partners(), slug)
                .map(|resolved| resolved.entity),
        )
    }

    /// `/careers/{slug}`
    pub fn career_page(&self, slug: &str) -> RouteOutcome<&'a JobOpening> {
        found_or_not(
            self.resolver
                .resolve_slug(self.site.jobs(), slug)
                .map(|resolved| resolved.entity),
        )
    }

    /// `/truck-type/{slug}`
    pub fn truck_type_page(&self, slug: &str) -> RouteOutcome<&'a TruckTypeEntity> {
        found_or_not(
            self.resolver
                .resolve_slug(self.site.truck_types(), slug)
                .map(|resolved| resolved.entity),
        )
    }

    /// `/areas-we-serve/{*path}`: always a redirect.
    ///
    /// The last segment names a state (`northeast/connecticut`,
    /// `New York`); it is matched against slug, name and display name. An
    /// empty path or an unknown state goes to `/states`.
    pub fn areas_we_serve(&self, path: &[&str]) -> String {
        let Some(last) = path.iter().rev().find(|segment| !segment.trim().is_empty()) else {
            return "/states".to_string();
        };

        let wanted = area_segment(last);
        let state = self.site.states().iter().find(|state| {
            state.slug.to_lowercase() == wanted
                || area_segment(&state.name) == wanted
                || area_segment(&state.display_name) == wanted
        });

        match state {
            Some(state) => self.resolver.state_path(&state.slug),
            None => {
                tracing::debug!(segment = %last, "areas-we-serve path names no known state");
                "/states".to_string()
            }
        }
    }
}

/// Suffixed and matched verbatim by key
fn is_canonical(form: SegmentForm<'_>, step: MatchStep) -> bool {
    matches!(form, SegmentForm::Suffixed(_)) && step.is_exact()
}

fn found_or_not<T>(entity: Option<T>) -> RouteOutcome<T> {
    match entity {
        Some(entity) => RouteOutcome::Found(entity),
        None => RouteOutcome::NotFound,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn site() -> SiteRegistry {
        SiteRegistry::embedded().unwrap()
    }

    #[test]
    fn test_state_page_suffixed_is_found() {
        let site = site();
        let resolver = SlugResolver::new();
        let router = SiteRouter::new(&site, &resolver);

        let state = router.state_page("texas-truck-dispatch-service").found().unwrap();
        assert_eq!(state.abbreviation, "TX");
    }

    #[test]
    fn test_state_page_bare_redirects_to_canonical() {
        let site = site();
        let resolver = SlugResolver::new();
        let router = SiteRouter::new(&site, &resolver);

        assert_eq!(
            router.state_page("texas"),
            RouteOutcome::Redirect("/states/texas-truck-dispatch-service".to_string())
        );
        assert_eq!(router.state_page("atlantis"), RouteOutcome::NotFound);
        assert_eq!(
            router.state_page("atlantis-truck-dispatch-service"),
            RouteOutcome::NotFound
        );
    }

    #[test]
    fn test_states_index_redirects_to_first_state() {
        let site = site();
        let resolver = SlugResolver::new();
        let router = SiteRouter::new(&site, &resolver);

        assert_eq!(
            router.states_index().redirect_target(),
            Some("/states/california-truck-dispatch-service")
        );
    }

    #[test]
    fn test_lane_page() {
        let site = site();
        let resolver = SlugResolver::new();
        let router = SiteRouter::new(&site, &resolver);

        let page = router
            .lane_page("texas-truck-dispatch-service", "dallas-to-atlanta-truck-dispatch-service")
            .found()
            .unwrap();
        assert_eq!(page.state.slug, "texas");
        assert_eq!(page.lane.state_slug, "texas");

        // Same lane slug under another state is a different lane
        let page = router
            .lane_page("georgia-truck-dispatch-service", "dallas-to-atlanta-truck-dispatch-service")
            .found()
            .unwrap();
        assert_eq!(page.lane.id, "georgia-dallastoatlanta");
    }

    #[test]
    fn test_lane_page_redirects_bare_segments() {
        let site = site();
        let resolver = SlugResolver::new();
        let router = SiteRouter::new(&site, &resolver);
        let canonical = "/states/texas-truck-dispatch-service/lanes/dallas-to-atlanta-truck-dispatch-service";

        assert_eq!(
            router.lane_page("texas", "dallas-to-atlanta").redirect_target(),
            Some(canonical)
        );
        assert_eq!(
            router
                .lane_page("texas-truck-dispatch-service", "dallas--to--atlanta")
                .redirect_target(),
            Some(canonical)
        );
        assert_eq!(
            router.lane_page("texas", "miami-to-atlanta"),
            RouteOutcome::NotFound
        );
    }

    #[test]
    fn test_suffixed_drift_redirects_to_one_url() {
        let site = site();
        let resolver = SlugResolver::new();
        let router = SiteRouter::new(&site, &resolver);

        // Display-name match behind a suffix
        assert_eq!(
            router
                .lane_page(
                    "california-truck-dispatch-service",
                    "los-angeles-to-phoenix-truck-dispatch-service"
                )
                .redirect_target(),
            Some("/states/california-truck-dispatch-service/lanes/la-phoenix-truck-dispatch-service")
        );

        // Doubled dashes behind a suffix
        assert_eq!(
            router
                .lane_page(
                    "texas-truck-dispatch-service",
                    "dallas--to--atlanta-truck-dispatch-service"
                )
                .redirect_target(),
            Some("/states/texas-truck-dispatch-service/lanes/dallas-to-atlanta-truck-dispatch-service")
        );

        // Canonical target is served, so there is no redirect loop
        assert!(router
            .lane_page("california-truck-dispatch-service", "la-phoenix-truck-dispatch-service")
            .is_found());
    }

    #[test]
    fn test_other_collections() {
        let site = site();
        let resolver = SlugResolver::new();
        let router = SiteRouter::new(&site, &resolver);

        assert!(router.partner_page("uber-freight").is_found());
        assert!(router.career_page("senior-software-engineer-ai-ml").is_found());
        assert!(router.truck_type_page("reefer").is_found());
        assert_eq!(router.truck_type_page("tanker"), RouteOutcome::NotFound);
    }

    #[test]
    fn test_areas_we_serve() {
        let site = site();
        let resolver = SlugResolver::new();
        let router = SiteRouter::new(&site, &resolver);

        assert_eq!(
            router.areas_we_serve(&["southwest", "texas"]),
            "/states/texas-truck-dispatch-service"
        );
        assert_eq!(
            router.areas_we_serve(&["Illinois"]),
            "/states/illinois-truck-dispatch-service"
        );
        assert_eq!(router.areas_we_serve(&["northeast", "vermont"]), "/states");
        assert_eq!(router.areas_we_serve(&[]), "/states");
    }
}
