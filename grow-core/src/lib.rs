//! # Grow Core - Site Content Registry
//!
//! Every dynamic page on the Grow Trucking site (states, freight lanes,
//! brokerage partners, job openings, truck types) is backed by a statically
//! authored content record. This crate holds those records and answers the
//! questions a route layer asks about them:
//!
//! - **Registry**: lazily built, read-only lookup by slug (lanes by
//!   `(state, slug)`), in authored order
//! - **Resolver**: an ordered fallback chain from a URL segment to a record,
//!   absorbing route suffixes, doubled dashes and slug drift
//! - **Routing**: serve, redirect to the canonical URL, or not found
//! - **Structure**: pre-publication lint of page content against templates
//! - **Sitemap**: one listing entry per page, with robots.txt
//!
//! ## Example
//!
//! ```rust
//! use grow_core::{RouteOutcome, SiteRegistry, SiteRouter, SlugResolver};
//!
//! let site = SiteRegistry::embedded().unwrap();
//! let resolver = SlugResolver::new();
//!
//! // Direct lookup
//! let texas = site.states().get_by_slug("texas").unwrap();
//! assert_eq!(texas.abbreviation, "TX");
//! assert!(site.lanes().exists("dallas-to-atlanta", "texas"));
//!
//! // Suffixed and bare URL segments
//! let resolved = resolver.resolve(site.states(), "texas-truck-dispatch-service").unwrap();
//! assert_eq!(resolved.entity.slug, "texas");
//!
//! let router = SiteRouter::new(&site, &resolver);
//! assert_eq!(
//!     router.state_page("texas"),
//!     RouteOutcome::Redirect("/states/texas-truck-dispatch-service".to_string())
//! );
//! ```

pub mod config;
pub mod entity;
pub mod envelope;
pub mod error;
pub mod registry;
pub mod resolver;
pub mod sitemap;
pub mod store;
pub mod structure;

// Re-export main types
pub use config::SiteConfig;
pub use entity::{
    Collection, Entity, JobOpening, LaneEntity, LaneKey, PartnerEntity, SeoMeta, StateEntity,
    TruckTypeEntity,
};
pub use envelope::ApiResponse;
pub use error::{ContentError, ErrorCategory, ErrorDetail, ErrorResponse, Result};
pub use registry::{LaneRegistry, Registry, SeoGap, ShadowedKey, SiteRegistry, StateLaneStore};
pub use resolver::{
    LanePage, MatchStep, Resolved, RouteOutcome, SegmentForm, SiteRouter, SlugResolver,
    DEFAULT_ROUTE_SUFFIX,
};
pub use sitemap::{robots_txt, ChangeFrequency, SitemapBuilder, SitemapEntry};
pub use store::{Catalog, ContentLoader, EntityStore, FnStore, StaticStore};
pub use structure::{Bound, PageTemplate, SectionSpec, StructureReport, StructureValidator};
