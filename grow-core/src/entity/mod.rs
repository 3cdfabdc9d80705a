//! Content entities
//!
//! Every page behind a dynamic route is backed by one statically authored
//! record. Records are immutable once the catalog is built and are looked up
//! by a key that is unique within their collection:
//!
//! | Collection  | Key                         |
//! |-------------|-----------------------------|
//! | state       | `slug`                      |
//! | lane        | `(state_slug, slug)`        |
//! | partner     | `slug`                      |
//! | job         | `slug`                      |
//! | truck type  | `slug`                      |

mod job;
mod lane;
mod partner;
mod state;
mod truck_type;

use std::fmt;
use std::hash::Hash;

use serde::{Deserialize, Serialize};

pub use job::{JobOpening, Qualifications};
pub use lane::{BackhaulStrategy, LaneEntity, LaneKey, RateNegotiation, SeasonalBehavior, SeasonalFlag};
pub use partner::PartnerEntity;
pub use state::{HighDemandLane, StateEntity};
pub use truck_type::{BenefitItem, FeatureItem, TruckTypeEntity};

/// The entity collections served by the site
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Collection {
    State,
    Lane,
    Partner,
    Job,
    TruckType,
}

impl Collection {
    /// All collections in sitemap order
    pub const ALL: [Collection; 5] = [
        Collection::State,
        Collection::Lane,
        Collection::TruckType,
        Collection::Partner,
        Collection::Job,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Collection::State => "state",
            Collection::Lane => "lane",
            Collection::Partner => "partner",
            Collection::Job => "job",
            Collection::TruckType => "truck_type",
        }
    }

    /// Parse a collection name as typed on the command line
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().replace('-', "_").as_str() {
            "state" | "states" => Some(Collection::State),
            "lane" | "lanes" => Some(Collection::Lane),
            "partner" | "partners" => Some(Collection::Partner),
            "job" | "jobs" | "career" | "careers" => Some(Collection::Job),
            "truck_type" | "truck_types" => Some(Collection::TruckType),
            _ => None,
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Borrowed view of the SEO fields every routed entity carries
#[derive(Debug, Clone, Copy)]
pub struct SeoMeta<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub keywords: &'a [String],
}

impl SeoMeta<'_> {
    /// Names of the SEO fields that are empty
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.title.trim().is_empty() {
            missing.push("metaTitle");
        }
        if self.description.trim().is_empty() {
            missing.push("metaDescription");
        }
        if self.keywords.iter().all(|k| k.trim().is_empty()) {
            missing.push("keywords");
        }
        missing
    }

    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }
}

/// A statically authored content record
pub trait Entity: Clone + Send + Sync + 'static {
    /// Registry key; unique within the collection
    type Key: Clone + Eq + Hash + fmt::Debug + fmt::Display + Send + Sync;

    /// Collection this entity belongs to
    const COLLECTION: Collection;

    fn key(&self) -> Self::Key;

    /// Stable identifier assigned at authoring time
    fn id(&self) -> &str;

    /// Canonical slug as authored
    fn slug(&self) -> &str;

    /// Human-readable name
    fn display_name(&self) -> &str;

    fn seo(&self) -> SeoMeta<'_>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collection_parse() {
        assert_eq!(Collection::parse("states"), Some(Collection::State));
        assert_eq!(Collection::parse("Truck-Types"), Some(Collection::TruckType));
        assert_eq!(Collection::parse("careers"), Some(Collection::Job));
        assert_eq!(Collection::parse("services"), None);
    }

    #[test]
    fn test_seo_missing_fields() {
        let keywords = vec!["texas dispatch".to_string()];
        let meta = SeoMeta {
            title: "Texas Truck Dispatch",
            description: "",
            keywords: &keywords,
        };
        assert_eq!(meta.missing_fields(), vec!["metaDescription"]);
        assert!(!meta.is_complete());

        let empty: Vec<String> = vec![];
        let meta = SeoMeta {
            title: " ",
            description: "Dispatch",
            keywords: &empty,
        };
        assert_eq!(meta.missing_fields(), vec!["metaTitle", "keywords"]);
    }
}
