//! State entity

use serde::{Deserialize, Serialize};

use super::{Collection, Entity, LaneEntity, SeoMeta};

/// A state landing page with the freight lanes it owns
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StateEntity {
    // Identity
    pub id: String,
    pub name: String,
    pub display_name: String,
    pub slug: String,
    /// Postal abbreviation, e.g. "TX"
    pub abbreviation: String,

    // Content
    pub tagline: String,
    pub description: String,
    pub long_description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overview: Option<String>,

    // Market information
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub market_overview: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub average_rates: Option<String>,
    #[serde(default)]
    pub market_trends: Vec<String>,

    #[serde(default)]
    pub key_industries: Vec<String>,
    #[serde(default)]
    pub major_cities: Vec<String>,
    #[serde(default)]
    pub common_freight_types: Vec<String>,
    #[serde(default)]
    pub benefits: Vec<String>,
    #[serde(default)]
    pub challenges: Vec<String>,
    #[serde(default)]
    pub regulations: Vec<String>,
    #[serde(default)]
    pub seasonal_considerations: Vec<String>,

    // Media
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hero_image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_image: Option<String>,

    // SEO & metadata
    pub meta_title: String,
    pub meta_description: String,
    #[serde(default)]
    pub keywords: Vec<String>,

    // Call to action
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cta_headline: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cta_description: Option<String>,

    // Structured data
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area_served: Option<String>,

    /// Lanes owned by this state, in authored order
    #[serde(default)]
    pub lanes: Vec<LaneEntity>,
}

/// Summary of one lane as listed on its state's page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HighDemandLane {
    pub name: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rate: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<String>,
    pub slug: String,
}

impl StateEntity {
    /// Point every owned lane's back-reference at this state.
    ///
    /// The owner always wins; a lane authored with a different `stateSlug`
    /// is re-pointed and the mismatch is logged.
    pub fn with_lane_back_references(mut self) -> Self {
        for lane in &mut self.lanes {
            if lane.state_slug.is_empty() {
                lane.state_slug = self.slug.clone();
            } else if lane.state_slug != self.slug {
                tracing::warn!(
                    state = %self.slug,
                    lane = %lane.slug,
                    authored = %lane.state_slug,
                    "lane stateSlug does not match its owning state; using owner"
                );
                lane.state_slug = self.slug.clone();
            }
        }
        self
    }

    /// Lane summaries for the state page's high-demand list
    pub fn high_demand_lanes(&self) -> Vec<HighDemandLane> {
        self.lanes
            .iter()
            .map(|lane| HighDemandLane {
                name: if lane.display_name.is_empty() {
                    lane.name.clone()
                } else {
                    lane.display_name.clone()
                },
                description: lane.description.clone(),
                rate: lane.average_rate.clone(),
                distance: lane.distance.clone(),
                slug: lane.slug.clone(),
            })
            .collect()
    }
}

impl Entity for StateEntity {
    type Key = String;

    const COLLECTION: Collection = Collection::State;

    fn key(&self) -> String {
        self.slug.clone()
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn slug(&self) -> &str {
        &self.slug
    }

    fn display_name(&self) -> &str {
        &self.display_name
    }

    fn seo(&self) -> SeoMeta<'_> {
        SeoMeta {
            title: &self.meta_title,
            description: &self.meta_description,
            keywords: &self.keywords,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn georgia() -> StateEntity {
        serde_json::from_value(json!({
            "id": "georgia",
            "name": "Georgia",
            "displayName": "Georgia",
            "slug": "georgia",
            "abbreviation": "GA",
            "tagline": "Premium Georgia Truck Dispatch Services",
            "description": "Georgia freight.",
            "longDescription": "Georgia freight, at length.",
            "metaTitle": "Georgia Truck Dispatch",
            "metaDescription": "Dispatch services across Georgia.",
            "keywords": ["georgia dispatch"],
            "lanes": [
                {
                    "id": "georgia-atlantatomiami",
                    "name": "Atlanta → Miami",
                    "displayName": "Atlanta to Miami",
                    "slug": "atlanta-to-miami",
                    "description": "Southeast corridor.",
                    "averageRate": "$1,900 - $2,600",
                    "distance": "662 miles",
                    "metaTitle": "Atlanta to Miami Truck Dispatch",
                    "metaDescription": "Atlanta to Miami loads.",
                    "keywords": ["atlanta miami"]
                },
                {
                    "id": "georgia-savannahtocharlotte",
                    "name": "Savannah → Charlotte",
                    "displayName": "",
                    "slug": "savannah-to-charlotte",
                    "stateSlug": "south-carolina",
                    "description": "Port drayage.",
                    "metaTitle": "Savannah to Charlotte Truck Dispatch",
                    "metaDescription": "Savannah to Charlotte loads.",
                    "keywords": ["savannah charlotte"]
                }
            ]
        }))
        .unwrap()
    }

    #[test]
    fn test_back_references_follow_owner() {
        let state = georgia().with_lane_back_references();
        assert!(state.lanes.iter().all(|lane| lane.state_slug == "georgia"));
    }

    #[test]
    fn test_high_demand_lanes_fall_back_to_name() {
        let lanes = georgia().high_demand_lanes();
        assert_eq!(lanes.len(), 2);
        assert_eq!(lanes[0].name, "Atlanta to Miami");
        assert_eq!(lanes[0].rate.as_deref(), Some("$1,900 - $2,600"));
        assert_eq!(lanes[1].name, "Savannah → Charlotte");
        assert_eq!(lanes[1].slug, "savannah-to-charlotte");
    }
}
