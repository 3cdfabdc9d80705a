//! Lane entity and its compound key

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Collection, Entity, SeoMeta};

/// Compound registry key for lanes: a lane slug is only unique within its
/// owning state.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LaneKey {
    pub state_slug: String,
    pub slug: String,
}

impl LaneKey {
    pub fn new(state_slug: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            state_slug: state_slug.into(),
            slug: slug.into(),
        }
    }
}

impl fmt::Display for LaneKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.state_slug, self.slug)
    }
}

/// A seasonal flag: authored either as a plain yes/no or as a sentence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SeasonalFlag {
    Flag(bool),
    Note(String),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeasonalBehavior {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub q1_slow: Option<SeasonalFlag>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub q4_peak: Option<SeasonalFlag>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub produce_season: Option<SeasonalFlag>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hurricane_risk: Option<SeasonalFlag>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RateNegotiation {
    #[serde(default)]
    pub when_to_book: Vec<String>,
    #[serde(default)]
    pub what_brokers_pay_more: Vec<String>,
    #[serde(default)]
    pub when_to_avoid: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackhaulStrategy {
    #[serde(default)]
    pub best_return_cities: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadhead_risk_percentage: Option<String>,
    #[serde(default)]
    pub alternative_routes: Vec<String>,
}

/// A freight lane page, owned by exactly one state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LaneEntity {
    // Identity
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub display_name: String,
    pub slug: String,
    /// Non-owning back-reference to the owning state, used only as a key
    #[serde(default)]
    pub state_slug: String,

    // Content
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub long_description: Option<String>,

    // Route information
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub average_transit_time: Option<String>,

    // Market information
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub average_rate: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rate_per_mile: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub load_frequency: Option<String>,
    #[serde(default)]
    pub peak_seasons: Vec<String>,

    #[serde(default)]
    pub freight_types: Vec<String>,
    #[serde(default)]
    pub key_features: Vec<String>,
    #[serde(default)]
    pub benefits: Vec<String>,
    #[serde(default)]
    pub challenges: Vec<String>,
    /// Dispatcher insider tips
    #[serde(default)]
    pub tips: Vec<String>,

    // Commodities
    #[serde(default)]
    pub primary_commodities: Vec<String>,
    #[serde(default)]
    pub secondary_commodities: Vec<String>,
    #[serde(default)]
    pub seasonal_cargo: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seasonal_behavior: Option<SeasonalBehavior>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rate_negotiation: Option<RateNegotiation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backhaul_strategy: Option<BackhaulStrategy>,

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
}

impl Entity for LaneEntity {
    type Key = LaneKey;

    const COLLECTION: Collection = Collection::Lane;

    fn key(&self) -> LaneKey {
        LaneKey::new(self.state_slug.clone(), self.slug.clone())
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

    #[test]
    fn test_lane_key_display() {
        let key = LaneKey::new("texas", "dallas-to-atlanta");
        assert_eq!(key.to_string(), "texas:dallas-to-atlanta");
    }

    #[test]
    fn test_seasonal_flags_accept_bool_or_text() {
        let behavior: SeasonalBehavior = serde_json::from_value(json!({
            "q1Slow": true,
            "hurricaneRisk": "June-November for coastal routes"
        }))
        .unwrap();

        assert_eq!(behavior.q1_slow, Some(SeasonalFlag::Flag(true)));
        assert_eq!(
            behavior.hurricane_risk,
            Some(SeasonalFlag::Note("June-November for coastal routes".to_string()))
        );
        assert!(behavior.q4_peak.is_none());
    }
}
