//! Truck type entity

use serde::{Deserialize, Serialize};

use super::{Collection, Entity, SeoMeta};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureItem {
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenefitItem {
    pub title: String,
    pub description: String,
}

/// A dispatch service page for one equipment type (dry van, reefer, ...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TruckTypeEntity {
    pub id: String,
    pub name: String,
    pub display_name: String,
    pub slug: String,
    pub tagline: String,
    pub description: String,
    pub long_description: String,
    /// Equipment sizes covered, e.g. "Any type of 48'-53' trucks"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,

    #[serde(default)]
    pub features: Vec<FeatureItem>,
    #[serde(default)]
    pub benefits: Vec<BenefitItem>,
    #[serde(default)]
    pub key_points: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hero_image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_image: Option<String>,

    pub meta_title: String,
    pub meta_description: String,
    #[serde(default)]
    pub keywords: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cta_headline: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cta_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area_served: Option<String>,
}

impl Entity for TruckTypeEntity {
    type Key = String;

    const COLLECTION: Collection = Collection::TruckType;

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
