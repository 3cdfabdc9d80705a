//! Partner entity

use serde::{Deserialize, Serialize};

use super::{Collection, Entity, SeoMeta};

/// A freight brokerage partner page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartnerEntity {
    pub id: String,
    pub name: String,
    pub display_name: String,
    pub slug: String,

    pub tagline: String,
    pub overview: String,
    pub long_description: String,

    #[serde(default)]
    pub core_services: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub why_choose: Option<String>,
    #[serde(default)]
    pub strengths: Vec<String>,

    pub relationship: String,
    pub cta: String,

    pub meta_title: String,
    pub meta_description: String,
    #[serde(default)]
    pub keywords: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hero_image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub partner_image: Option<String>,
}

impl Entity for PartnerEntity {
    type Key = String;

    const COLLECTION: Collection = Collection::Partner;

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
