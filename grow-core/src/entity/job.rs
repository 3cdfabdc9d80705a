//! Job opening entity

use serde::{Deserialize, Serialize};

use super::{Collection, Entity, SeoMeta};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Qualifications {
    #[serde(default)]
    pub required: Vec<String>,
    #[serde(default)]
    pub preferred: Vec<String>,
}

/// A careers page for one open position
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobOpening {
    pub id: String,
    pub slug: String,
    pub title: String,
    /// Public requisition number, e.g. "GT001"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_id: Option<String>,
    pub posted_date: String,
    pub work_arrangement: String,
    pub location: String,
    pub department: String,
    pub employment_type: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub introduction: Option<String>,
    #[serde(default)]
    pub duties: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qualifications: Option<Qualifications>,
    #[serde(default)]
    pub what_we_offer: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub encouragement_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub apply_link: Option<String>,

    pub meta_title: String,
    pub meta_description: String,
    #[serde(default)]
    pub keywords: Vec<String>,
}

impl Entity for JobOpening {
    type Key = String;

    const COLLECTION: Collection = Collection::Job;

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
        &self.title
    }

    fn seo(&self) -> SeoMeta<'_> {
        SeoMeta {
            title: &self.meta_title,
            description: &self.meta_description,
            keywords: &self.keywords,
        }
    }
}
