//! Content Structure Validation
//!
//! Pre-publication lint for authored page content. A [`PageTemplate`] lists
//! the sections a page must have, in order, with optional word-count and
//! item-count bounds. [`StructureValidator::validate`] checks a JSON content
//! object against a template and returns every defect it finds in one pass.
//!
//! Content is keyed by section key:
//!
//! ```json
//! {
//!   "h1": "Texas Truck Dispatcher | TX Freight Loads & Dispatch Services",
//!   "intro": "Texas moves more freight than ...",
//!   "topFreightLanes": [ ... 15 entries ... ],
//!   "faq": [ ... ]
//! }
//! ```

mod templates;

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

pub use templates::{
    lane_cta_headline, lane_h1, lane_page_template, state_cta_headline, state_h1,
    state_page_template, template_by_name, TEMPLATE_NAMES,
};

/// An allowed count: either exact or an inclusive range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Bound {
    Exact(usize),
    Range { min: usize, max: usize },
}

impl Bound {
    pub fn contains(&self, n: usize) -> bool {
        match *self {
            Bound::Exact(expected) => n == expected,
            Bound::Range { min, max } => (min..=max).contains(&n),
        }
    }
}

impl fmt::Display for Bound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Bound::Exact(n) => write!(f, "exactly {}", n),
            Bound::Range { min, max } => write!(f, "between {} and {}", min, max),
        }
    }
}

/// One section of a page template
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionSpec {
    /// Key of the section in a content object
    pub key: String,

    /// Human-readable section name, used in messages
    pub name: String,

    /// Position on the page, starting at 1
    pub order: u32,

    #[serde(default)]
    pub required: bool,

    /// Allowed number of whitespace-separated words (text sections)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub word_count: Option<Bound>,

    /// Allowed number of entries (list sections)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_count: Option<Bound>,

    #[serde(default)]
    pub description: String,
}

impl SectionSpec {
    /// A required section with no bounds
    pub fn required(key: impl Into<String>, name: impl Into<String>, order: u32) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
            order,
            required: true,
            word_count: None,
            item_count: None,
            description: String::new(),
        }
    }

    pub fn with_word_count(mut self, bound: Bound) -> Self {
        self.word_count = Some(bound);
        self
    }

    pub fn with_item_count(mut self, bound: Bound) -> Self {
        self.item_count = Some(bound);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// The structural contract of one kind of page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageTemplate {
    pub name: String,
    pub sections: Vec<SectionSpec>,
}

impl PageTemplate {
    pub fn new(name: impl Into<String>, sections: Vec<SectionSpec>) -> Self {
        Self {
            name: name.into(),
            sections,
        }
    }

    /// Read a template from JSON
    pub fn from_json(json: &str) -> crate::error::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Sections in page order
    pub fn ordered_sections(&self) -> Vec<&SectionSpec> {
        let mut sections: Vec<&SectionSpec> = self.sections.iter().collect();
        sections.sort_by_key(|section| section.order);
        sections
    }

    pub fn section(&self, key: &str) -> Option<&SectionSpec> {
        self.sections.iter().find(|section| section.key == key)
    }
}

/// Outcome of validating one content object
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StructureReport {
    /// True when there are no errors
    pub is_valid: bool,

    /// Every structural defect, in section order
    pub errors: Vec<String>,

    /// Content keys the template does not know about
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

impl StructureReport {
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            errors: vec![],
            warnings: vec![],
        }
    }

    pub fn add_error(&mut self, message: impl Into<String>) {
        self.is_valid = false;
        self.errors.push(message.into());
    }

    pub fn add_warning(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    pub fn summary(&self) -> String {
        format!(
            "{}: {} errors, {} warnings",
            if self.is_valid { "VALID" } else { "INVALID" },
            self.errors.len(),
            self.warnings.len()
        )
    }
}

/// Checks content objects against page templates
#[derive(Debug, Clone, Default)]
pub struct StructureValidator {
    /// Warn about content keys the template does not define
    check_unknown_sections: bool,
}

impl StructureValidator {
    pub fn new() -> Self {
        Self {
            check_unknown_sections: true,
        }
    }

    /// Do not warn about extra content keys
    pub fn skip_unknown_sections(mut self) -> Self {
        self.check_unknown_sections = false;
        self
    }

    /// Validate `content` against `template`.
    ///
    /// Missing required sections are reported first, then bound violations,
    /// each in page order. A missing section is not bound-checked. A value
    /// that is absent, null, false or an empty string counts as missing.
    pub fn validate(&self, content: &Value, template: &PageTemplate) -> StructureReport {
        let mut report = StructureReport::valid();

        let Some(object) = content.as_object() else {
            report.add_error(format!(
                "{} content must be a JSON object",
                template.name
            ));
            return report;
        };

        let sections = template.ordered_sections();

        for section in &sections {
            if section.required && is_missing(object.get(&section.key)) {
                report.add_error(format!("Missing required section: {}", section.name));
            }
        }

        for section in &sections {
            let value = match object.get(&section.key) {
                Some(value) if !is_missing(Some(value)) => value,
                _ => continue,
            };

            if let Some(bound) = section.word_count {
                match value.as_str() {
                    Some(text) => {
                        let words = text.split_whitespace().count();
                        if !bound.contains(words) {
                            report.add_error(format!(
                                "{} word count ({}) must be {}",
                                section.name, words, bound
                            ));
                        }
                    }
                    None => report.add_error(format!("{} must be text", section.name)),
                }
            }

            if let Some(bound) = section.item_count {
                let items = value.as_array().map_or(0, Vec::len);
                if !bound.contains(items) {
                    report.add_error(format!(
                        "{} count ({}) must be {}",
                        section.name, items, bound
                    ));
                }
            }
        }

        if self.check_unknown_sections {
            for key in object.keys() {
                if template.section(key).is_none() {
                    report.add_warning(format!("Unknown section: {}", key));
                }
            }
        }

        tracing::debug!(template = %template.name, "{}", report.summary());

        report
    }
}

fn is_missing(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) | Some(Value::Bool(false)) => true,
        Some(Value::String(text)) => text.is_empty(),
        Some(_) => false,
    }
}
