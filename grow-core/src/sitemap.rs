//! Sitemap and robots.txt
//!
//! One listing entry per static page and per entity, with a fixed priority
//! and change frequency per collection. State and lane URLs are built by the
//! same [`SlugResolver`] the router uses, so the sitemap only ever lists
//! canonical paths.

use std::fmt::Write as _;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::entity::Collection;
use crate::registry::SiteRegistry;
use crate::resolver::SlugResolver;

/// How often a page is expected to change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeFrequency {
    Always,
    Hourly,
    Daily,
    Weekly,
    Monthly,
    Yearly,
    Never,
}

impl ChangeFrequency {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeFrequency::Always => "always",
            ChangeFrequency::Hourly => "hourly",
            ChangeFrequency::Daily => "daily",
            ChangeFrequency::Weekly => "weekly",
            ChangeFrequency::Monthly => "monthly",
            ChangeFrequency::Yearly => "yearly",
            ChangeFrequency::Never => "never",
        }
    }
}

/// Static pages: path, change frequency, priority
pub const STATIC_PAGES: &[(&str, ChangeFrequency, f32)] = &[
    ("", ChangeFrequency::Daily, 1.0),
    ("/about", ChangeFrequency::Monthly, 0.8),
    ("/services", ChangeFrequency::Weekly, 0.9),
    ("/states", ChangeFrequency::Weekly, 0.9),
    ("/truck-type", ChangeFrequency::Weekly, 0.8),
    ("/careers", ChangeFrequency::Weekly, 0.7),
    ("/contact", ChangeFrequency::Monthly, 0.8),
    ("/about-our-partners", ChangeFrequency::Monthly, 0.7),
    ("/growth-plans", ChangeFrequency::Monthly, 0.7),
    ("/checklist", ChangeFrequency::Monthly, 0.6),
    ("/signup", ChangeFrequency::Monthly, 0.6),
    ("/privacy-policy", ChangeFrequency::Yearly, 0.3),
];

/// Listing policy for entity pages of one collection
pub fn collection_policy(collection: Collection) -> (ChangeFrequency, f32) {
    match collection {
        Collection::State => (ChangeFrequency::Weekly, 0.8),
        Collection::Lane => (ChangeFrequency::Weekly, 0.7),
        Collection::TruckType => (ChangeFrequency::Monthly, 0.7),
        Collection::Partner => (ChangeFrequency::Monthly, 0.6),
        Collection::Job => (ChangeFrequency::Weekly, 0.7),
    }
}

/// One `<url>` of the sitemap
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SitemapEntry {
    pub url: String,
    pub last_modified: DateTime<Utc>,
    pub change_frequency: ChangeFrequency,
    pub priority: f32,
}

/// Builds sitemap entries for a site
#[derive(Debug)]
pub struct SitemapBuilder<'a> {
    base_url: String,
    resolver: &'a SlugResolver,
    last_modified: DateTime<Utc>,
}

impl<'a> SitemapBuilder<'a> {
    pub fn new(base_url: &str, resolver: &'a SlugResolver) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            resolver,
            last_modified: Utc::now(),
        }
    }

    /// Stamp every entry with this time instead of now
    pub fn with_last_modified(mut self, last_modified: DateTime<Utc>) -> Self {
        self.last_modified = last_modified;
        self
    }

    fn entry(&self, path: &str, (change_frequency, priority): (ChangeFrequency, f32)) -> SitemapEntry {
        SitemapEntry {
            url: format!("{}{}", self.base_url, path),
            last_modified: self.last_modified,
            change_frequency,
            priority,
        }
    }

    /// Static pages, then states, lanes, truck types, partners and careers,
    /// each collection in store order
    pub fn build(&self, site: &SiteRegistry) -> Vec<SitemapEntry> {
        let mut entries: Vec<SitemapEntry> = STATIC_PAGES
            .iter()
            .map(|(path, freq, priority)| self.entry(path, (*freq, *priority)))
            .collect();

        for collection in Collection::ALL {
            let policy = collection_policy(collection);
            let paths: Vec<String> = match collection {
                Collection::State => site
                    .states()
                    .iter()
                    .map(|state| self.resolver.state_path(&state.slug))
                    .collect(),
                Collection::Lane => site
                    .lanes()
                    .get_all()
                    .iter()
                    .map(|lane| self.resolver.lane_path(&lane.state_slug, &lane.slug))
                    .collect(),
                Collection::TruckType => site
                    .truck_types()
                    .iter()
                    .map(|truck_type| format!("/truck-type/{}", truck_type.slug))
                    .collect(),
                Collection::Partner => site
                    .partners()
                    .iter()
                    .map(|partner| format!("/partners/{}", partner.slug))
                    .collect(),
                Collection::Job => site
                    .jobs()
                    .iter()
                    .map(|job| format!("/careers/{}", job.slug))
                    .collect(),
            };
            entries.extend(paths.iter().map(|path| self.entry(path, policy)));
        }

        tracing::debug!(entries = entries.len(), "sitemap built");
        entries
    }

    /// Build and render in one step
    pub fn to_xml(&self, site: &SiteRegistry) -> String {
        render_xml(&self.build(site))
    }
}

/// Render entries as a sitemaps.org urlset document
pub fn render_xml(entries: &[SitemapEntry]) -> String {
    let mut xml = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n",
    );

    for entry in entries {
        // Writing to a String cannot fail
        let _ = write!(
            xml,
            "  <url>\n    <loc>{}</loc>\n    <lastmod>{}</lastmod>\n    <changefreq>{}</changefreq>\n    <priority>{:.1}</priority>\n  </url>\n",
            escape_xml(&entry.url),
            entry.last_modified.to_rfc3339_opts(SecondsFormat::Secs, true),
            entry.change_frequency.as_str(),
            entry.priority
        );
    }

    xml.push_str("</urlset>\n");
    xml
}

fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// robots.txt body for the site
pub fn robots_txt(base_url: &str) -> String {
    format!(
        "User-agent: *\nAllow: /\nDisallow: /api/\nDisallow: /_next/\nDisallow: /admin/\n\nSitemap: {}/sitemap.xml\n",
        base_url.trim_end_matches('/')
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 15, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_entries_per_collection() {
        let site = SiteRegistry::embedded().unwrap();
        let resolver = SlugResolver::new();
        let entries = SitemapBuilder::new("https://www.growtrucking.com/", &resolver)
            .with_last_modified(fixed_time())
            .build(&site);

        assert_eq!(entries.len(), STATIC_PAGES.len() + site.entity_count());
        assert_eq!(entries[0].url, "https://www.growtrucking.com");
        assert_eq!(entries[0].priority, 1.0);

        let texas = entries
            .iter()
            .find(|e| e.url.ends_with("/states/texas-truck-dispatch-service"))
            .unwrap();
        assert_eq!(texas.change_frequency, ChangeFrequency::Weekly);
        assert_eq!(texas.priority, 0.8);

        let reefer = entries.iter().find(|e| e.url.ends_with("/truck-type/reefer")).unwrap();
        assert_eq!(reefer.change_frequency, ChangeFrequency::Monthly);

        assert!(entries.iter().any(|e| e.url.ends_with(
            "/states/georgia-truck-dispatch-service/lanes/dallas-to-atlanta-truck-dispatch-service"
        )));
        assert!(entries.iter().any(|e| e.url.ends_with("/careers/senior-software-engineer-ai-ml")));
        assert!(entries.iter().all(|e| e.last_modified == fixed_time()));
    }

    #[test]
    fn test_render_xml() {
        let entries = vec![SitemapEntry {
            url: "https://example.com/search?q=a&b=c".to_string(),
            last_modified: fixed_time(),
            change_frequency: ChangeFrequency::Yearly,
            priority: 0.3,
        }];

        let xml = render_xml(&entries);
        assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
        assert!(xml.contains("<loc>https://example.com/search?q=a&amp;b=c</loc>"));
        assert!(xml.contains("<lastmod>2025-01-15T12:00:00Z</lastmod>"));
        assert!(xml.contains("<changefreq>yearly</changefreq>"));
        assert!(xml.contains("<priority>0.3</priority>"));
        assert!(xml.trim_end().ends_with("</urlset>"));
    }

    #[test]
    fn test_robots() {
        let robots = robots_txt("https://www.growtrucking.com/");
        assert!(robots.starts_with("User-agent: *\nAllow: /\n"));
        assert!(robots.contains("Disallow: /_next/"));
        assert!(robots.ends_with("Sitemap: https://www.growtrucking.com/sitemap.xml\n"));
    }
}
