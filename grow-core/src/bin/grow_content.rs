//! Grow Content CLI - inspect and lint site content
//!
//! Usage:
//!     grow-content list states
//!     grow-content resolve state texas-truck-dispatch-service
//!     grow-content resolve lane texas los-angeles--to--dallas
//!     grow-content lint --template state content/drafts/texas.json
//!     grow-content audit
//!     grow-content --content-dir ./content sitemap > sitemap.xml

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use serde::Serialize;
use serde_json::Value;
use tracing_subscriber::EnvFilter;

use grow_core::structure::{template_by_name, TEMPLATE_NAMES};
use grow_core::{
    robots_txt, Collection, ContentError, Entity, PageTemplate, SiteConfig, SiteRegistry,
    SitemapBuilder, SlugResolver, StructureReport, StructureValidator,
};

#[derive(Parser, Debug)]
#[command(name = "grow-content")]
#[command(about = "Inspect, resolve and lint Grow Trucking site content")]
#[command(version)]
struct Args {
    /// Path to a site config JSON file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Content directory (default: content compiled into the binary)
    #[arg(long, global = true)]
    content_dir: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Verbose output (debug logging)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the entities of one collection
    List {
        /// states, lanes, partners, careers or truck-types
        collection: String,
    },

    /// Resolve a URL segment the way the router does
    Resolve {
        #[command(subcommand)]
        target: ResolveTarget,
    },

    /// Check content files against a page template
    Lint {
        /// Built-in template name (state, lane) or a template JSON file
        #[arg(short, long, default_value = "state")]
        template: String,

        /// Content JSON files
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },

    /// Report incomplete SEO metadata and keys authored twice
    Audit,

    /// Print the sitemap XML
    Sitemap,

    /// Print robots.txt
    Robots,
}

#[derive(Subcommand, Debug)]
enum ResolveTarget {
    /// Resolve a state segment
    State { segment: String },

    /// Resolve a lane segment within a state
    Lane { state: String, segment: String },
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    match run(&args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "grow_core=debug" } else { "grow_core=warn" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)))
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(args: &Args) -> grow_core::Result<SiteConfig> {
    let mut config = SiteConfig::load(args.config.as_deref())?;
    if let Some(dir) = &args.content_dir {
        config.content_dir = Some(dir.clone());
    }
    Ok(config)
}

fn run(args: &Args) -> grow_core::Result<ExitCode> {
    let config = load_config(args)?;

    if args.verbose {
        eprintln!(
            "Content: {}",
            config
                .content_dir
                .as_ref()
                .map_or_else(|| "embedded".to_string(), |dir| dir.display().to_string())
        );
    }

    match &args.command {
        Command::Robots => {
            print!("{}", robots_txt(&config.base_url));
            Ok(ExitCode::SUCCESS)
        }
        Command::Lint { template, files } => lint(args.json, template, files),
        Command::List { collection } => {
            let site = config.build_site()?;
            list(&site, collection, args.json)
        }
        Command::Resolve { target } => {
            let site = config.build_site()?;
            resolve(&site, &config.resolver(), target, args.json)
        }
        Command::Audit => {
            let site = config.build_site()?;
            audit(&site, args.json)
        }
        Command::Sitemap => {
            let site = config.build_site()?;
            let resolver = config.resolver();
            let builder = SitemapBuilder::new(&config.base_url, &resolver);
            if args.json {
                print_json(&builder.build(&site));
            } else {
                print!("{}", builder.to_xml(&site));
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Error serializing output: {}", e),
    }
}

#[derive(Serialize)]
struct ListedEntity<'a> {
    key: String,
    id: &'a str,
    display_name: &'a str,
}

fn listed<E: Entity>(entities: &[E]) -> Vec<ListedEntity<'_>> {
    entities
        .iter()
        .map(|entity| ListedEntity {
            key: entity.key().to_string(),
            id: entity.id(),
            display_name: entity.display_name(),
        })
        .collect()
}

fn list(site: &SiteRegistry, collection: &str, json: bool) -> grow_core::Result<ExitCode> {
    let collection = Collection::parse(collection).ok_or_else(|| ContentError::UnknownCollection {
        name: collection.to_string(),
    })?;

    let rows = match collection {
        Collection::State => listed(site.states().get_all()),
        Collection::Lane => listed(site.lanes().get_all()),
        Collection::Partner => listed(site.partners().get_all()),
        Collection::Job => listed(site.jobs().get_all()),
        Collection::TruckType => listed(site.truck_types().get_all()),
    };

    if json {
        print_json(&rows);
    } else {
        for row in &rows {
            println!("  {:<50} {}", row.key, row.display_name);
        }
        println!();
        println!("Total: {} {}", rows.len(), collection);
    }
    Ok(ExitCode::SUCCESS)
}

#[derive(Serialize)]
struct Resolution<'a> {
    collection: Collection,
    slug: &'a str,
    step: &'static str,
    canonical_path: String,
}

fn resolve(
    site: &SiteRegistry,
    resolver: &SlugResolver,
    target: &ResolveTarget,
    json: bool,
) -> grow_core::Result<ExitCode> {
    let resolution = match target {
        ResolveTarget::State { segment } => resolver.resolve(site.states(), segment).map(|resolved| Resolution {
            collection: Collection::State,
            slug: &resolved.entity.slug,
            step: resolved.step.as_str(),
            canonical_path: resolver.state_path(&resolved.entity.slug),
        }),
        ResolveTarget::Lane { state, segment } => resolver
            .resolve(site.states(), state)
            .and_then(|state| resolver.resolve_lane(site.lanes(), &state.entity.slug, segment))
            .map(|resolved| Resolution {
                collection: Collection::Lane,
                slug: &resolved.entity.slug,
                step: resolved.step.as_str(),
                canonical_path: resolver.lane_path(&resolved.entity.state_slug, &resolved.entity.slug),
            }),
    };

    match resolution {
        Some(resolution) => {
            if json {
                print_json(&resolution);
            } else {
                println!("{} (matched by {})", resolution.canonical_path, resolution.step);
            }
            Ok(ExitCode::SUCCESS)
        }
        None => {
            eprintln!("Not found");
            Ok(ExitCode::FAILURE)
        }
    }
}

fn load_template(name: &str) -> grow_core::Result<PageTemplate> {
    if let Some(template) = template_by_name(name) {
        return Ok(template.clone());
    }

    let path = Path::new(name);
    if path.is_file() {
        let json = std::fs::read_to_string(path)?;
        return PageTemplate::from_json(&json);
    }

    Err(ContentError::UnknownTemplate {
        name: format!("{} (built-in: {})", name, TEMPLATE_NAMES.join(", ")),
    })
}

#[derive(Serialize)]
struct LintResult {
    file: String,
    #[serde(flatten)]
    report: StructureReport,
}

fn lint(json: bool, template: &str, files: &[PathBuf]) -> grow_core::Result<ExitCode> {
    let template = load_template(template)?;
    let validator = StructureValidator::new();

    let mut results = Vec::with_capacity(files.len());
    for file in files {
        let report = match read_content(file) {
            Ok(content) => validator.validate(&content, &template),
            Err(e) => {
                let mut report = StructureReport::default();
                report.add_error(e.to_string());
                report
            }
        };
        results.push(LintResult {
            file: file.display().to_string(),
            report,
        });
    }

    if json {
        print_json(&results);
    } else {
        for result in &results {
            println!("{}: {}", result.file, result.report.summary());
            for error in &result.report.errors {
                println!("  error: {}", error);
            }
            for warning in &result.report.warnings {
                println!("  warning: {}", warning);
            }
        }
    }

    let failed = results.iter().filter(|r| !r.report.is_valid).count();
    if failed > 0 {
        eprintln!("{} of {} files invalid", failed, results.len());
        Ok(ExitCode::FAILURE)
    } else {
        Ok(ExitCode::SUCCESS)
    }
}

fn read_content(path: &Path) -> grow_core::Result<Value> {
    let json = std::fs::read_to_string(path).map_err(|e| ContentError::ContentLoadError {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;
    serde_json::from_str(&json).map_err(|e| ContentError::InvalidContent {
        source_name: path.display().to_string(),
        reason: e.to_string(),
    })
}

fn audit(site: &SiteRegistry, json: bool) -> grow_core::Result<ExitCode> {
    let gaps = site.seo_gaps();
    let shadowed = site.shadowed_keys();

    if json {
        print_json(&serde_json::json!({
            "entities": site.entity_count(),
            "seo_gaps": gaps,
            "shadowed_keys": shadowed,
        }));
    } else {
        println!("Entities: {}", site.entity_count());
        println!();
        println!("SEO gaps: {}", gaps.len());
        for gap in &gaps {
            println!("  {} {}: missing {}", gap.collection, gap.key, gap.missing.join(", "));
        }
        println!();
        println!("Shadowed keys: {}", shadowed.len());
        for key in &shadowed {
            println!("  {} {}", key.collection, key.key);
        }
    }

    if gaps.is_empty() && shadowed.is_empty() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}
