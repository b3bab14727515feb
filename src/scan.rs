//! Content loading and manifest generation.
//!
//! Stage 1 of the build pipeline. Reads the content directory and produces a
//! [`Manifest`] that the generate stage consumes.
//!
//! ## Directory Structure
//!
//! ```text
//! content/
//! ├── config.toml          # Site configuration (optional)
//! ├── catalog.toml         # Offerings (optional, built-in sample otherwise)
//! ├── navigation.toml      # Links, categories, sections (optional)
//! ├── assets/              # Copied verbatim to the output root
//! └── pages/               # Markdown pages
//!     ├── about.md         # → /about/
//!     └── legal/
//!         └── terms.md     # → /legal/terms/
//! ```
//!
//! Every file is optional: an empty directory builds the sample storefront.
//!
//! ## Validation
//!
//! - Catalog and navigation rules are enforced by their own modules.
//! - Page slugs must be URL-safe per segment, unique, and may not shadow
//!   the generated `agent/` and `category/` trees.
//! - Offerings whose category has no filter are reported with `log::warn!`
//!   but do not fail the scan.

use crate::catalog::{self, Catalog, CatalogSource};
use crate::config::{self, SiteConfig};
use crate::navigation::{self, NavigationSource};
use crate::routes;
use crate::types::{Navigation, Offering, Page};
use pulldown_cmark::{Event, HeadingLevel, Parser as MdParser, Tag, TagEnd};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use thiserror::Error;
use walkdir::WalkDir;

pub const PAGES_DIR: &str = "pages";

/// Top-level output directories owned by the generator.
const RESERVED_PREFIXES: &[&str] = &["agent", "category", "assets"];

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Walk error: {0}")]
    Walk(#[from] walkdir::Error),
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Catalog error: {0}")]
    Catalog(#[from] catalog::CatalogError),
    #[error("Navigation error: {0}")]
    Navigation(#[from] navigation::NavigationError),
    #[error("Page slug is not URL-safe: {0}")]
    InvalidPageSlug(String),
    #[error("Page {0} collides with a generated directory")]
    ReservedPageSlug(String),
    #[error("Two pages resolve to the same slug: {0}")]
    DuplicatePageSlug(String),
}

/// Manifest passed from scan to generate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Manifest {
    pub offerings: Vec<Offering>,
    pub navigation: Navigation,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub pages: Vec<Page>,
    pub config: SiteConfig,
}

impl Manifest {
    /// Category names used by offerings but missing from the category filters.
    pub fn unknown_categories(&self) -> Vec<&Offering> {
        let known: HashSet<&str> = self
            .navigation
            .categories
            .iter()
            .map(|c| c.name.as_str())
            .collect();
        catalog::unknown_categories(&self.offerings, &known)
    }
}

/// Load everything under `root` into a manifest.
pub fn scan(root: &Path) -> Result<Manifest, ScanError> {
    let config = config::load_config(root)?;
    let catalog = Catalog::load(root)?;
    let navigation = navigation::load(root)?;
    let pages = parse_pages(&root.join(PAGES_DIR))?;
    Ok(assemble(&catalog, &navigation, pages, config))
}

/// Build a manifest from any catalog and navigation provider.
///
/// The providers are copied into the manifest so the generate stage does not
/// depend on where the data came from.
pub fn assemble(
    catalog: &impl CatalogSource,
    navigation: &impl NavigationSource,
    pages: Vec<Page>,
    config: SiteConfig,
) -> Manifest {
    let manifest = Manifest {
        offerings: catalog.list_all().to_vec(),
        navigation: Navigation {
            links: navigation.links().to_vec(),
            categories: navigation.categories().to_vec(),
            sections: navigation.sections().to_vec(),
            user_menu: navigation.user_menu().to_vec(),
            social: navigation.social().to_vec(),
        },
        pages,
        config,
    };
    for offering in manifest.unknown_categories() {
        log::warn!(
            "offering {:?} uses category {:?}, which has no category filter",
            offering.id,
            offering.category
        );
    }
    manifest
}

/// Parse every `.md` file under `pages_dir` into a page, sorted by slug.
///
/// A missing directory yields no pages.
fn parse_pages(pages_dir: &Path) -> Result<Vec<Page>, ScanError> {
    if !pages_dir.is_dir() {
        return Ok(Vec::new());
    }

    let mut pages = Vec::new();
    let mut seen = HashSet::new();
    for entry in WalkDir::new(pages_dir).sort_by_file_name() {
        let entry = entry?;
        let path = entry.path();
        let is_markdown = path
            .extension()
            .map(|e| e.eq_ignore_ascii_case("md"))
            .unwrap_or(false);
        if !entry.file_type().is_file() || !is_markdown {
            continue;
        }

        let relative = path.strip_prefix(pages_dir).unwrap_or(path).with_extension("");
        let segments: Vec<String> = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy().into_owned())
            .collect();
        let slug = segments.join("/");
        if !segments.iter().all(|s| routes::is_url_safe_id(s)) {
            return Err(ScanError::InvalidPageSlug(slug));
        }
        if RESERVED_PREFIXES.contains(&segments[0].as_str()) {
            return Err(ScanError::ReservedPageSlug(slug));
        }
        if !seen.insert(slug.clone()) {
            return Err(ScanError::DuplicatePageSlug(slug));
        }

        let body = fs::read_to_string(path)?;
        let stem = segments.last().map(String::as_str).unwrap_or_default();
        let title = extract_title(&body).unwrap_or_else(|| routes::title_from_stem(stem));
        pages.push(Page { title, slug, body });
    }
    Ok(pages)
}

/// Text of the first level-1 heading in `body`, trimmed.
///
/// Headings are found through the markdown parser, so `# ` lines inside code
/// blocks do not count.
fn extract_title(body: &str) -> Option<String> {
    let mut events = MdParser::new(body).skip_while(|event| {
        !matches!(
            event,
            Event::Start(Tag::Heading {
                level: HeadingLevel::H1,
                ..
            })
        )
    });
    events.next()?;

    let mut title = String::new();
    for event in events {
        match event {
            Event::End(TagEnd::Heading(_)) => break,
            Event::Text(text) | Event::Code(text) => title.push_str(&text),
            _ => {}
        }
    }
    let title = title.trim();
    (!title.is_empty()).then(|| title.to_string())
}
