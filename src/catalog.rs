//! Catalog data source.
//!
//! The gallery only ever sees offerings through [`CatalogSource`], a read-only
//! "list all" provider. [`Catalog`] is the stock implementation: it loads
//! `catalog.toml` from the content directory, or the built-in sample catalog
//! when that file is absent.
//!
//! ## File Format
//!
//! ```toml
//! [[offerings]]
//! id = "logo-demo"                # URL-safe, unique; keys /agent/{id}
//! name = "Logo Designer"
//! category = "Graphics & Design"  # should match a category filter name
//! price = 0                       # minor units, 0 = free
//! description = "Generate a minimalist tech logo pack in under a minute."
//! media = "https://images.example.com/logo.jpg"
//! ```
//!
//! ## Validation
//!
//! - Missing or unknown fields, wrong types and negative prices fail to parse.
//! - Identifiers must be URL-safe and unique.
//! - Source order is preserved; nothing is sorted.

use crate::routes;
use crate::types::Offering;
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use thiserror::Error;

const BUILTIN_CATALOG: &str = include_str!("../static/catalog.toml");

pub const CATALOG_FILE: &str = "catalog.toml";

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Duplicate offering id: {0}")]
    DuplicateId(String),
    #[error("Offering id is not URL-safe: {0:?}")]
    InvalidId(String),
}

/// Read-only provider of catalog offerings, in display order.
pub trait CatalogSource {
    fn list_all(&self) -> &[Offering];
}

/// On-disk shape of `catalog.toml`.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CatalogFile {
    #[serde(default)]
    offerings: Vec<Offering>,
}

/// A validated, immutable list of offerings.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    offerings: Vec<Offering>,
}

impl Catalog {
    /// Validate and wrap an ordered list of offerings.
    pub fn new(offerings: Vec<Offering>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for offering in &offerings {
            if !routes::is_url_safe_id(&offering.id) {
                return Err(CatalogError::InvalidId(offering.id.clone()));
            }
            if !seen.insert(offering.id.as_str()) {
                return Err(CatalogError::DuplicateId(offering.id.clone()));
            }
        }
        Ok(Self { offerings })
    }

    /// Parse a `catalog.toml` document.
    pub fn from_toml_str(content: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = toml::from_str(content)?;
        Self::new(file.offerings)
    }

    /// The sample catalog shipped with the binary.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_toml_str(BUILTIN_CATALOG)
    }

    /// Load `catalog.toml` from `dir`, falling back to the built-in catalog.
    pub fn load(dir: &Path) -> Result<Self, CatalogError> {
        let path = dir.join(CATALOG_FILE);
        if !path.exists() {
            log::debug!("no {CATALOG_FILE} in {}, using built-in catalog", dir.display());
            return Self::builtin();
        }
        let content = fs::read_to_string(&path)?;
        let catalog = Self::from_toml_str(&content)?;
        log::debug!("loaded {} offerings from {}", catalog.offerings.len(), path.display());
        Ok(catalog)
    }

    pub fn get(&self, id: &str) -> Option<&Offering> {
        self.offerings.iter().find(|o| o.id == id)
    }

    pub fn into_vec(self) -> Vec<Offering> {
        self.offerings
    }
}

impl CatalogSource for Catalog {
    fn list_all(&self) -> &[Offering] {
        &self.offerings
    }
}

/// Offerings whose category is not in `known`, in catalog order.
pub fn unknown_categories<'a>(
    offerings: &'a [Offering],
    known: &HashSet<&str>,
) -> Vec<&'a Offering> {
    offerings
        .iter()
        .filter(|o| !known.contains(o.category.as_str()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Price;
    use tempfile::TempDir;

    fn offering(id: &str) -> Offering {
        Offering {
            id: id.to_string(),
            name: id.to_uppercase(),
            category: "Code Fixes".to_string(),
            price: Price(100),
            description: format!("{id} description"),
            media: format!("https://example.com/{id}.jpg"),
        }
    }

    #[test]
    fn builtin_catalog_has_three_sample_offerings() {
        let catalog = Catalog::builtin().unwrap();
        let ids: Vec<&str> = catalog.list_all().iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids, vec!["logo-demo", "brand-kit", "icon-set"]);
    }

    #[test]
    fn builtin_catalog_prices() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(catalog.get("logo-demo").unwrap().price, Price(0));
        assert_eq!(catalog.get("brand-kit").unwrap().price, Price(3000));
        assert_eq!(catalog.get("icon-set").unwrap().price, Price(1500));
    }

    #[test]
    fn new_preserves_source_order() {
        let catalog = Catalog::new(vec![offering("c"), offering("a"), offering("b")]).unwrap();
        let ids: Vec<&str> = catalog.list_all().iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids, vec!["c", "a", "b"]);
    }

    #[test]
    fn duplicate_id_rejected() {
        let result = Catalog::new(vec![offering("a"), offering("b"), offering("a")]);
        assert!(matches!(result, Err(CatalogError::DuplicateId(id)) if id == "a"));
    }

    #[test]
    fn unsafe_id_rejected() {
        let result = Catalog::new(vec![offering("has space")]);
        assert!(matches!(result, Err(CatalogError::InvalidId(_))));
    }

    #[test]
    fn empty_catalog_is_valid() {
        let catalog = Catalog::from_toml_str("").unwrap();
        assert!(catalog.list_all().is_empty());
    }

    #[test]
    fn unknown_top_level_key_rejected() {
        let result = Catalog::from_toml_str("[[agents]]\nid = \"a\"\n");
        assert!(matches!(result, Err(CatalogError::Toml(_))));
    }

    #[test]
    fn load_falls_back_to_builtin() {
        let tmp = TempDir::new().unwrap();
        let catalog = Catalog::load(tmp.path()).unwrap();
        assert_eq!(catalog, Catalog::builtin().unwrap());
    }

    #[test]
    fn load_reads_catalog_file() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join(CATALOG_FILE),
            r#"
[[offerings]]
id = "bug-fixer"
name = "React Bug-Fixer"
category = "Code Fixes"
price = 2500
description = "Finds and fixes one React bug."
media = "https://example.com/bug.jpg"
"#,
        )
        .unwrap();

        let catalog = Catalog::load(tmp.path()).unwrap();
        assert_eq!(catalog.list_all().len(), 1);
        assert_eq!(catalog.get("bug-fixer").unwrap().price, Price(2500));
    }

    #[test]
    fn load_reports_malformed_record() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join(CATALOG_FILE),
            "[[offerings]]\nid = \"x\"\nname = \"X\"\n",
        )
        .unwrap();
        assert!(matches!(Catalog::load(tmp.path()), Err(CatalogError::Toml(_))));
    }

    #[test]
    fn unknown_categories_listed_in_order() {
        let mut a = offering("a");
        a.category = "Mystery".to_string();
        let b = offering("b");
        let mut c = offering("c");
        c.category = "Other".to_string();
        let offerings = vec![a, b, c];
        let known: HashSet<&str> = ["Code Fixes"].into_iter().collect();

        let unknown: Vec<&str> = unknown_categories(&offerings, &known)
            .iter()
            .map(|o| o.id.as_str())
            .collect();
        assert_eq!(unknown, vec!["a", "c"]);
    }
}
