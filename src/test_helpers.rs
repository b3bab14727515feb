//! Shared test utilities for the storefront test suite.
//!
//! Provides fixture setup, lookup helpers and section-shape assertions that
//! work with the scan-phase [`Manifest`].
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = setup_fixtures();
//! let manifest = scan(tmp.path()).unwrap();
//!
//! let offering = find_offering(&manifest, "bug-fixer");
//! assert_eq!(offering.category, "Code Fixes");
//!
//! assert_section_shape(&manifest, &[
//!     ("Product", &["All", "Graphics & Design", "Code Fixes"]),
//!     ("Help", &["About", "FAQ", "Terms"]),
//! ]);
//! ```

use std::path::Path;
use tempfile::TempDir;

use crate::scan::Manifest;
use crate::types::{Offering, Page};

// =========================================================================
// Fixture setup
// =========================================================================

/// Copy `fixtures/content/` to a temp directory and return it.
///
/// Tests get an isolated copy they can mutate without affecting other tests.
pub fn setup_fixtures() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let fixtures = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/content");
    copy_dir_recursive(&fixtures, tmp.path()).unwrap();
    tmp
}

fn copy_dir_recursive(src: &Path, dst: &Path) -> std::io::Result<()> {
    for entry in walkdir::WalkDir::new(src).min_depth(1) {
        let entry = entry?;
        let rel = entry.path().strip_prefix(src).unwrap();
        let target = dst.join(rel);
        if entry.file_type().is_dir() {
            std::fs::create_dir_all(&target)?;
        } else {
            std::fs::copy(entry.path(), &target)?;
        }
    }
    Ok(())
}

// =========================================================================
// Manifest lookups: panic with a clear message on miss
// =========================================================================

/// Find an offering by id. Panics if not found.
pub fn find_offering<'a>(manifest: &'a Manifest, id: &str) -> &'a Offering {
    manifest
        .offerings
        .iter()
        .find(|o| o.id == id)
        .unwrap_or_else(|| panic!("offering '{id}' not found. Available: {:?}", offering_ids(manifest)))
}

/// Find a page by slug. Panics if not found.
pub fn find_page<'a>(manifest: &'a Manifest, slug: &str) -> &'a Page {
    manifest
        .pages
        .iter()
        .find(|p| p.slug == slug)
        .unwrap_or_else(|| panic!("page '{slug}' not found. Available: {:?}", page_slugs(manifest)))
}

// =========================================================================
// Bulk extractors
// =========================================================================

/// All offering ids in catalog order.
pub fn offering_ids(manifest: &Manifest) -> Vec<&str> {
    manifest.offerings.iter().map(|o| o.id.as_str()).collect()
}

/// All page slugs in manifest order.
pub fn page_slugs(manifest: &Manifest) -> Vec<&str> {
    manifest.pages.iter().map(|p| p.slug.as_str()).collect()
}

// =========================================================================
// Navigation helpers
// =========================================================================

/// Assert that the footer sections match an expected shape.
///
/// Each entry is `(title, item names)`.
pub fn assert_section_shape(manifest: &Manifest, expected: &[(&str, &[&str])]) {
    let actual: Vec<(&str, Vec<&str>)> = manifest
        .navigation
        .sections
        .iter()
        .map(|s| {
            (
                s.title.as_str(),
                s.items.iter().map(|l| l.name.as_str()).collect(),
            )
        })
        .collect();
    let expected: Vec<(&str, Vec<&str>)> = expected
        .iter()
        .map(|(title, items)| (*title, items.to_vec()))
        .collect();
    assert_eq!(actual, expected, "navigation sections mismatch");
}
