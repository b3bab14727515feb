//! CLI output formatting for both pipeline stages.
//!
//! Output is information-first: every entity leads with its positional index
//! and display name, and secondary details (ids, categories, source files,
//! output paths) follow on indented lines or after an arrow.
//!
//! # Output Format
//!
//! ## Scan
//!
//! ```text
//! Offerings
//! 001 Logo Designer (Free)
//!     Id: logo-demo
//!     Category: Graphics & Design
//!
//! Navigation
//!     Links: Browse Agents, Dashboard, Orders, Pricing
//!     Categories: All, Graphics & Design, Code Fixes
//!     001 Product (3 links)
//!
//! Pages
//! 001 About
//!     Source: pages/about.md
//!
//! Sources
//!     config.toml
//!     catalog.toml (built-in)
//!     navigation.toml
//! ```
//!
//! ## Generate
//!
//! ```text
//! Home → index.html
//! 001 Logo Designer → agent/logo-demo/index.html
//!
//! Categories
//! 001 All → category/all/index.html
//!
//! Generated 1 offering pages, 1 category pages, 0 content pages
//! ```
//!
//! Each stage has a `format_*` function returning lines (pure, testable) and a
//! `print_*` wrapper that writes them to stdout.

use crate::catalog::CATALOG_FILE;
use crate::navigation::NAVIGATION_FILE;
use crate::routes;
use crate::scan::{Manifest, PAGES_DIR};
use crate::types::Link;
use std::path::Path;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Output file for a site path, relative to the output root.
fn output_file(href: &str) -> String {
    let dir = routes::output_dir_for(href);
    if dir.as_os_str().is_empty() {
        "index.html".to_string()
    } else {
        format!("{}/index.html", dir.to_string_lossy())
    }
}

fn join_names(links: impl IntoIterator<Item = impl AsRef<str>>) -> String {
    links
        .into_iter()
        .map(|n| n.as_ref().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

fn link_names(links: &[Link]) -> String {
    join_names(links.iter().map(|l| l.name.as_str()))
}

/// Truncate text to `max` characters, appending `...` if truncated.
fn truncate_desc(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}

// ============================================================================
// Stage 1: Scan output
// ============================================================================

/// Format scan stage output: the catalog, navigation tables, pages, warnings
/// and which data files were found in `source_root`.
pub fn format_scan_output(manifest: &Manifest, source_root: &Path) -> Vec<String> {
    let store = &manifest.config.store;
    let mut lines = vec!["Offerings".to_string()];

    for (i, offering) in manifest.offerings.iter().enumerate() {
        lines.push(format!(
            "{} {} ({})",
            format_index(i + 1),
            offering.name,
            offering.price.display(store)
        ));
        lines.push(format!("    Id: {}", offering.id));
        lines.push(format!("    Category: {}", offering.category));
        let desc = truncate_desc(offering.description.trim(), 60);
        if !desc.is_empty() {
            lines.push(format!("    {}", desc));
        }
    }

    let nav = &manifest.navigation;
    lines.push(String::new());
    lines.push("Navigation".to_string());
    lines.push(format!("    Links: {}", link_names(&nav.links)));
    lines.push(format!(
        "    Categories: {}",
        join_names(nav.categories.iter().map(|c| c.name.as_str()))
    ));
    for (i, section) in nav.sections.iter().enumerate() {
        lines.push(format!(
            "    {} {} ({} links)",
            format_index(i + 1),
            section.title,
            section.items.len()
        ));
    }
    lines.push(format!("    User menu: {}", link_names(&nav.user_menu)));
    lines.push(format!(
        "    Social: {}",
        join_names(nav.social.iter().map(|s| s.name.as_str()))
    ));

    if !manifest.pages.is_empty() {
        lines.push(String::new());
        lines.push("Pages".to_string());
        for (i, page) in manifest.pages.iter().enumerate() {
            lines.push(format!("{} {}", format_index(i + 1), page.title));
            lines.push(format!("    Source: {}/{}.md", PAGES_DIR, page.slug));
        }
    }

    let unknown = manifest.unknown_categories();
    if !unknown.is_empty() {
        lines.push(String::new());
        lines.push("Warnings".to_string());
        for offering in unknown {
            lines.push(format!(
                "    {}: category \"{}\" has no category filter",
                offering.id, offering.category
            ));
        }
    }

    lines.push(String::new());
    lines.push("Sources".to_string());
    for file in ["config.toml", CATALOG_FILE, NAVIGATION_FILE] {
        if source_root.join(file).exists() {
            lines.push(format!("    {}", file));
        } else {
            lines.push(format!("    {} (built-in)", file));
        }
    }

    lines
}

/// Print scan output to stdout.
pub fn print_scan_output(manifest: &Manifest, source_root: &Path) {
    for line in format_scan_output(manifest, source_root) {
        println!("{}", line);
    }
}

// ============================================================================
// Stage 2: Generate output
// ============================================================================

/// Format generate stage output: each page and the file it was written to.
pub fn format_generate_output(manifest: &Manifest) -> Vec<String> {
    let mut lines = vec![format!("Home \u{2192} {}", output_file("/"))];

    for (i, offering) in manifest.offerings.iter().enumerate() {
        lines.push(format!(
            "{} {} \u{2192} {}",
            format_index(i + 1),
            offering.name,
            output_file(&routes::offering_href(&offering.id))
        ));
    }

    let categories = &manifest.navigation.categories;
    if !categories.is_empty() {
        lines.push(String::new());
        lines.push("Categories".to_string());
        for (i, category) in categories.iter().enumerate() {
            let count = manifest
                .offerings
                .iter()
                .filter(|o| category.matches(o))
                .count();
            lines.push(format!(
                "{} {} ({} agents) \u{2192} {}",
                format_index(i + 1),
                category.name,
                count,
                output_file(&routes::category_href(&category.path))
            ));
        }
    }

    if !manifest.pages.is_empty() {
        lines.push(String::new());
        lines.push("Pages".to_string());
        for (i, page) in manifest.pages.iter().enumerate() {
            lines.push(format!(
                "{} {} \u{2192} {}",
                format_index(i + 1),
                page.title,
                output_file(&format!("/{}", page.slug))
            ));
        }
    }

    lines.push(String::new());
    lines.push(format!(
        "Generated {} offering pages, {} category pages, {} content pages",
        manifest.offerings.len(),
        categories.len(),
        manifest.pages.len()
    ));

    lines
}

/// Print generate output to stdout.
pub fn print_generate_output(manifest: &Manifest) {
    for line in format_generate_output(manifest) {
        println!("{}", line);
    }
}

// ============================================================================
// Tests
// ============================================================================
