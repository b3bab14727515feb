//! # Storefront
//!
//! A static site generator for AI agent marketplaces. A catalog of offerings
//! and a navigation table, kept in plain TOML, become a storefront: a header
//! with search and a category rail, a card gallery, one page per offering,
//! one page per category and a footer with link sections.
//!
//! # Architecture: Two-Stage Pipeline
//!
//! ```text
//! 1. Scan      content/  →  manifest.json   (TOML data + pages → structured data)
//! 2. Generate  manifest  →  dist/           (final HTML site)
//! ```
//!
//! The manifest is human-readable JSON, so the data the renderers will see
//! can be inspected before any HTML is written, and each stage can be run
//! and tested on its own.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`scan`] | Stage 1: loads config, catalog, navigation and pages into the manifest |
//! | [`generate`] | Stage 2: writes the HTML site from the manifest |
//! | [`catalog`] | Catalog data source: `catalog.toml` or the built-in sample, validated |
//! | [`navigation`] | Navigation data source: links, categories, sections, social links |
//! | [`render`] | Maud components for the header, gallery and footer |
//! | [`config`] | `config.toml` loading, validation, merging and CSS generation |
//! | [`types`] | Shared types serialized into the manifest (`Offering`, `Price`, `Navigation`) |
//! | [`routes`] | Link and output-path conventions (`/agent/{id}`, `/category/{path}`) |
//! | [`output`] | CLI output formatting for both stages |
//!
//! # Design Decisions
//!
//! ## Data Behind Read-Only Providers
//!
//! Renderers never see where data came from. The scan stage reads offerings
//! through [`catalog::CatalogSource`] and navigation through
//! [`navigation::NavigationSource`]; the stock implementations read TOML
//! files, and anything else that can list offerings can stand in for them.
//!
//! ## One Category List
//!
//! Category filters are declared once in `navigation.toml`. The header rail,
//! the category pages and any footer section marked `categories = true` all
//! read that list, so they cannot drift apart.
//!
//! ## Prices in Minor Units
//!
//! Prices are unsigned integers in the smallest currency unit. The currency
//! is a single site-wide setting used only for display; zero is "Free".
//!
//! ## No JavaScript
//!
//! The menu toggle is a checkbox and the avatar menu is a `<details>`
//! element. The generated site is plain HTML with inline CSS.

pub mod catalog;
pub mod config;
pub mod generate;
pub mod navigation;
pub mod output;
pub mod render;
pub mod routes;
pub mod scan;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
