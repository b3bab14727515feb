//! HTML site generation.
//!
//! Stage 2 of the build pipeline. Reads the manifest written by
//! [`crate::scan`] and writes the final static site.
//!
//! ## Generated Pages
//!
//! - **Home** (`/index.html`): every offering as a card
//! - **Offering pages** (`/agent/{id}/index.html`): one per offering
//! - **Category pages** (`/category/{path}/index.html`): the gallery scoped
//!   to one category filter
//! - **Content pages** (`/{slug}/index.html`): markdown from `content/pages/`
//!
//! ## Output Structure
//!
//! ```text
//! dist/
//! ├── index.html
//! ├── agent/
//! │   ├── logo-demo/index.html
//! │   └── brand-kit/index.html
//! ├── category/
//! │   ├── all/index.html
//! │   └── graphics-design/index.html
//! ├── about/index.html
//! └── assets/                # copied from content/assets/
//! ```
//!
//! Every page shares the same header and footer and embeds its CSS inline:
//! the stock stylesheet (`static/style.css`) preceded by the custom
//! properties generated from `config.toml`.

use crate::catalog::{Catalog, CatalogError};
use crate::config::{self, ConfigError};
use crate::render::base_document;
use crate::render::footer::render_footer;
use crate::render::gallery::{render_empty, render_gallery, render_offering_detail};
use crate::render::header::{HeaderState, render_header};
use crate::routes;
use crate::scan::Manifest;
use crate::types::{CategoryFilter, Offering, Page};
use maud::{Markup, PreEscaped, html};
use pulldown_cmark::{Parser, html as md_html};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid manifest config: {0}")]
    Config(#[from] ConfigError),
    #[error("Invalid manifest catalog: {0}")]
    Catalog(#[from] CatalogError),
    #[error("Two pages write to the same file: {0}")]
    DuplicateOutput(PathBuf),
}

const CSS_STATIC: &str = include_str!("../static/style.css");

pub const ASSETS_DIR: &str = "assets";

/// Read the manifest at `manifest_path`, write the site to `output_dir` and
/// return the manifest that was rendered.
///
/// The manifest is validated again before rendering: it may have been edited
/// or produced by something other than `scan`. `source_dir` is the content
/// directory; its `assets/` folder, if any, is copied to the output root.
pub fn generate(
    manifest_path: &Path,
    output_dir: &Path,
    source_dir: &Path,
) -> Result<Manifest, GenerateError> {
    let manifest_content = fs::read_to_string(manifest_path)?;
    let manifest: Manifest = serde_json::from_str(&manifest_content)?;
    manifest.config.validate()?;
    Catalog::new(manifest.offerings.clone())?;

    write_site(&manifest, output_dir)?;

    let assets = source_dir.join(ASSETS_DIR);
    if assets.is_dir() {
        let target = output_dir.join(ASSETS_DIR);
        fs::create_dir_all(&target)?;
        copy_dir_recursive(&assets, &target)?;
        log::debug!("copied {} → {}", assets.display(), target.display());
    }
    Ok(manifest)
}

/// Render every page of the manifest into `output_dir`.
pub fn write_site(manifest: &Manifest, output_dir: &Path) -> Result<(), GenerateError> {
    let site = Site::new(manifest);
    let mut written = HashSet::new();
    fs::create_dir_all(output_dir)?;

    write_page(output_dir, "/", site.render_index(), &mut written)?;

    for offering in &manifest.offerings {
        let href = routes::offering_href(&offering.id);
        write_page(output_dir, &href, site.render_offering(offering, &href), &mut written)?;
    }

    for category in &manifest.navigation.categories {
        let href = routes::category_href(&category.path);
        write_page(output_dir, &href, site.render_category(category, &href), &mut written)?;
    }

    for page in &manifest.pages {
        let href = format!("/{}", page.slug);
        write_page(output_dir, &href, site.render_content_page(page, &href), &mut written)?;
    }

    log::info!("wrote {} pages to {}", written.len(), output_dir.display());
    Ok(())
}

fn write_page(
    output_dir: &Path,
    href: &str,
    markup: Markup,
    written: &mut HashSet<PathBuf>,
) -> Result<(), GenerateError> {
    let dir = output_dir.join(routes::output_dir_for(href));
    let file = dir.join("index.html");
    if !written.insert(file.clone()) {
        return Err(GenerateError::DuplicateOutput(file));
    }
    fs::create_dir_all(&dir)?;
    fs::write(&file, markup.into_string())?;
    log::debug!("generated {}", file.display());
    Ok(())
}

fn copy_dir_recursive(src: &Path, dst: &Path) -> std::io::Result<()> {
    for entry in fs::read_dir(src)? {
        let entry = entry?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        if src_path.is_dir() {
            fs::create_dir_all(&dst_path)?;
            copy_dir_recursive(&src_path, &dst_path)?;
        } else {
            fs::copy(&src_path, &dst_path)?;
        }
    }
    Ok(())
}

// ============================================================================
// Page Renderers
// ============================================================================

/// Shared inputs for every page: the manifest and the resolved CSS.
struct Site<'a> {
    manifest: &'a Manifest,
    css: String,
}

impl<'a> Site<'a> {
    fn new(manifest: &'a Manifest) -> Self {
        let css = format!(
            "{}\n\n{}\n\n{}",
            config::generate_color_css(&manifest.config.colors),
            config::generate_theme_css(&manifest.config.theme),
            CSS_STATIC
        );
        Self { manifest, css }
    }

    /// Header + main + footer wrapped in the base document.
    fn shell(&self, title: &str, description: Option<&str>, current: &str, main: Markup) -> Markup {
        let site = &self.manifest.config.site;
        let nav = &self.manifest.navigation;
        let content = html! {
            (render_header(site, nav, HeaderState::default(), current))
            (main)
            (render_footer(site, nav))
        };
        base_document(title, description, &self.css, content)
    }

    fn page_title(&self, title: &str) -> String {
        format!("{} · {}", title, self.manifest.config.site.name)
    }

    fn render_index(&self) -> Markup {
        let site = &self.manifest.config.site;
        let main = html! {
            main.index-page {
                (render_gallery(&self.manifest.offerings))
            }
        };
        self.shell(&site.name, Some(site.tagline.as_str()), "/", main)
    }

    fn render_offering(&self, offering: &Offering, href: &str) -> Markup {
        let main = html! {
            main.offering-page {
                (render_offering_detail(offering, &self.manifest.config.store))
            }
        };
        self.shell(
            &self.page_title(&offering.name),
            Some(offering.description.as_str()),
            href,
            main,
        )
    }

    fn render_category(&self, category: &CategoryFilter, href: &str) -> Markup {
        let offerings: Vec<Offering> = self
            .manifest
            .offerings
            .iter()
            .filter(|o| category.matches(o))
            .cloned()
            .collect();
        let main = html! {
            main.category-page {
                h1.page-heading { (category.name) }
                @if offerings.is_empty() {
                    (render_empty(&category.name))
                } @else {
                    (render_gallery(&offerings))
                }
            }
        };
        self.shell(&self.page_title(&category.name), None, href, main)
    }

    fn render_content_page(&self, page: &Page, href: &str) -> Markup {
        let parser = Parser::new(&page.body);
        let mut body_html = String::new();
        md_html::push_html(&mut body_html, parser);

        let main = html! {
            main.content-page {
                article.page-content {
                    (PreEscaped(body_html))
                }
            }
        };
        self.shell(&self.page_title(&page.title), None, href, main)
    }
}

// ============================================================================
// Tests
// ============================================================================
