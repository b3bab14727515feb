//! URL and output-path conventions shared by the renderers and the writer.
//!
//! ## Links
//!
//! - Offering detail: `/agent/{id}`
//! - Category filter: `/category/{path}`, concatenated verbatim. Category
//!   paths start with `/`, so `/all` links to `/category//all`.
//!
//! ## Files
//!
//! Every page is written as `{dir}/index.html` so the extensionless links
//! above resolve on any static file server. Leading and repeated slashes are
//! collapsed when turning a link into a directory.

use std::path::PathBuf;

/// Link to an offering's detail page.
pub fn offering_href(id: &str) -> String {
    format!("/agent/{id}")
}

/// Link for a category filter. The path is not transformed.
pub fn category_href(path: &str) -> String {
    format!("/category/{path}")
}

/// Relative output directory for a site path: `/category//all` → `category/all`.
///
/// The root path maps to an empty buf (the output root itself).
pub fn output_dir_for(href: &str) -> PathBuf {
    href.split('/')
        .filter(|segment| !segment.is_empty() && *segment != "." && *segment != "..")
        .collect()
}

/// True if `id` is non-empty and only uses `[A-Za-z0-9_-]`.
pub fn is_url_safe_id(id: &str) -> bool {
    !id.is_empty()
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

/// True if `path` is a site-absolute path (starts with `/`).
pub fn is_site_path(path: &str) -> bool {
    path.starts_with('/')
}

/// True if `url` is an absolute `http` or `https` URL.
pub fn is_external_url(url: &str) -> bool {
    ["https://", "http://"]
        .iter()
        .any(|scheme| url.len() > scheme.len() && url.starts_with(scheme))
}

/// Display title from a file stem: dashes become spaces.
///
/// - `"terms-of-service"` → `"terms of service"`
/// - `"faq"` → `"faq"`
pub fn title_from_stem(stem: &str) -> String {
    stem.replace('-', " ")
}
