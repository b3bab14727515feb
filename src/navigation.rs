//! Navigation data source.
//!
//! Loads `navigation.toml` (or the built-in table) into a validated
//! [`Navigation`]. Category filters are defined once: the header rail, the
//! category pages and any footer section declared with `categories = true`
//! all read the same list.
//!
//! ## File Format
//!
//! ```toml
//! [[links]]                        # top-of-page links
//! name = "Browse Agents"
//! path = "/browse"
//!
//! [[categories]]                   # canonical category list
//! name = "All"
//! path = "/all"
//! all = true                       # shows the whole catalog
//!
//! [[sections]]                     # footer columns
//! title = "Product"
//! categories = true                # items = the category list
//!
//! [[sections]]
//! title = "Legal"
//! items = [{ name = "Terms", path = "/terms" }]
//!
//! [[user_menu]]                    # actions behind the avatar
//! name = "Profile"
//! path = "/profile"
//!
//! [[social]]
//! name = "Github"
//! url = "https://github.com/acraia-ai"
//! icon = "github"                  # x | discord | github
//! ```
//!
//! Every `path` must start with `/`; social URLs must be `http(s)://`. Two
//! categories may not resolve to the same category page.

use crate::routes;
use crate::types::{CategoryFilter, Link, NavSection, Navigation, SocialLink};
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use thiserror::Error;

const BUILTIN_NAVIGATION: &str = include_str!("../static/navigation.toml");

pub const NAVIGATION_FILE: &str = "navigation.toml";

#[derive(Error, Debug)]
pub enum NavigationError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("{context}: path {path:?} must start with '/'")]
    InvalidPath { context: String, path: String },
    #[error("social link {name:?}: {url:?} is not an http(s) URL")]
    InvalidUrl { name: String, url: String },
    #[error("category {name:?}: path {path:?} writes to the same page as an earlier category")]
    DuplicatePath { name: String, path: String },
    #[error("section {0:?} sets both `items` and `categories = true`")]
    AmbiguousSection(String),
}

/// Read-only provider of navigation tables.
pub trait NavigationSource {
    fn links(&self) -> &[Link];
    fn categories(&self) -> &[CategoryFilter];
    fn sections(&self) -> &[NavSection];
    fn user_menu(&self) -> &[Link];
    fn social(&self) -> &[SocialLink];
}

impl NavigationSource for Navigation {
    fn links(&self) -> &[Link] {
        &self.links
    }

    fn categories(&self) -> &[CategoryFilter] {
        &self.categories
    }

    fn sections(&self) -> &[NavSection] {
        &self.sections
    }

    fn user_menu(&self) -> &[Link] {
        &self.user_menu
    }

    fn social(&self) -> &[SocialLink] {
        &self.social
    }
}

/// On-disk shape of `navigation.toml`.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct NavigationFile {
    #[serde(default)]
    links: Vec<Link>,
    #[serde(default)]
    categories: Vec<CategoryFilter>,
    #[serde(default)]
    sections: Vec<SectionEntry>,
    #[serde(default)]
    user_menu: Vec<Link>,
    #[serde(default)]
    social: Vec<SocialLink>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct SectionEntry {
    title: String,
    #[serde(default)]
    items: Vec<Link>,
    #[serde(default)]
    categories: bool,
}

/// Parse and validate a `navigation.toml` document.
pub fn from_toml_str(content: &str) -> Result<Navigation, NavigationError> {
    let file: NavigationFile = toml::from_str(content)?;
    resolve(file)
}

/// The navigation shipped with the binary.
pub fn builtin() -> Result<Navigation, NavigationError> {
    from_toml_str(BUILTIN_NAVIGATION)
}

/// Load `navigation.toml` from `dir`, falling back to the built-in table.
pub fn load(dir: &Path) -> Result<Navigation, NavigationError> {
    let path = dir.join(NAVIGATION_FILE);
    if !path.exists() {
        log::debug!("no {NAVIGATION_FILE} in {}, using built-in navigation", dir.display());
        return builtin();
    }
    let content = fs::read_to_string(&path)?;
    from_toml_str(&content)
}

fn resolve(file: NavigationFile) -> Result<Navigation, NavigationError> {
    check_links("links", &file.links)?;
    check_links("user_menu", &file.user_menu)?;
    let mut outputs = HashSet::new();
    for category in &file.categories {
        check_path(&format!("category {:?}", category.name), &category.path)?;
        // `/code-fixes` and `/code-fixes/` both land in category/code-fixes/
        let dir = routes::output_dir_for(&routes::category_href(&category.path));
        if !outputs.insert(dir) {
            return Err(NavigationError::DuplicatePath {
                name: category.name.clone(),
                path: category.path.clone(),
            });
        }
    }
    for link in &file.social {
        if !routes::is_external_url(&link.url) {
            return Err(NavigationError::InvalidUrl {
                name: link.name.clone(),
                url: link.url.clone(),
            });
        }
    }

    let mut sections = Vec::with_capacity(file.sections.len());
    for entry in file.sections {
        let items = if entry.categories {
            if !entry.items.is_empty() {
                return Err(NavigationError::AmbiguousSection(entry.title));
            }
            file.categories
                .iter()
                .map(|c| Link {
                    name: c.name.clone(),
                    path: c.path.clone(),
                })
                .collect()
        } else {
            check_links(&format!("section {:?}", entry.title), &entry.items)?;
            entry.items
        };
        sections.push(NavSection {
            title: entry.title,
            items,
        });
    }

    Ok(Navigation {
        links: file.links,
        categories: file.categories,
        sections,
        user_menu: file.user_menu,
        social: file.social,
    })
}

fn check_links(context: &str, links: &[Link]) -> Result<(), NavigationError> {
    for link in links {
        check_path(&format!("{context} {:?}", link.name), &link.path)?;
    }
    Ok(())
}

fn check_path(context: &str, path: &str) -> Result<(), NavigationError> {
    if routes::is_site_path(path) {
        Ok(())
    } else {
        Err(NavigationError::InvalidPath {
            context: context.to_string(),
            path: path.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Icon;
    use tempfile::TempDir;

    fn names(links: &[Link]) -> Vec<&str> {
        links.iter().map(|l| l.name.as_str()).collect()
    }

    #[test]
    fn builtin_sections_in_order() {
        let nav = builtin().unwrap();
        let titles: Vec<&str> = nav.sections().iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, vec!["Product", "Company", "Resources", "Legal"]);
    }

    #[test]
    fn builtin_product_section_reuses_categories() {
        let nav = builtin().unwrap();
        let product = &nav.sections()[0];
        assert_eq!(
            names(&product.items),
            vec!["All", "Graphics & Design", "Code Fixes", "Prompt Optimisation"]
        );
        assert_eq!(product.items[1].path, "/graphics-design");
        assert_eq!(product.items.len(), nav.categories().len());
    }

    #[test]
    fn builtin_tables() {
        let nav = builtin().unwrap();
        assert_eq!(
            names(nav.links()),
            vec!["Browse Agents", "Dashboard", "Orders", "Pricing"]
        );
        assert_eq!(names(nav.user_menu()), vec!["Profile", "Settings", "Logout"]);
        let icons: Vec<Icon> = nav.social().iter().map(|s| s.icon).collect();
        assert_eq!(icons, vec![Icon::X, Icon::Discord, Icon::Github]);
        assert!(nav.categories()[0].all);
        assert!(nav.categories()[1..].iter().all(|c| !c.all));
    }

    #[test]
    fn relative_link_path_rejected() {
        let result = from_toml_str("[[links]]\nname = \"Blog\"\npath = \"blog\"\n");
        assert!(matches!(result, Err(NavigationError::InvalidPath { .. })));
    }

    #[test]
    fn relative_category_path_rejected() {
        let result = from_toml_str("[[categories]]\nname = \"All\"\npath = \"all\"\n");
        let err = result.unwrap_err().to_string();
        assert!(err.contains("\"All\""));
        assert!(err.contains("must start with '/'"));
    }

    #[test]
    fn relative_section_item_rejected() {
        let result = from_toml_str(
            r#"
[[sections]]
title = "Legal"
items = [{ name = "Terms", path = "terms" }]
"#,
        );
        assert!(matches!(result, Err(NavigationError::InvalidPath { .. })));
    }

    #[test]
    fn social_url_must_be_http() {
        let result = from_toml_str(
            "[[social]]\nname = \"X\"\nurl = \"javascript:alert(1)\"\nicon = \"x\"\n",
        );
        assert!(matches!(result, Err(NavigationError::InvalidUrl { .. })));
    }

    #[test]
    fn unknown_icon_rejected() {
        let result = from_toml_str(
            "[[social]]\nname = \"M\"\nurl = \"https://m.example\"\nicon = \"mastodon\"\n",
        );
        assert!(matches!(result, Err(NavigationError::Toml(_))));
    }

    #[test]
    fn section_with_items_and_categories_rejected() {
        let result = from_toml_str(
            r#"
[[sections]]
title = "Product"
categories = true
items = [{ name = "All", path = "/all" }]
"#,
        );
        assert!(matches!(result, Err(NavigationError::AmbiguousSection(t)) if t == "Product"));
    }

    #[test]
    fn categories_sharing_a_page_rejected() {
        let result = from_toml_str(
            r#"
[[categories]]
name = "Code Fixes"
path = "/code-fixes"

[[categories]]
name = "Code Fixes Again"
path = "/code-fixes/"
"#,
        );
        assert!(matches!(
            result,
            Err(NavigationError::DuplicatePath { name, .. }) if name == "Code Fixes Again"
        ));
    }

    #[test]
    fn distinct_category_paths_accepted() {
        let result = from_toml_str(
            "[[categories]]\nname = \"A\"\npath = \"/a\"\n\n[[categories]]\nname = \"B\"\npath = \"/a/b\"\n",
        );
        assert_eq!(result.unwrap().categories().len(), 2);
    }

    #[test]
    fn empty_document_is_empty_navigation() {
        let nav = from_toml_str("").unwrap();
        assert_eq!(nav, Navigation::default());
    }

    #[test]
    fn load_reads_navigation_file() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join(NAVIGATION_FILE),
            r#"
[[categories]]
name = "Code Fixes"
path = "/code-fixes"

[[sections]]
title = "Help"
items = [{ name = "FAQ", path = "/faq" }]
"#,
        )
        .unwrap();
        let nav = load(tmp.path()).unwrap();
        assert_eq!(nav.categories().len(), 1);
        assert_eq!(nav.sections()[0].title, "Help");
        assert!(nav.social().is_empty());
    }

    #[test]
    fn load_falls_back_to_builtin() {
        let tmp = TempDir::new().unwrap();
        assert_eq!(load(tmp.path()).unwrap(), builtin().unwrap());
    }
}
