//! Shared types passed between the scan and generate stages.
//!
//! Everything here is serialized into the JSON manifest written by `scan` and
//! read back by `generate`, so both derives are required on every type.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single purchasable catalog entry (an "agent" on the storefront).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Offering {
    /// URL-safe identifier, unique across the catalog. Keys the detail page.
    #[serde(alias = "slug")]
    pub id: String,
    pub name: String,
    /// Display label of the category filter this offering belongs to.
    pub category: String,
    /// Price in minor currency units. Zero means free.
    pub price: Price,
    pub description: String,
    /// URI of the card/detail image.
    #[serde(alias = "thumbnail")]
    pub media: String,
}

/// Price in the smallest currency unit (cents for USD).
///
/// Unsigned, so a negative amount in a catalog file fails to deserialize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(pub u64);

impl Price {
    pub fn is_free(self) -> bool {
        self.0 == 0
    }

    /// Render for display using the site currency, e.g. `$30.00` or `Free`.
    pub fn display(self, currency: &crate::config::StoreConfig) -> String {
        if self.is_free() {
            return "Free".to_string();
        }
        let digits = currency.minor_digits;
        if digits == 0 {
            return format!("{}{}", currency.symbol, self.0);
        }
        // 10^20 overflows u64, and every u64 amount is below it
        let (major, minor) = match 10u64.checked_pow(digits) {
            Some(scale) => (self.0 / scale, self.0 % scale),
            None => (0, self.0),
        };
        format!(
            "{}{}.{:0width$}",
            currency.symbol,
            major,
            minor,
            width = digits as usize
        )
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A named internal link. `path` always starts with `/`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Link {
    pub name: String,
    pub path: String,
}

/// A titled group of links shown in the footer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavSection {
    pub title: String,
    pub items: Vec<Link>,
}

/// A link that scopes the gallery to one category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CategoryFilter {
    pub name: String,
    pub path: String,
    /// Shows the whole catalog instead of matching on `name`.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub all: bool,
}

impl CategoryFilter {
    pub fn matches(&self, offering: &Offering) -> bool {
        self.all || offering.category == self.name
    }
}

/// Brand icons available for social links. Rendered as inline SVG.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Icon {
    X,
    Discord,
    Github,
}

/// An external link in the footer with its brand icon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SocialLink {
    pub name: String,
    pub url: String,
    pub icon: Icon,
}

/// Everything the header and footer need, resolved and validated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Navigation {
    /// Top-of-page links (shown in the mobile menu panel).
    pub links: Vec<Link>,
    /// Canonical category list feeding the rail and category pages.
    pub categories: Vec<CategoryFilter>,
    pub sections: Vec<NavSection>,
    /// Actions behind the avatar trigger.
    pub user_menu: Vec<Link>,
    pub social: Vec<SocialLink>,
}

/// A markdown page from `content/pages/`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    /// First `# heading` in the body, or the slug with dashes as spaces.
    pub title: String,
    /// File stem; the page is written to `/{slug}/index.html`.
    pub slug: String,
    /// Raw markdown.
    pub body: String,
}
