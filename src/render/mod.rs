//! HTML components for the storefront.
//!
//! Three regions make up every page, each in its own module:
//!
//! | Module | Region |
//! |--------|--------|
//! | [`header`] | Logo, search, user menu, menu panel, category rail |
//! | [`gallery`] | Offering cards and the offering detail view |
//! | [`footer`] | Link sections, copyright, social links |
//!
//! Every renderer is a pure function from borrowed data to [`Markup`]; the
//! only state is [`header::HeaderState`]. Uses [maud](https://maud.lambda.xyz/),
//! so interpolated text is escaped automatically.

pub mod footer;
pub mod gallery;
pub mod header;

use crate::types::Icon;
use maud::{DOCTYPE, Markup, PreEscaped, html};

/// Renders the base HTML document structure.
pub fn base_document(title: &str, description: Option<&str>, css: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                @if let Some(description) = description {
                    meta name="description" content=(description);
                }
                title { (title) }
                style { (PreEscaped(css)) }
            }
            body {
                (content)
            }
        }
    }
}

/// Wordmark linking to the home page.
pub fn logo(name: &str) -> Markup {
    html! {
        a.logo href="/" aria-label={ (capitalize(name)) " home" } { (name) }
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Inline SVG for a brand or UI icon. 24×24 viewbox, `currentColor`.
pub fn icon(icon: Icon) -> Markup {
    let path = match icon {
        Icon::X => X_PATH,
        Icon::Discord => DISCORD_PATH,
        Icon::Github => GITHUB_PATH,
    };
    svg_icon(path)
}

pub(crate) fn svg_icon(path: &str) -> Markup {
    html! {
        svg.icon xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" width="20" height="20"
            fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round"
            stroke-linejoin="round" aria-hidden="true" {
            path d=(path) {}
        }
    }
}

const X_PATH: &str = "M4 4l11.733 16h4.267l-11.733 -16z M4 20l6.768 -6.768 M13.232 10.768l6.768 -6.768";
const DISCORD_PATH: &str = "M8 12a1 1 0 1 0 2 0a1 1 0 0 0 -2 0 M14 12a1 1 0 1 0 2 0a1 1 0 0 0 -2 0 \
M15.5 17c0 1 1.5 3 2 3c1.5 0 2.833 -1.667 3.5 -3c.667 -1.667 .5 -5.833 -1.5 -11.5c-1.457 -1.015 \
-3 -1.34 -4.5 -1.5l-.972 1.923a11.913 11.913 0 0 0 -4.053 0l-.975 -1.923c-1.5 .16 -3.043 .485 \
-4.5 1.5c-2 5.667 -2.167 9.833 -1.5 11.5c.667 1.333 2 3 3.5 3c.5 0 2 -2 2 -3 M7 16.5c3.5 1 6.5 1 10 0";
const GITHUB_PATH: &str = "M9 19c-4.3 1.4 -4.3 -2.5 -6 -3m12 5v-3.5c0 -1 .1 -1.4 -.5 -2c2.8 -.3 \
5.5 -1.4 5.5 -6a4.6 4.6 0 0 0 -1.3 -3.2a4.2 4.2 0 0 0 -.1 -3.2s-1.1 -.3 -3.5 1.3a12.3 12.3 0 0 0 \
-6.2 0c-2.4 -1.6 -3.5 -1.3 -3.5 -1.3a4.2 4.2 0 0 0 -.1 3.2a4.6 4.6 0 0 0 -1.3 3.2c0 4.6 2.7 5.7 \
5.5 6c-.6 .6 -.6 1.2 -.5 2v3.5";
