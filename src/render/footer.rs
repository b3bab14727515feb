//! Site footer: navigation sections, copyright line and social links.

use super::{icon, logo};
use crate::config::SiteInfo;
use crate::navigation::NavigationSource;
use maud::{Markup, html};

pub fn render_footer(site: &SiteInfo, nav: &impl NavigationSource) -> Markup {
    html! {
        footer.site-footer {
            (render_sections(nav))
            div.footer-bar {
                div.footer-brand {
                    (logo(&site.name))
                    p.copyright { (site.copyright) }
                }
                (render_social(nav))
            }
        }
    }
}

/// One column per section, one link per item.
pub fn render_sections(nav: &impl NavigationSource) -> Markup {
    html! {
        div.footer-sections {
            @for group in nav.sections() {
                section.footer-section {
                    h3 { (group.title) }
                    ul {
                        @for item in &group.items {
                            li { a href=(item.path) { (item.name) } }
                        }
                    }
                }
            }
        }
    }
}

/// External links with brand icons; they open in a new tab.
pub fn render_social(nav: &impl NavigationSource) -> Markup {
    html! {
        div.social {
            @for link in nav.social() {
                a.icon-button href=(link.url) target="_blank" rel="noopener" aria-label=(link.name) {
                    (icon(link.icon))
                }
            }
        }
    }
}
