//! Offering cards and the offering detail view.
//!
//! The gallery renders exactly one card per offering, in the order given.
//! Filtering for category pages happens before the offerings reach here.
//!
//! Each card shows the description twice, once as the header caption and
//! once as the body text, the same way the card layout has always done.

use crate::config::StoreConfig;
use crate::routes;
use crate::types::Offering;
use maud::{Markup, html};

/// Grid of cards, one per offering, in input order.
pub fn render_gallery(offerings: &[Offering]) -> Markup {
    html! {
        div.gallery {
            @for offering in offerings {
                (render_card(offering))
            }
        }
    }
}

/// A single catalog card linking to the offering's detail page.
pub fn render_card(offering: &Offering) -> Markup {
    html! {
        article.card id={ "offering-" (offering.id) } {
            img.card-media src=(offering.media) alt=(offering.name) loading="lazy";
            header.card-header {
                h2.card-title { (offering.name) }
                p.card-caption { (offering.description) }
            }
            div.card-content {
                p { (offering.description) }
            }
            footer.card-footer {
                a.button.button-outline href=(routes::offering_href(&offering.id)) { "Checkout" }
            }
        }
    }
}

/// Full-width view of one offering with its price.
pub fn render_offering_detail(offering: &Offering, store: &StoreConfig) -> Markup {
    let category_crumb = offering.category.as_str();
    html! {
        article.offering-detail {
            img.detail-media src=(offering.media) alt=(offering.name);
            div.detail-body {
                p.detail-category { (category_crumb) }
                h1 { (offering.name) }
                p.detail-price { (offering.price.display(store)) }
                p.detail-description { (offering.description) }
                a.button href=(routes::offering_href(&offering.id)) { "Checkout" }
            }
        }
    }
}

/// Shown on a category page with no matching offerings.
pub fn render_empty(category: &str) -> Markup {
    html! {
        p.gallery-empty { "No agents in " (category) " yet." }
    }
}
