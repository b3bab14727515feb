//! Site header: logo, search form, user menu, menu panel and category rail.
//!
//! The two visibility flags in [`HeaderState`] map onto markup that works
//! without JavaScript: the menu panel is a checkbox toggle (`checked` when
//! open) and the avatar menu is a `<details>` element (`open` when open).

use super::{logo, svg_icon};
use crate::config::SiteInfo;
use crate::navigation::NavigationSource;
use crate::routes;
use maud::{Markup, html};

/// Independent open/closed flags for the header's two menus.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeaderState {
    menu_open: bool,
    avatar_open: bool,
}

impl HeaderState {
    pub fn menu_open(self) -> bool {
        self.menu_open
    }

    pub fn avatar_open(self) -> bool {
        self.avatar_open
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn toggle_avatar(&mut self) {
        self.avatar_open = !self.avatar_open;
    }
}

const SEARCH_PATH: &str = "M3 10a7 7 0 1 0 14 0a7 7 0 1 0 -14 0 M21 21l-6 -6";
const BELL_PATH: &str = "M10 5a2 2 0 1 1 4 0a7 7 0 0 1 4 6v3a4 4 0 0 0 2 3h-16a4 4 0 0 0 2 -3v-3a7 7 0 0 1 4 -6 M9 17v1a3 3 0 0 0 6 0v-1";
const MAIL_PATH: &str = "M3 7a2 2 0 0 1 2 -2h14a2 2 0 0 1 2 2v10a2 2 0 0 1 -2 2h-14a2 2 0 0 1 -2 -2v-10z M3 7l9 6l9 -6";
const MENU_PATH: &str = "M4 6l16 0 M4 12l16 0 M4 18l16 0";

/// Renders the full header. `current` is the site path of the page being
/// rendered and marks the matching category in the rail.
pub fn render_header(
    site: &SiteInfo,
    nav: &impl NavigationSource,
    state: HeaderState,
    current: &str,
) -> Markup {
    html! {
        header.site-header {
            div.header-bar {
                (logo(&site.name))
                (search_form(&site.search_placeholder))
                div.header-actions {
                    button.icon-button type="button" aria-label="Notifications" { (svg_icon(BELL_PATH)) }
                    button.icon-button type="button" aria-label="Inbox" { (svg_icon(MAIL_PATH)) }
                    (user_menu(nav, state))
                    input.menu-toggle type="checkbox" id="menu-toggle" checked[state.menu_open()];
                    label.icon-button.menu-button for="menu-toggle" aria-label="Open menu" {
                        (svg_icon(MENU_PATH))
                    }
                    (menu_panel(nav))
                }
            }
            (category_rail(nav, current))
        }
    }
}

/// Search box. The form has no action: submission is not wired to anything.
pub fn search_form(placeholder: &str) -> Markup {
    html! {
        form.search role="search" {
            input.search-input type="text" name="q" placeholder=(placeholder) aria-label="Search agents";
            button.search-submit type="submit" aria-label="Search" { (svg_icon(SEARCH_PATH)) }
        }
    }
}

/// Avatar trigger with the user-menu actions.
pub fn user_menu(nav: &impl NavigationSource, state: HeaderState) -> Markup {
    html! {
        details.user-menu open[state.avatar_open()] {
            summary.avatar aria-label="Account" { "CN" }
            ul.dropdown {
                @for link in nav.user_menu() {
                    li { a href=(link.path) { (link.name) } }
                }
            }
        }
    }
}

/// Top-of-page links, revealed by the menu toggle.
pub fn menu_panel(nav: &impl NavigationSource) -> Markup {
    html! {
        nav.menu-panel aria-label="Site navigation" {
            @for link in nav.links() {
                a href=(link.path) { (link.name) }
            }
        }
    }
}

/// Horizontally scrollable row of category filters.
pub fn category_rail(nav: &impl NavigationSource, current: &str) -> Markup {
    html! {
        nav.category-rail aria-label="Categories" {
            @for category in nav.categories() {
                @let href = routes::category_href(&category.path);
                @let is_current = href == current;
                a.pill.current[is_current] href=(href) { (category.name) }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation;
    use crate::types::{CategoryFilter, Link, Navigation};

    fn sample_nav() -> Navigation {
        navigation::builtin().unwrap()
    }

    fn hrefs(html: &str) -> Vec<String> {
        html.split(r#"href=""#)
            .skip(1)
            .filter_map(|rest| rest.split('"').next())
            .map(String::from)
            .collect()
    }

    #[test]
    fn header_state_starts_closed() {
        let state = HeaderState::default();
        assert!(!state.menu_open());
        assert!(!state.avatar_open());
    }

    #[test]
    fn double_toggle_restores_menu_flag() {
        for start_open in [false, true] {
            let mut state = HeaderState::default();
            if start_open {
                state.toggle_menu();
            }
            let original = state;
            state.toggle_menu();
            assert_ne!(state.menu_open(), original.menu_open());
            state.toggle_menu();
            assert_eq!(state, original);
        }
    }

    #[test]
    fn flags_toggle_independently() {
        let mut state = HeaderState::default();
        state.toggle_avatar();
        assert!(state.avatar_open());
        assert!(!state.menu_open());
        state.toggle_menu();
        state.toggle_avatar();
        assert!(state.menu_open());
        assert!(!state.avatar_open());
    }

    #[test]
    fn menu_flag_drives_checkbox() {
        let nav = sample_nav();
        let site = SiteInfo::default();
        let mut state = HeaderState::default();

        let closed = render_header(&site, &nav, state, "/").into_string();
        assert!(!closed.contains("checked"));

        state.toggle_menu();
        let open = render_header(&site, &nav, state, "/").into_string();
        assert!(open.contains("checked"));
    }

    #[test]
    fn avatar_flag_drives_details() {
        let nav = sample_nav();
        let mut state = HeaderState::default();
        assert!(!user_menu(&nav, state).into_string().contains(" open"));
        state.toggle_avatar();
        assert!(user_menu(&nav, state).into_string().contains("<details class=\"user-menu\" open"));
    }

    #[test]
    fn category_links_are_verbatim() {
        let nav = sample_nav();
        let html = category_rail(&nav, "").into_string();
        assert_eq!(
            hrefs(&html),
            vec![
                "/category//all",
                "/category//graphics-design",
                "/category//code-fixes",
                "/category//prompt-optimisation",
            ]
        );
    }

    #[test]
    fn category_rail_marks_current() {
        let nav = sample_nav();
        let html = category_rail(&nav, "/category//code-fixes").into_string();
        assert_eq!(html.matches(r#"class="pill current""#).count(), 1);
        assert!(html.contains(r#"class="pill current" href="/category//code-fixes""#));
    }

    #[test]
    fn category_path_not_transformed() {
        let nav = Navigation {
            categories: vec![CategoryFilter {
                name: "Odd".to_string(),
                path: "/Odd_Path-1".to_string(),
                all: false,
            }],
            ..Navigation::default()
        };
        let html = category_rail(&nav, "").into_string();
        assert_eq!(hrefs(&html), vec!["/category//Odd_Path-1"]);
    }

    #[test]
    fn user_menu_has_three_actions() {
        let nav = sample_nav();
        let html = user_menu(&nav, HeaderState::default()).into_string();
        assert_eq!(hrefs(&html), vec!["/profile", "/settings", "/logout"]);
    }

    #[test]
    fn menu_panel_lists_top_links() {
        let nav = sample_nav();
        let html = menu_panel(&nav).into_string();
        assert_eq!(hrefs(&html), vec!["/browse", "/dashboard", "/orders", "/pricing"]);
    }

    #[test]
    fn search_form_has_no_action() {
        let html = search_form("Find an agent").into_string();
        assert!(html.contains(r#"role="search""#));
        assert!(html.contains(r#"placeholder="Find an agent""#));
        assert!(!html.contains("action="));
    }

    #[test]
    fn link_names_escaped() {
        let nav = Navigation {
            links: vec![Link {
                name: "<b>Deals</b>".to_string(),
                path: "/deals".to_string(),
            }],
            ..Navigation::default()
        };
        let html = menu_panel(&nav).into_string();
        assert!(html.contains("&lt;b&gt;Deals&lt;/b&gt;"));
    }
}
