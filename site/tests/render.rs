//! Rendering tests for the complete page and the navigation menu.

use pretty_assertions::assert_eq;
use prudent_site::{
    MenuEvent, MenuState, NAV_LINKS, SiteContent, render_nav, render_page, render_page_for_year,
};

const PANEL: &str = r#"data-role="mobile-nav""#;

/// Text from `start` up to the next closing `</div>`.
fn segment<'a>(html: &'a str, start: &str) -> &'a str {
    let from = html
        .find(start)
        .unwrap_or_else(|| panic!("{start} not rendered"));
    let rest = &html[from..];
    let to = rest.find("</div>").expect("unclosed div");
    &rest[..to]
}

/// Navigation labels found in `segment`, in the order they appear.
fn labels_in(segment: &str) -> Vec<&'static str> {
    let mut found: Vec<(usize, &'static str)> = NAV_LINKS
        .iter()
        .filter_map(|link| {
            segment
                .find(&format!(">{}<", link.name))
                .map(|pos| (pos, link.name))
        })
        .collect();
    found.sort_by_key(|(pos, _)| *pos);
    found.into_iter().map(|(_, name)| name).collect()
}

const EXPECTED_LABELS: [&str; 5] = ["Home", "About Us", "Admissions", "Academics", "Contact"];

#[test]
fn page_is_a_complete_document() {
    let html = render_page(&SiteContent::default());
    assert!(html.starts_with("<!DOCTYPE html>\n<html"));
    assert!(html.contains("<title>Prudent Academy | Elimu Haki, Uwezo</title>"));
    assert!(html.contains(r#"id="about""#));
    assert!(html.contains(r#"id="contact""#));
}

#[test]
fn initial_render_is_collapsed() {
    let html = render_page(&SiteContent::default());
    assert!(!html.contains(PANEL));
    assert!(html.contains(r#"aria-expanded="false""#));
}

#[test]
fn persistent_navigation_lists_all_links_in_order() {
    let html = render_page(&SiteContent::default());
    let row = segment(&html, r#"<div class="nav-links">"#);
    assert_eq!(labels_in(row), EXPECTED_LABELS.to_vec());
    for link in NAV_LINKS {
        assert!(row.contains(&format!(r#"href="{}""#, link.href)));
    }
}

#[test]
fn toggle_shows_and_hides_panel() {
    let mut state = MenuState::default();

    state.apply(MenuEvent::Toggle);
    let open = render_nav(state);
    let panel = segment(&open, PANEL);
    assert_eq!(labels_in(panel), EXPECTED_LABELS.to_vec());

    state.apply(MenuEvent::Toggle);
    assert!(!render_nav(state).contains(PANEL));
}

#[test]
fn selecting_any_link_closes_panel() {
    for link in NAV_LINKS {
        let mut state = MenuState::default();
        state.apply(MenuEvent::Toggle);
        assert!(render_nav(state).contains(PANEL));

        state.apply(MenuEvent::LinkSelected);
        assert!(
            !render_nav(state).contains(PANEL),
            "panel still open after selecting {}",
            link.name
        );
    }
}

#[test]
fn panel_mirrors_persistent_row() {
    let html = render_nav(MenuState::Expanded);
    let row = segment(&html, r#"<div class="nav-links">"#);
    let panel = segment(&html, PANEL);
    assert_eq!(labels_in(row), labels_in(panel));
}

#[test]
fn persistent_row_is_invariant_to_menu_state() {
    let collapsed = render_nav(MenuState::Collapsed);
    let expanded = render_nav(MenuState::Expanded);
    assert_eq!(
        segment(&collapsed, r#"<div class="nav-links">"#),
        segment(&expanded, r#"<div class="nav-links">"#)
    );
}

#[test]
fn footer_shows_given_year() {
    let html = render_page_for_year(&SiteContent::default(), 2031);
    assert!(html.contains("© 2031 Prudent Academy. All rights reserved."));
}

#[test]
fn content_override_reaches_markup() {
    let content = SiteContent::from_toml_str(
        r#"
        [hero]
        tagline = "Enrolment for Term 2 is open."
        "#,
    )
    .unwrap();

    let html = render_page_for_year(&content, 2025);
    assert!(html.contains("Enrolment for Term 2 is open."));
    assert!(html.contains("Apply Now"));
}

#[test]
fn gallery_renders_each_listed_address() {
    let content = SiteContent::default();
    let html = render_page_for_year(&content, 2025);
    for (_, _, alt) in content.gallery.slots() {
        assert!(html.contains(&format!(r#"alt="{}""#, alt)));
    }
    assert!(html.contains("hhttps://t4.ftcdn.net/"));
    assert!(html.contains("https://thumbs.dreamstime.com/b/african-schoolchildren-6079122.jpg"));
}

#[test]
fn contact_form_cannot_submit() {
    let html = render_page_for_year(&SiteContent::default(), 2025);
    let form = &html[html.find(r#"data-role="contact-form""#).unwrap()..];
    let form = &form[..form.find("</form>").unwrap()];
    assert!(!form.contains(r#"type="submit""#));
    assert!(form.contains("Send Message"));
    assert!(form.contains(r#"type="email""#));
}

#[test]
fn static_page_ships_menu_script() {
    let html = render_page_for_year(&SiteContent::default(), 2025);
    assert!(html.contains("<script>"));
    assert!(html.contains("mobile-nav-link"));
}
