//! Navigation bar with the collapsible mobile panel.

use leptos::prelude::*;

use super::{ICON_GRADUATION_CAP, ICON_LIST, ICON_X, Icon};
use crate::content::{Brand, NAV_LINKS};
use crate::menu::MenuState;

/// Two-tone school name, e.g. "PRUDENT ACADEMY".
#[component]
pub fn Wordmark(brand: Brand) -> impl IntoView {
    view! {
        <span class="brand-wordmark">
            {brand.name}
            " "
            <span class="accent">{brand.accent}</span>
        </span>
    }
}

/// Sticky navigation bar.
///
/// Wide viewports show the persistent link row. Narrow ones show a toggle
/// that opens an auxiliary panel with the same links; following one of them
/// closes the panel again.
#[component]
pub fn Nav(
    brand: Brand,
    /// Menu state on mount
    #[prop(optional)]
    initial: MenuState,
) -> impl IntoView {
    let (menu, set_menu) = signal(initial);

    view! {
        <nav class="site-nav">
            <div class="container nav-inner">
                <a href="#" class="nav-brand">
                    <span class="nav-logo">
                        <Icon path=ICON_GRADUATION_CAP size="32" />
                    </span>
                    <Wordmark brand=brand />
                </a>

                <div class="nav-links">
                    {NAV_LINKS
                        .iter()
                        .map(|link| view! { <a href=link.href class="nav-link">{link.name}</a> })
                        .collect::<Vec<_>>()}
                </div>

                <button
                    type="button"
                    class="menu-toggle"
                    aria-label="Toggle navigation"
                    aria-expanded=move || menu.get().aria_expanded()
                    data-state=move || menu.get().as_str()
                    on:click=move |_| set_menu.update(MenuState::toggle)
                >
                    <span class="icon-open"><Icon path=ICON_LIST /></span>
                    <span class="icon-close"><Icon path=ICON_X /></span>
                </button>
            </div>

            <Show when=move || menu.get().is_expanded()>
                <div class="mobile-nav" data-role="mobile-nav">
                    {NAV_LINKS
                        .iter()
                        .map(|link| {
                            view! {
                                <a
                                    href=link.href
                                    class="mobile-nav-link"
                                    on:click=move |_| set_menu.update(MenuState::select_link)
                                >
                                    {link.name}
                                </a>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </Show>
        </nav>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use crate::menu::MenuState;
    use crate::render_nav;

    const PANEL: &str = r#"data-role="mobile-nav""#;

    #[test]
    fn collapsed_nav_has_no_panel() {
        let html = render_nav(MenuState::Collapsed);
        assert!(!html.contains(PANEL));
        assert!(html.contains(r#"aria-expanded="false""#));
    }

    #[test]
    fn expanded_nav_shows_panel() {
        let html = render_nav(MenuState::Expanded);
        assert!(html.contains(PANEL));
        assert!(html.contains(r#"aria-expanded="true""#));
        assert_eq!(html.matches(r#"class="mobile-nav-link""#).count(), 5);
    }

    #[test]
    fn persistent_row_ignores_menu_state() {
        for state in [MenuState::Collapsed, MenuState::Expanded] {
            let html = render_nav(state);
            assert_eq!(html.matches(r#"class="nav-link""#).count(), 5);
        }
    }

    #[test]
    fn toggle_carries_state_attribute() {
        assert!(render_nav(MenuState::Collapsed).contains(r#"data-state="collapsed""#));
        assert!(render_nav(MenuState::Expanded).contains(r#"data-state="expanded""#));
    }
}
