//! # prudent-site
//!
//! The Prudent Academy landing page, built with [Leptos](https://leptos.dev/).
//!
//! The same components serve two surfaces:
//!
//! - **Static export** (`ssr` feature, default) - [`render_page`] produces a
//!   complete HTML document and [`write_site`] drops it into a directory as
//!   `index.html`. A small inline script drives the mobile menu so the page
//!   stays interactive without a WASM bundle.
//! - **Client-side app** (`csr` feature) - the `landing` crate mounts
//!   [`components::App`] into the browser, where the menu runs on a Leptos
//!   signal.
//!
//! ## Quick Start
//!
//! ```rust
//! use prudent_site::{render_page, content::SiteContent};
//!
//! let html = render_page(&SiteContent::default());
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! ```
//!
//! ## Architecture
//!
//! - [`content`] - navigation links and the overridable page copy
//! - [`menu`] - the mobile menu state machine
//! - [`components`] - Leptos UI components, one per page section
//! - [`styles`] - CSS and the inline menu script for the static page
//! - [`error`] - error type for loading content and writing output
//!
//! ---
//!
//! Prudent Academy (c)2025

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod components;
pub mod content;
pub mod error;
#[cfg(feature = "ssr")]
mod export;
pub mod menu;
pub mod styles;

pub use content::{NAV_LINKS, NavLink, SiteContent};
pub use error::SiteError;
#[cfg(feature = "ssr")]
pub use export::write_site;
pub use menu::{MenuEvent, MenuState};

#[cfg(feature = "ssr")]
use components::{Nav, PageDocument};
#[cfg(feature = "ssr")]
use leptos::prelude::*;
#[cfg(feature = "ssr")]
use leptos::tachys::view::RenderHtml;

/// The calendar year shown in the footer.
pub fn current_year() -> i32 {
    use chrono::Datelike;
    chrono::Local::now().year()
}

/// Render the complete landing page as an HTML document.
///
/// The menu starts collapsed and the footer shows the current year.
///
/// # Example
///
/// ```rust
/// use prudent_site::{render_page, SiteContent};
///
/// let html = render_page(&SiteContent::default());
/// assert!(html.contains(r#"id="contact""#));
/// ```
#[cfg(feature = "ssr")]
pub fn render_page(content: &SiteContent) -> String {
    render_page_for_year(content, current_year())
}

/// Same as [`render_page`] with a fixed footer year.
#[cfg(feature = "ssr")]
pub fn render_page_for_year(content: &SiteContent, year: i32) -> String {
    tracing::debug!(year, "rendering landing page");
    let content = content.clone();
    let html = render_owned(move || {
        view! { <PageDocument content=content year=year /> }.to_html()
    });

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{}", html)
}

/// Render only the navigation bar with the menu in `state`.
///
/// Every other part of the page is independent of the menu, so this is the
/// piece to look at when checking how the toggle behaves.
#[cfg(feature = "ssr")]
pub fn render_nav(state: MenuState) -> String {
    render_owned(move || {
        view! { <Nav brand=content::Brand::default() initial=state /> }.to_html()
    })
}

/// Runs a render under a fresh reactive owner so component signals are
/// dropped together with it.
#[cfg(feature = "ssr")]
fn render_owned(render: impl FnOnce() -> String) -> String {
    let owner = Owner::new();
    owner.with(render)
}
