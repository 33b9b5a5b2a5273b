use leptos::prelude::*;

use super::{AboutSection, ContactSection, Footer, GallerySection, HeroSection, Nav, ValuesSection};
use crate::content::SiteContent;
use crate::current_year;

/// The whole landing page.
///
/// Takes no required props: content defaults to the built-in copy and the
/// footer year to the current one. The menu always starts collapsed.
#[component]
pub fn App(
    /// Page copy and images
    #[prop(optional)]
    content: SiteContent,
    /// Footer year
    #[prop(optional)]
    year: Option<i32>,
) -> impl IntoView {
    let year = year.unwrap_or_else(current_year);
    let SiteContent {
        brand,
        hero,
        values,
        about,
        gallery,
        contact,
        footer,
    } = content;

    view! {
        <div class="page">
            <Nav brand=brand.clone() />
            <main>
                <HeroSection hero=hero />
                <ValuesSection values=values />
                <AboutSection about=about />
                <GallerySection gallery=gallery />
                <ContactSection contact=contact />
            </main>
            <Footer brand=brand footer=footer year=year />
        </div>
    }
}

/// The page stylesheet as a `<style>` element, for client-side mounting.
#[component]
pub fn SiteStyles() -> impl IntoView {
    view! { <style>{crate::styles::SITE_CSS}</style> }
}
