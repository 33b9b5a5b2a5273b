//! Root document component - the complete HTML page for static export.

use leptos::prelude::*;

use super::App;
use crate::content::SiteContent;
use crate::styles::{MENU_SCRIPT, SITE_CSS};

/// The complete HTML document.
///
/// No WASM runs on the exported page, so the menu is driven by
/// [`MENU_SCRIPT`] instead of the component signal.
#[component]
pub fn PageDocument(content: SiteContent, year: i32) -> impl IntoView {
    let title = content.page_title();
    let description = content.hero.tagline.clone();

    view! {
        <html lang="en">
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <meta name="description" content=description />
                <title>{title}</title>
                <style>{SITE_CSS}</style>
            </head>
            <body>
                <App content=content year=year />
                <script>{MENU_SCRIPT}</script>
            </body>
        </html>
    }
}
