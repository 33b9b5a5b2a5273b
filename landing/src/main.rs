// Prudent Academy Landing Page, Leptos 0.8 client-side build
// Build with `trunk serve` / `trunk build --release`

use leptos::prelude::*;
use prudent_site::components::{App, SiteStyles};

fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(|| {
        view! {
            <SiteStyles />
            <App />
        }
    });
}
