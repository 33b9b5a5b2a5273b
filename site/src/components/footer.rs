use leptos::prelude::*;

use super::{ICON_GRADUATION_CAP, Icon, Wordmark};
use crate::content::{Brand, FooterContent};

#[component]
pub fn Footer(brand: Brand, footer: FooterContent, year: i32) -> impl IntoView {
    let copyright = format!("© {} {}. {}", year, brand.full_name, footer.rights);
    view! {
        <footer class="site-footer">
            <div class="container">
                <div class="footer-brand">
                    <Icon path=ICON_GRADUATION_CAP />
                    <Wordmark brand=brand />
                </div>
                <p class="footer-copyright">{copyright}</p>
                <div class="footer-links">
                    {footer
                        .links
                        .into_iter()
                        .map(|link| view! { <a href=link.href class="footer-link">{link.label}</a> })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </footer>
    }
}
