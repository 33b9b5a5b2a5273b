use leptos::prelude::*;

use super::{ICON_CARET_RIGHT, ICON_CHECK_CIRCLE, Icon};
use crate::content::AboutContent;

/// `#about` - portrait, years badge, intro text and highlights.
#[component]
pub fn AboutSection(about: AboutContent) -> impl IntoView {
    view! {
        <section id="about" class="section about">
            <div class="container about-grid">
                <div class="about-media">
                    <img src=about.image.src alt=about.image.alt referrerpolicy="no-referrer" />
                    <div class="about-badge">
                        <p class="about-badge-figure">{about.badge_figure}</p>
                        <p class="about-badge-caption">{about.badge_caption}</p>
                    </div>
                </div>

                <div class="about-text">
                    <h2 class="about-title">
                        {about.heading_lead}
                        <span class="accent">{about.heading_accent}</span>
                    </h2>
                    <p class="about-body">{about.body}</p>
                    <ul class="about-highlights">
                        {about
                            .highlights
                            .into_iter()
                            .map(|item| {
                                view! {
                                    <li>
                                        <Icon path=ICON_CHECK_CIRCLE size="20" />
                                        <span>{item}</span>
                                    </li>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </ul>
                    <button type="button" class="link-button">
                        {about.action}
                        <Icon path=ICON_CARET_RIGHT size="20" />
                    </button>
                </div>
            </div>
        </section>
    }
}
