use leptos::prelude::*;

use crate::content::HeroContent;

/// Full-width banner with the school motto.
#[component]
pub fn HeroSection(hero: HeroContent) -> impl IntoView {
    view! {
        <section class="hero">
            <div class="hero-backdrop">
                <img src=hero.image.src alt=hero.image.alt referrerpolicy="no-referrer" />
                <div class="hero-shade"></div>
            </div>
            <div class="container hero-content">
                <div class="hero-copy">
                    <h1 class="hero-title">
                        {hero.title_lead}
                        <span class="accent">{hero.title_accent}</span>
                        {hero.title_tail}
                    </h1>
                    <p class="hero-tagline">{hero.tagline}</p>
                    <div class="hero-actions">
                        <button type="button" class="btn btn-primary">{hero.primary_action}</button>
                        <button type="button" class="btn btn-outline">{hero.secondary_action}</button>
                    </div>
                </div>
            </div>
        </section>
    }
}
