use leptos::prelude::*;

use super::Icon;
use crate::content::{ValueCard, ValuesContent};

/// "Our Core Values" - one card per value proposition.
#[component]
pub fn ValuesSection(values: ValuesContent) -> impl IntoView {
    view! {
        <section class="section values">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">{values.heading}</h2>
                    <div class="section-rule"></div>
                </div>
                <div class="values-grid">
                    {values
                        .cards
                        .into_iter()
                        .map(|card| view! { <ValueCardView card=card /> })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ValueCardView(card: ValueCard) -> impl IntoView {
    view! {
        <article class="value-card">
            <div class="value-icon">
                <Icon path=card.icon.path() size="40" />
            </div>
            <h3 class="value-title">{card.title}</h3>
            <p class="value-description">{card.description}</p>
        </article>
    }
}
