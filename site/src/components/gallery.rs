use leptos::prelude::*;

use crate::content::GalleryContent;

/// Square image grid. Every slot shows its own listed address, unchecked.
#[component]
pub fn GallerySection(gallery: GalleryContent) -> impl IntoView {
    let slots = gallery
        .slots()
        .map(|(idx, src, alt)| {
            let src = src.to_string();
            let slot = idx.to_string();
            view! {
                <div class="gallery-slot" data-slot=slot>
                    <img src=src alt=alt referrerpolicy="no-referrer" />
                </div>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <section class="section gallery">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">{gallery.heading}</h2>
                    <p class="section-caption">{gallery.caption}</p>
                </div>
                <div class="gallery-grid">{slots}</div>
            </div>
        </section>
    }
}
