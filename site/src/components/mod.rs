//! Leptos UI components for the landing page.
//!
//! # Component Hierarchy
//!
//! ```text
//! PageDocument (static export only)
//! └── App
//!     ├── Nav
//!     │   ├── Wordmark
//!     │   └── mobile panel (while expanded)
//!     ├── HeroSection
//!     ├── ValuesSection
//!     ├── AboutSection      #about
//!     ├── GallerySection
//!     ├── ContactSection    #contact
//!     └── Footer
//! ```
//!
//! # Usage
//!
//! Client-side, mount [`App`] next to [`SiteStyles`]:
//!
//! ```rust,ignore
//! leptos::mount::mount_to_body(|| view! { <SiteStyles /> <App /> });
//! ```

mod about;
mod app;
mod contact;
mod document;
mod footer;
mod gallery;
mod hero;
mod icons;
mod nav;
mod values;

pub use about::AboutSection;
pub use app::{App, SiteStyles};
pub use contact::ContactSection;
pub use document::PageDocument;
pub use footer::Footer;
pub use gallery::GallerySection;
pub use hero::HeroSection;
pub use icons::*;
pub use nav::{Nav, Wordmark};
pub use values::ValuesSection;
