//! Page content: navigation links and the copy/images for every section.
//!
//! Navigation is fixed at compile time ([`NAV_LINKS`]). Everything else lives
//! in [`SiteContent`], whose [`Default`] is the built-in Prudent Academy copy
//! and which can be partially overridden from a TOML file:
//!
//! ```toml
//! [hero]
//! tagline = "Now enrolling for the new term."
//! ```
//!
//! Content is passed through as-is. Broken image addresses and anchors with no
//! landing section are content defects, not errors.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::SiteError;

/// One entry of the navigation bar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    /// Display label
    pub name: &'static str,
    /// In-page anchor (`#about`) or URL
    pub href: &'static str,
}

/// Navigation links, in display order. Shared by the persistent row and the
/// mobile panel.
pub static NAV_LINKS: [NavLink; 5] = [
    NavLink { name: "Home", href: "#" },
    NavLink { name: "About Us", href: "#about" },
    NavLink { name: "Admissions", href: "#admissions" },
    NavLink { name: "Academics", href: "#academics" },
    NavLink { name: "Contact", href: "#contact" },
];

/// Section ids the page renders, i.e. valid `#fragment` targets.
pub const SECTION_IDS: [&str; 2] = ["about", "contact"];

/// Navigation links pointing at a section the page does not render.
///
/// `#` alone scrolls to the top and always resolves.
pub fn dangling_anchors() -> impl Iterator<Item = &'static NavLink> {
    NAV_LINKS.iter().filter(|link| match link.href.strip_prefix('#') {
        Some("") | None => false,
        Some(fragment) => !SECTION_IDS.contains(&fragment),
    })
}

/// All overridable copy and image addresses of the page.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteContent {
    /// School name as shown in the nav bar and footer
    pub brand: Brand,
    /// Full-width banner under the navigation
    pub hero: HeroContent,
    /// Value proposition cards
    pub values: ValuesContent,
    /// About section (`#about`)
    pub about: AboutContent,
    /// Image grid
    pub gallery: GalleryContent,
    /// Contact details and form (`#contact`)
    pub contact: ContactContent,
    /// Footer links and copyright line
    pub footer: FooterContent,
}

impl SiteContent {
    /// Parse a (possibly partial) TOML override.
    pub fn from_toml_str(source: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(source)
    }

    /// Load a TOML override from disk.
    pub fn load(path: &Path) -> Result<Self, SiteError> {
        let source = std::fs::read_to_string(path).map_err(|source| SiteError::ReadContent {
            path: path.to_path_buf(),
            source,
        })?;
        let content = Self::from_toml_str(&source).map_err(|source| SiteError::ParseContent {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "loaded content override");
        Ok(content)
    }

    /// Serialize the full content, e.g. as a starting point for an override file.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Document title.
    pub fn page_title(&self) -> String {
        format!("{} | {}", self.brand.full_name, self.hero.title_plain())
    }
}

/// Two-tone wordmark plus the plain school name.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Brand {
    /// First word of the wordmark
    pub name: String,
    /// Highlighted second word
    pub accent: String,
    /// Name used in running text ("Prudent Academy")
    pub full_name: String,
}

impl Default for Brand {
    fn default() -> Self {
        Self {
            name: "PRUDENT".into(),
            accent: "ACADEMY".into(),
            full_name: "Prudent Academy".into(),
        }
    }
}

/// A remote image reference. Never fetched or validated.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Image {
    /// Image address
    pub src: String,
    /// Alternative text
    pub alt: String,
}

/// Hero banner copy.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeroContent {
    /// Headline before the highlighted word
    pub title_lead: String,
    /// Highlighted headline word
    pub title_accent: String,
    /// Headline after the highlighted word
    pub title_tail: String,
    /// Paragraph under the headline
    pub tagline: String,
    /// Primary button label
    pub primary_action: String,
    /// Outlined button label
    pub secondary_action: String,
    /// Background photo
    pub image: Image,
}

impl HeroContent {
    /// Headline without the accent markup.
    pub fn title_plain(&self) -> String {
        format!("{}{}{}", self.title_lead, self.title_accent, self.title_tail)
    }
}

impl Default for HeroContent {
    fn default() -> Self {
        Self {
            image: Image {
                src: "https://thumbs.dreamstime.com/b/johannesburg-south-africa-october-african-children-primary-school-classroom-african-children-primary-school-classroom-117293026.jpg".into(),
                alt: "African students in classroom".into(),
            },
            title_lead: "Elimu ".into(),
            title_accent: "Haki".into(),
            title_tail: ", Uwezo".into(),
            tagline: "At Prudent Academy, we provide a world-class education rooted in integrity, \
                      innovation, and the pursuit of knowledge for every child."
                .into(),
            primary_action: "Apply Now".into(),
            secondary_action: "Learn More".into(),
        }
    }
}

/// Icon shown on a value card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueIcon {
    /// Open book
    Book,
    /// Group of people
    Community,
    /// Medal
    Award,
}

/// One value proposition.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ValueCard {
    /// Card icon
    pub icon: ValueIcon,
    /// Card heading
    pub title: String,
    /// Card body
    pub description: String,
}

/// Value proposition section.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValuesContent {
    /// Section heading
    pub heading: String,
    /// Cards, left to right
    pub cards: Vec<ValueCard>,
}

impl Default for ValuesContent {
    fn default() -> Self {
        Self {
            heading: "Our Core Values".into(),
            cards: vec![
                ValueCard {
                    icon: ValueIcon::Book,
                    title: "Academic Excellence".into(),
                    description: "A rigorous curriculum designed to challenge and inspire students to reach their full potential.".into(),
                },
                ValueCard {
                    icon: ValueIcon::Community,
                    title: "Inclusive Community".into(),
                    description: "A supportive environment where every student feels valued, respected, and empowered.".into(),
                },
                ValueCard {
                    icon: ValueIcon::Award,
                    title: "Character Building".into(),
                    description: "Instilling values of integrity, responsibility, and leadership in all our learners.".into(),
                },
            ],
        }
    }
}

/// About section copy.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AboutContent {
    /// Big number on the floating badge
    pub badge_figure: String,
    /// Caption under the badge number
    pub badge_caption: String,
    /// Heading before the highlighted part
    pub heading_lead: String,
    /// Highlighted heading part
    pub heading_accent: String,
    /// Intro paragraph
    pub body: String,
    /// Checklist items
    pub highlights: Vec<String>,
    /// Label of the "read more" button
    pub action: String,
    /// Portrait next to the text
    pub image: Image,
}

impl Default for AboutContent {
    fn default() -> Self {
        Self {
            image: Image {
                src: "https://images.unsplash.com/photo-1544367567-0f2fcb009e0b?q=80&w=800&h=1000&auto=format&fit=crop".into(),
                alt: "Happy African student".into(),
            },
            badge_figure: "15+".into(),
            badge_caption: "Years of Excellence".into(),
            heading_lead: "Welcome to ".into(),
            heading_accent: "Prudent Academy".into(),
            body: "Founded on the principles of wisdom and foresight, Prudent Academy has been \
                   a beacon of quality education for over a decade. We believe that every child \
                   possesses unique talents that deserve to be cultivated in a safe and \
                   stimulating environment."
                .into(),
            highlights: vec![
                "Modern Learning Facilities".into(),
                "Dedicated & Experienced Faculty".into(),
                "Robust Extra-curricular Programs".into(),
                "Safe and Secure Campus".into(),
            ],
            action: "Read Our Full Story".into(),
        }
    }
}

/// Image grid.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GalleryContent {
    /// Section heading
    pub heading: String,
    /// Line under the heading
    pub caption: String,
    /// One address per grid slot
    pub images: Vec<String>,
}

impl GalleryContent {
    /// `(index, src, alt)` per slot. Alt text is "Student N", counting from 1.
    pub fn slots(&self) -> impl Iterator<Item = (usize, &str, String)> + '_ {
        self.images
            .iter()
            .enumerate()
            .map(|(idx, src)| (idx, src.as_str(), format!("Student {}", idx + 1)))
    }
}

impl Default for GalleryContent {
    fn default() -> Self {
        Self {
            heading: "Life at Prudent".into(),
            caption: "Capturing moments of growth, joy, and discovery.".into(),
            images: vec![
                "https://thumbs.dreamstime.com/b/african-schoolchildren-6079122.jpg".into(),
                "https://media.gettyimages.com/id/143922541/photo/african-students-at-school.jpg?s=612x612&w=gi&k=20&c=nDsrny81WMsZrI1RsF1ojjEn-UYd2kK86gN935PB8oY=".into(),
                // Malformed in the source content; kept verbatim.
                "hhttps://t4.ftcdn.net/jpg/03/11/48/73/360_F_311487387_5jkdQsYUGmP6D8DKWJPRk4esBymRQXNL.jpgttps://t4.ftcdn.net/jpg/03/11/48/73/360_F_311487387_5jkdQsYUGmP6D8DKWJPRk4esBymRQXNL.jpg".into(),
                "https://st2.depositphotos.com/7232356/11182/i/950/depositphotos_111828836-stock-photo-african-children-at-school.jpg".into(),
            ],
        }
    }
}

/// Kind of contact detail, selects the icon.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactKind {
    /// Telephone number
    Phone,
    /// Email address
    Email,
    /// Street address
    Address,
}

/// One line in the contact panel.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ContactDetail {
    /// Icon selector
    pub kind: ContactKind,
    /// Small caption ("Call Us")
    pub label: String,
    /// The detail itself
    pub value: String,
}

/// Labels of the decorative contact form.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactForm {
    /// First name field label
    pub first_name: String,
    /// Last name field label
    pub last_name: String,
    /// Email field label
    pub email: String,
    /// Message field label
    pub message: String,
    /// Submit button label
    pub submit: String,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self {
            first_name: "First Name".into(),
            last_name: "Last Name".into(),
            email: "Email Address".into(),
            message: "Message".into(),
            submit: "Send Message".into(),
        }
    }
}

/// Contact section.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactContent {
    /// Panel heading
    pub heading: String,
    /// Paragraph under the heading
    pub intro: String,
    /// Phone, email, address
    pub details: Vec<ContactDetail>,
    /// Form labels
    pub form: ContactForm,
}

impl Default for ContactContent {
    fn default() -> Self {
        Self {
            heading: "Get in Touch".into(),
            intro: "Have questions about admissions or our programs? We're here to help.".into(),
            details: vec![
                ContactDetail {
                    kind: ContactKind::Phone,
                    label: "Call Us".into(),
                    value: "+254 701 121 054".into(),
                },
                ContactDetail {
                    kind: ContactKind::Email,
                    label: "Email Us".into(),
                    value: "info@prudentacademy.edu".into(),
                },
                ContactDetail {
                    kind: ContactKind::Address,
                    label: "Visit Us".into(),
                    value: "452 Kabiria, Nairobi, Kenya".into(),
                },
            ],
            form: ContactForm::default(),
        }
    }
}

/// A footer link.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FooterLink {
    /// Display label
    pub label: String,
    /// Target
    pub href: String,
}

/// Footer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FooterContent {
    /// Text after "© {year} {full_name}."
    pub rights: String,
    /// Small links row
    pub links: Vec<FooterLink>,
}

impl Default for FooterContent {
    fn default() -> Self {
        let link = |label: &str| FooterLink {
            label: label.into(),
            href: "#".into(),
        };
        Self {
            rights: "All rights reserved.".into(),
            links: vec![link("Privacy Policy"), link("Terms of Service"), link("Sitemap")],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn nav_labels_and_targets() {
        let pairs: Vec<_> = NAV_LINKS.iter().map(|l| (l.name, l.href)).collect();
        assert_eq!(
            pairs,
            vec![
                ("Home", "#"),
                ("About Us", "#about"),
                ("Admissions", "#admissions"),
                ("Academics", "#academics"),
                ("Contact", "#contact"),
            ]
        );
    }

    #[test]
    fn dangling_anchors_are_admissions_and_academics() {
        let dangling: Vec<_> = dangling_anchors().map(|l| l.href).collect();
        assert_eq!(dangling, vec!["#admissions", "#academics"]);
    }

    #[test]
    fn partial_override_keeps_defaults() {
        let content = SiteContent::from_toml_str(
            r#"
            [hero]
            tagline = "Now enrolling."
            "#,
        )
        .unwrap();

        assert_eq!(content.hero.tagline, "Now enrolling.");
        assert_eq!(content.hero.primary_action, "Apply Now");
        assert_eq!(content.about, AboutContent::default());
        assert_eq!(content.brand, Brand::default());
    }

    #[test]
    fn empty_override_is_default() {
        let content = SiteContent::from_toml_str("").unwrap();
        assert_eq!(content, SiteContent::default());
    }

    #[test]
    fn override_replaces_lists() {
        let content = SiteContent::from_toml_str(
            r#"
            [gallery]
            images = ["https://example.org/a.jpg"]

            [[values.cards]]
            icon = "award"
            title = "Sport"
            description = "Football and athletics."
            "#,
        )
        .unwrap();

        assert_eq!(content.gallery.images, vec!["https://example.org/a.jpg"]);
        assert_eq!(content.gallery.heading, "Life at Prudent");
        assert_eq!(content.values.cards.len(), 1);
        assert_eq!(content.values.cards[0].icon, ValueIcon::Award);
        assert_eq!(content.values.heading, "Our Core Values");
    }

    #[test]
    fn unknown_icon_is_rejected() {
        let result = SiteContent::from_toml_str(
            r#"
            [[values.cards]]
            icon = "rocket"
            title = "x"
            description = "y"
            "#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn dumped_content_loads_back() {
        let original = SiteContent::default();
        let dumped = original.to_toml().unwrap();
        assert_eq!(SiteContent::from_toml_str(&dumped).unwrap(), original);
    }

    #[test]
    fn gallery_keeps_malformed_address() {
        let gallery = GalleryContent::default();
        assert_eq!(gallery.images.len(), 4);
        assert!(gallery.images[2].starts_with("hhttps://"));
    }

    #[test]
    fn gallery_slots_number_from_one() {
        let gallery = GalleryContent::default();
        let alts: Vec<_> = gallery.slots().map(|(_, _, alt)| alt).collect();
        assert_eq!(alts, vec!["Student 1", "Student 2", "Student 3", "Student 4"]);
    }

    #[test]
    fn load_reports_missing_file() {
        let err = SiteContent::load(Path::new("/nonexistent/content.toml")).unwrap_err();
        assert!(matches!(err, SiteError::ReadContent { .. }));
    }

    #[test]
    fn load_reports_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("content.toml");
        std::fs::write(&path, "[hero\n").unwrap();

        let err = SiteContent::load(&path).unwrap_err();
        assert!(matches!(err, SiteError::ParseContent { .. }));
        assert!(err.to_string().contains("content.toml"));
    }

    #[test]
    fn page_title_joins_brand_and_headline() {
        assert_eq!(
            SiteContent::default().page_title(),
            "Prudent Academy | Elimu Haki, Uwezo"
        );
    }
}
