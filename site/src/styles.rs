//! CSS and inline script for the landing page.
//!
//! Both are embedded as text children of `<style>` / `<script>`, so they stay
//! free of markup-significant characters.
//!
//! # Customization
//!
//! ```rust
//! use prudent_site::styles::SITE_CSS;
//!
//! let my_css = ".hero-title { letter-spacing: 0; }";
//! let combined = format!("{}\n{}", SITE_CSS, my_css);
//! ```

/// Complete stylesheet - black and maroon theme.
///
/// Layout is mobile first: the persistent link row appears from 768px up,
/// the menu toggle and the auxiliary panel only below that.
pub const SITE_CSS: &str = r#"
:root {
    --maroon: #800000;
    --maroon-dark: #5c0000;
    --maroon-100: #f5d0d0;
    --maroon-200: #e8a8a8;
    --black: #000000;
    --white: #ffffff;
    --zinc-50: #fafafa;
    --zinc-100: #f4f4f5;
    --zinc-200: #e4e4e7;
    --zinc-300: #d4d4d8;
    --zinc-400: #a1a1aa;
    --zinc-500: #71717a;
    --zinc-600: #52525b;
    --zinc-700: #3f3f46;
    --zinc-800: #27272a;
    --zinc-900: #18181b;
    --font-sans: 'Inter', system-ui, -apple-system, 'Segoe UI', sans-serif;
    --container-max: 1280px;
}

*, *::before, *::after {
    box-sizing: border-box;
}

html {
    scroll-behavior: smooth;
}

body {
    margin: 0;
    font-family: var(--font-sans);
    color: var(--black);
    background: var(--white);
    line-height: 1.5;
}

img {
    display: block;
    max-width: 100%;
}

a {
    color: inherit;
    text-decoration: none;
}

button {
    font: inherit;
    cursor: pointer;
}

.page {
    min-height: 100vh;
    display: flex;
    flex-direction: column;
}

.container {
    max-width: var(--container-max);
    margin: 0 auto;
    padding: 0 16px;
}

.accent {
    color: var(--maroon);
}

.icon {
    display: inline-block;
    flex-shrink: 0;
}

/* Navigation */
.site-nav {
    position: sticky;
    top: 0;
    z-index: 50;
    background: var(--black);
    color: var(--white);
    box-shadow: 0 4px 6px rgba(0, 0, 0, 0.2);
}

.nav-inner {
    display: flex;
    justify-content: space-between;
    align-items: center;
    height: 80px;
}

.nav-brand {
    display: flex;
    align-items: center;
    gap: 8px;
}

.nav-logo {
    background: var(--maroon);
    padding: 8px;
    border-radius: 8px;
    display: flex;
}

.brand-wordmark {
    font-size: 24px;
    font-weight: 700;
    letter-spacing: -0.02em;
}

.nav-links {
    display: none;
    gap: 32px;
}

.nav-link {
    font-size: 14px;
    font-weight: 500;
    transition: color 0.2s;
}

.nav-link:hover {
    color: var(--maroon);
}

.menu-toggle {
    display: flex;
    padding: 8px;
    border: none;
    border-radius: 6px;
    background: transparent;
    color: var(--white);
    transition: background 0.2s;
}

.menu-toggle:hover {
    background: var(--zinc-900);
}

.menu-toggle .icon-close {
    display: none;
}

.menu-toggle[aria-expanded=true] .icon-open {
    display: none;
}

.menu-toggle[aria-expanded=true] .icon-close {
    display: flex;
}

.mobile-nav {
    background: var(--black);
    border-top: 1px solid var(--zinc-800);
    padding: 8px 16px 24px;
    animation: slide-down 0.2s ease-out;
}

.mobile-nav-link {
    display: block;
    padding: 12px;
    font-size: 16px;
    font-weight: 500;
    border-radius: 6px;
    transition: background 0.2s;
}

.mobile-nav-link:hover {
    background: var(--maroon);
}

@keyframes slide-down {
    from { opacity: 0; transform: translateY(-20px); }
    to { opacity: 1; transform: translateY(0); }
}

@keyframes slide-in {
    from { opacity: 0; transform: translateX(-50px); }
    to { opacity: 1; transform: translateX(0); }
}

/* Buttons */
.btn {
    border-radius: 9999px;
    padding: 16px 32px;
    font-weight: 700;
    color: var(--white);
    transition: all 0.2s;
}

.btn-primary {
    background: var(--maroon);
    border: 2px solid var(--maroon);
}

.btn-primary:hover {
    background: var(--maroon-dark);
    transform: scale(1.05);
}

.btn-outline {
    background: transparent;
    border: 2px solid var(--white);
}

.btn-outline:hover {
    background: var(--white);
    color: var(--black);
}

/* Hero */
.hero {
    position: relative;
    height: 600px;
    display: flex;
    align-items: center;
    overflow: hidden;
}

.hero-backdrop {
    position: absolute;
    inset: 0;
}

.hero-backdrop img {
    width: 100%;
    height: 100%;
    object-fit: cover;
}

.hero-shade {
    position: absolute;
    inset: 0;
    background: rgba(0, 0, 0, 0.6);
}

.hero-content {
    position: relative;
    z-index: 10;
    color: var(--white);
    width: 100%;
}

.hero-copy {
    max-width: 672px;
    animation: slide-in 0.8s ease-out;
}

.hero-title {
    font-size: 48px;
    font-weight: 700;
    line-height: 1.15;
    margin: 0 0 24px;
}

.hero-tagline {
    font-size: 20px;
    color: var(--zinc-300);
    margin: 0 0 32px;
}

.hero-actions {
    display: flex;
    flex-wrap: wrap;
    gap: 16px;
}

/* Sections */
.section {
    padding: 80px 0;
}

.section-header {
    text-align: center;
    margin-bottom: 64px;
}

.section-title {
    font-size: 30px;
    font-weight: 700;
    margin: 0 0 16px;
}

.section-rule {
    width: 80px;
    height: 4px;
    background: var(--maroon);
    margin: 0 auto;
}

.section-caption {
    color: var(--zinc-600);
    margin: 0;
}

/* Values */
.values-grid {
    display: grid;
    grid-template-columns: 1fr;
    gap: 48px;
}

.value-card {
    padding: 32px;
    background: var(--zinc-50);
    border: 1px solid var(--zinc-100);
    border-radius: 16px;
    box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
    text-align: center;
    transition: transform 0.2s;
}

.value-card:hover {
    transform: translateY(-10px);
}

.value-icon {
    display: flex;
    justify-content: center;
    margin-bottom: 24px;
    color: var(--maroon);
}

.value-title {
    font-size: 20px;
    font-weight: 700;
    margin: 0 0 16px;
}

.value-description {
    color: var(--zinc-600);
    margin: 0;
}

/* About */
.about {
    background: var(--zinc-900);
    color: var(--white);
}

.about-grid {
    display: grid;
    grid-template-columns: 1fr;
    gap: 64px;
    align-items: center;
}

.about-media {
    position: relative;
}

.about-media img {
    border-radius: 24px;
    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.5);
}

.about-badge {
    display: none;
    position: absolute;
    right: -32px;
    bottom: -32px;
    background: var(--maroon);
    padding: 32px;
    border-radius: 16px;
}

.about-badge-figure {
    font-size: 36px;
    font-weight: 700;
    margin: 0;
}

.about-badge-caption {
    font-size: 14px;
    text-transform: uppercase;
    letter-spacing: 0.1em;
    margin: 0;
}

.about-title {
    font-size: 36px;
    font-weight: 700;
    margin: 0 0 24px;
}

.about-body {
    color: var(--zinc-400);
    font-size: 18px;
    margin: 0 0 32px;
}

.about-highlights {
    list-style: none;
    padding: 0;
    margin: 0 0 40px;
}

.about-highlights li {
    display: flex;
    align-items: center;
    gap: 12px;
    margin-bottom: 16px;
}

.about-highlights .icon {
    color: var(--maroon);
}

.link-button {
    display: flex;
    align-items: center;
    gap: 8px;
    border: none;
    background: transparent;
    color: var(--maroon);
    font-weight: 700;
    padding: 0;
    transition: gap 0.2s;
}

.link-button:hover {
    gap: 16px;
}

/* Gallery */
.gallery-grid {
    display: grid;
    grid-template-columns: repeat(2, 1fr);
    gap: 16px;
}

.gallery-slot {
    aspect-ratio: 1 / 1;
    overflow: hidden;
    border-radius: 12px;
    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
    transition: transform 0.2s;
}

.gallery-slot:hover {
    transform: scale(1.05);
}

.gallery-slot img {
    width: 100%;
    height: 100%;
    object-fit: cover;
}

/* Contact */
.contact {
    background: var(--zinc-50);
}

.contact-card {
    display: grid;
    grid-template-columns: 1fr;
    background: var(--white);
    border-radius: 24px;
    box-shadow: 0 20px 25px rgba(0, 0, 0, 0.1);
    overflow: hidden;
}

.contact-panel {
    padding: 48px;
    background: var(--maroon);
    color: var(--white);
}

.contact-title {
    font-size: 30px;
    font-weight: 700;
    margin: 0 0 32px;
}

.contact-intro {
    color: var(--maroon-100);
    margin: 0 0 48px;
}

.contact-detail {
    display: flex;
    align-items: center;
    gap: 16px;
    margin-bottom: 24px;
}

.contact-detail-icon {
    display: flex;
    background: rgba(255, 255, 255, 0.1);
    padding: 12px;
    border-radius: 8px;
}

.contact-detail-label {
    font-size: 14px;
    color: var(--maroon-200);
    margin: 0;
}

.contact-detail-value {
    font-weight: 700;
    margin: 0;
}

.contact-form {
    padding: 48px;
    display: flex;
    flex-direction: column;
    gap: 24px;
}

.form-row {
    display: grid;
    grid-template-columns: 1fr;
    gap: 24px;
}

.form-label {
    display: block;
    font-size: 14px;
    font-weight: 500;
    color: var(--zinc-700);
    margin-bottom: 8px;
}

.form-input {
    width: 100%;
    padding: 12px 16px;
    border-radius: 12px;
    border: 1px solid var(--zinc-200);
    font: inherit;
    outline: none;
    transition: all 0.2s;
}

.form-input:focus {
    border-color: transparent;
    box-shadow: 0 0 0 2px var(--maroon);
}

.form-submit {
    width: 100%;
    background: var(--black);
    color: var(--white);
    border: none;
    padding: 16px;
    border-radius: 12px;
    font-weight: 700;
    transition: background 0.2s;
}

.form-submit:hover {
    background: var(--zinc-800);
}

/* Footer */
.site-footer {
    background: var(--black);
    color: var(--white);
    padding: 48px 0;
    border-top: 1px solid var(--zinc-900);
    text-align: center;
}

.footer-brand {
    display: flex;
    align-items: center;
    justify-content: center;
    gap: 8px;
    margin-bottom: 24px;
    color: var(--maroon);
}

.footer-brand .brand-wordmark {
    font-size: 20px;
    color: var(--white);
}

.footer-copyright {
    color: var(--zinc-500);
    font-size: 14px;
    margin: 0 0 32px;
}

.footer-links {
    display: flex;
    justify-content: center;
    gap: 24px;
}

.footer-link {
    color: var(--zinc-500);
    transition: color 0.2s;
}

.footer-link:hover {
    color: var(--white);
}

/* Wide viewports */
@media (min-width: 768px) {
    .nav-links {
        display: flex;
    }

    .menu-toggle,
    .mobile-nav {
        display: none;
    }

    .hero-title {
        font-size: 72px;
    }

    .section-title {
        font-size: 36px;
    }

    .values-grid {
        grid-template-columns: repeat(3, 1fr);
    }

    .about-badge {
        display: block;
    }

    .gallery-grid {
        grid-template-columns: repeat(4, 1fr);
    }

    .form-row {
        grid-template-columns: 1fr 1fr;
    }
}

@media (min-width: 1024px) {
    .container {
        padding: 0 32px;
    }

    .about-grid,
    .contact-card {
        grid-template-columns: 1fr 1fr;
    }
}
"#;

/// Menu behaviour for the pre-rendered page, where no WASM runs.
///
/// Mirrors [`crate::MenuState`]: the toggle opens a panel built from the
/// persistent links, and the toggle or any panel link closes it. Panel links
/// keep their default navigation.
pub const MENU_SCRIPT: &str = r#"
(function () {
  var nav = document.querySelector('nav.site-nav');
  if (!nav) { return; }
  var toggle = nav.querySelector('.menu-toggle');
  var links = nav.querySelectorAll('.nav-links a');
  var panel = null;

  function setState(state) {
    toggle.setAttribute('aria-expanded', state === 'expanded' ? 'true' : 'false');
    toggle.setAttribute('data-state', state);
  }

  function collapse() {
    if (panel) {
      panel.remove();
      panel = null;
    }
    setState('collapsed');
  }

  function expand() {
    panel = document.createElement('div');
    panel.className = 'mobile-nav';
    panel.setAttribute('data-role', 'mobile-nav');
    links.forEach(function (link) {
      var item = document.createElement('a');
      item.href = link.getAttribute('href');
      item.className = 'mobile-nav-link';
      item.textContent = link.textContent;
      item.addEventListener('click', collapse);
      panel.appendChild(item);
    });
    nav.appendChild(panel);
    setState('expanded');
  }

  toggle.addEventListener('click', function () {
    if (panel) { collapse(); } else { expand(); }
  });
})();
"#;
