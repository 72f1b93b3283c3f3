//! Page header: logo and social links.

use leptos::prelude::*;

/// A social profile linked from the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
    /// Short glyph shown in place of a brand icon.
    pub glyph: &'static str,
}

pub const SOCIAL_LINKS: [SocialLink; 3] = [
    SocialLink {
        label: "Instagram",
        href: "https://instagram.com/mimonihq",
        glyph: "IG",
    },
    SocialLink {
        label: "X",
        href: "https://x.com/mimonihq",
        glyph: "X",
    },
    SocialLink {
        label: "LinkedIn",
        href: "https://www.linkedin.com/company/mimonihq",
        glyph: "in",
    },
];

#[component]
pub fn SiteHeader() -> impl IntoView {
    view! {
        <header class="site-header">
            <a href="/" class="logo" aria-label="Mimoni home">"mimoni"</a>
            <nav class="social-links">
                {SOCIAL_LINKS
                    .iter()
                    .map(|link| {
                        view! {
                            <a
                                href=link.href
                                target="_blank"
                                rel="noopener noreferrer"
                                aria-label=link.label
                                class="social-link"
                            >
                                {link.glyph}
                            </a>
                        }
                    })
                    .collect_view()}
            </nav>
        </header>
    }
}
