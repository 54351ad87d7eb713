use crate::chrome::*;
use crate::ids::new_id;

const BRAND: &str = "SiteBuilder";

fn nav_link(label: &str, href: &str, is_button: bool) -> NavLink {
    NavLink {
        id: new_id(),
        label: label.to_string(),
        href: href.to_string(),
        is_button,
    }
}

fn footer_link(label: &str, href: &str) -> FooterLink {
    FooterLink {
        id: new_id(),
        label: label.to_string(),
        href: href.to_string(),
    }
}

fn column(title: &str, links: &[(&str, &str)]) -> FooterColumn {
    FooterColumn {
        id: new_id(),
        title: title.to_string(),
        links: links
            .iter()
            .map(|(label, href)| footer_link(label, href))
            .collect(),
    }
}

fn social(platform: SocialPlatform) -> SocialLink {
    SocialLink {
        id: new_id(),
        platform,
        href: "#".to_string(),
    }
}

pub fn default_navbar() -> NavbarConfig {
    NavbarConfig {
        id: new_id(),
        style: NavbarStyle::Minimal,
        logo: Logo::text(BRAND),
        links: vec![
            nav_link("Home", "/", false),
            nav_link("Features", "/features", false),
            nav_link("Services", "/services", false),
            nav_link("Pricing", "/pricing", false),
            nav_link("Contact", "/contact", false),
            nav_link("Get Started", "/start", true),
        ],
        styles: NavbarStyles {
            background_color: Some("transparent".to_string()),
            text_color: Some("#ffffff".to_string()),
            sticky: Some(true),
        },
    }
}

pub fn default_footer() -> FooterConfig {
    FooterConfig {
        id: new_id(),
        style: FooterStyle::Columns,
        logo: Logo::text(BRAND),
        columns: vec![
            column(
                "Product",
                &[
                    ("Features", "/features"),
                    ("Pricing", "/pricing"),
                    ("Templates", "/templates"),
                ],
            ),
            column(
                "Company",
                &[("About", "/about"), ("Blog", "/blog"), ("Careers", "/careers")],
            ),
            column(
                "Support",
                &[
                    ("Help Center", "/help"),
                    ("Contact", "/contact"),
                    ("Status", "/status"),
                ],
            ),
        ],
        social_links: vec![
            social(SocialPlatform::Twitter),
            social(SocialPlatform::Facebook),
            social(SocialPlatform::Instagram),
            social(SocialPlatform::Linkedin),
        ],
        copyright: format!("© 2024 {}. All rights reserved.", BRAND),
        styles: FooterStyles {
            background_color: Some("#0f172a".to_string()),
            text_color: Some("#94a3b8".to_string()),
        },
    }
}
