//! Page factories for the seeded site.

use super::chrome::{default_footer, default_navbar};
use super::sections::*;
use crate::content::ArticleBlock;
use crate::ids::new_id;
use crate::page::{GlobalStyles, Page, PageMeta};
use crate::section::Section;

fn site_styles() -> GlobalStyles {
    GlobalStyles {
        font_family: Some("Inter, system-ui, sans-serif".to_string()),
        primary_color: Some("#3b82f6".to_string()),
        secondary_color: Some("#8b5cf6".to_string()),
        background_color: Some("#ffffff".to_string()),
    }
}

/// Page with the default chrome around `sections`
pub fn page(name: &str, slug: &str, sections: Vec<Section>) -> Page {
    Page {
        id: new_id(),
        name: name.to_string(),
        slug: slug.to_string(),
        meta: PageMeta {
            title: format!("{} - My Website", name),
            description: format!("{} page", name),
            favicon: None,
        },
        navbar: default_navbar(),
        sections,
        footer: default_footer(),
        global_styles: site_styles(),
    }
}

pub fn home_page() -> Page {
    let mut home = page(
        "Home",
        "/",
        vec![
            hero_section("split"),
            features_section(),
            services_section(),
            cta_section("simple"),
        ],
    );
    home.meta.title = "My Website - Built with SiteBuilder".to_string();
    home.meta.description =
        "A beautiful website created with the no-code website builder.".to_string();
    home
}

pub fn features_page() -> Page {
    page(
        "Features",
        "/features",
        vec![hero_section("split"), features_section(), cta_section("simple")],
    )
}

pub fn services_page() -> Page {
    page(
        "Services",
        "/services",
        vec![hero_section("split"), services_section(), cta_section("simple")],
    )
}

pub fn pricing_page() -> Page {
    page(
        "Pricing",
        "/pricing",
        vec![hero_section("split"), pricing_section(), cta_section("simple")],
    )
}

pub fn contact_page() -> Page {
    page(
        "Contact",
        "/contact",
        vec![hero_section("split"), contact_section(), cta_section("simple")],
    )
}

pub fn start_page() -> Page {
    page(
        "Get Started",
        "/start",
        vec![hero_section("split"), cta_section("simple")],
    )
}

pub fn templates_page() -> Page {
    page(
        "Templates",
        "/templates",
        vec![hero_section("split"), gallery_section(), cta_section("simple")],
    )
}

pub fn about_page() -> Page {
    page(
        "About",
        "/about",
        vec![hero_section("split"), team_section(), cta_section("simple")],
    )
}

pub fn blog_page() -> Page {
    page("Blog", "/blog", vec![hero_section("split"), blog_list_section()])
}

pub fn careers_page() -> Page {
    page("Careers", "/careers", vec![hero_section("split")])
}

pub fn help_page() -> Page {
    page("Help", "/help", vec![faq_section(), contact_section()])
}

pub fn status_page() -> Page {
    page("Status", "/status", vec![stats_section()])
}

fn block(heading: &str, content: &str, list_items: &[&str]) -> ArticleBlock {
    ArticleBlock {
        id: new_id(),
        heading: heading.to_string(),
        content: content.to_string(),
        list_items: list_items.iter().map(|item| item.to_string()).collect(),
        ..Default::default()
    }
}

pub fn privacy_page() -> Page {
    let blocks = vec![
        block(
            "Information We Collect",
            "We collect information that you provide directly to us, such as when you create an account, make a purchase, or contact us for support. This may include your name, email address, phone number, and payment information.",
            &[
                "Personal information you provide when creating an account",
                "Payment and billing information",
                "Communications with our support team",
                "Usage data and analytics",
            ],
        ),
        block(
            "How We Use Your Information",
            "We use the information we collect to provide, maintain, and improve our services, process transactions, send you technical notices and support messages, and respond to your comments and questions.",
            &[
                "To provide and maintain our services",
                "To process your transactions",
                "To send you updates and support messages",
                "To improve our services and user experience",
            ],
        ),
        block(
            "Information Sharing",
            "We do not sell, trade, or rent your personal information to third parties. We may share your information only in the following circumstances:",
            &[
                "With your consent",
                "To comply with legal obligations",
                "To protect our rights and safety",
                "With service providers who assist us in operating our services",
            ],
        ),
        block(
            "Data Security",
            "We implement appropriate technical and organizational security measures to protect your personal information against unauthorized access, alteration, disclosure, or destruction.",
            &[],
        ),
        block(
            "Your Rights",
            "You have the right to access, update, or delete your personal information at any time. You can also opt-out of certain communications from us.",
            &[],
        ),
        block(
            "Contact Us",
            "If you have any questions about this Privacy Policy, please contact us at privacy@example.com.",
            &[],
        ),
    ];

    page(
        "Privacy Policy",
        "/privacy",
        vec![content_section("Privacy Policy", blocks)],
    )
}

pub fn terms_page() -> Page {
    let blocks = vec![
        block(
            "Acceptance of Terms",
            "By accessing and using this website, you accept and agree to be bound by the terms and provision of this agreement. If you do not agree to these terms, please do not use our services.",
            &[],
        ),
        block(
            "Use License",
            "Permission is granted to temporarily access the materials on our website for personal, non-commercial transitory viewing only. This is the grant of a license, not a transfer of title, and under this license you may not:",
            &[
                "Modify or copy the materials",
                "Use the materials for any commercial purpose",
                "Attempt to reverse engineer any software",
                "Remove any copyright or proprietary notations",
            ],
        ),
        block(
            "User Accounts",
            "You are responsible for maintaining the confidentiality of your account and password. You agree to accept responsibility for all activities that occur under your account.",
            &[
                "You must provide accurate and complete information",
                "You are responsible for maintaining account security",
                "You must notify us immediately of any unauthorized use",
                "We reserve the right to suspend or terminate accounts",
            ],
        ),
        block(
            "Prohibited Uses",
            "You may not use our services:",
            &[
                "In any way that violates any applicable law",
                "To transmit any malicious code or viruses",
                "To collect or harvest information about other users",
                "To impersonate any person or entity",
            ],
        ),
        block(
            "Intellectual Property",
            "All content, features, and functionality of our services are owned by us and are protected by international copyright, trademark, and other intellectual property laws.",
            &[],
        ),
        block(
            "Limitation of Liability",
            "In no event shall we be liable for any damages arising out of the use or inability to use our services, even if we have been advised of the possibility of such damages.",
            &[],
        ),
        block(
            "Changes to Terms",
            "We reserve the right to modify these terms at any time. Your continued use of our services after any changes constitutes acceptance of the new terms.",
            &[],
        ),
        block(
            "Contact Information",
            "If you have any questions about these Terms of Service, please contact us at legal@example.com.",
            &[],
        ),
    ];

    page(
        "Terms of Service",
        "/terms",
        vec![content_section("Terms of Service", blocks)],
    )
}
