//! Default section factories.
//!
//! Every call builds a fresh value: new section ID, new IDs on every list item.

use crate::content::*;
use crate::ids::new_id;
use crate::section::{Section, SectionStyles, SectionType};
use serde_json::Map;

fn styles(background_color: &str, padding: &str) -> SectionStyles {
    SectionStyles {
        background_color: Some(background_color.to_string()),
        padding: Some(padding.to_string()),
        ..Default::default()
    }
}

fn s(value: &str) -> String {
    value.to_string()
}

/// Hero section. `gradient` switches on the gradient background, `minimal` is shorter.
pub fn hero_section(variant: &str) -> Section {
    let minimal = variant == "minimal";
    let gradient = variant == "gradient";

    let styles = SectionStyles {
        background_color: Some(s("#0f172a")),
        background_gradient: gradient
            .then(|| s("linear-gradient(135deg, #667eea 0%, #764ba2 50%, #f093fb 100%)")),
        use_gradient: Some(gradient),
        padding: Some(s(if minimal { "60px 0" } else { "120px 0" })),
        min_height: Some(s(if minimal { "60vh" } else { "90vh" })),
        ..Default::default()
    };

    Section::new(SectionContent::Hero(HeroContent {
        headline: s("Build Beautiful Websites Without Code"),
        subheadline: s(
            "Drag, drop, and design your dream website with our intuitive builder. No coding required.",
        ),
        cta_text: s("Get Started Free"),
        cta_secondary_text: s("Watch Demo"),
        image_url: s("https://images.unsplash.com/photo-1460925895917-afdab827c52f?w=800&q=80"),
        video_url: Some(s("https://www.youtube.com/embed/dQw4w9WgXcQ")),
        ..Default::default()
    }))
    .with_variant(variant)
    .with_styles(styles)
}

fn feature(icon: &str, title: &str, description: &str) -> FeatureItem {
    FeatureItem {
        id: new_id(),
        icon: s(icon),
        title: s(title),
        description: s(description),
        ..Default::default()
    }
}

pub fn features_section() -> Section {
    Section::new(SectionContent::Features(FeaturesContent {
        headline: s("Powerful Features"),
        subheadline: s("Everything you need to build stunning websites"),
        features: vec![
            feature(
                "Layers",
                "Drag & Drop Builder",
                "Intuitive drag and drop interface that makes building websites a breeze.",
            ),
            feature(
                "Palette",
                "Beautiful Templates",
                "Start with professionally designed templates and customize them to your needs.",
            ),
            feature(
                "Smartphone",
                "Fully Responsive",
                "Your website looks perfect on any device, from desktop to mobile.",
            ),
            feature(
                "Zap",
                "Lightning Fast",
                "Optimized for speed to ensure your visitors have the best experience.",
            ),
            feature(
                "Shield",
                "Secure & Reliable",
                "Enterprise-grade security to keep your website and data safe.",
            ),
            feature(
                "BarChart",
                "Analytics Built-in",
                "Track your website performance with integrated analytics tools.",
            ),
        ],
        ..Default::default()
    }))
    .with_styles(styles("#ffffff", "100px 0"))
}

fn service(image_url: &str, title: &str, description: &str) -> ServiceItem {
    ServiceItem {
        id: new_id(),
        image_url: s(image_url),
        title: s(title),
        description: s(description),
        link: s("#"),
        ..Default::default()
    }
}

pub fn services_section() -> Section {
    Section::new(SectionContent::Services(ServicesContent {
        headline: s("Our Services"),
        subheadline: s("Comprehensive solutions for your digital presence"),
        services: vec![
            service(
                "https://images.unsplash.com/photo-1551434678-e076c223a692?w=600&q=80",
                "Web Design",
                "Beautiful, custom designs that capture your brand identity and engage your audience.",
            ),
            service(
                "https://images.unsplash.com/photo-1460925895917-afdab827c52f?w=600&q=80",
                "Development",
                "Robust, scalable web applications built with modern technologies.",
            ),
            service(
                "https://images.unsplash.com/photo-1553484771-371a605b060b?w=600&q=80",
                "SEO Optimization",
                "Improve your search rankings and drive organic traffic to your website.",
            ),
        ],
        ..Default::default()
    }))
    .with_styles(styles("#f8fafc", "100px 0"))
}

/// Call-to-action section. `banner` uses a horizontal gradient, `floating` is compact.
pub fn cta_section(variant: &str) -> Section {
    let gradient = if variant == "banner" {
        "linear-gradient(90deg, #3b82f6 0%, #8b5cf6 100%)"
    } else {
        "linear-gradient(135deg, #3b82f6 0%, #8b5cf6 100%)"
    };

    Section::new(SectionContent::Cta(CtaContent {
        headline: s("Ready to Get Started?"),
        subheadline: s("Join thousands of creators who are already building amazing websites."),
        cta_text: s("Start Building Now"),
        cta_secondary_text: s("Contact Sales"),
        ..Default::default()
    }))
    .with_variant(variant)
    .with_styles(SectionStyles {
        background_gradient: Some(s(gradient)),
        padding: Some(s(if variant == "floating" { "40px 0" } else { "80px 0" })),
        ..Default::default()
    })
}

fn testimonial(quote: &str, name: &str, role: &str, avatar: &str) -> Testimonial {
    Testimonial {
        id: new_id(),
        quote: s(quote),
        name: s(name),
        role: s(role),
        avatar: s(avatar),
        rating: 5,
        ..Default::default()
    }
}

pub fn testimonials_section() -> Section {
    Section::new(SectionContent::Testimonials(TestimonialsContent {
        headline: s("What Our Clients Say"),
        subheadline: s("Trusted by thousands of happy customers worldwide"),
        testimonials: vec![
            testimonial(
                "This builder transformed how we create websites. Incredibly intuitive and powerful!",
                "Sarah Johnson",
                "CEO, TechStart",
                "https://images.unsplash.com/photo-1494790108377-be9c29b29330?w=150&q=80",
            ),
            testimonial(
                "The best investment we made for our design workflow. Highly recommended!",
                "Michael Chen",
                "Design Lead, Creative Co",
                "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=150&q=80",
            ),
            testimonial(
                "Finally a tool that lets me build professional sites without writing code.",
                "Emily Davis",
                "Freelancer",
                "https://images.unsplash.com/photo-1438761681033-6461ffad8d80?w=150&q=80",
            ),
        ],
        ..Default::default()
    }))
    .with_styles(styles("#ffffff", "100px 0"))
}

fn plan(
    name: &str,
    description: &str,
    price: u64,
    features: &[&str],
    cta_text: &str,
    popular: bool,
) -> PricingPlan {
    PricingPlan {
        id: new_id(),
        name: s(name),
        description: s(description),
        price: price.into(),
        features: features.iter().map(|f| s(f)).collect(),
        cta_text: s(cta_text),
        popular,
        ..Default::default()
    }
}

pub fn pricing_section() -> Section {
    Section::new(SectionContent::Pricing(PricingContent {
        headline: s("Simple, Transparent Pricing"),
        subheadline: s("Choose the plan that works best for you"),
        plans: vec![
            plan(
                "Starter",
                "Perfect for individuals",
                9,
                &["5 Projects", "Basic Templates", "Email Support", "Custom Domain"],
                "Get Started",
                false,
            ),
            plan(
                "Pro",
                "Best for growing teams",
                29,
                &[
                    "Unlimited Projects",
                    "Premium Templates",
                    "Priority Support",
                    "Custom Domain",
                    "Analytics",
                    "Team Collaboration",
                ],
                "Get Started",
                true,
            ),
            plan(
                "Enterprise",
                "For large organizations",
                99,
                &[
                    "Everything in Pro",
                    "Dedicated Support",
                    "SSO & Security",
                    "API Access",
                    "White Label",
                ],
                "Contact Sales",
                false,
            ),
        ],
        ..Default::default()
    }))
    .with_styles(styles("#f8fafc", "100px 0"))
}

fn image(url: &str, title: &str, category: &str) -> GalleryImage {
    GalleryImage {
        id: new_id(),
        url: s(url),
        title: s(title),
        category: s(category),
        ..Default::default()
    }
}

fn portfolio_images() -> Vec<GalleryImage> {
    vec![
        image(
            "https://images.unsplash.com/photo-1460925895917-afdab827c52f?w=600&q=80",
            "Web App Dashboard",
            "Web Design",
        ),
        image(
            "https://images.unsplash.com/photo-1551434678-e076c223a692?w=600&q=80",
            "Team Collaboration",
            "Branding",
        ),
        image(
            "https://images.unsplash.com/photo-1553484771-371a605b060b?w=600&q=80",
            "Marketing Campaign",
            "Marketing",
        ),
        image(
            "https://images.unsplash.com/photo-1499951360447-b19be8fe80f5?w=600&q=80",
            "E-commerce Store",
            "Web Design",
        ),
        image(
            "https://images.unsplash.com/photo-1522542550221-31fd8575f44a?w=600&q=80",
            "Mobile App",
            "UI/UX",
        ),
        image(
            "https://images.unsplash.com/photo-1559136555-9303baea8ebd?w=600&q=80",
            "Brand Identity",
            "Branding",
        ),
    ]
}

pub fn gallery_section() -> Section {
    Section::new(SectionContent::Gallery(GalleryContent {
        headline: s("Our Portfolio"),
        subheadline: s("A showcase of our finest work"),
        images: portfolio_images(),
        ..Default::default()
    }))
    .with_styles(styles("#ffffff", "100px 0"))
}

/// Gallery laid out as a masonry wall
pub fn masonry_gallery_section() -> Section {
    Section::new(SectionContent::Gallery(GalleryContent {
        headline: s("Featured Work"),
        subheadline: s("Projects of every shape and size"),
        images: portfolio_images(),
        ..Default::default()
    }))
    .with_variant("masonry")
    .with_name("Gallery Masonry")
    .with_styles(styles("#ffffff", "100px 0"))
}

pub fn contact_section() -> Section {
    Section::new(SectionContent::Contact(ContactContent {
        headline: s("Get In Touch"),
        subheadline: s("We'd love to hear from you. Send us a message!"),
        email: s("hello@example.com"),
        phone: s("+1 (555) 123-4567"),
        address: s("123 Business Street, City, Country"),
        ..Default::default()
    }))
    .with_styles(styles("#f8fafc", "100px 0"))
}

fn stat(value: &str, suffix: &str, label: &str) -> StatItem {
    StatItem {
        id: new_id(),
        value: s(value),
        suffix: s(suffix),
        label: s(label),
        ..Default::default()
    }
}

pub fn stats_section() -> Section {
    Section::new(SectionContent::Stats(StatsContent {
        stats: vec![
            stat("10K", "+", "Active Users"),
            stat("50M", "+", "Pages Built"),
            stat("99.9", "%", "Uptime"),
            stat("24", "/7", "Support"),
        ],
        ..Default::default()
    }))
    .with_styles(SectionStyles {
        background_gradient: Some(s("linear-gradient(135deg, #0f172a 0%, #1e293b 100%)")),
        padding: Some(s("80px 0")),
        ..Default::default()
    })
}

fn member(name: &str, role: &str, avatar: &str, platforms: &[&str]) -> TeamMember {
    TeamMember {
        id: new_id(),
        name: s(name),
        role: s(role),
        avatar: s(avatar),
        social: platforms
            .iter()
            .map(|platform| MemberSocial {
                platform: s(platform),
                url: s("#"),
                ..Default::default()
            })
            .collect(),
        ..Default::default()
    }
}

pub fn team_section() -> Section {
    Section::new(SectionContent::Team(TeamContent {
        headline: s("Meet Our Team"),
        subheadline: s("The talented people behind our success"),
        members: vec![
            member(
                "Alex Thompson",
                "CEO & Founder",
                "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=400&q=80",
                &["linkedin", "twitter"],
            ),
            member(
                "Sarah Miller",
                "Lead Designer",
                "https://images.unsplash.com/photo-1494790108377-be9c29b29330?w=400&q=80",
                &["linkedin", "twitter"],
            ),
            member(
                "James Wilson",
                "Tech Lead",
                "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?w=400&q=80",
                &["linkedin", "github"],
            ),
            member(
                "Emma Davis",
                "Product Manager",
                "https://images.unsplash.com/photo-1438761681033-6461ffad8d80?w=400&q=80",
                &["linkedin", "twitter"],
            ),
        ],
        ..Default::default()
    }))
    .with_styles(styles("#ffffff", "100px 0"))
}

fn faq(question: &str, answer: &str) -> FaqItem {
    FaqItem {
        id: new_id(),
        question: s(question),
        answer: s(answer),
        ..Default::default()
    }
}

pub fn faq_section() -> Section {
    Section::new(SectionContent::Faq(FaqContent {
        headline: s("Frequently Asked Questions"),
        subheadline: s("Everything you need to know about our product"),
        faqs: vec![
            faq(
                "How do I get started?",
                "Simply sign up for a free account and start building your first website in minutes. No credit card required.",
            ),
            faq(
                "Can I use my own domain?",
                "Yes! You can connect your custom domain to any project. We also provide free subdomains.",
            ),
            faq(
                "Is there a free plan?",
                "We offer a generous free plan with basic features. Upgrade anytime to unlock premium features.",
            ),
            faq(
                "Do you offer refunds?",
                "Yes, we offer a 30-day money-back guarantee on all paid plans. No questions asked.",
            ),
        ],
        ..Default::default()
    }))
    .with_styles(styles("#f8fafc", "100px 0"))
}

fn logo(name: &str, url: &str) -> BrandLogo {
    BrandLogo {
        id: new_id(),
        name: s(name),
        url: s(url),
        ..Default::default()
    }
}

pub fn logo_cloud_section() -> Section {
    Section::new(SectionContent::LogoCloud(LogoCloudContent {
        headline: s("Trusted by leading companies"),
        logos: vec![
            logo(
                "Google",
                "https://upload.wikimedia.org/wikipedia/commons/2/2f/Google_2015_logo.svg",
            ),
            logo(
                "Microsoft",
                "https://upload.wikimedia.org/wikipedia/commons/9/96/Microsoft_logo_%282012%29.svg",
            ),
            logo(
                "Amazon",
                "https://upload.wikimedia.org/wikipedia/commons/a/a9/Amazon_logo.svg",
            ),
            logo(
                "Meta",
                "https://upload.wikimedia.org/wikipedia/commons/7/7b/Meta_Platforms_Inc._logo.svg",
            ),
            logo(
                "Apple",
                "https://upload.wikimedia.org/wikipedia/commons/f/fa/Apple_logo_black.svg",
            ),
        ],
        ..Default::default()
    }))
    .with_styles(styles("#ffffff", "60px 0"))
}

fn post(image_url: &str, title: &str, excerpt: &str, author: &str, date: &str) -> BlogPost {
    BlogPost {
        id: new_id(),
        image_url: s(image_url),
        title: s(title),
        excerpt: s(excerpt),
        author: s(author),
        date: s(date),
        ..Default::default()
    }
}

pub fn blog_list_section() -> Section {
    Section::new(SectionContent::Blog(BlogContent {
        headline: s("Latest Articles"),
        subheadline: s("Tips, stories and product news from our team"),
        posts: vec![
            post(
                "https://images.unsplash.com/photo-1460925895917-afdab827c52f?w=600&q=80",
                "Designing a Landing Page That Converts",
                "A practical walkthrough of the sections every landing page needs.",
                "Sarah Miller",
                "January 12, 2024",
            ),
            post(
                "https://images.unsplash.com/photo-1551434678-e076c223a692?w=600&q=80",
                "Five Layout Patterns Worth Stealing",
                "Grids, splits and cards: when to reach for each one.",
                "James Wilson",
                "January 5, 2024",
            ),
            post(
                "https://images.unsplash.com/photo-1553484771-371a605b060b?w=600&q=80",
                "Shipping Faster With Reusable Sections",
                "How a shared section library keeps a growing site consistent.",
                "Emma Davis",
                "December 18, 2023",
            ),
        ],
        ..Default::default()
    }))
    .with_name("Blog List")
    .with_styles(styles("#ffffff", "100px 0"))
}

/// Long-form text section (legal pages and the like)
pub fn content_section(title: &str, blocks: Vec<ArticleBlock>) -> Section {
    Section::new(SectionContent::Content(ArticleContent {
        title: s(title),
        last_updated: s("Last updated: January 1, 2024"),
        sections: blocks,
        ..Default::default()
    }))
    .with_styles(SectionStyles {
        background_color: Some(s("#ffffff")),
        padding: Some(s("80px 0")),
        heading_color: Some(s("#0f172a")),
        paragraph_color: Some(s("#475569")),
        ..Default::default()
    })
}

/// Default section for a type, used by "add section" in the editor
pub fn create_section(section_type: SectionType) -> Section {
    match section_type {
        SectionType::Hero => hero_section("split"),
        SectionType::Features => features_section(),
        SectionType::Services => services_section(),
        SectionType::Cta => cta_section("simple"),
        SectionType::Testimonials => testimonials_section(),
        SectionType::Gallery => gallery_section(),
        SectionType::Pricing => pricing_section(),
        SectionType::Contact => contact_section(),
        SectionType::Stats => stats_section(),
        SectionType::Team => team_section(),
        SectionType::Faq => faq_section(),
        SectionType::LogoCloud => logo_cloud_section(),
        SectionType::Blog => blog_list_section(),
        SectionType::Content => content_section("Content", Vec::new()),
        SectionType::Custom => Section::new(SectionContent::Custom(Map::new())),
    }
}
