//! # Navbar and Footer
//!
//! Site chrome stored on each page. Links are matched by `href` when a page
//! is renamed, so every link to a slug can carry that page's current name.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavbarStyle {
    #[default]
    Minimal,
    Centered,
    Split,
    Transparent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FooterStyle {
    Simple,
    #[default]
    Columns,
    Centered,
    Minimal,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Logo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl Logo {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            image_url: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavLink {
    pub id: String,
    pub label: String,
    pub href: String,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_button: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavbarStyles {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sticky: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavbarConfig {
    pub id: String,
    #[serde(default)]
    pub style: NavbarStyle,
    #[serde(default)]
    pub logo: Logo,
    #[serde(default)]
    pub links: Vec<NavLink>,
    #[serde(default)]
    pub styles: NavbarStyles,
}

impl NavbarConfig {
    /// Set the label of every link pointing at `href`; returns how many changed
    pub fn relabel_links(&mut self, href: &str, label: &str) -> usize {
        let mut changed = 0;
        for link in self.links.iter_mut().filter(|l| l.href == href) {
            if link.label != label {
                link.label = label.to_string();
                changed += 1;
            }
        }
        changed
    }
}

/// Shallow update for a navbar; the navbar ID is fixed
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavbarPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<NavbarStyle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<Logo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<Vec<NavLink>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub styles: Option<NavbarStyles>,
}

impl NavbarPatch {
    pub fn apply_to(self, navbar: &mut NavbarConfig) {
        if let Some(style) = self.style {
            navbar.style = style;
        }
        if let Some(logo) = self.logo {
            navbar.logo = logo;
        }
        if let Some(links) = self.links {
            navbar.links = links;
        }
        if let Some(styles) = self.styles {
            navbar.styles = styles;
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FooterLink {
    pub id: String,
    pub label: String,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FooterColumn {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub links: Vec<FooterLink>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialPlatform {
    Facebook,
    Twitter,
    Instagram,
    Linkedin,
    Youtube,
    Github,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialLink {
    pub id: String,
    pub platform: SocialPlatform,
    pub href: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FooterStyles {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_color: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FooterConfig {
    pub id: String,
    #[serde(default)]
    pub style: FooterStyle,
    #[serde(default)]
    pub logo: Logo,
    #[serde(default)]
    pub columns: Vec<FooterColumn>,
    #[serde(default)]
    pub social_links: Vec<SocialLink>,
    #[serde(default)]
    pub copyright: String,
    #[serde(default)]
    pub styles: FooterStyles,
}

impl FooterConfig {
    /// Set the label of every column link pointing at `href`; returns how many changed
    pub fn relabel_links(&mut self, href: &str, label: &str) -> usize {
        let mut changed = 0;
        for column in &mut self.columns {
            for link in column.links.iter_mut().filter(|l| l.href == href) {
                if link.label != label {
                    link.label = label.to_string();
                    changed += 1;
                }
            }
        }
        changed
    }
}

/// Shallow update for a footer; the footer ID is fixed
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FooterPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<FooterStyle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<Logo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub columns: Option<Vec<FooterColumn>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub social_links: Option<Vec<SocialLink>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub copyright: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub styles: Option<FooterStyles>,
}

impl FooterPatch {
    pub fn apply_to(self, footer: &mut FooterConfig) {
        if let Some(style) = self.style {
            footer.style = style;
        }
        if let Some(logo) = self.logo {
            footer.logo = logo;
        }
        if let Some(columns) = self.columns {
            footer.columns = columns;
        }
        if let Some(social_links) = self.social_links {
            footer.social_links = social_links;
        }
        if let Some(copyright) = self.copyright {
            footer.copyright = copyright;
        }
        if let Some(styles) = self.styles {
            footer.styles = styles;
        }
    }
}
