//! # Section Content
//!
//! Each section type owns a distinct content shape. Rather than an open
//! key/value bag, content is a tagged union whose variant *is* the section
//! type, so a hero can never carry pricing plans and vice versa.
//!
//! On the wire the union is split across two keys of the section object
//! (`"type"` and `"content"`); [`SectionContent::from_value`] and
//! [`SectionContent::to_value`] convert between the two forms.
//!
//! Every struct defaults missing fields, so sparse JSON loads cleanly, and
//! keeps keys it has no field for in `extra` so they survive a round trip.

use crate::ids::new_id;
use crate::section::SectionType;
use crate::SchemaError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HeroContent {
    pub headline: String,
    pub subheadline: String,
    pub cta_text: String,
    pub cta_secondary_text: String,
    pub image_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FeatureItem {
    pub id: String,
    pub icon: String,
    pub title: String,
    pub description: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FeaturesContent {
    pub headline: String,
    pub subheadline: String,
    pub features: Vec<FeatureItem>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ServiceItem {
    pub id: String,
    pub image_url: String,
    pub title: String,
    pub description: String,
    pub link: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ServicesContent {
    pub headline: String,
    pub subheadline: String,
    pub services: Vec<ServiceItem>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CtaContent {
    pub headline: String,
    pub subheadline: String,
    pub cta_text: String,
    pub cta_secondary_text: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Testimonial {
    pub id: String,
    pub quote: String,
    pub name: String,
    pub role: String,
    pub avatar: String,
    pub rating: u8,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TestimonialsContent {
    pub headline: String,
    pub subheadline: String,
    pub testimonials: Vec<Testimonial>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GalleryImage {
    pub id: String,
    pub url: String,
    pub title: String,
    pub category: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GalleryContent {
    pub headline: String,
    pub subheadline: String,
    pub images: Vec<GalleryImage>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A plan price: a number, or the raw text typed into the price field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Price {
    Number(serde_json::Number),
    Text(String),
}

impl Price {
    /// Numeric value, parsing text prices when they hold a number
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Price::Number(n) => n.as_f64(),
            Price::Text(text) => text.trim().parse().ok(),
        }
    }
}

impl Default for Price {
    fn default() -> Self {
        Price::Text(String::new())
    }
}

impl From<u64> for Price {
    fn from(value: u64) -> Self {
        Price::Number(value.into())
    }
}

impl From<&str> for Price {
    fn from(value: &str) -> Self {
        Price::Text(value.to_string())
    }
}

impl std::fmt::Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Price::Number(n) => write!(f, "{}", n),
            Price::Text(text) => f.write_str(text),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PricingPlan {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: Price,
    pub features: Vec<String>,
    pub cta_text: String,
    pub popular: bool,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PricingContent {
    pub headline: String,
    pub subheadline: String,
    pub plans: Vec<PricingPlan>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContactContent {
    pub headline: String,
    pub subheadline: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub map_embed: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StatItem {
    pub id: String,
    pub value: String,
    pub suffix: String,
    pub label: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StatsContent {
    pub stats: Vec<StatItem>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MemberSocial {
    pub platform: String,
    pub url: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TeamMember {
    pub id: String,
    pub name: String,
    pub role: String,
    pub avatar: String,
    pub social: Vec<MemberSocial>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TeamContent {
    pub headline: String,
    pub subheadline: String,
    pub members: Vec<TeamMember>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FaqItem {
    pub id: String,
    pub question: String,
    pub answer: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FaqContent {
    pub headline: String,
    pub subheadline: String,
    pub faqs: Vec<FaqItem>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BrandLogo {
    pub id: String,
    pub name: String,
    pub url: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LogoCloudContent {
    pub headline: String,
    pub logos: Vec<BrandLogo>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BlogPost {
    pub id: String,
    pub image_url: String,
    pub title: String,
    pub excerpt: String,
    pub author: String,
    pub date: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BlogContent {
    pub headline: String,
    pub subheadline: String,
    pub posts: Vec<BlogPost>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One heading + body block of a long-form page (privacy policy, terms, ...)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ArticleBlock {
    pub id: String,
    pub heading: String,
    pub content: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub list_items: Vec<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ArticleContent {
    pub title: String,
    pub last_updated: String,
    pub sections: Vec<ArticleBlock>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Content of a section, discriminated by section type
#[derive(Debug, Clone, PartialEq)]
pub enum SectionContent {
    Hero(HeroContent),
    Features(FeaturesContent),
    Services(ServicesContent),
    Cta(CtaContent),
    Testimonials(TestimonialsContent),
    Gallery(GalleryContent),
    Pricing(PricingContent),
    Contact(ContactContent),
    Stats(StatsContent),
    Team(TeamContent),
    Faq(FaqContent),
    LogoCloud(LogoCloudContent),
    Blog(BlogContent),
    Content(ArticleContent),
    /// Free-form content for user-defined section types
    Custom(Map<String, Value>),
}

impl SectionContent {
    pub fn section_type(&self) -> SectionType {
        match self {
            SectionContent::Hero(_) => SectionType::Hero,
            SectionContent::Features(_) => SectionType::Features,
            SectionContent::Services(_) => SectionType::Services,
            SectionContent::Cta(_) => SectionType::Cta,
            SectionContent::Testimonials(_) => SectionType::Testimonials,
            SectionContent::Gallery(_) => SectionType::Gallery,
            SectionContent::Pricing(_) => SectionType::Pricing,
            SectionContent::Contact(_) => SectionType::Contact,
            SectionContent::Stats(_) => SectionType::Stats,
            SectionContent::Team(_) => SectionType::Team,
            SectionContent::Faq(_) => SectionType::Faq,
            SectionContent::LogoCloud(_) => SectionType::LogoCloud,
            SectionContent::Blog(_) => SectionType::Blog,
            SectionContent::Content(_) => SectionType::Content,
            SectionContent::Custom(_) => SectionType::Custom,
        }
    }

    /// Empty content of the requested type
    pub fn empty(section_type: SectionType) -> SectionContent {
        match section_type {
            SectionType::Hero => SectionContent::Hero(HeroContent::default()),
            SectionType::Features => SectionContent::Features(FeaturesContent::default()),
            SectionType::Services => SectionContent::Services(ServicesContent::default()),
            SectionType::Cta => SectionContent::Cta(CtaContent::default()),
            SectionType::Testimonials => {
                SectionContent::Testimonials(TestimonialsContent::default())
            }
            SectionType::Gallery => SectionContent::Gallery(GalleryContent::default()),
            SectionType::Pricing => SectionContent::Pricing(PricingContent::default()),
            SectionType::Contact => SectionContent::Contact(ContactContent::default()),
            SectionType::Stats => SectionContent::Stats(StatsContent::default()),
            SectionType::Team => SectionContent::Team(TeamContent::default()),
            SectionType::Faq => SectionContent::Faq(FaqContent::default()),
            SectionType::LogoCloud => SectionContent::LogoCloud(LogoCloudContent::default()),
            SectionType::Blog => SectionContent::Blog(BlogContent::default()),
            SectionType::Content => SectionContent::Content(ArticleContent::default()),
            SectionType::Custom => SectionContent::Custom(Map::new()),
        }
    }

    /// Decode a JSON object as content of the given type
    pub fn from_value(section_type: SectionType, value: Value) -> Result<SectionContent, SchemaError> {
        let value = match value {
            Value::Null => Value::Object(Map::new()),
            Value::Object(map) => Value::Object(map),
            other => {
                return Err(SchemaError::InvalidContent {
                    section_type,
                    reason: format!("expected an object, found {}", json_kind(&other)),
                })
            }
        };

        let invalid = |e: serde_json::Error| SchemaError::InvalidContent {
            section_type,
            reason: e.to_string(),
        };

        let content = match section_type {
            SectionType::Hero => SectionContent::Hero(serde_json::from_value(value).map_err(invalid)?),
            SectionType::Features => {
                SectionContent::Features(serde_json::from_value(value).map_err(invalid)?)
            }
            SectionType::Services => {
                SectionContent::Services(serde_json::from_value(value).map_err(invalid)?)
            }
            SectionType::Cta => SectionContent::Cta(serde_json::from_value(value).map_err(invalid)?),
            SectionType::Testimonials => {
                SectionContent::Testimonials(serde_json::from_value(value).map_err(invalid)?)
            }
            SectionType::Gallery => {
                SectionContent::Gallery(serde_json::from_value(value).map_err(invalid)?)
            }
            SectionType::Pricing => {
                SectionContent::Pricing(serde_json::from_value(value).map_err(invalid)?)
            }
            SectionType::Contact => {
                SectionContent::Contact(serde_json::from_value(value).map_err(invalid)?)
            }
            SectionType::Stats => SectionContent::Stats(serde_json::from_value(value).map_err(invalid)?),
            SectionType::Team => SectionContent::Team(serde_json::from_value(value).map_err(invalid)?),
            SectionType::Faq => SectionContent::Faq(serde_json::from_value(value).map_err(invalid)?),
            SectionType::LogoCloud => {
                SectionContent::LogoCloud(serde_json::from_value(value).map_err(invalid)?)
            }
            SectionType::Blog => SectionContent::Blog(serde_json::from_value(value).map_err(invalid)?),
            SectionType::Content => {
                SectionContent::Content(serde_json::from_value(value).map_err(invalid)?)
            }
            SectionType::Custom => {
                SectionContent::Custom(serde_json::from_value(value).map_err(invalid)?)
            }
        };

        Ok(content)
    }

    /// Encode as the JSON object stored under a section's `content` key
    pub fn to_value(&self) -> Value {
        let encoded = match self {
            SectionContent::Hero(c) => serde_json::to_value(c),
            SectionContent::Features(c) => serde_json::to_value(c),
            SectionContent::Services(c) => serde_json::to_value(c),
            SectionContent::Cta(c) => serde_json::to_value(c),
            SectionContent::Testimonials(c) => serde_json::to_value(c),
            SectionContent::Gallery(c) => serde_json::to_value(c),
            SectionContent::Pricing(c) => serde_json::to_value(c),
            SectionContent::Contact(c) => serde_json::to_value(c),
            SectionContent::Stats(c) => serde_json::to_value(c),
            SectionContent::Team(c) => serde_json::to_value(c),
            SectionContent::Faq(c) => serde_json::to_value(c),
            SectionContent::LogoCloud(c) => serde_json::to_value(c),
            SectionContent::Blog(c) => serde_json::to_value(c),
            SectionContent::Content(c) => serde_json::to_value(c),
            SectionContent::Custom(map) => return Value::Object(map.clone()),
        };

        // Plain structs of strings, numbers and vectors always encode.
        encoded.unwrap_or_else(|_| Value::Object(Map::new()))
    }

    /// Shallow-merge top-level keys into this content and re-validate against the same type
    pub fn merge_patch(&self, patch: Map<String, Value>) -> Result<SectionContent, SchemaError> {
        let mut merged = match self.to_value() {
            Value::Object(map) => map,
            _ => Map::new(),
        };
        for (key, value) in patch {
            merged.insert(key, value);
        }
        SectionContent::from_value(self.section_type(), Value::Object(merged))
    }

    /// Assign a fresh ID to every list item that carries one
    pub fn regenerate_ids(&mut self) {
        match self {
            SectionContent::Features(c) => c.features.iter_mut().for_each(|i| i.id = new_id()),
            SectionContent::Services(c) => c.services.iter_mut().for_each(|i| i.id = new_id()),
            SectionContent::Testimonials(c) => {
                c.testimonials.iter_mut().for_each(|i| i.id = new_id())
            }
            SectionContent::Gallery(c) => c.images.iter_mut().for_each(|i| i.id = new_id()),
            SectionContent::Pricing(c) => c.plans.iter_mut().for_each(|i| i.id = new_id()),
            SectionContent::Stats(c) => c.stats.iter_mut().for_each(|i| i.id = new_id()),
            SectionContent::Team(c) => c.members.iter_mut().for_each(|i| i.id = new_id()),
            SectionContent::Faq(c) => c.faqs.iter_mut().for_each(|i| i.id = new_id()),
            SectionContent::LogoCloud(c) => c.logos.iter_mut().for_each(|i| i.id = new_id()),
            SectionContent::Blog(c) => c.posts.iter_mut().for_each(|i| i.id = new_id()),
            SectionContent::Content(c) => c.sections.iter_mut().for_each(|i| i.id = new_id()),
            SectionContent::Hero(_)
            | SectionContent::Cta(_)
            | SectionContent::Contact(_)
            | SectionContent::Custom(_) => {}
        }
    }

    /// IDs of the list items inside this content
    pub fn item_ids(&self) -> Vec<&str> {
        match self {
            SectionContent::Features(c) => c.features.iter().map(|i| i.id.as_str()).collect(),
            SectionContent::Services(c) => c.services.iter().map(|i| i.id.as_str()).collect(),
            SectionContent::Testimonials(c) => c.testimonials.iter().map(|i| i.id.as_str()).collect(),
            SectionContent::Gallery(c) => c.images.iter().map(|i| i.id.as_str()).collect(),
            SectionContent::Pricing(c) => c.plans.iter().map(|i| i.id.as_str()).collect(),
            SectionContent::Stats(c) => c.stats.iter().map(|i| i.id.as_str()).collect(),
            SectionContent::Team(c) => c.members.iter().map(|i| i.id.as_str()).collect(),
            SectionContent::Faq(c) => c.faqs.iter().map(|i| i.id.as_str()).collect(),
            SectionContent::LogoCloud(c) => c.logos.iter().map(|i| i.id.as_str()).collect(),
            SectionContent::Blog(c) => c.posts.iter().map(|i| i.id.as_str()).collect(),
            SectionContent::Content(c) => c.sections.iter().map(|i| i.id.as_str()).collect(),
            SectionContent::Hero(_)
            | SectionContent::Cta(_)
            | SectionContent::Contact(_)
            | SectionContent::Custom(_) => Vec::new(),
        }
    }

    /// Main headline, for types that have one
    pub fn headline(&self) -> Option<&str> {
        match self {
            SectionContent::Hero(c) => Some(&c.headline),
            SectionContent::Features(c) => Some(&c.headline),
            SectionContent::Services(c) => Some(&c.headline),
            SectionContent::Cta(c) => Some(&c.headline),
            SectionContent::Testimonials(c) => Some(&c.headline),
            SectionContent::Gallery(c) => Some(&c.headline),
            SectionContent::Pricing(c) => Some(&c.headline),
            SectionContent::Contact(c) => Some(&c.headline),
            SectionContent::Team(c) => Some(&c.headline),
            SectionContent::Faq(c) => Some(&c.headline),
            SectionContent::LogoCloud(c) => Some(&c.headline),
            SectionContent::Blog(c) => Some(&c.headline),
            SectionContent::Content(c) => Some(&c.title),
            SectionContent::Stats(_) => None,
            SectionContent::Custom(map) => map.get("headline").and_then(Value::as_str),
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
