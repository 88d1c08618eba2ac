//! Page content and tuning, loaded from the embedded `site.json`.

use hero_carousel::{CarouselConfig, CarouselError, RevealConfig, Slide};
use serde::Deserialize;
use thiserror::Error;
use tracing::Level;

/// Bundled at build time; edit `landing/site.json` to change the page.
pub const SITE_JSON: &str = include_str!("../site.json");

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("site.json is not valid JSON for this page: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("site.json has an invalid setting: {0}")]
    Config(#[from] CarouselError),

    #[error("unknown log level {0:?} (expected trace, debug, info, warn or error)")]
    LogLevel(String),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SiteContent {
    pub company_name: String,
    #[serde(default)]
    pub company_logo_url: Option<String>,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    pub nav_items: Vec<NavItem>,
    pub links: Links,
    pub hero: Hero,
    pub slides: Vec<Slide>,
    #[serde(default)]
    pub services: Vec<ServiceCard>,
    pub about: About,
    #[serde(default)]
    pub carousel: CarouselConfig,
    #[serde(default)]
    pub reveal: RevealConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NavItem {
    pub label: String,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Links {
    pub github: String,
}

/// Welcome section heading: "{heading} {highlight}", then the tagline.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Hero {
    pub heading: String,
    pub highlight: String,
    pub tagline: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct About {
    pub title: String,
    pub body: String,
    pub get_started_href: String,
    pub contact_href: String,
}

/// One entry of the services grid.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ServiceCard {
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub image_alt: Option<String>,
    #[serde(default = "default_icon")]
    pub icon: String,
    pub title: String,
    #[serde(default)]
    pub subtitle: Option<String>,
    pub description: String,
    #[serde(default)]
    pub primary_action: Option<ServiceAction>,
    #[serde(default)]
    pub secondary_action: Option<ServiceAction>,
}

impl ServiceCard {
    /// Banner alt text; falls back to the card title.
    pub fn banner_alt(&self) -> &str {
        self.image_alt.as_deref().unwrap_or(&self.title)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ServiceAction {
    pub label: String,
    pub href: String,
    #[serde(default)]
    pub external: bool,
    /// Secondary actions only: bordered button instead of a text link.
    #[serde(default)]
    pub as_button: bool,
}

impl ServiceAction {
    pub fn target(&self) -> Option<&'static str> {
        self.external.then_some("_blank")
    }

    pub fn rel(&self) -> Option<&'static str> {
        self.external.then_some("noopener noreferrer")
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_icon() -> String {
    "🧩".to_string()
}

impl SiteContent {
    /// Parse and validate the bundled `site.json`.
    pub fn load() -> Result<Self, ContentError> {
        Self::from_json(SITE_JSON)
    }

    pub fn from_json(json: &str) -> Result<Self, ContentError> {
        let content: SiteContent = serde_json::from_str(json)?;
        content.validate()?;
        Ok(content)
    }

    pub fn validate(&self) -> Result<(), ContentError> {
        if self.slides.is_empty() {
            return Err(CarouselError::EmptySlides.into());
        }
        self.carousel.validate()?;
        self.reveal.validate()?;
        self.max_level()?;
        Ok(())
    }

    pub fn max_level(&self) -> Result<Level, ContentError> {
        self.log_level
            .parse()
            .map_err(|_| ContentError::LogLevel(self.log_level.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn bundled_site_json_loads() {
        let site = SiteContent::load().expect("bundled content is valid");
        assert_eq!(site.company_name, "NovaGrid Systems");
        assert_eq!(site.slides.len(), 3);
        assert_eq!(site.services.len(), 3);
        assert_eq!(site.max_level().expect("valid level"), Level::INFO);
        assert!(site.services[2].secondary_action.as_ref().is_some_and(|a| a.as_button));
    }

    #[test]
    fn nav_items_point_at_section_anchors() {
        let site = SiteContent::load().expect("bundled content is valid");
        let hrefs: Vec<&str> = site.nav_items.iter().map(|item| item.href.as_str()).collect();
        assert_eq!(hrefs, vec!["#welcome", "#services", "#about"]);
    }

    const MINIMAL: &str = r#"{
        "company_name": "Acme",
        "nav_items": [],
        "links": { "github": "https://github.com/acme" },
        "hero": { "heading": "Welcome to", "highlight": "Acme", "tagline": "Hi" },
        "slides": [{ "title": "Acme", "subtitle": "Tools", "cta": { "label": "Go", "href": "/" } }],
        "about": { "title": "About", "body": "Body", "get_started_href": "/", "contact_href": "/c" }
    }"#;

    #[test]
    fn optional_sections_default() {
        let site = SiteContent::from_json(MINIMAL).expect("minimal content is valid");
        assert_eq!(site.log_level, "info");
        assert_eq!(site.carousel, CarouselConfig::default());
        assert_eq!(site.reveal, RevealConfig::default());
        assert!(site.services.is_empty());
        assert_eq!(site.company_logo_url, None);
    }

    #[test]
    fn service_card_defaults_icon_and_alt() {
        let card: ServiceCard =
            serde_json::from_str(r#"{ "title": "Ops", "description": "Runbooks" }"#)
                .expect("valid card");
        assert_eq!(card.icon, "🧩");
        assert_eq!(card.banner_alt(), "Ops");
        assert_eq!(card.primary_action, None);
    }

    #[test]
    fn invalid_carousel_setting_is_reported() {
        let json = MINIMAL.replacen(
            r#""about":"#,
            r#""carousel": { "interval_ms": 0 }, "about":"#,
            1,
        );
        let err = SiteContent::from_json(&json).unwrap_err();
        assert!(matches!(err, ContentError::Config(CarouselError::ZeroInterval)));
    }

    #[test]
    fn empty_slide_list_is_rejected() {
        let json = MINIMAL.replacen(
            r#""slides": [{ "title": "Acme", "subtitle": "Tools", "cta": { "label": "Go", "href": "/" } }],"#,
            r#""slides": [],"#,
            1,
        );
        let err = SiteContent::from_json(&json).unwrap_err();
        assert!(matches!(err, ContentError::Config(CarouselError::EmptySlides)));
    }

    #[test]
    fn unknown_log_level_is_reported() {
        let json = MINIMAL.replacen(r#""nav_items": [],"#, r#""nav_items": [], "log_level": "loud","#, 1);
        let err = SiteContent::from_json(&json).unwrap_err();
        assert_eq!(
            err.to_string(),
            r#"unknown log level "loud" (expected trace, debug, info, warn or error)"#
        );
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        assert!(matches!(
            SiteContent::from_json("{ nope"),
            Err(ContentError::Parse(_))
        ));
    }

    #[test]
    fn external_action_opens_new_tab() {
        let action = ServiceAction {
            label: "GitHub".into(),
            href: "https://github.com/acme".into(),
            external: true,
            as_button: false,
        };
        assert_eq!(action.target(), Some("_blank"));
        assert_eq!(action.rel(), Some("noopener noreferrer"));
    }
}
