use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use thiserror::Error;

/// Parsed once at startup; every render reads from this.
pub static SITE: LazyLock<SiteContent> =
    LazyLock::new(|| SiteContent::load().expect("Site content should be embedded and valid"));

#[derive(Embed)]
#[folder = "content"]
struct Assets;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Identity {
    pub name: String,
    pub title: String,
    pub tagline: String,
    pub portrait: String,
    pub bio: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavItem {
    pub label: String,
    pub anchor: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillEntry {
    pub name: String,
    pub level: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub image: String,
    pub tags: Vec<String>,
    pub link: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SocialLink {
    pub name: String,
    pub icon: String,
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteContent {
    pub identity: Identity,
    pub nav: Vec<NavItem>,
    pub skills: Vec<SkillEntry>,
    pub projects: Vec<Project>,
    pub social: Vec<SocialLink>,
}

#[derive(Error, Debug, Clone)]
pub enum ContentError {
    #[error("Site content asset not found")]
    NotFound,
    #[error("Couldn't parse site content: {0}")]
    Parse(String),
    #[error("Skill level for {0} is above 100")]
    SkillLevel(String),
    #[error("Nav entry {0} is not an in-page anchor")]
    NavAnchor(String),
}

impl SiteContent {
    pub fn load() -> Result<Self, ContentError> {
        let asset = Assets::get("site.json").ok_or(ContentError::NotFound)?;
        let content: SiteContent =
            serde_json::from_slice(&asset.data).map_err(|e| ContentError::Parse(e.to_string()))?;
        content.validate()?;
        Ok(content)
    }

    // Navigation is in-page anchors only, and skill bars render as percentages.
    fn validate(&self) -> Result<(), ContentError> {
        if let Some(skill) = self.skills.iter().find(|s| s.level > 100) {
            return Err(ContentError::SkillLevel(skill.name.clone()));
        }
        if let Some(item) = self.nav.iter().find(|n| !n.anchor.starts_with('#')) {
            return Err(ContentError::NavAnchor(item.label.clone()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_content_loads() {
        let content = SiteContent::load().expect("embedded site.json should parse");
        assert!(!content.identity.name.is_empty());
        assert!(!content.nav.is_empty());
        assert!(!content.skills.is_empty());
        assert!(!content.projects.is_empty());
        assert!(!content.social.is_empty());
    }

    #[test]
    fn test_nav_entries_are_anchors() {
        let content = SiteContent::load().expect("embedded site.json should parse");
        for item in &content.nav {
            assert!(
                item.anchor.starts_with('#'),
                "nav entry {} should be an in-page anchor",
                item.label
            );
        }
    }

    #[test]
    fn test_skill_levels_within_range() {
        let content = SiteContent::load().expect("embedded site.json should parse");
        for skill in &content.skills {
            assert!(skill.level <= 100, "{} is over 100%", skill.name);
        }
    }

    #[test]
    fn test_validate_rejects_overflowing_skill_level() {
        let mut content = SiteContent::load().expect("embedded site.json should parse");
        content.skills.push(SkillEntry {
            name: "Overclocking".to_string(),
            level: 101,
        });
        let err = content.validate().expect_err("validation should fail");
        assert!(matches!(err, ContentError::SkillLevel(name) if name == "Overclocking"));
    }

    #[test]
    fn test_validate_rejects_external_nav_target() {
        let mut content = SiteContent::load().expect("embedded site.json should parse");
        content.nav.push(NavItem {
            label: "Blog".to_string(),
            anchor: "https://example.com/blog".to_string(),
        });
        let err = content.validate().expect_err("validation should fail");
        assert!(matches!(err, ContentError::NavAnchor(label) if label == "Blog"));
    }

    #[test]
    fn test_static_content_matches_source() {
        // SITE is the same data as a fresh load; it must never be re-derived per render.
        let fresh = SiteContent::load().expect("embedded site.json should parse");
        assert_eq!(SITE.nav.len(), fresh.nav.len());
        assert_eq!(SITE.projects.len(), fresh.projects.len());
        assert_eq!(SITE.skills.len(), fresh.skills.len());
        assert_eq!(SITE.social.len(), fresh.social.len());
    }
}
