use serde::{Deserialize, Serialize};

/// Visual for a project card, decided once when the entry is authored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum ProjectImage {
    /// An emoji or other glyph rendered as text.
    Glyph(String),
    /// A static asset resolved by the hosting layer, e.g. `/odoo18.jpg`.
    AssetPath(String),
}

impl ProjectImage {
    /// Classify a raw authoring value: a leading slash marks an asset path.
    pub fn parse(raw: &str) -> Self {
        if raw.starts_with('/') {
            ProjectImage::AssetPath(raw.to_string())
        } else {
            ProjectImage::Glyph(raw.to_string())
        }
    }
}

/// One labeled image in a project's detail gallery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryItem {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub image: Option<String>,
}

impl GalleryItem {
    pub fn new(id: u32, title: &str, description: &str, image: Option<&str>) -> Self {
        Self {
            id,
            title: title.to_string(),
            description: description.to_string(),
            image: image.map(str::to_string),
        }
    }

    /// Hint shown under the description when there is nothing to display.
    ///
    /// `asset_missing` is reported by the renderer when the image failed to load.
    pub fn placeholder_hint(&self, asset_missing: bool) -> Option<&'static str> {
        match (&self.image, asset_missing) {
            (None, _) => Some("Add your image here"),
            (Some(_), true) => Some("Image not found"),
            (Some(_), false) => None,
        }
    }
}

/// Login disclosed before opening a demo that requires one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemoCredentials {
    pub email: String,
    pub password: String,
    pub note: String,
}

/// What "Live Demo" does for a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum LiveAction {
    Open { url: String },
    DiscloseCredentials { url: String, credentials: DemoCredentials },
}

/// A curated portfolio entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeaturedProject {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub github_url: String,
    pub live_url: String,
    pub image: ProjectImage,
    #[serde(default)]
    pub gallery: Vec<GalleryItem>,
    pub show_login_info: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credentials: Option<DemoCredentials>,
}

impl FeaturedProject {
    /// Resolve the live-demo step. Credentials are only disclosed when the
    /// project opts in and has some to show.
    pub fn live_action(&self) -> LiveAction {
        match (&self.credentials, self.show_login_info) {
            (Some(credentials), true) => LiveAction::DiscloseCredentials {
                url: self.live_url.clone(),
                credentials: credentials.clone(),
            },
            _ => LiveAction::Open {
                url: self.live_url.clone(),
            },
        }
    }

    pub fn has_gallery(&self) -> bool {
        !self.gallery.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub label: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillGroup {
    pub title: String,
    pub glyph: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    pub skills: Vec<String>,
}

/// Hero, about and contact details for the page owner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub headline: String,
    pub tagline: String,
    pub years_experience: u32,
    pub about: Vec<String>,
    pub focus_areas: Vec<String>,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub resume_path: String,
    pub photo_path: String,
    pub socials: Vec<SocialLink>,
    pub skills: Vec<SkillGroup>,
}
