//! Search-engine metadata for the site.
//!
//! [`SiteMetadata`] serializes to the camelCase shape a page head renderer
//! expects: title template, authors, robots directives and optional site
//! verification tokens.

use crate::constants::env;
use indexmap::IndexMap;
use serde::Serialize;
use thiserror::Error;
use url::Url;

pub const KEYWORDS: [&str; 7] = [
    "Next.js",
    "React",
    "JavaScript",
    "TypeScript",
    "Web Development",
    "Blog",
    "Portfolio",
];

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MetadataError {
    #[error("site url is not defined")]
    MissingSiteUrl,
    #[error("site url `{0}` is not a valid absolute url")]
    InvalidSiteUrl(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    /// Author and creator name.
    pub name: String,
    pub site_name: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetadataOptions {
    /// The site url exactly as configured; used for `authors[].url`.
    pub site_url: String,
    /// The parsed site url; used for `metadataBase`.
    pub metadata_base: Url,
    pub google_verification: Option<String>,
}

impl MetadataOptions {
    pub fn new(site_url: &str) -> Result<Self, MetadataError> {
        let metadata_base =
            Url::parse(site_url).map_err(|_| MetadataError::InvalidSiteUrl(site_url.to_owned()))?;
        Ok(Self {
            site_url: site_url.to_owned(),
            metadata_base,
            google_verification: None,
        })
    }

    pub fn google_verification<S: Into<String>>(mut self, token: S) -> Self {
        let token = token.into();
        self.google_verification = (!token.is_empty()).then_some(token);
        self
    }

    /// Reads `NEXT_PUBLIC_SITE_URL` (required) and `GOOGLE_SITE_VERIFICATION`.
    pub fn from_env() -> Result<Self, MetadataError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, MetadataError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let site_url = lookup(env::SITE_URL)
            .filter(|value| !value.is_empty())
            .ok_or(MetadataError::MissingSiteUrl)?;
        let options = Self::new(&site_url)?;

        Ok(match lookup(env::GOOGLE_SITE_VERIFICATION) {
            Some(token) => options.google_verification(token),
            None => options,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteMetadata {
    pub metadata_base: Url,
    pub title: Title,
    pub description: String,
    pub keywords: Vec<String>,
    pub authors: Vec<Author>,
    pub creator: String,
    pub robots: Robots,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verification: Option<IndexMap<String, String>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Title {
    pub default: String,
    pub template: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Author {
    pub name: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Robots {
    pub index: bool,
    pub follow: bool,
    pub google_bot: GoogleBot,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct GoogleBot {
    pub index: bool,
    pub follow: bool,
    pub max_video_preview: i32,
    pub max_image_preview: String,
    pub max_snippet: i32,
}

impl Default for Robots {
    fn default() -> Self {
        Self {
            index: true,
            follow: true,
            google_bot: GoogleBot {
                index: true,
                follow: true,
                max_video_preview: -1,
                max_image_preview: "large".into(),
                max_snippet: -1,
            },
        }
    }
}

impl SiteMetadata {
    pub fn build(config: &SiteConfig, options: &MetadataOptions) -> Self {
        let verification = options.google_verification.as_ref().map(|token| {
            let mut map = IndexMap::new();
            map.insert("google".to_owned(), token.clone());
            map
        });

        Self {
            metadata_base: options.metadata_base.clone(),
            title: Title {
                default: format!("{} | {}", config.name, config.site_name),
                template: "%s".into(),
            },
            description: config.description.clone(),
            keywords: KEYWORDS.iter().map(|keyword| keyword.to_string()).collect(),
            authors: vec![Author {
                name: config.name.clone(),
                url: options.site_url.clone(),
            }],
            creator: config.name.clone(),
            robots: Robots::default(),
            verification,
        }
    }
}

#[cfg(test)]
#[path = "metadata_test.rs"]
mod metadata_test;
