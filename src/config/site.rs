//! Site configuration (config.yml / config.toml)

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::i18n::Locale;

/// Main site configuration
///
/// Field names follow the camelCase keys the page templates read
/// (`pathPrefix`, `postsPerPage`, ...). Values pass through untouched; the only
/// normalization is that an empty identifier or contact handle becomes `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteConfig {
    // Site
    pub url: String,
    pub path_prefix: String,
    pub title: String,
    pub subtitle: String,
    pub copyright: String,

    // Comments / analytics
    #[serde(deserialize_with = "empty_as_none", serialize_with = "none_as_empty")]
    pub disqus_shortname: Option<String>,
    #[serde(deserialize_with = "empty_as_none", serialize_with = "none_as_empty")]
    pub google_analytics_id: Option<String>,

    // Pagination
    pub posts_per_page: usize,

    // Features
    pub use_katex: bool,

    // Date display
    pub language: String,
    pub timezone: String,
    pub date_format: String,

    // Navigation
    pub menu: Vec<MenuItem>,

    // Author card
    pub author: Author,

    // Store any additional fields
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_yaml::Value>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            url: "https://tomascco.dev".to_string(),
            path_prefix: "/".to_string(),
            title: "Diários de um programador".to_string(),
            subtitle: "Experiências e reflexões sobre programação em geral.".to_string(),
            copyright: "© All rights reserved.".to_string(),

            disqus_shortname: None,
            google_analytics_id: Some("UA-175047061-1".to_string()),

            posts_per_page: 4,

            use_katex: false,

            language: "pt-br".to_string(),
            timezone: String::new(),
            date_format: "D MMM YYYY".to_string(),

            menu: vec![
                MenuItem::new("Artigos", "/"),
                MenuItem::new("Sobre mim", "/pages/about"),
            ],

            author: Author::default(),

            extra: BTreeMap::new(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    ///
    /// `.toml` files are read as TOML, everything else as YAML.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let is_toml = path.extension().and_then(|e| e.to_str()) == Some("toml");

        let config = if is_toml {
            Self::from_toml_str(&content)?
        } else {
            Self::from_yaml_str(&content)?
        };
        tracing::debug!("Loaded site config from {:?}", path);
        Ok(config)
    }

    pub fn from_yaml_str(content: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Locale named by `language`
    pub fn locale(&self) -> Result<Locale> {
        self.language.parse()
    }

    /// Timezone dates are shown in, `None` keeps each date's own offset
    pub fn timezone(&self) -> Result<Option<chrono_tz::Tz>> {
        let tz = self.timezone.trim();
        if tz.is_empty() {
            return Ok(None);
        }
        tz.parse::<chrono_tz::Tz>()
            .map(Some)
            .map_err(|_| Error::UnknownTimezone(tz.to_string()))
    }
}

/// Navigation menu entry
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuItem {
    pub label: String,
    pub path: String,
}

impl MenuItem {
    pub fn new(label: &str, path: &str) -> Self {
        Self {
            label: label.to_string(),
            path: path.to_string(),
        }
    }
}

/// Author shown in the sidebar card
///
/// Contacts are never inherited from the built-in author: an `author` block
/// lists the complete set, and any platform it leaves out has no contact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Author {
    pub name: String,
    pub photo: String,
    pub bio: String,
    #[serde(default)]
    pub contacts: Contacts,
}

impl Default for Author {
    fn default() -> Self {
        Self {
            name: "Tomás Coêlho".to_string(),
            photo: "/tomas_thumb.png".to_string(),
            bio: "Engenheiro de Software cursando Engenharia de Computação na UFC.".to_string(),
            contacts: Contacts {
                telegram: Some("tomascco".to_string()),
                github: Some("tomascco".to_string()),
                linkedin: Some("tomás-coelho-16304118b".to_string()),
                gitlab: Some("tomascco".to_string()),
                ..Contacts::default()
            },
        }
    }
}

/// Contact platforms the author card knows how to link
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Platform {
    Email,
    Facebook,
    Telegram,
    Twitter,
    Github,
    Rss,
    Vkontakte,
    Linkedin,
    Instagram,
    Line,
    Gitlab,
    Weibo,
    Codepen,
    Youtube,
    Soundcloud,
}

impl Platform {
    /// All platforms, in display order
    pub const ALL: [Platform; 15] = [
        Platform::Email,
        Platform::Facebook,
        Platform::Telegram,
        Platform::Twitter,
        Platform::Github,
        Platform::Rss,
        Platform::Vkontakte,
        Platform::Linkedin,
        Platform::Instagram,
        Platform::Line,
        Platform::Gitlab,
        Platform::Weibo,
        Platform::Codepen,
        Platform::Youtube,
        Platform::Soundcloud,
    ];

    /// Config key of the platform
    pub fn as_str(self) -> &'static str {
        match self {
            Platform::Email => "email",
            Platform::Facebook => "facebook",
            Platform::Telegram => "telegram",
            Platform::Twitter => "twitter",
            Platform::Github => "github",
            Platform::Rss => "rss",
            Platform::Vkontakte => "vkontakte",
            Platform::Linkedin => "linkedin",
            Platform::Instagram => "instagram",
            Platform::Line => "line",
            Platform::Gitlab => "gitlab",
            Platform::Weibo => "weibo",
            Platform::Codepen => "codepen",
            Platform::Youtube => "youtube",
            Platform::Soundcloud => "soundcloud",
        }
    }
}

impl FromStr for Platform {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Platform::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| Error::UnknownPlatform(s.to_string()))
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Author contact handles, one per platform
///
/// A missing key, an empty string and a whitespace-only string all mean
/// "no contact on this platform" and are stored as `None`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Contacts {
    #[serde(deserialize_with = "empty_as_none", serialize_with = "none_as_empty")]
    pub email: Option<String>,
    #[serde(deserialize_with = "empty_as_none", serialize_with = "none_as_empty")]
    pub facebook: Option<String>,
    #[serde(deserialize_with = "empty_as_none", serialize_with = "none_as_empty")]
    pub telegram: Option<String>,
    #[serde(deserialize_with = "empty_as_none", serialize_with = "none_as_empty")]
    pub twitter: Option<String>,
    #[serde(deserialize_with = "empty_as_none", serialize_with = "none_as_empty")]
    pub github: Option<String>,
    #[serde(deserialize_with = "empty_as_none", serialize_with = "none_as_empty")]
    pub rss: Option<String>,
    #[serde(deserialize_with = "empty_as_none", serialize_with = "none_as_empty")]
    pub vkontakte: Option<String>,
    #[serde(deserialize_with = "empty_as_none", serialize_with = "none_as_empty")]
    pub linkedin: Option<String>,
    #[serde(deserialize_with = "empty_as_none", serialize_with = "none_as_empty")]
    pub instagram: Option<String>,
    #[serde(deserialize_with = "empty_as_none", serialize_with = "none_as_empty")]
    pub line: Option<String>,
    #[serde(deserialize_with = "empty_as_none", serialize_with = "none_as_empty")]
    pub gitlab: Option<String>,
    #[serde(deserialize_with = "empty_as_none", serialize_with = "none_as_empty")]
    pub weibo: Option<String>,
    #[serde(deserialize_with = "empty_as_none", serialize_with = "none_as_empty")]
    pub codepen: Option<String>,
    #[serde(deserialize_with = "empty_as_none", serialize_with = "none_as_empty")]
    pub youtube: Option<String>,
    #[serde(deserialize_with = "empty_as_none", serialize_with = "none_as_empty")]
    pub soundcloud: Option<String>,
}

impl Contacts {
    /// Handle for a platform, if one is configured
    pub fn get(&self, platform: Platform) -> Option<&str> {
        let handle = match platform {
            Platform::Email => &self.email,
            Platform::Facebook => &self.facebook,
            Platform::Telegram => &self.telegram,
            Platform::Twitter => &self.twitter,
            Platform::Github => &self.github,
            Platform::Rss => &self.rss,
            Platform::Vkontakte => &self.vkontakte,
            Platform::Linkedin => &self.linkedin,
            Platform::Instagram => &self.instagram,
            Platform::Line => &self.line,
            Platform::Gitlab => &self.gitlab,
            Platform::Weibo => &self.weibo,
            Platform::Codepen => &self.codepen,
            Platform::Youtube => &self.youtube,
            Platform::Soundcloud => &self.soundcloud,
        };
        handle.as_deref()
    }

    /// Configured handles in [`Platform::ALL`] order
    pub fn iter(&self) -> impl Iterator<Item = (Platform, &str)> + '_ {
        Platform::ALL
            .into_iter()
            .filter_map(move |p| self.get(p).map(|handle| (p, handle)))
    }

    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }
}

fn empty_as_none<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}

fn none_as_empty<S>(value: &Option<String>, serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(value.as_deref().unwrap_or(""))
}
