//! diarios: site configuration and post date display for a personal blog
//!
//! The crate exposes the blog's [`SiteConfig`](config::SiteConfig) and renders
//! the small fragments the page templates need, most importantly the
//! localized "Published 3 mar 2021" line under each post.

pub mod commands;
pub mod config;
pub mod error;
pub mod helpers;
pub mod i18n;
pub mod templates;

pub use error::{Error, Result};

use std::path::{Path, PathBuf};

use crate::helpers::PostDate;
use crate::i18n::Locale;
use crate::templates::TemplateRenderer;

/// Config file names looked up in the base directory, in order
pub const CONFIG_FILES: [&str; 3] = ["config.yml", "config.yaml", "config.toml"];

/// The blog: a loaded configuration and the renderer built from it
pub struct Site {
    /// Site configuration
    config: config::SiteConfig,
    /// Locale for every date shown on the site
    locale: Locale,
    /// Zone dates are shown in, `None` keeps each date's own offset
    timezone: Option<chrono_tz::Tz>,
    renderer: TemplateRenderer,
}

impl Site {
    /// Create a new site from a directory
    ///
    /// Loads the first config file found in [`CONFIG_FILES`], or the built-in
    /// defaults when there is none.
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref();

        let config = match find_config(base_dir) {
            Some(path) => {
                tracing::info!("Using config {:?}", path);
                config::SiteConfig::load(&path)?
            }
            None => {
                tracing::debug!("No config file in {:?}, using defaults", base_dir);
                config::SiteConfig::default()
            }
        };

        Self::from_config(config)
    }

    /// Create a site from an already built configuration
    pub fn from_config(config: config::SiteConfig) -> Result<Self> {
        let locale = config.locale().unwrap_or_else(|e| {
            tracing::warn!("{}, falling back to {}", e, Locale::default());
            Locale::default()
        });
        let timezone = config.timezone()?;
        tracing::debug!("Site locale {} timezone {:?}", locale, timezone);

        Ok(Self {
            config,
            locale,
            timezone,
            renderer: TemplateRenderer::new()?,
        })
    }

    /// Read-only view of the configuration
    pub fn config(&self) -> &config::SiteConfig {
        &self.config
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn renderer(&self) -> &TemplateRenderer {
        &self.renderer
    }

    /// "Published ..." text for a post date in the site's locale, format and zone
    pub fn published_label(&self, date: &str) -> Result<String> {
        self.published_label_with(date, self.locale, &self.config.date_format)
    }

    /// "Published ..." text with an explicit locale and pattern
    pub fn published_label_with(
        &self,
        date: &str,
        locale: Locale,
        pattern: &str,
    ) -> Result<String> {
        let date: PostDate = date.parse()?;
        let local = match self.timezone {
            Some(tz) => date.in_timezone(tz),
            None => date.local(),
        };
        Ok(helpers::published_text(&local, pattern, locale))
    }

    /// Post meta markup for a post date
    ///
    /// ```ignore
    /// site.post_meta("2021-03-03T00:00:00Z")?
    /// // -> <div class="meta"><p class="meta__date">Published 3 mar 2021</p></div>
    /// ```
    pub fn post_meta(&self, date: &str) -> Result<String> {
        let label = self.published_label(date)?;
        self.renderer.post_meta(&label)
    }

    /// Listing page paths for `total_posts` posts, `postsPerPage` to a page
    pub fn page_paths(&self, total_posts: usize) -> Vec<String> {
        let pages = helpers::page_count(total_posts, self.config.posts_per_page);
        (0..pages)
            .map(|page| helpers::page_path(&self.config, page))
            .collect()
    }

    /// Sidebar markup: author card, menu, contacts, copyright
    pub fn sidebar(&self) -> Result<String> {
        self.renderer.sidebar(&self.config)
    }
}

fn find_config(base_dir: &Path) -> Option<PathBuf> {
    CONFIG_FILES
        .iter()
        .map(|name| base_dir.join(name))
        .find(|path| path.is_file())
}
