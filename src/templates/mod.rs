//! Built-in blog fragments using the Tera template engine
//!
//! The post meta block and the sidebar pieces (author card, menu, contacts)
//! are embedded in the binary and filled from config values.

use serde::Serialize;
use std::collections::HashMap;
use tera::{Context, Tera};

use crate::config::{MenuItem, SiteConfig};
use crate::error::Result;
use crate::helpers::{contact_links, html_escape, url_for, ContactLink};

/// Template renderer with the embedded blog fragments
pub struct TemplateRenderer {
    tera: Tera,
}

impl TemplateRenderer {
    /// Create a new renderer with all fragments loaded
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();

        // Tera's own escaping also rewrites '/', which mangles hrefs;
        // templates escape explicitly with `esc`
        tera.autoescape_on(vec![]);

        tera.add_raw_templates(vec![
            ("meta.html", include_str!("blog/meta.html")),
            ("sidebar.html", include_str!("blog/sidebar.html")),
            // Partials
            (
                "partials/author.html",
                include_str!("blog/partials/author.html"),
            ),
            ("partials/menu.html", include_str!("blog/partials/menu.html")),
            (
                "partials/contacts.html",
                include_str!("blog/partials/contacts.html"),
            ),
        ])?;

        tera.register_filter("esc", esc_filter);

        Ok(Self { tera })
    }

    /// Render a template with given context
    pub fn render(&self, template_name: &str, context: &Context) -> Result<String> {
        Ok(self.tera.render(template_name, context)?)
    }

    /// Post meta block around an already formatted "Published ..." label
    pub fn post_meta(&self, label: &str) -> Result<String> {
        let mut context = Context::new();
        context.insert("label", label);
        self.render("meta.html", &context)
    }

    /// Navigation menu, entries in config order
    pub fn menu(&self, config: &SiteConfig) -> Result<String> {
        self.render("partials/menu.html", &sidebar_context(config))
    }

    /// Author card
    pub fn author(&self, config: &SiteConfig) -> Result<String> {
        self.render("partials/author.html", &sidebar_context(config))
    }

    /// Contact links; platforms without a handle are left out
    pub fn contacts(&self, config: &SiteConfig) -> Result<String> {
        self.render("partials/contacts.html", &sidebar_context(config))
    }

    /// Whole sidebar: author card, menu, contacts and copyright
    pub fn sidebar(&self, config: &SiteConfig) -> Result<String> {
        self.render("sidebar.html", &sidebar_context(config))
    }
}

/// Tera filter: HTML-escape a string
fn esc_filter(
    value: &tera::Value,
    _args: &HashMap<String, tera::Value>,
) -> tera::Result<tera::Value> {
    let s = tera::try_get_value!("esc", "value", String, value);
    Ok(tera::Value::String(html_escape(&s)))
}

/// Data structures for template context

#[derive(Debug, Clone, Serialize)]
pub struct MenuLink {
    pub label: String,
    pub href: String,
}

impl MenuLink {
    fn from_item(config: &SiteConfig, item: &MenuItem) -> Self {
        Self {
            label: item.label.clone(),
            href: url_for(config, &item.path),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AuthorData {
    pub name: String,
    pub photo: String,
    pub bio: String,
}

fn sidebar_context(config: &SiteConfig) -> Context {
    let menu: Vec<MenuLink> = config
        .menu
        .iter()
        .map(|item| MenuLink::from_item(config, item))
        .collect();
    let contacts: Vec<ContactLink> = contact_links(&config.author.contacts);
    let author = AuthorData {
        name: config.author.name.clone(),
        photo: url_for(config, &config.author.photo),
        bio: config.author.bio.clone(),
    };

    let mut context = Context::new();
    context.insert("root", &url_for(config, "/"));
    context.insert("menu", &menu);
    context.insert("author", &author);
    context.insert("contacts", &contacts);
    context.insert("copyright", &config.copyright);
    context
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Contacts;

    #[test]
    fn test_post_meta_markup() {
        let renderer = TemplateRenderer::new().unwrap();
        assert_eq!(
            renderer.post_meta("Published 3 mar 2021").unwrap(),
            r#"<div class="meta"><p class="meta__date">Published 3 mar 2021</p></div>"#
        );
    }

    #[test]
    fn test_menu_keeps_config_order() {
        let renderer = TemplateRenderer::new().unwrap();
        let html = renderer.menu(&SiteConfig::default()).unwrap();
        let artigos = html.find(">Artigos<").unwrap();
        let sobre = html.find(">Sobre mim<").unwrap();
        assert!(artigos < sobre);
        assert!(html.contains(r#"href="/pages/about""#));
    }

    #[test]
    fn test_contacts_skip_empty_handles() {
        let renderer = TemplateRenderer::new().unwrap();
        let html = renderer.contacts(&SiteConfig::default()).unwrap();
        assert!(html.contains("https://github.com/tomascco"));
        assert!(html.contains("tg://resolve?domain=tomascco"));
        assert!(!html.contains("mailto:"));
        assert!(!html.contains("twitter"));
        assert_eq!(html.matches("<li").count(), 4);
    }

    #[test]
    fn test_no_contacts_renders_nothing() {
        let renderer = TemplateRenderer::new().unwrap();
        let mut config = SiteConfig::default();
        config.author.contacts = Contacts::default();
        assert_eq!(renderer.contacts(&config).unwrap().trim(), "");
    }

    #[test]
    fn test_author_and_sidebar_escape_text() {
        let renderer = TemplateRenderer::new().unwrap();
        let mut config = SiteConfig::default();
        config.author.bio = "C & <Rust>".to_string();
        let author = renderer.author(&config).unwrap();
        assert!(author.contains("C &amp; &lt;Rust&gt;"));
        assert!(author.contains(r#"src="/tomas_thumb.png""#));

        let sidebar = renderer.sidebar(&config).unwrap();
        assert!(sidebar.contains("Tomás Coêlho"));
        assert!(sidebar.contains("© All rights reserved."));
        assert!(sidebar.contains("menu__list"));
    }
}
