//! List site configuration

use anyhow::Result;
use std::fmt::Write;

use crate::Site;

/// Render one section of the configuration as plain text
pub fn render(site: &Site, section: &str) -> Result<String> {
    let config = site.config();
    let mut out = String::new();

    match section {
        "site" => {
            writeln!(out, "Title:      {}", config.title)?;
            writeln!(out, "Subtitle:   {}", config.subtitle)?;
            writeln!(out, "URL:        {}", config.url)?;
            writeln!(out, "Prefix:     {}", config.path_prefix)?;
            writeln!(out, "Copyright:  {}", config.copyright)?;
            writeln!(out, "Per page:   {}", config.posts_per_page)?;
            writeln!(out, "KaTeX:      {}", config.use_katex)?;
            writeln!(out, "Locale:     {}", site.locale())?;
            writeln!(
                out,
                "Analytics:  {}",
                config.google_analytics_id.as_deref().unwrap_or("-")
            )?;
            writeln!(
                out,
                "Disqus:     {}",
                config.disqus_shortname.as_deref().unwrap_or("-")
            )?;
        }
        "menu" => {
            writeln!(out, "Menu ({}):", config.menu.len())?;
            for item in &config.menu {
                writeln!(out, "  {} [{}]", item.label, item.path)?;
            }
        }
        "author" => {
            writeln!(out, "Name:  {}", config.author.name)?;
            writeln!(out, "Photo: {}", config.author.photo)?;
            writeln!(out, "Bio:   {}", config.author.bio)?;
        }
        "contact" | "contacts" => {
            let contacts: Vec<_> = config.author.contacts.iter().collect();
            writeln!(out, "Contacts ({}):", contacts.len())?;
            for (platform, handle) in contacts {
                writeln!(out, "  {} - {}", platform, handle)?;
            }
        }
        _ => {
            anyhow::bail!(
                "Unknown section: {}. Available: site, menu, author, contacts",
                section
            );
        }
    }

    Ok(out)
}

/// List a configuration section on stdout
pub fn run(site: &Site, section: &str) -> Result<()> {
    print!("{}", render(site, section)?);
    Ok(())
}
