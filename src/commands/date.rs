//! Render a post date

use anyhow::Result;

use crate::i18n::Locale;
use crate::Site;

/// How the `date` command should render
#[derive(Debug, Default, Clone)]
pub struct DateOptions {
    /// Override the site locale
    pub locale: Option<Locale>,
    /// Override the site date pattern
    pub format: Option<String>,
    /// Print only the text, without the meta markup
    pub plain: bool,
}

/// Render a post date the way a post page shows it
pub fn render(site: &Site, date: &str, options: &DateOptions) -> Result<String> {
    let locale = options.locale.unwrap_or_else(|| site.locale());
    let pattern = options
        .format
        .as_deref()
        .unwrap_or(&site.config().date_format);
    let text = site.published_label_with(date, locale, pattern)?;

    if options.plain {
        Ok(text)
    } else {
        Ok(site.renderer().post_meta(&text)?)
    }
}

/// Print a rendered post date on stdout
pub fn run(site: &Site, date: &str, options: &DateOptions) -> Result<()> {
    println!("{}", render(site, date, options)?);
    Ok(())
}
