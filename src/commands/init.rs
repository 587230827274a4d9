//! Initialize a new blog configuration

use anyhow::Result;
use std::fs;
use std::path::Path;

use crate::config::SiteConfig;
use crate::CONFIG_FILES;

const HEADER: &str = "# Site configuration\n## Keys are read as-is by the page templates.\n\n";

/// Write a `config.yml` holding the default configuration
///
/// Refuses to touch a directory that already has a config file.
pub fn init_site(target_dir: &Path) -> Result<()> {
    fs::create_dir_all(target_dir)?;

    if let Some(existing) = CONFIG_FILES
        .iter()
        .map(|name| target_dir.join(name))
        .find(|path| path.exists())
    {
        anyhow::bail!("Config already exists: {:?}", existing);
    }

    let body = serde_yaml::to_string(&SiteConfig::default())?;
    let path = target_dir.join("config.yml");
    fs::write(&path, format!("{}{}", HEADER, body))?;
    tracing::debug!("Wrote {:?}", path);

    Ok(())
}
