//! Dump the effective configuration

use anyhow::Result;

use crate::Site;

/// Serialize the loaded configuration as YAML, or JSON when `json` is set
pub fn render(site: &Site, json: bool) -> Result<String> {
    let config = site.config();
    if json {
        Ok(serde_json::to_string_pretty(config)?)
    } else {
        Ok(serde_yaml::to_string(config)?)
    }
}

/// Print the effective configuration on stdout
pub fn run(site: &Site, json: bool) -> Result<()> {
    println!("{}", render(site, json)?.trim_end());
    Ok(())
}
