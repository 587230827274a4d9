//! URL helper functions

use crate::config::SiteConfig;

/// Whether a link already points somewhere outside the site
pub fn is_external(path: &str) -> bool {
    path.starts_with("http://") || path.starts_with("https://") || path.starts_with("//")
}

/// Generate a URL with the path prefix
///
/// # Examples
/// ```ignore
/// url_for(&config, "/pages/about") // -> "/blog/pages/about" with pathPrefix "/blog"
/// ```
pub fn url_for(config: &SiteConfig, path: &str) -> String {
    if is_external(path) {
        return path.to_string();
    }

    let prefix = config.path_prefix.trim_end_matches('/');
    let path = path.trim_start_matches('/');

    if path.is_empty() {
        format!("{}/", prefix)
    } else {
        format!("{}/{}", prefix, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> SiteConfig {
        SiteConfig {
            path_prefix: "/blog/".to_string(),
            ..SiteConfig::default()
        }
    }

    #[test]
    fn test_url_for() {
        let config = test_config();
        assert_eq!(url_for(&config, "/pages/about"), "/blog/pages/about");
        assert_eq!(url_for(&config, "tomas_thumb.png"), "/blog/tomas_thumb.png");
        assert_eq!(url_for(&config, "/"), "/blog/");
    }

    #[test]
    fn test_url_for_root_prefix() {
        let config = SiteConfig::default();
        assert_eq!(url_for(&config, "/"), "/");
        assert_eq!(url_for(&config, "/pages/about"), "/pages/about");
    }

    #[test]
    fn test_url_for_external() {
        let config = test_config();
        assert_eq!(url_for(&config, "https://github.com/x"), "https://github.com/x");
    }
}
