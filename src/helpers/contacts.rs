//! Contact link helpers

use crate::config::{Contacts, Platform};

/// A contact ready to be shown in the author card
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct ContactLink {
    pub platform: &'static str,
    pub handle: String,
    pub href: String,
}

/// Link target for a handle on a platform
///
/// # Examples
/// ```ignore
/// contact_href(Platform::Github, "tomascco") // -> "https://github.com/tomascco"
/// ```
pub fn contact_href(platform: Platform, handle: &str) -> String {
    let prefix = match platform {
        Platform::Email => "mailto:",
        Platform::Facebook => "https://www.facebook.com/",
        Platform::Telegram => "tg://resolve?domain=",
        Platform::Twitter => "https://www.twitter.com/",
        Platform::Github => "https://github.com/",
        Platform::Rss => "",
        Platform::Vkontakte => "https://vk.com/",
        Platform::Linkedin => "https://www.linkedin.com/in/",
        Platform::Instagram => "https://www.instagram.com/",
        Platform::Line => "line://ti/p/",
        Platform::Gitlab => "https://www.gitlab.com/",
        Platform::Weibo => "https://www.weibo.com/",
        Platform::Codepen => "https://www.codepen.io/",
        Platform::Youtube => "https://www.youtube.com/channel/",
        Platform::Soundcloud => "https://soundcloud.com/",
    };
    format!("{}{}", prefix, handle.trim())
}

/// Links for every configured contact; platforms without a handle are skipped
pub fn contact_links(contacts: &Contacts) -> Vec<ContactLink> {
    contacts
        .iter()
        .map(|(platform, handle)| ContactLink {
            platform: platform.as_str(),
            handle: handle.to_string(),
            href: contact_href(platform, handle),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_href() {
        assert_eq!(contact_href(Platform::Email, "a@b.c"), "mailto:a@b.c");
        assert_eq!(
            contact_href(Platform::Telegram, "tomascco"),
            "tg://resolve?domain=tomascco"
        );
        assert_eq!(contact_href(Platform::Rss, "/rss.xml"), "/rss.xml");
        assert_eq!(
            contact_href(Platform::Linkedin, "someone"),
            "https://www.linkedin.com/in/someone"
        );
    }

    #[test]
    fn test_empty_handles_produce_no_links() {
        let contacts = Contacts {
            github: Some("tomascco".to_string()),
            ..Contacts::default()
        };
        let links = contact_links(&contacts);
        assert_eq!(
            links,
            vec![ContactLink {
                platform: "github",
                handle: "tomascco".to_string(),
                href: "https://github.com/tomascco".to_string(),
            }]
        );
        assert!(contact_links(&Contacts::default()).is_empty());
    }
}
