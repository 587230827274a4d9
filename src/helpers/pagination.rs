//! Pagination helpers driven by `postsPerPage`

use super::url::url_for;
use crate::config::SiteConfig;

/// Number of listing pages for `total` posts, never less than one
pub fn page_count(total: usize, per_page: usize) -> usize {
    if total == 0 {
        return 1;
    }
    total.div_ceil(per_page.max(1))
}

/// Path of the listing page with 0-based index `page`
///
/// # Examples
/// ```ignore
/// page_path(&config, 0) // -> "/"
/// page_path(&config, 2) // -> "/page/2"
/// ```
pub fn page_path(config: &SiteConfig, page: usize) -> String {
    if page == 0 {
        url_for(config, "/")
    } else {
        url_for(config, &format!("page/{}", page))
    }
}
