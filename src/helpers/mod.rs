//! Helper functions for templates
//!
//! Date formatting, URL building, HTML snippets, contact links and
//! pagination, all driven by [`SiteConfig`](crate::config::SiteConfig) values.

mod contacts;
mod date;
mod html;
mod pagination;
mod url;

pub use contacts::*;
pub use date::*;
pub use html::*;
pub use pagination::*;
pub use url::*;
