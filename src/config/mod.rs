//! Configuration module

mod site;

pub use site::Author;
pub use site::Contacts;
pub use site::MenuItem;
pub use site::Platform;
pub use site::SiteConfig;
