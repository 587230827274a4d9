//! CLI commands

pub mod config;
pub mod date;
pub mod init;
pub mod list;
