//! Plugin option sets configured from key/value pairs

pub mod api;
pub mod builtin;

pub use api::{configure_plugin, PluginOptions};
pub use builtin::{configure_backups, configure_login, BackupOptions, LoginOptions};
