//! Built-in plugin option sets

use serde::Serialize;

use super::api::{configure_plugin, PluginOptions};
use crate::error::{Error, Result};

const DEFAULT_BACKUP_PATH: &str = "~/backups";
const DEFAULT_BACKUP_PREFIX: &str = "copy_";
const DEFAULT_BACKUP_EXTENSION: &str = ".txt";

/// Where and how backups are written
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BackupOptions {
    pub path: String,
    pub prefix: String,
    pub extension: String,
}

impl Default for BackupOptions {
    fn default() -> Self {
        Self {
            path: DEFAULT_BACKUP_PATH.to_string(),
            prefix: DEFAULT_BACKUP_PREFIX.to_string(),
            extension: DEFAULT_BACKUP_EXTENSION.to_string(),
        }
    }
}

impl PluginOptions for BackupOptions {
    fn name(&self) -> &str {
        "backups"
    }

    fn set(&mut self, key: &str, value: Option<&str>) -> Result<()> {
        let (field, default) = match key {
            "path" => (&mut self.path, DEFAULT_BACKUP_PATH),
            "prefix" => (&mut self.prefix, DEFAULT_BACKUP_PREFIX),
            "extension" => (&mut self.extension, DEFAULT_BACKUP_EXTENSION),
            other => return Err(Error::UnknownPluginOption(other.to_string())),
        };
        *field = value.unwrap_or(default).to_string();
        Ok(())
    }
}

/// Login credentials, all unset by default
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LoginOptions {
    pub user: Option<String>,
    pub password: Option<String>,
    pub token: Option<String>,
}

impl PluginOptions for LoginOptions {
    fn name(&self) -> &str {
        "login"
    }

    fn set(&mut self, key: &str, value: Option<&str>) -> Result<()> {
        let field = match key {
            "user" => &mut self.user,
            "password" => &mut self.password,
            "token" => &mut self.token,
            other => return Err(Error::UnknownPluginOption(other.to_string())),
        };
        *field = value.map(str::to_string);
        Ok(())
    }
}

/// Backup options from defaults plus key/value overrides
pub fn configure_backups(overrides: &[(&str, Option<&str>)]) -> Result<BackupOptions> {
    configure_plugin(overrides)
}

/// Login options from defaults plus key/value overrides
pub fn configure_login(overrides: &[(&str, Option<&str>)]) -> Result<LoginOptions> {
    configure_plugin(overrides)
}
