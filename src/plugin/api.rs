//! Plugin option API

use crate::error::Result;

/// Option set that a plugin is configured with
pub trait PluginOptions: Default {
    /// Get the plugin name
    fn name(&self) -> &str;

    /// Set one option by key. `None` clears the option back to its default.
    /// Unknown keys are an error.
    fn set(&mut self, key: &str, value: Option<&str>) -> Result<()>;
}

/// Build an option set from its defaults, applying `overrides` in order.
/// A key given twice keeps the last value.
pub fn configure_plugin<T: PluginOptions>(overrides: &[(&str, Option<&str>)]) -> Result<T> {
    let mut options = T::default();
    for (key, value) in overrides {
        options.set(key, *value)?;
    }
    tracing::debug!(
        "Configured plugin '{}' with {} override(s)",
        options.name(),
        overrides.len()
    );
    Ok(options)
}
