//! Plugin settings over the host's option store.
//!
//! The host persists options as plain strings keyed by name. This module
//! owns the two plugin keys, their defaults, the install and uninstall
//! hooks, and the settings form submission path.

use std::collections::{BTreeMap, HashMap};

use tracing::{debug, info};

use crate::sanitize::{parse_loose_boolean, sanitize_text_field};

/// Option key holding the Links Manager toggle.
pub const ENABLE_LINKS_MANAGER_KEY: &str = "blr_enable_links_manager";

/// Option key holding the custom container class.
pub const CUSTOM_CLASS_KEY: &str = "blr_custom_class";

/// Settings form field name for the Links Manager checkbox.
pub const ENABLE_LINKS_MANAGER_FIELD: &str = "enable_links_manager";

/// Settings form field name for the custom class text input.
pub const CUSTOM_CLASS_FIELD: &str = "custom_class";

/// Host option storage.
///
/// Reads never fail: an absent key is `None` and callers substitute their
/// own default. Writes are immediately visible to later reads.
pub trait SettingsStore {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&mut self, key: &str, value: &str);

    fn delete(&mut self, key: &str);

    /// Returns stored value or `default` when the key is absent.
    fn get_or(&self, key: &str, default: &str) -> String {
        self.get(key).unwrap_or_else(|| default.to_string())
    }
}

/// In-memory option store.
///
/// Backed by an ordered map so serialized fixtures stay stable across runs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemorySettings {
    options: BTreeMap<String, String>,
}

impl MemorySettings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Borrows all stored options.
    pub fn options(&self) -> &BTreeMap<String, String> {
        &self.options
    }
}

impl From<BTreeMap<String, String>> for MemorySettings {
    fn from(options: BTreeMap<String, String>) -> Self {
        Self { options }
    }
}

impl SettingsStore for MemorySettings {
    fn get(&self, key: &str) -> Option<String> {
        self.options.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.options.insert(key.to_string(), value.to_string());
    }

    fn delete(&mut self, key: &str) {
        self.options.remove(key);
    }
}

/// Typed view of the plugin's persisted settings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PluginSettings {
    pub links_manager_enabled: bool,
    pub custom_css_class: String,
}

impl PluginSettings {
    /// Reads settings from the store, substituting defaults for absent keys.
    pub fn load(store: &dyn SettingsStore) -> Self {
        Self {
            links_manager_enabled: links_manager_enabled(store),
            custom_css_class: custom_css_class(store),
        }
    }

    /// Writes both settings to the store.
    pub fn save(&self, store: &mut dyn SettingsStore) {
        store.set(
            ENABLE_LINKS_MANAGER_KEY,
            if self.links_manager_enabled { "1" } else { "0" },
        );
        store.set(CUSTOM_CLASS_KEY, &self.custom_css_class);
    }
}

/// Reads the Links Manager toggle, defaulting to disabled.
pub fn links_manager_enabled(store: &dyn SettingsStore) -> bool {
    parse_loose_boolean(store.get(ENABLE_LINKS_MANAGER_KEY).as_deref(), false)
}

/// Reads the custom container class, defaulting to empty.
pub fn custom_css_class(store: &dyn SettingsStore) -> String {
    store.get_or(CUSTOM_CLASS_KEY, "")
}

/// Seeds default settings on install.
///
/// Keys already present are left untouched, so reinstalling over an
/// existing configuration keeps it.
pub fn install(store: &mut dyn SettingsStore) {
    let defaults = PluginSettings::default();

    if store.get(ENABLE_LINKS_MANAGER_KEY).is_none() {
        store.set(ENABLE_LINKS_MANAGER_KEY, "0");
    }
    if store.get(CUSTOM_CLASS_KEY).is_none() {
        store.set(CUSTOM_CLASS_KEY, &defaults.custom_css_class);
    }

    info!("Seeded default plugin settings");
}

/// Removes every plugin setting on uninstall.
pub fn uninstall(store: &mut dyn SettingsStore) {
    store.delete(ENABLE_LINKS_MANAGER_KEY);
    store.delete(CUSTOM_CLASS_KEY);

    info!("Deleted plugin settings");
}

/// Applies a submitted settings form to the store.
///
/// An unchecked checkbox is absent from the submission and therefore
/// disables the Links Manager. The custom class is reduced to plain text.
/// Callers must follow up with the toggle controller's save hook so the
/// new state takes effect without waiting for the next admin page load.
///
/// # Arguments
///
/// * `form`: Submitted field names mapped to their raw values
/// * `store`: Option store receiving the sanitized values
///
/// # Returns
///
/// Settings as persisted
pub fn save_form(form: &HashMap<String, String>, store: &mut dyn SettingsStore) -> PluginSettings {
    let settings = PluginSettings {
        links_manager_enabled: parse_loose_boolean(
            form.get(ENABLE_LINKS_MANAGER_FIELD).map(String::as_str),
            false,
        ),
        custom_css_class: form
            .get(CUSTOM_CLASS_FIELD)
            .map(|v| sanitize_text_field(v))
            .unwrap_or_default(),
    };

    settings.save(store);
    debug!(
        links_manager_enabled = settings.links_manager_enabled,
        custom_css_class = %settings.custom_css_class,
        "Saved settings form"
    );

    settings
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_load_defaults_from_empty_store() {
        // Arrange
        let store = MemorySettings::new();

        // Act
        let settings = PluginSettings::load(&store);

        // Assert
        assert!(!settings.links_manager_enabled);
        assert_eq!(settings.custom_css_class, "");
    }

    #[test]
    fn test_save_then_load() {
        // Arrange
        let mut store = MemorySettings::new();
        let settings = PluginSettings {
            links_manager_enabled: true,
            custom_css_class: "friends".to_string(),
        };

        // Act
        settings.save(&mut store);

        // Assert
        assert_eq!(PluginSettings::load(&store), settings);
        assert_eq!(store.get(ENABLE_LINKS_MANAGER_KEY).as_deref(), Some("1"));
    }

    #[test]
    fn test_install_seeds_defaults() {
        // Arrange
        let mut store = MemorySettings::new();

        // Act
        install(&mut store);

        // Assert
        assert_eq!(store.get(ENABLE_LINKS_MANAGER_KEY).as_deref(), Some("0"));
        assert_eq!(store.get(CUSTOM_CLASS_KEY).as_deref(), Some(""));
        assert!(!links_manager_enabled(&store));
    }

    #[test]
    fn test_install_keeps_existing_values() {
        // Arrange
        let mut store = MemorySettings::new();
        store.set(ENABLE_LINKS_MANAGER_KEY, "1");
        store.set(CUSTOM_CLASS_KEY, "kept");

        // Act
        install(&mut store);

        // Assert
        assert!(links_manager_enabled(&store));
        assert_eq!(custom_css_class(&store), "kept");
    }

    #[test]
    fn test_uninstall_removes_only_plugin_keys() {
        // Arrange
        let mut store = MemorySettings::new();
        install(&mut store);
        store.set("blogname", "My Site");

        // Act
        uninstall(&mut store);

        // Assert
        assert!(store.get(ENABLE_LINKS_MANAGER_KEY).is_none());
        assert!(store.get(CUSTOM_CLASS_KEY).is_none());
        assert_eq!(store.options().len(), 1, "Unrelated options should survive");
    }

    #[test]
    fn test_save_form_checked() {
        // Arrange
        let mut store = MemorySettings::new();
        let submission = form(&[("enable_links_manager", "1"), ("custom_class", "my-links")]);

        // Act
        let saved = save_form(&submission, &mut store);

        // Assert
        assert!(saved.links_manager_enabled);
        assert_eq!(saved.custom_css_class, "my-links");
        assert_eq!(PluginSettings::load(&store), saved);
    }

    #[test]
    fn test_save_form_unchecked_disables() {
        // Arrange
        let mut store = MemorySettings::new();
        store.set(ENABLE_LINKS_MANAGER_KEY, "1");

        // Act
        let saved = save_form(&form(&[("custom_class", "")]), &mut store);

        // Assert
        assert!(!saved.links_manager_enabled);
        assert!(!links_manager_enabled(&store));
    }

    #[test]
    fn test_save_form_sanitizes_custom_class() {
        // Arrange
        let mut store = MemorySettings::new();
        let submission = form(&[("custom_class", " <b>links</b>\n\"x\" ")]);

        // Act
        let saved = save_form(&submission, &mut store);

        // Assert
        assert_eq!(saved.custom_css_class, "links \"x\"");
    }

    #[test]
    fn test_garbage_toggle_value_reads_disabled() {
        // Arrange
        let mut store = MemorySettings::new();
        store.set(ENABLE_LINKS_MANAGER_KEY, "maybe");

        // Act & Assert
        assert!(!links_manager_enabled(&store));
    }
}
