//! Links Manager feature toggle.
//!
//! Keeps the host's legacy Links Manager in lockstep with the plugin
//! setting. Reconciliation runs on every administrative page load and again
//! right after the settings form is saved; it is idempotent, so running it
//! repeatedly only corrects drift introduced elsewhere.

use std::collections::{BTreeMap, BTreeSet};

use tracing::{debug, info};

use crate::settings::{SettingsStore, links_manager_enabled};

/// Host feature flag controlled by the toggle.
pub const LINK_MANAGER_FLAG: &str = "link_manager_enabled";

/// Admin menu entry of the Links Manager.
pub const LINK_MANAGER_MENU: &str = "link-manager.php";

/// Capability required to see and manage the Links Manager menu.
pub const MANAGE_CAPABILITY: &str = "manage_links";

/// Host capabilities used by the toggle controller.
pub trait Platform {
    /// Overrides the resolved value of a feature flag for this request,
    /// regardless of what is stored.
    fn force_feature(&mut self, flag: &str, enabled: bool);

    fn hide_menu_entry(&mut self, id: &str);

    fn current_user_can(&self, capability: &str) -> bool;
}

/// Toggle controller states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeatureState {
    Enabled,
    Disabled,
}

impl FeatureState {
    /// Desired state for the current settings.
    pub fn from_settings(settings: &dyn SettingsStore) -> Self {
        if links_manager_enabled(settings) {
            FeatureState::Enabled
        } else {
            FeatureState::Disabled
        }
    }

    pub fn is_enabled(self) -> bool {
        self == FeatureState::Enabled
    }
}

/// Menu outcome for the current user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuVisibility {
    Visible,
    Hidden,
}

/// Forces the host flag and its stored enable record to match the setting.
///
/// Runs on every administrative page load. Enabled writes the stored
/// record; disabled deletes it. The override is applied in both cases so
/// the setting wins even when something else wrote the stored record.
///
/// # Returns
///
/// State that was applied
pub fn reconcile(settings: &mut dyn SettingsStore, platform: &mut dyn Platform) -> FeatureState {
    let state = FeatureState::from_settings(settings);

    platform.force_feature(LINK_MANAGER_FLAG, state.is_enabled());
    match state {
        FeatureState::Enabled => settings.set(LINK_MANAGER_FLAG, "1"),
        FeatureState::Disabled => settings.delete(LINK_MANAGER_FLAG),
    }

    debug!(?state, "Reconciled Links Manager state");
    state
}

/// Hides the Links Manager menu entry when the feature is disabled.
///
/// Only users holding the management capability would see the entry, so
/// only they trigger the explicit hide. Everyone else already gets it
/// hidden by the host.
pub fn apply_menu(settings: &dyn SettingsStore, platform: &mut dyn Platform) -> MenuVisibility {
    let state = FeatureState::from_settings(settings);
    let privileged = platform.current_user_can(MANAGE_CAPABILITY);

    match (state, privileged) {
        (FeatureState::Enabled, true) => MenuVisibility::Visible,
        (FeatureState::Enabled, false) => MenuVisibility::Hidden,
        (FeatureState::Disabled, true) => {
            platform.hide_menu_entry(LINK_MANAGER_MENU);
            MenuVisibility::Hidden
        }
        (FeatureState::Disabled, false) => MenuVisibility::Hidden,
    }
}

/// Full administrative page load pass: reconciliation then menu.
pub fn admin_init(
    settings: &mut dyn SettingsStore,
    platform: &mut dyn Platform,
) -> (FeatureState, MenuVisibility) {
    let state = reconcile(settings, platform);
    let menu = apply_menu(settings, platform);
    (state, menu)
}

/// Applies a freshly saved setting without waiting for the next page load.
pub fn on_settings_saved(
    settings: &mut dyn SettingsStore,
    platform: &mut dyn Platform,
) -> FeatureState {
    let state = reconcile(settings, platform);
    info!(?state, "Applied Links Manager setting after save");
    state
}

/// In-memory host platform.
#[derive(Debug, Clone, Default)]
pub struct MemoryPlatform {
    overrides: BTreeMap<String, bool>,
    hidden_menus: BTreeSet<String>,
    capabilities: BTreeSet<String>,
}

impl MemoryPlatform {
    /// Platform whose current user holds `capabilities`.
    pub fn with_capabilities<I, S>(capabilities: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            capabilities: capabilities.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Platform whose current user administers the site.
    pub fn administrator() -> Self {
        Self::with_capabilities(["manage_options", MANAGE_CAPABILITY])
    }

    /// Resolves a flag the way the host does: override first, then store.
    pub fn feature_enabled(&self, flag: &str, settings: &dyn SettingsStore) -> bool {
        match self.overrides.get(flag) {
            Some(forced) => *forced,
            None => settings.get(flag).is_some_and(|v| !v.is_empty() && v != "0"),
        }
    }

    /// Whether the current user sees menu entry `id`.
    pub fn menu_visible(&self, id: &str, capability: &str) -> bool {
        !self.hidden_menus.contains(id) && self.capabilities.contains(capability)
    }

    pub fn hidden_menus(&self) -> &BTreeSet<String> {
        &self.hidden_menus
    }
}

impl Platform for MemoryPlatform {
    fn force_feature(&mut self, flag: &str, enabled: bool) {
        self.overrides.insert(flag.to_string(), enabled);
    }

    fn hide_menu_entry(&mut self, id: &str) {
        self.hidden_menus.insert(id.to_string());
    }

    fn current_user_can(&self, capability: &str) -> bool {
        self.capabilities.contains(capability)
    }
}
