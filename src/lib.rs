//! Blogroll bookmark rendering for the `[blogroll-links]` content marker.
//!
//! The host platform owns bookmarks, media and option storage; this crate
//! consumes them through the collaborator traits re-exported below, renders
//! bookmark lists as HTML, and keeps the host's Links Manager feature in
//! step with the plugin settings.

pub mod assets;
pub mod bookmark;
pub mod components;
pub mod config;
pub mod i18n;
pub mod media;
pub mod render;
pub mod sanitize;
pub mod settings;
pub mod shortcode;
pub mod site;
pub mod toggle;

pub use assets::{head_styles, write_css_assets};
pub use bookmark::{BookmarkQuery, BookmarkRecord, BookmarkStore, MemoryBookmarks, Order, OrderBy};
pub use config::Config;
pub use i18n::{Catalog, Translator, Untranslated};
pub use media::{ImageAttributes, ImageMarkup, MediaLibrary, MemoryMedia, SizePreset, resolve_image};
pub use render::{LinkRenderer, RenderRequest};
pub use sanitize::{parse_loose_boolean, sanitize_text_field, sanitize_url};
pub use settings::{MemorySettings, PluginSettings, SettingsStore};
pub use site::Site;
pub use toggle::{FeatureState, MemoryPlatform, MenuVisibility, Platform};
