//! Link render pipeline behind the `[blogroll-links]` marker.
//!
//! Attribute parsing, bookmark query, per record image resolution and HTML
//! assembly. Rendering never fails: bad attributes fall back to defaults,
//! unresolvable images take the external path and an empty result yields
//! the empty state paragraph.

use std::collections::HashMap;

use maud::Markup;
use tracing::debug;

use crate::bookmark::{BookmarkQuery, BookmarkStore};
use crate::components::link::{LinkBlock, empty_state, link_list};
use crate::i18n::Translator;
use crate::media::{MediaLibrary, resolve_image};
use crate::sanitize::{parse_loose_boolean, sanitize_text_field};
use crate::settings::{SettingsStore, custom_css_class};

/// Marker attribute filtering by category name.
pub const CATEGORY_ATTR: &str = "category";

/// Marker attribute toggling bookmark images.
pub const SHOW_IMAGES_ATTR: &str = "show_images";

/// Marker attribute toggling description tooltips.
pub const SHOW_TITLES_ATTR: &str = "show_titles";

/// Message shown when no bookmark matches.
pub const NO_LINKS_MESSAGE: &str = "No links found.";

/// Parsed marker options for one render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderRequest {
    pub category: String,
    pub show_images: bool,
    pub show_titles: bool,
}

impl Default for RenderRequest {
    fn default() -> Self {
        Self {
            category: String::new(),
            show_images: true,
            show_titles: false,
        }
    }
}

impl RenderRequest {
    /// Builds a request from raw marker attributes.
    ///
    /// Unknown keys are ignored and absent keys keep their defaults. The
    /// category is reduced to plain text; toggles use loose boolean parsing.
    pub fn from_attributes(attributes: &HashMap<String, String>) -> Self {
        let defaults = Self::default();
        let get = |key: &str| attributes.get(key).map(String::as_str);

        Self {
            category: get(CATEGORY_ATTR)
                .map(sanitize_text_field)
                .unwrap_or(defaults.category),
            show_images: parse_loose_boolean(get(SHOW_IMAGES_ATTR), defaults.show_images),
            show_titles: parse_loose_boolean(get(SHOW_TITLES_ATTR), defaults.show_titles),
        }
    }

    /// Query parameters for this request.
    pub fn query(&self) -> BookmarkQuery {
        BookmarkQuery::by_name(&self.category)
    }
}

/// Renders blogroll bookmarks using host collaborators.
pub struct LinkRenderer<'a> {
    bookmarks: &'a dyn BookmarkStore,
    media: &'a dyn MediaLibrary,
    settings: &'a dyn SettingsStore,
    translator: &'a dyn Translator,
}

impl<'a> LinkRenderer<'a> {
    pub fn new(
        bookmarks: &'a dyn BookmarkStore,
        media: &'a dyn MediaLibrary,
        settings: &'a dyn SettingsStore,
        translator: &'a dyn Translator,
    ) -> Self {
        Self {
            bookmarks,
            media,
            settings,
            translator,
        }
    }

    /// Renders the bookmark list for a parsed request.
    ///
    /// # Returns
    ///
    /// Container markup with one block per bookmark in query order, or the
    /// translated empty state paragraph when nothing matches
    pub fn render(&self, request: &RenderRequest) -> Markup {
        let query = request.query();
        let records = self.bookmarks.query(&query);

        debug!(
            category = %request.category,
            show_images = request.show_images,
            show_titles = request.show_titles,
            count = records.len(),
            "Fetched bookmarks"
        );

        if records.is_empty() {
            return empty_state(&self.translator.translate(NO_LINKS_MESSAGE));
        }

        let blocks: Vec<LinkBlock<'_>> = records
            .iter()
            .map(|record| LinkBlock {
                url: &record.url,
                name: &record.name,
                title: (request.show_titles && !record.description.is_empty())
                    .then_some(record.description.as_str()),
                image: if request.show_images {
                    resolve_image(record, self.media)
                } else {
                    None
                },
            })
            .collect();

        link_list(&custom_css_class(self.settings), &blocks)
    }

    /// Renders directly from raw marker attributes.
    pub fn render_attributes(&self, attributes: &HashMap<String, String>) -> String {
        self.render(&RenderRequest::from_attributes(attributes))
            .into_string()
    }
}
