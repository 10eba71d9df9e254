//! JSON site fixture standing in for the host platform.
//!
//! A fixture bundles bookmarks, media library entries and stored options in
//! one file. Loading it yields in-memory implementations of every host
//! collaborator; saving writes the options back so settings changes
//! persist between command invocations.

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::bookmark::{BookmarkRecord, MemoryBookmarks};
use crate::i18n::Translator;
use crate::media::MemoryMedia;
use crate::render::LinkRenderer;
use crate::settings::MemorySettings;

/// On-disk fixture layout.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteFile {
    #[serde(default)]
    pub bookmarks: Vec<BookmarkRecord>,
    /// Media library: attachment URL to attachment id.
    #[serde(default)]
    pub media: HashMap<String, u64>,
    #[serde(default)]
    pub options: BTreeMap<String, String>,
}

/// Loaded host collaborators.
#[derive(Debug, Clone, Default)]
pub struct Site {
    pub bookmarks: MemoryBookmarks,
    pub media: MemoryMedia,
    pub settings: MemorySettings,
}

impl From<SiteFile> for Site {
    fn from(file: SiteFile) -> Self {
        Self {
            bookmarks: MemoryBookmarks::new(file.bookmarks),
            media: MemoryMedia::new(file.media),
            settings: MemorySettings::from(file.options),
        }
    }
}

impl Site {
    /// Reads a fixture file.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read or is not valid fixture JSON.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read site fixture: {}", path.display()))?;
        let file: SiteFile = serde_json::from_str(&content)
            .with_context(|| format!("Invalid site fixture JSON: {}", path.display()))?;
        Ok(file.into())
    }

    /// Writes the stored options back into the fixture at `path`.
    ///
    /// Bookmarks and media entries are re-read from disk and left as they
    /// are; only options are owned by this tool.
    ///
    /// # Errors
    ///
    /// Returns error if the fixture cannot be read, parsed or written.
    pub fn save_options(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read site fixture: {}", path.display()))?;
        let mut file: SiteFile = serde_json::from_str(&content)
            .with_context(|| format!("Invalid site fixture JSON: {}", path.display()))?;

        file.options = self.settings.options().clone();

        let json = serde_json::to_string_pretty(&file).context("Failed to serialize site fixture")?;
        fs::write(path, json)
            .with_context(|| format!("Failed to write site fixture: {}", path.display()))?;
        Ok(())
    }

    /// Builds a renderer borrowing this site's collaborators.
    pub fn renderer<'a>(&'a self, translator: &'a dyn Translator) -> LinkRenderer<'a> {
        LinkRenderer::new(&self.bookmarks, &self.media, &self.settings, translator)
    }
}
