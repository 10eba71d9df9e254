//! Message translation for user facing strings.

use std::borrow::Cow;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Looks up localized text for an English source message.
pub trait Translator {
    fn translate<'a>(&'a self, text: &'a str) -> Cow<'a, str>;
}

/// Returns every message unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct Untranslated;

impl Translator for Untranslated {
    fn translate<'a>(&'a self, text: &'a str) -> Cow<'a, str> {
        Cow::Borrowed(text)
    }
}

/// Message catalog mapping source strings to translations.
///
/// Messages missing from the catalog fall back to the source text.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    messages: HashMap<String, String>,
}

impl Catalog {
    pub fn new(messages: HashMap<String, String>) -> Self {
        Self { messages }
    }

    /// Loads a catalog from a flat JSON object of `source: translation` pairs.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read or is not a string map.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read catalog: {}", path.display()))?;
        let messages = serde_json::from_str(&content)
            .with_context(|| format!("Invalid catalog JSON: {}", path.display()))?;
        Ok(Self { messages })
    }
}

impl Translator for Catalog {
    fn translate<'a>(&'a self, text: &'a str) -> Cow<'a, str> {
        match self.messages.get(text) {
            Some(translated) => Cow::Borrowed(translated.as_str()),
            None => Cow::Borrowed(text),
        }
    }
}
