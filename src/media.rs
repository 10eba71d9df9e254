//! Bookmark image resolution against the host media library.
//!
//! An image reference takes exactly one of two paths. URLs the media
//! library knows are rendered by the host's own image renderer and the
//! resulting markup is trusted. Anything else is an external image whose
//! `src` and `alt` stay untrusted until maud escapes them at assembly.

use std::collections::{BTreeMap, HashMap};

use maud::{Markup, PreEscaped, Render, html};
use tracing::debug;

use crate::bookmark::BookmarkRecord;
use crate::sanitize::sanitize_url;

/// CSS class marking a blogroll icon.
pub const IMAGE_CLASS: &str = "blogroll-link-image";

/// Icon edge length in CSS pixels.
pub const ICON_SIZE: u32 = 16;

/// Named image size understood by the host renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizePreset {
    Thumbnail,
}

impl SizePreset {
    pub fn as_str(self) -> &'static str {
        match self {
            SizePreset::Thumbnail => "thumbnail",
        }
    }
}

/// Extra attributes passed to the host image renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageAttributes {
    pub class: String,
    pub alt: String,
}

/// Host media library.
pub trait MediaLibrary {
    /// Maps a media URL back to its attachment id, `None` for unknown URLs.
    fn resolve_attachment_id(&self, url: &str) -> Option<u64>;

    /// Renders an attachment as an image element.
    ///
    /// The returned markup is produced and escaped by the host and is
    /// inserted without further processing. It is empty when the host has
    /// nothing to show for the attachment.
    fn render_attachment_image(
        &self,
        id: u64,
        size: SizePreset,
        attributes: &ImageAttributes,
    ) -> String;
}

/// Image fragment for one bookmark.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageMarkup {
    /// Markup from the host renderer, inserted verbatim.
    Trusted(String),
    /// External image; both fields are raw and escaped on render.
    Untrusted { src: String, alt: String },
}

impl ImageMarkup {
    /// Whether rendering produces no element at all.
    pub fn is_empty(&self) -> bool {
        match self {
            ImageMarkup::Trusted(html) => html.trim().is_empty(),
            ImageMarkup::Untrusted { .. } => false,
        }
    }
}

impl Render for ImageMarkup {
    fn render(&self) -> Markup {
        match self {
            ImageMarkup::Trusted(html) => PreEscaped(html.clone()),
            ImageMarkup::Untrusted { src, alt } => html! {
                img src=(sanitize_url(src)) alt=(alt) class=(IMAGE_CLASS)
                    width=(ICON_SIZE) height=(ICON_SIZE)
                    loading="lazy" decoding="async";
            },
        }
    }
}

/// Resolves a bookmark's image reference.
///
/// # Returns
///
/// `None` when the record has no image, otherwise the trusted host
/// rendering for media library URLs or the untrusted external fallback.
/// Attachment id 0 is the host's "not found" value and takes the
/// external path.
pub fn resolve_image(record: &BookmarkRecord, media: &dyn MediaLibrary) -> Option<ImageMarkup> {
    if record.image.is_empty() {
        return None;
    }

    match media.resolve_attachment_id(&record.image) {
        Some(id) if id > 0 => {
            debug!(id, url = %record.image, "Resolved local media image");
            let attributes = ImageAttributes {
                class: IMAGE_CLASS.to_string(),
                alt: record.name.clone(),
            };
            Some(ImageMarkup::Trusted(media.render_attachment_image(
                id,
                SizePreset::Thumbnail,
                &attributes,
            )))
        }
        _ => {
            debug!(url = %record.image, "Using external image");
            Some(ImageMarkup::Untrusted {
                src: record.image.clone(),
                alt: record.name.clone(),
            })
        }
    }
}

/// In-memory media library keyed by attachment URL.
///
/// Several URLs may share one attachment id; the first URL registered for
/// an id is the one its image renders from.
#[derive(Debug, Clone, Default)]
pub struct MemoryMedia {
    attachments: HashMap<String, u64>,
    urls: BTreeMap<u64, String>,
}

impl MemoryMedia {
    /// Builds a library from a URL to id map, registering URLs in sorted
    /// order.
    pub fn new(attachments: HashMap<String, u64>) -> Self {
        let mut media = Self::default();
        for (url, id) in attachments.into_iter().collect::<BTreeMap<_, _>>() {
            media.insert(url, id);
        }
        media
    }

    /// Registers an attachment URL under `id`.
    pub fn insert(&mut self, url: impl Into<String>, id: u64) {
        let url = url.into();
        self.urls.entry(id).or_insert_with(|| url.clone());
        self.attachments.insert(url, id);
    }

    fn url_for(&self, id: u64) -> Option<&str> {
        self.urls.get(&id).map(String::as_str)
    }
}

impl MediaLibrary for MemoryMedia {
    fn resolve_attachment_id(&self, url: &str) -> Option<u64> {
        self.attachments.get(url).copied()
    }

    fn render_attachment_image(
        &self,
        id: u64,
        size: SizePreset,
        attributes: &ImageAttributes,
    ) -> String {
        let Some(url) = self.url_for(id) else {
            return String::new();
        };
        let class = format!(
            "attachment-{size} size-{size} {}",
            attributes.class,
            size = size.as_str()
        );

        html! {
            img width=(ICON_SIZE) height=(ICON_SIZE) src=(url) class=(class)
                alt=(attributes.alt) decoding="async";
        }
        .into_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn library() -> MemoryMedia {
        let mut media = MemoryMedia::default();
        media.insert("https://site.example/uploads/icon.png", 42);
        media
    }

    #[test]
    fn test_no_image_reference() {
        // Arrange
        let record = BookmarkRecord::new("https://example.com", "Example");

        // Act & Assert
        assert_eq!(resolve_image(&record, &library()), None);
    }

    #[test]
    fn test_local_image_is_trusted() {
        // Arrange
        let record = BookmarkRecord::new("https://example.com", "Example")
            .with_image("https://site.example/uploads/icon.png");

        // Act
        let image = resolve_image(&record, &library()).expect("Should resolve image");

        // Assert
        match image {
            ImageMarkup::Trusted(html) => {
                assert!(html.contains("attachment-thumbnail"));
                assert!(html.contains(IMAGE_CLASS));
                assert!(html.contains(r#"alt="Example""#));
                assert!(!html.contains("loading"));
            }
            other => panic!("Expected trusted markup, got {:?}", other),
        }
    }

    #[test]
    fn test_external_image_is_untrusted() {
        // Arrange
        let record = BookmarkRecord::new("https://example.com", "Example")
            .with_image("https://cdn.example.com/favicon.png");

        // Act
        let image = resolve_image(&record, &library());

        // Assert
        assert_eq!(
            image,
            Some(ImageMarkup::Untrusted {
                src: "https://cdn.example.com/favicon.png".to_string(),
                alt: "Example".to_string(),
            })
        );
    }

    #[test]
    fn test_untrusted_render_escapes() {
        // Arrange
        let image = ImageMarkup::Untrusted {
            src: "https://cdn.example.com/i.png?a=1&b=\"2\"".to_string(),
            alt: "<Tom & \"Jerry\">".to_string(),
        };

        // Act
        let html = image.render().into_string();

        // Assert
        assert!(html.contains(r#"alt="&lt;Tom &amp; &quot;Jerry&quot;&gt;""#));
        assert!(html.contains("a=1&amp;b=&quot;2&quot;"));
        assert!(html.contains(r#"loading="lazy""#));
        assert!(html.contains(r#"decoding="async""#));
        assert!(html.contains(r#"class="blogroll-link-image""#));
    }

    #[test]
    fn test_untrusted_render_drops_script_url() {
        // Arrange
        let image = ImageMarkup::Untrusted {
            src: "javascript:alert(1)".to_string(),
            alt: "x".to_string(),
        };

        // Act
        let html = image.render().into_string();

        // Assert
        assert!(html.contains(r#"src="""#));
        assert!(!html.contains("javascript"));
    }

    #[test]
    fn test_trusted_render_is_verbatim() {
        // Arrange
        let image = ImageMarkup::Trusted("<img src=\"x\">".to_string());

        // Act & Assert
        assert_eq!(image.render().into_string(), "<img src=\"x\">");
    }

    #[test]
    fn test_zero_attachment_id_takes_external_path() {
        // Arrange
        let mut media = MemoryMedia::default();
        media.insert("https://site.example/uploads/zero.png", 0);
        let record = BookmarkRecord::new("https://example.com", "Example")
            .with_image("https://site.example/uploads/zero.png");

        // Act
        let image = resolve_image(&record, &media).expect("Should resolve image");
        let html = image.render().into_string();

        // Assert
        assert!(matches!(image, ImageMarkup::Untrusted { .. }));
        assert!(html.contains(r#"loading="lazy""#));
        assert!(!html.contains("attachment-thumbnail"));
    }

    #[test]
    fn test_shared_attachment_id_renders_first_url() {
        // Arrange
        let attributes = ImageAttributes {
            class: IMAGE_CLASS.to_string(),
            alt: "Example".to_string(),
        };
        let mut inserted = MemoryMedia::default();
        inserted.insert("https://site.example/uploads/b.png", 7);
        inserted.insert("https://site.example/uploads/a.png", 7);

        // Act
        let from_insert = inserted.render_attachment_image(7, SizePreset::Thumbnail, &attributes);
        let from_maps: Vec<String> = (0..32)
            .map(|_| {
                let media = MemoryMedia::new(HashMap::from([
                    ("https://site.example/uploads/b.png".to_string(), 7),
                    ("https://site.example/uploads/a.png".to_string(), 7),
                ]));
                media.render_attachment_image(7, SizePreset::Thumbnail, &attributes)
            })
            .collect();

        // Assert
        assert!(from_insert.contains(r#"src="https://site.example/uploads/b.png""#));
        assert!(
            from_maps
                .iter()
                .all(|html| html.contains(r#"src="https://site.example/uploads/a.png""#))
        );
    }

    #[test]
    fn test_empty_trusted_markup_is_empty() {
        assert!(ImageMarkup::Trusted("  ".to_string()).is_empty());
        assert!(!ImageMarkup::Trusted("<img>".to_string()).is_empty());
        assert!(
            !ImageMarkup::Untrusted {
                src: String::new(),
                alt: String::new(),
            }
            .is_empty()
        );
    }
}
