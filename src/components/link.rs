//! Blogroll link list components

use maud::{Markup, html};

use crate::media::ImageMarkup;
use crate::sanitize::{container_class, sanitize_url};

/// Base class of the list container.
pub const CONTAINER_CLASS: &str = "blogroll-links";

/// Display data for a single bookmark block.
#[derive(Debug, Clone)]
pub struct LinkBlock<'a> {
    pub url: &'a str,
    pub name: &'a str,
    /// Tooltip text; `None` omits the attribute entirely.
    pub title: Option<&'a str>,
    pub image: Option<ImageMarkup>,
}

/// Renders one bookmark as an anchor opening in a new browsing context.
///
/// The anchor carries `rel="noopener noreferrer"` so the opened page cannot
/// reach back into this window. Untrusted image fields, the name, the
/// title and the URL are escaped by maud; the URL is also scheme filtered.
pub fn link_block(block: &LinkBlock<'_>) -> Markup {
    let image = block.image.as_ref().filter(|image| !image.is_empty());

    html! {
        div class="blogroll-link" {
            a href=(sanitize_url(block.url)) target="_blank" rel="noopener noreferrer" title=[block.title] {
                @if let Some(image) = image {
                    (image) " "
                }
                span class="blogroll-link-name" { (block.name) }
            }
        }
    }
}

/// Wraps link blocks in the list container.
///
/// # Arguments
///
/// * `custom_class`: Configured extra class, appended after the base class
/// * `blocks`: Bookmark blocks in display order
pub fn link_list(custom_class: &str, blocks: &[LinkBlock<'_>]) -> Markup {
    html! {
        div class=(container_class(CONTAINER_CLASS, custom_class)) {
            @for block in blocks {
                (link_block(block))
            }
        }
    }
}

/// Renders the empty state paragraph.
pub fn empty_state(message: &str) -> Markup {
    html! {
        p { (message) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_block_with_title_and_image() {
        // Arrange
        let block = LinkBlock {
            url: "https://example.com",
            name: "Example",
            title: Some("A site"),
            image: Some(ImageMarkup::Untrusted {
                src: "https://example.com/i.png".to_string(),
                alt: "Example".to_string(),
            }),
        };

        // Act
        let html = link_block(&block).into_string();

        // Assert
        assert!(html.contains(r#"title="A site""#));
        assert!(html.contains(r#"target="_blank""#));
        assert!(html.contains(r#"rel="noopener noreferrer""#));
        assert!(html.contains(r#"decoding="async"> <span class="blogroll-link-name">"#));
    }

    #[test]
    fn test_link_block_without_title() {
        // Arrange
        let block = LinkBlock {
            url: "https://example.com",
            name: "Example",
            title: None,
            image: None,
        };

        // Act
        let html = link_block(&block).into_string();

        // Assert
        assert!(!html.contains("title"));
        assert!(!html.contains("<img"));
    }

    #[test]
    fn test_link_block_skips_empty_managed_image() {
        // Arrange
        let block = LinkBlock {
            url: "https://example.com/",
            name: "Example",
            title: None,
            image: Some(ImageMarkup::Trusted(String::new())),
        };

        // Act
        let html = link_block(&block).into_string();

        // Assert
        assert_eq!(
            html,
            r#"<div class="blogroll-link"><a href="https://example.com/" target="_blank" rel="noopener noreferrer"><span class="blogroll-link-name">Example</span></a></div>"#
        );
    }

    #[test]
    fn test_link_list_container_class() {
        // Act
        let html = link_list("mine", &[]).into_string();

        // Assert
        assert_eq!(html, r#"<div class="blogroll-links mine"></div>"#);
    }

    #[test]
    fn test_empty_state_escapes() {
        assert_eq!(empty_state("<none>").into_string(), "<p>&lt;none&gt;</p>");
    }
}
