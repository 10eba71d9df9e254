//! Page layout wrapper component

use maud::{DOCTYPE, Markup, PreEscaped, html};

use crate::assets::head_styles;

/// Wraps content in a standalone HTML document
///
/// Used for previews outside the host platform. The head carries the
/// blogroll icon styles the host would normally inject, so rendered
/// fragments look the same as on a live page.
///
/// # Arguments
///
/// * `title`: Document title
/// * `body`: Pre-rendered HTML placed in the page body
///
/// # Returns
///
/// Complete HTML document
pub fn page_wrapper(title: &str, body: &str) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                (head_styles())
            }
            body {
                main class="entry-content" {
                    (PreEscaped(body))
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_wrapper_structure() {
        // Act
        let html = page_wrapper("Links & More", "<p>body</p>").into_string();

        // Assert
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Links &amp; More</title>"));
        assert!(html.contains(".blogroll-link-image"));
        assert!(html.contains(r#"<main class="entry-content"><p>body</p></main>"#));
    }
}
