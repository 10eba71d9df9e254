//! Administrative settings page
//!
//! Renders the usage guide and the settings form. The form posts to the
//! host's generic settings endpoint; field names match the ones consumed
//! by [`crate::settings::save_form`].

use maud::{Markup, html};

use crate::i18n::Translator;
use crate::settings::{CUSTOM_CLASS_FIELD, ENABLE_LINKS_MANAGER_FIELD, PluginSettings};

/// Host endpoint receiving the settings form.
pub const FORM_ACTION: &str = "options.php";

/// Marker variants listed in the usage guide with their descriptions.
const USAGE: &[(&str, &str)] = &[
    ("[blogroll-links]", "Display all links."),
    (
        "[blogroll-links category=\"MyCategory\"]",
        "Filter links by category name.",
    ),
    (
        "[blogroll-links show_images=\"1\"]",
        "Show link images/icons if available.",
    ),
    (
        "[blogroll-links show_titles=\"1\"]",
        "Add link descriptions as tooltips.",
    ),
];

const BOX_STYLE: &str = "border: 1px solid #ccc; padding: 15px; margin-bottom: 20px; \
                         background-color: #f9f9f9; border-radius: 5px;";

/// Renders the settings page for the current settings.
///
/// # Arguments
///
/// * `settings`: Current values used to prefill the form
/// * `translator`: Source of localized labels
pub fn settings_page(settings: &PluginSettings, translator: &dyn Translator) -> Markup {
    let t = |text: &'static str| translator.translate(text);

    html! {
        div class="wrap" {
            h1 { (t("Blogroll Links Renderer Settings")) }

            div style=(BOX_STYLE) {
                h2 { (t("How to use:")) }
                @for &(example, description) in USAGE {
                    p {
                        code { (example) }
                        ": " (t(description))
                    }
                }
            }

            form method="post" action=(FORM_ACTION) {
                div style=(BOX_STYLE) {
                    h2 { (t("Enable Links Manager")) }
                    input type="checkbox" id=(ENABLE_LINKS_MANAGER_FIELD)
                        name=(ENABLE_LINKS_MANAGER_FIELD) value="1"
                        checked[settings.links_manager_enabled];
                    label for=(ENABLE_LINKS_MANAGER_FIELD) { (t("Enable Links Manager")) }
                }

                div style=(BOX_STYLE) {
                    h2 { (t("Custom CSS Class")) }
                    input type="text" id=(CUSTOM_CLASS_FIELD) name=(CUSTOM_CLASS_FIELD)
                        value=(settings.custom_css_class);
                }

                p class="submit" {
                    input type="submit" name="submit" id="submit" class="button button-primary"
                        value=(t("Save Changes"));
                }
            }
        }
    }
}
