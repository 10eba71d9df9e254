//! Blogroll stylesheet

use anyhow::{Context, Result};
use maud::{Markup, PreEscaped, html};
use std::{fs, path::Path};

/// Fixes icon size regardless of the theme's image rules.
pub const STYLES: &str = include_str!("../assets/blogroll.css");

/// Inline `<style>` element for the page head.
pub fn head_styles() -> Markup {
    html! {
        style { (PreEscaped(STYLES)) }
    }
}

/// Writes the stylesheet as `blogroll.css` into `dir`.
pub fn write_css_assets(dir: &Path) -> Result<()> {
    let path = dir.join("blogroll.css");
    fs::write(&path, STYLES)
        .with_context(|| format!("Failed to write CSS asset: {}", path.display()))?;
    Ok(())
}
