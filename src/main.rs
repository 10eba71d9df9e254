use anyhow::{Context, Result};
use blogroll::components::layout::page_wrapper;
use blogroll::components::settings_page::settings_page;
use blogroll::config::{Command, Config};
use blogroll::{
    Catalog, PluginSettings, Site, Translator, Untranslated, settings, shortcode, toggle,
    write_css_assets,
};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Title of standalone preview pages.
const PREVIEW_TITLE: &str = "Blogroll Preview";

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("blogroll=info")),
        )
        .init();

    let config = Config::parse();
    config.validate().context("Invalid configuration")?;

    let catalog = match &config.locale {
        Some(path) => Some(Catalog::from_json_file(path).context("Failed to load message catalog")?),
        None => None,
    };
    let translator: &dyn Translator = match &catalog {
        Some(catalog) => catalog as &dyn Translator,
        None => &Untranslated,
    };

    let mut site = Site::load(&config.site).context("Failed to load site")?;

    match config.command {
        Command::Render {
            content,
            shortcode: marker,
            output,
            preview,
            open: open_browser,
            css_dir,
        } => {
            let source = match &content {
                Some(path) => fs::read_to_string(path)
                    .with_context(|| format!("Failed to read content: {}", path.display()))?,
                None => marker,
            };

            let fragment = shortcode::expand(&source, &site.renderer(translator));
            let html = if preview {
                page_wrapper(PREVIEW_TITLE, &fragment).into_string()
            } else {
                fragment
            };

            emit(output.as_deref(), &html)?;

            if let Some(dir) = &css_dir {
                fs::create_dir_all(dir)
                    .with_context(|| format!("Failed to create CSS directory: {}", dir.display()))?;
                write_css_assets(dir)?;
            }

            if open_browser
                && let Some(path) = &output
                && let Err(e) = open::that(path)
            {
                warn!("Failed to open {}: {:#}", path.display(), e);
            }
        }

        Command::SettingsPage { output } => {
            let current = PluginSettings::load(&site.settings);
            let html = settings_page(&current, translator).into_string();
            emit(output.as_deref(), &html)?;
        }

        Command::SaveSettings {
            enable_links_manager,
            custom_class,
        } => {
            let mut form = HashMap::from([(
                settings::CUSTOM_CLASS_FIELD.to_string(),
                custom_class,
            )]);
            if enable_links_manager {
                form.insert(
                    settings::ENABLE_LINKS_MANAGER_FIELD.to_string(),
                    "1".to_string(),
                );
            }

            let saved = settings::save_form(&form, &mut site.settings);
            let mut platform = toggle::MemoryPlatform::administrator();
            let state = toggle::on_settings_saved(&mut site.settings, &mut platform);

            site.save_options(&config.site)
                .context("Failed to persist settings")?;

            println!(
                "Saved: links manager {:?}, custom class {:?}",
                state, saved.custom_css_class
            );
        }

        Command::AdminInit { as_guest } => {
            let mut platform = if as_guest {
                toggle::MemoryPlatform::with_capabilities(["read"])
            } else {
                toggle::MemoryPlatform::administrator()
            };

            let (state, menu) = toggle::admin_init(&mut site.settings, &mut platform);
            site.save_options(&config.site)
                .context("Failed to persist settings")?;

            println!("Links Manager: {:?}", state);
            println!(
                "Feature flag: {}",
                platform.feature_enabled(toggle::LINK_MANAGER_FLAG, &site.settings)
            );
            println!("Menu entry: {:?}", menu);
        }

        Command::Install => {
            settings::install(&mut site.settings);
            site.save_options(&config.site)
                .context("Failed to persist settings")?;
            println!("Installed default settings into {}", config.site.display());
        }

        Command::Uninstall => {
            settings::uninstall(&mut site.settings);
            site.save_options(&config.site)
                .context("Failed to persist settings")?;
            println!("Removed plugin settings from {}", config.site.display());
        }
    }

    Ok(())
}

/// Writes `html` to `output`, or to stdout when no path is given.
fn emit(output: Option<&Path>, html: &str) -> Result<()> {
    match output {
        Some(path) => {
            if let Some(parent) = path.parent()
                && !parent.as_os_str().is_empty()
            {
                fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create output directory: {}", parent.display())
                })?;
            }
            fs::write(path, html)
                .with_context(|| format!("Failed to write output: {}", path.display()))?;
            info!("Generated: {}", path.display());
        }
        None => println!("{}", html),
    }
    Ok(())
}
