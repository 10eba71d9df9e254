//! Command line configuration.

use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command line configuration for the blogroll tool.
#[derive(Debug, Clone, Parser)]
#[command(name = "blogroll", version, about, long_about = None)]
pub struct Config {
    /// Site fixture (JSON with bookmarks, media and options)
    #[arg(short, long, default_value = "site.json", global = true)]
    pub site: PathBuf,

    /// Message catalog (JSON object of source text to translation)
    #[arg(long, global = true)]
    pub locale: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Operations available against a site fixture.
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Expand [blogroll-links] markers in page content
    Render {
        /// Content file containing markers
        #[arg(long, conflicts_with = "shortcode")]
        content: Option<PathBuf>,

        /// Marker text to expand instead of a content file
        #[arg(long, default_value = "[blogroll-links]")]
        shortcode: String,

        /// Output file, stdout when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Wrap the result in a standalone HTML page with icon styles
        #[arg(long)]
        preview: bool,

        /// Open the written preview in a browser
        #[arg(long, requires = "output")]
        open: bool,

        /// Also write blogroll.css into this directory
        #[arg(long)]
        css_dir: Option<PathBuf>,
    },

    /// Write the administrative settings page
    SettingsPage {
        /// Output file, stdout when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Submit the settings form and apply it immediately
    SaveSettings {
        /// Enable the Links Manager (unchecked when omitted)
        #[arg(long)]
        enable_links_manager: bool,

        /// Custom CSS class for the list container
        #[arg(long, default_value = "")]
        custom_class: String,
    },

    /// Run the administrative page load reconciliation
    AdminInit {
        /// Evaluate the menu for a user without management capability
        #[arg(long)]
        as_guest: bool,
    },

    /// Seed default settings
    Install,

    /// Delete all plugin settings
    Uninstall,
}

impl Config {
    /// Parses configuration from command line arguments.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Validates configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the site fixture, catalog or content file does not exist.
    pub fn validate(&self) -> Result<()> {
        if !self.site.exists() {
            bail!("Site fixture does not exist: {}", self.site.display());
        }

        if let Some(locale) = &self.locale
            && !locale.exists()
        {
            bail!("Message catalog does not exist: {}", locale.display());
        }

        if let Command::Render {
            content: Some(content),
            ..
        } = &self.command
            && !content.exists()
        {
            bail!("Content file does not exist: {}", content.display());
        }

        Ok(())
    }
}
