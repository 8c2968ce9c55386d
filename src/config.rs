//! Site configuration: project root and directory names.
//!
//! There is no config file. The directory convention (`templates/`,
//! `pages/`, `www/`) is the whole configuration; this struct exists so
//! the directory names are passed into each operation explicitly instead
//! of living in process-wide constants, which lets tests redirect every
//! operation to a temporary directory.

use crate::cli::Cli;
use std::path::{Path, PathBuf};

// ============================================================================
// Defaults
// ============================================================================

/// Default template directory name
pub const TEMPLATES_DIR: &str = "templates";

/// Default page directory name
pub const PAGES_DIR: &str = "pages";

/// Default build output directory name
pub const OUTPUT_DIR: &str = "www";

/// Header fragment file name inside the template directory
pub const HEADER_FILE: &str = "header.tmpl";

/// Footer fragment file name inside the template directory
pub const FOOTER_FILE: &str = "footer.tmpl";

// ============================================================================
// SiteConfig
// ============================================================================

/// Directory layout for one project.
///
/// `templates`, `pages` and `output` are names relative to `root`.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    /// Project root directory
    pub root: PathBuf,
    /// Template fragment directory name
    pub templates: PathBuf,
    /// Page source directory name
    pub pages: PathBuf,
    /// Build output directory name
    pub output: PathBuf,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("./"),
            templates: PathBuf::from(TEMPLATES_DIR),
            pages: PathBuf::from(PAGES_DIR),
            output: PathBuf::from(OUTPUT_DIR),
        }
    }
}

impl SiteConfig {
    /// Build a configuration from CLI arguments, falling back to the
    /// default directory names for anything not overridden.
    pub fn from_cli(cli: &Cli) -> Self {
        let mut config = Self::default();
        if let Some(root) = &cli.root {
            config.root = root.clone();
        }
        if let Some(templates) = &cli.templates {
            config.templates = templates.clone();
        }
        if let Some(pages) = &cli.pages {
            config.pages = pages.clone();
        }
        if let Some(output) = &cli.output {
            config.output = output.clone();
        }
        config
    }

    /// Configuration rooted at the given directory, default names elsewhere.
    pub fn with_root<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            ..Self::default()
        }
    }

    /// Template fragment directory path
    pub fn templates_dir(&self) -> PathBuf {
        self.root.join(&self.templates)
    }

    /// Page source directory path
    pub fn pages_dir(&self) -> PathBuf {
        self.root.join(&self.pages)
    }

    /// Build output directory path
    pub fn output_dir(&self) -> PathBuf {
        self.root.join(&self.output)
    }

    /// Path of the header fragment file
    pub fn header_path(&self) -> PathBuf {
        self.templates_dir().join(HEADER_FILE)
    }

    /// Path of the footer fragment file
    pub fn footer_path(&self) -> PathBuf {
        self.templates_dir().join(FOOTER_FILE)
    }
}
