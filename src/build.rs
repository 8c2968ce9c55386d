//! Site building orchestration.
//!
//! Validates the project layout, ensures the output directory, then walks
//! the page directory rendering each page through the shared header and
//! footer fragments. Per-page failures are reported and skipped; the walk
//! keeps going.

use crate::config::SiteConfig;
use crate::error::SiteError;
use crate::log;
use crate::template;
use std::fs::{self, File};
use std::io::{BufWriter, ErrorKind, Write};
use std::path::Path;
use std::time::Instant;
use walkdir::WalkDir;

/// Per-file outcome counts for one build pass.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BuildSummary {
    /// Pages rendered into the output directory
    pub rendered: usize,
    /// Entries that failed and were skipped
    pub failed: usize,
}

/// Build the whole site.
///
/// Missing source directories and output-directory creation failures are
/// fatal and abort before any rendering; anything that goes wrong with a
/// single page is logged, counted, and skipped.
pub fn build_site(config: &SiteConfig) -> Result<BuildSummary, SiteError> {
    let start = Instant::now();

    for dir in [config.templates_dir(), config.pages_dir()] {
        if !dir.exists() {
            return Err(SiteError::MissingDirectory(dir));
        }
    }

    let output = config.output_dir();
    match fs::create_dir(&output) {
        Ok(()) => log!("build"; "created {}/", output.display()),
        Err(e) if e.kind() == ErrorKind::AlreadyExists => {
            log!("build"; "output {}/ already exists", output.display());
        }
        Err(e) => return Err(SiteError::io(&output, e)),
    }

    let mut summary = BuildSummary::default();
    for entry in WalkDir::new(config.pages_dir()) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                // Unreadable entry; walkdir ends iteration on its own only
                // if the root itself becomes unreadable.
                log!("error"; "SKIP: {e}");
                summary.failed += 1;
                continue;
            }
        };
        if entry.file_type().is_dir() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        if name.starts_with('.') {
            continue;
        }

        match render_page(entry.path(), &name, config) {
            Ok(()) => {
                log!("build"; "{name}... done");
                summary.rendered += 1;
            }
            Err(e) => {
                log!("error"; "{name}... SKIP: {e}");
                summary.failed += 1;
            }
        }
    }

    log!("build"; "finished in {:.2?}", start.elapsed());
    Ok(summary)
}

/// Render one page into a same-named file in the output directory.
///
/// The output file is created (truncated) before the template set is
/// parsed, so a page that later fails to parse can leave an empty
/// artifact behind.
fn render_page(page: &Path, file_name: &str, config: &SiteConfig) -> Result<(), SiteError> {
    let out_path = config.output_dir().join(file_name);
    let file = File::create(&out_path).map_err(|e| SiteError::io(&out_path, e))?;
    let mut out = BufWriter::new(file);

    let tera = template::load_page_set(page, config)?;
    template::render_to(&tera, &template::page_name(page), page, &mut out)?;
    out.flush().map_err(|e| SiteError::io(&out_path, e))
}
