//! Page stub creation.

use crate::config::SiteConfig;
use crate::error::SiteError;
use crate::log;
use std::fs;

/// Stub body shared by every new page: the header, two blank lines for
/// content, and the closing tags.
const PAGE_BODY: &str = r#"{% include "header" %}


{% include "body-end" %}
"#;

/// Stub content for a page named `name`.
fn page_stub(name: &str) -> String {
    format!("{{# template: {name} #}}\n{PAGE_BODY}")
}

/// Create `pages/<name>.html` pre-populated with the page stub.
///
/// An existing file with the same name is replaced outright, so re-running
/// the command resets the stub instead of stacking a second conflicting
/// definition onto the file.
pub fn create_page(config: &SiteConfig, name: &str) -> Result<(), SiteError> {
    let path = config.pages_dir().join(format!("{name}.html"));
    fs::write(&path, page_stub(name)).map_err(|e| SiteError::io(&path, e))?;
    log!("new"; "created {}", path.display());
    Ok(())
}
