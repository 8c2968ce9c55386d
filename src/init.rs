//! Site initialization.
//!
//! Creates the template/page directory skeleton and writes the default
//! header/footer fragments. The boilerplate is generic scaffolding meant
//! to be edited by the user afterwards.

use crate::config::SiteConfig;
use crate::error::SiteError;
use crate::log;
use std::fs;

/// Default header fragment: a full document opening, left open at `<body>`.
pub const HEADER_TEMPLATE: &str = r#"{# template: header #}
<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8">

  <title>Title</title>

  <link rel="stylesheet" type="text/css" href="/css/css.css" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
</head>
<body>
"#;

/// Default footer fragment: `footer` composes the user-editable `foot`
/// placeholder with the `body-end` closing tags.
pub const FOOTER_TEMPLATE: &str = r#"{# template: footer #}
{% include "foot" %}
{% include "body-end" %}
{# template: foot #}


{# template: body-end #}</body></html>
"#;

/// Create a new site skeleton in the configured root.
///
/// Fails if either target directory already exists. There is no rollback:
/// anything created before the failure point stays on disk.
pub fn create_site(config: &SiteConfig) -> Result<(), SiteError> {
    for dir in [config.templates_dir(), config.pages_dir()] {
        if dir.exists() {
            return Err(SiteError::DirectoryExists(dir));
        }
        fs::create_dir_all(&dir).map_err(|e| SiteError::io(&dir, e))?;
        log!("init"; "created {}/", dir.display());
    }

    for (path, content) in [
        (config.header_path(), HEADER_TEMPLATE),
        (config.footer_path(), FOOTER_TEMPLATE),
    ] {
        fs::write(&path, content).map_err(|e| SiteError::io(&path, e))?;
        log!("init"; "created {}", path.display());
    }

    Ok(())
}
