//! Template set assembly and rendering.
//!
//! A fragment file may hold several named template sections, delimited by
//! marker lines of the form `{# template: name #}`. The marker is a valid
//! Tera comment, so every section body is a plain Tera template and
//! sections compose with `{% include "name" %}`.
//!
//! Each page is rendered from its own template set, parsed from exactly
//! three sources: the page file, the shared header fragment, and the
//! shared footer fragment. All sections land in one name-to-definition
//! registry; a name collision resolves to the last file loaded.

use crate::config::SiteConfig;
use crate::error::SiteError;
use regex::Regex;
use std::fs;
use std::io::Write;
use std::path::Path;
use std::sync::LazyLock;
use tera::{Context, Tera};

/// Section marker: `{# template: name #}`
static SECTION_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{#\s*template:\s*([\w.-]+)\s*#\}").unwrap());

/// Split a fragment source into `(name, body)` sections.
///
/// A body runs from the end of its marker (the newline terminating the
/// marker line is not part of the body) to the start of the next marker
/// or end of input. Content before the first marker is ignored.
pub fn split_sections(source: &str) -> Vec<(String, String)> {
    let marks: Vec<(String, usize, usize)> = SECTION_MARKER
        .captures_iter(source)
        .map(|cap| {
            let m = cap.get(0).expect("whole-pattern match");
            (cap[1].to_string(), m.start(), m.end())
        })
        .collect();

    let mut sections = Vec::with_capacity(marks.len());
    for (i, (name, _, end)) in marks.iter().enumerate() {
        let body_start = if source[*end..].starts_with('\n') {
            end + 1
        } else {
            *end
        };
        let body_end = marks
            .get(i + 1)
            .map_or(source.len(), |(_, next_start, _)| *next_start);
        sections.push((name.clone(), source[body_start..body_end].to_string()));
    }
    sections
}

/// Template identity of a page file: its file name minus the last extension.
pub fn page_name(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Parse one page plus the shared header/footer fragments into a template
/// set.
///
/// Load order is page, header, footer, so on a name collision the footer
/// beats the header, which beats the page.
pub fn load_page_set(page: &Path, config: &SiteConfig) -> Result<Tera, SiteError> {
    let sources = [
        page.to_path_buf(),
        config.header_path(),
        config.footer_path(),
    ];

    let mut tera = Tera::default();
    for path in &sources {
        let text = fs::read_to_string(path).map_err(|e| SiteError::io(path, e))?;
        let sections = split_sections(&text);
        tera.add_raw_templates(
            sections
                .iter()
                .map(|(name, body)| (name.as_str(), body.as_str()))
                .collect::<Vec<_>>(),
        )
        .map_err(|e| SiteError::Template(path.clone(), e))?;
    }
    Ok(tera)
}

/// Render the named template with an empty context into `out`.
pub fn render_to<W: Write>(
    tera: &Tera,
    name: &str,
    page: &Path,
    out: W,
) -> Result<(), SiteError> {
    tera.render_to(name, &Context::new(), out)
        .map_err(|e| SiteError::Template(page.to_path_buf(), e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_split_sections_basic() {
        let src = "{# template: a #}\nhello\n{# template: b #}\nworld\n";
        let sections = split_sections(src);
        assert_eq!(
            sections,
            vec![
                ("a".to_string(), "hello\n".to_string()),
                ("b".to_string(), "world\n".to_string()),
            ]
        );
    }

    #[test]
    fn test_split_sections_ignores_leading_content() {
        let src = "stray text\n{# template: only #}\nbody";
        let sections = split_sections(src);
        assert_eq!(sections, vec![("only".to_string(), "body".to_string())]);
    }

    #[test]
    fn test_split_sections_marker_at_eof() {
        let sections = split_sections("{# template: empty #}");
        assert_eq!(sections, vec![("empty".to_string(), String::new())]);
    }

    #[test]
    fn test_split_sections_inline_body() {
        // A body may start on the marker line itself
        let sections = split_sections("{# template: body-end #}</body></html>\n");
        assert_eq!(
            sections,
            vec![("body-end".to_string(), "</body></html>\n".to_string())]
        );
    }

    #[test]
    fn test_split_sections_no_marker() {
        assert!(split_sections("<p>plain html</p>").is_empty());
    }

    #[test]
    fn test_page_name_strips_last_extension() {
        assert_eq!(page_name(Path::new("pages/about.html")), "about");
        assert_eq!(page_name(Path::new("pages/archive.tar.gz")), "archive.tar");
    }

    fn write_fragments(config: &SiteConfig, header: &str, footer: &str) {
        fs::create_dir_all(config.templates_dir()).unwrap();
        fs::write(config.header_path(), header).unwrap();
        fs::write(config.footer_path(), footer).unwrap();
    }

    #[test]
    fn test_load_and_render_composed_page() {
        let dir = tempdir().unwrap();
        let config = SiteConfig::with_root(dir.path());
        write_fragments(
            &config,
            "{# template: header #}\n<header/>\n",
            "{# template: body-end #}\n<footer/>\n",
        );

        let page = dir.path().join("hi.html");
        fs::write(
            &page,
            "{# template: hi #}\n{% include \"header\" %}{% include \"body-end\" %}",
        )
        .unwrap();

        let tera = load_page_set(&page, &config).unwrap();
        let mut out = Vec::new();
        render_to(&tera, "hi", &page, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "<header/>\n<footer/>\n");
    }

    #[test]
    fn test_collision_last_loaded_wins() {
        let dir = tempdir().unwrap();
        let config = SiteConfig::with_root(dir.path());
        // The page tries to shadow `header`; the header fragment loads
        // later and takes the name.
        write_fragments(
            &config,
            "{# template: header #}\nfrom-header\n",
            "{# template: body-end #}\n",
        );
        let page = dir.path().join("p.html");
        fs::write(
            &page,
            "{# template: header #}\nfrom-page\n{# template: p #}\n{% include \"header\" %}",
        )
        .unwrap();

        let tera = load_page_set(&page, &config).unwrap();
        let mut out = Vec::new();
        render_to(&tera, "p", &page, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "from-header\n");
    }

    #[test]
    fn test_parse_error_reports_source_path() {
        let dir = tempdir().unwrap();
        let config = SiteConfig::with_root(dir.path());
        write_fragments(
            &config,
            "{# template: header #}\n",
            "{# template: body-end #}\n",
        );
        let page = dir.path().join("broken.html");
        fs::write(&page, "{# template: broken #}\n{% if %}").unwrap();

        let err = load_page_set(&page, &config).unwrap_err();
        match err {
            SiteError::Template(path, _) => assert_eq!(path, page),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_missing_fragment_file_is_io_error() {
        let dir = tempdir().unwrap();
        let config = SiteConfig::with_root(dir.path());
        let page = dir.path().join("p.html");
        fs::write(&page, "{# template: p #}\n").unwrap();

        let err = load_page_set(&page, &config).unwrap_err();
        match err {
            SiteError::Io(path, _) => assert_eq!(path, config.header_path()),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_render_unknown_name_fails() {
        let dir = tempdir().unwrap();
        let config = SiteConfig::with_root(dir.path());
        write_fragments(
            &config,
            "{# template: header #}\n",
            "{# template: body-end #}\n",
        );
        // The page never defines its own base name
        let page = dir.path().join("anon.html");
        fs::write(&page, "<p>no marker</p>").unwrap();

        let tera = load_page_set(&page, &config).unwrap();
        let mut out = Vec::new();
        let err = render_to(&tera, "anon", &page, &mut out).unwrap_err();
        assert!(matches!(err, SiteError::Template(_, _)));
    }
}
