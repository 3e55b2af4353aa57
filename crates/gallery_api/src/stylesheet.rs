use std::{
    fs::File,
    io::{ErrorKind, Read},
    path::{Component, Path, PathBuf},
    sync::LazyLock,
};

use regex::{Regex, RegexBuilder};
use shared::domain::is_all_digits;

const TYPEKIT_SCAN_BYTES: u64 = 64 * 1024;

static TYPEKIT_MARKER: LazyLock<Result<Regex, regex::Error>> = LazyLock::new(|| {
    RegexBuilder::new(r"/\*\s*TYPEKIT_KIT_ID:\s*([0-9a-z]+)\s*\*/")
        .case_insensitive(true)
        .build()
});

/// Numbered designs map to `/{id}/{id}.css`; any other selector is already a
/// stylesheet path or URL.
pub fn stylesheet_for_design(design: &str) -> String {
    if is_all_digits(design) {
        format!("/{design}/{design}.css")
    } else {
        design.to_string()
    }
}

pub fn is_remote(stylesheet: &str) -> bool {
    stylesheet.starts_with("http")
}

/// Looks for a `/* TYPEKIT_KIT_ID: abc123 */` comment near the top of a local
/// stylesheet. Remote stylesheets, missing files and unreadable files all
/// yield `None`.
pub fn typekit_kit_id(site_root: &Path, stylesheet: &str) -> Option<String> {
    if is_remote(stylesheet) {
        return None;
    }
    let path = local_path(site_root, stylesheet)?;

    let mut head = Vec::new();
    let read = File::open(&path)
        .and_then(|file| file.take(TYPEKIT_SCAN_BYTES).read_to_end(&mut head));
    if let Err(error) = read {
        if error.kind() != ErrorKind::NotFound {
            tracing::warn!(
                path = %path.display(),
                %error,
                "stylesheet unreadable; skipping kit lookup"
            );
        }
        return None;
    }

    find_typekit_marker(&String::from_utf8_lossy(&head)).map(str::to_string)
}

/// Resolves a site-relative stylesheet path under `site_root`. Query strings
/// and fragments are dropped; paths that climb out of the root are refused.
pub fn local_path(site_root: &Path, stylesheet: &str) -> Option<PathBuf> {
    let without_suffix = stylesheet
        .split(['?', '#'])
        .next()
        .unwrap_or_default()
        .trim_start_matches('/');
    if without_suffix.is_empty() {
        return None;
    }

    let relative = Path::new(without_suffix);
    if !relative
        .components()
        .all(|component| matches!(component, Component::Normal(_) | Component::CurDir))
    {
        return None;
    }
    Some(site_root.join(relative))
}

pub fn find_typekit_marker(css: &str) -> Option<&str> {
    let marker = TYPEKIT_MARKER.as_ref().ok()?;
    marker
        .captures(css)
        .and_then(|captures| captures.get(1))
        .map(|kit_id| kit_id.as_str())
}

#[cfg(test)]
#[path = "tests/stylesheet_tests.rs"]
mod tests;
