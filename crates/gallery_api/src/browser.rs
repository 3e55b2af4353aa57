//! "All designs" pagination: plain 1-based pages, newest design first.

use serde::Serialize;
use shared::domain::DesignRecord;

#[derive(Debug, Clone, Serialize)]
pub struct BrowserPage<'a> {
    pub page: u32,
    pub total_pages: usize,
    pub items: Vec<&'a DesignRecord>,
}

pub fn paginate(records: &[DesignRecord], page: u32, per_page: usize) -> BrowserPage<'_> {
    let len = records.len();
    let total_pages = if per_page == 0 { 0 } else { len.div_ceil(per_page) };

    let items = if page == 0 || per_page == 0 {
        Vec::new()
    } else {
        let start = (page as usize - 1).saturating_mul(per_page);
        let end = start.saturating_add(per_page).min(len);
        (start..end).map(|offset| &records[len - 1 - offset]).collect()
    };

    BrowserPage {
        page,
        total_pages,
        items,
    }
}

/// Reads a `pg` query value the lenient way: leading digits win, and anything
/// missing, unparsable or below 1 means page 1.
pub fn parse_page_query(raw: Option<&str>) -> u32 {
    let Some(raw) = raw else {
        return 1;
    };
    let trimmed = raw.trim_start();
    let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let digits_end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    let digits = &unsigned[..digits_end];

    if digits.is_empty() {
        return 1;
    }
    match digits.parse::<u32>() {
        Ok(0) => 1,
        Ok(page) => page,
        Err(_) => u32::MAX,
    }
}

#[cfg(test)]
#[path = "tests/browser_tests.rs"]
mod tests;
