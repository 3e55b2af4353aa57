//! Sidebar archive windowing.
//!
//! The sidebar shows the newest `page_size` designs. `page{n}` steps back in
//! time by whole blocks: page 1 is the second most recent block, page 2 the
//! third, and so on. Page 0 is the same as no page at all.

use serde::Serialize;
use shared::domain::DesignRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Nav {
    pub has_next: bool,
    pub next_page_number: Option<u32>,
    pub has_previous: bool,
    /// `Some(0)` links back to the unpaginated view.
    pub previous_page_number: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WindowResult {
    /// Exclusive upper bound; the newest displayed record is `start_index - 1`.
    pub start_index: usize,
    pub count: usize,
    #[serde(flatten)]
    pub nav: Nav,
}

impl WindowResult {
    /// Catalog indices in display order, newest first.
    pub fn indices(&self) -> impl Iterator<Item = usize> {
        (self.start_index.saturating_sub(self.count)..self.start_index).rev()
    }

    pub fn records<'a>(&self, records: &'a [DesignRecord]) -> Vec<&'a DesignRecord> {
        let upper = self.start_index.min(records.len());
        let lower = self.start_index.saturating_sub(self.count).min(upper);
        records[lower..upper].iter().rev().collect()
    }
}

pub fn select_window(
    catalog_len: usize,
    page_number: Option<u32>,
    page_size: usize,
) -> WindowResult {
    let start_index = match page_number.filter(|&page| page > 0) {
        None => catalog_len,
        Some(page) => catalog_len.saturating_sub((page as usize).saturating_mul(page_size)),
    };
    let count = start_index.min(page_size);

    WindowResult {
        start_index,
        count,
        nav: build_nav(start_index, page_size, page_number),
    }
}

pub fn build_nav(window_upper_bound: usize, page_size: usize, page_number: Option<u32>) -> Nav {
    let has_next = window_upper_bound > page_size;
    let previous = page_number.filter(|&page| page > 0).map(|page| page - 1);

    Nav {
        has_next,
        next_page_number: has_next.then(|| page_number.unwrap_or(0).saturating_add(1)),
        has_previous: previous.is_some(),
        previous_page_number: previous,
    }
}

#[cfg(test)]
#[path = "tests/window_tests.rs"]
mod tests;
