//! Page arithmetic for browsing the record sequence.
//!
//! Pages are 1-based. Navigation clamps to `[1, total_pages]` and never wraps.

use std::ops::Range;

pub const DEFAULT_PAGE_SIZE: usize = 10;

/// What the user asked for at the paging prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    Next,
    Previous,
    Quit,
}

impl Navigation {
    /// `n`/`p` in either case; anything else, padded input included, quits.
    pub fn parse(input: &str) -> Self {
        match input.to_lowercase().as_str() {
            "n" => Navigation::Next,
            "p" => Navigation::Previous,
            _ => Navigation::Quit,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pager {
    total: usize,
    page_size: usize,
    page: usize,
}

impl Pager {
    /// A zero page size is treated as one.
    pub fn new(total: usize, page_size: usize) -> Self {
        Self {
            total,
            page_size: page_size.max(1),
            page: 1,
        }
    }

    pub fn total_pages(&self) -> usize {
        self.total.div_ceil(self.page_size)
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn is_paged(&self) -> bool {
        self.total_pages() > 1
    }

    /// Indices of the records on the current page.
    pub fn range(&self) -> Range<usize> {
        let start = (self.page - 1) * self.page_size;
        let end = (start + self.page_size).min(self.total);
        start.min(end)..end
    }

    pub fn next(&mut self) {
        self.page = (self.page + 1).min(self.total_pages().max(1));
    }

    pub fn previous(&mut self) {
        self.page = self.page.saturating_sub(1).max(1);
    }

    /// Applies `nav`; returns false when the user chose to stop browsing.
    pub fn navigate(&mut self, nav: Navigation) -> bool {
        match nav {
            Navigation::Next => self.next(),
            Navigation::Previous => self.previous(),
            Navigation::Quit => return false,
        }
        true
    }
}
