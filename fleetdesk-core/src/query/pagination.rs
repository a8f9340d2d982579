//! Page slicing and the page-number window.
//!
//! The pager is deliberately dumb about `current_page`: an out-of-range page
//! is an empty slice, never an error and never silently clamped. Clamping and
//! resets belong to [`super::pipeline::TableState`].

use fleetdesk_model::PageSize;
use serde::Serialize;

/// One page of rows plus the bookkeeping the footer needs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageSlice<T> {
    pub items: Vec<T>,
    pub total_items: usize,
    /// Display page count; at least 1 even when there are no rows.
    pub total_pages: usize,
    pub current_page: usize,
    pub page_size: PageSize,
}

impl<T> PageSlice<T> {
    pub fn page_window(&self, max_pages: usize) -> Vec<usize> {
        page_window(self.total_pages, self.current_page, max_pages)
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    /// 1-based position of the first row on this page, or 0 when empty.
    pub fn first_item_number(&self) -> usize {
        if self.items.is_empty() {
            0
        } else {
            (self.current_page - 1) * self.page_size.get() + 1
        }
    }

    pub fn last_item_number(&self) -> usize {
        match self.first_item_number() {
            0 => 0,
            first => first + self.items.len() - 1,
        }
    }

    /// Footer text such as `41-47 of 47`.
    pub fn range_label(&self) -> String {
        if self.items.is_empty() {
            format!("0 of {}", self.total_items)
        } else {
            format!(
                "{}-{} of {}",
                self.first_item_number(),
                self.last_item_number(),
                self.total_items
            )
        }
    }
}

/// `ceil(total_items / page_size)`, reported as 1 for an empty set.
pub fn total_pages(total_items: usize, page_size: PageSize) -> usize {
    total_items.div_ceil(page_size.get()).max(1)
}

/// Slice `records[(current_page - 1) * size .. current_page * size]`.
///
/// Page numbers are 1-based; page 0 and pages past the end give an empty
/// slice.
pub fn paginate<T: Clone>(records: &[T], page_size: PageSize, current_page: usize) -> PageSlice<T> {
    let size = page_size.get();
    let items = match current_page.checked_sub(1) {
        Some(index) => {
            let start = index.saturating_mul(size);
            if start >= records.len() {
                Vec::new()
            } else {
                let end = start.saturating_add(size).min(records.len());
                records[start..end].to_vec()
            }
        }
        None => Vec::new(),
    };

    PageSlice {
        items,
        total_items: records.len(),
        total_pages: total_pages(records.len(), page_size),
        current_page,
        page_size,
    }
}

/// Contiguous page numbers for the navigation controls.
///
/// The window starts one page before `current_page` and holds up to
/// `max_pages` entries; when it runs into the last page it is pulled back so
/// it still holds `min(total_pages, max_pages)` entries. A total of 0 is
/// treated as a single page.
pub fn page_window(total_pages: usize, current_page: usize, max_pages: usize) -> Vec<usize> {
    if max_pages == 0 {
        return Vec::new();
    }
    let total = total_pages.max(1);

    let mut start = current_page.saturating_sub(1).max(1);
    let end = total.min(start.saturating_add(max_pages - 1));
    if end < start || end - start + 1 < max_pages {
        start = (end + 1).saturating_sub(max_pages).max(1);
    }

    (start..=end).collect()
}
