//! Fixed-size pages over the filtered result list.

use std::ops::Range;

use serde::{Deserialize, Serialize};

pub const PAGE_SIZE: u64 = 10;

/// Pages needed for `count` results. Zero results means zero pages.
pub fn total_pages(count: u64, page_size: u64) -> u64 {
    if page_size == 0 {
        return 0;
    }
    count.div_ceil(page_size)
}

/// Pagination of one filtered list. Pages are 1-indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub total_items: u64,
    pub page_size: u64,
    requested_page: u64,
}

impl Pagination {
    pub fn new(total_items: u64, page_size: u64, requested_page: u64) -> Self {
        Self { total_items, page_size, requested_page }
    }

    pub fn total_pages(&self) -> u64 {
        total_pages(self.total_items, self.page_size)
    }

    /// The requested page clamped into `1..=total_pages`.
    pub fn current_page(&self) -> u64 {
        self.requested_page.clamp(1, self.total_pages().max(1))
    }

    /// No pages means the controls are not shown at all.
    pub fn is_visible(&self) -> bool {
        self.total_pages() > 0
    }

    pub fn accepts(&self, page: u64) -> bool {
        page >= 1 && page <= self.total_pages()
    }

    pub fn can_go_previous(&self) -> bool {
        self.is_visible() && self.current_page() > 1
    }

    pub fn can_go_next(&self) -> bool {
        self.current_page() < self.total_pages()
    }

    /// Index range of the current page within the filtered list.
    pub fn page_range(&self) -> Range<usize> {
        if !self.is_visible() {
            return 0..0;
        }
        let start = (self.current_page() - 1) * self.page_size;
        let end = (start + self.page_size).min(self.total_items);
        start as usize..end as usize
    }

    pub fn page_strip(&self) -> Vec<PageStripEntry> {
        page_strip(self.current_page(), self.total_pages())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageStripEntry {
    Page { number: u64, is_current: bool },
    Gap,
}

/// Page-number buttons: first and last page, a window of current ± 2, and
/// gaps when the window is more than one page away from either end.
/// `current` is clamped into `1..=total`.
pub fn page_strip(current: u64, total: u64) -> Vec<PageStripEntry> {
    if total == 0 {
        return Vec::new();
    }
    let current = current.clamp(1, total);
    let page = |number: u64| PageStripEntry::Page { number, is_current: number == current };
    let mut strip = Vec::new();
    if current > 3 {
        strip.push(page(1));
        if current > 4 {
            strip.push(PageStripEntry::Gap);
        }
    }
    let low = current.saturating_sub(2).max(1);
    let high = (current + 2).min(total);
    strip.extend((low..=high).map(page));
    if current + 2 < total {
        if current + 3 < total {
            strip.push(PageStripEntry::Gap);
        }
        strip.push(page(total));
    }
    strip
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn numbers(strip: &[PageStripEntry]) -> Vec<Option<u64>> {
        strip
            .iter()
            .map(|entry| match entry {
                PageStripEntry::Page { number, .. } => Some(*number),
                PageStripEntry::Gap => None,
            })
            .collect()
    }

    #[test]
    fn total_pages_is_ceiling() {
        assert_eq!(total_pages(0, PAGE_SIZE), 0);
        assert_eq!(total_pages(1, PAGE_SIZE), 1);
        assert_eq!(total_pages(10, PAGE_SIZE), 1);
        assert_eq!(total_pages(11, PAGE_SIZE), 2);
        assert_eq!(total_pages(95, PAGE_SIZE), 10);
    }

    #[test]
    fn empty_list_has_no_controls() {
        let pagination = Pagination::new(0, PAGE_SIZE, 1);
        assert!(!pagination.is_visible());
        assert!(!pagination.can_go_previous());
        assert!(!pagination.can_go_next());
        assert!(!pagination.accepts(1));
        assert_eq!(pagination.page_range(), 0..0);
        assert!(pagination.page_strip().is_empty());
    }

    #[test]
    fn boundaries_disable_navigation() {
        let first = Pagination::new(25, PAGE_SIZE, 1);
        assert!(!first.can_go_previous());
        assert!(first.can_go_next());
        let last = Pagination::new(25, PAGE_SIZE, 3);
        assert!(last.can_go_previous());
        assert!(!last.can_go_next());
        assert_eq!(last.page_range(), 20..25);
        assert!(!last.accepts(0));
        assert!(!last.accepts(4));
    }

    #[test]
    fn requested_page_is_clamped_when_list_shrinks() {
        let pagination = Pagination::new(12, PAGE_SIZE, 7);
        assert_eq!(pagination.current_page(), 2);
        assert_eq!(pagination.page_range(), 10..12);
    }

    #[test]
    fn strip_near_start() {
        assert_eq!(numbers(&page_strip(1, 10)), vec![Some(1), Some(2), Some(3), None, Some(10)]);
        assert_eq!(numbers(&page_strip(3, 10)), vec![Some(1), Some(2), Some(3), Some(4), Some(5), None, Some(10)]);
        assert_eq!(numbers(&page_strip(4, 10)), vec![Some(1), Some(2), Some(3), Some(4), Some(5), Some(6), None, Some(10)]);
    }

    #[test]
    fn strip_in_the_middle_and_end() {
        assert_eq!(numbers(&page_strip(6, 12)), vec![Some(1), None, Some(4), Some(5), Some(6), Some(7), Some(8), None, Some(12)]);
        assert_eq!(numbers(&page_strip(10, 10)), vec![Some(1), None, Some(8), Some(9), Some(10)]);
        assert_eq!(numbers(&page_strip(7, 10)), vec![Some(1), None, Some(5), Some(6), Some(7), Some(8), Some(9), Some(10)]);
    }

    #[test]
    fn strip_for_few_pages_has_no_gaps() {
        assert_eq!(numbers(&page_strip(1, 1)), vec![Some(1)]);
        assert_eq!(numbers(&page_strip(2, 3)), vec![Some(1), Some(2), Some(3)]);
        assert_eq!(
            page_strip(2, 3)[1],
            PageStripEntry::Page { number: 2, is_current: true }
        );
    }

    #[test]
    fn strip_clamps_out_of_range_current_page() {
        assert_eq!(page_strip(u64::MAX, 3), page_strip(3, 3));
        assert_eq!(page_strip(0, 3), page_strip(1, 3));
        assert_eq!(
            page_strip(u64::MAX, 3)[2],
            PageStripEntry::Page { number: 3, is_current: true }
        );
    }
}
