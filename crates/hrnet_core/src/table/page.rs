//! Page slicing and the compressed page navigation strip.
//!
//! # Invariants
//! - Pages are 1-indexed; out-of-range pages are empty, never an error.
//! - Beyond the collapse threshold the navigation strip has the same length
//!   for every current page.

/// One entry of the page navigation strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    /// Button for a concrete page number.
    Page(usize),
    /// Hidden pages between page 1 and the window.
    EllipsisLeft,
    /// Hidden pages between the window and the last page.
    EllipsisRight,
}

/// Rows of page `page` (1-indexed) of size `page_size`.
///
/// Returns an empty slice for page 0, a zero page size or a page past the
/// end; the final page may be partial.
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    if page == 0 || page_size == 0 {
        return &items[..0];
    }
    let start = (page - 1).saturating_mul(page_size).min(items.len());
    let end = page.saturating_mul(page_size).min(items.len());
    &items[start..end]
}

/// Number of pages needed for `total_items` rows, 0 for an empty set.
pub fn page_count(total_items: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    total_items.div_ceil(page_size)
}

/// Builds the page navigation strip.
///
/// Shows every page while `total_pages <= neighbours * 2 + 5`. Past that the
/// strip always starts with page 1, ends with `total_pages`, keeps
/// `neighbours` pages on each side of the current one and replaces hidden
/// runs with ellipsis markers. When only one side is hidden, extra page
/// numbers are added on the visible side so the strip length stays constant.
///
/// `current_page` is clamped into `1..=total_pages`.
pub fn build_page_window(
    total_pages: usize,
    current_page: usize,
    neighbours: usize,
) -> Vec<PageItem> {
    let total_numbers = neighbours * 2 + 3;
    let total_blocks = total_numbers + 2;

    if total_pages <= total_blocks {
        return (1..=total_pages).map(PageItem::Page).collect();
    }

    let current = current_page.clamp(1, total_pages);
    let start = current.saturating_sub(neighbours).max(2);
    let end = (current + neighbours).min(total_pages - 1);

    let has_left_spill = start > 2;
    let has_right_spill = total_pages - end > 1;
    let window_len = end + 1 - start;
    let spill_offset = total_numbers.saturating_sub(window_len + 1);

    let mut items = Vec::with_capacity(total_blocks);
    items.push(PageItem::Page(1));
    match (has_left_spill, has_right_spill) {
        (true, false) => {
            items.push(PageItem::EllipsisLeft);
            items.extend((start - spill_offset..start).map(PageItem::Page));
            items.extend((start..=end).map(PageItem::Page));
        }
        (false, true) => {
            items.extend((start..=end).map(PageItem::Page));
            items.extend((end + 1..=end + spill_offset).map(PageItem::Page));
            items.push(PageItem::EllipsisRight);
        }
        _ => {
            items.push(PageItem::EllipsisLeft);
            items.extend((start..=end).map(PageItem::Page));
            items.push(PageItem::EllipsisRight);
        }
    }
    items.push(PageItem::Page(total_pages));
    items
}

#[cfg(test)]
mod tests {
    use super::{build_page_window, PageItem};

    #[test]
    fn window_near_start_spills_right_only() {
        let window = build_page_window(10, 4, 2);
        assert_eq!(
            window,
            vec![
                PageItem::Page(1),
                PageItem::Page(2),
                PageItem::Page(3),
                PageItem::Page(4),
                PageItem::Page(5),
                PageItem::Page(6),
                PageItem::Page(7),
                PageItem::EllipsisRight,
                PageItem::Page(10),
            ]
        );
    }

    #[test]
    fn current_page_past_the_end_is_clamped() {
        assert_eq!(build_page_window(20, 99, 2), build_page_window(20, 20, 2));
        assert_eq!(build_page_window(20, 0, 2), build_page_window(20, 1, 2));
    }
}
