use hrnet_core::{build_page_window, page_count, paginate, PageItem};

use PageItem::{EllipsisLeft as L, EllipsisRight as R, Page as P};

#[test]
fn page_count_rounds_up() {
    assert_eq!(page_count(0, 5), 0);
    assert_eq!(page_count(0, 100), 0);
    assert_eq!(page_count(23, 5), 5);
    assert_eq!(page_count(25, 5), 5);
    assert_eq!(page_count(26, 5), 6);
    assert_eq!(page_count(10, 0), 0);
}

#[test]
fn paginate_slices_pages_and_partial_tail() {
    let items = (1..=12).collect::<Vec<_>>();
    assert_eq!(paginate(&items, 1, 5), [1, 2, 3, 4, 5]);
    assert_eq!(paginate(&items, 3, 5), [11, 12]);
    assert!(paginate(&items, 4, 5).is_empty());
    assert!(paginate(&items, 0, 5).is_empty());
    assert!(paginate(&items, 1, 0).is_empty());
    assert!(paginate(&items, usize::MAX, 5).is_empty());
}

#[test]
fn concatenated_pages_rebuild_the_collection() {
    let items = (0..23).collect::<Vec<_>>();
    for size in [1, 5, 10, 23, 50] {
        let rebuilt = (1..=page_count(items.len(), size))
            .flat_map(|page| paginate(&items, page, size).iter().copied())
            .collect::<Vec<_>>();
        assert_eq!(rebuilt, items, "page size {size}");
    }
}

#[test]
fn small_page_counts_show_every_page() {
    assert_eq!(build_page_window(0, 1, 2), Vec::new());
    assert_eq!(build_page_window(1, 1, 2), vec![P(1)]);
    assert_eq!(
        build_page_window(9, 5, 2),
        (1..=9).map(P).collect::<Vec<_>>()
    );
}

#[test]
fn window_near_end_spills_left_with_extra_pages() {
    assert_eq!(
        build_page_window(10, 7, 2),
        vec![P(1), L, P(4), P(5), P(6), P(7), P(8), P(9), P(10)]
    );
    assert_eq!(
        build_page_window(10, 10, 2),
        vec![P(1), L, P(4), P(5), P(6), P(7), P(8), P(9), P(10)]
    );
}

#[test]
fn window_in_the_middle_spills_both_sides() {
    assert_eq!(
        build_page_window(20, 10, 2),
        vec![P(1), L, P(8), P(9), P(10), P(11), P(12), R, P(20)]
    );
}

#[test]
fn window_length_is_constant_past_the_threshold() {
    for total in [10, 11, 50, 500] {
        for current in 1..=total {
            let window = build_page_window(total, current, 2);
            assert_eq!(window.len(), 9, "total={total} current={current}");
            assert_eq!(window.first(), Some(&P(1)));
            assert_eq!(window.last(), Some(&P(total)));
            assert!(window.contains(&P(current)));
        }
    }
}

#[test]
fn neighbours_widen_the_window() {
    let window = build_page_window(30, 15, 3);
    assert_eq!(window.len(), 11);
    assert_eq!(
        window,
        vec![P(1), L, P(12), P(13), P(14), P(15), P(16), P(17), P(18), R, P(30)]
    );
}
