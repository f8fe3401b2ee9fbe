//! Filter-sort-paginate pipeline backing the list view.
//!
//! Everything here is pure so the home view can re-derive the visible page on
//! every render. Filtering lives in `CatalogService::search` (it is part of
//! the search query key); this module owns ordering and windowing.

use crate::domain::CatalogEntry;

/// Fixed page size of the list view.
pub const PAGE_SIZE: usize = 20;

/// How many numbered buttons the pagination control shows at most.
pub const PAGE_WINDOW: usize = 5;

/// List ordering selected in the toolbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortMode {
    ByName,
    ById,
}

/// Sort a catalog slice into a fresh, owned vector.
///
/// `ByName` is a plain byte-wise ordering. Catalog names are lowercase ASCII
/// slugs, where this agrees with locale collation except that `-` sorts
/// ahead of every letter, so hyphenated names group before their
/// unhyphenated prefixes.
pub fn sort_entries(entries: &[CatalogEntry], mode: SortMode) -> Vec<CatalogEntry> {
    let mut sorted = entries.to_vec();
    match mode {
        SortMode::ByName => sorted.sort_by(|a, b| a.name.cmp(&b.name)),
        SortMode::ById => sorted.sort_by_key(CatalogEntry::id),
    }
    sorted
}

/// Whether a change to the search term or sort mode warrants snapping the
/// list back to its first page.
pub fn should_reset_page(
    prev_term: &str,
    term: &str,
    prev_sort: SortMode,
    sort: SortMode,
) -> bool {
    prev_term != term || prev_sort != sort
}

/// Number of pages needed for `count` entries. Zero entries means zero pages.
pub fn total_pages(count: usize) -> usize {
    count.div_ceil(PAGE_SIZE)
}

/// Clamp a requested page into `[1, total]`; an empty list pins to page 1.
pub fn clamp_page(page: usize, total: usize) -> usize {
    page.max(1).min(total.max(1))
}

/// The visible window of a sorted list for a (already clamped) page.
pub fn page_slice(entries: &[CatalogEntry], page: usize) -> &[CatalogEntry] {
    let start = (page - 1) * PAGE_SIZE;
    if start >= entries.len() {
        return &[];
    }
    let end = (start + PAGE_SIZE).min(entries.len());
    &entries[start..end]
}

/// Inclusive range of numbered page buttons centered on `current`.
///
/// Holds exactly `PAGE_WINDOW` entries whenever `total >= PAGE_WINDOW`,
/// shifting the window at either edge instead of shrinking it.
pub fn page_window(current: usize, total: usize) -> std::ops::RangeInclusive<usize> {
    let start = current.saturating_sub(PAGE_WINDOW / 2).max(1);
    let end = (start + PAGE_WINDOW - 1).min(total);
    let start = start.min(end.saturating_sub(PAGE_WINDOW - 1).max(1));
    start..=end
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, id: u32) -> CatalogEntry {
        CatalogEntry {
            name: name.to_string(),
            url: format!("https://pokeapi.co/api/v2/pokemon/{id}/"),
        }
    }

    fn catalog(count: usize) -> Vec<CatalogEntry> {
        (1..=count as u32).map(|i| entry(&format!("mon-{i:04}"), i)).collect()
    }

    mod sort_tests {
        use super::*;

        #[test]
        fn by_name_sorts_lexicographically() {
            let sorted = sort_entries(
                &[entry("pikachu", 25), entry("bulbasaur", 1), entry("mew", 151)],
                SortMode::ByName,
            );
            let names: Vec<_> = sorted.iter().map(|e| e.name.as_str()).collect();
            assert_eq!(names, ["bulbasaur", "mew", "pikachu"]);
        }

        #[test]
        fn by_id_sorts_on_the_url_tail() {
            let sorted = sort_entries(
                &[entry("charizard", 6), entry("charmander", 4), entry("charmeleon", 5)],
                SortMode::ById,
            );
            let ids: Vec<_> = sorted.iter().map(CatalogEntry::id).collect();
            assert_eq!(ids, [4, 5, 6]);
        }

        #[test]
        fn by_name_orders_hyphenated_names_before_their_unhyphenated_prefixes() {
            let sorted = sort_entries(
                &[entry("mrmime", 9001), entry("mr-mime", 122), entry("mr-rime", 866)],
                SortMode::ByName,
            );
            let names: Vec<_> = sorted.iter().map(|e| e.name.as_str()).collect();
            assert_eq!(names, ["mr-mime", "mr-rime", "mrmime"]);
        }

        #[test]
        fn entries_without_an_id_sort_first_under_by_id() {
            let mut broken = entry("missingno", 0);
            broken.url = "https://pokeapi.co/api/v2/pokemon/missingno/".to_string();
            let sorted = sort_entries(&[entry("bulbasaur", 1), broken], SortMode::ById);
            assert_eq!(sorted[0].name, "missingno");
        }
    }

    mod page_reset_tests {
        use super::*;

        #[test]
        fn a_changed_search_term_resets_the_page() {
            assert!(should_reset_page("pika", "pikac", SortMode::ById, SortMode::ById));
        }

        #[test]
        fn a_changed_sort_mode_resets_the_page() {
            assert!(should_reset_page("", "", SortMode::ById, SortMode::ByName));
        }

        #[test]
        fn clearing_the_search_term_resets_the_page() {
            assert!(should_reset_page("mew", "", SortMode::ByName, SortMode::ByName));
        }

        #[test]
        fn an_unchanged_query_keeps_the_page() {
            assert!(!should_reset_page("char", "char", SortMode::ByName, SortMode::ByName));
        }
    }

    mod paging_tests {
        use super::*;

        #[test]
        fn total_pages_rounds_up() {
            assert_eq!(total_pages(0), 0);
            assert_eq!(total_pages(1), 1);
            assert_eq!(total_pages(20), 1);
            assert_eq!(total_pages(21), 2);
            assert_eq!(total_pages(1302), 66);
        }

        #[test]
        fn clamp_keeps_pages_in_range() {
            assert_eq!(clamp_page(0, 10), 1);
            assert_eq!(clamp_page(5, 10), 5);
            assert_eq!(clamp_page(99, 10), 10);
            assert_eq!(clamp_page(3, 0), 1);
        }

        #[test]
        fn first_page_holds_page_size_entries() {
            let list = catalog(45);
            let slice = page_slice(&list, 1);
            assert_eq!(slice.len(), PAGE_SIZE);
            assert_eq!(slice[0].name, "mon-0001");
        }

        #[test]
        fn last_page_holds_the_remainder() {
            let list = catalog(45);
            let slice = page_slice(&list, 3);
            assert_eq!(slice.len(), 5);
            assert_eq!(slice[4].name, "mon-0045");
        }

        #[test]
        fn page_past_the_end_is_empty() {
            let list = catalog(5);
            assert!(page_slice(&list, 2).is_empty());
        }

        #[test]
        fn empty_catalog_yields_an_empty_slice() {
            assert!(page_slice(&[], 1).is_empty());
        }
    }

    mod page_window_tests {
        use super::*;

        #[test]
        fn centers_on_the_current_page() {
            assert_eq!(page_window(10, 66), 8..=12);
        }

        #[test]
        fn pins_to_the_left_edge() {
            assert_eq!(page_window(1, 66), 1..=5);
            assert_eq!(page_window(2, 66), 1..=5);
        }

        #[test]
        fn pins_to_the_right_edge() {
            assert_eq!(page_window(66, 66), 62..=66);
            assert_eq!(page_window(65, 66), 62..=66);
        }

        #[test]
        fn shows_every_page_when_fewer_than_the_window() {
            assert_eq!(page_window(1, 3), 1..=3);
            assert_eq!(page_window(3, 3), 1..=3);
            assert_eq!(page_window(1, 1), 1..=1);
        }

        #[test]
        fn holds_exactly_five_entries_when_possible() {
            for total in 5..=12 {
                for current in 1..=total {
                    let window = page_window(current, total);
                    assert_eq!(window.clone().count(), PAGE_WINDOW, "current={current} total={total}");
                    assert!(window.contains(&current));
                }
            }
        }
    }
}
