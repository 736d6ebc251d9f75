//! Page-local sorting, selection and pagination arithmetic for the word table.
//!
//! Sorting only ever reorders the rows of the page already fetched; the server always returns
//! rows in ascending id order. Selection is keyed by row id since word text is not unique.

use std::{cmp::Ordering, collections::BTreeSet};

use crate::model::wordlist::WordDto;

/// Rows-per-page choices offered by the pagination bar
pub const ROWS_PER_PAGE_OPTIONS: [u64; 3] = [5, 10, 20];

/// Page links shown on each side of the current page before collapsing into an ellipsis
const PAGE_LINK_SIBLINGS: u64 = 1;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortColumn {
    /// The rank column, which displays the record id
    #[default]
    Id,
    Word,
    Type,
}

impl SortColumn {
    /// Sortable header cells in display order
    pub const HEADERS: [SortColumn; 3] = [SortColumn::Word, SortColumn::Type, SortColumn::Id];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Word => "Word",
            Self::Type => "Part of Speech",
            Self::Id => "Rank",
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, Self::Id)
    }

    fn compare(&self, a: &WordDto, b: &WordDto) -> Ordering {
        match self {
            Self::Id => a.id.cmp(&b.id),
            Self::Word => a.word.cmp(&b.word),
            Self::Type => a.word_type.cmp(&b.word_type),
        }
    }
}

/// Stable sort of one page of rows
///
/// Rows comparing equal on `column` keep their original relative order in both directions.
pub fn sort_rows(rows: &[WordDto], column: SortColumn, order: SortOrder) -> Vec<WordDto> {
    let mut sorted = rows.to_vec();

    // `sort_by` is stable, so ties keep their fetched order
    sorted.sort_by(|a, b| match order {
        SortOrder::Asc => column.compare(a, b),
        SortOrder::Desc => column.compare(b, a),
    });

    sorted
}

/// Sort and selection state of the word table
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TableState {
    pub order: SortOrder,
    pub order_by: SortColumn,
    pub selected: BTreeSet<i32>,
}

impl TableState {
    /// Handles a click on a sortable header
    ///
    /// Clicking the active ascending column flips it to descending, any other click sorts the
    /// clicked column ascending.
    pub fn request_sort(&mut self, column: SortColumn) {
        let is_asc = self.order_by == column && self.order == SortOrder::Asc;

        self.order = if is_asc {
            SortOrder::Desc
        } else {
            SortOrder::Asc
        };
        self.order_by = column;
    }

    pub fn sorted(&self, rows: &[WordDto]) -> Vec<WordDto> {
        sort_rows(rows, self.order_by, self.order)
    }

    /// Toggles selection of a single row
    pub fn toggle(&mut self, id: i32) {
        if !self.selected.remove(&id) {
            self.selected.insert(id);
        }
    }

    /// Selects every row of the page, or clears the selection
    pub fn select_all(&mut self, rows: &[WordDto], checked: bool) {
        if checked {
            self.selected = rows.iter().map(|row| row.id).collect();
        } else {
            self.selected.clear();
        }
    }

    pub fn is_selected(&self, id: i32) -> bool {
        self.selected.contains(&id)
    }

    pub fn selected_count(&self) -> usize {
        self.selected.len()
    }
}

/// 1-indexed row range displayed as "from-to of total"
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageWindow {
    pub from: u64,
    pub to: u64,
    pub total: u64,
}

impl PageWindow {
    pub fn new(page: u64, rows_per_page: u64, total_rows: u64) -> Self {
        let page = page.max(1);
        let to = page.saturating_mul(rows_per_page).min(total_rows);
        let from = (page - 1).saturating_mul(rows_per_page).saturating_add(1).min(to);

        Self {
            from: if to == 0 { 0 } else { from },
            to,
            total: total_rows,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageLink {
    Previous(Option<u64>),
    Page { page: u64, current: bool },
    Ellipsis,
    Next(Option<u64>),
}

/// Reduced list of pagination links around `page`
///
/// Always shows the first and last page, the current page with one sibling on each side, and
/// collapses the gaps in between into ellipses. Previous/next carry `None` at the edges.
pub fn page_links(page: u64, page_count: u64) -> Vec<PageLink> {
    if page_count == 0 {
        return Vec::new();
    }

    let page = page.clamp(1, page_count);
    let window_start = page.saturating_sub(PAGE_LINK_SIBLINGS).max(2);
    let window_end = (page + PAGE_LINK_SIBLINGS).min(page_count.saturating_sub(1));

    let mut links = vec![PageLink::Previous((page > 1).then(|| page - 1))];
    links.push(PageLink::Page {
        page: 1,
        current: page == 1,
    });

    // A gap hiding exactly one page shows that page instead of an ellipsis
    let first_shown = if window_start == 3 { 2 } else { window_start };
    let last_shown = if window_end + 2 == page_count {
        window_end + 1
    } else {
        window_end
    };

    if first_shown > 2 {
        links.push(PageLink::Ellipsis);
    }

    for n in first_shown..=last_shown {
        links.push(PageLink::Page {
            page: n,
            current: n == page,
        });
    }

    if last_shown + 1 < page_count {
        links.push(PageLink::Ellipsis);
    }

    if page_count > 1 {
        links.push(PageLink::Page {
            page: page_count,
            current: page == page_count,
        });
    }

    links.push(PageLink::Next((page < page_count).then(|| page + 1)));

    links
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(id: i32, word: &str, word_type: Option<&str>) -> WordDto {
        WordDto {
            id,
            word: word.to_string(),
            word_type: word_type.map(str::to_string),
        }
    }

    fn ids(rows: &[WordDto]) -> Vec<i32> {
        rows.iter().map(|r| r.id).collect()
    }

    mod sort_rows {
        use super::*;

        /// Expect ascending and descending word order
        #[test]
        fn sorts_by_word() {
            let rows = vec![row(1, "b", None), row(2, "a", None)];

            let asc = sort_rows(&rows, SortColumn::Word, SortOrder::Asc);
            let desc = sort_rows(&rows, SortColumn::Word, SortOrder::Desc);

            assert_eq!(asc[0].word, "a");
            assert_eq!(asc[1].word, "b");
            assert_eq!(desc[0].word, "b");
            assert_eq!(desc[1].word, "a");
        }

        /// Expect equal keys to keep their fetched order in both directions
        #[test]
        fn keeps_original_order_for_ties() {
            let rows = vec![
                row(1, "the", Some("Noun")),
                row(2, "be", Some("Verb")),
                row(3, "of", Some("Noun")),
                row(4, "and", Some("Verb")),
            ];

            let asc = sort_rows(&rows, SortColumn::Type, SortOrder::Asc);
            let desc = sort_rows(&rows, SortColumn::Type, SortOrder::Desc);

            assert_eq!(ids(&asc), vec![1, 3, 2, 4]);
            assert_eq!(ids(&desc), vec![2, 4, 1, 3]);
        }

        /// Expect duplicate words to stay distinct rows
        #[test]
        fn sorts_duplicate_words() {
            let rows = vec![row(3, "run", Some("Verb")), row(1, "run", Some("Noun"))];

            let sorted = sort_rows(&rows, SortColumn::Word, SortOrder::Asc);

            assert_eq!(ids(&sorted), vec![3, 1]);
        }
    }

    mod table_state {
        use super::*;

        /// Expect default state to sort by id ascending
        #[test]
        fn defaults_to_id_ascending() {
            let state = TableState::default();

            assert_eq!(state.order_by, SortColumn::Id);
            assert_eq!(state.order, SortOrder::Asc);
        }

        /// Expect repeated clicks on one column to toggle direction
        #[test]
        fn request_sort_toggles_direction() {
            let mut state = TableState::default();

            state.request_sort(SortColumn::Word);
            assert_eq!((state.order_by, state.order), (SortColumn::Word, SortOrder::Asc));

            state.request_sort(SortColumn::Word);
            assert_eq!((state.order_by, state.order), (SortColumn::Word, SortOrder::Desc));

            state.request_sort(SortColumn::Word);
            assert_eq!((state.order_by, state.order), (SortColumn::Word, SortOrder::Asc));
        }

        /// Expect switching column to reset to ascending
        #[test]
        fn request_sort_new_column_is_ascending() {
            let mut state = TableState::default();
            state.request_sort(SortColumn::Word);
            state.request_sort(SortColumn::Word);

            state.request_sort(SortColumn::Type);

            assert_eq!((state.order_by, state.order), (SortColumn::Type, SortOrder::Asc));
        }

        /// Expect selection of one of two identical words to leave the other unselected
        #[test]
        fn selection_is_keyed_by_id() {
            let rows = vec![row(1, "run", Some("Verb")), row(2, "run", Some("Noun"))];
            let mut state = TableState::default();

            state.toggle(rows[0].id);

            assert!(state.is_selected(1));
            assert!(!state.is_selected(2));

            state.toggle(rows[0].id);
            assert_eq!(state.selected_count(), 0);
        }

        /// Expect select all to cover the page and unchecking to clear it
        #[test]
        fn select_all_and_clear() {
            let rows = vec![row(4, "a", None), row(5, "b", None), row(6, "c", None)];
            let mut state = TableState::default();

            state.select_all(&rows, true);
            assert_eq!(state.selected_count(), 3);

            state.select_all(&rows, false);
            assert_eq!(state.selected_count(), 0);
        }
    }

    mod page_window {
        use super::*;

        /// Expect a partial last page to end at the total
        #[test]
        fn partial_last_page() {
            let window = PageWindow::new(3, 5, 12);

            assert_eq!(window, PageWindow { from: 11, to: 12, total: 12 });
        }

        /// Expect an empty table to display zero rows
        #[test]
        fn empty_table() {
            let window = PageWindow::new(1, 5, 0);

            assert_eq!(window, PageWindow { from: 0, to: 0, total: 0 });
        }
    }

    mod page_links {
        use super::*;

        fn pages(links: &[PageLink]) -> Vec<Option<u64>> {
            links
                .iter()
                .filter_map(|link| match link {
                    PageLink::Page { page, .. } => Some(Some(*page)),
                    PageLink::Ellipsis => Some(None),
                    _ => None,
                })
                .collect()
        }

        /// Expect no links when there are no pages
        #[test]
        fn no_pages() {
            assert!(page_links(1, 0).is_empty());
        }

        /// Expect a single disabled page for one page of results
        #[test]
        fn single_page() {
            let links = page_links(1, 1);

            assert_eq!(
                links,
                vec![
                    PageLink::Previous(None),
                    PageLink::Page { page: 1, current: true },
                    PageLink::Next(None),
                ]
            );
        }

        /// Expect every page when few pages exist
        #[test]
        fn few_pages_have_no_ellipsis() {
            let links = page_links(2, 3);

            assert_eq!(pages(&links), vec![Some(1), Some(2), Some(3)]);
            assert_eq!(links.first(), Some(&PageLink::Previous(Some(1))));
            assert_eq!(links.last(), Some(&PageLink::Next(Some(3))));
        }

        /// Expect gaps on both sides of a middle page to collapse
        #[test]
        fn middle_page_collapses_both_sides() {
            let links = page_links(10, 20);

            assert_eq!(
                pages(&links),
                vec![Some(1), None, Some(9), Some(10), Some(11), None, Some(20)]
            );
        }

        /// Expect pages beyond the last to clamp to the last page
        #[test]
        fn clamps_out_of_range_page() {
            let links = page_links(99, 4);

            assert_eq!(pages(&links), vec![Some(1), Some(2), Some(3), Some(4)]);
            assert!(links.contains(&PageLink::Page { page: 4, current: true }));
            assert_eq!(links.last(), Some(&PageLink::Next(None)));
        }
    }
}
