//! Mapping between spread indices and page slots.
//!
//! Spread 0 shows the back cover on the left and the front cover on the right,
//! since the cover wraps around the book. Spread `i >= 1` shows pages
//! `2i - 1` and `2i`.

use crate::page::AlbumPage;
use crate::id_generator::PageId;

/// Highest valid spread index for an album of `page_count` pages.
pub fn max_spread_index(page_count: usize) -> usize {
    page_count.saturating_sub(2) / 2
}

/// Page indices shown at `[left, right]` for spread `index`. A slot is `None`
/// when the index falls outside the album.
pub fn spread_page_indices(index: usize, page_count: usize) -> [Option<usize>; 2] {
    let in_range = |i: usize| (i < page_count).then_some(i);
    if index == 0 {
        [page_count.checked_sub(1), in_range(0)]
    } else {
        let right = index.checked_mul(2);
        [right.and_then(|r| in_range(r - 1)), right.and_then(in_range)]
    }
}

/// The `[left, right]` pages of spread `index`.
pub fn spread_index_to_pages(pages: &[AlbumPage], index: usize) -> [Option<&AlbumPage>; 2] {
    spread_page_indices(index, pages.len()).map(|slot| slot.and_then(|i| pages.get(i)))
}

/// Spread on which page `page_index` is shown.
pub fn spread_of_page(page_index: usize, page_count: usize) -> usize {
    if page_index == 0 || page_index + 1 >= page_count {
        0
    } else {
        (page_index + 1) / 2
    }
}

/// The page that becomes active when spread `index` is shown: the right-hand
/// page if present, else the left.
pub fn default_active_page(pages: &[AlbumPage], index: usize) -> Option<PageId> {
    let [left, right] = spread_index_to_pages(pages, index);
    right.or(left).map(|p| p.id)
}

/// Captions under the left and right page of a spread.
pub fn spread_labels(index: usize) -> [String; 2] {
    if index == 0 {
        ["Back cover".to_owned(), "Front cover".to_owned()]
    } else {
        let right = index.saturating_mul(2);
        [format!("Page {}", right - 1), format!("Page {right}")]
    }
}

/// Heading of a spread in the navigation bar and spread overview. Content
/// pages are numbered without the end papers.
pub fn spread_title(index: usize, page_count: usize) -> String {
    let last = max_spread_index(page_count);
    match index {
        0 => "Cover".to_owned(),
        1 => "Page 1".to_owned(),
        i if i == last => format!("Page {}", i.saturating_mul(2) - 2),
        i => {
            let first = i.saturating_mul(2) - 2;
            format!("Page {}-{}", first, first + 1)
        }
    }
}

/// The currently displayed spread. Requests outside the album are clamped.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SpreadNavigator {
    current: usize,
}

impl SpreadNavigator {
    pub fn current(&self) -> usize {
        self.current
    }

    pub fn go_to(&mut self, index: usize, page_count: usize) -> usize {
        self.current = index.min(max_spread_index(page_count));
        self.current
    }

    pub fn is_first(&self) -> bool {
        self.current == 0
    }

    pub fn is_last(&self, page_count: usize) -> bool {
        self.current >= max_spread_index(page_count)
    }
}
