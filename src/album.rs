use egui::Color32;
use log::{debug, info};

use crate::element::{AlbumElement, ElementPatch};
use crate::error::{EditError, EditResult};
use crate::id_generator::{AlbumId, ElementId, PageId};
use crate::page::AlbumPage;
use crate::spread::max_spread_index;
use crate::template::{CoverTemplate, PageLayout};

/// Front cover, two end papers and back cover.
pub const MIN_PAGES: usize = 4;
pub const MAX_PAGES: usize = 16;
pub const MAX_CONTENT_PAGES: usize = MAX_PAGES - MIN_PAGES;

pub const END_PAPER_COLOR: Color32 = Color32::from_rgb(0x1D, 0x35, 0x57);

/// Checks that `count` pages can form an album: even, between
/// [`MIN_PAGES`] and [`MAX_PAGES`].
pub fn validate_page_count(count: usize) -> EditResult<()> {
    if count < MIN_PAGES || count > MAX_PAGES {
        return Err(EditError::InvalidStructure(format!(
            "an album needs {MIN_PAGES} to {MAX_PAGES} pages, got {count}"
        )));
    }
    if count % 2 != 0 {
        return Err(EditError::InvalidStructure(format!(
            "an album needs an even number of pages, got {count}"
        )));
    }
    Ok(())
}

/// Whether the page at `index` is one of the two end papers.
pub fn is_end_paper_index(index: usize, page_count: usize) -> bool {
    index == 1 || index + 2 == page_count
}

/// A photo album: `[front cover, end paper, content.., end paper, back cover]`.
///
/// Pages are only reachable through methods that keep this shape intact and
/// refuse to touch the end papers.
#[derive(Debug, Clone, PartialEq)]
pub struct Album {
    pub id: AlbumId,
    pub title: String,
    pages: Vec<AlbumPage>,
}

impl Album {
    pub fn new(title: impl Into<String>, pages: Vec<AlbumPage>) -> EditResult<Self> {
        validate_page_count(pages.len())?;
        Ok(Self {
            id: AlbumId::generate(),
            title: title.into(),
            pages,
        })
    }

    /// The smallest album: white covers and dark end papers.
    pub fn blank(title: impl Into<String>) -> Self {
        let end_paper = || AlbumPage::new(Some(END_PAPER_COLOR), Vec::new());
        Self {
            id: AlbumId::generate(),
            title: title.into(),
            pages: vec![AlbumPage::blank(), end_paper(), end_paper(), AlbumPage::blank()],
        }
    }

    pub fn pages(&self) -> &[AlbumPage] {
        &self.pages
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn content_page_count(&self) -> usize {
        self.pages.len().saturating_sub(MIN_PAGES)
    }

    pub fn page_index(&self, page_id: PageId) -> Option<usize> {
        self.pages.iter().position(|p| p.id == page_id)
    }

    pub fn page(&self, page_id: PageId) -> Option<&AlbumPage> {
        self.pages.iter().find(|p| p.id == page_id)
    }

    /// False for unknown pages and for the end papers.
    pub fn is_editable(&self, page_id: Option<PageId>) -> bool {
        page_id
            .and_then(|id| self.page_index(id))
            .is_some_and(|index| !is_end_paper_index(index, self.pages.len()))
    }

    /// Resolves `page_id` to its index, or explains why it may not be mutated.
    pub fn ensure_editable(&self, page_id: PageId) -> EditResult<usize> {
        let index = self
            .page_index(page_id)
            .ok_or(EditError::PageNotFound(page_id))?;
        if is_end_paper_index(index, self.pages.len()) {
            return Err(EditError::PageNotEditable(page_id));
        }
        Ok(index)
    }

    fn editable_page_mut(&mut self, page_id: PageId) -> EditResult<&mut AlbumPage> {
        let index = self.ensure_editable(page_id)?;
        Ok(&mut self.pages[index])
    }

    /// Finds an element anywhere in the album, with the page that holds it.
    pub fn find_element(&self, element_id: ElementId) -> Option<(PageId, &AlbumElement)> {
        self.pages
            .iter()
            .find_map(|p| p.find_element(element_id).map(|e| (p.id, e)))
    }

    pub fn add_element(&mut self, page_id: PageId, element: AlbumElement) -> EditResult<ElementId> {
        let page = self.editable_page_mut(page_id)?;
        let id = element.id;
        page.add_element(element);
        debug!("Added element {id} to page {page_id}");
        Ok(id)
    }

    pub fn update_element(
        &mut self,
        page_id: PageId,
        element_id: ElementId,
        patch: &ElementPatch,
    ) -> EditResult<()> {
        self.editable_page_mut(page_id)?
            .update_element(element_id, patch)
    }

    /// Removes the element from whichever page holds it.
    pub fn delete_element(&mut self, element_id: ElementId) -> EditResult<AlbumElement> {
        let (page_id, _) = self
            .find_element(element_id)
            .ok_or(EditError::ElementNotFound(element_id))?;
        self.editable_page_mut(page_id)?
            .remove_element(element_id)
            .ok_or(EditError::ElementNotFound(element_id))
    }

    pub fn clear_page(&mut self, page_id: PageId) -> EditResult<()> {
        self.editable_page_mut(page_id)?.clear();
        info!("Cleared page {page_id}");
        Ok(())
    }

    pub fn set_background(&mut self, page_id: PageId, color: Color32) -> EditResult<()> {
        self.editable_page_mut(page_id)?.background = Some(color);
        Ok(())
    }

    /// Inserts two white pages right before the back end paper and returns
    /// the index of the first one.
    pub fn insert_blank_pages(&mut self) -> EditResult<usize> {
        if self.pages.len() >= MAX_PAGES {
            return Err(EditError::MaxPagesReached {
                max_content: MAX_CONTENT_PAGES,
            });
        }
        let at = self.pages.len() - 2;
        self.pages
            .splice(at..at, [AlbumPage::blank(), AlbumPage::blank()]);
        info!("Inserted two pages at {at}, album now has {} pages", self.pages.len());
        Ok(at)
    }

    fn check_content_spread(&self, index: usize) -> EditResult<()> {
        let last = max_spread_index(self.pages.len());
        if index == 0 {
            return Err(EditError::CoverSpreadProtected);
        }
        if index > last {
            return Err(EditError::SpreadOutOfRange { index, last });
        }
        if index == 1 || index == last {
            return Err(EditError::EndPaperSpreadProtected(index));
        }
        Ok(())
    }

    /// Copies spread `index` (fresh page and element ids) and inserts the
    /// copies right after it. Returns the ids of the new pages.
    pub fn duplicate_spread(&mut self, index: usize) -> EditResult<Vec<PageId>> {
        self.check_content_spread(index)?;
        if self.pages.len() + 2 > MAX_PAGES {
            return Err(EditError::MaxPagesReached {
                max_content: MAX_CONTENT_PAGES,
            });
        }

        let start = 2 * index - 1;
        let copies: Vec<AlbumPage> = self.pages[start..start + 2]
            .iter()
            .map(AlbumPage::duplicate)
            .collect();
        let ids = copies.iter().map(|p| p.id).collect();

        let at = start + 2;
        self.pages.splice(at..at, copies);
        info!("Duplicated spread {index}, album now has {} pages", self.pages.len());
        Ok(ids)
    }

    /// Removes both pages of content spread `index`.
    pub fn remove_spread(&mut self, index: usize) -> EditResult<Vec<AlbumPage>> {
        self.check_content_spread(index)?;
        let start = 2 * index - 1;
        let removed: Vec<AlbumPage> = self.pages.drain(start..start + 2).collect();
        info!("Removed spread {index}, album now has {} pages", self.pages.len());
        Ok(removed)
    }

    /// Swaps in a whole new page sequence, e.g. from a template.
    pub fn replace_pages(&mut self, pages: Vec<AlbumPage>) -> EditResult<()> {
        validate_page_count(pages.len())?;
        self.pages = pages;
        Ok(())
    }

    /// Restyles the front cover. Other pages are untouched.
    pub fn apply_cover(&mut self, cover: &CoverTemplate) -> EditResult<()> {
        let page = self
            .pages
            .first_mut()
            .ok_or_else(|| EditError::InvalidStructure("album has no front cover".to_owned()))?;
        page.background = Some(cover.background);
        page.replace_elements(cover.instantiate());
        info!("Applied cover template {}", cover.id);
        Ok(())
    }

    /// Replaces the page's elements with the layout's, keeping the background.
    pub fn apply_layout(&mut self, page_id: PageId, layout: &PageLayout) -> EditResult<()> {
        self.editable_page_mut(page_id)?
            .replace_elements(layout.instantiate());
        info!("Applied layout {} to page {page_id}", layout.id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_count_validation() {
        assert!(validate_page_count(4).is_ok());
        assert!(validate_page_count(16).is_ok());
        assert!(validate_page_count(2).is_err());
        assert!(validate_page_count(7).is_err());
        assert!(validate_page_count(18).is_err());
    }

    #[test]
    fn test_end_paper_indices() {
        assert!(is_end_paper_index(1, 4));
        assert!(is_end_paper_index(2, 4));
        assert!(!is_end_paper_index(0, 4));
        assert!(!is_end_paper_index(3, 4));
        assert!(is_end_paper_index(6, 8));
        assert!(!is_end_paper_index(2, 8));
    }
}
