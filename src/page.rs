use egui::{Color32, Pos2};

use crate::element::{AlbumElement, ElementPatch};
use crate::error::{EditError, EditResult};
use crate::geometry::hit_testing::element_contains;
use crate::id_generator::{ElementId, PageId};

/// One page of an album: a background and a stack of elements, drawn in order.
#[derive(Debug, Clone, PartialEq)]
pub struct AlbumPage {
    pub id: PageId,
    pub background: Option<Color32>,
    elements: Vec<AlbumElement>,
}

impl Default for AlbumPage {
    fn default() -> Self {
        Self::blank()
    }
}

impl AlbumPage {
    pub fn new(background: Option<Color32>, elements: Vec<AlbumElement>) -> Self {
        Self {
            id: PageId::generate(),
            background,
            elements,
        }
    }

    /// An empty white page.
    pub fn blank() -> Self {
        Self::new(Some(Color32::WHITE), Vec::new())
    }

    pub fn elements(&self) -> &[AlbumElement] {
        &self.elements
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn find_element(&self, id: ElementId) -> Option<&AlbumElement> {
        self.elements.iter().find(|e| e.id == id)
    }

    /// Appends on top of the stack.
    pub fn add_element(&mut self, element: AlbumElement) {
        self.elements.push(element);
    }

    pub fn update_element(&mut self, id: ElementId, patch: &ElementPatch) -> EditResult<()> {
        let element = self
            .elements
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or(EditError::ElementNotFound(id))?;
        patch.apply(element);
        Ok(())
    }

    pub fn remove_element(&mut self, id: ElementId) -> Option<AlbumElement> {
        let index = self.elements.iter().position(|e| e.id == id)?;
        Some(self.elements.remove(index))
    }

    /// Top-most element whose rotated box contains `pos` (page space).
    pub fn element_at(&self, pos: Pos2) -> Option<&AlbumElement> {
        self.elements
            .iter()
            .rev()
            .find(|e| element_contains(&e.geometry, pos))
    }

    /// Removes every element and resets the background to white.
    pub fn clear(&mut self) {
        self.elements.clear();
        self.background = Some(Color32::WHITE);
    }

    /// Replaces the element stack, keeping the background.
    pub fn replace_elements(&mut self, elements: Vec<AlbumElement>) {
        self.elements = elements;
    }

    /// Deep copy with fresh page and element ids.
    pub fn duplicate(&self) -> Self {
        Self {
            id: PageId::generate(),
            background: self.background,
            elements: self.elements.iter().map(AlbumElement::duplicate).collect(),
        }
    }
}
