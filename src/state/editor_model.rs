use egui::{Color32, Pos2};
use log::{debug, error, info, warn};

use crate::album::Album;
use crate::command::Command;
use crate::drop_payload::{DropAction, resolve_drop};
use crate::element::{ElementPatch, ElementType, create_element};
use crate::error::{EditError, EditResult};
use crate::file_handler::LoadTarget;
use crate::id_generator::{ElementId, PageId};
use crate::page::AlbumPage;
use crate::spread::{SpreadNavigator, default_active_page, spread_index_to_pages, spread_of_page};
use crate::template::{CoverTemplate, PageLayout, Template};

pub const DEFAULT_TITLE: &str = "My Pastel Story";

/// The editor's single owned state: the album, which spread is shown, which
/// page receives sidebar actions and which element is selected.
///
/// Every public mutation returns an [`EditResult`]; [`Self::execute`] is the
/// boundary that turns failures into log lines and user notices.
#[derive(Debug, Clone)]
pub struct EditorModel {
    album: Album,
    navigator: SpreadNavigator,
    active_page: Option<PageId>,
    selection: Option<ElementId>,
    replace_target: Option<(PageId, ElementId)>,
    file_request: Option<LoadTarget>,
    notices: Vec<String>,
}

impl Default for EditorModel {
    fn default() -> Self {
        Self::new(Album::blank(DEFAULT_TITLE))
    }
}

impl EditorModel {
    pub fn new(album: Album) -> Self {
        let mut model = Self {
            album,
            navigator: SpreadNavigator::default(),
            active_page: None,
            selection: None,
            replace_target: None,
            file_request: None,
            notices: Vec::new(),
        };
        model.navigate(0);
        model
    }

    /// A fresh album built from `template`.
    pub fn from_template(title: &str, template: &Template) -> EditResult<Self> {
        Ok(Self::new(Album::new(title, template.expand()?)?))
    }

    pub fn album(&self) -> &Album {
        &self.album
    }

    pub fn current_spread(&self) -> usize {
        self.navigator.current()
    }

    pub fn navigator(&self) -> &SpreadNavigator {
        &self.navigator
    }

    /// `[left, right]` pages of the spread on screen.
    pub fn spread_pages(&self) -> [Option<&AlbumPage>; 2] {
        spread_index_to_pages(self.album.pages(), self.navigator.current())
    }

    pub fn active_page(&self) -> Option<PageId> {
        self.active_page
    }

    pub fn selection(&self) -> Option<ElementId> {
        self.selection
    }

    /// Pending request for the file picker, taken once by the app.
    pub fn take_file_request(&mut self) -> Option<LoadTarget> {
        self.file_request.take()
    }

    /// Image waiting for replacement content from the picker or a dropped file.
    pub fn replace_target(&self) -> Option<(PageId, ElementId)> {
        self.replace_target
    }

    pub fn clear_replace_target(&mut self) {
        self.replace_target = None;
    }

    /// Page that receives a dropped file as a new image: the active page when
    /// it can be edited, otherwise the editable page of the current spread.
    pub fn file_drop_target(&self) -> Option<PageId> {
        if self.album.is_editable(self.active_page) {
            return self.active_page;
        }
        let [left, right] = self.spread_pages();
        [right, left]
            .into_iter()
            .flatten()
            .map(|p| p.id)
            .find(|id| self.album.is_editable(Some(*id)))
    }

    /// Messages produced by rejected operations since the last call.
    pub fn take_notices(&mut self) -> Vec<String> {
        std::mem::take(&mut self.notices)
    }

    fn navigate(&mut self, index: usize) {
        let current = self.navigator.go_to(index, self.album.page_count());
        self.active_page = default_active_page(self.album.pages(), current);
    }

    pub fn go_to_spread(&mut self, index: usize) {
        self.navigate(index);
    }

    pub fn next_spread(&mut self) {
        self.navigate(self.navigator.current().saturating_add(1));
    }

    pub fn prev_spread(&mut self) {
        self.navigate(self.navigator.current().saturating_sub(1));
    }

    pub fn set_active_page(&mut self, page_id: PageId) -> EditResult<()> {
        self.album
            .page_index(page_id)
            .ok_or(EditError::PageNotFound(page_id))?;
        self.active_page = Some(page_id);
        Ok(())
    }

    pub fn select(&mut self, element_id: Option<ElementId>) {
        self.selection = element_id;
    }

    pub fn set_title(&mut self, title: String) {
        self.album.title = title;
    }

    /// Creates an element on `page_id` and selects it.
    pub fn add_element(
        &mut self,
        page_id: PageId,
        element_type: ElementType,
        content: Option<&str>,
        position: Option<Pos2>,
        extra: ElementPatch,
    ) -> EditResult<ElementId> {
        self.album.ensure_editable(page_id)?;
        let element = create_element(element_type, content, position, extra);
        let id = self.album.add_element(page_id, element)?;
        self.selection = Some(id);
        Ok(id)
    }

    pub fn update_element(
        &mut self,
        page_id: PageId,
        element_id: ElementId,
        patch: &ElementPatch,
    ) -> EditResult<()> {
        self.album.update_element(page_id, element_id, patch)
    }

    pub fn delete_element(&mut self, element_id: ElementId) -> EditResult<()> {
        self.album.delete_element(element_id)?;
        if self.selection == Some(element_id) {
            self.selection = None;
        }
        Ok(())
    }

    pub fn delete_selected(&mut self) -> EditResult<()> {
        let Some(id) = self.selection.take() else {
            return Ok(());
        };
        match self.album.delete_element(id) {
            Ok(_) | Err(EditError::ElementNotFound(_)) => Ok(()),
            Err(e) => Err(e),
        }
    }

    /// Asks the file picker for photos to add to the page that takes dropped files.
    pub fn request_image_upload(&mut self) -> EditResult<()> {
        let Some(page_id) = self.file_drop_target() else {
            debug!("No editable page on spread {} for photos", self.current_spread());
            return Ok(());
        };
        self.file_request = Some(LoadTarget::NewImage { page_id });
        Ok(())
    }

    /// Selects an image, asks the file picker for its new content and arms it
    /// for replacement by the next dropped file.
    pub fn request_image_replace(&mut self, page_id: PageId, element_id: ElementId) -> EditResult<()> {
        self.album.ensure_editable(page_id)?;
        let page = self.album.page(page_id).ok_or(EditError::PageNotFound(page_id))?;
        let element = page
            .find_element(element_id)
            .ok_or(EditError::ElementNotFound(element_id))?;
        if element.element_type() != ElementType::Image {
            return Err(EditError::MalformedPayload(format!(
                "element {element_id} is not an image"
            )));
        }
        self.selection = Some(element_id);
        self.replace_target = Some((page_id, element_id));
        self.file_request = Some(LoadTarget::Replace {
            page_id,
            element_id,
        });
        info!("Waiting for new content for {element_id}");
        Ok(())
    }

    pub fn replace_image_content(
        &mut self,
        page_id: PageId,
        element_id: ElementId,
        data_uri: String,
    ) -> EditResult<()> {
        let patch = ElementPatch {
            content: Some(data_uri),
            ..Default::default()
        };
        if self.replace_target == Some((page_id, element_id)) {
            self.replace_target = None;
        }
        self.album.update_element(page_id, element_id, &patch)
    }

    /// Appends a blank spread before the back end paper and shows the next spread.
    pub fn add_pages(&mut self) -> EditResult<()> {
        self.album.insert_blank_pages()?;
        self.navigate(self.navigator.current() + 1);
        Ok(())
    }

    pub fn duplicate_spread(&mut self, index: usize) -> EditResult<()> {
        self.album.duplicate_spread(index)?;
        Ok(())
    }

    pub fn remove_spread(&mut self, index: usize) -> EditResult<()> {
        self.album.remove_spread(index)?;
        let current = self.navigator.current();
        let next = if current >= index {
            current.saturating_sub(1)
        } else {
            current
        };
        self.navigate(next);
        Ok(())
    }

    pub fn clear_page(&mut self, page_id: PageId) -> EditResult<()> {
        self.album.clear_page(page_id)
    }

    pub fn set_background(&mut self, page_id: PageId, color: Color32) -> EditResult<()> {
        self.album.set_background(page_id, color)
    }

    /// Replaces every page. Shows the cover and clears the selection.
    pub fn apply_template(&mut self, template: &Template) -> EditResult<()> {
        let pages = template.expand()?;
        self.album.replace_pages(pages)?;
        self.selection = None;
        self.replace_target = None;
        self.file_request = None;
        self.navigate(0);
        info!("Applied template {}", template.id);
        Ok(())
    }

    pub fn apply_cover_template(&mut self, cover: &CoverTemplate) -> EditResult<()> {
        self.album.apply_cover(cover)?;
        self.navigate(0);
        Ok(())
    }

    pub fn apply_layout(&mut self, page_id: PageId, layout: &PageLayout) -> EditResult<()> {
        self.album.apply_layout(page_id, layout)
    }

    /// Handles text dropped at `position` (page-local) on `page_id`.
    pub fn drop_payload(&mut self, page_id: PageId, payload: &str, position: Pos2) -> EditResult<()> {
        match resolve_drop(payload)? {
            DropAction::AddElement {
                element_type,
                content,
            } => self
                .add_element(
                    page_id,
                    element_type,
                    Some(&content),
                    Some(position),
                    ElementPatch::default(),
                )
                .map(|_| ()),
            DropAction::SetBackground(color) => self.set_background(page_id, color),
        }
    }

    /// Applies `command`. Failures never escape: user-facing ones become
    /// notices, everything else is logged.
    pub fn execute(&mut self, command: Command) {
        let name = command.name();
        let result = match command {
            Command::AddElement {
                page_id,
                element_type,
                content,
                position,
                extra,
            } => self
                .add_element(page_id, element_type, content.as_deref(), position, extra)
                .map(|_| ()),
            Command::UpdateElement {
                page_id,
                element_id,
                patch,
            } => self.update_element(page_id, element_id, &patch),
            Command::DeleteElement(id) => self.delete_element(id),
            Command::DeleteSelected => self.delete_selected(),
            Command::SelectElement(id) => {
                self.select(id);
                Ok(())
            }
            Command::RequestImageReplace {
                page_id,
                element_id,
            } => self.request_image_replace(page_id, element_id),
            Command::RequestImageUpload => self.request_image_upload(),
            Command::ReplaceImageContent {
                page_id,
                element_id,
                data_uri,
            } => self.replace_image_content(page_id, element_id, data_uri),
            Command::AddPages => self.add_pages(),
            Command::DuplicateSpread(index) => self.duplicate_spread(index),
            Command::RemoveSpread(index) => self.remove_spread(index),
            Command::ClearPage(page_id) => self.clear_page(page_id),
            Command::SetBackground { page_id, color } => self.set_background(page_id, color),
            Command::ApplyTemplate(template) => self.apply_template(&template),
            Command::ApplyCoverTemplate(cover) => self.apply_cover_template(&cover),
            Command::ApplyLayout { page_id, layout } => self.apply_layout(page_id, &layout),
            Command::Drop {
                page_id,
                payload,
                position,
            } => self.drop_payload(page_id, &payload, position),
            Command::GoToSpread(index) => {
                self.go_to_spread(index);
                Ok(())
            }
            Command::SetActivePage(page_id) => self.set_active_page(page_id),
            Command::SetTitle(title) => {
                self.set_title(title);
                Ok(())
            }
        };

        if let Err(e) = result {
            self.report(name, e);
        }
    }

    fn report(&mut self, command: &str, e: EditError) {
        match &e {
            _ if e.is_user_facing() => {
                warn!("{command} rejected: {e}");
                self.notices.push(e.to_string());
            }
            EditError::MalformedPayload(_) | EditError::InvalidStructure(_) => {
                error!("{command} failed: {e}");
            }
            _ => debug!("{command} ignored: {e}"),
        }
    }

    /// Page holding `element_id`, and the spread it is shown on.
    pub fn locate_element(&self, element_id: ElementId) -> Option<(PageId, usize)> {
        let (page_id, _) = self.album.find_element(element_id)?;
        let index = self.album.page_index(page_id)?;
        Some((page_id, spread_of_page(index, self.album.page_count())))
    }
}
