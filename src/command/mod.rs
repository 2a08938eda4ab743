use egui::{Color32, Pos2};

use crate::element::{ElementPatch, ElementType};
use crate::id_generator::{ElementId, PageId};
use crate::template::{CoverTemplate, PageLayout, Template};

/// A request to change the editor. Surfaces never mutate the album
/// directly; they emit these and [`crate::state::EditorModel::execute`]
/// applies them.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    AddElement {
        page_id: PageId,
        element_type: ElementType,
        content: Option<String>,
        position: Option<Pos2>,
        extra: ElementPatch,
    },
    UpdateElement {
        page_id: PageId,
        element_id: ElementId,
        patch: ElementPatch,
    },
    DeleteElement(ElementId),
    DeleteSelected,
    SelectElement(Option<ElementId>),
    /// Photos from the file picker for the page that takes dropped files.
    RequestImageUpload,
    /// An image asked for new content from the file picker or a dropped file.
    RequestImageReplace {
        page_id: PageId,
        element_id: ElementId,
    },
    /// Completion of a replacement read.
    ReplaceImageContent {
        page_id: PageId,
        element_id: ElementId,
        data_uri: String,
    },
    AddPages,
    DuplicateSpread(usize),
    RemoveSpread(usize),
    ClearPage(PageId),
    SetBackground {
        page_id: PageId,
        color: Color32,
    },
    ApplyTemplate(Template),
    ApplyCoverTemplate(CoverTemplate),
    ApplyLayout {
        page_id: PageId,
        layout: PageLayout,
    },
    /// Raw dropped text at a page-local position.
    Drop {
        page_id: PageId,
        payload: String,
        position: Pos2,
    },
    GoToSpread(usize),
    SetActivePage(PageId),
    SetTitle(String),
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::AddElement { .. } => "add_element",
            Command::UpdateElement { .. } => "update_element",
            Command::DeleteElement(_) => "delete_element",
            Command::DeleteSelected => "delete_selected",
            Command::SelectElement(_) => "select_element",
            Command::RequestImageReplace { .. } => "request_image_replace",
            Command::RequestImageUpload => "request_image_upload",
            Command::ReplaceImageContent { .. } => "replace_image_content",
            Command::AddPages => "add_pages",
            Command::DuplicateSpread(_) => "duplicate_spread",
            Command::RemoveSpread(_) => "remove_spread",
            Command::ClearPage(_) => "clear_page",
            Command::SetBackground { .. } => "set_background",
            Command::ApplyTemplate(_) => "apply_template",
            Command::ApplyCoverTemplate(_) => "apply_cover_template",
            Command::ApplyLayout { .. } => "apply_layout",
            Command::Drop { .. } => "drop",
            Command::GoToSpread(_) => "go_to_spread",
            Command::SetActivePage(_) => "set_active_page",
            Command::SetTitle(_) => "set_title",
        }
    }
}
