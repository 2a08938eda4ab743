//! Pointer handling for the canvas: pick, drag, resize and rotate.
//!
//! ```text
//!   Idle ──press element──▶ Dragging ──release──▶ Selected
//!    ▲                                               │
//!    └──press empty──────────────────────────────────┤
//!                                                    │ press handle
//!   Selected ◀──release── Transforming ◀─────────────┘
//! ```
//!
//! The tool never touches the album. Gestures are previewed from the state
//! held here and committed as a single [`Command::UpdateElement`] on release.

use egui::{Pos2, Vec2};
use log::debug;

use super::guides::{Guide, compute_guides};
use super::transform::{NodeTransform, resize, rotate, translate};
use super::{CanvasContext, Tool};
use crate::command::Command;
use crate::element::{ElementPatch, ElementType};
use crate::geometry::ElementGeometry;
use crate::geometry::hit_testing::handle_at;
use crate::id_generator::{ElementId, PageId};
use crate::widgets::Handle;

#[derive(Debug, Clone, Default, PartialEq)]
pub enum SelectionState {
    #[default]
    Idle,
    Selected {
        page_id: PageId,
        element_id: ElementId,
    },
    Dragging {
        page_id: PageId,
        element_id: ElementId,
        start: Pos2,
        initial: ElementGeometry,
        current: ElementGeometry,
    },
    Transforming {
        page_id: PageId,
        element_id: ElementId,
        handle: Handle,
        start: Pos2,
        initial: ElementGeometry,
        node: NodeTransform,
        min_size: Vec2,
        is_text: bool,
    },
}

impl SelectionState {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::Selected { .. } => "Selected",
            Self::Dragging { .. } => "Dragging",
            Self::Transforming { .. } => "Transforming",
        }
    }

    /// Page and element this state refers to, if any.
    pub fn target(&self) -> Option<(PageId, ElementId)> {
        match self {
            Self::Idle => None,
            Self::Selected {
                page_id,
                element_id,
            }
            | Self::Dragging {
                page_id,
                element_id,
                ..
            }
            | Self::Transforming {
                page_id,
                element_id,
                ..
            } => Some((*page_id, *element_id)),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct SelectionTool {
    state: SelectionState,
    guides: Vec<Guide>,
}

impl SelectionTool {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    pub fn selected(&self) -> Option<(PageId, ElementId)> {
        self.state.target()
    }

    /// Guides for the element being dragged.
    pub fn guides(&self) -> &[Guide] {
        &self.guides
    }

    /// The handle being dragged, else the selected element's handle under `pos`.
    pub fn hovered_handle(&self, pos: Pos2, ctx: &CanvasContext<'_>) -> Option<Handle> {
        if let SelectionState::Transforming { handle, .. } = &self.state {
            return Some(*handle);
        }
        let (page_id, element_id) = self.state.target()?;
        if page_id != ctx.page.id {
            return None;
        }
        let element = ctx.page.find_element(element_id)?;
        handle_at(
            &element.geometry,
            Handle::for_text(element.is_text()),
            pos,
            ctx.config.handle_radius,
            ctx.config.rotate_handle_offset,
        )
    }

    /// Geometry to draw for `element_id` while a gesture moves it.
    pub fn preview_geometry(&self, element_id: ElementId) -> Option<ElementGeometry> {
        match &self.state {
            SelectionState::Dragging {
                element_id: id,
                current,
                ..
            } if *id == element_id => Some(*current),
            SelectionState::Transforming {
                element_id: id,
                initial,
                node,
                ..
            } if *id == element_id => Some(node.preview(initial.size)),
            _ => None,
        }
    }

    /// Follows a selection made elsewhere (sidebar, delete key, template swap).
    /// A gesture on the same element is kept.
    pub fn sync_selection(&mut self, selection: Option<(PageId, ElementId)>) {
        match (self.state.target(), selection) {
            (Some((_, current)), Some((_, id))) if current == id => {}
            (_, Some((page_id, element_id))) => {
                self.state = SelectionState::Selected {
                    page_id,
                    element_id,
                };
                self.guides.clear();
            }
            (_, None) => {
                self.state = SelectionState::Idle;
                self.guides.clear();
            }
        }
    }

    /// Double-clicking an image asks for replacement content.
    pub fn on_double_click(&mut self, pos: Pos2, ctx: &CanvasContext<'_>) -> Option<Command> {
        if !ctx.editable {
            return None;
        }
        let element = ctx.page.element_at(pos)?;
        (element.element_type() == ElementType::Image).then(|| Command::RequestImageReplace {
            page_id: ctx.page.id,
            element_id: element.id,
        })
    }

    fn handle_under(&self, pos: Pos2, ctx: &CanvasContext<'_>) -> Option<SelectionState> {
        let handle = self.hovered_handle(pos, ctx)?;
        let (page_id, element_id) = self.state.target()?;
        let element = ctx.page.find_element(element_id)?;
        Some(SelectionState::Transforming {
            page_id,
            element_id,
            handle,
            start: pos,
            initial: element.geometry,
            node: NodeTransform::identity(&element.geometry),
            min_size: element.min_size(),
            is_text: element.is_text(),
        })
    }
}

impl Tool for SelectionTool {
    fn name(&self) -> &'static str {
        "Selection"
    }

    fn current_state_name(&self) -> &'static str {
        self.state.name()
    }

    fn on_pointer_down(&mut self, pos: Pos2, ctx: &CanvasContext<'_>) -> Option<Command> {
        self.guides.clear();

        if !ctx.editable {
            let had_selection = self.state.target().is_some();
            self.state = SelectionState::Idle;
            return had_selection.then_some(Command::SelectElement(None));
        }

        if let Some(transforming) = self.handle_under(pos, ctx) {
            debug!("Transform started: {:?}", transforming.target());
            self.state = transforming;
            return None;
        }

        match ctx.page.element_at(pos) {
            Some(element) => {
                self.state = SelectionState::Dragging {
                    page_id: ctx.page.id,
                    element_id: element.id,
                    start: pos,
                    initial: element.geometry,
                    current: element.geometry,
                };
                Some(Command::SelectElement(Some(element.id)))
            }
            None => {
                self.state = SelectionState::Idle;
                Some(Command::SelectElement(None))
            }
        }
    }

    fn on_pointer_move(&mut self, pos: Pos2, ctx: &CanvasContext<'_>) -> Option<Command> {
        match &mut self.state {
            SelectionState::Dragging {
                element_id,
                start,
                initial,
                current,
                ..
            } => {
                *current = translate(initial, pos - *start);
                let others = ctx
                    .page
                    .elements()
                    .iter()
                    .filter(|e| e.id != *element_id)
                    .map(|e| &e.geometry);
                self.guides = compute_guides(
                    current,
                    others,
                    ctx.config.page_size,
                    ctx.config.guide_threshold,
                );
            }
            SelectionState::Transforming {
                handle,
                start,
                initial,
                node,
                min_size,
                ..
            } => {
                *node = match handle {
                    Handle::Rotate => rotate(initial, *start, pos),
                    _ => resize(initial, *handle, pos - *start, *min_size),
                };
            }
            SelectionState::Idle | SelectionState::Selected { .. } => {}
        }
        None
    }

    fn on_pointer_up(&mut self, _pos: Pos2, _ctx: &CanvasContext<'_>) -> Option<Command> {
        self.guides.clear();
        match std::mem::take(&mut self.state) {
            SelectionState::Dragging {
                page_id,
                element_id,
                initial,
                current,
                ..
            } => {
                self.state = SelectionState::Selected {
                    page_id,
                    element_id,
                };
                if current.position == initial.position {
                    return None;
                }
                Some(Command::UpdateElement {
                    page_id,
                    element_id,
                    patch: ElementPatch::position(current.position.x, current.position.y),
                })
            }
            SelectionState::Transforming {
                page_id,
                element_id,
                initial,
                node,
                min_size,
                is_text,
                ..
            } => {
                self.state = SelectionState::Selected {
                    page_id,
                    element_id,
                };
                let folded = node.fold_scale(initial.size, min_size);
                if folded == initial {
                    return None;
                }
                // Text height follows its content.
                let patch = ElementPatch {
                    x: Some(folded.position.x),
                    y: Some(folded.position.y),
                    width: Some(folded.size.x),
                    height: (!is_text).then_some(folded.size.y),
                    rotation: Some(folded.rotation),
                    ..Default::default()
                };
                Some(Command::UpdateElement {
                    page_id,
                    element_id,
                    patch,
                })
            }
            other => {
                self.state = other;
                None
            }
        }
    }

    fn cancel(&mut self) {
        self.guides.clear();
        self.state = match self.state.target() {
            Some((page_id, element_id)) => SelectionState::Selected {
                page_id,
                element_id,
            },
            None => SelectionState::Idle,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EditorConfig;
    use crate::element::create_element;
    use crate::page::AlbumPage;
    use egui::pos2;

    fn page_with(elements: &[(ElementType, Pos2)]) -> (AlbumPage, Vec<ElementId>) {
        let mut page = AlbumPage::blank();
        let mut ids = Vec::new();
        for (element_type, pos) in elements {
            let element = create_element(*element_type, None, Some(*pos), ElementPatch::default());
            ids.push(element.id);
            page.add_element(element);
        }
        (page, ids)
    }

    fn ctx<'a>(page: &'a AlbumPage, config: &'a EditorConfig) -> CanvasContext<'a> {
        CanvasContext {
            page,
            editable: true,
            config,
        }
    }

    #[test]
    fn test_press_on_empty_area_clears_selection() {
        let config = EditorConfig::default();
        let (page, _) = page_with(&[(ElementType::Shape, pos2(100.0, 100.0))]);
        let mut tool = SelectionTool::new();

        let command = tool.on_pointer_down(pos2(350.0, 500.0), &ctx(&page, &config));
        assert_eq!(command, Some(Command::SelectElement(None)));
        assert_eq!(tool.state(), &SelectionState::Idle);
    }

    #[test]
    fn test_drag_commits_position_on_release() {
        let config = EditorConfig::default();
        let (page, ids) = page_with(&[(ElementType::Shape, pos2(100.0, 100.0))]);
        let mut tool = SelectionTool::new();
        let c = ctx(&page, &config);

        let down = tool.on_pointer_down(pos2(150.0, 150.0), &c);
        assert_eq!(down, Some(Command::SelectElement(Some(ids[0]))));
        tool.on_pointer_move(pos2(170.0, 140.0), &c);
        assert_eq!(
            tool.preview_geometry(ids[0]).map(|g| g.position),
            Some(pos2(120.0, 90.0))
        );

        let up = tool.on_pointer_up(pos2(170.0, 140.0), &c);
        assert_eq!(
            up,
            Some(Command::UpdateElement {
                page_id: page.id,
                element_id: ids[0],
                patch: ElementPatch::position(120.0, 90.0),
            })
        );
        assert_eq!(tool.state().name(), "Selected");
    }

    #[test]
    fn test_click_without_motion_commits_nothing() {
        let config = EditorConfig::default();
        let (page, _) = page_with(&[(ElementType::Shape, pos2(100.0, 100.0))]);
        let mut tool = SelectionTool::new();
        let c = ctx(&page, &config);

        tool.on_pointer_down(pos2(150.0, 150.0), &c);
        assert_eq!(tool.on_pointer_up(pos2(150.0, 150.0), &c), None);
    }

    #[test]
    fn test_drag_reports_edge_guides() {
        let config = EditorConfig::default();
        let (page, _) = page_with(&[
            (ElementType::Shape, pos2(200.0, 300.0)),
            (ElementType::Shape, pos2(20.0, 20.0)),
        ]);
        let mut tool = SelectionTool::new();
        let c = ctx(&page, &config);

        tool.on_pointer_down(pos2(30.0, 30.0), &c);
        tool.on_pointer_move(pos2(208.0, 40.0), &c);
        assert!(tool.guides().contains(&Guide::Vertical(200.0)));

        tool.on_pointer_up(pos2(208.0, 40.0), &c);
        assert!(tool.guides().is_empty());
    }

    #[test]
    fn test_handle_press_resizes_text_width_only() {
        let config = EditorConfig::default();
        let (page, ids) = page_with(&[(ElementType::Text, pos2(50.0, 50.0))]);
        let mut tool = SelectionTool::new();
        tool.sync_selection(Some((page.id, ids[0])));
        let c = ctx(&page, &config);

        // Right handle of a 250x50 text box at (50, 50).
        let down = tool.on_pointer_down(pos2(300.0, 75.0), &c);
        assert_eq!(down, None);
        assert_eq!(tool.current_state_name(), "Transforming");

        tool.on_pointer_move(pos2(350.0, 90.0), &c);
        let Some(Command::UpdateElement { patch, .. }) = tool.on_pointer_up(pos2(350.0, 90.0), &c)
        else {
            panic!("expected an update");
        };
        assert!(patch.width.is_some_and(|w| (w - 300.0).abs() < 1e-3));
        assert_eq!(patch.height, None);
        assert_eq!(patch.x, Some(50.0));
    }

    #[test]
    fn test_text_width_never_below_minimum() {
        let config = EditorConfig::default();
        let (page, ids) = page_with(&[(ElementType::Text, pos2(50.0, 50.0))]);
        let mut tool = SelectionTool::new();
        tool.sync_selection(Some((page.id, ids[0])));
        let c = ctx(&page, &config);

        tool.on_pointer_down(pos2(300.0, 75.0), &c);
        tool.on_pointer_move(pos2(0.0, 75.0), &c);
        let Some(Command::UpdateElement { patch, .. }) = tool.on_pointer_up(pos2(0.0, 75.0), &c)
        else {
            panic!("expected an update");
        };
        assert!(patch.width.is_some_and(|w| (w - 30.0).abs() < 1e-3));
    }

    #[test]
    fn test_end_paper_takes_no_input() {
        let config = EditorConfig::default();
        let (page, _) = page_with(&[(ElementType::Shape, pos2(100.0, 100.0))]);
        let mut tool = SelectionTool::new();
        let c = CanvasContext {
            page: &page,
            editable: false,
            config: &config,
        };

        assert_eq!(tool.on_pointer_down(pos2(150.0, 150.0), &c), None);
        assert_eq!(tool.state(), &SelectionState::Idle);
    }

    #[test]
    fn test_double_click_on_image_requests_replacement() {
        let config = EditorConfig::default();
        let (page, ids) = page_with(&[
            (ElementType::Image, pos2(0.0, 0.0)),
            (ElementType::Shape, pos2(300.0, 400.0)),
        ]);
        let mut tool = SelectionTool::new();
        let c = ctx(&page, &config);

        assert_eq!(
            tool.on_double_click(pos2(20.0, 20.0), &c),
            Some(Command::RequestImageReplace {
                page_id: page.id,
                element_id: ids[0],
            })
        );
        assert_eq!(tool.on_double_click(pos2(350.0, 450.0), &c), None);
    }

    #[test]
    fn test_sync_clears_vanished_selection() {
        let mut tool = SelectionTool::new();
        let page_id = PageId::generate();
        let element_id = ElementId::generate();
        tool.sync_selection(Some((page_id, element_id)));
        assert_eq!(tool.selected(), Some((page_id, element_id)));
        tool.sync_selection(None);
        assert_eq!(tool.state(), &SelectionState::Idle);
    }
}
