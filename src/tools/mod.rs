use egui::Pos2;

use crate::command::Command;
use crate::config::EditorConfig;
use crate::page::AlbumPage;

pub mod guides;
pub mod transform;

mod selection_tool;
pub use selection_tool::{SelectionState, SelectionTool};

pub use guides::{Guide, compute_guides};
pub use transform::{NodeTransform, resize, rotate, translate};

/// What a tool sees of the page under the pointer.
#[derive(Debug, Clone, Copy)]
pub struct CanvasContext<'a> {
    pub page: &'a AlbumPage,
    /// End papers render but take no input.
    pub editable: bool,
    pub config: &'a EditorConfig,
}

/// A canvas interaction. Positions are page-local; tools never mutate the
/// album and instead return a [`Command`] when a gesture should take effect.
pub trait Tool {
    fn name(&self) -> &'static str;

    /// Name of the current internal state, for logging.
    fn current_state_name(&self) -> &'static str;

    /// Handle pointer press. Return a Command to **begin** an action if applicable.
    fn on_pointer_down(&mut self, pos: Pos2, ctx: &CanvasContext<'_>) -> Option<Command>;

    /// Handle pointer drag while the pointer is held down.
    fn on_pointer_move(&mut self, pos: Pos2, ctx: &CanvasContext<'_>) -> Option<Command>;

    /// Handle pointer release. Return a Command to **finalize** an action.
    fn on_pointer_up(&mut self, pos: Pos2, ctx: &CanvasContext<'_>) -> Option<Command>;

    /// Drops any gesture in progress.
    fn cancel(&mut self);
}
