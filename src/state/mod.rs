mod editor_model;

pub use editor_model::{DEFAULT_TITLE, EditorModel};
