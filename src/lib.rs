#![warn(clippy::all, rust_2018_idioms)]

pub mod album;
pub mod app;
pub mod catalog;
pub mod command;
pub mod config;
pub mod drop_payload;
pub mod element;
pub mod error;
pub mod file_handler;
pub mod geometry;
pub mod id_generator;
pub mod page;
pub mod panels;
pub mod renderer;
pub mod spread;
pub mod state;
pub mod template;
pub mod texture_manager;
pub mod tools;
pub mod widgets;

pub use album::Album;
pub use app::AlbumApp;
pub use command::Command;
pub use config::EditorConfig;
pub use element::{AlbumElement, ElementKind, ElementPatch, ElementType};
pub use error::{EditError, EditResult};
pub use id_generator::{AlbumId, ElementId, PageId};
pub use page::AlbumPage;
pub use renderer::Renderer;
pub use state::EditorModel;
pub use template::{CoverTemplate, PageLayout, Template};
pub use tools::{SelectionTool, Tool};
