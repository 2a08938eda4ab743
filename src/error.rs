use thiserror::Error;

use crate::id_generator::{ElementId, PageId};

/// Errors produced by album and element operations.
///
/// None of these are fatal: [`crate::state::EditorModel::execute`] turns them
/// into log lines, and the user-facing ones into notices.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EditError {
    #[error("page {0} does not exist")]
    PageNotFound(PageId),

    #[error("element {0} does not exist")]
    ElementNotFound(ElementId),

    #[error("page {0} is an end paper and cannot be edited")]
    PageNotEditable(PageId),

    #[error("Maximum of {max_content} content pages reached.")]
    MaxPagesReached { max_content: usize },

    #[error("the cover spread cannot be removed")]
    CoverSpreadProtected,

    #[error("This spread contains non-removable end papers.")]
    EndPaperSpreadProtected(usize),

    #[error("spread {index} is out of range (last spread is {last})")]
    SpreadOutOfRange { index: usize, last: usize },

    #[error("malformed payload: {0}")]
    MalformedPayload(String),

    #[error("invalid album structure: {0}")]
    InvalidStructure(String),
}

impl EditError {
    /// Whether the rejection should be surfaced to the user rather than
    /// silently ignored.
    pub fn is_user_facing(&self) -> bool {
        matches!(
            self,
            Self::MaxPagesReached { .. } | Self::EndPaperSpreadProtected(_)
        )
    }
}

impl From<serde_json::Error> for EditError {
    fn from(error: serde_json::Error) -> Self {
        Self::MalformedPayload(error.to_string())
    }
}

pub type EditResult<T> = Result<T, EditError>;
