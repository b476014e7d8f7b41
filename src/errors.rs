//! Error types for link geometry
//!
//! Resolution failures are reported per annotation; callers decide whether
//! a failure empties the whole result (source) or skips a single link (target).

use thiserror::Error;

use crate::models::AnnotationId;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum LinkError {
    /// No element is rendered for the annotation (page not mounted, or filtered out)
    #[error("annotation {id} on page {page_num} is not rendered (element id '{element_id}')")]
    ElementNotRendered {
        page_num: u32,
        id: AnnotationId,
        element_id: String,
    },

    /// A text annotation element has no inline fragments to measure
    #[error("text annotation element '{element_id}' has no fragments")]
    MissingFragments { element_id: String },

    /// Input from JavaScript did not have the expected shape
    #[error("invalid input: {0}")]
    Deserialize(String),
}

pub type Result<T> = std::result::Result<T, LinkError>;
