//! Bound resolution
//!
//! Turns `(page_num, annotation id)` into page-relative boxes. The live DOM
//! is reached only through [`LayoutProvider`]/[`LayoutNode`], so everything
//! above this module is plain geometry.

pub mod bound_map;
pub mod dom;
pub mod resolver;

pub use bound_map::BoundMap;
pub use dom::DomLayout;
pub use resolver::{page_relative_offset, true_bound, NodeBounds};

use serde::{Deserialize, Serialize};

use crate::errors::Result;
use crate::models::{AnnotationBound, AnnotationId, BoundType, Offset, Rect};

/// Class name of the element wrapping the rendered document pages
pub const DEFAULT_DOCUMENT_CLASS: &str = "react-pdf__Document";

/// Prefix of the DOM id given to each rendered annotation
pub const DEFAULT_ELEMENT_ID_PREFIX: &str = "Annotation";

/// A rendered element that can report its own layout
pub trait LayoutNode: Clone {
    /// `offsetLeft`/`offsetTop` of this element
    fn offset(&self) -> Offset;

    /// Viewport-relative box (only width and height are page-stable)
    fn client_rect(&self) -> Rect;

    fn parent(&self) -> Option<Self>;

    fn is_body(&self) -> bool;

    fn is_same(&self, other: &Self) -> bool;

    /// First inline fragment of a text annotation
    fn first_fragment(&self) -> Option<Self>;

    /// Last inline fragment of a text annotation
    fn last_fragment(&self) -> Option<Self>;
}

/// Element lookup over a rendered page tree
pub trait LayoutProvider {
    type Node: LayoutNode;

    fn element_by_id(&self, id: &str) -> Option<Self::Node>;

    /// First element carrying the given class name
    fn element_by_class(&self, class_name: &str) -> Option<Self::Node>;
}

/// Anything that can hand out the page-relative bound of an annotation
pub trait BoundSource {
    fn annotation_bound(
        &self,
        page_num: u32,
        id: &AnnotationId,
        bound_type: &BoundType,
    ) -> Result<AnnotationBound>;
}

/// Layout settings passed from the UI
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LinkLayoutConfig {
    /// Class name of the page container that coordinates are relative to
    pub document_class: String,

    /// Prefix used when deriving annotation element ids
    pub element_id_prefix: String,
}

impl LinkLayoutConfig {
    /// DOM id of the element rendering annotation `id` on `page_num`
    pub fn element_id(&self, page_num: u32, id: &AnnotationId) -> String {
        format!("{}-{}-{}", self.element_id_prefix, page_num, id)
    }
}

impl Default for LinkLayoutConfig {
    fn default() -> Self {
        Self {
            document_class: DEFAULT_DOCUMENT_CLASS.to_string(),
            element_id_prefix: DEFAULT_ELEMENT_ID_PREFIX.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_element_id() {
        let config = LinkLayoutConfig::default();
        assert_eq!(config.element_id(3, &AnnotationId::from(42)), "Annotation-3-42");
        assert_eq!(config.element_id(1, &AnnotationId::from("a-b")), "Annotation-1-a-b");
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: LinkLayoutConfig = serde_json::from_str(r#"{"elementIdPrefix": "Ann"}"#).unwrap();
        assert_eq!(config.element_id_prefix, "Ann");
        assert_eq!(config.document_class, DEFAULT_DOCUMENT_CLASS);
    }
}
