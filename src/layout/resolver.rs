//! Page-relative bounds from a rendered element tree

use crate::errors::{LinkError, Result};
use crate::models::{AnnotationBound, AnnotationId, BoundType, Offset, Rect};

use super::{BoundSource, LayoutNode, LayoutProvider, LinkLayoutConfig};

/// Cumulative offset of `node` relative to `boundary`
///
/// Starts from the node's own offset and keeps adding ancestor offsets. The
/// walk stops at the first parent that is the document body, the boundary
/// itself, or the boundary's parent, or when the tree runs out of parents.
/// Without a boundary only the node's own offset is returned.
pub fn page_relative_offset<N: LayoutNode>(node: &N, boundary: Option<&N>) -> Offset {
    let mut offset = node.offset();
    let Some(boundary) = boundary else {
        return offset;
    };
    let boundary_parent = boundary.parent();

    let mut current = node.clone();
    while let Some(parent) = current.parent() {
        if parent.is_body()
            || parent.is_same(boundary)
            || boundary_parent.as_ref().is_some_and(|bp| bp.is_same(&parent))
        {
            break;
        }
        offset += parent.offset();
        current = parent;
    }

    offset
}

/// Client rect of `node` with top/left re-based onto the page container
pub fn true_bound<N: LayoutNode>(node: &N, container: Option<&N>) -> Rect {
    node.client_rect()
        .with_offset(page_relative_offset(node, container))
}

/// [`BoundSource`] backed by a live element tree
///
/// Looks the page container up once at construction; build one per
/// computation so every call sees the current layout.
pub struct NodeBounds<'a, P: LayoutProvider> {
    layout: &'a P,
    container: Option<P::Node>,
    element_id: Box<dyn Fn(u32, &AnnotationId) -> String + 'a>,
}

impl<'a, P: LayoutProvider> NodeBounds<'a, P> {
    /// Element ids derived from the config prefix
    pub fn new(layout: &'a P, config: &'a LinkLayoutConfig) -> Self {
        Self::with_element_ids(layout, &config.document_class, move |page_num, id| {
            config.element_id(page_num, id)
        })
    }

    /// Element ids supplied by the caller
    pub fn with_element_ids<F>(layout: &'a P, document_class: &str, element_id: F) -> Self
    where
        F: Fn(u32, &AnnotationId) -> String + 'a,
    {
        let container = layout.element_by_class(document_class);
        if container.is_none() {
            log::warn!(
                "page container '.{}' not found, bounds fall back to element offsets",
                document_class
            );
        }

        Self {
            layout,
            container,
            element_id: Box::new(element_id),
        }
    }

    pub fn has_container(&self) -> bool {
        self.container.is_some()
    }
}

impl<P: LayoutProvider> BoundSource for NodeBounds<'_, P> {
    fn annotation_bound(
        &self,
        page_num: u32,
        id: &AnnotationId,
        bound_type: &BoundType,
    ) -> Result<AnnotationBound> {
        let element_id = (self.element_id)(page_num, id);
        let element = self
            .layout
            .element_by_id(&element_id)
            .ok_or_else(|| LinkError::ElementNotRendered {
                page_num,
                id: id.clone(),
                element_id: element_id.clone(),
            })?;
        let container = self.container.as_ref();

        if !bound_type.is_text() {
            return Ok(AnnotationBound::Single(true_bound(&element, container)));
        }

        match (element.first_fragment(), element.last_fragment()) {
            (Some(first), Some(last)) => Ok(AnnotationBound::Split(
                true_bound(&first, container),
                true_bound(&last, container),
            )),
            _ => Err(LinkError::MissingFragments { element_id }),
        }
    }
}
