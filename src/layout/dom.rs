//! Live DOM layout via web-sys

use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

use crate::models::{Offset, Rect};

use super::{LayoutNode, LayoutProvider};

/// Layout provider reading the current browser document
pub struct DomLayout {
    document: Document,
}

impl DomLayout {
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    /// Document of the current window, if running in a browser page
    pub fn from_window() -> Option<Self> {
        let document = web_sys::window()?.document()?;
        Some(Self::new(document))
    }
}

impl LayoutProvider for DomLayout {
    type Node = HtmlElement;

    fn element_by_id(&self, id: &str) -> Option<HtmlElement> {
        self.document
            .get_element_by_id(id)?
            .dyn_into::<HtmlElement>()
            .ok()
    }

    fn element_by_class(&self, class_name: &str) -> Option<HtmlElement> {
        self.document
            .get_elements_by_class_name(class_name)
            .item(0)?
            .dyn_into::<HtmlElement>()
            .ok()
    }
}

impl LayoutNode for HtmlElement {
    fn offset(&self) -> Offset {
        Offset::new(self.offset_left() as f64, self.offset_top() as f64)
    }

    fn client_rect(&self) -> Rect {
        let rect = self.get_bounding_client_rect();
        Rect::new(rect.top(), rect.left(), rect.width(), rect.height())
    }

    // Non-HTML ancestors (e.g. SVG) end the walk
    fn parent(&self) -> Option<Self> {
        self.parent_element()?.dyn_into::<HtmlElement>().ok()
    }

    fn is_body(&self) -> bool {
        self.tag_name().eq_ignore_ascii_case("body")
    }

    fn is_same(&self, other: &Self) -> bool {
        self.is_same_node(Some(other.as_ref()))
    }

    fn first_fragment(&self) -> Option<Self> {
        self.first_element_child()?.dyn_into::<HtmlElement>().ok()
    }

    fn last_fragment(&self) -> Option<Self> {
        self.last_element_child()?.dyn_into::<HtmlElement>().ok()
    }
}
