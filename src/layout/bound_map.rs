//! Precomputed bounds keyed by page and annotation id
//!
//! Used when the caller has already measured the annotations (off-DOM
//! rendering, canvas layers) and only needs the connector geometry.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::errors::{LinkError, Result};
use crate::models::{AnnotationBound, AnnotationId, BoundType};

use super::BoundSource;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BoundMap {
    bounds: HashMap<String, AnnotationBound>,
}

impl BoundMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Map key for an annotation: `"<page_num>:<id>"`
    pub fn key(page_num: u32, id: &AnnotationId) -> String {
        format!("{}:{}", page_num, id)
    }

    pub fn insert(&mut self, page_num: u32, id: impl Into<AnnotationId>, bound: AnnotationBound) {
        self.bounds.insert(Self::key(page_num, &id.into()), bound);
    }

    pub fn len(&self) -> usize {
        self.bounds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bounds.is_empty()
    }
}

impl BoundSource for BoundMap {
    fn annotation_bound(
        &self,
        page_num: u32,
        id: &AnnotationId,
        bound_type: &BoundType,
    ) -> Result<AnnotationBound> {
        let element_id = Self::key(page_num, id);
        let bound = self
            .bounds
            .get(&element_id)
            .copied()
            .ok_or_else(|| LinkError::ElementNotRendered {
                page_num,
                id: id.clone(),
                element_id: element_id.clone(),
            })?;

        // A text annotation measured as a single box is its own first and last fragment
        match (bound, bound_type.is_text()) {
            (AnnotationBound::Single(rect), true) => Ok(AnnotationBound::Split(rect, rect)),
            (AnnotationBound::Split(first, _), false) => {
                log::debug!("{} measured as fragments but is not text, using first fragment", element_id);
                Ok(AnnotationBound::Single(first))
            }
            (bound, _) => Ok(bound),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Rect;

    #[test]
    fn test_lookup_by_page_and_id() {
        let mut map = BoundMap::new();
        let rect = Rect::new(1.0, 2.0, 3.0, 4.0);
        map.insert(1, 10, AnnotationBound::Single(rect));

        let bound = map
            .annotation_bound(1, &AnnotationId::from("10"), &BoundType::from("box"))
            .unwrap();
        assert_eq!(bound, AnnotationBound::Single(rect));

        assert!(map
            .annotation_bound(2, &AnnotationId::from(10), &BoundType::from("box"))
            .is_err());
    }

    #[test]
    fn test_shape_follows_bound_type() {
        let mut map = BoundMap::new();
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(20.0, 0.0, 10.0, 10.0);
        map.insert(1, 1, AnnotationBound::Single(a));
        map.insert(1, 2, AnnotationBound::Split(a, b));

        assert_eq!(
            map.annotation_bound(1, &AnnotationId::from(1), &BoundType::Text).unwrap(),
            AnnotationBound::Split(a, a)
        );
        assert_eq!(
            map.annotation_bound(1, &AnnotationId::from(2), &BoundType::from("box")).unwrap(),
            AnnotationBound::Single(a)
        );
    }

    #[test]
    fn test_deserialize_from_keyed_object() {
        let map: BoundMap = serde_json::from_str(
            r#"{"1:5": {"top": 0, "left": 0, "width": 1, "height": 1},
                "1:6": [{"top": 0, "left": 0, "width": 1, "height": 1}, {"top": 2, "left": 0, "width": 1, "height": 1}]}"#,
        )
        .unwrap();
        assert_eq!(map.len(), 2);
    }
}
