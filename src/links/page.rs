//! Page lookup for annotations grouped by page

use std::collections::BTreeMap;

use crate::models::{find_annotation, Annotation, AnnotationId};

/// Lowest page number whose annotations include `id`
pub fn annotation_page(pages: &BTreeMap<u32, Vec<Annotation>>, id: &AnnotationId) -> Option<u32> {
    pages
        .iter()
        .find(|(_, annotations)| find_annotation(id, annotations).is_some())
        .map(|(&page_num, _)| page_num)
}
