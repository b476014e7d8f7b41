//! Connector points for every outgoing link of an annotation

use crate::layout::BoundSource;
use crate::models::{
    find_annotation, find_category, Annotation, AnnotationId, BoundType, Category, Link, PointSet,
};

use super::arrangement::Arrangement;

/// Compute one [`PointSet`] per drawable link of annotation `id`
///
/// Links whose target is missing from `annotations` are dropped. If the
/// source is not rendered the result is empty; a target that is not rendered
/// is skipped with a warning. Output order follows `links`.
pub fn get_points_for_links<B: BoundSource>(
    bounds: &B,
    id: &AnnotationId,
    ann_type: &BoundType,
    page_num: u32,
    links: &[Link],
    annotations: &[Annotation],
    categories: &[Category],
) -> Vec<PointSet> {
    let source = match bounds.annotation_bound(page_num, id, ann_type) {
        Ok(bound) => bound,
        Err(e) => {
            log::debug!("no connectors for annotation {}: {}", id, e);
            return Vec::new();
        }
    };

    links
        .iter()
        .filter_map(|link| {
            let target_annotation = find_annotation(&link.to, annotations)?;
            let target = match bounds.annotation_bound(link.page_num, &link.to, &target_annotation.bound_type) {
                Ok(bound) => bound,
                Err(e) => {
                    log::warn!("skipping link {} -> {}: {}", id, link.to, e);
                    return None;
                }
            };

            let (start, finish) = Arrangement::classify(&source, &target).anchor_points();

            Some(PointSet {
                start,
                finish,
                link: link.clone(),
                category: find_category(&link.category_id, categories).cloned(),
                link_type: link.link_type.clone(),
            })
        })
        .collect()
}
