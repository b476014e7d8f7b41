//! Request and result types for the WASM API

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

use crate::layout::BoundMap;
use crate::links::get_points_for_links;
use crate::models::{Annotation, AnnotationId, BoundType, Category, Link, PointSet};

/// Connector computation over caller-measured bounds
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkPointsRequest {
    pub id: AnnotationId,
    pub ann_type: BoundType,
    pub page_num: u32,
    pub links: Vec<Link>,
    pub annotations: Vec<Annotation>,
    #[serde(default)]
    pub categories: Option<Vec<Category>>,
    /// Bounds keyed by `"<page_num>:<id>"`
    pub bounds: BoundMap,
}

impl LinkPointsRequest {
    pub fn compute(&self) -> Vec<PointSet> {
        get_points_for_links(
            &self.bounds,
            &self.id,
            &self.ann_type,
            self.page_num,
            &self.links,
            &self.annotations,
            self.categories.as_deref().unwrap_or_default(),
        )
    }
}

/// Annotations grouped by page as the UI stores them (object keys are strings)
pub fn pages_by_number(pages: HashMap<String, Vec<Annotation>>) -> BTreeMap<u32, Vec<Annotation>> {
    pages
        .into_iter()
        .filter_map(|(key, annotations)| match key.trim().parse::<u32>() {
            Ok(page_num) => Some((page_num, annotations)),
            Err(_) => {
                log::warn!("ignoring annotations under non-numeric page key '{}'", key);
                None
            }
        })
        .collect()
}
