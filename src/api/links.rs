//! Link connector exports
//!
//! JavaScript-facing entry points for computing connector lines between
//! linked annotations.

use std::collections::HashMap;
use wasm_bindgen::prelude::*;

use crate::api::helpers::{deserialize, serialize};
use crate::api::types::{pages_by_number, LinkPointsRequest};
use crate::layout::{DomLayout, LinkLayoutConfig, NodeBounds};
use crate::links::{annotation_page, get_points_for_links};
use crate::models::{Annotation, AnnotationId, BoundType, Category, Link};
use crate::{wasm_log, wasm_warn};

fn id_to_js(id: &AnnotationId) -> JsValue {
    match id {
        AnnotationId::Int(n) => JsValue::from_f64(*n as f64),
        AnnotationId::Str(s) => JsValue::from_str(s),
    }
}

/// Compute connector points for all links of a rendered annotation
///
/// # Parameters
/// - `id`: source annotation id (number or string)
/// - `ann_type`: source bound type (`"text"`, `"box"`, ...)
/// - `page_num`: page the source annotation is rendered on
/// - `links_js`: array of `{to, page_num, category_id, type}`
/// - `annotations_js`: array of `{id, boundType}` used to resolve link targets
/// - `categories_js`: array of categories, or `undefined`
/// - `options_js`: optional `{documentClass, elementIdPrefix}`
/// - `element_id`: optional `(pageNum, id) => string` used to find annotation elements
///
/// # Returns
/// Array of `{start, finish, link, category, type}`
#[wasm_bindgen(js_name = getPointsForLinks)]
#[allow(clippy::too_many_arguments)]
pub fn get_points_for_links_js(
    id: JsValue,
    ann_type: String,
    page_num: u32,
    links_js: JsValue,
    annotations_js: JsValue,
    categories_js: JsValue,
    options_js: JsValue,
    element_id: Option<js_sys::Function>,
) -> Result<JsValue, JsValue> {
    let id: AnnotationId = deserialize(id, "Invalid annotation id")?;
    let links: Vec<Link> = deserialize(links_js, "Invalid links")?;
    let annotations: Vec<Annotation> = deserialize(annotations_js, "Invalid annotations")?;
    let categories: Option<Vec<Category>> = deserialize(categories_js, "Invalid categories")?;
    let config: LinkLayoutConfig = deserialize::<Option<LinkLayoutConfig>>(options_js, "Invalid options")?
        .unwrap_or_default();
    let ann_type = BoundType::from(ann_type);

    let layout = DomLayout::from_window()
        .ok_or_else(|| JsValue::from_str("getPointsForLinks requires a browser document"))?;

    let config = &config;
    let bounds = match element_id {
        Some(func) => NodeBounds::with_element_ids(&layout, &config.document_class, move |page, ann_id| {
            match func.call2(&JsValue::NULL, &JsValue::from(page), &id_to_js(ann_id)) {
                Ok(value) => value.as_string().unwrap_or_else(|| {
                    wasm_warn!("elementId callback returned a non-string for annotation {}", ann_id);
                    config.element_id(page, ann_id)
                }),
                Err(e) => {
                    wasm_warn!("elementId callback failed for annotation {}: {:?}", ann_id, e);
                    config.element_id(page, ann_id)
                }
            }
        }),
        None => NodeBounds::new(&layout, config),
    };

    let points = get_points_for_links(
        &bounds,
        &id,
        &ann_type,
        page_num,
        &links,
        &annotations,
        categories.as_deref().unwrap_or_default(),
    );
    wasm_log!("getPointsForLinks: annotation {} -> {} of {} links drawn", id, points.len(), links.len());

    serialize(&points, "Failed to serialize link points")
}

/// Compute connector points from bounds measured by the caller
///
/// `request_js` is `{id, annType, pageNum, links, annotations, categories?, bounds}`
/// where `bounds` maps `"<pageNum>:<id>"` to a rect or a `[first, last]` pair.
#[wasm_bindgen(js_name = computeLinkPoints)]
pub fn compute_link_points(request_js: JsValue) -> Result<JsValue, JsValue> {
    let request: LinkPointsRequest = deserialize(request_js, "Invalid link points request")?;
    let points = request.compute();
    serialize(&points, "Failed to serialize link points")
}

/// Page number holding annotation `id` in a `{[pageNum]: Annotation[]}` record
#[wasm_bindgen(js_name = getAnnotationPage)]
pub fn get_annotation_page(pages_js: JsValue, id: JsValue) -> Result<Option<u32>, JsValue> {
    let pages: HashMap<String, Vec<Annotation>> = deserialize(pages_js, "Invalid annotation pages")?;
    let id: AnnotationId = deserialize(id, "Invalid annotation id")?;

    Ok(annotation_page(&pages_by_number(pages), &id))
}
