//! WASM API module
//!
//! JavaScript-facing exports of the annotator module.

pub mod helpers;
pub mod links;
pub mod types;

pub use links::{compute_link_points, get_annotation_page, get_points_for_links_js};
pub use types::LinkPointsRequest;
