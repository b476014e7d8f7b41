//! Link point calculation
//!
//! Classifies how a linked pair of annotations is laid out on the page and
//! derives where the connector between them starts and finishes.

pub mod arrangement;
pub mod page;
pub mod points;

pub use arrangement::{higher_bound, left_bound, Arrangement, Endpoint};
pub use page::annotation_page;
pub use points::get_points_for_links;
