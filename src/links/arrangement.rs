//! Spatial relationship between a source and a target annotation
//!
//! Text annotations are compared through their fragments: the first fragment
//! when looking at a top or left edge, the last fragment for a bottom or right
//! edge. All comparisons are strict, so touching boxes count as overlapping.

use crate::models::{AnnotationBound, Point, Rect};

/// One end of a vertical connector
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Endpoint {
    pub rect: Rect,
    pub is_text: bool,
}

impl Endpoint {
    fn of(rect: Rect, bound: &AnnotationBound) -> Self {
        Self {
            rect,
            is_text: matches!(bound, AnnotationBound::Split(..)),
        }
    }

    /// Where a connector arriving from above attaches
    ///
    /// Text is entered from the left so the line does not cross the words.
    pub fn upper_anchor(&self) -> Point {
        if self.is_text {
            self.rect.left_mid()
        } else {
            self.rect.top_mid()
        }
    }

    /// Where a connector leaving downwards attaches
    pub fn lower_anchor(&self) -> Point {
        if self.is_text {
            self.rect.right_mid()
        } else {
            self.rect.bottom_mid()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Arrangement {
    /// One annotation lies entirely above the other
    Vertical { higher: Endpoint, lower: Endpoint },
    /// Overlapping vertically; `left` ends where the connector starts
    Horizontal { left: Rect, right: Rect },
}

impl Arrangement {
    /// Classify `target` relative to `source`, vertical separation first
    pub fn classify(source: &AnnotationBound, target: &AnnotationBound) -> Self {
        higher_bound(source, target).unwrap_or_else(|| left_bound(source, target))
    }

    /// `(start, finish)` of the connector
    ///
    /// Vertical connectors start on the lower box and finish on the higher
    /// one; horizontal connectors run from the left box to the right box.
    pub fn anchor_points(&self) -> (Point, Point) {
        match self {
            Arrangement::Vertical { higher, lower } => (lower.upper_anchor(), higher.lower_anchor()),
            Arrangement::Horizontal { left, right } => (left.right_mid(), right.left_mid()),
        }
    }
}

/// Vertical separation test
///
/// `None` when the two annotations overlap vertically.
pub fn higher_bound(source: &AnnotationBound, target: &AnnotationBound) -> Option<Arrangement> {
    let source_first = source.first_box();
    let source_last = source.last_box();
    let target_first = target.first_box();
    let target_last = target.last_box();

    if source_last.bottom() < target_first.top {
        Some(Arrangement::Vertical {
            higher: Endpoint::of(source_last, source),
            lower: Endpoint::of(target_first, target),
        })
    } else if source_first.top > target_last.bottom() {
        Some(Arrangement::Vertical {
            higher: Endpoint::of(target_last, target),
            lower: Endpoint::of(source_first, source),
        })
    } else {
        None
    }
}

/// Horizontal fallback
///
/// The source is on the left only when it ends strictly before the target
/// starts; any other layout puts the target on the left.
pub fn left_bound(source: &AnnotationBound, target: &AnnotationBound) -> Arrangement {
    let source_last = source.last_box();
    let target_first = target.first_box();

    if source_last.right() < target_first.left {
        Arrangement::Horizontal {
            left: source_last,
            right: target_first,
        }
    } else {
        Arrangement::Horizontal {
            left: target.last_box(),
            right: source.first_box(),
        }
    }
}
