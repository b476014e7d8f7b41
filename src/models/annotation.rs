//! Annotation, link and category records as the annotator UI sends them
//!
//! Field names follow the JSON the UI already produces (`page_num`,
//! `category_id`, `boundType`), so records deserialize straight from JS.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::geometry::{Point, Rect};
use super::serde_helpers::serialize_option_as_null;

/// Identifier of an annotation or category
///
/// The UI hands ids over as numbers or strings depending on where they came
/// from, and looks them up with loose equality, so `5` and `"5"` match.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnnotationId {
    Int(i64),
    Str(String),
}

impl PartialEq for AnnotationId {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (AnnotationId::Int(a), AnnotationId::Int(b)) => a == b,
            (AnnotationId::Str(a), AnnotationId::Str(b)) => a == b,
            (AnnotationId::Int(n), AnnotationId::Str(s))
            | (AnnotationId::Str(s), AnnotationId::Int(n)) => {
                s.trim().parse::<i64>().map_or(false, |parsed| parsed == *n)
            }
        }
    }
}

impl fmt::Display for AnnotationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnnotationId::Int(n) => write!(f, "{}", n),
            AnnotationId::Str(s) => f.write_str(s),
        }
    }
}

impl From<i64> for AnnotationId {
    fn from(n: i64) -> Self {
        AnnotationId::Int(n)
    }
}

impl From<i32> for AnnotationId {
    fn from(n: i32) -> Self {
        AnnotationId::Int(n as i64)
    }
}

impl From<&str> for AnnotationId {
    fn from(s: &str) -> Self {
        AnnotationId::Str(s.to_string())
    }
}

/// How an annotation is rendered
///
/// Only `"text"` changes the geometry (it is drawn as several inline
/// fragments); every other bound or tool type is a single box and is kept
/// verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum BoundType {
    Text,
    Other(String),
}

impl BoundType {
    pub fn is_text(&self) -> bool {
        matches!(self, BoundType::Text)
    }
}

impl From<String> for BoundType {
    fn from(s: String) -> Self {
        if s == "text" {
            BoundType::Text
        } else {
            BoundType::Other(s)
        }
    }
}

impl From<&str> for BoundType {
    fn from(s: &str) -> Self {
        BoundType::from(s.to_string())
    }
}

impl From<BoundType> for String {
    fn from(t: BoundType) -> Self {
        match t {
            BoundType::Text => "text".to_string(),
            BoundType::Other(s) => s,
        }
    }
}

/// Directed relationship from one annotation to another
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Link {
    /// Target annotation id
    pub to: AnnotationId,
    /// Page the target annotation lives on
    pub page_num: u32,
    pub category_id: AnnotationId,
    #[serde(rename = "type")]
    pub link_type: String,
}

/// The part of an annotation record the link geometry needs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Annotation {
    pub id: AnnotationId,
    pub bound_type: BoundType,
}

/// Display category of a link; extra fields are passed through untouched
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: AnnotationId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Rendered box(es) of one annotation
///
/// Text annotations are represented by their first and last inline fragment;
/// everything else by a single box. Serialized as a rect or a `[first, last]`
/// pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnnotationBound {
    Single(Rect),
    Split(Rect, Rect),
}

impl AnnotationBound {
    pub fn first_box(&self) -> Rect {
        match *self {
            AnnotationBound::Single(rect) => rect,
            AnnotationBound::Split(first, _) => first,
        }
    }

    pub fn last_box(&self) -> Rect {
        match *self {
            AnnotationBound::Single(rect) => rect,
            AnnotationBound::Split(_, last) => last,
        }
    }
}

/// One connector to draw: from `start` to `finish`, labelled by category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointSet {
    pub start: Point,
    pub finish: Point,
    pub link: Link,
    #[serde(serialize_with = "serialize_option_as_null")]
    pub category: Option<Category>,
    #[serde(rename = "type")]
    pub link_type: String,
}

/// First annotation in `annotations` with the given id
pub fn find_annotation<'a>(id: &AnnotationId, annotations: &'a [Annotation]) -> Option<&'a Annotation> {
    annotations.iter().find(|ann| ann.id == *id)
}

/// First category in `categories` with the given id
pub fn find_category<'a>(id: &AnnotationId, categories: &'a [Category]) -> Option<&'a Category> {
    categories.iter().find(|cat| cat.id == *id)
}
