// Connector point computation over measured annotation bounds

use annotator_wasm::layout::BoundMap;
use annotator_wasm::links::get_points_for_links;
use annotator_wasm::models::{
    Annotation, AnnotationBound, AnnotationId, BoundType, Category, Link, Point, PointSet, Rect,
};

fn link(to: impl Into<AnnotationId>, page_num: u32, category_id: &str) -> Link {
    Link {
        to: to.into(),
        page_num,
        category_id: AnnotationId::from(category_id),
        link_type: "directional".to_string(),
    }
}

fn annotation(id: impl Into<AnnotationId>, bound_type: &str) -> Annotation {
    Annotation {
        id: id.into(),
        bound_type: BoundType::from(bound_type),
    }
}

fn category(id: &str, name: &str) -> Category {
    Category {
        id: AnnotationId::from(id),
        name: Some(name.to_string()),
        extra: serde_json::Map::new(),
    }
}

fn single(top: f64, left: f64, width: f64, height: f64) -> AnnotationBound {
    AnnotationBound::Single(Rect::new(top, left, width, height))
}

fn split(first: Rect, last: Rect) -> AnnotationBound {
    AnnotationBound::Split(first, last)
}

/// Source box 1 on page 1 with targets around it
fn page_bounds() -> BoundMap {
    let mut bounds = BoundMap::new();
    bounds.insert(1, 1, single(100.0, 0.0, 50.0, 20.0));
    // Below
    bounds.insert(1, 2, single(200.0, 0.0, 50.0, 20.0));
    // Above, text spanning two lines
    bounds.insert(1, 3, split(Rect::new(20.0, 200.0, 100.0, 10.0), Rect::new(32.0, 0.0, 40.0, 10.0)));
    // Same row, to the right
    bounds.insert(1, 4, single(105.0, 300.0, 20.0, 10.0));
    // Same row, to the left
    bounds.insert(1, 5, single(95.0, -100.0, 20.0, 10.0));
    // On the next page
    bounds.insert(2, 6, single(1300.0, 10.0, 10.0, 10.0));
    bounds
}

fn annotations() -> Vec<Annotation> {
    vec![
        annotation(1, "box"),
        annotation(2, "box"),
        annotation(3, "text"),
        annotation(4, "free-box"),
        annotation(5, "box"),
        annotation(6, "box"),
        annotation(7, "box"),
    ]
}

fn compute(links: &[Link], categories: &[Category]) -> Vec<PointSet> {
    get_points_for_links(
        &page_bounds(),
        &AnnotationId::from(1),
        &BoundType::from("box"),
        1,
        links,
        &annotations(),
        categories,
    )
}

#[test]
fn test_target_below_source() {
    let points = compute(&[link(2, 1, "c")], &[]);

    assert_eq!(points.len(), 1);
    // Start on the lower box (target), finish on the higher one (source)
    assert_eq!(points[0].start, Point::new(25.0, 200.0));
    assert_eq!(points[0].finish, Point::new(25.0, 120.0));
}

#[test]
fn test_text_target_above_source() {
    let points = compute(&[link(3, 1, "c")], &[]);

    // Source is lower: top-mid of the box; target's last fragment: right-mid
    assert_eq!(points[0].start, Point::new(25.0, 100.0));
    assert_eq!(points[0].finish, Point::new(40.0, 37.0));
}

#[test]
fn test_same_row_targets_use_horizontal_anchors() {
    let points = compute(&[link(4, 1, "c"), link(5, 1, "c")], &[]);

    // Source left of target 4
    assert_eq!(points[0].start, Point::new(50.0, 110.0));
    assert_eq!(points[0].finish, Point::new(300.0, 110.0));
    assert!(points[0].start.x <= points[0].finish.x);

    // Target 5 left of source
    assert_eq!(points[1].start, Point::new(-80.0, 100.0));
    assert_eq!(points[1].finish, Point::new(0.0, 110.0));
}

#[test]
fn test_links_across_pages() {
    let points = compute(&[link(6, 2, "c")], &[]);
    assert_eq!(points.len(), 1);
    assert_eq!(points[0].start, Point::new(15.0, 1300.0));
}

#[test]
fn test_count_and_order_follow_resolvable_links() {
    let links = vec![
        link(4, 1, "c"),
        link(42, 1, "c"),
        link(2, 1, "c"),
        link("missing", 1, "c"),
        link(3, 1, "c"),
    ];
    let points = compute(&links, &[]);

    let targets: Vec<AnnotationId> = points.iter().map(|p| p.link.to.clone()).collect();
    assert_eq!(
        targets,
        vec![AnnotationId::from(4), AnnotationId::from(2), AnnotationId::from(3)]
    );
}

#[test]
fn test_unrendered_target_is_skipped() {
    // Annotation 7 is known but has no bounds on page 1
    let points = compute(&[link(7, 1, "c"), link(2, 1, "c")], &[]);
    assert_eq!(points.len(), 1);
    assert_eq!(points[0].link.to, AnnotationId::from(2));
}

#[test]
fn test_category_and_type_pass_through() {
    let categories = vec![category("person", "Person"), category("org", "Organisation")];
    let mut links = vec![link(2, 1, "org"), link(4, 1, "unknown")];
    links[1].link_type = "bidirectional".to_string();

    let points = compute(&links, &categories);

    assert_eq!(points[0].category, Some(categories[1].clone()));
    assert_eq!(points[0].link_type, "directional");
    assert_eq!(points[0].link, links[0]);

    assert_eq!(points[1].category, None);
    assert_eq!(points[1].link_type, "bidirectional");
}

#[test]
fn test_repeated_calls_are_identical() {
    let links = vec![link(2, 1, "c"), link(3, 1, "c"), link(4, 1, "c")];
    assert_eq!(compute(&links, &[]), compute(&links, &[]));
}

#[test]
fn test_text_source_and_text_target_side_by_side() {
    let mut bounds = BoundMap::new();
    bounds.insert(3, "a", split(Rect::new(10.0, 0.0, 30.0, 20.0), Rect::new(10.0, 0.0, 30.0, 20.0)));
    bounds.insert(3, "b", split(Rect::new(10.0, 100.0, 30.0, 20.0), Rect::new(10.0, 100.0, 30.0, 20.0)));

    let points = get_points_for_links(
        &bounds,
        &AnnotationId::from("a"),
        &BoundType::Text,
        3,
        &[link("b", 3, "c")],
        &[annotation("b", "text")],
        &[],
    );

    assert_eq!(points[0].start, Point::new(30.0, 20.0));
    assert_eq!(points[0].finish, Point::new(100.0, 20.0));
}

#[test]
fn test_vertical_anchors_lie_on_box_edges() {
    let bounds = page_bounds();
    let source = Rect::new(100.0, 0.0, 50.0, 20.0);

    for ps in compute(&[link(2, 1, "c"), link(6, 2, "c")], &[]) {
        // Source is higher in both cases: finish on its bottom edge
        assert_eq!(ps.finish, Point::new(source.center_x(), source.bottom()));
        assert!(ps.start.y > ps.finish.y);
    }
    assert_eq!(bounds.len(), 6);
}
