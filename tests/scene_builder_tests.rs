use approx::assert_relative_eq;
use quadrant_gen::{ChartRequest, ChartStyle, Point, QuadrantError, Viewport, build_render_frame};

/// Plot geometry derived the same way the builder derives it, so assertions
/// stay valid if the default margins change.
fn plot_box(viewport: Viewport, style: &ChartStyle) -> (f64, f64, f64) {
    let avail_w = f64::from(viewport.width) - style.margin_left - style.margin_right;
    let avail_h = f64::from(viewport.height) - style.margin_top - style.margin_bottom;
    let side = avail_w.min(avail_h);
    let left = style.margin_left + (avail_w - side) / 2.0;
    let top = style.margin_top + (avail_h - side) / 2.0;
    (left, top, side)
}

#[test]
fn empty_points_still_draw_frame_and_midlines() {
    let frame = build_render_frame(&ChartRequest::new(Vec::new())).expect("build frame");
    frame.validate().expect("valid frame");

    assert_eq!(frame.lines.len(), 6, "4 border lines + 2 midlines");
    assert!(frame.markers.is_empty());
    assert!(frame.texts.is_empty(), "no captions were requested");
}

#[test]
fn unit_square_corners_map_to_plot_corners() {
    let request = ChartRequest::new(vec![
        Point::new("origin", 0.0, 0.0),
        Point::new("far", 1.0, 1.0),
    ]);
    let frame = build_render_frame(&request).expect("build frame");
    let (left, top, side) = plot_box(request.viewport, &ChartStyle::default());

    assert_relative_eq!(frame.markers[0].x, left);
    assert_relative_eq!(frame.markers[0].y, top + side, epsilon = 1e-9);
    assert_relative_eq!(frame.markers[1].x, left + side, epsilon = 1e-9);
    assert_relative_eq!(frame.markers[1].y, top);
}

#[test]
fn midlines_cross_at_plot_center() {
    let request = ChartRequest::new(Vec::new());
    let frame = build_render_frame(&request).expect("build frame");
    let (left, top, side) = plot_box(request.viewport, &ChartStyle::default());

    let vertical = frame.lines[4];
    let horizontal = frame.lines[5];
    assert_relative_eq!(vertical.x1, left + side / 2.0);
    assert_relative_eq!(vertical.x2, left + side / 2.0);
    assert_relative_eq!(horizontal.y1, top + side / 2.0);
    assert_relative_eq!(horizontal.y2, top + side / 2.0);
}

#[test]
fn captions_render_only_when_non_empty() {
    let request = ChartRequest::new(Vec::new())
        .with_title("T")
        .with_axis_captions("L", "R", "B", "Top");
    let frame = build_render_frame(&request).expect("build frame");
    assert_eq!(frame.texts.len(), 5, "title + 4 axis captions");

    let partial = ChartRequest::new(Vec::new()).with_axis_captions("L", "", "", "Top");
    let frame = build_render_frame(&partial).expect("build frame");
    assert_eq!(frame.texts.len(), 2, "empty captions render nothing");
}

#[test]
fn point_labels_render_verbatim_with_line_breaks() {
    let request = ChartRequest::new(vec![Point::new("Product A\n(High margin)", 0.2, 0.8)]);
    let frame = build_render_frame(&request).expect("build frame");

    assert_eq!(frame.texts.len(), 1);
    assert_eq!(frame.texts[0].text, "Product A\n(High margin)");
}

#[test]
fn point_labels_sit_right_of_their_marker() {
    let request = ChartRequest::new(vec![Point::new("A", 0.5, 0.5)]);
    let frame = build_render_frame(&request).expect("build frame");

    let marker = frame.markers[0];
    let label = &frame.texts[0];
    assert!(label.x > marker.x + marker.radius, "label must clear the marker");
    assert_relative_eq!(label.y, marker.y);
}

#[test]
fn unlabeled_points_draw_marker_only() {
    let request = ChartRequest::new(vec![Point::new("", 0.4, 0.4)]);
    let frame = build_render_frame(&request).expect("build frame");

    assert_eq!(frame.markers.len(), 1);
    assert!(frame.texts.is_empty());
}

#[test]
fn out_of_range_points_render_outside_the_plot_area() {
    let request = ChartRequest::new(vec![Point::new("loose", 1.2, -0.1)]);
    let frame = build_render_frame(&request).expect("out-of-range is not an error");
    let (left, top, side) = plot_box(request.viewport, &ChartStyle::default());

    assert!(frame.markers[0].x > left + side);
    assert!(frame.markers[0].y > top + side);
    frame.validate().expect("still a valid frame");
}

#[test]
fn scene_build_is_deterministic() {
    let request = ChartRequest::new(vec![
        Point::new("A", 0.2, 0.3),
        Point::new("B", 0.7, 0.8),
    ])
    .with_title("Sample")
    .with_axis_captions("L", "R", "B", "Top");

    let first = build_render_frame(&request).expect("first build");
    let second = build_render_frame(&request).expect("second build");
    assert_eq!(first, second);
}

#[test]
fn non_finite_coordinates_are_rejected() {
    let request = ChartRequest::new(vec![Point::new("bad", f64::NAN, 0.5)]);
    let err = build_render_frame(&request).expect_err("must fail");
    assert!(matches!(err, QuadrantError::InvalidData(_)));
}

#[test]
fn zero_sized_viewport_is_rejected() {
    let request = ChartRequest::new(Vec::new()).with_viewport(Viewport::new(0, 600));
    let err = build_render_frame(&request).expect_err("must fail");
    assert!(matches!(
        err,
        QuadrantError::InvalidViewport { width: 0, height: 600 }
    ));
}

#[test]
fn viewport_smaller_than_margins_is_rejected() {
    let request = ChartRequest::new(Vec::new()).with_viewport(Viewport::new(100, 100));
    let err = build_render_frame(&request).expect_err("must fail");
    assert!(matches!(err, QuadrantError::InvalidData(_)));
}
