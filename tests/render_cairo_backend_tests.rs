#![cfg(feature = "cairo-backend")]

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use quadrant_gen::render::{CairoEncoder, Color, FrameEncoder};
use quadrant_gen::{
    ChartRequest, OutputFormat, Point, QuadrantError, build_render_frame, generate_chart,
    generate_chart_from_csv, sample_points,
};

const PNG_MAGIC: &[u8] = b"\x89PNG\r\n\x1a\n";
const PDF_MAGIC: &[u8] = b"%PDF-";

#[test]
fn png_encoding_produces_png_bytes() {
    let frame = build_render_frame(&ChartRequest::new(sample_points())).expect("frame");
    let bytes = CairoEncoder::new()
        .encode(&frame, OutputFormat::Png)
        .expect("encode");

    assert!(bytes.starts_with(PNG_MAGIC));
}

#[test]
fn pdf_encoding_of_empty_points_still_yields_a_document() {
    let request = ChartRequest::new(Vec::new())
        .with_title("T")
        .with_axis_captions("L", "R", "B", "Top")
        .with_format(OutputFormat::Pdf);
    let frame = build_render_frame(&request).expect("frame");

    let mut encoder = CairoEncoder::new();
    let bytes = encoder.encode(&frame, OutputFormat::Pdf).expect("encode");

    assert!(bytes.starts_with(PDF_MAGIC));
    let stats = encoder.last_stats();
    assert_eq!(stats.markers_drawn, 0);
    assert_eq!(stats.texts_drawn, 5, "title + 4 captions");
    assert_eq!(stats.lines_drawn, 6);
}

#[test]
fn encode_stats_count_one_marker_per_point() {
    let frame = build_render_frame(&ChartRequest::new(vec![
        Point::new("A", 0.2, 0.3),
        Point::new("B", 0.7, 0.8),
    ]))
    .expect("frame");

    let mut encoder = CairoEncoder::new();
    encoder.encode(&frame, OutputFormat::Png).expect("encode");
    assert_eq!(encoder.last_stats().markers_drawn, 2);
}

#[test]
fn png_output_is_byte_identical_across_runs() {
    let request = ChartRequest::new(sample_points())
        .with_title("Determinism")
        .with_axis_captions("Low", "High", "Low", "High");

    let first = generate_chart(&request).expect("first");
    let second = generate_chart(&request).expect("second");
    assert_eq!(first, second);
}

#[test]
fn generated_data_url_decodes_back_to_png_bytes() {
    let url = generate_chart(&ChartRequest::new(sample_points())).expect("generate");
    let suffix = url
        .strip_prefix("data:image/png;base64,")
        .expect("png data url");

    let bytes = STANDARD.decode(suffix).expect("valid base64");
    assert!(bytes.starts_with(PNG_MAGIC));
}

#[test]
fn csv_front_door_renders_parsed_rows() {
    let url = generate_chart_from_csv(
        "name,x,y\nA,0.2,0.3\nB,0.7,0.8",
        &ChartRequest::new(Vec::new()).with_title("From CSV"),
    )
    .expect("generate");

    assert!(url.starts_with("data:image/png;base64,"));
}

#[test]
fn clear_color_is_validated() {
    let mut encoder = CairoEncoder::new();
    let err = encoder
        .set_clear_color(Color::rgb(2.0, 0.0, 0.0))
        .expect_err("out-of-range channel");
    assert!(matches!(err, QuadrantError::InvalidData(_)));
}
