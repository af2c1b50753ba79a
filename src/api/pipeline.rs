use tracing::debug;

use crate::api::{ChartRequest, build_render_frame, package_data_url};
use crate::error::QuadrantResult;
use crate::ingest::parse_points;
use crate::render::FrameEncoder;

/// Runs the full pipeline — scene build, encode, package — through the given
/// encoder backend.
///
/// Each call is independent and side-effect-free beyond its own buffers, so
/// concurrent callers may share nothing and still run in parallel.
pub fn generate_chart_with<E: FrameEncoder>(
    encoder: &mut E,
    request: &ChartRequest,
) -> QuadrantResult<String> {
    let frame = build_render_frame(request)?;
    let bytes = encoder.encode(&frame, request.format)?;
    debug!(
        format = %request.format,
        points = request.points.len(),
        encoded_len = bytes.len(),
        "generated chart"
    );
    Ok(package_data_url(&bytes, request.format))
}

/// CSV convenience: parses `csv_text` into points, then runs the pipeline.
///
/// The parsed rows replace `request.points`; every other request field passes
/// through unchanged.
pub fn generate_chart_from_csv_with<E: FrameEncoder>(
    encoder: &mut E,
    csv_text: &str,
    request: &ChartRequest,
) -> QuadrantResult<String> {
    let mut request = request.clone();
    request.points = parse_points(csv_text)?;
    generate_chart_with(encoder, &request)
}

/// Generates one chart with a fresh Cairo encoder and returns its data URL.
#[cfg(feature = "cairo-backend")]
pub fn generate_chart(request: &ChartRequest) -> QuadrantResult<String> {
    let mut encoder = crate::render::CairoEncoder::new();
    generate_chart_with(&mut encoder, request)
}

/// Generates one chart from CSV text with a fresh Cairo encoder.
#[cfg(feature = "cairo-backend")]
pub fn generate_chart_from_csv(csv_text: &str, request: &ChartRequest) -> QuadrantResult<String> {
    let mut encoder = crate::render::CairoEncoder::new();
    generate_chart_from_csv_with(&mut encoder, csv_text, request)
}
