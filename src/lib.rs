//! quadrant-gen: quadrant chart generation pipeline.
//!
//! Labeled 2-D points — supplied directly or parsed from CSV text — are laid
//! out on a unit-square quadrant scene, encoded as PNG or PDF bytes, and
//! packaged as a base64 data URL for embedding in HTML or JSON responses.

pub mod api;
pub mod core;
pub mod error;
pub mod ingest;
pub mod render;
pub mod telemetry;

pub use api::{ChartRequest, ChartStyle, build_render_frame, package_data_url};
pub use api::{generate_chart_from_csv_with, generate_chart_with};
pub use core::{Point, Viewport, sample_points};
pub use error::{QuadrantError, QuadrantResult};
pub use ingest::parse_points;
pub use render::OutputFormat;

#[cfg(feature = "cairo-backend")]
pub use api::{generate_chart, generate_chart_from_csv};
