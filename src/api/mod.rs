mod chart_style;
mod data_url;
mod pipeline;
mod request;
mod scene_builder;

pub use chart_style::ChartStyle;
pub use data_url::package_data_url;
pub use pipeline::{generate_chart_from_csv_with, generate_chart_with};
pub use request::{ChartRequest, DEFAULT_VIEWPORT};
pub use scene_builder::build_render_frame;

#[cfg(feature = "cairo-backend")]
pub use pipeline::{generate_chart, generate_chart_from_csv};
