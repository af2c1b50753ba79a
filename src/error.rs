use thiserror::Error;

pub type QuadrantResult<T> = Result<T, QuadrantError>;

#[derive(Debug, Error)]
pub enum QuadrantError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("malformed csv row {row}: field `{field}` is not a valid coordinate: `{value}`")]
    MalformedRow {
        /// 0-based data-row index, header excluded.
        row: usize,
        field: &'static str,
        value: String,
    },

    #[error("unsupported output format: `{0}`")]
    UnsupportedFormat(String),

    #[error("encoding failed: {0}")]
    Encoding(String),
}
