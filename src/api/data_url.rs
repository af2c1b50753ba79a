use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

use crate::render::OutputFormat;

/// Wraps encoded image bytes into a `data:<mime>;base64,<data>` string.
///
/// Standard alphabet, padded, no line wrapping — the output embeds directly
/// into HTML `src` attributes and JSON responses. Pure function; the result
/// grows linearly (about 4/3) with the input length.
#[must_use]
pub fn package_data_url(bytes: &[u8], format: OutputFormat) -> String {
    format!(
        "data:{};base64,{}",
        format.mime_type(),
        STANDARD.encode(bytes)
    )
}
