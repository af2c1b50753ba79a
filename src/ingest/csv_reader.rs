use tracing::debug;

use crate::core::Point;
use crate::error::{QuadrantError, QuadrantResult};

/// Column names that never carry the point label.
const NON_LABEL_COLUMNS: [&str; 3] = ["x", "y", "description"];

/// Parses CSV text with a header row into labeled points, preserving row order.
///
/// The header determines column order: `x` and `y` are matched by name, the
/// label comes from the first remaining column (conventionally `name`), and an
/// optional `description` column is ignored. Input is trimmed first so
/// indented or triple-quoted blocks parse unchanged. Empty input yields an
/// empty point sequence.
pub fn parse_points(csv_text: &str) -> QuadrantResult<Vec<Point>> {
    let csv_text = csv_text.trim();
    if csv_text.is_empty() {
        return Ok(Vec::new());
    }

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(csv_text.as_bytes());

    let headers: Vec<String> = reader
        .headers()
        .map_err(|err| QuadrantError::InvalidData(format!("csv header parse error: {err}")))?
        .iter()
        .map(str::to_lowercase)
        .collect();

    let columns = ColumnMap::from_headers(&headers)?;

    let mut points = Vec::new();
    for (row, record) in reader.records().enumerate() {
        let record = record.map_err(|err| {
            QuadrantError::InvalidData(format!("csv parse error at data row {row}: {err}"))
        })?;
        points.push(columns.point_from_record(row, &record)?);
    }

    debug!(rows = points.len(), "parsed csv points");
    Ok(points)
}

/// Header-resolved column indices for one CSV document.
#[derive(Debug, Clone, Copy)]
struct ColumnMap {
    label: usize,
    x: usize,
    y: usize,
}

impl ColumnMap {
    fn from_headers(headers: &[String]) -> QuadrantResult<Self> {
        let index_of = |name: &str| headers.iter().position(|header| header == name);

        let x = index_of("x").ok_or_else(|| missing_column("x"))?;
        let y = index_of("y").ok_or_else(|| missing_column("y"))?;
        let label = headers
            .iter()
            .position(|header| !NON_LABEL_COLUMNS.contains(&header.as_str()))
            .ok_or_else(|| missing_column("label"))?;

        Ok(Self { label, x, y })
    }

    fn point_from_record(self, row: usize, record: &csv::StringRecord) -> QuadrantResult<Point> {
        let label = record.get(self.label).unwrap_or_default().to_owned();
        let x = parse_coordinate(row, "x", record.get(self.x).unwrap_or_default())?;
        let y = parse_coordinate(row, "y", record.get(self.y).unwrap_or_default())?;
        Ok(Point { label, x, y })
    }
}

fn parse_coordinate(row: usize, field: &'static str, raw: &str) -> QuadrantResult<f64> {
    let malformed = || QuadrantError::MalformedRow {
        row,
        field,
        value: raw.to_owned(),
    };

    // `f64::from_str` accepts `NaN`/`inf`; those cannot be laid out either.
    let value: f64 = raw.parse().map_err(|_| malformed())?;
    if !value.is_finite() {
        return Err(malformed());
    }
    Ok(value)
}

fn missing_column(name: &str) -> QuadrantError {
    QuadrantError::InvalidData(format!("csv header must contain a `{name}` column"))
}
