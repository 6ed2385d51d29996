//! Query result line parsing.

use overlay_common::error::{OverlayError, OverlayResult};

/// One parsed query result row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// MGRS reference of the matched cell.
    pub grid_ref: String,
    /// Number of query matches in the cell.
    pub density: i64,
}

/// Parse a whitespace-delimited `<grid-ref> <count>` line.
///
/// Lines may carry extra trailing fields; anything short of two fields, or a
/// non-integer count, is a parse error. `line_number` is 1-based and only
/// used for error reporting.
pub fn parse_record(line: &str, line_number: usize) -> OverlayResult<Record> {
    let malformed = || OverlayError::MalformedLine {
        line: line_number,
        content: line.to_string(),
    };

    let mut fields = line.split_whitespace();
    let grid_ref = fields.next().ok_or_else(malformed)?;
    let density = fields
        .next()
        .ok_or_else(malformed)?
        .parse::<i64>()
        .map_err(|_| malformed())?;

    Ok(Record {
        grid_ref: grid_ref.to_string(),
        density,
    })
}
