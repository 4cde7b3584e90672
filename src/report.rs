//src/report.rs

use std::fmt::Write as FmtWrite;
use std::fs;
use std::path::Path;

use crate::error::AnnotateError;
use crate::types::OutputRow;

/// Column names of the output report, in order.
pub const REPORT_HEADER: [&str; 11] = [
    "SAMPLE", "PWY_NAME", "ORF", "HIT", "RPKM", "Q_LENGTH", "BITSCORE", "BSR", "EXPECT",
    "IDENTITY", "EC",
];

/// Renders the full report text: header line first, then one line per row in
/// join order, fields joined by `separator`.
pub fn render_report(rows: &[OutputRow], separator: char) -> String {
    let sep = separator.to_string();
    let mut output = String::new();

    let _ = writeln!(output, "{}", REPORT_HEADER.join(&sep));
    for row in rows {
        let _ = writeln!(output, "{}", row.fields().join(&sep));
    }
    output
}

/// Writes the rendered report to `path`. Any write failure is fatal to the
/// batch; no guarantee is made about partial output in that case.
pub fn write_report(
    path: &Path,
    rows: &[OutputRow],
    separator: char,
) -> Result<(), AnnotateError> {
    fs::write(path, render_report(rows, separator)).map_err(|source| {
        AnnotateError::OutputWrite {
            path: path.to_path_buf(),
            source,
        }
    })
}
