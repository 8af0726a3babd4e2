/// Separation export utilities
///
/// Supports exporting a detected separation to:
/// - CSV files (one `axis,index` record per separator line)
/// - JSON files

use super::ToolResult;
use crate::separator::Separation;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Export options
#[derive(Debug, Clone)]
pub struct ExportOptions {
    /// Pretty-print JSON output
    pub pretty_json: bool,
    /// Include header row in CSV
    pub csv_header: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            pretty_json: true,
            csv_header: true,
        }
    }
}

/// Export a separation to a CSV file
///
/// Rows come first, then columns, each as an `axis,index` record.
pub fn export_to_csv<P: AsRef<Path>>(
    separation: &Separation,
    path: P,
    options: &ExportOptions,
) -> ToolResult<usize> {
    let file = File::create(path)?;
    let mut writer = csv::Writer::from_writer(file);

    if options.csv_header {
        writer.write_record(["axis", "index"])?;
    }

    let mut count = 0;
    for &row in &separation.rows {
        let index = row.to_string();
        writer.write_record(["row", index.as_str()])?;
        count += 1;
    }
    for &col in &separation.cols {
        let index = col.to_string();
        writer.write_record(["col", index.as_str()])?;
        count += 1;
    }

    writer.flush()?;
    Ok(count)
}

/// Export a separation to a JSON file
pub fn export_to_json<P: AsRef<Path>>(
    separation: &Separation,
    path: P,
    options: &ExportOptions,
) -> ToolResult<()> {
    let json = if options.pretty_json {
        serde_json::to_string_pretty(separation)?
    } else {
        serde_json::to_string(separation)?
    };

    let mut file = File::create(path)?;
    file.write_all(json.as_bytes())?;
    Ok(())
}
