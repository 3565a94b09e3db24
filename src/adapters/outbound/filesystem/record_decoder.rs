use crate::attribution::domain::ComponentRecord;
use crate::shared::error::AttributionError;
use calamine::{open_workbook_auto, Data, Reader};
use serde::Deserialize;
use std::path::Path;

/// Input formats the loader dispatches on, keyed by file extension.
///
/// A closed set of variants rather than open-ended sniffing keeps the
/// loader exhaustively testable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    /// Excel workbook (.xlsx / .xls)
    Spreadsheet,
    /// Tabular spreadsheet export (.csv)
    Tabular,
    /// Structured JSON document (.json)
    Json,
    /// Structured YAML document (.yaml / .yml)
    Yaml,
}

impl InputFormat {
    /// Detects the format from the file extension.
    ///
    /// # Errors
    /// `UnsupportedFormat` for unrecognized or missing extensions.
    pub fn from_path(path: &Path) -> Result<Self, AttributionError> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();
        match extension.as_str() {
            "xlsx" | "xls" => Ok(InputFormat::Spreadsheet),
            "csv" => Ok(InputFormat::Tabular),
            "json" => Ok(InputFormat::Json),
            "yaml" | "yml" => Ok(InputFormat::Yaml),
            _ => Err(AttributionError::UnsupportedFormat {
                path: path.to_path_buf(),
                extension,
            }),
        }
    }
}

/// Boolean-like input value: structured documents carry native
/// booleans or numbers, spreadsheet exports carry text.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum BoolLike {
    Bool(bool),
    Int(i64),
    Text(String),
}

/// One raw component row before cleanup, coercion, and validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawComponent {
    pub name: Option<String>,
    pub copyright: Option<String>,
    pub license: Option<String>,
    pub version: Option<String>,
    pub others_url: Option<String>,
    pub modified: Option<BoolLike>,
    pub modified_url: Option<String>,
}

/// Structured documents are either a bare array of components or a
/// mapping with a `components` array.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum StructuredInput {
    List(Vec<RawComponent>),
    Document { components: Vec<RawComponent> },
}

// Column slots shared by the tabular decoders.
const NAME: usize = 0;
const COPYRIGHT: usize = 1;
const LICENSE: usize = 2;
const VERSION: usize = 3;
const OTHERS_URL: usize = 4;
const MODIFIED: usize = 5;
const MODIFIED_URL: usize = 6;
const COLUMN_COUNT: usize = 7;

/// Maps column headers to field slots, loosely the way spreadsheet
/// exports name them: `name` / `component_name`, anything containing
/// `copyright`, `license`, `version`, `others_url` / `notice_url`, the
/// exact header `modified`, and anything containing `modified_url`.
/// The first matching column wins per slot.
fn map_columns<'a>(headers: impl Iterator<Item = &'a str>) -> [Option<usize>; COLUMN_COUNT] {
    let mut columns = [None; COLUMN_COUNT];
    for (index, header) in headers.enumerate() {
        let key = header.to_lowercase().trim().to_string();
        let slot = if key == "name" || key.contains("component_name") {
            NAME
        } else if key.contains("modified_url") {
            MODIFIED_URL
        } else if key == "modified" {
            MODIFIED
        } else if key.contains("copyright") {
            COPYRIGHT
        } else if key.contains("license") {
            LICENSE
        } else if key.contains("version") {
            VERSION
        } else if key.contains("others_url") || key.contains("notice_url") {
            OTHERS_URL
        } else {
            continue;
        };
        columns[slot].get_or_insert(index);
    }
    columns
}

/// Decodes a tabular (CSV) component list.
pub fn decode_tabular(content: &str, path: &Path) -> Result<Vec<ComponentRecord>, AttributionError> {
    let mut reader = csv::ReaderBuilder::new().from_reader(content.as_bytes());

    let headers = reader
        .headers()
        .map_err(|e| AttributionError::InputParseError {
            path: path.to_path_buf(),
            details: format!("CSV header error: {}", e),
        })?
        .clone();

    let columns = map_columns(headers.iter());

    let cell = |record: &csv::StringRecord, slot: usize| -> Option<String> {
        columns[slot]
            .and_then(|i| record.get(i))
            .map(String::from)
            .filter(|s| !s.trim().is_empty())
    };

    let mut records = Vec::new();
    for (i, result) in reader.records().enumerate() {
        let row = i + 1;
        let record = result.map_err(|e| AttributionError::InputParseError {
            path: path.to_path_buf(),
            details: format!("CSV row {} error: {}", row, e),
        })?;

        let raw = RawComponent {
            name: cell(&record, NAME),
            copyright: cell(&record, COPYRIGHT),
            license: cell(&record, LICENSE),
            version: cell(&record, VERSION),
            others_url: cell(&record, OTHERS_URL),
            modified: cell(&record, MODIFIED).map(BoolLike::Text),
            modified_url: cell(&record, MODIFIED_URL),
        };
        records.push(build_record(row, raw)?);
    }
    Ok(records)
}

/// Decodes an Excel workbook (.xlsx / .xls) component list.
///
/// The first worksheet is used; its first row carries the column
/// headers, matched with the same loose mapping as CSV input. Reads
/// directly from the path because workbooks are binary.
pub fn decode_spreadsheet(path: &Path) -> Result<Vec<ComponentRecord>, AttributionError> {
    let parse_error = |details: String| AttributionError::InputParseError {
        path: path.to_path_buf(),
        details,
    };

    let mut workbook =
        open_workbook_auto(path).map_err(|e| parse_error(format!("Workbook error: {}", e)))?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| parse_error("workbook contains no worksheets".to_string()))?
        .map_err(|e| parse_error(format!("Worksheet error: {}", e)))?;

    let mut rows = range.rows();
    let headers: Vec<String> = match rows.next() {
        Some(header_row) => header_row.iter().map(cell_to_text).collect(),
        None => return Ok(Vec::new()),
    };
    let columns = map_columns(headers.iter().map(String::as_str));

    let mut records = Vec::new();
    for (i, data_row) in rows.enumerate() {
        let row = i + 1;
        let text = |slot: usize| -> Option<String> {
            columns[slot]
                .and_then(|c| data_row.get(c))
                .map(cell_to_text)
                .filter(|s| !s.trim().is_empty())
        };
        let modified = columns[MODIFIED]
            .and_then(|c| data_row.get(c))
            .filter(|d| !matches!(d, Data::Empty))
            .map(cell_to_bool_like);

        let raw = RawComponent {
            name: text(NAME),
            copyright: text(COPYRIGHT),
            license: text(LICENSE),
            version: text(VERSION),
            others_url: text(OTHERS_URL),
            modified,
            modified_url: text(MODIFIED_URL),
        };
        records.push(build_record(row, raw)?);
    }
    Ok(records)
}

/// Flattens a worksheet cell to text, rendering whole-number floats
/// without the trailing `.0` Excel stores them with.
fn cell_to_text(data: &Data) -> String {
    match data {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Float(f) if f.fract() == 0.0 => format!("{}", *f as i64),
        Data::Float(f) => f.to_string(),
        Data::Int(i) => i.to_string(),
        Data::Bool(b) => b.to_string(),
        Data::DateTime(dt) => dt.as_f64().to_string(),
        Data::DateTimeIso(s) | Data::DurationIso(s) => s.clone(),
        Data::Error(e) => format!("{:?}", e),
    }
}

/// Preserves a worksheet cell's native type for boolean coercion.
fn cell_to_bool_like(data: &Data) -> BoolLike {
    match data {
        Data::Bool(b) => BoolLike::Bool(*b),
        Data::Int(i) => BoolLike::Int(*i),
        Data::Float(f) if f.fract() == 0.0 => BoolLike::Int(*f as i64),
        other => BoolLike::Text(cell_to_text(other)),
    }
}

/// Decodes a structured (JSON or YAML) component list.
pub fn decode_structured(
    format: InputFormat,
    content: &str,
    path: &Path,
) -> Result<Vec<ComponentRecord>, AttributionError> {
    let parse_error = |details: String| AttributionError::InputParseError {
        path: path.to_path_buf(),
        details,
    };

    let input: StructuredInput = match format {
        InputFormat::Json => serde_json::from_str(content)
            .map_err(|e| parse_error(format!("JSON error: {}", e)))?,
        InputFormat::Yaml => serde_yaml_ng::from_str(content)
            .map_err(|e| parse_error(format!("YAML error: {}", e)))?,
        InputFormat::Tabular | InputFormat::Spreadsheet => {
            unreachable!("tabular input is decoded by decode_tabular / decode_spreadsheet")
        }
    };

    let raw_components = match input {
        StructuredInput::List(list) => list,
        StructuredInput::Document { components } => components,
    };

    raw_components
        .into_iter()
        .enumerate()
        .map(|(i, raw)| build_record(i + 1, raw))
        .collect()
}

/// Builds a validated record from a raw row.
///
/// `row` is 1-based over data rows. Cleanup, boolean coercion, and
/// optional-field defaulting happen here; required-field validation is
/// delegated to the domain constructor.
pub fn build_record(row: usize, raw: RawComponent) -> Result<ComponentRecord, AttributionError> {
    let clean_opt = |value: Option<String>| value.map(|v| clean_cell(&v)).filter(|v| !v.is_empty());

    let modified = match raw.modified {
        Some(value) => coerce_bool(row, &value)?,
        None => false,
    };

    ComponentRecord::new(
        row,
        clean_opt(raw.name).unwrap_or_default(),
        clean_opt(raw.copyright).unwrap_or_default(),
        clean_opt(raw.license).unwrap_or_default(),
        clean_opt(raw.version).unwrap_or_default(),
        clean_opt(raw.others_url),
        modified,
        clean_opt(raw.modified_url),
    )
}

/// Strips spreadsheet carriage-return artifacts and surrounding
/// whitespace from a cell value.
pub fn clean_cell(value: &str) -> String {
    value
        .replace("_x000d_", "")
        .replace("_x000D_", "")
        .trim()
        .to_string()
}

/// Normalizes a boolean-like value to a strict bool.
///
/// Accepts native booleans, 0/1, and the textual forms
/// true/false, yes/no, t/f, y/n, 1/0 (case-insensitive, trimmed).
/// An empty string counts as absent and maps to false; anything else
/// is an `InvalidFieldType` error.
fn coerce_bool(row: usize, value: &BoolLike) -> Result<bool, AttributionError> {
    let invalid = |shown: String| AttributionError::InvalidFieldType {
        row,
        field: "modified",
        value: shown,
    };

    match value {
        BoolLike::Bool(b) => Ok(*b),
        BoolLike::Int(0) => Ok(false),
        BoolLike::Int(1) => Ok(true),
        BoolLike::Int(n) => Err(invalid(n.to_string())),
        BoolLike::Text(s) => {
            let normalized = clean_cell(s).to_lowercase();
            match normalized.as_str() {
                "" => Ok(false),
                "true" | "t" | "yes" | "y" | "1" => Ok(true),
                "false" | "f" | "no" | "n" | "0" => Ok(false),
                _ => Err(invalid(s.trim().to_string())),
            }
        }
    }
}
