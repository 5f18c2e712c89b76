// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! CSV ↔ JSON conversion.
//!
//! CSV → JSON: the first row is the header; every later cell is tried as a
//! number, then as a `true`/`false` literal, and otherwise kept as a string.
//!
//! JSON → CSV: the header is the union of object keys in first-seen order.
//! Missing keys become empty cells. Cells holding the delimiter, a quote or
//! a line break are quoted, with inner quotes doubled.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

use crate::errors::{TransformError, TransformResult};
use crate::traits::Transform;

/// Field delimiter. Chosen by the caller, never sniffed from the data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Delimiter {
    #[default]
    Comma,
    Semicolon,
    Tab,
    Pipe,
}

impl Delimiter {
    pub fn as_char(self) -> char {
        match self {
            Delimiter::Comma => ',',
            Delimiter::Semicolon => ';',
            Delimiter::Tab => '\t',
            Delimiter::Pipe => '|',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CsvJsonMode {
    CsvToJson,
    JsonToCsv,
}

fn default_pretty() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct CsvJsonConfig {
    pub mode: CsvJsonMode,
    #[serde(default)]
    pub delimiter: Delimiter,
    /// Pretty-print JSON output
    #[serde(default = "default_pretty")]
    pub pretty: bool,
}

pub struct CsvJsonConverter {
    config: CsvJsonConfig,
}

impl CsvJsonConverter {
    pub fn new(config: CsvJsonConfig) -> Self {
        Self { config }
    }

    pub fn csv_to_json(delimiter: Delimiter) -> Self {
        Self::new(CsvJsonConfig {
            mode: CsvJsonMode::CsvToJson,
            delimiter,
            pretty: true,
        })
    }

    pub fn json_to_csv(delimiter: Delimiter) -> Self {
        Self::new(CsvJsonConfig {
            mode: CsvJsonMode::JsonToCsv,
            delimiter,
            pretty: true,
        })
    }
}

impl Transform for CsvJsonConverter {
    fn apply(&self, input: &str) -> TransformResult {
        match self.config.mode {
            CsvJsonMode::CsvToJson => csv_to_json(input, self.config.delimiter, self.config.pretty),
            CsvJsonMode::JsonToCsv => json_to_csv(input, self.config.delimiter),
        }
    }

    fn name(&self) -> &'static str {
        "csv_json"
    }

    fn download_name(&self) -> String {
        match self.config.mode {
            CsvJsonMode::CsvToJson => "converted.json".to_string(),
            CsvJsonMode::JsonToCsv => "converted.csv".to_string(),
        }
    }
}

pub fn csv_to_json(input: &str, delimiter: Delimiter, pretty: bool) -> TransformResult {
    if input.trim().is_empty() {
        return Ok(String::new());
    }

    let rows = csv_to_rows(input, delimiter)?;
    let value = Value::Array(rows.into_iter().map(Value::Object).collect());
    let rendered = if pretty {
        serde_json::to_string_pretty(&value)
    } else {
        serde_json::to_string(&value)
    };
    rendered.map_err(|e| TransformError::malformed("json", e.to_string()))
}

/// Parses CSV into one JSON object per data row, keyed by the header.
pub fn csv_to_rows(input: &str, delimiter: Delimiter) -> Result<Vec<Map<String, Value>>, TransformError> {
    let mut records = parse_csv(input, delimiter)?.into_iter();
    let header = match records.next() {
        Some(header) => header,
        None => return Ok(Vec::new()),
    };

    Ok(records
        .map(|record| {
            header
                .iter()
                .enumerate()
                .map(|(i, key)| {
                    let cell = record.get(i).map(String::as_str).unwrap_or("");
                    (key.clone(), coerce_cell(cell))
                })
                .collect()
        })
        .collect())
}

fn coerce_cell(cell: &str) -> Value {
    let trimmed = cell.trim();
    if let Ok(int) = trimmed.parse::<i64>() {
        return Value::Number(int.into());
    }
    if trimmed.bytes().any(|b| b.is_ascii_digit()) {
        if let Some(number) = trimmed.parse::<f64>().ok().and_then(Number::from_f64) {
            return Value::Number(number);
        }
    }
    match trimmed {
        "true" => Value::Bool(true),
        "false" => Value::Bool(false),
        _ => Value::String(cell.to_string()),
    }
}

/// Splits CSV text into records, honouring double-quoted fields.
/// Blank lines are skipped.
pub fn parse_csv(input: &str, delimiter: Delimiter) -> Result<Vec<Vec<String>>, TransformError> {
    let delim = delimiter.as_char();
    let mut records = Vec::new();
    let mut record: Vec<String> = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut field_started = false;
    let mut chars = input.chars().peekable();

    while let Some(c) = chars.next() {
        if in_quotes {
            if c == '"' {
                if chars.peek() == Some(&'"') {
                    field.push('"');
                    chars.next();
                } else {
                    in_quotes = false;
                }
            } else {
                field.push(c);
            }
            continue;
        }

        match c {
            '"' if field.is_empty() => {
                in_quotes = true;
                field_started = true;
            }
            '\r' if chars.peek() == Some(&'\n') => {}
            '\n' | '\r' => {
                if field_started || !record.is_empty() {
                    record.push(std::mem::take(&mut field));
                    records.push(std::mem::take(&mut record));
                }
                field_started = false;
            }
            c if c == delim => {
                record.push(std::mem::take(&mut field));
                field_started = true;
            }
            c => {
                field.push(c);
                field_started = true;
            }
        }
    }

    if in_quotes {
        return Err(TransformError::malformed("csv", "unterminated quoted field"));
    }
    if field_started || !record.is_empty() {
        record.push(field);
        records.push(record);
    }

    Ok(records)
}

pub fn json_to_csv(input: &str, delimiter: Delimiter) -> TransformResult {
    if input.trim().is_empty() {
        return Ok(String::new());
    }

    let value: Value =
        serde_json::from_str(input).map_err(|e| TransformError::malformed("json", e.to_string()))?;

    let rows: Vec<Map<String, Value>> = match value {
        Value::Array(items) => items
            .into_iter()
            .enumerate()
            .map(|(i, item)| match item {
                Value::Object(map) => Ok(map),
                other => Err(TransformError::malformed(
                    "json",
                    format!("row {} is {}, expected an object", i, json_type_name(&other)),
                )),
            })
            .collect::<Result<_, _>>()?,
        Value::Object(map) => vec![map],
        other => {
            return Err(TransformError::malformed(
                "json",
                format!("expected an array of objects, found {}", json_type_name(&other)),
            ))
        }
    };

    Ok(rows_to_csv(&rows, delimiter))
}

pub fn rows_to_csv(rows: &[Map<String, Value>], delimiter: Delimiter) -> String {
    if rows.is_empty() {
        return String::new();
    }

    let mut seen = HashSet::new();
    let header: Vec<&str> = rows
        .iter()
        .flat_map(|row| row.keys())
        .filter(|key| seen.insert(key.as_str()))
        .map(String::as_str)
        .collect();

    let delim = delimiter.as_char();
    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(join_cells(header.iter().map(|h| h.to_string()), delim));
    for row in rows {
        let cells = header
            .iter()
            .map(|key| row.get(*key).map(render_cell).unwrap_or_default());
        lines.push(join_cells(cells, delim));
    }

    lines.join("\n")
}

fn render_cell(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        nested => nested.to_string(),
    }
}

fn join_cells<I>(cells: I, delim: char) -> String
where
    I: Iterator<Item = String>,
{
    cells
        .map(|cell| escape_cell(&cell, delim))
        .collect::<Vec<_>>()
        .join(delim.to_string().as_str())
}

fn escape_cell(cell: &str, delim: char) -> String {
    if cell.contains(delim) || cell.contains('"') || cell.contains('\n') || cell.contains('\r') {
        format!("\"{}\"", cell.replace('"', "\"\""))
    } else {
        cell.to_string()
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
