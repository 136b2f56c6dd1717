//! DataNormalizer: CSV text → raw rows → normalized rows.
//!
//! Header keys lose every whitespace run; values are coerced to numbers
//! except under the designated text headers, which are matched against the
//! ORIGINAL (un-stripped) key.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::Result;

/// Header labels whose values stay text, exactly as they appear in the
/// source table (trailing spaces included).
pub const DEFAULT_TEXT_HEADERS: [&str; 2] = ["Bacteria ", "Gram Staining "];

static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("static regex is valid"));

// ─── RawRow ──────────────────────────────────────────────────────────────────

/// One parsed table row: `(header, cell)` pairs in column order.
///
/// A ragged row holds `None` for trailing headers it has no cell for.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RawRow {
    pub cells: Vec<(String, Option<String>)>,
}

impl RawRow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: &str, value: &str) -> Self {
        self.cells.push((key.to_string(), Some(value.to_string())));
        self
    }
}

/// Parse CSV text with a header row. Neither headers nor cells are trimmed.
pub fn read_table(src: &str) -> Result<Vec<RawRow>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::None)
        .from_reader(src.as_bytes());

    let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        let cells = headers
            .iter()
            .enumerate()
            .map(|(i, h)| (h.clone(), record.get(i).map(str::to_string)))
            .collect();
        rows.push(RawRow { cells });
    }
    Ok(rows)
}

// ─── FieldValue / NormalizedRow ──────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    /// `NaN` when the cell was not numeric.
    Number(f64),
}

impl FieldValue {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            FieldValue::Number(n) => Some(*n),
            FieldValue::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            FieldValue::Number(_) => None,
        }
    }
}

/// A row keyed by canonical (whitespace-free) field names, column order kept.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NormalizedRow {
    fields: Vec<(String, FieldValue)>,
}

impl NormalizedRow {
    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.fields.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Insert or overwrite; a later column whose canonical name collides
    /// with an earlier one replaces its value in place.
    fn insert(&mut self, key: String, value: FieldValue) {
        match self.fields.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.fields.push((key, value)),
        }
    }
}

// ─── Normalization ───────────────────────────────────────────────────────────

/// Remove every whitespace run from a header key.
pub fn normalize_key(key: &str) -> String {
    WHITESPACE.replace_all(key, "").into_owned()
}

/// Coerce a cell to a number the way JavaScript's unary `+` does:
/// surrounding whitespace is ignored, an empty cell is `0`, `Infinity` is
/// accepted, and anything else that is not a decimal literal is `NaN`.
pub fn coerce_number(text: &str) -> f64 {
    let t = text.trim();
    if t.is_empty() {
        return 0.0;
    }
    match t {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }
    // Rust also accepts "inf"/"nan" spellings; JavaScript does not.
    let digits = t.trim_start_matches(['+', '-']);
    if !digits.starts_with(|c: char| c.is_ascii_digit() || c == '.') {
        return f64::NAN;
    }
    t.parse::<f64>().unwrap_or(f64::NAN)
}

/// Normalize one raw row.
pub fn normalize_row(raw: &RawRow, text_headers: &[String]) -> NormalizedRow {
    let mut row = NormalizedRow::default();
    for (key, cell) in &raw.cells {
        let is_text = text_headers.iter().any(|h| h == key);
        let value = match (is_text, cell) {
            (true, Some(s)) => FieldValue::Text(s.clone()),
            (true, None) => FieldValue::Text(String::new()),
            (false, Some(s)) => FieldValue::Number(coerce_number(s)),
            (false, None) => FieldValue::Number(f64::NAN),
        };
        row.insert(normalize_key(key), value);
    }
    row
}

/// Normalize every row, preserving row order.
pub fn normalize(rows: &[RawRow], text_headers: &[String]) -> Vec<NormalizedRow> {
    rows.iter().map(|r| normalize_row(r, text_headers)).collect()
}

pub fn default_text_headers() -> Vec<String> {
    DEFAULT_TEXT_HEADERS.iter().map(|s| s.to_string()).collect()
}
