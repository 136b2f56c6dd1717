//! Core data types: Antibiotic, GramStain, Record, AntibioticReading,
//! Palette and StainGlyphs.

use std::fmt;

use crate::error::{ChartError, Result};
use crate::parsers::normalize::{FieldValue, NormalizedRow};

// ─── Canonical field names ───────────────────────────────────────────────────

pub const FIELD_BACTERIA: &str = "Bacteria";
pub const FIELD_GRAM_STAINING: &str = "GramStaining";

// ─── Antibiotic ──────────────────────────────────────────────────────────────

/// The three antibiotics measured for every bacterium.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Antibiotic {
    Penicilin,
    Streptomycin,
    Neomycin,
}

impl Antibiotic {
    /// All antibiotics in table order.
    pub const ALL: [Antibiotic; 3] = [
        Antibiotic::Penicilin,
        Antibiotic::Streptomycin,
        Antibiotic::Neomycin,
    ];

    /// Canonical (whitespace-stripped) column name. The `Penicilin`
    /// misspelling is part of the input contract.
    pub fn field_name(self) -> &'static str {
        match self {
            Antibiotic::Penicilin => "Penicilin",
            Antibiotic::Streptomycin => "Streptomycin",
            Antibiotic::Neomycin => "Neomycin",
        }
    }

    /// Name shown in the legend.
    pub fn display_name(self) -> &'static str {
        match self {
            Antibiotic::Penicilin => "Penicillin",
            Antibiotic::Streptomycin => "Streptomycin",
            Antibiotic::Neomycin => "Neomycin",
        }
    }

    fn index(self) -> usize {
        match self {
            Antibiotic::Penicilin => 0,
            Antibiotic::Streptomycin => 1,
            Antibiotic::Neomycin => 2,
        }
    }
}

impl fmt::Display for Antibiotic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.field_name())
    }
}

// ─── GramStain ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum GramStain {
    Positive,
    Negative,
    /// Anything else; the raw cell text stays on the Record.
    #[default]
    Unknown,
}

impl GramStain {
    pub fn parse(text: &str) -> Self {
        match text.trim().to_ascii_lowercase().as_str() {
            "positive" => GramStain::Positive,
            "negative" => GramStain::Negative,
            _ => GramStain::Unknown,
        }
    }
}

// ─── Record ──────────────────────────────────────────────────────────────────

/// One bacterium's normalized measurements.
///
/// Amounts are plain `f64`: a cell that failed numeric coercion is `NaN`
/// and is dealt with at layout time.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub bacteria: String,
    pub gram_staining: GramStain,
    /// Raw text of the Gram-staining cell.
    pub gram_staining_text: String,
    pub penicilin: f64,
    pub streptomycin: f64,
    pub neomycin: f64,
    /// Passthrough numeric columns in table order.
    pub extra: Vec<(String, f64)>,
}

impl Record {
    pub fn new(
        bacteria: impl Into<String>,
        gram_staining: &str,
        penicilin: f64,
        streptomycin: f64,
        neomycin: f64,
    ) -> Self {
        Self {
            bacteria: bacteria.into(),
            gram_staining: GramStain::parse(gram_staining),
            gram_staining_text: gram_staining.to_string(),
            penicilin,
            streptomycin,
            neomycin,
            extra: Vec::new(),
        }
    }

    pub fn amount(&self, antibiotic: Antibiotic) -> f64 {
        match antibiotic {
            Antibiotic::Penicilin => self.penicilin,
            Antibiotic::Streptomycin => self.streptomycin,
            Antibiotic::Neomycin => self.neomycin,
        }
    }

    /// Raw amounts in table order (Penicilin, Streptomycin, Neomycin).
    pub fn amounts(&self) -> [f64; 3] {
        [self.penicilin, self.streptomycin, self.neomycin]
    }

    /// Build the three readings, tagged with this record's stain and
    /// stable-sorted ascending by amount. `NaN` sorts last.
    pub fn readings(&self) -> Vec<AntibioticReading> {
        let mut readings: Vec<AntibioticReading> = Antibiotic::ALL
            .iter()
            .map(|&antibiotic| AntibioticReading {
                antibiotic,
                amount: self.amount(antibiotic),
                stain: self.gram_staining.clone(),
            })
            .collect();
        readings.sort_by(|a, b| match (a.amount.is_nan(), b.amount.is_nan()) {
            (false, false) => a.amount.total_cmp(&b.amount),
            (a_nan, b_nan) => a_nan.cmp(&b_nan),
        });
        readings
    }
}

impl TryFrom<&NormalizedRow> for Record {
    type Error = ChartError;

    fn try_from(row: &NormalizedRow) -> Result<Self> {
        let text = |key: &str| -> Result<String> {
            match row.get(key) {
                Some(FieldValue::Text(s)) => Ok(s.clone()),
                Some(FieldValue::Number(_)) => Err(ChartError::ExpectedText(key.to_string())),
                None => Err(ChartError::MissingColumn(key.to_string())),
            }
        };
        let number = |key: &str| -> Result<f64> {
            match row.get(key) {
                Some(FieldValue::Number(n)) => Ok(*n),
                // A numeric column configured as text: coerce it here instead.
                Some(FieldValue::Text(s)) => Ok(crate::parsers::normalize::coerce_number(s)),
                None => Err(ChartError::MissingColumn(key.to_string())),
            }
        };

        let bacteria = text(FIELD_BACTERIA)?;
        let stain_text = text(FIELD_GRAM_STAINING)?;
        let mut record = Record::new(
            bacteria,
            &stain_text,
            number(Antibiotic::Penicilin.field_name())?,
            number(Antibiotic::Streptomycin.field_name())?,
            number(Antibiotic::Neomycin.field_name())?,
        );

        let known = |key: &str| {
            key == FIELD_BACTERIA
                || key == FIELD_GRAM_STAINING
                || Antibiotic::ALL.iter().any(|a| a.field_name() == key)
        };
        record.extra = row
            .iter()
            .filter(|(key, _)| !known(*key))
            .filter_map(|(key, value)| match value {
                FieldValue::Number(n) => Some((key.to_string(), *n)),
                FieldValue::Text(_) => None,
            })
            .collect();
        Ok(record)
    }
}

// ─── AntibioticReading ───────────────────────────────────────────────────────

/// One (record, antibiotic) pair, built and discarded within a single render.
#[derive(Debug, Clone, PartialEq)]
pub struct AntibioticReading {
    pub antibiotic: Antibiotic,
    pub amount: f64,
    pub stain: GramStain,
}

impl AntibioticReading {
    /// True when the amount can be placed on a logarithmic axis.
    pub fn is_plottable(&self) -> bool {
        is_plottable(self.amount)
    }
}

pub fn is_plottable(amount: f64) -> bool {
    amount.is_finite() && amount > 0.0
}

// ─── Palette ─────────────────────────────────────────────────────────────────

/// Antibiotic → display color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: [String; 3],
}

impl Palette {
    pub fn new(penicilin: &str, streptomycin: &str, neomycin: &str) -> Self {
        Self {
            colors: [
                penicilin.to_string(),
                streptomycin.to_string(),
                neomycin.to_string(),
            ],
        }
    }

    pub fn color(&self, antibiotic: Antibiotic) -> &str {
        &self.colors[antibiotic.index()]
    }
}

impl Default for Palette {
    /// First three entries of the category10 scheme.
    fn default() -> Self {
        Self::new("#1f77b4", "#ff7f0e", "#2ca02c")
    }
}

// ─── StainGlyphs ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StainGlyph {
    pub symbol: String,
    pub color: String,
}

impl StainGlyph {
    fn new(symbol: &str, color: &str) -> Self {
        Self {
            symbol: symbol.to_string(),
            color: color.to_string(),
        }
    }
}

/// GramStain → glyph annotation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StainGlyphs {
    pub positive: StainGlyph,
    pub negative: StainGlyph,
    pub unknown: StainGlyph,
}

impl StainGlyphs {
    pub fn glyph(&self, stain: &GramStain) -> &StainGlyph {
        match stain {
            GramStain::Positive => &self.positive,
            GramStain::Negative => &self.negative,
            GramStain::Unknown => &self.unknown,
        }
    }
}

impl Default for StainGlyphs {
    fn default() -> Self {
        Self {
            positive: StainGlyph::new("(+)", "black"),
            negative: StainGlyph::new("(-)", "black"),
            unknown: StainGlyph::new("(?)", "black"),
        }
    }
}
