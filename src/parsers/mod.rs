//! Table parsers: the TableParser trait and the CSV implementation.

pub mod normalize;

use log::{debug, info};

use crate::error::Result;
use crate::model::types::Record;

pub use normalize::{FieldValue, NormalizedRow, RawRow};

/// Trait for source-table parsers.
pub trait TableParser {
    /// Parse the input text into records, in table order.
    fn parse(&self, src: &str) -> Result<Vec<Record>>;
}

/// Reads a CSV table, normalizes it, and converts each row to a Record.
#[derive(Debug, Clone)]
pub struct CsvParser {
    /// Header labels (as written in the file) whose values stay text.
    pub text_headers: Vec<String>,
}

impl Default for CsvParser {
    fn default() -> Self {
        Self {
            text_headers: normalize::default_text_headers(),
        }
    }
}

impl CsvParser {
    pub fn new(text_headers: Vec<String>) -> Self {
        Self { text_headers }
    }

    /// Read and normalize without converting to records.
    pub fn normalized_rows(&self, src: &str) -> Result<Vec<NormalizedRow>> {
        let raw = normalize::read_table(src)?;
        debug!("read {} raw rows", raw.len());
        Ok(normalize::normalize(&raw, &self.text_headers))
    }
}

impl TableParser for CsvParser {
    fn parse(&self, src: &str) -> Result<Vec<Record>> {
        let records = self
            .normalized_rows(src)?
            .iter()
            .map(Record::try_from)
            .collect::<Result<Vec<_>>>()?;
        info!("loaded {} records", records.len());
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ChartError;
    use crate::model::types::GramStain;

    #[test]
    fn test_csv_parser_records() {
        let src = "Bacteria ,Penicilin,Streptomycin ,Neomycin,Gram Staining \n\
                   Brucella abortus,1,2,0.02,negative\n\
                   Streptococcus viridans,0.005,10,40,positive\n";
        let records = CsvParser::default().parse(src).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].bacteria, "Brucella abortus");
        assert_eq!(records[0].gram_staining, GramStain::Negative);
        assert_eq!(records[0].amounts(), [1.0, 2.0, 0.02]);
        assert_eq!(records[1].gram_staining, GramStain::Positive);
        assert!(records[1].extra.is_empty());
    }

    #[test]
    fn test_csv_parser_missing_column() {
        let src = "Bacteria ,Penicilin,Gram Staining \nB1,1,positive\n";
        let err = CsvParser::default().parse(src).unwrap_err();
        assert!(matches!(err, ChartError::MissingColumn(ref c) if c == "Streptomycin"));
    }

    #[test]
    fn test_csv_parser_text_header_without_space() {
        let src = "Bacteria,Penicilin,Streptomycin,Neomycin,Gram Staining \nB1,1,2,3,positive\n";
        let err = CsvParser::default().parse(src).unwrap_err();
        assert!(matches!(err, ChartError::ExpectedText(ref c) if c == "Bacteria"));
    }

    #[test]
    fn test_csv_parser_custom_text_headers() {
        let src = "Bacteria,Penicilin,Streptomycin,Neomycin,GramStaining\nB1,1,2,3,positive\n";
        let parser = CsvParser::new(vec!["Bacteria".into(), "GramStaining".into()]);
        let records = parser.parse(src).unwrap();
        assert_eq!(records[0].bacteria, "B1");
    }

    #[test]
    fn test_csv_parser_non_numeric_amount() {
        let src = "Bacteria ,Penicilin,Streptomycin ,Neomycin,Gram Staining \nB2,abc,2,3,negative\n";
        let records = CsvParser::default().parse(src).unwrap();
        assert!(records[0].penicilin.is_nan());
        assert_eq!(records[0].streptomycin, 2.0);
    }
}
