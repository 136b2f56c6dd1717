//! Data model for one bacterium's MIC measurements.

pub mod types;

pub use types::{
    Antibiotic, AntibioticReading, GramStain, Palette, Record, StainGlyph, StainGlyphs,
};
