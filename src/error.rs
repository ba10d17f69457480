use thiserror::Error;

/// Errors that abort the parsing of an entire IONEX document.
/// No [crate::prelude::IonexDocument] is produced when one of these rises.
#[derive(Error, Debug)]
pub enum ParsingError {
    /// Grid declaration (`LAT1 / LAT2 / DLAT` or `LON1 / LON2 / DLON`)
    /// does not describe exactly three numbers
    #[error("malformed header: \"{marker}\" expects 3 numbers, found {found} in \"{line}\"")]
    BadBoundLine {
        marker: &'static str,
        found: usize,
        line: String,
    },
    /// Grid declaration describing more points than supported along one axis
    #[error("malformed header: \"{marker}\" describes more than {max} points")]
    OversizedGrid { marker: &'static str, max: usize },
    /// Grid declaration with null spacing
    #[error("malformed header: \"{marker}\" declares a null spacing")]
    NullGridSpacing { marker: &'static str },
    /// `EXPONENT` line is not a single integer
    #[error("malformed header: invalid EXPONENT \"{line}\"")]
    BadExponent { line: String },
    /// Local file access
    #[error("i/o error: {0}")]
    IoError(#[from] std::io::Error),
}

impl ParsingError {
    /// Returns true if this error describes a malformed header section
    pub fn is_malformed_header(&self) -> bool {
        !matches!(self, Self::IoError(_))
    }
}

/// Errors isolated to a single TEC map. The map is skipped,
/// the rest of the document remains usable.
/// `index` is the 0-based position of the map in the document.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EpochError {
    #[error("map #{index}: missing EPOCH OF CURRENT MAP")]
    MissingEpochMarker { index: usize },
    #[error("map #{index}: epoch expects 6 integers, found {found} in \"{line}\"")]
    MalformedEpochHeader {
        index: usize,
        found: usize,
        line: String,
    },
    #[error("map #{index}: invalid calendar date")]
    InvalidDate { index: usize },
    #[error("map #{index}: row #{row} expects {expected} samples, found {found}")]
    MalformedRow {
        index: usize,
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("map #{index}: row #{row}: invalid sample \"{token}\"")]
    BadSample {
        index: usize,
        row: usize,
        token: String,
    },
    #[error("map #{index}: expects {expected} rows, found {found}")]
    RowCount {
        index: usize,
        expected: usize,
        found: usize,
    },
}

impl EpochError {
    /// Index of the faulty map, in order of appearance
    pub fn index(&self) -> usize {
        match self {
            Self::MissingEpochMarker { index }
            | Self::MalformedEpochHeader { index, .. }
            | Self::InvalidDate { index }
            | Self::MalformedRow { index, .. }
            | Self::BadSample { index, .. }
            | Self::RowCount { index, .. } => *index,
        }
    }
}

/// Grid lookup errors
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum LookupError {
    #[error("({latitude}, {longitude}) lies outside of the map grid")]
    OutOfBounds { latitude: f64, longitude: f64 },
}
