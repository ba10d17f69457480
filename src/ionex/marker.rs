//! IONEX marker based tokenization.
//!
//! IONEX labels are located as substring anchors rather than
//! column-exact fields: files in the wild vary in padding.

use regex::{Regex, Split};

pub(crate) const EXPONENT: &str = "EXPONENT";
pub(crate) const START_OF_TEC_MAP: &str = "START OF TEC MAP";
pub(crate) const EPOCH_OF_CURRENT_MAP: &str = "EPOCH OF CURRENT MAP";

lazy_static! {
    /// Line holding the end of a TEC map, from start of line to the label
    static ref END_OF_TEC_MAP: Regex = Regex::new(".*END OF TEC MAP").unwrap();
    /// Line holding a latitude row declaration, from start of line to the label
    static ref LATITUDE_ROW: Regex = Regex::new(".*LAT/LON1/LON2/DLON/H").unwrap();
}

/// Returns the content that comes before the first occurrence of `marker`,
/// restricted to its last line. This is the IONEX value field when the marker
/// is a header label. Returns None when `marker` does not exist.
pub(crate) fn line_before<'a>(content: &'a str, marker: &str) -> Option<&'a str> {
    let offset = content.find(marker)?;
    Some(content[..offset].lines().last().unwrap_or(""))
}

/// Returns everything that follows the first occurrence of `marker`.
pub(crate) fn after<'a>(content: &'a str, marker: &str) -> Option<&'a str> {
    let offset = content.find(marker)?;
    Some(&content[offset + marker.len()..])
}

/// Splits content on every line terminated by "END OF TEC MAP".
/// Last fragment is whatever follows the last map.
pub(crate) fn split_end_of_map(content: &str) -> Split<'static, '_> {
    END_OF_TEC_MAP.split(content)
}

/// Splits a map on every latitude row declaration.
/// First fragment is whatever precedes the first row.
pub(crate) fn split_latitude_rows(content: &str) -> Split<'static, '_> {
    LATITUDE_ROW.split(content)
}
