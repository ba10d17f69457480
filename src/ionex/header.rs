//! IONEX header fields

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "log")]
use log::debug;

use crate::{
    ionex::marker::{line_before, EXPONENT},
    prelude::{GridBounds, ParsingError},
};

/// IONEX [HeaderFields] that drive the interpretation of TEC maps
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HeaderFields {
    /// Scaling (power of ten) to apply to raw TEC samples
    pub exponent: i32,
    /// Grid all TEC maps are sampled on
    pub grid: GridBounds,
}

impl Default for HeaderFields {
    fn default() -> Self {
        Self {
            // no scaling: samples are already expressed in TECu
            exponent: 0,
            grid: GridBounds::default(),
        }
    }
}

impl HeaderFields {
    /// Parses [HeaderFields] from IONEX content.
    /// Undeclared fields keep their default value.
    pub fn parse(content: &str) -> Result<Self, ParsingError> {
        let exponent = Self::parse_exponent(content)?.unwrap_or(0);
        let grid = GridBounds::parse(content)?;

        #[cfg(feature = "log")]
        debug!(
            "exponent: {} - grid: {}x{}",
            exponent,
            grid.row_count(),
            grid.col_count()
        );

        Ok(Self { exponent, grid })
    }

    /// Parses first EXPONENT declaration, None when not declared
    pub fn parse_exponent(content: &str) -> Result<Option<i32>, ParsingError> {
        let line = match line_before(content, EXPONENT) {
            Some(line) => line,
            None => return Ok(None),
        };

        let mut items = line.split_whitespace();
        match (items.next(), items.next()) {
            (Some(item), None) => item
                .parse::<i32>()
                .map(Some)
                .map_err(|_| ParsingError::BadExponent {
                    line: line.trim().to_string(),
                }),
            _ => Err(ParsingError::BadExponent {
                line: line.trim().to_string(),
            }),
        }
    }

    /// Copies and sets exponent / scaling to use
    pub fn with_exponent(&self, e: i32) -> Self {
        let mut s = *self;
        s.exponent = e;
        s
    }

    /// Copies and sets grid definition
    pub fn with_grid(&self, grid: GridBounds) -> Self {
        let mut s = *self;
        s.grid = grid;
        s
    }

    /// Scales given raw sample into TECu
    pub fn scale(&self, raw: i64) -> f64 {
        let raw = raw as f64;
        if self.exponent < 0 {
            raw / 10.0_f64.powi(self.exponent.saturating_neg())
        } else {
            raw * 10.0_f64.powi(self.exponent)
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    #[test]
    fn exponent() {
        let content = "    -1                                                      EXPONENT";
        assert_eq!(HeaderFields::parse_exponent(content).unwrap(), Some(-1));

        let content = "     2                                                      EXPONENT";
        assert_eq!(HeaderFields::parse_exponent(content).unwrap(), Some(2));

        let content = "   300                                                      EXPONENT";
        assert_eq!(HeaderFields::parse_exponent(content).unwrap(), Some(300));

        assert_eq!(HeaderFields::parse_exponent("").unwrap(), None);

        for faulty in [
            "    -1.5                                                    EXPONENT",
            "    -1 2                                                    EXPONENT",
            "                                                            EXPONENT",
            "   1e3                                                      EXPONENT",
        ] {
            assert!(
                matches!(
                    HeaderFields::parse_exponent(faulty),
                    Err(ParsingError::BadExponent { .. })
                ),
                "\"{}\" should not be accepted",
                faulty
            );
        }
    }

    #[test]
    fn defaults() {
        let header = HeaderFields::parse("").unwrap();
        assert_eq!(header, HeaderFields::default());
        assert_eq!(header.exponent, 0);
        assert_eq!(header.grid, GridBounds::default());
    }

    #[test]
    fn scaling() {
        let header = HeaderFields::default().with_exponent(-1);
        assert_eq!(header.scale(123), 12.3);
        assert_eq!(header.scale(-5), -0.5);

        let header = header.with_exponent(0);
        assert_eq!(header.scale(123), 123.0);

        let header = header.with_exponent(2);
        assert_eq!(header.scale(3), 300.0);

        let header = header.with_exponent(-3);
        assert_eq!(header.scale(9999), 9.999);

        let header = header.with_exponent(300);
        assert!(header.scale(1).is_finite() && header.scale(1) > 1.0E299);
    }
}
