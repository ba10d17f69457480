/*
 * IONEX File Production attributes.
 * Short IONEX file names: "CCCRDDDS.YYI", optionally compressed.
 *  - CCC: analysis center (agency)
 *  - R: region, 'G' means Global (world wide) TEC maps
 *  - DDD: day of year
 *  - S: file sequence
 *  - YY: two digit year
 */
use super::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use hifitime::Unit;

use crate::prelude::Epoch;

/// FileSequence describes which
/// section (time frame) of the day course this file represents.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FileSequence {
    /// This file is integrated in a file batch (# id)
    Batch(u8),
    /// This file represents a specific hour of the day course:
    /// 'a' is midnight to 1am, 'x' is 11pm to midnight.
    DayPortion(u8),
    /// This file represents an entire day course
    #[default]
    DayCourse,
}

impl std::str::FromStr for FileSequence {
    type Err = Error;
    fn from_str(content: &str) -> Result<Self, Self::Err> {
        let mut chars = content.chars();
        match (chars.next(), chars.next()) {
            (Some('0'), None) => Ok(Self::DayCourse),
            (Some(c), None) if c.is_ascii_alphabetic() => {
                let hour = c.to_ascii_lowercase() as u32 - 'a' as u32;
                if hour < 24 {
                    Ok(Self::DayPortion(hour as u8))
                } else {
                    Err(Error::InvalidFileSequence)
                }
            },
            _ => content
                .parse::<u8>()
                .map(Self::Batch)
                .map_err(|_| Error::InvalidFileSequence),
        }
    }
}

impl std::fmt::Display for FileSequence {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::DayCourse => write!(f, "0"),
            Self::DayPortion(hour) => write!(f, "{}", (b'a' + hour) as char),
            Self::Batch(id) => write!(f, "{}", id),
        }
    }
}

/// Archive format the IONEX is distributed in
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Compression {
    /// Unix compress (LZW), ".Z"
    UnixCompress,
    /// Gzip, ".gz"
    Gzip,
}

impl Compression {
    fn suffix(&self) -> &'static str {
        match self {
            Self::UnixCompress => ".Z",
            Self::Gzip => ".gz",
        }
    }
}

/// [IonexFileName] identifies one IONEX product
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct IonexFileName {
    /// Analysis center, 3 letters, upper case
    pub agency: String,
    /// Region, 'G' for global maps
    pub region: char,
    /// Day of year (1-366)
    pub doy: u16,
    /// Production year
    pub year: u32,
    /// [FileSequence]
    pub sequence: FileSequence,
    /// [Compression], if any
    pub compression: Option<Compression>,
}

impl IonexFileName {
    /// Builds [IonexFileName] of the global day course produced by given agency.
    /// ```
    /// use tecmap::prelude::*;
    /// use tecmap::production::Compression;
    ///
    /// let name = IonexFileName::from_date("COD", 2022, 2)
    ///     .with_compression(Compression::UnixCompress);
    /// assert_eq!(name.to_string(), "codg0020.22i.Z");
    /// ```
    pub fn from_date(agency: &str, year: u32, doy: u16) -> Self {
        Self {
            agency: agency.to_uppercase(),
            region: 'G',
            doy,
            year,
            sequence: FileSequence::DayCourse,
            compression: None,
        }
    }

    /// Copies and sets [Compression]
    pub fn with_compression(&self, compression: Compression) -> Self {
        let mut s = self.clone();
        s.compression = Some(compression);
        s
    }

    /// Copies and sets [FileSequence]
    pub fn with_sequence(&self, sequence: FileSequence) -> Self {
        let mut s = self.clone();
        s.sequence = sequence;
        s
    }

    /// Returns true if this file describes world wide TEC maps
    pub fn is_global(&self) -> bool {
        self.region == 'G'
    }

    /// Returns first [Epoch] covered by this file (UTC midnight of this day)
    pub fn epoch(&self) -> Epoch {
        Epoch::from_gregorian_utc_at_midnight(self.year as i32, 1, 1)
            + (self.doy as f64 - 1.0) * Unit::Day
    }
}

impl std::str::FromStr for IonexFileName {
    type Err = Error;
    fn from_str(fname: &str) -> Result<Self, Self::Err> {
        let (name, suffix) = match fname.get(12..) {
            Some(suffix) => (&fname[..12], suffix),
            None => (fname, ""),
        };

        let name = name.to_uppercase();
        if name.len() != 12 || !name.is_ascii() || &name[8..9] != "." || &name[11..] != "I" {
            return Err(Error::NonStandardFileName);
        }

        let agency = &name[..3];
        if !agency.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(Error::NonStandardFileName);
        }

        let region = name[3..4]
            .chars()
            .next()
            .ok_or(Error::NonStandardFileName)?;

        let doy = name[4..7]
            .parse::<u16>()
            .map_err(|_| Error::NonStandardFileName)?;

        if doy == 0 || doy > 366 {
            return Err(Error::NonStandardFileName);
        }

        let sequence = name[7..8].parse::<FileSequence>()?;

        let yy = name[9..11]
            .parse::<u32>()
            .map_err(|_| Error::NonStandardFileName)?;

        // IONEX did not exist prior 1998
        let year = if yy < 80 { 2_000 + yy } else { 1_900 + yy };

        let compression = match suffix {
            "" => None,
            ".Z" => Some(Compression::UnixCompress),
            ".gz" | ".GZ" => Some(Compression::Gzip),
            other => return Err(Error::UnknownCompression(other.to_string())),
        };

        Ok(Self {
            agency: agency.to_string(),
            region,
            doy,
            year,
            sequence,
            compression,
        })
    }
}

impl std::fmt::Display for IonexFileName {
    /// Formats this name the way IGS archives publish it (lower case)
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}{}{:03}{}.{:02}i",
            self.agency.to_lowercase(),
            self.region.to_ascii_lowercase(),
            self.doy,
            self.sequence,
            self.year % 100,
        )?;
        if let Some(compression) = &self.compression {
            write!(f, "{}", compression.suffix())?;
        }
        Ok(())
    }
}
