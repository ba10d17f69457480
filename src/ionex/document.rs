use std::{path::Path, str::FromStr, sync::Arc};

#[cfg(feature = "log")]
use log::{debug, warn};

use crate::{
    ionex::{
        parsing::{parse_epoch, parse_tec_values, tec_map_segments},
        HeaderFields, ParsingOptions,
    },
    prelude::{Epoch, EpochError, GridBounds, ParsingError, TecGrid},
};

/// [IonexDocument] is a parsed IONEX file: the header fields
/// that drive data interpretation and all TEC maps, in order of appearance.
/// All maps share the same [GridBounds] instance.
/// ```
/// use tecmap::prelude::*;
///
/// let content = "    -1                                                      EXPONENT
///   10.0   0.0  -5.0                                          LAT1 / LAT2 / DLAT
///    0.0  10.0   5.0                                          LON1 / LON2 / DLON
///      1                                                      START OF TEC MAP
///   2022     1     2    12     0     0                        EPOCH OF CURRENT MAP
///     10.0   0.0  10.0   5.0 450.0                            LAT/LON1/LON2/DLON/H
///    11   12   13
///      5.0   0.0  10.0   5.0 450.0                            LAT/LON1/LON2/DLON/H
///    21   22   23
///      0.0   0.0  10.0   5.0 450.0                            LAT/LON1/LON2/DLON/H
///    31   32   33
///      1                                                      END OF TEC MAP
///                                                             END OF FILE";
///
/// let ionex = IonexDocument::parse(content).unwrap();
/// assert_eq!(ionex.exponent(), -1);
/// assert_eq!(ionex.epochs().len(), 1);
///
/// let map = ionex.tec_map_for_hour(12).unwrap();
/// assert_eq!(map.value_at(5.0, 5.0), Ok(2.2));
/// assert!(ionex.tec_map_for_hour(13).is_none());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct IonexDocument {
    /// Scaling that was applied to raw samples
    exponent: i32,
    /// Sampling grid, shared with every map
    bounds: Arc<GridBounds>,
    /// TEC maps, in order of appearance
    epochs: Vec<TecGrid>,
    /// Maps that could not be interpreted
    skipped: Vec<EpochError>,
}

impl Default for IonexDocument {
    /// Builds an empty [IonexDocument]: no data available
    fn default() -> Self {
        Self {
            exponent: 0,
            bounds: Arc::new(GridBounds::default()),
            epochs: Vec::new(),
            skipped: Vec::new(),
        }
    }
}

impl IonexDocument {
    /// Parses [IonexDocument] from readable content, with default [ParsingOptions].
    /// Header malformations abort the process, faulty maps are skipped
    /// and reported in [Self::skipped_epochs].
    pub fn parse(content: &str) -> Result<Self, ParsingError> {
        Self::parse_with_options(content, ParsingOptions::default())
    }

    /// Parses [IonexDocument] from readable content, with custom [ParsingOptions].
    pub fn parse_with_options(content: &str, opts: ParsingOptions) -> Result<Self, ParsingError> {
        let header = HeaderFields::parse(content)?;
        let bounds = Arc::new(header.grid);

        let mut epochs = Vec::new();
        let mut skipped = Vec::new();

        for (index, segment) in tec_map_segments(content).into_iter().enumerate() {
            let map = parse_epoch(segment, index).and_then(|epoch| {
                let values = parse_tec_values(segment, index, &header, &opts)?;
                Ok(TecGrid::new(epoch, Arc::clone(&bounds), values))
            });
            match map {
                Ok(map) => {
                    #[cfg(feature = "log")]
                    debug!("map #{}: {}", index, map.epoch);
                    epochs.push(map);
                },
                Err(e) => {
                    #[cfg(feature = "log")]
                    warn!("{}", e);
                    skipped.push(e);
                },
            }
        }

        Ok(Self {
            exponent: header.exponent,
            bounds,
            epochs,
            skipped,
        })
    }

    /// Builds [IonexDocument] from possibly missing content.
    /// Missing content means no data available and results
    /// in an empty [IonexDocument]: this is not an error.
    pub fn from_content(content: Option<&str>) -> Result<Self, ParsingError> {
        match content {
            Some(content) => Self::parse(content),
            None => Ok(Self::default()),
        }
    }

    /// Parses [IonexDocument] from local (readable, not compressed) file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ParsingError> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Scaling (power of ten) that was applied to raw samples
    pub fn exponent(&self) -> i32 {
        self.exponent
    }

    /// [GridBounds] shared by all TEC maps
    pub fn bounds(&self) -> &GridBounds {
        &self.bounds
    }

    /// TEC maps, in order of appearance
    pub fn epochs(&self) -> &[TecGrid] {
        &self.epochs
    }

    /// Returns true if this document does not contain any TEC map
    pub fn is_empty(&self) -> bool {
        self.epochs.is_empty()
    }

    /// Maps that were skipped, with the reason why
    pub fn skipped_epochs(&self) -> &[EpochError] {
        &self.skipped
    }

    /// Returns first TEC map whose epoch falls within given hour of day (UTC).
    /// None if no such map exists.
    pub fn tec_map_for_hour(&self, hour: u8) -> Option<&TecGrid> {
        self.epochs.iter().find(|map| map.epoch_hour() == hour)
    }

    /// TEC maps Iterator, in order of appearance
    pub fn tec_maps_iter(&self) -> impl Iterator<Item = (Epoch, &TecGrid)> + '_ {
        self.epochs.iter().map(|map| (map.epoch, map))
    }

    /// Hours of day covered by this document, in order of appearance
    pub fn hours(&self) -> impl Iterator<Item = u8> + '_ {
        self.epochs.iter().map(|map| map.epoch_hour())
    }

    /// Epoch of first TEC map
    pub fn first_epoch(&self) -> Option<Epoch> {
        self.epochs.first().map(|map| map.epoch)
    }

    /// Epoch of last TEC map
    pub fn last_epoch(&self) -> Option<Epoch> {
        self.epochs.last().map(|map| map.epoch)
    }
}

impl FromStr for IonexDocument {
    type Err = ParsingError;
    fn from_str(content: &str) -> Result<Self, Self::Err> {
        Self::parse(content)
    }
}
