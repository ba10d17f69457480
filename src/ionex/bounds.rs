//! IONEX map grid definition

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    ionex::marker::line_before,
    linspace::Linspace,
    prelude::{LookupError, ParsingError},
};

/// Maximal number of points along one [Axis]
pub const MAX_AXIS_POINTS: usize = 100_000;

/// Grid [Axis] declared in IONEX header
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Axis {
    Latitude,
    Longitude,
}

impl Axis {
    /// Header label declaring this [Axis]
    pub fn marker(&self) -> &'static str {
        match self {
            Self::Latitude => "LAT1 / LAT2 / DLAT",
            Self::Longitude => "LON1 / LON2 / DLON",
        }
    }
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Latitude => write!(f, "LAT"),
            Self::Longitude => write!(f, "LON"),
        }
    }
}

/// [GridBounds] describes the spatial sampling of all TEC maps
/// contained in a document, in decimal degrees.
/// Rows go from northernmost (`max_lat`) down to `min_lat`,
/// columns from westernmost (`min_lon`) up to `max_lon`.
/// Steps are always positive, whatever the declaration sign.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GridBounds {
    pub min_lat: f64,
    pub max_lat: f64,
    pub lat_step: f64,
    pub min_lon: f64,
    pub max_lon: f64,
    pub lon_step: f64,
}

impl Default for GridBounds {
    /// Global 2.5° x 5° grid, used when header omits a declaration
    fn default() -> Self {
        Self {
            min_lat: -87.5,
            max_lat: 87.5,
            lat_step: 2.5,
            min_lon: -180.0,
            max_lon: 180.0,
            lon_step: 5.0,
        }
    }
}

impl GridBounds {
    /// Parses both axes from IONEX content. Undeclared axes keep
    /// their default value. Each axis is searched from the top of the document.
    pub fn parse(content: &str) -> Result<Self, ParsingError> {
        let mut bounds = Self::default();
        if let Some(latitude) = Self::parse_axis(content, Axis::Latitude)? {
            bounds = bounds.with_latitude_grid(latitude);
        }
        if let Some(longitude) = Self::parse_axis(content, Axis::Longitude)? {
            bounds = bounds.with_longitude_grid(longitude);
        }
        Ok(bounds)
    }

    /// Parses the [Linspace] declaration of given [Axis].
    /// Only the first declaration is considered.
    /// Returns None when this [Axis] is not declared.
    pub fn parse_axis(content: &str, axis: Axis) -> Result<Option<Linspace>, ParsingError> {
        let marker = axis.marker();
        let line = match line_before(content, marker) {
            Some(line) => line,
            None => return Ok(None),
        };

        let items = line.split_whitespace().collect::<Vec<_>>();
        let values = items
            .iter()
            .filter_map(|item| item.parse::<f64>().ok().filter(|v| v.is_finite()))
            .collect::<Vec<_>>();

        if items.len() != 3 || values.len() != 3 {
            return Err(ParsingError::BadBoundLine {
                marker,
                found: values.len(),
                line: line.trim().to_string(),
            });
        }

        if values[2] == 0.0 {
            return Err(ParsingError::NullGridSpacing { marker });
        }

        let intervals = ((values[1] - values[0]) / values[2]).abs().round();
        if !intervals.is_finite() || intervals >= MAX_AXIS_POINTS as f64 {
            return Err(ParsingError::OversizedGrid {
                marker,
                max: MAX_AXIS_POINTS,
            });
        }

        Ok(Some(Linspace::from((values[0], values[1], values[2]))))
    }

    /// Copies and sets latitude grid. Spacing must not be null.
    pub fn with_latitude_grid(&self, grid: Linspace) -> Self {
        let mut s = *self;
        s.min_lat = grid.min();
        s.max_lat = grid.max();
        s.lat_step = grid.spacing.abs();
        s
    }

    /// Copies and sets longitude grid. Spacing must not be null.
    pub fn with_longitude_grid(&self, grid: Linspace) -> Self {
        let mut s = *self;
        s.min_lon = grid.min();
        s.max_lon = grid.max();
        s.lon_step = grid.spacing.abs();
        s
    }

    /// Latitude span, in degrees
    pub fn lat_span(&self) -> f64 {
        self.max_lat - self.min_lat
    }

    /// Longitude span, in degrees
    pub fn lon_span(&self) -> f64 {
        self.max_lon - self.min_lon
    }

    /// Number of latitude rows
    pub fn row_count(&self) -> usize {
        ((self.lat_span() / self.lat_step).round() as usize).saturating_add(1)
    }

    /// Number of longitude columns
    pub fn col_count(&self) -> usize {
        ((self.lon_span() / self.lon_step).round() as usize).saturating_add(1)
    }

    /// Latitude sampling points, in increasing order
    pub fn lats(&self) -> impl Iterator<Item = f64> + Clone {
        let (min, step) = (self.min_lat, self.lat_step);
        (0..self.row_count()).map(move |i| min + i as f64 * step)
    }

    /// Longitude sampling points, in increasing order
    pub fn lons(&self) -> impl Iterator<Item = f64> + Clone {
        let (min, step) = (self.min_lon, self.lon_step);
        (0..self.col_count()).map(move |i| min + i as f64 * step)
    }

    /// Latitude of given row
    pub fn latitude(&self, row: usize) -> f64 {
        self.max_lat - row as f64 * self.lat_step
    }

    /// Longitude of given column
    pub fn longitude(&self, col: usize) -> f64 {
        self.min_lon + col as f64 * self.lon_step
    }

    /// Returns true if given coordinates lie within this grid
    pub fn contains(&self, lat: f64, lon: f64) -> bool {
        (self.min_lat..=self.max_lat).contains(&lat) && (self.min_lon..=self.max_lon).contains(&lon)
    }

    /// Returns (row, column) of the grid point nearest to given coordinates.
    pub fn nearest_index(&self, lat: f64, lon: f64) -> Result<(usize, usize), LookupError> {
        if !self.contains(lat, lon) {
            return Err(LookupError::OutOfBounds {
                latitude: lat,
                longitude: lon,
            });
        }
        let row = nearest(self.max_lat - lat, self.row_count(), self.lat_span());
        let col = nearest(lon - self.min_lon, self.col_count(), self.lon_span());
        Ok((row, col))
    }
}

/// Rounds an offset to the nearest of `count` points regularly spread over `span`
fn nearest(offset: f64, count: usize, span: f64) -> usize {
    if count < 2 || span == 0.0 {
        return 0;
    }
    let index = (offset * (count - 1) as f64 / span).round() as usize;
    index.min(count - 1)
}
