//! TEC map materialized as a 2D grid

use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::prelude::{Epoch, GridBounds, LookupError};

/// [TecGrid] is one TEC map: TEC estimates (in TECu) of a given [Epoch],
/// sampled on the [GridBounds] of the document it was parsed from.
/// Values are stored row major: rows from north to south,
/// columns from west to east.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TecGrid {
    /// [Epoch] of this map
    pub epoch: Epoch,
    /// Sampling grid, shared with all maps of the same document
    bounds: Arc<GridBounds>,
    /// TEC values, in TECu
    values: Vec<f64>,
}

impl TecGrid {
    /// Builds a new [TecGrid]. `values` must be a row major
    /// (`bounds.row_count()` x `bounds.col_count()`) array.
    pub(crate) fn new(epoch: Epoch, bounds: Arc<GridBounds>, values: Vec<f64>) -> Self {
        debug_assert_eq!(values.len(), bounds.row_count() * bounds.col_count());
        Self {
            epoch,
            bounds,
            values,
        }
    }

    /// [GridBounds] this map was sampled on
    pub fn bounds(&self) -> &GridBounds {
        &self.bounds
    }

    /// Returns true if both maps share the same [GridBounds] instance
    pub fn shares_bounds(&self, rhs: &Self) -> bool {
        Arc::ptr_eq(&self.bounds, &rhs.bounds)
    }

    /// Returns (rows, columns) dimensions
    pub fn shape(&self) -> (usize, usize) {
        (self.bounds.row_count(), self.bounds.col_count())
    }

    /// Raw row major values, in TECu
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Returns TEC value at given (row, column) index
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        let (rows, cols) = self.shape();
        if row < rows && col < cols {
            self.values.get(row * cols + col).copied()
        } else {
            None
        }
    }

    /// Returns given latitude row, from west to east
    pub fn row(&self, row: usize) -> Option<&[f64]> {
        let cols = self.bounds.col_count();
        self.values.get(row * cols..(row + 1) * cols)
    }

    /// Iterates latitude rows, from north to south
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> + '_ {
        self.values.chunks(self.bounds.col_count())
    }

    /// Iterates (latitude, longitude, TECu) of every grid point
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64, f64)> + '_ {
        let cols = self.bounds.col_count();
        self.values.iter().enumerate().map(move |(i, v)| {
            (
                self.bounds.latitude(i / cols),
                self.bounds.longitude(i % cols),
                *v,
            )
        })
    }

    /// Returns TEC value (in TECu) of the grid point nearest
    /// to given coordinates, in decimal degrees. No interpolation is performed.
    /// Coordinates must lie within [GridBounds].
    pub fn value_at(&self, lat: f64, lon: f64) -> Result<f64, LookupError> {
        let (row, col) = self.bounds.nearest_index(lat, lon)?;
        self.get(row, col).ok_or(LookupError::OutOfBounds {
            latitude: lat,
            longitude: lon,
        })
    }

    /// Hour of day of this map (0-23, UTC)
    pub fn epoch_hour(&self) -> u8 {
        let (_, _, _, hour, _, _, _) = self.epoch.to_gregorian_utc();
        hour
    }

    /// Human readable epoch, "mm/dd/YYYY HH:MM"
    pub fn title(&self) -> String {
        let (y, m, d, hh, mm, _, _) = self.epoch.to_gregorian_utc();
        format!("{:02}/{:02}/{:04} {:02}:{:02}", m, d, y, hh, mm)
    }

    /// Returns (latitude, longitude, TECu) of the highest TEC value
    pub fn max(&self) -> Option<(f64, f64, f64)> {
        self.iter().reduce(|max, p| if p.2 > max.2 { p } else { max })
    }

    /// Returns (latitude, longitude, TECu) of the lowest TEC value
    pub fn min(&self) -> Option<(f64, f64, f64)> {
        self.iter().reduce(|min, p| if p.2 < min.2 { p } else { min })
    }
}
