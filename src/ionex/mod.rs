//! IONEX: Ionosphere Maps Exchange format.
//!
//! An IONEX document is made of a header, that describes the map grid
//! and the scaling of raw samples, followed by one TEC map per epoch.
//! Each map is materialized as a [TecGrid].

pub(crate) mod marker;

mod bounds;
mod document;
mod grid;
mod header;
mod parsing;

pub use bounds::{Axis, GridBounds, MAX_AXIS_POINTS};
pub use document::IonexDocument;
pub use grid::TecGrid;
pub use header::HeaderFields;
pub use parsing::{ParsingOptions, RowPolicy};
