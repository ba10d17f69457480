/*
 * File Production infrastructure.
 * IONEX products are distributed under standardized short file names,
 * that identify the analysis center, the region and the day course.
 * This is what a raw document provider expects when fetching
 * one day of TEC maps. Fetching itself is not part of this crate.
 */
use thiserror::Error;

mod ionex;
pub use ionex::{Compression, FileSequence, IonexFileName};

#[derive(Error, Debug, Clone, PartialEq)]
/// File Production errors
pub enum Error {
    #[error("filename does not follow naming conventions")]
    NonStandardFileName,
    #[error("invalid file sequence")]
    InvalidFileSequence,
    #[error("unknown compression suffix \"{0}\"")]
    UnknownCompression(String),
}
