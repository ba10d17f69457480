#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]

/*
 * TECMAP is part of the Geo-Rust framework.
 * Authors: Guillaume W. Bres <guillaume.bressaix@gmail.com> et al.
 * (cf. https://github.com/georust/rinex/graphs/contributors)
 * This framework is shipped under both Apache-2.0 and MIT License.
 *
 * Documentation: https://github.com/georust/rinex
 */

#[macro_use]
extern crate lazy_static;

pub mod ionex;
pub mod production;

mod error;
mod linspace;

#[cfg(test)]
mod tests;

/// Package to include all basic structures
pub mod prelude {
    pub use crate::{
        error::{EpochError, LookupError, ParsingError},
        ionex::{
            Axis, GridBounds, HeaderFields, IonexDocument, ParsingOptions, RowPolicy, TecGrid,
        },
        linspace::Linspace,
        production::IonexFileName,
    };

    // pub re-export
    pub use hifitime::{Epoch, TimeScale};
}
