//! IONEX test toolkit

/* IONEX content generation */
mod ionex;
pub use ionex::{Generator, MapSpecs};

use std::str::FromStr;

use crate::prelude::{Epoch, IonexDocument};

/// Generic tests applied to any parsed [IonexDocument]
pub fn generic_ionex_test(
    dut: &IonexDocument,
    nb_epochs: usize,
    nb_skipped: usize,
    exponent: i32,
    rows: usize,
    cols: usize,
    first_epoch: Option<&str>,
    last_epoch: Option<&str>,
) {
    assert_eq!(dut.epochs().len(), nb_epochs, "wrong number of epochs");
    assert_eq!(
        dut.skipped_epochs().len(),
        nb_skipped,
        "wrong number of skipped epochs: {:?}",
        dut.skipped_epochs()
    );
    assert_eq!(dut.exponent(), exponent, "wrong exponent");
    assert_eq!(dut.bounds().row_count(), rows, "wrong number of rows");
    assert_eq!(dut.bounds().col_count(), cols, "wrong number of columns");

    for map in dut.epochs() {
        assert_eq!(map.shape(), (rows, cols), "{}: wrong shape", map.epoch);
        assert_eq!(map.values().len(), rows * cols);
        assert_eq!(map.bounds(), dut.bounds());
    }

    // all maps share the same bounds
    if let Some(first) = dut.epochs().first() {
        for map in dut.epochs().iter().skip(1) {
            assert!(first.shares_bounds(map), "{}: bounds not shared", map.epoch);
        }
    }

    let first_epoch = first_epoch.map(|t| Epoch::from_str(t).unwrap());
    assert_eq!(dut.first_epoch(), first_epoch, "wrong first epoch");

    let last_epoch = last_epoch.map(|t| Epoch::from_str(t).unwrap());
    assert_eq!(dut.last_epoch(), last_epoch, "wrong last epoch");
}
