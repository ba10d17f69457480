//! IONEX maps parsing

use itertools::Itertools;

use crate::{
    ionex::{
        marker::{after, line_before, split_end_of_map, split_latitude_rows},
        marker::{EPOCH_OF_CURRENT_MAP, START_OF_TEC_MAP},
        HeaderFields,
    },
    prelude::{Epoch, EpochError},
};

/// How to handle latitude rows that do not match the grid definition
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RowPolicy {
    /// Missing or incomplete rows invalidate the entire map
    #[default]
    SkipEpoch,
    /// Missing samples and missing rows are replaced by 0.0.
    /// Overlong rows and extra rows still invalidate the map.
    ZeroFill,
}

/// Options that tune the parsing process
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParsingOptions {
    /// [RowPolicy] to apply to faulty rows
    pub row_policy: RowPolicy,
}

impl ParsingOptions {
    /// Copies and sets [RowPolicy]
    pub fn with_row_policy(&self, policy: RowPolicy) -> Self {
        let mut s = *self;
        s.row_policy = policy;
        s
    }
}

/// Splits IONEX content into TEC map segments, in order of appearance.
/// Each segment is what lies between "START OF TEC MAP" and "END OF TEC MAP".
pub(crate) fn tec_map_segments(content: &str) -> Vec<&str> {
    let mut fragments = split_end_of_map(content).collect_vec();
    // trailing content (RMS maps, END OF FILE..)
    fragments.pop();
    fragments
        .into_iter()
        .filter_map(|fragment| after(fragment, START_OF_TEC_MAP))
        .collect()
}

/// Parses the [Epoch] of a TEC map segment
pub(crate) fn parse_epoch(segment: &str, index: usize) -> Result<Epoch, EpochError> {
    let line =
        line_before(segment, EPOCH_OF_CURRENT_MAP).ok_or(EpochError::MissingEpochMarker { index })?;

    let items = line.split_whitespace().collect_vec();

    let malformed = || EpochError::MalformedEpochHeader {
        index,
        found: items.len(),
        line: line.trim().to_string(),
    };

    if items.len() != 6 {
        return Err(malformed());
    }

    let y = items[0].parse::<i32>().map_err(|_| malformed())?;
    let mut fields = [0_u8; 5];
    for (field, item) in fields.iter_mut().zip(items[1..].iter()) {
        *field = item.parse::<u8>().map_err(|_| malformed())?;
    }
    let [m, d, hh, mm, ss] = fields;

    Epoch::maybe_from_gregorian_utc(y, m, d, hh, mm, ss, 0)
        .map_err(|_| EpochError::InvalidDate { index })
}

/// Parses all latitude rows of a TEC map segment into a row major
/// array, scaled according to [HeaderFields].
pub(crate) fn parse_tec_values(
    segment: &str,
    index: usize,
    header: &HeaderFields,
    opts: &ParsingOptions,
) -> Result<Vec<f64>, EpochError> {
    let (rows, cols) = (header.grid.row_count(), header.grid.col_count());

    // first fragment precedes first row
    let fragments = split_latitude_rows(segment).skip(1).collect_vec();

    let nb_rows = fragments.len();
    if nb_rows > rows || (nb_rows < rows && opts.row_policy == RowPolicy::SkipEpoch) {
        return Err(EpochError::RowCount {
            index,
            expected: rows,
            found: nb_rows,
        });
    }

    let mut values = Vec::with_capacity(rows * cols);

    for (row, fragment) in fragments.iter().enumerate() {
        let items = fragment.split_whitespace().collect_vec();
        let found = items.len();

        if found > cols || (found < cols && opts.row_policy == RowPolicy::SkipEpoch) {
            return Err(EpochError::MalformedRow {
                index,
                row,
                expected: cols,
                found,
            });
        }

        for item in items {
            let raw = item.parse::<i64>().map_err(|_| EpochError::BadSample {
                index,
                row,
                token: item.to_string(),
            })?;
            values.push(header.scale(raw));
        }

        // zero fill
        values.resize((row + 1) * cols, 0.0);
    }

    values.resize(rows * cols, 0.0);
    Ok(values)
}
