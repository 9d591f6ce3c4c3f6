//! @ai:module:intent Fixed-offset result file name layout
//! @ai:module:layer domain
//! @ai:module:public_api FileMetadata, parse_file_name, canonical_file_name
//! @ai:module:stateless true
//!
//! The solver's result files carry their parameters at fixed byte offsets:
//!
//! ```text
//! statsData_2700_25_lambdaT0.99_lamS0.50.txt
//! 0         1         2         3
//! 0123456789012345678901234567890123456789
//!           ^^^^ ^^        ^^^^     ^^^^
//!           |    |         |        spatial weight  [34, 38)
//!           |    |         temporal weight          [25, 29)
//!           |    arrival rate                       [15, 17)
//!           penalty                                 [10, 14)
//! ```

use crate::error::{Error, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::ops::Range;
use std::sync::OnceLock;

pub const PENALTY: Range<usize> = 10..14;
pub const ARRIVAL_RATE: Range<usize> = 15..17;
pub const TEMPORAL_WEIGHT: Range<usize> = 25..29;
pub const SPATIAL_WEIGHT: Range<usize> = 34..38;

const PREFIX: &str = "statsData_";
const TEMPORAL_TAG: &str = "_lambdaT";
const SPATIAL_TAG: &str = "_lamS";

/// @ai:intent Experiment parameters encoded in a result file name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileMetadata {
    pub penalty: u32,
    pub arrival_rate: u32,
    pub t_lam: String,
    pub s_lam: String,
}

fn label_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^\d\.\d\d$").expect("static regex is valid"))
}

fn slice<'a>(name: &'a str, range: Range<usize>) -> Result<&'a str> {
    name.get(range.clone()).ok_or_else(|| Error::Parse {
        file: name.to_string(),
        start: range.start,
        end: range.end,
        message: format!("name has {} bytes or is not ASCII here", name.len()),
    })
}

fn integer_at(name: &str, range: Range<usize>) -> Result<u32> {
    let raw = slice(name, range.clone())?;

    if !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::Parse {
            file: name.to_string(),
            start: range.start,
            end: range.end,
            message: format!("expected digits, found {:?}", raw),
        });
    }

    raw.parse().map_err(|e| Error::Parse {
        file: name.to_string(),
        start: range.start,
        end: range.end,
        message: format!("{}", e),
    })
}

fn label_at(name: &str, range: Range<usize>) -> Result<String> {
    let raw = slice(name, range.clone())?;

    if !label_pattern().is_match(raw) {
        return Err(Error::Parse {
            file: name.to_string(),
            start: range.start,
            end: range.end,
            message: format!("expected a weight label like 0.99, found {:?}", raw),
        });
    }

    Ok(raw.to_string())
}

/// @ai:intent Parse the parameters out of a result file name
/// @ai:pre name is the bare file name, not a path
/// @ai:effects pure
pub fn parse_file_name(name: &str) -> Result<FileMetadata> {
    Ok(FileMetadata {
        penalty: integer_at(name, PENALTY)?,
        arrival_rate: integer_at(name, ARRIVAL_RATE)?,
        t_lam: label_at(name, TEMPORAL_WEIGHT)?,
        s_lam: label_at(name, SPATIAL_WEIGHT)?,
    })
}

/// @ai:intent Render metadata as a file name that `parse_file_name` accepts
/// @ai:post parse_file_name(canonical_file_name(m)?) == m
/// @ai:effects pure
pub fn canonical_file_name(meta: &FileMetadata) -> Result<String> {
    if !(1000..=9999).contains(&meta.penalty) {
        return Err(Error::InvalidMetadata(format!(
            "penalty {} does not fit four digits",
            meta.penalty
        )));
    }

    if !(10..=99).contains(&meta.arrival_rate) {
        return Err(Error::InvalidMetadata(format!(
            "arrival rate {} does not fit two digits",
            meta.arrival_rate
        )));
    }

    for label in [&meta.t_lam, &meta.s_lam] {
        if !label_pattern().is_match(label) {
            return Err(Error::InvalidMetadata(format!(
                "weight label {:?} is not of the form d.dd",
                label
            )));
        }
    }

    Ok(format!(
        "{}{}_{}{}{}{}{}.txt",
        PREFIX, meta.penalty, meta.arrival_rate, TEMPORAL_TAG, meta.t_lam, SPATIAL_TAG, meta.s_lam
    ))
}

/// @ai:intent Format a weight as a two-decimal label
/// @ai:effects pure
pub fn weight_label(weight: f64) -> String {
    format!("{:.2}", weight)
}
