//! Shipped model-year table
//!
//! Position 10 of a VIN encodes the model year in a 30-character cycle:
//! letters without `I`, `O`, `Q`, `U`, `Z`, then digits `1-9`. Two cycles
//! are listed, 1980 through 2039.

const CYCLE: &str = "ABCDEFGHJKLMNPRSTVWXY123456789";

/// First year of the table
const FIRST_YEAR: i32 = 1980;

/// Number of cycles listed
const CYCLES: i32 = 2;

/// (year, code) pairs in ascending year order
pub(crate) fn year_rows() -> impl Iterator<Item = (i32, char)> {
    (0..CYCLES).flat_map(|cycle| {
        CYCLE
            .chars()
            .zip(0..)
            .map(move |(code, offset)| (FIRST_YEAR + cycle * 30 + offset, code))
    })
}
