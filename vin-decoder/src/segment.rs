//! Input normalization and structural validation
//!
//! The only fallible step of decoding. Input is uppercased and nothing else:
//! surrounding whitespace or separators make the VIN invalid.

use crate::types::{Result, VinError, VIN_LENGTH};

/// The three positional sections of a valid VIN
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segments<'a> {
    /// Characters 1-3
    pub wmi: &'a str,
    /// Characters 4-9
    pub vds: &'a str,
    /// Characters 10-17
    pub vis: &'a str,
}

/// Uppercase ASCII letters of the raw input. Total; validation happens in [`segment`].
///
/// Non-ASCII characters pass through unchanged so the validator sees them.
pub fn normalize(raw: &str) -> String {
    raw.to_ascii_uppercase()
}

/// True for the characters a VIN may contain: `0-9` and `A-Z` without `I`, `O`, `Q`
pub fn is_vin_char(c: char) -> bool {
    matches!(c, '0'..='9' | 'A'..='H' | 'J'..='N' | 'P' | 'R'..='Z')
}

/// Validate a normalized VIN and split it into WMI/VDS/VIS
///
/// Fails with [`VinError::InvalidFormat`] carrying the input verbatim.
pub fn segment(vin: &str) -> Result<Segments<'_>> {
    // All accepted characters are ASCII, so the byte length equals the char count
    if vin.len() != VIN_LENGTH || !vin.chars().all(is_vin_char) {
        return Err(VinError::InvalidFormat(vin.to_string()));
    }

    Ok(Segments {
        wmi: &vin[0..3],
        vds: &vin[3..9],
        vis: &vin[9..17],
    })
}
