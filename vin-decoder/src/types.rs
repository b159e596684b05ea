//! Core types for the VIN decoder library
//!
//! This module defines the record the decoder emits for every VIN, the flat
//! export shape of that record, and the single error kind of the library.
//! A record is built once by the decoder and never changes afterwards.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Result type for decoder operations
pub type Result<T> = std::result::Result<T, VinError>;

/// Number of characters in a VIN
pub const VIN_LENGTH: usize = 17;

/// Errors that can occur during decoding
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VinError {
    /// Input does not match the 17-character VIN pattern. Carries the input verbatim.
    #[error("Invalid VIN format: {0:?}")]
    InvalidFormat(String),
}

/// A fully decoded VIN
///
/// All lookups are resolved when the record is built. `region`, `country` and
/// `manufacturer` are independent: any of them may be absent while the others
/// are present.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VinRecord {
    pub(crate) vin: String,
    pub(crate) wmi: String,
    pub(crate) vds: String,
    pub(crate) vis: String,
    pub(crate) region: Option<String>,
    pub(crate) country: Option<String>,
    pub(crate) manufacturer: Option<String>,
    pub(crate) model_years: Vec<i32>,
}

impl VinRecord {
    /// The normalized 17-character VIN
    pub fn vin(&self) -> &str {
        &self.vin
    }

    /// World Manufacturer Identifier (characters 1-3)
    pub fn wmi(&self) -> &str {
        &self.wmi
    }

    /// Vehicle Descriptor Section (characters 4-9)
    pub fn vds(&self) -> &str {
        &self.vds
    }

    /// Vehicle Identifier Section (characters 10-17)
    pub fn vis(&self) -> &str {
        &self.vis
    }

    /// Geographic region of the WMI, if known
    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    /// Country of the WMI, if known
    pub fn country(&self) -> Option<&str> {
        self.country.as_deref()
    }

    /// Manufacturer name, if known
    pub fn manufacturer(&self) -> Option<&str> {
        self.manufacturer.as_deref()
    }

    /// Every candidate model year, ascending
    pub fn model_years(&self) -> &[i32] {
        &self.model_years
    }

    /// Flat key/value export of this record
    pub fn export(&self) -> VinExport {
        VinExport {
            vin: self.vin.clone(),
            wmi: self.wmi.clone(),
            vds: self.vds.clone(),
            vis: self.vis.clone(),
            region: self.region.clone(),
            country: self.country.clone(),
            model_year: self.model_years.clone(),
            manufacturer: self.manufacturer.clone(),
        }
    }

    /// Same flat representation as [`VinRecord::export`], as ordered string pairs.
    ///
    /// Model years are joined with `", "`; an empty list maps to `None`.
    pub fn to_pairs(&self) -> Vec<(&'static str, Option<String>)> {
        let model_year = if self.model_years.is_empty() {
            None
        } else {
            Some(
                self.model_years
                    .iter()
                    .map(|y| y.to_string())
                    .collect::<Vec<_>>()
                    .join(", "),
            )
        };

        vec![
            ("vin", Some(self.vin.clone())),
            ("wmi", Some(self.wmi.clone())),
            ("vds", Some(self.vds.clone())),
            ("vis", Some(self.vis.clone())),
            ("region", self.region.clone()),
            ("country", self.country.clone()),
            ("modelYear", model_year),
            ("manufacturer", self.manufacturer.clone()),
        ]
    }
}

impl fmt::Display for VinRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.vin)
    }
}

impl FromStr for VinRecord {
    type Err = VinError;

    fn from_str(s: &str) -> Result<Self> {
        crate::parse_vin(s)
    }
}

/// Flat export of a [`VinRecord`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VinExport {
    pub vin: String,
    pub wmi: String,
    pub vds: String,
    pub vis: String,
    pub region: Option<String>,
    pub country: Option<String>,
    #[serde(rename = "modelYear")]
    pub model_year: Vec<i32>,
    pub manufacturer: Option<String>,
}
