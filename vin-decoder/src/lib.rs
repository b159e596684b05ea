//! VIN Decoder Library
//!
//! A stateless library for parsing Vehicle Identification Numbers (ISO 3779)
//! and deriving descriptive attributes from static reference tables.
//!
//! # Architecture
//!
//! Decoding is a single pipeline:
//! - Uppercases the input (nothing is trimmed or stripped)
//! - Validates the 17-character pattern, rejecting `I`, `O` and `Q`
//! - Splits the VIN into WMI (3), VDS (6) and VIS (8)
//! - Resolves region, country and manufacturer from the WMI
//! - Resolves every candidate model year from the first VIS character
//!
//! Validation is the only step that can fail. Lookups that find nothing
//! leave the matching field empty.
//!
//! The library does NOT:
//! - Verify the check digit (position 9)
//! - Check that a manufacturer/year combination is historically plausible
//! - Pick a single model year when the 30-year cycle is ambiguous
//!
//! Input/output handling lives in the application layer (vin-cli).
//!
//! # Example Usage
//!
//! ```
//! use vin_decoder::{parse_vin, Decoder, DecoderConfig};
//!
//! let record = parse_vin("1HGCM82633A004352").unwrap();
//! assert_eq!(record.region(), Some("North America"));
//! assert_eq!(record.country(), Some("United States"));
//! assert_eq!(record.manufacturer(), Some("Honda USA"));
//!
//! // Resolve model years against a fixed year instead of the clock
//! let decoder = Decoder::new().with_config(DecoderConfig::new().with_reference_year(2026));
//! let record = decoder.decode("1HGCM82633A004352").unwrap();
//! assert_eq!(record.model_years(), &[2003]);
//!
//! assert!(parse_vin("invalidvin12345").is_err());
//! ```

// Public modules
pub mod config;
pub mod decoder;
pub mod segment;
pub mod tables;
pub mod types;

// Re-export main types for convenience
pub use config::DecoderConfig;
pub use decoder::{Decoder, DecodingIterator};
pub use tables::{CountryDefinition, DatabaseStats, ReferenceDatabase, RegionDefinition};
pub use types::{Result, VinError, VinExport, VinRecord, VIN_LENGTH};

// Internal modules (not exposed in public API)
mod resolver;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Parse and fully decode a VIN using the built-in tables and the local clock
pub fn parse_vin(raw: &str) -> Result<VinRecord> {
    Decoder::new().decode(raw)
}
