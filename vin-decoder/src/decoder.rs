//! Main decoder API
//!
//! This module provides the primary interface for the decoder library.
//! The Decoder struct ties a reference database to a configuration and runs
//! the decoding pipeline: normalize, validate and segment, then resolve.

use crate::config::DecoderConfig;
use crate::resolver::Resolver;
use crate::segment;
use crate::tables::{DatabaseStats, ReferenceDatabase};
use crate::types::{Result, VinError, VinRecord};

/// The main decoder struct - entry point for all decoding operations
pub struct Decoder<'db> {
    /// Reference tables used for every lookup
    reference_db: &'db ReferenceDatabase,
    /// Decoder configuration
    config: DecoderConfig,
}

impl Decoder<'static> {
    /// Create a decoder over the built-in tables with default settings
    pub fn new() -> Self {
        Self {
            reference_db: ReferenceDatabase::builtin(),
            config: DecoderConfig::default(),
        }
    }
}

impl<'db> Decoder<'db> {
    /// Create a decoder over custom reference tables
    pub fn with_database(reference_db: &'db ReferenceDatabase) -> Self {
        Self {
            reference_db,
            config: DecoderConfig::default(),
        }
    }

    /// Builder method: replace the configuration
    pub fn with_config(mut self, config: DecoderConfig) -> Self {
        self.config = config;
        self
    }

    /// Decode a VIN, resolving model years against the configured year
    ///
    /// # Example
    /// ```
    /// use vin_decoder::Decoder;
    ///
    /// let record = Decoder::new().decode("1HGCM82633A004352").unwrap();
    /// assert_eq!(record.wmi(), "1HG");
    /// assert_eq!(record.vds(), "CM8263");
    /// assert_eq!(record.vis(), "3A004352");
    /// ```
    pub fn decode(&self, raw: &str) -> Result<VinRecord> {
        self.decode_at(raw, self.config.current_year())
    }

    /// Decode a VIN, resolving model years against `current_year`
    pub fn decode_at(&self, raw: &str, current_year: i32) -> Result<VinRecord> {
        let vin = segment::normalize(raw);
        let segments = segment::segment(&vin).map_err(|_| {
            log::debug!("Rejected VIN input: {:?}", raw);
            VinError::InvalidFormat(raw.to_string())
        })?;

        let db = self.reference_db;
        let record = VinRecord {
            region: Resolver::region(db, segments.wmi).map(str::to_string),
            country: Resolver::country(db, segments.wmi).map(str::to_string),
            manufacturer: Resolver::manufacturer(db, segments.wmi).map(str::to_string),
            model_years: Resolver::model_years(db, segments.vis, current_year),
            wmi: segments.wmi.to_string(),
            vds: segments.vds.to_string(),
            vis: segments.vis.to_string(),
            vin,
        };

        log::debug!(
            "Decoded {}: region={:?} country={:?} manufacturer={:?} years={:?}",
            record.vin,
            record.region,
            record.country,
            record.manufacturer,
            record.model_years
        );
        Ok(record)
    }

    /// Decode a sequence of VINs lazily
    ///
    /// The current year is read once, so every record of the batch is
    /// resolved against the same date. Each item succeeds or fails on its own.
    pub fn decode_all<I>(&self, inputs: I) -> DecodingIterator<'_, 'db, I::IntoIter>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        DecodingIterator {
            decoder: self,
            inputs: inputs.into_iter(),
            current_year: self.config.current_year(),
        }
    }

    /// Get statistics about the reference tables in use
    pub fn database_stats(&self) -> DatabaseStats {
        self.reference_db.stats()
    }
}

impl Default for Decoder<'static> {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator returned by [`Decoder::decode_all`]
pub struct DecodingIterator<'a, 'db, I> {
    decoder: &'a Decoder<'db>,
    inputs: I,
    current_year: i32,
}

impl<'a, 'db, I> Iterator for DecodingIterator<'a, 'db, I>
where
    I: Iterator,
    I::Item: AsRef<str>,
{
    type Item = Result<VinRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        let raw = self.inputs.next()?;
        Some(self.decoder.decode_at(raw.as_ref(), self.current_year))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inputs.size_hint()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::RegionDefinition;

    fn small_db() -> ReferenceDatabase {
        let mut db = ReferenceDatabase::new();
        db.add_region(
            RegionDefinition::new('1', "North America").with_country("H", "United States"),
        );
        db.add_manufacturer("1H", "Honda USA");
        db.add_year(2003, '3');
        db
    }

    #[test]
    fn test_decoder_creation() {
        let decoder = Decoder::new();
        let stats = decoder.database_stats();
        assert_eq!(stats.num_years, 60);
    }

    #[test]
    fn test_decode_with_custom_database() {
        let db = small_db();
        let decoder = Decoder::with_database(&db);
        let record = decoder.decode_at("1hgcm82633a004352", 2026).unwrap();

        assert_eq!(record.vin(), "1HGCM82633A004352");
        assert_eq!(record.region(), Some("North America"));
        assert_eq!(record.country(), Some("United States"));
        assert_eq!(record.manufacturer(), Some("Honda USA"));
        assert_eq!(record.model_years(), &[2003]);
    }

    #[test]
    fn test_lookups_are_independent() {
        let db = small_db();
        let record = Decoder::with_database(&db).decode_at("1ZZCM82633A004352", 2026).unwrap();
        assert_eq!(record.region(), Some("North America"));
        assert_eq!(record.country(), None);
        assert_eq!(record.manufacturer(), None);

        let mut db = ReferenceDatabase::new();
        db.add_manufacturer("1HG", "Honda");
        let record = Decoder::with_database(&db).decode_at("1HGCM82633A004352", 2026).unwrap();
        assert_eq!(record.region(), None);
        assert_eq!(record.manufacturer(), Some("Honda"));
        assert!(record.model_years().is_empty());
    }

    #[test]
    fn test_error_echoes_raw_input() {
        let err = Decoder::new().decode("invalidvin12345").unwrap_err();
        assert_eq!(err, VinError::InvalidFormat("invalidvin12345".to_string()));
    }

    #[test]
    fn test_reference_year_from_config() {
        let decoder = Decoder::new().with_config(DecoderConfig::new().with_reference_year(2033));
        let record = decoder.decode("1HGCM82633A004352").unwrap();
        assert_eq!(record.model_years(), &[2003, 2033]);
    }

    #[test]
    fn test_reference_year_at_limit() {
        let config = DecoderConfig::new().with_reference_year(i32::MAX);
        let decoder = Decoder::new().with_config(config);
        let record = decoder.decode("1HGCM82633A004352").unwrap();
        assert_eq!(record.model_years(), &[2003, 2033]);
    }

    #[test]
    fn test_decode_all_keeps_order_and_errors() {
        let decoder = Decoder::new().with_config(DecoderConfig::new().with_reference_year(2026));
        let results: Vec<_> = decoder
            .decode_all(["1HGCM82633A004352", "bad", "wvwzzz1jzxw000001"])
            .collect();

        assert_eq!(results.len(), 3);
        assert_eq!(results[0].as_ref().unwrap().wmi(), "1HG");
        assert!(results[1].is_err());
        assert_eq!(results[2].as_ref().unwrap().vin(), "WVWZZZ1JZXW000001");
    }
}
