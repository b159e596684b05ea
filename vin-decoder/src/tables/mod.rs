//! Reference tables and the unified reference database
//!
//! This module contains the shipped region/country, manufacturer and
//! model-year data, and the database that serves lookups over them.

pub mod database;
mod manufacturers;
mod regions;
mod years;

use once_cell::sync::Lazy;

// Re-export key types for convenience
pub use database::{CountryDefinition, DatabaseStats, ReferenceDatabase, RegionDefinition};

/// Shipped tables, built once on first use and never mutated
pub(crate) static BUILTIN: Lazy<ReferenceDatabase> = Lazy::new(build_builtin);

fn build_builtin() -> ReferenceDatabase {
    let mut db = ReferenceDatabase::new();

    for (code, name, countries) in regions::REGIONS {
        let region = countries
            .iter()
            .fold(RegionDefinition::new(*code, *name), |region, (chars, country)| {
                region.with_country(*chars, *country)
            });
        db.add_region(region);
    }

    for (key, name) in manufacturers::MANUFACTURERS {
        db.add_manufacturer(*key, *name);
    }

    for (year, code) in years::year_rows() {
        db.add_year(year, code);
    }

    log::debug!("Built-in reference tables loaded: {:?}", db.stats());
    db
}
