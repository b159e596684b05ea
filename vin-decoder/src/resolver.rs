//! Attribute Resolution Engine
//!
//! Derives region, country, manufacturer and candidate model years from the
//! WMI and VIS of an already validated VIN. Every lookup is total: a missing
//! table entry yields `None` or an empty list, never an error.

use crate::tables::ReferenceDatabase;

/// Attribute resolver - reads the reference database, never mutates it
pub struct Resolver;

impl Resolver {
    /// Region name for `WMI[0]`
    pub fn region<'db>(db: &'db ReferenceDatabase, wmi: &str) -> Option<&'db str> {
        let code = wmi.chars().next()?;
        let region = db.region(code).map(|r| r.name.as_str());
        log::trace!("Region for {:?}: {:?}", wmi, region);
        region
    }

    /// Country name for `WMI[1]` within the region of `WMI[0]`
    ///
    /// Country entries are tried in table order and the first one whose
    /// character set contains `WMI[1]` wins, even if later entries overlap.
    pub fn country<'db>(db: &'db ReferenceDatabase, wmi: &str) -> Option<&'db str> {
        let mut chars = wmi.chars();
        let region = db.region(chars.next()?)?;
        let second = chars.next()?;

        let country = region
            .countries
            .iter()
            .find(|country| country.contains(second))
            .map(|country| country.name.as_str());
        log::trace!("Country for {:?}: {:?}", wmi, country);
        country
    }

    /// Manufacturer name: exact WMI first, then its 2-character prefix
    pub fn manufacturer<'db>(db: &'db ReferenceDatabase, wmi: &str) -> Option<&'db str> {
        let manufacturer = db
            .manufacturer(wmi)
            .or_else(|| wmi.get(0..2).and_then(|prefix| db.manufacturer(prefix)));
        log::trace!("Manufacturer for {:?}: {:?}", wmi, manufacturer);
        manufacturer
    }

    /// Every year up to `current_year + 1` whose code equals `VIS[0]`
    ///
    /// The year table is scanned in ascending order; the scan stops right
    /// after the entry for `current_year + 1`, whether or not it matched.
    /// When `current_year + 1` overflows there is no stop entry and the whole
    /// table is scanned. Years are returned ascending and may be empty.
    pub fn model_years(db: &ReferenceDatabase, vis: &str, current_year: i32) -> Vec<i32> {
        let Some(code) = vis.chars().next() else {
            return Vec::new();
        };
        let next_year = current_year.checked_add(1);

        let mut years = Vec::new();
        for &(year, year_code) in db.years() {
            if year_code == code {
                years.push(year);
            }
            if Some(year) == next_year {
                break;
            }
        }

        log::trace!("Model years for {:?} (current {}): {:?}", code, current_year, years);
        years
    }
}
