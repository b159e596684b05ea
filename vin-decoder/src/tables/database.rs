//! Unified reference database
//!
//! Combines the region, country, manufacturer and model-year tables into a
//! single queryable value. The shipped tables live in one lazily built,
//! read-only instance; tests assemble their own through the builder methods.

use std::collections::HashMap;

/// A region keyed by the first WMI character
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionDefinition {
    /// First WMI character this region covers
    pub code: char,
    /// Region name
    pub name: String,
    /// Country table, in authoring order
    pub countries: Vec<CountryDefinition>,
}

/// A country entry inside a region's country table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryDefinition {
    /// Set of second-WMI characters mapping to this country.
    /// Membership only: no ranges are evaluated.
    pub chars: String,
    /// Country name
    pub name: String,
}

impl RegionDefinition {
    /// Create a region without countries
    pub fn new(code: char, name: impl Into<String>) -> Self {
        Self {
            code,
            name: name.into(),
            countries: Vec::new(),
        }
    }

    /// Builder method: append a country entry
    pub fn with_country(mut self, chars: impl Into<String>, name: impl Into<String>) -> Self {
        self.countries.push(CountryDefinition::new(chars, name));
        self
    }
}

impl CountryDefinition {
    /// Create a country entry
    pub fn new(chars: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            chars: chars.into(),
            name: name.into(),
        }
    }

    /// True if `c` is in this entry's character set
    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(c)
    }
}

/// The unified reference database
#[derive(Debug, Clone)]
pub struct ReferenceDatabase {
    /// Regions by first WMI character
    regions: HashMap<char, RegionDefinition>,
    /// Manufacturer names by exact WMI or 2-character WMI prefix
    manufacturers: HashMap<String, String>,
    /// (year, code) pairs sorted by year
    years: Vec<(i32, char)>,
}

impl ReferenceDatabase {
    /// Create a new empty reference database
    pub fn new() -> Self {
        Self {
            regions: HashMap::new(),
            manufacturers: HashMap::new(),
            years: Vec::new(),
        }
    }

    /// The shipped tables, built on first use
    pub fn builtin() -> &'static ReferenceDatabase {
        &super::BUILTIN
    }

    /// Add a region. Replaces an existing region with the same code.
    pub fn add_region(&mut self, region: RegionDefinition) {
        if let Some(old) = self.regions.insert(region.code, region) {
            log::warn!("Region {:?} ({}) replaced", old.code, old.name);
        }
    }

    /// Add a manufacturer keyed by a full WMI or a 2-character prefix
    pub fn add_manufacturer(&mut self, key: impl Into<String>, name: impl Into<String>) {
        self.manufacturers.insert(key.into(), name.into());
    }

    /// Add a model-year code. Keeps the year table sorted ascending.
    pub fn add_year(&mut self, year: i32, code: char) {
        match self.years.binary_search_by_key(&year, |(y, _)| *y) {
            Ok(idx) => self.years[idx] = (year, code),
            Err(idx) => self.years.insert(idx, (year, code)),
        }
    }

    /// Get the region for a first WMI character
    pub fn region(&self, code: char) -> Option<&RegionDefinition> {
        self.regions.get(&code)
    }

    /// Get a manufacturer name by exact key
    pub fn manufacturer(&self, key: &str) -> Option<&str> {
        self.manufacturers.get(key).map(String::as_str)
    }

    /// The year table in ascending year order
    pub fn years(&self) -> &[(i32, char)] {
        &self.years
    }

    /// Get database statistics
    pub fn stats(&self) -> DatabaseStats {
        DatabaseStats {
            num_regions: self.regions.len(),
            num_countries: self.regions.values().map(|r| r.countries.len()).sum(),
            num_manufacturers: self.manufacturers.len(),
            num_years: self.years.len(),
        }
    }
}

/// Database statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DatabaseStats {
    /// Number of first WMI characters with a region
    pub num_regions: usize,
    /// Total country entries across all regions
    pub num_countries: usize,
    /// Manufacturer keys (full WMIs and prefixes)
    pub num_manufacturers: usize,
    /// Entries in the model-year table
    pub num_years: usize,
}

impl Default for ReferenceDatabase {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_database() {
        let db = ReferenceDatabase::new();
        let stats = db.stats();
        assert_eq!(stats.num_regions, 0);
        assert_eq!(stats.num_countries, 0);
        assert_eq!(stats.num_manufacturers, 0);
        assert_eq!(stats.num_years, 0);
    }

    #[test]
    fn test_add_region() {
        let mut db = ReferenceDatabase::new();
        db.add_region(
            RegionDefinition::new('1', "North America")
                .with_country("ABC", "Alpha")
                .with_country("CDE", "Beta"),
        );

        let stats = db.stats();
        assert_eq!(stats.num_regions, 1);
        assert_eq!(stats.num_countries, 2);

        let region = db.region('1').unwrap();
        assert_eq!(region.name, "North America");
        assert_eq!(region.countries[1].name, "Beta");
        assert!(region.countries[0].contains('B'));
        assert!(!region.countries[0].contains('D'));
        assert!(db.region('2').is_none());
    }

    #[test]
    fn test_years_stay_sorted() {
        let mut db = ReferenceDatabase::new();
        db.add_year(2001, '1');
        db.add_year(1980, 'A');
        db.add_year(1990, 'L');
        db.add_year(1990, 'X');
        assert_eq!(db.years(), &[(1980, 'A'), (1990, 'X'), (2001, '1')]);
    }

    #[test]
    fn test_manufacturer_lookup_is_exact() {
        let mut db = ReferenceDatabase::new();
        db.add_manufacturer("JT", "Toyota");
        assert_eq!(db.manufacturer("JT"), Some("Toyota"));
        assert_eq!(db.manufacturer("JTD"), None);
    }

    #[test]
    fn test_builtin_tables() {
        let stats = ReferenceDatabase::builtin().stats();
        assert_eq!(stats.num_years, 60);
        assert!(stats.num_regions >= 30);
        assert!(stats.num_manufacturers > 50);
    }
}
