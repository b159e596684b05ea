//! Decoder configuration types
//!
//! The only knob the decoder has is its time source. By default the current
//! year is read from the local clock at decode time; a fixed reference year
//! can be set instead.

use chrono::Datelike;
use serde::{Deserialize, Serialize};

/// Configuration for the decoder library
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecoderConfig {
    /// Year treated as "now" when resolving model years (None = local clock)
    #[serde(default)]
    pub reference_year: Option<i32>,
}

impl DecoderConfig {
    /// Create a new decoder configuration with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: resolve model years against a fixed year
    pub fn with_reference_year(mut self, year: i32) -> Self {
        self.reference_year = Some(year);
        self
    }

    /// The year to resolve against: the configured one, or the local clock's
    pub fn current_year(&self) -> i32 {
        self.reference_year.unwrap_or_else(|| chrono::Local::now().year())
    }
}
