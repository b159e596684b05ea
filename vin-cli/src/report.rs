//! Report generation
//!
//! Renders decoded records as plain text blocks or as a JSON array.

use anyhow::Result;
use vin_decoder::VinRecord;

/// Render one text block per record, separated by blank lines
pub fn render_text(records: &[VinRecord]) -> String {
    records
        .iter()
        .map(|record| {
            record
                .to_pairs()
                .into_iter()
                .map(|(key, value)| {
                    let label = format!("{}:", key);
                    format!("{:<13}{}", label, value.as_deref().unwrap_or("-"))
                })
                .collect::<Vec<_>>()
                .join("\n")
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Render all records as a pretty-printed JSON array
pub fn render_json(records: &[VinRecord]) -> Result<String> {
    let exports: Vec<_> = records.iter().map(VinRecord::export).collect();
    Ok(serde_json::to_string_pretty(&exports)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use vin_decoder::{Decoder, DecoderConfig};

    fn records() -> Vec<VinRecord> {
        let decoder = Decoder::new().with_config(DecoderConfig::new().with_reference_year(2026));
        vec![
            decoder.decode("1HGCM82633A004352").unwrap(),
            decoder.decode("0AB00000000000000").unwrap(),
        ]
    }

    #[test]
    fn test_text_report() {
        let text = render_text(&records());
        assert!(text.contains("vin:         1HGCM82633A004352"));
        assert!(text.contains("modelYear:   2003"));
        assert!(text.contains("region:      -"));
        assert_eq!(text.matches("\n\n").count(), 1);
    }

    #[test]
    fn test_json_report() {
        let rendered = render_json(&records()).unwrap();
        let json: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        let items = json.as_array().unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0]["manufacturer"], "Honda USA");
        assert_eq!(items[1]["region"], serde_json::Value::Null);
    }
}
