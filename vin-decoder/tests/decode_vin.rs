// End-to-end decoding against the built-in tables
use vin_decoder::{parse_vin, Decoder, DecoderConfig, ReferenceDatabase, RegionDefinition, VinError};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn decoder_at(year: i32) -> Decoder<'static> {
    Decoder::new().with_config(DecoderConfig::new().with_reference_year(year))
}

#[test]
fn decode_honda_accord() {
    init_logging();
    let record = decoder_at(2026).decode("1HGCM82633A004352").unwrap();

    assert_eq!(record.vin(), "1HGCM82633A004352");
    assert_eq!(record.wmi(), "1HG");
    assert_eq!(record.vds(), "CM8263");
    assert_eq!(record.vis(), "3A004352");
    assert_eq!(record.region(), Some("North America"));
    assert_eq!(record.country(), Some("United States"));
    assert_eq!(record.manufacturer(), Some("Honda USA"));
    assert_eq!(record.model_years(), &[2003]);
}

#[test]
fn decode_with_wall_clock() {
    let record = parse_vin("1HGCM82633A004352").unwrap();
    assert!(record.model_years().contains(&2003));
}

#[test]
fn segments_reconstruct_vin() {
    let decoder = decoder_at(2026);
    let vins = ["1HGCM82633A004352", "WVWZZZ1JZXW000001", "JTHBK1GG0D2000000", "00000000000000000"];
    for vin in vins {
        let record = decoder.decode(vin).unwrap();
        assert_eq!(format!("{}{}{}", record.wmi(), record.vds(), record.vis()), vin);
        assert_eq!(record.to_string(), vin);
    }
}

#[test]
fn rejects_malformed_input() {
    let cases = [
        "invalidvin12345",
        "IO1234567890ABCDE",
        "1HGCM82633A00435Q",
        "1HGCM82633A00435",
        "1HGCM82633A0043521",
        " 1HGCM82633A00435",
        "1HG-CM82633A00435",
        "",
        // Non-ASCII letters whose Unicode uppercase is ASCII
        "1HGCM82633A00435\u{17F}",
        "1HGCM82633A0043\u{DF}",
    ];
    for raw in cases {
        assert_eq!(parse_vin(raw), Err(VinError::InvalidFormat(raw.to_string())), "{raw:?}");
    }
}

#[test]
fn lowercase_equals_uppercase() {
    let decoder = decoder_at(2026);
    let lower = decoder.decode("1hgcm82633a004352").unwrap();
    let upper = decoder.decode("1HGCM82633A004352").unwrap();
    assert_eq!(lower, upper);
    assert_eq!(lower.vin(), "1HGCM82633A004352");
}

#[test]
fn decoding_is_repeatable() {
    let decoder = decoder_at(2026);
    let first = decoder.decode("WVWZZZ1JZXW000001").unwrap();
    let second = decoder.decode("WVWZZZ1JZXW000001").unwrap();
    assert_eq!(first, second);
    assert_eq!(first.export(), second.export());
}

#[test]
fn manufacturer_exact_match_beats_prefix() {
    let decoder = decoder_at(2026);
    assert_eq!(decoder.decode("JTHBK1GG0D2000000").unwrap().manufacturer(), Some("Lexus"));
    assert_eq!(decoder.decode("JTDBR32E830000000").unwrap().manufacturer(), Some("Toyota"));
    // No entry for the WMI nor its prefix
    assert_eq!(decoder.decode("00000000000000000").unwrap().manufacturer(), None);
}

#[test]
fn country_follows_table_order() {
    let decoder = decoder_at(2026);
    // 'X': "STUVW" Russia comes before "XYZ12" Luxembourg, and "34567890" maps to Russia again
    assert_eq!(decoder.decode("XTA21099000000000").unwrap().country(), Some("Russia"));
    assert_eq!(decoder.decode("XX000000000000000").unwrap().country(), Some("Luxembourg"));
    assert_eq!(decoder.decode("X3000000000000000").unwrap().country(), Some("Russia"));
    // Region without any country entry
    let record = decoder.decode("G0000000000000000").unwrap();
    assert_eq!(record.region(), Some("Africa"));
    assert_eq!(record.country(), None);
}

#[test]
fn overlapping_custom_countries() {
    let mut db = ReferenceDatabase::new();
    db.add_region(
        RegionDefinition::new('S', "Europe")
            .with_country("ABCDEFGHJKLM", "United Kingdom")
            .with_country("AB", "Shadowed"),
    );
    let record = Decoder::with_database(&db).decode_at("SAL00000000000000", 2026).unwrap();
    assert_eq!(record.country(), Some("United Kingdom"));
}

#[test]
fn unknown_region() {
    let record = decoder_at(2026).decode("0AB00000000000000").unwrap();
    assert_eq!(record.region(), None);
    assert_eq!(record.country(), None);
}

#[test]
fn model_year_cycle() {
    // 'A' = 1980 and 2010
    assert_eq!(decoder_at(2026).decode("WVWZZZ1JZAW000001").unwrap().model_years(), &[1980, 2010]);
    assert_eq!(decoder_at(2008).decode("WVWZZZ1JZAW000001").unwrap().model_years(), &[1980]);
    // 2010 is next year for 2009
    assert_eq!(decoder_at(2009).decode("WVWZZZ1JZAW000001").unwrap().model_years(), &[1980, 2010]);
    assert_eq!(decoder_at(2008).decode("WVWZZZ1JZ1W000001").unwrap().model_years(), &[2001]);
    // 'V' = 1997 and 2027
    assert_eq!(decoder_at(2026).decode("WVWZZZ1JZVW000001").unwrap().model_years(), &[1997, 2027]);
    assert_eq!(decoder_at(2025).decode("WVWZZZ1JZVW000001").unwrap().model_years(), &[1997]);
}

#[test]
fn model_year_zero_has_no_code() {
    let record = decoder_at(2026).decode("WVWZZZ1JZ0W000001").unwrap();
    assert!(record.model_years().is_empty());
}

#[test]
fn export_keys() {
    let record = decoder_at(2026).decode("1HGCM82633A004352").unwrap();
    let json = serde_json::to_value(record.export()).unwrap();

    let mut keys: Vec<_> = json.as_object().unwrap().keys().cloned().collect();
    keys.sort();
    assert_eq!(
        keys,
        vec!["country", "manufacturer", "modelYear", "region", "vds", "vin", "vis", "wmi"]
    );
    assert_eq!(json["modelYear"], serde_json::json!([2003]));
    assert_eq!(json["vin"], "1HGCM82633A004352");
}
