//! Shipped region and country tables
//!
//! Country keys list every second-WMI character they cover, in the standard
//! order `A-Z` (without `I`, `O`, `Q`) then `1-9` then `0`. Entries are
//! matched first to last, so the order of each country list matters.

/// (first WMI character, region name, [(second-character set, country)])
pub(crate) type RegionRow = (char, &'static str, &'static [(&'static str, &'static str)]);

const AFRICA: &str = "Africa";
const ASIA: &str = "Asia";
const EUROPE: &str = "Europe";
const NORTH_AMERICA: &str = "North America";
const OCEANIA: &str = "Oceania";
const SOUTH_AMERICA: &str = "South America";

const ALL: &str = "ABCDEFGHJKLMNPRSTUVWXYZ1234567890";

pub(crate) const REGIONS: &[RegionRow] = &[
    // Africa
    ('A', AFRICA, &[("ABCDEFGH", "South Africa"), ("JKLMN", "Ivory Coast")]),
    ('B', AFRICA, &[("ABCDE", "Angola"), ("FGHJK", "Kenya"), ("LMNPR", "Tanzania")]),
    ('C', AFRICA, &[("ABCDE", "Benin"), ("FGHJK", "Madagascar"), ("LMNPR", "Tunisia")]),
    ('D', AFRICA, &[("ABCDE", "Egypt"), ("FGHJK", "Morocco"), ("LMNPR", "Zambia")]),
    ('E', AFRICA, &[("ABCDE", "Ethiopia"), ("FGHJK", "Mozambique")]),
    ('F', AFRICA, &[("ABCDE", "Ghana"), ("FGHJK", "Nigeria")]),
    ('G', AFRICA, &[]),
    ('H', AFRICA, &[]),
    // Asia
    ('J', ASIA, &[(ALL, "Japan")]),
    (
        'K',
        ASIA,
        &[
            ("ABCDE", "Sri Lanka"),
            ("FGHJK", "Israel"),
            ("LMNPR", "South Korea"),
            ("STUVWXYZ1234567890", "Kazakhstan"),
        ],
    ),
    ('L', ASIA, &[(ALL, "China")]),
    (
        'M',
        ASIA,
        &[
            ("ABCDE", "India"),
            ("FGHJK", "Indonesia"),
            ("LMNPR", "Thailand"),
            ("STUVWXYZ1234567890", "Myanmar"),
        ],
    ),
    ('N', ASIA, &[("ABCDE", "Iran"), ("FGHJK", "Pakistan"), ("LMNPR", "Turkey")]),
    ('P', ASIA, &[("ABCDE", "Philippines"), ("FGHJK", "Singapore"), ("LMNPR", "Malaysia")]),
    (
        'R',
        ASIA,
        &[
            ("ABCDE", "United Arab Emirates"),
            ("FGHJK", "Taiwan"),
            ("LMNPR", "Vietnam"),
            ("STUVWXYZ1234567890", "Saudi Arabia"),
        ],
    ),
    // Europe
    (
        'S',
        EUROPE,
        &[
            ("ABCDEFGHJKLM", "United Kingdom"),
            ("NPRST", "Germany"),
            ("UVWXYZ", "Poland"),
            ("1234", "Latvia"),
        ],
    ),
    (
        'T',
        EUROPE,
        &[
            ("ABCDEFGH", "Switzerland"),
            ("JKLMNP", "Czech Republic"),
            ("RSTUV", "Hungary"),
            ("WXYZ1", "Portugal"),
        ],
    ),
    (
        'U',
        EUROPE,
        &[
            ("HJKLM", "Denmark"),
            ("NPRST", "Ireland"),
            ("UVWXYZ", "Romania"),
            ("567", "Slovakia"),
        ],
    ),
    (
        'V',
        EUROPE,
        &[
            ("ABCDE", "Austria"),
            ("FGHJKLMNPR", "France"),
            ("STUVW", "Spain"),
            ("XYZ12", "Serbia"),
            ("345", "Croatia"),
            ("67890", "Estonia"),
        ],
    ),
    ('W', EUROPE, &[(ALL, "Germany")]),
    (
        'X',
        EUROPE,
        &[
            ("ABCDE", "Bulgaria"),
            ("FGHJK", "Greece"),
            ("LMNPR", "Netherlands"),
            ("STUVW", "Russia"),
            ("XYZ12", "Luxembourg"),
            ("34567890", "Russia"),
        ],
    ),
    (
        'Y',
        EUROPE,
        &[
            ("ABCDE", "Belgium"),
            ("FGHJK", "Finland"),
            ("LMNPR", "Malta"),
            ("STUVW", "Sweden"),
            ("XYZ12", "Norway"),
            ("345", "Belarus"),
            ("67890", "Ukraine"),
        ],
    ),
    (
        'Z',
        EUROPE,
        &[("ABCDEFGHJKLMNPR", "Italy"), ("XYZ12", "Slovenia"), ("345", "Lithuania")],
    ),
    // North America
    ('1', NORTH_AMERICA, &[(ALL, "United States")]),
    ('2', NORTH_AMERICA, &[("ABCDEFGHJKLMNPRSTUVW", "Canada")]),
    (
        '3',
        NORTH_AMERICA,
        &[
            ("ABCDEFGHJKLMNPRSTUVW", "Mexico"),
            ("XYZ1234567", "Costa Rica"),
            ("890", "Cayman Islands"),
        ],
    ),
    ('4', NORTH_AMERICA, &[(ALL, "United States")]),
    ('5', NORTH_AMERICA, &[(ALL, "United States")]),
    // Oceania
    ('6', OCEANIA, &[("ABCDEFGHJKLMNPRSTUVW", "Australia")]),
    ('7', OCEANIA, &[("ABCDE", "New Zealand")]),
    // South America
    (
        '8',
        SOUTH_AMERICA,
        &[
            ("ABCDE", "Argentina"),
            ("FGHJK", "Chile"),
            ("LMNPR", "Ecuador"),
            ("STUVW", "Peru"),
            ("XYZ12", "Venezuela"),
        ],
    ),
    (
        '9',
        SOUTH_AMERICA,
        &[
            ("ABCDE", "Brazil"),
            ("FGHJK", "Colombia"),
            ("LMNPR", "Paraguay"),
            ("STUVW", "Uruguay"),
            ("XYZ12", "Trinidad & Tobago"),
            ("3456789", "Brazil"),
        ],
    ),
];
