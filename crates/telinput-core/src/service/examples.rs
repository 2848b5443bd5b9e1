//! Example national numbers used for input placeholders, keyed by iso2.
//! Mirrors the mobile example data shipped with libphonenumber.

pub(super) const EXAMPLE_NUMBERS: &[(&str, &str)] = &[
    ("ae", "501234567"),
    ("ar", "91123456789"),
    ("at", "664123456"),
    ("au", "412345678"),
    ("be", "470123456"),
    ("br", "11961234567"),
    ("ca", "5062345678"),
    ("ch", "781234567"),
    ("cl", "961234567"),
    ("cn", "13123456789"),
    ("co", "3211234567"),
    ("cz", "601123456"),
    ("de", "15123456789"),
    ("dk", "32123456"),
    ("eg", "1001234567"),
    ("es", "612345678"),
    ("fi", "412345678"),
    ("fr", "612345678"),
    ("gb", "7400123456"),
    ("gr", "6912345678"),
    ("hk", "51234567"),
    ("hu", "201234567"),
    ("id", "812345678"),
    ("ie", "850123456"),
    ("il", "502345678"),
    ("in", "8123456789"),
    ("it", "3123456789"),
    ("jp", "9012345678"),
    ("ke", "712123456"),
    ("kr", "1020000000"),
    ("ma", "650123456"),
    ("mx", "2221234567"),
    ("my", "123456789"),
    ("ng", "8021234567"),
    ("nl", "612345678"),
    ("no", "40612345"),
    ("nz", "211234567"),
    ("pe", "912345678"),
    ("ph", "9051234567"),
    ("pl", "512345678"),
    ("pt", "912345678"),
    ("ro", "712034567"),
    ("ru", "9123456789"),
    ("sa", "512345678"),
    ("se", "701234567"),
    ("sg", "81234567"),
    ("th", "812345678"),
    ("tr", "5012345678"),
    ("ua", "501234567"),
    ("us", "2015550123"),
    ("vn", "912345678"),
    ("za", "711234567"),
];
