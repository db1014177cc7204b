//! Static search form submitted once per region.

/// Province-level region codes, `01` (Seoul) through `17` (Sejong).
pub const REGION_CODES: [&str; 17] = [
    "01", "02", "03", "04", "05", "06", "07", "08", "09", "10", "11", "12", "13", "14", "15",
    "16", "17",
];

/// Map centre sent with every search (Seoul City Hall).
pub const CENTER_LAT: &str = "37.56682";
pub const CENTER_LNG: &str = "126.97865";

/// Upper bound on rows the endpoint returns for one search.
pub const RESULT_CAP: &str = "1000";

/// Category and amenity filter flags; all disabled.
const DISABLED_FILTERS: [&str; 27] = [
    "all_store", "T03", "T01", "T27", "T12", "T09", "T30", "T05", "T22", "T21", "T36", "T43",
    "Z9999", "T64", "T66", "P02", "P10", "P50", "P20", "P60", "P30", "P70", "P40", "P80",
    "whcroad_yn", "P90", "P01",
];

/// Builds the URL-encoded form body for one region, in field order.
#[must_use]
pub fn search_form(region_code: &str) -> Vec<(&'static str, String)> {
    let mut form: Vec<(&'static str, String)> = vec![
        ("in_biz_cds", "0".into()),
        ("in_scodes", "0".into()),
        ("ins_lat", CENTER_LAT.into()),
        ("ins_lng", CENTER_LNG.into()),
        ("search_text", String::new()),
        ("p_sido_cd", region_code.to_owned()),
        ("p_gugun_cd", String::new()),
        ("isError", "true".into()),
        ("in_distance", "0".into()),
        ("in_biz_cd", String::new()),
        ("iend", RESULT_CAP.into()),
        ("searchType", "C".into()),
        ("set_date", String::new()),
        ("rndCod", "9QQ7ILZT2H".into()),
    ];
    form.extend(DISABLED_FILTERS.iter().map(|flag| (*flag, "0".to_owned())));
    form.push(("new_bool", "0".into()));
    form
}
