//! Decoding helpers for OMDb's stringly-typed response fields.
//!
//! OMDb returns every data field as a string and uses the literal `"N/A"`
//! for anything it has no value for. These helpers turn that convention
//! into proper optional values.

/// Drop empty and `"N/A"` placeholder values.
pub fn non_placeholder(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty() && v != "N/A")
}

/// Parse a year field.
///
/// Series entries report ranges like `"1999-2003"`; the leading year is
/// what the catalog stores.
pub fn parse_year(value: Option<&str>) -> Option<i32> {
    let value = value?.trim();
    let leading: String = value.chars().take_while(char::is_ascii_digit).collect();
    leading.parse().ok()
}

/// Parse a rating field into a 0-10 float.
pub fn parse_rating(value: Option<&str>) -> Option<f64> {
    let value = value?.trim();
    if value == "N/A" {
        return None;
    }
    value.parse().ok()
}
