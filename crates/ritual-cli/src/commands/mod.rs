pub mod catalog;
pub mod config;
pub mod score;
pub mod streak;

use std::io::Read;
use std::path::Path;

use chrono::NaiveDate;

/// Parse a `YYYY-MM-DD` argument.
pub fn parse_date(value: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|e| format!("invalid date '{value}' (expected YYYY-MM-DD): {e}"))
}

/// Read a file, or stdin when the path is `-`.
pub fn read_input(path: &Path) -> Result<String, Box<dyn std::error::Error>> {
    if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        Ok(buf)
    } else {
        Ok(std::fs::read_to_string(path)?)
    }
}
