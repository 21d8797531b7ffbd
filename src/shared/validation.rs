use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Loose email shape: something@something.something
    /// - Valid: "kigali@rra.gov.rw", "a@b.co"
    /// - Invalid: "kigali@rra", "@rra.gov.rw", "kigali rra@gov.rw"
    pub static ref EMAIL_REGEX: Regex = Regex::new(r"^\S+@\S+\.\S+$").unwrap();

    /// Rwandan mobile number after whitespace has been stripped
    /// - Valid: "+250788123456"
    /// - Invalid: "0788123456", "+25078812345", "+2507881234567"
    pub static ref PHONE_REGEX: Regex = Regex::new(r"^\+250\d{9}$").unwrap();

    /// Geography identifiers must not contain the path separator or whitespace
    /// - Valid: "kigali", "nyarugenge", "east_1"
    /// - Invalid: "kigali-city", "", "north ern"
    pub static ref JURISDICTION_ID_REGEX: Regex = Regex::new(r"^[^\s\-]+$").unwrap();
}

/// Strips every whitespace character, so "+250 788 123 456" becomes "+250788123456".
pub fn normalize_phone(raw: &str) -> String {
    raw.chars().filter(|c| !c.is_whitespace()).collect()
}
