use serde::{Deserialize, Serialize};

/// An address split into its street, postal code and city.
///
/// Each field holds whatever the matching country rule extracted. Fields may
/// be empty: SK addresses with a trailing `Slovensko` line carry no street,
/// and countries without a rule yield an entirely empty value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedAddress {
    /// Street and house number.
    pub street: String,
    /// City or municipality.
    pub city: String,
    /// Postal code.
    pub zip: String,
}

impl ParsedAddress {
    /// True when no field was extracted.
    pub fn is_empty(&self) -> bool {
        self.street.is_empty() && self.city.is_empty() && self.zip.is_empty()
    }
}

/// Options for [`parse_address_with`](crate::parse_address_with).
///
/// Deserializes from a partial object, so a host application can embed it
/// in its own configuration file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseConfig {
    /// Keep Greek script as returned by VIES instead of transliterating `EL`
    /// addresses into Latin characters.
    pub ignore_greek: bool,
}

impl ParseConfig {
    /// Set whether Greek transliteration is skipped.
    pub fn ignore_greek(mut self, ignore: bool) -> Self {
        self.ignore_greek = ignore;
        self
    }
}
