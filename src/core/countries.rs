//! Country codes for which VIES addresses can be parsed.
//!
//! VIES uses the EU VAT prefixes rather than ISO 3166-1, so Greece is `EL`
//! and not `GR`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::AddressError;

/// A supported VIES member-state prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CountryCode {
    /// Czechia
    CZ,
    /// Slovakia
    SK,
    /// Netherlands
    NL,
    /// Belgium
    BE,
    /// France
    FR,
    /// Portugal
    PT,
    /// Italy
    IT,
    /// Finland
    FI,
    /// Romania
    RO,
    /// Slovenia
    SI,
    /// Austria
    AT,
    /// Poland
    PL,
    /// Croatia
    HR,
    /// Greece
    EL,
    /// Denmark
    DK,
    /// Estonia
    EE,
}

/// The supported country codes as plain strings, in [`CountryCode::ALL`] order.
pub static SUPPORTED_COUNTRY_CODES: &[&str] = &CODE_STRINGS;

const CODE_STRINGS: [&str; CountryCode::ALL.len()] = {
    let mut out = [""; CountryCode::ALL.len()];
    let mut i = 0;
    while i < out.len() {
        out[i] = CountryCode::ALL[i].as_str();
        i += 1;
    }
    out
};

impl CountryCode {
    /// Every supported country code.
    pub const ALL: [CountryCode; 16] = [
        Self::CZ,
        Self::SK,
        Self::NL,
        Self::BE,
        Self::FR,
        Self::PT,
        Self::IT,
        Self::FI,
        Self::RO,
        Self::SI,
        Self::AT,
        Self::PL,
        Self::HR,
        Self::EL,
        Self::DK,
        Self::EE,
    ];

    /// The two-letter VIES prefix.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CZ => "CZ",
            Self::SK => "SK",
            Self::NL => "NL",
            Self::BE => "BE",
            Self::FR => "FR",
            Self::PT => "PT",
            Self::IT => "IT",
            Self::FI => "FI",
            Self::RO => "RO",
            Self::SI => "SI",
            Self::AT => "AT",
            Self::PL => "PL",
            Self::HR => "HR",
            Self::EL => "EL",
            Self::DK => "DK",
            Self::EE => "EE",
        }
    }

    /// Whether VIES returns this country's addresses in Greek script.
    pub fn uses_greek_script(self) -> bool {
        self == Self::EL
    }
}

impl fmt::Display for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CountryCode {
    type Err = AddressError;

    /// Exact, case-sensitive match. Callers trim beforehand.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|code| code.as_str() == s)
            .ok_or(AddressError::UnsupportedCountryCode)
    }
}

/// Check whether `code` is a supported VIES country code.
pub fn is_supported_country_code(code: &str) -> bool {
    SUPPORTED_COUNTRY_CODES.contains(&code)
}
