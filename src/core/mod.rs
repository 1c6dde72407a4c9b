//! Core types: country codes, parse results, configuration and errors.

mod countries;
mod error;
mod types;

pub use countries::{CountryCode, SUPPORTED_COUNTRY_CODES, is_supported_country_code};
pub use error::AddressError;
pub use types::{ParseConfig, ParsedAddress};
