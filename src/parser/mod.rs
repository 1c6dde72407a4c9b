//! Splitting raw VIES addresses into street, postal code and city.
//!
//! VIES returns the registered address of a business as free text whose
//! layout depends on the member state. The splitter picks a rule from the
//! country code and the number of lines, then cuts the fields out.
//!
//! # Example
//!
//! ```
//! use vies_address::parse_address;
//!
//! let addr = parse_address("SI", "Neka ulica 5, 1000 Ljubljana").unwrap();
//! assert_eq!(addr.street, "Neka ulica 5");
//! assert_eq!(addr.zip, "1000");
//! assert_eq!(addr.city, "Ljubljana");
//! ```

mod rules;

use tracing::trace;

use crate::core::{AddressError, CountryCode, ParseConfig, ParsedAddress};
use crate::greek::transliterate;

/// Parse a VIES address with the default [`ParseConfig`].
///
/// # Errors
///
/// See [`parse_address_with`].
pub fn parse_address(country_code: &str, address: &str) -> Result<ParsedAddress, AddressError> {
    parse_address_with(country_code, address, &ParseConfig::default())
}

/// Parse a VIES address.
///
/// Both inputs are trimmed first. `EL` addresses are transliterated into
/// Latin script unless `config.ignore_greek` is set.
///
/// Countries without a rule for the given layout (PT, IT, RO, EE, and
/// unexpected line counts for most others) yield an empty [`ParsedAddress`]
/// rather than an error.
///
/// # Errors
///
/// - [`AddressError::MissingCountryCode`] if `country_code` is blank
/// - [`AddressError::MissingAddress`] if `address` is blank
/// - [`AddressError::UnsupportedCountryCode`] if the code is not supported,
///   or an SK address has neither two nor three lines
/// - [`AddressError::InvalidOption`] if a CZ address has neither two nor
///   three lines
pub fn parse_address_with(
    country_code: &str,
    address: &str,
    config: &ParseConfig,
) -> Result<ParsedAddress, AddressError> {
    let (country, address) = validate_input(country_code, address)?;
    let mut parsed = rules::split(country, address)?;

    if country.uses_greek_script() && !config.ignore_greek {
        trace!(%country, "transliterating Greek address");
        parsed.street = transliterate(&parsed.street).into_owned();
        parsed.city = transliterate(&parsed.city).into_owned();
        parsed.zip = transliterate(&parsed.zip).into_owned();
    }

    Ok(parsed)
}

/// Like [`parse_address`], but panics when the address cannot be parsed.
///
/// # Panics
///
/// On any [`AddressError`].
#[track_caller]
pub fn must_parse_address(country_code: &str, address: &str) -> ParsedAddress {
    must_parse_address_with(country_code, address, &ParseConfig::default())
}

/// Like [`parse_address_with`], but panics when the address cannot be parsed.
///
/// # Panics
///
/// On any [`AddressError`].
#[track_caller]
pub fn must_parse_address_with(
    country_code: &str,
    address: &str,
    config: &ParseConfig,
) -> ParsedAddress {
    match parse_address_with(country_code, address, config) {
        Ok(parsed) => parsed,
        Err(e) => panic!("cannot parse VIES address for {:?}: {e}", country_code.trim()),
    }
}

fn validate_input<'a>(
    country_code: &str,
    address: &'a str,
) -> Result<(CountryCode, &'a str), AddressError> {
    let country_code = country_code.trim();
    let address = address.trim();

    if country_code.is_empty() {
        return Err(AddressError::MissingCountryCode);
    }
    if address.is_empty() {
        return Err(AddressError::MissingAddress);
    }
    let country = country_code.parse::<CountryCode>()?;

    Ok((country, address))
}
