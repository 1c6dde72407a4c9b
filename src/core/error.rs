use thiserror::Error;

/// Errors returned when a VIES address cannot be parsed.
///
/// All variants describe a problem with the caller's input. Parsing is
/// deterministic, so retrying with the same input never succeeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum AddressError {
    /// The country code was empty after trimming.
    #[error("missing country code")]
    MissingCountryCode,

    /// The address text was empty after trimming.
    #[error("missing address")]
    MissingAddress,

    /// The country code is not one of [`SUPPORTED_COUNTRY_CODES`](crate::SUPPORTED_COUNTRY_CODES).
    #[error("unsupported country code")]
    UnsupportedCountryCode,

    /// The address does not have a line layout the country's rule understands.
    #[error("invalid option")]
    InvalidOption,
}
