//! # vies-address
//!
//! Splits the free-text addresses returned by the EU VAT Information
//! Exchange System (VIES) into street, postal code and city.
//!
//! VIES formats addresses per member state: the number of lines, the
//! separators and the field order differ from country to country. Greek
//! addresses come back in Greek script and are transliterated into Latin
//! characters by default.
//!
//! ## Quick Start
//!
//! ```rust
//! use vies_address::{ParseConfig, parse_address, parse_address_with};
//!
//! let addr = parse_address("NL", "Hoofdstraat 1\n1234 Amsterdam").unwrap();
//! assert_eq!(addr.street, "Hoofdstraat 1");
//! assert_eq!(addr.zip, "1234");
//! assert_eq!(addr.city, "Amsterdam");
//!
//! let addr = parse_address("EL", "ΕΡΜΟΥ 10\n10563 - ΑΘΗΝΑ").unwrap();
//! assert_eq!(addr.city, "athina");
//!
//! let keep = ParseConfig::default().ignore_greek(true);
//! let addr = parse_address_with("EL", "ΕΡΜΟΥ 10\n10563 - ΑΘΗΝΑ", &keep).unwrap();
//! assert_eq!(addr.city, "ΑΘΗΝΑ");
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | Address splitter and Greek transliteration |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "core")]
pub mod greek;

#[cfg(feature = "core")]
mod parser;

// Re-export the parsing API at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
#[cfg(feature = "core")]
pub use crate::parser::{
    must_parse_address, must_parse_address_with, parse_address, parse_address_with,
};
