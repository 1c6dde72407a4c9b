//! Per-country dispatch table.
//!
//! Every country maps to an ordered list of `(Shape, Rule)` pairs. The first
//! shape that matches the address picks the rule; when none matches, the
//! country's [`Unmatched`] outcome applies.

use tracing::debug;

use crate::core::{AddressError, CountryCode, ParsedAddress};

/// Line that Slovak addresses carry in place of a street and postal line.
const SLOVAK_DOMESTIC_LINE: &str = "Slovensko";

/// Slovak district prefixes removed from the city, in this order.
const SLOVAK_DISTRICT_PREFIXES: [&str; 2] = ["mestská časť ", "m. č. "];

/// Structural condition an address must satisfy for a rule to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Shape {
    /// Exactly this many newlines.
    Newlines(usize),
    /// This many newlines, and the second line is exactly `Slovensko`.
    SlovakDomestic(usize),
}

impl Shape {
    fn matches(self, lines: &[&str]) -> bool {
        match self {
            Self::Newlines(n) => lines.len() == n + 1,
            Self::SlovakDomestic(n) => {
                lines.len() == n + 1 && lines.get(1) == Some(&SLOVAK_DOMESTIC_LINE)
            }
        }
    }
}

/// How street, postal code and city are cut out of a matched address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Rule {
    /// Street on line 1, `ZIP CITY` on line 2.
    StreetThenPostal,
    /// `STREET[, EXTRA], ZIP CITY` on a single line.
    CommaSeparated,
    /// Street on line 1, `ZIP CITY` on the last line, district prefix removed.
    SlovakStreetThenPostal,
    /// No street; `ZIP CITY` on line 1, followed by the `Slovensko` line.
    SlovakDomestic,
    /// Street on line 1, `ZIP... CITY DISTRICT` on the last line.
    CzechPostalLine,
    /// Street, city, then `ZIP... CITY DISTRICT` on three lines.
    CzechCityLine,
    /// Street on line 1, `ZIP - CITY` on line 2.
    GreekPostalLine,
}

/// Outcome when no shape of a country matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Unmatched {
    /// Return an empty address without error.
    Empty,
    /// Fail with [`AddressError::UnsupportedCountryCode`].
    Unsupported,
    /// Fail with [`AddressError::InvalidOption`].
    InvalidOption,
}

/// The rule set of one country.
#[derive(Debug)]
pub(crate) struct CountryRules {
    pub shapes: &'static [(Shape, Rule)],
    pub unmatched: Unmatched,
}

static POSTAL_LINE: CountryRules = CountryRules {
    shapes: &[(Shape::Newlines(1), Rule::StreetThenPostal)],
    unmatched: Unmatched::Empty,
};

static COMMA_SEPARATED: CountryRules = CountryRules {
    shapes: &[(Shape::Newlines(0), Rule::CommaSeparated)],
    unmatched: Unmatched::Empty,
};

static SLOVAK: CountryRules = CountryRules {
    shapes: &[
        (Shape::SlovakDomestic(1), Rule::SlovakDomestic),
        (Shape::Newlines(1), Rule::SlovakStreetThenPostal),
        (Shape::SlovakDomestic(2), Rule::SlovakDomestic),
        (Shape::Newlines(2), Rule::SlovakStreetThenPostal),
    ],
    unmatched: Unmatched::Unsupported,
};

static CZECH: CountryRules = CountryRules {
    shapes: &[
        (Shape::Newlines(1), Rule::CzechPostalLine),
        (Shape::Newlines(2), Rule::CzechCityLine),
    ],
    unmatched: Unmatched::InvalidOption,
};

static GREEK: CountryRules = CountryRules {
    shapes: &[(Shape::Newlines(1), Rule::GreekPostalLine)],
    unmatched: Unmatched::Empty,
};

// PT, IT, RO and EE have no known layout yet.
static NO_RULES: CountryRules = CountryRules {
    shapes: &[],
    unmatched: Unmatched::Empty,
};

/// Look up the rule set of `country`.
pub(crate) fn country_rules(country: CountryCode) -> &'static CountryRules {
    match country {
        CountryCode::NL
        | CountryCode::BE
        | CountryCode::FR
        | CountryCode::FI
        | CountryCode::AT
        | CountryCode::PL
        | CountryCode::DK => &POSTAL_LINE,
        CountryCode::SI | CountryCode::HR => &COMMA_SEPARATED,
        CountryCode::SK => &SLOVAK,
        CountryCode::CZ => &CZECH,
        CountryCode::EL => &GREEK,
        CountryCode::PT | CountryCode::IT | CountryCode::RO | CountryCode::EE => &NO_RULES,
    }
}

/// Split a trimmed, non-empty `address` according to the rules of `country`.
pub(crate) fn split(country: CountryCode, address: &str) -> Result<ParsedAddress, AddressError> {
    let lines: Vec<&str> = address.split('\n').collect();
    let newlines = lines.len() - 1;
    let rules = country_rules(country);

    for &(shape, rule) in rules.shapes {
        if shape.matches(&lines) {
            debug!(%country, newlines, ?rule, "matched address shape");
            return Ok(rule.apply(address, &lines));
        }
    }

    debug!(%country, newlines, outcome = ?rules.unmatched, "no address shape matched");
    match rules.unmatched {
        Unmatched::Empty => Ok(ParsedAddress::default()),
        Unmatched::Unsupported => Err(AddressError::UnsupportedCountryCode),
        Unmatched::InvalidOption => Err(AddressError::InvalidOption),
    }
}

impl Rule {
    /// Extract the fields. `lines` is `address` split on `\n` and already
    /// satisfies the shape this rule is registered under.
    fn apply(self, address: &str, lines: &[&str]) -> ParsedAddress {
        let first = lines.first().copied().unwrap_or_default();
        let last = lines.last().copied().unwrap_or_default();

        match self {
            Self::StreetThenPostal => {
                let postal = lines.get(1).copied().unwrap_or_default();
                ParsedAddress {
                    street: first.trim().to_string(),
                    zip: space_token(postal, 0).trim().to_string(),
                    city: space_token(postal, 1).trim().to_string(),
                }
            }
            Self::CommaSeparated => {
                let parts: Vec<&str> = address.split(',').collect();
                let mut street = parts[0].trim().to_string();
                if parts.len() == 3 {
                    street.push_str(", ");
                    street.push_str(parts[1].trim());
                }
                let postal = parts[parts.len() - 1].trim();
                ParsedAddress {
                    street,
                    zip: space_token(postal, 0).to_string(),
                    city: space_token(postal, 1).to_string(),
                }
            }
            Self::SlovakStreetThenPostal => ParsedAddress {
                street: first.trim().to_string(),
                zip: space_token(last, 0).trim().to_string(),
                city: slovak_city(space_token(last, 1)),
            },
            Self::SlovakDomestic => ParsedAddress {
                street: String::new(),
                zip: space_token(first, 0).trim().to_string(),
                city: slovak_city(space_token(first, 1)),
            },
            Self::CzechPostalLine => {
                let tokens: Vec<&str> = last.trim().split(' ').collect();
                let city = match tokens.len() {
                    n if n >= 2 => tokens[n - 2],
                    _ => "",
                };
                ParsedAddress {
                    street: first.trim().to_string(),
                    zip: czech_zip(&tokens),
                    city: city.trim().to_string(),
                }
            }
            Self::CzechCityLine => {
                let tokens: Vec<&str> = last.trim().split(' ').collect();
                ParsedAddress {
                    street: first.trim().to_string(),
                    zip: czech_zip(&tokens),
                    city: lines.get(1).copied().unwrap_or_default().trim().to_string(),
                }
            }
            Self::GreekPostalLine => {
                let postal = lines.get(1).copied().unwrap_or_default().trim();
                let (zip, rest) = postal
                    .split_once(char::is_whitespace)
                    .unwrap_or((postal, ""));
                let rest = rest.trim();
                let city = rest.strip_prefix('-').unwrap_or(rest);
                ParsedAddress {
                    street: first.trim().to_string(),
                    zip: zip.to_string(),
                    city: city.trim().to_string(),
                }
            }
        }
    }
}

/// The `index`-th piece of `s` split on single spaces, or `""`.
fn space_token(s: &str, index: usize) -> &str {
    s.split(' ').nth(index).unwrap_or_default()
}

/// Czech postal codes are written in two groups (`110 00`). Everything
/// before the trailing city and district tokens is joined without a
/// separator.
fn czech_zip(tokens: &[&str]) -> String {
    let end = tokens.len().saturating_sub(2);
    tokens[..end].concat().trim().to_string()
}

fn slovak_city(raw: &str) -> String {
    let mut city = raw.to_string();
    for prefix in SLOVAK_DISTRICT_PREFIXES {
        city = city.replacen(prefix, "", 1);
    }
    city.trim().to_string()
}
